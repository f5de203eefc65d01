use chrono::{Datelike, NaiveDate};

#[derive(Clone, Debug, PartialEq)]
pub struct BlogPost {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Trusted HTML authored in this file.
    pub content: &'static str,
    pub author: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub published: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

const MONTHS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

impl BlogPost {
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published, "%Y-%m-%d").ok()
    }

    /// `10 Jul 2025` style date, falling back to the raw value.
    pub fn display_date(&self) -> String {
        match self.published_on() {
            Some(date) => format!("{} {} {}", date.day(), MONTHS[date.month0() as usize], date.year()),
            None => self.published.to_string(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

pub static POSTS: &[BlogPost] = &[
    BlogPost {
        id: 1,
        slug: "ordenando-el-quilombo-clean-arquitecture",
        title: "Clean Architecture: Organizando un poco el quilombo",
        excerpt: "Clean Architecture puede transformar tu forma de desarrollar software, creando aplicaciones mantenibles, escalables y adaptables al cambio.",
        content: r#"
            <h2>¿Por qué te conviene dejar de hacer todo en el mismo archivo?</h2>
            <p>Cuando la lógica de negocio, el acceso a datos y la interfaz viven juntos, cada cambio se vuelve una apuesta. Separar responsabilidades es la forma más barata de que tu app siga siendo tuya dentro de seis meses.</p>
            <h3>1. Separá los tantos</h3>
            <p>El dominio no sabe nada de React ni de la base de datos. Los casos de uso orquestan y los adaptadores traducen entre el mundo exterior y tu dominio.</p>
            <h3>2. Las dependencias apuntan hacia adentro</h3>
            <p>La interfaz depende de los casos de uso, los casos de uso dependen del dominio. Nunca al revés. Así podés cambiar de framework sin reescribir las reglas del negocio.</p>
            <h3>3. Testeá lo que importa</h3>
            <p>Un dominio sin dependencias externas se prueba con tests simples y rápidos. Los detalles de infraestructura se cubren con pocos tests de integración.</p>
        "#,
        author: "Teo Chiappero",
        published: "2025-07-10",
        read_time: "8 min",
        category: "Clean Code",
        image: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=400&h=250&fit=crop",
        tags: &[
            "Clean Architecture",
            "Arquitectura de Software",
            "Patrones de Diseño",
            "Mantenibilidad",
            "Escalabilidad",
        ],
    },
    BlogPost {
        id: 2,
        slug: "container-pattern-estructura",
        title: "Container Pattern: Estructura para tu Frontend",
        excerpt: "Descubrí cómo el Container Pattern puede ayudarte a organizar tu código de forma natural y escalable, sin estructuras rígidas que te compliquen la vida.",
        content: r#"
            <h2>Contenedores y presentacionales</h2>
            <p>Un contenedor busca datos y maneja estado; un componente presentacional recibe props y dibuja. Con esa sola regla tu árbol de componentes se vuelve mucho más fácil de leer.</p>
            <h3>¿Cuándo separar?</h3>
            <p>Cuando un componente empieza a mezclar llamadas a la API con detalles de maquetado, es momento de partirlo en dos.</p>
            <p>Al final del día, lo importante es que tu código sea mantenible y que tu equipo pueda trabajar sin volverse loco.</p>
        "#,
        author: "Teo Chiappero",
        published: "2025-07-18",
        read_time: "5 min",
        category: "Patrones de Diseño",
        image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=400&h=250&fit=crop",
        tags: &[
            "Container Pattern",
            "Arquitectura",
            "Organización de Código",
            "React",
            "Escalabilidad",
        ],
    },
    BlogPost {
        id: 3,
        slug: "el-futuro-del-frontend",
        title: "El Futuro del Frontend: ¿Sigue existiendo el \"frontend\"?",
        excerpt: "La web ya no es lo que era. El desarrollo frontend está atravesando una transformación profunda que mezcla diseño, programación, inteligencia artificial y experiencia de usuario en un solo paquete.",
        content: r#"
            <h2>La web ya no es lo que era. Y eso está bien.</h2>
            <p>Hablar de frontend hace unos años era hablar de HTML, CSS y algo de JavaScript. Hoy el rol abarca rendimiento, accesibilidad, diseño de sistemas y herramientas de IA que escriben parte del código con nosotros.</p>
            <h3>Lo que no cambia</h3>
            <p>Entender al usuario, medir antes de optimizar y cuidar cada milisegundo de carga siguen siendo la base del oficio.</p>
        "#,
        author: "SurCode",
        published: "2025-08-12",
        read_time: "6 min",
        category: "Frontend Development",
        image: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?w=400&h=250&fit=crop",
        tags: &["Frontend", "Web Development", "AI", "Performance", "Future Tech", "UX/UI"],
    },
    BlogPost {
        id: 4,
        slug: "mobile-first",
        title: "Mobile First: Por qué el celular se comió la PC",
        excerpt: "Descubrí cómo el uso móvil superó a la PC y por qué el responsive design ya no es opcional para tu proyecto web.",
        content: r#"
            <h2>¿Cuándo fue la última vez que usaste una PC?</h2>
            <p>La mayoría de las visitas a un sitio llegan desde un celular. Diseñar primero para pantallas chicas obliga a priorizar el contenido y deja la versión de escritorio como una mejora progresiva.</p>
            <p>El mundo cambió. Tu desarrollo web también tiene que cambiar. Mobile-first no es una tendencia, es la nueva realidad.</p>
        "#,
        author: "Teo Chiappero",
        published: "2025-07-25",
        read_time: "7 min",
        category: "Responsive Design",
        image: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=400&h=250&fit=crop",
        tags: &["Mobile First", "Responsive Design", "UX/UI", "Performance", "Web Development"],
    },
];

pub fn post_by_slug(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.slug == slug)
}

/// Other posts sharing at least one tag with `post`, most shared tags first.
pub fn related(post: &BlogPost, count: usize) -> Vec<&'static BlogPost> {
    let mut scored: Vec<(usize, &'static BlogPost)> = POSTS
        .iter()
        .filter(|other| other.slug != post.slug)
        .map(|other| (post.tags.iter().filter(|tag| other.has_tag(tag)).count(), other))
        .filter(|(shared, _)| *shared > 0)
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.id.cmp(&b.1.id)));
    scored.into_iter().take(count).map(|(_, other)| other).collect()
}

/// Newest posts first.
pub fn latest(count: usize) -> Vec<&'static BlogPost> {
    let mut posts: Vec<_> = POSTS.iter().collect();
    posts.sort_by(|a, b| b.published_on().cmp(&a.published_on()));
    posts.truncate(count);
    posts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_unique_and_dates_parse() {
        for (i, post) in POSTS.iter().enumerate() {
            assert!(post.published_on().is_some(), "{}", post.slug);
            assert!(POSTS[i + 1..].iter().all(|other| other.slug != post.slug));
        }
    }

    #[test]
    fn finds_posts_by_slug() {
        assert_eq!(post_by_slug("mobile-first").map(|p| p.id), Some(4));
        assert!(post_by_slug("no-existe").is_none());
    }

    #[test]
    fn latest_orders_by_date() {
        let ids: Vec<u32> = latest(3).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4, 2]);
    }

    #[test]
    fn displays_spanish_month() {
        assert_eq!(POSTS[2].display_date(), "12 Ago 2025");
    }

    #[test]
    fn tags_match_ignoring_case() {
        assert!(POSTS[2].has_tag("performance"));
        assert!(!POSTS[0].has_tag("react"));
    }

    #[test]
    fn related_posts_rank_by_shared_tags() {
        let mobile = post_by_slug("mobile-first").unwrap();
        let ids: Vec<u32> = related(mobile, 3).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);

        let clean = post_by_slug("ordenando-el-quilombo-clean-arquitecture").unwrap();
        let ids: Vec<u32> = related(clean, 3).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
