#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tech {
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    /// Small mark shown in the logo bubbles.
    pub logo: &'static str,
    pub url: Option<&'static str>,
    pub techs: &'static [Tech],
}

const REACT: Tech = Tech {
    name: "React.js",
    color: "#61DBFB",
};
const WORDPRESS: Tech = Tech {
    name: "WordPress",
    color: "#21759B",
};
const NODE: Tech = Tech {
    name: "Node.js",
    color: "#3C873A",
};
const MYSQL: Tech = Tech {
    name: "MySQL",
    color: "#00758F",
};

pub static PROJECTS: &[Project] = &[
    Project {
        title: "Vinotipia",
        description: "E-commerce de vinos con catálogo dinámico, pagos seguros y panel de administración para productos y ventas.",
        image: "/portfolio/vinotipia.png",
        logo: "/portfolio/vinoLogo.png",
        url: Some("https://vinotipia.com"),
        techs: &[REACT, WORDPRESS],
    },
    Project {
        title: "Joycof Make-Up",
        description: "Sitio a medida para una maquilladora profesional, con portfolio, servicios y contacto administrables desde WordPress.",
        image: "/portfolio/Joycof.png",
        logo: "/portfolio/JoyLogo.png",
        url: Some("https://joycofmakeup.com/"),
        techs: &[
            WORDPRESS,
            Tech {
                name: "CSS3",
                color: "#264de4",
            },
        ],
    },
    Project {
        title: "NhEstetica",
        description: "Sitio para un centro de estética con turnos online, galería de resultados y testimonios.",
        image: "/portfolio/nh.png",
        logo: "/portfolio/NhLogo.png",
        url: Some("http://ugks4ckw4gcoc4g8g000sgcw.31.97.83.15.sslip.io/"),
        techs: &[REACT, NODE, MYSQL],
    },
    Project {
        title: "Sistema Aéreo de Detección Argentino",
        description: "S.A.D.A centraliza la detección y gestión de avistamientos de aeronaves no autorizadas con protocolos seguros y una arquitectura escalable.",
        image: "/portfolio/sada.png",
        logo: "/portfolio/LogoSADA.svg",
        url: None,
        techs: &[
            NODE,
            Tech {
                name: "JavaScript",
                color: "#F7DF1E",
            },
            MYSQL,
            Tech {
                name: "Express",
                color: "#00758F",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_has_techs() {
        assert_eq!(PROJECTS.len(), 4);
        assert!(PROJECTS.iter().all(|p| !p.techs.is_empty()));
        assert_eq!(PROJECTS.iter().filter(|p| p.url.is_none()).count(), 1);
    }

    #[test]
    fn every_project_has_its_own_logo() {
        let mut logos: Vec<&str> = PROJECTS.iter().map(|p| p.logo).collect();
        assert!(logos.iter().all(|logo| logo.starts_with("/portfolio/")));
        logos.dedup();
        assert_eq!(logos.len(), PROJECTS.len());
    }
}
