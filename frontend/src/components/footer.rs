use chrono::{Datelike, Utc};
use yew::prelude::*;

/// In-page anchors shared by the header and the footer.
pub static SECTION_LINKS: &[(&str, &str)] = &[
    ("#hero", "Inicio"),
    ("#servicios", "Servicios"),
    ("#portfolio", "Proyectos"),
    ("#team", "Equipo"),
    ("#blog", "Blog"),
    ("#contact", "Contacto"),
];

static SOCIAL_LINKS: &[(&str, &str)] = &[
    ("https://instagram.com/surcode", "Instagram"),
    ("https://github.com/surcode", "GitHub"),
    ("mailto:info@surcode.com", "Email"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();
    html! {
        <footer class="footer">
            <div class="footer-columns">
                <div class="footer-logo">
                    <img src="/logo.png" alt="SurCode" />
                    <p>{"Transformamos ideas en soluciones tecnológicas."}</p>
                </div>
                <nav class="footer-nav">
                    <h4>{"Navegación"}</h4>
                    { for SECTION_LINKS.iter().map(|(href, label)| html! {
                        <a key={*href} href={*href}>{*label}</a>
                    }) }
                </nav>
                <div class="footer-contact">
                    <h4>{"Contacto"}</h4>
                    <a href="mailto:info@surcode.com">{"info@surcode.com"}</a>
                    <span>{"Buenos Aires, Argentina"}</span>
                </div>
                <ul class="footer-social">
                    { for SOCIAL_LINKS.iter().map(|(href, label)| html! {
                        <li key={*href}>
                            <a href={*href} target="_blank" rel="noopener noreferrer" aria-label={*label}>{*label}</a>
                        </li>
                    }) }
                </ul>
            </div>
            <p class="footer-copy">{format!("© {} SurCode. Todos los derechos reservados.", year)}</p>
        </footer>
    }
}
