use yew::prelude::*;

use crate::data::skills::{skill_style, MARQUEE};

fn skill_chip(skill: &'static str) -> Html {
    let (label, color) = skill_style(skill)
        .map(|style| (style.label, style.color))
        .unwrap_or((skill, "var(--text-color)"));
    html! {
        <div class="skill-chip" style={format!("--skill-color: {}", color)}>
            <span class="skill-dot"></span>
            <span class="skill-label">{label}</span>
        </div>
    }
}

/// Infinite marquee; the list is rendered twice so the CSS loop is seamless.
#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id="skills" class="skills">
            <h2 class="section-title gradient-text">{"Tecnologías"}</h2>
            <div class="skills-marquee" aria-label="Tecnologías que usamos">
                <div class="skills-track">
                    { for MARQUEE.iter().chain(MARQUEE.iter()).map(|skill| skill_chip(skill)) }
                </div>
            </div>
        </section>
    }
}
