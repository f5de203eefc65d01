use yew::prelude::*;

use crate::carousel::{use_carousel, CarouselConfig};
use crate::data::skills::skill_style;
use crate::data::team::{Person, PEOPLE};

#[derive(Properties, PartialEq)]
struct PersonCardProps {
    person: &'static Person,
    animating: bool,
    /// Tapping the photo moves on to the next person.
    on_image_click: Callback<MouseEvent>,
}

#[function_component(PersonCard)]
fn person_card(props: &PersonCardProps) -> Html {
    let person = props.person;
    let role = person.role_config();
    let stats = person.stats_or_default();

    html! {
        <article class={classes!("person-card", props.animating.then_some("animating"))}>
            <button class="person-image-button" aria-label="Siguiente integrante" onclick={props.on_image_click.clone()}>
                <img class="person-image" src={person.full_image} alt={person.name} />
            </button>
            <div class="person-info">
                <span class="role-badge" style={format!("color: {}", role.color)}>
                    <span class="role-icon">{role.icon}</span>
                    {format!("{} · {}", person.role, role.level)}
                </span>
                <h3 class="person-name">{person.name}</h3>
                <p class="person-description">{person.description}</p>
                <p class="person-bio">{person.bio_or_default()}</p>
                <div class="person-stats">
                    <div class="stat">
                        <strong>{stats.experience}</strong>
                        <span>{"Años de Experiencia"}</span>
                    </div>
                    <div class="stat">
                        <strong>{stats.projects}</strong>
                        <span>{"Proyectos Completados"}</span>
                    </div>
                </div>
                <div class="person-skills">
                    { for person.skills.iter().map(|skill| {
                        let color = skill_style(skill).map(|s| s.color).unwrap_or("var(--primary-cyan)");
                        html! { <span class="skill-tag" style={format!("--skill-color: {}", color)}>{*skill}</span> }
                    }) }
                </div>
                <div class="person-social">
                    <a href={person.social.github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                    <a href={person.social.linkedin} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                    <a href={person.social.instagram} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                </div>
            </div>
        </article>
    }
}

#[function_component(Team)]
pub fn team() -> Html {
    let carousel = use_carousel(PEOPLE.len(), CarouselConfig::team());
    let view = carousel.view;

    let Some(person) = PEOPLE.get(view.index) else {
        return html! {};
    };

    html! {
        <section id="team" class="team">
            <h2 class="section-title gradient-text">{"Quienes Somos"}</h2>
            <p class="section-subtitle">{"Conoce al equipo detrás de cada proyecto"}</p>
            <div class="person-selector" role="tablist">
                { for PEOPLE.iter().enumerate().map(|(i, p)| {
                    let select = carousel.select.reform(move |_: MouseEvent| i);
                    html! {
                        <button
                            key={i}
                            role="tab"
                            aria-selected={(i == view.index).to_string()}
                            class={classes!("person-thumb", (i == view.index).then_some("active"))}
                            onclick={select}
                        >
                            <img src={p.image} alt={p.nickname} />
                            <span>{p.nickname}</span>
                        </button>
                    }
                }) }
            </div>
            <div aria-live={view.state.aria_live()}>
                <PersonCard
                    key={view.index}
                    {person}
                    animating={view.animating}
                    on_image_click={carousel.next.reform(|_: MouseEvent| ())}
                />
            </div>
        </section>
    }
}
