use stylist::yew::styled_component;
use yew::prelude::*;

use crate::carousel::{use_carousel, CarouselConfig, Direction};
use crate::data::projects::{Project, PROJECTS};

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    html! {
        <article class="project-card">
            <img class="project-image" src={project.image} alt={project.title} loading="lazy" />
            <div class="project-body">
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <div class="project-techs">
                    { for project.techs.iter().map(|tech| html! {
                        <span class="tech-tag" style={format!("border-color: {}", tech.color)}>{tech.name}</span>
                    }) }
                </div>
                {
                    match project.url {
                        Some(url) => html! {
                            <a class="project-link" href={url} target="_blank" rel="noopener noreferrer">
                                {"Ver sitio"}
                            </a>
                        },
                        None => html! { <span class="project-link disabled">{"Proyecto privado"}</span> },
                    }
                }
            </div>
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct LogoBubblesProps {
    active: usize,
    disabled: bool,
    onselect: Callback<usize>,
}

/// Floating project logos; clicking one jumps the carousel to that project.
#[styled_component(LogoBubbles)]
fn logo_bubbles(props: &LogoBubblesProps) -> Html {
    let bubble = css!(
        r#"
        width: 96px;
        height: 96px;
        border-radius: 50%;
        border: 1px solid rgba(102, 211, 250, 0.3);
        background: rgba(255, 255, 255, 0.05);
        display: flex;
        align-items: center;
        justify-content: center;
        cursor: pointer;
        animation: bubble-float 3s ease-in-out infinite;
        transition: transform 0.3s ease, border-color 0.3s ease;

        &:hover, &.active {
            transform: scale(1.08);
            border-color: var(--primary-cyan);
        }

        img {
            max-width: 60%;
            max-height: 60%;
            object-fit: contain;
        }
    "#
    );

    html! {
        <div class={css!(r#"
            display: grid;
            grid-template-columns: repeat(2, 1fr);
            gap: 1.2rem;
            max-width: 260px;
            margin: 2rem auto 0;
        "#)}>
            { for PROJECTS.iter().enumerate().map(|(i, project)| {
                let onclick = props.onselect.reform(move |_: MouseEvent| i);
                html! {
                    <button
                        key={i}
                        class={classes!(bubble.clone(), (i == props.active).then_some("active"))}
                        style={format!("animation-delay: {:.1}s", i as f64 * 0.2)}
                        aria-label={format!("Ver {}", project.title)}
                        disabled={props.disabled}
                        {onclick}
                    >
                        <img src={project.logo} alt={project.title} loading="lazy" />
                    </button>
                }
            }) }
        </div>
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let carousel = use_carousel(PROJECTS.len(), CarouselConfig::portfolio());
    let view = carousel.view;

    let Some(project) = PROJECTS.get(view.index) else {
        return html! {};
    };

    let direction = match view.direction {
        Direction::Forward => "slide-forward",
        Direction::Backward => "slide-backward",
    };
    let prev = carousel.prev.reform(|_: MouseEvent| ());
    let next = carousel.next.reform(|_: MouseEvent| ());

    html! {
        <section id="portfolio" class="portfolio">
            <h2 class="section-title gradient-text">{"Nuestros Proyectos"}</h2>
            <p class="section-subtitle">{"Algunos trabajos de los que estamos orgullosos"}</p>
            <div class="portfolio-stage">
                <button
                    class="nav-arrow prev"
                    aria-label="Proyecto anterior"
                    disabled={view.animating}
                    onclick={prev}
                >
                    {"‹"}
                </button>
                <div
                    class={classes!("portfolio-slide", direction, view.animating.then_some("animating"))}
                    aria-live={view.state.aria_live()}
                >
                    <ProjectCard key={view.index} {project} />
                </div>
                <button
                    class="nav-arrow next"
                    aria-label="Proyecto siguiente"
                    disabled={view.animating}
                    onclick={next}
                >
                    {"›"}
                </button>
            </div>
            <div class="portfolio-dots">
                { for (0..PROJECTS.len()).map(|i| {
                    let select = carousel.select.reform(move |_: MouseEvent| i);
                    html! {
                        <button
                            key={i}
                            class={classes!("dot", (i == view.index).then_some("active"))}
                            aria-label={format!("Ver proyecto {}", i + 1)}
                            disabled={view.animating}
                            onclick={select}
                        />
                    }
                }) }
            </div>
            <LogoBubbles active={view.index} disabled={view.animating} onselect={carousel.select.clone()} />
        </section>
    }
}
