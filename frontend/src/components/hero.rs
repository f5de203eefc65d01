use yew::prelude::*;

use super::illustration::ScrollAnimatedIllustration;
use crate::animation::{Entrance, Reveal, Transition};

fn staggered(step: u32) -> Transition {
    Transition {
        duration_ms: 800,
        delay_ms: 200 * step,
        ..Transition::default()
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let slide = Entrance::SlideIn { distance: 100.0 };

    html! {
        <section id="hero" class="hero">
            <div class="hero-content">
                <div class="hero-text">
                    <Reveal entrance={slide} transition={staggered(1)}>
                        <span class="custom-dev-tag">{"DESARROLLOS A MEDIDA"}</span>
                    </Reveal>
                    <Reveal entrance={slide} transition={staggered(2)}>
                        <h1 class="hero-title gradient-text">
                            {"Transformamos ideas en soluciones tecnológicas"}
                        </h1>
                    </Reveal>
                    <Reveal entrance={slide} transition={staggered(3)}>
                        <p class="hero-subtitle">
                            {"Somos un equipo multidisciplinario que te acompaña desde la concepción de la idea hasta su implementación."}
                        </p>
                    </Reveal>
                    <Reveal entrance={slide} transition={staggered(4)}>
                        <a href="#contact" class="animated-button">{"Contactanos!"}</a>
                    </Reveal>
                </div>
                <div class="hero-illustration">
                    <ScrollAnimatedIllustration />
                </div>
            </div>
        </section>
    }
}
