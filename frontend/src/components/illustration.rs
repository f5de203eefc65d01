use yew::prelude::*;

use super::section_boundary::use_section_fault;
use crate::animation::{use_scroll_y, IllustrationFrame, IllustrationTables};

fn translate_y(offset: f64) -> String {
    format!("transform: translate3d(0, {}px, 0); will-change: transform;", offset)
}

fn particle_style((opacity, scale): (f64, f64)) -> String {
    format!("opacity: {}; transform: scale({}); will-change: transform, opacity;", opacity, scale)
}

fn render_frame(frame: &IllustrationFrame) -> Html {
    html! {
        <div
            class="illustration-desktop"
            style={format!(
                "transform: scale({}); opacity: {}; will-change: transform, opacity;",
                frame.scale, frame.opacity
            )}
        >
            <div class="tech-illustration">
                { for frame.layer_offsets.iter().enumerate().map(|(i, offset)| html! {
                    <div class={format!("floating-circle circle-{}", i + 1)} style={translate_y(*offset)}></div>
                }) }
                <div class="connection-line line-1" style={format!("transform: rotate({}deg);", frame.rotate)}></div>
                <div class="connection-line line-2" style={format!("transform: rotate({}deg);", frame.counter_rotate)}></div>
                { for frame.particles.iter().enumerate().map(|(i, particle)| html! {
                    <div class={format!("scroll-particle particle-{}", i + 1)} style={particle_style(*particle)}></div>
                }) }
            </div>
            <div
                class="scroll-line"
                style={format!("height: {}px; opacity: {};", frame.line_height, frame.line_opacity)}
            />
            <div
                class="line-end-circle"
                style={format!(
                    "transform: translate3d(0, {}px, 0); opacity: {};",
                    frame.circle_y, frame.circle_opacity
                )}
            />
        </div>
    }
}

fn render_static() -> Html {
    html! {
        <div class="illustration-mobile">
            <div class="tech-illustration">
                { for (1..=3).map(|i| html! { <div class={format!("floating-circle circle-{}", i)}></div> }) }
                <div class="connection-line line-1"></div>
                <div class="connection-line line-2"></div>
                { for (1..=3).map(|i| html! { <div class={format!("scroll-particle particle-{} static", i)}></div> }) }
            </div>
        </div>
    }
}

/// Hero decoration driven by the page scroll offset. Phones get a static
/// copy through CSS.
#[function_component(ScrollAnimatedIllustration)]
pub fn scroll_animated_illustration() -> Html {
    let fault = use_section_fault();
    let tables = use_memo(|_| IllustrationTables::new(), ());
    let scroll_y = use_scroll_y();

    {
        let failed = (*tables).as_ref().err().map(|e| e.to_string());
        use_effect_with_deps(
            move |failed| {
                if let Some(reason) = failed {
                    fault.report(format!("illustration ranges: {}", reason));
                }
                || ()
            },
            failed,
        );
    }

    let frame = match &*tables {
        Ok(tables) => tables.frame(scroll_y),
        Err(_) => return render_static(),
    };

    html! {
        <>
            { render_frame(&frame) }
            { render_static() }
        </>
    }
}
