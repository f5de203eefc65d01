use yew::prelude::*;

use super::visibility::{use_in_view, InViewOptions};

/// Entrance transitions used by the home page sections.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entrance {
    FadeUp { distance: f64 },
    FadeScale { from: f64 },
    Fade,
    SlideIn { distance: f64 },
}

impl Default for Entrance {
    fn default() -> Self {
        Entrance::FadeUp { distance: 20.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTarget {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl AnimationTarget {
    pub const RESTING: AnimationTarget = AnimationTarget {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
    };

    pub fn to_style(&self, transition: Option<&Transition>) -> String {
        let mut style = format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) scale({});",
            self.opacity, self.translate_x, self.translate_y, self.scale
        );
        if let Some(t) = transition {
            style.push_str(&format!(
                " transition: opacity {ms}ms {ease} {delay}ms, transform {ms}ms {ease} {delay}ms;",
                ms = t.duration_ms,
                ease = t.easing,
                delay = t.delay_ms
            ));
        }
        style
    }
}

impl Entrance {
    /// Where the section should be for the given visibility. Pure, so
    /// re-rendering with the same input never restarts a transition.
    pub fn target(&self, visible: bool) -> AnimationTarget {
        if visible {
            return AnimationTarget::RESTING;
        }
        let hidden = AnimationTarget {
            opacity: 0.0,
            ..AnimationTarget::RESTING
        };
        match *self {
            Entrance::FadeUp { distance } => AnimationTarget {
                translate_y: distance,
                ..hidden
            },
            Entrance::FadeScale { from } => AnimationTarget { scale: from, ..hidden },
            Entrance::Fade => hidden,
            Entrance::SlideIn { distance } => AnimationTarget {
                translate_x: -distance,
                ..hidden
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: &'static str,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            duration_ms: crate::config::timing().section_duration_ms,
            delay_ms: 0,
            easing: "ease-out",
        }
    }
}

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub entrance: Entrance,
    #[prop_or_default]
    pub options: InViewOptions,
    #[prop_or_default]
    pub transition: Transition,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Fades a section in the first time it scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.options.clone());
    let reduced_motion = use_memo(|_| prefers_reduced_motion(), ());

    let style = if *reduced_motion {
        AnimationTarget::RESTING.to_style(None)
    } else {
        props.entrance.target(visible).to_style(Some(&props.transition))
    };

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            data-motion-section="true"
            class={classes!("reveal", visible.then_some("animation-complete"))}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
