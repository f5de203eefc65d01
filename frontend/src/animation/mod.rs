//! Scroll-driven animation coordination: section visibility, entrance
//! transitions, scroll-linked transforms and the scroll-trigger adapter.

pub mod context;
pub mod entrance;
pub mod gsap;
pub mod interpolate;
pub mod scheduler;
pub mod scroll;
pub mod triggers;
pub mod visibility;

pub use context::{use_scroll_trigger, AnimationsProvider, TriggerOptions};
pub use entrance::{Entrance, Reveal, Transition};
pub use interpolate::{IllustrationFrame, IllustrationTables};
pub use scroll::{use_scroll_activity, use_scroll_y};
pub use visibility::InViewOptions;
