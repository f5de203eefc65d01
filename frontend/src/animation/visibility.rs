//! Viewport visibility detection for page sections.
//!
//! [`use_in_view`] wraps an `IntersectionObserver` the way the home page
//! needs it: one observer per section, released on unmount, and failing
//! open (reporting "visible") whenever the browser cannot observe.

use std::fmt;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarginError {
    #[error("margin is empty")]
    Empty,
    #[error("margin takes 1 to 4 values, got {0}")]
    TooManyValues(usize),
    #[error("invalid margin value `{0}`, expected px or %")]
    InvalidValue(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    fn parse(token: &str) -> Result<Self, MarginError> {
        let invalid = || MarginError::InvalidValue(token.to_string());
        let (number, build): (&str, fn(f64) -> Length) = if let Some(n) = token.strip_suffix("px") {
            (n, Length::Px)
        } else if let Some(n) = token.strip_suffix('%') {
            (n, Length::Percent)
        } else if token == "0" {
            (token, Length::Px)
        } else {
            return Err(invalid());
        };
        let value: f64 = number.parse().map_err(|_| invalid())?;
        if !value.is_finite() {
            return Err(invalid());
        }
        Ok(build(value))
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(v) => write!(f, "{}%", v),
        }
    }
}

/// Observer root margin, expanded to four sides with CSS shorthand rules.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    pub const ZERO: RootMargin = RootMargin {
        top: Length::Px(0.0),
        right: Length::Px(0.0),
        bottom: Length::Px(0.0),
        left: Length::Px(0.0),
    };

    pub fn parse(input: &str) -> Result<Self, MarginError> {
        let values = input
            .split_whitespace()
            .map(Length::parse)
            .collect::<Result<Vec<_>, _>>()?;
        let (top, right, bottom, left) = match values.as_slice() {
            [] => return Err(MarginError::Empty),
            [all] => (*all, *all, *all, *all),
            [v, h] => (*v, *h, *v, *h),
            [t, h, b] => (*t, *h, *b, *h),
            [t, r, b, l] => (*t, *r, *b, *l),
            more => return Err(MarginError::TooManyValues(more.len())),
        };
        Ok(Self { top, right, bottom, left })
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InViewOptions {
    pub margin: AttrValue,
    /// Fraction of the target that must intersect, clamped to `[0, 1]`.
    pub amount: f64,
    pub once: bool,
}

impl Default for InViewOptions {
    fn default() -> Self {
        let timing = crate::config::timing();
        Self {
            margin: AttrValue::Static(timing.in_view_margin),
            amount: timing.in_view_amount,
            once: true,
        }
    }
}

impl InViewOptions {
    pub fn with_margin(margin: &'static str) -> Self {
        Self {
            margin: AttrValue::Static(margin),
            ..Self::default()
        }
    }

    pub fn threshold(&self) -> f64 {
        if self.amount.is_nan() {
            0.0
        } else {
            self.amount.clamp(0.0, 1.0)
        }
    }

    pub fn root_margin(&self) -> RootMargin {
        RootMargin::parse(&self.margin).unwrap_or_else(|err| {
            warn!("Ignoring in-view margin {:?}: {}", self.margin.as_str(), err);
            RootMargin::ZERO
        })
    }
}

/// One-way latch when `once` is set; otherwise mirrors the observations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VisibilityLatch {
    once: bool,
    visible: bool,
}

impl VisibilityLatch {
    pub fn new(once: bool) -> Self {
        Self { once, visible: false }
    }

    pub fn observe(&mut self, intersecting: bool) -> bool {
        if !(self.once && self.visible) {
            self.visible = intersecting;
        }
        self.visible
    }

    /// True once a `once` latch has fired and observing is pointless.
    pub fn is_settled(&self) -> bool {
        self.once && self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// Owns an observer subscription; disconnecting happens on drop.
struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

fn observe(
    target: &web_sys::Element,
    options: &InViewOptions,
    on_change: Callback<bool>,
) -> Result<ObserverGuard, JsValue> {
    let mut latch = VisibilityLatch::new(options.once);
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let Some(entry) = entries
            .iter()
            .last()
            .and_then(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
        else {
            return;
        };
        let was_visible = latch.is_visible();
        let visible = latch.observe(entry.is_intersecting());
        if visible != was_visible {
            on_change.emit(visible);
        }
        if latch.is_settled() {
            observer.disconnect();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_root_margin(&options.root_margin().to_string());
    init.set_threshold(&JsValue::from_f64(options.threshold()));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(target);

    Ok(ObserverGuard {
        observer,
        _callback: callback,
    })
}

/// Reports whether the element behind `node_ref` has entered the viewport.
#[hook]
pub fn use_in_view(node_ref: NodeRef, options: InViewOptions) -> bool {
    let in_view = use_state(|| false);
    {
        let in_view = in_view.clone();
        use_effect_with_deps(
            move |(node_ref, options)| {
                let mut guard = None;
                let target = node_ref.cast::<web_sys::Element>();
                match target {
                    Some(target) if observer_supported() => {
                        let setter = in_view.setter();
                        match observe(&target, options, Callback::from(move |v| setter.set(v))) {
                            Ok(g) => guard = Some(g),
                            Err(err) => {
                                warn!("IntersectionObserver failed, showing content: {:?}", err);
                                in_view.set(true);
                            }
                        }
                    }
                    Some(_) => {
                        debug!("IntersectionObserver unavailable, showing content");
                        in_view.set(true);
                    }
                    None => in_view.set(true),
                }
                move || drop(guard)
            },
            (node_ref, options),
        );
    }
    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_is_monotonic_when_once() {
        let mut latch = VisibilityLatch::new(true);
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        for seen in [false, true, false, false] {
            assert!(latch.observe(seen));
        }
        assert!(latch.is_settled());
    }

    #[test]
    fn latch_toggles_freely_without_once() {
        let mut latch = VisibilityLatch::new(false);
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(!latch.is_settled());
    }

    #[test]
    fn single_margin_applies_to_every_side() {
        let margin = RootMargin::parse("-100px").unwrap();
        assert_eq!(margin.to_string(), "-100px -100px -100px -100px");
    }

    #[test]
    fn margin_shorthand_expands_like_css() {
        assert_eq!(
            RootMargin::parse("10px 5%").unwrap().to_string(),
            "10px 5% 10px 5%"
        );
        assert_eq!(
            RootMargin::parse("0px 0px -50px 0px").unwrap().to_string(),
            "0px 0px -50px 0px"
        );
        assert_eq!(RootMargin::parse("0").unwrap(), RootMargin::ZERO);
    }

    #[test]
    fn rejects_bad_margins() {
        assert_eq!(RootMargin::parse("  "), Err(MarginError::Empty));
        assert_eq!(
            RootMargin::parse("1px 2px 3px 4px 5px"),
            Err(MarginError::TooManyValues(5))
        );
        assert_eq!(
            RootMargin::parse("-100em"),
            Err(MarginError::InvalidValue("-100em".into()))
        );
        assert!(RootMargin::parse("abcpx").is_err());
    }

    #[test]
    fn invalid_margin_falls_back_to_zero() {
        let options = InViewOptions::with_margin("lots");
        assert_eq!(options.root_margin(), RootMargin::ZERO);
    }

    #[test]
    fn threshold_is_clamped() {
        let mut options = InViewOptions::default();
        options.amount = 3.0;
        assert_eq!(options.threshold(), 1.0);
        options.amount = -1.0;
        assert_eq!(options.threshold(), 0.0);
        assert_eq!(InViewOptions::default().threshold(), 0.1);
    }
}
