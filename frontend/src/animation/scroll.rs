use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};
use yew::prelude::*;

/// Collapses any number of scroll events into one recomputation per frame.
/// The last offset pushed before the frame wins.
#[derive(Debug, Default)]
pub struct FrameBatcher {
    latest: Option<f64>,
    frame_pending: bool,
}

impl FrameBatcher {
    /// Records `offset`; returns true when the caller must request a frame.
    pub fn push(&mut self, offset: f64) -> bool {
        self.latest = Some(if offset.is_finite() { offset.max(0.0) } else { 0.0 });
        if self.frame_pending {
            false
        } else {
            self.frame_pending = true;
            true
        }
    }

    pub fn take(&mut self) -> Option<f64> {
        self.frame_pending = false;
        self.latest.take()
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.frame_pending
    }
}

fn read_scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Passive `scroll` listener that hands the offset to `on_frame` at most
/// once per animation frame. Dropping it removes the listener and cancels
/// any pending frame.
pub struct ScrollListener {
    window: Window,
    on_scroll: Closure<dyn FnMut()>,
    frame_id: Rc<Cell<Option<i32>>>,
    _on_frame: Rc<Closure<dyn FnMut()>>,
}

impl ScrollListener {
    pub fn attach(on_frame: impl Fn(f64) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let batcher = Rc::new(RefCell::new(FrameBatcher::default()));
        let frame_id = Rc::new(Cell::new(None));

        let frame_cb = {
            let batcher = batcher.clone();
            let frame_id = frame_id.clone();
            Rc::new(Closure::wrap(Box::new(move || {
                frame_id.set(None);
                let latest = batcher.borrow_mut().take();
                if let Some(offset) = latest {
                    on_frame(offset);
                }
            }) as Box<dyn FnMut()>))
        };

        let on_scroll = {
            let window = window.clone();
            let frame_cb = Rc::downgrade(&frame_cb);
            let frame_id = frame_id.clone();
            Closure::wrap(Box::new(move || {
                let needs_frame = batcher.borrow_mut().push(read_scroll_y(&window));
                if !needs_frame {
                    return;
                }
                let Some(frame_cb) = frame_cb.upgrade() else {
                    return;
                };
                match window.request_animation_frame((*frame_cb).as_ref().unchecked_ref()) {
                    Ok(id) => frame_id.set(Some(id)),
                    Err(err) => warn!("requestAnimationFrame failed: {:?}", err),
                }
            }) as Box<dyn FnMut()>)
        };

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &options,
        ) {
            warn!("Could not subscribe to scroll events: {:?}", err);
            return None;
        }

        Some(Self {
            window,
            on_scroll,
            frame_id,
            _on_frame: frame_cb,
        })
    }
}

impl Drop for ScrollListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref())
        {
            warn!("Could not unsubscribe from scroll events: {:?}", err);
        }
        if let Some(id) = self.frame_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
    }
}

/// Current vertical scroll offset, refreshed once per animation frame.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(|| web_sys::window().map(|w| read_scroll_y(&w)).unwrap_or(0.0));
    {
        let setter = scroll_y.setter();
        use_effect_with_deps(
            move |_| {
                let listener = ScrollListener::attach(move |offset| setter.set(offset));
                move || drop(listener)
            },
            (),
        );
    }
    *scroll_y
}

/// Marks `body` with a `scrolling` class while the page is being scrolled
/// so heavy CSS animations can pause; cleared after `idle_ms` of quiet.
#[hook]
pub fn use_scroll_activity(idle_ms: u32) {
    use_effect_with_deps(
        move |idle_ms| {
            let idle_ms = *idle_ms;
            let idle_timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
            let listener = {
                let idle_timer = idle_timer.clone();
                ScrollListener::attach(move |_| {
                    set_scrolling(true);
                    // Replacing the timeout drops, and so cancels, the previous one.
                    *idle_timer.borrow_mut() = Some(Timeout::new(idle_ms, || set_scrolling(false)));
                })
            };
            move || {
                drop(listener);
                idle_timer.borrow_mut().take();
                set_scrolling(false);
            }
        },
        idle_ms,
    );
}

fn set_scrolling(active: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let classes = body.class_list();
    let toggled = if active {
        classes.add_1("scrolling")
    } else {
        classes.remove_1("scrolling")
    };
    if let Err(err) = toggled.and_then(|()| {
        body.style()
            .set_property("--scroll-active", if active { "1" } else { "0" })
    }) {
        warn!("Could not update scrolling state on body: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_push_requests_a_frame() {
        let mut batcher = FrameBatcher::default();
        assert!(batcher.push(10.0));
        assert!(batcher.is_pending());
    }

    #[test]
    fn pushes_within_one_frame_collapse_to_last_value() {
        let mut batcher = FrameBatcher::default();
        assert!(batcher.push(10.0));
        assert!(!batcher.push(20.0));
        assert!(!batcher.push(35.0));
        assert_eq!(batcher.take(), Some(35.0));
        assert_eq!(batcher.take(), None);
    }

    #[test]
    fn rearms_after_frame() {
        let mut batcher = FrameBatcher::default();
        batcher.push(1.0);
        batcher.take();
        assert!(!batcher.is_pending());
        assert!(batcher.push(2.0));
    }

    #[test]
    fn clamps_negative_and_non_finite_offsets() {
        let mut batcher = FrameBatcher::default();
        batcher.push(-50.0);
        assert_eq!(batcher.take(), Some(0.0));
        batcher.push(f64::NAN);
        assert_eq!(batcher.take(), Some(0.0));
    }
}
