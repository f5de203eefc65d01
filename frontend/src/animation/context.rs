use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use super::gsap::GsapScrollTrigger;
use super::scheduler::BrowserScheduler;
use super::triggers::{AnimationAdapter, TriggerError, TriggerScope, TriggerSpec};
use crate::config;

pub type SiteAnimations = AnimationAdapter<GsapScrollTrigger>;

#[derive(Properties, PartialEq)]
pub struct AnimationsProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the app-wide trigger adapter. Refreshes it on resize and tears it
/// down on unmount or page unload.
#[function_component(AnimationsProvider)]
pub fn animations_provider(props: &AnimationsProviderProps) -> Html {
    let adapter = use_memo(
        |_| {
            SiteAnimations::new(
                GsapScrollTrigger::detect(),
                Rc::new(BrowserScheduler),
                config::timing().refresh_retry_ms,
            )
        },
        (),
    );

    {
        let adapter = (*adapter).clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let on_resize = {
                    let adapter = adapter.clone();
                    Closure::wrap(Box::new(move || match adapter.refresh() {
                        Ok(()) | Err(TriggerError::Unavailable) => {}
                        Err(err) => error!("Error refreshing ScrollTriggers: {}", err),
                    }) as Box<dyn FnMut()>)
                };
                let on_unload = {
                    let adapter = adapter.clone();
                    Closure::wrap(Box::new(move || adapter.kill_all()) as Box<dyn FnMut()>)
                };
                if let Some(window) = &window {
                    for (event, listener) in [("resize", &on_resize), ("beforeunload", &on_unload)] {
                        if let Err(err) =
                            window.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
                        {
                            warn!("Could not subscribe to {} events: {:?}", event, err);
                        }
                    }
                }

                move || {
                    if let Some(window) = &window {
                        for (event, listener) in [("resize", &on_resize), ("beforeunload", &on_unload)] {
                            if let Err(err) = window
                                .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
                            {
                                warn!("Could not unsubscribe from {} events: {:?}", event, err);
                            }
                        }
                    }
                    info!("Tearing down scroll triggers");
                    adapter.destroy();
                }
            },
            (),
        );
    }

    html! {
        <ContextProvider<SiteAnimations> context={(*adapter).clone()}>
            { for props.children.iter() }
        </ContextProvider<SiteAnimations>>
    }
}

#[hook]
pub fn use_animations() -> Option<SiteAnimations> {
    use_context::<SiteAnimations>()
}

#[derive(Clone, Debug, PartialEq)]
pub struct TriggerOptions {
    pub start: AttrValue,
    pub end: AttrValue,
    pub toggle_class: Option<AttrValue>,
    pub once: bool,
}

impl Default for TriggerOptions {
    fn default() -> Self {
        Self {
            start: AttrValue::Static("top 80%"),
            end: AttrValue::Static("bottom 20%"),
            toggle_class: None,
            once: false,
        }
    }
}

/// Newest `on_toggle` a component rendered with.
type ToggleSlot = Rc<RefCell<Option<Callback<bool>>>>;

/// Handler given to the library. It reads the slot on every call, so a
/// re-render with a fresh callback never needs a new trigger.
fn forward_toggle(slot: &ToggleSlot) -> Rc<dyn Fn(bool)> {
    let slot = slot.clone();
    Rc::new(move |active| {
        let callback = slot.borrow().clone();
        if let Some(callback) = callback {
            callback.emit(active);
        }
    })
}

/// Effect dependencies of [`use_scroll_trigger`]. Only the presence of a
/// toggle callback counts; `Callback` compares by pointer.
fn trigger_deps<A>(
    adapter: A,
    node_ref: NodeRef,
    options: TriggerOptions,
    on_toggle: &Option<Callback<bool>>,
) -> (A, NodeRef, TriggerOptions, bool) {
    (adapter, node_ref, options, on_toggle.is_some())
}

/// Attaches a scroll trigger to `node_ref` for the lifetime of the calling
/// component. `on_toggle` receives the trigger's active state.
#[hook]
pub fn use_scroll_trigger(node_ref: NodeRef, options: TriggerOptions, on_toggle: Option<Callback<bool>>) {
    let adapter = use_animations();
    let latest: ToggleSlot = use_mut_ref(|| None);
    let deps = trigger_deps(adapter, node_ref, options, &on_toggle);
    *latest.borrow_mut() = on_toggle;
    use_effect_with_deps(
        move |(adapter, node_ref, options, has_toggle)| {
            let scope = adapter.clone().map(TriggerScope::new);
            if let (Some(scope), Some(target)) = (&scope, node_ref.cast::<web_sys::Element>()) {
                let on_toggle = has_toggle.then(|| forward_toggle(&latest));
                scope.create(TriggerSpec {
                    target,
                    start: options.start.to_string(),
                    end: options.end.to_string(),
                    toggle_class: options.toggle_class.as_ref().map(|c| c.to_string()),
                    once: options.once,
                    on_toggle,
                });
            }
            move || drop(scope)
        },
        deps,
    );
}
