//! Bindings to GSAP's `ScrollTrigger`, loaded by `index.html`.

use std::cell::RefCell;
use std::collections::HashMap;

use log::debug;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Error as JsError, Reflect};
use web_sys::Element;

use super::triggers::{ScrollTriggerApi, TriggerError, TriggerId, TriggerSpec};

#[wasm_bindgen]
extern "C" {
    type ScrollTrigger;

    #[wasm_bindgen(catch, static_method_of = ScrollTrigger)]
    fn create(vars: &JsValue) -> Result<ScrollTrigger, JsValue>;

    #[wasm_bindgen(catch, static_method_of = ScrollTrigger)]
    fn refresh(safe: bool) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, static_method_of = ScrollTrigger, js_name = killAll)]
    fn kill_all() -> Result<(), JsValue>;

    #[wasm_bindgen(catch, method)]
    fn kill(this: &ScrollTrigger) -> Result<(), JsValue>;

    #[wasm_bindgen(method, getter, js_name = isActive)]
    fn is_active(this: &ScrollTrigger) -> bool;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TriggerVars<'a> {
    start: &'a str,
    end: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    toggle_class: Option<&'a str>,
    once: bool,
}

struct LiveTrigger {
    instance: ScrollTrigger,
    _on_toggle: Option<Closure<dyn FnMut(ScrollTrigger)>>,
}

/// `window.ScrollTrigger`, or a stub answering [`TriggerError::Unavailable`]
/// when the script did not load.
pub struct GsapScrollTrigger {
    available: bool,
    live: RefCell<HashMap<TriggerId, LiveTrigger>>,
}

impl GsapScrollTrigger {
    pub fn detect() -> Self {
        let available = web_sys::window()
            .map(|w| Reflect::has(&w, &JsValue::from_str("ScrollTrigger")).unwrap_or(false))
            .unwrap_or(false);
        if !available {
            debug!("ScrollTrigger not found on window, scroll triggers disabled");
        }
        Self {
            available,
            live: RefCell::new(HashMap::new()),
        }
    }

    fn ensure_available(&self) -> Result<(), TriggerError> {
        if self.available {
            Ok(())
        } else {
            Err(TriggerError::Unavailable)
        }
    }
}

/// True for the DOM exceptions ScrollTrigger throws when a node it tracks
/// was already removed by the renderer.
pub fn is_stale_node_message(message: &str) -> bool {
    message.contains("removeChild") || message.contains("node to be removed is not a child")
}

fn classify(err: JsValue) -> TriggerError {
    let message = err
        .dyn_ref::<JsError>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    if is_stale_node_message(&message) {
        TriggerError::StaleNode(message)
    } else {
        TriggerError::Library(message)
    }
}

fn to_vars(spec: &TriggerSpec<Element>) -> Result<JsValue, TriggerError> {
    let vars = serde_wasm_bindgen::to_value(&TriggerVars {
        start: &spec.start,
        end: &spec.end,
        toggle_class: spec.toggle_class.as_deref(),
        once: spec.once,
    })
    .map_err(|e| TriggerError::Library(e.to_string()))?;
    Reflect::set(&vars, &JsValue::from_str("trigger"), &spec.target).map_err(classify)?;
    Ok(vars)
}

impl ScrollTriggerApi for GsapScrollTrigger {
    type Target = Element;

    fn create(&self, id: TriggerId, spec: &TriggerSpec<Element>) -> Result<(), TriggerError> {
        self.ensure_available()?;
        let vars = to_vars(spec)?;

        let on_toggle = spec.on_toggle.clone().map(|cb| {
            Closure::wrap(Box::new(move |trigger: ScrollTrigger| cb(trigger.is_active()))
                as Box<dyn FnMut(ScrollTrigger)>)
        });
        if let Some(closure) = &on_toggle {
            Reflect::set(&vars, &JsValue::from_str("onToggle"), closure.as_ref()).map_err(classify)?;
        }

        let instance = ScrollTrigger::create(&vars).map_err(classify)?;
        self.live.borrow_mut().insert(
            id,
            LiveTrigger {
                instance,
                _on_toggle: on_toggle,
            },
        );
        Ok(())
    }

    fn kill(&self, id: TriggerId) -> Result<(), TriggerError> {
        let removed = self.live.borrow_mut().remove(&id);
        match removed {
            Some(trigger) => trigger.instance.kill().map_err(classify),
            None => Ok(()),
        }
    }

    fn refresh(&self, safe: bool) -> Result<(), TriggerError> {
        self.ensure_available()?;
        ScrollTrigger::refresh(safe).map_err(classify)
    }

    fn kill_all(&self) -> Result<(), TriggerError> {
        self.ensure_available()?;
        self.live.borrow_mut().clear();
        ScrollTrigger::kill_all().map_err(classify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_removal_failures() {
        assert!(is_stale_node_message(
            "Failed to execute 'removeChild' on 'Node': The node to be removed is not a child of this node."
        ));
        assert!(is_stale_node_message("The node to be removed is not a child of this node"));
        assert!(!is_stale_node_message("Cannot read properties of undefined"));
    }
}
