//! Window-level listeners a dropdown needs while it is mounted.
//!
//! [`GlobalListeners`] registers `pointerdown` (outside-click dismissal) and
//! `resize` (re-measurement) on the browser window and removes both when
//! dropped. Keep it in a hook so it lives exactly as long as the component.

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("no browser window is available")]
    NoWindow,
    #[error("failed to register `{event}` listener: {reason}")]
    Register { event: &'static str, reason: String },
}

#[cfg(target_arch = "wasm32")]
type WindowCallback = Closure<dyn FnMut(web_sys::Event)>;

#[cfg(target_arch = "wasm32")]
pub struct GlobalListeners {
    window: web_sys::Window,
    pointer_down: WindowCallback,
    resize: WindowCallback,
}

#[cfg(not(target_arch = "wasm32"))]
pub struct GlobalListeners {
    _private: (),
}

#[cfg(target_arch = "wasm32")]
impl GlobalListeners {
    /// Calls `on_outside` for pointer-downs outside the element with id
    /// `root_id`, and `on_resize` whenever the window resizes.
    pub fn register(
        root_id: String,
        mut on_outside: impl FnMut() + 'static,
        mut on_resize: impl FnMut() + 'static,
    ) -> Result<Self, ListenerError> {
        let window = web_sys::window().ok_or(ListenerError::NoWindow)?;
        let runtime = Runtime::current();

        let pointer_down = {
            let runtime = runtime.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move |event: web_sys::Event| {
                let _guard = RuntimeGuard::new(runtime.clone());
                if is_outside(&window, &root_id, &event) {
                    on_outside();
                }
            }) as Box<dyn FnMut(_)>)
        };
        let resize = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            on_resize();
        }) as Box<dyn FnMut(_)>);

        let listeners = Self {
            window,
            pointer_down,
            resize,
        };
        // On failure `listeners` drops here and detaches whatever got attached.
        listeners.attach("pointerdown", &listeners.pointer_down)?;
        listeners.attach("resize", &listeners.resize)?;
        Ok(listeners)
    }

    fn attach(&self, event: &'static str, callback: &WindowCallback) -> Result<(), ListenerError> {
        self.window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| ListenerError::Register {
                event,
                reason: format!("{err:?}"),
            })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for GlobalListeners {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "pointerdown",
            self.pointer_down.as_ref().unchecked_ref(),
        );
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
    }
}

#[cfg(target_arch = "wasm32")]
fn is_outside(window: &web_sys::Window, root_id: &str, event: &web_sys::Event) -> bool {
    let Some(root) = window
        .document()
        .and_then(|doc| doc.get_element_by_id(root_id))
    else {
        return false;
    };
    let target = event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
    !root.contains(target.as_ref())
}

#[cfg(not(target_arch = "wasm32"))]
impl GlobalListeners {
    /// Native renderers expose no browser window to listen on.
    pub fn register(
        _root_id: String,
        _on_outside: impl FnMut() + 'static,
        _on_resize: impl FnMut() + 'static,
    ) -> Result<Self, ListenerError> {
        Err(ListenerError::NoWindow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn registration_without_window_reports_no_window() {
        let result = GlobalListeners::register("dropdown-test".to_string(), || {}, || {});
        assert!(matches!(result, Err(ListenerError::NoWindow)));
    }

    #[test]
    fn errors_name_the_failing_event() {
        let err = ListenerError::Register {
            event: "resize",
            reason: "denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to register `resize` listener: denied"
        );
    }
}
