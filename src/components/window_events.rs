use crate::feed::ScrollMetrics;
#[cfg(target_arch = "wasm32")]
use dioxus::core::{Runtime, RuntimeGuard};
#[cfg(target_arch = "wasm32")]
use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::window;

#[cfg(target_arch = "wasm32")]
struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Calls `handler` on every `event` fired at the window for as long as the
/// calling component is mounted.
#[cfg(target_arch = "wasm32")]
pub fn use_window_listener(event: &'static str, handler: impl FnMut() + 'static) {
    use_hook(move || {
        let runtime = Runtime::current();
        let mut handler = handler;
        let callback = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            let _guard = RuntimeGuard::new(runtime.clone());
            handler();
        }) as Box<dyn FnMut(_)>);

        if let Some(win) = window() {
            let _ =
                win.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }

        Rc::new(WindowListener { event, callback })
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn use_window_listener(_event: &'static str, _handler: impl FnMut() + 'static) {}

#[cfg(target_arch = "wasm32")]
pub fn window_scroll_metrics() -> Option<ScrollMetrics> {
    let win = window()?;
    let document_height = win.document()?.document_element()?.scroll_height() as f64;
    Some(ScrollMetrics {
        viewport_height: win.inner_height().ok()?.as_f64()?,
        scroll_y: win.scroll_y().ok()?,
        document_height,
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn window_scroll_metrics() -> Option<ScrollMetrics> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn window_inner_width() -> Option<f64> {
    window()?.inner_width().ok()?.as_f64()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn window_inner_width() -> Option<f64> {
    None
}
