use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

/// A window event listener that is removed again when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    /// Registers `handler` for `event`. Events that are not an `E` are skipped.
    pub fn new<E, F>(window: &Window, event: &'static str, mut handler: F) -> Option<Self>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |event: Event| {
            if let Ok(event) = event.dyn_into::<E>() {
                handler(event);
            }
        }) as Box<dyn FnMut(Event)>);

        match window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            Ok(()) => Some(Self {
                window: window.clone(),
                event,
                callback,
            }),
            Err(err) => {
                warn!("could not listen for {} events: {:?}", event, err);
                None
            }
        }
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
