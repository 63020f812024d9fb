use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

use super::DomError;

/// An event listener registered on `window`, removed again when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<E, F>(event: &'static str, mut handler: F) -> Result<Self, DomError>
    where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let callback = Closure::wrap(Box::new(move |event: Event| {
            handler(event.unchecked_into::<E>());
        }) as Box<dyn FnMut(Event)>);

        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| DomError::listener(event, err))?;
        debug!("Attached window `{}` listener", event);

        Ok(Self {
            window,
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        match self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            Ok(()) => debug!("Detached window `{}` listener", self.event),
            Err(err) => error!("Failed to detach `{}` listener: {:?}", self.event, err),
        }
    }
}
