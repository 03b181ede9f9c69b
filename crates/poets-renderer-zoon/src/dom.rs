//! Raw DOM plumbing: event listeners and signal-to-property bindings.

use zoon::wasm_bindgen::JsCast;
use zoon::wasm_bindgen::closure::Closure;
use zoon::*;

/// Adds a listener for the element's whole lifetime.
///
/// The page is built once and never torn down, so the closure is leaked.
pub fn listen(
    target: &web_sys::EventTarget,
    event_name: &'static str,
    handler: impl FnMut(web_sys::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(error) =
        target.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())
    {
        zoon::eprintln!("Failed to listen to '{event_name}' events: {error:?}");
    }
    closure.forget();
}

/// Runs `apply` with every value of `signal`, starting with the current one.
pub fn bind<T: 'static>(
    signal: impl Signal<Item = T> + 'static,
    mut apply: impl FnMut(T) + 'static,
) {
    Task::start(signal.for_each_sync(move |value| apply(value)));
}

/// Looks up an element by id and casts it to the expected type.
pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    let element = document().get_element_by_id(id)?;
    match element.dyn_into::<T>() {
        Ok(element) => Some(element),
        Err(_) => {
            zoon::eprintln!("Element '#{id}' has an unexpected type");
            None
        }
    }
}
