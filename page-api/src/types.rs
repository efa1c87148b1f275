use crate::error::DomError;
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Event, EventTarget};

pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const ERROR_CLASS: &str = "error";

pub const TAB_BUTTON_SELECTOR: &str = ".tab-button";
pub const TAB_PANE_SELECTOR: &str = ".tab-content";
pub const TAB_ATTRIBUTE: &str = "data-tab";

/// Keeps a DOM event listener registered for as long as it lives.
pub struct ListenerHandle {
	target: EventTarget,
	event: &'static str,
	closure: Closure<dyn FnMut(Event)>,
}

impl Drop for ListenerHandle {
	fn drop(&mut self) {
		let _ = self.target.remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
	}
}

pub(crate) fn attach_listener(target: &EventTarget, event: &'static str, closure: Closure<dyn FnMut(Event)>) -> Result<ListenerHandle, DomError> {
	target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
	Ok(ListenerHandle { target: target.clone(), event, closure })
}
