use crate::{
	error::DomError,
	types::{ListenerHandle, attach_listener},
};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Element, Event, HtmlFormElement};

const SUBMIT_CONTROLS: &str = "button[type=submit], button:not([type]), input[type=submit]";

#[derive(Clone)]
pub struct Form {
	element: HtmlFormElement,
}

impl Form {
	pub(crate) fn new(element: HtmlFormElement) -> Self {
		Self { element }
	}

	/// Calls `callback` on every submit, after suppressing the browser's own navigation.
	pub fn on_submit(&self, mut callback: impl FnMut() + 'static) -> Result<ListenerHandle, DomError> {
		attach_listener(
			self.element.as_ref(),
			"submit",
			Closure::wrap(Box::new(move |event: Event| {
				event.prevent_default();
				callback();
			}) as Box<dyn FnMut(Event)>),
		)
	}

	/// Toggles the `disabled` attribute on the form's submit controls.
	pub fn set_submit_enabled(&self, enabled: bool) -> Result<(), DomError> {
		let controls = self.element.query_selector_all(SUBMIT_CONTROLS)?;
		for control in (0..controls.length()).filter_map(|i| controls.item(i)).filter_map(|node| node.dyn_into::<Element>().ok()) {
			if enabled {
				control.remove_attribute("disabled")?;
			} else {
				control.set_attribute("disabled", "")?;
			}
		}
		Ok(())
	}
}
