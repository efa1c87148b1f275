use crate::{
	error::DomError,
	types::{ListenerHandle, attach_listener},
};
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// A form control with a string value.
#[derive(Clone)]
pub enum Field {
	Input(HtmlInputElement),
	TextArea(HtmlTextAreaElement),
	Select(HtmlSelectElement),
}

impl Field {
	pub fn value(&self) -> String {
		match self {
			Field::Input(el) => el.value(),
			Field::TextArea(el) => el.value(),
			Field::Select(el) => el.value(),
		}
	}

	fn target(&self) -> &EventTarget {
		match self {
			Field::Input(el) => el.as_ref(),
			Field::TextArea(el) => el.as_ref(),
			Field::Select(el) => el.as_ref(),
		}
	}

	/// Calls `callback` with the current value on every `input` event.
	pub fn on_input(&self, mut callback: impl FnMut(String) + 'static) -> Result<ListenerHandle, DomError> {
		let field = self.clone();
		attach_listener(self.target(), "input", Closure::wrap(Box::new(move |_: Event| callback(field.value())) as Box<dyn FnMut(Event)>))
	}
}
