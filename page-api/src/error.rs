use thiserror::Error;
use wasm_bindgen::{JsCast, prelude::*};

#[derive(Error, Debug)]
pub enum DomError {
	#[error("No `window` is available in this context.")]
	NoWindow,

	#[error("The window has no `document`.")]
	NoDocument,

	#[error("Element `#{0}` is missing from the page.")]
	ElementNotFound(String),

	#[error("Element `#{id}` is not a {expected}.")]
	UnexpectedElement { id: String, expected: &'static str },

	#[error("A JavaScript error occurred: {message}")]
	JsError { message: String, js_value: JsValue },

	#[error("An unexpected JavaScript value was thrown: {0:?}")]
	JsValue(JsValue),
}

impl From<JsValue> for DomError {
	fn from(js_val: JsValue) -> Self {
		if let Some(e) = js_val.dyn_ref::<js_sys::Error>() {
			return DomError::JsError { message: e.message().into(), js_value: js_val };
		}

		if let Some(obj) = js_val.dyn_ref::<js_sys::Object>()
			&& let Ok(message_val) = js_sys::Reflect::get(obj, &"message".into())
			&& let Some(message) = message_val.as_string()
		{
			return DomError::JsError { message, js_value: js_val };
		}

		DomError::JsValue(js_val)
	}
}
