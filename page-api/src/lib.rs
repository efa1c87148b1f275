pub mod api;
pub mod error;
pub mod types;
mod utils;

pub use api::*;
use error::DomError;
pub use types::*;
use utils::get_element;
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Window};

#[derive(Clone)]
pub struct Page {
	window: Window,
	document: Document,
}

impl Page {
	/// `window.location.origin`, e.g. `http://127.0.0.1:5000`.
	pub fn origin(&self) -> Result<String, DomError> {
		self.window.location().origin().map_err(Into::into)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.document.get_element_by_id(id).is_some()
	}

	pub fn region(&self, id: &str) -> Result<Region, DomError> {
		Ok(Region::new(&self.document, get_element::<Element>(&self.document, id)?))
	}

	pub fn form(&self, id: &str) -> Result<Form, DomError> {
		get_element::<HtmlFormElement>(&self.document, id).map(Form::new)
	}

	pub fn field(&self, id: &str) -> Result<Field, DomError> {
		get_element::<Element>(&self.document, id)?
			.dyn_into::<HtmlInputElement>()
			.map(Field::Input)
			.or_else(|el| el.dyn_into::<HtmlTextAreaElement>().map(Field::TextArea))
			.or_else(|el| el.dyn_into::<HtmlSelectElement>().map(Field::Select))
			.map_err(|el| DomError::UnexpectedElement { id: el.id(), expected: "input, textarea or select" })
	}

	pub fn tabs(&self) -> Result<TabBar, DomError> {
		TabBar::new(&self.document)
	}
}

pub fn init() -> Result<Page, DomError> {
	let window = web_sys::window().ok_or(DomError::NoWindow)?;
	let document = window.document().ok_or(DomError::NoDocument)?;
	Ok(Page { window, document })
}

/// Runs `on_ready` once the document has been parsed, immediately if that already happened.
pub fn when_ready(on_ready: impl FnOnce(Page) + 'static) -> Result<(), DomError> {
	let page = init()?;
	let ready_state = js_sys::Reflect::get(&page.document, &"readyState".into())?.as_string().unwrap_or_default();
	if ready_state != "loading" {
		on_ready(page);
		return Ok(());
	}

	let document = page.document.clone();
	let callback = Closure::once_into_js(move || on_ready(page));
	document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
	Ok(())
}
