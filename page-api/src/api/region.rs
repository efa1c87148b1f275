use crate::{
	error::DomError,
	types::{ERROR_CLASS, HIDDEN_CLASS},
	utils::toggle_class,
};
use web_sys::{Document, Element};

/// An element the page writes text or state classes into.
#[derive(Clone)]
pub struct Region {
	document: Document,
	element: Element,
}

impl Region {
	pub(crate) fn new(document: &Document, element: Element) -> Self {
		Self { document: document.clone(), element }
	}

	/// Replaces all children with a single text node.
	pub fn set_text(&self, text: &str) {
		self.element.set_text_content(Some(text));
	}

	/// Replaces all children with an error-styled container holding `text` as text content.
	pub fn set_error_text(&self, text: &str) -> Result<(), DomError> {
		self.element.set_text_content(None);
		let container = self.document.create_element("div")?;
		toggle_class(&container, ERROR_CLASS, true)?;
		container.set_text_content(Some(text));
		self.element.append_child(&container)?;
		Ok(())
	}

	pub fn set_hidden(&self, hidden: bool) -> Result<(), DomError> {
		toggle_class(&self.element, HIDDEN_CLASS, hidden)
	}
}
