use crate::error::DomError;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

pub fn get_element<T: JsCast>(document: &Document, id: &str) -> Result<T, DomError> {
	document
		.get_element_by_id(id)
		.ok_or_else(|| DomError::ElementNotFound(id.to_owned()))?
		.dyn_into()
		.map_err(|el: Element| DomError::UnexpectedElement { id: el.id(), expected: std::any::type_name::<T>() })
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
	let nodes = document.query_selector_all(selector)?;
	Ok((0..nodes.length()).filter_map(|i| nodes.item(i)).filter_map(|node| node.dyn_into::<Element>().ok()).collect())
}

pub fn toggle_class(element: &Element, class: &str, on: bool) -> Result<(), DomError> {
	element.class_list().toggle_with_force(class, on)?;
	Ok(())
}
