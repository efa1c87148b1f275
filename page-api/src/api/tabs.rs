use crate::{
	error::DomError,
	types::{ACTIVE_CLASS, ListenerHandle, TAB_ATTRIBUTE, TAB_BUTTON_SELECTOR, TAB_PANE_SELECTOR, attach_listener},
	utils::{get_element, query_all, toggle_class},
};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

/// The page's tab buttons and the panes they switch between.
#[derive(Clone)]
pub struct TabBar {
	document: Document,
	buttons: Vec<Element>,
	panes: Vec<Element>,
}

impl TabBar {
	pub(crate) fn new(document: &Document) -> Result<Self, DomError> {
		Ok(Self { document: document.clone(), buttons: query_all(document, TAB_BUTTON_SELECTOR)?, panes: query_all(document, TAB_PANE_SELECTOR)? })
	}

	pub fn tab_ids(&self) -> Vec<String> {
		self.buttons.iter().filter_map(|button| button.get_attribute(TAB_ATTRIBUTE)).collect()
	}

	pub fn pane_ids(&self) -> Vec<String> {
		self.panes.iter().map(Element::id).filter(|id| !id.is_empty()).collect()
	}

	pub fn set_tab_active(&self, tab_id: &str, active: bool) -> Result<(), DomError> {
		for button in self.buttons.iter().filter(|button| button.get_attribute(TAB_ATTRIBUTE).as_deref() == Some(tab_id)) {
			toggle_class(button, ACTIVE_CLASS, active)?;
		}
		Ok(())
	}

	pub fn set_pane_active(&self, pane_id: &str, active: bool) -> Result<(), DomError> {
		let pane: Element = get_element(&self.document, pane_id)?;
		toggle_class(&pane, ACTIVE_CLASS, active)
	}

	/// Registers one click listener per button; `callback` receives the button's `data-tab` value.
	pub fn on_click(&self, callback: impl Fn(String) + 'static) -> Result<Vec<ListenerHandle>, DomError> {
		let callback = Rc::new(callback);
		self.buttons
			.iter()
			.map(|button| {
				let callback = Rc::clone(&callback);
				let tab_id = button.get_attribute(TAB_ATTRIBUTE).unwrap_or_default();
				attach_listener(button.as_ref(), "click", Closure::wrap(Box::new(move |_: Event| callback(tab_id.clone())) as Box<dyn FnMut(Event)>))
			})
			.collect()
	}
}
