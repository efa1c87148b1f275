mod dom;
mod http;

use common::{AppError, ClientConfig, Environment};
use controller::PageController;
use dom::{DomView, GENERATE_FORM, SUMMARIZE_FORM, dom_error};
use http::HttpBackend;
use page_api::{ListenerHandle, Page};
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

const TEMPERATURE: &str = "temperature";
const PROMPT: &str = "prompt";
const MAX_LENGTH: &str = "max-length";
const TEXT_TO_SUMMARIZE: &str = "text-to-summarize";
const SUMMARY_LENGTH: &str = "summary-length";

type Controller = PageController<DomView, HttpBackend>;

thread_local! {
	// Listeners unregister on drop, so they live for the rest of the page.
	static LISTENERS: RefCell<Vec<ListenerHandle>> = const { RefCell::new(Vec::new()) };
}

#[wasm_bindgen]
pub fn main() {
	console_error_panic_hook::set_once();
	let environment = Environment::from_build(env!("ENV"));
	tracing_wasm::set_as_global_default_with_config(tracing_wasm::WASMLayerConfigBuilder::new().set_max_level(environment.log_level()).build());

	if let Err(e) = page_api::when_ready(move |page| {
		if let Err(e) = start(&page, environment) {
			error!("[page] Failed to start: {e}");
		}
	}) {
		error!("[page] No document to attach to: {e}");
	}
}

fn start(page: &Page, environment: Environment) -> Result<(), AppError> {
	let origin = page.origin().map_err(dom_error)?;
	let config = ClientConfig::resolve(Some(env!("API_BASE_URL")), &origin, environment)?;
	info!(base_url = %config.base_url(), environment = %config.environment(), "starting page controller");

	let view = DomView::bind(page).map_err(dom_error)?;
	let controller = Rc::new(PageController::builder().view(view).backend(HttpBackend::new(config)?).build());

	let listeners = bind_listeners(page, &controller).map_err(dom_error)?;
	LISTENERS.with_borrow_mut(|handles| handles.extend(listeners));

	spawn_local(async move {
		if let Err(e) = controller.check_status().await {
			error!("[page] Failed to render status warning: {e}");
		}
	});
	Ok(())
}

fn bind_listeners(page: &Page, controller: &Rc<Controller>) -> Result<Vec<ListenerHandle>, page_api::error::DomError> {
	let mut handles = Vec::new();

	let c = Rc::clone(controller);
	handles.extend(page.tabs()?.on_click(move |tab_id| {
		if let Err(e) = c.switch_tab(&tab_id) {
			error!(tab_id = tab_id.as_str(), "[page] Tab switch failed: {e}");
		}
	})?);

	let temperature = page.field(TEMPERATURE)?;
	let c = Rc::clone(controller);
	handles.push(temperature.on_input(move |value| {
		if let Err(e) = c.slider_changed(&value) {
			error!("[page] Failed to update temperature label: {e}");
		}
	})?);

	let prompt = page.field(PROMPT)?;
	let max_length = page.field(MAX_LENGTH)?;
	let c = Rc::clone(controller);
	handles.push(page.form(GENERATE_FORM)?.on_submit(move || {
		let c = Rc::clone(&c);
		let (prompt, max_length, temperature) = (prompt.value(), max_length.value(), temperature.value());
		spawn_local(async move {
			match c.submit_generation(&prompt, &max_length, &temperature).await {
				Ok(outcome) => debug!(?outcome, "[page] generation submit handled"),
				Err(e) => error!("[page] Generation submit failed: {e}"),
			}
		});
	})?);

	let text = page.field(TEXT_TO_SUMMARIZE)?;
	let summary_length = page.field(SUMMARY_LENGTH)?;
	let c = Rc::clone(controller);
	handles.push(page.form(SUMMARIZE_FORM)?.on_submit(move || {
		let c = Rc::clone(&c);
		let (text, summary_length) = (text.value(), summary_length.value());
		spawn_local(async move {
			match c.submit_summarization(&text, &summary_length).await {
				Ok(outcome) => debug!(?outcome, "[page] summarization submit handled"),
				Err(e) => error!("[page] Summarization submit failed: {e}"),
			}
		});
	})?);

	Ok(handles)
}
