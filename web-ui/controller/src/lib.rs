mod view;

use bon::Builder;
use common::{API_KEY_WARNING, ApiResponse, AppError, GenerationRequest, Metadata, SummarizationRequest};
use std::cell::Cell;
use tracing::{debug, error, info, warn};
pub use view::{Backend, PageView, ResultView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
	/// Another request was still in flight; nothing was touched.
	Busy,
	/// A form field was rejected before any request was made.
	Invalid,
	Rendered,
	Failed,
}

#[derive(Builder)]
pub struct PageController<V: PageView, B: Backend> {
	view: V,
	backend: B,
	#[builder(skip)]
	in_flight: Cell<bool>,
}

impl<V: PageView, B: Backend> PageController<V, B> {
	pub fn view(&self) -> &V {
		&self.view
	}

	pub fn is_busy(&self) -> bool {
		self.in_flight.get()
	}

	/// Activates the button carrying `data-tab="{tab_id}"` and the `{tab_id}-content` pane,
	/// deactivating every other one. Nothing changes when that pane does not exist.
	pub fn switch_tab(&self, tab_id: &str) -> Result<(), AppError> {
		let pane_id = format!("{tab_id}-content");
		if !self.view.has_pane(&pane_id) {
			return Err(AppError::MissingElement(pane_id));
		}
		for id in self.view.tab_ids() {
			self.view.set_tab_active(&id, id == tab_id)?;
		}
		for id in self.view.pane_ids().into_iter().filter(|id| *id != pane_id) {
			self.view.set_pane_active(&id, false)?;
		}
		self.view.set_pane_active(&pane_id, true)
	}

	pub fn slider_changed(&self, value: &str) -> Result<(), AppError> {
		self.view.set_temperature_label(value)
	}

	pub async fn submit_generation(&self, prompt: &str, max_length: &str, temperature: &str) -> Result<SubmitOutcome, AppError> {
		if self.reject_if_busy("generate") {
			return Ok(SubmitOutcome::Busy);
		}
		let request = match GenerationRequest::from_form(prompt, max_length, temperature) {
			Ok(request) => request,
			Err(e) => return self.show_error(&e).map(|()| SubmitOutcome::Invalid),
		};
		let Some(_in_flight) = InFlight::acquire(&self.view, &self.in_flight)? else {
			return Ok(SubmitOutcome::Busy);
		};
		info!(prompt_chars = request.prompt.chars().count(), max_length = request.max_length, temperature = request.temperature, "generating text");
		let response = self.backend.generate(&request).await;
		self.render_response(response)
	}

	pub async fn submit_summarization(&self, text: &str, max_length: &str) -> Result<SubmitOutcome, AppError> {
		if self.reject_if_busy("summarize") {
			return Ok(SubmitOutcome::Busy);
		}
		let request = match SummarizationRequest::from_form(text, max_length) {
			Ok(request) => request,
			Err(e) => return self.show_error(&e).map(|()| SubmitOutcome::Invalid),
		};
		let Some(_in_flight) = InFlight::acquire(&self.view, &self.in_flight)? else {
			return Ok(SubmitOutcome::Busy);
		};
		info!(text_chars = request.text.chars().count(), max_length = request.max_length, "summarizing text");
		let response = self.backend.summarize(&request).await;
		self.render_response(response)
	}

	/// Runs once at page load. Only an unconfigured backend is shown to the user.
	pub async fn check_status(&self) -> Result<(), AppError> {
		match self.backend.status().await {
			Ok(status) if !status.api_configured => {
				warn!(model = status.model.as_deref().unwrap_or("unknown"), "backend has no API key configured");
				if self.is_busy() {
					return Ok(());
				}
				self.show_error_text(API_KEY_WARNING.to_owned())
			},
			Ok(status) => {
				info!(model = status.model.as_deref().unwrap_or("unknown"), status = status.status.as_deref().unwrap_or("unknown"), "backend configured");
				Ok(())
			},
			Err(e) => {
				error!("Failed to check API status: {e}");
				Ok(())
			},
		}
	}

	pub fn render_metadata(&self, metadata: Option<&Metadata>) -> Result<(), AppError> {
		let line = metadata.filter(|m| !m.is_empty()).and_then(Metadata::summary_line);
		self.view.render_metadata(line.as_deref())
	}

	fn render_response(&self, response: Result<ApiResponse, AppError>) -> Result<SubmitOutcome, AppError> {
		match response.and_then(ApiResponse::into_outcome) {
			Ok(generated) => {
				debug!(model = generated.model.as_deref().unwrap_or("unknown"), chars = generated.text.chars().count(), "rendering generated text");
				self.view.render_result(&ResultView::Text(generated.text))?;
				self.render_metadata(generated.metadata.as_ref())?;
				Ok(SubmitOutcome::Rendered)
			},
			Err(e) => {
				warn!("request failed: {e}");
				self.show_error(&e)?;
				Ok(SubmitOutcome::Failed)
			},
		}
	}

	fn show_error(&self, err: &AppError) -> Result<(), AppError> {
		self.show_error_text(err.user_message())
	}

	// Any error replaces the result, so metadata from an earlier success must go too.
	fn show_error_text(&self, text: String) -> Result<(), AppError> {
		self.view.render_result(&ResultView::Error(text))?;
		self.view.render_metadata(None)
	}

	fn reject_if_busy(&self, action: &str) -> bool {
		let busy = self.is_busy();
		if busy {
			debug!(action, "ignoring submit while another request is in flight");
		}
		busy
	}
}

/// Owns the loading indicator and the disabled forms for one request.
/// Dropping it restores both, whichever way the request ended.
struct InFlight<'a, V: PageView> {
	view: &'a V,
	flag: &'a Cell<bool>,
}

impl<'a, V: PageView> InFlight<'a, V> {
	fn acquire(view: &'a V, flag: &'a Cell<bool>) -> Result<Option<Self>, AppError> {
		if flag.replace(true) {
			return Ok(None);
		}
		let guard = Self { view, flag };
		view.set_loading(true)?;
		view.set_forms_enabled(false)?;
		Ok(Some(guard))
	}
}

impl<V: PageView> Drop for InFlight<'_, V> {
	fn drop(&mut self) {
		self.flag.set(false);
		if let Err(e) = self.view.set_loading(false) {
			error!("failed to hide loading indicator: {e}");
		}
		if let Err(e) = self.view.set_forms_enabled(true) {
			error!("failed to re-enable forms: {e}");
		}
	}
}
