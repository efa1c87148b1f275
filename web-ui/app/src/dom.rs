use common::AppError;
use controller::{PageView, ResultView};
use page_api::{Form, Page, Region, TabBar, error::DomError};

pub const TEMPERATURE_LABEL: &str = "temp-value";
pub const GENERATE_FORM: &str = "generate-form";
pub const SUMMARIZE_FORM: &str = "summarize-form";
pub const RESULT_BOX: &str = "result-box";
pub const METADATA: &str = "metadata";
pub const LOADING: &str = "loading";

pub(crate) fn dom_error(e: DomError) -> AppError {
	match e {
		DomError::ElementNotFound(id) => AppError::MissingElement(id),
		other => AppError::Dom(other.to_string()),
	}
}

/// `PageView` over the elements of the generation page.
pub struct DomView {
	page: Page,
	tabs: TabBar,
	temperature_label: Region,
	result: Region,
	metadata: Region,
	loading: Region,
	forms: [Form; 2],
}

impl DomView {
	pub fn bind(page: &Page) -> Result<Self, DomError> {
		Ok(Self {
			page: page.clone(),
			tabs: page.tabs()?,
			temperature_label: page.region(TEMPERATURE_LABEL)?,
			result: page.region(RESULT_BOX)?,
			metadata: page.region(METADATA)?,
			loading: page.region(LOADING)?,
			forms: [page.form(GENERATE_FORM)?, page.form(SUMMARIZE_FORM)?],
		})
	}
}

impl PageView for DomView {
	fn tab_ids(&self) -> Vec<String> {
		self.tabs.tab_ids()
	}

	fn pane_ids(&self) -> Vec<String> {
		self.tabs.pane_ids()
	}

	fn has_pane(&self, pane_id: &str) -> bool {
		self.page.contains(pane_id)
	}

	fn set_tab_active(&self, tab_id: &str, active: bool) -> Result<(), AppError> {
		self.tabs.set_tab_active(tab_id, active).map_err(dom_error)
	}

	fn set_pane_active(&self, pane_id: &str, active: bool) -> Result<(), AppError> {
		self.tabs.set_pane_active(pane_id, active).map_err(dom_error)
	}

	fn set_temperature_label(&self, value: &str) -> Result<(), AppError> {
		self.temperature_label.set_text(value);
		Ok(())
	}

	fn render_result(&self, result: &ResultView) -> Result<(), AppError> {
		match result {
			ResultView::Text(text) => {
				self.result.set_text(text);
				Ok(())
			},
			ResultView::Error(text) => self.result.set_error_text(text).map_err(dom_error),
		}
	}

	fn render_metadata(&self, line: Option<&str>) -> Result<(), AppError> {
		match line {
			Some(line) => {
				self.metadata.set_text(line);
				self.metadata.set_hidden(false).map_err(dom_error)
			},
			None => self.metadata.set_hidden(true).map_err(dom_error),
		}
	}

	fn set_loading(&self, visible: bool) -> Result<(), AppError> {
		self.loading.set_hidden(!visible).map_err(dom_error)
	}

	fn set_forms_enabled(&self, enabled: bool) -> Result<(), AppError> {
		self.forms.iter().try_for_each(|form| form.set_submit_enabled(enabled)).map_err(dom_error)
	}
}
