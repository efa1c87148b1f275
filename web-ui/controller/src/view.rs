use common::{ApiResponse, AppError, GenerationRequest, StatusResponse, SummarizationRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
	Text(String),
	Error(String),
}

/// The DOM regions the controller reads and writes.
pub trait PageView {
	/// `data-tab` values of every tab button, in document order.
	fn tab_ids(&self) -> Vec<String>;
	fn pane_ids(&self) -> Vec<String>;
	fn has_pane(&self, pane_id: &str) -> bool;
	fn set_tab_active(&self, tab_id: &str, active: bool) -> Result<(), AppError>;
	fn set_pane_active(&self, pane_id: &str, active: bool) -> Result<(), AppError>;

	fn set_temperature_label(&self, value: &str) -> Result<(), AppError>;

	/// Error text must never be interpreted as markup.
	fn render_result(&self, result: &ResultView) -> Result<(), AppError>;
	/// `None` hides the metadata region.
	fn render_metadata(&self, line: Option<&str>) -> Result<(), AppError>;

	fn set_loading(&self, visible: bool) -> Result<(), AppError>;
	fn set_forms_enabled(&self, enabled: bool) -> Result<(), AppError>;
}

#[async_trait::async_trait(?Send)]
pub trait Backend {
	async fn generate(&self, request: &GenerationRequest) -> Result<ApiResponse, AppError>;
	async fn summarize(&self, request: &SummarizationRequest) -> Result<ApiResponse, AppError>;
	async fn status(&self) -> Result<StatusResponse, AppError>;
}
