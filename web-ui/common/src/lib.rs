mod config;

pub use config::{ClientConfig, Environment};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

pub const PROMPT_REQUIRED: &str = "Please enter a prompt.";
pub const TEXT_REQUIRED: &str = "Please enter text to summarize.";
pub const INVALID_MAX_LENGTH: &str = "Please enter a valid max length.";
pub const INVALID_TEMPERATURE: &str = "Please enter a valid temperature.";
pub const API_KEY_WARNING: &str = "⚠️ API key not configured. Please set COHERE_API_KEY in your environment variables.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
	#[error("{0}")]
	Validation(String),
	#[error("{0}")]
	Api(String),
	#[error("{0}")]
	Transport(String),
	#[error("Failed to read the server response: {0}")]
	Decode(String),
	#[error("Element `#{0}` is missing from the page.")]
	MissingElement(String),
	#[error("Page update failed: {0}")]
	Dom(String),
}

impl AppError {
	/// The text shown in the result box. Validation messages are shown as-is.
	pub fn user_message(&self) -> String {
		match self {
			Self::Validation(message) => message.clone(),
			other => format!("Error: {other}"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr, strum::Display, strum::EnumIter)]
pub enum Endpoint {
	#[strum(serialize = "/api/generate")]
	Generate,
	#[strum(serialize = "/api/summarize")]
	Summarize,
	#[strum(serialize = "/api/status")]
	Status,
}

impl Endpoint {
	pub fn method(self) -> &'static str {
		match self {
			Self::Generate | Self::Summarize => "POST",
			Self::Status => "GET",
		}
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerationRequest {
	pub prompt: String,
	pub max_length: u32,
	pub temperature: f64,
}

impl GenerationRequest {
	/// Builds a request from the raw form values. The prompt is sent trimmed.
	pub fn from_form(prompt: &str, max_length: &str, temperature: &str) -> Result<Self, AppError> {
		let prompt = required(prompt, PROMPT_REQUIRED)?;
		Ok(Self { prompt, max_length: parse_max_length(max_length)?, temperature: parse_temperature(temperature)? })
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SummarizationRequest {
	pub text: String,
	pub max_length: u32,
}

impl SummarizationRequest {
	pub fn from_form(text: &str, max_length: &str) -> Result<Self, AppError> {
		let text = required(text, TEXT_REQUIRED)?;
		Ok(Self { text, max_length: parse_max_length(max_length)? })
	}
}

fn required(raw: &str, message: &str) -> Result<String, AppError> {
	let trimmed = raw.trim();
	if trimmed.is_empty() { Err(AppError::Validation(message.to_owned())) } else { Ok(trimmed.to_owned()) }
}

fn parse_max_length(raw: &str) -> Result<u32, AppError> {
	raw.trim().parse::<u32>().ok().ok_or_else(|| AppError::Validation(INVALID_MAX_LENGTH.to_owned()))
}

fn parse_temperature(raw: &str) -> Result<f64, AppError> {
	raw.trim().parse::<f64>().ok().filter(|t| t.is_finite()).ok_or_else(|| AppError::Validation(INVALID_TEMPERATURE.to_owned()))
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Metadata {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tokens_used: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_length: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub temperature: Option<f64>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Metadata {
	pub fn is_empty(&self) -> bool {
		self.tokens_used.is_none() && self.max_length.is_none() && self.temperature.is_none() && self.extra.is_empty()
	}

	/// `Model stats: 5 tokens used | Max length: 100 | Temperature: 0.7`, skipping absent items.
	/// `None` when none of the three items is present.
	pub fn summary_line(&self) -> Option<String> {
		let parts: Vec<String> = [
			self.tokens_used.map(|tokens| format!("{tokens} tokens used")),
			self.max_length.map(|max| format!("Max length: {max}")),
			self.temperature.map(|temperature| format!("Temperature: {temperature}")),
		]
		.into_iter()
		.flatten()
		.collect();
		(!parts.is_empty()).then(|| format!("Model stats: {}", parts.join(" | ")))
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ApiResponse {
	#[serde(default)]
	pub success: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub generated_text: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub model: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
	pub text: String,
	pub metadata: Option<Metadata>,
	pub model: Option<String>,
}

impl ApiResponse {
	pub fn into_outcome(self) -> Result<Generated, AppError> {
		if !self.success {
			return Err(AppError::Api(self.error.unwrap_or_else(|| "Unknown error".to_owned())));
		}
		let text = self.generated_text.ok_or_else(|| AppError::Api("Response did not include generated text".to_owned()))?;
		Ok(Generated { text, metadata: self.metadata, model: self.model })
	}
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusResponse {
	#[serde(default)]
	pub success: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub status: Option<String>,
	#[serde(default)]
	pub api_configured: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub model: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use strum::IntoEnumIterator;

	#[test]
	fn blank_prompt_is_rejected_with_literal_message() {
		for prompt in ["", "   ", "\n\t"] {
			assert_eq!(GenerationRequest::from_form(prompt, "100", "0.7"), Err(AppError::Validation(PROMPT_REQUIRED.to_owned())));
		}
	}

	#[test]
	fn blank_text_is_rejected_with_literal_message() {
		let err = SummarizationRequest::from_form("  ", "50").unwrap_err();
		assert_eq!(err.user_message(), "Please enter text to summarize.");
	}

	#[test]
	fn prompt_is_trimmed_and_numbers_parsed() {
		let request = GenerationRequest::from_form("  write a haiku \n", " 120 ", "0.9").unwrap();
		assert_eq!(request, GenerationRequest { prompt: "write a haiku".to_owned(), max_length: 120, temperature: 0.9 });
	}

	#[test]
	fn invalid_numbers_are_validation_errors() {
		assert_eq!(GenerationRequest::from_form("hi", "abc", "0.7").unwrap_err().user_message(), INVALID_MAX_LENGTH);
		assert_eq!(GenerationRequest::from_form("hi", "-3", "0.7").unwrap_err().user_message(), INVALID_MAX_LENGTH);
		assert_eq!(GenerationRequest::from_form("hi", "100", "warm").unwrap_err().user_message(), INVALID_TEMPERATURE);
		assert_eq!(GenerationRequest::from_form("hi", "100", "NaN").unwrap_err().user_message(), INVALID_TEMPERATURE);
	}

	#[test]
	fn request_bodies_use_backend_field_names() {
		let generation = GenerationRequest { prompt: "p".to_owned(), max_length: 100, temperature: 0.7 };
		assert_eq!(serde_json::to_value(&generation).unwrap(), json!({"prompt": "p", "max_length": 100, "temperature": 0.7}));

		let summarization = SummarizationRequest { text: "t".to_owned(), max_length: 60 };
		assert_eq!(serde_json::to_value(&summarization).unwrap(), json!({"text": "t", "max_length": 60}));
	}

	#[test]
	fn full_metadata_line() {
		let metadata: Metadata = serde_json::from_value(json!({"tokens_used": 5, "max_length": 100, "temperature": 0.7})).unwrap();
		assert_eq!(metadata.summary_line().as_deref(), Some("Model stats: 5 tokens used | Max length: 100 | Temperature: 0.7"));
	}

	#[test]
	fn partial_metadata_line_has_no_leading_separator() {
		let metadata: Metadata = serde_json::from_value(json!({"max_length": 150, "temperature": 0.7, "meta": "billed_units"})).unwrap();
		assert_eq!(metadata.summary_line().as_deref(), Some("Model stats: Max length: 150 | Temperature: 0.7"));
		assert!(!metadata.is_empty());
	}

	#[test]
	fn zero_values_still_count_as_present() {
		let metadata = Metadata { tokens_used: Some(0), temperature: Some(0.0), ..Default::default() };
		assert_eq!(metadata.summary_line().as_deref(), Some("Model stats: 0 tokens used | Temperature: 0"));
	}

	#[test]
	fn empty_or_unknown_only_metadata_has_no_line() {
		assert!(Metadata::default().is_empty());
		assert_eq!(Metadata::default().summary_line(), None);

		let unknown: Metadata = serde_json::from_value(json!({"meta": "x"})).unwrap();
		assert_eq!(unknown.summary_line(), None);
	}

	#[test]
	fn successful_response_becomes_generated() {
		let response: ApiResponse = serde_json::from_value(json!({
			"success": true,
			"generated_text": "T",
			"model": "command",
			"metadata": {"tokens_used": 5}
		}))
		.unwrap();
		let generated = response.into_outcome().unwrap();
		assert_eq!(generated.text, "T");
		assert_eq!(generated.model.as_deref(), Some("command"));
		assert_eq!(generated.metadata.and_then(|m| m.tokens_used), Some(5));
	}

	#[test]
	fn failed_response_surfaces_error_verbatim() {
		let response: ApiResponse = serde_json::from_value(json!({"success": false, "error": "E"})).unwrap();
		let err = response.into_outcome().unwrap_err();
		assert_eq!(err, AppError::Api("E".to_owned()));
		assert_eq!(err.user_message(), "Error: E");
	}

	#[test]
	fn malformed_responses_still_produce_messages() {
		let missing_error: ApiResponse = serde_json::from_value(json!({"success": false})).unwrap();
		assert_eq!(missing_error.into_outcome().unwrap_err().user_message(), "Error: Unknown error");

		let missing_text: ApiResponse = serde_json::from_value(json!({"success": true})).unwrap();
		assert_eq!(missing_text.into_outcome().unwrap_err().user_message(), "Error: Response did not include generated text");
	}

	#[test]
	fn status_payload_from_backend() {
		let status: StatusResponse =
			serde_json::from_value(json!({"success": true, "status": "operational", "api_configured": false, "model": "not_initialized"})).unwrap();
		assert!(!status.api_configured);
		assert_eq!(status.model.as_deref(), Some("not_initialized"));

		let bare: StatusResponse = serde_json::from_value(json!({})).unwrap();
		assert!(!bare.api_configured);
	}

	#[test]
	fn endpoints() {
		let table: Vec<(String, &str)> = Endpoint::iter().map(|e| (e.to_string(), e.method())).collect();
		assert_eq!(
			table,
			vec![("/api/generate".to_owned(), "POST"), ("/api/summarize".to_owned(), "POST"), ("/api/status".to_owned(), "GET")]
		);
	}
}
