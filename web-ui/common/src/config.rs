use crate::{AppError, Endpoint};
use std::str::FromStr;
use url::Url;

/// Build environment, taken from the `ENV` variable the app's build script exports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Environment {
	#[default]
	Local,
	Staging,
	Production,
}

impl Environment {
	/// Unknown names fall back to `Local`.
	pub fn from_build(raw: &str) -> Self {
		Self::from_str(raw.trim()).unwrap_or_default()
	}

	pub fn log_level(self) -> tracing::Level {
		match self {
			Self::Local => tracing::Level::DEBUG,
			Self::Staging | Self::Production => tracing::Level::INFO,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
	base_url: Url,
	environment: Environment,
}

impl ClientConfig {
	/// A non-empty `api_base_url` wins over the page origin. The base always ends in `/`
	/// so endpoint paths join below it instead of replacing its last segment.
	pub fn resolve(api_base_url: Option<&str>, origin: &str, environment: Environment) -> Result<Self, AppError> {
		let raw = api_base_url.map(str::trim).filter(|url| !url.is_empty()).unwrap_or(origin);
		let mut base_url = Url::parse(raw).map_err(|e| AppError::Transport(format!("Invalid API base URL `{raw}`: {e}")))?;
		if base_url.cannot_be_a_base() {
			return Err(AppError::Transport(format!("API base URL `{raw}` cannot hold endpoint paths")));
		}
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());
			base_url.set_path(&path);
		}
		Ok(Self { base_url, environment })
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	pub fn environment(&self) -> Environment {
		self.environment
	}

	pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, AppError> {
		self.base_url
			.join(endpoint.as_ref().trim_start_matches('/'))
			.map_err(|e| AppError::Transport(format!("Cannot build URL for {endpoint}: {e}")))
	}
}
