use common::{ApiResponse, AppError, ClientConfig, Endpoint, GenerationRequest, StatusResponse, SummarizationRequest};
use controller::Backend;
use reqwest::{Client, Response, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

pub struct HttpBackend {
	client: Client,
	config: ClientConfig,
}

impl HttpBackend {
	pub fn new(config: ClientConfig) -> Result<Self, AppError> {
		let mut headers = header::HeaderMap::new();
		headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));
		let client = Client::builder().default_headers(headers).build().map_err(|e| AppError::Transport(format!("Failed to build client: {e}")))?;
		Ok(Self { client, config })
	}

	async fn post<T: Serialize + ?Sized, R: DeserializeOwned>(&self, endpoint: Endpoint, body: &T) -> Result<R, AppError> {
		let url = self.config.endpoint_url(endpoint)?;
		debug!(method = endpoint.method(), %url, "sending request");
		let res = self.client.post(url).json(body).send().await.map_err(transport)?;
		decode(res).await
	}

	async fn get<R: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<R, AppError> {
		let url = self.config.endpoint_url(endpoint)?;
		debug!(method = endpoint.method(), %url, "sending request");
		let res = self.client.get(url).send().await.map_err(transport)?;
		decode(res).await
	}
}

fn transport(e: reqwest::Error) -> AppError {
	AppError::Transport(e.to_string())
}

// The backend answers application errors with a 5xx status and a JSON body,
// so the body is decoded whatever the status.
async fn decode<R: DeserializeOwned>(res: Response) -> Result<R, AppError> {
	let status = res.status();
	let body = res.text().await.map_err(transport)?;
	serde_json::from_str(&body).map_err(|e| AppError::Decode(format!("HTTP {status}: {e}")))
}

#[async_trait::async_trait(?Send)]
impl Backend for HttpBackend {
	async fn generate(&self, request: &GenerationRequest) -> Result<ApiResponse, AppError> {
		self.post(Endpoint::Generate, request).await
	}

	async fn summarize(&self, request: &SummarizationRequest) -> Result<ApiResponse, AppError> {
		self.post(Endpoint::Summarize, request).await
	}

	async fn status(&self) -> Result<StatusResponse, AppError> {
		self.get(Endpoint::Status).await
	}
}
