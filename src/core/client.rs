use crate::config::ClientConfig;
use crate::core::endpoints::{Operation, DEFAULT_PINTEREST_RESULTS};
use crate::domain::model::{
    CharacterDetail, CharacterSearchResult, CombatImage, EndScreenRequest, HealthStatus,
    LeaderboardRequest, LudoRequest, RenderedImage, SearchResult, ServiceInfo, TicTacToeRequest,
};
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::Validate;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

const IMAGE_ACCEPT: &str = "image/png, application/octet-stream;q=0.9, */*;q=0.5";

/// Async client for the image service.
///
/// Configuration is captured once at construction and never re-read. The
/// client holds no per-call state, so clones can be shared freely across
/// tasks.
///
/// Each operation has its own failure policy:
///
/// | operation | on failure |
/// |---|---|
/// | [`health_check`](Self::health_check) | `None`, nothing logged above debug |
/// | [`generate_combat_image`](Self::generate_combat_image) and the other renders | logged, error returned |
/// | [`service_info`](Self::service_info) | logged, error returned |
/// | [`search_pinterest`](Self::search_pinterest) | logged, `{ images: [] }` |
/// | [`search_vs_battles`](Self::search_vs_battles) | logged, `{ characters: [] }` |
/// | [`get_vs_battles_detail`](Self::get_vs_battles_detail) | logged, error returned |
#[derive(Debug, Clone)]
pub struct ServiceClient {
    config: ClientConfig,
    client: Client,
}

impl ServiceClient {
    /// Base URL priority: `base_url`, then `GO_IMAGE_SERVICE_URL`, then
    /// `http://localhost:8080`. Does not touch the network.
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        Self::with_config(ClientConfig::resolve(base_url))
    }

    pub fn with_config(mut config: ClientConfig) -> Result<Self> {
        config.validate()?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        // reqwest applies no body size cap of its own; limits are enforced here
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ServiceError::ClientBuild)?;

        tracing::debug!(
            "Image service client bound to {} (timeout {:?})",
            config.base_url,
            config.timeout
        );

        Ok(Self { config, client })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Probe `/health`. Never fails: any fault becomes `None`.
    ///
    /// A body that is not JSON is returned as a JSON string.
    pub async fn health_check(&self) -> Option<HealthStatus> {
        match self.get_bytes(Operation::HealthCheck, &[]).await {
            Ok(bytes) => {
                let value = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                    serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
                });
                Some(HealthStatus(value))
            }
            Err(e) => {
                tracing::debug!("Image service health check failed: {}", e);
                None
            }
        }
    }

    pub async fn service_info(&self) -> Result<ServiceInfo> {
        self.get_json(Operation::ServiceInfo, &[])
            .await
            .inspect_err(|e| log_failure(Operation::ServiceInfo, e))
    }

    /// Render a combat scene. `request` is serialized as-is, so any
    /// `Serialize` payload is accepted, typically [`crate::CombatRequest`]
    /// or a raw `serde_json::Value`.
    pub async fn generate_combat_image<R>(&self, request: &R) -> Result<CombatImage>
    where
        R: Serialize + ?Sized,
    {
        self.post_for_image(Operation::CombatImage, request)
            .await
            .inspect_err(|e| log_failure(Operation::CombatImage, e))
    }

    pub async fn generate_end_screen(&self, text: &str) -> Result<RenderedImage> {
        let request = EndScreenRequest {
            text: text.to_string(),
        };
        self.post_for_image(Operation::EndScreen, &request)
            .await
            .inspect_err(|e| log_failure(Operation::EndScreen, e))
    }

    pub async fn render_ludo_board(&self, state: &LudoRequest) -> Result<RenderedImage> {
        self.post_for_image(Operation::LudoBoard, state)
            .await
            .inspect_err(|e| log_failure(Operation::LudoBoard, e))
    }

    pub async fn render_tic_tac_toe(&self, board: &TicTacToeRequest) -> Result<RenderedImage> {
        self.post_for_image(Operation::TicTacToeBoard, board)
            .await
            .inspect_err(|e| log_failure(Operation::TicTacToeBoard, e))
    }

    pub async fn render_leaderboard(&self, scores: &LeaderboardRequest) -> Result<RenderedImage> {
        self.post_for_image(Operation::Leaderboard, scores)
            .await
            .inspect_err(|e| log_failure(Operation::Leaderboard, e))
    }

    /// Search Pinterest. `max_results` defaults to 10 and is forwarded
    /// without any client-side bound.
    ///
    /// Failures are logged and reported as an empty result, which looks
    /// the same as a search with no hits.
    pub async fn search_pinterest(&self, query: &str, max_results: Option<u32>) -> SearchResult {
        let max_results = max_results.unwrap_or(DEFAULT_PINTEREST_RESULTS);
        let params = [
            ("query", query.to_string()),
            ("maxResults", max_results.to_string()),
        ];

        match self.get_json(Operation::PinterestSearch, &params).await {
            Ok(result) => result,
            Err(e) => {
                log_failure(Operation::PinterestSearch, &e);
                SearchResult::empty()
            }
        }
    }

    /// Search VS Battles by character name. Failures become an empty
    /// result, as with [`search_pinterest`](Self::search_pinterest).
    pub async fn search_vs_battles(&self, character_name: &str) -> CharacterSearchResult {
        let params = [("query", character_name.to_string())];

        match self.get_json(Operation::VsBattlesSearch, &params).await {
            Ok(result) => result,
            Err(e) => {
                log_failure(Operation::VsBattlesSearch, &e);
                CharacterSearchResult::empty()
            }
        }
    }

    /// Fetch a character page. `url` must be a full wiki URL.
    pub async fn get_vs_battles_detail(&self, url: &str) -> Result<CharacterDetail> {
        let params = [("url", url.to_string())];

        self.get_json(Operation::VsBattlesDetail, &params)
            .await
            .inspect_err(|e| log_failure(Operation::VsBattlesDetail, e))
    }

    fn endpoint(&self, operation: Operation) -> String {
        format!("{}{}", self.config.base_url, operation.path())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        query: &[(&str, String)],
    ) -> Result<T> {
        let bytes = self.get_bytes(operation, query).await?;
        serde_json::from_slice(&bytes).map_err(|source| ServiceError::Decode { operation, source })
    }

    async fn get_bytes(&self, operation: Operation, query: &[(&str, String)]) -> Result<Vec<u8>> {
        let url = self.endpoint(operation);
        tracing::debug!("GET {} {:?}", url, query);

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = self.send(operation, request).await?;
        self.read_body(operation, response).await
    }

    async fn post_for_image<R>(&self, operation: Operation, payload: &R) -> Result<RenderedImage>
    where
        R: Serialize + ?Sized,
    {
        let body = self.encode_body(operation, payload)?;
        let url = self.endpoint(operation);
        tracing::debug!("POST {} ({} bytes)", url, body.len());

        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, IMAGE_ACCEPT)
            .body(body);

        let response = self.send(operation, request).await?;
        let bytes = self.read_body(operation, response).await?;
        tracing::debug!("{} returned {} bytes", operation, bytes.len());

        Ok(RenderedImage::new(bytes))
    }

    fn encode_body<R>(&self, operation: Operation, payload: &R) -> Result<Vec<u8>>
    where
        R: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload)
            .map_err(|source| ServiceError::Encode { operation, source })?;

        if let Some(limit) = self.config.max_request_body_bytes {
            let actual = body.len() as u64;
            if actual > limit {
                return Err(ServiceError::RequestTooLarge {
                    operation,
                    limit,
                    actual,
                });
            }
        }

        Ok(body)
    }

    async fn send(&self, operation: Operation, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|source| ServiceError::Transport { operation, source })?;

        let status = response.status();
        tracing::debug!("{} response status: {}", operation, status);

        if !status.is_success() {
            // error bodies obey the same response limit; an oversized one is dropped
            let body = match self.read_body(operation, response).await {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(e) => {
                    tracing::debug!("{} error body discarded: {}", operation, e);
                    String::new()
                }
            };
            return Err(ServiceError::Status {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn read_body(&self, operation: Operation, mut response: Response) -> Result<Vec<u8>> {
        let transport = |source: reqwest::Error| ServiceError::Transport { operation, source };

        let Some(limit) = self.config.max_response_body_bytes else {
            let bytes = response.bytes().await.map_err(transport)?;
            return Ok(bytes.to_vec());
        };

        if let Some(declared) = response.content_length() {
            if declared > limit {
                return Err(ServiceError::ResponseTooLarge {
                    operation,
                    limit,
                    actual: declared,
                });
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(transport)? {
            body.extend_from_slice(&chunk);
            let actual = body.len() as u64;
            if actual > limit {
                return Err(ServiceError::ResponseTooLarge {
                    operation,
                    limit,
                    actual,
                });
            }
        }

        Ok(body)
    }
}

fn log_failure(operation: Operation, error: &ServiceError) {
    tracing::error!(
        operation = operation.name(),
        "❌ Image service {} call failed: {}",
        operation,
        error
    );
}
