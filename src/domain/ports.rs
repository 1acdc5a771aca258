use crate::core::client::ServiceClient;
use crate::domain::model::{
    CharacterDetail, CharacterSearchResult, CombatImage, CombatRequest, HealthStatus,
    SearchResult, ServiceInfo,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The image service as seen by a host process. Implementations keep the
/// failure policy documented on [`ServiceClient`] for each method.
#[async_trait]
pub trait ImageService: Send + Sync {
    async fn health_check(&self) -> Option<HealthStatus>;
    async fn service_info(&self) -> Result<ServiceInfo>;
    async fn generate_combat_image(&self, request: &CombatRequest) -> Result<CombatImage>;
    async fn search_pinterest(&self, query: &str, max_results: Option<u32>) -> SearchResult;
    async fn search_vs_battles(&self, character_name: &str) -> CharacterSearchResult;
    async fn get_vs_battles_detail(&self, url: &str) -> Result<CharacterDetail>;
}

#[async_trait]
impl ImageService for ServiceClient {
    async fn health_check(&self) -> Option<HealthStatus> {
        ServiceClient::health_check(self).await
    }

    async fn service_info(&self) -> Result<ServiceInfo> {
        ServiceClient::service_info(self).await
    }

    async fn generate_combat_image(&self, request: &CombatRequest) -> Result<CombatImage> {
        ServiceClient::generate_combat_image(self, request).await
    }

    async fn search_pinterest(&self, query: &str, max_results: Option<u32>) -> SearchResult {
        ServiceClient::search_pinterest(self, query, max_results).await
    }

    async fn search_vs_battles(&self, character_name: &str) -> CharacterSearchResult {
        ServiceClient::search_vs_battles(self, character_name).await
    }

    async fn get_vs_battles_detail(&self, url: &str) -> Result<CharacterDetail> {
        ServiceClient::get_vs_battles_detail(self, url).await
    }
}
