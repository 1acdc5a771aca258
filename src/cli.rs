use crate::config::cli::Command;
use crate::domain::model::CombatRequest;
use crate::domain::ports::ImageService;
use crate::utils::error::{ErrorCategory, Result, ServiceError};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Unhealthy,
}

pub async fn execute<S, W>(service: &S, command: &Command, out: &mut W) -> Result<Outcome>
where
    S: ImageService + ?Sized,
    W: Write,
{
    match command {
        Command::Health => match service.health_check().await {
            Some(status) => {
                write_json(out, &status)?;
                Ok(Outcome::Success)
            }
            None => {
                tracing::warn!("⚠️ Image service is unreachable or unhealthy");
                writeln!(out, "null")?;
                Ok(Outcome::Unhealthy)
            }
        },
        Command::Info => {
            let info = service.service_info().await?;
            write_json(out, &info)?;
            Ok(Outcome::Success)
        }
        Command::Combat { input, output } => {
            let raw = std::fs::read_to_string(input)?;
            let request: CombatRequest =
                serde_json::from_str(&raw).map_err(|e| ServiceError::ConfigValidationError {
                    field: input.display().to_string(),
                    message: format!("combat request is not valid JSON: {}", e),
                })?;

            let image = service.generate_combat_image(&request).await?;
            std::fs::write(output, image.as_bytes())?;
            tracing::info!("💾 Wrote {} bytes to {}", image.len(), output.display());
            Ok(Outcome::Success)
        }
        Command::Pinterest { query, max_results } => {
            let result = service.search_pinterest(query, *max_results).await;
            if result.is_empty() {
                tracing::info!("No Pinterest images (nothing found, or the service call failed)");
            }
            write_json(out, &result)?;
            Ok(Outcome::Success)
        }
        Command::VsbSearch { name } => {
            let result = service.search_vs_battles(name).await;
            write_json(out, &result)?;
            Ok(Outcome::Success)
        }
        Command::VsbDetail { url } => {
            let detail = service.get_vs_battles_detail(url).await?;
            write_json(out, &detail)?;
            Ok(Outcome::Success)
        }
    }
}

pub fn exit_code(error: &ServiceError) -> i32 {
    match error.category() {
        ErrorCategory::Configuration => 2,
        ErrorCategory::Transport => 3,
        ErrorCategory::Status => 4,
        ErrorCategory::Decoding => 5,
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(std::io::Error::from)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::endpoints::Operation;
    use crate::domain::model::{
        CharacterDetail, CharacterSearchResult, CombatImage, HealthStatus, PinterestImage,
        RenderedImage, SearchResult, ServiceInfo,
    };
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Default)]
    struct StubService {
        healthy: bool,
        combat_requests: Mutex<Vec<CombatRequest>>,
    }

    #[async_trait]
    impl ImageService for StubService {
        async fn health_check(&self) -> Option<HealthStatus> {
            self.healthy.then(|| HealthStatus(json!({ "status": "ok" })))
        }

        async fn service_info(&self) -> Result<ServiceInfo> {
            Err(ServiceError::Status {
                operation: Operation::ServiceInfo,
                status: 503,
                body: "maintenance".to_string(),
            })
        }

        async fn generate_combat_image(&self, request: &CombatRequest) -> Result<CombatImage> {
            self.combat_requests.lock().unwrap().push(request.clone());
            Ok(RenderedImage::new(vec![1, 2, 3, 4]))
        }

        async fn search_pinterest(&self, query: &str, max_results: Option<u32>) -> SearchResult {
            SearchResult {
                images: vec![PinterestImage::Url(format!(
                    "https://i.pinimg.com/{}-{}.jpg",
                    query,
                    max_results.unwrap_or(10)
                ))],
                ..Default::default()
            }
        }

        async fn search_vs_battles(&self, _character_name: &str) -> CharacterSearchResult {
            CharacterSearchResult::empty()
        }

        async fn get_vs_battles_detail(&self, url: &str) -> Result<CharacterDetail> {
            Ok(serde_json::from_value(json!({ "name": url })).unwrap())
        }
    }

    #[tokio::test]
    async fn health_reports_unhealthy_as_null() {
        let service = StubService::default();
        let mut out = Vec::new();

        let outcome = execute(&service, &Command::Health, &mut out).await.unwrap();

        assert_eq!(outcome, Outcome::Unhealthy);
        assert_eq!(String::from_utf8(out).unwrap().trim(), "null");
    }

    #[tokio::test]
    async fn health_prints_status_when_up() {
        let service = StubService {
            healthy: true,
            ..Default::default()
        };
        let mut out = Vec::new();

        let outcome = execute(&service, &Command::Health, &mut out).await.unwrap();

        assert_eq!(outcome, Outcome::Success);
        let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn pinterest_prints_results() {
        let service = StubService::default();
        let mut out = Vec::new();
        let command = Command::Pinterest {
            query: "cat".to_string(),
            max_results: Some(3),
        };

        execute(&service, &command, &mut out).await.unwrap();

        let printed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(printed, json!({ "images": ["https://i.pinimg.com/cat-3.jpg"] }));
    }

    #[tokio::test]
    async fn combat_reads_input_and_writes_png() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("scene.json");
        let output = temp_dir.path().join("scene.png");
        std::fs::write(
            &input,
            r#"{"players":[{"name":"Aria","class":"MAGE"}],"enemies":[],"combatType":"PVE","background":"forest.png"}"#,
        )
        .unwrap();

        let service = StubService::default();
        let command = Command::Combat {
            input: input.clone(),
            output: output.clone(),
        };
        let outcome = execute(&service, &command, &mut Vec::new()).await.unwrap();

        assert_eq!(outcome, Outcome::Success);
        assert_eq!(std::fs::read(&output).unwrap(), vec![1, 2, 3, 4]);
        let requests = service.combat_requests.lock().unwrap();
        assert_eq!(requests[0].players[0].class, "MAGE");
        assert_eq!(requests[0].background, "forest.png");
    }

    #[tokio::test]
    async fn combat_rejects_malformed_input() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("broken.json");
        std::fs::write(&input, "{ not json").unwrap();

        let command = Command::Combat {
            input,
            output: temp_dir.path().join("never.png"),
        };
        let err = execute(&StubService::default(), &command, &mut Vec::new())
            .await
            .unwrap_err();

        assert_eq!(exit_code(&err), 2);
    }

    #[tokio::test]
    async fn propagated_errors_map_to_exit_codes() {
        let err = execute(&StubService::default(), &Command::Info, &mut Vec::new())
            .await
            .unwrap_err();
        assert_eq!(exit_code(&err), 4);
    }
}
