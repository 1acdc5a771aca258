pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use crate::core::{client::ServiceClient, endpoints::Operation};
pub use domain::model::{
    CharacterDetail, CharacterSearchResult, CharacterSummary, CombatImage, CombatRequest, Enemy,
    EndScreenRequest, HealthStatus, LeaderboardEntry, LeaderboardRequest, LudoPiece, LudoPlayer,
    LudoRequest, PinterestImage, Player, RenderedImage, SearchResult, ServiceInfo,
    TicTacToeRequest,
};
pub use domain::ports::ImageService;
pub use utils::error::{ErrorCategory, Result, ServiceError};
