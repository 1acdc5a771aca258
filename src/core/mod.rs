pub mod client;
pub mod endpoints;

pub use crate::domain::model::{CombatImage, RenderedImage};
pub use crate::domain::ports::ImageService;
pub use crate::utils::error::Result;
