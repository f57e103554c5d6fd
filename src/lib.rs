pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod logger;
pub mod models;
pub mod prompt;
pub mod view;

pub use backend::{GenerateClient, HistoryClient, StudioClient};
pub use config::BackendConfig;
pub use controller::{GenerationController, UiState, GENERIC_FAILURE_MESSAGE};
pub use error::{Result, StudioError};
pub use models::{
    AspectRatio, GenerationRequest, HistoryEntry, ImagePayload, PromptForm, Style,
};
pub use prompt::enhance_prompt;
pub use view::{ConsoleSurface, Surface};
