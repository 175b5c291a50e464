//! vidguide - Turn YouTube tutorial videos into step-by-step written guides
//!
//! Given a video URL, vidguide fetches the caption transcript and title,
//! asks a text-generation model for a structured guide, and validates the
//! response before showing it.

pub mod cli;
pub mod config;
pub mod guide;
pub mod llm;
pub mod youtube;

use thiserror::Error;

/// Request-level error taxonomy for vidguide.
///
/// Every variant's message is what the user sees; underlying causes
/// (transport errors, parse failures, HTTP statuses) are logged at the
/// failing component and never surfaced verbatim. `NotSuitable` is the
/// exception: its reason text is authored by the model and meant to be
/// shown.
#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Invalid YouTube URL")]
    InvalidUrl,

    #[error("No transcript is available for this video")]
    TranscriptUnavailable,

    #[error("Video not found")]
    VideoNotFound,

    #[error("Failed to generate the guide")]
    GenerationFailed,

    #[error("The model returned a response that could not be understood")]
    MalformedResponse,

    #[error("{0}")]
    NotSuitable(String),
}

pub type Result<T> = std::result::Result<T, GuideError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "vidguide";
