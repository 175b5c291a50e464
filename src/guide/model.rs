//! Guide document model

use serde::{Deserialize, Serialize};

/// A validated step-by-step guide produced from a tutorial video.
///
/// Every field is required when deserializing a model response; a missing
/// field invalidates the whole document rather than being defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    /// What the tutorial builds and why
    pub introduction: String,

    /// Tools, software, or knowledge needed before starting (ordered)
    pub prerequisites: Vec<String>,

    /// Ordered instructions
    pub steps: Vec<Step>,

    /// How to verify the result
    pub testing: String,

    /// Wrap-up and possible extensions
    pub conclusion: String,
}

/// One instruction in a guide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Short label for the step
    pub title: String,

    /// What to do and why
    pub description: String,

    /// Code or commands for this step, shown verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// The model's judgment about a video, taken as authoritative.
#[derive(Debug, Clone, PartialEq)]
pub enum GuideDecision {
    /// The video is a tutorial; carries the validated guide
    Tutorial(Guide),

    /// The video cannot be turned into a guide, with the model's reason
    NotTutorial(String),
}
