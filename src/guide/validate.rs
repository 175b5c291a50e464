//! Validation of raw model responses.
//!
//! The generator is an unreliable producer: its output is parsed strictly
//! as JSON and checked field-by-field before anything downstream touches
//! it. No repair, no partial extraction.

use serde::Deserialize;

use crate::guide::model::{Guide, GuideDecision};
use crate::GuideError;

/// Reason reported when the model rejects a video without saying why.
pub const DEFAULT_REJECTION_REASON: &str = "This video is not suitable for generating a guide";

#[derive(Debug, Deserialize)]
struct RawDecision {
    #[serde(rename = "isTutorial")]
    is_tutorial: bool,
    reason: Option<String>,
    guide: Option<Guide>,
}

/// Parse a raw model response into a guide decision.
///
/// A tutorial verdict requires a complete guide with a non-empty
/// introduction. A rejection takes the model's reason when it gave one,
/// otherwise the generic message.
pub fn parse_decision(raw: &str) -> crate::Result<GuideDecision> {
    let decision: RawDecision = match serde_json::from_str(raw) {
        Ok(d) => d,
        Err(err) => {
            tracing::debug!(error = %err, "Model response failed JSON validation");
            return Err(GuideError::MalformedResponse);
        }
    };

    if decision.is_tutorial {
        let Some(guide) = decision.guide else {
            tracing::debug!("Model marked the video as a tutorial but sent no guide");
            return Err(GuideError::MalformedResponse);
        };

        if guide.introduction.trim().is_empty() {
            tracing::debug!("Model sent a guide with an empty introduction");
            return Err(GuideError::MalformedResponse);
        }

        Ok(GuideDecision::Tutorial(guide))
    } else {
        let reason = decision
            .reason
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_REASON.to_string());

        Ok(GuideDecision::NotTutorial(reason))
    }
}
