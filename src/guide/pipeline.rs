//! Guide pipeline orchestration

use crate::config::Settings;
use crate::guide::model::{Guide, GuideDecision};
use crate::guide::validate::parse_decision;
use crate::llm::{build_provider, GuideRequest, LlmProvider};
use crate::youtube::{MetadataFetcher, TranscriptFetcher, VideoId};
use crate::GuideError;

/// End-to-end pipeline from a video URL to a validated guide.
///
/// Stateless and reentrant: every run re-fetches the transcript and title
/// and makes a fresh generation request. The first failing stage aborts
/// the run; nothing is retried.
pub struct GuidePipeline {
    transcripts: TranscriptFetcher,
    metadata: MetadataFetcher,
    provider: Box<dyn LlmProvider>,
}

impl GuidePipeline {
    /// Wire the pipeline from runtime settings.
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        Ok(Self {
            transcripts: TranscriptFetcher::from_settings(settings)?,
            metadata: MetadataFetcher::from_settings(settings)?,
            provider: build_provider(settings)?,
        })
    }

    /// Assemble a pipeline from parts. Lets tests substitute the provider.
    pub fn new(
        transcripts: TranscriptFetcher,
        metadata: MetadataFetcher,
        provider: Box<dyn LlmProvider>,
    ) -> Self {
        Self {
            transcripts,
            metadata,
            provider,
        }
    }

    /// Run the full pipeline for one video URL.
    pub async fn generate(&self, video_url: &str) -> crate::Result<Guide> {
        let video_id = VideoId::parse(video_url)?;
        tracing::info!(video_id = %video_id, "Generating guide");

        // The transcript and the title are independent; fetch them
        // concurrently. When both fail, the transcript error is reported.
        let (transcript, title) = tokio::join!(
            self.transcripts.fetch(&video_id),
            self.metadata.fetch_title(&video_id),
        );
        let transcript = transcript?;
        let title = title?;

        tracing::debug!(
            video_id = %video_id,
            transcript_chars = transcript.len(),
            title = %title,
            "Inputs ready, invoking model"
        );

        let response = self
            .provider
            .generate(GuideRequest {
                title: &title,
                transcript: &transcript,
            })
            .await?;

        match parse_decision(&response)? {
            GuideDecision::Tutorial(guide) => {
                tracing::info!(video_id = %video_id, steps = guide.steps.len(), "Guide generated");
                Ok(guide)
            }
            GuideDecision::NotTutorial(reason) => {
                tracing::info!(video_id = %video_id, "Model judged the video unsuitable");
                Err(GuideError::NotSuitable(reason))
            }
        }
    }
}
