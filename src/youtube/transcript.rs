//! Caption transcript retrieval and decoding.

use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;

use crate::config::Settings;
use crate::youtube::VideoId;
use crate::GuideError;

/// Fetches a video's timed-text captions and flattens them to plain text.
///
/// English-only: the caption language is fixed at construction, with no
/// fallback negotiation. Transport errors, unparseable markup, and caption
/// documents with no text all surface as `TranscriptUnavailable`; the
/// distinction is kept in the logs.
pub struct TranscriptFetcher {
    http: Client,
    endpoint: String,
    language: String,
}

impl TranscriptFetcher {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .context("Failed to build caption HTTP client")?,
            endpoint: settings
                .youtube
                .caption_endpoint
                .trim()
                .trim_end_matches('/')
                .to_string(),
            language: settings.youtube.caption_language.trim().to_string(),
        })
    }

    /// Fetch the transcript for a video as one flat string.
    pub async fn fetch(&self, id: &VideoId) -> crate::Result<String> {
        let url = format!("{}?lang={}&v={}", self.endpoint, self.language, id);
        tracing::debug!(video_id = %id, "Fetching caption transcript");

        let response = match self
            .http
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(video_id = %id, error = %err, "Caption request failed");
                return Err(GuideError::TranscriptUnavailable);
            }
        };

        let body = match response.text().await {
            Ok(b) => b,
            Err(err) => {
                tracing::warn!(video_id = %id, error = %err, "Failed to read caption response body");
                return Err(GuideError::TranscriptUnavailable);
            }
        };

        let fragments = match decode_timedtext(&body) {
            Ok(f) => f,
            Err(err) => {
                tracing::warn!(video_id = %id, error = %err, "Caption markup failed to parse");
                return Err(GuideError::TranscriptUnavailable);
            }
        };

        if fragments.is_empty() {
            tracing::warn!(video_id = %id, "Caption document contains no text fragments");
            return Err(GuideError::TranscriptUnavailable);
        }

        Ok(fragments.join(" "))
    }
}

/// Decode a timed-text document into its caption fragments, in document
/// order. Entities are unescaped; whitespace-only fragments are dropped.
fn decode_timedtext(xml: &str) -> std::result::Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut fragments = Vec::new();
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"text" => in_text = true,
            Event::End(e) if e.name().as_ref() == b"text" => in_text = false,
            Event::Text(t) if in_text => {
                let text = t.unescape()?;
                let text = text.trim();
                if !text.is_empty() {
                    fragments.push(text.to_string());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_fragments_in_document_order() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<transcript>
  <text start="0.0" dur="2.1">first we install the tools</text>
  <text start="2.1" dur="1.8">then we create the project</text>
  <text start="3.9" dur="2.4">and finally we run it</text>
</transcript>"#;

        let fragments = decode_timedtext(xml).unwrap();
        assert_eq!(
            fragments,
            vec![
                "first we install the tools",
                "then we create the project",
                "and finally we run it",
            ]
        );
        assert_eq!(
            fragments.join(" "),
            "first we install the tools then we create the project and finally we run it"
        );
    }

    #[test]
    fn unescapes_entities() {
        let xml = r#"<transcript><text start="0" dur="1">don&#39;t forget &amp;&amp; chains</text></transcript>"#;
        let fragments = decode_timedtext(xml).unwrap();
        assert_eq!(fragments, vec!["don't forget && chains"]);
    }

    #[test]
    fn empty_document_yields_no_fragments() {
        let fragments = decode_timedtext("<transcript></transcript>").unwrap();
        assert!(fragments.is_empty());
    }

    #[test]
    fn self_closing_fragments_are_skipped() {
        let xml = r#"<transcript><text start="0" dur="1"/><text start="1" dur="1">spoken</text></transcript>"#;
        let fragments = decode_timedtext(xml).unwrap();
        assert_eq!(fragments, vec!["spoken"]);
    }

    #[test]
    fn malformed_markup_is_an_error() {
        assert!(decode_timedtext("<transcript><text>broken</wrong></transcript>").is_err());
    }
}
