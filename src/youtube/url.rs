//! Video identifier extraction from YouTube URLs.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::GuideError;

/// Compile the YouTube URL pattern once
static YOUTUBE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:https?://)?(?:www\.)?(?:youtube\.com/watch\?v=|youtu\.be/)(.+)$")
        .expect("Failed to compile YouTube URL regex")
});

/// Opaque identifier addressing one video in the caption and catalog
/// services.
///
/// Only non-emptiness is checked here; the upstream services are the source
/// of truth for whether an identifier actually exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    /// Extract the video identifier from a YouTube URL.
    ///
    /// Accepts `youtube.com/watch?v=<id>` and `youtu.be/<id>`, with or
    /// without scheme and `www.`. Trailing query-string noise after the
    /// identifier (`&list=...`, `?si=...`, `#t=...`) is stripped so share
    /// links resolve to the same id as canonical ones.
    pub fn parse(url: &str) -> crate::Result<Self> {
        let captured = YOUTUBE_URL_RE
            .captures(url.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or(GuideError::InvalidUrl)?;

        let id = captured
            .split(['&', '?', '#'])
            .next()
            .unwrap_or("")
            .trim();

        if id.is_empty() {
            return Err(GuideError::InvalidUrl);
        }

        Ok(Self(id.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_watch_urls() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?v=dQw4w9WgXcQ",
            "http://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ",
            "www.youtube.com/watch?v=dQw4w9WgXcQ",
        ] {
            let id = VideoId::parse(url).unwrap();
            assert_eq!(id.as_str(), "dQw4w9WgXcQ", "failed for {}", url);
        }
    }

    #[test]
    fn extracts_id_from_short_urls() {
        for url in [
            "https://youtu.be/dQw4w9WgXcQ",
            "youtu.be/dQw4w9WgXcQ",
            "http://youtu.be/dQw4w9WgXcQ",
        ] {
            let id = VideoId::parse(url).unwrap();
            assert_eq!(id.as_str(), "dQw4w9WgXcQ", "failed for {}", url);
        }
    }

    #[test]
    fn strips_trailing_query_noise() {
        let id = VideoId::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PLx&index=2");
        assert_eq!(id.unwrap().as_str(), "dQw4w9WgXcQ");

        let id = VideoId::parse("https://youtu.be/dQw4w9WgXcQ?si=abcdef&t=42");
        assert_eq!(id.unwrap().as_str(), "dQw4w9WgXcQ");

        let id = VideoId::parse("https://youtu.be/dQw4w9WgXcQ#t=1m");
        assert_eq!(id.unwrap().as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn rejects_unrecognized_urls() {
        for url in [
            "https://example.com/watch?v=dQw4w9WgXcQ",
            "https://vimeo.com/12345",
            "https://youtube.com/channel/UCxyz",
            "not a url at all",
            "",
        ] {
            let err = VideoId::parse(url).unwrap_err();
            assert!(
                matches!(err, GuideError::InvalidUrl),
                "expected InvalidUrl for {:?}",
                url
            );
        }
    }

    #[test]
    fn rejects_urls_with_empty_identifier() {
        let err = VideoId::parse("https://www.youtube.com/watch?v=&list=PLx").unwrap_err();
        assert!(matches!(err, GuideError::InvalidUrl));
    }
}
