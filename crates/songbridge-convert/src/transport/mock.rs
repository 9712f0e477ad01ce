use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::time::Duration;

use async_trait::async_trait;
use songbridge_core::{ConvertRequest, ConvertResponse, SongbridgeError, SongbridgeResult};

use crate::transport::Transport;

/// Canned backend failure injected at `failure_rate`.
pub const NOT_FOUND_MESSAGE: &str = "Playlist not found or is private";

const DEFAULT_LATENCY_MS: RangeInclusive<u64> = 2000..=3000;
const DEFAULT_FAILURE_RATE: f64 = 0.10;

/// Simulated transport: no network, canned responses keyed by conversion
/// direction, uniformly random latency, and a random failure slice.
///
/// Latency and failure rate are injectable so tests can pin both branches;
/// the defaults imitate a slow backend the way a development build would.
pub struct MockTransport {
    fixtures: HashMap<String, ConvertResponse>,
    latency_ms: RangeInclusive<u64>,
    failure_rate: f64,
}

impl MockTransport {
    pub fn new() -> Self {
        let mut fixtures = HashMap::new();
        fixtures.insert(
            "spotify-to-youtube".to_string(),
            ConvertResponse::success(
                "https://music.youtube.com/playlist?list=PLrAl6rYgs4IvGFBDEaVGFXt6k2GiOFuCC",
            ),
        );
        fixtures.insert(
            "youtube-to-spotify".to_string(),
            ConvertResponse::success("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M"),
        );
        Self {
            fixtures,
            latency_ms: DEFAULT_LATENCY_MS,
            failure_rate: DEFAULT_FAILURE_RATE,
        }
    }

    pub fn with_latency_ms(mut self, latency_ms: RangeInclusive<u64>) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate;
        self
    }

    pub fn with_fixture(mut self, direction_key: impl Into<String>, response: ConvertResponse) -> Self {
        self.fixtures.insert(direction_key.into(), response);
        self
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn dispatch(&self, request: &ConvertRequest) -> SongbridgeResult<ConvertResponse> {
        let delay = fastrand::u64(self.latency_ms.clone());
        tokio::time::sleep(Duration::from_millis(delay)).await;

        if fastrand::f64() < self.failure_rate {
            return Ok(ConvertResponse::error(NOT_FOUND_MESSAGE));
        }

        let key = request.direction_key();
        self.fixtures.get(&key).cloned().ok_or_else(|| {
            SongbridgeError::UnsupportedInput(format!("no conversion available for {key}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{MockTransport, NOT_FOUND_MESSAGE};
    use crate::transport::Transport;
    use songbridge_core::{ConvertRequest, Platform, SongbridgeError};

    fn instant_mock(failure_rate: f64) -> MockTransport {
        MockTransport::new()
            .with_latency_ms(0..=0)
            .with_failure_rate(failure_rate)
    }

    fn spotify_to_youtube() -> ConvertRequest {
        ConvertRequest::new(
            Platform::Spotify,
            Platform::Youtube,
            "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M",
        )
    }

    #[tokio::test]
    async fn returns_fixture_for_both_directions() {
        let mock = instant_mock(0.0);

        let response = mock.dispatch(&spotify_to_youtube()).await.unwrap();
        assert!(response.is_success());
        assert_eq!(
            response.converted_playlist_url.as_deref(),
            Some("https://music.youtube.com/playlist?list=PLrAl6rYgs4IvGFBDEaVGFXt6k2GiOFuCC")
        );

        let reverse = ConvertRequest::new(
            Platform::Youtube,
            Platform::Spotify,
            "https://music.youtube.com/playlist?list=PLrAl6rYgs4IvGFBDEaVGFXt6k2GiOFuCC",
        );
        let response = mock.dispatch(&reverse).await.unwrap();
        assert!(response.is_success());
        assert_eq!(
            response.converted_playlist_url.as_deref(),
            Some("https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M")
        );
    }

    #[tokio::test]
    async fn forced_failure_returns_canned_error() {
        let mock = instant_mock(1.0);
        let response = mock.dispatch(&spotify_to_youtube()).await.unwrap();
        assert!(!response.is_success());
        assert_eq!(response.message.as_deref(), Some(NOT_FOUND_MESSAGE));
    }

    #[tokio::test]
    async fn unmapped_direction_is_unsupported() {
        let mock = instant_mock(0.0);
        let request = ConvertRequest::new(
            Platform::Spotify,
            Platform::Spotify,
            "https://open.spotify.com/playlist/abc123",
        );
        let result = mock.dispatch(&request).await;
        match result {
            Err(SongbridgeError::UnsupportedInput(msg)) => {
                assert!(msg.contains("spotify-to-spotify"));
            }
            other => panic!("Expected UnsupportedInput, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn identical_submissions_classify_identically() {
        let mock = instant_mock(0.0);
        let first = mock.dispatch(&spotify_to_youtube()).await.unwrap();
        let second = mock.dispatch(&spotify_to_youtube()).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn custom_fixture_overrides_default() {
        let mock = instant_mock(0.0).with_fixture(
            "spotify-to-youtube",
            songbridge_core::ConvertResponse::error("backend says no"),
        );
        let response = mock.dispatch(&spotify_to_youtube()).await.unwrap();
        assert_eq!(response.message.as_deref(), Some("backend says no"));
    }
}
