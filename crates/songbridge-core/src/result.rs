use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// One submission, immutable once handed to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertRequest {
    #[serde(rename = "sourcePlatform")]
    pub source_platform: Platform,
    #[serde(rename = "targetPlatform")]
    pub target_platform: Platform,
    #[serde(rename = "playlistUrl")]
    pub playlist_url: String,
}

impl ConvertRequest {
    pub fn new(
        source_platform: Platform,
        target_platform: Platform,
        playlist_url: impl Into<String>,
    ) -> Self {
        Self {
            source_platform,
            target_platform,
            playlist_url: playlist_url.into(),
        }
    }

    /// Mock fixtures and logs key conversions by direction.
    pub fn direction_key(&self) -> String {
        format!("{}-to-{}", self.source_platform, self.target_platform)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConvertStatus {
    Success,
    Error,
}

/// Outcome of a conversion as reported by the backend.
///
/// `status == Success` carries a converted playlist URL; `status == Error`
/// carries a non-empty message. The constructors uphold this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub status: ConvertStatus,
    #[serde(rename = "convertedPlaylistUrl")]
    pub converted_playlist_url: Option<String>,
    pub message: Option<String>,
}

impl ConvertResponse {
    pub fn success(converted_playlist_url: impl Into<String>) -> Self {
        Self {
            status: ConvertStatus::Success,
            converted_playlist_url: Some(converted_playlist_url.into()),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ConvertStatus::Error,
            converted_playlist_url: None,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ConvertStatus::Success
    }
}
