use std::fmt;

use serde::{Deserialize, Serialize};

/// A streaming platform that can be either end of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Spotify,
    Youtube,
}

impl Platform {
    /// Human-facing name, used in messages shown to the user.
    pub fn display_name(self) -> &'static str {
        match self {
            Platform::Spotify => "Spotify",
            Platform::Youtube => "YouTube Music",
        }
    }

    /// The other end of the pair. Swapping twice returns the original.
    pub fn counterpart(self) -> Self {
        match self {
            Platform::Spotify => Platform::Youtube,
            Platform::Youtube => Platform::Spotify,
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "spotify" => Some(Platform::Spotify),
            "youtube" | "yt" | "ytm" => Some(Platform::Youtube),
            "youtubemusic" | "youtube-music" | "youtube_music" => Some(Platform::Youtube),
            _ => None,
        }
    }

    /// Wire name as it appears in request and response bodies.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Spotify => "spotify",
            Platform::Youtube => "youtube",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
