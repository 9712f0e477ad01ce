pub mod spotify;
pub mod youtube;

use songbridge_core::Platform;

/// Checks a candidate playlist URL against one platform's expected shape.
/// No network access; callers trim their input first.
pub fn is_valid_playlist_url(platform: Platform, input: &str) -> bool {
    match platform {
        Platform::Spotify => spotify::is_playlist_url(input),
        Platform::Youtube => youtube::is_playlist_url(input),
    }
}

/// Tries each platform pattern in a fixed order (Spotify, then YouTube
/// Music) and returns the first match. The patterns are mutually exclusive
/// by host today; if a future platform pattern overlaps an existing one,
/// the earlier entry wins, so ordering here is part of the contract.
pub fn detect_platform(input: &str) -> Option<Platform> {
    if spotify::is_playlist_url(input) {
        return Some(Platform::Spotify);
    }
    if youtube::is_playlist_url(input) {
        return Some(Platform::Youtube);
    }
    None
}
