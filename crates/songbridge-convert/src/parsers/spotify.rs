use regex::Regex;

// Exact shape: playlist id directly under /playlist/, optional query tail,
// nothing after the id. Host match is case-sensitive.
const PLAYLIST_PATTERN: &str = r"^https://open\.spotify\.com/playlist/[a-zA-Z0-9]+(\?.*)?$";

pub fn is_playlist_url(input: &str) -> bool {
    Regex::new(PLAYLIST_PATTERN)
        .map(|regex| regex.is_match(input))
        .unwrap_or(false)
}
