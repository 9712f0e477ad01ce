use regex::Regex;

// The list id must be the first query parameter; further parameters may
// follow with `&`. Host match is case-sensitive.
const PLAYLIST_PATTERN: &str = r"^https://music\.youtube\.com/playlist\?list=[A-Za-z0-9_-]+(&.*)?$";

pub fn is_playlist_url(input: &str) -> bool {
    Regex::new(PLAYLIST_PATTERN)
        .map(|regex| regex.is_match(input))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::is_playlist_url;

    #[test]
    fn accepts_plain_playlist_url() {
        assert!(is_playlist_url(
            "https://music.youtube.com/playlist?list=PLrAl6rYgs4IvGFBDEaVGFXt6k2GiOFuCC"
        ));
    }

    #[test]
    fn accepts_playlist_url_with_extra_parameters() {
        assert!(is_playlist_url(
            "https://music.youtube.com/playlist?list=PLrAl6rYgs4Iv_-GFBDEa&si=abc"
        ));
    }

    #[test]
    fn rejects_watch_urls() {
        assert!(!is_playlist_url("https://music.youtube.com/watch?v=abc"));
    }

    #[test]
    fn rejects_plain_youtube_host() {
        assert!(!is_playlist_url(
            "https://www.youtube.com/playlist?list=PLrAl6rYgs4Iv"
        ));
    }

    #[test]
    fn rejects_missing_or_empty_list_id() {
        assert!(!is_playlist_url("https://music.youtube.com/playlist"));
        assert!(!is_playlist_url("https://music.youtube.com/playlist?list="));
    }

    #[test]
    fn rejects_uppercase_host() {
        assert!(!is_playlist_url(
            "https://MUSIC.YOUTUBE.COM/playlist?list=abc"
        ));
    }
}
