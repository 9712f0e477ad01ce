use songbridge_core::{ConvertResponse, ConvertStatus};

/// Fallback shown when a backend error response carries no message.
const GENERIC_FAILURE: &str = "Conversion failed";

/// Presentation-facing state of one submission cycle. A tagged union, so
/// loading, success and error can never be active at the same time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConvertState {
    #[default]
    Idle,
    Loading,
    Success(ConvertResponse),
    Error(String),
}

/// Single writer of a `ConvertState`. Transitions are strictly
/// Idle -> Loading -> (Success | Error) within one cycle; a new submission
/// from a terminal state re-enters Loading, and submissions while already
/// Loading are rejected so two cycles cannot interleave.
#[derive(Debug, Default)]
pub struct ConvertController {
    state: ConvertState,
}

impl ConvertController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ConvertState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == ConvertState::Loading
    }

    /// Accepts a submission: trims the input and enters Loading, returning
    /// the trimmed URL. Blank input and re-entrant submissions are rejected
    /// and leave the state untouched.
    pub fn begin(&mut self, raw_input: &str) -> Option<String> {
        let trimmed = raw_input.trim();
        if trimmed.is_empty() || self.is_loading() {
            return None;
        }
        self.state = ConvertState::Loading;
        Some(trimmed.to_string())
    }

    /// Lands the cycle in its terminal state. Only meaningful from Loading.
    pub fn resolve(&mut self, response: ConvertResponse) {
        if !self.is_loading() {
            return;
        }
        self.state = match response.status {
            ConvertStatus::Success => ConvertState::Success(response),
            ConvertStatus::Error => ConvertState::Error(
                response
                    .message
                    .filter(|message| !message.is_empty())
                    .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            ),
        };
    }

    /// Explicit user dismissal of an error, back to Idle. No-op elsewhere.
    pub fn dismiss(&mut self) {
        if matches!(self.state, ConvertState::Error(_)) {
            self.state = ConvertState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ConvertController, ConvertState};
    use songbridge_core::{ConvertResponse, ConvertStatus};

    #[test]
    fn starts_idle() {
        let controller = ConvertController::new();
        assert_eq!(controller.state(), &ConvertState::Idle);
    }

    #[test]
    fn blank_submission_is_rejected_and_stays_idle() {
        let mut controller = ConvertController::new();
        assert_eq!(controller.begin(""), None);
        assert_eq!(controller.begin("   \t"), None);
        assert_eq!(controller.state(), &ConvertState::Idle);
    }

    #[test]
    fn begin_trims_and_enters_loading() {
        let mut controller = ConvertController::new();
        let url = controller.begin("  https://open.spotify.com/playlist/abc  ");
        assert_eq!(url.as_deref(), Some("https://open.spotify.com/playlist/abc"));
        assert!(controller.is_loading());
    }

    #[test]
    fn begin_while_loading_is_rejected() {
        let mut controller = ConvertController::new();
        controller.begin("https://open.spotify.com/playlist/abc");
        assert_eq!(controller.begin("https://open.spotify.com/playlist/def"), None);
        assert!(controller.is_loading());
    }

    #[test]
    fn success_response_lands_in_success() {
        let mut controller = ConvertController::new();
        controller.begin("https://open.spotify.com/playlist/abc");
        let response = ConvertResponse::success("https://music.youtube.com/playlist?list=xyz");
        controller.resolve(response.clone());
        assert_eq!(controller.state(), &ConvertState::Success(response));
    }

    #[test]
    fn error_response_lands_in_error_with_message() {
        let mut controller = ConvertController::new();
        controller.begin("https://open.spotify.com/playlist/abc");
        controller.resolve(ConvertResponse::error("Playlist not found or is private"));
        assert_eq!(
            controller.state(),
            &ConvertState::Error("Playlist not found or is private".to_string())
        );
    }

    #[test]
    fn missing_backend_message_falls_back_to_generic() {
        let mut controller = ConvertController::new();
        controller.begin("https://open.spotify.com/playlist/abc");
        let response = ConvertResponse {
            status: ConvertStatus::Error,
            converted_playlist_url: None,
            message: None,
        };
        controller.resolve(response);
        assert_eq!(
            controller.state(),
            &ConvertState::Error("Conversion failed".to_string())
        );
    }

    #[test]
    fn resolve_outside_loading_is_ignored() {
        let mut controller = ConvertController::new();
        controller.resolve(ConvertResponse::success("https://example.com"));
        assert_eq!(controller.state(), &ConvertState::Idle);
    }

    #[test]
    fn dismiss_clears_error_only() {
        let mut controller = ConvertController::new();
        controller.begin("https://open.spotify.com/playlist/abc");
        controller.resolve(ConvertResponse::error("nope"));
        controller.dismiss();
        assert_eq!(controller.state(), &ConvertState::Idle);

        controller.begin("https://open.spotify.com/playlist/abc");
        let response = ConvertResponse::success("https://music.youtube.com/playlist?list=xyz");
        controller.resolve(response.clone());
        controller.dismiss();
        assert_eq!(controller.state(), &ConvertState::Success(response));
    }

    #[test]
    fn resubmission_from_terminal_states_reenters_loading() {
        let mut controller = ConvertController::new();
        controller.begin("https://open.spotify.com/playlist/abc");
        controller.resolve(ConvertResponse::success("https://music.youtube.com/playlist?list=x"));
        assert!(controller.begin("https://open.spotify.com/playlist/abc").is_some());
        assert!(controller.is_loading());

        controller.resolve(ConvertResponse::error("nope"));
        assert!(controller.begin("https://open.spotify.com/playlist/abc").is_some());
        assert!(controller.is_loading());
    }
}
