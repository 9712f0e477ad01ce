pub mod api;
mod converter;
pub mod parsers;
mod state;
pub mod transport;

pub use converter::PlaylistConverter;
pub use parsers::{detect_platform, is_valid_playlist_url};
pub use state::{ConvertController, ConvertState};
pub use transport::{MockTransport, NetworkTransport, Transport};
