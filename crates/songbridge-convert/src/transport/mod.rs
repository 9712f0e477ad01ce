mod mock;
mod network;

use async_trait::async_trait;
use songbridge_core::{ConvertRequest, ConvertResponse, SongbridgeResult};

pub use mock::{MockTransport, NOT_FOUND_MESSAGE};
pub use network::NetworkTransport;

/// How a `ConvertRequest` reaches a backend. Implementations are chosen at
/// client construction time, so callers and tests can substitute their own.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn dispatch(&self, request: &ConvertRequest) -> SongbridgeResult<ConvertResponse>;
}
