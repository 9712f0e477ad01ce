use std::sync::Arc;

use reqwest::Client;
use songbridge_config::{
    SongbridgeConfigData, TransportMode, resolve_base_url, resolve_transport_mode,
};
use songbridge_core::{ConvertRequest, ConvertResponse, SongbridgeResult};

use crate::api::convert::ConvertApiClient;
use crate::parsers;
use crate::transport::{MockTransport, NetworkTransport, Transport};

/// Client boundary between a submission and the conversion backend.
///
/// Validates locally before any dispatch and folds every failure mode into
/// the uniform `ConvertResponse` error shape, so callers only ever see a
/// terminal success or error. No retries; one request, one outcome.
#[derive(Clone)]
pub struct PlaylistConverter {
    transport: Arc<dyn Transport>,
}

impl PlaylistConverter {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub fn over_network(base_url: &str) -> SongbridgeResult<Self> {
        let client = Client::builder()
            .user_agent("songbridge/0.1")
            .build()
            .expect("failed to build http client");
        let api = ConvertApiClient::new(client, base_url)?;
        Ok(Self::new(Arc::new(NetworkTransport::new(api))))
    }

    pub fn mock() -> Self {
        Self::new(Arc::new(MockTransport::new()))
    }

    /// Resolves transport mode and base URL through the configuration
    /// layer. The mock transport is only picked when explicitly configured.
    pub fn from_config(config: &SongbridgeConfigData) -> SongbridgeResult<Self> {
        match resolve_transport_mode(config)? {
            TransportMode::Mock => Ok(Self::mock()),
            TransportMode::Network => Self::over_network(&resolve_base_url(config)),
        }
    }

    pub async fn convert(&self, request: &ConvertRequest) -> ConvertResponse {
        // Invalid input never reaches the transport.
        if !parsers::is_valid_playlist_url(request.source_platform, &request.playlist_url) {
            return ConvertResponse::error(format!(
                "Invalid {} playlist URL format",
                request.source_platform.display_name()
            ));
        }

        match self.transport.dispatch(request).await {
            Ok(response) => response,
            Err(err) => ConvertResponse::error(err.to_string()),
        }
    }
}
