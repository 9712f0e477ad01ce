use async_trait::async_trait;
use songbridge_core::{ConvertRequest, ConvertResponse, SongbridgeResult};

use crate::api::convert::ConvertApiClient;
use crate::transport::Transport;

/// Real-network transport: hands the request to the conversion service.
#[derive(Debug, Clone)]
pub struct NetworkTransport {
    api: ConvertApiClient,
}

impl NetworkTransport {
    pub fn new(api: ConvertApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl Transport for NetworkTransport {
    async fn dispatch(&self, request: &ConvertRequest) -> SongbridgeResult<ConvertResponse> {
        self.api
            .convert(request.target_platform, &request.playlist_url)
            .await
    }
}
