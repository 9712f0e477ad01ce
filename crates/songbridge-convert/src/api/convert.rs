use reqwest::Client;
use serde::Serialize;
use songbridge_core::{ConvertResponse, Platform, SongbridgeError, SongbridgeResult};
use url::Url;

const CONVERT_PATH: &str = "/api/convert";

/// Wire payload for `POST /api/convert`.
///
/// The backend contract takes only the target platform; the source is
/// inferred (or ignored) on the other side.
#[derive(Debug, Serialize)]
pub struct ConvertPayload<'a> {
    pub platform: Platform,
    #[serde(rename = "playlistUrl")]
    pub playlist_url: &'a str,
}

#[derive(Debug, Clone)]
pub struct ConvertApiClient {
    client: Client,
    endpoint: Url,
}

impl ConvertApiClient {
    pub fn new(client: Client, base_url: &str) -> SongbridgeResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|err| SongbridgeError::Config(format!("invalid api base url: {err}")))?;
        let endpoint = base
            .join(CONVERT_PATH)
            .map_err(|err| SongbridgeError::Config(format!("invalid api endpoint: {err}")))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// One request, one response. The 2xx body is returned as the backend
    /// shaped it, including a reported error status; anything else becomes
    /// a client-side error.
    pub async fn convert(
        &self,
        target: Platform,
        playlist_url: &str,
    ) -> SongbridgeResult<ConvertResponse> {
        let payload = ConvertPayload {
            platform: target,
            playlist_url,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&payload)
            .header("Accept", "application/json")
            .header("User-Agent", "songbridge/0.1")
            .send()
            .await
            .map_err(|err| SongbridgeError::Network(format!("convert request failed: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SongbridgeError::Api(format!(
                "conversion service error: status={status} body={body}"
            )));
        }

        response
            .json::<ConvertResponse>()
            .await
            .map_err(|err| SongbridgeError::Parse(format!("convert response parse failed: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::{ConvertApiClient, ConvertPayload};
    use reqwest::Client;
    use songbridge_core::Platform;

    #[test]
    fn payload_serializes_wire_field_names() {
        let payload = ConvertPayload {
            platform: Platform::Youtube,
            playlist_url: "https://open.spotify.com/playlist/abc123",
        };
        let body = serde_json::to_value(&payload).unwrap();
        assert_eq!(body["platform"], "youtube");
        assert_eq!(body["playlistUrl"], "https://open.spotify.com/playlist/abc123");
        assert!(body.get("sourcePlatform").is_none());
    }

    #[test]
    fn endpoint_joins_base_url() {
        let client = ConvertApiClient::new(Client::new(), "https://converter.example.com").unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://converter.example.com/api/convert"
        );
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let result = ConvertApiClient::new(Client::new(), "not-a-url");
        assert!(result.is_err());
    }
}
