use crate::config::Config;
use crate::error::ScanError;
use crate::types::{ApiResponse, PlateRequest, PostOutcome};
use log::{debug, info, warn};
use reqwest::StatusCode;
use url::Url;

const PLATE_PATH: &str = "plate-detection.php";

pub struct ApiClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self, ScanError> {
        let endpoint = config
            .api_base
            .join(PLATE_PATH)
            .map_err(|e| ScanError::Config(format!("invalid API URL: {}", e)))?;
        let client = reqwest::Client::builder()
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| ScanError::Config(format!("unable to build HTTP client: {}", e)))?;
        Ok(ApiClient { client, endpoint })
    }

    /// Sends the plate. A 404 means the server does not know the plate,
    /// which is reported as an outcome rather than an error.
    pub async fn post_plate(&self, plate: &str) -> Result<PostOutcome, ScanError> {
        info!("Posting plate {} to {}", plate, self.endpoint);
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&PlateRequest {
                plate_number: plate,
            })
            .send()
            .await?;
        match response.status() {
            StatusCode::OK => {
                let body = response.text().await?;
                debug!("Server response: {}", body);
                match serde_json::from_str::<ApiResponse>(&body) {
                    Ok(ApiResponse { success: true, .. }) => Ok(PostOutcome::Accepted),
                    Ok(ApiResponse { message, .. }) => Err(ScanError::Server(
                        message.unwrap_or_else(|| "Unknown error".to_string()),
                    )),
                    Err(e) => {
                        warn!("Unable to parse server response {:?}: {}", body, e);
                        Err(ScanError::Server("Unknown error".to_string()))
                    }
                }
            }
            StatusCode::NOT_FOUND => Ok(PostOutcome::NotFound),
            status => Err(ScanError::Server(format!(
                "Server returned code: {}",
                status.as_u16()
            ))),
        }
    }
}
