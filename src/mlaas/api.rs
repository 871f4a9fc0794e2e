use base64::Engine;
use reqwest::Client;
use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{
    DatasetId,
    MashqError,
    Sample,
};

/// Response envelope every service endpoint answers with: a payload on
/// success, a reason string on failure, never both.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn into_result(self, wrap: impl Fn(String) -> MashqError) -> Result<T, MashqError> {
        if let Some(error) = self.error {
            return Err(wrap(error));
        }
        self.result.ok_or_else(|| wrap("empty response from service".to_string()))
    }
}

/// Client for the remote model-training service. One instance per session;
/// the base URL and dataset id come from settings, not constants.
pub struct MlaasClient {
    http: Client,
    base_url: String,
}

impl MlaasClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: Client::new(), base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        body: serde_json::Value,
    ) -> Result<ApiResponse<T>, MashqError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response: ApiResponse<T> =
            self.http.post(&url).json(&body).send().await?.json().await?;
        Ok(response)
    }

    async fn get<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<ApiResponse<T>, MashqError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response: ApiResponse<T> =
            self.http.get(&url).query(query).send().await?.json().await?;
        Ok(response)
    }

    /// Liveness probe; used to check the service is reachable before a lesson.
    pub async fn get_version(&self) -> Result<u32, MashqError> {
        let response: ApiResponse<u32> = self.get("version", &[]).await?;
        response.into_result(MashqError::Custom)
    }

    /// Uploads one cropped glyph PNG keyed by filename. Re-uploading the same
    /// filename for the same dataset overwrites the previous image; the
    /// service defines this, so a resubmitted letter never corrupts the set.
    pub async fn upload_png(
        &self,
        png_bytes: &[u8],
        filename: &str,
        dsid: DatasetId,
    ) -> Result<(), MashqError> {
        let body = serde_json::json!({
            "filename": filename,
            "dsid": dsid,
            "image": base64::engine::general_purpose::STANDARD.encode(png_bytes),
        });

        let response: ApiResponse<String> = self.post("upload_image", body).await?;
        response.into_result(MashqError::UploadFailed).map(|_| ())
    }

    /// Uploads a lesson's labeled samples in one batch. Atomic from this
    /// side: the whole batch is either delivered or failed, no partials.
    pub async fn upload_dataset(
        &self,
        samples: &[Sample],
        dsid: DatasetId,
    ) -> Result<(), MashqError> {
        let body = serde_json::json!({
            "dsid": dsid,
            "samples": samples,
        });

        let response: ApiResponse<usize> = self.post("upload_labeled_dataset", body).await?;
        response.into_result(MashqError::UploadFailed).map(|_| ())
    }

    /// Asks the service to (re)train the classifier for `dsid`. Training is
    /// idempotent service-side; a duplicate request re-queues, never corrupts.
    pub async fn train_model(&self, dsid: DatasetId) -> Result<String, MashqError> {
        let response: ApiResponse<String> =
            self.get("train_model", &[("dsid", dsid.to_string())]).await?;
        response.into_result(MashqError::TrainingFailed)
    }

    /// Classifies one feature vector against the model trained for `dsid`.
    pub async fn predict(&self, features: &[f64], dsid: DatasetId) -> Result<String, MashqError> {
        let body = serde_json::json!({
            "dsid": dsid,
            "feature": features,
        });

        let response: ApiResponse<String> = self.post("predict", body).await?;
        response.into_result(|reason| MashqError::Custom(format!("predict: {}", reason)))
    }
}
