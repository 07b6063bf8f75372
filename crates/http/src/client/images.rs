//! Image upload endpoint

use super::error::ClientError;
use super::typed::AuthenticatedStoreClient;
use crate::types::ApiEnvelope;
use reqwest::multipart::{Form, Part};

impl AuthenticatedStoreClient {
    /// Upload an image and get back its public URL.
    ///
    /// Failures are logged before being handed back unchanged; there is no
    /// retry and no fallback URL.
    pub async fn upload_image(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<ApiEnvelope<String>, ClientError> {
        tracing::debug!(file_name, size = bytes.len(), "uploading image");

        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let form = Form::new().part("file", part);
        let req = self
            .request(reqwest::Method::POST, "/api/images")
            .multipart(form);

        match self.execute(req).await {
            Ok(envelope) => Ok(envelope),
            Err(err) => {
                tracing::error!(error = %err, "image upload failed");
                Err(err)
            }
        }
    }
}
