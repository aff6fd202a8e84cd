//! Form body extraction shared by the upload and form endpoints.
//!
//! Accepts `multipart/form-data` (text fields and file parts) and
//! `application/x-www-form-urlencoded` (text fields only).

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::{header, StatusCode},
    Form,
};

use crate::server::error::ApiError;
use crate::services::UploadedDocument;

/// Content type assumed for file parts that do not declare one.
const DEFAULT_FILE_TYPE: &str = "application/octet-stream";

/// Text fields and uploaded files from a form body.
#[derive(Debug, Default)]
pub struct FormFields {
    fields: HashMap<String, String>,
    files: HashMap<String, UploadedDocument>,
}

impl FormFields {
    /// Field value; an empty value counts as not sent.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Field value, or `default` when the field was not sent.
    pub fn text_or(&self, name: &str, default: &str) -> String {
        self.text(name).unwrap_or(default).to_string()
    }

    pub fn require_text(&self, name: &str) -> Result<&str, ApiError> {
        self.text(name)
            .ok_or_else(|| ApiError::unprocessable(format!("Field required: {}", name)))
    }

    pub fn take_file(&mut self, name: &str) -> Option<UploadedDocument> {
        self.files.remove(name)
    }

    pub fn require_file(&mut self, name: &str) -> Result<UploadedDocument, ApiError> {
        self.take_file(name)
            .ok_or_else(|| ApiError::unprocessable(format!("Field required: {}", name)))
    }

    async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = FormFields::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed reading multipart field: {e}")))?
        {
            let name = field.name().unwrap_or_default().to_string();
            match field.file_name().map(str::to_string) {
                Some(filename) => {
                    let content_type = field
                        .content_type()
                        .unwrap_or(DEFAULT_FILE_TYPE)
                        .to_string();
                    let bytes = field.bytes().await.map_err(|e| {
                        ApiError::bad_request(format!("Failed reading multipart '{name}' field: {e}"))
                    })?;
                    // Browsers send an empty, unnamed part for untouched file inputs.
                    if filename.is_empty() && bytes.is_empty() {
                        continue;
                    }
                    form.files.insert(
                        name,
                        UploadedDocument::new(filename, content_type, bytes.to_vec()),
                    );
                }
                None => {
                    let value = field.text().await.map_err(|e| {
                        ApiError::bad_request(format!("Failed reading multipart '{name}' field: {e}"))
                    })?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(format!("Invalid multipart payload: {e}")))?;
            return Self::from_multipart(multipart).await;
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(format!("Invalid form payload: {e}")))?;
            return Ok(FormFields {
                fields,
                files: HashMap::new(),
            });
        }

        Err(ApiError {
            status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message: "Expected request with `Content-Type: multipart/form-data` or `application/x-www-form-urlencoded`"
                .to_string(),
        })
    }
}
