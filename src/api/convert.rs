//! The `/convert` route: natural language in, best-effort SQL out.

use crate::ai::SqlGenerator;
use crate::error::ConvertError;
use axum::{body::Bytes, http::StatusCode, Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub natural_language: String,
    pub sql_query: String,
}

pub async fn convert_handler(
    Extension(generator): Extension<Arc<SqlGenerator>>,
    body: Bytes,
) -> Result<Json<ConvertResponse>, (StatusCode, Json<Value>)> {
    let text = parse_text(&body).map_err(error_response)?;

    info!("Converting question to SQL: {}", text);

    match generator.generate(&text).await {
        Ok(sql_query) => Ok(Json(ConvertResponse {
            natural_language: text,
            sql_query,
        })),
        Err(e) => Err(error_response(e)),
    }
}

/// Extract a usable `text` field from the raw request body. Parsed by hand so
/// that every rejection shape (no body, invalid JSON, wrong type, missing or
/// blank field) collapses into the same 400 contract instead of axum's
/// extractor-specific errors.
fn parse_text(body: &[u8]) -> Result<String, ConvertError> {
    let req: ConvertRequest =
        serde_json::from_slice(body).map_err(|_| ConvertError::Validation)?;
    match req.text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ConvertError::Validation),
    }
}

/// The single error-to-HTTP mapping point.
fn error_response(err: ConvertError) -> (StatusCode, Json<Value>) {
    let status = match err {
        ConvertError::Validation => StatusCode::BAD_REQUEST,
        ConvertError::Configuration | ConvertError::Upstream(_) | ConvertError::Unexpected(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    match &err {
        ConvertError::Validation => {}
        ConvertError::Configuration => warn!("Conversion refused: {}", err),
        ConvertError::Upstream(_) => error!("{}", err),
        ConvertError::Unexpected(_) => error!(error = ?err, "Conversion failed"),
    }

    (status, Json(json!({ "error": err.to_string() })))
}
