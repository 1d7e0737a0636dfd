//! Envio GraphQL request and response models.

use serde::{Deserialize, Serialize};

use crate::models::PropertyRecord;

/// POST body for the GraphQL endpoint
#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
}

/// Top-level GraphQL response envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<ActivePropertiesData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// `data` payload of the active properties query
#[derive(Debug, Deserialize)]
pub struct ActivePropertiesData {
    #[serde(rename = "PropertyToken")]
    pub property_token: Option<Vec<PropertyRecord>>,
}

/// Single GraphQL error entry
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    // Note: locations/path/extensions exist but are not reported
}
