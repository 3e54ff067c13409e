//! Query and response shapes shared by the JSON endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Query string accepted by the list endpoints.
///
/// `fields` may be repeated (`fields=id&fields=nome`) or comma separated
/// (`fields=id,nome`).
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Optional free-text search.
    pub q: Option<String>,
    #[serde(default)]
    pub fields: Vec<String>,
}

impl ListQuery {
    /// Parses a raw query string such as `q=ana&fields=id,nome`.
    pub fn from_query_string(query: &str) -> Result<Self, String> {
        serde_html_form::from_str(query).map_err(|err| err.to_string())
    }

    /// Requested field names with blanks removed.
    pub fn field_names(&self) -> Vec<String> {
        self.fields
            .iter()
            .flat_map(|raw| raw.split(','))
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Body returned after a create or update.
#[derive(Debug, Serialize, ToSchema)]
pub struct OperationResponse {
    pub id: i32,
    pub message: String,
}

/// Body returned for every error.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
