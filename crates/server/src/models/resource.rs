use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub type ResourceId = i64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateResourceRequest {
    pub title: String,
    pub href: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    pub href: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResourcesResponse {
    pub resource_list: Vec<Resource>,
}

#[derive(Clone, Debug, Serialize)]
pub struct AddResourceResponse {
    pub message: &'static str,
}

impl AddResourceResponse {
    pub const ADDED: Self = Self {
        message: "Resource added",
    };
}

/// Raw form body of `POST /`. Both fields are optional here so that a missing
/// field becomes a [`ValidationError`] instead of an extractor rejection.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AddResourceForm {
    pub title: Option<String>,
    pub href: Option<String>,
}

impl AddResourceForm {
    pub fn validate(self) -> Result<CreateResourceRequest, ValidationError> {
        let title = require_field("title", self.title)?;
        let href = require_field("href", self.href)?;
        validate_resource_title(&title)?;
        validate_resource_href(&href)?;
        Ok(CreateResourceRequest { title, href })
    }
}

fn require_field(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    value.ok_or(ValidationError::MissingField { field })
}

pub fn validate_resource_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::InvalidInput {
            value: title.to_string(),
            reason: "resource title cannot be empty".to_string(),
        });
    }
    Ok(())
}

// No URL parsing: hrefs are stored verbatim and compared byte for byte.
pub fn validate_resource_href(href: &str) -> Result<(), ValidationError> {
    if href.trim().is_empty() {
        return Err(ValidationError::InvalidInput {
            value: href.to_string(),
            reason: "resource href cannot be empty".to_string(),
        });
    }
    Ok(())
}
