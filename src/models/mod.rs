use crate::entities::media_items;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

pub const DEFAULT_PAGE: i64 = 1;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Category discriminator stored in `media_items.file_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Image,
    Document,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Image => "image",
            ItemKind::Document => "document",
        }
    }

    /// Page size used when the client does not send `page_size`.
    pub fn default_page_size(&self) -> i64 {
        match self {
            ItemKind::Image => 24,
            ItemKind::Document => 20,
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog row as exposed by the listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MediaItemResponse {
    pub id: i32,
    pub file_name: String,
    pub file_type: String,
    pub access_url: String,
    pub file_size_kb: i32,
    pub created_at: DateTime<Utc>,
}

impl From<media_items::Model> for MediaItemResponse {
    fn from(m: media_items::Model) -> Self {
        Self {
            id: m.id,
            file_name: m.file_name,
            file_type: m.file_type,
            access_url: m.access_url,
            file_size_kb: m.file_size_kb,
            created_at: m.created_at,
        }
    }
}

/// Paginated envelope returned by both listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArchivePage {
    pub items: Vec<MediaItemResponse>,
    /// Matching rows across all pages.
    pub total: u64,
    pub has_more: bool,
}

/// Validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct PageRequest {
    #[validate(range(min = 1, message = "page must be greater than or equal to 1"))]
    pub page: i64,
    #[validate(range(min = 1, max = MAX_PAGE_SIZE, message = "page_size must be between 1 and 100"))]
    pub page_size: i64,
}

impl PageRequest {
    pub fn new(page: i64, page_size: i64) -> Result<Self, ValidationErrors> {
        let req = Self { page, page_size };
        req.validate()?;
        Ok(req)
    }

    pub fn offset(&self) -> u64 {
        let skipped = self.page.saturating_sub(1).saturating_mul(self.page_size);
        skipped.max(0) as u64
    }

    pub fn limit(&self) -> u64 {
        self.page_size.max(0) as u64
    }

    /// True when rows remain past this page's window.
    pub fn has_more(&self, total: u64) -> bool {
        self.offset().saturating_add(self.limit()) < total
    }
}

/// Flattens validator output into one message, fields in name order.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
