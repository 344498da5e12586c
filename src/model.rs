// Core structs: Listing, Source, API payloads
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// External directory site a listing was scraped from.
///
/// The variant order is the fan-out and merge order: results are always
/// concatenated as [JustDial, Sulekha, UrbanPro] before dedup and ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Source {
    JustDial,
    Sulekha,
    UrbanPro,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::JustDial, Source::Sulekha, Source::UrbanPro];
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::JustDial => write!(f, "JustDial"),
            Source::Sulekha => write!(f, "Sulekha"),
            Source::UrbanPro => write!(f, "UrbanPro"),
        }
    }
}

/// One scraped listing, already field-cleaned by the extractor.
///
/// Invariants: `provider_name` is trimmed and at least 3 characters long once it
/// passes the dedup/filter stage, `rating` is always one-decimal fixed point
/// ("4.3", "0.0"), and `phone` contains only digits, `+`, `-` and whitespace.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    #[serde(rename = "service_provider")]
    pub provider_name: String,
    pub specialization: String,
    pub rating: String,
    pub reviews: u32,
    pub location: String,
    pub phone: String,
    pub website: String,
    pub source: Source,
}

impl Listing {
    /// Weighted rating/review score used only for ordering, never serialized.
    pub fn composite_score(&self) -> f64 {
        let rating = self.rating.parse::<f64>().unwrap_or(0.0);
        rating * 0.7 + f64::from(self.reviews) * 0.3
    }

    /// Cross-source duplicate key: lowercased name + phone, capped at 50 chars.
    pub fn dedup_key(&self) -> String {
        let key = format!("{}_{}", self.provider_name.to_lowercase(), self.phone);
        key.chars().take(50).collect()
    }
}

/// Search criteria taken from the request body. `location` and `description`
/// are required but kept optional here so validation can echo back exactly
/// what was received instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    pub location: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "serviceType", skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
}

/// Validated search criteria handed to the aggregator.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    Fulfilled,
    Rejected,
}

/// Per-source outcome reported in the response payload.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub source: Source,
    pub status: SourceStatus,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub success: bool,
    pub total: usize,
    pub data: Vec<Listing>,
    pub sources: Vec<SourceSummary>,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{url} returned status {status}")]
    BadStatus { url: String, status: u16 },
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid selector {0:?}")]
    Selector(String),
}

/// Failure of one whole source pipeline. Contained by the aggregator; a failed
/// source contributes zero listings and is reported as `rejected`.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}
