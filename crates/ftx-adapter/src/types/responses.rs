/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Response envelope and paginated response shapes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::Deserialize;

use super::models::{Order, TriggerOrder};

/// Minimal envelope used to classify non-200 responses without caring
/// about the endpoint-specific result shape.
#[derive(Debug, Deserialize)]
pub(crate) struct BasicResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// The uniform `{success, error, result}` wrapper every endpoint uses.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub result: Option<T>,
}

/// Envelope extension for history endpoints that flag truncated results.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct PagedEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub result: Option<Vec<T>>,
    #[serde(default, rename = "hasMoreData")]
    pub has_more_data: bool,
}

/// Order history slice; `has_more_data` means the window was truncated
/// and the caller should page with `start_time`/`end_time`.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderHistoryPage {
    pub orders: Vec<Order>,
    pub has_more_data: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TriggerOrderHistoryPage {
    pub orders: Vec<TriggerOrder>,
    pub has_more_data: bool,
}
