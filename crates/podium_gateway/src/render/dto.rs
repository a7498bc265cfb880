//! Wire types for the render service.

use podium_core::Outline;
use podium_interface::ExtractedSlide;
use serde::{Deserialize, Serialize};

/// Body of `POST /update-powerpoint`.
#[derive(Debug, Serialize)]
pub struct RenderRequest<'a> {
    /// Base64 of an existing presentation to append to, or `null` for a new one
    pub original_file: Option<String>,
    /// Outline to render
    pub update_instructions: &'a Outline,
    /// Download name for the produced file
    pub file_name: &'a str,
}

/// Body of `POST /extract-powerpoint`.
#[derive(Debug, Serialize)]
pub struct ExtractRequest {
    /// Base64 of the presentation to read
    pub file_data: String,
}

/// Success body of `POST /extract-powerpoint`.
#[derive(Debug, Deserialize)]
pub struct ExtractResponse {
    /// Slides in presentation order
    pub slides: Vec<ExtractedSlide>,
}

/// Failure body returned by every render endpoint.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    /// Service-side error message
    pub error: String,
}
