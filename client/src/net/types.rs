//! Wire DTOs for the animation generator endpoint.
//!
//! DESIGN
//! ======
//! The generator returns the body of a JavaScript function with the calling
//! convention `(ctx, width, height, frame)`. It is carried here as an opaque
//! string; cleanup and compilation happen in the `canvas` crate.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/animation`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationRequest {
    /// Free-text description of the shape or motion to animate.
    pub description: String,
}

/// Response body from `POST /api/animation`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationResponse {
    /// Generated function body, possibly wrapped in Markdown code fences.
    #[serde(default)]
    pub code: String,
}
