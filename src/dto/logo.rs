//! Render identifiers for the inline logo mark.
//!
//! The logo SVG references gradient and clip-path definitions by id. Ids are
//! derived from the caller-supplied scope instead of process-wide
//! randomness, so two marks on one page cannot collide and rendering is
//! stable under test.

use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LogoMarkIds {
    pub gradient_id: String,
    pub clip_id: String,
}

impl LogoMarkIds {
    #[must_use]
    pub fn new(scope: &str) -> Self {
        Self {
            gradient_id: format!("logo-{scope}-gradient"),
            clip_id: format!("logo-{scope}-clip"),
        }
    }
}
