use serde::{Deserialize, Serialize};

/// A promotional banner on the landing page.
///
/// Stores return covers already ordered by display position; the position
/// itself is not carried because callers only need the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverEntry {
    /// Banner target (image or internal link).
    pub link: String,
    /// Promotion destination URL.
    pub promo_url: String,
}

impl CoverEntry {
    pub fn new(link: impl Into<String>, promo_url: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            promo_url: promo_url.into(),
        }
    }
}
