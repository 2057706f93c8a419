use serde::{Deserialize, Serialize};

use storefront_core::{GroupId, slugify};

/// Slug used when a group name has no sluggable characters.
const FALLBACK_SLUG: &str = "grupa";

/// A category group as shown on the landing page.
///
/// `eligible_product_count` is derived by the store: products in this group
/// that are published on the current storefront channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    pub id: GroupId,
    pub name: String,
    /// Display markup (usually an `<img>` snippet) rendered verbatim.
    pub markup: String,
    pub eligible_product_count: i64,
}

impl CategoryGroup {
    pub fn new(id: GroupId, name: impl Into<String>, markup: impl Into<String>, eligible_product_count: i64) -> Self {
        Self {
            id,
            name: name.into(),
            markup: markup.into(),
            eligible_product_count,
        }
    }

    /// Only groups with at least one eligible product are listed.
    pub fn is_visible(&self) -> bool {
        self.eligible_product_count > 0
    }

    pub fn slug(&self) -> String {
        let slug = slugify(&self.name);
        if slug.is_empty() {
            FALLBACK_SLUG.to_string()
        } else {
            slug
        }
    }

    /// Storefront path of the category page, e.g. `/kategorija/3-mobiteli`.
    pub fn href(&self) -> String {
        format!("/kategorija/{}-{}", self.id, self.slug())
    }
}
