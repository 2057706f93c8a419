use chrono::NaiveDate;
use serde::Serialize;

use storefront_catalog::{CategoryGroup, CoverEntry};
use storefront_core::GroupId;

use crate::app::services::LandingPage;

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct LandingPageResponse {
    pub groups: Vec<GroupView>,
    /// Display order; clients must not re-sort.
    pub covers: Vec<CoverView>,
    pub today: NaiveDate,
    pub tomorrow: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct GroupView {
    pub id: GroupId,
    pub name: String,
    pub markup: String,
    pub product_count: i64,
    pub slug: String,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct CoverView {
    pub link: String,
    pub promo_url: String,
}

// -------------------------
// Mapping helpers
// -------------------------

pub fn group_to_view(group: CategoryGroup) -> GroupView {
    let slug = group.slug();
    let href = group.href();
    GroupView {
        id: group.id,
        name: group.name,
        markup: group.markup,
        product_count: group.eligible_product_count,
        slug,
        href,
    }
}

pub fn cover_to_view(cover: CoverEntry) -> CoverView {
    CoverView {
        link: cover.link,
        promo_url: cover.promo_url,
    }
}

/// `today` is the server's local date; delivery estimates on the page are
/// computed from it.
pub fn landing_page_to_response(page: LandingPage, today: NaiveDate) -> LandingPageResponse {
    LandingPageResponse {
        groups: page.groups.into_iter().map(group_to_view).collect(),
        covers: page.covers.into_iter().map(cover_to_view).collect(),
        today,
        tomorrow: today.succ_opt().unwrap_or(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_page_json_shape() {
        let page = LandingPage {
            groups: vec![CategoryGroup::new(GroupId::new(7), "Bijela tehnika", "<img src=\"b.png\">", 4)],
            covers: vec![CoverEntry::new("b.jpg", "/b"), CoverEntry::new("a.jpg", "/a")],
        };
        let today = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();

        let json = serde_json::to_value(landing_page_to_response(page, today)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "groups": [{
                    "id": 7,
                    "name": "Bijela tehnika",
                    "markup": "<img src=\"b.png\">",
                    "product_count": 4,
                    "slug": "bijela-tehnika",
                    "href": "/kategorija/7-bijela-tehnika",
                }],
                "covers": [
                    { "link": "b.jpg", "promo_url": "/b" },
                    { "link": "a.jpg", "promo_url": "/a" },
                ],
                "today": "2024-12-31",
                "tomorrow": "2025-01-01",
            })
        );
    }
}
