//! Catalog domain module (read side).
//!
//! Record types for what the storefront landing page shows, plus the channel
//! settings that decide which rows belong to this storefront. No IO here;
//! storage adapters live in `storefront-infra`.

pub mod channel;
pub mod cover;
pub mod group;

pub use channel::StorefrontChannel;
pub use cover::CoverEntry;
pub use group::CategoryGroup;
