//! # RANGELAB Visibility
//!
//! Team-scoped filtering of topology documents and assets.
//!
//! ## Components
//!
//! - `filter_for_role` - The visibility engine: computes what one role may see
//! - `RoleResolver` - Maps externally supplied identity data to a team role

pub mod engine;
pub mod resolver;

pub use engine::{filter_for_role, visible_assets, FilteredView};
pub use resolver::{Principal, RoleResolver};
