//! Ordering and grouping for gallery views.
//!
//! This module provides:
//! - Sort criteria types shared by the item, group, and directory passes
//! - A natural name comparator for file-name heavy collections
//! - The ordering passes themselves, including the seeded random order
//! - Grouping of the ordered items into contiguous labeled runs

pub mod grouping;
pub mod keys;
pub mod method;
pub mod order;

pub use grouping::{MediaGroup, group_key, sort_and_group};
pub use keys::natural_cmp;
pub use method::{SortCriteria, SortField, SortOrder};
pub use order::{sort_directories, sort_items};
