//! Core data model definitions shared across Lumex crates.
#![allow(missing_docs)]

pub mod content;
pub mod directory;
pub mod ids;
pub mod item;

// Intentionally curated re-exports for downstream consumers.
pub use content::DirectoryContent;
pub use directory::DirectoryEntry;
pub use ids::ItemID;
pub use item::{Location, MediaItem};
