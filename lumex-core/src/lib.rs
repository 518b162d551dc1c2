//! # Lumex Core
//!
//! View engine for media galleries: turns a directory's worth of photos
//! and videos into a filtered, bucketed, ordered, and grouped view.
//!
//! ## Overview
//!
//! `lumex-core` sits between content loading and rendering, offering:
//!
//! - **Faceted Filtering**: Fixed attribute kinds (keywords, people,
//!   places, ratings, gear) with discovered options, occurrence counts,
//!   and an inclusive date window
//! - **Time Statistics**: An adaptive capture-time histogram backing the
//!   date slider
//! - **Ordering**: Natural name, date, rating, person-count, and seeded
//!   random orders for items and subdirectories
//! - **Grouping**: Contiguous labeled runs cut from the ordered items
//! - **View Store**: One owner of content and settings that rebuilds a
//!   complete snapshot per event and notifies observers
//!
//! ## Architecture
//!
//! The crate is organized into a few key modules:
//!
//! - [`filters`]: Filter kinds, filter state, and the reducer
//! - [`statistics`]: The capture-time histogram
//! - [`sorting`]: Sort criteria, ordering passes, and grouping
//! - [`store`]: The gallery view store and its observer trait
//!
//! ## Example
//!
//! ```
//! use lumex_core::sorting::{SortCriteria, SortField};
//! use lumex_core::store::GalleryViewStore;
//! use lumex_model::{DirectoryContent, MediaItem};
//!
//! let photos = vec![
//!     MediaItem::new("IMG_0010.jpg", 1_717_210_000_000),
//!     MediaItem::new("IMG_0009.jpg", 1_717_200_000_000),
//! ];
//!
//! let mut store = GalleryViewStore::new();
//! store.set_content(Some(DirectoryContent::new(photos, vec![], vec![])));
//! store.set_sorting(SortCriteria::ascending(SortField::Name));
//!
//! let view = store.view();
//! assert_eq!(view.groups.len(), 1);
//! assert_eq!(view.groups[0].items[0].name, "IMG_0009.jpg");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Engine errors and the crate result alias
pub mod error;

/// Categorical and date filtering
pub mod filters;

/// Ordering and grouping
pub mod sorting;

/// Capture-time histogram
pub mod statistics;

/// The gallery view store
pub mod store;

pub use error::{Result, ViewEngineError};
pub use filters::{
    DateFilter, FilterKind, FilterOption, FilterState, SelectedFilter,
    UNKNOWN_VALUE,
};
pub use sorting::{
    MediaGroup, SortCriteria, SortField, SortOrder, natural_cmp,
    sort_and_group,
};
pub use statistics::{
    BucketWidth, HistogramBucket, LabelResolution, build_histogram,
};
pub use store::{GalleryView, GalleryViewObserver, GalleryViewStore};
