//! Categorical and date filtering over directory content.
//!
//! This module provides:
//! - The fixed set of filterable attribute kinds and their value
//!   extraction rules
//! - Mutable filter state (slots, discovered options, date window)
//! - The reducer that applies that state to a content batch

pub mod definitions;
pub mod reducer;
pub mod state;

pub use definitions::{FilterKind, UNKNOWN_VALUE};
pub use state::{DateFilter, FilterOption, FilterState, SelectedFilter};
