//! The filter pass: one synchronous reduction from content to the
//! filtered item list, updating counts, discovered options, and the
//! active flag as it goes.

use std::collections::HashMap;

use lumex_model::MediaItem;
use tracing::{debug, trace};

use crate::filters::definitions::FilterKind;
use crate::filters::state::{FilterOption, FilterState};

impl FilterState {
    /// Runs the date window and every filter slot over `items`,
    /// returning the surviving items in input order.
    ///
    /// Slots combine with AND; values within a slot combine with OR. An
    /// item with no values for a slot's kind is never excluded by that
    /// slot. Unseen values are appended to their slot as selected, so
    /// new content starts fully visible; options whose count drops to
    /// zero are pruned afterwards.
    ///
    /// Counts are taken over the date-filtered population before any
    /// categorical exclusion. Counting survivors instead would zero a
    /// freshly deselected option and prune it, making every deselection
    /// permanent.
    pub fn apply(&mut self, items: &[MediaItem]) -> Vec<MediaItem> {
        if items.is_empty() {
            self.date.clear_range();
            self.value_counts.clear();
            for slot in &mut self.selected {
                slot.options.clear();
            }
            self.active = false;
            trace!("Filter pass over empty content; state cleared");
            return Vec::new();
        }

        let raw_min = items.iter().map(|item| item.taken_at).min();
        let raw_max = items.iter().map(|item| item.taken_at).max();
        if let (Some(raw_min), Some(raw_max)) = (raw_min, raw_max) {
            self.date.observe_bounds(raw_min, raw_max);
        }

        let mut counts: HashMap<FilterKind, HashMap<String, usize>> =
            HashMap::new();
        let mut kept = Vec::with_capacity(items.len());

        for item in items {
            if !self.date.contains(item.taken_at) {
                continue;
            }

            let mut excluded = false;
            for slot in &mut self.selected {
                let values = slot.kind.values_of(item);
                let kind_counts = counts.entry(slot.kind).or_default();
                for value in &values {
                    *kind_counts.entry(value.clone()).or_insert(0) += 1;
                    if !slot.options.iter().any(|option| option.value == *value)
                    {
                        slot.options.push(FilterOption::selected(value.clone()));
                    }
                }
                excluded = excluded
                    || (!values.is_empty()
                        && values
                            .iter()
                            .all(|value| !slot.is_value_selected(value)));
            }

            if !excluded {
                kept.push(item.clone());
            }
        }

        self.value_counts = counts;
        self.active = kept.len() != items.len();

        let counts = &self.value_counts;
        for slot in &mut self.selected {
            let kind = slot.kind;
            slot.options.retain(|option| {
                counts
                    .get(&kind)
                    .and_then(|per_value| per_value.get(&option.value))
                    .copied()
                    .unwrap_or(0)
                    > 0
            });
        }

        debug!(
            "Filter pass kept {}/{} items (active: {})",
            kept.len(),
            items.len(),
            self.active
        );
        kept
    }
}
