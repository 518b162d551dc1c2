use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ViewEngineError};
use crate::filters::definitions::FilterKind;

/// One selectable value inside a filter slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub selected: bool,
}

impl FilterOption {
    pub fn selected(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            selected: true,
        }
    }
}

/// A filter slot: one attribute kind plus the values discovered for it.
///
/// Options are append-only during a reducer pass (discovery order) and
/// pruned only when their count drops to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFilter {
    pub kind: FilterKind,
    pub options: Vec<FilterOption>,
}

impl SelectedFilter {
    pub fn new(kind: FilterKind) -> Self {
        Self {
            kind,
            options: Vec::new(),
        }
    }

    pub fn is_value_selected(&self, value: &str) -> bool {
        self.options
            .iter()
            .any(|option| option.selected && option.value == value)
    }

    /// Flips one option. Toggling a value that has not been discovered
    /// is a no-op; discovery belongs to the reducer.
    pub fn toggle(&mut self, value: &str) {
        match self.options.iter_mut().find(|option| option.value == value) {
            Some(option) => option.selected = !option.selected,
            None => {
                debug!("Ignoring toggle of undiscovered {} value: {}", self.kind, value)
            }
        }
    }

    /// Exclusive select: keep only `value` selected. Invoked again while
    /// `value` is the sole selection, it reverts to select-all.
    pub fn select_only(&mut self, value: &str) {
        if !self.options.iter().any(|option| option.value == value) {
            debug!(
                "Ignoring select-only of undiscovered {} value: {}",
                self.kind, value
            );
            return;
        }
        if self.is_only_selected(value) {
            for option in &mut self.options {
                option.selected = true;
            }
        } else {
            for option in &mut self.options {
                option.selected = option.value == value;
            }
        }
    }

    fn is_only_selected(&self, value: &str) -> bool {
        self.is_value_selected(value)
            && self.options.iter().filter(|option| option.selected).count()
                == 1
    }
}

/// Timestamp window over `taken_at`, inclusive on both ends.
///
/// `min_date`/`max_date` track the observed extrema of the current
/// content, padded a second outward so boundary items survive the
/// comparison. User bounds are optional; an unset bound follows the
/// observed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFilter {
    pub min_date: i64,
    pub max_date: i64,
    user_min: Option<i64>,
    user_max: Option<i64>,
}

impl Default for DateFilter {
    fn default() -> Self {
        Self {
            min_date: 0,
            max_date: chrono::Utc::now().timestamp_millis(),
            user_min: None,
            user_max: None,
        }
    }
}

impl DateFilter {
    /// Effective lower bound in epoch milliseconds.
    pub fn min_filter(&self) -> i64 {
        self.user_min.unwrap_or(self.min_date)
    }

    /// Effective upper bound in epoch milliseconds.
    pub fn max_filter(&self) -> i64 {
        self.user_max.unwrap_or(self.max_date)
    }

    pub fn is_user_set(&self) -> bool {
        self.user_min.is_some() || self.user_max.is_some()
    }

    pub fn contains(&self, taken_at: i64) -> bool {
        taken_at >= self.min_filter() && taken_at <= self.max_filter()
    }

    /// Records the extrema of freshly delivered content, padded one
    /// second outward. User bounds set against older content are
    /// clamped into the new range.
    pub fn observe_bounds(&mut self, raw_min: i64, raw_max: i64) {
        self.min_date = floor_to_second(raw_min) - 1_000;
        self.max_date = ceil_to_second(raw_max) + 1_000;
        self.user_min = self
            .user_min
            .map(|lo| lo.clamp(self.min_date, self.max_date));
        self.user_max = self
            .user_max
            .map(|hi| hi.clamp(self.min_date, self.max_date));
    }

    /// Sets the user window, swapping an inverted pair and clamping both
    /// ends into the observed range. Out-of-range input narrows to the
    /// nearest valid window instead of failing.
    pub fn set_range(&mut self, lo: i64, hi: i64) {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.user_min = Some(lo.clamp(self.min_date, self.max_date));
        self.user_max = Some(hi.clamp(self.min_date, self.max_date));
    }

    /// Drops the user window; both bounds follow the data again.
    pub fn clear_range(&mut self) {
        self.user_min = None;
        self.user_max = None;
    }
}

fn floor_to_second(millis: i64) -> i64 {
    millis - millis.rem_euclid(1_000)
}

fn ceil_to_second(millis: i64) -> i64 {
    let floored = floor_to_second(millis);
    if floored == millis {
        millis
    } else {
        floored + 1_000
    }
}

/// Complete filtering state for one gallery view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Whether the filter panel is showing. Filtering is skipped while
    /// hidden and inactive.
    pub visible: bool,
    /// True when the last pass removed at least one item.
    pub active: bool,
    pub date: DateFilter,
    pub selected: Vec<SelectedFilter>,
    /// Occurrence counts per kind over the date-filtered population,
    /// refreshed by every reducer pass.
    pub value_counts: HashMap<FilterKind, HashMap<String, usize>>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            visible: false,
            active: false,
            date: DateFilter::default(),
            selected: Self::DEFAULT_SLOTS
                .iter()
                .map(|kind| SelectedFilter::new(*kind))
                .collect(),
            value_counts: HashMap::new(),
        }
    }
}

impl FilterState {
    /// Slot layout presented before the user customizes anything.
    pub const DEFAULT_SLOTS: [FilterKind; 4] = [
        FilterKind::Keywords,
        FilterKind::Faces,
        FilterKind::City,
        FilterKind::Rating,
    ];

    /// Clears discovered options and the user date window. Slot kinds
    /// and panel visibility survive a reset.
    pub fn reset(&mut self) {
        for slot in &mut self.selected {
            slot.options.clear();
        }
        self.date.clear_range();
        self.value_counts.clear();
        self.active = false;
    }

    /// Rebinds a slot to another attribute kind. Its options are
    /// cleared and rediscovered on the next pass.
    pub fn set_slot_kind(&mut self, index: usize, kind: FilterKind) -> Result<()> {
        let slot = self.slot_mut(index)?;
        slot.kind = kind;
        slot.options.clear();
        Ok(())
    }

    pub fn toggle_option(&mut self, index: usize, value: &str) -> Result<()> {
        self.slot_mut(index)?.toggle(value);
        Ok(())
    }

    pub fn select_only(&mut self, index: usize, value: &str) -> Result<()> {
        self.slot_mut(index)?.select_only(value);
        Ok(())
    }

    pub fn count_of(&self, kind: FilterKind, value: &str) -> usize {
        self.value_counts
            .get(&kind)
            .and_then(|counts| counts.get(value))
            .copied()
            .unwrap_or(0)
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut SelectedFilter> {
        let slots = self.selected.len();
        self.selected
            .get_mut(index)
            .ok_or(ViewEngineError::SlotOutOfRange { index, slots })
    }
}
