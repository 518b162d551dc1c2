//! GalleryViewStore - single source of truth for one gallery view
//!
//! The store owns the delivered content, the filter state, and the
//! ordering criteria, and rebuilds a complete [`GalleryView`] snapshot
//! after every command before notifying observers. Observers never see
//! a partially updated view.

use std::fmt;
use std::rc::Weak;

use lumex_model::{DirectoryContent, DirectoryEntry};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::filters::{FilterKind, FilterState};
use crate::sorting::{MediaGroup, SortCriteria, sort_and_group};
use crate::statistics::{HistogramBucket, build_histogram};

/// Receives every rebuilt view snapshot.
///
/// The store holds observers weakly and prunes dropped ones on the next
/// notification. Everything is synchronous and single-threaded; the
/// callback runs before the triggering command returns.
pub trait GalleryViewObserver {
    fn view_changed(&self, view: &GalleryView);
}

/// One fully assembled gallery view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryView {
    pub groups: Vec<MediaGroup>,
    pub directories: Vec<DirectoryEntry>,
    pub meta_files: Vec<String>,
    pub histogram: Vec<HistogramBucket>,
    pub filters_active: bool,
}

/// Owns content plus view configuration and derives snapshots.
pub struct GalleryViewStore {
    content: Option<DirectoryContent>,
    filters: FilterState,
    sorting: SortCriteria,
    grouping: SortCriteria,
    histogram: Vec<HistogramBucket>,
    view: GalleryView,
    observers: Vec<Weak<dyn GalleryViewObserver>>,
}

impl Default for GalleryViewStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GalleryViewStore {
    pub fn new() -> Self {
        Self {
            content: None,
            filters: FilterState::default(),
            sorting: SortCriteria::default(),
            grouping: SortCriteria::default(),
            histogram: Vec::new(),
            view: GalleryView::default(),
            observers: Vec::new(),
        }
    }

    /// Registers an observer for future snapshots.
    pub fn subscribe(&mut self, observer: Weak<dyn GalleryViewObserver>) {
        self.observers.push(observer);
    }

    /// The latest snapshot.
    pub fn view(&self) -> &GalleryView {
        &self.view
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filters
    }

    pub fn sorting(&self) -> SortCriteria {
        self.sorting
    }

    pub fn grouping(&self) -> SortCriteria {
        self.grouping
    }

    pub fn is_default_view_order(&self) -> bool {
        self.sorting == SortCriteria::default()
            && self.grouping == SortCriteria::default()
    }

    /// Replaces the content this view is built from. The histogram is
    /// recomputed here and only here; it always describes the full
    /// pre-filter population.
    pub fn set_content(&mut self, content: Option<DirectoryContent>) {
        self.histogram = match &content {
            Some(content) => build_histogram(&content.items),
            None => Vec::new(),
        };
        if let Some(content) = &content {
            debug!(
                "Content replaced: {} items, {} directories, {} histogram buckets",
                content.items.len(),
                content.directories.len(),
                self.histogram.len()
            );
        } else {
            debug!("Content cleared");
        }
        self.content = content;
        self.rebuild_and_notify();
    }

    /// Narrows the date window. Inverted and out-of-range input is
    /// normalized, never rejected.
    pub fn set_date_range(&mut self, lo: i64, hi: i64) {
        self.filters.date.set_range(lo, hi);
        self.rebuild_and_notify();
    }

    pub fn toggle_option(&mut self, slot: usize, value: &str) -> Result<()> {
        self.filters.toggle_option(slot, value)?;
        self.rebuild_and_notify();
        Ok(())
    }

    pub fn select_only(&mut self, slot: usize, value: &str) -> Result<()> {
        self.filters.select_only(slot, value)?;
        self.rebuild_and_notify();
        Ok(())
    }

    pub fn set_slot_kind(&mut self, slot: usize, kind: FilterKind) -> Result<()> {
        self.filters.set_slot_kind(slot, kind)?;
        self.rebuild_and_notify();
        Ok(())
    }

    pub fn set_sorting(&mut self, sorting: SortCriteria) {
        self.sorting = sorting;
        self.rebuild_and_notify();
    }

    pub fn set_grouping(&mut self, grouping: SortCriteria) {
        self.grouping = grouping;
        self.rebuild_and_notify();
    }

    pub fn reset_filters(&mut self) {
        self.filters.reset();
        self.rebuild_and_notify();
    }

    /// Shows or hides the filter panel. Hiding the panel while no
    /// filter holds anything back resets the filter state, so a panel
    /// reopened later starts clean.
    pub fn set_filters_visible(&mut self, visible: bool) {
        if self.filters.visible == visible {
            return;
        }
        self.filters.visible = visible;
        if !visible && !self.filters.active {
            debug!("Filter panel hidden while inactive; resetting filters");
            self.filters.reset();
        }
        self.rebuild_and_notify();
    }

    fn rebuild_and_notify(&mut self) {
        self.rebuild();
        self.notify_observers();
    }

    fn rebuild(&mut self) {
        let Some(content) = &self.content else {
            self.view = GalleryView::default();
            return;
        };

        // While the panel is closed and nothing is held back, the
        // reducer is skipped entirely: no counting, no discovery.
        let filtered = if self.filters.visible || self.filters.active {
            self.filters.apply(&content.items)
        } else {
            content.items.clone()
        };

        let (groups, directories) = sort_and_group(
            &filtered,
            &content.directories,
            self.sorting,
            self.grouping,
        );

        self.view = GalleryView {
            groups,
            directories,
            meta_files: content.meta_files.clone(),
            histogram: self.histogram.clone(),
            filters_active: self.filters.active,
        };
    }

    /// Delivers the current snapshot to live observers and drops the
    /// dead ones.
    fn notify_observers(&mut self) {
        let view = &self.view;
        self.observers.retain(|weak_observer| {
            if let Some(observer) = weak_observer.upgrade() {
                observer.view_changed(view);
                true
            } else {
                false
            }
        });
    }
}

impl fmt::Debug for GalleryViewStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GalleryViewStore")
            .field("has_content", &self.content.is_some())
            .field("sorting", &self.sorting)
            .field("grouping", &self.grouping)
            .field("filters_active", &self.filters.active)
            .field("observer_count", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumex_model::{Location, MediaItem};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingObserver {
        views: RefCell<Vec<GalleryView>>,
    }

    impl RecordingObserver {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                views: RefCell::new(Vec::new()),
            })
        }

        fn seen(&self) -> usize {
            self.views.borrow().len()
        }
    }

    impl GalleryViewObserver for RecordingObserver {
        fn view_changed(&self, view: &GalleryView) {
            self.views.borrow_mut().push(view.clone());
        }
    }

    fn content_with_cities() -> DirectoryContent {
        let paris = MediaItem::new("paris.jpg", 1_000).with_location(Location {
            city: Some("Paris".to_string()),
            state: None,
            country: None,
        });
        let lyon = MediaItem::new("lyon.jpg", 2_000).with_location(Location {
            city: Some("Lyon".to_string()),
            state: None,
            country: None,
        });
        DirectoryContent::new(
            vec![paris, lyon],
            vec![DirectoryEntry::new("archive", 0)],
            vec!["index.pg2conf".to_string()],
        )
    }

    fn city_slot_store() -> GalleryViewStore {
        let mut store = GalleryViewStore::new();
        store.filters.selected =
            vec![crate::filters::SelectedFilter::new(FilterKind::City)];
        store
    }

    #[test]
    fn content_delivery_builds_a_snapshot_and_notifies() {
        let observer = RecordingObserver::new();
        let mut store = GalleryViewStore::new();
        store.subscribe(Rc::downgrade(&observer) as Weak<dyn GalleryViewObserver>);

        store.set_content(Some(content_with_cities()));

        assert_eq!(observer.seen(), 1);
        let view = store.view();
        assert_eq!(view.groups.len(), 1);
        assert_eq!(view.groups[0].items.len(), 2);
        assert_eq!(view.directories.len(), 1);
        assert_eq!(view.meta_files, ["index.pg2conf"]);
        assert!(!view.filters_active);
    }

    #[test]
    fn clearing_content_yields_the_empty_view() {
        let mut store = GalleryViewStore::new();
        store.set_content(Some(content_with_cities()));
        store.set_content(None);
        assert_eq!(store.view(), &GalleryView::default());
    }

    #[test]
    fn hidden_inactive_panel_skips_discovery() {
        let mut store = city_slot_store();
        store.set_content(Some(content_with_cities()));
        // Reducer never ran: nothing discovered, nothing filtered.
        assert!(store.filter_state().selected[0].options.is_empty());
        assert_eq!(store.view().groups[0].items.len(), 2);
    }

    #[test]
    fn opening_the_panel_runs_discovery() {
        let mut store = city_slot_store();
        store.set_content(Some(content_with_cities()));
        store.set_filters_visible(true);

        let options = &store.filter_state().selected[0].options;
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|option| option.selected));
    }

    #[test]
    fn active_filters_keep_filtering_after_the_panel_closes() {
        let mut store = city_slot_store();
        store.set_content(Some(content_with_cities()));
        store.set_filters_visible(true);
        store.toggle_option(0, "Paris").unwrap();
        assert!(store.view().filters_active);

        store.set_filters_visible(false);

        assert!(store.view().filters_active);
        assert_eq!(store.view().groups[0].items.len(), 1);
        assert_eq!(store.view().groups[0].items[0].name, "lyon.jpg");
    }

    #[test]
    fn closing_an_inactive_panel_resets_filter_state() {
        let mut store = city_slot_store();
        store.set_content(Some(content_with_cities()));
        store.set_filters_visible(true);
        // A window covering every item: the filter stays inactive but
        // the state is no longer pristine.
        store.set_date_range(0, 3_000);
        assert!(store.filter_state().date.is_user_set());
        assert!(!store.view().filters_active);
        assert!(!store.filter_state().selected[0].options.is_empty());

        store.set_filters_visible(false);

        assert!(!store.filter_state().date.is_user_set());
        assert!(store.filter_state().selected[0].options.is_empty());
    }

    #[test]
    fn out_of_range_slot_commands_fail_without_notifying() {
        let observer = RecordingObserver::new();
        let mut store = city_slot_store();
        store.set_content(Some(content_with_cities()));
        store.subscribe(Rc::downgrade(&observer) as Weak<dyn GalleryViewObserver>);

        assert!(store.toggle_option(5, "Paris").is_err());
        assert_eq!(observer.seen(), 0);
    }

    #[test]
    fn dropped_observers_are_pruned_on_the_next_notification() {
        let mut store = city_slot_store();
        let observer = RecordingObserver::new();
        store.subscribe(Rc::downgrade(&observer) as Weak<dyn GalleryViewObserver>);
        drop(observer);

        store.set_content(Some(content_with_cities()));
        assert!(format!("{store:?}").contains("observer_count: 0"));
    }

    #[test]
    fn default_view_order_check_tracks_both_criteria() {
        let mut store = GalleryViewStore::new();
        assert!(store.is_default_view_order());
        store.set_sorting(SortCriteria::descending(
            crate::sorting::SortField::Name,
        ));
        assert!(!store.is_default_view_order());
    }
}
