//! Splitting an ordered gallery into labeled groups.

use chrono::DateTime;
use lumex_model::{DirectoryEntry, MediaItem};
use serde::{Deserialize, Serialize};

use crate::sorting::method::{SortCriteria, SortField};
use crate::sorting::order::{sort_directories, sort_items};

/// A contiguous run of items sharing one group key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaGroup {
    pub key: String,
    pub items: Vec<MediaItem>,
}

/// The group label an item falls under for a grouping field.
///
/// Keys are derived from the item alone; whether equal keys share a
/// group depends on their adjacency after the grouping sort.
pub fn group_key(field: SortField, item: &MediaItem) -> String {
    match field {
        SortField::Date => day_label(item.taken_at),
        SortField::Name => item
            .name
            .chars()
            .next()
            .map(|first| first.to_uppercase().to_string())
            .unwrap_or_default(),
        SortField::Rating => item.rating.unwrap_or(0).to_string(),
        SortField::PersonCount => item.faces.len().to_string(),
        SortField::Random => String::new(),
    }
}

fn day_label(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .format("%B %-d, %Y")
        .to_string()
}

/// Orders and groups a filtered gallery.
///
/// The grouping criteria decide the order of the groups (items are
/// sorted by them first, then cut wherever the key changes); the sort
/// criteria decide the order inside each group and the subdirectory
/// order. Repeated keys in separate runs stay separate groups.
pub fn sort_and_group(
    items: &[MediaItem],
    directories: &[DirectoryEntry],
    sorting: SortCriteria,
    grouping: SortCriteria,
) -> (Vec<MediaGroup>, Vec<DirectoryEntry>) {
    let mut ordered_directories = directories.to_vec();
    sort_directories(&mut ordered_directories, sorting);

    let mut ordered = items.to_vec();
    sort_items(&mut ordered, grouping);

    let mut groups: Vec<MediaGroup> = Vec::new();
    for item in ordered {
        let key = group_key(grouping.field, &item);
        match groups.last_mut() {
            Some(group) if group.key == key => group.items.push(item),
            _ => groups.push(MediaGroup {
                key,
                items: vec![item],
            }),
        }
    }

    for group in &mut groups {
        sort_items(&mut group.items, sorting);
    }

    (groups, ordered_directories)
}
