//! Shared builders for view engine integration tests.

use chrono::{TimeZone, Utc};
use lumex_model::{DirectoryContent, DirectoryEntry, Location, MediaItem};

/// Epoch milliseconds for a UTC wall-clock time.
#[allow(dead_code)]
pub fn ms(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> i64 {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
        .timestamp_millis()
}

/// A bare photo with nothing but a name and a capture time.
#[allow(dead_code)]
pub fn photo(name: &str, taken_at: i64) -> MediaItem {
    MediaItem::new(name, taken_at)
}

/// A photo tagged with a city and nothing else.
#[allow(dead_code)]
pub fn photo_in(name: &str, taken_at: i64, city: &str) -> MediaItem {
    MediaItem::new(name, taken_at).with_location(Location {
        city: Some(city.to_string()),
        state: None,
        country: None,
    })
}

/// A subdirectory entry.
#[allow(dead_code)]
pub fn directory(name: &str, last_modified: i64) -> DirectoryEntry {
    DirectoryEntry::new(name, last_modified)
}

/// Directory content holding only media items.
#[allow(dead_code)]
pub fn content_of(items: Vec<MediaItem>) -> DirectoryContent {
    DirectoryContent::new(items, Vec::new(), Vec::new())
}
