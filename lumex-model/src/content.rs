use crate::directory::DirectoryEntry;
use crate::item::MediaItem;

/// Everything the scanner delivers for one gallery directory.
///
/// `meta_files` are sidecar file names (pg2conf and friends) that the
/// engine carries through to the view without interpreting.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectoryContent {
    pub items: Vec<MediaItem>,
    pub directories: Vec<DirectoryEntry>,
    pub meta_files: Vec<String>,
}

impl DirectoryContent {
    pub fn new(
        items: Vec<MediaItem>,
        directories: Vec<DirectoryEntry>,
        meta_files: Vec<String>,
    ) -> Self {
        Self {
            items,
            directories,
            meta_files,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
            && self.directories.is_empty()
            && self.meta_files.is_empty()
    }
}
