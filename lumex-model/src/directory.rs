/// A subdirectory listed alongside the media of a gallery directory.
///
/// `last_modified` is milliseconds since the Unix epoch, taken from the
/// filesystem at scan time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectoryEntry {
    pub name: String,
    pub last_modified: i64,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, last_modified: i64) -> Self {
        Self {
            name: name.into(),
            last_modified,
        }
    }
}
