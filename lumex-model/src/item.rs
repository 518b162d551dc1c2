use crate::ids::ItemID;

/// Place metadata attached to a media item.
///
/// Every level is optional; an item may carry a country with no city.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

/// A single photo or video as the gallery engine sees it.
///
/// Inputs are immutable: the engine clones items into view snapshots and
/// never writes back. `taken_at` and every other timestamp in the model
/// are milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaItem {
    pub id: ItemID,
    pub name: String,
    pub taken_at: i64,
    pub rating: Option<u8>,

    // Tag-like attributes; an empty list means none were assigned.
    pub keywords: Vec<String>,
    pub faces: Vec<String>,

    // Optional capture metadata.
    pub caption: Option<String>,
    pub camera: Option<String>,
    pub lens: Option<String>,
    pub location: Option<Location>,
}

impl MediaItem {
    pub fn new(name: impl Into<String>, taken_at: i64) -> Self {
        Self {
            id: ItemID::new(),
            name: name.into(),
            taken_at,
            rating: None,
            keywords: Vec::new(),
            faces: Vec::new(),
            caption: None,
            camera: None,
            lens: None,
            location: None,
        }
    }

    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_faces<I, S>(mut self, faces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.faces = faces.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn with_camera(mut self, camera: impl Into<String>) -> Self {
        self.camera = Some(camera.into());
        self
    }

    pub fn with_lens(mut self, lens: impl Into<String>) -> Self {
        self.lens = Some(lens.into());
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}
