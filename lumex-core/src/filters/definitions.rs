use std::fmt;
use std::str::FromStr;

use lumex_model::MediaItem;
use serde::{Deserialize, Serialize};

use crate::error::ViewEngineError;

/// Placeholder option for items missing a single-valued attribute.
///
/// Keeping absence selectable lets users filter for "photos with no
/// city" the same way they filter for Paris.
pub const UNKNOWN_VALUE: &str = "<unknown>";

/// The categorical attributes a filter slot can be bound to.
///
/// The set is fixed at compile time; parsing an unrecognized name is a
/// contract violation, not a recoverable condition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    Keywords,
    Faces,
    FaceGroup,
    Caption,
    Rating,
    Camera,
    Lens,
    City,
    State,
    Country,
}

impl FilterKind {
    pub fn all() -> &'static [FilterKind] {
        use FilterKind::*;
        &[
            Keywords, Faces, FaceGroup, Caption, Rating, Camera, Lens, City,
            State, Country,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKind::Keywords => "keywords",
            FilterKind::Faces => "faces",
            FilterKind::FaceGroup => "face_group",
            FilterKind::Caption => "caption",
            FilterKind::Rating => "rating",
            FilterKind::Camera => "camera",
            FilterKind::Lens => "lens",
            FilterKind::City => "city",
            FilterKind::State => "state",
            FilterKind::Country => "country",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::Keywords => "Keywords",
            FilterKind::Faces => "People",
            FilterKind::FaceGroup => "Groups",
            FilterKind::Caption => "Caption",
            FilterKind::Rating => "Rating",
            FilterKind::Camera => "Camera",
            FilterKind::Lens => "Lens",
            FilterKind::City => "City",
            FilterKind::State => "State",
            FilterKind::Country => "Country",
        }
    }

    /// Whether one item can contribute several values to this kind.
    ///
    /// Multi-valued kinds yield an empty list for items without the
    /// attribute; single-valued kinds yield [`UNKNOWN_VALUE`] instead.
    pub fn is_multi_valued(&self) -> bool {
        matches!(self, FilterKind::Keywords | FilterKind::Faces)
    }

    /// Extracts this kind's filterable values from an item.
    ///
    /// Counting and exclusion both run on the result of a single call,
    /// so the two can never disagree about what an item carries.
    pub fn values_of(&self, item: &MediaItem) -> Vec<String> {
        match self {
            FilterKind::Keywords => item.keywords.clone(),
            FilterKind::Faces => item.faces.clone(),
            FilterKind::FaceGroup => {
                if item.faces.is_empty() {
                    vec![UNKNOWN_VALUE.to_string()]
                } else {
                    let mut names = item.faces.clone();
                    names.sort_unstable();
                    vec![names.join(", ")]
                }
            }
            FilterKind::Caption => single(item.caption.clone()),
            FilterKind::Rating => {
                single(item.rating.map(|rating| rating.to_string()))
            }
            FilterKind::Camera => single(item.camera.clone()),
            FilterKind::Lens => single(item.lens.clone()),
            FilterKind::City => single(
                item.location.as_ref().and_then(|place| place.city.clone()),
            ),
            FilterKind::State => single(
                item.location.as_ref().and_then(|place| place.state.clone()),
            ),
            FilterKind::Country => single(
                item.location
                    .as_ref()
                    .and_then(|place| place.country.clone()),
            ),
        }
    }
}

fn single(value: Option<String>) -> Vec<String> {
    vec![value.unwrap_or_else(|| UNKNOWN_VALUE.to_string())]
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for FilterKind {
    type Err = ViewEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterKind::all()
            .iter()
            .find(|kind| kind.as_str() == s)
            .copied()
            .ok_or_else(|| ViewEngineError::UnknownFilterKind(s.to_string()))
    }
}
