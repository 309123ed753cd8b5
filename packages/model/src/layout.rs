use crate::markers;
use serde::{Deserialize, Serialize};

/// Page layout for a moment.
///
/// The code strings are part of the persistence contract; the markup
/// parser re-detects the layout from the column classes each code maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layout {
    /// Fixed banner parameterized only by lesson number and title.
    /// Column content is ignored.
    #[serde(rename = "momento")]
    Cover,
    /// Two equal columns.
    #[serde(rename = "6-6")]
    Equal,
    /// Narrow left, wide right.
    #[serde(rename = "5-7")]
    LeftMinor,
    /// Wide left, narrow right.
    #[serde(rename = "7-5")]
    LeftMajor,
    /// Two stacked full-width sections instead of columns.
    #[serde(rename = "12-12")]
    SingleStack,
}

impl Layout {
    pub fn code(&self) -> &'static str {
        match self {
            Layout::Cover => "momento",
            Layout::Equal => "6-6",
            Layout::LeftMinor => "5-7",
            Layout::LeftMajor => "7-5",
            Layout::SingleStack => "12-12",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "momento" => Some(Layout::Cover),
            "6-6" => Some(Layout::Equal),
            "5-7" => Some(Layout::LeftMinor),
            "7-5" => Some(Layout::LeftMajor),
            "12-12" => Some(Layout::SingleStack),
            _ => None,
        }
    }

}

impl Default for Layout {
    fn default() -> Self {
        Layout::Equal
    }
}

/// Reverse lookup over the column-class table in [`markers`]: match the
/// class attributes of the first (and second) column element against the
/// classes each layout emits. Used when reconstructing a moment from its
/// persisted markup.
pub fn layout_for_columns(left_class: &str, right_class: Option<&str>) -> Option<Layout> {
    match (left_class, right_class) {
        (markers::COL_EQUAL, Some(markers::COL_EQUAL)) => Some(Layout::Equal),
        (markers::COL_MINOR, Some(markers::COL_MAJOR)) => Some(Layout::LeftMinor),
        (markers::COL_MAJOR, Some(markers::COL_MINOR)) => Some(Layout::LeftMajor),
        (markers::COL_FULL, _) => Some(Layout::SingleStack),
        _ => None,
    }
}
