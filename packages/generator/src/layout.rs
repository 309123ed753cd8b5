use momento_model::{markers, Layout};

/// Column width classes for a layout, as emitted into the markup.
///
/// The markup parser re-detects the layout from these exact strings, so
/// the table must match bit-for-bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnClasses {
    pub left: &'static str,
    pub right: Option<&'static str>,
    /// `12-12` emits two independent top-level sections rather than two
    /// columns inside one section.
    pub split_sections: bool,
}

/// Resolve a layout code to its column classes. `Cover` has no columns
/// and returns `None`.
pub fn resolve(layout: Layout) -> Option<ColumnClasses> {
    match layout {
        Layout::Cover => None,
        Layout::Equal => Some(ColumnClasses {
            left: markers::COL_EQUAL,
            right: Some(markers::COL_EQUAL),
            split_sections: false,
        }),
        Layout::LeftMinor => Some(ColumnClasses {
            left: markers::COL_MINOR,
            right: Some(markers::COL_MAJOR),
            split_sections: false,
        }),
        Layout::LeftMajor => Some(ColumnClasses {
            left: markers::COL_MAJOR,
            right: Some(markers::COL_MINOR),
            split_sections: false,
        }),
        Layout::SingleStack => Some(ColumnClasses {
            left: markers::COL_FULL,
            right: Some(markers::COL_FULL),
            split_sections: true,
        }),
    }
}
