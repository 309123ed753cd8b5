//! # Momento Content Model
//!
//! The authoring model for a SCORM "moment": a two-column document of
//! typed content blocks, one of which may be an interactive activity.
//!
//! Everything here is plain data. Markup generation lives in
//! `momento-generator`, reconstruction from persisted markup in
//! `momento-parser`, and editing sessions in `momento-editor`.

mod activity;
mod block;
mod document;
mod layout;

pub mod markers;

pub use activity::{
    ActivityData, ActivityKind, ClassifyItem, ImageItem, QuizQuestion, Statement,
};
pub use block::{AssetSource, BlockId, BlockKind, ContentBlock};
pub use document::{Column, ColumnSide, GeneratedArtifact, IdGenerator, MomentDocument};
pub use layout::{layout_for_columns, Layout};
