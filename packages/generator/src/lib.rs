//! # Momento Markup Generator
//!
//! Serializes a [`momento_model::MomentDocument`] into its persisted
//! `{html, css, js}` artifact:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ layout: layout code → column classes        │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render: one HTML template per block kind    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ activity: per-kind CSS/JS state machines,   │
//! │ priority tie-break for the attached runtime │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Generation never fails: incomplete authored data degrades to
//! placeholder markup or an empty script.

pub mod activity;
mod context;
pub mod layout;
pub mod render;
mod markup;

pub use activity::{ScriptBundle, GENERATION_PRIORITY};
pub use context::Context;
pub use layout::ColumnClasses;
pub use markup::generate;
