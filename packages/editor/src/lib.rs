//! # Momento Editor
//!
//! Editing engine for SCORM moments.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ parser: persisted HTML → Content Model      │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: sessions + validated mutations      │
//! │  - one session per (project, moment)        │
//! │  - eager synchronous regeneration           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ generator: Content Model → {html, css, js}  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The persistence endpoints (load/save a moment, upload assets) are
//! external collaborators; this crate only hands them the artifact.

mod errors;
mod mutations;
mod session;
mod store;

pub use errors::SessionError;
pub use mutations::{Mutation, MutationError};
pub use session::EditSession;
pub use store::SessionStore;

// Re-export common types for convenience
pub use momento_model::{GeneratedArtifact, MomentDocument};
