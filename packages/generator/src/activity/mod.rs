//! Activity code generation: one generator per kind, each emitting the
//! activity's container markup plus a paired CSS/JS bundle whose script
//! is a self-contained validation state machine.
//!
//! Correct answers are embedded as plaintext literals inside the
//! generated script. That is the persisted contract of previously
//! authored moments and is kept as-is.

mod drag_classify;
mod order_steps;
mod questions;
mod select_image;
mod select_text;

use momento_model::{ActivityData, ActivityKind};

/// Paired stylesheet and script for one activity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScriptBundle {
    pub css: String,
    pub js: String,
}

/// Generation-time selection priority, highest first. Among all activity
/// blocks with non-empty data, the first kind in this table present in
/// the document drives the artifact's CSS/JS; every other activity
/// renders scriptless.
///
/// Independent of the parse-time detection order in `momento-parser`;
/// the two tables are deliberately never unified.
pub const GENERATION_PRIORITY: [ActivityKind; 6] = [
    ActivityKind::SelectText,
    ActivityKind::OrderSteps,
    ActivityKind::SelectImage,
    ActivityKind::DragClassify,
    ActivityKind::TrueFalse,
    ActivityKind::Quiz,
];

/// Render the activity's container HTML. Always emitted, with or without
/// an attached script.
pub fn markup(data: &ActivityData) -> String {
    match data {
        ActivityData::SelectText { text, options, .. } => {
            select_text::markup(text, options)
        }
        ActivityData::SelectImage { items, options } => {
            select_image::markup(items, options)
        }
        ActivityData::OrderSteps { steps } => order_steps::markup(steps),
        ActivityData::DragClassify { categories, .. } => drag_classify::markup(categories),
        ActivityData::TrueFalse { statements } => questions::markup_true_false(statements),
        ActivityData::Quiz { questions } => questions::markup_quiz(questions),
    }
}

/// Generate the CSS/JS pair for one activity.
pub fn generate(data: &ActivityData) -> ScriptBundle {
    match data {
        ActivityData::SelectText { answers, .. } => select_text::generate(answers),
        ActivityData::SelectImage { items, .. } => select_image::generate(items),
        ActivityData::OrderSteps { steps } => order_steps::generate(steps),
        ActivityData::DragClassify { items, .. } => drag_classify::generate(items),
        ActivityData::TrueFalse { statements } => questions::generate_true_false(statements),
        ActivityData::Quiz { questions } => questions::generate_quiz(questions),
    }
}

/// Pick the activity that drives the artifact's CSS/JS: the first kind in
/// [`GENERATION_PRIORITY`] for which some block carries non-empty data.
pub fn select_active<'a, I>(activities: I) -> Option<&'a ActivityData>
where
    I: IntoIterator<Item = &'a ActivityData>,
{
    let populated: Vec<&ActivityData> =
        activities.into_iter().filter(|a| !a.is_empty()).collect();

    GENERATION_PRIORITY
        .iter()
        .find_map(|kind| populated.iter().find(|a| a.kind() == *kind).copied())
}
