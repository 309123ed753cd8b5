use serde::{Deserialize, Serialize};

/// The six interactive activity kinds.
///
/// The serialized codes are the persistence contract; the markup parser
/// recovers only this tag from generated markup, never the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    #[serde(rename = "select-text")]
    SelectText,
    #[serde(rename = "select-imagen")]
    SelectImage,
    #[serde(rename = "ordenar-pasos")]
    OrderSteps,
    #[serde(rename = "drag-clasificar")]
    DragClassify,
    #[serde(rename = "verdadero-falso")]
    TrueFalse,
    #[serde(rename = "quiz")]
    Quiz,
}

impl ActivityKind {
    pub fn code(&self) -> &'static str {
        match self {
            ActivityKind::SelectText => "select-text",
            ActivityKind::SelectImage => "select-imagen",
            ActivityKind::OrderSteps => "ordenar-pasos",
            ActivityKind::DragClassify => "drag-clasificar",
            ActivityKind::TrueFalse => "verdadero-falso",
            ActivityKind::Quiz => "quiz",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "select-text" => Some(ActivityKind::SelectText),
            "select-imagen" => Some(ActivityKind::SelectImage),
            "ordenar-pasos" => Some(ActivityKind::OrderSteps),
            "drag-clasificar" => Some(ActivityKind::DragClassify),
            "verdadero-falso" => Some(ActivityKind::TrueFalse),
            "quiz" => Some(ActivityKind::Quiz),
            _ => None,
        }
    }
}

/// One selectImage item: an image answered from the shared option pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageItem {
    pub image: String,
    pub description: String,
    /// 0-based index into the shared option pool.
    pub correct: usize,
}

/// One dragClassify item, tagged with the category it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyItem {
    pub text: String,
    /// 0-based index into the categories list.
    pub category: usize,
}

/// One true/false statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub text: String,
    pub answer: bool,
}

/// One quiz question with its option list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    /// 0-based index of the correct option.
    pub correct: usize,
}

/// Authored payload of an activity block, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActivityData {
    /// Templated text with `{{}}` blank markers, a shared option pool and
    /// one 0-based correct-option index per blank.
    #[serde(rename = "select-text")]
    SelectText {
        text: String,
        options: Vec<String>,
        answers: Vec<usize>,
    },

    #[serde(rename = "select-imagen")]
    SelectImage {
        items: Vec<ImageItem>,
        options: Vec<String>,
    },

    /// Correct order is the authored order.
    #[serde(rename = "ordenar-pasos")]
    OrderSteps { steps: Vec<String> },

    #[serde(rename = "drag-clasificar")]
    DragClassify {
        categories: Vec<String>,
        items: Vec<ClassifyItem>,
    },

    #[serde(rename = "verdadero-falso")]
    TrueFalse { statements: Vec<Statement> },

    #[serde(rename = "quiz")]
    Quiz { questions: Vec<QuizQuestion> },
}

impl ActivityData {
    pub fn kind(&self) -> ActivityKind {
        match self {
            ActivityData::SelectText { .. } => ActivityKind::SelectText,
            ActivityData::SelectImage { .. } => ActivityKind::SelectImage,
            ActivityData::OrderSteps { .. } => ActivityKind::OrderSteps,
            ActivityData::DragClassify { .. } => ActivityKind::DragClassify,
            ActivityData::TrueFalse { .. } => ActivityKind::TrueFalse,
            ActivityData::Quiz { .. } => ActivityKind::Quiz,
        }
    }

    /// Whether the activity carries no authored data. Empty activities
    /// never win the generation-priority tie-break and render scriptless.
    pub fn is_empty(&self) -> bool {
        match self {
            ActivityData::SelectText { text, options, .. } => {
                text.is_empty() || options.is_empty()
            }
            ActivityData::SelectImage { items, options } => {
                items.is_empty() || options.is_empty()
            }
            ActivityData::OrderSteps { steps } => steps.is_empty(),
            ActivityData::DragClassify { categories, items } => {
                categories.is_empty() || items.is_empty()
            }
            ActivityData::TrueFalse { statements } => statements.is_empty(),
            ActivityData::Quiz { questions } => questions.is_empty(),
        }
    }

    /// The empty/default payload for a kind. The markup parser resets
    /// every detected activity to this shape: authored options, items,
    /// steps, categories and questions are not recoverable from markup.
    pub fn empty(kind: ActivityKind) -> Self {
        match kind {
            ActivityKind::SelectText => ActivityData::SelectText {
                text: String::new(),
                options: Vec::new(),
                answers: Vec::new(),
            },
            ActivityKind::SelectImage => ActivityData::SelectImage {
                items: Vec::new(),
                options: Vec::new(),
            },
            ActivityKind::OrderSteps => ActivityData::OrderSteps { steps: Vec::new() },
            ActivityKind::DragClassify => ActivityData::DragClassify {
                categories: Vec::new(),
                items: Vec::new(),
            },
            ActivityKind::TrueFalse => ActivityData::TrueFalse {
                statements: Vec::new(),
            },
            ActivityKind::Quiz => ActivityData::Quiz {
                questions: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes() {
        assert_eq!(ActivityKind::SelectText.code(), "select-text");
        assert_eq!(ActivityKind::from_code("verdadero-falso"), Some(ActivityKind::TrueFalse));
        assert_eq!(ActivityKind::from_code("multiple-choice"), None);
    }

    #[test]
    fn test_empty_defaults_are_empty() {
        for kind in [
            ActivityKind::SelectText,
            ActivityKind::SelectImage,
            ActivityKind::OrderSteps,
            ActivityKind::DragClassify,
            ActivityKind::TrueFalse,
            ActivityKind::Quiz,
        ] {
            let data = ActivityData::empty(kind);
            assert_eq!(data.kind(), kind);
            assert!(data.is_empty());
        }
    }

    #[test]
    fn test_serde_tag_matches_code() {
        let data = ActivityData::OrderSteps {
            steps: vec!["uno".to_string()],
        };
        let json = serde_json::to_string(&data).unwrap();
        assert!(json.contains("\"ordenar-pasos\""));
    }
}
