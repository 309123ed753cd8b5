//! Shape detectors: map one markup element back to the block kind that
//! generated it.
//!
//! Detectors run in a fixed order, activity containers first. The
//! activity precedence below is its own list, independent of the
//! generation-time priority order in `momento-generator`; the two are
//! deliberately kept separate.

use crate::walk::{
    attr, class_attr, find_descendant, has_class, has_id, own_text, tag_name, text_content,
};
use markup5ever_rcdom::Handle;
use momento_model::{markers, ActivityData, ActivityKind, AssetSource, BlockKind};

/// Activity detection precedence, first match wins.
fn detect_activity(node: &Handle) -> Option<ActivityKind> {
    if has_class(node, markers::SELECT_TEXT_CONTAINER_CLASS) {
        return Some(ActivityKind::SelectText);
    }
    if has_class(node, markers::SELECT_IMAGE_CONTAINER_CLASS) {
        return Some(ActivityKind::SelectImage);
    }
    if has_id(node, markers::ORDER_STEPS_CONTAINER_ID) {
        return Some(ActivityKind::OrderSteps);
    }
    if has_class(node, markers::DRAG_CLASSIFY_CONTAINER_CLASS) {
        return Some(ActivityKind::DragClassify);
    }
    if has_class(node, markers::QUESTIONS_CONTAINER_CLASS) {
        // The generic question container hosts both quiz and true/false;
        // the fixed option label tells them apart.
        let is_true_false = find_descendant(node, &|n| {
            has_class(n, markers::ANSWER_OPTION_CLASS)
                && text_content(n) == markers::TRUE_LABEL
        })
        .is_some();
        return Some(if is_true_false {
            ActivityKind::TrueFalse
        } else {
            ActivityKind::Quiz
        });
    }
    None
}

/// Match one element against the ordered detector set. `None` means the
/// element is silently dropped.
pub fn detect_block(node: &Handle) -> Option<BlockKind> {
    // Activity containers are checked before everything else; only the
    // kind tag survives, the payload is reset to the empty default.
    if let Some(kind) = detect_activity(node) {
        return Some(BlockKind::Activity {
            data: ActivityData::empty(kind),
        });
    }

    let tag = tag_name(node)?;
    match tag.as_str() {
        "h1" => Some(detect_heading(node)),
        "p" => Some(detect_paragraph(node)),
        "i" if has_class(node, markers::INSTRUCTION_CLASS) => Some(BlockKind::Instruction {
            text: text_content(node),
        }),
        "img" => attr(node, "src").map(|url| BlockKind::Image {
            source: AssetSource::Resolved { url },
        }),
        "audio" => attr(node, "src").map(|url| BlockKind::Audio {
            source: AssetSource::Resolved { url },
            transcript: serde_json::Value::Null,
        }),
        "button" => Some(BlockKind::Button {
            label: text_content(node),
        }),
        "div" if has_class(node, markers::TABLE_CONTAINER_CLASS) => Some(BlockKind::Table),
        "div" if has_class(node, markers::VIDEO_CONTAINER_CLASS) => Some(detect_video(node)),
        _ => None,
    }
}

fn highlight_span_text(node: &Handle) -> String {
    find_descendant(node, &|n| has_class(n, markers::HIGHLIGHT_SPAN_CLASS))
        .map(|span| text_content(&span))
        .unwrap_or_default()
}

fn detect_heading(node: &Handle) -> BlockKind {
    BlockKind::Heading {
        text: own_text(node),
        subtitle: highlight_span_text(node),
    }
}

fn detect_paragraph(node: &Handle) -> BlockKind {
    let theme = class_attr(node)
        .unwrap_or_default()
        .split_whitespace()
        .find_map(|c| c.strip_prefix("parrafo-").map(str::to_string))
        .unwrap_or_default();

    BlockKind::Paragraph {
        text: own_text(node),
        highlight: highlight_span_text(node),
        theme,
    }
}

fn detect_video(node: &Handle) -> BlockKind {
    let video_id = find_descendant(node, &|n| tag_name(n).as_deref() == Some("iframe"))
        .and_then(|iframe| attr(&iframe, "src"))
        .and_then(|src| src.split("/embed/").nth(1).map(str::to_string))
        .unwrap_or_default();
    BlockKind::Video { video_id }
}
