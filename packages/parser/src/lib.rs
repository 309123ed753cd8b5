//! # Momento Markup Parser
//!
//! Best-effort reconstruction of a Content Model from previously
//! generated markup, so a persisted moment can be reopened for editing.
//!
//! The parse is heuristic and lossy by design:
//!
//! - layout is re-detected from the banner marker or the column-class
//!   table, defaulting to `6-6` when ambiguous;
//! - unrecognized elements are dropped silently, with no diagnostic;
//! - detected activities recover only their kind tag — options, items,
//!   steps, categories and questions reset to the kind's empty default.
//!
//! `parse` never fails: unreadable input yields an empty default moment.

mod detect;
mod walk;

use detect::detect_block;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, RcDom};
use momento_model::{layout_for_columns, markers, BlockKind, ColumnSide, Layout, MomentDocument};
use walk::{child_elements, class_attr, find_body, find_descendant, has_class, tag_name, text_content};

/// Result of reparsing a persisted moment.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMoment {
    pub layout: Layout,
    pub lesson_number: u32,
    pub lesson_title: String,
    pub left: Vec<BlockKind>,
    pub right: Vec<BlockKind>,
}

impl ParsedMoment {
    fn empty() -> Self {
        Self {
            layout: Layout::default(),
            lesson_number: 1,
            lesson_title: String::new(),
            left: Vec::new(),
            right: Vec::new(),
        }
    }

    /// Build a fresh document from the parse, minting new block ids.
    pub fn into_document(self) -> MomentDocument {
        let mut doc = MomentDocument::new(self.layout);
        doc.lesson_number = self.lesson_number;
        doc.lesson_title = self.lesson_title;
        for kind in self.left {
            doc.add_block(ColumnSide::Left, kind);
        }
        for kind in self.right {
            doc.add_block(ColumnSide::Right, kind);
        }
        doc
    }
}

/// Reconstruct an approximate Content Model from generated markup.
pub fn parse(html: &str) -> ParsedMoment {
    let dom = match parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
    {
        Ok(dom) => dom,
        Err(_) => return ParsedMoment::empty(),
    };

    let body = match find_body(&dom.document) {
        Some(body) => body,
        None => return ParsedMoment::empty(),
    };

    // Cover moments carry the fixed banner marker and no columns.
    if let Some(banner) = find_descendant(&body, &|n| has_class(n, markers::COVER_BANNER_CLASS)) {
        return parse_cover(&banner);
    }

    let sections: Vec<Handle> = child_elements(&body)
        .into_iter()
        .filter(|n| tag_name(n).as_deref() == Some("section"))
        .collect();

    let (layout, left_col, right_col) = detect_columns(&sections);

    let mut moment = ParsedMoment::empty();
    moment.layout = layout;
    if let Some(col) = left_col {
        parse_column(&col, &mut moment.left);
    }
    if let Some(col) = right_col {
        parse_column(&col, &mut moment.right);
    }
    moment
}

fn parse_cover(banner: &Handle) -> ParsedMoment {
    let mut moment = ParsedMoment::empty();
    moment.layout = Layout::Cover;

    if let Some(lesson) = find_descendant(banner, &|n| has_class(n, markers::COVER_LESSON_CLASS)) {
        // The banner renders "Lección {n}".
        moment.lesson_number = text_content(&lesson)
            .rsplit(' ')
            .next()
            .and_then(|n| n.parse().ok())
            .unwrap_or(1);
    }
    if let Some(title) = find_descendant(banner, &|n| has_class(n, markers::COVER_TITLE_CLASS)) {
        moment.lesson_title = text_content(&title);
    }
    moment
}

/// Identify the first and second column elements and the layout they
/// imply. `12-12` is two top-level sections each holding one full-width
/// column; every other layout is one section with a row of two columns.
fn detect_columns(sections: &[Handle]) -> (Layout, Option<Handle>, Option<Handle>) {
    if sections.len() >= 2 {
        let left = full_width_column(&sections[0]);
        let right = full_width_column(&sections[1]);
        if left.is_some() && right.is_some() {
            return (Layout::SingleStack, left, right);
        }
    }

    let Some(section) = sections.first() else {
        return (Layout::default(), None, None);
    };

    let row = find_descendant(section, &|n| has_class(n, "row"));
    let host = row.unwrap_or_else(|| section.clone());
    let columns: Vec<Handle> = child_elements(&host)
        .into_iter()
        .filter(|n| {
            class_attr(n)
                .map(|c| c.split_whitespace().any(|part| part.starts_with("col-")))
                .unwrap_or(false)
        })
        .collect();

    let left = columns.first().cloned();
    let right = columns.get(1).cloned();

    let layout = match (&left, &right) {
        (Some(l), r) => layout_for_columns(
            &class_attr(l).unwrap_or_default(),
            r.as_ref().and_then(class_attr).as_deref(),
        )
        .unwrap_or_default(),
        _ => Layout::default(),
    };

    (layout, left, right)
}

fn full_width_column(section: &Handle) -> Option<Handle> {
    child_elements(section)
        .into_iter()
        .find(|n| class_attr(n).as_deref() == Some(markers::COL_FULL))
}

/// Walk one column's children, recursing transparently through the
/// spacing wrappers, and collect every recognized block shape.
fn parse_column(column: &Handle, out: &mut Vec<BlockKind>) {
    for child in child_elements(column) {
        if has_class(&child, markers::BLOCK_WRAPPER_CLASS) {
            parse_column(&child, out);
        } else if let Some(kind) = detect_block(&child) {
            out.push(kind);
        }
        // Anything else is dropped silently.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreadable_input_yields_default() {
        let moment = parse("");
        assert_eq!(moment.layout, Layout::Equal);
        assert!(moment.left.is_empty());
        assert!(moment.right.is_empty());
    }

    #[test]
    fn test_cover_detection() {
        let html = r#"
<section class="momento-portada">
  <div class="portada-contenido">
    <span class="portada-leccion">Lección 4</span>
    <h1 class="portada-titulo">La fotosíntesis</h1>
  </div>
</section>
"#;
        let moment = parse(html);
        assert_eq!(moment.layout, Layout::Cover);
        assert_eq!(moment.lesson_number, 4);
        assert_eq!(moment.lesson_title, "La fotosíntesis");
    }

    #[test]
    fn test_column_class_detection() {
        let html = r#"
<section class="momento-seccion">
  <div class="row">
    <div class="col-12 col-lg-5"><div class="mb-4"><h1>Hola</h1></div></div>
    <div class="col-12 col-lg-7"></div>
  </div>
</section>
"#;
        let moment = parse(html);
        assert_eq!(moment.layout, Layout::LeftMinor);
        assert_eq!(moment.left.len(), 1);
        assert!(moment.right.is_empty());
    }

    #[test]
    fn test_two_sections_are_single_stack() {
        let html = r#"
<section class="momento-seccion seccion-oscura"><div class="col-12"></div></section>
<section class="momento-seccion"><div class="col-12"></div></section>
"#;
        let moment = parse(html);
        assert_eq!(moment.layout, Layout::SingleStack);
    }

    #[test]
    fn test_ambiguous_layout_defaults_to_equal() {
        let html = r#"<section><div class="row"><div class="col-3"></div></div></section>"#;
        assert_eq!(parse(html).layout, Layout::Equal);
    }

    #[test]
    fn test_unknown_shapes_dropped_silently() {
        let html = r#"
<section class="momento-seccion">
  <div class="row">
    <div class="col-12 col-lg-6">
      <div class="mb-4"><canvas></canvas></div>
      <div class="mb-4"><button class="btn btn-primary">Seguir</button></div>
    </div>
    <div class="col-12 col-lg-6"></div>
  </div>
</section>
"#;
        let moment = parse(html);
        assert_eq!(moment.left.len(), 1);
        assert!(matches!(&moment.left[0], BlockKind::Button { label } if label == "Seguir"));
    }

    #[test]
    fn test_true_false_told_apart_from_quiz() {
        let quiz = r#"
<section class="momento-seccion"><div class="row"><div class="col-12 col-lg-6">
<div class="mb-4"><div class="preguntas-actividad">
  <div id="preguntas-container">
    <div class="pregunta"><button class="opcion-respuesta" data-valor="1">Lima</button></div>
  </div>
</div></div>
</div><div class="col-12 col-lg-6"></div></div></section>
"#;
        let tf = quiz.replace(">Lima<", ">Verdadero<");

        let parsed_quiz = parse(quiz);
        let parsed_tf = parse(&tf);

        use momento_model::{ActivityData, ActivityKind};
        let kind_of = |blocks: &[BlockKind]| match &blocks[0] {
            BlockKind::Activity { data } => data.kind(),
            other => panic!("expected activity, got {}", other.type_name()),
        };
        assert_eq!(kind_of(&parsed_quiz.left), ActivityKind::Quiz);
        assert_eq!(kind_of(&parsed_tf.left), ActivityKind::TrueFalse);

        // Payload resets to the empty default.
        match &parsed_quiz.left[0] {
            BlockKind::Activity { data } => {
                assert_eq!(data, &ActivityData::empty(ActivityKind::Quiz));
            }
            _ => unreachable!(),
        }
    }
}
