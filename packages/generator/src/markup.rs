//! The markup generator: orchestrates the layout resolver, the component
//! renderer and the activity code generators into one `{html, css, js}`
//! artifact.
//!
//! Generation is a pure function of the document; it never fails and
//! holds no state across calls. The editor regenerates eagerly after
//! every mutation.

use crate::activity;
use crate::context::Context;
use crate::layout;
use crate::render::render_block;
use momento_model::{markers, Column, GeneratedArtifact, MomentDocument};

/// Generate the full artifact for a document.
pub fn generate(document: &MomentDocument, moment_id: &str) -> GeneratedArtifact {
    // Cover is the one layout with no columns to resolve.
    let classes = match layout::resolve(document.layout) {
        Some(classes) => classes,
        None => {
            return GeneratedArtifact {
                html: cover_banner(document.lesson_number, &document.lesson_title),
                css: format!("{}{}", BASE_CSS, COVER_CSS),
                js: String::new(),
            };
        }
    };

    let mut ctx = Context::new();
    if classes.split_sections {
        emit_section(&mut ctx, &document.left, classes.left, true, moment_id);
        if let Some(right_class) = classes.right {
            emit_section(&mut ctx, &document.right, right_class, false, moment_id);
        }
    } else {
        ctx.add_line("<section class=\"momento-seccion\">");
        ctx.indent();
        ctx.add_line("<div class=\"row\">");
        ctx.indent();
        emit_column(&mut ctx, &document.left, classes.left, moment_id);
        if let Some(right_class) = classes.right {
            emit_column(&mut ctx, &document.right, right_class, moment_id);
        }
        ctx.dedent();
        ctx.add_line("</div>");
        ctx.dedent();
        ctx.add_line("</section>");
    }

    let mut css = BASE_CSS.to_string();
    let mut js = String::new();

    // Only the first priority-order match with non-empty data gets a
    // runtime; every other activity renders scriptless.
    let activities = document.blocks().filter_map(|b| b.kind.as_activity());
    if let Some(active) = activity::select_active(activities) {
        let bundle = activity::generate(active);
        css.push_str(&bundle.css);
        js = bundle.js;
    }

    GeneratedArtifact {
        html: ctx.get_output(),
        css,
        js,
    }
}

fn emit_section(
    ctx: &mut Context,
    column: &Column,
    class: &str,
    dark: bool,
    moment_id: &str,
) {
    if dark {
        ctx.add_line(&format!(
            "<section class=\"momento-seccion {}\">",
            markers::SECTION_DARK_CLASS
        ));
    } else {
        ctx.add_line("<section class=\"momento-seccion\">");
    }
    ctx.indent();
    emit_column(ctx, column, class, moment_id);
    ctx.dedent();
    ctx.add_line("</section>");
}

fn emit_column(ctx: &mut Context, column: &Column, class: &str, moment_id: &str) {
    ctx.add_line(&format!("<div class=\"{}\">", class));
    ctx.indent();
    for block in column {
        render_block(block, moment_id, ctx);
    }
    ctx.dedent();
    ctx.add_line("</div>");
}

/// The cover layout ignores column content entirely: a fixed banner
/// parameterized only by lesson number and lesson title.
fn cover_banner(lesson_number: u32, lesson_title: &str) -> String {
    let mut ctx = Context::new();
    ctx.add_line(&format!(
        "<section class=\"{}\">",
        markers::COVER_BANNER_CLASS
    ));
    ctx.indent();
    ctx.add_line("<div class=\"portada-contenido\">");
    ctx.indent();
    ctx.add_line(&format!(
        "<span class=\"{}\">Lección {}</span>",
        markers::COVER_LESSON_CLASS,
        lesson_number
    ));
    ctx.add_line(&format!(
        "<h1 class=\"{}\">{}</h1>",
        markers::COVER_TITLE_CLASS,
        lesson_title
    ));
    ctx.dedent();
    ctx.add_line("</div>");
    ctx.dedent();
    ctx.add_line("</section>");
    ctx.get_output()
}

const BASE_CSS: &str = r#".momento-seccion {
  padding: 2rem 1rem;
}
.momento-seccion .row {
  display: flex;
  flex-wrap: wrap;
  margin: 0 -0.75rem;
}
.momento-seccion [class*="col-"] {
  padding: 0 0.75rem;
}
.seccion-oscura {
  background: #1f2433;
  color: #f5f6fa;
}
.mb-4 {
  margin-bottom: 1.5rem;
}
.texto-resaltado {
  color: #3a5bd9;
  font-weight: 700;
}
.instruccion {
  color: #555a6e;
}
"#;

const COVER_CSS: &str = r#".momento-portada {
  display: flex;
  align-items: center;
  justify-content: center;
  min-height: 320px;
  background: linear-gradient(135deg, #1f2433, #3a5bd9);
  color: #fff;
  text-align: center;
}
.portada-leccion {
  text-transform: uppercase;
  letter-spacing: 2px;
  font-size: 0.9rem;
}
.portada-titulo {
  margin-top: 0.5rem;
  font-size: 2.4rem;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use momento_model::{ActivityData, BlockKind, ColumnSide, Layout, QuizQuestion};

    #[test]
    fn test_scenario_two_equal_columns() {
        let mut doc = MomentDocument::new(Layout::Equal);
        doc.add_block(
            ColumnSide::Left,
            BlockKind::Heading {
                text: "Bienvenidos".to_string(),
                subtitle: String::new(),
            },
        );

        let artifact = generate(&doc, "m-1");
        assert_eq!(artifact.html.matches("class=\"col-12 col-lg-6\"").count(), 2);
        assert!(artifact.html.contains("<h1>Bienvenidos</h1>"));
    }

    #[test]
    fn test_layout_classes_per_code() {
        for (layout, left, right) in [
            (Layout::LeftMinor, "col-12 col-lg-5", "col-12 col-lg-7"),
            (Layout::LeftMajor, "col-12 col-lg-7", "col-12 col-lg-5"),
        ] {
            let doc = MomentDocument::new(layout);
            let artifact = generate(&doc, "m-1");
            assert!(artifact.html.contains(&format!("class=\"{}\"", left)));
            assert!(artifact.html.contains(&format!("class=\"{}\"", right)));
        }
    }

    #[test]
    fn test_single_stack_emits_two_sections() {
        let doc = MomentDocument::new(Layout::SingleStack);
        let artifact = generate(&doc, "m-1");
        assert_eq!(artifact.html.matches("<section").count(), 2);
        assert!(artifact.html.contains("seccion-oscura"));
        assert_eq!(artifact.html.matches("class=\"col-12\"").count(), 2);
        assert!(!artifact.html.contains("class=\"row\""));
    }

    #[test]
    fn test_cover_ignores_columns() {
        let mut doc = MomentDocument::new(Layout::Cover);
        doc.lesson_number = 3;
        doc.lesson_title = "La célula".to_string();
        doc.add_block(
            ColumnSide::Left,
            BlockKind::Instruction {
                text: "esto no se emite".to_string(),
            },
        );

        let artifact = generate(&doc, "m-1");
        assert!(artifact.html.contains("momento-portada"));
        assert!(artifact.html.contains("Lección 3"));
        assert!(artifact.html.contains("La célula"));
        assert!(!artifact.html.contains("esto no se emite"));
        assert!(artifact.js.is_empty());
    }

    #[test]
    fn test_priority_select_text_over_quiz() {
        let mut doc = MomentDocument::new(Layout::Equal);
        doc.add_block(
            ColumnSide::Left,
            BlockKind::Activity {
                data: ActivityData::Quiz {
                    questions: vec![QuizQuestion {
                        question: "¿?".to_string(),
                        options: vec!["sí".to_string(), "no".to_string()],
                        correct: 0,
                    }],
                },
            },
        );
        doc.add_block(
            ColumnSide::Right,
            BlockKind::Activity {
                data: ActivityData::SelectText {
                    text: "Hola {{}} mundo".to_string(),
                    options: vec!["a".to_string(), "b".to_string()],
                    answers: vec![0],
                },
            },
        );

        let artifact = generate(&doc, "m-1");
        // The quiz markup still renders, scriptless.
        assert!(artifact.html.contains("preguntas-container"));
        assert!(artifact.html.contains("select-text-actividad"));
        // But the runtime belongs to selectText alone.
        assert!(artifact.js.contains("var respuestasCorrectas = [\"1\"];"));
        assert!(artifact.js.contains(".select-validate"));
        assert!(!artifact.js.contains("btnValidarPregunta"));
        assert!(artifact.css.contains(".select-text-actividad"));
        assert!(!artifact.css.contains(".opcion-respuesta"));
    }

    #[test]
    fn test_no_activity_means_no_js() {
        let mut doc = MomentDocument::new(Layout::Equal);
        doc.add_block(
            ColumnSide::Left,
            BlockKind::Paragraph {
                text: "solo texto".to_string(),
                highlight: String::new(),
                theme: String::new(),
            },
        );
        let artifact = generate(&doc, "m-1");
        assert!(artifact.js.is_empty());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let mut doc = MomentDocument::new(Layout::LeftMajor);
        doc.add_block(
            ColumnSide::Left,
            BlockKind::Button {
                label: "Continuar".to_string(),
            },
        );
        assert_eq!(generate(&doc, "m-1"), generate(&doc, "m-1"));
    }
}
