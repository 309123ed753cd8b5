//! Literal DOM class names and ids shared by the markup generator and the
//! markup parser.
//!
//! These strings are the wire contract: the parser re-detects layout and
//! block shapes on reopen by matching them bit-for-bit, and the generated
//! scripts address their own markup through them. Change nothing here
//! without changing both sides.

// Column width classes, keyed by layout code.
pub const COL_EQUAL: &str = "col-12 col-lg-6";
pub const COL_MINOR: &str = "col-12 col-lg-5";
pub const COL_MAJOR: &str = "col-12 col-lg-7";
pub const COL_FULL: &str = "col-12";

/// Fixed banner marker for the cover layout.
pub const COVER_BANNER_CLASS: &str = "momento-portada";
pub const COVER_LESSON_CLASS: &str = "portada-leccion";
pub const COVER_TITLE_CLASS: &str = "portada-titulo";

/// The dark first section of the `12-12` layout.
pub const SECTION_DARK_CLASS: &str = "seccion-oscura";

/// Spacing wrapper around every rendered block. The parser recurses
/// through these transparently.
pub const BLOCK_WRAPPER_CLASS: &str = "mb-4";

/// Inner span carrying a heading subtitle or a paragraph highlight.
pub const HIGHLIGHT_SPAN_CLASS: &str = "texto-resaltado";
pub const INSTRUCTION_CLASS: &str = "instruccion";
pub const IMAGE_CLASS: &str = "img-fluid";
pub const BUTTON_CLASS: &str = "btn btn-primary";
pub const TABLE_CONTAINER_CLASS: &str = "tabla-contenido";
pub const VIDEO_CONTAINER_CLASS: &str = "video-container";
pub const AUDIO_CLASS: &str = "audio-reproductor";

/// Rendered when an image block has no usable source.
pub const PLACEHOLDER_IMAGE_SRC: &str = "./assets/img/placeholder.png";

// Activity container markers, one per kind. The generic question
// container is shared by quiz and true/false.
pub const SELECT_TEXT_CONTAINER_CLASS: &str = "select-text-actividad";
pub const SELECT_IMAGE_CONTAINER_CLASS: &str = "seleccion-imagen-actividad";
pub const ORDER_STEPS_CONTAINER_ID: &str = "ordenar-pasos-actividad";
pub const DRAG_CLASSIFY_CONTAINER_CLASS: &str = "drag-clasificar-actividad";
pub const QUESTIONS_CONTAINER_CLASS: &str = "preguntas-actividad";

// selectText runtime hooks.
pub const SELECT_CLASS: &str = "select";
pub const SELECT_VALIDATE_CLASS: &str = "select-validate";
pub const SELECT_RESET_CLASS: &str = "select-reset";

// selectImage runtime hooks.
pub const ITEMS_GRID_ID: &str = "items-grid";
pub const VALIDATE_BTN_ID: &str = "validate-btn";
pub const RESET_BTN_ID: &str = "reset-btn";

// quiz / true-false runtime hooks.
pub const ANSWER_OPTION_CLASS: &str = "opcion-respuesta";
pub const QUESTIONS_HOST_ID: &str = "preguntas-container";
pub const PROGRESS_BAR_FILL_ID: &str = "progress-bar-fill";
pub const NAV_PREV_ID: &str = "btnAnteriorNav";
pub const NAV_NEXT_ID: &str = "btnSiguienteNav";

// dragClassify runtime hooks.
pub const DRAG_ITEM_ID: &str = "item-actual";
pub const DRAG_CATEGORIES_ID: &str = "categorias-container";
pub const DRAG_PROGRESS_ID: &str = "clasificar-progreso";
pub const DRAG_FEEDBACK_ID: &str = "clasificar-feedback";
pub const DRAG_RESET_ID: &str = "clasificar-reset";

/// Option labels for true/false statements. The parser tells a true/false
/// activity apart from a quiz by finding [`TRUE_LABEL`] among the answer
/// options.
pub const TRUE_LABEL: &str = "Verdadero";
pub const FALSE_LABEL: &str = "Falso";
