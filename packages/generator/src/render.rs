//! Per-block HTML rendering.
//!
//! One canonical template per block variant. Rendering is pure and never
//! fails: missing data degrades to a placeholder instead of erroring.
//! Text fields are inserted verbatim — generated markup is trusted
//! authored content and the parser depends on finding it unescaped.

use crate::activity;
use crate::context::Context;
use momento_model::{markers, AssetSource, BlockKind, ContentBlock};

/// Render one block into the output buffer, wrapped in the spacing
/// wrapper the parser recurses through.
pub fn render_block(block: &ContentBlock, moment_id: &str, ctx: &mut Context) {
    ctx.add_line(&format!("<div class=\"{}\">", markers::BLOCK_WRAPPER_CLASS));
    ctx.indent();

    match &block.kind {
        BlockKind::Heading { text, subtitle } => render_heading(text, subtitle, ctx),
        BlockKind::Paragraph {
            text,
            highlight,
            theme,
        } => render_paragraph(text, highlight, theme, ctx),
        BlockKind::Instruction { text } => {
            ctx.add_line(&format!(
                "<i class=\"{}\">{}</i>",
                markers::INSTRUCTION_CLASS,
                text
            ));
        }
        BlockKind::Image { source } => render_image(source, moment_id, ctx),
        BlockKind::Audio { source, .. } => render_audio(source, moment_id, ctx),
        BlockKind::Button { label } => {
            ctx.add_line(&format!(
                "<button class=\"{}\" type=\"button\">{}</button>",
                markers::BUTTON_CLASS,
                label
            ));
        }
        BlockKind::Table => render_table(ctx),
        BlockKind::Video { video_id } => render_video(video_id, ctx),
        BlockKind::Activity { data } => ctx.add_block(&activity::markup(data)),
    }

    ctx.dedent();
    ctx.add_line("</div>");
}

fn render_heading(text: &str, subtitle: &str, ctx: &mut Context) {
    if subtitle.is_empty() {
        ctx.add_line(&format!("<h1>{}</h1>", text));
    } else {
        ctx.add_line(&format!(
            "<h1>{} <span class=\"{}\">{}</span></h1>",
            text,
            markers::HIGHLIGHT_SPAN_CLASS,
            subtitle
        ));
    }
}

fn render_paragraph(text: &str, highlight: &str, theme: &str, ctx: &mut Context) {
    let class = if theme.is_empty() {
        "parrafo".to_string()
    } else {
        format!("parrafo parrafo-{}", theme)
    };

    if highlight.is_empty() {
        ctx.add_line(&format!("<p class=\"{}\">{}</p>", class, text));
    } else {
        ctx.add_line(&format!(
            "<p class=\"{}\">{} <span class=\"{}\">{}</span></p>",
            class,
            text,
            markers::HIGHLIGHT_SPAN_CLASS,
            highlight
        ));
    }
}

fn render_image(source: &AssetSource, moment_id: &str, ctx: &mut Context) {
    let src = if source.is_empty() {
        markers::PLACEHOLDER_IMAGE_SRC.to_string()
    } else {
        source.resolve(moment_id, "img")
    };
    ctx.add_line(&format!(
        "<img class=\"{}\" src=\"{}\" alt=\"\">",
        markers::IMAGE_CLASS,
        src
    ));
}

fn render_audio(source: &AssetSource, moment_id: &str, ctx: &mut Context) {
    if source.is_empty() {
        // No audio yet; keep the slot visible in the editor preview.
        ctx.add_line(&format!(
            "<audio class=\"{}\" controls></audio>",
            markers::AUDIO_CLASS
        ));
        return;
    }
    ctx.add_line(&format!(
        "<audio class=\"{}\" controls src=\"{}\"></audio>",
        markers::AUDIO_CLASS,
        source.resolve(moment_id, "audio")
    ));
}

fn render_table(ctx: &mut Context) {
    ctx.add_line(&format!(
        "<div class=\"{}\">",
        markers::TABLE_CONTAINER_CLASS
    ));
    ctx.indent();
    ctx.add_line("<table class=\"table\">");
    ctx.indent();
    ctx.add_line("<thead><tr><th></th><th></th></tr></thead>");
    ctx.add_line("<tbody><tr><td></td><td></td></tr></tbody>");
    ctx.dedent();
    ctx.add_line("</table>");
    ctx.dedent();
    ctx.add_line("</div>");
}

fn render_video(video_id: &str, ctx: &mut Context) {
    ctx.add_line(&format!(
        "<div class=\"{}\">",
        markers::VIDEO_CONTAINER_CLASS
    ));
    ctx.indent();
    ctx.add_line(&format!(
        "<iframe src=\"https://www.youtube.com/embed/{}\" allowfullscreen></iframe>",
        video_id
    ));
    ctx.dedent();
    ctx.add_line("</div>");
}
