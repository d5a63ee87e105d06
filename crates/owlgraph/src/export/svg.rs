//! Font embedding for SVG output.
//!
//! The renderer references the symbol font by family name only. To make the
//! output render the same everywhere, the bundled TrueType font is inlined as
//! a base64 `@font-face` rule in a `<style>` element placed right after the
//! root `<svg ...>` opening tag. Nothing else in the document is touched.

use base64::{Engine, engine::general_purpose::STANDARD};
use log::debug;
use svg::node::element::Style;

use crate::{config::SYMBOL_FONT_FAMILY, export::Error};

const FONT: &[u8] = include_bytes!("../../assets/DejaVuSansMono.ttf");

/// Inserts the embedded font style block after the root opening tag.
///
/// # Errors
///
/// Returns [`Error::MissingRootTag`] when `document` has no `<svg` element
/// or its opening tag is never closed. The input is discarded in that case.
pub fn embed_font(document: &str) -> Result<String, Error> {
    let insert_at = root_tag_end(document).ok_or(Error::MissingRootTag)?;
    let style = font_style().to_string();
    debug!(offset = insert_at, style_bytes = style.len(); "Embedding symbol font");

    let mut output = String::with_capacity(document.len() + style.len() + 1);
    output.push_str(&document[..insert_at]);
    output.push('\n');
    output.push_str(&style);
    output.push_str(&document[insert_at..]);
    Ok(output)
}

/// Builds the `<style>` element carrying the font.
pub fn font_style() -> Style {
    let encoded = STANDARD.encode(FONT);
    Style::new(format!(
        "@font-face {{ font-family: '{SYMBOL_FONT_FAMILY}'; \
         src: url(data:font/ttf;base64,{encoded}) format('truetype'); }}"
    ))
}

/// Returns the byte offset just past the `>` closing the root opening tag.
fn root_tag_end(document: &str) -> Option<usize> {
    let start = document.match_indices("<svg").find_map(|(index, tag)| {
        let rest = &document[index + tag.len()..];
        match rest.chars().next() {
            Some(c) if c.is_whitespace() || c == '>' => Some(index),
            _ => None,
        }
    })?;
    let close = document[start..].find('>')?;
    Some(start + close + 1)
}
