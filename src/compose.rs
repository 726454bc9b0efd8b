//! Manual post composition from a document template.
//!
//! The host document carries template frames named after image-layout
//! codes. Composing a post means finding the template for the requested
//! layout and filling its `"Title"` and `"Body"` text layers with
//! literal text. A template or required layer that cannot be found is an
//! explicit [`TemplateLayoutError`], never a blind dereference.

use log::debug;
use thiserror::Error;

use crate::document::{Document, Node};
use crate::host::{FontError, FontLoader};

/// Text layers every post template must contain.
const REQUIRED_LAYERS: &[&str] = &["Title", "Body"];

/// A post template was missing, or missing a required text layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateLayoutError {
    #[error("no template found for layout '{layout}'")]
    MissingTemplate { layout: String },
    #[error("template for layout '{layout}' has no '{layer}' text layer")]
    MissingLayer { layout: String, layer: String },
}

/// The literal content poured into a post template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    pub title: String,
    pub body: String,
}

/// Composes a post into the template named by `layout`.
///
/// The template's current font is loaded before its characters are
/// replaced, mirroring the host's requirement that a font be available
/// before text mutation.
pub fn compose_post(
    doc: &mut Document,
    fonts: &dyn FontLoader,
    layout: &str,
    content: &PostContent,
) -> Result<(), ComposeError> {
    let template = doc
        .find_mut(|node| node.name() == layout)
        .ok_or_else(|| TemplateLayoutError::MissingTemplate { layout: layout.to_string() })?;

    for layer in REQUIRED_LAYERS {
        if template
            .find_mut(&|node: &Node| node.name() == *layer && node.characters().is_some())
            .is_none()
        {
            return Err(TemplateLayoutError::MissingLayer {
                layout: layout.to_string(),
                layer: layer.to_string(),
            }
            .into());
        }
    }

    fill_layer(template, fonts, "Title", &content.title)?;
    fill_layer(template, fonts, "Body", &content.body)?;
    debug!("composed post into template '{}'", layout);
    Ok(())
}

/// Failure composing a post: layout problems or font acquisition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    #[error(transparent)]
    Layout(#[from] TemplateLayoutError),
    #[error(transparent)]
    Font(#[from] FontError),
}

fn fill_layer(
    template: &mut Node,
    fonts: &dyn FontLoader,
    layer: &str,
    text: &str,
) -> Result<(), ComposeError> {
    // Presence was checked up front; the lookup cannot miss here.
    if let Some(node) =
        template.find_mut(&|node: &Node| node.name() == layer && node.characters().is_some())
    {
        let family = node.font_family().unwrap_or("").to_string();
        if !family.is_empty() {
            fonts.load(&family, "Regular")?;
        }
        node.set_characters(text);
    }
    Ok(())
}
