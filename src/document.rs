//! In-memory model of the host's visual document tree.
//!
//! The engine never sees the host's concrete scene graph. It works
//! against this capability-gated model: a [`Node`] is one of a small set
//! of tagged variants, and every mutation goes through an accessor that
//! pattern-matches on the variant. A node that lacks a capability
//! reports the skip instead of being probed at runtime.
//!
//! The [`Document`] also owns the reusable paint and text style objects
//! that kit normalization creates as side effects.

use std::collections::HashMap;

use log::warn;

use crate::color::Rgb;

/// A paint applied to a node's fill list.
///
/// The applicator only ever produces a single opaque solid fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid { color: Rgb },
}

/// Unit tag for a line-height value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineHeightUnit {
    Pixels,
    Percent,
}

/// A line-height value with its unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineHeight {
    pub value: f64,
    pub unit: LineHeightUnit,
}

/// A cohesive typography assignment: family and size together, with an
/// optional line height. Never constructed with a missing family or size.
#[derive(Debug, Clone, PartialEq)]
pub struct TypographyStyle {
    pub family: String,
    pub size: f64,
    pub line_height: Option<LineHeight>,
}

/// A reusable named solid-color style created in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintStyle {
    pub name: String,
    pub color: Rgb,
}

/// A reusable named text style created in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub name: String,
    pub typography: TypographyStyle,
}

/// The capability surface of one node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// A container or shape carrying a fill list.
    Frame { fills: Vec<Paint> },
    /// A text layer: character content plus font attributes and fills.
    Text {
        characters: String,
        fills: Vec<Paint>,
        family: String,
        size: f64,
        line_height: Option<LineHeight>,
    },
    /// A structural node with no mutable style surface.
    Plain,
}

/// One element of the document tree.
///
/// Every node has a name, children, and an opaque string-annotation map;
/// everything else is gated by its [`NodeKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    kind: NodeKind,
    children: Vec<Node>,
    annotations: HashMap<String, String>,
}

impl Node {
    /// Creates a leaf node.
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Vec::new(),
            annotations: HashMap::new(),
        }
    }

    /// Creates an empty frame, the usual container node.
    pub fn frame(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Frame { fills: Vec::new() })
    }

    /// Creates a text node with default font attributes.
    pub fn text(name: impl Into<String>, characters: impl Into<String>) -> Self {
        Self::new(
            name,
            NodeKind::Text {
                characters: characters.into(),
                fills: Vec::new(),
                family: String::new(),
                size: 0.0,
                line_height: None,
            },
        )
    }

    /// Appends a child, returning the node for chaining.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// The fill list, when this node kind carries one.
    pub fn fills(&self) -> Option<&[Paint]> {
        match &self.kind {
            NodeKind::Frame { fills } | NodeKind::Text { fills, .. } => Some(fills),
            NodeKind::Plain => None,
        }
    }

    /// Mutable fill list, when this node kind carries one.
    pub fn fills_mut(&mut self) -> Option<&mut Vec<Paint>> {
        match &mut self.kind {
            NodeKind::Frame { fills } | NodeKind::Text { fills, .. } => Some(fills),
            NodeKind::Plain => None,
        }
    }

    /// Sets the font size on text nodes. Returns false on a skip.
    pub fn set_font_size(&mut self, new_size: f64) -> bool {
        match &mut self.kind {
            NodeKind::Text { size, .. } => {
                *size = new_size;
                true
            }
            _ => false,
        }
    }

    /// Current font size, for text nodes.
    pub fn font_size(&self) -> Option<f64> {
        match &self.kind {
            NodeKind::Text { size, .. } => Some(*size),
            _ => None,
        }
    }

    /// Replaces the character content of a text node. Returns false on a
    /// skip.
    pub fn set_characters(&mut self, text: &str) -> bool {
        match &mut self.kind {
            NodeKind::Text { characters, .. } => {
                *characters = text.to_string();
                true
            }
            _ => false,
        }
    }

    /// Character content, for text nodes.
    pub fn characters(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { characters, .. } => Some(characters),
            _ => None,
        }
    }

    /// Font family, for text nodes.
    pub fn font_family(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { family, .. } => Some(family),
            _ => None,
        }
    }

    /// Applies family, size, and line height as one unit to a text node.
    /// Returns false on a skip.
    pub fn set_typography(&mut self, typography: &TypographyStyle) -> bool {
        match &mut self.kind {
            NodeKind::Text {
                family,
                size,
                line_height,
                ..
            } => {
                *family = typography.family.clone();
                *size = typography.size;
                *line_height = typography.line_height;
                true
            }
            _ => false,
        }
    }

    /// Records an opaque string annotation on this node.
    ///
    /// Annotations are the forward-compatibility channel for properties
    /// with no direct mutation yet; any node kind accepts them.
    pub fn set_annotation(&mut self, key: &str, value: &str) {
        self.annotations.insert(key.to_string(), value.to_string());
    }

    /// Reads back an annotation.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }

    /// Visits this node and every descendant, depth first.
    pub fn visit_mut(&mut self, f: &mut impl FnMut(&mut Node)) {
        f(self);
        for child in &mut self.children {
            child.visit_mut(f);
        }
    }

    /// Visits this node and every descendant without mutation.
    pub fn visit(&self, f: &mut impl FnMut(&Node)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    /// Finds the first descendant (or self) matching the predicate.
    pub fn find_mut(&mut self, predicate: &impl Fn(&Node) -> bool) -> Option<&mut Node> {
        if predicate(self) {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(predicate))
    }
}

/// The fully loaded document: all pages plus the style objects created
/// during this invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pages: Vec<Node>,
    paint_styles: Vec<PaintStyle>,
    text_styles: Vec<TextStyle>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a page, returning the document for chaining.
    pub fn with_page(mut self, page: Node) -> Self {
        self.pages.push(page);
        self
    }

    pub fn pages(&self) -> &[Node] {
        &self.pages
    }

    pub fn pages_mut(&mut self) -> &mut [Node] {
        &mut self.pages
    }

    /// Creates a named paint style.
    ///
    /// On a name collision the first occurrence wins and the new color is
    /// discarded with a warning.
    pub fn create_paint_style(&mut self, name: &str, color: Rgb) {
        if self.paint_styles.iter().any(|s| s.name == name) {
            warn!("paint style '{}' already exists, keeping the first definition", name);
            return;
        }
        self.paint_styles.push(PaintStyle {
            name: name.to_string(),
            color,
        });
    }

    /// Creates a named text style.
    pub fn create_text_style(&mut self, name: &str, typography: TypographyStyle) {
        if self.text_styles.iter().any(|s| s.name == name) {
            warn!("text style '{}' already exists, keeping the first definition", name);
            return;
        }
        self.text_styles.push(TextStyle {
            name: name.to_string(),
            typography,
        });
    }

    pub fn paint_styles(&self) -> &[PaintStyle] {
        &self.paint_styles
    }

    pub fn text_styles(&self) -> &[TextStyle] {
        &self.text_styles
    }

    /// Visits every node on every page, depth first.
    pub fn visit_mut(&mut self, f: &mut impl FnMut(&mut Node)) {
        for page in &mut self.pages {
            page.visit_mut(f);
        }
    }

    /// Finds the first node in the whole document matching the predicate.
    pub fn find_mut(&mut self, predicate: impl Fn(&Node) -> bool) -> Option<&mut Node> {
        self.pages
            .iter_mut()
            .find_map(|page| page.find_mut(&predicate))
    }
}
