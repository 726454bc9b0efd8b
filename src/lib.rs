//! stylecast applies externally hosted style definitions to a design
//! document tree.
//!
//! A style source is either raw CSS text or a structured "kit" payload
//! describing a design system's colors and typography. Both are
//! normalized into one canonical rule form, matched against the
//! document's nodes, and applied with per-property type coercion:
//! hex colors become normalized RGB fills, font metrics become typed
//! typography objects.
//!
//! The crate is host-agnostic: networking, font loading, and the user
//! surface are supplied through the [`HostContext`] traits, so the
//! whole pipeline runs against in-memory fakes in tests.
//!
//! # Pipeline
//!
//! ```text
//! raw source ──► parser/normalizer ──► RuleSet ──► matcher ──► applicator
//! (CSS / kit)    css, kit modules                  apply module
//! ```
//!
//! # Example
//!
//! ```rust
//! use stylecast::{apply_css_rules, parse_css, Document, Node};
//!
//! let mut doc = Document::new()
//!     .with_page(Node::frame("Page 1").with_child(Node::text("Label", "hi")));
//!
//! let rules = parse_css("body { background-color: #336699; font-size: 14 }");
//! apply_css_rules(&mut doc, &rules).unwrap();
//! ```

pub mod apply;
pub mod color;
pub mod command;
pub mod compose;
pub mod css;
pub mod document;
pub mod engine;
pub mod error;
pub mod host;
pub mod kit;
pub mod rules;

pub use apply::{apply_css_rules, apply_layer_rules};
pub use color::{InvalidColorFormat, Rgb};
pub use command::Command;
pub use compose::{compose_post, PostContent, TemplateLayoutError};
pub use css::parse_css;
pub use document::{
    Document, LineHeight, LineHeightUnit, Node, NodeKind, Paint, PaintStyle, TextStyle,
    TypographyStyle,
};
pub use engine::{handle_message, FAILURE_NOTICE, KIT_SERVICE_URL, SUCCESS_NOTICE};
pub use error::ApplyError;
pub use host::{FetchError, FontError, FontLoader, HostContext, HostUi, SourceFetcher};
pub use rules::{PropertyMap, PropertyValue, RuleSet};
