//! Matching canonical rules against the document and applying them.
//!
//! Two strategies, selected by which parser produced the rules:
//!
//! - [`apply_css_rules`]: the selector-class strategy for CSS-derived
//!   rules. The literal `"body"` selector applies globally to every node
//!   exposing the relevant capability, recursing each page's full
//!   subtree.
//! - [`apply_layer_rules`]: the exact-name strategy for kit-derived
//!   per-layer rules. A rule matches a node iff the node's name equals
//!   the rule key, searched across the entire document so duplicate
//!   layer names on other pages match too.
//!
//! Both are single-pass: each visited node is tested once against the
//! full rule set.

mod css;
mod layers;
mod props;

pub use css::apply_css_rules;
pub use layers::apply_layer_rules;
pub use props::{apply_direct, typography_from_props};
