//! The selector-class strategy for CSS-derived rules.

use log::debug;

use crate::color::InvalidColorFormat;
use crate::document::Document;
use crate::rules::RuleSet;

use super::props::apply_direct;

/// The one selector this strategy interprets: it applies to every node.
const GLOBAL_SELECTOR: &str = "body";

/// Applies CSS-derived rules to every page of the document.
///
/// The `"body"` rule applies globally: each node in each page's full
/// subtree receives its mapped properties where the node has the
/// capability. Other selectors have no interpretation on this path and
/// are left untouched.
///
/// A malformed color value surfaces after traversal finishes; nodes are
/// mutated independently, so earlier applications stay in place.
pub fn apply_css_rules(doc: &mut Document, rules: &RuleSet) -> Result<(), InvalidColorFormat> {
    let Some(props) = rules.get(GLOBAL_SELECTOR) else {
        debug!("no '{}' rule present, nothing to apply", GLOBAL_SELECTOR);
        return Ok(());
    };

    let mut first_error = None;
    doc.visit_mut(&mut |node| {
        for (property, value) in props {
            if let Err(err) = apply_direct(node, property, value) {
                first_error.get_or_insert(err);
            }
        }
    });

    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
