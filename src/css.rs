//! Permissive parsing of CSS-like text into canonical rules.
//!
//! The source format is untrusted external content, so the grammar here
//! is a flat, best-effort subset: no nesting, no at-rules, no comments.
//! Malformed blocks and declarations are dropped silently: parsing must
//! never abort on a single bad declaration, and the worst input yields
//! an empty rule set rather than an error.
//!
//! # Grammar
//!
//! - Rule blocks are separated by `}`.
//! - Each block splits once on the first `{` into a selector list and a
//!   declaration list; a block missing either half is discarded.
//! - Selector lists split on `,`; each selector is trimmed. Duplicate
//!   selectors merge their declarations instead of replacing them.
//! - Declaration lists split on `;`; each declaration splits once on the
//!   first `:` into property and value, both trimmed.

use crate::rules::RuleSet;

/// Parses raw CSS-like text into a [`RuleSet`].
///
/// Never fails; unparseable fragments are skipped.
///
/// # Example
///
/// ```rust
/// use stylecast::parse_css;
///
/// let rules = parse_css("body { background-color: #336699; font-size: 14 }");
/// assert_eq!(rules.len(), 1);
/// assert_eq!(
///     rules.property("body", "font-size").unwrap().to_string(),
///     "14"
/// );
/// ```
pub fn parse_css(text: &str) -> RuleSet {
    let mut rules = RuleSet::new();

    for block in text.split('}') {
        let Some((selectors, declarations)) = block.split_once('{') else {
            continue;
        };
        if selectors.trim().is_empty() || declarations.trim().is_empty() {
            continue;
        }

        for selector in selectors.split(',') {
            let selector = selector.trim();
            if selector.is_empty() {
                continue;
            }
            for declaration in declarations.split(';') {
                let Some((property, value)) = declaration.split_once(':') else {
                    continue;
                };
                let (property, value) = (property.trim(), value.trim());
                if property.is_empty() || value.is_empty() {
                    continue;
                }
                rules.set(selector, property, value);
            }
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::PropertyValue;

    #[test]
    fn test_single_rule_two_properties() {
        let rules = parse_css("body { background-color: #336699; font-size: 14 }");

        assert_eq!(rules.len(), 1);
        let props = rules.get("body").unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(
            props.get("background-color"),
            Some(&PropertyValue::Text("#336699".into()))
        );
        assert_eq!(props.get("font-size"), Some(&PropertyValue::Text("14".into())));
    }

    #[test]
    fn test_reparse_yields_equal_rule_set() {
        let text = "body { background-color: #336699; font-size: 14 }";
        assert_eq!(parse_css(text), parse_css(text));
    }

    #[test]
    fn test_unterminated_block_yields_empty_set() {
        let rules = parse_css("body { color");
        assert!(rules.is_empty());
    }

    #[test]
    fn test_duplicate_selectors_merge() {
        let rules = parse_css("a{x:1} a{y:2}");

        assert_eq!(rules.len(), 1);
        let props = rules.get("a").unwrap();
        assert!(props.contains_key("x"));
        assert!(props.contains_key("y"));
    }

    #[test]
    fn test_selector_list_fans_out() {
        let rules = parse_css("h1, h2 { font-size: 32 }");

        assert_eq!(rules.len(), 2);
        assert!(rules.get("h1").is_some());
        assert!(rules.get("h2").is_some());
    }

    #[test]
    fn test_declaration_missing_value_dropped() {
        let rules = parse_css("a { x: ; y: 2 }");

        let props = rules.get("a").unwrap();
        assert!(!props.contains_key("x"));
        assert!(props.contains_key("y"));
    }

    #[test]
    fn test_declaration_missing_colon_dropped() {
        let rules = parse_css("a { color red; y: 2 }");

        let props = rules.get("a").unwrap();
        assert_eq!(props.len(), 1);
    }

    #[test]
    fn test_block_missing_selector_dropped() {
        let rules = parse_css("{ x: 1 }");
        assert!(rules.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_css("").is_empty());
        assert!(parse_css("   \n  ").is_empty());
    }

    #[test]
    fn test_whitespace_trimmed_everywhere() {
        let rules = parse_css("  body  {  color :  #000000 ;  }");

        assert_eq!(
            rules.property("body", "color"),
            Some(&PropertyValue::Text("#000000".into()))
        );
    }

    #[test]
    fn test_later_block_overwrites_property() {
        let rules = parse_css("a{x:1} a{x:2}");

        assert_eq!(
            rules.property("a", "x"),
            Some(&PropertyValue::Text("2".into()))
        );
    }
}
