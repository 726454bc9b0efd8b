//! The exact-name strategy for kit-derived per-layer rules.

use log::debug;

use crate::color::InvalidColorFormat;
use crate::document::{Document, Node};
use crate::rules::{PropertyMap, RuleSet};

use super::props::{apply_direct, typography_from_props, TYPOGRAPHY_PROPS};

/// Applies per-layer rules across the entire document.
///
/// A rule matches a node iff the node's name equals the rule key
/// exactly; every page's full subtree is searched, so a layer name that
/// repeats across pages matches each occurrence. Mapped properties
/// mutate the node directly (with `font-family`/`font-size`/
/// `line-height` applied as one cohesive typography unit when family and
/// size are both present); unmapped properties are recorded as string
/// annotations so nothing from the remote source is lost.
pub fn apply_layer_rules(doc: &mut Document, rules: &RuleSet) -> Result<(), InvalidColorFormat> {
    let mut matched = 0usize;
    let mut first_error = None;

    doc.visit_mut(&mut |node| {
        let Some(props) = rules.get(node.name()) else {
            return;
        };
        matched += 1;
        if let Err(err) = apply_to_node(node, props) {
            first_error.get_or_insert(err);
        }
    });

    debug!("layer rules matched {} nodes", matched);
    match first_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn apply_to_node(node: &mut Node, props: &PropertyMap) -> Result<(), InvalidColorFormat> {
    let typography = typography_from_props(props);
    if let Some(typography) = &typography {
        node.set_typography(typography);
    }

    for (property, value) in props {
        if typography.is_some() && TYPOGRAPHY_PROPS.contains(&property.as_str()) {
            continue;
        }
        if !apply_direct(node, property, value)? {
            node.set_annotation(property, &value.to_string());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::document::{LineHeightUnit, Node, Paint};
    use crate::rules::PropertyValue;

    #[test]
    fn test_exact_name_matches_duplicates_across_pages() {
        let mut doc = Document::new()
            .with_page(Node::frame("Page 1").with_child(Node::text("Title", "a")))
            .with_page(Node::frame("Page 2").with_child(Node::text("Title", "b")))
            .with_page(Node::frame("Page 3").with_child(Node::text("Body", "c")));

        let mut rules = RuleSet::new();
        rules.set("Title", "letter-spacing", "0.5");

        apply_layer_rules(&mut doc, &rules).unwrap();

        let mut annotated = 0;
        for page in doc.pages_mut() {
            page.visit_mut(&mut |node| {
                if node.name() == "Title" {
                    assert_eq!(node.annotation("letter-spacing"), Some("0.5"));
                    annotated += 1;
                }
                if node.name() == "Body" {
                    assert!(node.annotation("letter-spacing").is_none());
                }
            });
        }
        assert_eq!(annotated, 2);
    }

    #[test]
    fn test_name_match_is_exact_and_case_sensitive() {
        let mut doc = Document::new().with_page(
            Node::frame("Page")
                .with_child(Node::text("title", ""))
                .with_child(Node::text("Title Extra", "")),
        );

        let mut rules = RuleSet::new();
        rules.set("Title", "x", "1");

        apply_layer_rules(&mut doc, &rules).unwrap();

        for page in doc.pages_mut() {
            page.visit_mut(&mut |node| assert!(node.annotation("x").is_none()));
        }
    }

    #[test]
    fn test_mapped_properties_mutate_directly() {
        let mut doc =
            Document::new().with_page(Node::frame("Page").with_child(Node::frame("Hero")));

        let mut rules = RuleSet::new();
        rules.set("Hero", "background-color", "#336699");

        apply_layer_rules(&mut doc, &rules).unwrap();

        let hero = doc.find_mut(|n| n.name() == "Hero").unwrap();
        assert_eq!(
            hero.fills().unwrap(),
            [Paint::Solid { color: Rgb::from_hex("#336699").unwrap() }]
        );
        // Direct mutation, not an annotation.
        assert!(hero.annotation("background-color").is_none());
    }

    #[test]
    fn test_typography_triple_applies_cohesively() {
        let mut doc =
            Document::new().with_page(Node::frame("Page").with_child(Node::text("Quote", "")));

        let mut rules = RuleSet::new();
        rules.set("Quote", "font-family", "Inter");
        rules.set("Quote", "font-size", PropertyValue::Number(18.0));
        rules.set("Quote", "line-height", "140");

        apply_layer_rules(&mut doc, &rules).unwrap();

        let quote = doc.find_mut(|n| n.name() == "Quote").unwrap();
        assert_eq!(quote.font_family(), Some("Inter"));
        assert_eq!(quote.font_size(), Some(18.0));
        match quote.kind() {
            crate::document::NodeKind::Text { line_height, .. } => {
                let lh = line_height.unwrap();
                assert_eq!(lh.value, 140.0);
                assert_eq!(lh.unit, LineHeightUnit::Percent);
            }
            _ => unreachable!(),
        }
        // Consumed by the cohesive application, not annotated.
        assert!(quote.annotation("font-family").is_none());
    }

    #[test]
    fn test_font_size_alone_sets_directly() {
        let mut doc =
            Document::new().with_page(Node::frame("Page").with_child(Node::text("Note", "")));

        let mut rules = RuleSet::new();
        rules.set("Note", "font-size", "21");

        apply_layer_rules(&mut doc, &rules).unwrap();

        let note = doc.find_mut(|n| n.name() == "Note").unwrap();
        assert_eq!(note.font_size(), Some(21.0));
    }

    #[test]
    fn test_unmapped_values_stringified_into_annotations() {
        let mut doc =
            Document::new().with_page(Node::frame("Page").with_child(Node::frame("Chip")));

        let mut rules = RuleSet::new();
        rules.set("Chip", "corner-radius", PropertyValue::Number(8.0));

        apply_layer_rules(&mut doc, &rules).unwrap();

        let chip = doc.find_mut(|n| n.name() == "Chip").unwrap();
        assert_eq!(chip.annotation("corner-radius"), Some("8"));
    }

    #[test]
    fn test_bad_color_error_does_not_stop_other_nodes() {
        let mut doc = Document::new().with_page(
            Node::frame("Page")
                .with_child(Node::frame("Broken"))
                .with_child(Node::frame("Fine")),
        );

        let mut rules = RuleSet::new();
        rules.set("Broken", "background-color", "oops");
        rules.set("Fine", "background-color", "#00ff00");

        assert!(apply_layer_rules(&mut doc, &rules).is_err());

        let fine = doc.find_mut(|n| n.name() == "Fine").unwrap();
        assert_eq!(fine.fills().unwrap().len(), 1);
    }
}
