//! The templating collaborator contract.
//!
//! The table presenter never constructs markup text; it asks a `Template`
//! to build each tag and to resolve display keys. Any embedding application
//! can supply its own collaborator; `HtmlTemplate` is the standard one.

use std::collections::BTreeMap;

use super::node::{AttrMap, Content, Node};

/// Collaborator that builds markup nodes and resolves display keys.
///
/// `build_tag` wraps already-composed content, so tag construction is
/// synchronous and side-effect-free. Implementations used in tests can
/// record the calls they receive.
pub trait Template {
    /// Build one markup node from a tag name, attributes, and content
    fn build_tag(&self, name: &str, attrs: AttrMap, content: Content) -> Node;

    /// Resolve a display key to localized text
    fn translate(&self, key: &str) -> String;
}

/// The standard HTML collaborator.
///
/// Builds nodes verbatim and resolves translations from a registered
/// lookup table, falling back to the key itself when no entry exists.
#[derive(Debug, Clone, Default)]
pub struct HtmlTemplate {
    translations: BTreeMap<String, String>,
}

impl HtmlTemplate {
    /// Create a collaborator with no registered translations
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a translation for a display key
    pub fn with_translation(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.translations.insert(key.into(), text.into());
        self
    }
}

impl Template for HtmlTemplate {
    fn build_tag(&self, name: &str, attrs: AttrMap, content: Content) -> Node {
        Node::new(name, attrs, content)
    }

    fn translate(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tag_passes_through() {
        let template = HtmlTemplate::new();
        let node = template.build_tag(
            "tr",
            AttrMap::from([("class".to_string(), "data".to_string())]),
            Content::Empty,
        );
        assert_eq!(node.tag, "tr");
        assert_eq!(node.class(), Some("data"));
    }

    #[test]
    fn test_translate_registered_key() {
        let template = HtmlTemplate::new().with_translation("totals", "Grand total");
        assert_eq!(template.translate("totals"), "Grand total");
    }

    #[test]
    fn test_translate_falls_back_to_key() {
        let template = HtmlTemplate::new();
        assert_eq!(template.translate("totals"), "totals");
    }
}
