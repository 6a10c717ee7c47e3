//! HTML element tree.
//!
//! Nodes are built bottom-up and never mutated afterwards. [`Node::Leaf`]
//! holds text, [`Node::Parent`] owns its children, and [`Node::Base`] carries
//! every field generically for inspection but refuses to render.

use std::fmt;

use crate::error::Error;

/// Ordered attribute list, rendered in insertion order.
///
/// Values are emitted as-is: quotes and angle brackets are not escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair, returning the extended list.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Value of the first pair with the given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as ` key="value"` pairs; empty for an empty list.
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.0 {
            write!(f, " {key}=\"{value}\"")?;
        }
        Ok(())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A text-bearing node with no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    tag: Option<String>,
    value: String,
    attributes: Attributes,
}

/// A tagged node owning a non-empty list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parent {
    tag: String,
    children: Vec<Node>,
    attributes: Attributes,
}

/// Untyped node carrying every field; used for inspection only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub children: Option<Vec<Node>>,
    pub attributes: Option<Attributes>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(Leaf),
    Parent(Parent),
    Base(BaseNode),
}

impl Node {
    /// Untagged leaf; renders as its value verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Leaf(Leaf {
            tag: None,
            value: value.into(),
            attributes: Attributes::default(),
        })
    }

    /// Tagged leaf without attributes.
    pub fn leaf(tag: &str, value: impl Into<String>) -> Self {
        Self::leaf_with(tag, value, Attributes::default())
    }

    /// Tagged leaf with attributes. An empty tag yields an untagged leaf.
    pub fn leaf_with(tag: &str, value: impl Into<String>, attributes: Attributes) -> Self {
        Self::Leaf(Leaf {
            tag: (!tag.is_empty()).then(|| tag.to_string()),
            value: value.into(),
            attributes,
        })
    }

    /// Build a leaf from optional parts, rejecting a missing value.
    pub fn try_leaf(
        tag: Option<&str>,
        value: Option<String>,
        attributes: Attributes,
    ) -> Result<Self, Error> {
        let value = value.ok_or(Error::MissingValue)?;
        Ok(Self::leaf_with(tag.unwrap_or_default(), value, attributes))
    }

    /// Parent without attributes. Fails if `children` is empty.
    pub fn parent(tag: &str, children: Vec<Node>) -> Result<Self, Error> {
        Self::parent_with(tag, children, Attributes::default())
    }

    pub fn parent_with(
        tag: &str,
        children: Vec<Node>,
        attributes: Attributes,
    ) -> Result<Self, Error> {
        if children.is_empty() {
            return Err(Error::MissingChildren {
                tag: tag.to_string(),
            });
        }
        Ok(Self::Parent(Parent {
            tag: tag.to_string(),
            children,
            attributes,
        }))
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => leaf.tag.as_deref(),
            Self::Parent(parent) => Some(&parent.tag),
            Self::Base(base) => base.tag.as_deref(),
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => Some(&leaf.value),
            Self::Parent(_) => None,
            Self::Base(base) => base.value.as_deref(),
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Self::Leaf(_) => &[],
            Self::Parent(parent) => &parent.children,
            Self::Base(base) => base.children.as_deref().unwrap_or_default(),
        }
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        match self {
            Self::Leaf(leaf) => Some(&leaf.attributes),
            Self::Parent(parent) => Some(&parent.attributes),
            Self::Base(base) => base.attributes.as_ref(),
        }
    }

    /// Render this node and its descendants to an HTML string.
    pub fn render(&self) -> Result<String, Error> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<(), Error> {
        match self {
            Self::Leaf(leaf) => {
                match &leaf.tag {
                    Some(tag) => {
                        push_open(tag, &leaf.attributes, out);
                        out.push_str(&leaf.value);
                        push_close(tag, out);
                    }
                    None => out.push_str(&leaf.value),
                }
                Ok(())
            }
            Self::Parent(parent) => {
                if parent.children.is_empty() {
                    return Err(Error::MissingChildren {
                        tag: parent.tag.clone(),
                    });
                }
                push_open(&parent.tag, &parent.attributes, out);
                for child in &parent.children {
                    child.render_into(out)?;
                }
                push_close(&parent.tag, out);
                Ok(())
            }
            Self::Base(_) => Err(Error::UnsupportedOperation),
        }
    }
}

fn push_open(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&attributes.to_html());
    out.push('>');
}

fn push_close(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn attributes_render_in_insertion_order() {
        let attrs = Attributes::new()
            .with("href", "https://www.google.com")
            .with("target", "_blank");
        assert_eq!(
            attrs.to_html(),
            r#" href="https://www.google.com" target="_blank""#
        );
    }

    #[test]
    fn empty_attributes_render_nothing() {
        assert_eq!(Attributes::new().to_html(), "");
    }

    #[test]
    fn attribute_values_are_not_escaped() {
        let attrs = Attributes::new().with("title", r#"a "quoted" <b>"#);
        assert_eq!(attrs.to_html(), r#" title="a "quoted" <b>""#);
    }

    #[test]
    fn attributes_from_pairs() {
        let attrs: Attributes = [("id", "main"), ("class", "wrapper")].into_iter().collect();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("class"), Some("wrapper"));
        assert_eq!(attrs.get("missing"), None);
    }

    #[test]
    fn leaf_renders_tag() {
        assert_eq!(
            Node::leaf("p", "Hello, world!").render().unwrap(),
            "<p>Hello, world!</p>"
        );
    }

    #[test]
    fn leaf_renders_attributes() {
        let node = Node::leaf_with("a", "x", Attributes::new().with("href", "u"));
        assert_eq!(node.render().unwrap(), r#"<a href="u">x</a>"#);
    }

    #[test]
    fn untagged_leaf_renders_value_verbatim() {
        assert_eq!(Node::text("x").render().unwrap(), "x");
    }

    #[test]
    fn empty_tag_is_untagged() {
        let node = Node::leaf_with(
            "",
            "Click me!",
            Attributes::new().with("href", "https://www.google.com"),
        );
        assert_eq!(node.tag(), None);
        assert_eq!(node.render().unwrap(), "Click me!");
    }

    #[test]
    fn leaf_without_value_is_rejected() {
        assert_eq!(
            Node::try_leaf(Some("p"), None, Attributes::new()),
            Err(Error::MissingValue)
        );
    }

    #[test]
    fn parent_renders_children_in_order() {
        let node = Node::parent(
            "div",
            vec![Node::leaf("span", "child"), Node::text(" and "), Node::leaf("b", "more")],
        )
        .unwrap();
        assert_eq!(
            node.render().unwrap(),
            "<div><span>child</span> and <b>more</b></div>"
        );
    }

    #[test]
    fn parent_renders_grandchildren() {
        let child = Node::parent("span", vec![Node::leaf("b", "grandchild")]).unwrap();
        let node = Node::parent("div", vec![child]).unwrap();
        assert_eq!(
            node.render().unwrap(),
            "<div><span><b>grandchild</b></span></div>"
        );
    }

    #[test]
    fn parent_without_children_is_rejected() {
        assert_eq!(
            Node::parent("ul", Vec::new()),
            Err(Error::MissingChildren {
                tag: "ul".to_string()
            })
        );
    }

    #[test]
    fn base_node_exposes_fields_but_does_not_render() {
        let node = Node::Base(BaseNode {
            tag: Some("a".to_string()),
            value: Some("Click here".to_string()),
            children: None,
            attributes: Some(Attributes::new().with("href", "https://www.google.com")),
        });
        assert_eq!(node.tag(), Some("a"));
        assert_eq!(node.value(), Some("Click here"));
        assert!(node.children().is_empty());
        assert_eq!(
            node.attributes().and_then(|a| a.get("href")),
            Some("https://www.google.com")
        );
        assert_eq!(node.render(), Err(Error::UnsupportedOperation));
    }

    #[test]
    fn default_base_node_is_empty() {
        let node = Node::Base(BaseNode::default());
        assert_eq!(node.tag(), None);
        assert_eq!(node.value(), None);
        assert_eq!(node.attributes(), None);
    }

    #[test]
    fn rendering_is_repeatable() {
        let node = Node::parent(
            "p",
            vec![Node::text("Some "), Node::leaf("b", "bold"), Node::text(" text.")],
        )
        .unwrap();
        assert_eq!(node.render().unwrap(), node.render().unwrap());
    }
}
