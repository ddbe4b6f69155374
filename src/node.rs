use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// A tagged node with ordered attributes and children. `key` is the stable
/// identity used to match the node across re-renders of a list; it is not
/// an attribute and is never emitted as markup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<Attribute>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element
                .children
                .iter()
                .map(Node::text_content)
                .collect(),
        }
    }
}

impl Element {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// All descendant elements, depth first, in document order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        for child in self.child_elements() {
            out.push(child);
            out.extend(child.descendants());
        }
        out
    }
}

pub struct ElementBuilder {
    tag: String,
    key: Option<String>,
    classes: Vec<String>,
    attributes: Vec<Attribute>,
    children: Vec<Node>,
}

impl ElementBuilder {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            key: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn key(&mut self, key: impl Into<String>) -> &mut Self {
        self.key = Some(key.into());
        self
    }

    pub fn class(&mut self, class: &str) -> &mut Self {
        self.classes
            .extend(class.split_whitespace().map(str::to_string));
        self
    }

    /// Sets `name` to `value`, replacing any earlier value of the attribute.
    pub fn attribute(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(Attribute {
                name: name.to_string(),
                value,
            }),
        }
        self
    }

    pub fn child(&mut self, child: Node) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.child(Node::Text(text.into()))
    }

    pub fn build(&self) -> Node {
        let mut attributes = Vec::with_capacity(self.attributes.len() + 1);
        if !self.classes.is_empty() {
            attributes.push(Attribute {
                name: "class".to_string(),
                value: self.classes.join(" "),
            });
        }
        attributes.extend(self.attributes.iter().cloned());

        Node::Element(Element {
            tag: self.tag.clone(),
            key: self.key.clone(),
            attributes,
            children: self.children.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_goes_first_and_accumulates() {
        let node = ElementBuilder::new("div")
            .attribute("title", "t")
            .class("btn-group")
            .class("btn-breadcrumb")
            .build();

        let element = node.as_element().unwrap();
        assert_eq!(element.attributes[0].name, "class");
        assert_eq!(element.attribute("class"), Some("btn-group btn-breadcrumb"));
        assert!(element.has_class("btn-breadcrumb"));
        assert!(!element.has_class("btn"));
        assert_eq!(element.attribute("title"), Some("t"));
    }

    #[test]
    fn attribute_is_replaced() {
        let node = ElementBuilder::new("div")
            .attribute("title", "a")
            .attribute("title", "b")
            .build();

        let element = node.as_element().unwrap();
        assert_eq!(element.attributes.len(), 1);
        assert_eq!(element.attribute("title"), Some("b"));
    }

    #[test]
    fn nested_text_content() {
        let inner = ElementBuilder::new("span").text("foo").build();
        let outer = ElementBuilder::new("div")
            .child(inner)
            .text("bar")
            .key("k")
            .build();

        assert_eq!(outer.text_content(), "foobar");
        let element = outer.as_element().unwrap();
        assert_eq!(element.key.as_deref(), Some("k"));
        assert_eq!(element.descendants().len(), 1);
        assert!(element.attributes.is_empty());
    }
}
