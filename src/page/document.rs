//! In-memory page.

use std::collections::BTreeMap;

use super::element::{
    ElementId,
    ElementKind,
    ElementProvider,
    TaggedElement,
    Target,
};

/// Inner content of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain text. Angle brackets are characters, not tags.
    Text(String),
    /// Markup fragment.
    Markup(String),
}

impl Content {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Markup(s) => s,
        }
    }

    #[must_use]
    pub const fn is_markup(&self) -> bool {
        matches!(self, Self::Markup(_))
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

/// A tag, its attributes and its content.
///
/// `id`, `type`, `title`, `placeholder`, `value` and `class` live in the
/// attribute map like any other attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    content: Content,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.with_attribute("id", id)
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    #[must_use]
    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.content = Content::Markup(markup.into());
        self
    }

    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }

    #[must_use]
    pub fn kind(&self) -> ElementKind {
        ElementKind::classify(&self.tag, self.attribute("type"))
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

/// Element arena implementing [`ElementProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Page {
    elements: Vec<Element>,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element in document order.
    pub fn push(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId::new(self.elements.len() - 1)
    }

    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.index())
    }

    /// Looks up an element by DOM id and returns it directly.
    #[must_use]
    pub fn find(&self, dom_id: &str) -> Option<&Element> {
        self.element_by_id(dom_id).and_then(|id| self.get(id))
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl ElementProvider for Page {
    fn tagged(&self, attribute: &str) -> Vec<TaggedElement> {
        self.elements
            .iter()
            .enumerate()
            .filter_map(|(index, element)| {
                element.attribute(attribute).map(|key| TaggedElement {
                    id: ElementId::new(index),
                    key: key.to_string(),
                    kind: element.kind(),
                })
            })
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.elements.iter().position(|element| element.attribute("id") == Some(id)).map(ElementId::new)
    }

    fn apply(&mut self, element: ElementId, target: Target, value: &str) {
        let Some(node) = self.elements.get_mut(element.index()) else {
            tracing::debug!(?element, "Write to unknown element ignored");
            return;
        };
        match target {
            Target::Text => node.content = Content::Text(value.to_string()),
            Target::InnerHtml => node.content = Content::Markup(value.to_string()),
            Target::Placeholder => node.set_attribute("placeholder", value),
            Target::Value => node.set_attribute("value", value),
            Target::Title => node.set_attribute("title", value),
            Target::ClassName => node.set_attribute("class", value),
        }
    }
}
