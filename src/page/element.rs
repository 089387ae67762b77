use crate::config::BindingAttributes;

/// Ways an element can be tagged for translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    /// Visible text (or placeholder/value for inputs).
    Text,
    /// The `title` attribute.
    Title,
    /// Inner markup. The translation is trusted to contain markup.
    Markup,
}

impl Binding {
    /// Passes run in this order.
    pub const ALL: [Self; 3] = [Self::Text, Self::Title, Self::Markup];

    /// Attribute carrying the translation key for this binding.
    #[must_use]
    pub fn attribute(self, attributes: &BindingAttributes) -> &str {
        match self {
            Self::Text => &attributes.text,
            Self::Title => &attributes.title,
            Self::Markup => &attributes.html,
        }
    }
}

/// Input types that show a text binding as placeholder.
const TEXT_INPUT_TYPES: &[&str] = &["text", "email", "search", "password", "url", "tel"];

/// Input types that show a text binding as their value.
const ACTION_INPUT_TYPES: &[&str] = &["submit", "button"];

/// How an element displays a text binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Anything that is not an `<input>`: text content.
    Plain,
    /// Text-like input: placeholder.
    TextInput,
    /// Button-like input: value.
    ActionInput,
    /// Checkbox, radio, file and the rest: untouched.
    OtherInput,
}

impl ElementKind {
    /// Classifies by tag name and `type` attribute, ignoring ASCII case.
    /// An input without a type (or with an empty one) is a text input.
    #[must_use]
    pub fn classify(tag: &str, input_type: Option<&str>) -> Self {
        if !tag.eq_ignore_ascii_case("input") {
            return Self::Plain;
        }
        let input_type = input_type.map(str::trim).unwrap_or_default();
        if input_type.is_empty()
            || TEXT_INPUT_TYPES.iter().any(|t| t.eq_ignore_ascii_case(input_type))
        {
            Self::TextInput
        } else if ACTION_INPUT_TYPES.iter().any(|t| t.eq_ignore_ascii_case(input_type)) {
            Self::ActionInput
        } else {
            Self::OtherInput
        }
    }

    /// Where a text binding lands, `None` when the element keeps its state.
    #[must_use]
    pub const fn text_target(self) -> Option<Target> {
        match self {
            Self::Plain => Some(Target::Text),
            Self::TextInput => Some(Target::Placeholder),
            Self::ActionInput => Some(Target::Value),
            Self::OtherInput => None,
        }
    }
}

/// Writable slot of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Text content, never interpreted as markup.
    Text,
    Placeholder,
    Value,
    Title,
    /// Inner content, interpreted as markup.
    InnerHtml,
    ClassName,
}

/// Opaque handle to an element of a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An element carrying a binding, with the key it is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedElement {
    pub id: ElementId,
    pub key: String,
    pub kind: ElementKind,
}

/// Query and mutation access to the page.
pub trait ElementProvider {
    /// Elements carrying `attribute`, in document order, with the
    /// attribute's value as key.
    fn tagged(&self, attribute: &str) -> Vec<TaggedElement>;

    /// Element with the given DOM id, if the page has one.
    fn element_by_id(&self, id: &str) -> Option<ElementId>;

    /// Writes `value` into `target` of `element`. Unknown elements are ignored.
    fn apply(&mut self, element: ElementId, target: Target, value: &str);
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::span("span", None, ElementKind::Plain)]
    #[case::button_tag("button", Some("submit"), ElementKind::Plain)]
    #[case::no_type("input", None, ElementKind::TextInput)]
    #[case::empty_type("input", Some(""), ElementKind::TextInput)]
    #[case::text("input", Some("text"), ElementKind::TextInput)]
    #[case::email("input", Some("email"), ElementKind::TextInput)]
    #[case::search("input", Some("search"), ElementKind::TextInput)]
    #[case::password("input", Some("password"), ElementKind::TextInput)]
    #[case::url("input", Some("url"), ElementKind::TextInput)]
    #[case::tel("input", Some("tel"), ElementKind::TextInput)]
    #[case::uppercase("INPUT", Some("TEXT"), ElementKind::TextInput)]
    #[case::submit("input", Some("submit"), ElementKind::ActionInput)]
    #[case::button("input", Some("button"), ElementKind::ActionInput)]
    #[case::checkbox("input", Some("checkbox"), ElementKind::OtherInput)]
    #[case::radio("input", Some("radio"), ElementKind::OtherInput)]
    #[case::number("input", Some("number"), ElementKind::OtherInput)]
    fn test_classify(
        #[case] tag: &str,
        #[case] input_type: Option<&str>,
        #[case] expected: ElementKind,
    ) {
        assert_eq!(ElementKind::classify(tag, input_type), expected);
    }

    #[rstest]
    #[case(ElementKind::Plain, Some(Target::Text))]
    #[case(ElementKind::TextInput, Some(Target::Placeholder))]
    #[case(ElementKind::ActionInput, Some(Target::Value))]
    #[case(ElementKind::OtherInput, None)]
    fn test_text_target(#[case] kind: ElementKind, #[case] expected: Option<Target>) {
        assert_eq!(kind.text_target(), expected);
    }

    #[rstest]
    fn binding_attributes_follow_settings() {
        let attributes = BindingAttributes {
            text: "data-t".to_string(),
            title: "data-t-title".to_string(),
            html: "data-t-html".to_string(),
        };

        assert_eq!(Binding::Text.attribute(&attributes), "data-t");
        assert_eq!(Binding::Title.attribute(&attributes), "data-t-title");
        assert_eq!(Binding::Markup.attribute(&attributes), "data-t-html");
    }
}
