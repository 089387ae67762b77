//! Page elements as seen by the synchronizer.
//!
//! The synchronizer never touches a real document. It talks to an
//! [`ElementProvider`], which can query tagged elements and write strings
//! into them. [`Page`] is an in-memory provider.

mod document;
mod element;

pub use document::{
    Content,
    Element,
    Page,
};
pub use element::{
    Binding,
    ElementId,
    ElementKind,
    ElementProvider,
    TaggedElement,
    Target,
};
