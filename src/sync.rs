//! Applies resolved translations to tagged page elements.

use crate::config::{
    BindingAttributes,
    SwitcherConfig,
};
use crate::dictionary::Dictionary;
use crate::language::Language;
use crate::page::{
    Binding,
    ElementProvider,
    Target,
};

/// Lookup context for one synchronization: dictionary plus language pair.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    dictionary: &'a Dictionary,
    active: Language,
    default: Language,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary, active: Language, default: Language) -> Self {
        Self { dictionary, active, default }
    }

    #[must_use]
    pub const fn active(&self) -> Language {
        self.active
    }

    /// See [`Dictionary::resolve`].
    #[must_use]
    pub fn resolve<'b>(&self, key: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.dictionary.resolve(self.active, self.default, key)
    }
}

/// What a synchronization touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SyncReport {
    /// Writes performed.
    pub applied: usize,
    /// Bound elements left as they were, or optional elements not on the page.
    pub skipped: usize,
}

/// Runs the text, title and markup passes over every element tagged with
/// one of `bindings`.
///
/// Idempotent for a fixed dictionary and language. An element carrying
/// several bindings is visited once per binding.
pub fn synchronize_page<P>(page: &mut P, resolver: &Resolver<'_>, bindings: &BindingAttributes) -> SyncReport
where
    P: ElementProvider + ?Sized,
{
    let mut report = SyncReport::default();

    for binding in Binding::ALL {
        for element in page.tagged(binding.attribute(bindings)) {
            let target = match binding {
                Binding::Text => element.kind.text_target(),
                Binding::Title => Some(Target::Title),
                Binding::Markup => Some(Target::InnerHtml),
            };
            let Some(target) = target else {
                tracing::trace!(key = %element.key, kind = ?element.kind, "Text binding left untouched");
                report.skipped += 1;
                continue;
            };
            page.apply(element.id, target, resolver.resolve(&element.key));
            report.applied += 1;
        }
    }

    tracing::debug!(
        language = %resolver.active(),
        applied = report.applied,
        skipped = report.skipped,
        "Page synchronized"
    );
    report
}

/// Updates the optional switcher labels and indicator.
///
/// Each of the three elements is looked up by id; a missing one is skipped.
pub fn refresh_switcher<P>(page: &mut P, resolver: &Resolver<'_>, switcher: &SwitcherConfig) -> SyncReport
where
    P: ElementProvider + ?Sized,
{
    let indicator_class = format!("{}{}", switcher.indicator_class_prefix, resolver.active().code());
    let updates = [
        (&switcher.current_label_id, Target::Text, resolver.resolve(&switcher.current_label_key)),
        (&switcher.switch_label_id, Target::Text, resolver.resolve(&switcher.switch_label_key)),
        (&switcher.indicator_id, Target::ClassName, indicator_class.as_str()),
    ];

    let mut report = SyncReport::default();
    for (dom_id, target, value) in updates {
        if let Some(id) = page.element_by_id(dom_id) {
            page.apply(id, target, value);
            report.applied += 1;
        } else {
            report.skipped += 1;
        }
    }
    report
}
