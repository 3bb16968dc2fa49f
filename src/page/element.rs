//! Translatable page elements
//!
//! Every element carries its translation key in a `data-i18n` attribute and
//! an English literal used when the key resolves nowhere.

use std::fmt::Write as _;

use crate::html::escape;
use crate::i18n::Translator;

/// Where the resolved translation goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Element text content.
    Text,
    /// `placeholder` attribute of an `<input>`.
    Placeholder,
    /// `value` attribute of a submit `<input>`.
    SubmitValue,
}

/// One element flagged with `data-i18n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<'a> {
    tag: &'a str,
    key: &'a str,
    default: &'a str,
    kind: ElementKind,
    attributes: Vec<(&'a str, String)>,
}

impl<'a> Element<'a> {
    /// `<tag data-i18n="key">text</tag>`
    #[must_use]
    pub const fn text(tag: &'a str, key: &'a str, default: &'a str) -> Self {
        Self { tag, key, default, kind: ElementKind::Text, attributes: Vec::new() }
    }

    /// `<input data-i18n="key" placeholder="text">`
    #[must_use]
    pub const fn placeholder(key: &'a str, default: &'a str) -> Self {
        Self { tag: "input", key, default, kind: ElementKind::Placeholder, attributes: Vec::new() }
    }

    /// `<input type="submit" data-i18n="key" value="text">`
    #[must_use]
    pub const fn submit(key: &'a str, default: &'a str) -> Self {
        Self { tag: "input", key, default, kind: ElementKind::SubmitValue, attributes: Vec::new() }
    }

    /// Adds an attribute; the value is escaped on render.
    #[must_use]
    pub fn attr(mut self, name: &'a str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Where the translation goes.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Renders the element with its translation applied.
    ///
    /// A key missing from the catalog and from English keeps the literal
    /// default.
    #[must_use]
    pub fn render(&self, translator: &Translator) -> String {
        let text = escape(translator.translate_or(self.key, self.default));

        let mut markup = format!("<{}", self.tag);
        if self.kind == ElementKind::SubmitValue {
            markup.push_str(r#" type="submit""#);
        }
        let _ = write!(markup, r#" data-i18n="{}""#, escape(self.key));
        for (name, value) in &self.attributes {
            let _ = write!(markup, r#" {name}="{}""#, escape(value));
        }

        match self.kind {
            ElementKind::Text => {
                let _ = write!(markup, ">{text}</{}>", self.tag);
            }
            ElementKind::Placeholder => {
                let _ = write!(markup, r#" placeholder="{text}">"#);
            }
            ElementKind::SubmitValue => {
                let _ = write!(markup, r#" value="{text}">"#);
            }
        }
        markup
    }
}
