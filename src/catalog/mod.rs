//! Typed translation catalog
//!
//! A catalog holds the nested UI strings for one language. Known top-level
//! sections get their own field; anything else lands in `extra` so that
//! richer overlay files still round-trip.

mod builtin;
mod merge;

use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};

pub use builtin::{
    FALLBACK_LANGUAGE,
    TranslationStore,
};

/// Separator between segments of a dotted key.
pub const KEY_SEPARATOR: char = '.';

/// One section of a catalog: string keys to nested nodes.
pub type Section = BTreeMap<String, Node>;

/// A value inside a catalog.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// Leaf string, the only thing ever returned as a translation.
    Text(String),
    /// Nested mapping.
    Group(Section),
    /// Any other scalar (number, bool, null, list). Kept but never resolved.
    Other(serde_json::Value),
}

/// Result of a single lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a str),
    Missing,
}

impl<'a> Lookup<'a> {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Runs `fallback` only when this lookup missed.
    #[must_use]
    pub fn or_else(self, fallback: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Found(_) => self,
            Self::Missing => fallback(),
        }
    }

    #[must_use]
    pub const fn into_option(self) -> Option<&'a str> {
        match self {
            Self::Found(text) => Some(text),
            Self::Missing => None,
        }
    }

    #[must_use]
    pub const fn unwrap_or(self, default: &'a str) -> &'a str {
        match self {
            Self::Found(text) => text,
            Self::Missing => default,
        }
    }
}

/// Translation catalog for one language.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Catalog {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub app: Section,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub nav: Section,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub contribute: Section,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub companies: Section,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub criteria: Section,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub form: Section,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub issue: Section,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub navigation: Section,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub footer: Section,
    /// Top-level keys outside the known sections.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Node>,
}

/// Names of the typed sections, in document order.
pub const SECTION_NAMES: [&str; 9] =
    ["app", "nav", "contribute", "companies", "criteria", "form", "issue", "navigation", "footer"];

impl Catalog {
    /// Builds a catalog from top-level entries.
    ///
    /// A known section whose value is not a mapping is skipped; the other
    /// entries are kept.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, Node)>) -> Self {
        let mut catalog = Self::default();
        for (key, node) in entries {
            if let Some(section) = catalog.section_mut(&key) {
                match node {
                    Node::Group(group) => *section = group,
                    other => {
                        tracing::warn!(
                            section = %key,
                            "Ignoring section that is not a mapping: {other:?}"
                        );
                    }
                }
            } else {
                catalog.extra.insert(key, node);
            }
        }
        catalog
    }

    /// Returns a typed section by name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        match name {
            "app" => Some(&self.app),
            "nav" => Some(&self.nav),
            "contribute" => Some(&self.contribute),
            "companies" => Some(&self.companies),
            "criteria" => Some(&self.criteria),
            "form" => Some(&self.form),
            "issue" => Some(&self.issue),
            "navigation" => Some(&self.navigation),
            "footer" => Some(&self.footer),
            _ => None,
        }
    }

    fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        match name {
            "app" => Some(&mut self.app),
            "nav" => Some(&mut self.nav),
            "contribute" => Some(&mut self.contribute),
            "companies" => Some(&mut self.companies),
            "criteria" => Some(&mut self.criteria),
            "form" => Some(&mut self.form),
            "issue" => Some(&mut self.issue),
            "navigation" => Some(&mut self.navigation),
            "footer" => Some(&mut self.footer),
            _ => None,
        }
    }

    /// Whether the catalog holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        SECTION_NAMES.iter().all(|name| self.section(name).is_none_or(BTreeMap::is_empty))
            && self.extra.is_empty()
    }

    /// Resolves a dotted key against this catalog only.
    ///
    /// Every segment but the last must name a mapping; the last must name a
    /// string leaf. Anything else is `Missing`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        if key.is_empty() {
            return Lookup::Missing;
        }

        let (head, rest) = split_key(key);
        if let Some(section) = self.section(head) {
            return rest.map_or(Lookup::Missing, |rest| lookup_in(section, rest));
        }

        match (self.extra.get(head), rest) {
            (Some(Node::Text(text)), None) => Lookup::Found(text),
            (Some(Node::Group(group)), Some(rest)) => lookup_in(group, rest),
            _ => Lookup::Missing,
        }
    }

    /// Flattens every string leaf into a dotted key map.
    ///
    /// ```
    /// use foss4gov_site::catalog::Catalog;
    ///
    /// let catalog: Catalog =
    ///     serde_json::from_str(r#"{"form": {"validation": {"required_fields": "Fill in"}}}"#)
    ///         .unwrap();
    ///
    /// let keys = catalog.flatten();
    /// assert_eq!(keys.get("form.validation.required_fields"), Some(&"Fill in".to_string()));
    /// ```
    #[must_use]
    pub fn flatten(&self) -> BTreeMap<String, String> {
        let mut result = BTreeMap::new();
        for name in SECTION_NAMES {
            if let Some(section) = self.section(name) {
                flatten_section(section, name, &mut result);
            }
        }
        for (key, node) in &self.extra {
            flatten_node(node, key, &mut result);
        }
        result
    }
}

fn split_key(key: &str) -> (&str, Option<&str>) {
    match key.split_once(KEY_SEPARATOR) {
        Some((head, rest)) => (head, Some(rest)),
        None => (key, None),
    }
}

fn lookup_in<'a>(section: &'a Section, path: &str) -> Lookup<'a> {
    let (head, rest) = split_key(path);
    match (section.get(head), rest) {
        (Some(Node::Text(text)), None) => Lookup::Found(text),
        (Some(Node::Group(group)), Some(rest)) => lookup_in(group, rest),
        _ => Lookup::Missing,
    }
}

fn flatten_section(section: &Section, prefix: &str, result: &mut BTreeMap<String, String>) {
    for (key, node) in section {
        flatten_node(node, &format!("{prefix}{KEY_SEPARATOR}{key}"), result);
    }
}

fn flatten_node(node: &Node, key: &str, result: &mut BTreeMap<String, String>) {
    match node {
        Node::Text(text) => {
            result.insert(key.to_string(), text.clone());
        }
        Node::Group(group) => flatten_section(group, key, result),
        Node::Other(_) => {}
    }
}
