//! Overlay merging
//!
//! Overlay entries win per key of each section. Values are merged one level
//! deep: a nested group inside a section replaces the base group whole.

use std::collections::btree_map::Entry;

use super::{
    Catalog,
    Node,
    SECTION_NAMES,
};

impl Catalog {
    /// Merges `overlay` over this catalog.
    pub fn merge_overlay(&mut self, overlay: Self) {
        let Self {
            app,
            nav,
            contribute,
            companies,
            criteria,
            form,
            issue,
            navigation,
            footer,
            extra,
        } = overlay;

        let sections = [app, nav, contribute, companies, criteria, form, issue, navigation, footer];
        for (name, section) in SECTION_NAMES.into_iter().zip(sections) {
            if let Some(base) = self.section_mut(name) {
                base.extend(section);
            }
        }

        for (key, node) in extra {
            match (self.extra.entry(key), node) {
                (Entry::Occupied(mut occupied), Node::Group(group)) => {
                    if let Node::Group(base) = occupied.get_mut() {
                        base.extend(group);
                    } else {
                        occupied.insert(Node::Group(group));
                    }
                }
                (Entry::Occupied(mut occupied), node) => {
                    occupied.insert(node);
                }
                (Entry::Vacant(vacant), node) => {
                    vacant.insert(node);
                }
            }
        }
    }

    /// Returns a copy of this catalog with `overlay` merged over it.
    #[must_use]
    pub fn merged_with(&self, overlay: Self) -> Self {
        let mut merged = self.clone();
        merged.merge_overlay(overlay);
        merged
    }
}
