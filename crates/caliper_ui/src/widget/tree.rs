//! Widget tree for hierarchical UI management.
//!
//! The tree only tracks identity and parent/child links. Widgets themselves
//! are owned by the host; removing a subtree returns the ids to drop.

use super::WidgetId;
use crate::error::{UiError, UiResult};
use std::collections::HashMap;

/// Manages the widget hierarchy.
pub struct WidgetTree {
    /// Parent of each registered widget (None for roots).
    parents: HashMap<WidgetId, Option<WidgetId>>,
    /// Root widget IDs.
    roots: Vec<WidgetId>,
    /// Parent-child relationships.
    children: HashMap<WidgetId, Vec<WidgetId>>,
    /// ID counter for generating unique IDs.
    next_id: u64,
}

impl WidgetTree {
    /// Creates a new empty widget tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parents: HashMap::with_capacity(64),
            roots: Vec::with_capacity(8),
            children: HashMap::with_capacity(64),
            next_id: 1,
        }
    }

    /// Generates a new unique widget ID.
    pub fn next_id(&mut self) -> WidgetId {
        let id = WidgetId::new(self.next_id);
        self.next_id += 1;
        id
    }

    /// Allocates an id and registers it under `parent`, or as a root.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::WidgetNotFound`] if `parent` is not registered.
    pub fn insert(&mut self, parent: Option<WidgetId>) -> UiResult<WidgetId> {
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(UiError::WidgetNotFound(parent.raw()));
            }
        }

        let id = self.next_id();
        self.parents.insert(id, parent);
        self.children.insert(id, Vec::new());
        match parent {
            Some(parent) => self.children.entry(parent).or_default().push(id),
            None => self.roots.push(id),
        }
        Ok(id)
    }

    /// Removes a widget and all its children.
    ///
    /// Returns every removed id, children before parents, so the host can
    /// drop the matching widgets in teardown order.
    pub fn remove(&mut self, id: WidgetId) -> Vec<WidgetId> {
        let mut removed = Vec::new();
        self.remove_into(id, &mut removed);

        self.roots.retain(|&r| r != id);
        removed
    }

    fn remove_into(&mut self, id: WidgetId, removed: &mut Vec<WidgetId>) {
        // Remove all children first
        if let Some(children) = self.children.remove(&id) {
            for child in children {
                self.remove_into(child, removed);
            }
        }

        // Remove from parent's children list
        if let Some(Some(parent)) = self.parents.remove(&id) {
            if let Some(siblings) = self.children.get_mut(&parent) {
                siblings.retain(|&c| c != id);
            }
        }

        removed.push(id);
    }

    /// Returns true if the widget is registered.
    #[must_use]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.parents.contains_key(&id)
    }

    /// Returns the parent of a widget, or None for roots and unknown ids.
    #[must_use]
    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parents.get(&id).copied().flatten()
    }

    /// Returns the children of a widget.
    #[must_use]
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns all root widgets.
    #[must_use]
    pub fn roots(&self) -> &[WidgetId] {
        &self.roots
    }

    /// Number of registered widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Returns true if no widget is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Returns all widget IDs in depth-first order.
    pub fn iter_dfs(&self) -> impl Iterator<Item = WidgetId> + '_ {
        WidgetDfsIterator {
            tree: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    /// Returns all widget IDs in reverse depth-first order, front-most first.
    pub fn iter_reverse(&self) -> impl Iterator<Item = WidgetId> + '_ {
        let ids: Vec<_> = self.iter_dfs().collect();
        ids.into_iter().rev()
    }

    /// Finds the front-most widget that claims a point.
    ///
    /// The tree holds no geometry, so `hits` answers for each id whether the
    /// host's widget is visible and covers the point.
    pub fn hit_test(&self, mut hits: impl FnMut(WidgetId) -> bool) -> Option<WidgetId> {
        self.iter_reverse().find(|&id| hits(id))
    }
}

impl Default for WidgetTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first iterator over widget tree.
struct WidgetDfsIterator<'a> {
    tree: &'a WidgetTree,
    stack: Vec<WidgetId>,
}

impl Iterator for WidgetDfsIterator<'_> {
    type Item = WidgetId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;

        // Push children in reverse order so they're processed left-to-right
        for &child in self.tree.children(id).iter().rev() {
            self.stack.push(child);
        }

        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_hierarchy() {
        let mut tree = WidgetTree::new();

        let screen = tree.insert(None).unwrap();
        let first = tree.insert(Some(screen)).unwrap();
        let second = tree.insert(Some(screen)).unwrap();

        assert_eq!(tree.children(screen), &[first, second]);
        assert_eq!(tree.parent(second), Some(screen));
        assert_eq!(tree.roots(), &[screen]);
        assert_eq!(tree.iter_dfs().collect::<Vec<_>>(), vec![screen, first, second]);
    }

    #[test]
    fn test_unknown_parent_is_rejected() {
        let mut tree = WidgetTree::new();
        let result = tree.insert(Some(WidgetId::new(42)));

        assert_eq!(result, Err(UiError::WidgetNotFound(42)));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_remove_subtree_children_first() {
        let mut tree = WidgetTree::new();

        let screen = tree.insert(None).unwrap();
        let panel = tree.insert(Some(screen)).unwrap();
        let slider = tree.insert(Some(panel)).unwrap();
        let other = tree.insert(Some(screen)).unwrap();

        let removed = tree.remove(panel);

        assert_eq!(removed, vec![slider, panel]);
        assert_eq!(tree.children(screen), &[other]);
        assert!(!tree.contains(slider));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn test_hit_test_prefers_front_most() {
        let mut tree = WidgetTree::new();

        let screen = tree.insert(None).unwrap();
        let back = tree.insert(Some(screen)).unwrap();
        let front = tree.insert(Some(screen)).unwrap();

        assert_eq!(tree.hit_test(|_| true), Some(front));
        assert_eq!(tree.hit_test(|id| id != front), Some(back));
        assert_eq!(tree.hit_test(|id| id == screen), Some(screen));
        assert_eq!(tree.hit_test(|_| false), None);
    }
}
