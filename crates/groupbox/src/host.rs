//! The child-widget collaborator.
//!
//! The group box never owns its children. It asks a [`ChildHost`] for the
//! list of direct children and tells it which ones to enable or show, and it
//! hands the host the content margins for the child layout. Hosts with a
//! real widget tree implement the trait over that tree; [`ChildList`] is a
//! self-contained implementation for headless use and tests.

use groupbox_render::Size;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifier of a direct child widget.
    pub struct ChildId;
}

/// Spacing reserved around the child layout area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentMargins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ContentMargins {
    /// Create new content margins.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Access to the group box's direct children.
pub trait ChildHost {
    /// The direct children, in stacking order.
    fn children(&self) -> Vec<ChildId>;

    /// Enable or disable a child.
    fn set_child_enabled(&mut self, child: ChildId, enabled: bool);

    /// Show or hide a child.
    fn set_child_visible(&mut self, child: ChildId, visible: bool);

    /// Apply content margins to the child layout, if there is one.
    fn set_content_margins(&mut self, _margins: ContentMargins) {}

    /// Minimum size the child layout needs, if there is a layout.
    fn layout_minimum_size(&self) -> Option<Size> {
        None
    }
}

/// State of one child in a [`ChildList`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildState {
    pub name: String,
    pub enabled: bool,
    pub visible: bool,
}

/// A flat list of children with enabled/visible flags.
#[derive(Debug, Default)]
pub struct ChildList {
    children: SlotMap<ChildId, ChildState>,
    order: Vec<ChildId>,
    content_margins: Option<ContentMargins>,
    layout_minimum: Option<Size>,
}

impl ChildList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an enabled, visible child.
    pub fn add(&mut self, name: impl Into<String>) -> ChildId {
        let id = self.children.insert(ChildState {
            name: name.into(),
            enabled: true,
            visible: true,
        });
        self.order.push(id);
        id
    }

    /// Remove a child. Returns its last state if it existed.
    pub fn remove(&mut self, id: ChildId) -> Option<ChildState> {
        let state = self.children.remove(id)?;
        self.order.retain(|&other| other != id);
        Some(state)
    }

    /// Look up a child.
    pub fn get(&self, id: ChildId) -> Option<&ChildState> {
        self.children.get(id)
    }

    /// Iterate over children in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ChildId, &ChildState)> {
        self.order.iter().filter_map(|&id| self.children.get(id).map(|s| (id, s)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The margins most recently applied by the group box.
    pub fn content_margins(&self) -> Option<ContentMargins> {
        self.content_margins
    }

    /// Pretend a layout with this minimum size manages the children.
    pub fn set_layout_minimum_size(&mut self, size: Option<Size>) {
        self.layout_minimum = size;
    }
}

impl ChildHost for ChildList {
    fn children(&self) -> Vec<ChildId> {
        self.order.clone()
    }

    fn set_child_enabled(&mut self, child: ChildId, enabled: bool) {
        if let Some(state) = self.children.get_mut(child) {
            state.enabled = enabled;
        }
    }

    fn set_child_visible(&mut self, child: ChildId, visible: bool) {
        if let Some(state) = self.children.get_mut(child) {
            state.visible = visible;
        }
    }

    fn set_content_margins(&mut self, margins: ContentMargins) {
        self.content_margins = Some(margins);
    }

    fn layout_minimum_size(&self) -> Option<Size> {
        self.layout_minimum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_list_order_and_state() {
        let mut list = ChildList::new();
        let a = list.add("a");
        let b = list.add("b");

        assert_eq!(list.children(), vec![a, b]);
        assert_eq!(list.len(), 2);

        list.set_child_enabled(a, false);
        list.set_child_visible(b, false);
        assert!(!list.get(a).unwrap().enabled);
        assert!(list.get(a).unwrap().visible);
        assert!(!list.get(b).unwrap().visible);

        let removed = list.remove(a).unwrap();
        assert_eq!(removed.name, "a");
        assert_eq!(list.children(), vec![b]);
        assert!(list.remove(a).is_none());
    }

    #[test]
    fn test_child_list_margins() {
        let mut list = ChildList::new();
        assert_eq!(list.content_margins(), None);
        list.set_content_margins(ContentMargins::new(2, 20, 2, 4));
        assert_eq!(list.content_margins(), Some(ContentMargins::new(2, 20, 2, 4)));
        assert_eq!(list.layout_minimum_size(), None);
    }
}
