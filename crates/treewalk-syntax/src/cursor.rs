//! Stateful tree navigation.
//!
//! A [`TreeCursor`] walks the tree one step at a time using the engine's
//! cursor primitives, and adds named-only variants on top of them. The node a
//! cursor is created from is its root: `goto_parent` never climbs above it,
//! even when the tree has further ancestors.

use std::num::NonZeroU16;

use tree_sitter::Point;

use crate::node::NodeHandle;
use crate::tree::SyntaxTree;

/// Outcome of a named-only step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NamedStep {
    /// The cursor is on a named node.
    Found,
    /// The direction ran out; the cursor is on the last unnamed node it
    /// passed.
    LandedOnUnnamed,
    /// The cursor could not move at all.
    Unmoved,
}

impl NamedStep {
    fn found(self) -> bool {
        self == Self::Found
    }
}

type Step<'tree> = fn(&mut tree_sitter::TreeCursor<'tree>) -> bool;

/// A stateful walker over a subtree.
///
/// Each cursor owns its walk state; cursors on the same tree never share it.
/// Dropping the cursor releases the state. Use [`TreeCursor::dupe`] for an
/// independent copy.
pub struct TreeCursor<'tree> {
    tree: &'tree SyntaxTree,
    raw: tree_sitter::TreeCursor<'tree>,
}

impl<'tree> TreeCursor<'tree> {
    /// Create a cursor whose root is `node`.
    #[must_use]
    pub fn new(node: NodeHandle<'tree>) -> Self {
        Self {
            tree: node.tree(),
            raw: node.as_raw().walk(),
        }
    }

    /// The node the cursor is on.
    #[must_use]
    pub fn node(&self) -> NodeHandle<'tree> {
        NodeHandle::new(self.tree, self.raw.node())
    }

    /// Field id of the current node relative to its parent, or `0` when the
    /// node is not attached to a field.
    #[must_use]
    pub fn field_id(&self) -> u16 {
        self.raw.field_id().map_or(0, NonZeroU16::get)
    }

    /// Field name of the current node relative to its parent.
    #[must_use]
    pub fn field_name(&self) -> Option<&'static str> {
        self.raw.field_name()
    }

    /// Depth of the current node below the cursor's root.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.raw.depth()
    }

    /// Pre-order index of the current node among the root's descendants. The
    /// root itself is `0`.
    #[must_use]
    pub fn descendant_index(&self) -> usize {
        self.raw.descendant_index()
    }

    pub fn goto_first_child(&mut self) -> bool {
        self.raw.goto_first_child()
    }

    pub fn goto_last_child(&mut self) -> bool {
        self.raw.goto_last_child()
    }

    /// Move to the parent. Fails on the cursor's root.
    pub fn goto_parent(&mut self) -> bool {
        self.raw.goto_parent()
    }

    pub fn goto_next_sibling(&mut self) -> bool {
        self.raw.goto_next_sibling()
    }

    /// Move to the previous sibling.
    ///
    /// The engine only records the forward path, so this recomputes the
    /// position from the parent and costs more than
    /// [`goto_next_sibling`](Self::goto_next_sibling).
    pub fn goto_previous_sibling(&mut self) -> bool {
        self.raw.goto_previous_sibling()
    }

    /// Move to the root's descendant with the given pre-order index.
    ///
    /// The engine reports nothing here: any index below the root's
    /// descendant count always succeeds.
    pub fn goto_descendant(&mut self, index: usize) {
        self.raw.goto_descendant(index);
    }

    /// Move to the first child that extends past `byte`, returning its index.
    pub fn goto_first_child_for_byte(&mut self, byte: usize) -> Option<usize> {
        self.raw.goto_first_child_for_byte(byte)
    }

    /// Move to the first child that extends past `point`, returning its index.
    pub fn goto_first_child_for_point(&mut self, point: Point) -> Option<usize> {
        self.raw.goto_first_child_for_point(point)
    }

    /// Move to the first named child.
    ///
    /// When every child is anonymous this returns `false` and leaves the
    /// cursor on the *last* child rather than where it started.
    pub fn goto_first_named_child(&mut self) -> bool {
        self.enter_named(
            tree_sitter::TreeCursor::goto_first_child,
            tree_sitter::TreeCursor::goto_next_sibling,
        )
        .found()
    }

    /// Move to the last named child.
    ///
    /// When every child is anonymous this returns `false` and leaves the
    /// cursor on the *first* child rather than where it started. Walks
    /// backwards, see [`goto_previous_sibling`](Self::goto_previous_sibling).
    pub fn goto_last_named_child(&mut self) -> bool {
        self.enter_named(
            tree_sitter::TreeCursor::goto_last_child,
            tree_sitter::TreeCursor::goto_previous_sibling,
        )
        .found()
    }

    /// Move to the next named sibling.
    ///
    /// If only anonymous siblings follow, returns `false` with the cursor on
    /// the last of them.
    pub fn goto_next_named_sibling(&mut self) -> bool {
        self.seek_named(tree_sitter::TreeCursor::goto_next_sibling).found()
    }

    /// Move to the previous named sibling.
    ///
    /// If only anonymous siblings precede, returns `false` with the cursor on
    /// the first of them. Walks backwards, see
    /// [`goto_previous_sibling`](Self::goto_previous_sibling).
    pub fn goto_previous_named_sibling(&mut self) -> bool {
        self.seek_named(tree_sitter::TreeCursor::goto_previous_sibling).found()
    }

    fn enter_named(&mut self, enter: Step<'tree>, step: Step<'tree>) -> NamedStep {
        if !enter(&mut self.raw) {
            return NamedStep::Unmoved;
        }
        if self.raw.node().is_named() {
            return NamedStep::Found;
        }
        match self.seek_named(step) {
            // The only child is anonymous.
            NamedStep::Unmoved => {
                self.trace_landing();
                NamedStep::LandedOnUnnamed
            }
            outcome => outcome,
        }
    }

    fn seek_named(&mut self, step: Step<'tree>) -> NamedStep {
        let mut moved = false;
        while step(&mut self.raw) {
            moved = true;
            if self.raw.node().is_named() {
                return NamedStep::Found;
            }
        }
        if moved {
            self.trace_landing();
            NamedStep::LandedOnUnnamed
        } else {
            NamedStep::Unmoved
        }
    }

    fn trace_landing(&self) {
        tracing::trace!(
            "no named node in direction, cursor left on {:?} at depth {}",
            self.raw.node().kind(),
            self.raw.depth()
        );
    }

    /// An independent copy of this cursor, positioned identically.
    #[must_use]
    pub fn dupe(&self) -> Self {
        Self {
            tree: self.tree,
            raw: self.raw.clone(),
        }
    }

    /// Re-root the cursor at `node`, discarding all ancestor context.
    pub fn reset(&mut self, node: NodeHandle<'tree>) {
        self.tree = node.tree();
        self.raw.reset(node.as_raw());
    }

    /// Copy `other`'s position, root and ancestors into this cursor.
    ///
    /// Unlike [`reset`](Self::reset), the cursor can still walk back up to
    /// `other`'s root afterwards.
    pub fn reset_to(&mut self, other: &Self) {
        self.tree = other.tree;
        self.raw.reset_to(&other.raw);
    }
}

impl Clone for TreeCursor<'_> {
    fn clone(&self) -> Self {
        self.dupe()
    }
}

impl std::fmt::Debug for TreeCursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeCursor")
            .field("node", &self.node())
            .field("depth", &self.depth())
            .field("field", &self.field_name())
            .finish()
    }
}
