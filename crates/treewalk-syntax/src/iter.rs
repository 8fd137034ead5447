//! Directional iteration over a node's children.

use crate::cursor::TreeCursor;
use crate::node::NodeHandle;

/// Order in which [`ChildIterator::steps`] visits children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    /// Every child, first to last.
    All,
    /// Every child, last to first.
    AllReverse,
    /// Named children, first to last.
    Named,
    /// Named children, last to first.
    NamedReverse,
}

type Step<'tree> = fn(&mut TreeCursor<'tree>) -> bool;

/// Iterates the children of the node a cursor is positioned on.
///
/// The iterator owns its cursor; dropping the iterator drops the cursor.
/// The first step of a pass descends into the children, later steps move
/// between siblings. As an [`Iterator`] it yields every child in order; the
/// other orders are available through [`previous`](Self::previous),
/// [`next_named`](Self::next_named), [`previous_named`](Self::previous_named)
/// and [`steps`](Self::steps).
///
/// Directions may be mixed within one pass. The result is well-defined but
/// follows the cursor: after `next()` lands on child 2, `previous_named()`
/// continues backwards from child 2 rather than from the last child. Call
/// [`reset`](Self::reset) to start a clean pass.
///
/// Once a first step finds nothing, later steps also report absence rather
/// than moving between the parent's own siblings.
#[derive(Debug, Clone)]
pub struct ChildIterator<'tree> {
    cursor: TreeCursor<'tree>,
    parent_depth: u32,
    initial: bool,
}

impl<'tree> ChildIterator<'tree> {
    /// Wrap a cursor that is positioned on the parent node.
    #[must_use]
    pub fn new(cursor: TreeCursor<'tree>) -> Self {
        Self {
            parent_depth: cursor.depth(),
            cursor,
            initial: true,
        }
    }

    /// Step to the previous child, starting from the last one.
    pub fn previous(&mut self) -> Option<NodeHandle<'tree>> {
        self.advance(Traversal::AllReverse)
    }

    /// Step to the next named child, starting from the first one.
    ///
    /// When no named child remains the cursor is left on the last anonymous
    /// child it passed, as [`TreeCursor::goto_next_named_sibling`] does.
    pub fn next_named(&mut self) -> Option<NodeHandle<'tree>> {
        self.advance(Traversal::Named)
    }

    /// Step to the previous named child, starting from the last one.
    pub fn previous_named(&mut self) -> Option<NodeHandle<'tree>> {
        self.advance(Traversal::NamedReverse)
    }

    /// Take one step in the given order.
    pub fn advance(&mut self, traversal: Traversal) -> Option<NodeHandle<'tree>> {
        let (enter, sibling): (Step<'tree>, Step<'tree>) = match traversal {
            Traversal::All => (TreeCursor::goto_first_child, TreeCursor::goto_next_sibling),
            Traversal::AllReverse => (
                TreeCursor::goto_last_child,
                TreeCursor::goto_previous_sibling,
            ),
            Traversal::Named => (
                TreeCursor::goto_first_named_child,
                TreeCursor::goto_next_named_sibling,
            ),
            Traversal::NamedReverse => (
                TreeCursor::goto_last_named_child,
                TreeCursor::goto_previous_named_sibling,
            ),
        };

        let moved = if std::mem::take(&mut self.initial) {
            enter(&mut self.cursor)
        } else if self.cursor.depth() > self.parent_depth {
            sibling(&mut self.cursor)
        } else {
            // The first step found no children; never wander onto the
            // parent's own siblings.
            false
        };
        moved.then(|| self.cursor.node())
    }

    /// Lazily yield the remaining children in the given order.
    pub fn steps(&mut self, traversal: Traversal) -> impl Iterator<Item = NodeHandle<'tree>> {
        std::iter::from_fn(move || self.advance(traversal))
    }

    /// Move the cursor back to the parent and start a fresh pass.
    ///
    /// Climbs only to the depth the iterator was created at, so a reset
    /// before any step leaves the cursor where it is.
    pub fn reset(&mut self) {
        self.initial = true;
        while self.cursor.depth() > self.parent_depth && self.cursor.goto_parent() {}
    }

    /// The wrapped cursor, positioned on the most recently visited child.
    #[must_use]
    pub const fn cursor(&self) -> &TreeCursor<'tree> {
        &self.cursor
    }

    /// Unwrap the cursor.
    #[must_use]
    pub fn into_cursor(self) -> TreeCursor<'tree> {
        self.cursor
    }
}

impl<'tree> Iterator for ChildIterator<'tree> {
    type Item = NodeHandle<'tree>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance(Traversal::All)
    }
}
