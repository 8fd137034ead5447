//! Lightweight handles to nodes of a [`SyntaxTree`].

use std::hash::{Hash, Hasher};
use std::ops;

use tree_sitter::{InputEdit, Node, Point, Range};

use crate::cursor::TreeCursor;
use crate::iter::{ChildIterator, Traversal};
use crate::tree::SyntaxTree;

/// A position in a syntax tree.
///
/// Handles are plain values: copying one is free and dropping one releases
/// nothing. Two handles are equal when they name the same node of the same
/// [`SyntaxTree`]. Node ids survive incremental reparses, so handles from two
/// trees that share edit history never compare equal even if their ids do.
#[derive(Clone, Copy)]
pub struct NodeHandle<'tree> {
    tree: &'tree SyntaxTree,
    inner: Node<'tree>,
}

impl<'tree> NodeHandle<'tree> {
    pub(crate) const fn new(tree: &'tree SyntaxTree, inner: Node<'tree>) -> Self {
        Self { tree, inner }
    }

    fn wrap(self, node: Option<Node<'tree>>) -> Option<Self> {
        node.map(|inner| Self::new(self.tree, inner))
    }

    /// The tree this node belongs to.
    #[must_use]
    pub const fn tree(&self) -> &'tree SyntaxTree {
        self.tree
    }

    /// The engine's identifier for this node, unique within one tree.
    #[must_use]
    pub fn id(&self) -> usize {
        self.inner.id()
    }

    /// Numeric kind, after aliases are applied.
    #[must_use]
    pub fn kind_id(&self) -> u16 {
        self.inner.kind_id()
    }

    /// Kind name, after aliases are applied. For anonymous tokens this is the
    /// literal token text, e.g. `"("`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.inner.kind()
    }

    /// Numeric kind as written in the grammar, ignoring aliases.
    #[must_use]
    pub fn grammar_id(&self) -> u16 {
        self.inner.grammar_id()
    }

    /// Kind name as written in the grammar, ignoring aliases.
    #[must_use]
    pub fn grammar_name(&self) -> &'static str {
        self.inner.grammar_name()
    }

    /// Whether the node is a named grammar rule rather than a literal token.
    #[must_use]
    pub fn is_named(&self) -> bool {
        self.inner.is_named()
    }

    /// Whether the node is an extra, such as a comment.
    #[must_use]
    pub fn is_extra(&self) -> bool {
        self.inner.is_extra()
    }

    /// Whether the node is a syntax error.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.inner.is_error()
    }

    /// Whether the parser inserted this node to recover from an error.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        self.inner.is_missing()
    }

    /// Whether the node was touched by an edit since it was parsed.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.inner.has_changes()
    }

    /// Whether the node is or contains a syntax error.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.inner.has_error()
    }

    #[must_use]
    pub fn start_byte(&self) -> usize {
        self.inner.start_byte()
    }

    #[must_use]
    pub fn end_byte(&self) -> usize {
        self.inner.end_byte()
    }

    #[must_use]
    pub fn byte_range(&self) -> ops::Range<usize> {
        self.inner.byte_range()
    }

    #[must_use]
    pub fn start_position(&self) -> Point {
        self.inner.start_position()
    }

    #[must_use]
    pub fn end_position(&self) -> Point {
        self.inner.end_position()
    }

    /// Byte and point range together.
    #[must_use]
    pub fn range(&self) -> Range {
        self.inner.range()
    }

    /// The child at `index`, counting anonymous children.
    ///
    /// This is logarithmic in the number of siblings, not constant time. Walk
    /// a [`TreeCursor`] when visiting every child.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<Self> {
        self.wrap(self.inner.child(index))
    }

    #[must_use]
    pub fn child_count(&self) -> usize {
        self.inner.child_count()
    }

    /// The named child at `index`, skipping anonymous children.
    #[must_use]
    pub fn named_child(&self, index: usize) -> Option<Self> {
        self.wrap(self.inner.named_child(index))
    }

    #[must_use]
    pub fn named_child_count(&self) -> usize {
        self.inner.named_child_count()
    }

    /// The first child with the given field name.
    #[must_use]
    pub fn child_by_field_name(&self, name: &str) -> Option<Self> {
        self.wrap(self.inner.child_by_field_name(name))
    }

    /// The first child with the given field id.
    #[must_use]
    pub fn child_by_field_id(&self, field_id: u16) -> Option<Self> {
        self.wrap(self.inner.child_by_field_id(field_id))
    }

    /// The field name attached to the child at `index`, if any.
    #[must_use]
    pub fn field_name_for_child(&self, index: u32) -> Option<&'static str> {
        self.inner.field_name_for_child(index)
    }

    /// The field name attached to the named child at `index`, if any.
    #[must_use]
    pub fn field_name_for_named_child(&self, index: u32) -> Option<&'static str> {
        self.inner.field_name_for_named_child(index)
    }

    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.wrap(self.inner.parent())
    }

    #[must_use]
    pub fn next_sibling(&self) -> Option<Self> {
        self.wrap(self.inner.next_sibling())
    }

    #[must_use]
    pub fn prev_sibling(&self) -> Option<Self> {
        self.wrap(self.inner.prev_sibling())
    }

    #[must_use]
    pub fn next_named_sibling(&self) -> Option<Self> {
        self.wrap(self.inner.next_named_sibling())
    }

    #[must_use]
    pub fn prev_named_sibling(&self) -> Option<Self> {
        self.wrap(self.inner.prev_named_sibling())
    }

    fn covers_bytes(&self, start: usize, end: usize) -> bool {
        start <= end && start >= self.start_byte() && end <= self.end_byte()
    }

    fn covers_points(&self, start: Point, end: Point) -> bool {
        start <= end && start >= self.start_position() && end <= self.end_position()
    }

    /// The smallest node within this one spanning the given byte range, or
    /// `None` when the range is not inside this node.
    #[must_use]
    pub fn descendant_for_byte_range(&self, start: usize, end: usize) -> Option<Self> {
        if !self.covers_bytes(start, end) {
            return None;
        }
        self.wrap(self.inner.descendant_for_byte_range(start, end))
    }

    /// The smallest named node within this one spanning the given byte range.
    #[must_use]
    pub fn named_descendant_for_byte_range(&self, start: usize, end: usize) -> Option<Self> {
        if !self.covers_bytes(start, end) {
            return None;
        }
        self.wrap(self.inner.named_descendant_for_byte_range(start, end))
    }

    /// The smallest node within this one spanning the given point range, or
    /// `None` when the range is not inside this node.
    #[must_use]
    pub fn descendant_for_point_range(&self, start: Point, end: Point) -> Option<Self> {
        if !self.covers_points(start, end) {
            return None;
        }
        self.wrap(self.inner.descendant_for_point_range(start, end))
    }

    /// The smallest named node within this one spanning the given point range.
    #[must_use]
    pub fn named_descendant_for_point_range(&self, start: Point, end: Point) -> Option<Self> {
        if !self.covers_points(start, end) {
            return None;
        }
        self.wrap(self.inner.named_descendant_for_point_range(start, end))
    }

    /// The bytes of `source` this node spans.
    ///
    /// Both offsets are clamped to `source.len()`, so a buffer captured
    /// before an edit yields a shorter (possibly empty) slice instead of
    /// panicking.
    #[must_use]
    pub fn raw_text<'s>(&self, source: &'s [u8]) -> &'s [u8] {
        let end = self.end_byte().min(source.len());
        let start = self.start_byte().min(end);
        &source[start..end]
    }

    /// Shift a handle kept from before an edit so its offsets match the
    /// edited tree. Handles fetched after the edit are already current.
    pub fn edit(&mut self, edit: &InputEdit) {
        self.inner.edit(edit);
    }

    /// A cursor whose root is this node.
    #[must_use]
    pub fn walk(&self) -> TreeCursor<'tree> {
        TreeCursor::new(*self)
    }

    /// An iterator over this node's children.
    #[must_use]
    pub fn iter_children(&self) -> ChildIterator<'tree> {
        ChildIterator::new(self.walk())
    }

    /// All children, in order.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        self.iter_children().collect()
    }

    /// All named children, in order.
    #[must_use]
    pub fn named_children(&self) -> Vec<Self> {
        self.iter_children().steps(Traversal::Named).collect()
    }

    /// All children attached to the field `name`, in order.
    #[must_use]
    pub fn children_by_field_name(&self, name: &str) -> Vec<Self> {
        let mut children = self.iter_children();
        let mut found = Vec::new();
        while let Some(child) = children.next() {
            if children.cursor().field_name() == Some(name) {
                found.push(child);
            }
        }
        found
    }

    /// The engine's parenthesized rendering of this subtree.
    #[must_use]
    pub fn to_sexp(&self) -> String {
        self.inner.to_sexp()
    }

    /// The underlying engine node.
    #[must_use]
    pub const fn as_raw(&self) -> Node<'tree> {
        self.inner
    }
}

impl PartialEq for NodeHandle<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id() && std::ptr::eq(self.tree, other.tree)
    }
}

impl Eq for NodeHandle<'_> {}

impl Hash for NodeHandle<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
        std::ptr::hash(self.tree, state);
    }
}

impl std::fmt::Debug for NodeHandle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

impl std::fmt::Display for NodeHandle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let start = self.start_position();
        let end = self.end_position();
        write!(
            f,
            "{} [{}:{} - {}:{}]",
            self.kind(),
            start.row,
            start.column,
            end.row,
            end.column
        )
    }
}
