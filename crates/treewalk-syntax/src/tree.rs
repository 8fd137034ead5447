//! Parsed trees and the parser that produces them.

use tree_sitter::{InputEdit, Language, LanguageRef, Range};

use crate::cursor::TreeCursor;
use crate::error::{Error, Result};
use crate::node::NodeHandle;

/// A parser bound to a single grammar.
pub struct SyntaxParser {
    inner: tree_sitter::Parser,
    language: Language,
}

impl SyntaxParser {
    /// Create a parser for the given grammar.
    pub fn new(language: &Language) -> Result<Self> {
        let mut inner = tree_sitter::Parser::new();
        inner.set_language(language)?;
        Ok(Self {
            inner,
            language: language.clone(),
        })
    }

    /// The grammar this parser was created with.
    #[must_use]
    pub const fn language(&self) -> &Language {
        &self.language
    }

    /// Parse `source` into a tree.
    ///
    /// When `previous` is given it must already have had every edit that
    /// turned its source into `source` applied through [`SyntaxTree::edit`];
    /// unchanged regions are then reused instead of reparsed.
    pub fn parse(
        &mut self,
        source: impl AsRef<[u8]>,
        previous: Option<&SyntaxTree>,
    ) -> Result<SyntaxTree> {
        let source = source.as_ref();
        tracing::debug!(
            "parsing {} bytes (incremental: {})",
            source.len(),
            previous.is_some()
        );
        let tree = self
            .inner
            .parse(source, previous.map(|p| &p.inner))
            .ok_or(Error::ParseFailed)?;
        let root = tree.root_node();
        tracing::debug!(
            "parsed {} (has errors: {})",
            root.kind(),
            root.has_error()
        );
        Ok(SyntaxTree::from(tree))
    }
}

impl std::fmt::Debug for SyntaxParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyntaxParser")
            .field("language", &self.language.name())
            .finish_non_exhaustive()
    }
}

/// The result of one parse.
///
/// Every [`NodeHandle`] and [`TreeCursor`] borrows the tree it came from, so
/// the tree always outlives them. Cloning is cheap: the engine shares node
/// storage between clones.
#[derive(Clone, Debug)]
pub struct SyntaxTree {
    inner: tree_sitter::Tree,
}

impl SyntaxTree {
    /// The root node of the tree.
    #[must_use]
    pub fn root_node(&self) -> NodeHandle<'_> {
        NodeHandle::new(self, self.inner.root_node())
    }

    /// A cursor rooted at the root node.
    #[must_use]
    pub fn walk(&self) -> TreeCursor<'_> {
        self.root_node().walk()
    }

    /// The grammar the tree was parsed with.
    #[must_use]
    pub fn language(&self) -> LanguageRef<'_> {
        self.inner.language()
    }

    /// Apply an edit to the tree in place.
    ///
    /// Nodes fetched afterwards reflect the edit. Handles obtained from a
    /// clone taken before the edit keep their old offsets until
    /// [`NodeHandle::edit`] is called on them.
    pub fn edit(&mut self, edit: &InputEdit) {
        tracing::debug!(
            "editing tree at byte {}: {} -> {}",
            edit.start_byte,
            edit.old_end_byte,
            edit.new_end_byte
        );
        self.inner.edit(edit);
    }

    /// Ranges whose syntactic structure differs between `self` (an edited
    /// old tree) and `other` (the tree reparsed from it).
    pub fn changed_ranges(&self, other: &Self) -> impl ExactSizeIterator<Item = Range> {
        self.inner.changed_ranges(&other.inner)
    }

    /// The engine's parenthesized rendering of the whole tree.
    #[must_use]
    pub fn to_sexp(&self) -> String {
        self.inner.root_node().to_sexp()
    }

    /// The underlying engine tree.
    #[must_use]
    pub const fn as_raw(&self) -> &tree_sitter::Tree {
        &self.inner
    }
}

impl From<tree_sitter::Tree> for SyntaxTree {
    fn from(inner: tree_sitter::Tree) -> Self {
        Self { inner }
    }
}
