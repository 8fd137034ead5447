//! Cursor navigation and JSON dumps for tree-sitter syntax trees.
//!
//! This crate provides:
//! - [`SyntaxParser`] and [`SyntaxTree`], thin owners of the engine's parser
//!   and trees
//! - [`NodeHandle`], a copyable node value with identity-based equality
//! - [`TreeCursor`], a stateful walker with named-only stepping
//! - [`ChildIterator`], forward/backward and named/all iteration of children
//! - [`to_json`] and [`write_json`], a deterministic field-annotated dump
//!
//! # Example
//!
//! ```
//! use treewalk_syntax::{SyntaxParser, to_json};
//!
//! let language: treewalk_syntax::Language = tree_sitter_c::LANGUAGE.into();
//! let mut parser = SyntaxParser::new(&language).unwrap();
//! let source = "int x;";
//! let tree = parser.parse(source, None).unwrap();
//!
//! let json = to_json(tree.root_node(), Some(source.as_bytes())).unwrap();
//! assert!(json.ends_with(b"}\n"));
//! ```

pub mod cursor;
pub mod error;
pub mod iter;
pub mod json;
pub mod node;
pub mod tree;

#[cfg(test)]
mod proptest_support;

pub use cursor::TreeCursor;
pub use error::{Error, Result};
pub use iter::{ChildIterator, Traversal};
pub use json::{escape_json_bytes, to_json, write_json, JsonConfig, JsonSerializer};
pub use node::NodeHandle;
pub use tree::{SyntaxParser, SyntaxTree};
pub use tree_sitter::{InputEdit, Language, Point, Range};
