//! JSON dumps of syntax trees.
//!
//! The output is a debugging and golden-test format, not a general AST
//! encoding. Each node becomes an object whose keys are, in this order:
//!
//! 1. `"field"`: the node's field name in its parent, when it has one;
//! 2. `"kind_id"`: the numeric kind, as a decimal string;
//! 3. `"kind"`: the kind name;
//! 4. `"raw"`: the source text, only for childless nodes when a source
//!    buffer is supplied;
//! 5. `"0"`, `"1"`, ...: one entry per child. Anonymous children are written
//!    as their kind text (for literal tokens that is the token itself),
//!    named children as nested objects.
//!
//! Nesting is indented four spaces per level and the document ends with a
//! single newline. Strings escape `"`, `\`, tab, newline, backspace,
//! form feed and carriage return; every other byte is copied as is, so the
//! output is not guaranteed to be valid UTF-8.

use std::io::{self, Write};

use crate::cursor::TreeCursor;
use crate::error::Result;
use crate::node::NodeHandle;

/// Configuration for the JSON serializer.
#[derive(Debug, Clone)]
pub struct JsonConfig {
    /// Indentation string per nesting level (default: four spaces).
    pub indent: String,
    /// Emit `"raw"` entries for leaves when source text is supplied
    /// (default: true).
    pub include_raw: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            include_raw: true,
        }
    }
}

/// Serialize the subtree at `node` into a buffer.
///
/// With `source`, childless nodes carry their text under `"raw"`.
pub fn to_json(node: NodeHandle<'_>, source: Option<&[u8]>) -> Result<Vec<u8>> {
    let mut serializer = JsonSerializer::new(Vec::new(), JsonConfig::default());
    serializer.serialize(node, source)?;
    Ok(serializer.into_inner())
}

/// Serialize the subtree at `node` straight into `out`.
///
/// A failed write is returned as is; whatever reached `out` before it stays
/// there.
pub fn write_json<W: Write>(
    node: NodeHandle<'_>,
    source: Option<&[u8]>,
    out: W,
) -> io::Result<()> {
    JsonSerializer::new(out, JsonConfig::default()).serialize(node, source)
}

/// Write `bytes` as the body of a JSON string.
pub fn escape_json_bytes<W: Write + ?Sized>(bytes: &[u8], out: &mut W) -> io::Result<()> {
    let mut start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        let escaped: &[u8] = match byte {
            b'"' => b"\\\"",
            b'\\' => b"\\\\",
            b'\t' => b"\\t",
            b'\n' => b"\\n",
            0x08 => b"\\b",
            0x0C => b"\\f",
            b'\r' => b"\\r",
            _ => continue,
        };
        out.write_all(&bytes[start..i])?;
        out.write_all(escaped)?;
        start = i + 1;
    }
    out.write_all(&bytes[start..])
}

/// Recursive JSON writer over a [`TreeCursor`].
#[derive(Debug)]
pub struct JsonSerializer<W> {
    out: W,
    config: JsonConfig,
}

impl<W: Write> JsonSerializer<W> {
    /// Create a serializer writing into `out`.
    pub fn new(out: W, config: JsonConfig) -> Self {
        Self { out, config }
    }

    /// Write one document for the subtree at `node`.
    pub fn serialize(&mut self, node: NodeHandle<'_>, source: Option<&[u8]>) -> io::Result<()> {
        tracing::debug!(
            "serializing {} (source supplied: {})",
            node,
            source.is_some()
        );
        let mut cursor = node.walk();
        self.write_object(&mut cursor, source)?;
        self.out.write_all(b"\n")
    }

    /// Recover the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_object(
        &mut self,
        cursor: &mut TreeCursor<'_>,
        source: Option<&[u8]>,
    ) -> io::Result<()> {
        let node = cursor.node();
        let level = cursor.depth() as usize + 1;
        let mut first = true;

        self.out.write_all(b"{")?;

        if let Some(field) = cursor.field_name() {
            self.write_key(&mut first, level, "field")?;
            self.write_string(field.as_bytes())?;
        }

        self.write_key(&mut first, level, "kind_id")?;
        self.write_string(node.kind_id().to_string().as_bytes())?;

        self.write_key(&mut first, level, "kind")?;
        self.write_string(node.kind().as_bytes())?;

        if node.child_count() == 0
            && self.config.include_raw
            && let Some(source) = source
        {
            self.write_key(&mut first, level, "raw")?;
            self.write_string(node.raw_text(source))?;
        }

        if cursor.goto_first_child() {
            let mut index = 0usize;
            loop {
                self.write_key(&mut first, level, &index.to_string())?;
                let child = cursor.node();
                if child.is_named() {
                    self.write_object(cursor, source)?;
                } else {
                    self.write_string(child.kind().as_bytes())?;
                }
                index += 1;
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
            cursor.goto_parent();
        }

        self.out.write_all(b"\n")?;
        self.write_indent(level - 1)?;
        self.out.write_all(b"}")
    }

    fn write_key(&mut self, first: &mut bool, level: usize, key: &str) -> io::Result<()> {
        let separator: &[u8] = if std::mem::take(first) { b"\n" } else { b",\n" };
        self.out.write_all(separator)?;
        self.write_indent(level)?;
        self.write_string(key.as_bytes())?;
        self.out.write_all(b": ")
    }

    fn write_indent(&mut self, level: usize) -> io::Result<()> {
        for _ in 0..level {
            self.out.write_all(self.config.indent.as_bytes())?;
        }
        Ok(())
    }

    fn write_string(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(b"\"")?;
        escape_json_bytes(bytes, &mut self.out)?;
        self.out.write_all(b"\"")
    }
}
