//! Property-based testing support with arbitrary generators.
//!
//! This module provides proptest strategies for generating small C programs
//! and byte strings to test iteration and serialization invariants.

use proptest::prelude::*;

/// Generate an identifier (may collide with keywords, which only makes the
/// parse tree more interesting).
fn identifier_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,6}"
}

/// Generate a C string literal body with escapes in it.
fn string_body_strategy() -> impl Strategy<Value = String> {
    r#"([a-z ]|\\[tn"\\]){0,8}"#
}

/// Generate an arbitrary expression.
pub fn arb_expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        identifier_strategy(),
        (0..1000u32).prop_map(|n| n.to_string()),
        string_body_strategy().prop_map(|s| format!("\"{s}\"")),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!["+", "-", "<", "==", "&&"]), inner.clone())
                .prop_map(|(l, op, r)| format!("{l} {op} {r}")),
            inner.clone().prop_map(|e| format!("({e})")),
            inner.clone().prop_map(|e| format!("{e}++")),
            (identifier_strategy(), inner).prop_map(|(f, a)| format!("{f}({a})")),
        ]
    })
}

/// Generate an arbitrary statement.
pub fn arb_statement() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_expression().prop_map(|e| format!("{e};")),
        (identifier_strategy(), arb_expression()).prop_map(|(n, e)| format!("int {n} = {e};")),
        (identifier_strategy(), arb_expression(), arb_expression())
            .prop_map(|(n, c, u)| format!("for(int {n} = 0; {c}; {u}) {{ }}")),
        (arb_expression(), arb_expression()).prop_map(|(c, e)| format!("if ({c}) {{ {e}; }}")),
        "[a-z ]{0,10}".prop_map(|c| format!("/*{c}*/")),
    ]
}

/// Generate a small program wrapping a few statements in a function.
pub fn arb_program() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_statement(), 0..6)
        .prop_map(|body| format!("int main(void) {{\n  {}\n}}\n", body.join("\n  ")))
}

/// Generate text containing every byte the serializer escapes.
pub fn arb_escapable_text() -> impl Strategy<Value = String> {
    r#"[a-zA-Z0-9 {}:,"\\\t\n\r\x08\x0c]{0,40}"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{escape_json_bytes, to_json};
    use crate::node::NodeHandle;
    use crate::test_support::{all_nodes, parse_c};

    proptest! {
        /// Escaping followed by standard JSON decoding is the identity.
        #[test]
        fn escape_round_trips(text in arb_escapable_text()) {
            let mut quoted = b"\"".to_vec();
            escape_json_bytes(text.as_bytes(), &mut quoted).unwrap();
            quoted.push(b'"');

            let decoded: String = serde_json::from_slice(&quoted).unwrap();
            prop_assert_eq!(decoded, text);
        }

        /// Draining with `next` visits exactly `child(0..count)`.
        #[test]
        fn next_drains_indexed_children(program in arb_program()) {
            let tree = parse_c(&program);
            for node in all_nodes(tree.root_node()) {
                let drained: Vec<_> = node.iter_children().collect();
                let indexed: Vec<_> = (0..node.child_count()).filter_map(|i| node.child(i)).collect();
                prop_assert_eq!(drained, indexed);
            }
        }

        /// Named stepping agrees with the named count and with filtering.
        #[test]
        fn named_count_agrees(program in arb_program()) {
            let tree = parse_c(&program);
            for node in all_nodes(tree.root_node()) {
                let filtered: Vec<_> = node.iter_children().filter(NodeHandle::is_named).collect();
                prop_assert!(node.named_child_count() <= node.child_count());
                prop_assert_eq!(filtered.len(), node.named_child_count());

                let mut children = node.iter_children();
                let mut steps = 0;
                while children.next_named().is_some() {
                    steps += 1;
                }
                prop_assert_eq!(steps, node.named_child_count());

                if let Some(first) = node.named_child(0) {
                    prop_assert!(first.prev_named_sibling().is_none());
                }
            }
        }

        /// A reset after a partial pass starts over from the first child.
        #[test]
        fn reset_restarts(program in arb_program(), taken in 0..5usize) {
            let tree = parse_c(&program);
            for node in all_nodes(tree.root_node()) {
                let expected = node.iter_children().next();
                let mut children = node.iter_children();
                for _ in 0..taken {
                    children.next();
                }
                children.reset();
                prop_assert_eq!(children.next(), expected);
            }
        }

        /// Dumps of ASCII sources are valid JSON documents.
        #[test]
        fn dump_is_valid_json(program in arb_program()) {
            let tree = parse_c(&program);
            let json = to_json(tree.root_node(), Some(program.as_bytes())).unwrap();
            let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
            prop_assert_eq!(&value["kind"], "translation_unit");
            prop_assert_eq!(json.last(), Some(&b'\n'));
        }
    }
}
