//! Parser for the Espalier demo tree notation.
//!
//! The notation is a single parenthesized expression: a node is a name
//! optionally followed by a comma-separated child list in parentheses, as
//! in `A(B(D,E),C(F))`. Names are ASCII alphanumerics and underscores;
//! whitespace may appear freely between tokens. The public entry point is
//! [`parse`].

use thiserror::Error;
use winnow::{
    Parser,
    ascii::multispace0,
    combinator::{delimited, opt, preceded, separated, terminated},
    error::{ContextError, ErrMode},
    token::take_while,
};

use espalier_core::tree::{NodeId, Tree};

/// Error produced when the tree notation cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid tree notation at byte {offset}")]
pub struct ParseError {
    offset: usize,
}

impl ParseError {
    /// Byte offset into the source where parsing stopped.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

type PResult<O> = Result<O, ErrMode<ContextError>>;

/// Parsed node before it is grafted onto a [`Tree`].
#[derive(Debug)]
struct RawNode {
    name: String,
    children: Vec<RawNode>,
}

/// Parse a node name: one or more ASCII alphanumerics or underscores.
fn name(input: &mut &str) -> PResult<String> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_')
        .map(|s: &str| s.to_string())
        .parse_next(input)
}

/// Parse a node: a name with an optional parenthesized child list.
fn node(input: &mut &str) -> PResult<RawNode> {
    let name = preceded(multispace0, name).parse_next(input)?;
    let children: Option<Vec<RawNode>> = opt(delimited(
        (multispace0, '('),
        separated(1.., node, (multispace0, ',')),
        (multispace0, ')'),
    ))
    .parse_next(input)?;

    Ok(RawNode {
        name,
        children: children.unwrap_or_default(),
    })
}

/// Parse a complete notation string into a [`Tree`].
///
/// The entire input must be consumed; trailing whitespace is allowed.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying the byte offset where parsing stopped.
pub fn parse(source: &str) -> Result<Tree, ParseError> {
    let raw = terminated(node, multispace0)
        .parse(source)
        .map_err(|err| ParseError {
            offset: err.offset(),
        })?;

    let mut tree = Tree::new(raw.name);
    let root = tree.root();
    graft(&mut tree, root, raw.children);
    Ok(tree)
}

/// Attach parsed children under `parent`, preserving their order.
fn graft(tree: &mut Tree, parent: NodeId, children: Vec<RawNode>) {
    for child in children {
        let id = tree.add_child(parent, child.name);
        graft(tree, id, child.children);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels_of_children(tree: &Tree, id: NodeId) -> Vec<&str> {
        tree.children(id)
            .iter()
            .map(|&child| tree.label(child))
            .collect()
    }

    #[test]
    fn test_parse_single_node() {
        let tree = parse("A").unwrap();
        assert_eq!(tree.nodes_count(), 1);
        assert_eq!(tree.label(tree.root()), "A");
    }

    #[test]
    fn test_parse_nested_tree() {
        let tree = parse("A(B(D,E),C(F))").unwrap();
        let root = tree.root();
        assert_eq!(tree.label(root), "A");
        assert_eq!(labels_of_children(&tree, root), ["B", "C"]);

        let b = tree.children(root)[0];
        let c = tree.children(root)[1];
        assert_eq!(labels_of_children(&tree, b), ["D", "E"]);
        assert_eq!(labels_of_children(&tree, c), ["F"]);
        assert_eq!(tree.nodes_count(), 6);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let tree = parse("  A ( B , C )\n").unwrap();
        assert_eq!(labels_of_children(&tree, tree.root()), ["B", "C"]);
    }

    #[test]
    fn test_parse_underscore_names() {
        let tree = parse("root_1(x2)").unwrap();
        assert_eq!(tree.label(tree.root()), "root_1");
        assert_eq!(labels_of_children(&tree, tree.root()), ["x2"]);
    }

    #[test]
    fn test_parse_preserves_child_order() {
        let tree = parse("p(z,a,m)").unwrap();
        assert_eq!(labels_of_children(&tree, tree.root()), ["z", "a", "m"]);
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        let err = parse("").unwrap_err();
        assert_eq!(err.offset(), 0);
    }

    #[test]
    fn test_parse_rejects_trailing_garbage() {
        let err = parse("A(B) extra").unwrap_err();
        assert!(err.offset() > 0);
    }

    #[test]
    fn test_parse_rejects_unbalanced_parens() {
        assert!(parse("A(B,C").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_child_list() {
        assert!(parse("A()").is_err());
    }
}
