//! Level-order traversal over a card tree.
//!
//! At each level every present scalar field of every node is handed to the
//! visitor together with its owning node. Sequence and nested-node fields
//! are not checked themselves; their children are walked once the whole
//! level is done, sequences first, then single nested nodes.

use crate::fields::{Field, FieldValue, Node};

/// Receives the fields reached by [`walk`].
pub trait Visitor<'a> {
    /// A present scalar field of `owner`.
    fn visit_field(&mut self, owner: &'a dyn Node, field: &Field<'a>);

    /// A present sequence or nested-node field of `owner`, reported before
    /// its children are walked. Ignored unless a visitor opts in.
    fn visit_composite(&mut self, owner: &'a dyn Node, field: &Field<'a>) {
        let _ = (owner, field);
    }
}

impl<'a, F> Visitor<'a> for F
where
    F: FnMut(&'a dyn Node, &Field<'a>),
{
    fn visit_field(&mut self, owner: &'a dyn Node, field: &Field<'a>) {
        self(owner, field)
    }
}

/// Walk `items` and everything reachable from them.
///
/// An empty slice is a no-op; a single node is passed as a one-element
/// slice.
pub fn walk<'a, V>(items: &[&'a dyn Node], visitor: &mut V)
where
    V: Visitor<'a> + ?Sized,
{
    let mut sequences: Vec<Vec<&'a dyn Node>> = Vec::new();
    let mut nested: Vec<&'a dyn Node> = Vec::new();

    for &owner in items {
        for field in owner.fields() {
            match &field.value {
                FieldValue::Absent => {}
                FieldValue::Scalar => visitor.visit_field(owner, &field),
                FieldValue::Nodes(children) => {
                    visitor.visit_composite(owner, &field);
                    sequences.push(children.clone());
                }
                FieldValue::Node(child) => {
                    visitor.visit_composite(owner, &field);
                    nested.push(*child);
                }
            }
        }
    }

    for children in &sequences {
        walk(children, visitor);
    }
    for child in nested {
        walk(&[child], visitor);
    }
}
