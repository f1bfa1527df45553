use super::Node;
use crate::registry::EntityMeta;

use sluice_core::{
    stmt::{Conjunction, QueryField, QueryGroup},
    Error, Result,
};

/// Compiles an expression tree into a group over mapped columns.
///
/// Nested groups with the same conjunction as their parent are flattened
/// into it; mixed conjunctions nest. Parameter names are unique across the
/// result.
pub(crate) fn compile(meta: &EntityMeta, node: &Node) -> Result<QueryGroup> {
    match node {
        Node::Compare { .. } => Ok(QueryGroup::new([field(meta, node)?])),
        Node::Group {
            conjunction,
            items,
            is_not,
        } => {
            let group = group(meta, *conjunction, items)?;
            Ok(if *is_not { group.not() } else { group })
        }
    }
}

fn group(meta: &EntityMeta, conjunction: Conjunction, items: &[Node]) -> Result<QueryGroup> {
    let mut fields = vec![];
    let mut groups = vec![];

    flatten(meta, conjunction, items, &mut fields, &mut groups)?;

    Ok(QueryGroup::with(conjunction, fields, groups))
}

fn flatten(
    meta: &EntityMeta,
    conjunction: Conjunction,
    items: &[Node],
    fields: &mut Vec<QueryField>,
    groups: &mut Vec<QueryGroup>,
) -> Result<()> {
    for item in items {
        match item {
            Node::Compare { .. } => fields.push(field(meta, item)?),
            Node::Group {
                conjunction: nested,
                items,
                is_not: false,
            } if *nested == conjunction => flatten(meta, conjunction, items, fields, groups)?,
            Node::Group { .. } => groups.push(compile(meta, item)?),
        }
    }

    Ok(())
}

fn field(meta: &EntityMeta, node: &Node) -> Result<QueryField> {
    let Node::Compare {
        property,
        operation,
        value,
    } = node
    else {
        return Err(Error::invalid_expression("expected a comparison"));
    };

    let Some(property) = meta.property(property) else {
        return Err(Error::invalid_expression(format!(
            "`{property}` is not a mapped property of {}",
            meta.name()
        )));
    };

    QueryField::new(property.field(), *operation, value.clone()).map_err(|err| {
        err.context(Error::invalid_expression(format!(
            "`{}` is not a `property {operation:?} constant` comparison",
            property.name()
        )))
    })
}
