use super::Serializer;
use crate::QueryBuilder;

use sluice_core::stmt::{Operation, QueryField, QueryGroup, Value};

impl Serializer {
    /// Writes `WHERE <group>` unless the group is absent or empty.
    pub(super) fn where_clause(&self, b: &mut QueryBuilder, filter: Option<&QueryGroup>) {
        if let Some(text) = filter.and_then(|group| self.group_text(b, group)) {
            b.where_().write(text);
        }
    }

    /// Renders a group as `(a AND b ...)`, or `None` when it holds no
    /// predicates. A group with a single child group and nothing else
    /// renders as the child.
    pub(super) fn group_text(&self, b: &QueryBuilder, group: &QueryGroup) -> Option<String> {
        if group.is_empty() {
            return None;
        }

        if !group.is_not() && group.fields().is_empty() && group.groups().len() == 1 {
            return self.group_text(b, &group.groups()[0]);
        }

        let parts: Vec<_> = group
            .fields()
            .iter()
            .map(|field| self.field_text(b, field))
            .chain(
                group
                    .groups()
                    .iter()
                    .filter_map(|child| self.group_text(b, child)),
            )
            .collect();

        let separator = format!(" {} ", group.conjunction().sql_text());
        let text = format!("({})", parts.join(&separator));

        Some(if group.is_not() {
            format!("NOT {text}")
        } else {
            text
        })
    }

    fn field_text(&self, b: &QueryBuilder, field: &QueryField) -> String {
        let column = b.quote(field.field().name());
        let operation = field.operation();

        if field.is_null_check() {
            return match operation {
                Operation::Equal => format!("{column} IS NULL"),
                _ => format!("{column} IS NOT NULL"),
            };
        }

        // Structural operations never reach a QueryField.
        let op = operation.sql_text().unwrap_or("=");

        match field.value() {
            Value::List(_) if operation.is_range() => format!(
                "{column} {op} {} AND {}",
                b.parameter_named(&field.left_parameter_name(), None),
                b.parameter_named(&field.right_parameter_name(), None),
            ),
            Value::List(items) if operation.is_list() => {
                if items.is_empty() {
                    return match operation {
                        Operation::In => "(1 = 0)".to_string(),
                        _ => "(1 = 1)".to_string(),
                    };
                }

                let parameters: Vec<_> = (0..items.len())
                    .map(|i| b.parameter_named(&field.in_parameter_name(i), None))
                    .collect();
                format!("{column} {op} ({})", parameters.join(", "))
            }
            _ => format!(
                "{column} {op} {}",
                b.parameter_named(field.parameter_name(), None)
            ),
        }
    }
}
