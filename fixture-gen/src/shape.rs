use std::collections::{HashMap, HashSet};

use log::debug;

use crate::error::FixtureError;
use crate::rule::Rule;

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub rule: Rule,
}

/// The columns of one record type and the rule producing each of them.
///
/// Column order is the order fields were given in. Evaluation order can differ: a field that
/// composes from other fields is always evaluated after them.
#[derive(Debug, Clone)]
pub struct Shape {
    noun: &'static str,
    fields: Vec<Field>,
    positions: HashMap<&'static str, usize>,
    evaluation_order: Vec<usize>,
}

impl Shape {
    /// # Errors
    /// Errors with `InvalidShape` when a field name is repeated, when a composed field reads a
    /// field the shape does not have, or when fields read each other in a cycle
    pub fn new(noun: &'static str, fields: Vec<(&'static str, Rule)>) -> Result<Self, FixtureError> {
        let fields: Vec<Field> = fields
            .into_iter()
            .map(|(name, rule)| Field { name, rule })
            .collect();

        let mut positions = HashMap::with_capacity(fields.len());
        for (position, field) in fields.iter().enumerate() {
            if positions.insert(field.name, position).is_some() {
                return Err(FixtureError::InvalidShape(format!(
                    "field `{}` appears more than once in {noun}",
                    field.name
                )));
            }
        }

        let mut dependencies = Vec::with_capacity(fields.len());
        for field in &fields {
            let mut deps = HashSet::new();
            for reference in field.rule.references() {
                let position = positions.get(reference).ok_or_else(|| {
                    FixtureError::InvalidShape(format!(
                        "field `{}` reads unknown field `{reference}`",
                        field.name
                    ))
                })?;
                deps.insert(*position);
            }
            dependencies.push(deps);
        }

        let evaluation_order = evaluation_order(&fields, &dependencies)?;
        debug!(
            "Evaluation order for {noun}: {:?}",
            evaluation_order
                .iter()
                .map(|&position| fields[position].name)
                .collect::<Vec<_>>()
        );

        Ok(Shape {
            noun,
            fields,
            positions,
            evaluation_order,
        })
    }

    /// Plural name of the records, as used in the run summary.
    #[must_use]
    pub fn noun(&self) -> &'static str {
        self.noun
    }

    #[must_use]
    pub fn header(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.name).collect()
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub(crate) fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Column positions in the order their values must be generated.
    #[must_use]
    pub fn evaluation_order(&self) -> &[usize] {
        &self.evaluation_order
    }
}

/// Orders fields so that every field comes after the fields it reads, keeping column order
/// among fields that are otherwise independent.
fn evaluation_order(
    fields: &[Field],
    dependencies: &[HashSet<usize>],
) -> Result<Vec<usize>, FixtureError> {
    let mut order = Vec::with_capacity(fields.len());
    let mut done = vec![false; fields.len()];
    while order.len() < fields.len() {
        let next = (0..fields.len()).find(|&position| {
            !done[position] && dependencies[position].iter().all(|&dep| done[dep])
        });
        match next {
            Some(position) => {
                done[position] = true;
                order.push(position);
            }
            None => {
                let stuck: Vec<&str> = (0..fields.len())
                    .filter(|&position| !done[position])
                    .map(|position| fields[position].name)
                    .collect();
                return Err(FixtureError::InvalidShape(format!(
                    "fields {stuck:?} read each other in a cycle"
                )));
            }
        }
    }
    Ok(order)
}

/// A row under construction: values are in column order, `None` until generated.
#[derive(Debug, Clone, Copy)]
pub struct PartialRow<'a> {
    shape: &'a Shape,
    values: &'a [Option<String>],
}

impl<'a> PartialRow<'a> {
    #[must_use]
    pub fn new(shape: &'a Shape, values: &'a [Option<String>]) -> Self {
        PartialRow { shape, values }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.shape
            .position(name)
            .and_then(|position| self.values.get(position))
            .and_then(Option::as_deref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::FakeKind;
    use crate::template::Template;

    fn email_first() -> Vec<(&'static str, Rule)> {
        vec![
            (
                "email",
                Rule::Composed(Template::new().field_lower("first_name").text("@example.com")),
            ),
            ("first_name", Rule::Fake(FakeKind::FirstName)),
            ("country", Rule::Constant("Switzerland")),
        ]
    }

    #[test]
    fn test_header_keeps_column_order() {
        let shape = Shape::new("people", email_first()).unwrap();
        assert_eq!(shape.header(), vec!["email", "first_name", "country"]);
        assert_eq!(shape.len(), 3);
        assert_eq!(shape.noun(), "people");
    }

    #[test]
    fn test_referenced_fields_evaluate_first() {
        let shape = Shape::new("people", email_first()).unwrap();
        assert_eq!(shape.evaluation_order(), &[1, 0, 2]);
    }

    #[test]
    fn test_duplicate_field() {
        let fields = vec![
            ("zip", Rule::Constant("8000")),
            ("zip", Rule::Constant("8001")),
        ];
        assert!(matches!(
            Shape::new("places", fields),
            Err(FixtureError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_unknown_reference() {
        let fields = vec![("email", Rule::Composed(Template::new().field("nickname")))];
        assert!(matches!(
            Shape::new("people", fields),
            Err(FixtureError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_reference_cycle() {
        let fields = vec![
            ("a", Rule::Composed(Template::new().field("b"))),
            ("b", Rule::Composed(Template::new().field("a"))),
            ("c", Rule::Constant("c")),
        ];
        assert!(matches!(
            Shape::new("loops", fields),
            Err(FixtureError::InvalidShape(_))
        ));

        let fields = vec![("a", Rule::Composed(Template::new().field("a")))];
        assert!(Shape::new("loops", fields).is_err());
    }

    #[test]
    fn test_partial_row_get() {
        let shape = Shape::new("people", email_first()).unwrap();
        let values = vec![None, Some("Lena".to_string()), None];
        let row = PartialRow::new(&shape, &values);
        assert_eq!(row.get("first_name"), Some("Lena"));
        assert_eq!(row.get("email"), None);
        assert_eq!(row.get("missing"), None);
    }
}
