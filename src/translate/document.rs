//! Built-in translator for document sessions.
//!
//! Document stores query any field, so predicates lower structurally:
//! the boolean tree carries over and field names pass through unchanged.
//! Projection arity is validated here, not by the composer.

use crate::predicate::Predicate;
use crate::query::{ColumnSet, Criteria, ProjectionSpec, SelectStatement};
use crate::schema::EntityPath;

use super::errors::TranslationError;
use super::{PredicateTranslator, ProjectionTranslator};

/// Translator for schemaless document paths
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTranslator;

impl DocumentTranslator {
    fn lower(&self, path: &EntityPath, predicate: &Predicate) -> Result<Criteria, TranslationError> {
        match predicate {
            Predicate::Compare { field, op, value } => {
                if field.is_empty() {
                    return Err(TranslationError::UnknownField {
                        path: path.to_string(),
                        field: field.clone(),
                    });
                }
                Ok(Criteria::Compare {
                    field: field.clone(),
                    op: *op,
                    value: value.clone(),
                })
            }
            Predicate::And(branches) => Ok(Criteria::All(self.lower_all(path, branches)?)),
            Predicate::Or(branches) => Ok(Criteria::Any(self.lower_all(path, branches)?)),
            Predicate::Not(inner) => Ok(Criteria::Not(Box::new(self.lower(path, inner)?))),
        }
    }

    fn lower_all(
        &self,
        path: &EntityPath,
        branches: &[Predicate],
    ) -> Result<Vec<Criteria>, TranslationError> {
        branches
            .iter()
            .map(|branch| self.lower(path, branch))
            .collect()
    }
}

impl PredicateTranslator for DocumentTranslator {
    fn criteria(
        &self,
        path: &EntityPath,
        predicate: &Predicate,
    ) -> Result<Criteria, TranslationError> {
        self.lower(path, predicate)
    }
}

impl ProjectionTranslator for DocumentTranslator {
    fn select(
        &self,
        path: &EntityPath,
        criteria: Criteria,
        projection: &ProjectionSpec,
    ) -> Result<SelectStatement, TranslationError> {
        if projection.arity() != projection.fields().len() {
            return Err(TranslationError::ArityMismatch {
                bound: projection.fields().len(),
                expected: projection.arity(),
            });
        }
        Ok(SelectStatement::new(path.clone(), criteria)
            .with_columns(ColumnSet::Fields(projection.fields().to_vec())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::CompareOp;
    use serde_json::json;

    fn path() -> EntityPath {
        EntityPath::new("cases")
    }

    #[test]
    fn test_comparison_lowers_structurally() {
        let criteria = DocumentTranslator
            .criteria(&path(), &Predicate::ne("name", json!("b")))
            .unwrap();
        assert_eq!(
            criteria,
            Criteria::Compare {
                field: "name".to_string(),
                op: CompareOp::Ne,
                value: json!("b"),
            }
        );
    }

    #[test]
    fn test_boolean_structure_carries_over() {
        let predicate = Predicate::eq("a", json!(1))
            .and(Predicate::eq("b", json!(2)))
            .negate();
        let criteria = DocumentTranslator.criteria(&path(), &predicate).unwrap();
        match criteria {
            Criteria::Not(inner) => match *inner {
                Criteria::All(branches) => assert_eq!(branches.len(), 2),
                other => panic!("expected conjunction, got {other:?}"),
            },
            other => panic!("expected negation, got {other:?}"),
        }
    }

    #[test]
    fn test_unnamed_field_is_rejected() {
        let err = DocumentTranslator
            .criteria(&path(), &Predicate::eq("", json!(1)))
            .unwrap_err();
        assert!(matches!(err, TranslationError::UnknownField { .. }));
    }

    #[test]
    fn test_projection_arity_mismatch_is_rejected() {
        use crate::query::Projection;
        use serde_json::Value;

        let projection =
            Projection::new(["name"], |values: &[Value]| Ok(values[0].clone())).with_arity(2);
        let err = DocumentTranslator
            .select(
                &path(),
                Criteria::All(vec![]),
                projection.spec(),
            )
            .unwrap_err();
        assert_eq!(
            err,
            TranslationError::ArityMismatch {
                bound: 1,
                expected: 2,
            }
        );
    }

    #[test]
    fn test_projection_selects_bound_fields_in_order() {
        use crate::query::Projection;
        use serde_json::Value;

        let projection = Projection::new(["id", "name"], |values: &[Value]| {
            Ok((values[0].clone(), values[1].clone()))
        });
        let statement = DocumentTranslator
            .select(&path(), Criteria::All(vec![]), projection.spec())
            .unwrap();
        assert_eq!(
            statement.columns,
            ColumnSet::Fields(vec!["id".to_string(), "name".to_string()])
        );
    }
}
