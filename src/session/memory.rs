//! In-memory document session.
//!
//! Reference backend: a map of entity path to document rows. Criteria
//! evaluation is strict: a missing field never matches, a null value
//! never matches a comparison, and values never coerce across types.
//! Sorting is stable and deterministic.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde_json::Value;

use crate::predicate::CompareOp;
use crate::query::{ColumnSet, CountStatement, Criteria, SelectStatement, SortDirection, SortKey};

use super::{Row, Session, SessionError};

/// Document store held entirely in memory
#[derive(Debug, Default)]
pub struct MemorySession {
    collections: HashMap<String, Vec<Value>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row under the given entity path
    pub fn insert(&mut self, path: impl Into<String>, row: Value) {
        self.collections.entry(path.into()).or_default().push(row);
    }

    /// Adds many rows under the given entity path
    pub fn insert_all(&mut self, path: impl Into<String>, rows: impl IntoIterator<Item = Value>) {
        self.collections.entry(path.into()).or_default().extend(rows);
    }

    fn rows(&self, path: &str) -> &[Value] {
        self.collections.get(path).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Session for MemorySession {
    fn fetch(&self, statement: &SelectStatement) -> Result<Vec<Row>, SessionError> {
        let mut rows: Vec<Value> = self
            .rows(statement.path.as_str())
            .iter()
            .filter(|row| matches(row, &statement.criteria))
            .cloned()
            .collect();

        if !statement.order.is_empty() {
            sort_rows(&mut rows, &statement.order);
        }

        let offset = statement.offset.unwrap_or(0) as usize;
        let limit = statement.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(rows
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|row| project(&row, &statement.columns))
            .collect())
    }

    fn count(&self, statement: &CountStatement) -> Result<u64, SessionError> {
        let matched = self
            .rows(statement.path.as_str())
            .iter()
            .filter(|row| matches(row, &statement.criteria))
            .count();
        Ok(matched as u64)
    }

    fn exists(&self, statement: &CountStatement) -> Result<bool, SessionError> {
        Ok(self
            .rows(statement.path.as_str())
            .iter()
            .any(|row| matches(row, &statement.criteria)))
    }
}

/// Checks a row against criteria
fn matches(row: &Value, criteria: &Criteria) -> bool {
    match criteria {
        Criteria::Compare { field, op, value } => {
            let actual = match row.get(field) {
                Some(actual) => actual,
                None => return false, // missing field = no match
            };
            if actual.is_null() {
                return false;
            }
            compare(actual, *op, value)
        }
        Criteria::All(branches) => branches.iter().all(|branch| matches(row, branch)),
        Criteria::Any(branches) => branches.iter().any(|branch| matches(row, branch)),
        Criteria::Not(inner) => !matches(row, inner),
    }
}

fn compare(actual: &Value, op: CompareOp, expected: &Value) -> bool {
    match op {
        CompareOp::Eq => actual == expected,
        CompareOp::Ne => actual != expected,
        CompareOp::Gt => ordering_of(actual, expected) == Some(Ordering::Greater),
        CompareOp::Gte => matches!(
            ordering_of(actual, expected),
            Some(Ordering::Greater | Ordering::Equal)
        ),
        CompareOp::Lt => ordering_of(actual, expected) == Some(Ordering::Less),
        CompareOp::Lte => matches!(
            ordering_of(actual, expected),
            Some(Ordering::Less | Ordering::Equal)
        ),
    }
}

/// Orders two scalar values of the same type. Cross-type comparisons and
/// non-scalar values have no ordering.
fn ordering_of(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                return Some(a.cmp(&b));
            }
            a.as_f64()?.partial_cmp(&b.as_f64()?)
        }
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Stable multi-key sort; earlier keys win, missing values order first
fn sort_rows(rows: &mut [Value], order: &[SortKey]) {
    rows.sort_by(|a, b| {
        for key in order {
            let ranked = rank(a.get(&key.field), b.get(&key.field));
            let ranked = match key.direction {
                SortDirection::Asc => ranked,
                SortDirection::Desc => ranked.reverse(),
            };
            if ranked != Ordering::Equal {
                return ranked;
            }
        }
        Ordering::Equal
    });
}

/// Compares two optional values for sorting: absent < null < bool <
/// number < string, natural order within a type
fn rank(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let (a, b) = match (a, b) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Less,
        (Some(_), None) => return Ordering::Greater,
        (Some(a), Some(b)) => (a, b),
    };

    let type_order = |value: &Value| -> u8 {
        match value {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    };

    let ordered = type_order(a).cmp(&type_order(b));
    if ordered != Ordering::Equal {
        return ordered;
    }

    match (a, b) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(0.0);
            let b = b.as_f64().unwrap_or(0.0);
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        _ => Ordering::Equal, // arrays and objects not compared
    }
}

fn project(row: &Value, columns: &ColumnSet) -> Value {
    match columns {
        ColumnSet::All => row.clone(),
        ColumnSet::Fields(fields) => {
            let mut projected = serde_json::Map::with_capacity(fields.len());
            for field in fields {
                projected.insert(field.clone(), row.get(field).cloned().unwrap_or(Value::Null));
            }
            Value::Object(projected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::EntityPath;
    use serde_json::json;

    fn seeded() -> MemorySession {
        let mut session = MemorySession::new();
        session.insert_all(
            "cases",
            [
                json!({"id": 1, "name": "a", "age": 30}),
                json!({"id": 2, "name": "b", "age": 20}),
                json!({"id": 3, "name": "c", "age": 25}),
            ],
        );
        session
    }

    fn select(criteria: Criteria) -> SelectStatement {
        SelectStatement::new(EntityPath::new("cases"), criteria)
    }

    fn eq(field: &str, value: Value) -> Criteria {
        Criteria::Compare {
            field: field.to_string(),
            op: CompareOp::Eq,
            value,
        }
    }

    #[test]
    fn test_fetch_filters_strictly() {
        let session = seeded();
        let rows = session.fetch(&select(eq("name", json!("b")))).unwrap();
        assert_eq!(rows, vec![json!({"id": 2, "name": "b", "age": 20})]);
    }

    #[test]
    fn test_no_type_coercion() {
        let session = seeded();
        let rows = session.fetch(&select(eq("id", json!("1")))).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_and_null_fields_never_match() {
        let mut session = MemorySession::new();
        session.insert("cases", json!({"id": 1}));
        session.insert("cases", json!({"id": 2, "name": null}));

        let rows = session.fetch(&select(eq("name", json!("a")))).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_negation_and_disjunction() {
        let session = seeded();

        let not_b = Criteria::Not(Box::new(eq("name", json!("b"))));
        let rows = session.fetch(&select(not_b)).unwrap();
        assert_eq!(rows.len(), 2);

        let a_or_c = Criteria::Any(vec![eq("name", json!("a")), eq("name", json!("c"))]);
        let rows = session.fetch(&select(a_or_c)).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_range_comparisons() {
        let session = seeded();
        let criteria = Criteria::Compare {
            field: "age".to_string(),
            op: CompareOp::Gte,
            value: json!(25),
        };
        let rows = session.fetch(&select(criteria)).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_sort_is_applied_before_the_range() {
        let session = seeded();
        let statement = select(Criteria::All(vec![eq("name", json!("a"))]));
        // widen to all rows, order by age descending, take the first
        let statement = SelectStatement {
            criteria: Criteria::Not(Box::new(eq("name", json!("none")))),
            ..statement
        }
        .with_order(vec![SortKey::desc("age")])
        .with_limit(1);

        let rows = session.fetch(&statement).unwrap();
        assert_eq!(rows[0]["name"], json!("a")); // age 30 sorts first
    }

    #[test]
    fn test_sort_is_stable() {
        let mut session = MemorySession::new();
        session.insert_all(
            "cases",
            [
                json!({"id": 1, "age": 25}),
                json!({"id": 2, "age": 25}),
                json!({"id": 3, "age": 25}),
            ],
        );
        let statement = select(Criteria::All(vec![Criteria::Compare {
            field: "age".to_string(),
            op: CompareOp::Eq,
            value: json!(25),
        }]))
        .with_order(vec![SortKey::asc("age")]);

        let rows = session.fetch(&statement).unwrap();
        let ids: Vec<&Value> = rows.iter().map(|row| &row["id"]).collect();
        assert_eq!(ids, [&json!(1), &json!(2), &json!(3)]);
    }

    #[test]
    fn test_offset_and_limit_slice_the_result() {
        let session = seeded();
        let everything = Criteria::Not(Box::new(eq("name", json!("none"))));

        let mut statement = select(everything.clone());
        statement.offset = Some(1);
        statement.limit = Some(1);
        let rows = session.fetch(&statement).unwrap();
        assert_eq!(rows, vec![json!({"id": 2, "name": "b", "age": 20})]);

        let mut statement = select(everything);
        statement.offset = Some(10);
        let rows = session.fetch(&statement).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_column_projection_keeps_only_named_fields() {
        let session = seeded();
        let statement = select(eq("name", json!("a")))
            .with_columns(ColumnSet::Fields(vec!["name".to_string()]));
        let rows = session.fetch(&statement).unwrap();
        assert_eq!(rows, vec![json!({"name": "a"})]);
    }

    #[test]
    fn test_count_and_exists() {
        let session = seeded();
        let count_stmt = CountStatement {
            path: EntityPath::new("cases"),
            criteria: Criteria::Not(Box::new(eq("name", json!("b")))),
        };
        assert_eq!(session.count(&count_stmt).unwrap(), 2);
        assert!(session.exists(&count_stmt).unwrap());

        let none = CountStatement {
            path: EntityPath::new("cases"),
            criteria: eq("name", json!("zzz")),
        };
        assert_eq!(session.count(&none).unwrap(), 0);
        assert!(!session.exists(&none).unwrap());
    }

    #[test]
    fn test_unknown_path_is_empty_not_an_error() {
        let session = MemorySession::new();
        let statement = SelectStatement::new(EntityPath::new("missing"), eq("a", json!(1)));
        assert!(session.fetch(&statement).unwrap().is_empty());
    }
}
