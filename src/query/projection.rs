//! Projections: field expressions bound to a shape factory.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::translate::TranslationError;

/// The runtime-checkable description of a projection: which fields it
/// binds and how many values its shape factory expects. Translators
/// validate the two against each other; the composer does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionSpec {
    fields: Vec<String>,
    arity: usize,
}

impl ProjectionSpec {
    /// Describes a projection whose factory expects one value per field
    pub fn new(fields: Vec<String>) -> Self {
        let arity = fields.len();
        Self { fields, arity }
    }

    /// Bound field expressions, in the order values reach the factory
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of values the shape factory expects
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub(crate) fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }
}

type ShapeFactory<P> = dyn Fn(&[Value]) -> Result<P, TranslationError> + Send + Sync;

/// Transforms matched rows into instances of a target shape `P`.
///
/// A projection pairs a list of field expressions with the factory that
/// turns the projected values into a `P`. Built once by the caller and
/// passed by reference into composition.
pub struct Projection<P> {
    spec: ProjectionSpec,
    shape: Arc<ShapeFactory<P>>,
}

impl<P> Projection<P> {
    /// Binds field expressions to a shape factory.
    ///
    /// The factory receives the projected values in field order, exactly
    /// one per bound field.
    pub fn new<I, S, F>(fields: I, shape: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&[Value]) -> Result<P, TranslationError> + Send + Sync + 'static,
    {
        let fields = fields.into_iter().map(Into::into).collect();
        Self {
            spec: ProjectionSpec::new(fields),
            shape: Arc::new(shape),
        }
    }

    /// Declares a factory arity different from the bound field count.
    /// Translators reject the mismatch before composing a statement.
    pub fn with_arity(mut self, arity: usize) -> Self {
        self.spec = self.spec.with_arity(arity);
        self
    }

    /// The runtime descriptor translators validate against
    pub fn spec(&self) -> &ProjectionSpec {
        &self.spec
    }

    pub(crate) fn shape(&self) -> Arc<ShapeFactory<P>> {
        Arc::clone(&self.shape)
    }
}

impl<P> Clone for Projection<P> {
    fn clone(&self) -> Self {
        Self {
            spec: self.spec.clone(),
            shape: Arc::clone(&self.shape),
        }
    }
}

impl<P> fmt::Debug for Projection<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Projection")
            .field("fields", &self.spec.fields)
            .field("arity", &self.spec.arity)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_spec_arity_defaults_to_field_count() {
        let projection = Projection::new(["name", "age"], |values: &[Value]| {
            Ok((values[0].clone(), values[1].clone()))
        });
        assert_eq!(projection.spec().fields(), ["name", "age"]);
        assert_eq!(projection.spec().arity(), 2);
    }

    #[test]
    fn test_with_arity_overrides_declaration() {
        let projection =
            Projection::new(["name"], |values: &[Value]| Ok(values[0].clone())).with_arity(3);
        assert_eq!(projection.spec().arity(), 3);
        assert_eq!(projection.spec().fields().len(), 1);
    }

    #[test]
    fn test_factory_runs_in_field_order() {
        let projection = Projection::new(["a", "b"], |values: &[Value]| {
            Ok(format!("{}/{}", values[0], values[1]))
        });
        let shaped = (projection.shape())(&[json!(1), json!(2)]).unwrap();
        assert_eq!(shaped, "1/2");
    }
}
