//! Catalog entry types

use algorama_core::{Category, FunctionId, Real};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Pure scalar function stored in the catalog.
///
/// Implementations must not carry mutable state: the same entry is invoked
/// concurrently from every reader.
pub trait UnaryFunction: Send + Sync {
    fn call(&self, x: Real) -> Real;
}

impl<F> UnaryFunction for F
where
    F: Fn(Real) -> Real + Send + Sync,
{
    fn call(&self, x: Real) -> Real {
        self(x)
    }
}

/// Shared handle to a registered callable
pub type SharedFunction = Arc<dyn UnaryFunction>;

/// One registered function plus its metadata
#[derive(Clone)]
pub struct FunctionEntry {
    pub(crate) name: String,
    pub(crate) key: String,
    pub(crate) id: FunctionId,
    pub(crate) func: SharedFunction,
    pub(crate) category: Category,
    pub(crate) description: String,
}

impl FunctionEntry {
    /// Display name, casing as registered
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized lookup key
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn id(&self) -> FunctionId {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Handle to the raw callable, for repeated evaluation without the catalog
    pub fn function(&self) -> SharedFunction {
        Arc::clone(&self.func)
    }

    /// Invoke the raw callable, no transform applied
    pub fn call(&self, x: Real) -> Real {
        self.func.call(x)
    }

    pub fn summary(&self) -> FunctionSummary {
        FunctionSummary {
            id: self.id,
            name: self.name.clone(),
            key: self.key.clone(),
            category: self.category,
            category_label: self.category.label(),
            description: self.description.clone(),
        }
    }
}

impl fmt::Debug for FunctionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionEntry")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("category", &self.category)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Serializable metadata for listing and help surfaces
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionSummary {
    pub id: FunctionId,
    pub name: String,
    pub key: String,
    pub category: Category,
    pub category_label: &'static str,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A category with the number of entries tagged with it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
}
