//! Algorama Function Catalog
//!
//! Provides:
//! - `FunctionCatalog`: case-insensitive registry of unary functions with
//!   stable insertion-order IDs, categories and a packed name export
//! - `Evaluator`: transformed evaluation, centered-difference derivatives
//!   and curve sweeps over catalog entries

mod eval;
mod registry;
mod traits;

pub use eval::{
    BoundFunction, Evaluator, PlotPoint, Sweep, Transform, DEFAULT_DERIVATIVE_STEP, DEFAULT_SAMPLES,
    DEFAULT_X_MAX, DEFAULT_X_MIN,
};
pub use registry::{normalize_name, FunctionCatalog};
pub use traits::{CategorySummary, FunctionEntry, FunctionSummary, SharedFunction, UnaryFunction};

/// Re-export core types for catalog users
pub mod prelude {
    pub use crate::{
        BoundFunction, Evaluator, FunctionCatalog, FunctionEntry, FunctionSummary, PlotPoint, Sweep,
        Transform, UnaryFunction,
    };
    pub use algorama_core::prelude::*;
}
