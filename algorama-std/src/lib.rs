//! Algorama Standard Library
//!
//! The built-in activation functions, registered family by family. IDs follow
//! registration order, so the order of the `load` calls below is part of the
//! public contract: `Sigmoid` is always ID 0.

pub mod functions;

use algorama_catalog::FunctionCatalog;
use functions::*;

/// Register every built-in function into `catalog`
pub fn load_standard_library(catalog: FunctionCatalog) -> FunctionCatalog {
    let catalog = sigmoid::load(catalog);
    let catalog = tanh::load(catalog);
    let catalog = relu::load(catalog);
    let catalog = exponential::load(catalog);
    let catalog = gaussian::load(catalog);
    let catalog = adaptive::load(catalog);
    let catalog = piecewise::load(catalog);
    let catalog = smooth::load(catalog);
    let catalog = special::load(catalog);
    let catalog = modern::load(catalog);
    let catalog = attention::load(catalog);
    let catalog = polynomial::load(catalog);
    let catalog = probabilistic::load(catalog);
    tracing::debug!(functions = catalog.len(), "loaded standard library");
    catalog
}

/// Create a catalog holding the standard library
pub fn standard_catalog() -> FunctionCatalog {
    load_standard_library(FunctionCatalog::new())
}
