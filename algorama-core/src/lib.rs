//! Algorama Core - Fundamental types
//!
//! This crate provides the core types used throughout Algorama:
//! - `Real`: the scalar every catalog function maps to and from
//! - `FunctionId`: stable insertion-order identity of a registered function
//! - `Category`: closed taxonomy used for filtered listing
//! - `CatalogError`: structured lookup and argument errors

mod category;
mod error;
mod id;

pub use category::Category;
pub use error::{codes, CatalogError};
pub use id::FunctionId;

/// Scalar type of every catalog function
pub type Real = f64;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::codes;
    pub use crate::{CatalogError, Category, FunctionId, Real};
}
