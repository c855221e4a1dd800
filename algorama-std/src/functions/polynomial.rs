//! Polynomial functions

use algorama_catalog::FunctionCatalog;
use algorama_core::{Category, Real};

pub fn cube(z: Real) -> Real {
    z * z * z
}

pub fn square(z: Real) -> Real {
    z * z
}

/// Positive half of the concatenated ReLU pair
pub fn crelu(z: Real) -> Real {
    z.max(0.0)
}

pub fn quartic(z: Real) -> Real {
    let sq = z * z;
    sq * sq
}

pub fn load(catalog: FunctionCatalog) -> FunctionCatalog {
    let cat = Category::Polynomial;
    catalog
        .with_function("Cube", cube, cat, "z^3")
        .with_function("Square", square, cat, "z^2")
        .with_function("CReLU", crelu, cat, "max(0, z)")
        .with_function("Quartic", quartic, cat, "z^4")
}
