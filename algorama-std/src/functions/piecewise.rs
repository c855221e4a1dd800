//! Piecewise linear functions

use algorama_catalog::FunctionCatalog;
use algorama_core::{Category, Real};

pub fn identity(z: Real) -> Real {
    z
}

pub fn binary_step(z: Real) -> Real {
    if z >= 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Sign with `sign(0) = 0` (unlike `f64::signum`)
pub fn sign(z: Real) -> Real {
    if z > 0.0 {
        1.0
    } else if z < 0.0 {
        -1.0
    } else {
        0.0
    }
}

pub fn absolute_value(z: Real) -> Real {
    z.abs()
}

/// One-dimensional maxout over two fixed affine pieces
pub fn maxout(z: Real) -> Real {
    z.max(0.5 * z + 0.25)
}

pub fn symmetric_saturating(z: Real) -> Real {
    z.clamp(-1.0, 1.0)
}

pub fn load(catalog: FunctionCatalog) -> FunctionCatalog {
    let cat = Category::Piecewise;
    catalog
        .with_function("Identity", identity, cat, "z")
        .with_function("BinaryStep", binary_step, cat, "z >= 0 ? 1 : 0")
        .with_function("Sign", sign, cat, "sign(z)")
        .with_function("AbsoluteValue", absolute_value, cat, "|z|")
        .with_function("Maxout", maxout, cat, "max(z, 0.5z + 0.25)")
        .with_function("SymmetricSaturating", symmetric_saturating, cat, "clamp(z, -1, 1)")
}
