//! Gating functions used in transformer blocks
//!
//! The gated linear units are collapsed to one input, so the gate and the
//! value are the same `z`.

use super::relu::{gelu, relu};
use super::sigmoid::{sigmoid, swish};
use algorama_catalog::FunctionCatalog;
use algorama_core::{Category, Real};
use std::f64::consts::SQRT_2;

pub fn quick_gelu(z: Real) -> Real {
    z * sigmoid(1.702 * z)
}

pub fn geglu(z: Real) -> Real {
    z * gelu(z)
}

pub fn reglu(z: Real) -> Real {
    z * relu(z)
}

pub fn swiglu(z: Real) -> Real {
    z * swish(z)
}

/// Laplace attention: a normal CDF centered at `1/sqrt(2)`
pub fn laplace(z: Real) -> Real {
    const MU: Real = 0.707107;
    const SIGMA: Real = 0.282095;
    0.5 * (1.0 + libm::erf((z - MU) / (SIGMA * SQRT_2)))
}

pub fn load(catalog: FunctionCatalog) -> FunctionCatalog {
    let cat = Category::Attention;
    catalog
        .with_function("QuickGELU", quick_gelu, cat, "z * sigmoid(1.702z)")
        .with_function("GEGLU", geglu, cat, "z * GELU(z)")
        .with_function("ReGLU", reglu, cat, "z * ReLU(z)")
        .with_function("SwiGLU", swiglu, cat, "z * swish(z)")
        .with_function("Laplace", laplace, cat, "0.5 * (1 + erf((z - 0.707107) / (0.282095 * sqrt(2))))")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_gelu_tracks_gelu() {
        for x in [-2.0, -0.5, 0.0, 0.5, 2.0] {
            assert!((quick_gelu(x) - gelu(x)).abs() < 0.03, "x = {}", x);
        }
    }

    #[test]
    fn test_reglu_is_square_on_positive_side() {
        assert_eq!(reglu(3.0), 9.0);
        assert_eq!(reglu(-3.0), 0.0);
    }

    #[test]
    fn test_laplace_midpoint() {
        assert!((laplace(0.707107) - 0.5).abs() < 1e-12);
        assert!(laplace(-5.0) < 1e-10);
        assert!(laplace(5.0) > 1.0 - 1e-10);
    }
}
