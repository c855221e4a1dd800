//! Sigmoid and sigmoid-gated functions

use algorama_catalog::FunctionCatalog;
use algorama_core::{Category, Real};

/// Logistic function `1 / (1 + e^-z)`
pub fn sigmoid(z: Real) -> Real {
    1.0 / (1.0 + (-z).exp())
}

pub fn hard_sigmoid(z: Real) -> Real {
    if z <= -2.5 {
        return 0.0;
    }
    if z >= 2.5 {
        return 1.0;
    }
    0.2 * z + 0.5
}

/// Swish / SiLU
pub fn swish(z: Real) -> Real {
    z * sigmoid(z)
}

pub fn hard_swish(z: Real) -> Real {
    if z <= -3.0 {
        return 0.0;
    }
    if z >= 3.0 {
        return z;
    }
    z * (z + 3.0) / 6.0
}

pub fn e_swish(z: Real) -> Real {
    const BETA: Real = 1.25;
    BETA * z * sigmoid(z)
}

pub fn flatten_t_swish(z: Real) -> Real {
    const T: Real = 1.0;
    if z < 0.0 {
        return 0.0;
    }
    z * sigmoid(z) + T
}

/// Derivative of SiLU, used as an activation in its own right
pub fn d_silu(z: Real) -> Real {
    let sig = sigmoid(z);
    sig * (1.0 + z * (1.0 - sig))
}

pub fn parametric_swish(z: Real) -> Real {
    const BETA: Real = 1.5;
    z * sigmoid(BETA * z)
}

pub fn load(catalog: FunctionCatalog) -> FunctionCatalog {
    let cat = Category::SigmoidFamily;
    catalog
        .with_function("Sigmoid", sigmoid, cat, "1 / (1 + e^(-z))")
        .with_function("HardSigmoid", hard_sigmoid, cat, "clamp(0.2z + 0.5, 0, 1)")
        .with_function("Swish", swish, cat, "z * sigmoid(z)")
        .with_function("HardSwish", hard_swish, cat, "z * relu6(z + 3) / 6")
        .with_function("ESwish", e_swish, cat, "1.25 * z * sigmoid(z)")
        .with_function("FlattenTSwish", flatten_t_swish, cat, "z >= 0 ? z * sigmoid(z) + 1 : 0")
        .with_function("dSiLU", d_silu, cat, "sigmoid(z) * (1 + z * (1 - sigmoid(z)))")
        .with_function("ParametricSwish", parametric_swish, cat, "z * sigmoid(1.5z)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_basic_values() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-10);
        assert!((sigmoid(10.0) - 1.0).abs() < 1e-4);
        assert!(sigmoid(-10.0).abs() < 1e-4);
    }

    #[test]
    fn test_sigmoid_symmetry() {
        let mut x = -5.0;
        while x <= 5.0 {
            assert!((sigmoid(x) + sigmoid(-x) - 1.0).abs() < 1e-10, "x = {}", x);
            x += 0.5;
        }
    }

    #[test]
    fn test_sigmoid_monotonic() {
        let mut x = -5.0;
        while x < 5.0 {
            assert!(sigmoid(x) < sigmoid(x + 0.1), "x = {}", x);
            x += 0.5;
        }
    }

    #[test]
    fn test_hard_sigmoid_saturates() {
        assert_eq!(hard_sigmoid(-3.0), 0.0);
        assert_eq!(hard_sigmoid(3.0), 1.0);
        assert!((hard_sigmoid(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_hard_swish_matches_swish_shape() {
        assert_eq!(hard_swish(-4.0), 0.0);
        assert_eq!(hard_swish(4.0), 4.0);
        assert_eq!(hard_swish(0.0), 0.0);
        assert!((hard_swish(1.0) - 4.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_d_silu_at_zero() {
        assert!((d_silu(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_flatten_t_swish_offset() {
        assert_eq!(flatten_t_swish(-1.0), 0.0);
        assert!((flatten_t_swish(0.0) - 1.0).abs() < 1e-12);
    }
}
