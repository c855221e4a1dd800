//! Adaptive and parametric functions

use algorama_catalog::FunctionCatalog;
use algorama_core::{Category, Real};

/// Below this magnitude `sinc` returns its limit value
const SINC_EPSILON: Real = 1e-10;

/// Softmax of a single logit, unnormalized
pub fn softmax_single(z: Real) -> Real {
    z.exp()
}

pub fn softsign(z: Real) -> Real {
    z / (1.0 + z.abs())
}

pub fn bent_identity(z: Real) -> Real {
    ((z * z + 1.0).sqrt() - 1.0) / 2.0 + z
}

pub fn arc_tan(z: Real) -> Real {
    z.atan()
}

pub fn arc_sinh(z: Real) -> Real {
    (z + (z * z + 1.0).sqrt()).ln()
}

/// Unnormalized sinc, `sin(z) / z` with `sinc(0) = 1`
pub fn sinc(z: Real) -> Real {
    if z.abs() < SINC_EPSILON {
        return 1.0;
    }
    z.sin() / z
}

pub fn sech(z: Real) -> Real {
    2.0 / (z.exp() + (-z).exp())
}

pub fn load(catalog: FunctionCatalog) -> FunctionCatalog {
    let cat = Category::Adaptive;
    catalog
        .with_function("SoftmaxSingle", softmax_single, cat, "e^z")
        .with_function("Softsign", softsign, cat, "z / (1 + |z|)")
        .with_function("BentIdentity", bent_identity, cat, "(sqrt(z^2 + 1) - 1) / 2 + z")
        .with_function("ArcTan", arc_tan, cat, "atan(z)")
        .with_function("ArcSinh", arc_sinh, cat, "ln(z + sqrt(z^2 + 1))")
        .with_function("Sinc", sinc, cat, "sin(z) / z")
        .with_function("Sech", sech, cat, "2 / (e^z + e^(-z))")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sinc_limit() {
        assert_eq!(sinc(0.0), 1.0);
        assert_eq!(sinc(1e-12), 1.0);
        assert!(sinc(std::f64::consts::PI).abs() < 1e-15);
    }

    #[test]
    fn test_softsign_bounds() {
        assert!((softsign(1.0) - 0.5).abs() < 1e-12);
        assert!(softsign(1e9) < 1.0);
        assert!(softsign(-1e9) > -1.0);
    }

    #[test]
    fn test_arc_sinh_matches_std() {
        for x in [-3.0, -0.5, 0.0, 0.5, 3.0] {
            assert!((arc_sinh(x) - f64::asinh(x)).abs() < 1e-12, "x = {}", x);
        }
    }

    #[test]
    fn test_sech() {
        assert_eq!(sech(0.0), 1.0);
        assert!((sech(1.0) - 1.0 / 1.0_f64.cosh()).abs() < 1e-12);
    }

    #[test]
    fn test_bent_identity_at_zero() {
        assert_eq!(bent_identity(0.0), 0.0);
    }
}
