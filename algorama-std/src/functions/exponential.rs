//! Exponential and logarithmic functions

use super::sigmoid::sigmoid;
use algorama_catalog::FunctionCatalog;
use algorama_core::{Category, Real};

/// Exponential Linear Squashing
pub fn elish(z: Real) -> Real {
    if z >= 0.0 {
        z / (1.0 + (-z).exp())
    } else {
        (z.exp() - 1.0) / (1.0 + (-z).exp())
    }
}

pub fn hard_elish(z: Real) -> Real {
    let gate = ((z + 1.0) / 2.0).clamp(0.0, 1.0);
    if z >= 0.0 {
        z * gate
    } else {
        (z.exp() - 1.0) * gate
    }
}

/// Soft exponential with a fixed positive alpha
pub fn soft_exponential(z: Real) -> Real {
    const ALPHA: Real = 0.5;
    ((ALPHA * z).exp() - 1.0) / ALPHA + ALPHA
}

pub fn log_sigmoid(z: Real) -> Real {
    sigmoid(z).ln()
}

pub fn log1p(z: Real) -> Real {
    z.max(-0.999).ln_1p()
}

pub fn exponential(z: Real) -> Real {
    z.exp()
}

pub fn load(catalog: FunctionCatalog) -> FunctionCatalog {
    let cat = Category::Exponential;
    catalog
        .with_function("ELiSH", elish, cat, "z >= 0 ? z * sigmoid(z) : (e^z - 1) * sigmoid(z)")
        .with_function("HardELiSH", hard_elish, cat, "(z >= 0 ? z : e^z - 1) * clamp((z + 1) / 2, 0, 1)")
        .with_function("SoftExponential", soft_exponential, cat, "(e^(0.5z) - 1) / 0.5 + 0.5")
        .with_function("LogSigmoid", log_sigmoid, cat, "ln(sigmoid(z))")
        .with_function("Log1p", log1p, cat, "ln(1 + z), z >= -0.999")
        .with_function("Exponential", exponential, cat, "e^z")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elish_halves() {
        assert!((elish(1.0) - sigmoid(1.0)).abs() < 1e-12);
        assert!((elish(-1.0) - ((-1.0_f64).exp() - 1.0) * sigmoid(-1.0)).abs() < 1e-12);
        assert_eq!(elish(0.0), 0.0);
    }

    #[test]
    fn test_hard_elish_gate() {
        assert_eq!(hard_elish(-2.0), 0.0);
        assert_eq!(hard_elish(3.0), 3.0);
    }

    #[test]
    fn test_soft_exponential_at_zero() {
        assert!((soft_exponential(0.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_log_sigmoid_never_positive() {
        let mut x = -10.0;
        while x <= 10.0 {
            assert!(log_sigmoid(x) <= 0.0, "x = {}", x);
            x += 1.0;
        }
        assert!((log_sigmoid(0.0) + 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_log1p_clamped() {
        assert!(log1p(-5.0).is_finite());
        assert_eq!(log1p(-5.0), log1p(-0.999));
        assert_eq!(log1p(0.0), 0.0);
    }

    #[test]
    fn test_exponential_overflows_to_infinity() {
        assert_eq!(exponential(0.0), 1.0);
        assert_eq!(exponential(1000.0), Real::INFINITY);
    }
}
