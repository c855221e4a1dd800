//! Gaussian, radial basis and periodic functions

use super::sigmoid::sigmoid;
use algorama_catalog::FunctionCatalog;
use algorama_core::{Category, Real};

pub fn gaussian(z: Real) -> Real {
    (-z * z).exp()
}

pub fn gaussian_elu(z: Real) -> Real {
    z * (-z * z / 2.0).exp()
}

/// Growing Cosine Unit
pub fn gcu(z: Real) -> Real {
    z * z.cos()
}

pub fn sine_activation(z: Real) -> Real {
    z.sin()
}

pub fn cosine_activation(z: Real) -> Real {
    z.cos()
}

pub fn gaussian_silu(z: Real) -> Real {
    z * (-z * z).exp() + sigmoid(z)
}

pub fn double_gaussian(z: Real) -> Real {
    (-z * z).exp() - (-z * z / 2.0).exp()
}

pub fn load(catalog: FunctionCatalog) -> FunctionCatalog {
    let cat = Category::Gaussian;
    catalog
        .with_function("Gaussian", gaussian, cat, "e^(-z^2)")
        .with_function("GaussianELU", gaussian_elu, cat, "z * e^(-z^2 / 2)")
        .with_function("GCU", gcu, cat, "z * cos(z)")
        .with_function("SineActivation", sine_activation, cat, "sin(z)")
        .with_function("CosineActivation", cosine_activation, cat, "cos(z)")
        .with_function("GaussianSiLU", gaussian_silu, cat, "z * e^(-z^2) + sigmoid(z)")
        .with_function("DoubleGaussian", double_gaussian, cat, "e^(-z^2) - e^(-z^2 / 2)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaussian_even_with_peak_at_zero() {
        assert_eq!(gaussian(0.0), 1.0);
        let mut x = 0.25;
        while x <= 4.0 {
            assert_eq!(gaussian(x), gaussian(-x));
            assert!(gaussian(x) < 1.0);
            x += 0.25;
        }
    }

    #[test]
    fn test_double_gaussian_non_positive() {
        assert_eq!(double_gaussian(0.0), 0.0);
        assert!(double_gaussian(1.0) < 0.0);
    }

    #[test]
    fn test_odd_functions() {
        for x in [0.3, 1.0, 2.5] {
            assert!((gaussian_elu(x) + gaussian_elu(-x)).abs() < 1e-12);
            assert!((gcu(x) + gcu(-x)).abs() < 1e-12);
        }
    }
}
