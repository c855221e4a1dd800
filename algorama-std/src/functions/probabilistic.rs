//! Cumulative distribution functions

use super::sigmoid::sigmoid;
use super::special::probit;
use algorama_catalog::FunctionCatalog;
use algorama_core::{Category, Real};
use std::f64::consts::PI;

pub fn logistic_cdf(z: Real) -> Real {
    sigmoid(z)
}

pub fn normal_cdf(z: Real) -> Real {
    probit(z)
}

pub fn cauchy_cdf(z: Real) -> Real {
    z.atan() / PI + 0.5
}

pub fn gumbel_cdf(z: Real) -> Real {
    (-(-z).exp()).exp()
}

pub fn weibull_like(z: Real) -> Real {
    if z < 0.0 {
        0.0
    } else {
        1.0 - (-z * z).exp()
    }
}

pub fn load(catalog: FunctionCatalog) -> FunctionCatalog {
    let cat = Category::Probabilistic;
    catalog
        .with_function("LogisticCDF", logistic_cdf, cat, "1 / (1 + e^(-z))")
        .with_function("NormalCDF", normal_cdf, cat, "0.5 * (1 + erf(z / sqrt(2)))")
        .with_function("CauchyCDF", cauchy_cdf, cat, "atan(z) / pi + 0.5")
        .with_function("GumbelCDF", gumbel_cdf, cat, "e^(-e^(-z))")
        .with_function("WeibullLike", weibull_like, cat, "z < 0 ? 0 : 1 - e^(-z^2)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cdfs_monotone_in_unit_interval() {
        let cdfs: [fn(Real) -> Real; 5] = [logistic_cdf, normal_cdf, cauchy_cdf, gumbel_cdf, weibull_like];
        for cdf in cdfs {
            let mut prev = cdf(-10.0);
            let mut x = -9.5;
            while x <= 10.0 {
                let y = cdf(x);
                assert!((0.0..=1.0).contains(&y), "x = {}", x);
                assert!(y >= prev, "x = {}", x);
                prev = y;
                x += 0.5;
            }
        }
    }

    #[test]
    fn test_medians() {
        assert_eq!(logistic_cdf(0.0), 0.5);
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-12);
        assert_eq!(cauchy_cdf(0.0), 0.5);
        assert_eq!(weibull_like(-1.0), 0.0);
    }
}
