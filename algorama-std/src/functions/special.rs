//! Special and rarely used functions

use super::adaptive::sinc;
use super::sigmoid::sigmoid;
use algorama_catalog::FunctionCatalog;
use algorama_core::{Category, Real};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

/// Standard normal CDF
pub fn probit(z: Real) -> Real {
    0.5 * (1.0 + libm::erf(z * FRAC_1_SQRT_2))
}

/// Complementary log-log
pub fn cloglog(z: Real) -> Real {
    1.0 - (-z.exp()).exp()
}

pub fn loglog(z: Real) -> Real {
    (-(-z).exp()).exp()
}

pub fn bimodal_sigmoid(z: Real) -> Real {
    0.5 * (sigmoid(z) + sigmoid(z - 2.0))
}

pub fn shifted_scaled_sigmoid(z: Real) -> Real {
    1.0 / (1.0 + (-0.2 * (z - 6.0)).exp())
}

pub fn variant_sigmoid(z: Real) -> Real {
    1.0 / (1.0 + (-5.0 * z).exp()) - 0.5
}

pub fn bipolar_sigmoid(z: Real) -> Real {
    let e = (-z).exp();
    (1.0 - e) / (1.0 + e)
}

pub fn gompertz(z: Real) -> Real {
    (-(-z).exp()).exp()
}

pub fn elliott(z: Real) -> Real {
    z / (1.0 + z.abs())
}

pub fn soft_clipping(z: Real) -> Real {
    const ALPHA: Real = 0.5;
    (1.0 / ALPHA) * ((1.0 + (ALPHA * z).exp()) / (1.0 + (ALPHA * (z - 1.0)).exp())).ln()
}

pub fn hexpo(z: Real) -> Real {
    if z >= 0.0 {
        1.0 - (-z).exp()
    } else {
        z.exp() - 1.0
    }
}

/// Non-monotonic cubic unit
pub fn ncu(z: Real) -> Real {
    z - z * z * z
}

/// Decaying sine unit
pub fn dsu(z: Real) -> Real {
    FRAC_PI_2 * (sinc(z - PI) - sinc(z + PI))
}

pub fn serlu(z: Real) -> Real {
    const LAMBDA: Real = 1.07862;
    const ALPHA: Real = 2.90427;
    if z >= 0.0 {
        LAMBDA * z
    } else {
        LAMBDA * ALPHA * (z.exp() - 1.0)
    }
}

/// Padé activation unit with fixed low-order coefficients
pub fn pau(z: Real) -> Real {
    let q = 0.5 * z * z;
    (z + q) / (1.0 + z.abs() + q)
}

pub fn snake(z: Real) -> Real {
    let s = z.sin();
    z + s * s
}

pub fn load(catalog: FunctionCatalog) -> FunctionCatalog {
    let cat = Category::Special;
    catalog
        .with_function("Probit", probit, cat, "0.5 * (1 + erf(z / sqrt(2)))")
        .with_function("CLogLog", cloglog, cat, "1 - e^(-e^z)")
        .with_function("LogLog", loglog, cat, "e^(-e^(-z))")
        .with_function("BimodalSigmoid", bimodal_sigmoid, cat, "(sigmoid(z) + sigmoid(z - 2)) / 2")
        .with_function("ShiftedScaledSigmoid", shifted_scaled_sigmoid, cat, "1 / (1 + e^(-0.2(z - 6)))")
        .with_function("VariantSigmoid", variant_sigmoid, cat, "1 / (1 + e^(-5z)) - 0.5")
        .with_function("BipolarSigmoid", bipolar_sigmoid, cat, "(1 - e^(-z)) / (1 + e^(-z))")
        .with_function("Gompertz", gompertz, cat, "e^(-e^(-z))")
        .with_function("Elliott", elliott, cat, "z / (1 + |z|)")
        .with_function("SoftClipping", soft_clipping, cat, "2 * ln((1 + e^(0.5z)) / (1 + e^(0.5(z - 1))))")
        .with_function("Hexpo", hexpo, cat, "z >= 0 ? 1 - e^(-z) : e^z - 1")
        .with_function("NCU", ncu, cat, "z - z^3")
        .with_function("DSU", dsu, cat, "pi/2 * (sinc(z - pi) - sinc(z + pi))")
        .with_function("SERLU", serlu, cat, "z >= 0 ? 1.07862z : 1.07862 * 2.90427 * (e^z - 1)")
        .with_function("PAU", pau, cat, "(z + 0.5z^2) / (1 + |z| + 0.5z^2)")
        .with_function("Snake", snake, cat, "z + sin^2(z)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probit_center_and_tails() {
        assert!((probit(0.0) - 0.5).abs() < 1e-12);
        assert!(probit(-8.0) < 1e-10);
        assert!(probit(8.0) > 1.0 - 1e-10);
    }

    #[test]
    fn test_bimodal_sigmoid_bounded() {
        let mut x = -20.0;
        while x <= 20.0 {
            let y = bimodal_sigmoid(x);
            assert!((0.0..=1.0).contains(&y), "x = {}", x);
            x += 0.5;
        }
    }

    #[test]
    fn test_bipolar_matches_tanh_half() {
        for x in [-3.0, -0.5, 0.0, 1.0, 4.0] {
            assert!((bipolar_sigmoid(x) - (x / 2.0).tanh()).abs() < 1e-12, "x = {}", x);
        }
    }

    #[test]
    fn test_gompertz_is_loglog() {
        assert_eq!(gompertz(0.7), loglog(0.7));
        assert!((cloglog(0.0) - (1.0 - (-1.0_f64).exp())).abs() < 1e-12);
    }

    #[test]
    fn test_zero_crossings() {
        assert_eq!(hexpo(0.0), 0.0);
        assert_eq!(ncu(1.0), 0.0);
        assert_eq!(dsu(0.0), 0.0);
        assert_eq!(snake(0.0), 0.0);
        assert_eq!(pau(0.0), 0.0);
        assert_eq!(variant_sigmoid(0.0), 0.0);
    }

    #[test]
    fn test_serlu_branches() {
        assert!((serlu(1.0) - 1.07862).abs() < 1e-12);
        assert_eq!(serlu(0.0), 0.0);
        let expected = 1.07862 * 2.90427 * ((-1.0_f64).exp() - 1.0);
        assert!((serlu(-1.0) - expected).abs() < 1e-12);
        assert!((serlu(-1.0) + 1.980183).abs() < 1e-6);
        assert!((serlu(-2.5) + 2.875464).abs() < 1e-6);
        // saturates at -lambda * alpha
        assert!((serlu(-50.0) + 1.07862 * 2.90427).abs() < 1e-12);
    }
}
