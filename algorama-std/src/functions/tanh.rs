//! Hyperbolic tangent and variants

use algorama_catalog::FunctionCatalog;
use algorama_core::{Category, Real};

pub fn tanh(z: Real) -> Real {
    z.tanh()
}

pub fn hard_tanh(z: Real) -> Real {
    z.clamp(-1.0, 1.0)
}

pub fn lecun_tanh(z: Real) -> Real {
    1.7159 * (0.6667 * z).tanh()
}

pub fn scaled_tanh(z: Real) -> Real {
    const A: Real = 1.7159;
    const B: Real = 2.0 / 3.0;
    A * (B * z).tanh()
}

pub fn penalized_tanh(z: Real) -> Real {
    const A: Real = 0.25;
    if z >= 0.0 {
        z.tanh()
    } else {
        A * z.tanh()
    }
}

pub fn tanh_shrink(z: Real) -> Real {
    z - z.tanh()
}

/// Inverse hyperbolic tangent, input clamped to ±0.999 to stay finite
pub fn arc_tanh(z: Real) -> Real {
    let clamped = z.clamp(-0.999, 0.999);
    0.5 * ((1.0 + clamped) / (1.0 - clamped)).ln()
}

pub fn load(catalog: FunctionCatalog) -> FunctionCatalog {
    let cat = Category::TanhFamily;
    catalog
        .with_function("Tanh", tanh, cat, "tanh(z)")
        .with_function("HardTanh", hard_tanh, cat, "clamp(z, -1, 1)")
        .with_function("LeCunTanh", lecun_tanh, cat, "1.7159 * tanh(0.6667z)")
        .with_function("ScaledTanh", scaled_tanh, cat, "1.7159 * tanh(2z / 3)")
        .with_function("PenalizedTanh", penalized_tanh, cat, "z >= 0 ? tanh(z) : 0.25 * tanh(z)")
        .with_function("TanhShrink", tanh_shrink, cat, "z - tanh(z)")
        .with_function("ArcTanh", arc_tanh, cat, "0.5 * ln((1 + z) / (1 - z)), |z| <= 0.999")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tanh_basic_values() {
        assert!(tanh(0.0).abs() < 1e-10);
        assert!((tanh(10.0) - 1.0).abs() < 1e-4);
        assert!((tanh(-10.0) + 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_tanh_odd_and_bounded() {
        let mut x = -10.0;
        while x <= 10.0 {
            assert!((tanh(-x) + tanh(x)).abs() < 1e-10, "x = {}", x);
            assert!((-1.0..=1.0).contains(&tanh(x)), "x = {}", x);
            x += 0.5;
        }
    }

    #[test]
    fn test_scaled_tanh_zero() {
        assert!(scaled_tanh(0.0).abs() < 1e-10);
        assert!((scaled_tanh(100.0) - 1.7159).abs() < 1e-10);
    }

    #[test]
    fn test_penalized_tanh_negative_side() {
        assert!((penalized_tanh(-1.0) - 0.25 * (-1.0_f64).tanh()).abs() < 1e-12);
        assert_eq!(penalized_tanh(1.0), 1.0_f64.tanh());
    }

    #[test]
    fn test_arc_tanh_clamped() {
        assert!(arc_tanh(0.0).abs() < 1e-12);
        assert!(arc_tanh(5.0).is_finite());
        assert_eq!(arc_tanh(5.0), arc_tanh(0.999));
        assert!((arc_tanh(0.5) - 0.5_f64.atanh()).abs() < 1e-12);
    }
}
