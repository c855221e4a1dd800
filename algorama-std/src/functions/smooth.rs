//! Smooth approximations of non-smooth functions

use algorama_catalog::FunctionCatalog;
use algorama_core::{Category, Real};

pub fn smooth_relu(z: Real) -> Real {
    const BETA: Real = 1.0;
    (BETA * z).exp().ln_1p() / BETA
}

pub fn smooth_abs(z: Real) -> Real {
    const EPS: Real = 0.1;
    (z * z + EPS).sqrt()
}

pub fn soft_shrink(z: Real) -> Real {
    const LAMBDA: Real = 0.5;
    if z > LAMBDA {
        z - LAMBDA
    } else if z < -LAMBDA {
        z + LAMBDA
    } else {
        0.0
    }
}

pub fn hard_shrink(z: Real) -> Real {
    const LAMBDA: Real = 0.5;
    if z > LAMBDA || z < -LAMBDA {
        z
    } else {
        0.0
    }
}

pub fn square_plus(z: Real) -> Real {
    const B: Real = 1.0;
    (z + (z * z + B).sqrt()) / 2.0
}

/// Smooth ReLU with a quadratic blend on `[-beta, beta]`
pub fn smelu(z: Real) -> Real {
    const BETA: Real = 0.5;
    if z >= BETA {
        z
    } else if z <= -BETA {
        0.0
    } else {
        (z + BETA) * (z + BETA) / (4.0 * BETA)
    }
}

pub fn load(catalog: FunctionCatalog) -> FunctionCatalog {
    let cat = Category::Smooth;
    catalog
        .with_function("SmoothReLU", smooth_relu, cat, "ln(1 + e^z)")
        .with_function("SmoothAbs", smooth_abs, cat, "sqrt(z^2 + 0.1)")
        .with_function("SoftShrink", soft_shrink, cat, "z - clamp(z, -0.5, 0.5)")
        .with_function("HardShrink", hard_shrink, cat, "|z| > 0.5 ? z : 0")
        .with_function("SquarePlus", square_plus, cat, "(z + sqrt(z^2 + 1)) / 2")
        .with_function("Smelu", smelu, cat, "z >= 0.5 ? z : z <= -0.5 ? 0 : (z + 0.5)^2 / 2")
}
