//! ReLU family

use algorama_catalog::FunctionCatalog;
use algorama_core::{Category, Real};
use std::f64::consts::{FRAC_2_SQRT_PI, SQRT_2};

pub fn relu(z: Real) -> Real {
    z.max(0.0)
}

pub fn leaky_relu(z: Real) -> Real {
    const ALPHA: Real = 0.01;
    if z > 0.0 {
        z
    } else {
        ALPHA * z
    }
}

pub fn prelu(z: Real) -> Real {
    const ALPHA: Real = 0.25;
    if z > 0.0 {
        z
    } else {
        ALPHA * z
    }
}

pub fn elu(z: Real) -> Real {
    const ALPHA: Real = 1.0;
    if z > 0.0 {
        z
    } else {
        ALPHA * (z.exp() - 1.0)
    }
}

pub fn selu(z: Real) -> Real {
    const LAMBDA: Real = 1.0507;
    const ALPHA: Real = 1.6733;
    if z > 0.0 {
        LAMBDA * z
    } else {
        LAMBDA * ALPHA * (z.exp() - 1.0)
    }
}

pub fn celu(z: Real) -> Real {
    const ALPHA: Real = 1.0;
    z.max(0.0) + (ALPHA * ((z / ALPHA).exp() - 1.0)).min(0.0)
}

/// Exact GELU, `0.5 z (1 + erf(z / √2))`
pub fn gelu(z: Real) -> Real {
    0.5 * z * (1.0 + libm::erf(z / SQRT_2))
}

/// Tanh approximation of GELU
pub fn gelu_tanh(z: Real) -> Real {
    // sqrt(2 / pi)
    let c = FRAC_2_SQRT_PI / SQRT_2;
    0.5 * z * (1.0 + (c * (z + 0.044715 * z * z * z)).tanh())
}

pub fn softplus(z: Real) -> Real {
    z.exp().ln_1p()
}

pub fn mish(z: Real) -> Real {
    z * softplus(z).tanh()
}

pub fn relu6(z: Real) -> Real {
    z.max(0.0).min(6.0)
}

pub fn thresholded_relu(z: Real) -> Real {
    const THETA: Real = 1.0;
    if z > THETA {
        z
    } else {
        0.0
    }
}

/// Randomized ReLU with the negative slope fixed near the middle of the
/// usual [0.1, 0.3] sampling range, so curves are reproducible
pub fn rrelu(z: Real) -> Real {
    const ALPHA: Real = 0.125;
    if z > 0.0 {
        z
    } else {
        ALPHA * z
    }
}

pub fn softplus_beta(z: Real) -> Real {
    const BETA: Real = 2.0;
    (BETA * z).exp().ln_1p() / BETA
}

pub fn solu(z: Real) -> Real {
    z * z.exp() / (1.0 + z.exp())
}

pub fn load(catalog: FunctionCatalog) -> FunctionCatalog {
    let cat = Category::ReluFamily;
    catalog
        .with_function("ReLU", relu, cat, "max(0, z)")
        .with_function("LeakyReLU", leaky_relu, cat, "z > 0 ? z : 0.01z")
        .with_function("PReLU", prelu, cat, "z > 0 ? z : 0.25z")
        .with_function("ELU", elu, cat, "z > 0 ? z : e^z - 1")
        .with_function("SELU", selu, cat, "1.0507 * (z > 0 ? z : 1.6733 * (e^z - 1))")
        .with_function("CELU", celu, cat, "max(0, z) + min(0, e^z - 1)")
        .with_function("GELU", gelu, cat, "0.5z * (1 + erf(z / sqrt(2)))")
        .with_function("GELUTanh", gelu_tanh, cat, "0.5z * (1 + tanh(sqrt(2/pi) * (z + 0.044715z^3)))")
        .with_function("SoftPlus", softplus, cat, "ln(1 + e^z)")
        .with_function("Mish", mish, cat, "z * tanh(softplus(z))")
        .with_function("ReLU6", relu6, cat, "min(max(0, z), 6)")
        .with_function("ThresholdedReLU", thresholded_relu, cat, "z > 1 ? z : 0")
        .with_function("RReLU", rrelu, cat, "z > 0 ? z : 0.125z")
        .with_function("SoftplusBeta", softplus_beta, cat, "ln(1 + e^(2z)) / 2")
        .with_function("SoLU", solu, cat, "z * e^z / (1 + e^z)")
}
