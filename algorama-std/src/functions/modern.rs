//! Recently proposed functions

use super::relu::{gelu, relu, softplus};
use super::sigmoid::{sigmoid, swish};
use algorama_catalog::FunctionCatalog;
use algorama_core::{Category, Real};

/// Bounds for the probability input of `logit`
const LOGIT_EPSILON: Real = 1e-10;

pub fn silu(z: Real) -> Real {
    z * sigmoid(z)
}

pub fn lisht(z: Real) -> Real {
    z * z.tanh()
}

/// Inverse sigmoid; the input is clamped into the open unit interval
pub fn logit(z: Real) -> Real {
    let p = z.clamp(LOGIT_EPSILON, 1.0 - LOGIT_EPSILON);
    (p / (1.0 - p)).ln()
}

pub fn phish(z: Real) -> Real {
    z * gelu(z).tanh()
}

/// Square nonlinearity
pub fn sqnl(z: Real) -> Real {
    if z > 2.0 {
        1.0
    } else if z >= 0.0 {
        z - z * z / 4.0
    } else if z >= -2.0 {
        z + z * z / 4.0
    } else {
        -1.0
    }
}

/// Inverse square root unit
pub fn isru(z: Real) -> Real {
    z / (1.0 + z * z).sqrt()
}

pub fn isrlu(z: Real) -> Real {
    if z >= 0.0 {
        z
    } else {
        isru(z)
    }
}

/// S-shaped ReLU with fixed thresholds and slopes
pub fn srelu(z: Real) -> Real {
    const T_LEFT: Real = -0.5;
    const T_RIGHT: Real = 0.5;
    const A_LEFT: Real = 0.01;
    const A_RIGHT: Real = 0.01;
    if z <= T_LEFT {
        T_LEFT + A_LEFT * (z - T_LEFT)
    } else if z >= T_RIGHT {
        T_RIGHT + A_RIGHT * (z - T_RIGHT)
    } else {
        z
    }
}

/// Bounded ReLU; with an unbounded ceiling this is the identity
pub fn brelu(z: Real) -> Real {
    z
}

/// Adaptive piecewise linear with a single hinge
pub fn apl(z: Real) -> Real {
    z.max(0.0) + 0.5 * (-z + 1.0).max(0.0)
}

pub fn smish(z: Real) -> Real {
    z * sigmoid(z).ln_1p().tanh()
}

pub fn logish(z: Real) -> Real {
    z * sigmoid(z).ln_1p()
}

pub fn tanh_exp(z: Real) -> Real {
    z * z.exp().tanh()
}

/// One-dimensional stand-in for funnel ReLU
pub fn frelu(z: Real) -> Real {
    z.max(z.tanh())
}

pub fn star_relu(z: Real) -> Real {
    const SCALE: Real = 0.8944;
    const BIAS: Real = -0.4472;
    let r = relu(z);
    SCALE * r * r + BIAS
}

pub fn serf(z: Real) -> Real {
    z * libm::erf(softplus(z))
}

pub fn acon_c(z: Real) -> Real {
    z * sigmoid(z)
}

pub fn meta_acon(z: Real) -> Real {
    const BETA: Real = 1.5;
    let s = sigmoid(BETA * z);
    z * (s + (1.0 - s) * 0.25)
}

pub fn elish_swish(z: Real) -> Real {
    if z >= 0.0 {
        swish(z)
    } else {
        (z.exp() - 1.0) * sigmoid(z)
    }
}

pub fn shifted_relu(z: Real) -> Real {
    (z - 0.5).max(0.0)
}

pub fn maxsig(z: Real) -> Real {
    z.max(sigmoid(z))
}

pub fn load(catalog: FunctionCatalog) -> FunctionCatalog {
    let cat = Category::Modern;
    catalog
        .with_function("SiLU", silu, cat, "z * sigmoid(z)")
        .with_function("LiSHT", lisht, cat, "z * tanh(z)")
        .with_function("Logit", logit, cat, "ln(p / (1 - p)), p = clamp(z, 1e-10, 1 - 1e-10)")
        .with_function("Phish", phish, cat, "z * tanh(GELU(z))")
        .with_function("SQNL", sqnl, cat, "z > 2 ? 1 : z >= 0 ? z - z^2/4 : z >= -2 ? z + z^2/4 : -1")
        .with_function("ISRU", isru, cat, "z / sqrt(1 + z^2)")
        .with_function("ISRLU", isrlu, cat, "z >= 0 ? z : z / sqrt(1 + z^2)")
        .with_function("SReLU", srelu, cat, "S-shaped ReLU, thresholds -0.5 and 0.5, slopes 0.01")
        .with_function("BReLU", brelu, cat, "z")
        .with_function("APL", apl, cat, "max(0, z) + 0.5 * max(0, 1 - z)")
        .with_function("Smish", smish, cat, "z * tanh(ln(1 + sigmoid(z)))")
        .with_function("Logish", logish, cat, "z * ln(1 + sigmoid(z))")
        .with_function("TanhExp", tanh_exp, cat, "z * tanh(e^z)")
        .with_function("FReLU", frelu, cat, "max(z, tanh(z))")
        .with_function("StarReLU", star_relu, cat, "0.8944 * relu(z)^2 - 0.4472")
        .with_function("Serf", serf, cat, "z * erf(softplus(z))")
        .with_function("ACONC", acon_c, cat, "z * sigmoid(z)")
        .with_function("MetaACON", meta_acon, cat, "z * (s + 0.25(1 - s)), s = sigmoid(1.5z)")
        .with_function("ELishSwish", elish_swish, cat, "z >= 0 ? swish(z) : (e^z - 1) * sigmoid(z)")
        .with_function("ShiftedReLU", shifted_relu, cat, "max(0, z - 0.5)")
        .with_function("Maxsig", maxsig, cat, "max(z, sigmoid(z))")
}
