//! Function families, one module per category

pub mod adaptive;
pub mod attention;
pub mod exponential;
pub mod gaussian;
pub mod modern;
pub mod piecewise;
pub mod polynomial;
pub mod probabilistic;
pub mod relu;
pub mod sigmoid;
pub mod smooth;
pub mod special;
pub mod tanh;
