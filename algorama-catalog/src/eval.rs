//! Evaluation Service
//!
//! Stateless layer over the catalog: transformed point evaluation, centered
//! finite-difference derivatives and whole-curve sweeps. Non-finite values
//! are results, not errors, and pass through untouched.

use crate::{FunctionCatalog, SharedFunction};
use algorama_core::{CatalogError, FunctionId, Real};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Default half-width of the centered difference
pub const DEFAULT_DERIVATIVE_STEP: Real = 1e-4;

/// Default plotted range and resolution (20 ticks, 40 samples per tick)
pub const DEFAULT_X_MIN: Real = -10.0;
pub const DEFAULT_X_MAX: Real = 10.0;
pub const DEFAULT_SAMPLES: usize = 800;

/// Amplitude/frequency applied around a function: `amplitude * f(frequency * x)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub amplitude: Real,
    pub frequency: Real,
}

impl Transform {
    pub const IDENTITY: Transform = Transform { amplitude: 1.0, frequency: 1.0 };

    pub const fn new(amplitude: Real, frequency: Real) -> Self {
        Self { amplitude, frequency }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Evenly spaced sample positions over `[x_min, x_max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sweep {
    x_min: Real,
    x_max: Real,
    samples: usize,
}

impl Sweep {
    /// `samples` is the number of segments; the sweep yields `samples + 1`
    /// points with both endpoints included.
    pub fn new(x_min: Real, x_max: Real, samples: usize) -> Result<Self, CatalogError> {
        if !x_min.is_finite() || !x_max.is_finite() {
            return Err(CatalogError::invalid_sweep(format!(
                "bounds must be finite, got [{}, {}]",
                x_min, x_max
            )));
        }
        if x_min >= x_max {
            return Err(CatalogError::invalid_sweep(format!(
                "x_min ({}) must be less than x_max ({})",
                x_min, x_max
            )));
        }
        if samples == 0 {
            return Err(CatalogError::invalid_sweep("samples must be at least 1"));
        }
        Ok(Self { x_min, x_max, samples })
    }

    pub fn x_min(&self) -> Real {
        self.x_min
    }

    pub fn x_max(&self) -> Real {
        self.x_max
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Sample positions, `x_min` first and `x_max` last.
    ///
    /// Interpolates between the bounds rather than stepping by
    /// `x_max - x_min`, which overflows for bounds near `Real::MAX`.
    pub fn points(&self) -> impl Iterator<Item = Real> {
        let Sweep { x_min, x_max, samples } = *self;
        (0..=samples).map(move |i| {
            if i == samples {
                x_max
            } else {
                let t = i as Real / samples as Real;
                x_min * (1.0 - t) + x_max * t
            }
        })
    }
}

impl Default for Sweep {
    fn default() -> Self {
        Self { x_min: DEFAULT_X_MIN, x_max: DEFAULT_X_MAX, samples: DEFAULT_SAMPLES }
    }
}

/// One sampled point of a curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: Real,
    pub y: Real,
}

impl PlotPoint {
    /// Renderers break the line at points where this is false
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A function ID resolved once, for repeated evaluation without the catalog
#[derive(Clone)]
pub struct BoundFunction {
    id: FunctionId,
    func: SharedFunction,
}

impl BoundFunction {
    pub fn id(&self) -> FunctionId {
        self.id
    }

    pub fn evaluate(&self, x: Real, transform: Transform) -> Real {
        transform.amplitude * self.func.call(transform.frequency * x)
    }

    pub fn derivative(&self, x: Real, transform: Transform, step: Real) -> Real {
        (self.evaluate(x + step, transform) - self.evaluate(x - step, transform)) / (2.0 * step)
    }

    pub fn sample(&self, sweep: &Sweep, transform: Transform) -> Vec<PlotPoint> {
        sweep.points().map(|x| PlotPoint { x, y: self.evaluate(x, transform) }).collect()
    }

    pub fn sample_derivative(&self, sweep: &Sweep, transform: Transform, step: Real) -> Vec<PlotPoint> {
        sweep
            .points()
            .map(|x| PlotPoint { x, y: self.derivative(x, transform, step) })
            .collect()
    }
}

/// Evaluation entry point shared by every caller of the catalog
#[derive(Clone)]
pub struct Evaluator {
    catalog: Arc<FunctionCatalog>,
}

impl Evaluator {
    pub fn new(catalog: Arc<FunctionCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &FunctionCatalog {
        &self.catalog
    }

    /// Resolve `id` to its callable once
    pub fn bind(&self, id: FunctionId) -> Result<BoundFunction, CatalogError> {
        Ok(BoundFunction { id, func: self.catalog.function(id)? })
    }

    /// `amplitude * f(frequency * x)` for the function registered under `id`
    pub fn evaluate(&self, id: FunctionId, x: Real, amplitude: Real, frequency: Real) -> Result<Real, CatalogError> {
        Ok(self.bind(id)?.evaluate(x, Transform::new(amplitude, frequency)))
    }

    /// Centered difference with [`DEFAULT_DERIVATIVE_STEP`]
    pub fn approximate_derivative(
        &self,
        id: FunctionId,
        x: Real,
        amplitude: Real,
        frequency: Real,
    ) -> Result<Real, CatalogError> {
        self.approximate_derivative_with_step(id, x, amplitude, frequency, DEFAULT_DERIVATIVE_STEP)
    }

    /// `(g(x + step) - g(x - step)) / (2 * step)` with `g` the transformed function.
    ///
    /// Across a discontinuity this does not converge to either one-sided
    /// derivative. A zero step yields NaN like any other numeric anomaly.
    pub fn approximate_derivative_with_step(
        &self,
        id: FunctionId,
        x: Real,
        amplitude: Real,
        frequency: Real,
        step: Real,
    ) -> Result<Real, CatalogError> {
        Ok(self.bind(id)?.derivative(x, Transform::new(amplitude, frequency), step))
    }

    pub fn sample(&self, id: FunctionId, sweep: &Sweep, transform: Transform) -> Result<Vec<PlotPoint>, CatalogError> {
        Ok(self.bind(id)?.sample(sweep, transform))
    }

    pub fn sample_derivative(
        &self,
        id: FunctionId,
        sweep: &Sweep,
        transform: Transform,
        step: Real,
    ) -> Result<Vec<PlotPoint>, CatalogError> {
        Ok(self.bind(id)?.sample_derivative(sweep, transform, step))
    }
}
