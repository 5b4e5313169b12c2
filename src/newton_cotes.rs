//! Composite Newton-Cotes quadrature on a uniform grid.

use ndarray::Array1;
use num_traits::Float;

use crate::weights::{ENDPOINT_WEIGHTS, INTERIOR_WEIGHTS};
use crate::{IntegrationError, IntegrationResult};

/// Newton-Cotes rule family.
///
/// The discriminant is the number of grid sub-intervals spanned by one
/// composite panel; the step count must be a multiple of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Trapezoidal = 1,
    Simpson = 2,
    SimpsonThreeEighths = 3,
    Boole = 4,
}

impl Order {
    /// Number of grid sub-intervals per composite panel.
    pub fn panel_size(self) -> usize {
        self as usize
    }
}

/// Output of a composite Newton-Cotes integration.
#[derive(Debug, Clone)]
pub struct NewtonCotes {
    /// The integral estimate `h * s`.
    pub value: f64,
    /// Grid abscissae `x_k = a + k*h`, length `steps + 1`, with the last
    /// entry pinned to `b` exactly.
    pub x: Array1<f64>,
    /// Running weighted sum scaled by the step size, one entry per grid
    /// point.
    ///
    /// Entry `k` is the accumulator after point `k` has been added, times
    /// `h`. This is *not* the partial integral over `[a, x_k]`; interior
    /// weights make it a quasi-partial integral only. The semantic is
    /// kept as-is for compatibility with existing consumers of the trace.
    pub running: Array1<f64>,
}

/// Evaluates `∫f` over `interval` by a composite Newton-Cotes rule,
/// accumulating the weighted terms in `f64`.
///
/// See [`newton_cotes`] for the generic-accumulation form and the
/// validation rules.
pub fn integrate<F>(
    f: F,
    interval: (f64, f64),
    steps: usize,
    order: Order,
) -> IntegrationResult<NewtonCotes>
where
    F: Fn(f64) -> f64,
{
    newton_cotes::<F, f64>(f, interval, steps, order)
}

/// Evaluates `∫f` over `interval = (a, b)` by a composite Newton-Cotes
/// rule of the given order, using `steps` equal sub-intervals.
///
/// Each weighted term `w_k * f(x_k)` is cast to the accumulation type `A`
/// before it enters the running sum, in strict ascending-`k` order. With
/// `A = f32` this exposes the rounding behaviour of reduced-precision
/// accumulation; the returned value and trace are reported in `f64`.
///
/// Fails with [`IntegrationError::InvalidStepCount`], before any call to
/// `f`, when `steps` is zero or not a multiple of the panel size.
pub fn newton_cotes<F, A>(
    f: F,
    interval: (f64, f64),
    steps: usize,
    order: Order,
) -> IntegrationResult<NewtonCotes>
where
    F: Fn(f64) -> f64,
    A: Float,
{
    let n = order.panel_size();
    if steps == 0 || steps % n != 0 {
        return Err(IntegrationError::InvalidStepCount);
    }

    let (a, b) = interval;
    let h = (b - a) / steps as f64;

    let mut x = Array1::from_shape_fn(steps + 1, |k| a + h * k as f64);
    x[steps] = b;
    let mut running = Array1::<f64>::zeros(steps + 1);

    let endpoint = ENDPOINT_WEIGHTS[n - 1];
    let interior = INTERIOR_WEIGHTS[n - 1];

    let mut s = A::zero();
    for k in 0..=steps {
        let wk = if k == 0 || k == steps {
            endpoint
        } else {
            interior[k % n]
        };
        let xk = a + h * k as f64;
        let term = wk * f(xk);
        s = s + A::from(term).unwrap_or_else(A::nan);
        running[k] = s.to_f64().unwrap_or(f64::NAN) * h;
    }

    Ok(NewtonCotes {
        value: h * s.to_f64().unwrap_or(f64::NAN),
        x,
        running,
    })
}
