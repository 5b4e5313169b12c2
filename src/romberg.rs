//! Adaptive Romberg integration.
//!
//! Repeatedly halves the trapezoidal step size, reusing previous samples
//! over the nested grid, and applies Richardson extrapolation to cancel
//! leading-order error terms until an absolute-error tolerance is met.
//!
//! Iteration and extrapolation indices are both 0-based: `R(i,0)` is the
//! trapezoidal rule with `2^i` steps. (Textbook treatments often take the
//! extrapolation order 1-based instead.)

use std::io::Write;
use std::mem;

use crate::{IntegrationError, IntegrationResult};

/// Observer for intermediate Romberg table entries.
///
/// Receives every `R(i, k)` in lexicographic `(i, k)` order, with the
/// Richardson error estimate `e(i, k)` where one exists (the deepest
/// entry of each row has none). Purely a diagnostic side channel; it has
/// no effect on the returned value.
pub trait RombergSink {
    fn entry(&mut self, i: usize, k: usize, value: f64, error: Option<f64>);
}

/// No-op sink.
impl RombergSink for () {
    fn entry(&mut self, _i: usize, _k: usize, _value: f64, _error: Option<f64>) {}
}

/// Sink that writes one human-readable line per table entry, with a
/// residual against an optional reference value, and a blank line after
/// each completed row.
///
/// Write errors are swallowed; the line format is not a stable contract.
pub struct WriterSink<W: Write> {
    writer: W,
    reference: Option<f64>,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink {
            writer,
            reference: None,
        }
    }

    pub fn with_reference(writer: W, reference: f64) -> Self {
        WriterSink {
            writer,
            reference: Some(reference),
        }
    }
}

impl<W: Write> RombergSink for WriterSink<W> {
    fn entry(&mut self, i: usize, k: usize, value: f64, error: Option<f64>) {
        let mut line = format!("R({},{}) {:+.15e}", i, k, value);
        if let Some(e) = error {
            line.push_str(&format!(" epsilon({},{}) {:+.4e}", i, k, e));
        }
        if let Some(r) = self.reference {
            line.push_str(&format!(" ... residual {:+.4e}", r - value));
        }
        let _ = if k == i {
            writeln!(self.writer, "{}\n", line)
        } else {
            writeln!(self.writer, "{}", line)
        };
    }
}

/// Evaluates `∫f` over `interval` by Romberg integration to the given
/// absolute-error tolerance, with no iteration floor or cap and no
/// diagnostics.
pub fn romberg<F>(f: F, interval: (f64, f64), tolerance: f64) -> IntegrationResult<f64>
where
    F: Fn(f64) -> f64,
{
    romberg_with(f, interval, tolerance, 0, None, &mut ())
}

/// Evaluates `∫f` over `interval = (a, b)` by Romberg integration.
///
/// Refinement continues while fewer than `min_order` step-halvings have
/// been performed or the magnitude of the most recent Richardson error
/// estimate exceeds `tolerance`; at least one refinement always happens.
/// Each halving doubles the sample density, reusing all previous samples.
/// Returns the deepest extrapolated value on convergence.
///
/// If a refinement would push the iteration index past `max_order`, the
/// call fails with [`IntegrationError::IterationLimitExceeded`]: the
/// requested tolerance is unreachable within the budget. With
/// `max_order = None` a tolerance near machine epsilon may never be met
/// and the call then runs indefinitely; bounding is the caller's job.
///
/// The error estimate `e(i,k) = (R(i,k) - R(i-1,k)) / (4^(k+1) - 1)` is
/// the Richardson bound, a convergence heuristic rather than a guarantee
/// on the true error.
pub fn romberg_with<F, S>(
    f: F,
    interval: (f64, f64),
    tolerance: f64,
    min_order: usize,
    max_order: Option<usize>,
    sink: &mut S,
) -> IntegrationResult<f64>
where
    F: Fn(f64) -> f64,
    S: RombergSink,
{
    let (a, b) = interval;

    // Base case: single-panel trapezoidal estimate R(0,0).
    let mut h = b - a;
    let mut r0 = 0.5 * (b - a) * (f(a) + f(b));
    let mut row = vec![r0];
    sink.entry(0, 0, r0, None);

    let mut i = 0usize;
    let mut eik = f64::INFINITY;

    while i < min_order || eik.abs() > tolerance {
        i += 1;
        h *= 0.5;

        if let Some(cap) = max_order {
            if i > cap {
                return Err(IntegrationError::IterationLimitExceeded);
            }
        }

        // New trapezoidal estimate as an update to the old one:
        // R(i,0) = R(i-1,0)/2 + h * sum over the odd-indexed samples.
        r0 *= 0.5;
        let mut m = 1u64;
        while m < (1u64 << i.min(63)) {
            r0 += h * f(a + m as f64 * h);
            m += 2;
        }

        let prev = mem::replace(&mut row, Vec::with_capacity(i + 1));
        row.push(r0);
        for k in 0..i {
            let rik = row[k];
            eik = (rik - prev[k]) / (4f64.powi(k as i32 + 1) - 1.0);
            sink.entry(i, k, rik, Some(eik));
            row.push(rik + eik);
        }
        sink.entry(i, i, row[i], None);
    }

    Ok(row.pop().unwrap_or(r0))
}
