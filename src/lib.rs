// src/lib.rs

//! # numquad
//!
//! Numerical quadrature of scalar functions over a closed interval.
//!
//! Two independent evaluators are provided:
//!
//! - [`newton_cotes`]: composite fixed-order Newton-Cotes rules
//!   (trapezoidal through Boole) on a uniform grid, with a caller-chosen
//!   accumulation precision and a per-point running trace.
//! - [`romberg`]: adaptive Romberg integration, which halves the
//!   trapezoidal step size and applies Richardson extrapolation until an
//!   absolute-error tolerance is met or an iteration cap is exhausted.
//!
//! Both are stateless and re-entrant; they share only the read-only
//! weight tables in [`weights`].

use std::fmt;

pub mod newton_cotes;
pub mod romberg;
pub mod weights;

pub use crate::newton_cotes::{integrate, newton_cotes, NewtonCotes, Order};
pub use crate::romberg::{romberg, romberg_with, RombergSink, WriterSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrationError {
    /// Step count is zero or not a multiple of the rule order.
    InvalidStepCount,
    /// Romberg refinement hit its iteration cap before converging.
    IterationLimitExceeded,
}

impl fmt::Display for IntegrationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IntegrationError::InvalidStepCount => {
                write!(f, "invalid number of steps for given order")
            }
            IntegrationError::IterationLimitExceeded => {
                write!(f, "iteration limit exceeded before convergence")
            }
        }
    }
}

impl std::error::Error for IntegrationError {}

pub type IntegrationResult<T> = std::result::Result<T, IntegrationError>;
