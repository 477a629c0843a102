//! kumaraswamy - Closed-form statistics for the Kumaraswamy distribution
//!
//! The Kumaraswamy distribution is a two-parameter continuous
//! distribution on the open interval (0, 1), often used as a bounded
//! alternative to the beta distribution. Its defining convenience is
//! that the CDF and quantile function are both closed-form, so every
//! function in this crate is direct floating-point arithmetic with no
//! iterative solving.
//!
//! # Contents
//!
//! - [`Kumaraswamy`] - the distribution itself: PDF, CDF, quantile,
//!   survival, hazard, median, mode, and raw moments
//! - [`special`] - the gamma-function evaluator backing the moment
//!   formulas
//!
//! # Example
//!
//! ```ignore
//! use kumaraswamy::{ContinuousDistribution, Distribution, Kumaraswamy};
//!
//! let k = Kumaraswamy::new(2.0, 3.0)?;
//!
//! let density = k.pdf(0.5)?;
//! let quantile = k.ppf(0.25)?;
//! let spread = k.std();
//! ```
//!
//! # Errors
//!
//! Functions taking a point `x` or probability `p` validate the open
//! interval (0, 1) and return [`StatsError`] for anything outside it,
//! boundary values included. Shape parameters are validated once at
//! construction. [`Distribution::mode`] fails with an
//! undefined-result error when the parameter regime admits no mode.

mod distribution;
mod error;
mod kumaraswamy;
pub mod special;

pub use distribution::{ContinuousDistribution, Distribution};
pub use error::{StatsError, StatsResult};
pub use kumaraswamy::Kumaraswamy;
