//! # meridian-core
//! Foundation types for the Meridian ROI modeling engine.
//!
//! All monetary values are plain `f64` dollars; all percentage fields are
//! dimensionless values in `[0, 100]` unless documented otherwise.
//! Numerically undefined results (zero-investment ROI, sign-change-free IRR)
//! are represented as non-finite `f64` sentinels, never as errors.

pub mod constants;
pub mod error;
pub mod share;
pub mod types;

pub use error::ShareError;
pub use share::{decode_share_link, encode_share_link, RoiInputs};
