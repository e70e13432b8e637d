//! End-to-end and property test suite for the Meridian ROI engine.
//!
//! The tests here drive the public pipeline the way the presentation layer
//! does: full input bundles in, complete output records out, with every
//! documented invariant checked across the whole pipeline rather than per
//! module.

pub mod helpers;
