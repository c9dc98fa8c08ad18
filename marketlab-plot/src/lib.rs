#![warn(missing_docs)]
//! Plot geometry for the marketlab supply/demand core.
//!
//! This crate turns economic-space values from `marketlab-core` into
//! drawing-space geometry: an affine transform from `(quantity, price)` to
//! `(x, y)`, curve sampling into disconnected polylines, highlight regions
//! (consumer surplus, surplus/shortage bands, equilibrium guides) and axis
//! ticks. It stops at points and segments: the actual stroking and filling
//! is a renderer's job, and no drawing surface is referenced here.

/// The affine transform from economic space to the drawing surface.
mod transform;
pub use transform::*;

/// Curve sampling into polylines, honoring the segment-break contract.
mod sample;
pub use sample::*;

/// Highlight regions and label anchors derived from an evaluated market.
mod region;
pub use region::*;

/// Axis ticks and gridlines.
mod ticks;
pub use ticks::*;
