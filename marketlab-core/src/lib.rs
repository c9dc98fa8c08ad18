#![warn(missing_docs)]
//! Domain models and market math for linear supply/demand visualization.
//!
//! This crate is the computational heart of the marketlab workspace: linear
//! demand and supply curves, closed-form market equilibrium, price floor and
//! ceiling analysis, and qualitative elasticity classification. Everything is
//! a pure function of its inputs: there is no hidden state, no caching, and
//! no drawing-surface dependency. The companion `marketlab-plot` crate turns
//! these values into plottable geometry, and `mktdemo` wires both into a CLI.

/// Core domain models for the supply/demand visualization.
///
/// The models in this module are primarily data structures with the minimal
/// business logic of the market itself: curve evaluation, equilibrium, and
/// intervention analysis. They carry no presentation concerns; a renderer
/// consumes derived values through `marketlab-plot`.
pub mod models;
