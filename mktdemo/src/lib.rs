//! Supporting library for the `mktdemo` binary.
//!
//! The binary itself stays thin; the CLI surface, configuration layering,
//! scenario catalog and report assembly all live here where they can be
//! tested without spawning a process.

mod cli;
pub use cli::Cli;

mod config;
pub use config::{AppConfig, GraphConfig};

/// The built-in scenario catalog: named parameter presets with descriptive
/// text, kept entirely outside the computational core.
pub mod scenario;

/// Assembly of evaluation results into a serializable report.
pub mod report;

/// An insertion-ordered map, so scenario listings keep their curated order.
pub(crate) type Map<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
