//! # Network Model
//!
//! Value types that cross every stage of the conversion:
//! loader → threshold → extractor → exporter.
//!
//! Design rule: this module is pure data — no I/O, no logging, no state.

pub mod gene;
pub mod matrix;
pub mod edge;

pub use gene::GeneOrder;
pub use matrix::{WeightMatrix, Orientation};
pub use edge::{Edge, EdgeSet};
