//! # Engine Module
//!
//! The conformer-fitting search layer. It turns a caller-enumerated list of
//! torsion-angle candidates into the best-scoring arrangement of a base
//! geometry.
//!
//! ## Overview
//!
//! One search invocation consumes a [`group::RotationGroup`] (the kinematic
//! chain of rotatable bonds), a candidate list of angle sets, a base
//! coordinate array, a trig lookup table, and a scoring strategy. Each
//! candidate is composed onto a private copy of the base geometry, scored,
//! and compared against the incumbent; the earliest candidate wins exact
//! score ties. All shared inputs are read-only for the duration of the scan,
//! which is what makes the `parallel` feature a drop-in replacement for the
//! sequential loop.
//!
//! ## Architecture
//!
//! - **Input Validation** ([`group`]) - The rotation group and its length
//!   invariants, checked once at entry.
//! - **Kinematic Composition** ([`composer`]) - Applies one candidate's
//!   angles along the chain, in axis order.
//! - **Scoring Strategies** ([`scoring`]) - The density (maximize) and
//!   distance (minimize) score functions behind one trait.
//! - **Search Driver** ([`search`]) - The best-of-many scan and its result.
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events.
//! - **Error Handling** ([`error`]) - Engine-specific error types.

pub mod composer;
pub mod error;
pub mod group;
pub mod progress;
pub mod scoring;
pub mod search;
