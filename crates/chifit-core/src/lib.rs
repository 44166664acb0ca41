//! # CHI-FIT Core Library
//!
//! A torsion-driven conformer fitting engine. Given a kinematic chain of
//! rotatable bonds and a caller-enumerated list of torsion-angle candidates,
//! the engine applies each candidate as a sequence of chained rotations to a
//! base geometry, scores the result, and keeps the best-scoring arrangement.
//!
//! Two scoring targets are supported: agreement with a 3D density map
//! (real-space target, maximized) and deviation from a reference geometry
//! (summed displacement, minimized).
//!
//! ## Architectural Philosophy
//!
//! The library is split into two layers with a strict dependency direction:
//!
//! - **[`core`]: The Foundation.** Stateless numerical building blocks: the
//!   precomputed trig lookup table, axis-angle point rotation, and the density
//!   grid with eight-point interpolation.
//!
//! - **[`engine`]: The Logic Core.** The search layer. It validates the
//!   rotation group and candidate list, composes each candidate along the
//!   kinematic chain, scores it through a pluggable [`engine::scoring::ScoreFunction`],
//!   and drives the best-of-many scan (sequentially, or in parallel with the
//!   `parallel` feature).

pub mod core;
pub mod engine;
