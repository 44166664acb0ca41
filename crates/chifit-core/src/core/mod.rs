//! # Core Module
//!
//! Stateless numerical building blocks for conformer fitting.
//!
//! - **Trig Lookup** ([`trig`]) - Precomputed sine/cosine values at a fixed
//!   angular resolution, used instead of per-rotation trig calls.
//! - **Axis Rotation** ([`rotation`]) - In-place rotation of a point subset
//!   about a bond axis using the lookup table.
//! - **Density Field** ([`field`]) - A periodic 3D scalar grid with
//!   eight-point interpolation at arbitrary Cartesian coordinates.
//!
//! Everything in this layer is a pure function over caller-owned data; the
//! search logic lives in [`crate::engine`].

pub mod field;
pub mod rotation;
pub mod trig;
