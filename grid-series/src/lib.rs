//! Time-indexed grid series and the derived metrics computed over them.
//!
//! [`Frame`] holds one of the pre-aggregated tables; the [`ops`] module holds
//! the pure transforms (windowing, shares, ramps, as-of lookups, resampling)
//! that the dashboard views are built from.

pub mod domain;
pub mod ops;

pub use domain::{Column, Frame, FrameError, IncidentWindow, IndexZone, TimeIndex};
