//! The editor-side chart representation.
//!
//! Everything here keys time by [`time::TimeWrapper`], a quantized
//! identity derived from raw milliseconds, and stores rails as explicit
//! note chains ([`rail::Rail`]). The raw-millisecond counterpart lives in
//! [`crate::game`]; [`crate::convert`] translates between the two.

pub mod model;
pub mod prelude;
pub mod rail;
pub mod time;
