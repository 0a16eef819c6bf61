//! Chart models for a rhythm game and the conversion between them.
//!
//! Two representations of the same beatmap coexist:
//!
//! - [`editor::model::EditorChart`] keys every event by a quantized
//!   [`editor::time::TimeWrapper`] and stores rails as explicit note
//!   chains. This is the document an editor mutates.
//! - [`game::Chart`] keys events by raw float milliseconds
//!   ([`game::raw_time::RawTime`]) and flattens rails into per-leader
//!   segment arrays. This is the document a game runtime loads.
//!
//! [`convert`] translates whole documents between the two: it snaps raw
//! times onto the 1/64-beat grid, rebuilds rail chains from segments and
//! derives the combo groups that neither document stores.
//!
//! In detail, our policies are:
//!
//! - A conversion either fails fast on an unusable BPM or structurally
//!   completes; sparse input is never an error.
//! - Every per-tier collection is always allocated; empty means "no
//!   content", never absence.
//! - Recoverable conditions surface as typed warnings next to the result,
//!   not through a logger.

pub mod convert;
pub mod editor;
pub mod game;
pub mod util;
