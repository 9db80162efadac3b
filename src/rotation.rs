//! Rotation bookkeeping: cyclic parameter lists and the per-widget state
//! they compose into.

pub mod cycle;
pub mod state;
