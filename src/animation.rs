//! Animation composition for one rotation tick: interpolation curves,
//! property tracks, and the composer that assembles them.

pub mod composer;
pub mod ease;
pub mod timeline;
