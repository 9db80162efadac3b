//! Flowview is the core of an ambient "flowing" slideshow widget.
//!
//! It cycles through a configured list of image frames on a fixed cadence,
//! cross-fading each one in and out and optionally drifting it across the
//! screen. The crate owns the scheduling and animation-sequencing logic only;
//! pixels, layout, and playback belong to the embedding host.
//!
//! # Tick pipeline
//!
//! 1. **Snapshot**: read the current frame, offsets, and surface from the
//!    rotation cursors (`RotationState::snapshot_tick`)
//! 2. **Render**: delegate image loading into the selected surface to the
//!    host collaborator ([`FlowHost::render`])
//! 3. **Compose**: build the fade-in / translate / fade-out group for the
//!    tick ([`compose_tick`]) and dispatch it ([`FlowHost::animate`])
//! 4. **Advance**: step all cursors together (`RotationState::advance_all`)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single context**: every tick runs synchronously inside
//!   [`FlowView::pump`], on whatever thread the host calls it from. There is
//!   no internal thread and no timer resource to leak.
//! - **Stop-on-configure**: every configuration mutator stops an active
//!   rotation before applying, so a rotation's cadence is immutable for its
//!   lifetime.
//! - **Absorbed failure**: no tick error crosses the widget boundary; a
//!   failing tick is logged and the rotation transitions to stopped.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod driver;
mod foundation;
mod host;
mod rotation;
mod view;

pub use animation::composer::compose_tick;
pub use animation::ease::Ease;
pub use animation::timeline::{Property, PropertyTrack, TickAnimation, TickSample};
pub use driver::{DriverState, PeriodicDriver};
pub use foundation::error::{FlowError, FlowResult};
pub use host::{Fit, FlowHost, Placeholder, RenderRequest};
pub use rotation::cycle::CyclicList;
pub use rotation::state::{
    DEFAULT_FADE_MS, DEFAULT_HOLD_MS, RotationConfig, RotationState, SurfaceId, TickSnapshot,
};
pub use view::FlowView;
