//! The widget facade: configuration surface and lifecycle entry points.

use std::time::Instant;

use crate::driver::PeriodicDriver;
use crate::host::FlowHost;
use crate::rotation::state::{RotationConfig, RotationState};

/// The flowing-slideshow widget core.
///
/// Hosts configure it with chained builder calls, start it with
/// [`FlowView::flow`] when they become visible, and feed it time with
/// [`FlowView::pump`] from their own update loop:
///
/// ```
/// use std::time::Instant;
/// use flowview::{FlowView, FlowHost, RenderRequest, TickAnimation, FlowResult};
///
/// struct NullHost;
/// impl FlowHost<&'static str> for NullHost {
///     fn render(&mut self, _req: RenderRequest<'_, &'static str>) -> FlowResult<()> {
///         Ok(())
///     }
///     fn animate(&mut self, _group: TickAnimation) -> FlowResult<()> {
///         Ok(())
///     }
/// }
///
/// let mut view = FlowView::new();
/// view.frames(["dawn.jpg", "noon.jpg", "dusk.jpg"])
///     .translate_xs([-40, 40])
///     .fade_duration(800)
///     .between_duration(4000);
/// view.flow();
/// view.pump(Instant::now(), &mut NullHost);
/// assert!(view.is_flowing());
/// ```
///
/// Every configuration mutator stops an in-progress rotation first, so a
/// rotation never animates a half-updated configuration. Dropping the widget
/// stops it too; no timer resource outlives the instance.
#[derive(Debug)]
pub struct FlowView<F> {
    state: RotationState<F>,
    driver: PeriodicDriver,
}

impl<F: Clone> FlowView<F> {
    /// A widget with no frames, no offsets, and default timing.
    pub fn new() -> Self {
        Self {
            state: RotationState::new(),
            driver: PeriodicDriver::new(),
        }
    }

    /// Set the uniform scale applied to both surfaces. Non-positive or
    /// non-finite values are rejected with a log line and leave the previous
    /// scale in place. Stops an active rotation.
    pub fn scale(&mut self, scale: f32) -> &mut Self {
        self.pause();
        if scale.is_finite() && scale > 0.0 {
            self.state.config_mut().scale = scale;
        } else {
            tracing::warn!(scale = %scale, "ignoring invalid scale; must be finite and > 0");
        }
        self
    }

    /// Set the fade duration in milliseconds. Stops an active rotation.
    pub fn fade_duration(&mut self, fade_ms: u64) -> &mut Self {
        self.pause();
        self.state.config_mut().fade_ms = fade_ms;
        self
    }

    /// Set the hold duration between fades in milliseconds. Stops an active
    /// rotation.
    pub fn between_duration(&mut self, hold_ms: u64) -> &mut Self {
        self.pause();
        self.state.config_mut().hold_ms = hold_ms;
        self
    }

    /// Append one horizontal drift extent. Stops an active rotation.
    pub fn translate_x(&mut self, offset: i32) -> &mut Self {
        self.pause();
        self.state.push_translate_x(offset);
        self
    }

    /// Append several horizontal drift extents. Stops an active rotation.
    pub fn translate_xs(&mut self, offsets: impl IntoIterator<Item = i32>) -> &mut Self {
        self.pause();
        for offset in offsets {
            self.state.push_translate_x(offset);
        }
        self
    }

    /// Append one vertical drift extent. Stops an active rotation.
    pub fn translate_y(&mut self, offset: i32) -> &mut Self {
        self.pause();
        self.state.push_translate_y(offset);
        self
    }

    /// Append several vertical drift extents. Stops an active rotation.
    pub fn translate_ys(&mut self, offsets: impl IntoIterator<Item = i32>) -> &mut Self {
        self.pause();
        for offset in offsets {
            self.state.push_translate_y(offset);
        }
        self
    }

    /// Append one frame reference. Stops an active rotation.
    pub fn frame(&mut self, frame: F) -> &mut Self {
        self.pause();
        self.state.push_frame(frame);
        self
    }

    /// Append several frame references. Stops an active rotation.
    pub fn frames(&mut self, frames: impl IntoIterator<Item = F>) -> &mut Self {
        self.pause();
        for frame in frames {
            self.state.push_frame(frame);
        }
        self
    }

    /// Start the rotation. Idempotent; silently refused while no frames are
    /// configured.
    pub fn flow(&mut self) {
        self.driver.start(&self.state);
    }

    /// Stop the rotation. Idempotent. Animations already dispatched to the
    /// host keep playing.
    pub fn pause(&mut self) {
        self.driver.stop();
    }

    /// Whether a rotation is live.
    pub fn is_flowing(&self) -> bool {
        self.driver.is_running()
    }

    /// Whether no frames are configured.
    pub fn is_frame_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Current timing and scale parameters.
    pub fn config(&self) -> RotationConfig {
        self.state.config()
    }

    /// Feed the widget the current time, firing at most one due tick into
    /// `host`. Returns whether a tick fired.
    ///
    /// Call this from the single context that owns the visual surfaces; every
    /// render and animation dispatch happens synchronously inside it. Errors
    /// never escape: a failing tick stops the rotation and logs.
    pub fn pump<H: FlowHost<F>>(&mut self, now: Instant, host: &mut H) -> bool {
        self.driver.pump(now, &mut self.state, host)
    }
}

impl<F: Clone> Default for FlowView<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Drop for FlowView<F> {
    fn drop(&mut self) {
        // Teardown implies stop.
        self.driver.stop();
    }
}

#[cfg(test)]
#[path = "../tests/unit/view.rs"]
mod tests;
