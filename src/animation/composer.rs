use crate::animation::ease::Ease;
use crate::animation::timeline::{Property, PropertyTrack, TickAnimation};
use crate::foundation::error::FlowResult;
use crate::host::{Fit, FlowHost, Placeholder, RenderRequest};
use crate::rotation::state::{RotationConfig, RotationState, SurfaceId};

/// Build the animation group for one tick.
///
/// The group always carries the fade-in (decelerating, over `fade_ms`) and
/// the delayed fade-out (accelerating, starting as the hold ends). Each
/// translation axis is added only when its offset is present for this tick:
/// a drift from `-offset` to `+offset` spanning the frame's full visible
/// lifetime, easing in and out.
///
/// With `fade_ms == 0` the fades become instant jumps and translations run
/// for `hold_ms` alone; with `hold_ms == 0` the fade-out starts the moment
/// the fade-in completes.
pub fn compose_tick(
    config: RotationConfig,
    surface: SurfaceId,
    translate_x: Option<i32>,
    translate_y: Option<i32>,
) -> TickAnimation {
    let mut tracks = Vec::with_capacity(4);

    tracks.push(PropertyTrack {
        property: Property::Opacity,
        from: 0.0,
        to: 1.0,
        start_ms: 0,
        duration_ms: config.fade_ms,
        ease: Ease::OutQuad,
    });

    if let Some(x) = translate_x {
        tracks.push(drift(Property::TranslateX, x, config));
    }
    if let Some(y) = translate_y {
        tracks.push(drift(Property::TranslateY, y, config));
    }

    tracks.push(PropertyTrack {
        property: Property::Opacity,
        from: 1.0,
        to: 0.0,
        start_ms: config.period_ms(),
        duration_ms: config.fade_ms,
        ease: Ease::InQuad,
    });

    TickAnimation::new(surface, tracks, config.translation_ms())
}

fn drift(property: Property, offset: i32, config: RotationConfig) -> PropertyTrack {
    PropertyTrack {
        property,
        from: -f64::from(offset),
        to: f64::from(offset),
        start_ms: 0,
        duration_ms: config.translation_ms(),
        ease: Ease::InOutSine,
    }
}

/// One full tick: snapshot, delegate the render, dispatch the group, then
/// advance every cursor together.
///
/// A missing frame or surface under the cursor skips the dispatch but still
/// advances, keeping the rotation alive. A synchronous host failure
/// propagates to the driver, which stops the rotation.
#[tracing::instrument(skip(state, host))]
pub(crate) fn run_tick<F, H>(state: &mut RotationState<F>, host: &mut H) -> FlowResult<()>
where
    F: Clone,
    H: FlowHost<F>,
{
    let snapshot = state.snapshot_tick();
    let config = state.config();

    if let (Some(surface), Some(frame)) = (snapshot.surface, snapshot.frame) {
        host.render(RenderRequest {
            frame: &frame,
            surface,
            scale: config.scale,
            placeholder: Placeholder::Transparent,
            fit: Fit::CenterCrop,
        })?;
        let group = compose_tick(config, surface, snapshot.translate_x, snapshot.translate_y);
        host.animate(group)?;
    } else {
        tracing::debug!("tick skipped: nothing under the frame cursor");
    }

    state.advance_all();
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/animation/composer.rs"]
mod tests;
