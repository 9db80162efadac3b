use crate::animation::ease::Ease;
use crate::rotation::state::SurfaceId;

/// Surface property a track animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Property {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Horizontal translation in pixels.
    TranslateX,
    /// Vertical translation in pixels.
    TranslateY,
}

/// One eased interpolation of a single surface property over time.
///
/// A track holds its final value once past its end, the way a property
/// animator leaves the property at the last written value. Before its start
/// delay it writes nothing.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PropertyTrack {
    /// Animated property.
    pub property: Property,
    /// Value at normalized progress 0.
    pub from: f64,
    /// Value at normalized progress 1.
    pub to: f64,
    /// Delay from the tick start before this track begins, in milliseconds.
    pub start_ms: u64,
    /// Active duration in milliseconds. Zero jumps straight to `to`.
    pub duration_ms: u64,
    /// Interpolation curve.
    pub ease: Ease,
}

impl PropertyTrack {
    /// Value this track writes at `at_ms` since the tick started, or `None`
    /// if the track has not begun yet.
    pub fn value_at(self, at_ms: u64) -> Option<f64> {
        if at_ms < self.start_ms {
            return None;
        }
        let progress = if self.duration_ms == 0 {
            1.0
        } else {
            (at_ms - self.start_ms) as f64 / self.duration_ms as f64
        };
        let eased = self.ease.apply(progress);
        Some(self.from + (self.to - self.from) * eased)
    }
}

/// The composed animation group for one tick, targeting one surface.
///
/// Dispatch is fire-and-forget: the widget never waits for a group to finish,
/// and groups from consecutive ticks overlap in wall-clock time on alternate
/// surfaces. Hosts with a retained animation system can translate the tracks
/// directly; hosts without one can call [`TickAnimation::sample`] every
/// display frame.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TickAnimation {
    surface: SurfaceId,
    tracks: Vec<PropertyTrack>,
    total_ms: u64,
}

/// Snapshot of all animated properties at one instant of a group's playback.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TickSample {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Horizontal translation in pixels, `None` when the tick carries no X
    /// drift.
    pub translate_x: Option<f64>,
    /// Vertical translation in pixels, `None` when the tick carries no Y
    /// drift.
    pub translate_y: Option<f64>,
}

impl TickSample {
    /// Both translation axes as a vector, absent axes contributing zero.
    pub fn translation(self) -> kurbo::Vec2 {
        kurbo::Vec2::new(
            self.translate_x.unwrap_or(0.0),
            self.translate_y.unwrap_or(0.0),
        )
    }
}

impl TickAnimation {
    pub(crate) fn new(surface: SurfaceId, tracks: Vec<PropertyTrack>, total_ms: u64) -> Self {
        Self {
            surface,
            tracks,
            total_ms,
        }
    }

    /// Surface this group animates.
    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    /// The individual property tracks, in dispatch order.
    pub fn tracks(&self) -> &[PropertyTrack] {
        &self.tracks
    }

    /// Full playback length: fade-in, hold, fade-out.
    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    /// Whether playback is past its end at `at_ms` since dispatch.
    pub fn is_finished(&self, at_ms: u64) -> bool {
        at_ms >= self.total_ms
    }

    /// Resolve every property at `at_ms` since dispatch.
    ///
    /// When several tracks write the same property, the latest-starting track
    /// that has begun wins, matching last-writer property-animator semantics
    /// (fade-out takes over opacity from the completed fade-in).
    pub fn sample(&self, at_ms: u64) -> TickSample {
        TickSample {
            opacity: self.resolve(Property::Opacity, at_ms).unwrap_or(0.0),
            translate_x: self.resolve(Property::TranslateX, at_ms),
            translate_y: self.resolve(Property::TranslateY, at_ms),
        }
    }

    fn resolve(&self, property: Property, at_ms: u64) -> Option<f64> {
        self.tracks
            .iter()
            .filter(|t| t.property == property && t.start_ms <= at_ms)
            .max_by_key(|t| t.start_ms)
            .and_then(|t| t.value_at(at_ms))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
