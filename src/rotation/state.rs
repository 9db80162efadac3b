use crate::rotation::cycle::CyclicList;

/// Default fade duration in milliseconds.
pub const DEFAULT_FADE_MS: u64 = 1000;
/// Default hold duration between fades in milliseconds.
pub const DEFAULT_HOLD_MS: u64 = 5000;

/// Handle for one of the widget's two reusable display surfaces.
///
/// The pair alternates tick by tick so the previous frame's fade-out overlaps
/// the next frame's fade-in without allocating new surfaces. The embedding
/// host maps each id to a concrete visual element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SurfaceId(pub u8);

/// Timing and scale parameters for a rotation.
///
/// Mutating any of these while a rotation is active stops it first; a
/// rotation's cadence is immutable for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RotationConfig {
    /// Uniform scale applied to both surfaces before each render. Must be
    /// positive.
    pub scale: f32,
    /// Duration of each fade-in and fade-out, in milliseconds.
    pub fade_ms: u64,
    /// Time a frame stays fully visible between fades, in milliseconds.
    pub hold_ms: u64,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            fade_ms: DEFAULT_FADE_MS,
            hold_ms: DEFAULT_HOLD_MS,
        }
    }
}

impl RotationConfig {
    /// Interval between tick firings: one fade plus one hold.
    pub fn period_ms(self) -> u64 {
        self.fade_ms.saturating_add(self.hold_ms)
    }

    /// Duration of a translation track: the full visible lifetime of a frame
    /// (fade-in, hold, fade-out).
    pub fn translation_ms(self) -> u64 {
        self.fade_ms
            .saturating_mul(2)
            .saturating_add(self.hold_ms)
    }
}

/// Everything the tick routine reads for one tick, captured without
/// advancing any cursor.
#[derive(Clone, Debug)]
pub struct TickSnapshot<F> {
    /// Surface selected for this tick, absent only if the selector list was
    /// somehow emptied.
    pub surface: Option<SurfaceId>,
    /// Frame reference under the frame cursor, absent when no frames are
    /// configured.
    pub frame: Option<F>,
    /// Horizontal drift extent in pixels, absent when the X offset list is
    /// exhausted or empty for this tick.
    pub translate_x: Option<i32>,
    /// Vertical drift extent in pixels, same omission rule as X.
    pub translate_y: Option<i32>,
}

/// The four parallel cyclic lists plus timing parameters for one widget.
///
/// Offsets may be shorter than the frame list or empty; each list wraps
/// independently, so a two-entry offset list alternates across a three-entry
/// frame list rather than tracking it.
#[derive(Clone, Debug)]
pub struct RotationState<F> {
    frames: CyclicList<F>,
    translate_xs: CyclicList<i32>,
    translate_ys: CyclicList<i32>,
    surfaces: CyclicList<SurfaceId>,
    config: RotationConfig,
}

impl<F: Clone> RotationState<F> {
    /// Fresh state: empty frame and offset lists, the surface pair seeded,
    /// default timing.
    pub fn new() -> Self {
        let mut surfaces = CyclicList::new();
        surfaces.push(SurfaceId(0));
        surfaces.push(SurfaceId(1));
        Self {
            frames: CyclicList::new(),
            translate_xs: CyclicList::new(),
            translate_ys: CyclicList::new(),
            surfaces,
            config: RotationConfig::default(),
        }
    }

    /// Whether no frames are configured. An empty frame sequence refuses to
    /// start a rotation.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Current timing and scale parameters.
    pub fn config(&self) -> RotationConfig {
        self.config
    }

    /// Capture the tuple of current cursor values without advancing.
    pub fn snapshot_tick(&self) -> TickSnapshot<F> {
        TickSnapshot {
            surface: self.surfaces.current().copied(),
            frame: self.frames.current().cloned(),
            translate_x: self.translate_xs.current().copied(),
            translate_y: self.translate_ys.current().copied(),
        }
    }

    /// Advance all four cursors as one logical step.
    ///
    /// Called exactly once per tick, after the tick's animation group has
    /// been dispatched. No reader interleaves between the individual
    /// advances; the widget is single-context.
    pub fn advance_all(&mut self) {
        self.frames.advance();
        self.translate_xs.advance();
        self.translate_ys.advance();
        self.surfaces.advance();
    }

    pub(crate) fn push_frame(&mut self, frame: F) {
        self.frames.push(frame);
    }

    pub(crate) fn push_translate_x(&mut self, offset: i32) {
        self.translate_xs.push(offset);
    }

    pub(crate) fn push_translate_y(&mut self, offset: i32) {
        self.translate_ys.push(offset);
    }

    pub(crate) fn config_mut(&mut self) -> &mut RotationConfig {
        &mut self.config
    }
}

impl<F: Clone> Default for RotationState<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rotation/state.rs"]
mod tests;
