//! The boundary to the embedding host: rendering delegation and animation
//! dispatch.

use crate::animation::timeline::TickAnimation;
use crate::foundation::error::FlowResult;
use crate::rotation::state::SurfaceId;

/// What a surface shows until its image is ready.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Placeholder {
    /// Fully transparent, so the previous frame stays visible underneath
    /// while the next one loads.
    Transparent,
}

/// How an image is framed within its surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Fit {
    /// Scale to fill the surface, cropping the overflow about the center.
    CenterCrop,
}

/// One render delegation from the widget to the host's image loader.
#[derive(Debug)]
pub struct RenderRequest<'a, F> {
    /// Opaque frame reference to load.
    pub frame: &'a F,
    /// Surface the image lands in.
    pub surface: SurfaceId,
    /// Uniform scale to apply to the surface before the image shows.
    pub scale: f32,
    /// Placeholder policy during the load.
    pub placeholder: Placeholder,
    /// Framing policy.
    pub fit: Fit,
}

/// The widget's single external collaborator.
///
/// Both hooks are called synchronously from inside [`crate::FlowView::pump`],
/// on the host's own context. Asynchronous completion (image decode finishing
/// later, animations playing out) is entirely the host's concern; the widget
/// consumes no result beyond a synchronous `Err`, which stops the rotation.
pub trait FlowHost<F> {
    /// Load `req.frame` into `req.surface`. Fire-and-forget from the
    /// widget's perspective.
    fn render(&mut self, req: RenderRequest<'_, F>) -> FlowResult<()>;

    /// Start playing a composed tick group. Must not block; groups from
    /// consecutive ticks overlap on alternate surfaces.
    fn animate(&mut self, group: TickAnimation) -> FlowResult<()>;
}
