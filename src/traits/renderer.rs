use crate::frame::FrameUniforms;

/// Shading stage - receives the per-frame uniforms once per redraw
pub trait FrameSink {
    /// Upload the uniforms and draw the frame
    fn submit(&mut self, uniforms: &FrameUniforms) -> anyhow::Result<()>;
}
