//! Height publication sink

/// Receiver of published heights
///
/// Only called with a value that is non-zero and differs from the previous
/// one. Publishing is fire-and-forget; a sink cannot reject a value.
pub trait HeightSink {
    /// Deliver a new height, in the unit shown on the handset
    fn publish(&mut self, height: f32);
}

impl<F: FnMut(f32)> HeightSink for F {
    fn publish(&mut self, height: f32) {
        self(height)
    }
}

/// Sink that discards every value
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl HeightSink for NullSink {
    fn publish(&mut self, _height: f32) {}
}
