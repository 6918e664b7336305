//! One-way boolean state.

/// A switch that starts `Off` and can only ever be turned `On`.
///
/// No method moves a latch back to `Off`: once on, always on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latch {
    #[default]
    Off,
    On,
}

impl Latch {
    /// Turn the latch on. Idempotent.
    pub fn set(&mut self) {
        *self = Latch::On;
    }

    pub fn is_on(self) -> bool {
        matches!(self, Latch::On)
    }
}
