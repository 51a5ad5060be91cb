//! Per-object render-layer bitmask.

/// A 32-bit render-layer mask.
///
/// Each bit is one visibility channel. The renderer draws an object in a pass
/// when the object's mask and the camera's mask share at least one bit. New
/// masks have only channel 0 (the primary render layer) enabled.
///
/// Channel indices are expected in `0..=31`. Larger values wrap modulo 32,
/// the same way a shift of a 32-bit integer does on the GPU side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layers {
    mask: u32,
}

#[inline]
const fn channel_bit(channel: u32) -> u32 {
    1u32.wrapping_shl(channel)
}

impl Layers {
    /// Mask with no channel enabled.
    pub const NONE: Self = Self { mask: 0 };
    /// Mask with every channel enabled.
    pub const ALL: Self = Self { mask: u32::MAX };

    /// Mask with only channel 0 enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self { mask: 1 }
    }

    /// Wrap a raw bit pattern.
    #[must_use]
    pub const fn from_bits(mask: u32) -> Self {
        Self { mask }
    }

    /// Raw bit pattern.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.mask
    }

    /// Replace the whole mask with only `channel` enabled.
    pub fn set(&mut self, channel: u32) {
        self.mask = channel_bit(channel);
    }

    /// Enable `channel`, leaving the other bits untouched.
    pub fn enable(&mut self, channel: u32) {
        self.mask |= channel_bit(channel);
    }

    /// Disable `channel`, leaving the other bits untouched.
    pub fn disable(&mut self, channel: u32) {
        self.mask &= !channel_bit(channel);
    }

    /// Flip `channel`.
    pub fn toggle(&mut self, channel: u32) {
        self.mask ^= channel_bit(channel);
    }

    /// Enable every channel.
    pub fn enable_all(&mut self) {
        self.mask = u32::MAX;
    }

    /// Disable every channel.
    pub fn disable_all(&mut self) {
        self.mask = 0;
    }

    /// Whether `channel` is enabled.
    #[must_use]
    pub const fn is_enabled(self, channel: u32) -> bool {
        self.mask & channel_bit(channel) != 0
    }

    /// Whether this mask shares at least one channel with `other`.
    #[must_use]
    pub const fn test(self, other: Self) -> bool {
        self.mask & other.mask != 0
    }

    /// Enabled channels in ascending order.
    pub fn channels(self) -> impl Iterator<Item = u32> {
        (0..u32::BITS).filter(move |&c| self.is_enabled(c))
    }
}

impl Default for Layers {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything that carries a [`Layers`] mask.
pub trait Layered {
    /// The object's layer mask.
    fn layers(&self) -> &Layers;
    /// Mutable access to the object's layer mask.
    fn layers_mut(&mut self) -> &mut Layers;
}

impl Layered for Layers {
    fn layers(&self) -> &Layers {
        self
    }

    fn layers_mut(&mut self) -> &mut Layers {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_mask_has_only_primary_channel() {
        let layers = Layers::new();
        assert_eq!(layers.bits(), 1);
        assert!(layers.is_enabled(0));
        assert_eq!(layers.channels().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn enable_disable_leave_other_bits() {
        let mut layers = Layers::from_bits(0b1010);
        layers.enable(0);
        layers.disable(3);
        assert_eq!(layers.bits(), 0b0011);
    }

    #[test]
    fn set_replaces_whole_mask() {
        let mut layers = Layers::NONE;
        layers.enable(2);
        layers.enable(5);
        layers.enable(7);
        layers.set(10);
        assert_eq!(layers.channels().collect::<Vec<_>>(), vec![10]);
    }

    #[test]
    fn highest_channel_and_wrapping() {
        let mut layers = Layers::NONE;
        layers.enable(31);
        assert_eq!(layers.bits(), 0x8000_0000);
        // 32 wraps onto channel 0.
        layers.enable(32);
        assert!(layers.is_enabled(0));
    }

    #[test]
    fn toggle_and_test() {
        let mut a = Layers::NONE;
        a.toggle(4);
        assert!(a.is_enabled(4));
        assert!(a.test(Layers::from_bits(1 << 4)));
        a.toggle(4);
        assert!(!a.test(Layers::ALL));
    }
}
