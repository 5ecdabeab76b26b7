//! Occlusion categories.

/// Bit set of occlusion layers.  An obstacle blocks a ray when its layers
/// intersect the ray's filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(u32::MAX);

    /// Mask with only layer `n` set.  Layers past 31 do not exist and give
    /// [`NONE`](Self::NONE).
    pub const fn layer(n: u32) -> Self {
        match 1u32.checked_shl(n) {
            Some(bit) => Self(bit),
            None => Self::NONE,
        }
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl std::ops::BitOr for LayerMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}
