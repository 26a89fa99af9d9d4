use bitflags::bitflags;

pub const COMP_MASK_X: u8 = 0x1;
pub const COMP_MASK_Y: u8 = 0x2;
pub const COMP_MASK_Z: u8 = 0x4;
pub const COMP_MASK_W: u8 = 0x8;
pub const COMP_MASK_ALL: u8 = 0xF;

bitflags! {
    /// Typed XYZW component mask, e.g. the write mask of a buffer store.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct ComponentMask: u8 {
        const X = COMP_MASK_X;
        const Y = COMP_MASK_Y;
        const Z = COMP_MASK_Z;
        const W = COMP_MASK_W;
    }
}

impl ComponentMask {
    /// Mask covering the first `count` components. `count` is clamped to 4.
    pub const fn first(count: u32) -> Self {
        let count = if count > 4 { 4 } else { count };
        Self::from_bits_truncate(((1u32 << count) - 1) as u8)
    }
}
