use bitflags::bitflags;

use crate::macros::dxil_enum;

dxil_enum! {
    /// Read-modify-write operation performed by `OpCode::AtomicBinOp`.
    pub enum AtomicBinOpCode: u32 {
        Add = 0,
        And = 1,
        Or = 2,
        Xor = 3,
        IMin = 4,
        IMax = 5,
        UMin = 6,
        UMax = 7,
        Exchange = 8,
        Invalid = 9,
    }
}

bitflags! {
    /// Barrier and fence mode passed to `OpCode::Barrier`.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct BarrierMode: u32 {
        const SYNC_THREAD_GROUP = 0x0000_0001;
        const UAV_FENCE_GLOBAL = 0x0000_0002;
        const UAV_FENCE_THREAD_GROUP = 0x0000_0004;
        const TGSM_FENCE = 0x0000_0008;
    }
}

pub const DEFAULT_ADDR_SPACE: u32 = 0;
pub const DEVICE_MEMORY_ADDR_SPACE: u32 = 1;
pub const CBUFFER_ADDR_SPACE: u32 = 2;
/// Thread-group shared memory (`groupshared`).
pub const TGSM_ADDR_SPACE: u32 = 3;
pub const GENERIC_POINTER_ADDR_SPACE: u32 = 4;
pub const IMMEDIATE_CBUFFER_ADDR_SPACE: u32 = 5;

dxil_enum! {
    /// LLVM address-space number of a pointer in a DXIL module.
    pub enum AddressSpace: u32 {
        Default = 0,
        DeviceMemory = 1,
        CBuffer = 2,
        Tgsm = 3,
        GenericPointer = 4,
        ImmediateCBuffer = 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn barrier_modes_compose_bitwise() {
        let mode = BarrierMode::SYNC_THREAD_GROUP | BarrierMode::UAV_FENCE_GLOBAL;
        assert_eq!(mode.bits(), 0x3);
        assert!(mode.contains(BarrierMode::SYNC_THREAD_GROUP));
        assert!(mode.contains(BarrierMode::UAV_FENCE_GLOBAL));
        assert!(!mode.contains(BarrierMode::TGSM_FENCE));
        assert_eq!(mode & BarrierMode::UAV_FENCE_GLOBAL, BarrierMode::UAV_FENCE_GLOBAL);
        assert_eq!(BarrierMode::all().bits(), 0xF);
    }

    #[test]
    fn barrier_mode_rejects_unknown_bits() {
        assert_eq!(BarrierMode::from_bits(0x10), None);
        assert_eq!(BarrierMode::from_bits_truncate(0x19).bits(), 0x9);
    }

    #[test]
    fn address_space_enum_matches_constants() {
        assert_eq!(AddressSpace::Default.raw(), DEFAULT_ADDR_SPACE);
        assert_eq!(AddressSpace::DeviceMemory.raw(), DEVICE_MEMORY_ADDR_SPACE);
        assert_eq!(AddressSpace::CBuffer.raw(), CBUFFER_ADDR_SPACE);
        assert_eq!(AddressSpace::Tgsm.raw(), TGSM_ADDR_SPACE);
        assert_eq!(AddressSpace::GenericPointer.raw(), GENERIC_POINTER_ADDR_SPACE);
        assert_eq!(
            AddressSpace::ImmediateCBuffer.raw(),
            IMMEDIATE_CBUFFER_ADDR_SPACE
        );
        assert_eq!(AddressSpace::from_raw(6), None);
    }
}
