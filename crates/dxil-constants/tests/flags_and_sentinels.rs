use bitflags::Flags;
use dxil_constants::mask::{COMP_MASK_ALL, COMP_MASK_W, COMP_MASK_X, COMP_MASK_Y, COMP_MASK_Z};
use dxil_constants::memory::{
    CBUFFER_ADDR_SPACE, DEFAULT_ADDR_SPACE, DEVICE_MEMORY_ADDR_SPACE, GENERIC_POINTER_ADDR_SPACE,
    IMMEDIATE_CBUFFER_ADDR_SPACE, TGSM_ADDR_SPACE,
};
use dxil_constants::{limits, operand_index};
use dxil_constants::{
    get_current_dxil_version, BarrierMode, ComponentMask, ControlFlowHint, DxilVersion,
    InputPrimitive, OpCode, OpCodeClass, RayFlag, ResourceKind, ShaderFlags,
};

fn flag_table<F: Flags>() -> Vec<(&'static str, u32)>
where
    F::Bits: Into<u32>,
{
    F::FLAGS
        .iter()
        .map(|flag| (flag.name(), flag.value().bits().into()))
        .collect()
}

#[test]
fn barrier_mode_bits() {
    assert_eq!(
        flag_table::<BarrierMode>(),
        [
            ("SYNC_THREAD_GROUP", 0x1),
            ("UAV_FENCE_GLOBAL", 0x2),
            ("UAV_FENCE_THREAD_GROUP", 0x4),
            ("TGSM_FENCE", 0x8),
        ]
    );

    let combined = BarrierMode::SYNC_THREAD_GROUP | BarrierMode::UAV_FENCE_GLOBAL;
    assert_eq!(combined.bits(), 0x3);
    assert_eq!(
        combined & BarrierMode::SYNC_THREAD_GROUP,
        BarrierMode::SYNC_THREAD_GROUP
    );
}

#[test]
fn ray_flag_bits() {
    assert_eq!(
        flag_table::<RayFlag>(),
        [
            ("NONE", 0x00),
            ("FORCE_OPAQUE", 0x01),
            ("FORCE_NON_OPAQUE", 0x02),
            ("ACCEPT_FIRST_HIT_AND_END_SEARCH", 0x04),
            ("SKIP_CLOSEST_HIT_SHADER", 0x08),
            ("CULL_BACK_FACING_TRIANGLES", 0x10),
            ("CULL_FRONT_FACING_TRIANGLES", 0x20),
            ("CULL_OPAQUE", 0x40),
            ("CULL_NON_OPAQUE", 0x80),
        ]
    );
}

#[test]
fn shader_flag_bits() {
    assert_eq!(
        flag_table::<ShaderFlags>(),
        [
            ("DISABLE_OPTIMIZATIONS", 0x001),
            ("DISABLE_MATH_REFACTORING", 0x002),
            ("ENABLE_DOUBLE_PRECISION", 0x004),
            ("FORCE_EARLY_DEPTH_STENCIL", 0x008),
            ("ENABLE_RAW_AND_STRUCTURED_BUFFERS", 0x010),
            ("ENABLE_MIN_PRECISION", 0x020),
            ("ENABLE_DOUBLE_EXTENSIONS", 0x040),
            ("ENABLE_MSAD", 0x080),
            ("ALL_RESOURCES_BOUND", 0x100),
        ]
    );
}

#[test]
fn component_masks() {
    assert_eq!(
        [COMP_MASK_X, COMP_MASK_Y, COMP_MASK_Z, COMP_MASK_W, COMP_MASK_ALL],
        [0x1, 0x2, 0x4, 0x8, 0xF]
    );
    assert_eq!(
        flag_table::<ComponentMask>(),
        [("X", 0x1), ("Y", 0x2), ("Z", 0x4), ("W", 0x8)]
    );
}

#[test]
fn address_spaces() {
    assert_eq!(
        [
            DEFAULT_ADDR_SPACE,
            DEVICE_MEMORY_ADDR_SPACE,
            CBUFFER_ADDR_SPACE,
            TGSM_ADDR_SPACE,
            GENERIC_POINTER_ADDR_SPACE,
            IMMEDIATE_CBUFFER_ADDR_SPACE,
        ],
        [0, 1, 2, 3, 4, 5]
    );
}

#[test]
fn opcode_sentinels() {
    assert_eq!(OpCode::TraceRay as u32, 157);
    assert_eq!(OpCode::NUM_OP_CODES, 162);
    assert_eq!(OpCode::ALL.len() as u32, OpCode::NUM_OP_CODES);
    assert_eq!(OpCode::from_raw(OpCode::NUM_OP_CODES), None);
    assert_eq!(
        [
            OpCode::NUM_OP_CODES_DXIL_1_0,
            OpCode::NUM_OP_CODES_DXIL_1_1,
            OpCode::NUM_OP_CODES_DXIL_1_2,
            OpCode::NUM_OP_CODES_DXIL_1_3,
        ],
        [137, 139, 141, 162]
    );

    assert_eq!(OpCodeClass::NUM_OP_CLASSES, 118);
    assert_eq!(OpCodeClass::ALL.len() as u32, OpCodeClass::NUM_OP_CLASSES);
    assert_eq!(
        [
            OpCodeClass::NUM_OP_CLASSES_DXIL_1_0,
            OpCodeClass::NUM_OP_CLASSES_DXIL_1_1,
            OpCodeClass::NUM_OP_CLASSES_DXIL_1_2,
            OpCodeClass::NUM_OP_CLASSES_DXIL_1_3,
        ],
        [93, 95, 97, 118]
    );
}

#[test]
fn per_version_counts_match_version_decode() {
    for minor in 0..=3u8 {
        let version = DxilVersion::new(1, minor);
        let count = OpCode::num_for_version(version).unwrap();
        let newest = OpCode::from_raw(count - 1).unwrap();
        assert!(newest.is_available_in(version));
        if let Some(next) = OpCode::from_raw(count) {
            assert!(!next.is_available_in(version), "{next} in {version}");
        }
    }
    assert_eq!(OpCode::num_for_version(DxilVersion::new(1, 4)), None);
    assert_eq!(OpCodeClass::num_for_version(DxilVersion::new(2, 0)), None);
}

#[test]
fn last_entry_sentinels_follow_the_real_tags() {
    assert_eq!(ResourceKind::Invalid as u32, 0);
    assert_eq!(ResourceKind::NumEntries as u32, 17);
    assert_eq!(InputPrimitive::LastEntry as u32, 40);
    assert_eq!(ControlFlowHint::LastEntry as u32, 7);
}

#[test]
fn operand_positions() {
    assert_eq!(operand_index::OPCODE_IDX, 0);
    assert_eq!(operand_index::TRACE_RAY_NUM_OP, 16);
    assert_eq!(
        operand_index::RAW_BUFFER_STORE_MASK_OP_IDX,
        operand_index::RAW_BUFFER_STORE_ALIGNMENT_OP_IDX
    );
}

#[test]
fn current_version() {
    assert_eq!(get_current_dxil_version(), 0x0103);
    assert!(DxilVersion::CURRENT.is_supported());
}

#[test]
fn limits_used_by_validation() {
    assert_eq!(limits::MAX_CS_THREADS_PER_GROUP, 1024);
    assert_eq!(limits::MAX_CS_THREAD_GROUP_Z, 64);
    assert_eq!(limits::MAX_TGSM_SIZE, 32 * 1024);
    assert_eq!(limits::MAX_IA_PATCH_CONTROL_POINT_COUNT, 32);
    assert_eq!(limits::HS_MAX_TESS_FACTOR_UPPER_BOUND, 64.0);
    assert_eq!(limits::MAX_MIP_LOD_BIAS, 15.99);
}
