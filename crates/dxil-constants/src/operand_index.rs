//! Operand positions inside `dx.op.*` calls, per operation class.
//!
//! Operand 0 is always the [`crate::OpCode`] itself, so source operands start
//! at 1. Only the classes that lowering and validation address by position are
//! listed.

/// Position of the opcode operand in every operation.
pub const OPCODE_IDX: u32 = 0;

// Unary operators.
pub const UNARY_SRC0_OP_IDX: u32 = 1;

// Binary operators.
pub const BINARY_SRC0_OP_IDX: u32 = 1;
pub const BINARY_SRC1_OP_IDX: u32 = 2;

// Three-source operators.
pub const TRINARY_SRC0_OP_IDX: u32 = 1;
pub const TRINARY_SRC1_OP_IDX: u32 = 2;
pub const TRINARY_SRC2_OP_IDX: u32 = 3;

pub const LOAD_INPUT_ID_OP_IDX: u32 = 1;
pub const LOAD_INPUT_ROW_OP_IDX: u32 = 2;
pub const LOAD_INPUT_COL_OP_IDX: u32 = 3;
/// Only present on inputs with a vertex axis (e.g. geometry shader inputs).
pub const LOAD_INPUT_VERTEX_ID_OP_IDX: u32 = 4;

pub const STORE_OUTPUT_ID_OP_IDX: u32 = 1;
pub const STORE_OUTPUT_ROW_OP_IDX: u32 = 2;
pub const STORE_OUTPUT_COL_OP_IDX: u32 = 3;
pub const STORE_OUTPUT_VAL_OP_IDX: u32 = 4;

pub const DOMAIN_LOCATION_COL_OP_IDX: u32 = 1;

pub const BUFFER_LOAD_HANDLE_OP_IDX: u32 = 1;
pub const BUFFER_LOAD_COORD0_OP_IDX: u32 = 2;
pub const BUFFER_LOAD_COORD1_OP_IDX: u32 = 3;

pub const BUFFER_STORE_HANDLE_OP_IDX: u32 = 1;
pub const BUFFER_STORE_COORD0_OP_IDX: u32 = 2;
pub const BUFFER_STORE_COORD1_OP_IDX: u32 = 3;
pub const BUFFER_STORE_VAL0_OP_IDX: u32 = 4;
pub const BUFFER_STORE_VAL1_OP_IDX: u32 = 5;
pub const BUFFER_STORE_VAL2_OP_IDX: u32 = 6;
pub const BUFFER_STORE_VAL3_OP_IDX: u32 = 7;
/// Write mask; a [`crate::ComponentMask`] value.
pub const BUFFER_STORE_MASK_OP_IDX: u32 = 8;

pub const RAW_BUFFER_LOAD_HANDLE_OP_IDX: u32 = 1;
pub const RAW_BUFFER_LOAD_INDEX_OP_IDX: u32 = 2;
pub const RAW_BUFFER_LOAD_ELEMENT_OFFSET_OP_IDX: u32 = 3;
pub const RAW_BUFFER_LOAD_MASK_OP_IDX: u32 = 4;
pub const RAW_BUFFER_LOAD_ALIGNMENT_OP_IDX: u32 = 5;

pub const RAW_BUFFER_STORE_HANDLE_OP_IDX: u32 = 1;
pub const RAW_BUFFER_STORE_INDEX_OP_IDX: u32 = 2;
pub const RAW_BUFFER_STORE_ELEMENT_OFFSET_OP_IDX: u32 = 3;
pub const RAW_BUFFER_STORE_VAL0_OP_IDX: u32 = 4;
pub const RAW_BUFFER_STORE_VAL1_OP_IDX: u32 = 5;
pub const RAW_BUFFER_STORE_VAL2_OP_IDX: u32 = 6;
pub const RAW_BUFFER_STORE_VAL3_OP_IDX: u32 = 7;
pub const RAW_BUFFER_STORE_MASK_OP_IDX: u32 = 8;
/// Shares its position with [`RAW_BUFFER_STORE_MASK_OP_IDX`]; the encoded value is
/// kept as published.
pub const RAW_BUFFER_STORE_ALIGNMENT_OP_IDX: u32 = 8;

pub const TEXTURE_STORE_HANDLE_OP_IDX: u32 = 1;
pub const TEXTURE_STORE_COORD0_OP_IDX: u32 = 2;
pub const TEXTURE_STORE_COORD1_OP_IDX: u32 = 3;
pub const TEXTURE_STORE_COORD2_OP_IDX: u32 = 4;
pub const TEXTURE_STORE_VAL0_OP_IDX: u32 = 5;
pub const TEXTURE_STORE_VAL1_OP_IDX: u32 = 6;
pub const TEXTURE_STORE_VAL2_OP_IDX: u32 = 7;
pub const TEXTURE_STORE_VAL3_OP_IDX: u32 = 8;
/// Write mask; a [`crate::ComponentMask`] value.
pub const TEXTURE_STORE_MASK_OP_IDX: u32 = 9;

pub const TEXTURE_GATHER_TEX_HANDLE_OP_IDX: u32 = 1;
pub const TEXTURE_GATHER_SAMPLER_HANDLE_OP_IDX: u32 = 2;
pub const TEXTURE_GATHER_COORD0_OP_IDX: u32 = 3;
pub const TEXTURE_GATHER_COORD1_OP_IDX: u32 = 4;
pub const TEXTURE_GATHER_COORD2_OP_IDX: u32 = 5;
pub const TEXTURE_GATHER_COORD3_OP_IDX: u32 = 6;
pub const TEXTURE_GATHER_OFFSET0_OP_IDX: u32 = 7;
pub const TEXTURE_GATHER_OFFSET1_OP_IDX: u32 = 8;
pub const TEXTURE_GATHER_OFFSET2_OP_IDX: u32 = 9;
/// Component to gather.
pub const TEXTURE_GATHER_CHANNEL_OP_IDX: u32 = 10;
/// Comparison value; only present on `TextureGatherCmp`.
pub const TEXTURE_GATHER_CMP_CMP_VAL_OP_IDX: u32 = 11;

pub const TEXTURE_SAMPLE_TEX_HANDLE_OP_IDX: u32 = 1;
pub const TEXTURE_SAMPLE_SAMPLER_HANDLE_OP_IDX: u32 = 2;
pub const TEXTURE_SAMPLE_COORD0_OP_IDX: u32 = 3;
pub const TEXTURE_SAMPLE_COORD1_OP_IDX: u32 = 4;
pub const TEXTURE_SAMPLE_COORD2_OP_IDX: u32 = 5;
pub const TEXTURE_SAMPLE_COORD3_OP_IDX: u32 = 6;
pub const TEXTURE_SAMPLE_OFFSET0_OP_IDX: u32 = 7;
pub const TEXTURE_SAMPLE_OFFSET1_OP_IDX: u32 = 8;
pub const TEXTURE_SAMPLE_OFFSET2_OP_IDX: u32 = 9;
pub const TEXTURE_SAMPLE_CLAMP_OP_IDX: u32 = 10;

/// Operand 2 is the [`crate::AtomicBinOpCode`].
pub const ATOMIC_BIN_OP_COORD0_OP_IDX: u32 = 3;
pub const ATOMIC_BIN_OP_COORD1_OP_IDX: u32 = 4;
pub const ATOMIC_BIN_OP_COORD2_OP_IDX: u32 = 5;

pub const ATOMIC_CMP_EXCHANGE_COORD0_OP_IDX: u32 = 2;
pub const ATOMIC_CMP_EXCHANGE_COORD1_OP_IDX: u32 = 3;
pub const ATOMIC_CMP_EXCHANGE_COORD2_OP_IDX: u32 = 4;

/// A [`crate::ResourceClass`] value.
pub const CREATE_HANDLE_RES_CLASS_OP_IDX: u32 = 1;
pub const CREATE_HANDLE_RES_ID_OP_IDX: u32 = 2;
pub const CREATE_HANDLE_RES_INDEX_OP_IDX: u32 = 3;
pub const CREATE_HANDLE_IS_UNIFORM_OP_IDX: u32 = 4;

pub const CREATE_HANDLE_FOR_LIB_RES_OP_IDX: u32 = 1;

/// First of the eight flattened `RayDesc` operands.
pub const TRACE_RAY_RAY_DESC_OP_IDX: u32 = 7;
pub const TRACE_RAY_PAYLOAD_OP_IDX: u32 = 15;
/// Total operand count of `TraceRay`, including the opcode.
pub const TRACE_RAY_NUM_OP: u32 = 16;

/// Stream index operand of `EmitStream`, `CutStream` and `EmitThenCutStream`.
pub const STREAM_EMIT_CUT_ID_OP_IDX: u32 = 1;

/// Every operand position above, by name, in declaration order.
pub const ALL: &[(&str, u32)] = &[
    ("OPCODE_IDX", OPCODE_IDX),
    ("UNARY_SRC0_OP_IDX", UNARY_SRC0_OP_IDX),
    ("BINARY_SRC0_OP_IDX", BINARY_SRC0_OP_IDX),
    ("BINARY_SRC1_OP_IDX", BINARY_SRC1_OP_IDX),
    ("TRINARY_SRC0_OP_IDX", TRINARY_SRC0_OP_IDX),
    ("TRINARY_SRC1_OP_IDX", TRINARY_SRC1_OP_IDX),
    ("TRINARY_SRC2_OP_IDX", TRINARY_SRC2_OP_IDX),
    ("LOAD_INPUT_ID_OP_IDX", LOAD_INPUT_ID_OP_IDX),
    ("LOAD_INPUT_ROW_OP_IDX", LOAD_INPUT_ROW_OP_IDX),
    ("LOAD_INPUT_COL_OP_IDX", LOAD_INPUT_COL_OP_IDX),
    ("LOAD_INPUT_VERTEX_ID_OP_IDX", LOAD_INPUT_VERTEX_ID_OP_IDX),
    ("STORE_OUTPUT_ID_OP_IDX", STORE_OUTPUT_ID_OP_IDX),
    ("STORE_OUTPUT_ROW_OP_IDX", STORE_OUTPUT_ROW_OP_IDX),
    ("STORE_OUTPUT_COL_OP_IDX", STORE_OUTPUT_COL_OP_IDX),
    ("STORE_OUTPUT_VAL_OP_IDX", STORE_OUTPUT_VAL_OP_IDX),
    ("DOMAIN_LOCATION_COL_OP_IDX", DOMAIN_LOCATION_COL_OP_IDX),
    ("BUFFER_LOAD_HANDLE_OP_IDX", BUFFER_LOAD_HANDLE_OP_IDX),
    ("BUFFER_LOAD_COORD0_OP_IDX", BUFFER_LOAD_COORD0_OP_IDX),
    ("BUFFER_LOAD_COORD1_OP_IDX", BUFFER_LOAD_COORD1_OP_IDX),
    ("BUFFER_STORE_HANDLE_OP_IDX", BUFFER_STORE_HANDLE_OP_IDX),
    ("BUFFER_STORE_COORD0_OP_IDX", BUFFER_STORE_COORD0_OP_IDX),
    ("BUFFER_STORE_COORD1_OP_IDX", BUFFER_STORE_COORD1_OP_IDX),
    ("BUFFER_STORE_VAL0_OP_IDX", BUFFER_STORE_VAL0_OP_IDX),
    ("BUFFER_STORE_VAL1_OP_IDX", BUFFER_STORE_VAL1_OP_IDX),
    ("BUFFER_STORE_VAL2_OP_IDX", BUFFER_STORE_VAL2_OP_IDX),
    ("BUFFER_STORE_VAL3_OP_IDX", BUFFER_STORE_VAL3_OP_IDX),
    ("BUFFER_STORE_MASK_OP_IDX", BUFFER_STORE_MASK_OP_IDX),
    ("RAW_BUFFER_LOAD_HANDLE_OP_IDX", RAW_BUFFER_LOAD_HANDLE_OP_IDX),
    ("RAW_BUFFER_LOAD_INDEX_OP_IDX", RAW_BUFFER_LOAD_INDEX_OP_IDX),
    ("RAW_BUFFER_LOAD_ELEMENT_OFFSET_OP_IDX", RAW_BUFFER_LOAD_ELEMENT_OFFSET_OP_IDX),
    ("RAW_BUFFER_LOAD_MASK_OP_IDX", RAW_BUFFER_LOAD_MASK_OP_IDX),
    ("RAW_BUFFER_LOAD_ALIGNMENT_OP_IDX", RAW_BUFFER_LOAD_ALIGNMENT_OP_IDX),
    ("RAW_BUFFER_STORE_HANDLE_OP_IDX", RAW_BUFFER_STORE_HANDLE_OP_IDX),
    ("RAW_BUFFER_STORE_INDEX_OP_IDX", RAW_BUFFER_STORE_INDEX_OP_IDX),
    ("RAW_BUFFER_STORE_ELEMENT_OFFSET_OP_IDX", RAW_BUFFER_STORE_ELEMENT_OFFSET_OP_IDX),
    ("RAW_BUFFER_STORE_VAL0_OP_IDX", RAW_BUFFER_STORE_VAL0_OP_IDX),
    ("RAW_BUFFER_STORE_VAL1_OP_IDX", RAW_BUFFER_STORE_VAL1_OP_IDX),
    ("RAW_BUFFER_STORE_VAL2_OP_IDX", RAW_BUFFER_STORE_VAL2_OP_IDX),
    ("RAW_BUFFER_STORE_VAL3_OP_IDX", RAW_BUFFER_STORE_VAL3_OP_IDX),
    ("RAW_BUFFER_STORE_MASK_OP_IDX", RAW_BUFFER_STORE_MASK_OP_IDX),
    ("RAW_BUFFER_STORE_ALIGNMENT_OP_IDX", RAW_BUFFER_STORE_ALIGNMENT_OP_IDX),
    ("TEXTURE_STORE_HANDLE_OP_IDX", TEXTURE_STORE_HANDLE_OP_IDX),
    ("TEXTURE_STORE_COORD0_OP_IDX", TEXTURE_STORE_COORD0_OP_IDX),
    ("TEXTURE_STORE_COORD1_OP_IDX", TEXTURE_STORE_COORD1_OP_IDX),
    ("TEXTURE_STORE_COORD2_OP_IDX", TEXTURE_STORE_COORD2_OP_IDX),
    ("TEXTURE_STORE_VAL0_OP_IDX", TEXTURE_STORE_VAL0_OP_IDX),
    ("TEXTURE_STORE_VAL1_OP_IDX", TEXTURE_STORE_VAL1_OP_IDX),
    ("TEXTURE_STORE_VAL2_OP_IDX", TEXTURE_STORE_VAL2_OP_IDX),
    ("TEXTURE_STORE_VAL3_OP_IDX", TEXTURE_STORE_VAL3_OP_IDX),
    ("TEXTURE_STORE_MASK_OP_IDX", TEXTURE_STORE_MASK_OP_IDX),
    ("TEXTURE_GATHER_TEX_HANDLE_OP_IDX", TEXTURE_GATHER_TEX_HANDLE_OP_IDX),
    ("TEXTURE_GATHER_SAMPLER_HANDLE_OP_IDX", TEXTURE_GATHER_SAMPLER_HANDLE_OP_IDX),
    ("TEXTURE_GATHER_COORD0_OP_IDX", TEXTURE_GATHER_COORD0_OP_IDX),
    ("TEXTURE_GATHER_COORD1_OP_IDX", TEXTURE_GATHER_COORD1_OP_IDX),
    ("TEXTURE_GATHER_COORD2_OP_IDX", TEXTURE_GATHER_COORD2_OP_IDX),
    ("TEXTURE_GATHER_COORD3_OP_IDX", TEXTURE_GATHER_COORD3_OP_IDX),
    ("TEXTURE_GATHER_OFFSET0_OP_IDX", TEXTURE_GATHER_OFFSET0_OP_IDX),
    ("TEXTURE_GATHER_OFFSET1_OP_IDX", TEXTURE_GATHER_OFFSET1_OP_IDX),
    ("TEXTURE_GATHER_OFFSET2_OP_IDX", TEXTURE_GATHER_OFFSET2_OP_IDX),
    ("TEXTURE_GATHER_CHANNEL_OP_IDX", TEXTURE_GATHER_CHANNEL_OP_IDX),
    ("TEXTURE_GATHER_CMP_CMP_VAL_OP_IDX", TEXTURE_GATHER_CMP_CMP_VAL_OP_IDX),
    ("TEXTURE_SAMPLE_TEX_HANDLE_OP_IDX", TEXTURE_SAMPLE_TEX_HANDLE_OP_IDX),
    ("TEXTURE_SAMPLE_SAMPLER_HANDLE_OP_IDX", TEXTURE_SAMPLE_SAMPLER_HANDLE_OP_IDX),
    ("TEXTURE_SAMPLE_COORD0_OP_IDX", TEXTURE_SAMPLE_COORD0_OP_IDX),
    ("TEXTURE_SAMPLE_COORD1_OP_IDX", TEXTURE_SAMPLE_COORD1_OP_IDX),
    ("TEXTURE_SAMPLE_COORD2_OP_IDX", TEXTURE_SAMPLE_COORD2_OP_IDX),
    ("TEXTURE_SAMPLE_COORD3_OP_IDX", TEXTURE_SAMPLE_COORD3_OP_IDX),
    ("TEXTURE_SAMPLE_OFFSET0_OP_IDX", TEXTURE_SAMPLE_OFFSET0_OP_IDX),
    ("TEXTURE_SAMPLE_OFFSET1_OP_IDX", TEXTURE_SAMPLE_OFFSET1_OP_IDX),
    ("TEXTURE_SAMPLE_OFFSET2_OP_IDX", TEXTURE_SAMPLE_OFFSET2_OP_IDX),
    ("TEXTURE_SAMPLE_CLAMP_OP_IDX", TEXTURE_SAMPLE_CLAMP_OP_IDX),
    ("ATOMIC_BIN_OP_COORD0_OP_IDX", ATOMIC_BIN_OP_COORD0_OP_IDX),
    ("ATOMIC_BIN_OP_COORD1_OP_IDX", ATOMIC_BIN_OP_COORD1_OP_IDX),
    ("ATOMIC_BIN_OP_COORD2_OP_IDX", ATOMIC_BIN_OP_COORD2_OP_IDX),
    ("ATOMIC_CMP_EXCHANGE_COORD0_OP_IDX", ATOMIC_CMP_EXCHANGE_COORD0_OP_IDX),
    ("ATOMIC_CMP_EXCHANGE_COORD1_OP_IDX", ATOMIC_CMP_EXCHANGE_COORD1_OP_IDX),
    ("ATOMIC_CMP_EXCHANGE_COORD2_OP_IDX", ATOMIC_CMP_EXCHANGE_COORD2_OP_IDX),
    ("CREATE_HANDLE_RES_CLASS_OP_IDX", CREATE_HANDLE_RES_CLASS_OP_IDX),
    ("CREATE_HANDLE_RES_ID_OP_IDX", CREATE_HANDLE_RES_ID_OP_IDX),
    ("CREATE_HANDLE_RES_INDEX_OP_IDX", CREATE_HANDLE_RES_INDEX_OP_IDX),
    ("CREATE_HANDLE_IS_UNIFORM_OP_IDX", CREATE_HANDLE_IS_UNIFORM_OP_IDX),
    ("CREATE_HANDLE_FOR_LIB_RES_OP_IDX", CREATE_HANDLE_FOR_LIB_RES_OP_IDX),
    ("TRACE_RAY_RAY_DESC_OP_IDX", TRACE_RAY_RAY_DESC_OP_IDX),
    ("TRACE_RAY_PAYLOAD_OP_IDX", TRACE_RAY_PAYLOAD_OP_IDX),
    ("TRACE_RAY_NUM_OP", TRACE_RAY_NUM_OP),
    ("STREAM_EMIT_CUT_ID_OP_IDX", STREAM_EMIT_CUT_ID_OP_IDX),
];
