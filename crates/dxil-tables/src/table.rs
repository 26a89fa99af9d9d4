use std::fmt;

use bitflags::Flags;
use dxil_constants::memory::AddressSpace;
use dxil_constants::{
    limits, operand_index, AtomicBinOpCode, BarrierMode, ComponentMask, ComponentType,
    ControlFlowHint, DxilEnum, Float32DenormMode, HitKind, InputPrimitive, InterpolationMode,
    LowPrecisionMode, OpCode, OpCodeClass, PackingKind, PackingStrategy, PrimitiveTopology,
    QuadOpKind, RayFlag, ResourceClass, ResourceKind, SamplerKind, SemanticInterpretationKind,
    SemanticKind, ShaderFlags, ShaderKind, SigPointKind, SignatureDataWidth, SignatureKind,
    SignedOpKind, TessellatorDomain, TessellatorOutputPrimitive, TessellatorPartitioning,
    WaveBitOpKind, WaveOpKind,
};
use serde::Serialize;

/// How a table's values are meant to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// Closed set of tags, one value each.
    Enum,
    /// Independently combinable bits.
    Flags,
    /// Named constants that are not a closed set.
    Constants,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Enum => "enum",
            Self::Flags => "flags",
            Self::Constants => "constants",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Unsigned(u32),
    Float(f32),
}

impl Value {
    pub fn as_u32(self) -> Option<u32> {
        match self {
            Self::Unsigned(v) => Some(v),
            Self::Float(_) => None,
        }
    }
}

impl From<limits::LimitValue> for Value {
    fn from(value: limits::LimitValue) -> Self {
        match value {
            limits::LimitValue::Unsigned(v) => Self::Unsigned(v),
            limits::LimitValue::Float(v) => Self::Float(v),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Row {
    pub name: &'static str,
    pub value: Value,
}

#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub name: &'static str,
    pub kind: TableKind,
    rows: fn() -> Vec<Row>,
}

impl Table {
    pub fn rows(&self) -> Vec<Row> {
        (self.rows)()
    }

    /// Finds a row by exact name, or failing that by case-insensitive name.
    pub fn find_by_name(&self, name: &str) -> Option<Row> {
        let rows = self.rows();
        rows.iter()
            .find(|row| row.name == name)
            .or_else(|| rows.iter().find(|row| row.name.eq_ignore_ascii_case(name)))
            .copied()
    }

    /// All rows carrying `value`. Constant tables may share a value
    /// between several names.
    pub fn find_by_value(&self, value: u32) -> Vec<Row> {
        self.rows()
            .into_iter()
            .filter(|row| row.value.as_u32() == Some(value))
            .collect()
    }
}

fn enum_rows<E: DxilEnum>() -> Vec<Row> {
    E::all()
        .iter()
        .map(|&tag| Row {
            name: tag.name(),
            value: Value::Unsigned(tag.value()),
        })
        .collect()
}

fn flag_rows<F: Flags>() -> Vec<Row>
where
    F::Bits: Into<u32>,
{
    F::FLAGS
        .iter()
        .map(|flag| Row {
            name: flag.name(),
            value: Value::Unsigned(flag.value().bits().into()),
        })
        .collect()
}

fn operand_index_rows() -> Vec<Row> {
    operand_index::ALL
        .iter()
        .map(|&(name, value)| Row {
            name,
            value: Value::Unsigned(value),
        })
        .collect()
}

fn limit_rows() -> Vec<Row> {
    limits::ALL
        .iter()
        .map(|&(name, value)| Row {
            name,
            value: value.into(),
        })
        .collect()
}

macro_rules! enum_tables {
    ($($ty:ident),+ $(,)?) => {
        [$(Table {
            name: stringify!($ty),
            kind: TableKind::Enum,
            rows: enum_rows::<$ty>,
        },)+]
    };
}

macro_rules! flag_tables {
    ($($ty:ident),+ $(,)?) => {
        [$(Table {
            name: stringify!($ty),
            kind: TableKind::Flags,
            rows: flag_rows::<$ty>,
        },)+]
    };
}

static ENUM_TABLES: [Table; 30] = enum_tables![
    ShaderKind,
    SignatureKind,
    SemanticKind,
    SigPointKind,
    SemanticInterpretationKind,
    PackingKind,
    PackingStrategy,
    ComponentType,
    InterpolationMode,
    SignatureDataWidth,
    Float32DenormMode,
    LowPrecisionMode,
    ResourceClass,
    ResourceKind,
    SamplerKind,
    OpCode,
    OpCodeClass,
    AtomicBinOpCode,
    AddressSpace,
    InputPrimitive,
    PrimitiveTopology,
    TessellatorDomain,
    TessellatorOutputPrimitive,
    TessellatorPartitioning,
    QuadOpKind,
    WaveBitOpKind,
    WaveOpKind,
    SignedOpKind,
    ControlFlowHint,
    HitKind,
];

static FLAG_TABLES: [Table; 4] = flag_tables![BarrierMode, RayFlag, ShaderFlags, ComponentMask];

static CONSTANT_TABLES: [Table; 2] = [
    Table {
        name: "OperandIndex",
        kind: TableKind::Constants,
        rows: operand_index_rows,
    },
    Table {
        name: "Limits",
        kind: TableKind::Constants,
        rows: limit_rows,
    },
];

/// Every table the tool knows about, enums first.
pub fn all() -> impl Iterator<Item = &'static Table> {
    ENUM_TABLES
        .iter()
        .chain(FLAG_TABLES.iter())
        .chain(CONSTANT_TABLES.iter())
}

/// Looks a table up by name, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Table> {
    all().find(|table| table.name.eq_ignore_ascii_case(name))
}
