use std::io::{self, Write};

use dxil_constants::{DxilVersion, OpCode};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::table::{Row, Table, TableKind, Value};

/// Output that can be printed either as aligned text or as JSON.
pub trait Render: Serialize {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub fn render<T: Render>(
    out: &mut dyn Write,
    format: OutputFormat,
    value: &T,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => value.write_text(out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TableSummary {
    pub name: &'static str,
    pub kind: TableKind,
    pub rows: usize,
}

impl TableSummary {
    pub fn of(table: &Table) -> Self {
        Self {
            name: table.name,
            kind: table.kind,
            rows: table.rows().len(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct TableList(pub Vec<TableSummary>);

impl Render for TableList {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        let width = self.0.iter().map(|t| t.name.len()).max().unwrap_or(0);
        for table in &self.0 {
            writeln!(
                out,
                "{:<width$}  {:<9}  {}",
                table.name, table.kind, table.rows
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct TableDump {
    pub table: &'static str,
    pub kind: TableKind,
    pub rows: Vec<Row>,
}

impl TableDump {
    pub fn new(table: &Table, rows: Vec<Row>) -> Self {
        Self {
            table: table.name,
            kind: table.kind,
            rows,
        }
    }
}

fn format_value(kind: TableKind, value: Value) -> String {
    match (kind, value) {
        (TableKind::Flags, Value::Unsigned(v)) => format!("0x{v:08x}"),
        (_, Value::Unsigned(v)) => v.to_string(),
        (_, Value::Float(v)) => format!("{v:?}"),
    }
}

impl Render for TableDump {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        let width = self.rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
        for row in &self.rows {
            writeln!(
                out,
                "{:<width$}  {}",
                row.name,
                format_value(self.kind, row.value)
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct OpcodeInfo {
    pub name: &'static str,
    pub value: u32,
    pub min_dxil_version: String,
}

impl From<OpCode> for OpcodeInfo {
    fn from(op: OpCode) -> Self {
        Self {
            name: op.name(),
            value: op.raw(),
            min_dxil_version: op.min_dxil_version().to_string(),
        }
    }
}

impl Render for OpcodeInfo {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "{} = {} (DXIL {})",
            self.name, self.value, self.min_dxil_version
        )
    }
}

#[derive(Debug, Serialize)]
pub struct VersionInfo {
    pub version: String,
    pub major: u8,
    pub minor: u8,
    pub packed: u32,
    pub supported: bool,
}

impl From<DxilVersion> for VersionInfo {
    fn from(version: DxilVersion) -> Self {
        Self {
            version: version.to_string(),
            major: version.major,
            minor: version.minor,
            packed: version.packed(),
            supported: version.is_supported(),
        }
    }
}

impl Render for VersionInfo {
    fn write_text(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "{} = 0x{:04x} ({})",
            self.version, self.packed, self.packed
        )
    }
}
