//! Command-line access to the `dxil-constants` tables.
//!
//! Every enumeration, bit-flag set and constant group is registered in
//! [`table`] and can be listed, dumped or queried as text or JSON.

pub mod config;
pub mod render;
pub mod table;

use std::io::Write;
use std::num::ParseIntError;

use anyhow::{anyhow, bail, Context};
use dxil_constants::{DxilVersion, OpCode};

use crate::config::{Command, Config, VersionCommand};
use crate::render::{render, OpcodeInfo, TableDump, TableList, TableSummary, VersionInfo};
use crate::table::Table;

/// Parses a decimal or `0x`-prefixed hexadecimal number.
pub fn parse_u32(s: &str) -> Result<u32, ParseIntError> {
    let s = s.trim();
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    }
}

fn find_table(name: &str) -> anyhow::Result<&'static Table> {
    table::find(name).ok_or_else(|| {
        anyhow!("unknown table {name:?} (run `dxil-tables list` to see every table)")
    })
}

fn lookup_opcode(key: &str) -> anyhow::Result<OpCode> {
    if let Ok(value) = parse_u32(key) {
        return OpCode::try_from(value).map_err(Into::into);
    }
    key.parse::<OpCode>().map_err(Into::into)
}

/// Executes the configured command, writing its output to `out`.
pub fn run(config: &Config, out: &mut dyn Write) -> anyhow::Result<()> {
    match &config.command {
        Command::List => {
            let list = TableList(table::all().map(TableSummary::of).collect());
            tracing::debug!(tables = list.0.len(), "listing tables");
            render(out, config.format, &list)
        }
        Command::Dump { table } => {
            let table = find_table(table)?;
            let rows = table.rows();
            tracing::debug!(table = table.name, rows = rows.len(), "dumping table");
            render(out, config.format, &TableDump::new(table, rows))
        }
        Command::Lookup { table, key } => {
            let table = find_table(table)?;
            let rows = match parse_u32(key) {
                Ok(value) => table.find_by_value(value),
                Err(_) => table.find_by_name(key).into_iter().collect(),
            };
            tracing::debug!(table = table.name, key = %key, matches = rows.len(), "lookup");
            if rows.is_empty() {
                bail!("{} has no entry {key:?}", table.name);
            }
            render(out, config.format, &TableDump::new(table, rows))
        }
        Command::Opcode { key } => {
            let op = lookup_opcode(key).with_context(|| format!("resolving opcode {key:?}"))?;
            render(out, config.format, &OpcodeInfo::from(op))
        }
        Command::Version(command) => {
            let version = match command {
                VersionCommand::Encode { version: None } | VersionCommand::Current => {
                    DxilVersion::CURRENT
                }
                VersionCommand::Encode {
                    version: Some(version),
                } => version.parse::<DxilVersion>()?,
                VersionCommand::Decode { packed, strict } => {
                    let packed = parse_u32(packed)
                        .with_context(|| format!("invalid version word {packed:?}"))?;
                    if *strict {
                        DxilVersion::from_packed_checked(packed)?
                    } else {
                        if packed > 0xFFFF {
                            tracing::warn!(packed, "ignoring bits above the 16-bit version field");
                        }
                        DxilVersion::from_packed(packed)
                    }
                }
            };
            render(out, config.format, &VersionInfo::from(version))
        }
    }
}
