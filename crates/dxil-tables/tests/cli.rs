#![cfg(not(target_arch = "wasm32"))]

use assert_cmd::Command;
use predicates::prelude::*;

fn dxil_tables() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dxil-tables"));
    cmd.env_remove("DXIL_TABLES_FORMAT")
        .env_remove("DXIL_TABLES_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_lists_subcommands_and_env() {
    dxil_tables()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dump"))
        .stdout(predicate::str::contains("lookup"))
        .stdout(predicate::str::contains("version"))
        .stdout(predicate::str::contains("DXIL_TABLES_FORMAT"));
}

#[test]
fn list_includes_every_table_kind() {
    dxil_tables()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("OpCode"))
        .stdout(predicate::str::contains("BarrierMode"))
        .stdout(predicate::str::contains("OperandIndex"))
        .stdout(predicate::str::contains("Limits"));
}

#[test]
fn dump_opcode_as_json() {
    let output = dxil_tables()
        .args(["dump", "opcode", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["table"], "OpCode");
    let rows = json["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 162);
    assert_eq!(rows[157]["name"], "TraceRay");
    assert_eq!(rows[157]["value"], 157);
}

#[test]
fn format_can_come_from_the_environment() {
    dxil_tables()
        .env("DXIL_TABLES_FORMAT", "json")
        .args(["dump", "HitKind"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"TriangleBackFace\""))
        .stdout(predicate::str::contains("255"));
}

#[test]
fn dump_flags_prints_hex_bits() {
    dxil_tables()
        .args(["dump", "RayFlag"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CULL_NON_OPAQUE"))
        .stdout(predicate::str::contains("0x00000080"));
}

#[test]
fn lookup_by_name_and_value() {
    dxil_tables()
        .args(["lookup", "ResourceKind", "RTAccelerationStructure"])
        .assert()
        .success()
        .stdout(predicate::str::contains("16"));

    dxil_tables()
        .args(["lookup", "InputPrimitive", "0x27"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ControlPointPatch32"));
}

#[test]
fn unknown_table_fails_with_message() {
    dxil_tables()
        .args(["dump", "NoSuchTable"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown table \"NoSuchTable\""));
}

#[test]
fn opcode_reports_version() {
    dxil_tables()
        .args(["opcode", "AttributeAtVertex"])
        .assert()
        .success()
        .stdout("AttributeAtVertex = 137 (DXIL 1.1)\n");
}

#[test]
fn version_encode_and_decode() {
    dxil_tables()
        .args(["version", "current"])
        .assert()
        .success()
        .stdout("1.3 = 0x0103 (259)\n");

    dxil_tables()
        .args(["version", "encode", "1.2"])
        .assert()
        .success()
        .stdout("1.2 = 0x0102 (258)\n");

    dxil_tables()
        .args(["version", "decode", "259"])
        .assert()
        .success()
        .stdout("1.3 = 0x0103 (259)\n");
}

#[test]
fn strict_decode_rejects_non_canonical_words() {
    dxil_tables()
        .args(["version", "decode", "--strict", "0x10103"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("above bit 15"));
}
