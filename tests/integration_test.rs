//! Integration tests for fluent-worklist
//!
//! These tests drive the full pipeline: operation records in, worklist file out,
//! then back through the parser, the validator and the executor.

use fluent_worklist::prelude::*;
use std::fs;
use tempfile::tempdir;

fn dilution_protocol() -> Vec<OperationRecord> {
    serde_json::from_str(
        r#"[
            {"kind": "pick_up", "channel": 0, "comment": "Start dilution"},
            {"kind": "aspirate", "resource": "Plate", "well": "A1", "volume": 100.0, "channel": 0},
            {"kind": "dispense", "resource": "Plate", "well": "A2", "volume": 100.0, "channel": 0},
            {"kind": "drop", "channel": 0},
            {"kind": "pick_up", "channel": 0},
            {"kind": "aspirate", "resource": "Plate", "well": "A2", "volume": 100.0, "channel": 0},
            {"kind": "dispense", "resource": "Plate", "well": "A3", "volume": 100.0, "channel": 0},
            {"kind": "drop", "channel": 0}
        ]"#,
    )
    .unwrap()
}

/// Compile, save, read back and validate
#[test]
fn test_compile_save_parse_cycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("dilution.gwl");

    let wl = compile(dilution_protocol(), WorklistConfig::fca("Dilution")).unwrap();
    assert_eq!(wl.len(), 5);

    let written = wl.save(&path, WorklistFormat::Gwl).unwrap();
    assert_eq!(written, path);

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "C;Worklist: Dilution");
    assert_eq!(lines[4], "C;Commands: 5");
    assert_eq!(lines[6], "C;Start dilution");
    assert_eq!(lines[7], "A;Plate;;;1;;100.0;Water Free Single;;1;");
    assert_eq!(lines[8], "D;Plate;;;9;;100.0;Water Free Single;;1;");
    assert_eq!(lines[9], "A;Plate;;;9;;100.0;Water Free Single;;1;");
    assert_eq!(lines[10], "D;Plate;;;17;;100.0;Water Free Single;;1;");
    assert!(text.ends_with('\n'));

    let header = parse_header(&text);
    assert_eq!(header.name.as_deref(), Some("Dilution"));
    assert_eq!(header.declared_commands, Some(5));

    // Comments are not read back as commands
    let parsed = parse_gwl(&text).unwrap();
    let physical: Vec<_> = wl.commands().iter().filter(|c| c.is_physical()).cloned().collect();
    assert_eq!(parsed, physical);

    let report = validate_worklist_file(&path).unwrap();
    assert!(!report.has_failures(), "{report}");
    assert!(!report.has_warnings(), "{report}");
}

#[test]
fn test_csv_output() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dilution.csv");

    let wl = compile(dilution_protocol(), WorklistConfig::fca("Dilution")).unwrap();
    wl.save(&path, WorklistFormat::Csv).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), wl.len() + 1);
    assert!(lines[1].starts_with("C,"));
    assert_eq!(lines[2], "A,Plate,1,100.0,Water Free Single,");
}

#[test]
fn test_rejected_protocol_writes_nothing() {
    let records: Vec<OperationRecord> = serde_json::from_str(
        r#"[
            {"kind": "pick_up", "channel": 0},
            {"kind": "aspirate", "resource": "Plate", "well": "A1", "volume": 50.0, "channel": 1}
        ]"#,
    )
    .unwrap();

    let err = compile(records, WorklistConfig::fca("Broken")).unwrap_err();
    assert_eq!(err.index(), Some(1));
    assert!(matches!(
        err,
        CompileError::Operation {
            source: WorklistError::Tip(TipError::NoTipMounted { .. }),
            ..
        }
    ));
}

#[test]
fn test_validator_flags_malformed_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.gwl");
    fs::write(
        &path,
        "C;Worklist: Bad\nC;Created: \nC;Liquid class: \nC;Tip type: \nC;Commands: 1\nC;\n\
         A;Plate;;;1;;50.0;Water Free Single;1;\n",
    )
    .unwrap();

    let report = validate_worklist_file(&path).unwrap();
    assert!(report.has_failures(), "{report}");
    assert_eq!(report.failure_count(), 1);
}

#[test]
fn test_validator_warns_on_dry_dispense() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dry.gwl");
    fs::write(
        &path,
        "C;Worklist: Dry\nC;Created: \nC;Liquid class: \nC;Tip type: \nC;Commands: 1\nC;\n\
         D;Plate;;;1;;50.0;Water Free Single;;1;\n",
    )
    .unwrap();

    let report = validate_worklist_file(&path).unwrap();
    assert!(!report.has_failures(), "{report}");
    assert!(report.has_warnings(), "{report}");
}

#[test]
fn test_validator_reports_missing_file() {
    let dir = tempdir().unwrap();
    assert!(validate_worklist_file(&dir.path().join("missing.gwl")).is_err());
}

#[test]
fn test_execute_compiled_worklist() {
    let wl = compile(dilution_protocol(), WorklistConfig::fca("Dilution")).unwrap();

    let mut executor = SimulatedExecutor::new();
    let report = wl.execute(&mut executor, &Cancellation::never()).unwrap();

    assert_eq!(report.executed, 4);
    assert_eq!(report.skipped, 1);
    assert_eq!(executor.executed().len(), 4);
    assert!(executor.executed().iter().all(|c| c.is_physical()));
}

#[test]
fn test_cancelled_execution_submits_nothing() {
    let wl = compile(dilution_protocol(), WorklistConfig::fca("Dilution")).unwrap();

    let (handle, cancellation) = Cancellation::new();
    handle.cancel();

    let mut executor = SimulatedExecutor::new();
    let err = wl.execute(&mut executor, &cancellation).unwrap_err();
    assert_eq!(err.index(), 0);
    assert!(executor.executed().is_empty());
}

#[test]
fn test_multi_channel_worklist_on_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("columns.gwl");

    let mut wl = Worklist::new(WorklistConfig::fca("Columns")).unwrap();
    let channels: Vec<usize> = (0..8).collect();
    let wells: Vec<String> = "ABCDEFGH".chars().map(|r| format!("{r}1")).collect();

    wl.pick_up(None, &channels).unwrap();
    wl.aspirate("Trough", &wells, &[25.5; 8], None, &channels).unwrap();
    wl.drop_tips(&channels).unwrap();
    wl.save(&path, WorklistFormat::Gwl).unwrap();

    let parsed = parse_gwl(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed.len(), 8);
    for (channel, command) in parsed.iter().enumerate() {
        assert_eq!(command.position, Some(channel as u32 + 1));
        assert_eq!(command.volume, Some(25.5));
        assert_eq!(command.tip_mask, TipMask::channel(channel));
    }
}
