use crate::format::parse_gwl;
use crate::worklist::{Opcode, WorklistCommand};

use super::report::{ValidationCheck, ValidationReport};

const SYNTAX: &str = "Command syntax";
const LIQUID_FLOW: &str = "Liquid flow";
const VOLUMES: &str = "Volumes";

/// Listed positions are capped so one bad file does not flood the report
const MAX_LISTED: usize = 5;

pub(super) fn check_syntax(text: &str, report: &mut ValidationReport) -> Option<Vec<WorklistCommand>> {
    match parse_gwl(text) {
        Ok(commands) => {
            report.add_check(ValidationCheck::ok(SYNTAX));
            Some(commands)
        }
        Err(e) => {
            report.add_check(ValidationCheck::failed(SYNTAX, e.to_string()));
            None
        }
    }
}

/// Every dispense channel must have aspirated since its last `W` line
pub(super) fn check_liquid_flow(commands: &[WorklistCommand], report: &mut ValidationReport) {
    let mut loaded: u128 = 0;
    let mut problems = Vec::new();

    for (index, command) in commands.iter().enumerate() {
        let mask = command.tip_mask.bits();
        match command.opcode {
            Opcode::Aspirate => loaded |= mask,
            Opcode::Wash if mask == 0 => loaded = 0,
            Opcode::Wash => loaded &= !mask,
            Opcode::Dispense => {
                let dry = mask & !loaded;
                if dry != 0 {
                    let channels: Vec<usize> = command
                        .tip_mask
                        .channels()
                        .filter(|&c| dry & (1u128 << c) != 0)
                        .collect();
                    problems.push(format!("command {index} on channel(s) {channels:?}"));
                }
            }
            Opcode::Comment => {}
        }
    }

    if problems.is_empty() {
        report.add_check(ValidationCheck::ok(LIQUID_FLOW));
    } else {
        report.add_check(ValidationCheck::warning(
            LIQUID_FLOW,
            format!("dispense without a prior aspirate at {}", list(&problems)),
        ));
    }
}

pub(super) fn check_volumes(commands: &[WorklistCommand], report: &mut ValidationReport) {
    let zero: Vec<String> = commands
        .iter()
        .enumerate()
        .filter(|(_, c)| c.opcode.is_liquid() && c.volume.map_or(true, |v| v == 0.0))
        .map(|(index, _)| format!("command {index}"))
        .collect();

    if zero.is_empty() {
        report.add_check(ValidationCheck::ok(VOLUMES));
    } else {
        report.add_check(ValidationCheck::warning(
            VOLUMES,
            format!("zero or missing volume at {}", list(&zero)),
        ));
    }
}

fn list(items: &[String]) -> String {
    let mut text = items.iter().take(MAX_LISTED).cloned().collect::<Vec<_>>().join(", ");
    if items.len() > MAX_LISTED {
        text.push_str(&format!(" and {} more", items.len() - MAX_LISTED));
    }
    text
}
