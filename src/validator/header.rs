use crate::format::{parse_header, GwlHeader};

use super::report::{ValidationCheck, ValidationReport};

const HEADER: &str = "Header block";
const DECLARED_COUNT: &str = "Declared command count";

pub(super) fn check_header(text: &str, report: &mut ValidationReport) -> GwlHeader {
    let header = parse_header(text);
    if header.is_present() {
        report.add_check(ValidationCheck::ok(HEADER));
    } else {
        report.add_check(ValidationCheck::warning(
            HEADER,
            "no 'C;Worklist:' header; the file was probably not written by this tool",
        ));
    }
    header
}

/// Compare the header's `Commands:` line with the number of body lines
pub(super) fn check_declared_count(text: &str, header: &GwlHeader, report: &mut ValidationReport) {
    let Some(declared) = header.declared_commands else {
        report.add_check(ValidationCheck::warning(
            DECLARED_COUNT,
            "header does not declare a command count",
        ));
        return;
    };

    let lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
    // The body starts after the empty "C;" line that closes the header.
    let body_start = lines
        .iter()
        .position(|l| *l == "C;")
        .map_or(0, |i| i + 1);
    let found = lines[body_start..]
        .iter()
        .filter(|l| !l.trim().is_empty())
        .count();

    if found == declared {
        report.add_check(ValidationCheck::ok(DECLARED_COUNT));
    } else {
        report.add_check(ValidationCheck::warning(
            DECLARED_COUNT,
            format!("header declares {declared} commands, body has {found}"),
        ));
    }
}
