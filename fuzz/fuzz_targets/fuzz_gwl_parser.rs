#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Malformed input must come back as an error, never a panic
    let _ = fluent_worklist::format::parse_header(text);
    if let Ok(commands) = fluent_worklist::format::parse_gwl(text) {
        for command in &commands {
            let _ = fluent_worklist::format::gwl_line(command);
        }
    }

    let _ = fluent_worklist::validator::validate_worklist_text("fuzz", text);
});
