use anyhow::{Context, Result};

use fluent_worklist::wells::{name_to_offset, offset_to_name};

/// Convert between a well name and its offset on a plate with `rows` rows
pub fn run(well: &str, rows: u32) -> Result<()> {
    let well = well.trim();

    match well.parse::<i64>() {
        Ok(offset) => {
            let name = offset_to_name(offset, rows)
                .with_context(|| format!("Cannot convert offset {offset}"))?;
            println!("offset {} -> {} (position {})", offset, name, offset + 1);
        }
        Err(_) => {
            let offset = name_to_offset(well, rows)
                .with_context(|| format!("Cannot convert well '{well}'"))?;
            println!("{} -> offset {} (position {})", well.to_ascii_uppercase(), offset, offset + 1);
        }
    }
    Ok(())
}
