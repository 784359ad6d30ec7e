//! # Well addressing
//!
//! Conversion between human-readable well names (`"A1"`, `"H12"`) and the
//! column-major numbering used by Tecan worklists.
//!
//! ## Numbering
//!
//! Offsets are zero-based and run down a column before moving to the next one:
//!
//! ```text
//!        1    2    3  ...
//!   A    0    8   16
//!   B    1    9   17
//!   ...
//!   H    7   15   23
//! ```
//!
//! `offset = (column - 1) * rows + row_index`. Worklist lines carry the 1-based
//! *position*, which is simply `offset + 1`.
//!
//! ```rust
//! use fluent_worklist::wells::{name_to_offset, offset_to_name};
//!
//! assert_eq!(name_to_offset("B1", 8)?, 1);
//! assert_eq!(offset_to_name(95, 8)?, "H12");
//! # Ok::<(), fluent_worklist::wells::WellError>(())
//! ```

mod error;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{COLS_384_WELL, COLS_96_WELL, MAX_PLATE_ROWS, ROWS_384_WELL, ROWS_96_WELL};

pub use error::WellError;

/// A parsed well name: zero-based row index plus 1-based column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WellName {
    row: u32,
    column: u32,
}

impl WellName {
    /// Zero-based row index (0 for row A)
    pub fn row(&self) -> u32 {
        self.row
    }

    /// 1-based column number
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Row letter, `'A'` for row 0
    pub fn row_letter(&self) -> char {
        // row < 26 is guaranteed by construction
        char::from(b'A' + self.row as u8)
    }

    /// Column-major offset for a plate with `row_count` rows, `None` on overflow
    pub fn offset(&self, row_count: u32) -> Option<u32> {
        (self.column - 1)
            .checked_mul(row_count)
            .and_then(|base| base.checked_add(self.row))
    }
}

impl FromStr for WellName {
    type Err = WellError;

    /// Parse `<Letter><Integer>`, case-insensitively and ignoring surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        let mut chars = normalized.chars();

        let letter = match chars.next() {
            Some(c) if c.is_ascii_uppercase() => c,
            Some(_) => return Err(WellError::name(s, "must start with a row letter")),
            None => return Err(WellError::name(s, "empty well name")),
        };

        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WellError::name(s, "expected a column number after the row letter"));
        }

        let column: u32 = digits
            .parse()
            .map_err(|_| WellError::name(s, "column number out of range"))?;
        if column == 0 {
            return Err(WellError::name(s, "columns start at 1"));
        }

        Ok(Self {
            row: u32::from(letter) - u32::from('A'),
            column,
        })
    }
}

impl fmt::Display for WellName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.column)
    }
}

/// Convert a well name to its zero-based column-major offset.
///
/// Fails with [`WellError::InvalidWellName`] when the string is not `<Letter><Integer>`,
/// the column is not positive, or the row letter lies outside `[A, A + row_count)`.
pub fn name_to_offset(name: &str, row_count: u32) -> Result<u32, WellError> {
    check_row_count(row_count)?;
    let well: WellName = name.parse()?;
    if well.row >= row_count {
        return Err(WellError::name(
            name,
            format!("row {} is outside a plate with {} rows", well.row_letter(), row_count),
        ));
    }
    well.offset(row_count)
        .ok_or_else(|| WellError::name(name, "column number out of range"))
}

/// Convert a zero-based column-major offset back to a well name.
///
/// Fails with [`WellError::InvalidWellOffset`] when `offset` is negative.
pub fn offset_to_name(offset: i64, row_count: u32) -> Result<String, WellError> {
    check_row_count(row_count)?;
    if offset < 0 {
        return Err(WellError::offset(offset, "offsets are non-negative"));
    }
    let rows = i64::from(row_count);
    let column = (offset / rows)
        .checked_add(1)
        .and_then(|c| u32::try_from(c).ok())
        .ok_or_else(|| WellError::offset(offset, "column number out of range"))?;
    let row = (offset % rows) as u32;
    Ok(WellName { row, column }.to_string())
}

fn check_row_count(row_count: u32) -> Result<(), WellError> {
    if row_count == 0 || row_count > MAX_PLATE_ROWS {
        return Err(WellError::InvalidLayout {
            rows: row_count,
            columns: 0,
        });
    }
    Ok(())
}

/// Row and column counts of a plate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateLayout {
    /// Number of rows (A, B, ...)
    pub rows: u32,
    /// Number of columns (1, 2, ...)
    pub columns: u32,
}

impl Default for PlateLayout {
    fn default() -> Self {
        Self::plate_96()
    }
}

impl PlateLayout {
    /// Create a layout, rejecting plates that single-letter rows cannot address
    pub fn new(rows: u32, columns: u32) -> Result<Self, WellError> {
        let layout = Self { rows, columns };
        layout.validate()?;
        Ok(layout)
    }

    /// Standard 8x12 plate
    pub fn plate_96() -> Self {
        Self {
            rows: ROWS_96_WELL,
            columns: COLS_96_WELL,
        }
    }

    /// Standard 16x24 plate
    pub fn plate_384() -> Self {
        Self {
            rows: ROWS_384_WELL,
            columns: COLS_384_WELL,
        }
    }

    /// Check the dimensions
    pub fn validate(&self) -> Result<(), WellError> {
        if self.rows == 0 || self.rows > MAX_PLATE_ROWS || self.columns == 0 {
            return Err(WellError::InvalidLayout {
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(())
    }

    /// Total number of wells
    pub fn well_count(&self) -> u32 {
        self.rows.saturating_mul(self.columns)
    }

    /// Offset of a named well, bounds-checked against both rows and columns
    pub fn offset_of(&self, name: &str) -> Result<u32, WellError> {
        let offset = name_to_offset(name, self.rows)?;
        if offset >= self.well_count() {
            return Err(WellError::name(
                name,
                format!("column is outside a plate with {} columns", self.columns),
            ));
        }
        Ok(offset)
    }

    /// Name of the well at `offset`, bounds-checked against the plate size
    pub fn name_of(&self, offset: i64) -> Result<String, WellError> {
        if offset >= i64::from(self.well_count()) {
            return Err(WellError::offset(
                offset,
                format!("plate has {} wells", self.well_count()),
            ));
        }
        offset_to_name(offset, self.rows)
    }

    /// 1-based worklist position of a well reference
    pub fn position_of(&self, well: &WellRef) -> Result<u32, WellError> {
        let offset = match well {
            WellRef::Name(name) => self.offset_of(name)?,
            WellRef::Offset(offset) => {
                if *offset >= self.well_count() {
                    return Err(WellError::offset(
                        i64::from(*offset),
                        format!("plate has {} wells", self.well_count()),
                    ));
                }
                *offset
            }
        };
        Ok(offset + 1)
    }

    /// All well names in column-major order (A1, B1, ..., H1, A2, ...)
    pub fn well_names(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.columns).flat_map(move |column| {
            (0..self.rows).map(move |row| {
                WellName {
                    row,
                    column: column + 1,
                }
                .to_string()
            })
        })
    }
}

/// A well as supplied by a caller: either a name or a zero-based offset.
///
/// Names are kept unresolved until a builder call, so a malformed name is reported
/// by the call that supplied it. In JSON a string is a name and an integer an offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WellRef {
    /// Zero-based column-major offset
    Offset(u32),
    /// Well name such as `"A1"`
    Name(String),
}

impl From<&str> for WellRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<&String> for WellRef {
    fn from(name: &String) -> Self {
        Self::Name(name.clone())
    }
}

impl From<String> for WellRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<u32> for WellRef {
    fn from(offset: u32) -> Self {
        Self::Offset(offset)
    }
}

impl From<WellName> for WellRef {
    fn from(name: WellName) -> Self {
        Self::Name(name.to_string())
    }
}

impl fmt::Display for WellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WellRef::Name(name) => write!(f, "{name}"),
            WellRef::Offset(offset) => write!(f, "#{offset}"),
        }
    }
}
