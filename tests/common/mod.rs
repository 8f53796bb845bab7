#![allow(dead_code)]

use anyhow::Result;
use test_support::LineCapture;
use value_records::{catalog, RecordSpec, ValueRecord};

/// Looks up a catalog spec, failing the test if it is missing.
pub fn spec(name: &str) -> RecordSpec {
    catalog::find(name).unwrap_or_else(|| panic!("{} missing from catalog", name))
}

/// Builds a catalog record and returns it with the construction output.
pub fn build(name: &str) -> Result<(ValueRecord, Vec<String>)> {
    let mut capture = LineCapture::new();
    let record = spec(name).build(&mut capture)?;
    Ok((record, capture.lines()))
}

/// Runs sum, diff, status and debug once and returns every emitted line.
pub fn report(record: &ValueRecord) -> Result<Vec<String>> {
    let mut capture = LineCapture::new();
    record.sum(&mut capture)?;
    record.diff(&mut capture)?;
    record.status(&mut capture)?;
    record.debug(&mut capture)?;
    Ok(capture.lines())
}
