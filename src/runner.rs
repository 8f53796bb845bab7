use anyhow::{anyhow, Result};
use log::{debug, info};
use std::io::Write;

use crate::catalog::{self, RecordSpec};

/// Drives catalog records through their full report.
pub struct Runner {
    specs: Vec<RecordSpec>,
}

impl Default for Runner {
    fn default() -> Self {
        Self::all()
    }
}

impl Runner {
    pub fn all() -> Self {
        Self {
            specs: catalog::records(),
        }
    }

    /// Selects records by name, in the order given. Fails on the first
    /// unknown name so nothing is written for a bad selection.
    pub fn with_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let specs = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                catalog::find(name).ok_or_else(|| {
                    anyhow!(
                        "Unknown record: {} (known records: {})",
                        name,
                        catalog::names().join(", ")
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { specs })
    }

    pub fn specs(&self) -> &[RecordSpec] {
        &self.specs
    }

    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        info!("Running {} record(s)", self.specs.len());
        for spec in &self.specs {
            run_record(spec, out)?;
        }
        Ok(())
    }

    /// Writes every selected spec as one JSON object per line.
    pub fn list(&self, out: &mut impl Write) -> Result<()> {
        for spec in &self.specs {
            let spec_json = serde_json::to_string(spec)?;
            out.write_all(spec_json.as_bytes())?;
            out.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// Constructs the record, then reports sum, diff, status and debug.
pub fn run_record(spec: &RecordSpec, out: &mut impl Write) -> Result<()> {
    debug!("Running record {}", spec.name);

    let record = spec.build(out)?;
    record.sum(out)?;
    record.diff(out)?;
    record.status(out)?;
    record.debug(out)?;
    Ok(())
}
