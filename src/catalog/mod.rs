use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::record::{DiffStyle, RecordOptions, ValueRecord};

/// The literal parameters of one known record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSpec {
    pub name: String,
    pub alpha: i32,
    pub beta: i32,
    pub gamma: i32,
    #[serde(default)]
    pub sum_offset: i32,
    #[serde(default)]
    pub derived: bool,
    #[serde(default)]
    pub options: RecordOptions,
}

impl RecordSpec {
    /// Constructs the record, announcing it on `out` if configured.
    pub fn build(&self, out: &mut impl Write) -> Result<ValueRecord> {
        let builder = ValueRecord::builder(self.name.clone(), self.alpha, self.beta, self.gamma)
            .sum_offset(self.sum_offset)
            .options(self.options);

        if self.derived {
            builder.with_derived_fields().build(out)
        } else {
            builder.build(out)
        }
    }
}

fn spec(
    name: &str,
    (alpha, beta, gamma): (i32, i32, i32),
    sum_offset: i32,
    derived: bool,
    options: RecordOptions,
) -> RecordSpec {
    RecordSpec {
        name: name.to_string(),
        alpha,
        beta,
        gamma,
        sum_offset,
        derived,
        options,
    }
}

pub fn records() -> Vec<RecordSpec> {
    let attributed = RecordOptions::announcing(DiffStyle::Attributed);

    vec![
        spec("Example04", (9, 14, 19), 4, false, attributed),
        spec("Example09", (14, 19, 24), 9, false, attributed),
        spec("Example19", (24, 29, 34), 19, false, attributed),
        spec(
            "Example21",
            (5, 10, 15),
            0,
            true,
            RecordOptions::announcing(DiffStyle::Plain),
        ),
        spec("Example22", (5, 10, 15), 0, false, RecordOptions::default()),
        spec("Example24", (29, 34, 39), 24, false, attributed),
    ]
}

pub fn find(name: &str) -> Option<RecordSpec> {
    records().into_iter().find(|spec| spec.name == name)
}

pub fn names() -> Vec<String> {
    records().into_iter().map(|spec| spec.name).collect()
}
