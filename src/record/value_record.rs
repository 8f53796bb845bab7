use anyhow::{anyhow, Result};
use log::debug;
use std::io::Write;

use crate::{
    config::{DEBUG_ITERATIONS, DEFAULT_SUM_OFFSET},
    protocol::OutputLine,
};

use super::{DerivedFields, DiffStyle, RecordOptions};

/// An immutable set of integer fields that reports on itself as text lines.
///
/// Every reporting operation takes the sink it writes to. Arithmetic wraps
/// on `i32` overflow, so the only error an operation returns is a failed
/// write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueRecord {
    name: String,
    alpha: i32,
    beta: i32,
    gamma: i32,
    derived: Option<DerivedFields>,
    sum_offset: i32,
    options: RecordOptions,
}

/// Collects the literal values of a record before it is constructed.
#[derive(Debug, Clone)]
pub struct ValueRecordBuilder {
    name: String,
    alpha: i32,
    beta: i32,
    gamma: i32,
    with_derived: bool,
    sum_offset: i32,
    options: RecordOptions,
}

impl ValueRecordBuilder {
    pub fn sum_offset(mut self, sum_offset: i32) -> Self {
        self.sum_offset = sum_offset;
        self
    }

    pub fn with_derived_fields(mut self) -> Self {
        self.with_derived = true;
        self
    }

    pub fn options(mut self, options: RecordOptions) -> Self {
        self.options = options;
        self
    }

    pub fn announce_on_init(mut self, announce: bool) -> Self {
        self.options.announce_on_init = announce;
        self
    }

    pub fn diff_style(mut self, diff_style: DiffStyle) -> Self {
        self.options.diff_style = diff_style;
        self
    }

    /// Constructs the record, writing the init announcement to `out` when
    /// the options ask for it.
    pub fn build(self, out: &mut impl Write) -> Result<ValueRecord> {
        let derived = self
            .with_derived
            .then(|| DerivedFields::from_base(self.alpha, self.beta, self.gamma));

        let record = ValueRecord {
            name: self.name,
            alpha: self.alpha,
            beta: self.beta,
            gamma: self.gamma,
            derived,
            sum_offset: self.sum_offset,
            options: self.options,
        };
        debug!("Constructed record {:?}", record);

        if record.options.announce_on_init {
            record.emit(out, &OutputLine::Init(record.name.clone()))?;
            record.emit(out, &OutputLine::AlphaReady)?;
            record.emit(out, &OutputLine::BetaReady)?;
        }

        Ok(record)
    }
}

impl ValueRecord {
    pub fn builder(
        name: impl Into<String>,
        alpha: i32,
        beta: i32,
        gamma: i32,
    ) -> ValueRecordBuilder {
        ValueRecordBuilder {
            name: name.into(),
            alpha,
            beta,
            gamma,
            with_derived: false,
            sum_offset: DEFAULT_SUM_OFFSET,
            options: RecordOptions::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alpha(&self) -> i32 {
        self.alpha
    }

    pub fn beta(&self) -> i32 {
        self.beta
    }

    pub fn gamma(&self) -> i32 {
        self.gamma
    }

    pub fn derived(&self) -> Option<&DerivedFields> {
        self.derived.as_ref()
    }

    pub fn sum_offset(&self) -> i32 {
        self.sum_offset
    }

    pub fn options(&self) -> &RecordOptions {
        &self.options
    }

    /// Writes `sum=<total>` and returns `alpha + beta + gamma + sum_offset`.
    pub fn sum(&self, out: &mut impl Write) -> Result<i32> {
        let total = self
            .alpha
            .wrapping_add(self.beta)
            .wrapping_add(self.gamma)
            .wrapping_add(self.sum_offset);
        debug!("{}: sum {}", self.name, total);

        self.emit(out, &OutputLine::Sum(total))?;
        Ok(total)
    }

    /// Writes the diff line in the configured style and returns
    /// `gamma - alpha`.
    pub fn diff(&self, out: &mut impl Write) -> Result<i32> {
        let delta = self.gamma.wrapping_sub(self.alpha);
        debug!("{}: diff {}", self.name, delta);

        let line = match self.options.diff_style {
            DiffStyle::Plain => OutputLine::Diff(delta),
            DiffStyle::Attributed => OutputLine::DiffAttributed {
                name: self.name.clone(),
                delta,
            },
        };
        self.emit(out, &line)?;
        Ok(delta)
    }

    pub fn status(&self, out: &mut impl Write) -> Result<()> {
        debug!("{}: status", self.name);

        let fields = [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("gamma", self.gamma),
        ];
        for (label, value) in fields {
            self.emit(out, &OutputLine::Field { label, value })?;
        }
        self.emit(out, &OutputLine::Done)
    }

    pub fn debug(&self, out: &mut impl Write) -> Result<()> {
        for i in 0..DEBUG_ITERATIONS {
            self.emit(out, &OutputLine::Debug(i))?;
        }
        Ok(())
    }

    fn emit(&self, out: &mut impl Write, line: &OutputLine) -> Result<()> {
        line.write_to(out)
            .map_err(|e| anyhow!("Failed to write output for {}: {}", self.name, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(buf: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(buf)
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_builder_defaults() {
        let record = ValueRecord::builder("Plain", 1, 2, 3)
            .build(&mut std::io::sink())
            .unwrap();

        assert_eq!(record.sum_offset(), DEFAULT_SUM_OFFSET);
        assert_eq!(record.options(), &RecordOptions::default());
        assert!(record.derived().is_none());
    }

    #[test]
    fn test_quiet_construction_writes_nothing() {
        let mut buf = Vec::new();
        ValueRecord::builder("Example22", 5, 10, 15)
            .build(&mut buf)
            .unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_announcing_construction() {
        let mut buf = Vec::new();
        ValueRecord::builder("Example09", 14, 19, 24)
            .announce_on_init(true)
            .build(&mut buf)
            .unwrap();
        assert_eq!(
            lines(&buf),
            vec!["init Example09", "alpha ready", "beta ready"]
        );
    }

    #[test]
    fn test_derived_fields_are_computed_once_at_build() {
        let record = ValueRecord::builder("Example21", 5, 10, 15)
            .with_derived_fields()
            .build(&mut std::io::sink())
            .unwrap();
        assert_eq!(record.derived(), Some(&DerivedFields::from_base(5, 10, 15)));
    }

    #[test]
    fn test_diff_can_be_negative() {
        let mut buf = Vec::new();
        let record = ValueRecord::builder("Down", 20, 0, 5)
            .build(&mut std::io::sink())
            .unwrap();
        assert_eq!(record.diff(&mut buf).unwrap(), -15);
        assert_eq!(lines(&buf), vec!["diff=-15"]);
    }

    #[test]
    fn test_sum_wraps_on_overflow() {
        let record = ValueRecord::builder("Big", i32::MAX, 1, 0)
            .sum_offset(1)
            .build(&mut std::io::sink())
            .unwrap();
        assert_eq!(record.sum(&mut std::io::sink()).unwrap(), i32::MIN + 1);
    }
}
