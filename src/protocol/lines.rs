use std::{fmt, io::Write};

/// A single line of record output.
///
/// The `Display` impl yields the exact text written to the sink, without the
/// trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    Init(String),
    AlphaReady,
    BetaReady,
    Sum(i32),
    Diff(i32),
    DiffAttributed { name: String, delta: i32 },
    Field { label: &'static str, value: i32 },
    Done,
    Debug(usize),
}

impl OutputLine {
    pub fn write_to(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputLine::Init(name) => write!(f, "init {}", name),
            OutputLine::AlphaReady => f.write_str("alpha ready"),
            OutputLine::BetaReady => f.write_str("beta ready"),
            OutputLine::Sum(total) => write!(f, "sum={}", total),
            OutputLine::Diff(delta) => write!(f, "diff={}", delta),
            OutputLine::DiffAttributed { name, delta } => {
                write!(f, "diff updated for {}: {}", name, delta)
            }
            OutputLine::Field { label, value } => write!(f, "{}={}", label, value),
            OutputLine::Done => f.write_str("done"),
            OutputLine::Debug(i) => write!(f, "debug#{}", i),
        }
    }
}
