use anyhow::Result;
use std::io::{self, Write};

/// In-memory sink that records everything written to it.
#[derive(Debug, Default)]
pub struct LineCapture {
    buf: Vec<u8>,
}

impl LineCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured output as text.
    pub fn text(&self) -> Result<String> {
        Ok(String::from_utf8(self.buf.clone())?)
    }

    /// Captured output split into lines, without terminators.
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.buf)
            .lines()
            .map(str::to_owned)
            .collect()
    }

    /// Returns the captured lines and starts over with an empty buffer.
    pub fn take_lines(&mut self) -> Vec<String> {
        let lines = self.lines();
        self.buf.clear();
        lines
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Write for LineCapture {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink whose writes always fail, for exercising error propagation.
#[derive(Debug, Default)]
pub struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _data: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_lines_resets() {
        let mut capture = LineCapture::new();
        writeln!(capture, "sum=30").unwrap();
        writeln!(capture, "diff=10").unwrap();

        assert_eq!(capture.take_lines(), vec!["sum=30", "diff=10"]);
        assert!(capture.is_empty());
    }

    #[test]
    fn test_failing_sink_rejects_writes() {
        let err = writeln!(FailingSink, "done").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
