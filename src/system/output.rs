use crate::greeting::{GreeterError, GreeterResult};
use async_trait::async_trait;
use std::io::Write;

/// Abstraction for output to enable testing without writing to the terminal
#[async_trait]
pub trait OutputSink {
    async fn write_line(&mut self, line: &str) -> GreeterResult<()>;
    async fn flush(&mut self) -> GreeterResult<()>;
}

/// Real output sink writing to stdout
pub struct StdoutSink;

#[async_trait]
impl OutputSink for StdoutSink {
    async fn write_line(&mut self, line: &str) -> GreeterResult<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line).map_err(|e| GreeterError::output_error("stdout", e))
    }

    async fn flush(&mut self) -> GreeterResult<()> {
        std::io::stdout()
            .flush()
            .map_err(|e| GreeterError::output_error("stdout", e))
    }
}

/// Capturing sink that records written lines instead of printing them
#[cfg(test)]
pub struct CaptureSink {
    pub lines: Vec<String>,
    pub flushed: bool,
}

#[cfg(test)]
impl CaptureSink {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            flushed: false,
        }
    }
}

#[cfg(test)]
#[async_trait]
impl OutputSink for CaptureSink {
    async fn write_line(&mut self, line: &str) -> GreeterResult<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    async fn flush(&mut self) -> GreeterResult<()> {
        self.flushed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_capture_sink_records_lines() {
        let mut sink = CaptureSink::new();

        sink.write_line("first").await.unwrap();
        sink.write_line("second").await.unwrap();
        sink.flush().await.unwrap();

        assert_eq!(sink.lines, vec!["first".to_string(), "second".to_string()]);
        assert!(sink.flushed);
    }

    #[tokio::test]
    async fn test_stdout_sink_writes_without_error() {
        let mut sink = StdoutSink;

        assert!(sink.write_line("").await.is_ok());
        assert!(sink.flush().await.is_ok());
    }
}
