//! Test-only helpers for capturing demo output.

use std::io::{self, Write};

/// Run `f` against an in-memory sink and return the written lines.
pub fn capture<F>(f: F) -> Vec<String>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let mut buf = Vec::new();
    f(&mut buf).expect("write to in-memory sink");
    lines(&buf)
}

/// Split raw output into lines, dropping the trailing newline.
pub fn lines(raw: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(raw)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Sink that rejects every write, as a closed pipe would.
#[derive(Debug, Default)]
pub struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
