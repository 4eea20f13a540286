//! Line-by-line reading from any [`BufRead`].

use std::io::BufRead;

use parking_lot::Mutex;

use crate::{Enumerator, exit::Flow};

/// Lines of a reader, read one at a time while the sequence runs.
///
/// Line terminators (`\n` or `\r\n`) are stripped. A read failure stops the
/// run with [`Error::Read`](crate::Error::Read). The reader is consumed as it
/// is read, so a second run continues where the first one stopped.
#[derive(Debug)]
pub struct Lines<R> {
    reader: Mutex<R>,
}

/// Create a sequence over the lines of `reader`.
///
/// ```rust
/// use linq::prelude::*;
///
/// let text = "A quick brown fox\njumps over\nthe lazy dog.\n";
/// let lines = from_reader(text.as_bytes());
/// assert_eq!(
///     lines.to_vec().unwrap(),
///     vec!["A quick brown fox", "jumps over", "the lazy dog."]
/// );
/// ```
pub fn from_reader<R: BufRead>(reader: R) -> Lines<R> {
    Lines {
        reader: Mutex::new(reader),
    }
}

impl<R> Lines<R> {
    /// Recover the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

impl<R: BufRead> Enumerator for Lines<R> {
    type Item = String;

    fn run<Y>(&self, mut emit: Y) -> Flow
    where
        Y: FnMut(String) -> Flow,
    {
        let mut line = String::new();
        loop {
            let read = self.reader.lock().read_line(&mut line);
            match read {
                Ok(0) => return Ok(()),
                Ok(_) => {
                    trim_terminator(&mut line);
                    emit(std::mem::take(&mut line))?;
                }
                Err(err) => {
                    tracing::debug!(%err, "line source failed");
                    return Err(err.into());
                }
            }
        }
    }
}

fn trim_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::io::{self, Cursor, Read};

    #[test]
    fn test_strips_crlf_and_keeps_last_unterminated_line() {
        let lines = from_reader(Cursor::new("one\r\ntwo\nthree"));
        assert_eq!(lines.to_vec().unwrap(), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_empty_lines_are_records() {
        let lines = from_reader(Cursor::new("\n\nx\n"));
        assert_eq!(lines.to_vec().unwrap(), vec!["", "", "x"]);
    }

    #[test]
    fn test_reads_lazily() {
        let lines = from_reader(Cursor::new("a\nb\nc\n"));
        assert_eq!((&lines).take(1).to_vec().unwrap(), vec!["a"]);
        assert_eq!(lines.to_vec().unwrap(), vec!["b", "c"]);
    }

    struct Flaky {
        chunks: Vec<&'static [u8]>,
    }

    impl Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.chunks.is_empty() {
                return Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"));
            }
            let chunk = self.chunks.remove(0);
            buf[..chunk.len()].copy_from_slice(chunk);
            Ok(chunk.len())
        }
    }

    #[test]
    fn test_read_failure_surfaces_after_good_lines() {
        let lines = from_reader(io::BufReader::new(Flaky {
            chunks: vec![&b"ok 1\n"[..], &b"ok 2\n"[..]],
        }));
        let mut seen = Vec::new();
        let err = lines.for_each(|l| seen.push(l)).unwrap_err();

        assert_eq!(seen, vec!["ok 1", "ok 2"]);
        match err {
            Error::Read(read_err) => assert_eq!(read_err.kind(), io::ErrorKind::ConnectionReset),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_into_inner_returns_unread_input() {
        let lines = from_reader(Cursor::new("head\nrest of input"));
        assert_eq!((&lines).take(1).to_vec().unwrap(), vec!["head"]);

        let mut reader = lines.into_inner();
        let mut rest = String::new();
        reader.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "rest of input");
    }
}
