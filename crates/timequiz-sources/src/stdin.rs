//! Line-based answer sources.

use std::io::{self, BufRead};
use std::sync::Mutex;

use timequiz_core::traits::AnswerSource;

/// Reads answers from the process's standard input, one line per call.
///
/// Each call locks stdin only for the duration of a single line. A read
/// abandoned by the runner keeps the lock until a line arrives or the
/// process exits.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinSource;

impl AnswerSource for StdinSource {
    fn read_answer(&self) -> io::Result<Option<String>> {
        read_line(&mut io::stdin().lock())
    }
}

/// Reads answers from any buffered reader, one line per call.
pub struct LineSource<R> {
    reader: Mutex<R>,
}

impl<R: BufRead + Send + 'static> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }
}

impl<R: BufRead + Send + 'static> AnswerSource for LineSource<R> {
    fn read_answer(&self) -> io::Result<Option<String>> {
        let mut reader = self
            .reader
            .lock()
            .map_err(|_| io::Error::other("answer reader poisoned"))?;
        read_line(&mut *reader)
    }
}

/// Read one line, without its terminator. `Ok(None)` at end of input.
fn read_line<R: BufRead + ?Sized>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(Some(line))
}
