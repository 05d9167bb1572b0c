//! Scripted answer source for testing.

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::thread::ThreadId;
use std::time::Duration;

use timequiz_core::traits::AnswerSource;

/// One scripted reply.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Answer immediately.
    Answer(String),
    /// Answer after blocking the reader thread for a while.
    Delayed(Duration, String),
    /// Block the reader thread forever, like a user who never types.
    Silent,
    /// Report end of input.
    EndOfInput,
    /// Fail the read with an I/O error.
    Fail(String),
}

impl Reply {
    pub fn answer(text: impl Into<String>) -> Self {
        Reply::Answer(text.into())
    }

    pub fn delayed(delay: Duration, text: impl Into<String>) -> Self {
        Reply::Delayed(delay, text.into())
    }
}

/// An answer source that plays back scripted replies in order.
///
/// Once the script runs out every read reports end of input.
pub struct ScriptedSource {
    replies: Mutex<VecDeque<Reply>>,
    /// Number of reads started.
    call_count: AtomicU32,
    /// Number of reads that returned.
    completed_count: AtomicU32,
    /// Thread each read ran on.
    reader_threads: Mutex<Vec<ThreadId>>,
}

impl ScriptedSource {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().collect()),
            call_count: AtomicU32::new(0),
            completed_count: AtomicU32::new(0),
            reader_threads: Mutex::new(Vec::new()),
        }
    }

    /// Script that answers every question immediately with the given texts.
    pub fn answering<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(answers.into_iter().map(Reply::answer))
    }

    /// Get the number of reads started on this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get the number of reads that have returned, including abandoned ones.
    pub fn completed_count(&self) -> u32 {
        self.completed_count.load(Ordering::SeqCst)
    }

    /// Threads that performed reads, in call order.
    pub fn reader_threads(&self) -> Vec<ThreadId> {
        self.reader_threads
            .lock()
            .map(|t| t.clone())
            .unwrap_or_default()
    }

    fn next_reply(&self) -> Option<Reply> {
        self.replies.lock().ok().and_then(|mut r| r.pop_front())
    }
}

impl AnswerSource for ScriptedSource {
    fn read_answer(&self) -> io::Result<Option<String>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut threads) = self.reader_threads.lock() {
            threads.push(std::thread::current().id());
        }

        let result = match self.next_reply() {
            Some(Reply::Answer(text)) => Ok(Some(text)),
            Some(Reply::Delayed(delay, text)) => {
                std::thread::sleep(delay);
                Ok(Some(text))
            }
            Some(Reply::Silent) => loop {
                std::thread::park();
            },
            Some(Reply::EndOfInput) | None => Ok(None),
            Some(Reply::Fail(message)) => Err(io::Error::other(message)),
        };

        self.completed_count.fetch_add(1, Ordering::SeqCst);
        result
    }
}
