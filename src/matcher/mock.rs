use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Matcher;

/// One scripted reply: a completion text or a simulated failure.
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Error(String),
}

/// A scripted matcher for tests. Returns pre-defined replies in order and
/// fails once the script runs out.
pub struct MockMatcher {
    replies: Vec<Reply>,
    index: AtomicUsize,
}

impl MockMatcher {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies,
            index: AtomicUsize::new(0),
        }
    }

    /// A matcher that always returns the same completion text.
    pub fn text(text: &str) -> Self {
        Self::new(vec![Reply::Text(text.to_string())])
    }

    /// A matcher that fails its single call, simulating a transport error.
    pub fn failing(message: &str) -> Self {
        Self::new(vec![Reply::Error(message.to_string())])
    }

    /// How many times `complete` was called.
    pub fn calls(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Matcher for MockMatcher {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        let i = self.index.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(i) {
            Some(Reply::Text(text)) => Ok(text.clone()),
            Some(Reply::Error(message)) => Err(anyhow!("{}", message)),
            None => Err(anyhow!(
                "MockMatcher: no more replies (called {} times)",
                i + 1
            )),
        }
    }
}
