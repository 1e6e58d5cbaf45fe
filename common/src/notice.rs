//! Transient user notifications (snackbar)

use std::collections::VecDeque;

/// How long the browser keeps a notification on screen
pub const NOTICE_AUTO_HIDE_MS: u32 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// FIFO of notices; the front one is the one on screen
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    next_id: u64,
    items: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.items.push_back(Notice {
            id: self.next_id,
            level,
            message: message.into(),
        });
        self.next_id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Error, message)
    }

    pub fn current(&self) -> Option<&Notice> {
        self.items.front()
    }

    /// Remove the notice with `id` (close button or auto-hide timer)
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    pub fn drain(&mut self) -> Vec<Notice> {
        self.items.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_and_dismiss() {
        let mut queue = NoticeQueue::default();
        let first = queue.success("ok");
        let second = queue.error("falhou");

        assert_eq!(queue.current().map(|n| n.id), Some(first));
        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.current().map(|n| n.level), Some(NoticeLevel::Error));
        assert_eq!(queue.current().map(|n| n.id), Some(second));
    }

    #[test]
    fn test_drain() {
        let mut queue = NoticeQueue::default();
        queue.success("a");
        queue.push(NoticeLevel::Info, "b");
        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert!(queue.is_empty());
    }
}
