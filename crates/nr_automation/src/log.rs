use std::collections::VecDeque;

use chrono::Local;
use nr_core::{LogEntry, LogLevel};

pub const DEFAULT_LOG_CAPACITY: usize = 100;

/// Bounded activity feed, newest entry first.
///
/// Once full, every push evicts the oldest entry. Ids keep counting across
/// evictions so they are never reused.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 0,
        }
    }

    pub fn push(&mut self, level: LogLevel, message: impl Into<String>) -> &LogEntry {
        let message = message.into();
        match level {
            LogLevel::Info => tracing::info!("📝 {}", message),
            LogLevel::Success => tracing::info!("✅ {}", message),
            LogLevel::Error => tracing::error!("❌ {}", message),
        }

        let entry = LogEntry {
            id: self.next_id,
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            message,
            level,
        };
        self.next_id += 1;

        self.entries.push_front(entry);
        self.entries.truncate(self.capacity);
        &self.entries[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut logs = LogBuffer::default();
        logs.push(LogLevel::Info, "first");
        logs.push(LogLevel::Success, "second");
        logs.push(LogLevel::Error, "third");

        let messages: Vec<&str> = logs.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["third", "second", "first"]);

        let ids: Vec<u64> = logs.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1, 0]);
        assert_eq!(logs.iter().next().unwrap().level, LogLevel::Error);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut logs = LogBuffer::default();
        for i in 0..DEFAULT_LOG_CAPACITY {
            logs.push(LogLevel::Info, format!("entry {}", i));
        }
        assert_eq!(logs.len(), DEFAULT_LOG_CAPACITY);

        let pushed = logs.push(LogLevel::Success, "overflow").clone();
        assert_eq!(logs.len(), DEFAULT_LOG_CAPACITY);
        assert_eq!(logs.iter().next().unwrap(), &pushed);
        assert!(logs.iter().all(|e| e.message != "entry 0"));
        assert_eq!(logs.iter().last().unwrap().message, "entry 1");
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut logs = LogBuffer::new(3);
        for i in 0..50 {
            logs.push(LogLevel::Info, format!("{}", i));
            assert!(logs.len() <= 3);
        }
        let ids: Vec<u64> = logs.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![49, 48, 47]);
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let mut logs = LogBuffer::new(0);
        logs.push(LogLevel::Info, "a");
        logs.push(LogLevel::Info, "b");
        assert_eq!(logs.capacity(), 1);
        assert_eq!(logs.to_vec()[0].message, "b");
    }

    #[test]
    fn test_timestamp_is_clock_time() {
        let mut logs = LogBuffer::default();
        let entry = logs.push(LogLevel::Info, "tick");
        let parts: Vec<&str> = entry.timestamp.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.len() == 2 && p.parse::<u32>().is_ok()));
    }
}
