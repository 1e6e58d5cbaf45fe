//! Input debouncing on an explicit millisecond clock
//!
//! The caller owns the clock (`js_sys::Date::now()` in the browser,
//! `Instant` in native code) so the debouncer stays deterministic in tests.

/// Delay applied to the search box
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay_ms: u64,
    pending: Option<(T, u64)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms, pending: None }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Record new input at `now_ms`, restarting the delay
    pub fn push(&mut self, value: T, now_ms: u64) {
        self.pending = Some((value, now_ms.saturating_add(self.delay_ms)));
    }

    /// Emit the pending value once its deadline has passed
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        let due = matches!(&self.pending, Some((_, deadline)) if now_ms >= *deadline);
        if due {
            self.pending.take().map(|(v, _)| v)
        } else {
            None
        }
    }

    /// Emit the pending value immediately (e.g. on Enter)
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(v, _)| v)
    }

    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(_, d)| *d)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_after_delay() {
        let mut d = Debouncer::new(300);
        d.push("sil".to_string(), 1_000);
        assert_eq!(d.poll(1_299), None);
        assert_eq!(d.poll(1_300), Some("sil".to_string()));
        assert_eq!(d.poll(2_000), None);
    }

    #[test]
    fn test_keystrokes_restart_delay() {
        let mut d = Debouncer::new(300);
        d.push("s".to_string(), 0);
        d.push("si".to_string(), 200);
        d.push("sil".to_string(), 400);
        assert_eq!(d.poll(650), None);
        assert_eq!(d.deadline(), Some(700));
        assert_eq!(d.poll(700), Some("sil".to_string()));
    }

    #[test]
    fn test_flush() {
        let mut d: Debouncer<String> = Debouncer::default();
        assert_eq!(d.delay_ms(), SEARCH_DEBOUNCE_MS);
        d.push("x".to_string(), 0);
        assert!(d.is_pending());
        assert_eq!(d.flush(), Some("x".to_string()));
        assert!(!d.is_pending());
    }
}
