//! Nonce generation for Tauros API authentication.
//!
//! Every signed request carries the current time in milliseconds since the
//! UNIX epoch. The server rejects stale nonces, so concurrent callers must
//! never see the value go backwards.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing nonces for authenticated requests.
pub trait NonceProvider: Send + Sync {
    /// Generate the nonce for the next request.
    ///
    /// The value must never be lower than a previously returned value.
    fn next_nonce(&self) -> u64;
}

/// A nonce provider backed by the wall clock, in milliseconds.
///
/// Two calls within the same millisecond return the same value; there is no
/// artificial de-duplication. If the system clock steps backwards the last
/// handed out value is repeated until the clock catches up.
#[derive(Debug, Default)]
pub struct MillisecondNonce {
    last_nonce: AtomicU64,
}

impl MillisecondNonce {
    /// Create a new millisecond nonce provider.
    pub fn new() -> Self {
        Self {
            last_nonce: AtomicU64::new(0),
        }
    }

    /// Get current time in milliseconds since UNIX epoch.
    fn current_time_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

impl NonceProvider for MillisecondNonce {
    fn next_nonce(&self) -> u64 {
        let now = Self::current_time_millis();
        let previous = self.last_nonce.fetch_max(now, Ordering::SeqCst);
        previous.max(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::thread;

    #[test]
    fn test_nonce_is_millisecond_timestamp() {
        let provider = MillisecondNonce::new();
        let before = MillisecondNonce::current_time_millis();
        let nonce = provider.next_nonce();
        let after = MillisecondNonce::current_time_millis();
        assert!(nonce >= before && nonce <= after);
        // Milliseconds, not micro- or nanoseconds: 13 digits until the year 2286.
        assert_eq!(nonce.to_string().len(), 13);
    }

    #[test]
    fn test_nonce_non_decreasing() {
        let provider = MillisecondNonce::new();

        let mut last = 0u64;
        for _ in 0..1000 {
            let nonce = provider.next_nonce();
            assert!(nonce >= last, "Nonce must never decrease");
            last = nonce;
        }
    }

    #[test]
    fn test_nonce_never_below_previous_value() {
        let provider = MillisecondNonce::new();
        let future = MillisecondNonce::current_time_millis() + 60_000;
        provider.last_nonce.store(future, Ordering::SeqCst);
        assert_eq!(provider.next_nonce(), future);
    }

    #[test]
    fn test_nonce_ordering_across_threads() {
        let provider = Arc::new(MillisecondNonce::new());
        let issued = Arc::new(Mutex::new(Vec::new()));
        let mut handles = vec![];

        for _ in 0..4 {
            let p = provider.clone();
            let issued = issued.clone();
            handles.push(thread::spawn(move || {
                for _ in 0..500 {
                    // Take and record under one lock so the recorded order is the issue order.
                    let mut guard = issued.lock().unwrap();
                    guard.push(p.next_nonce());
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let issued = issued.lock().unwrap();
        assert_eq!(issued.len(), 2000);
        assert!(issued.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_concurrent_nonces_without_lock() {
        let provider = Arc::new(MillisecondNonce::new());
        let mut handles = vec![];

        for _ in 0..8 {
            let p = provider.clone();
            handles.push(thread::spawn(move || {
                let mut issued = Vec::with_capacity(2000);
                for _ in 0..2000 {
                    let nonce = p.next_nonce();
                    // The shared high-water mark covers every value already handed out.
                    assert!(p.last_nonce.load(Ordering::SeqCst) >= nonce);
                    issued.push(nonce);
                }
                issued
            }));
        }

        let mut highest = 0;
        for handle in handles {
            let issued = handle.join().unwrap();
            assert!(issued.windows(2).all(|w| w[0] <= w[1]));
            highest = highest.max(issued.last().copied().unwrap_or_default());
        }

        assert_eq!(provider.last_nonce.load(Ordering::SeqCst), highest);
        assert!(provider.next_nonce() >= highest);
    }
}
