use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Runtime circuit state for provider upstream calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    Closed,
    Open,
    HalfOpen,
}

/// Circuit breaker thresholds and timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircuitBreakerConfig {
    pub trip_threshold: u32,
    pub cooldown: Duration,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            trip_threshold: 3,
            cooldown: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Default)]
struct BreakerWindow {
    failures: u32,
    tripped_at: Option<Instant>,
    probing: bool,
}

/// Thread-safe circuit breaker guarding provider network calls.
#[derive(Debug)]
pub struct CircuitBreaker {
    config: CircuitBreakerConfig,
    window: Mutex<BreakerWindow>,
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::new(CircuitBreakerConfig::default())
    }
}

impl CircuitBreaker {
    pub fn new(config: CircuitBreakerConfig) -> Self {
        Self {
            config,
            window: Mutex::new(BreakerWindow::default()),
        }
    }

    /// Whether the next upstream call may proceed. An open breaker admits a
    /// single probe request once the cooldown has elapsed.
    pub fn allow_request(&self) -> bool {
        let mut window = self
            .window
            .lock()
            .expect("circuit breaker lock is not poisoned");

        match window.tripped_at {
            None => true,
            Some(tripped_at) => {
                if tripped_at.elapsed() >= self.config.cooldown {
                    window.tripped_at = None;
                    window.probing = true;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn record_success(&self) {
        let mut window = self
            .window
            .lock()
            .expect("circuit breaker lock is not poisoned");
        *window = BreakerWindow::default();
    }

    pub fn record_failure(&self) {
        let mut window = self
            .window
            .lock()
            .expect("circuit breaker lock is not poisoned");
        window.failures = window.failures.saturating_add(1);

        if window.probing || window.failures >= self.config.trip_threshold {
            window.tripped_at = Some(Instant::now());
            window.probing = false;
        }
    }

    pub fn state(&self) -> CircuitState {
        let window = self
            .window
            .lock()
            .expect("circuit breaker lock is not poisoned");

        if window.tripped_at.is_some() {
            CircuitState::Open
        } else if window.probing {
            CircuitState::HalfOpen
        } else {
            CircuitState::Closed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trips_after_threshold_failures() {
        let breaker = CircuitBreaker::new(CircuitBreakerConfig {
            trip_threshold: 2,
            cooldown: Duration::from_millis(10),
        });

        assert_eq!(breaker.state(), CircuitState::Closed);
        breaker.record_failure();
        assert_eq!(breaker.state(), CircuitState::Closed);
        breaker.record_failure();
        assert_eq!(breaker.state(), CircuitState::Open);
        assert!(!breaker.allow_request());
    }

    #[test]
    fn probes_after_cooldown_then_closes_on_success() {
        let breaker = CircuitBreaker::new(CircuitBreakerConfig {
            trip_threshold: 1,
            cooldown: Duration::from_millis(1),
        });

        breaker.record_failure();
        assert_eq!(breaker.state(), CircuitState::Open);

        std::thread::sleep(Duration::from_millis(2));
        assert!(breaker.allow_request());
        assert_eq!(breaker.state(), CircuitState::HalfOpen);

        breaker.record_success();
        assert_eq!(breaker.state(), CircuitState::Closed);
    }

    #[test]
    fn failed_probe_reopens_immediately() {
        let breaker = CircuitBreaker::new(CircuitBreakerConfig {
            trip_threshold: 3,
            cooldown: Duration::from_millis(1),
        });

        for _ in 0..3 {
            breaker.record_failure();
        }
        std::thread::sleep(Duration::from_millis(2));
        assert!(breaker.allow_request());

        breaker.record_failure();
        assert_eq!(breaker.state(), CircuitState::Open);
        assert!(!breaker.allow_request());
    }
}
