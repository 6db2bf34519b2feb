//! Liveness of the RAG service and the retry schedule of the health probe.
//!
//! [`HealthMonitor`] holds no timer. It only decides, after each probe, whether and when the
//! next probe should run; the UI owns the actual timer so that dropping the view cancels it.

use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Status badge shown in the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ServiceStatus {
    #[default]
    Unknown,
    Up,
    Down,
}

impl ServiceStatus {
    pub fn label(self) -> &'static str {
        match self {
            ServiceStatus::Unknown => "Checking...",
            ServiceStatus::Up => "Online",
            ServiceStatus::Down => "Offline",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ServiceStatus::Unknown => "status-unknown",
            ServiceStatus::Up => "status-online",
            ServiceStatus::Down => "status-offline",
        }
    }
}

/// Body of `GET /actuator/health`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HealthReport {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "crate::model::null_as_default")]
    pub components: Map<String, Value>,
}

impl HealthReport {
    /// A 2xx answer counts as up unless the service explicitly reports otherwise.
    pub fn service_status(&self) -> ServiceStatus {
        match self.status.as_deref() {
            Some(status) if !status.eq_ignore_ascii_case("UP") => ServiceStatus::Down,
            _ => ServiceStatus::Up,
        }
    }
}

/// Exponential backoff between health probes after a failure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub initial_delay: Duration,
    pub multiplier: f64,
    pub max_delay: Duration,
    /// Consecutive failures after which probing stops. `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(2),
            multiplier: 2.0,
            max_delay: Duration::from_secs(30),
            max_attempts: Some(10),
        }
    }
}

impl RetryPolicy {
    /// Constant delay, unbounded attempts.
    pub fn fixed(delay: Duration) -> Self {
        Self {
            initial_delay: delay,
            multiplier: 1.0,
            max_delay: delay,
            max_attempts: None,
        }
    }

    /// Delay before retry number `attempt` (1-based).
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(32) as i32;
        let secs = self.initial_delay.as_secs_f64() * self.multiplier.powi(exponent);
        let capped = secs.min(self.max_delay.as_secs_f64());
        Duration::from_secs_f64(capped.max(0.0))
    }
}

/// Tracks consecutive probe failures and turns them into at most one pending retry.
#[derive(Debug, Clone, Default)]
pub struct HealthMonitor {
    policy: RetryPolicy,
    status: ServiceStatus,
    failures: u32,
}

impl HealthMonitor {
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            status: ServiceStatus::Unknown,
            failures: 0,
        }
    }

    pub fn status(&self) -> ServiceStatus {
        self.status
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// A successful probe. Clears the failure streak; no retry is needed.
    pub fn record_success(&mut self) {
        self.status = ServiceStatus::Up;
        self.failures = 0;
    }

    /// A failed probe. Returns the delay before the single next probe, or `None` once the
    /// attempt budget is exhausted.
    pub fn record_failure(&mut self) -> Option<Duration> {
        self.status = ServiceStatus::Down;
        self.failures = self.failures.saturating_add(1);
        match self.policy.max_attempts {
            Some(max) if self.failures >= max => None,
            _ => Some(self.policy.delay_for(self.failures)),
        }
    }

    /// Manual re-check: forget the streak and go back to unknown.
    pub fn reset(&mut self) {
        self.status = ServiceStatus::Unknown;
        self.failures = 0;
    }
}
