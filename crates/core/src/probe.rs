//! Bounded wait for a wallet extension to announce itself.
//!
//! Extensions inject their provider some time after page load. The probe polls
//! a readiness check at a fixed interval until it passes or the time budget is
//! spent. Elapsed time is the sum of completed sleeps rather than a clock
//! reading, so the probe also runs on `wasm32-unknown-unknown`.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::config::ProbeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessProbe {
	pub interval: Duration,
	pub timeout: Duration,
}

impl Default for ReadinessProbe {
	fn default() -> Self {
		Self::from(ProbeConfig::default())
	}
}

impl From<ProbeConfig> for ReadinessProbe {
	fn from(config: ProbeConfig) -> Self {
		Self {
			interval: config.interval(),
			timeout: config.timeout(),
		}
	}
}

impl ReadinessProbe {
	pub fn new(interval: Duration, timeout: Duration) -> Self {
		Self { interval, timeout }
	}

	/// Overrides the time budget, keeping the interval.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Resolves `true` once `is_ready` passes, `false` when the budget runs out.
	///
	/// `bypass` skips polling entirely and resolves `true`. `sleep` is the host's
	/// timer (`tokio::time::sleep` natively, a `setTimeout` promise in the
	/// browser). A zero interval checks exactly once.
	pub async fn wait_until_ready<R, S, F>(&self, bypass: bool, mut is_ready: R, mut sleep: S) -> bool
	where
		R: FnMut() -> bool,
		S: FnMut(Duration) -> F,
		F: Future<Output = ()>,
	{
		if bypass {
			return true;
		}

		let mut waited = Duration::ZERO;
		loop {
			if is_ready() {
				debug!(target = "wconn.probe", waited_ms = waited.as_millis() as u64, "extension ready");
				return true;
			}
			if self.interval.is_zero() || waited >= self.timeout {
				debug!(target = "wconn.probe", waited_ms = waited.as_millis() as u64, "extension not ready before timeout");
				return false;
			}
			let step = self.interval.min(self.timeout - waited);
			sleep(step).await;
			waited += step;
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::Cell;

	use super::*;

	#[tokio::test]
	async fn bypass_resolves_without_checking() {
		let checks = Cell::new(0);
		let ready = ReadinessProbe::default()
			.wait_until_ready(
				true,
				|| {
					checks.set(checks.get() + 1);
					false
				},
				tokio::time::sleep,
			)
			.await;
		assert!(ready);
		assert_eq!(checks.get(), 0);
	}

	#[tokio::test(start_paused = true)]
	async fn resolves_once_flag_flips() {
		let checks = Cell::new(0);
		let probe = ReadinessProbe::new(Duration::from_millis(500), Duration::from_secs(3));
		let ready = probe
			.wait_until_ready(
				false,
				|| {
					checks.set(checks.get() + 1);
					checks.get() >= 3
				},
				tokio::time::sleep,
			)
			.await;
		assert!(ready);
		assert_eq!(checks.get(), 3);
	}

	#[tokio::test(start_paused = true)]
	async fn gives_up_after_timeout() {
		let slept = Cell::new(Duration::ZERO);
		let probe = ReadinessProbe::new(Duration::from_millis(400), Duration::from_secs(1));
		let ready = probe
			.wait_until_ready(
				false,
				|| false,
				|step| {
					slept.set(slept.get() + step);
					tokio::time::sleep(step)
				},
			)
			.await;
		assert!(!ready);
		assert_eq!(slept.get(), Duration::from_secs(1));
	}

	#[tokio::test]
	async fn zero_interval_checks_once() {
		let checks = Cell::new(0);
		let probe = ReadinessProbe::new(Duration::ZERO, Duration::from_secs(1));
		let ready = probe
			.wait_until_ready(
				false,
				|| {
					checks.set(checks.get() + 1);
					false
				},
				tokio::time::sleep,
			)
			.await;
		assert!(!ready);
		assert_eq!(checks.get(), 1);
	}
}
