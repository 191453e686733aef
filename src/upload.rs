/// Simulated upload
///
/// No network is involved: the "upload" walks through `steps + 1` ticks,
/// each after a random delay, and reports progress from 0 to 100.
/// Each tick is a separate task so the UI redraws between them.
use rand::Rng;
use std::time::Duration;

use crate::config::UploadSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPlan {
    settings: UploadSettings,
}

impl UploadPlan {
    pub fn new(settings: UploadSettings) -> Self {
        Self {
            settings: settings.normalized(),
        }
    }

    /// Number of increments; ticks run from 0 to `steps` inclusive
    pub fn steps(&self) -> u8 {
        self.settings.steps
    }

    /// Progress percentage reported after tick `step`
    pub fn progress_at(&self, step: u8) -> u8 {
        let percent = u32::from(step) * 100 / u32::from(self.steps());
        percent.min(100) as u8
    }

    pub fn is_last(&self, step: u8) -> bool {
        step >= self.steps()
    }

    /// Delay before the next tick, uniform in `[min, max)`
    pub fn random_delay<R: Rng>(&self, rng: &mut R) -> Duration {
        let (min, max) = (self.settings.min_delay_ms, self.settings.max_delay_ms);
        if min >= max {
            return Duration::from_millis(min);
        }
        Duration::from_millis(rng.gen_range(min..max))
    }

    /// Delay drawn from the thread-local RNG
    pub fn next_delay(&self) -> Duration {
        self.random_delay(&mut rand::thread_rng())
    }
}

impl Default for UploadPlan {
    fn default() -> Self {
        Self::new(UploadSettings::default())
    }
}

/// Sleep for `delay`, then hand back the tick that just completed
pub async fn wait_step(step: u8, delay: Duration) -> u8 {
    tokio::time::sleep(delay).await;
    step
}
