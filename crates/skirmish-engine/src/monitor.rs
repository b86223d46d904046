//! Advisory combat telemetry.
//!
//! Counts attack and validation work over a fixed window of simulation time
//! and flags when the combat load gets heavy. It never throttles anything;
//! acting on the recommendations is up to the caller.

use std::time::Duration;

use skirmish_core::constants::*;
use skirmish_core::state::PerformanceView;

#[derive(Debug, Clone)]
pub struct PerformanceMonitor {
    window_ms: u64,
    window_started_ms: u64,

    attacks: u32,
    attack_time: Duration,
    validations: u32,
    frames: u32,
    frame_time: Duration,
    active_engagements: usize,

    /// Summary of the most recent closed window.
    last_window: Option<PerformanceView>,
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new(MONITOR_WINDOW_MS)
    }
}

impl PerformanceMonitor {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms: window_ms.max(1),
            window_started_ms: 0,
            attacks: 0,
            attack_time: Duration::ZERO,
            validations: 0,
            frames: 0,
            frame_time: Duration::ZERO,
            active_engagements: 0,
            last_window: None,
        }
    }

    /// One executed attack and the time spent processing it.
    pub fn record_attack(&mut self, elapsed: Duration) {
        self.attacks += 1;
        self.attack_time += elapsed;
    }

    pub fn record_validations(&mut self, count: u32) {
        self.validations += count;
    }

    /// Combat work done during one frame, and the engagement count after it.
    pub fn record_frame(&mut self, elapsed: Duration, active_engagements: usize) {
        self.frames += 1;
        self.frame_time += elapsed;
        self.active_engagements = active_engagements;
    }

    /// Close the window once it has run its length.
    pub fn roll_window(&mut self, now_ms: u64) {
        if now_ms.saturating_sub(self.window_started_ms) < self.window_ms {
            return;
        }
        self.last_window = Some(self.current_window());
        self.window_started_ms = now_ms;
        self.attacks = 0;
        self.attack_time = Duration::ZERO;
        self.validations = 0;
        self.frames = 0;
        self.frame_time = Duration::ZERO;
    }

    /// Figures for the last closed window, or the open one before any closed.
    pub fn summary(&self) -> PerformanceView {
        self.last_window
            .clone()
            .unwrap_or_else(|| self.current_window())
    }

    fn current_window(&self) -> PerformanceView {
        let window_secs = self.window_ms as f64 / 1000.0;
        let attacks_per_sec = self.attacks as f64 / window_secs;
        let validations_per_sec = self.validations as f64 / window_secs;
        let avg_attack_ms = if self.attacks > 0 {
            millis(self.attack_time) / self.attacks as f64
        } else {
            0.0
        };
        let frame_impact_ms = if self.frames > 0 {
            millis(self.frame_time) / self.frames as f64
        } else {
            0.0
        };

        let mut recommendations = Vec::new();
        if frame_impact_ms > MONITOR_MAX_FRAME_IMPACT_MS {
            recommendations.push(format!(
                "Combat adds {frame_impact_ms:.2} ms per frame; reduce the detection radius or the number of armed units"
            ));
        }
        if avg_attack_ms > MONITOR_MAX_AVG_ATTACK_MS {
            recommendations.push(format!(
                "Attacks take {avg_attack_ms:.2} ms on average; simplify the damage policy or batch effect requests"
            ));
        }
        if self.active_engagements > MONITOR_MAX_ENGAGEMENTS {
            recommendations.push(format!(
                "{} simultaneous engagements; stagger attackers or use coordinated assaults",
                self.active_engagements
            ));
        }
        if validations_per_sec > MONITOR_MAX_VALIDATIONS_PER_SEC {
            recommendations.push(format!(
                "{validations_per_sec:.0} validations per second; lower the detection radius to shrink candidate scans"
            ));
        }

        PerformanceView {
            attacks_per_sec,
            avg_attack_ms,
            validations_per_sec,
            frame_impact_ms,
            active_engagements: self.active_engagements,
            performing_well: recommendations.is_empty(),
            recommendations,
        }
    }
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}
