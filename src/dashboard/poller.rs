//! Dashboard polling driver
//!
//! Composes one [`DashboardSnapshot`] per tick from a [`ParkSimulator`] and keeps the
//! peak watermark. [`DashboardPoller::run`] drives a fixed number of ticks with a
//! blocking sleep in between.

use super::watermark::PeakWatermark;
use crate::simulation::{ParkSimulator, SimulationResult};
use crate::telemetry::{
    active_alert_count, overall_status, top_alert, top_suggestion, Alert, AlertStatus, Attraction,
    FlowRates, QueueHistoryPoint, Suggestion, Zone,
};
use crate::types::{CrowdLevel, Language};
use crate::{perf_span, sim_event};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Everything a dashboard refresh shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// 1-based tick number
    pub tick: u64,
    /// Clock reading the tick was generated at
    pub generated_at: DateTime<FixedOffset>,
    /// Demand multiplier at `generated_at`
    pub intensity: f64,
    /// Park-wide visitor total
    pub total_visitors: u32,
    /// Highest total seen by this poller
    pub peak_visitors: u32,
    /// Crowd-stress index (0-100)
    pub crowd_stress_index: u32,
    /// Gate flow
    pub flow: FlowRates,
    /// Unresolved alerts
    pub active_alerts: usize,
    /// Traffic light over the newest unresolved alerts
    pub status: AlertStatus,
    /// Most pressing unresolved alert
    pub top_alert: Option<Alert>,
    /// Highest-priority recommendation
    pub top_suggestion: Option<Suggestion>,
    /// Per-attraction telemetry
    pub attractions: Vec<Attraction>,
    /// Per-zone occupancy
    pub zones: Vec<Zone>,
    /// Queue history for the charted attraction
    pub queue_history: Vec<QueueHistoryPoint>,
}

impl DashboardSnapshot {
    /// Attractions at critical crowd level
    pub fn critical_attractions(&self) -> impl Iterator<Item = &Attraction> {
        self.attractions.iter().filter(|a| a.crowd_level == CrowdLevel::Critical)
    }

    /// One-line human summary in the given language
    pub fn summary(&self, language: Language) -> String {
        let headline = self
            .top_alert
            .as_ref()
            .map(|alert| alert.title.get(language).to_string())
            .unwrap_or_else(|| "-".to_string());

        match language {
            Language::Zh => format!(
                "第{}次刷新 {} 在园 {} 人 (峰值 {}) 拥挤指数 {} 状态 {} 告警: {}",
                self.tick,
                self.generated_at.format("%H:%M"),
                self.total_visitors,
                self.peak_visitors,
                self.crowd_stress_index,
                self.status,
                headline
            ),
            Language::En => format!(
                "Tick {} at {}: {} visitors (peak {}), stress {}, status {}, top alert: {}",
                self.tick,
                self.generated_at.format("%H:%M"),
                self.total_visitors,
                self.peak_visitors,
                self.crowd_stress_index,
                self.status,
                headline
            ),
        }
    }
}

/// Polls a simulator the way the dashboard does
#[derive(Debug)]
pub struct DashboardPoller {
    simulator: ParkSimulator,
    history_attraction: String,
    watermark: PeakWatermark,
    ticks: u64,
}

impl DashboardPoller {
    /// Create a poller charting `history_attraction`
    pub fn new(simulator: ParkSimulator, history_attraction: impl Into<String>) -> Self {
        Self {
            simulator,
            history_attraction: history_attraction.into(),
            watermark: PeakWatermark::new(),
            ticks: 0,
        }
    }

    /// Ticks produced so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Highest visitor total seen so far
    pub fn peak_visitors(&self) -> u32 {
        self.watermark.peak()
    }

    /// The underlying simulator
    pub fn simulator(&self) -> &ParkSimulator {
        &self.simulator
    }

    /// Produce the next snapshot
    pub fn tick(&mut self) -> DashboardSnapshot {
        self.ticks += 1;
        let simulator = &mut self.simulator;

        let generated_at = simulator.now();
        let intensity = simulator.intensity();
        let attractions = simulator.attractions();
        let zones = simulator.zones();
        let total_visitors = simulator.total_visitors();
        let crowd_stress_index = simulator.crowd_stress_index();
        let flow = simulator.flow_rates();
        let queue_history = simulator.queue_history(&self.history_attraction);
        let alerts = simulator.alerts();
        let suggestions = simulator.suggestions();

        let peak_visitors = self.watermark.observe(total_visitors);

        let snapshot = DashboardSnapshot {
            tick: self.ticks,
            generated_at,
            intensity,
            total_visitors,
            peak_visitors,
            crowd_stress_index,
            flow,
            active_alerts: active_alert_count(&alerts),
            status: overall_status(&alerts),
            top_alert: top_alert(&alerts).cloned(),
            top_suggestion: top_suggestion(&suggestions).cloned(),
            attractions,
            zones,
            queue_history,
        };

        sim_event!(
            debug,
            "dashboard",
            "Tick generated",
            tick = snapshot.tick,
            visitors = snapshot.total_visitors,
            peak = snapshot.peak_visitors,
            critical = snapshot.critical_attractions().count(),
        );
        snapshot
    }

    /// Run `ticks` ticks, sleeping `interval` between them
    ///
    /// A pinned clock advances by `interval` after each tick. The sink sees every
    /// snapshot in order; its first error stops the run.
    pub fn run<F>(&mut self, ticks: usize, interval: Duration, mut sink: F) -> SimulationResult<()>
    where
        F: FnMut(&DashboardSnapshot) -> SimulationResult<()>,
    {
        let span = perf_span!("dashboard_run", ticks = ticks, interval_secs = interval.as_secs_f64());
        let _enter = span.enter();

        let step = chrono::Duration::from_std(interval).unwrap_or_else(|_| chrono::Duration::zero());

        for index in 0..ticks {
            let snapshot = self.tick();
            sink(&snapshot)?;

            self.simulator.advance_clock(step);
            if index + 1 < ticks && !interval.is_zero() {
                debug!("Sleeping {:?} until next tick", interval);
                thread::sleep(interval);
            }
        }

        sim_event!(info, "dashboard", "Polling finished", ticks = self.ticks, peak = self.watermark.peak());
        Ok(())
    }
}
