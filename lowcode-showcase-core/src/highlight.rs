//! Periodic workflow highlight
//!
//! Every `interval`, step `i` of the workflow row lights up at `i * stagger` and goes
//! dark again `duration` later. Purely cosmetic: the timer never touches view state,
//! it only emits [`HighlightEvent`]s on a channel the front end drains.
//!
//! The timer is a tokio task owned by [`HighlightTimer`]; stopping or dropping the
//! timer aborts the task, so no timer outlives the view.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Highlight timings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Whether the effect runs at all
    pub enabled: bool,
    /// Time between cycles; the first cycle starts one interval after spawning
    pub interval_ms: u64,
    /// Delay between consecutive steps within a cycle
    pub stagger_ms: u64,
    /// How long each step stays lit
    pub duration_ms: u64,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: 8000,
            stagger_ms: 1500,
            duration_ms: 1000,
        }
    }
}

impl HighlightConfig {
    pub fn interval(&self) -> Duration {
        // tokio panics on a zero period
        Duration::from_millis(self.interval_ms.max(1))
    }

    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

/// Visual toggle of one workflow step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightEvent {
    On(usize),
    Off(usize),
}

/// Events of one cycle with their offsets from the cycle start, in firing order.
pub fn cycle_schedule(step_count: usize, config: &HighlightConfig) -> Vec<(Duration, HighlightEvent)> {
    let mut schedule = Vec::with_capacity(step_count * 2);
    let mut offset = Duration::ZERO;

    for index in 0..step_count {
        schedule.push((offset, HighlightEvent::On(index)));
        schedule.push((offset + config.duration(), HighlightEvent::Off(index)));
        offset += config.stagger();
    }

    // Stable: an Off and the next On at the same offset keep Off first
    schedule.sort_by_key(|(offset, _)| *offset);
    schedule
}

/// Handle to the running highlight task
#[derive(Debug)]
pub struct HighlightTimer {
    task: JoinHandle<()>,
    events: mpsc::UnboundedReceiver<HighlightEvent>,
}

impl HighlightTimer {
    /// Spawn the timer on `handle`
    pub fn spawn(handle: &Handle, config: HighlightConfig, step_count: usize) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let schedule = cycle_schedule(step_count, &config);

        let task = handle.spawn(async move {
            let period = config.interval();
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                let cycle_start = ticker.tick().await;
                for (offset, event) in &schedule {
                    time::sleep_until(cycle_start + *offset).await;
                    if tx.send(*event).is_err() {
                        // Receiver gone, nobody is watching
                        return;
                    }
                }
            }
        });

        tracing::debug!(
            "Highlight timer started: {} steps every {:?}",
            step_count,
            config.interval()
        );

        Self { task, events }
    }

    /// Next pending event without waiting
    pub fn try_next(&mut self) -> Option<HighlightEvent> {
        self.events.try_recv().ok()
    }

    /// Wait for the next event; `None` once the timer has stopped and the queue is drained.
    pub async fn next_event(&mut self) -> Option<HighlightEvent> {
        self.events.recv().await
    }

    /// Cancel the task. Events already queued can still be drained.
    pub fn stop(&mut self) {
        if !self.task.is_finished() {
            self.task.abort();
            tracing::debug!("Highlight timer stopped");
        }
    }
}

impl Drop for HighlightTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> HighlightConfig {
        HighlightConfig {
            enabled: true,
            interval_ms: 8000,
            stagger_ms: 1500,
            duration_ms: 1000,
        }
    }

    #[test]
    fn test_schedule_staggers_by_index() {
        let schedule = cycle_schedule(2, &fast());
        assert_eq!(
            schedule,
            vec![
                (Duration::ZERO, HighlightEvent::On(0)),
                (Duration::from_millis(1000), HighlightEvent::Off(0)),
                (Duration::from_millis(1500), HighlightEvent::On(1)),
                (Duration::from_millis(2500), HighlightEvent::Off(1)),
            ]
        );
    }

    #[test]
    fn test_schedule_overlapping_steps_sorted() {
        let config = HighlightConfig {
            duration_ms: 2000,
            ..fast()
        };
        let events: Vec<_> = cycle_schedule(2, &config).into_iter().map(|(_, e)| e).collect();
        assert_eq!(
            events,
            vec![
                HighlightEvent::On(0),
                HighlightEvent::On(1),
                HighlightEvent::Off(0),
                HighlightEvent::Off(1),
            ]
        );
    }

    #[test]
    fn test_schedule_empty_for_no_steps() {
        assert!(cycle_schedule(0, &fast()).is_empty());
    }

    #[test]
    fn test_zero_interval_clamped() {
        let config = HighlightConfig {
            interval_ms: 0,
            ..fast()
        };
        assert_eq!(config.interval(), Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_first_cycle_after_one_interval() {
        let started = Instant::now();
        let mut timer = HighlightTimer::spawn(&Handle::current(), fast(), 2);

        assert_eq!(timer.next_event().await, Some(HighlightEvent::On(0)));
        assert!(started.elapsed() >= Duration::from_millis(8000));

        assert_eq!(timer.next_event().await, Some(HighlightEvent::Off(0)));
        assert_eq!(timer.next_event().await, Some(HighlightEvent::On(1)));
        assert_eq!(timer.next_event().await, Some(HighlightEvent::Off(1)));

        timer.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_stop_closes_channel() {
        let mut timer = HighlightTimer::spawn(&Handle::current(), fast(), 4);
        assert_eq!(timer.try_next(), None);

        timer.stop();
        assert_eq!(timer.next_event().await, None);
    }
}
