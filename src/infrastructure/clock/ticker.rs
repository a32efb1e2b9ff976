//! Periodic clock ticks on a background timer
//!
//! The TUI thread is synchronous, so the timer runs on its own thread with a
//! small Tokio runtime and reports ticks over a std channel. Dropping the
//! ticker stops the timer and joins its thread.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::runtime::Builder;
use tokio::sync::oneshot;
use tokio::time::{interval, MissedTickBehavior};

#[derive(Debug, Clone, Copy)]
pub enum ClockEvent {
    Tick(DateTime<Local>),
}

#[derive(Debug)]
pub struct ClockTicker {
    evt_rx: Receiver<ClockEvent>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ClockTicker {
    pub fn start(period: Duration) -> anyhow::Result<Self> {
        let (evt_tx, evt_rx) = mpsc::channel::<ClockEvent>();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let runtime = Builder::new_current_thread().enable_time().build()?;

        let handle = thread::Builder::new()
            .name("clock".to_string())
            .spawn(move || runtime.block_on(run_ticker(period, evt_tx, shutdown_rx)))?;

        tracing::debug!(period_ms = period.as_millis() as u64, "clock ticker started");
        Ok(Self {
            evt_rx,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Drain pending ticks (non-blocking)
    pub fn poll_events(&self) -> Vec<ClockEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.evt_rx.try_recv() {
            events.push(evt);
        }
        events
    }
}

async fn run_ticker(
    period: Duration,
    evt_tx: Sender<ClockEvent>,
    mut shutdown_rx: oneshot::Receiver<()>,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        tokio::select! {
            _ = &mut shutdown_rx => break,
            _ = ticker.tick() => {
                if evt_tx.send(ClockEvent::Tick(Local::now())).is_err() {
                    break;
                }
            }
        }
    }
    tracing::debug!("clock ticker stopped");
}

impl Drop for ClockTicker {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_ticks_arrive_periodically() {
        let ticker = ClockTicker::start(Duration::from_millis(10)).unwrap();
        let mut ticks = 0;
        let deadline = Instant::now() + Duration::from_secs(2);
        while ticks < 3 && Instant::now() < deadline {
            ticks += ticker.poll_events().len();
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(ticks >= 3);
    }

    #[test]
    fn test_drop_stops_the_timer_thread() {
        let ticker = ClockTicker::start(Duration::from_secs(3600)).unwrap();
        let started = Instant::now();
        drop(ticker);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
