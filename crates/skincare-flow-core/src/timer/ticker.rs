//! Scheduled tick task for a running countdown.
//!
//! A [`Ticker`] is a tokio task sending one tick per period over a
//! channel. Dropping it aborts the task and closes the channel, so a tick
//! can never reach a countdown whose step is no longer displayed.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::countdown::Countdown;
use crate::events::Event;
use crate::routine::Step;

/// Default tick period of a step timer.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Periodic tick source. Cancelled on drop.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
    rx: mpsc::Receiver<()>,
}

impl Ticker {
    /// Spawn the tick task. The first tick arrives one `period` from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(1);
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        Self { handle, rx }
    }

    /// Wait for the next tick. `None` once the task has stopped.
    pub async fn tick(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A step's countdown together with the task driving it.
///
/// The ticker only exists while the countdown runs. Pausing, resetting,
/// reaching zero and dropping the `StepTimer` all cancel it.
#[derive(Debug)]
pub struct StepTimer {
    countdown: Countdown,
    period: Duration,
    ticker: Option<Ticker>,
}

impl StepTimer {
    pub fn new(countdown: Countdown, period: Duration) -> Self {
        Self {
            countdown,
            period,
            ticker: None,
        }
    }

    /// Fresh timer for `step`, or `None` when the step hosts no timer.
    pub fn for_step(step: &Step, period: Duration) -> Option<Self> {
        Countdown::for_step(step).map(|countdown| Self::new(countdown, period))
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Whether a tick task is currently scheduled.
    pub fn is_scheduled(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn toggle(&mut self) -> Option<Event> {
        let event = self.countdown.toggle();
        self.sync_ticker();
        event
    }

    pub fn start(&mut self) -> Option<Event> {
        let event = self.countdown.start();
        self.sync_ticker();
        event
    }

    pub fn pause(&mut self) -> Option<Event> {
        let event = self.countdown.pause();
        self.sync_ticker();
        event
    }

    pub fn reset(&mut self) -> Event {
        let event = self.countdown.reset();
        self.sync_ticker();
        event
    }

    /// Wait for the next scheduled tick and apply it.
    ///
    /// Pending forever while the countdown is stopped, which makes it safe
    /// to use as a `select!` branch. Returns the completion event on the
    /// tick that reaches zero and `None` for ordinary ticks.
    pub async fn next_tick(&mut self) -> Option<Event> {
        match self.ticker.as_mut() {
            Some(ticker) => {
                if ticker.tick().await.is_none() {
                    self.ticker = None;
                    return None;
                }
            }
            None => std::future::pending::<()>().await,
        }
        let event = self.countdown.tick();
        self.sync_ticker();
        event
    }

    fn sync_ticker(&mut self) {
        match (self.countdown.is_running(), self.ticker.is_some()) {
            (true, false) => self.ticker = Some(Ticker::spawn(self.period)),
            (false, true) => self.ticker = None,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticker_fires_once_per_period() {
        let start = Instant::now();
        let mut ticker = Ticker::spawn(Duration::from_secs(1));
        ticker.tick().await.unwrap();
        ticker.tick().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn step_timer_runs_to_completion_and_unschedules() {
        let mut timer = StepTimer::new(Countdown::new("eye", 3), Duration::from_secs(1));
        assert!(!timer.is_scheduled());

        timer.start();
        assert!(timer.is_scheduled());

        assert!(timer.next_tick().await.is_none());
        assert!(timer.next_tick().await.is_none());
        assert_eq!(timer.countdown().remaining_secs(), 1);
        match timer.next_tick().await {
            Some(Event::TimerCompleted { step_id, .. }) => assert_eq!(step_id, "eye"),
            other => panic!("Expected TimerCompleted, got {other:?}"),
        }
        assert!(!timer.countdown().is_running());
        assert!(!timer.is_scheduled());
    }

    #[tokio::test(start_paused = true)]
    async fn pause_and_reset_cancel_the_task() {
        let mut timer = StepTimer::new(Countdown::new("cream", 90), Duration::from_secs(1));
        timer.toggle();
        timer.next_tick().await;
        assert_eq!(timer.countdown().remaining_secs(), 89);

        timer.toggle();
        assert!(!timer.is_scheduled());

        // A stopped timer never yields a tick.
        let waited = time::timeout(Duration::from_secs(5), timer.next_tick()).await;
        assert!(waited.is_err());
        assert_eq!(timer.countdown().remaining_secs(), 89);

        timer.start();
        timer.reset();
        assert!(!timer.is_scheduled());
        assert_eq!(timer.countdown().remaining_secs(), 90);
    }
}
