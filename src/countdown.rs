use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

pub const TICK: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    Finished,
}

/// Time left until the launch shown on the coming-soon page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(74, 12, 45, 0)
    }
}

impl Countdown {
    pub fn new(days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }

    /// Take one second off, borrowing from the larger units. Stays at zero.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_finished() {
            return TickOutcome::Finished;
        }
        if self.seconds > 0 {
            self.seconds -= 1;
        } else {
            self.seconds = 59;
            if self.minutes > 0 {
                self.minutes -= 1;
            } else {
                self.minutes = 59;
                if self.hours > 0 {
                    self.hours -= 1;
                } else {
                    self.hours = 23;
                    self.days -= 1;
                }
            }
        }
        if self.is_finished() {
            TickOutcome::Finished
        } else {
            TickOutcome::Running
        }
    }
}

/// One-second ticker over a shared [`Countdown`]. The task ends on its own at zero
/// and is aborted when the timer is dropped.
pub struct CountdownTimer {
    state: Arc<Mutex<Countdown>>,
    task: JoinHandle<()>,
}

impl CountdownTimer {
    /// Must be called from within a tokio runtime.
    pub fn start<F>(countdown: Countdown, mut on_tick: F) -> Self
    where
        F: FnMut(Countdown) + Send + 'static,
    {
        let state = Arc::new(Mutex::new(countdown));
        let shared = Arc::clone(&state);
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK);
            // The first tick of a tokio interval completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let (snapshot, outcome) = {
                    let Ok(mut countdown) = shared.lock() else {
                        return;
                    };
                    let outcome = countdown.tick();
                    (*countdown, outcome)
                };
                on_tick(snapshot);
                if outcome == TickOutcome::Finished {
                    tracing::debug!("countdown finished");
                    return;
                }
            }
        });
        Self { state, task }
    }

    pub fn current(&self) -> Countdown {
        self.state
            .lock()
            .map(|countdown| *countdown)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Release the ticking task. The last reached value stays readable.
    pub fn stop(&self) {
        self.task.abort();
    }
}

impl Drop for CountdownTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
