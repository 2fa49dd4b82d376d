//! Live countdown ticker
//!
//! `CountdownTicker` is the pure state machine: it owns the current
//! target and advances on explicit `tick(now)` calls. The terminal
//! display (`run_clock`) drives it from a one-second interval; the
//! interval lives inside the display loop, so exiting the loop releases
//! the timer and no second ticker can ever run for the same display.

use crate::calendar::{self, Deadline, TimeLeft};
use crate::formatting;
use anyhow::Result;
use chrono::NaiveDateTime;
use std::io::{self, Write};
use std::time::Duration;

/// What the ticker is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockState<'a> {
    /// Every catalog entry has passed
    Idle,
    /// Counting down to `deadline`
    Running {
        deadline: &'a Deadline,
        left: TimeLeft,
    },
}

/// Countdown state machine over a deadline catalog
pub struct CountdownTicker<'a> {
    catalog: &'a [Deadline],
    target: Option<&'a Deadline>,
}

impl<'a> CountdownTicker<'a> {
    /// Create a ticker aimed at the next deadline after `now`
    pub fn new(catalog: &'a [Deadline], now: NaiveDateTime) -> Self {
        Self {
            catalog,
            target: calendar::next_deadline(catalog, now),
        }
    }

    /// The deadline currently counted down to
    pub fn target(&self) -> Option<&'a Deadline> {
        self.target
    }

    /// Advance one tick, recomputing the remaining time
    ///
    /// When the decomposition reaches all-zero the target has passed, so
    /// the selector is re-run against the same `now` and the state rolls
    /// over to the following deadline without showing a zero frame. Once
    /// the catalog is exhausted the ticker stays Idle.
    pub fn tick(&mut self, now: NaiveDateTime) -> ClockState<'a> {
        let Some(target) = self.target else {
            return ClockState::Idle;
        };

        let left = calendar::time_left(target.when, now);
        if !left.is_zero() {
            return ClockState::Running {
                deadline: target,
                left,
            };
        }

        self.target = calendar::next_deadline(self.catalog, now);
        match self.target {
            Some(next) => ClockState::Running {
                deadline: next,
                left: calendar::time_left(next.when, now),
            },
            None => ClockState::Idle,
        }
    }
}

/// Run the live countdown in the terminal
///
/// Redraws one line per second until Ctrl-C, or until the last deadline
/// of the year has passed.
pub async fn run_clock() -> Result<()> {
    let catalog = calendar::deadlines();
    let mut ticker = CountdownTicker::new(catalog, calendar::local_now());
    let mut interval = tokio::time::interval(Duration::from_secs(1));

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match ticker.tick(calendar::local_now()) {
                    ClockState::Running { deadline, left } => {
                        // \x1b[K clears leftovers when the line shortens
                        print!("\r{}\x1b[K", formatting::format_countdown_line(deadline, &left));
                        io::stdout().flush()?;
                    }
                    ClockState::Idle => {
                        println!("\rNo upcoming deadlines. The academic year is over!");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        }
    }

    Ok(())
}
