use crate::models::Habit;
use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Next moment `reminder` (`HH:MM`) comes around: later today, or tomorrow
/// once today's slot has passed.
pub fn next_occurrence(reminder: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let time = NaiveTime::parse_from_str(reminder.trim(), "%H:%M").ok()?;
    let candidate = now.date().and_time(time);
    if candidate < now {
        Some(candidate + Duration::days(1))
    } else {
        Some(candidate)
    }
}

/// One-shot reminder timers, one per habit with a reminder time.
#[derive(Debug, Default)]
pub struct ReminderScheduler {
    timers: Mutex<HashMap<i64, JoinHandle<()>>>,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels every pending timer and arms a fresh one for each habit.
    /// Must be called from within a tokio runtime.
    pub fn reschedule(&self, habits: &[Habit]) {
        self.reschedule_at(habits, Local::now().naive_local());
    }

    pub fn reschedule_at(&self, habits: &[Habit], now: NaiveDateTime) {
        let mut timers = match self.timers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        for (_, handle) in timers.drain() {
            handle.abort();
        }

        for habit in habits {
            let Some(reminder) = habit.reminder_time.as_deref() else {
                continue;
            };
            let Some(fire_at) = next_occurrence(reminder, now) else {
                warn!(habit_id = habit.id, reminder, "ignoring malformed reminder time");
                continue;
            };
            let delay = (fire_at - now).to_std().unwrap_or_default();
            let name = habit.name.clone();
            let habit_id = habit.id;

            debug!(habit_id, %fire_at, "scheduled reminder");
            let handle = tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                info!(habit_id, "Habit Reminder: {name}");
            });
            timers.insert(habit.id, handle);
        }
    }

    pub fn pending(&self) -> usize {
        match self.timers.lock() {
            Ok(timers) => timers.values().filter(|handle| !handle.is_finished()).count(),
            Err(poisoned) => poisoned
                .into_inner()
                .values()
                .filter(|handle| !handle.is_finished())
                .count(),
        }
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        let timers = match self.timers.get_mut() {
            Ok(timers) => timers,
            Err(poisoned) => poisoned.into_inner(),
        };
        for (_, handle) in timers.drain() {
            handle.abort();
        }
    }
}
