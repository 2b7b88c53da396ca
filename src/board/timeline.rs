//! Timeline view: tasks with due dates laid out over a date window.

use crate::task::domain::Task;
use chrono::{Days, NaiveDate};

/// Inclusive date range shown by the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TimelineWindow {
    /// Number of days shown when no explicit window is chosen.
    pub const DEFAULT_SPAN_DAYS: u64 = 30;

    /// Creates a window, swapping the bounds if they are reversed.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    /// Window from `today` spanning [`Self::DEFAULT_SPAN_DAYS`] days.
    #[must_use]
    pub fn starting(today: NaiveDate) -> Self {
        let end = today
            .checked_add_days(Days::new(Self::DEFAULT_SPAN_DAYS))
            .unwrap_or(NaiveDate::MAX);
        Self::new(today, end)
    }

    /// Returns the first day.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns every day in the window, in order.
    #[must_use]
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take_while(|day| *day <= self.end).collect()
    }

    /// Returns how far into the window `date` falls, as a percentage
    /// clamped to `0..=100`.
    ///
    /// Dates before the window map to 0 and dates after it to 100. A
    /// single-day window places its only day at 100.
    #[must_use]
    pub fn position(&self, date: NaiveDate) -> u8 {
        let total = (self.end - self.start).num_days();
        let passed = (date - self.start).num_days();
        if passed <= 0 {
            return 0;
        }
        if passed >= total {
            return 100;
        }
        passed
            .saturating_mul(100)
            .checked_div(total)
            .and_then(|percent| u8::try_from(percent).ok())
            .unwrap_or(100)
    }
}

/// A task placed on the timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    /// The task.
    pub task: Task,
    /// The task's due date.
    pub due_date: NaiveDate,
    /// Offset into the window as a percentage.
    pub position: u8,
    /// Whether the due date has passed while the task is still open.
    pub overdue: bool,
}

/// Tasks with due dates, earliest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    window: TimelineWindow,
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    /// Lays out every task that has a due date over `window`.
    ///
    /// Tasks without a due date are left out. Entries are ordered by due
    /// date; tasks sharing a date keep their input order.
    #[must_use]
    pub fn build(tasks: &[Task], window: TimelineWindow, today: NaiveDate) -> Self {
        let mut entries: Vec<TimelineEntry> = tasks
            .iter()
            .filter_map(|task| {
                task.due_date().map(|due_date| TimelineEntry {
                    task: task.clone(),
                    due_date,
                    position: window.position(due_date),
                    overdue: task.is_overdue(today),
                })
            })
            .collect();
        entries.sort_by_key(|entry| entry.due_date);
        Self { window, entries }
    }

    /// Returns the window.
    #[must_use]
    pub const fn window(&self) -> TimelineWindow {
        self.window
    }

    /// Returns the entries, earliest due date first.
    #[must_use]
    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }
}
