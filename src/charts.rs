use crate::models::{
    ChartsResponse, HabitCompletions, Habit, Heatmap, HeatmapRow, PieChart, PieSlice, TrendPoint,
};
use crate::window::{Window, date_key, parse_day, short_label};
use std::collections::BTreeMap;

pub fn build_charts(habits: &[Habit], window: &Window) -> ChartsResponse {
    ChartsResponse {
        window: window.summary(),
        heatmap: heatmap(habits, window),
        completions: completion_counts(habits, window),
        trend: daily_trend(habits, window),
        pie: completion_pie(habits, window),
    }
}

/// Completion entries of `habit` that fall inside the window, in stored order.
pub(crate) fn in_window<'a>(
    habit: &'a Habit,
    window: &'a Window,
) -> impl Iterator<Item = chrono::NaiveDate> + 'a {
    habit
        .completion_dates
        .iter()
        .filter_map(|raw| parse_day(raw))
        .filter(move |date| window.contains(*date))
}

pub fn heatmap(habits: &[Habit], window: &Window) -> Heatmap {
    let days: Vec<_> = window.days().collect();

    let rows = habits
        .iter()
        .map(|habit| {
            let mut values = vec![0u8; days.len()];
            for date in in_window(habit, window) {
                if let Some(slot) = window.offset_of(date).and_then(|i| values.get_mut(i)) {
                    *slot = 1;
                }
            }
            HeatmapRow {
                habit_id: habit.id,
                name: habit.name.clone(),
                values,
            }
        })
        .collect();

    Heatmap {
        dates: days.iter().copied().map(date_key).collect(),
        labels: days.iter().copied().map(short_label).collect(),
        rows,
    }
}

pub fn completion_counts(habits: &[Habit], window: &Window) -> Vec<HabitCompletions> {
    habits
        .iter()
        .map(|habit| HabitCompletions {
            id: habit.id,
            name: habit.name.clone(),
            completions: in_window(habit, window).count() as u32,
        })
        .collect()
}

pub fn daily_trend(habits: &[Habit], window: &Window) -> Vec<TrendPoint> {
    let mut per_day: BTreeMap<_, u32> = window.days().map(|day| (day, 0)).collect();

    for habit in habits {
        for date in in_window(habit, window) {
            if let Some(count) = per_day.get_mut(&date) {
                *count = count.saturating_add(1);
            }
        }
    }

    per_day
        .into_iter()
        .map(|(day, completions)| TrendPoint {
            date: date_key(day),
            label: short_label(day),
            completions,
        })
        .collect()
}

/// Completed vs. missed split, treating every habit as daily.
pub fn completion_pie(habits: &[Habit], window: &Window) -> PieChart {
    let completions: u64 = habits
        .iter()
        .map(|habit| in_window(habit, window).count() as u64)
        .sum();
    let possible = u64::from(window.number_of_days) * habits.len() as u64;
    let not_completed = possible.saturating_sub(completions);

    PieChart {
        completions,
        not_completed,
        possible,
        slices: vec![
            PieSlice {
                name: "Completed",
                value: completions,
            },
            PieSlice {
                name: "Not Completed",
                value: not_completed,
            },
        ],
    }
}
