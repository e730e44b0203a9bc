use crate::charts::in_window;
use crate::models::{Bucket, Correlation, Habit, StatisticsResponse, SuccessRate};
use crate::window::{Window, parse_day};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub fn build_statistics(habits: &[Habit], window: &Window) -> StatisticsResponse {
    StatisticsResponse {
        window: window.summary(),
        success_rates: success_rates(habits, window),
        weekdays: weekday_histogram(habits),
        hours: reminder_hour_histogram(habits),
        correlations: correlations(habits),
    }
}

pub fn success_rates(habits: &[Habit], window: &Window) -> Vec<SuccessRate> {
    habits
        .iter()
        .map(|habit| {
            let completions = in_window(habit, window).count() as u32;
            SuccessRate {
                id: habit.id,
                name: habit.name.clone(),
                success_rate: percent_one_decimal(completions, window.number_of_days),
                completions,
            }
        })
        .collect()
}

fn percent_one_decimal(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let rate = f64::from(part) / f64::from(whole) * 100.0;
    (rate * 10.0).round() / 10.0
}

/// Completions across every habit, bucketed Sunday through Saturday.
pub fn weekday_histogram(habits: &[Habit]) -> Vec<Bucket> {
    let mut counts = [0u32; 7];
    for date in habits
        .iter()
        .flat_map(|habit| habit.completion_dates.iter())
        .filter_map(|raw| parse_day(raw))
    {
        let slot = date.weekday().num_days_from_sunday() as usize;
        counts[slot] = counts[slot].saturating_add(1);
    }

    WEEKDAY_NAMES
        .iter()
        .zip(counts)
        .map(|(name, completions)| Bucket {
            name: name.to_string(),
            completions,
        })
        .collect()
}

/// Hour component of an `HH:MM` reminder, if it names a real hour.
pub fn reminder_hour(reminder: &str) -> Option<u32> {
    let (hour, _) = reminder.trim().split_once(':')?;
    hour.parse::<u32>().ok().filter(|hour| *hour < 24)
}

/// Habits (not completions) grouped by the hour their reminder fires.
pub fn reminder_hour_histogram(habits: &[Habit]) -> Vec<Bucket> {
    let mut counts = [0u32; 24];
    for hour in habits
        .iter()
        .filter_map(|habit| habit.reminder_time.as_deref())
        .filter_map(reminder_hour)
    {
        counts[hour as usize] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(hour, completions)| Bucket {
            name: format!("{hour}:00"),
            completions: *completions,
        })
        .collect()
}

/// Overlap of completion days for every unordered pair of habits, scaled to
/// 0-100. A pair where either side has no completions scores 0.
pub fn correlations(habits: &[Habit]) -> Vec<Correlation> {
    let day_sets: Vec<BTreeSet<NaiveDate>> = habits
        .iter()
        .map(|habit| {
            habit
                .completion_dates
                .iter()
                .filter_map(|raw| parse_day(raw))
                .collect()
        })
        .collect();

    let mut pairs = Vec::new();
    for i in 0..habits.len() {
        for j in (i + 1)..habits.len() {
            pairs.push(Correlation {
                x: habits[i].name.clone(),
                y: habits[j].name.clone(),
                correlation: overlap_score(&day_sets[i], &day_sets[j]),
            });
        }
    }
    pairs
}

fn overlap_score(a: &BTreeSet<NaiveDate>, b: &BTreeSet<NaiveDate>) -> u32 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let common = a.intersection(b).count() as f64;
    let denom = ((a.len() * b.len()) as f64).sqrt();
    (common / denom * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::TimeRange;
    use chrono::Duration;

    fn today() -> NaiveDate {
        // A Monday.
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    fn habit(id: i64, name: &str, offsets: &[i64]) -> Habit {
        let mut habit = Habit::new(id, name);
        habit.completion_dates = offsets
            .iter()
            .map(|offset| (today() - Duration::days(*offset)).to_string())
            .collect();
        habit
    }

    #[test]
    fn success_rate_rounds_to_one_decimal() {
        let window = Window::resolve_at(today(), TimeRange::ThirtyDays);
        let rates = success_rates(&[habit(1, "Read", &[0, 1, 2, 45])], &window);
        assert_eq!(rates[0].completions, 3);
        assert_eq!(rates[0].success_rate, 10.0);

        let week = Window::resolve_at(today(), TimeRange::SevenDays);
        let rates = success_rates(&[habit(1, "Read", &[0])], &week);
        assert_eq!(rates[0].success_rate, 14.3);
    }

    #[test]
    fn percent_guards_empty_window() {
        assert_eq!(percent_one_decimal(3, 0), 0.0);
    }

    #[test]
    fn weekday_histogram_starts_on_sunday() {
        // today is Monday, one day back is Sunday.
        let habits = vec![habit(1, "Read", &[0, 1, 7]), habit(2, "Run", &[1])];
        let mut broken = Habit::new(3, "Broken");
        broken.completion_dates.push("someday".to_string());

        let mut all = habits;
        all.push(broken);
        let days = weekday_histogram(&all);

        assert_eq!(days.len(), 7);
        assert_eq!(days[0].name, "Sunday");
        assert_eq!(days[0].completions, 2);
        assert_eq!(days[1].name, "Monday");
        assert_eq!(days[1].completions, 2);
        assert_eq!(days.iter().map(|day| day.completions).sum::<u32>(), 4);
    }

    #[test]
    fn reminder_hours_bucket_habits() {
        let mut morning = Habit::new(1, "Stretch");
        morning.reminder_time = Some("07:30".to_string());
        let mut also_morning = Habit::new(2, "Water");
        also_morning.reminder_time = Some("7:05".to_string());
        let mut night = Habit::new(3, "Journal");
        night.reminder_time = Some("22:00".to_string());
        let mut invalid = Habit::new(4, "Bogus");
        invalid.reminder_time = Some("25:00".to_string());
        let none = Habit::new(5, "Nothing");

        let hours = reminder_hour_histogram(&[morning, also_morning, night, invalid, none]);
        assert_eq!(hours.len(), 24);
        assert_eq!(hours[7].name, "7:00");
        assert_eq!(hours[7].completions, 2);
        assert_eq!(hours[22].completions, 1);
        assert_eq!(hours.iter().map(|h| h.completions).sum::<u32>(), 3);
    }

    #[test]
    fn reminder_hour_parses_prefix() {
        assert_eq!(reminder_hour("00:15"), Some(0));
        assert_eq!(reminder_hour("23:59"), Some(23));
        assert_eq!(reminder_hour("24:00"), None);
        assert_eq!(reminder_hour("noon"), None);
    }

    #[test]
    fn correlation_covers_each_pair_once() {
        let habits = vec![
            habit(1, "A", &[0, 1, 2, 3]),
            habit(2, "B", &[0, 1, 2, 3]),
            habit(3, "C", &[0]),
            habit(4, "D", &[]),
        ];
        let pairs = correlations(&habits);
        assert_eq!(pairs.len(), 6);

        let score = |x: &str, y: &str| {
            pairs
                .iter()
                .find(|pair| pair.x == x && pair.y == y)
                .map(|pair| pair.correlation)
                .unwrap()
        };
        assert_eq!(score("A", "B"), 100);
        assert_eq!(score("A", "C"), 50);
        assert_eq!(score("A", "D"), 0);
        assert_eq!(score("C", "D"), 0);
    }

    #[test]
    fn correlation_ignores_duplicate_entries() {
        let habits = vec![habit(1, "A", &[0, 0, 1]), habit(2, "B", &[0, 1])];
        assert_eq!(correlations(&habits)[0].correlation, 100);
    }
}
