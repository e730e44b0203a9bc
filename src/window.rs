use crate::models::WindowSummary;
use chrono::{Datelike, Duration, Local, Months, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    SevenDays,
    #[default]
    ThirtyDays,
    OneYear,
}

impl TimeRange {
    /// Unknown or missing selectors resolve to the 30-day range.
    pub fn parse(selector: Option<&str>) -> Self {
        match selector.map(str::trim) {
            Some("7days") => Self::SevenDays,
            Some("oneyear") => Self::OneYear,
            _ => Self::ThirtyDays,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SevenDays => "7days",
            Self::ThirtyDays => "30days",
            Self::OneYear => "oneyear",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SevenDays => "Last 7 Days",
            Self::ThirtyDays => "Last 30 Days",
            Self::OneYear => "Last Year",
        }
    }
}

/// Concrete inclusive date range backing every chart projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub range: TimeRange,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_days: u32,
}

impl Window {
    pub fn resolve(selector: Option<&str>) -> Self {
        Self::resolve_at(Local::now().date_naive(), TimeRange::parse(selector))
    }

    pub fn resolve_at(today: NaiveDate, range: TimeRange) -> Self {
        let start_date = match range {
            TimeRange::SevenDays => today - Duration::days(6),
            TimeRange::ThirtyDays => today - Duration::days(29),
            TimeRange::OneYear => year_before(today),
        };
        let number_of_days = (today - start_date).num_days() as u32 + 1;

        Self {
            range,
            start_date,
            end_date: today,
            number_of_days,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Every day of the window, oldest first.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.number_of_days).map(move |offset| self.start_date + Duration::days(offset as i64))
    }

    /// Zero-based position of `date` inside the window.
    pub fn offset_of(&self, date: NaiveDate) -> Option<usize> {
        self.contains(date)
            .then(|| (date - self.start_date).num_days() as usize)
    }

    pub fn summary(&self) -> WindowSummary {
        WindowSummary {
            range: self.range.as_str().to_string(),
            label: self.range.label().to_string(),
            start_date: date_key(self.start_date),
            end_date: date_key(self.end_date),
            number_of_days: self.number_of_days,
        }
    }
}

/// Same calendar day one year earlier. Feb 29 has no counterpart and rolls
/// over to Mar 1 rather than clamping to Feb 28.
fn year_before(today: NaiveDate) -> NaiveDate {
    if today.month() == 2 && today.day() == 29 {
        if let Some(march_first) = NaiveDate::from_ymd_opt(today.year() - 1, 3, 1) {
            return march_first;
        }
    }
    today
        .checked_sub_months(Months::new(12))
        .unwrap_or(today - Duration::days(365))
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn short_label(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

/// Parses a stored completion entry. Anything other than `YYYY-MM-DD` yields
/// `None` and contributes nothing downstream.
pub fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seven_days_spans_a_week() {
        let today = day(2026, 1, 5);
        let window = Window::resolve_at(today, TimeRange::SevenDays);
        assert_eq!(window.start_date, day(2025, 12, 30));
        assert_eq!(window.end_date, today);
        assert_eq!(window.number_of_days, 7);
        assert_eq!(window.days().count(), 7);
    }

    #[test]
    fn thirty_days_is_the_fallback() {
        let today = day(2026, 3, 15);
        let thirty = Window::resolve_at(today, TimeRange::parse(Some("30days")));
        let bogus = Window::resolve_at(today, TimeRange::parse(Some("bogus")));
        let missing = Window::resolve_at(today, TimeRange::parse(None));
        assert_eq!(thirty, bogus);
        assert_eq!(thirty, missing);
        assert_eq!(thirty.number_of_days, 30);
        assert_eq!(thirty.start_date, day(2026, 2, 14));
        assert_eq!(thirty.days().count(), 30);
    }

    #[test]
    fn one_year_counts_inclusive_days() {
        let plain = Window::resolve_at(day(2026, 6, 1), TimeRange::OneYear);
        assert_eq!(plain.start_date, day(2025, 6, 1));
        assert_eq!(plain.number_of_days, 366);

        let leap = Window::resolve_at(day(2024, 6, 1), TimeRange::OneYear);
        assert_eq!(leap.start_date, day(2023, 6, 1));
        assert_eq!(leap.number_of_days, 367);

        let leap_day = Window::resolve_at(day(2024, 2, 29), TimeRange::OneYear);
        assert_eq!(leap_day.start_date, day(2023, 3, 1));
        assert_eq!(leap_day.number_of_days, 366);
        assert_eq!(leap_day.days().count() as u32, leap_day.number_of_days);
    }

    #[test]
    fn one_year_after_leap_day_uses_march_first() {
        let day_after = Window::resolve_at(day(2024, 3, 1), TimeRange::OneYear);
        assert_eq!(day_after.start_date, day(2023, 3, 1));
        assert_eq!(day_after.number_of_days, 367);

        let into_leap_year = Window::resolve_at(day(2025, 2, 28), TimeRange::OneYear);
        assert_eq!(into_leap_year.start_date, day(2024, 2, 28));
        assert_eq!(into_leap_year.number_of_days, 367);
    }

    #[test]
    fn offsets_follow_window_days() {
        let window = Window::resolve_at(day(2026, 1, 5), TimeRange::SevenDays);
        assert_eq!(window.offset_of(day(2025, 12, 30)), Some(0));
        assert_eq!(window.offset_of(day(2026, 1, 5)), Some(6));
        assert_eq!(window.offset_of(day(2026, 1, 6)), None);
        assert_eq!(window.offset_of(day(2025, 12, 29)), None);
    }

    #[test]
    fn parse_day_rejects_malformed_entries() {
        assert_eq!(parse_day("2026-01-05"), Some(day(2026, 1, 5)));
        assert_eq!(parse_day("2026-1-5"), None);
        assert_eq!(parse_day("2026-02-30"), None);
        assert_eq!(parse_day("yesterday"), None);
        assert_eq!(parse_day(""), None);
    }

    #[test]
    fn summary_uses_iso_dates() {
        let window = Window::resolve_at(day(2026, 1, 5), TimeRange::SevenDays);
        let summary = window.summary();
        assert_eq!(summary.range, "7days");
        assert_eq!(summary.label, "Last 7 Days");
        assert_eq!(summary.start_date, "2025-12-30");
        assert_eq!(summary.end_date, "2026-01-05");
        assert_eq!(summary.number_of_days, 7);
    }
}
