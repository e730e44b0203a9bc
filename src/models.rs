use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "#4CAF50";
pub const DEFAULT_EMOJI: &str = "🎯";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl From<String> for Difficulty {
    fn from(value: String) -> Self {
        match value.trim() {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Medium,
        }
    }
}

impl From<Difficulty> for String {
    fn from(value: Difficulty) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

impl From<String> for Frequency {
    fn from(value: String) -> Self {
        match value.trim() {
            "weekly" => Self::Weekly,
            "monthly" => Self::Monthly,
            _ => Self::Daily,
        }
    }
}

impl From<Frequency> for String {
    fn from(value: Frequency) -> Self {
        value.as_str().to_string()
    }
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_emoji() -> String {
    DEFAULT_EMOJI.to_string()
}

/// A user-defined habit as persisted in the store.
///
/// Field names serialize in camelCase so habit lists exported from browser
/// storage load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub goal: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_emoji")]
    pub emoji: String,
    #[serde(default)]
    pub reminder_time: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub completion_dates: Vec<String>,
}

impl Habit {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            category: String::new(),
            difficulty: Difficulty::default(),
            frequency: Frequency::default(),
            goal: String::new(),
            color: default_color(),
            emoji: default_emoji(),
            reminder_time: None,
            completed: false,
            completion_dates: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppData {
    pub habits: Vec<Habit>,
    pub dark_mode: bool,
}

/// Attributes accepted when creating or editing a habit. Absent fields keep
/// their current (or default) value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub frequency: Option<Frequency>,
    pub goal: Option<String>,
    pub color: Option<String>,
    pub emoji: Option<String>,
    pub reminder_time: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RangeQuery {
    pub range: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitView {
    #[serde(flatten)]
    pub habit: Habit,
    pub streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeResponse {
    pub dark_mode: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WindowSummary {
    pub range: String,
    pub label: String,
    pub start_date: String,
    pub end_date: String,
    pub number_of_days: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapRow {
    pub habit_id: i64,
    pub name: String,
    pub values: Vec<u8>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heatmap {
    pub dates: Vec<String>,
    pub labels: Vec<String>,
    pub rows: Vec<HeatmapRow>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HabitCompletions {
    pub id: i64,
    pub name: String,
    pub completions: u32,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: String,
    pub label: String,
    pub completions: u32,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PieSlice {
    pub name: &'static str,
    pub value: u64,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PieChart {
    pub completions: u64,
    pub not_completed: u64,
    pub possible: u64,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartsResponse {
    pub window: WindowSummary,
    pub heatmap: Heatmap,
    pub completions: Vec<HabitCompletions>,
    pub trend: Vec<TrendPoint>,
    pub pie: PieChart,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRate {
    pub id: i64,
    pub name: String,
    pub success_rate: f64,
    pub completions: u32,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Bucket {
    pub name: String,
    pub completions: u32,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Correlation {
    pub x: String,
    pub y: String,
    pub correlation: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    pub window: WindowSummary,
    pub success_rates: Vec<SuccessRate>,
    pub weekdays: Vec<Bucket>,
    pub hours: Vec<Bucket>,
    pub correlations: Vec<Correlation>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BadgeProgress {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub requirement: u32,
    pub progress: u32,
    pub earned: bool,
    pub percent: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementsResponse {
    pub streak_badges: Vec<BadgeProgress>,
    pub completion_badges: Vec<BadgeProgress>,
    pub habit_badges: Vec<BadgeProgress>,
}
