use crate::models::{AchievementsResponse, BadgeProgress, Habit};
use crate::streak::current_streak_at;
use chrono::{Local, NaiveDate};

#[derive(Debug, Clone, Copy)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub requirement: u32,
}

pub const STREAK_BADGES: [Badge; 3] = [
    Badge {
        id: "streak-7",
        name: "7 Day Streak",
        emoji: "🔥",
        requirement: 7,
    },
    Badge {
        id: "streak-30",
        name: "30 Day Streak",
        emoji: "🌟",
        requirement: 30,
    },
    Badge {
        id: "streak-100",
        name: "100 Day Streak",
        emoji: "💫",
        requirement: 100,
    },
];

pub const COMPLETION_BADGES: [Badge; 3] = [
    Badge {
        id: "completion-10",
        name: "10 Completions",
        emoji: "🎯",
        requirement: 10,
    },
    Badge {
        id: "completion-50",
        name: "50 Completions",
        emoji: "🎪",
        requirement: 50,
    },
    Badge {
        id: "completion-100",
        name: "100 Completions",
        emoji: "🏆",
        requirement: 100,
    },
];

pub const HABIT_BADGES: [Badge; 3] = [
    Badge {
        id: "habits-3",
        name: "3 Active Habits",
        emoji: "🌱",
        requirement: 3,
    },
    Badge {
        id: "habits-5",
        name: "5 Active Habits",
        emoji: "🌿",
        requirement: 5,
    },
    Badge {
        id: "habits-10",
        name: "Habit Master",
        emoji: "🌳",
        requirement: 10,
    },
];

pub fn build_achievements(habits: &[Habit]) -> AchievementsResponse {
    build_achievements_at(Local::now().date_naive(), habits)
}

/// Streak and completion badges track the best single habit; habit badges
/// track how many habits exist.
pub fn build_achievements_at(today: NaiveDate, habits: &[Habit]) -> AchievementsResponse {
    let best_streak = habits
        .iter()
        .map(|habit| current_streak_at(today, &habit.completion_dates))
        .max()
        .unwrap_or(0);
    let most_completions = habits
        .iter()
        .map(|habit| habit.completion_dates.len() as u32)
        .max()
        .unwrap_or(0);
    let habit_count = habits.len() as u32;

    AchievementsResponse {
        streak_badges: evaluate(&STREAK_BADGES, best_streak),
        completion_badges: evaluate(&COMPLETION_BADGES, most_completions),
        habit_badges: evaluate(&HABIT_BADGES, habit_count),
    }
}

fn evaluate(badges: &[Badge], progress: u32) -> Vec<BadgeProgress> {
    badges
        .iter()
        .map(|badge| {
            let ratio = f64::from(progress) / f64::from(badge.requirement) * 100.0;
            BadgeProgress {
                id: badge.id,
                name: badge.name,
                emoji: badge.emoji,
                requirement: badge.requirement,
                progress,
                earned: progress >= badge.requirement,
                percent: ratio.min(100.0),
            }
        })
        .collect()
}
