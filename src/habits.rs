use crate::errors::AppError;
use crate::models::{AppData, Habit, HabitInput, HabitView};
use crate::streak::{current_streak_at, longest_streak};
use crate::window::date_key;
use chrono::NaiveDate;

/// Adds a habit built from `input`. Ids derive from the creation timestamp
/// but always stay above every existing id.
pub fn add_habit(data: &mut AppData, input: HabitInput, now_millis: i64) -> Result<Habit, AppError> {
    let name = required_name(input.name.as_deref())?;
    let last_id = data.habits.iter().map(|habit| habit.id).max().unwrap_or(0);
    let id = now_millis.max(last_id.saturating_add(1));

    let mut habit = Habit::new(id, name);
    apply_input(&mut habit, input);
    data.habits.push(habit.clone());
    Ok(habit)
}

/// Merges the provided attributes into an existing habit. Id and completion
/// history are never touched.
pub fn update_habit(data: &mut AppData, id: i64, input: HabitInput) -> Result<Habit, AppError> {
    if input.name.is_some() {
        required_name(input.name.as_deref())?;
    }
    let habit = find_mut(data, id)?;
    if let Some(name) = input.name.as_deref() {
        habit.name = name.trim().to_string();
    }
    apply_input(habit, input);
    Ok(habit.clone())
}

pub fn delete_habit(data: &mut AppData, id: i64) -> Result<Habit, AppError> {
    let index = data
        .habits
        .iter()
        .position(|habit| habit.id == id)
        .ok_or_else(|| not_found(id))?;
    Ok(data.habits.remove(index))
}

/// Flips today's completion: adds today when absent, removes it when present.
pub fn toggle_today(data: &mut AppData, id: i64, today: NaiveDate) -> Result<Habit, AppError> {
    let key = date_key(today);
    let habit = find_mut(data, id)?;

    if habit.completion_dates.contains(&key) {
        habit.completion_dates.retain(|date| *date != key);
        habit.completed = false;
    } else {
        habit.completion_dates.push(key);
        habit.completed = true;
    }
    Ok(habit.clone())
}

pub fn habit_views(habits: &[Habit], today: NaiveDate) -> Vec<HabitView> {
    habits
        .iter()
        .map(|habit| HabitView {
            streak: current_streak_at(today, &habit.completion_dates),
            longest_streak: longest_streak(&habit.completion_dates),
            habit: habit.clone(),
        })
        .collect()
}

fn find_mut(data: &mut AppData, id: i64) -> Result<&mut Habit, AppError> {
    data.habits
        .iter_mut()
        .find(|habit| habit.id == id)
        .ok_or_else(|| not_found(id))
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("habit {id} not found"))
}

fn required_name(name: Option<&str>) -> Result<String, AppError> {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(AppError::bad_request("name must not be empty")),
    }
}

fn apply_input(habit: &mut Habit, input: HabitInput) {
    let HabitInput {
        name: _,
        description,
        category,
        difficulty,
        frequency,
        goal,
        color,
        emoji,
        reminder_time,
    } = input;

    if let Some(description) = description {
        habit.description = description;
    }
    if let Some(category) = category {
        habit.category = category;
    }
    if let Some(difficulty) = difficulty {
        habit.difficulty = difficulty;
    }
    if let Some(frequency) = frequency {
        habit.frequency = frequency;
    }
    if let Some(goal) = goal {
        habit.goal = goal;
    }
    if let Some(color) = color {
        habit.color = color;
    }
    if let Some(emoji) = emoji {
        habit.emoji = emoji;
    }
    if let Some(reminder_time) = reminder_time {
        let reminder_time = reminder_time.trim();
        habit.reminder_time = (!reminder_time.is_empty()).then(|| reminder_time.to_string());
    }
}
