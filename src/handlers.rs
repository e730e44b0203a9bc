use crate::achievements::build_achievements;
use crate::charts::build_charts;
use crate::errors::AppError;
use crate::habits;
use crate::models::{
    AchievementsResponse, AppData, ChartsResponse, Habit, HabitInput, HabitView, RangeQuery,
    StatisticsResponse, ThemeResponse,
};
use crate::state::AppState;
use crate::stats::build_statistics;
use crate::window::Window;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{Local, Utc};
use tracing::info;

pub async fn list_habits(State(state): State<AppState>) -> Json<Vec<HabitView>> {
    let data = state.data.lock().await;
    Json(habits::habit_views(&data.habits, Local::now().date_naive()))
}

pub async fn create_habit(
    State(state): State<AppState>,
    Json(input): Json<HabitInput>,
) -> Result<(StatusCode, Json<Habit>), AppError> {
    let mut data = state.data.lock().await;
    let mut next = data.clone();
    let habit = habits::add_habit(&mut next, input, Utc::now().timestamp_millis())?;
    commit(&state, &mut data, next, true).await?;

    info!(habit_id = habit.id, name = %habit.name, "created habit");
    Ok((StatusCode::CREATED, Json(habit)))
}

pub async fn update_habit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<HabitInput>,
) -> Result<Json<Habit>, AppError> {
    let mut data = state.data.lock().await;
    let mut next = data.clone();
    let habit = habits::update_habit(&mut next, id, input)?;
    commit(&state, &mut data, next, true).await?;

    info!(habit_id = id, "updated habit");
    Ok(Json(habit))
}

pub async fn delete_habit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    let mut next = data.clone();
    habits::delete_habit(&mut next, id)?;
    commit(&state, &mut data, next, true).await?;

    info!(habit_id = id, "deleted habit");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_habit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Habit>, AppError> {
    let mut data = state.data.lock().await;
    let mut next = data.clone();
    let habit = habits::toggle_today(&mut next, id, Local::now().date_naive())?;
    commit(&state, &mut data, next, false).await?;

    info!(habit_id = id, completed = habit.completed, "toggled habit");
    Ok(Json(habit))
}

pub async fn get_charts(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Json<ChartsResponse> {
    let window = Window::resolve(query.range.as_deref());
    let data = state.data.lock().await;
    Json(build_charts(&data.habits, &window))
}

pub async fn get_statistics(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Json<StatisticsResponse> {
    let window = Window::resolve(query.range.as_deref());
    let data = state.data.lock().await;
    Json(build_statistics(&data.habits, &window))
}

pub async fn get_achievements(State(state): State<AppState>) -> Json<AchievementsResponse> {
    let data = state.data.lock().await;
    Json(build_achievements(&data.habits))
}

pub async fn get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let data = state.data.lock().await;
    Json(ThemeResponse {
        dark_mode: data.dark_mode,
    })
}

pub async fn toggle_theme(State(state): State<AppState>) -> Result<Json<ThemeResponse>, AppError> {
    let mut data = state.data.lock().await;
    let next = AppData {
        dark_mode: !data.dark_mode,
        ..data.clone()
    };
    commit(&state, &mut data, next, false).await?;

    Ok(Json(ThemeResponse {
        dark_mode: data.dark_mode,
    }))
}

/// Persists `next` and only then installs it as the live state, so a failed
/// write leaves memory matching the file. Re-arms reminders when the habit
/// list changed in a way that can affect them.
async fn commit(
    state: &AppState,
    data: &mut AppData,
    next: AppData,
    reminders_changed: bool,
) -> Result<(), AppError> {
    state.store.save(&next).await?;
    *data = next;
    if reminders_changed {
        state.reminders.reschedule(&data.habits);
    }
    Ok(())
}
