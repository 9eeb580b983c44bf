use crate::analysis::{analyze, HealthAnalysis};
use crate::dashboard::{DashboardError, WaterAction};
use crate::errors::AppError;
use crate::foods;
use crate::models::{
    ChatMessage, ChatRequest, DashboardResponse, FoodAddRequest, FoodMatch, FoodQuery,
    GoalRequest, MealRequest, MoodRequest, StatsResponse, WaterRequest,
};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{extract::Query, extract::State, response::Html, Json};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let dashboard = state.dashboard.lock().await;
    Html(render_index(&dashboard))
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.view())
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let dashboard = state.dashboard.lock().await;
    Json(StatsResponse {
        week: dashboard.week.clone(),
        stats: dashboard.weekly_stats(),
    })
}

pub async fn get_analysis(State(state): State<AppState>) -> Json<HealthAnalysis> {
    let dashboard = state.dashboard.lock().await;
    Json(analyze(&dashboard.snapshot()))
}

pub async fn get_messages(State(state): State<AppState>) -> Json<Vec<ChatMessage>> {
    let dashboard = state.dashboard.lock().await;
    Json(dashboard.messages.clone())
}

pub async fn add_meal(
    State(state): State<AppState>,
    Json(payload): Json<MealRequest>,
) -> Result<Json<DashboardResponse>, AppError> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.add_meal(&payload.name, payload.calories)?;
    info!(name = %payload.name.trim(), calories = payload.calories, "meal logged");
    Ok(Json(dashboard.view()))
}

pub async fn adjust_water(
    State(state): State<AppState>,
    Json(payload): Json<WaterRequest>,
) -> Result<Json<DashboardResponse>, AppError> {
    let action: WaterAction = payload.action.parse()?;
    let mut dashboard = state.dashboard.lock().await;
    dashboard.adjust_water(action);
    Ok(Json(dashboard.view()))
}

pub async fn set_mood(
    State(state): State<AppState>,
    Json(payload): Json<MoodRequest>,
) -> Result<Json<DashboardResponse>, AppError> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.set_mood(payload.rating)?;
    Ok(Json(dashboard.view()))
}

pub async fn set_goal(
    State(state): State<AppState>,
    Json(payload): Json<GoalRequest>,
) -> Result<Json<DashboardResponse>, AppError> {
    let mut dashboard = state.dashboard.lock().await;
    dashboard.set_calorie_goal(payload.calorie_goal)?;
    info!(goal = payload.calorie_goal, "calorie goal updated");
    Ok(Json(dashboard.view()))
}

pub async fn search_foods(Query(query): Query<FoodQuery>) -> Result<Json<Vec<FoodMatch>>, AppError> {
    let portion_text = query.portion.as_deref().unwrap_or("1");
    let portion = foods::parse_portion(portion_text).ok_or(DashboardError::InvalidPortion)?;
    Ok(Json(foods::calculate(&query.q, portion)))
}

pub async fn add_food(
    State(state): State<AppState>,
    Json(payload): Json<FoodAddRequest>,
) -> Result<Json<DashboardResponse>, AppError> {
    let portion_text = payload.portion.as_deref().unwrap_or("1");
    let mut dashboard = state.dashboard.lock().await;
    let entry = dashboard.add_food(&payload.name, portion_text)?;
    info!(name = %entry.name, calories = entry.calories, "food logged");
    Ok(Json(dashboard.view()))
}

pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatMessage>, AppError> {
    if payload.message.trim().is_empty() {
        return Err(DashboardError::EmptyMessage.into());
    }
    let Some(guard) = state.begin_chat() else {
        return Err(AppError::conflict("assistant is still answering"));
    };

    let snapshot = {
        let mut dashboard = state.dashboard.lock().await;
        dashboard.push_message(ChatMessage::user(payload.message.clone()));
        dashboard.snapshot()
    };

    // Detached so the reply is logged even if the client goes away mid-call.
    let task_state = state.clone();
    let task = tokio::spawn(async move {
        let _guard = guard;
        let text = task_state.assistant.reply(&payload.message, &snapshot).await;
        let reply = ChatMessage::assistant(text);
        task_state.dashboard.lock().await.push_message(reply.clone());
        reply
    });
    let reply = task.await.map_err(AppError::internal)?;

    Ok(Json(reply))
}
