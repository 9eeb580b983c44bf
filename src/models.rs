use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySample {
    pub day: String,
    pub calories: u32,
    pub water: u32,
    pub mood: u8,
}

impl DailySample {
    pub fn new(day: Weekday, calories: u32, water: u32, mood: u8) -> Self {
        Self {
            day: day.to_string(),
            calories,
            water,
            mood,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    pub name: String,
    pub calories: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FoodReferenceRow {
    pub name: &'static str,
    pub calories_per_100g: u32,
    pub serving_size: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MoodTrend {
    Improving,
    #[serde(rename = "Needs Attention")]
    NeedsAttention,
}

impl MoodTrend {
    pub fn label(self) -> &'static str {
        match self {
            Self::Improving => "Improving",
            Self::NeedsAttention => "Needs Attention",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyStats {
    pub avg_calories: i64,
    pub avg_water: f64,
    pub avg_mood: f64,
    pub calories_trend: f64,
    pub water_trend: f64,
    pub mood_trend: MoodTrend,
}

/// Snapshot sent as `healthContext` alongside every assistant message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    pub calories: u32,
    pub calorie_goal: u32,
    pub water_intake: u32,
    pub water_goal: u32,
    pub mood_rating: u8,
    pub weekly_stats: WeeklyStats,
    pub recent_meals: Vec<MealEntry>,
}

#[derive(Debug, Deserialize)]
pub struct MealRequest {
    pub name: String,
    pub calories: u32,
}

#[derive(Debug, Deserialize)]
pub struct WaterRequest {
    pub action: String,
}

#[derive(Debug, Deserialize)]
pub struct MoodRequest {
    pub rating: u8,
}

#[derive(Debug, Deserialize)]
pub struct GoalRequest {
    pub calorie_goal: u32,
}

#[derive(Debug, Deserialize)]
pub struct FoodQuery {
    #[serde(default)]
    pub q: String,
    pub portion: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FoodAddRequest {
    pub name: String,
    pub portion: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct FoodMatch {
    pub name: String,
    pub calories_per_100g: u32,
    pub serving_size: String,
    pub calories: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub week: Vec<DailySample>,
    pub stats: WeeklyStats,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub total_calories: u32,
    pub calorie_goal: u32,
    pub calorie_progress: f64,
    pub water_intake: u32,
    pub water_goal: u32,
    pub mood_rating: u8,
    pub meals: Vec<MealEntry>,
    pub week: Vec<DailySample>,
    pub stats: WeeklyStats,
}
