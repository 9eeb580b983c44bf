use crate::models::HealthSnapshot;
use serde::{Deserialize, Serialize};

pub const WATER_ATTENTION_BELOW: u32 = 15;
pub const POSITIVE_MOOD_FROM: u8 = 4;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    OnTrack,
    Exceeding,
    Positive,
    NeedsAttention,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalOverview {
    pub current: u32,
    pub goal: u32,
    pub status: Status,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodOverview {
    pub rating: u8,
    pub status: Status,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Overview {
    pub calories: GoalOverview,
    pub mood: MoodOverview,
    pub water: GoalOverview,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub category: String,
    pub advice: String,
    pub priority: Priority,
    pub tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthAnalysis {
    pub overview: Overview,
    pub recommendations: Vec<Recommendation>,
}

pub fn analyze(snapshot: &HealthSnapshot) -> HealthAnalysis {
    let calories = GoalOverview {
        current: snapshot.calories,
        goal: snapshot.calorie_goal,
        status: if snapshot.calories <= snapshot.calorie_goal {
            Status::OnTrack
        } else {
            Status::Exceeding
        },
    };
    let mood = MoodOverview {
        rating: snapshot.mood_rating,
        status: if snapshot.mood_rating >= POSITIVE_MOOD_FROM {
            Status::Positive
        } else {
            Status::NeedsAttention
        },
    };
    let water = GoalOverview {
        current: snapshot.water_intake,
        goal: snapshot.water_goal,
        status: if snapshot.water_intake < WATER_ATTENTION_BELOW {
            Status::NeedsAttention
        } else {
            Status::OnTrack
        },
    };

    let mut recommendations = Vec::new();
    if water.status == Status::NeedsAttention {
        recommendations.push(Recommendation {
            category: "hydration".to_string(),
            advice: "Increase water intake to 8 glasses per day".to_string(),
            priority: Priority::High,
            tips: vec![
                "Set hourly reminders".to_string(),
                "Keep a water bottle nearby".to_string(),
            ],
        });
    }
    if calories.status == Status::Exceeding {
        recommendations.push(Recommendation {
            category: "nutrition".to_string(),
            advice: format!(
                "Consider reducing calorie intake. Currently {} vs goal {}",
                calories.current, calories.goal
            ),
            priority: Priority::Medium,
            tips: vec![
                "Track portion sizes".to_string(),
                "Choose nutrient-dense foods".to_string(),
            ],
        });
    }

    HealthAnalysis {
        overview: Overview {
            calories,
            mood,
            water,
        },
        recommendations,
    }
}
