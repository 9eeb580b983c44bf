use crate::foods;
use crate::models::{
    ChatMessage, DailySample, DashboardResponse, HealthSnapshot, MealEntry, WeeklyStats,
};
use crate::stats::build_weekly_stats;
use thiserror::Error;

pub const GREETING: &str = "Hello! I am your AI health assistant. How can I help you today?";

#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("meal name and calories are required")]
    IncompleteMeal,
    #[error("action must be 'add' or 'sub'")]
    UnknownWaterAction,
    #[error("mood rating must be between 1 and 5")]
    MoodOutOfRange,
    #[error("calorie goal must be positive")]
    InvalidGoal,
    #[error("portion must be a positive number")]
    InvalidPortion,
    #[error("unknown food: {0}")]
    UnknownFood(String),
    #[error("message must not be empty")]
    EmptyMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterAction {
    Add,
    Sub,
}

impl std::str::FromStr for WaterAction {
    type Err = DashboardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "add" => Ok(Self::Add),
            "sub" => Ok(Self::Sub),
            _ => Err(DashboardError::UnknownWaterAction),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub week: Vec<DailySample>,
    pub meals: Vec<MealEntry>,
    pub messages: Vec<ChatMessage>,
    pub water_intake: u32,
    pub water_goal: u32,
    pub mood_rating: u8,
    pub calorie_goal: u32,
}

impl Dashboard {
    pub fn new(week: Vec<DailySample>, calorie_goal: u32, water_goal: u32) -> Self {
        Self {
            week,
            meals: Vec::new(),
            messages: vec![ChatMessage::assistant(GREETING)],
            water_intake: 0,
            water_goal,
            mood_rating: 0,
            calorie_goal,
        }
    }

    pub fn total_calories(&self) -> u32 {
        self.meals
            .iter()
            .fold(0u32, |sum, meal| sum.saturating_add(meal.calories))
    }

    pub fn calorie_progress(&self) -> f64 {
        if self.calorie_goal == 0 {
            return 0.0;
        }
        f64::from(self.total_calories()) / f64::from(self.calorie_goal) * 100.0
    }

    pub fn weekly_stats(&self) -> WeeklyStats {
        build_weekly_stats(&self.week)
    }

    pub fn add_meal(&mut self, name: &str, calories: u32) -> Result<(), DashboardError> {
        let name = name.trim();
        if name.is_empty() || calories == 0 {
            return Err(DashboardError::IncompleteMeal);
        }

        self.meals.push(MealEntry {
            name: name.to_string(),
            calories,
        });
        if let Some(last) = self.week.last_mut() {
            last.calories = last.calories.saturating_add(calories);
        }
        Ok(())
    }

    /// Logs a food from the reference table. The weekly samples are left
    /// untouched, only manual meals feed the chart.
    pub fn add_food(&mut self, name: &str, portion_text: &str) -> Result<MealEntry, DashboardError> {
        let food = foods::find(name).ok_or_else(|| DashboardError::UnknownFood(name.to_string()))?;
        let portion = foods::parse_portion(portion_text).ok_or(DashboardError::InvalidPortion)?;

        let entry = MealEntry {
            name: foods::meal_label(food.name, portion_text.trim()),
            calories: foods::portion_calories(food, portion),
        };
        self.meals.push(entry.clone());
        Ok(entry)
    }

    pub fn adjust_water(&mut self, action: WaterAction) -> u32 {
        self.water_intake = match action {
            WaterAction::Add => (self.water_intake + 1).min(self.water_goal),
            WaterAction::Sub => self.water_intake.saturating_sub(1),
        };
        self.water_intake
    }

    pub fn set_mood(&mut self, rating: u8) -> Result<(), DashboardError> {
        if !(1..=5).contains(&rating) {
            return Err(DashboardError::MoodOutOfRange);
        }
        self.mood_rating = rating;
        Ok(())
    }

    pub fn set_calorie_goal(&mut self, goal: u32) -> Result<(), DashboardError> {
        if goal == 0 {
            return Err(DashboardError::InvalidGoal);
        }
        self.calorie_goal = goal;
        Ok(())
    }

    pub fn push_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn snapshot(&self) -> HealthSnapshot {
        HealthSnapshot {
            calories: self.total_calories(),
            calorie_goal: self.calorie_goal,
            water_intake: self.water_intake,
            water_goal: self.water_goal,
            mood_rating: self.mood_rating,
            weekly_stats: self.weekly_stats(),
            recent_meals: self.meals.clone(),
        }
    }

    pub fn view(&self) -> DashboardResponse {
        DashboardResponse {
            total_calories: self.total_calories(),
            calorie_goal: self.calorie_goal,
            calorie_progress: self.calorie_progress(),
            water_intake: self.water_intake,
            water_goal: self.water_goal,
            mood_rating: self.mood_rating,
            meals: self.meals.clone(),
            week: self.week.clone(),
            stats: self.weekly_stats(),
        }
    }
}
