use crate::models::{DailySample, MoodTrend, WeeklyStats};
use chrono::Weekday;
use rand::Rng;

pub const DAYS_PER_WEEK: usize = 7;
pub const CALORIE_BASELINE: f64 = 1800.0;
pub const WATER_BASELINE: f64 = 6.0;
pub const MOOD_TREND_THRESHOLD: f64 = 3.5;

const WEEK: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Unrounded per-day means over one week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeeklyAverages {
    pub calories: f64,
    pub water: f64,
    pub mood: f64,
}

pub fn seed_week() -> Vec<DailySample> {
    seed_week_with(&mut rand::thread_rng())
}

pub fn seed_week_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<DailySample> {
    WEEK.iter()
        .map(|&day| {
            DailySample::new(
                day,
                rng.gen_range(1500..2000),
                rng.gen_range(4..8),
                rng.gen_range(3..5),
            )
        })
        .collect()
}

pub fn weekly_averages(week: &[DailySample]) -> WeeklyAverages {
    let denom = DAYS_PER_WEEK as f64;
    let calories: u64 = week.iter().map(|day| u64::from(day.calories)).sum();
    let water: u64 = week.iter().map(|day| u64::from(day.water)).sum();
    let mood: u64 = week.iter().map(|day| u64::from(day.mood)).sum();

    WeeklyAverages {
        calories: calories as f64 / denom,
        water: water as f64 / denom,
        mood: mood as f64 / denom,
    }
}

pub fn build_weekly_stats(week: &[DailySample]) -> WeeklyStats {
    let avg = weekly_averages(week);

    WeeklyStats {
        avg_calories: avg.calories.round() as i64,
        avg_water: round_tenth(avg.water),
        avg_mood: round_tenth(avg.mood),
        calories_trend: round_tenth(percent_change(avg.calories, CALORIE_BASELINE)),
        water_trend: round_tenth(percent_change(avg.water, WATER_BASELINE)),
        mood_trend: mood_trend(avg.mood),
    }
}

pub fn mood_trend(avg_mood: f64) -> MoodTrend {
    if avg_mood > MOOD_TREND_THRESHOLD {
        MoodTrend::Improving
    } else {
        MoodTrend::NeedsAttention
    }
}

fn percent_change(value: f64, baseline: f64) -> f64 {
    (value - baseline) / baseline * 100.0
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
