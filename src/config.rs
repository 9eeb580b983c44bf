use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ASSISTANT_URL: &str = "http://localhost:5000/api/chat";
pub const DEFAULT_CALORIE_GOAL: u32 = 2000;
pub const DEFAULT_WATER_GOAL: u32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub assistant_url: String,
    pub calorie_goal: u32,
    pub water_goal: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            assistant_url: DEFAULT_ASSISTANT_URL.to_string(),
            calorie_goal: DEFAULT_CALORIE_GOAL,
            water_goal: DEFAULT_WATER_GOAL,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: parsed::<u16>(&lookup, "PORT").unwrap_or(defaults.port),
            assistant_url: lookup("ASSISTANT_URL")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.assistant_url),
            calorie_goal: parsed::<u32>(&lookup, "CALORIE_GOAL")
                .filter(|goal| *goal > 0)
                .unwrap_or(defaults.calorie_goal),
            water_goal: parsed::<u32>(&lookup, "WATER_GOAL")
                .filter(|goal| *goal > 0)
                .unwrap_or(defaults.water_goal),
        }
    }
}

fn parsed<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|value| value.trim().parse::<T>().ok())
}
