use crate::models::{FoodMatch, FoodReferenceRow};
use once_cell::sync::Lazy;
use regex::Regex;

static FIRST_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("static serving-size pattern"));

const fn row(
    name: &'static str,
    calories_per_100g: u32,
    serving_size: &'static str,
) -> FoodReferenceRow {
    FoodReferenceRow {
        name,
        calories_per_100g,
        serving_size,
    }
}

pub static FOODS: [FoodReferenceRow; 40] = [
    row("Dal (Yellow)", 116, "1 katori (150g)"),
    row("Chapati", 264, "1 piece (30g)"),
    row("Steamed Rice", 130, "1 katori (150g)"),
    row("Palak Paneer", 180, "1 katori (200g)"),
    row("Chicken Curry", 190, "1 katori (200g)"),
    row("Samosa", 262, "1 piece (50g)"),
    row("Butter Chicken", 280, "1 serving (200g)"),
    row("Rajma", 140, "1 katori (150g)"),
    row("Chana Masala", 160, "1 katori (150g)"),
    row("Aloo Gobi", 120, "1 katori (150g)"),
    row("Bhindi Masala", 108, "1 katori (150g)"),
    row("Tandoori Roti", 297, "1 piece (40g)"),
    row("Vegetable Biryani", 185, "1 plate (250g)"),
    row("Paneer Butter Masala", 233, "1 katori (200g)"),
    row("Malai Kofta", 222, "2 pieces with gravy (175g)"),
    row("Mixed Vegetable Curry", 112, "1 katori (150g)"),
    row("Egg Curry", 160, "1 katori (200g)"),
    row("Jeera Rice", 138, "1 katori (150g)"),
    row("Masoor Dal", 119, "1 katori (150g)"),
    row("Chicken Tandoori", 198, "2 pieces (200g)"),
    row("Paratha", 320, "1 piece (60g)"),
    row("Fish Curry", 160, "1 katori (200g)"),
    row("Mutton Curry", 223, "1 katori (200g)"),
    row("Vegetable Pakora", 290, "4 pieces (80g)"),
    row("Idli", 146, "2 pieces (80g)"),
    row("Dosa Plain", 184, "1 piece (80g)"),
    row("Masala Dosa", 188, "1 piece (120g)"),
    row("Upma", 150, "1 katori (200g)"),
    row("Poha", 140, "1 katori (150g)"),
    row("Sambhar", 76, "1 katori (150g)"),
    row("Chicken Biryani", 195, "1 plate (250g)"),
    row("Naan", 312, "1 piece (80g)"),
    row("Butter Naan", 350, "1 piece (85g)"),
    row("Chicken Korma", 210, "1 katori (200g)"),
    row("Paneer Tikka", 265, "6 pieces (150g)"),
    row("Dal Makhani", 176, "1 katori (150g)"),
    row("Pav Bhaji", 184, "1 serving (250g)"),
    row("Vada Pav", 289, "1 piece (120g)"),
    row("Khichdi", 128, "1 katori (200g)"),
    row("Chole Bhature", 360, "2 bhature with chole (300g)"),
];

/// First integer in the serving-size text. For "2 pieces (80g)" that is the
/// piece count, not the grams; the calculator uses it as-is.
pub fn serving_grams(serving_size: &str) -> Option<u32> {
    FIRST_INTEGER
        .find(serving_size)
        .and_then(|m| m.as_str().parse().ok())
}

pub fn portion_calories(food: &FoodReferenceRow, portion: f64) -> u32 {
    let grams = serving_grams(food.serving_size).unwrap_or(0);
    let calories = f64::from(food.calories_per_100g) * f64::from(grams) / 100.0 * portion;
    calories.round() as u32
}

pub fn search(query: &str) -> Vec<&'static FoodReferenceRow> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    FOODS
        .iter()
        .filter(|food| food.name.to_lowercase().contains(&needle))
        .collect()
}

pub fn find(name: &str) -> Option<&'static FoodReferenceRow> {
    FOODS.iter().find(|food| food.name == name)
}

pub fn calculate(query: &str, portion: f64) -> Vec<FoodMatch> {
    search(query)
        .into_iter()
        .map(|food| FoodMatch {
            name: food.name.to_string(),
            calories_per_100g: food.calories_per_100g,
            serving_size: food.serving_size.to_string(),
            calories: portion_calories(food, portion),
        })
        .collect()
}

/// Parses the free-text portion field. Only finite, positive numbers are
/// accepted.
pub fn parse_portion(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
}

pub fn meal_label(food_name: &str, portion_text: &str) -> String {
    let unit = if portion_text == "1" { "serving" } else { "servings" };
    format!("{food_name} ({portion_text} {unit})")
}
