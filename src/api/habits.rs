//! Habit CRUD and the AI suggestion endpoints.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

const HABITS_URL: &str = "/api/habits";
const AI_RECOMMENDATIONS_URL: &str = "/api/habits/ai/recommendations";
const AI_ANALYSIS_URL: &str = "/api/habits/ai/analysis";
const AI_MOTIVATION_URL: &str = "/api/habits/ai/motivation";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HabitType {
    /// A habit to build.
    Positive,
    /// A habit to break.
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HabitFrequency {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Habit {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub habit_type: HabitType,
    pub frequency: HabitFrequency,
    #[serde(default)]
    pub goal: String,
    #[serde(default)]
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct NewHabit {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub habit_type: HabitType,
    pub frequency: HabitFrequency,
    pub goal: String,
}

/// A habit the AI suggests adding; convertible into a `NewHabit` as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct HabitRecommendation {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default = "default_habit_type")]
    pub habit_type: HabitType,
}

fn default_habit_type() -> HabitType {
    HabitType::Positive
}

#[derive(Debug, Deserialize)]
pub struct AiText {
    pub message: String,
}

impl ApiClient {
    pub async fn list_habits(&self) -> Result<Vec<Habit>, ApiError> {
        self.get(HABITS_URL).await
    }

    pub async fn create_habit(&self, habit: &NewHabit) -> Result<Habit, ApiError> {
        self.post(HABITS_URL, habit).await
    }

    pub async fn complete_habit(&self, id: &str) -> Result<Habit, ApiError> {
        self.post_empty(&format!("{}/{}/complete", HABITS_URL, id)).await
    }

    pub async fn delete_habit(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("{}/{}", HABITS_URL, id)).await
    }

    pub async fn habit_recommendations(&self, goals: &str) -> Result<Vec<HabitRecommendation>, ApiError> {
        self.get_query(AI_RECOMMENDATIONS_URL, &[("goals", goals)]).await
    }

    pub async fn habit_analysis(&self) -> Result<AiText, ApiError> {
        self.get(AI_ANALYSIS_URL).await
    }

    pub async fn habit_motivation(&self) -> Result<AiText, ApiError> {
        self.get(AI_MOTIVATION_URL).await
    }
}
