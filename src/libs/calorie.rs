//! Local calorie log.
//!
//! Food entries and the daily goal stay on this machine as a single JSON
//! document in the application data directory, mirroring the config file's
//! read/save pattern. Nothing here talks to the backend.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

use super::data_storage::DataStorage;

pub const CALORIE_FILE_NAME: &str = "calories.json";

const DEFAULT_DAILY_GOAL: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Dinner => "Dinner",
            MealType::Snack => "Snack",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodEntry {
    pub id: u64,
    pub name: String,
    pub calories: u32,
    pub meal_type: MealType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieLog {
    pub entries: Vec<FoodEntry>,
    pub daily_goal: u32,
    next_id: u64,
}

impl Default for CalorieLog {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            daily_goal: DEFAULT_DAILY_GOAL,
            next_id: 1,
        }
    }
}

impl CalorieLog {
    /// Loads the log, creating an empty one when no file exists yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CALORIE_FILE_NAME)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CALORIE_FILE_NAME)?;
        let file = File::create(path)?;
        serde_json::to_writer_pretty(&file, self)?;
        Ok(())
    }

    /// Appends an entry and returns its assigned id.
    pub fn add(&mut self, name: &str, calories: u32, meal_type: MealType) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(FoodEntry {
            id,
            name: name.to_string(),
            calories,
            meal_type,
        });
        id
    }

    /// Removes the entry with `id`; returns false when no such entry exists.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn set_goal(&mut self, goal: u32) {
        self.daily_goal = goal;
    }

    pub fn total_calories(&self) -> u32 {
        self.entries.iter().map(|e| e.calories).sum()
    }

    /// Calories left before the daily goal; zero once the goal is exceeded.
    pub fn remaining(&self) -> u32 {
        self.daily_goal.saturating_sub(self.total_calories())
    }
}
