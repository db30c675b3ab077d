//! Health calculators: BMI, BMR, and body-fat estimation.
//!
//! Pure arithmetic with no I/O. Formulas follow the common reference
//! versions: BMI as kg/m², BMR via Harris-Benedict, and body fat via the
//! US Navy circumference method.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum UnitSystem {
    /// Kilograms and centimeters.
    Metric,
    /// Pounds and inches.
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obesity,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

/// Body Mass Index from height and weight in the given unit system.
/// Metric expects centimeters and kilograms, imperial inches and pounds.
pub fn bmi(height: f64, weight: f64, unit: UnitSystem) -> BmiResult {
    let (height_m, weight_kg) = match unit {
        UnitSystem::Metric => (height / 100.0, weight),
        UnitSystem::Imperial => (height * 0.0254, weight * 0.453592),
    };

    let value = weight_kg / (height_m * height_m);

    let category = if value < 18.5 {
        BmiCategory::Underweight
    } else if value < 25.0 {
        BmiCategory::NormalWeight
    } else if value < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    };

    BmiResult { value, category }
}

/// Basal Metabolic Rate in kcal/day (Harris-Benedict).
/// Weight in kilograms, height in centimeters, age in years.
pub fn bmr(gender: Gender, weight_kg: f64, height_cm: f64, age_years: f64) -> f64 {
    match gender {
        Gender::Male => 66.0 + (13.7 * weight_kg) + (5.0 * height_cm) - (6.8 * age_years),
        Gender::Female => 655.0 + (9.6 * weight_kg) + (1.8 * height_cm) - (4.7 * age_years),
    }
}

/// Body-fat percentage via the US Navy circumference method.
/// All measurements in centimeters; `hips` is required for females and
/// ignored for males.
pub fn body_fat(gender: Gender, height_cm: f64, neck_cm: f64, waist_cm: f64, hips_cm: Option<f64>) -> f64 {
    match gender {
        Gender::Male => 86.010 * (waist_cm - neck_cm).log10() - 70.041 * height_cm.log10() + 36.76,
        Gender::Female => {
            let hips = hips_cm.unwrap_or(0.0);
            163.205 * (waist_cm + hips - neck_cm).log10() - 97.684 * height_cm.log10() - 78.387
        }
    }
}
