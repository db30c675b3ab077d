use anyhow::Result;
use clap::{Args, Subcommand};

use crate::libs::health::{self, Gender, UnitSystem};

#[derive(Debug, Args)]
pub struct HealthArgs {
    #[command(subcommand)]
    command: HealthCommand,
}

#[derive(Debug, Subcommand)]
enum HealthCommand {
    #[command(about = "Body Mass Index")]
    Bmi {
        /// Height in cm (metric) or inches (imperial)
        height: f64,
        /// Weight in kg (metric) or pounds (imperial)
        weight: f64,
        #[arg(long, value_enum, default_value = "metric")]
        unit: UnitSystem,
    },
    #[command(about = "Basal Metabolic Rate (kcal/day)")]
    Bmr {
        #[arg(value_enum)]
        gender: Gender,
        /// Weight in kilograms
        weight: f64,
        /// Height in centimeters
        height: f64,
        /// Age in years
        age: f64,
    },
    #[command(about = "Body-fat percentage (US Navy method)")]
    Bodyfat {
        #[arg(value_enum)]
        gender: Gender,
        /// Height in centimeters
        height: f64,
        /// Neck circumference in centimeters
        neck: f64,
        /// Waist circumference in centimeters
        waist: f64,
        /// Hip circumference in centimeters; required for females
        #[arg(long)]
        hips: Option<f64>,
    },
}

pub fn cmd(args: HealthArgs) -> Result<()> {
    match args.command {
        HealthCommand::Bmi { height, weight, unit } => {
            let result = health::bmi(height, weight, unit);
            println!("BMI: {:.1} ({})", result.value, result.category.label());
        }
        HealthCommand::Bmr { gender, weight, height, age } => {
            let result = health::bmr(gender, weight, height, age);
            println!("BMR: {:.2} kcal/day", result);
        }
        HealthCommand::Bodyfat {
            gender,
            height,
            neck,
            waist,
            hips,
        } => {
            if gender == Gender::Female && hips.is_none() {
                anyhow::bail!("--hips is required for the female formula");
            }
            let result = health::body_fat(gender, height, neck, waist, hips);
            println!("Body fat: {:.1}%", result);
        }
    }

    Ok(())
}
