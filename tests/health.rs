use prodo::libs::health::{bmi, bmr, body_fat, BmiCategory, Gender, UnitSystem};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {} within {} of {}",
        actual,
        tolerance,
        expected
    );
}

#[test]
fn test_bmi_metric() {
    // 70 kg at 175 cm
    let result = bmi(175.0, 70.0, UnitSystem::Metric);
    assert_close(result.value, 22.857, 0.01);
    assert_eq!(result.category, BmiCategory::NormalWeight);
}

#[test]
fn test_bmi_imperial_converts_units() {
    // 154 lbs at 69 inches is roughly the same person as above
    let result = bmi(69.0, 154.0, UnitSystem::Imperial);
    assert_close(result.value, 22.74, 0.05);
    assert_eq!(result.category, BmiCategory::NormalWeight);
}

#[test]
fn test_bmi_categories() {
    assert_eq!(bmi(175.0, 50.0, UnitSystem::Metric).category, BmiCategory::Underweight);
    assert_eq!(bmi(175.0, 80.0, UnitSystem::Metric).category, BmiCategory::Overweight);
    assert_eq!(bmi(175.0, 100.0, UnitSystem::Metric).category, BmiCategory::Obesity);
}

#[test]
fn test_bmi_category_boundaries() {
    // 18.5 and 25.0 are the lower bounds of their categories
    let just_normal = bmi(100.0, 18.5, UnitSystem::Metric);
    assert_eq!(just_normal.category, BmiCategory::NormalWeight);
    let just_overweight = bmi(100.0, 25.0, UnitSystem::Metric);
    assert_eq!(just_overweight.category, BmiCategory::Overweight);
}

#[test]
fn test_bmr_male() {
    // 66 + 13.7*80 + 5*180 - 6.8*30 = 1858
    assert_close(bmr(Gender::Male, 80.0, 180.0, 30.0), 1858.0, 0.01);
}

#[test]
fn test_bmr_female() {
    // 655 + 9.6*60 + 1.8*165 - 4.7*25 = 1410.5
    assert_close(bmr(Gender::Female, 60.0, 165.0, 25.0), 1410.5, 0.01);
}

#[test]
fn test_body_fat_male() {
    let expected = 86.010 * (85.0f64 - 38.0).log10() - 70.041 * 178.0f64.log10() + 36.76;
    assert_close(body_fat(Gender::Male, 178.0, 38.0, 85.0, None), expected, 1e-9);
    // Sanity: a lean-ish configuration lands in a plausible range
    assert!(expected > 5.0 && expected < 30.0);
}

#[test]
fn test_body_fat_female_uses_hips() {
    let with_hips = body_fat(Gender::Female, 165.0, 33.0, 70.0, Some(95.0));
    let expected = 163.205 * (70.0f64 + 95.0 - 33.0).log10() - 97.684 * 165.0f64.log10() - 78.387;
    assert_close(with_hips, expected, 1e-9);
    assert!(with_hips > 10.0 && with_hips < 45.0);
}
