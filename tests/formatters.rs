use chrono::Duration;
use prodo::libs::formatter::{format_amount, format_countdown, format_duration};

#[test]
fn test_format_duration_standard() {
    assert_eq!(format_duration(&Duration::hours(8)), "08:00");
    assert_eq!(format_duration(&Duration::minutes(90)), "01:30");
    assert_eq!(format_duration(&Duration::minutes(45)), "00:45");
}

#[test]
fn test_format_duration_edge_cases() {
    assert_eq!(format_duration(&Duration::zero()), "00:00");
    assert_eq!(format_duration(&Duration::hours(-1)), "00:00");
    assert_eq!(format_duration(&Duration::hours(24)), "24:00");
}

#[test]
fn test_format_countdown() {
    assert_eq!(format_countdown(0), "00:00");
    assert_eq!(format_countdown(59), "00:59");
    assert_eq!(format_countdown(60), "01:00");
    assert_eq!(format_countdown(1500), "25:00");
    // Sessions over an hour keep counting minutes instead of wrapping
    assert_eq!(format_countdown(3700), "61:40");
}

#[test]
fn test_format_amount() {
    assert_eq!(format_amount(120.5), "$120.50");
    assert_eq!(format_amount(0.0), "$0.00");
    assert_eq!(format_amount(-42.0), "-$42.00");
}
