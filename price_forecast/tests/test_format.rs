use price_forecast::format::{format_percent, format_price, format_value};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(123.0, "$123.0")]
#[case(1_500.0, "$1.5K")]
#[case(2_000_000.0, "$2.0M")]
#[case(3_200_000_000.0, "$3.2B")]
#[case(1_500_000_000_000.0, "$1.5T")]
#[case(2_000_000_000_000_000.0, "$2000.0T")]
fn test_format_value(#[case] value: f64, #[case] expected: &str) {
    assert_eq!(format_value(value), expected);
}

#[test]
fn test_format_value_negative() {
    assert_eq!(format_value(-2_500.0), "$-2.5K");
}

#[test]
fn test_format_price() {
    assert_eq!(format_price(123.456), "$123.46");
    assert_eq!(format_price(0.5), "$0.50");
}

#[test]
fn test_format_percent() {
    assert_eq!(format_percent(0.0123), "1.23%");
    assert_eq!(format_percent(-0.05), "-5.00%");
    assert_eq!(format_percent(1.0), "100.00%");
}
