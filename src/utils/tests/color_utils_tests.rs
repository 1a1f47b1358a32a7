//! Tests for fill color parsing

use crate::utils::color_utils::Color;

#[test]
fn test_parse_decimal() {
    assert_eq!("127,127,127,255".parse::<Color>().unwrap(), Color::default());
    assert_eq!(" 1, 2 ,3 ".parse::<Color>().unwrap(), Color::new(1, 2, 3, 255));
}

#[test]
fn test_parse_hex() {
    assert_eq!("#ff8000".parse::<Color>().unwrap(), Color::new(255, 128, 0, 255));
    assert_eq!("#FF800040".parse::<Color>().unwrap(), Color::new(255, 128, 0, 64));
}

#[test]
fn test_parse_rejects_garbage() {
    assert!("256,0,0".parse::<Color>().is_err());
    assert!("red".parse::<Color>().is_err());
    assert!("#12345".parse::<Color>().is_err());
    assert!("1,2".parse::<Color>().is_err());
}

#[test]
fn test_display_round_trips_through_parse() {
    let color = Color::new(9, 8, 7, 6);
    assert_eq!(color.to_string().parse::<Color>().unwrap(), color);
}
