//! Tests for the grid transpose

use crate::nodes::transpose;

#[test]
fn test_two_columns() {
    assert_eq!(transpose(&[1, 2, 3, 4, 5, 6], 2), vec![1, 3, 5, 2, 4, 6]);
}

#[test]
fn test_three_columns() {
    assert_eq!(transpose(&[1, 2, 3, 4, 5, 6], 3), vec![1, 4, 2, 5, 3, 6]);
}

#[test]
fn test_partial_row_is_dropped() {
    let items = [1, 2, 3, 4, 5, 6, 7];
    let transposed = transpose(&items, 2);
    assert_eq!(transposed.len(), 6);
    assert!(!transposed.contains(&7));
    assert_eq!(transposed, vec![1, 3, 5, 2, 4, 6]);
}

#[test]
fn test_single_column_and_empty_input() {
    assert_eq!(transpose(&["a", "b"], 1), vec!["a", "b"]);
    assert!(transpose::<u8>(&[], 4).is_empty());
    // fewer items than columns leaves no full row
    assert!(transpose(&[1, 2], 3).is_empty());
}

#[test]
fn test_transposing_back_restores_order() {
    let items: Vec<u32> = (0..12).collect();
    let once = transpose(&items, 4);
    assert_eq!(transpose(&once, 3), items);
}

#[test]
#[should_panic]
fn test_zero_columns_is_a_contract_violation() {
    transpose(&[1, 2, 3], 0);
}
