#![cfg(test)]

mod color_utils_tests;
