#![cfg(test)]

mod memory_tests;
