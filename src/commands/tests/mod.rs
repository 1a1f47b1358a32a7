#![cfg(test)]

mod factory_tests;
