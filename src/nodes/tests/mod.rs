#![cfg(test)]

mod transpose_tests;
mod store_nodes_tests;
