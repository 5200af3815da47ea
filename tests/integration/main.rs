//! Integration tests for the inventory record manager

mod cli_contracts;
mod store_integration;
