//! tests/mod.rs

mod audit_tests;
mod auth_tests;
