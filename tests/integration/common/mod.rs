//! Common utilities for integration tests.
//!
//! Shared LocalStack setup for DynamoDB-backed tests.

pub mod localstack;

pub use localstack::LocalStackTestContext;
