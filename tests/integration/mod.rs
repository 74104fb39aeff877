//! Integration tests

mod provider_client_tests;
mod task_tests;
