//! tests/api/main.rs

mod health_check;
mod pages;
mod subscribers;
