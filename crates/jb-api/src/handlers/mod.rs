//! API handlers

pub mod jobs;
