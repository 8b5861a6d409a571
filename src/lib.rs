//! Timesheet Reporting Engine
//!
//! This crate provides the reporting and aggregation core of a workforce
//! time-tracking system: role-based access restriction, criteria filtering,
//! multi-dimensional hour aggregation, and export serialization.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod export;
pub mod models;
pub mod reporting;
pub mod store;
