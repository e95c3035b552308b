//! HTTP handlers for the healthtip service.

pub mod health;
pub mod healthtip;
