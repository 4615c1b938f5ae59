//! Keyboard Selection - Multi-turn inline keyboard selection for chat bots
//!
//! This crate implements single-value and multi-value selection over
//! message-attached button grids, persisting progress in conversation notes
//! between turns.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
