//! MCDM TOPSIS - Multi-criteria ranking of decision options.
//!
//! This crate ranks options against weighted benefit and cost criteria with
//! TOPSIS, and with fuzzy TOPSIS when scores and weights are triangular fuzzy
//! numbers gathered from several decision makers.

pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;
