//! Diabetes Assessment - Risk scoring from patient demographics and notes
//!
//! This crate estimates a patient's diabetes risk level from their age,
//! gender and the trigger terms found in their clinical notes. Patient data
//! is read from collaborating services through the API gateway.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
