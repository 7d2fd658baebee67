//! Meteorfall - Meteor Intercept Vignette
//!
//! A library crate providing the simulation components of the vignette
//! for testing and integration purposes.

pub mod camera;
pub mod input;
pub mod mission;
pub mod orbit;
pub mod pseudo_orbit;
pub mod render;
pub mod scene;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
