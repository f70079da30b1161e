//! Game implementations built on the engine.

pub mod go_fish;
