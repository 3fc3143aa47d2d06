//! Running and cycling workouts pinned to map coordinates.
//!
//! [`app::App`] is the controller; the host supplies a [`host::Ui`], a
//! [`host::Geolocation`] and a [`storage::Storage`] slot that the whole
//! collection is mirrored into after every change.

pub mod app;
pub mod cli;
pub mod error;
pub mod host;
pub mod mirror;
pub mod render;
pub mod storage;
pub mod terminal;
pub mod types;
pub mod utils;
pub mod workout;
