//! Snapshot loading - exercise records exported by the planning application

mod loader;

pub(crate) use loader::{load, resolve_input};
