//! Command-line interface for the `pathfinder` application.
//!
//! This crate serves as the main entry point for the executable, delegating
//! its core functionality to the `pathfinder-server` crate.

fn main() -> anyhow::Result<()> {
    pathfinder_server::run()
}
