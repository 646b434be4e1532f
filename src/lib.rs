//! This crate contains the main application logic for the grid sandbox game gridplay.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The CLI dependency is used in the binary crate."
)]

mod app;
mod events;
mod map;
mod types;
mod ui;

pub use app::App;
