//! Domain types and ambient services for the rollcall application.
//!
//! - **Domain**: [`student`] and [`attendance`] value types and input parsing
//! - **Infrastructure**: configuration, data directory, logging, messaging
//! - **Presentation**: table and JSON rendering in [`view`]

pub mod attendance;
pub mod config;
pub mod data_storage;
pub mod logging;
pub mod messages;
pub mod student;
pub mod view;
