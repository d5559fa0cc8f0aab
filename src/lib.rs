//! Test data generator for the cleaning service marketplace schema.
//!
//! Produces referentially consistent SQL insert statements for user accounts
//! and profiles, service categories, services, cleaner profile views,
//! shortlists and bookings. Output is fully determined by the seed.
//!
//! # Example
//!
//! ```rust
//! use cleaning_seed::{render_to_string, Generator};
//!
//! let mut gen = Generator::new(42);
//! let data = gen.generate();
//! let sql = render_to_string(&data);
//!
//! assert!(sql.starts_with("-- UserAccount test data"));
//! ```

pub mod coverage;
pub mod fake;
pub mod generator;
pub mod renderer;
pub mod schema;
pub mod seed;

pub use generator::{GeneratedData, Generator, Row, SqlValue, TableData};
pub use renderer::{render_table, render_to_string, render_to_writer};
pub use schema::{Role, Table, TABLES};
pub use seed::{SeedConfig, SeedStats, SeedYamlConfig};
