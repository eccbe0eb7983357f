//! Realms Engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Draft review and skill encounter orchestration
//! - `infrastructure/` - Configuration, ports and their adapters
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
