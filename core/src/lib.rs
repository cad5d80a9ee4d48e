pub mod audit;
pub mod config;
pub mod determinism;
pub mod run;
pub mod validator;

pub mod error;

pub use run::controller::{RunController, RunState};
pub use run::report::Report;
pub use validator::validate_document;
