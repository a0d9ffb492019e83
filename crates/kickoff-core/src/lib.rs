pub mod choice;
pub mod config;
pub mod error;
pub mod form;
pub mod io;
pub mod pages;
pub mod paths;
pub mod sections;
pub mod submit;
pub mod types;

pub use error::{Result, WizardError};
