//! CLI Commands

pub mod inspect;
pub mod validate;

pub use inspect::InspectCommand;
pub use validate::ValidateCommand;
