//! Maintenance commands.

mod check;

pub use check::handle_check;
