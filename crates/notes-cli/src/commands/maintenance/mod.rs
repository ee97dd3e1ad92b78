//! Maintenance commands: check, backup.

mod backup;
mod check;

pub use backup::handle_backup;
pub use check::handle_check;
