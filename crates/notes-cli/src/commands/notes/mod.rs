//! Note commands: list, add, delete.

mod add;
mod delete;
mod list;

pub use add::handle_add;
pub use delete::handle_delete;
pub use list::handle_list;
