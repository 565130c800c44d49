//! Transaction command handlers.

mod add;
mod delete;
mod edit;
mod list;
mod show;

pub use add::handle_add;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use list::handle_list;
pub use show::handle_show;
