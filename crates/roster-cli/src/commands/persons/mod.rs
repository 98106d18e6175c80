pub mod add;
pub mod delete;
pub mod list;
pub mod search;

pub use add::handle_add;
pub use delete::handle_delete;
pub use list::handle_list;
pub use search::handle_search;
