pub mod init;
pub mod misc;
pub mod persons;
pub mod regions;

pub use init::handle_init;
pub use misc::{handle_completions, print_quickstart};
pub use persons::{handle_add, handle_delete, handle_list, handle_search};
pub use regions::handle_regions;
