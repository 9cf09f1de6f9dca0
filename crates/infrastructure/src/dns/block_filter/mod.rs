pub mod blocklist_store;
pub mod compiler;

pub use blocklist_store::BlocklistStore;
pub use compiler::{load_filter_file, parse_list_line, parse_list_text, FilterLoad};
