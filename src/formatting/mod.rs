pub mod groups;
pub mod tasks;
pub mod theme;
pub mod utils;

pub use groups::{print_group_detail, print_groups};
pub use tasks::{format_status_color, get_status_icon, print_single_task, print_tasks};
pub use utils::{clean_description, extract_first_name, format_deadline, format_relative_time, truncate};
