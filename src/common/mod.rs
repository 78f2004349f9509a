pub mod input;
pub mod logging;
pub mod output;
pub mod progress;
pub mod types;
pub mod utils;

pub use input::*;
pub use logging::*;
pub use output::*;
pub use progress::create_count_progress_bar;
pub use types::*;
pub use utils::*;
