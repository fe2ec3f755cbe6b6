mod prompt;
mod reporter;
mod table;

pub use prompt::*;
pub use reporter::*;
pub use table::*;
