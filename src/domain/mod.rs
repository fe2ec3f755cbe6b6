mod action;
mod pattern_rule;
mod resource_group;
mod resource_id;
mod table_name;

pub use action::*;
pub use pattern_rule::*;
pub use resource_group::*;
pub use resource_id::*;
pub use table_name::*;
