// Widget rendering functions, one module per dashboard zone.

pub mod hand;
pub mod help_bar;
pub mod picker;
pub mod range;
pub mod result;
pub mod status_bar;
