pub mod actions;
pub mod input;
pub mod vm;
pub mod views;

pub use actions::{ActionOutcome, perform};
pub use input::{UserAction, parse_action};
pub use views::{help_line, render_screen, welcome_banner};
pub use vm::ScreenVm;
