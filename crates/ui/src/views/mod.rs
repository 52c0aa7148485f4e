//! Plain-text rendering of the view-models.

mod render;

pub use render::{ANSWER_REQUIRED_ALERT, help_line, render_screen, welcome_banner};
