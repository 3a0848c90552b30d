// HTTP routes
pub mod health;
pub mod ui;

pub use health::*;
pub use ui::*;
