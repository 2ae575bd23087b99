mod marker;
mod state;
mod ui;

pub use marker::*;
pub use state::*;
