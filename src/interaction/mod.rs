mod focus;
mod picking;

pub use focus::{ClickOutcome, FocusState};
pub use picking::pick;
