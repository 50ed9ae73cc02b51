// DOM wiring for the panel: element lookup and mounting (setup) and the
// event listeners that turn user input into messages (events).
pub mod events;
pub mod setup;

pub use setup::{mount, PanelElements, SubmissionFormElements, TokenFieldElements};
