//! Reusable widgets for the TUI

pub mod alert;
pub mod input;

pub use alert::{alert_area, Alert, AlertDialog};
pub use input::{InputField, TextInput};
