//! pocketcore — the calculation engine behind pocketcalc

pub mod engine;
pub mod format;
pub mod input;
pub mod presenter;
pub mod settings;

pub use engine::{step, CalcState, Notice, Output};
pub use format::{format_number, parse_display, Formatter, ERROR_MARKER};
pub use input::{Input, Operator, UnknownSymbol};
pub use presenter::{Engine, Presenter};
pub use settings::{CalcSettings, SettingsError};
