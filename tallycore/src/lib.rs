//! tallycore — calculator engine, history log and shared widgets for tally

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod history;
pub mod keymap;
pub mod theme;
pub mod widgets;

pub use config::Preferences;
pub use engine::{apply_symbol, BinaryOp, CalcState, Calculator, DisplayUpdate, MemoryOp, Phase, Symbol};
pub use error::{CalcError, ConfigError};
pub use history::{HistoryEntry, HistoryLog};
pub use theme::ThemeConfig;
