pub mod config;
pub mod dialog;
pub mod lex;
pub mod logging;
pub mod output;
pub mod scoring;

pub use dialog::{DialogError, Handler};
pub use lex::{LexEvent, LexResponse};
