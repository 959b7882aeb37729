//! `stockpad-app`
//!
//! Headless app shell: two tabs (products, orders), the product list/form
//! navigation stack, text rendering of each screen, and user alerts. The
//! `stockpad` binary drives it line by line from stdin.

pub mod command;
pub mod config;
pub mod error;
pub mod navigation;
pub mod render;
pub mod repl;
pub mod shell;

pub use command::Action;
pub use config::AppConfig;
pub use error::AppError;
pub use navigation::{Navigator, ParseTabError, Route, Screen, Tab};
pub use repl::run;
pub use shell::{App, Outcome};
