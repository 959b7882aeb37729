//! Interactive product list: one command per line on stdin.

use std::io;

use anyhow::Context;

use stockpad_app::{App, AppConfig, AppError};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().map_err(AppError::from)?;
    stockpad_observability::init(&config.tracing);

    let mut app = App::new();
    let span = tracing::info_span!("session", session_id = %app.session_id());
    let _entered = span.enter();

    stockpad_app::run(&mut app, io::stdin().lock(), io::stdout().lock())
        .context("terminal IO failed")?;

    Ok(())
}
