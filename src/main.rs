use std::io;

use anyhow::Result;
use tracing::info;

use hotseat_core::RuleSet;
use hotseat_ui::{Layout, Session};

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("hotseat starting");

    let mut session = Session::new(RuleSet::default(), Layout::default());
    let stdin = io::stdin();
    session.run(stdin.lock(), io::stdout().lock())?;
    Ok(())
}
