use anyhow::{Context, Result};
use calculator::{logging, Console, Session};

fn main() -> Result<()> {
    logging::init();

    let console = Console::new().context("failed to open the terminal")?;
    let mut session = Session::with_terminal(console);
    session.run().context("calculator session aborted")
}
