#![deny(warnings, clippy::all, clippy::pedantic, clippy::nursery)]

use anyhow::Result;
use clap::Parser;
use mapty::{
    app::{App, FormInput},
    cli,
    host::FixedPosition,
    storage::SqliteStorage,
    terminal::TerminalUi,
    utils,
};
use std::io;

#[macro_use]
extern crate mapty;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let storage = SqliteStorage::open(&cli.db)?;
    dlog!("db={} home={:?} zoom={}", cli.db.display(), cli.home, cli.zoom);

    let ui = TerminalUi::new(io::stdout().lock());
    let mut app = App::new(storage, ui, cli.config());
    app.start(&mut FixedPosition(cli.home));

    match cli.cmd {
        None | Some(cli::Cmd::List) => {}
        Some(cli::Cmd::Add {
            kind,
            at,
            distance,
            duration,
            cadence,
            elevation,
        }) => {
            if !app.map_loaded() {
                anyhow::bail!("map is not loaded; pass --home LAT,LNG");
            }
            app.map_click(at);
            app.kind_changed(kind);

            let form = FormInput {
                kind,
                distance,
                duration,
                cadence,
                elevation,
            };
            if app.submit(&form)?.is_none() {
                let reason = app
                    .ui()
                    .alerts()
                    .last()
                    .cloned()
                    .unwrap_or_else(|| "workout not created".to_string());
                anyhow::bail!(reason);
            }
        }
        Some(cli::Cmd::Show { id }) => {
            if !app.list_click(&id) {
                anyhow::bail!("no workout with id {id} on a loaded map");
            }
        }
    }

    Ok(())
}
