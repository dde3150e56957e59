use anyhow::Result;
use tracing::debug;

use ddragon_fetch::DataDragon;

use crate::args::{Cli, Command, FetchArgs};

mod champions;
mod details;
mod doctor;
mod item;
mod items;

pub async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Champions { basic } => champions::run(&cli.fetch, basic).await,
        Command::Items => items::run(&cli.fetch).await,
        Command::Details { names } => details::run(&cli.fetch, &names).await,
        Command::Item { name } => item::run(&cli.fetch, &name).await,
        Command::Doctor => doctor::run(&cli.fetch).await,
    }
}

fn open(args: &FetchArgs) -> Result<DataDragon> {
    let config = args.to_config();
    debug!(?config, "effective configuration");
    Ok(DataDragon::with_reqwest(config)?)
}
