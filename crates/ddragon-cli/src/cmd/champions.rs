use std::collections::BTreeMap;
use std::io::Write;

use anyhow::Result;
use itertools::Itertools;
use serde::Serialize;

use ddragon_core::model::Champion;

use crate::args::FetchArgs;
use crate::output;

#[derive(Debug, Serialize)]
pub struct ChampionsOut {
    pub data_version: String,
    pub count: usize,
    pub champions: Vec<Champion>,
    pub detail_failures: BTreeMap<String, String>,
}

pub async fn run(args: &FetchArgs, basic: bool) -> Result<()> {
    let dd = super::open(args)?;
    let pb = output::spinner("fetching champion manifest")?;

    let out = if basic {
        let manifest = dd.champions.manifest().await?;
        let champions: Vec<Champion> = dd
            .champions
            .basic_champions_from(&manifest)
            .into_values()
            .collect();
        ChampionsOut {
            data_version: manifest.data_version.clone(),
            count: champions.len(),
            champions,
            detail_failures: BTreeMap::new(),
        }
    } else {
        if args.no_details {
            pb.set_message("building records");
        } else {
            pb.set_message("fetching champion manifest and details");
        }
        let roster = dd.get_all_champions().await?;
        output::print_failures(&roster.detail_failures)?;
        ChampionsOut {
            data_version: roster.data_version.clone(),
            count: roster.champions.len(),
            detail_failures: output::failure_messages(&roster.detail_failures),
            champions: roster.champions,
        }
    };
    pb.finish_and_clear();

    if output::is_json() {
        return output::print(&out);
    }

    let mut stdout = output::stdout();
    for c in &out.champions {
        writeln!(
            stdout,
            "{:<16} {:<32} {}",
            c.name,
            c.title,
            c.tags.iter().join(", ")
        )?;
    }
    writeln!(
        stdout,
        "\n{} champions (data {}), {} detail failures",
        out.count,
        out.data_version,
        out.detail_failures.len()
    )?;
    Ok(())
}
