use std::collections::BTreeMap;

use anyhow::{bail, Result};
use itertools::Itertools;
use serde::Serialize;

use ddragon_core::model::ChampionDetail;

use crate::args::FetchArgs;
use crate::output;

#[derive(Debug, Serialize)]
pub struct DetailsOut {
    pub details: BTreeMap<String, ChampionDetail>,
    pub failures: BTreeMap<String, String>,
}

pub async fn run(args: &FetchArgs, names: &[String]) -> Result<()> {
    let dd = super::open(args)?;
    let pb = output::spinner(&format!("fetching details for {}", names.iter().join(", ")))?;
    let batch = dd.load_champion_details(names).await?;
    pb.finish_and_clear();

    output::print_failures(&batch.failures)?;
    let failed = batch.failures.len();
    let out = DetailsOut {
        failures: output::failure_messages(&batch.failures),
        details: batch.details,
    };

    if output::is_json() {
        output::print(&out)?;
    } else {
        for (name, d) in &out.details {
            let abilities = d.abilities.iter().map(|a| a.name.as_str()).join(", ");
            output::print_section(
                name,
                &[
                    ("id", d.entity_id.clone()),
                    ("title", d.title.clone()),
                    ("resource", d.partype.clone()),
                    ("abilities", abilities),
                ],
            )?;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} detail requests failed", names.len());
    }
    Ok(())
}
