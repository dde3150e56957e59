use anyhow::{anyhow, Result};
use itertools::Itertools;

use crate::args::FetchArgs;
use crate::output;

pub async fn run(args: &FetchArgs, name: &str) -> Result<()> {
    let dd = super::open(args)?;
    let pb = output::spinner("fetching item manifest")?;
    let detail = dd.get_item_details(name).await?;
    pb.finish_and_clear();

    let detail = detail.ok_or_else(|| anyhow!("item not found: {name}"))?;

    if output::is_json() {
        return output::print(&detail);
    }

    let gold = detail
        .gold
        .map(|g| format!("{} total, {} base, {} sell", g.total, g.base, g.sell))
        .unwrap_or_else(|| "-".to_string());
    let stats = detail
        .stats
        .iter()
        .map(|(k, v)| format!("{k} {v}"))
        .join(", ");

    output::print_section(
        &detail.name,
        &[
            ("id", detail.entity_id.clone()),
            ("plaintext", detail.plaintext.clone().unwrap_or_default()),
            ("gold", gold),
            ("stats", stats),
            ("tags", detail.tags.iter().join(", ")),
        ],
    )?;
    Ok(())
}
