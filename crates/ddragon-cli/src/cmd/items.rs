use std::io::Write;

use anyhow::Result;
use itertools::Itertools;
use serde::Serialize;

use ddragon_core::model::Item;

use crate::args::FetchArgs;
use crate::output;

#[derive(Debug, Serialize)]
pub struct ItemsOut {
    pub count: usize,
    pub items: Vec<Item>,
}

pub async fn run(args: &FetchArgs) -> Result<()> {
    let dd = super::open(args)?;
    let pb = output::spinner("fetching item manifest")?;
    let items = dd.get_all_items().await?;
    pb.finish_and_clear();

    let out = ItemsOut {
        count: items.len(),
        items,
    };
    if output::is_json() {
        return output::print(&out);
    }

    let mut stdout = output::stdout();
    for i in &out.items {
        let stats = i.stats.iter().map(|(k, v)| format!("{k} {v}")).join(", ");
        writeln!(stdout, "{:>5}  {:<36} {:>5}g  {}", i.id, i.name, i.cost, stats)?;
    }
    writeln!(stdout, "\n{} items", out.count)?;
    Ok(())
}
