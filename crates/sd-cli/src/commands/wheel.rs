use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use sd_core::{WheelConfig, WheelItem};

use super::OptionSource;

/// One slice with its geometry, as printed by `--json`.
#[derive(Serialize)]
struct SliceRow<'a> {
    index: usize,
    #[serde(flatten)]
    item: &'a WheelItem,
    offset: f64,
    arc: f64,
}

pub fn run(source: &OptionSource, config: &WheelConfig, json: bool) -> Result<(), String> {
    let model = source.model(config)?;

    let rows: Vec<SliceRow> = model
        .items()
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let geometry = model.slice_geometry(index)?;
            Some(SliceRow {
                index,
                item,
                offset: geometry.offset,
                arc: geometry.width,
            })
        })
        .collect();

    if json {
        let out = serde_json::to_string_pretty(&rows).map_err(|e| format!("json error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Label", "Category", "Weight", "Arc", "Colour"]);

    for row in &rows {
        table.add_row(vec![
            row.index.to_string(),
            row.item.label.clone(),
            row.item.category.to_string(),
            format!("{:.2}", row.item.weight),
            format!("{:.2}\u{b0}", row.arc),
            row.item.color.to_hex(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} slices, {} mode {}",
        rows.len(),
        source.mode()?,
        format!("(total weight {:.1})", model.total_weight()).dimmed()
    );

    Ok(())
}
