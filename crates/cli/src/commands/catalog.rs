use clap::Args;

use esquadria_core::{CatalogReport, CatalogStore};

use crate::commands::CommandResult;

#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

pub fn run(args: &CatalogArgs) -> CommandResult {
    let catalog = match CatalogStore::load_embedded() {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("catalog", "catalog_integrity", error.to_string(), 3);
        }
    };

    let report = catalog.integrity_report();
    CommandResult::success(render(args.json, &report))
}

fn render(json: bool, report: &CatalogReport) -> String {
    if json {
        return serde_json::to_string_pretty(report)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"));
    }

    let mut lines = vec![format!(
        "catalog {}: {} lines, {} tables, {} variants",
        report.dataset_version,
        report.lines.len(),
        report.table_count,
        report.variant_count
    )];
    for line in &report.lines {
        lines.push(format!(
            "  {}: {} tables, {} sizes, {} to {}",
            line.label, line.table_count, line.variant_count, line.smallest, line.largest
        ));
    }
    lines.join("\n")
}
