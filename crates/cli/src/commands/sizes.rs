use clap::Args;
use serde::Serialize;

use esquadria_core::{
    requires_orientation, CatalogStore, Dimension, PriceResolver, PricingPolicy, ProductColor,
    ProductOrientation, ProductType,
};

use crate::commands::CommandResult;

#[derive(Debug, Args)]
pub struct SizesArgs {
    #[arg(long, help = "Product line, e.g. maxim_air_window")]
    pub product: String,
    #[arg(long, help = "Finish color: white, black, bronze, natural_anodized")]
    pub color: String,
    #[arg(long, help = "Opening side for per-side lines: left or right")]
    pub orientation: Option<String>,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SizesOutput {
    product: ProductType,
    color: ProductColor,
    orientation: ProductOrientation,
    sizes: Vec<Dimension>,
}

pub fn run(args: &SizesArgs) -> CommandResult {
    let catalog = match CatalogStore::load_embedded() {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("sizes", "catalog_integrity", error.to_string(), 3);
        }
    };

    let product = match args.product.parse::<ProductType>() {
        Ok(product) => product,
        Err(error) => return CommandResult::failure("sizes", error.class(), error.to_string(), 1),
    };
    let color = match args.color.parse::<ProductColor>() {
        Ok(color) => color,
        Err(error) => return CommandResult::failure("sizes", error.class(), error.to_string(), 1),
    };
    let orientation = match args.orientation.as_deref().map(str::parse::<ProductOrientation>) {
        Some(Ok(orientation)) => Some(orientation),
        Some(Err(error)) => {
            return CommandResult::failure("sizes", error.class(), error.to_string(), 1);
        }
        None => None,
    };

    let orientation = match orientation {
        Some(orientation) => orientation,
        None if requires_orientation(product) => {
            return CommandResult::failure(
                "sizes",
                "orientation_required",
                format!("{} is sold per side; pass --orientation left|right", product.label()),
                1,
            );
        }
        // Side-free lines are normalized by the resolver.
        None => ProductOrientation::None,
    };

    let resolver = PriceResolver::new(&catalog, PricingPolicy::default());
    match resolver.list_valid_dimensions(product, color, orientation) {
        Ok(sizes) => {
            let output = SizesOutput { product, color, orientation, sizes };
            CommandResult::success(render(args.json, &output))
        }
        Err(error) => CommandResult::failure("sizes", error.class(), error.to_string(), 1),
    }
}

fn render(json: bool, output: &SizesOutput) -> String {
    if json {
        return serde_json::to_string_pretty(output)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"));
    }

    let mut lines =
        vec![format!("{} {}:", output.product.label(), output.color.label())];
    for size in &output.sizes {
        lines.push(format!("  {size}"));
    }
    lines.join("\n")
}
