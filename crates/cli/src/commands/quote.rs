use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use esquadria_core::{
    format_product_name, CatalogStore, Dimension, GlassType, PaymentMethod, PriceError,
    PriceResolver, PricingPolicy, PolicyLoadOptions, ProductColor, ProductOrientation,
    ProductType, QuoteRequest, QuoteResult, SalesChannel,
};

use crate::commands::CommandResult;

#[derive(Debug, Args)]
pub struct QuoteArgs {
    #[arg(long, help = "Product line, e.g. two_leaf_sliding_window")]
    pub product: String,
    #[arg(long, help = "Finish color: white, black, bronze, natural_anodized")]
    pub color: String,
    #[arg(long, help = "Opening side for per-side lines: left or right")]
    pub orientation: Option<String>,
    #[arg(long, default_value = "clear", help = "Glass finish, display only")]
    pub glass: String,
    #[arg(long, help = "Requested width in millimetres")]
    pub width: u32,
    #[arg(long, help = "Requested height in millimetres")]
    pub height: u32,
    #[arg(long, default_value_t = 1)]
    pub quantity: u32,
    #[arg(long, default_value = "card", help = "Payment method: pix, card, boleto")]
    pub payment: String,
    #[arg(long, default_value = "direct", help = "Sales channel: direct, marketplace, chat")]
    pub channel: String,
    #[arg(long, help = "Bundle the compatible finishing kit")]
    pub kit: bool,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct QuoteOutput {
    product_name: String,
    exact_match: bool,
    quantity: u32,
    unit_price: Decimal,
    total_price: Decimal,
    kit_price: Option<Decimal>,
    warnings: Vec<String>,
}

pub fn run(args: &QuoteArgs) -> CommandResult {
    let policy = match PricingPolicy::load(PolicyLoadOptions::default()) {
        Ok(policy) => policy,
        Err(error) => {
            return CommandResult::failure(
                "quote",
                "policy_validation",
                format!("policy issue: {error}"),
                2,
            );
        }
    };

    let catalog = match CatalogStore::load_embedded() {
        Ok(catalog) => catalog,
        Err(error) => {
            return CommandResult::failure("quote", "catalog_integrity", error.to_string(), 3);
        }
    };
    tracing::debug!(variants = catalog.variant_count(), "catalog loaded");

    let request = match build_request(args) {
        Ok(request) => request,
        Err(error) => {
            return CommandResult::failure("quote", error.class(), error.to_string(), 1);
        }
    };

    let resolver = PriceResolver::new(&catalog, policy);
    match resolver.get_price(&request) {
        Ok(result) => CommandResult::success(render(args.json, args.quantity, &result)),
        Err(error) => CommandResult::failure("quote", error.class(), render_error(&error), 1),
    }
}

fn build_request(args: &QuoteArgs) -> Result<QuoteRequest, PriceError> {
    let orientation = args
        .orientation
        .as_deref()
        .map(str::parse::<ProductOrientation>)
        .transpose()?;

    Ok(QuoteRequest {
        product_type: args.product.parse::<ProductType>()?,
        color: args.color.parse::<ProductColor>()?,
        orientation,
        glass: args.glass.parse::<GlassType>()?,
        dimension: Dimension::new(args.width, args.height)?,
        quantity: args.quantity,
        payment_method: args.payment.parse::<PaymentMethod>()?,
        channel: args.channel.parse::<SalesChannel>()?,
        include_kit: args.kit,
    })
}

fn render(json: bool, quantity: u32, result: &QuoteResult) -> String {
    let output = QuoteOutput {
        product_name: format_product_name(&result.variant),
        exact_match: result.exact_match,
        quantity,
        unit_price: result.unit_price,
        total_price: result.total_price,
        kit_price: result.kit_price,
        warnings: result.warnings.iter().map(ToString::to_string).collect(),
    };

    if json {
        return serde_json::to_string_pretty(&output)
            .unwrap_or_else(|error| format!("{{\"error\":\"{error}\"}}"));
    }

    let mut lines = vec![output.product_name.clone()];
    lines.push(format!("exact match: {}", if output.exact_match { "yes" } else { "no" }));
    lines.push(format!("unit price: R$ {}", output.unit_price));
    lines.push(format!("total ({} un): R$ {}", output.quantity, output.total_price));
    if let Some(kit_price) = output.kit_price {
        lines.push(format!("finishing kit: R$ {kit_price}"));
    }
    for warning in &output.warnings {
        lines.push(format!("note: {warning}"));
    }
    lines.join("\n")
}

fn render_error(error: &PriceError) -> String {
    match error {
        PriceError::ChannelNotAvailable { requested, alternatives } => {
            let alternatives = alternatives
                .iter()
                .map(|channel| channel.label())
                .collect::<Vec<_>>()
                .join(", ");
            format!("not sold via {} (available: {alternatives})", requested.label())
        }
        other => other.to_string(),
    }
}
