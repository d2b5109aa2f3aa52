//! Runtime checks for the operator commands, driven through the library
//! entry points rather than a spawned binary.

use esquadria_cli::commands::{catalog, config, quote, sizes};

fn quote_args() -> quote::QuoteArgs {
    quote::QuoteArgs {
        product: "two_leaf_sliding_window".to_string(),
        color: "white".to_string(),
        orientation: Some("left".to_string()),
        glass: "clear".to_string(),
        width: 1200,
        height: 1000,
        quantity: 1,
        payment: "card".to_string(),
        channel: "direct".to_string(),
        kit: false,
        json: true,
    }
}

#[test]
fn quote_command_emits_parseable_json() {
    let result = quote::run(&quote_args());
    assert_eq!(result.exit_code, 0);

    let payload: serde_json::Value =
        serde_json::from_str(&result.output).expect("quote output is JSON");
    assert_eq!(payload["exact_match"], serde_json::Value::Bool(true));
    assert_eq!(payload["unit_price"].as_str(), Some("900.00"));
    assert!(payload["product_name"]
        .as_str()
        .expect("product name present")
        .contains("Janela de Correr 2 Folhas"));
}

#[test]
fn quote_command_maps_channel_refusal_to_failure() {
    let mut args = quote_args();
    args.product = "folding_door".to_string();
    args.width = 1500;
    args.height = 2100;
    args.channel = "marketplace".to_string();

    let result = quote::run(&args);
    assert_eq!(result.exit_code, 1);

    let payload: serde_json::Value =
        serde_json::from_str(&result.output).expect("failure output is JSON");
    assert_eq!(payload["error_class"].as_str(), Some("channel_not_available"));
    assert!(payload["message"].as_str().expect("message present").contains("loja"));
}

#[test]
fn quote_command_rejects_unknown_enums() {
    let mut args = quote_args();
    args.color = "verdigris".to_string();

    let result = quote::run(&args);
    assert_eq!(result.exit_code, 1);
    assert!(result.output.contains("invalid_input"));
}

#[test]
fn sizes_command_requires_a_side_for_per_side_lines() {
    let args = sizes::SizesArgs {
        product: "two_leaf_sliding_window".to_string(),
        color: "white".to_string(),
        orientation: None,
        json: false,
    };

    let result = sizes::run(&args);
    assert_eq!(result.exit_code, 1);
    assert!(result.output.contains("orientation_required"));
}

#[test]
fn sizes_command_lists_ascending_sizes() {
    let args = sizes::SizesArgs {
        product: "maxim_air_window".to_string(),
        color: "bronze".to_string(),
        orientation: None,
        json: true,
    };

    let result = sizes::run(&args);
    assert_eq!(result.exit_code, 0);

    let payload: serde_json::Value =
        serde_json::from_str(&result.output).expect("sizes output is JSON");
    let sizes = payload["sizes"].as_array().expect("sizes array");
    assert!(!sizes.is_empty());

    let widths: Vec<u64> =
        sizes.iter().map(|size| size["width_mm"].as_u64().expect("width")).collect();
    let mut sorted = widths.clone();
    sorted.sort_unstable();
    assert_eq!(widths, sorted);
}

#[test]
fn catalog_command_reports_every_line() {
    let args = catalog::CatalogArgs { json: true };

    let result = catalog::run(&args);
    assert_eq!(result.exit_code, 0);

    let payload: serde_json::Value =
        serde_json::from_str(&result.output).expect("catalog output is JSON");
    assert_eq!(payload["lines"].as_array().expect("lines").len(), 22);
    assert!(payload["variant_count"].as_u64().expect("variant count") >= 1000);
}

#[test]
fn config_command_prints_the_effective_policy() {
    let args = config::ConfigArgs { json: true };

    let result = config::run(&args);
    assert_eq!(result.exit_code, 0);

    let payload: serde_json::Value =
        serde_json::from_str(&result.output).expect("config output is JSON");
    assert_eq!(payload["quantity_tiers"].as_array().expect("tiers").len(), 4);
}
