//! End-to-end quote scenarios against the embedded catalog: the canonical
//! storefront flows plus the cross-cutting pricing guarantees.

use rust_decimal::Decimal;

use esquadria_core::{
    CatalogStore, Dimension, GlassType, PaymentMethod, PriceError, PriceResolver, ProductColor,
    ProductOrientation, ProductType, QuoteRequest, QuoteWarning, SalesChannel,
};

fn catalog() -> CatalogStore {
    CatalogStore::load_embedded().expect("embedded dataset is well-formed")
}

fn sliding_window_request() -> QuoteRequest {
    QuoteRequest {
        product_type: ProductType::TwoLeafSlidingWindow,
        color: ProductColor::White,
        orientation: Some(ProductOrientation::Left),
        glass: GlassType::Clear,
        dimension: Dimension::new(1200, 1000).expect("dimension"),
        quantity: 1,
        payment_method: PaymentMethod::CreditCard,
        channel: SalesChannel::DirectStore,
        include_kit: false,
    }
}

#[test]
fn exact_match_quotes_catalog_base_price() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    let result = resolver.get_price(&sliding_window_request()).expect("quote succeeds");
    assert!(result.exact_match);
    assert_eq!(result.unit_price, Decimal::new(90_000, 2));
    assert_eq!(result.total_price, Decimal::new(90_000, 2));
    assert_eq!(result.kit_price, None);
    assert!(result.warnings.is_empty());
}

#[test]
fn quantity_tier_lowers_the_unit_price() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    let mut bulk = sliding_window_request();
    bulk.quantity = 10;

    let result = resolver.get_price(&bulk).expect("quote succeeds");
    // 5% tier off the 900.00 base.
    assert_eq!(result.unit_price, Decimal::new(85_500, 2));
    assert_eq!(result.total_price, result.unit_price * Decimal::from(10u32));
}

#[test]
fn off_catalog_size_adjusts_upward_with_a_warning() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    let mut odd_width = sliding_window_request();
    odd_width.dimension = Dimension::new(1205, 1000).expect("dimension");

    let result = resolver.get_price(&odd_width).expect("quote succeeds");
    assert!(!result.exact_match);
    // Nearest size that covers 1205x1000 in both axes.
    assert_eq!(result.variant.dimension, Dimension::new(1500, 1000).expect("matched"));
    assert!(result.variant.dimension.covers(odd_width.dimension));
    assert_eq!(
        result.warnings,
        vec![QuoteWarning::DimensionAdjusted {
            requested: odd_width.dimension,
            matched: result.variant.dimension,
        }]
    );
}

#[test]
fn store_only_variant_is_refused_on_the_marketplace() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    let mut marketplace = sliding_window_request();
    marketplace.product_type = ProductType::FoldingDoor;
    marketplace.dimension = Dimension::new(1500, 2100).expect("dimension");
    marketplace.channel = SalesChannel::Marketplace;

    let error = resolver.get_price(&marketplace).expect_err("folding doors are store-only");
    assert_eq!(
        error,
        PriceError::ChannelNotAvailable {
            requested: SalesChannel::Marketplace,
            alternatives: vec![SalesChannel::DirectStore],
        }
    );
}

#[test]
fn ambiguous_shape_without_a_side_requires_orientation() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    let mut ambiguous = sliding_window_request();
    ambiguous.orientation = None;
    ambiguous.dimension = Dimension::new(1200, 1200).expect("square");

    assert_eq!(
        resolver.get_price(&ambiguous).expect_err("square shapes cannot infer a side"),
        PriceError::OrientationRequired
    );
}

#[test]
fn wide_shape_infers_the_opening_side() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    let mut inferred = sliding_window_request();
    inferred.orientation = None;
    inferred.dimension = Dimension::new(2000, 1000).expect("wide");

    let result = resolver.get_price(&inferred).expect("side inferred from shape");
    assert_eq!(result.variant.orientation, ProductOrientation::Right);
    assert!(result.exact_match);
}

#[test]
fn incompatible_kit_warns_without_failing_the_quote() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    let mut with_kit = sliding_window_request();
    with_kit.product_type = ProductType::FoldingDoor;
    with_kit.dimension = Dimension::new(1500, 2100).expect("dimension");
    with_kit.include_kit = true;

    let result = resolver.get_price(&with_kit).expect("base quote still succeeds");
    assert_eq!(result.kit_price, None);
    assert_eq!(
        result.warnings,
        vec![QuoteWarning::IncompatibleKit { product_type: ProductType::FoldingDoor }]
    );
}

#[test]
fn compatible_kit_is_priced_alongside_the_product() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    let mut with_kit = sliding_window_request();
    with_kit.include_kit = true;

    let result = resolver.get_price(&with_kit).expect("quote succeeds");
    assert_eq!(result.kit_price, Some(Decimal::new(14_900, 2)));
    assert!(result.warnings.is_empty());
}

#[test]
fn glass_type_never_affects_lookup_or_price() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    let glasses =
        [GlassType::Clear, GlassType::Frosted, GlassType::Green, GlassType::Smoked];
    let reference = resolver.get_price(&sliding_window_request()).expect("quote succeeds");

    for glass in glasses {
        let mut request = sliding_window_request();
        request.glass = glass;
        let result = resolver.get_price(&request).expect("quote succeeds");
        assert_eq!(result.unit_price, reference.unit_price);
        assert_eq!(result.variant, reference.variant);
    }
}

#[test]
fn matcher_never_substitutes_an_undersized_variant() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    // Sizes chosen to sit between catalog steps in both axes.
    for (width, height) in [(1050, 1050), (1201, 1001), (1450, 1350), (1999, 1399)] {
        let mut request = sliding_window_request();
        request.dimension = Dimension::new(width, height).expect("dimension");

        let result = resolver.get_price(&request).expect("a covering size exists");
        assert!(
            result.variant.dimension.covers(request.dimension),
            "{width}x{height} matched undersized {}",
            result.variant.dimension
        );
    }
}

#[test]
fn unit_price_is_monotone_over_quantity_tiers() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    let mut previous = Decimal::MAX;
    for quantity in [1u32, 4, 5, 9, 10, 19, 20, 50] {
        let mut request = sliding_window_request();
        request.quantity = quantity;
        let result = resolver.get_price(&request).expect("quote succeeds");
        assert!(result.unit_price <= previous, "unit price rose at quantity {quantity}");
        previous = result.unit_price;
    }
}

#[test]
fn pix_discount_stacks_on_the_quantity_tier() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    let mut pix_bulk = sliding_window_request();
    pix_bulk.quantity = 10;
    pix_bulk.payment_method = PaymentMethod::Pix;

    let result = resolver.get_price(&pix_bulk).expect("quote succeeds");
    // 900.00 -> 855.00 (5% tier) -> 812.25 (5% pix).
    assert_eq!(result.unit_price, Decimal::new(81_225, 2));
}

#[test]
fn oversize_request_beyond_tolerance_is_rejected_with_nearest_size() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    let mut huge = sliding_window_request();
    huge.dimension = Dimension::new(3000, 1400).expect("dimension");

    let error = resolver.get_price(&huge).expect_err("50% over the largest width");
    assert_eq!(
        error,
        PriceError::DimensionOutOfBounds { nearest: Dimension::new(2000, 1400).expect("nearest") }
    );
}

#[test]
fn slightly_oversize_request_falls_back_with_a_warning() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    let mut slightly_over = sliding_window_request();
    slightly_over.dimension = Dimension::new(2100, 1400).expect("dimension");

    let result = resolver.get_price(&slightly_over).expect("within fallback tolerance");
    assert!(!result.exact_match);
    assert_eq!(result.variant.dimension, Dimension::new(2000, 1400).expect("matched"));
    assert_eq!(
        result.warnings,
        vec![QuoteWarning::NearestSizeFallback {
            requested: slightly_over.dimension,
            matched: result.variant.dimension,
        }]
    );
}

#[test]
fn marketplace_quote_only_returns_marketplace_listed_variants() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    // Oversized sliding doors are kept off the marketplace by the dataset.
    let mut big_door = sliding_window_request();
    big_door.product_type = ProductType::FourLeafSlidingDoor;
    big_door.orientation = None;
    big_door.dimension = Dimension::new(3200, 2400).expect("dimension");
    big_door.channel = SalesChannel::Marketplace;

    let error = resolver.get_price(&big_door).expect_err("kept off the marketplace");
    match error {
        PriceError::ChannelNotAvailable { requested, alternatives } => {
            assert_eq!(requested, SalesChannel::Marketplace);
            assert_eq!(
                alternatives,
                vec![SalesChannel::DirectStore, SalesChannel::ChatAgent]
            );
        }
        other => panic!("expected ChannelNotAvailable, got {other:?}"),
    }

    // The same configuration quotes normally in the store.
    big_door.channel = SalesChannel::DirectStore;
    let result = resolver.get_price(&big_door).expect("store quote succeeds");
    assert!(result.variant.sellable_on(SalesChannel::DirectStore));
}

#[test]
fn quote_result_serializes_with_stable_field_names() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    let mut with_kit = sliding_window_request();
    with_kit.include_kit = true;
    with_kit.dimension = Dimension::new(1205, 1000).expect("dimension");

    let result = resolver.get_price(&with_kit).expect("quote succeeds");
    let payload = serde_json::to_value(&result).expect("result serializes");

    assert_eq!(payload["exact_match"], serde_json::Value::Bool(false));
    assert_eq!(payload["variant"]["product_type"].as_str(), Some("two_leaf_sliding_window"));
    assert_eq!(payload["variant"]["orientation"].as_str(), Some("left"));
    assert_eq!(payload["warnings"][0]["kind"].as_str(), Some("dimension_adjusted"));
    assert!(payload["kit_price"].as_str().is_some());
}

#[test]
fn per_side_tables_list_identical_sizes() {
    let catalog = catalog();
    let resolver = PriceResolver::with_default_policy(&catalog);

    let left = resolver
        .list_valid_dimensions(
            ProductType::SingleCasementWindow,
            ProductColor::Black,
            ProductOrientation::Left,
        )
        .expect("left table");
    let right = resolver
        .list_valid_dimensions(
            ProductType::SingleCasementWindow,
            ProductColor::Black,
            ProductOrientation::Right,
        )
        .expect("right table");

    assert_eq!(left, right);
    assert!(!left.is_empty());
}
