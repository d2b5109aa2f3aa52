//! Price resolution facade. `PriceResolver` is the single public entry
//! point; the submodules are internal collaborators orchestrated in a fixed
//! order: orientation, table lookup, dimension match, channel validation,
//! discounts, kit. The resolver holds no per-request state, so any number
//! of quotes may be evaluated concurrently over the same catalog.

pub mod channel;
pub mod discount;
pub mod format;
pub mod kit;
pub mod matcher;
pub mod orientation;

use chrono::Utc;
use rust_decimal::Decimal;

use crate::catalog::CatalogStore;
use crate::config::PricingPolicy;
use crate::domain::product::{
    Dimension, ProductColor, ProductOrientation, ProductType,
};
use crate::domain::quote::{QuoteRequest, QuoteResult, QuoteWarning};
use crate::errors::PriceError;

use self::kit::KitResolution;
use self::matcher::MatchQuality;
use self::orientation::{
    detect_orientation, fixed_orientation, requires_orientation, DetectedOrientation,
};

pub struct PriceResolver<'a> {
    catalog: &'a CatalogStore,
    policy: PricingPolicy,
}

impl<'a> PriceResolver<'a> {
    pub fn new(catalog: &'a CatalogStore, policy: PricingPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn with_default_policy(catalog: &'a CatalogStore) -> Self {
        Self::new(catalog, PricingPolicy::default())
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Resolve one quote. All failures come back as typed [`PriceError`]s;
    /// advisory conditions (size adjustment, ignored side, incompatible
    /// kit) surface as warnings on a successful result instead.
    pub fn get_price(&self, request: &QuoteRequest) -> Result<QuoteResult, PriceError> {
        request.validate()?;

        let mut warnings = Vec::new();
        let resolved_orientation = self.resolve_orientation(request, &mut warnings)?;

        let table = self
            .catalog
            .find_table(request.product_type, request.color, resolved_orientation)
            .ok_or(PriceError::ProductNotFound {
                product_type: request.product_type,
                color: request.color,
                orientation: resolved_orientation,
            })?;

        let (variant, quality) =
            matcher::find_closest_variant(table, request.dimension, &self.policy)?;
        match quality {
            MatchQuality::Exact => {}
            MatchQuality::Covering => warnings.push(QuoteWarning::DimensionAdjusted {
                requested: request.dimension,
                matched: variant.dimension,
            }),
            MatchQuality::Nearest => warnings.push(QuoteWarning::NearestSizeFallback {
                requested: request.dimension,
                matched: variant.dimension,
            }),
        }

        channel::validate_channel(variant, request.channel)?;

        let unit_price = discount::apply_discount(
            variant.base_price,
            request.quantity,
            request.payment_method,
            &self.policy,
        );
        let total_price = unit_price * Decimal::from(request.quantity);

        let kit_price = match kit::resolve_kit(request.product_type, request.include_kit) {
            KitResolution::NotRequested => None,
            KitResolution::Priced { price, .. } => Some(price),
            KitResolution::Incompatible => {
                warnings.push(QuoteWarning::IncompatibleKit {
                    product_type: request.product_type,
                });
                None
            }
        };

        Ok(QuoteResult {
            variant: variant.clone(),
            exact_match: quality == MatchQuality::Exact,
            unit_price,
            total_price,
            kit_price,
            warnings,
            generated_at: Utc::now(),
        })
    }

    /// Sizes available for a configuration, ascending by (width, height).
    /// Callers use this to present size pickers without re-deriving catalog
    /// knowledge.
    pub fn list_valid_dimensions(
        &self,
        product_type: ProductType,
        color: ProductColor,
        orientation: ProductOrientation,
    ) -> Result<Vec<Dimension>, PriceError> {
        let orientation = if requires_orientation(product_type) {
            orientation
        } else {
            fixed_orientation(product_type)
        };

        let table = self.catalog.find_table(product_type, color, orientation).ok_or(
            PriceError::ProductNotFound { product_type, color, orientation },
        )?;

        Ok(table.dimensions())
    }

    fn resolve_orientation(
        &self,
        request: &QuoteRequest,
        warnings: &mut Vec<QuoteWarning>,
    ) -> Result<ProductOrientation, PriceError> {
        if !requires_orientation(request.product_type) {
            let fixed = fixed_orientation(request.product_type);
            if let Some(supplied) = request.orientation {
                if supplied != fixed {
                    warnings.push(QuoteWarning::OrientationIgnored { supplied });
                }
            }
            return Ok(fixed);
        }

        match request.orientation {
            Some(side @ (ProductOrientation::Left | ProductOrientation::Right)) => Ok(side),
            Some(ProductOrientation::Reversible) => Err(PriceError::InvalidInput {
                reason: format!(
                    "{} is stocked per side, not as reversible",
                    request.product_type.label()
                ),
            }),
            // An explicit `none` on a per-side line falls through to
            // inference, same as omitting the field.
            Some(ProductOrientation::None) | None => {
                match detect_orientation(request.dimension, &self.policy) {
                    DetectedOrientation::Left => Ok(ProductOrientation::Left),
                    DetectedOrientation::Right => Ok(ProductOrientation::Right),
                    DetectedOrientation::Ambiguous => Err(PriceError::OrientationRequired),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::PriceResolver;
    use crate::catalog::CatalogStore;
    use crate::domain::product::{
        Dimension, GlassType, PaymentMethod, ProductColor, ProductOrientation, ProductType,
        SalesChannel,
    };
    use crate::domain::quote::{QuoteRequest, QuoteWarning};
    use crate::errors::PriceError;

    fn catalog() -> CatalogStore {
        CatalogStore::load_embedded().expect("embedded dataset")
    }

    fn request() -> QuoteRequest {
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
    fn exact_request_quotes_the_base_price() {
        let catalog = catalog();
        let resolver = PriceResolver::with_default_policy(&catalog);

        let result = resolver.get_price(&request()).expect("quote succeeds");
        assert!(result.exact_match);
        assert_eq!(result.unit_price, Decimal::new(90_000, 2));
        assert_eq!(result.total_price, result.unit_price);
        assert!(result.warnings.is_empty());
        assert_eq!(result.variant.orientation, ProductOrientation::Left);
    }

    #[test]
    fn missing_table_is_product_not_found() {
        let catalog = catalog();
        let resolver = PriceResolver::with_default_policy(&catalog);

        // Per-side lines carry no side-free table, so this lookup misses.
        let error = resolver
            .list_valid_dimensions(
                ProductType::TwoLeafSlidingWindow,
                ProductColor::White,
                ProductOrientation::None,
            )
            .expect_err("per-side line has no side-free table");
        assert!(matches!(error, PriceError::ProductNotFound { .. }));
    }

    #[test]
    fn supplied_side_on_side_free_line_is_ignored_with_warning() {
        let catalog = catalog();
        let resolver = PriceResolver::with_default_policy(&catalog);

        let mut fixed = request();
        fixed.product_type = ProductType::FixedWindow;
        fixed.dimension = Dimension::new(1000, 1000).expect("dimension");
        fixed.orientation = Some(ProductOrientation::Right);

        let result = resolver.get_price(&fixed).expect("quote succeeds");
        assert_eq!(result.variant.orientation, ProductOrientation::None);
        assert_eq!(
            result.warnings,
            vec![QuoteWarning::OrientationIgnored { supplied: ProductOrientation::Right }]
        );
    }

    #[test]
    fn reversible_side_on_per_side_line_is_invalid() {
        let catalog = catalog();
        let resolver = PriceResolver::with_default_policy(&catalog);

        let mut bad = request();
        bad.orientation = Some(ProductOrientation::Reversible);
        assert!(matches!(
            resolver.get_price(&bad),
            Err(PriceError::InvalidInput { .. })
        ));
    }

    #[test]
    fn list_valid_dimensions_is_strictly_ascending() {
        let catalog = catalog();
        let resolver = PriceResolver::with_default_policy(&catalog);

        let dimensions = resolver
            .list_valid_dimensions(
                ProductType::MaximAirWindow,
                ProductColor::Bronze,
                ProductOrientation::None,
            )
            .expect("stocked configuration");
        assert!(!dimensions.is_empty());
        for pair in dimensions.windows(2) {
            assert!(
                (pair[0].width_mm(), pair[0].height_mm())
                    < (pair[1].width_mm(), pair[1].height_mm()),
                "sizes must be strictly ascending and duplicate-free"
            );
        }

        // Side-free lines accept any supplied orientation and normalize it.
        let normalized = resolver
            .list_valid_dimensions(
                ProductType::MaximAirWindow,
                ProductColor::Bronze,
                ProductOrientation::Left,
            )
            .expect("normalized lookup");
        assert_eq!(dimensions, normalized);
    }
}
