//! Nearest-dimension search inside one price table. The distance metric is
//! the absolute difference in face area (mm²); undersized substitution is
//! never preferred while a covering candidate exists.

use rust_decimal::Decimal;

use crate::catalog::{PriceTable, PriceVariant};
use crate::config::PricingPolicy;
use crate::domain::product::Dimension;
use crate::errors::PriceError;

/// How the returned variant relates to the requested size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchQuality {
    /// Both axes match a cataloged size exactly.
    Exact,
    /// Nearest size that covers the request in both axes.
    Covering,
    /// Request exceeds the catalog; closest size overall, smaller in at
    /// least one axis, within the configured tolerance.
    Nearest,
}

/// Resolve the best-fit variant for `requested` within `table`.
///
/// Policy order: exact match, then the smallest covering size (ties broken
/// by smaller area difference, then lower price), then the closest size
/// overall if every requested axis stays within
/// `oversize_tolerance_pct` of it; beyond that the request is out of
/// bounds.
pub fn find_closest_variant<'a>(
    table: &'a PriceTable,
    requested: Dimension,
    policy: &PricingPolicy,
) -> Result<(&'a PriceVariant, MatchQuality), PriceError> {
    if table.is_empty() {
        return Err(PriceError::NoVariantInRange);
    }

    if let Some(variant) =
        table.variants().iter().find(|variant| variant.dimension == requested)
    {
        return Ok((variant, MatchQuality::Exact));
    }

    let covering = table
        .variants()
        .iter()
        .filter(|variant| variant.dimension.covers(requested))
        .min_by_key(|variant| {
            (area_difference(variant.dimension, requested), variant.base_price, variant.dimension)
        });
    if let Some(variant) = covering {
        return Ok((variant, MatchQuality::Covering));
    }

    // Every candidate is smaller in at least one axis from here on.
    let nearest = table
        .variants()
        .iter()
        .min_by_key(|variant| {
            (area_difference(variant.dimension, requested), variant.base_price, variant.dimension)
        })
        .expect("table is non-empty");

    if within_tolerance(requested, nearest.dimension, policy.oversize_tolerance_pct) {
        Ok((nearest, MatchQuality::Nearest))
    } else {
        Err(PriceError::DimensionOutOfBounds { nearest: nearest.dimension })
    }
}

fn area_difference(a: Dimension, b: Dimension) -> u64 {
    a.area_mm2().abs_diff(b.area_mm2())
}

/// Each requested axis may exceed the candidate axis by at most
/// `tolerance_pct`.
fn within_tolerance(requested: Dimension, candidate: Dimension, tolerance_pct: Decimal) -> bool {
    let factor = Decimal::ONE + tolerance_pct / Decimal::ONE_HUNDRED;
    Decimal::from(requested.width_mm()) <= Decimal::from(candidate.width_mm()) * factor
        && Decimal::from(requested.height_mm()) <= Decimal::from(candidate.height_mm()) * factor
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{find_closest_variant, MatchQuality};
    use crate::catalog::{CatalogRow, CatalogStore, PriceTable};
    use crate::config::PricingPolicy;
    use crate::domain::product::{
        Dimension, ProductColor, ProductOrientation, ProductType, SalesChannel,
    };
    use crate::errors::PriceError;

    const STORE_ONLY: &[SalesChannel] = &[SalesChannel::DirectStore];

    fn table(rows: &[(u32, u32, i64)]) -> PriceTable {
        let rows: Vec<CatalogRow> = rows
            .iter()
            .map(|&(width_mm, height_mm, price_cents)| CatalogRow {
                product_type: ProductType::FixedWindow,
                color: ProductColor::White,
                orientation: ProductOrientation::None,
                width_mm,
                height_mm,
                price_cents,
                channels: STORE_ONLY,
            })
            .collect();
        let store = CatalogStore::from_rows(&rows).expect("fixture rows are valid");
        store
            .find_table(ProductType::FixedWindow, ProductColor::White, ProductOrientation::None)
            .expect("fixture table exists")
            .clone()
    }

    fn dim(width_mm: u32, height_mm: u32) -> Dimension {
        Dimension::new(width_mm, height_mm).expect("test dimension")
    }

    #[test]
    fn exact_size_wins_over_everything() {
        let table = table(&[(1000, 1000, 60_000), (1200, 1000, 70_000)]);
        let (variant, quality) =
            find_closest_variant(&table, dim(1200, 1000), &PricingPolicy::default())
                .expect("match");
        assert_eq!(quality, MatchQuality::Exact);
        assert_eq!(variant.dimension, dim(1200, 1000));
        assert_eq!(variant.base_price, Decimal::new(70_000, 2));
    }

    #[test]
    fn covering_candidate_beats_closer_undersized_one() {
        // 1190x1000 is much closer by area to 1205x1000 than 1500x1000 is,
        // but it cannot cover the request.
        let table = table(&[(1190, 1000, 69_000), (1500, 1000, 80_000)]);
        let (variant, quality) =
            find_closest_variant(&table, dim(1205, 1000), &PricingPolicy::default())
                .expect("match");
        assert_eq!(quality, MatchQuality::Covering);
        assert_eq!(variant.dimension, dim(1500, 1000));
    }

    #[test]
    fn covering_ties_break_by_area_then_price() {
        // Both candidates cover; 1300x1000 has the smaller area difference.
        let by_area = table(&[(1300, 1000, 75_000), (1250, 1100, 74_000)]);
        let (variant, _) =
            find_closest_variant(&by_area, dim(1250, 1000), &PricingPolicy::default())
                .expect("match");
        assert_eq!(variant.dimension, dim(1300, 1000));

        // Identical areas: the cheaper variant wins.
        let by_price = table(&[(1300, 1000, 75_000), (1000, 1300, 72_000)]);
        let (variant, _) =
            find_closest_variant(&by_price, dim(1000, 1000), &PricingPolicy::default())
                .expect("match");
        assert_eq!(variant.dimension, dim(1000, 1300));
        assert_eq!(variant.base_price, Decimal::new(72_000, 2));
    }

    #[test]
    fn oversize_request_falls_back_within_tolerance() {
        let table = table(&[(1000, 1000, 60_000), (2000, 1400, 90_000)]);
        // 5% over the largest axis stays inside the default 10% tolerance.
        let (variant, quality) =
            find_closest_variant(&table, dim(2100, 1400), &PricingPolicy::default())
                .expect("match");
        assert_eq!(quality, MatchQuality::Nearest);
        assert_eq!(variant.dimension, dim(2000, 1400));
    }

    #[test]
    fn oversize_request_beyond_tolerance_is_out_of_bounds() {
        let table = table(&[(2000, 1400, 90_000)]);
        let error = find_closest_variant(&table, dim(2500, 1400), &PricingPolicy::default())
            .expect_err("25% over must fail");
        assert_eq!(
            error,
            PriceError::DimensionOutOfBounds { nearest: dim(2000, 1400) }
        );
    }

    #[test]
    fn tolerance_is_checked_per_axis() {
        let table = table(&[(2000, 1400, 90_000)]);
        // Width fits; height is 20% over and must fail on its own.
        let error = find_closest_variant(&table, dim(2000, 1680), &PricingPolicy::default())
            .expect_err("per-axis breach");
        assert!(matches!(error, PriceError::DimensionOutOfBounds { .. }));
    }
}
