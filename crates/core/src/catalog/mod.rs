//! Immutable price catalog, loaded once per process from the embedded
//! dataset and never mutated afterwards. Lookup is a direct keyed access
//! into per-configuration tables; each table is small enough (tens of
//! variants) for the matcher's bounded linear search.

pub mod dataset;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::domain::product::{
    Dimension, ProductColor, ProductOrientation, ProductType, SalesChannel,
};
use crate::engine::orientation::stocked_orientations;
use crate::errors::CatalogError;

/// One raw dataset row as emitted by the offline spreadsheet exporter.
/// Rows are validated and regrouped into [`PriceTable`]s at load time.
#[derive(Clone, Copy, Debug)]
pub struct CatalogRow {
    pub product_type: ProductType,
    pub color: ProductColor,
    pub orientation: ProductOrientation,
    pub width_mm: u32,
    pub height_mm: u32,
    pub price_cents: i64,
    pub channels: &'static [SalesChannel],
}

/// One concrete sellable configuration at a fixed base price.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceVariant {
    pub product_type: ProductType,
    pub color: ProductColor,
    pub orientation: ProductOrientation,
    pub dimension: Dimension,
    pub base_price: Decimal,
    pub channels: Vec<SalesChannel>,
}

impl PriceVariant {
    pub fn sellable_on(&self, channel: SalesChannel) -> bool {
        self.channels.contains(&channel)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableKey {
    pub product_type: ProductType,
    pub color: ProductColor,
    pub orientation: ProductOrientation,
}

/// All variants sharing (type, color, orientation), sorted ascending by
/// (width, height) at load time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub key: TableKey,
    variants: Vec<PriceVariant>,
}

impl PriceTable {
    pub fn variants(&self) -> &[PriceVariant] {
        &self.variants
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Available sizes in ascending (width, height) order. Keys are unique
    /// per table, so the sequence is duplicate-free by construction.
    pub fn dimensions(&self) -> Vec<Dimension> {
        self.variants.iter().map(|variant| variant.dimension).collect()
    }
}

/// Finishing kit (kit arremate) record: a fixed-price add-on valid for a
/// closed set of product lines.
#[derive(Clone, Copy, Debug)]
pub struct KitArremate {
    pub name: &'static str,
    pub compatible: &'static [ProductType],
    price_cents: i64,
}

impl KitArremate {
    pub fn price(&self) -> Decimal {
        Decimal::new(self.price_cents, 2)
    }

    pub fn covers(&self, product_type: ProductType) -> bool {
        self.compatible.contains(&product_type)
    }
}

/// Finishing kits sold alongside the main product. FoldingDoor profiles do
/// not take an arremate frame, so no kit covers that line.
pub const KITS: &[KitArremate] = &[
    KitArremate {
        name: "Kit Arremate Janela",
        compatible: &[
            ProductType::TwoLeafSlidingWindow,
            ProductType::ThreeLeafSlidingWindow,
            ProductType::FourLeafSlidingWindow,
            ProductType::ScreenedSlidingWindow,
            ProductType::LouveredSlidingWindow,
            ProductType::SingleCasementWindow,
            ProductType::TwoLeafCasementWindow,
            ProductType::MaximAirWindow,
            ProductType::DoubleMaximAirWindow,
            ProductType::TiltWindow,
            ProductType::BathroomTiltWindow,
            ProductType::FixedWindow,
            ProductType::Transom,
        ],
        price_cents: 14_900,
    },
    KitArremate {
        name: "Kit Arremate Porta",
        compatible: &[
            ProductType::TwoLeafSlidingDoor,
            ProductType::ThreeLeafSlidingDoor,
            ProductType::FourLeafSlidingDoor,
            ProductType::BalconyDoor,
            ProductType::HingedDoor,
            ProductType::PanelHingedDoor,
            ProductType::ServiceDoor,
            ProductType::PivotDoor,
        ],
        price_cents: 21_900,
    },
];

pub fn kit_for(product_type: ProductType) -> Option<&'static KitArremate> {
    KITS.iter().find(|kit| kit.covers(product_type))
}

/// Per-line summary used by the integrity report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LineSummary {
    pub product_type: ProductType,
    pub label: &'static str,
    pub table_count: usize,
    pub variant_count: usize,
    pub smallest: Dimension,
    pub largest: Dimension,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogReport {
    pub dataset_version: &'static str,
    pub table_count: usize,
    pub variant_count: usize,
    pub lines: Vec<LineSummary>,
}

/// Process-lifetime catalog. All engine lookups run against this structure;
/// nothing mutates it after [`CatalogStore::load_embedded`] returns.
#[derive(Clone, Debug)]
pub struct CatalogStore {
    tables: HashMap<TableKey, PriceTable>,
}

impl CatalogStore {
    /// Load and validate the embedded dataset. Integrity violations here are
    /// fatal: the process must not start with a malformed catalog.
    pub fn load_embedded() -> Result<Self, CatalogError> {
        Self::from_rows(dataset::ROWS)
    }

    pub fn from_rows(rows: &[CatalogRow]) -> Result<Self, CatalogError> {
        let mut seen: HashSet<(TableKey, Dimension)> = HashSet::new();
        let mut tables: HashMap<TableKey, PriceTable> = HashMap::new();

        for row in rows {
            let dimension = Dimension::new(row.width_mm, row.height_mm).map_err(|_| {
                CatalogError::ZeroDimension {
                    product_type: row.product_type,
                    width_mm: row.width_mm,
                    height_mm: row.height_mm,
                }
            })?;

            if row.price_cents <= 0 {
                return Err(CatalogError::NonPositivePrice {
                    product_type: row.product_type,
                    dimension,
                    price_cents: row.price_cents,
                });
            }

            if !stocked_orientations(row.product_type).contains(&row.orientation) {
                return Err(CatalogError::OrientationMismatch {
                    product_type: row.product_type,
                    orientation: row.orientation,
                });
            }

            if row.channels.is_empty() {
                return Err(CatalogError::EmptyChannelSet {
                    product_type: row.product_type,
                    dimension,
                });
            }

            let key = TableKey {
                product_type: row.product_type,
                color: row.color,
                orientation: row.orientation,
            };
            if !seen.insert((key, dimension)) {
                return Err(CatalogError::DuplicateVariant {
                    product_type: row.product_type,
                    color: row.color,
                    orientation: row.orientation,
                    dimension,
                });
            }

            let variant = PriceVariant {
                product_type: row.product_type,
                color: row.color,
                orientation: row.orientation,
                dimension,
                base_price: Decimal::new(row.price_cents, 2),
                channels: row.channels.to_vec(),
            };
            tables
                .entry(key)
                .or_insert_with(|| PriceTable { key, variants: Vec::new() })
                .variants
                .push(variant);
        }

        for table in tables.values_mut() {
            table
                .variants
                .sort_by_key(|v| (v.dimension.width_mm(), v.dimension.height_mm()));
        }

        Ok(Self { tables })
    }

    pub fn find_table(
        &self,
        product_type: ProductType,
        color: ProductColor,
        orientation: ProductOrientation,
    ) -> Option<&PriceTable> {
        self.tables.get(&TableKey { product_type, color, orientation })
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    pub fn variant_count(&self) -> usize {
        self.tables.values().map(|table| table.variants.len()).sum()
    }

    pub fn dataset_version(&self) -> &'static str {
        dataset::DATASET_VERSION
    }

    /// Structured dataset summary for operators. Lines follow the canonical
    /// [`ProductType::ALL`] order.
    pub fn integrity_report(&self) -> CatalogReport {
        let mut lines = Vec::new();

        for &product_type in ProductType::ALL {
            let tables: Vec<&PriceTable> = self
                .tables
                .values()
                .filter(|table| table.key.product_type == product_type)
                .collect();
            if tables.is_empty() {
                continue;
            }

            let variants: Vec<&PriceVariant> =
                tables.iter().flat_map(|table| table.variants.iter()).collect();
            let smallest =
                variants.iter().map(|v| v.dimension).min_by_key(|d| (d.area_mm2(), d.width_mm()));
            let largest =
                variants.iter().map(|v| v.dimension).max_by_key(|d| (d.area_mm2(), d.width_mm()));
            let (Some(smallest), Some(largest)) = (smallest, largest) else {
                continue;
            };

            lines.push(LineSummary {
                product_type,
                label: product_type.label(),
                table_count: tables.len(),
                variant_count: variants.len(),
                smallest,
                largest,
            });
        }

        CatalogReport {
            dataset_version: dataset::DATASET_VERSION,
            table_count: self.table_count(),
            variant_count: self.variant_count(),
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{kit_for, CatalogRow, CatalogStore};
    use crate::domain::product::{
        ProductColor, ProductOrientation, ProductType, SalesChannel,
    };
    use crate::errors::CatalogError;

    const STORE_ONLY: &[SalesChannel] = &[SalesChannel::DirectStore];

    fn row(width_mm: u32, height_mm: u32, price_cents: i64) -> CatalogRow {
        CatalogRow {
            product_type: ProductType::FixedWindow,
            color: ProductColor::White,
            orientation: ProductOrientation::None,
            width_mm,
            height_mm,
            price_cents,
            channels: STORE_ONLY,
        }
    }

    #[test]
    fn embedded_dataset_loads_and_is_indexed() {
        let store = CatalogStore::load_embedded().expect("embedded dataset is well-formed");
        assert!(store.variant_count() >= 1000, "expected a full catalog");

        let table = store
            .find_table(
                ProductType::TwoLeafSlidingWindow,
                ProductColor::White,
                ProductOrientation::Left,
            )
            .expect("core line is stocked");
        assert!(!table.is_empty());

        let widths: Vec<u32> =
            table.variants().iter().map(|v| v.dimension.width_mm()).collect();
        let mut sorted = widths.clone();
        sorted.sort_unstable();
        assert_eq!(widths, sorted, "tables are sorted at load time");
    }

    #[test]
    fn duplicate_keys_fail_the_load() {
        let rows = [row(1000, 1000, 50_000), row(1000, 1000, 60_000)];
        assert!(matches!(
            CatalogStore::from_rows(&rows),
            Err(CatalogError::DuplicateVariant { .. })
        ));
    }

    #[test]
    fn non_positive_price_fails_the_load() {
        let rows = [row(1000, 1000, 0)];
        assert!(matches!(
            CatalogStore::from_rows(&rows),
            Err(CatalogError::NonPositivePrice { .. })
        ));
    }

    #[test]
    fn zero_dimension_fails_the_load() {
        let rows = [row(0, 1000, 50_000)];
        assert!(matches!(CatalogStore::from_rows(&rows), Err(CatalogError::ZeroDimension { .. })));
    }

    #[test]
    fn unstocked_orientation_fails_the_load() {
        let mut bad = row(1000, 1000, 50_000);
        bad.product_type = ProductType::ThreeLeafSlidingWindow;
        bad.orientation = ProductOrientation::Left;
        assert!(matches!(
            CatalogStore::from_rows(&[bad]),
            Err(CatalogError::OrientationMismatch { .. })
        ));

        let mut missing = row(1000, 1000, 50_000);
        missing.product_type = ProductType::TwoLeafSlidingWindow;
        assert!(matches!(
            CatalogStore::from_rows(&[missing]),
            Err(CatalogError::OrientationMismatch { .. })
        ));
    }

    #[test]
    fn every_line_has_a_kit_verdict() {
        assert!(kit_for(ProductType::TwoLeafSlidingWindow).is_some());
        assert!(kit_for(ProductType::HingedDoor).is_some());
        assert!(kit_for(ProductType::FoldingDoor).is_none());
    }

    #[test]
    fn integrity_report_covers_all_stocked_lines() {
        let store = CatalogStore::load_embedded().expect("embedded dataset");
        let report = store.integrity_report();
        assert_eq!(report.lines.len(), ProductType::ALL.len());
        assert_eq!(
            report.variant_count,
            report.lines.iter().map(|line| line.variant_count).sum::<usize>()
        );
    }
}
