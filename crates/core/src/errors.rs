use thiserror::Error;

use crate::domain::product::{
    Dimension, ProductColor, ProductOrientation, ProductType, SalesChannel,
};

/// Per-request failures returned by the resolution facade. Every variant is
/// a typed result, never a panic; callers translate these into channel
/// appropriate responses (HTTP status, chat message, CLI exit code).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("invalid quote input: {reason}")]
    InvalidInput { reason: String },
    #[error("no price table for {product_type:?} in {color:?} ({orientation:?})")]
    ProductNotFound {
        product_type: ProductType,
        color: ProductColor,
        orientation: ProductOrientation,
    },
    #[error("price table has no sellable size for this request")]
    NoVariantInRange,
    #[error("requested size is outside the catalog range; nearest available is {nearest}")]
    DimensionOutOfBounds { nearest: Dimension },
    #[error("this product line requires an opening side and none could be inferred")]
    OrientationRequired,
    #[error("variant is not sold on {requested:?}")]
    ChannelNotAvailable { requested: SalesChannel, alternatives: Vec<SalesChannel> },
}

impl PriceError {
    /// Stable machine-readable class, used by callers that key responses or
    /// metrics off the failure kind rather than the message.
    pub fn class(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => "invalid_input",
            Self::ProductNotFound { .. } => "product_not_found",
            Self::NoVariantInRange => "no_variant_in_range",
            Self::DimensionOutOfBounds { .. } => "dimension_out_of_bounds",
            Self::OrientationRequired => "orientation_required",
            Self::ChannelNotAvailable { .. } => "channel_not_available",
        }
    }
}

/// Catalog dataset integrity violations. These are fatal at load time and
/// prevent process start; they are never surfaced per request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate variant key: {product_type:?} {color:?} {orientation:?} {dimension}")]
    DuplicateVariant {
        product_type: ProductType,
        color: ProductColor,
        orientation: ProductOrientation,
        dimension: Dimension,
    },
    #[error("non-positive price ({price_cents} cents) for {product_type:?} {dimension}")]
    NonPositivePrice { product_type: ProductType, dimension: Dimension, price_cents: i64 },
    #[error("zero dimension {width_mm}x{height_mm} for {product_type:?}")]
    ZeroDimension { product_type: ProductType, width_mm: u32, height_mm: u32 },
    #[error("row orientation {orientation:?} is not stocked for {product_type:?}")]
    OrientationMismatch { product_type: ProductType, orientation: ProductOrientation },
    #[error("variant row for {product_type:?} {dimension} declares no sales channel")]
    EmptyChannelSet { product_type: ProductType, dimension: Dimension },
}

#[cfg(test)]
mod tests {
    use super::{CatalogError, PriceError};
    use crate::domain::product::{
        Dimension, ProductColor, ProductOrientation, ProductType, SalesChannel,
    };

    #[test]
    fn price_error_classes_are_stable() {
        let error = PriceError::ChannelNotAvailable {
            requested: SalesChannel::Marketplace,
            alternatives: vec![SalesChannel::DirectStore],
        };
        assert_eq!(error.class(), "channel_not_available");
        assert_eq!(PriceError::OrientationRequired.class(), "orientation_required");
    }

    #[test]
    fn catalog_errors_name_the_offending_row() {
        let error = CatalogError::NonPositivePrice {
            product_type: ProductType::HingedDoor,
            dimension: Dimension::new(800, 2100).expect("dimension"),
            price_cents: -10,
        };
        let rendered = error.to_string();
        assert!(rendered.contains("HingedDoor"));
        assert!(rendered.contains("800x2100mm"));
    }

    #[test]
    fn dimension_out_of_bounds_suggests_nearest_size() {
        let error = PriceError::DimensionOutOfBounds {
            nearest: Dimension::new(2000, 1200).expect("dimension"),
        };
        assert!(error.to_string().contains("2000x1200mm"));
    }
}
