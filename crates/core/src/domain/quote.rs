use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::PriceVariant;
use crate::domain::product::{
    Dimension, GlassType, PaymentMethod, ProductColor, ProductOrientation, ProductType,
    SalesChannel,
};
use crate::errors::PriceError;

/// One pricing question, fully described. The engine resolves each request
/// independently; nothing is carried across calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub product_type: ProductType,
    pub color: ProductColor,
    /// Opening side, when the customer has chosen one. Lines that do not
    /// require a side accept the omission; lines that do will fall back to
    /// dimension-based inference.
    pub orientation: Option<ProductOrientation>,
    /// Display-only; never consulted for lookup or pricing.
    pub glass: GlassType,
    pub dimension: Dimension,
    pub quantity: u32,
    pub payment_method: PaymentMethod,
    pub channel: SalesChannel,
    pub include_kit: bool,
}

impl QuoteRequest {
    pub fn validate(&self) -> Result<(), PriceError> {
        if self.quantity == 0 {
            return Err(PriceError::InvalidInput {
                reason: "quantity must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

/// Advisory notes attached to an otherwise successful quote. Warnings never
/// change the priced amounts; they exist so callers can explain adjustments
/// to the customer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuoteWarning {
    /// No exact size exists; the quote uses the nearest size that covers the
    /// request in both axes.
    DimensionAdjusted { requested: Dimension, matched: Dimension },
    /// The request exceeds the largest cataloged size; the quote uses the
    /// closest size overall, which is smaller in at least one axis.
    NearestSizeFallback { requested: Dimension, matched: Dimension },
    /// The supplied opening side does not apply to this product line and was
    /// normalized away.
    OrientationIgnored { supplied: ProductOrientation },
    /// A finishing kit was requested but none is compatible with this line.
    IncompatibleKit { product_type: ProductType },
}

impl fmt::Display for QuoteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionAdjusted { requested, matched } => {
                write!(f, "requested size {requested} adjusted to nearest available {matched}")
            }
            Self::NearestSizeFallback { requested, matched } => {
                write!(f, "requested size {requested} exceeds the catalog; quoting closest size {matched}")
            }
            Self::OrientationIgnored { supplied } => {
                write!(f, "opening side {supplied:?} does not apply to this product line")
            }
            Self::IncompatibleKit { product_type } => {
                write!(f, "no finishing kit is compatible with {}", product_type.label())
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResult {
    pub variant: PriceVariant,
    pub exact_match: bool,
    /// Unit price after quantity and payment discounts, rounded to centavos.
    pub unit_price: Decimal,
    /// `unit_price` multiplied by the requested quantity.
    pub total_price: Decimal,
    pub kit_price: Option<Decimal>,
    pub warnings: Vec<QuoteWarning>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::{QuoteRequest, QuoteWarning};
    use crate::domain::product::{
        Dimension, GlassType, PaymentMethod, ProductColor, ProductOrientation, ProductType,
        SalesChannel,
    };
    use crate::errors::PriceError;

    fn request() -> QuoteRequest {
        QuoteRequest {
            product_type: ProductType::TwoLeafSlidingWindow,
            color: ProductColor::White,
            orientation: None,
            glass: GlassType::Clear,
            dimension: Dimension::new(1200, 1000).expect("dimension"),
            quantity: 1,
            payment_method: PaymentMethod::CreditCard,
            channel: SalesChannel::DirectStore,
            include_kit: false,
        }
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut bad = request();
        bad.quantity = 0;
        assert!(matches!(bad.validate(), Err(PriceError::InvalidInput { .. })));
        assert!(request().validate().is_ok());
    }

    #[test]
    fn warnings_render_actionable_messages() {
        let warning = QuoteWarning::DimensionAdjusted {
            requested: Dimension::new(1205, 1000).expect("requested"),
            matched: Dimension::new(1500, 1000).expect("matched"),
        };
        assert_eq!(
            warning.to_string(),
            "requested size 1205x1000mm adjusted to nearest available 1500x1000mm"
        );

        let ignored = QuoteWarning::OrientationIgnored { supplied: ProductOrientation::Left };
        assert!(ignored.to_string().contains("does not apply"));
    }
}
