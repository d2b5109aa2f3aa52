use crate::catalog::PriceVariant;
use crate::domain::product::SalesChannel;
use crate::errors::PriceError;

/// Reject a variant that is not sellable on the requested surface. The
/// error carries every channel the variant is listed on, so the caller can
/// offer the customer a fallback path.
pub fn validate_channel(variant: &PriceVariant, channel: SalesChannel) -> Result<(), PriceError> {
    if variant.sellable_on(channel) {
        return Ok(());
    }

    Err(PriceError::ChannelNotAvailable {
        requested: channel,
        alternatives: variant.channels.clone(),
    })
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::validate_channel;
    use crate::catalog::PriceVariant;
    use crate::domain::product::{
        Dimension, ProductColor, ProductOrientation, ProductType, SalesChannel,
    };
    use crate::errors::PriceError;

    fn variant(channels: Vec<SalesChannel>) -> PriceVariant {
        PriceVariant {
            product_type: ProductType::FoldingDoor,
            color: ProductColor::White,
            orientation: ProductOrientation::Left,
            dimension: Dimension::new(1500, 2100).expect("dimension"),
            base_price: Decimal::new(329_500, 2),
            channels,
        }
    }

    #[test]
    fn listed_channel_passes() {
        let variant = variant(vec![SalesChannel::DirectStore, SalesChannel::ChatAgent]);
        assert!(validate_channel(&variant, SalesChannel::ChatAgent).is_ok());
    }

    #[test]
    fn unlisted_channel_reports_alternatives() {
        let variant = variant(vec![SalesChannel::DirectStore]);
        let error = validate_channel(&variant, SalesChannel::Marketplace)
            .expect_err("store-only variant");
        assert_eq!(
            error,
            PriceError::ChannelNotAvailable {
                requested: SalesChannel::Marketplace,
                alternatives: vec![SalesChannel::DirectStore],
            }
        );
    }
}
