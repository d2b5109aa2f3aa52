use crate::catalog::PriceVariant;

/// Human-readable label for a variant, as shown in chat and storefront
/// listings. Pure formatting; no pricing data.
pub fn format_product_name(variant: &PriceVariant) -> String {
    let mut name = format!(
        "{} {} {}",
        variant.product_type.label(),
        variant.color.label(),
        variant.dimension
    );

    if let Some(side) = variant.orientation.label() {
        name.push_str(" (");
        name.push_str(side);
        name.push(')');
    }

    name
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::format_product_name;
    use crate::catalog::PriceVariant;
    use crate::domain::product::{
        Dimension, ProductColor, ProductOrientation, ProductType, SalesChannel,
    };

    fn variant(orientation: ProductOrientation) -> PriceVariant {
        PriceVariant {
            product_type: ProductType::TwoLeafSlidingWindow,
            color: ProductColor::White,
            orientation,
            dimension: Dimension::new(1200, 1000).expect("dimension"),
            base_price: Decimal::new(90_000, 2),
            channels: vec![SalesChannel::DirectStore],
        }
    }

    #[test]
    fn label_includes_side_when_present() {
        assert_eq!(
            format_product_name(&variant(ProductOrientation::Left)),
            "Janela de Correr 2 Folhas Branco 1200x1000mm (Lado Esquerdo)"
        );
    }

    #[test]
    fn side_free_label_omits_the_suffix() {
        assert_eq!(
            format_product_name(&variant(ProductOrientation::None)),
            "Janela de Correr 2 Folhas Branco 1200x1000mm"
        );
    }
}
