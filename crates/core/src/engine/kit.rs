use rust_decimal::Decimal;

use crate::catalog::kit_for;
use crate::domain::product::ProductType;

/// Outcome of a finishing-kit lookup. Incompatibility is advisory: the base
/// quote still succeeds, only without the kit price.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KitResolution {
    NotRequested,
    Priced { name: &'static str, price: Decimal },
    Incompatible,
}

pub fn resolve_kit(product_type: ProductType, requested: bool) -> KitResolution {
    if !requested {
        return KitResolution::NotRequested;
    }

    match kit_for(product_type) {
        Some(kit) => KitResolution::Priced { name: kit.name, price: kit.price() },
        None => KitResolution::Incompatible,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{resolve_kit, KitResolution};
    use crate::domain::product::ProductType;

    #[test]
    fn unrequested_kit_is_a_no_op() {
        assert_eq!(
            resolve_kit(ProductType::TwoLeafSlidingWindow, false),
            KitResolution::NotRequested
        );
    }

    #[test]
    fn window_lines_price_the_window_kit() {
        let resolution = resolve_kit(ProductType::MaximAirWindow, true);
        assert_eq!(
            resolution,
            KitResolution::Priced { name: "Kit Arremate Janela", price: Decimal::new(14_900, 2) }
        );
    }

    #[test]
    fn folding_door_has_no_compatible_kit() {
        assert_eq!(resolve_kit(ProductType::FoldingDoor, true), KitResolution::Incompatible);
    }
}
