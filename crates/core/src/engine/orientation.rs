//! Opening-side rules. Which lines are sold per side is a closed business
//! mapping; the inference from dimensions follows the documented
//! aspect-ratio policy in [`PricingPolicy::orientation_aspect_ratio`].

use rust_decimal::Decimal;

use crate::config::PricingPolicy;
use crate::domain::product::{Dimension, ProductOrientation, ProductType};

/// Orientations the catalog stocks for a product line. Lines sold per side
/// carry Left and Right tables; pivot hardware installs either way and is
/// stocked as a single Reversible table; everything else is side-free.
pub fn stocked_orientations(product_type: ProductType) -> &'static [ProductOrientation] {
    match product_type {
        ProductType::TwoLeafSlidingWindow
        | ProductType::ScreenedSlidingWindow
        | ProductType::TwoLeafSlidingDoor
        | ProductType::SingleCasementWindow
        | ProductType::HingedDoor
        | ProductType::PanelHingedDoor
        | ProductType::ServiceDoor
        | ProductType::FoldingDoor => &[ProductOrientation::Left, ProductOrientation::Right],
        ProductType::PivotDoor => &[ProductOrientation::Reversible],
        ProductType::ThreeLeafSlidingWindow
        | ProductType::FourLeafSlidingWindow
        | ProductType::LouveredSlidingWindow
        | ProductType::TwoLeafCasementWindow
        | ProductType::MaximAirWindow
        | ProductType::DoubleMaximAirWindow
        | ProductType::TiltWindow
        | ProductType::BathroomTiltWindow
        | ProductType::FixedWindow
        | ProductType::Transom
        | ProductType::ThreeLeafSlidingDoor
        | ProductType::FourLeafSlidingDoor
        | ProductType::BalconyDoor => &[ProductOrientation::None],
    }
}

/// True when the opening side is a mandatory selector for the line.
pub fn requires_orientation(product_type: ProductType) -> bool {
    stocked_orientations(product_type)
        == [ProductOrientation::Left, ProductOrientation::Right]
}

/// The single orientation a side-free line is stocked under.
pub fn fixed_orientation(product_type: ProductType) -> ProductOrientation {
    stocked_orientations(product_type)[0]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectedOrientation {
    Left,
    Right,
    Ambiguous,
}

impl DetectedOrientation {
    pub fn as_orientation(self) -> Option<ProductOrientation> {
        match self {
            Self::Left => Some(ProductOrientation::Left),
            Self::Right => Some(ProductOrientation::Right),
            Self::Ambiguous => None,
        }
    }
}

/// Infer the opening side from the requested size. Wide panels open to the
/// right by installation convention, tall narrow leaves hinge left; shapes
/// below the aspect-ratio threshold on both axes are ambiguous and must be
/// resolved by the customer.
pub fn detect_orientation(dimension: Dimension, policy: &PricingPolicy) -> DetectedOrientation {
    let width = Decimal::from(dimension.width_mm());
    let height = Decimal::from(dimension.height_mm());
    let ratio = policy.orientation_aspect_ratio;

    if width >= height * ratio {
        DetectedOrientation::Right
    } else if height >= width * ratio {
        DetectedOrientation::Left
    } else {
        DetectedOrientation::Ambiguous
    }
}

#[cfg(test)]
mod tests {
    use super::{
        detect_orientation, fixed_orientation, requires_orientation, stocked_orientations,
        DetectedOrientation,
    };
    use crate::config::PricingPolicy;
    use crate::domain::product::{Dimension, ProductOrientation, ProductType};

    #[test]
    fn side_mapping_is_closed_over_all_lines() {
        for &product_type in ProductType::ALL {
            let stocked = stocked_orientations(product_type);
            assert!(!stocked.is_empty());
            if requires_orientation(product_type) {
                assert_eq!(stocked, [ProductOrientation::Left, ProductOrientation::Right]);
            } else {
                assert_eq!(stocked.len(), 1);
                assert_eq!(fixed_orientation(product_type), stocked[0]);
            }
        }
    }

    #[test]
    fn sliding_and_hinged_lines_are_sold_per_side() {
        assert!(requires_orientation(ProductType::TwoLeafSlidingWindow));
        assert!(requires_orientation(ProductType::HingedDoor));
        assert!(!requires_orientation(ProductType::ThreeLeafSlidingWindow));
        assert!(!requires_orientation(ProductType::PivotDoor));
        assert_eq!(fixed_orientation(ProductType::PivotDoor), ProductOrientation::Reversible);
        assert_eq!(fixed_orientation(ProductType::FixedWindow), ProductOrientation::None);
    }

    #[test]
    fn wide_panels_infer_right_and_tall_panels_infer_left() {
        let policy = PricingPolicy::default();

        let wide = Dimension::new(2000, 1000).expect("wide");
        assert_eq!(detect_orientation(wide, &policy), DetectedOrientation::Right);

        let tall = Dimension::new(800, 2100).expect("tall");
        assert_eq!(detect_orientation(tall, &policy), DetectedOrientation::Left);
    }

    #[test]
    fn near_square_shapes_are_ambiguous() {
        let policy = PricingPolicy::default();

        let square = Dimension::new(1200, 1200).expect("square");
        assert_eq!(detect_orientation(square, &policy), DetectedOrientation::Ambiguous);

        // 1.1 ratio sits below the default 1.2 threshold.
        let slightly_wide = Dimension::new(1100, 1000).expect("slightly wide");
        assert_eq!(detect_orientation(slightly_wide, &policy), DetectedOrientation::Ambiguous);

        // Exactly at the threshold counts as inferred.
        let at_threshold = Dimension::new(1200, 1000).expect("at threshold");
        assert_eq!(detect_orientation(at_threshold, &policy), DetectedOrientation::Right);
    }
}
