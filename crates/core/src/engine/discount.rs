//! Discount stacking. Quantity tier first, payment method on top of the
//! tiered price (multiplicative), clamped to the policy floor and rounded
//! to centavos.

use rust_decimal::Decimal;

use crate::config::PricingPolicy;
use crate::domain::product::PaymentMethod;

/// Tier percentage for `quantity`: the last tier whose `min_quantity` the
/// quantity reaches. The tier table is validated ascending, so this is the
/// best applicable tier.
pub fn quantity_discount_pct(policy: &PricingPolicy, quantity: u32) -> Decimal {
    policy
        .quantity_tiers
        .iter()
        .rev()
        .find(|tier| quantity >= tier.min_quantity)
        .map(|tier| tier.discount_pct)
        .unwrap_or(Decimal::ZERO)
}

/// Final unit price for one variant: base price through the quantity tier,
/// then the payment-method discount, never below the configured floor.
pub fn apply_discount(
    base_price: Decimal,
    quantity: u32,
    payment_method: PaymentMethod,
    policy: &PricingPolicy,
) -> Decimal {
    let hundred = Decimal::ONE_HUNDRED;

    let tier_pct = quantity_discount_pct(policy, quantity);
    let tiered = base_price * (Decimal::ONE - tier_pct / hundred);

    let payment_pct = policy.payment_discounts.for_method(payment_method);
    let discounted = tiered * (Decimal::ONE - payment_pct / hundred);

    let floor = base_price * policy.price_floor_pct / hundred;
    discounted.max(floor).round_dp(2)
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{apply_discount, quantity_discount_pct};
    use crate::config::{PricingPolicy, QuantityTier};
    use crate::domain::product::PaymentMethod;

    fn price(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn tier_lookup_picks_the_reached_tier() {
        let policy = PricingPolicy::default();
        assert_eq!(quantity_discount_pct(&policy, 1), Decimal::ZERO);
        assert_eq!(quantity_discount_pct(&policy, 4), Decimal::ZERO);
        assert_eq!(quantity_discount_pct(&policy, 5), Decimal::new(300, 2));
        assert_eq!(quantity_discount_pct(&policy, 19), Decimal::new(500, 2));
        assert_eq!(quantity_discount_pct(&policy, 250), Decimal::new(800, 2));
    }

    #[test]
    fn card_single_unit_pays_the_base_price() {
        let policy = PricingPolicy::default();
        assert_eq!(apply_discount(price(90_000), 1, PaymentMethod::CreditCard, &policy), price(90_000));
    }

    #[test]
    fn quantity_and_pix_stack_multiplicatively() {
        let policy = PricingPolicy::default();
        // 900.00 at 10 units: 5% tier -> 855.00; pix takes 5% of that.
        assert_eq!(apply_discount(price(90_000), 10, PaymentMethod::CreditCard, &policy), price(85_500));
        assert_eq!(apply_discount(price(90_000), 10, PaymentMethod::Pix, &policy), price(81_225));
    }

    #[test]
    fn unit_price_is_monotone_across_quantities() {
        let policy = PricingPolicy::default();
        let mut previous = Decimal::MAX;
        for quantity in 1..=60 {
            let unit = apply_discount(price(109_500), quantity, PaymentMethod::Boleto, &policy);
            assert!(unit <= previous, "unit price rose at quantity {quantity}");
            previous = unit;
        }
    }

    #[test]
    fn combined_discounts_never_break_the_floor() {
        let mut policy = PricingPolicy::default();
        policy.quantity_tiers = vec![
            QuantityTier { min_quantity: 1, discount_pct: Decimal::ZERO },
            QuantityTier { min_quantity: 10, discount_pct: Decimal::new(9000, 2) },
        ];
        policy.payment_discounts.pix_pct = Decimal::new(9000, 2);
        // 90% twice would leave 1% of base; the 50% floor holds instead.
        assert_eq!(apply_discount(price(80_000), 10, PaymentMethod::Pix, &policy), price(40_000));
    }

    #[test]
    fn result_is_rounded_to_centavos() {
        let policy = PricingPolicy::default();
        // 333.33 * 0.95 = 316.6635 -> 316.66
        assert_eq!(apply_discount(price(33_333), 1, PaymentMethod::Pix, &policy), price(31_666));
    }
}
