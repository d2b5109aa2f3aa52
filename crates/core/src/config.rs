//! Pricing policy configuration. Compiled-in defaults may be patched by an
//! `esquadria.toml` file and `ESQUADRIA_*` environment variables, in that
//! precedence order; the merged policy is validated before use. A policy
//! that fails validation is a startup error, never a per-request one.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::product::PaymentMethod;

/// One quantity discount tier: the percentage applies to any quantity of at
/// least `min_quantity`, until the next tier takes over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityTier {
    pub min_quantity: u32,
    pub discount_pct: Decimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDiscounts {
    pub pix_pct: Decimal,
    pub credit_card_pct: Decimal,
    pub boleto_pct: Decimal,
}

impl PaymentDiscounts {
    pub fn for_method(&self, method: PaymentMethod) -> Decimal {
        match method {
            PaymentMethod::Pix => self.pix_pct,
            PaymentMethod::CreditCard => self.credit_card_pct,
            PaymentMethod::Boleto => self.boleto_pct,
        }
    }
}

/// All tunable policy constants of the resolution engine. Everything the
/// matcher, discount calculator, and orientation resolver treat as "the
/// rule" lives here so operators adjust it without a rebuild.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Ascending tiers; the first tier must start at quantity 1.
    pub quantity_tiers: Vec<QuantityTier>,
    pub payment_discounts: PaymentDiscounts,
    /// Final unit price never drops below this percentage of the base price.
    pub price_floor_pct: Decimal,
    /// Per-axis slack allowed when falling back to a variant smaller than
    /// the request (request axis at most this % above the variant axis).
    pub oversize_tolerance_pct: Decimal,
    /// Aspect-ratio threshold for inferring an opening side from dimensions.
    pub orientation_aspect_ratio: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            quantity_tiers: vec![
                QuantityTier { min_quantity: 1, discount_pct: Decimal::ZERO },
                QuantityTier { min_quantity: 5, discount_pct: Decimal::new(300, 2) },
                QuantityTier { min_quantity: 10, discount_pct: Decimal::new(500, 2) },
                QuantityTier { min_quantity: 20, discount_pct: Decimal::new(800, 2) },
            ],
            payment_discounts: PaymentDiscounts {
                pix_pct: Decimal::new(500, 2),
                credit_card_pct: Decimal::ZERO,
                boleto_pct: Decimal::ZERO,
            },
            price_floor_pct: Decimal::new(5000, 2),
            oversize_tolerance_pct: Decimal::new(1000, 2),
            orientation_aspect_ratio: Decimal::new(120, 2),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PolicyLoadOptions {
    pub policy_path: Option<PathBuf>,
    pub require_file: bool,
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("could not read policy file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse policy file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required policy file was not found: `{0}`")]
    MissingPolicyFile(PathBuf),
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("policy validation failed: {0}")]
    Validation(String),
}

impl PricingPolicy {
    pub fn load(options: PolicyLoadOptions) -> Result<Self, PolicyError> {
        let mut policy = Self::default();
        let maybe_path = resolve_policy_path(options.policy_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            policy.apply_patch(patch);
        } else if options.require_file {
            let expected = options.policy_path.unwrap_or_else(|| PathBuf::from("esquadria.toml"));
            return Err(PolicyError::MissingPolicyFile(expected));
        }

        policy.apply_env_overrides()?;
        policy.validate()?;

        Ok(policy)
    }

    fn apply_patch(&mut self, patch: PolicyPatch) {
        if let Some(discounts) = patch.discounts {
            if let Some(tiers) = discounts.quantity_tiers {
                self.quantity_tiers = tiers;
            }
            if let Some(pix_pct) = discounts.pix_pct {
                self.payment_discounts.pix_pct = pix_pct;
            }
            if let Some(credit_card_pct) = discounts.credit_card_pct {
                self.payment_discounts.credit_card_pct = credit_card_pct;
            }
            if let Some(boleto_pct) = discounts.boleto_pct {
                self.payment_discounts.boleto_pct = boleto_pct;
            }
            if let Some(price_floor_pct) = discounts.price_floor_pct {
                self.price_floor_pct = price_floor_pct;
            }
        }

        if let Some(matcher) = patch.matcher {
            if let Some(oversize_tolerance_pct) = matcher.oversize_tolerance_pct {
                self.oversize_tolerance_pct = oversize_tolerance_pct;
            }
        }

        if let Some(orientation) = patch.orientation {
            if let Some(aspect_ratio) = orientation.aspect_ratio {
                self.orientation_aspect_ratio = aspect_ratio;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), PolicyError> {
        if let Some(value) = read_env("ESQUADRIA_PIX_DISCOUNT_PCT") {
            self.payment_discounts.pix_pct = parse_decimal("ESQUADRIA_PIX_DISCOUNT_PCT", &value)?;
        }
        if let Some(value) = read_env("ESQUADRIA_PRICE_FLOOR_PCT") {
            self.price_floor_pct = parse_decimal("ESQUADRIA_PRICE_FLOOR_PCT", &value)?;
        }
        if let Some(value) = read_env("ESQUADRIA_OVERSIZE_TOLERANCE_PCT") {
            self.oversize_tolerance_pct =
                parse_decimal("ESQUADRIA_OVERSIZE_TOLERANCE_PCT", &value)?;
        }
        if let Some(value) = read_env("ESQUADRIA_ORIENTATION_ASPECT_RATIO") {
            self.orientation_aspect_ratio =
                parse_decimal("ESQUADRIA_ORIENTATION_ASPECT_RATIO", &value)?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.quantity_tiers.is_empty() {
            return Err(PolicyError::Validation(
                "discounts.quantity_tiers must not be empty".to_string(),
            ));
        }
        if self.quantity_tiers[0].min_quantity != 1 {
            return Err(PolicyError::Validation(
                "the first quantity tier must start at quantity 1".to_string(),
            ));
        }

        let hundred = Decimal::new(10000, 2);
        let mut previous: Option<QuantityTier> = None;
        for tier in &self.quantity_tiers {
            if tier.discount_pct < Decimal::ZERO || tier.discount_pct > hundred {
                return Err(PolicyError::Validation(format!(
                    "tier discount_pct must be in range 0..=100, got {}",
                    tier.discount_pct
                )));
            }
            if let Some(previous) = previous {
                if tier.min_quantity <= previous.min_quantity {
                    return Err(PolicyError::Validation(
                        "quantity tiers must have strictly increasing min_quantity".to_string(),
                    ));
                }
                if tier.discount_pct < previous.discount_pct {
                    return Err(PolicyError::Validation(
                        "tier discounts must be non-decreasing so unit price never rises with quantity"
                            .to_string(),
                    ));
                }
            }
            previous = Some(*tier);
        }

        for (label, pct) in [
            ("discounts.pix_pct", self.payment_discounts.pix_pct),
            ("discounts.credit_card_pct", self.payment_discounts.credit_card_pct),
            ("discounts.boleto_pct", self.payment_discounts.boleto_pct),
        ] {
            if pct < Decimal::ZERO || pct > hundred {
                return Err(PolicyError::Validation(format!(
                    "{label} must be in range 0..=100, got {pct}"
                )));
            }
        }

        if self.price_floor_pct < Decimal::ONE || self.price_floor_pct > hundred {
            return Err(PolicyError::Validation(
                "discounts.price_floor_pct must be in range 1..=100".to_string(),
            ));
        }

        if self.oversize_tolerance_pct < Decimal::ZERO
            || self.oversize_tolerance_pct > Decimal::new(5000, 2)
        {
            return Err(PolicyError::Validation(
                "matcher.oversize_tolerance_pct must be in range 0..=50".to_string(),
            ));
        }

        if self.orientation_aspect_ratio <= Decimal::ONE {
            return Err(PolicyError::Validation(
                "orientation.aspect_ratio must be greater than 1".to_string(),
            ));
        }

        Ok(())
    }
}

fn resolve_policy_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("esquadria.toml"), PathBuf::from("config/esquadria.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<PolicyPatch, PolicyError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| PolicyError::ReadFile { path: path.to_path_buf(), source })?;

    toml::from_str::<PolicyPatch>(&raw)
        .map_err(|source| PolicyError::ParseFile { path: path.to_path_buf(), source })
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_decimal(key: &str, value: &str) -> Result<Decimal, PolicyError> {
    value.trim().parse::<Decimal>().map_err(|_| PolicyError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct PolicyPatch {
    discounts: Option<DiscountsPatch>,
    matcher: Option<MatcherPatch>,
    orientation: Option<OrientationPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct DiscountsPatch {
    quantity_tiers: Option<Vec<QuantityTier>>,
    pix_pct: Option<Decimal>,
    credit_card_pct: Option<Decimal>,
    boleto_pct: Option<Decimal>,
    price_floor_pct: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
struct MatcherPatch {
    oversize_tolerance_pct: Option<Decimal>,
}

#[derive(Debug, Default, Deserialize)]
struct OrientationPatch {
    aspect_ratio: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::sync::{Mutex, OnceLock};

    use rust_decimal::Decimal;
    use tempfile::TempDir;

    use super::{PolicyError, PolicyLoadOptions, PricingPolicy, QuantityTier};
    use crate::domain::product::PaymentMethod;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn clear_vars(vars: &[&str]) {
        for var in vars {
            env::remove_var(var);
        }
    }

    #[test]
    fn default_policy_validates() {
        let policy = PricingPolicy::default();
        policy.validate().expect("defaults are internally consistent");
        assert_eq!(
            policy.payment_discounts.for_method(PaymentMethod::Pix),
            Decimal::new(500, 2)
        );
        assert_eq!(
            policy.payment_discounts.for_method(PaymentMethod::Boleto),
            Decimal::ZERO
        );
    }

    #[test]
    fn file_patch_overrides_defaults() {
        let _guard = env_lock().lock().expect("env lock");
        clear_vars(&["ESQUADRIA_PIX_DISCOUNT_PCT"]);

        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("esquadria.toml");
        fs::write(
            &path,
            r#"
[discounts]
pix_pct = 7.5
price_floor_pct = 60

[matcher]
oversize_tolerance_pct = 5
"#,
        )
        .expect("write policy file");

        let policy = PricingPolicy::load(PolicyLoadOptions {
            policy_path: Some(path),
            ..PolicyLoadOptions::default()
        })
        .expect("policy loads");

        assert_eq!(policy.payment_discounts.pix_pct, Decimal::new(75, 1));
        assert_eq!(policy.price_floor_pct, Decimal::new(60, 0));
        assert_eq!(policy.oversize_tolerance_pct, Decimal::new(5, 0));
        // Untouched sections keep their defaults.
        assert_eq!(policy.quantity_tiers.len(), 4);
    }

    #[test]
    fn env_override_wins_over_file() {
        let _guard = env_lock().lock().expect("env lock");
        env::set_var("ESQUADRIA_PIX_DISCOUNT_PCT", "2.5");

        let result = (|| {
            let dir = TempDir::new().expect("tempdir");
            let path = dir.path().join("esquadria.toml");
            fs::write(&path, "[discounts]\npix_pct = 9\n").expect("write policy file");

            PricingPolicy::load(PolicyLoadOptions {
                policy_path: Some(path),
                ..PolicyLoadOptions::default()
            })
        })();

        clear_vars(&["ESQUADRIA_PIX_DISCOUNT_PCT"]);
        let policy = result.expect("policy loads");
        assert_eq!(policy.payment_discounts.pix_pct, Decimal::new(25, 1));
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let error = PricingPolicy::load(PolicyLoadOptions {
            policy_path: Some("does-not-exist.toml".into()),
            require_file: true,
        })
        .expect_err("missing file should fail");
        assert!(matches!(error, PolicyError::MissingPolicyFile(_)));
    }

    #[test]
    fn unsorted_tiers_are_rejected() {
        let mut policy = PricingPolicy::default();
        policy.quantity_tiers = vec![
            QuantityTier { min_quantity: 1, discount_pct: Decimal::ZERO },
            QuantityTier { min_quantity: 10, discount_pct: Decimal::new(500, 2) },
            QuantityTier { min_quantity: 5, discount_pct: Decimal::new(300, 2) },
        ];
        assert!(matches!(policy.validate(), Err(PolicyError::Validation(_))));
    }

    #[test]
    fn decreasing_tier_discounts_are_rejected() {
        let mut policy = PricingPolicy::default();
        policy.quantity_tiers = vec![
            QuantityTier { min_quantity: 1, discount_pct: Decimal::new(500, 2) },
            QuantityTier { min_quantity: 5, discount_pct: Decimal::new(300, 2) },
        ];
        assert!(matches!(policy.validate(), Err(PolicyError::Validation(_))));
    }

    #[test]
    fn tier_table_must_start_at_one() {
        let mut policy = PricingPolicy::default();
        policy.quantity_tiers =
            vec![QuantityTier { min_quantity: 2, discount_pct: Decimal::ZERO }];
        assert!(matches!(policy.validate(), Err(PolicyError::Validation(_))));
    }

    #[test]
    fn aspect_ratio_must_exceed_one() {
        let mut policy = PricingPolicy::default();
        policy.orientation_aspect_ratio = Decimal::ONE;
        assert!(matches!(policy.validate(), Err(PolicyError::Validation(_))));
    }
}
