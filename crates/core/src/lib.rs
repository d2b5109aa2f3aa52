pub mod catalog;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;

pub use catalog::{
    kit_for, CatalogReport, CatalogStore, KitArremate, LineSummary, PriceTable, PriceVariant,
    KITS,
};
pub use config::{
    PaymentDiscounts, PolicyError, PolicyLoadOptions, PricingPolicy, QuantityTier,
};
pub use domain::product::{
    Dimension, GlassType, PaymentMethod, ProductColor, ProductOrientation, ProductType,
    SalesChannel,
};
pub use domain::quote::{QuoteRequest, QuoteResult, QuoteWarning};
pub use engine::format::format_product_name;
pub use engine::orientation::{detect_orientation, requires_orientation, DetectedOrientation};
pub use engine::PriceResolver;
pub use errors::{CatalogError, PriceError};
