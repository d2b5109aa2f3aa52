use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::PriceError;

/// Product lines of the aluminum catalog. Each variant selects its own
/// price tables and business rules (orientation requirement, kit
/// compatibility), so handling must stay exhaustive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductType {
    TwoLeafSlidingWindow,
    ThreeLeafSlidingWindow,
    FourLeafSlidingWindow,
    ScreenedSlidingWindow,
    LouveredSlidingWindow,
    SingleCasementWindow,
    TwoLeafCasementWindow,
    MaximAirWindow,
    DoubleMaximAirWindow,
    TiltWindow,
    BathroomTiltWindow,
    FixedWindow,
    Transom,
    TwoLeafSlidingDoor,
    ThreeLeafSlidingDoor,
    FourLeafSlidingDoor,
    BalconyDoor,
    HingedDoor,
    PanelHingedDoor,
    ServiceDoor,
    PivotDoor,
    FoldingDoor,
}

impl ProductType {
    pub const ALL: &'static [ProductType] = &[
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
        ProductType::TwoLeafSlidingDoor,
        ProductType::ThreeLeafSlidingDoor,
        ProductType::FourLeafSlidingDoor,
        ProductType::BalconyDoor,
        ProductType::HingedDoor,
        ProductType::PanelHingedDoor,
        ProductType::ServiceDoor,
        ProductType::PivotDoor,
        ProductType::FoldingDoor,
    ];

    /// Customer-facing label, in the catalog's commercial language.
    pub fn label(self) -> &'static str {
        match self {
            Self::TwoLeafSlidingWindow => "Janela de Correr 2 Folhas",
            Self::ThreeLeafSlidingWindow => "Janela de Correr 3 Folhas",
            Self::FourLeafSlidingWindow => "Janela de Correr 4 Folhas",
            Self::ScreenedSlidingWindow => "Janela de Correr 2 Folhas com Tela",
            Self::LouveredSlidingWindow => "Janela de Correr 3 Folhas com Veneziana",
            Self::SingleCasementWindow => "Janela de Abrir 1 Folha",
            Self::TwoLeafCasementWindow => "Janela de Abrir 2 Folhas",
            Self::MaximAirWindow => "Janela Maxim-Ar",
            Self::DoubleMaximAirWindow => "Janela Maxim-Ar Duplo",
            Self::TiltWindow => "Janela Basculante",
            Self::BathroomTiltWindow => "Vitrô de Banheiro",
            Self::FixedWindow => "Janela Fixa",
            Self::Transom => "Bandeira Fixa",
            Self::TwoLeafSlidingDoor => "Porta de Correr 2 Folhas",
            Self::ThreeLeafSlidingDoor => "Porta de Correr 3 Folhas",
            Self::FourLeafSlidingDoor => "Porta de Correr 4 Folhas",
            Self::BalconyDoor => "Porta Balcão",
            Self::HingedDoor => "Porta de Giro",
            Self::PanelHingedDoor => "Porta Lambril",
            Self::ServiceDoor => "Porta de Serviço",
            Self::PivotDoor => "Porta Pivotante",
            Self::FoldingDoor => "Porta Camarão",
        }
    }
}

impl std::str::FromStr for ProductType {
    type Err = PriceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "two_leaf_sliding_window" => Ok(Self::TwoLeafSlidingWindow),
            "three_leaf_sliding_window" => Ok(Self::ThreeLeafSlidingWindow),
            "four_leaf_sliding_window" => Ok(Self::FourLeafSlidingWindow),
            "screened_sliding_window" => Ok(Self::ScreenedSlidingWindow),
            "louvered_sliding_window" => Ok(Self::LouveredSlidingWindow),
            "single_casement_window" => Ok(Self::SingleCasementWindow),
            "two_leaf_casement_window" => Ok(Self::TwoLeafCasementWindow),
            "maxim_air_window" => Ok(Self::MaximAirWindow),
            "double_maxim_air_window" => Ok(Self::DoubleMaximAirWindow),
            "tilt_window" => Ok(Self::TiltWindow),
            "bathroom_tilt_window" => Ok(Self::BathroomTiltWindow),
            "fixed_window" => Ok(Self::FixedWindow),
            "transom" => Ok(Self::Transom),
            "two_leaf_sliding_door" => Ok(Self::TwoLeafSlidingDoor),
            "three_leaf_sliding_door" => Ok(Self::ThreeLeafSlidingDoor),
            "four_leaf_sliding_door" => Ok(Self::FourLeafSlidingDoor),
            "balcony_door" => Ok(Self::BalconyDoor),
            "hinged_door" => Ok(Self::HingedDoor),
            "panel_hinged_door" => Ok(Self::PanelHingedDoor),
            "service_door" => Ok(Self::ServiceDoor),
            "pivot_door" => Ok(Self::PivotDoor),
            "folding_door" => Ok(Self::FoldingDoor),
            other => {
                Err(PriceError::InvalidInput { reason: format!("unknown product type `{other}`") })
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductColor {
    White,
    Black,
    Bronze,
    NaturalAnodized,
}

impl ProductColor {
    pub const ALL: &'static [ProductColor] = &[
        ProductColor::White,
        ProductColor::Black,
        ProductColor::Bronze,
        ProductColor::NaturalAnodized,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::White => "Branco",
            Self::Black => "Preto",
            Self::Bronze => "Bronze",
            Self::NaturalAnodized => "Anodizado Natural",
        }
    }
}

impl std::str::FromStr for ProductColor {
    type Err = PriceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "white" | "branco" => Ok(Self::White),
            "black" | "preto" => Ok(Self::Black),
            "bronze" => Ok(Self::Bronze),
            "natural_anodized" | "anodizado" => Ok(Self::NaturalAnodized),
            other => Err(PriceError::InvalidInput { reason: format!("unknown color `{other}`") }),
        }
    }
}

/// Opening side of the dominant leaf. `None` marks lines where the side is
/// not a selector; `Reversible` marks hardware that installs either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductOrientation {
    Left,
    Right,
    Reversible,
    None,
}

impl ProductOrientation {
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Left => Some("Lado Esquerdo"),
            Self::Right => Some("Lado Direito"),
            Self::Reversible => Some("Reversível"),
            Self::None => None,
        }
    }
}

impl std::str::FromStr for ProductOrientation {
    type Err = PriceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "left" | "esquerda" => Ok(Self::Left),
            "right" | "direita" => Ok(Self::Right),
            "reversible" => Ok(Self::Reversible),
            "none" => Ok(Self::None),
            other => {
                Err(PriceError::InvalidInput { reason: format!("unknown orientation `{other}`") })
            }
        }
    }
}

/// Glass finish. Cosmetic only: it never participates in table lookup or
/// price computation and is carried through solely for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlassType {
    Clear,
    Frosted,
    Green,
    Smoked,
}

impl GlassType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Vidro Liso",
            Self::Frosted => "Vidro Mini Boreal",
            Self::Green => "Vidro Verde",
            Self::Smoked => "Vidro Fumê",
        }
    }
}

impl std::str::FromStr for GlassType {
    type Err = PriceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "clear" | "liso" => Ok(Self::Clear),
            "frosted" | "mini_boreal" => Ok(Self::Frosted),
            "green" | "verde" => Ok(Self::Green),
            "smoked" | "fume" => Ok(Self::Smoked),
            other => {
                Err(PriceError::InvalidInput { reason: format!("unknown glass type `{other}`") })
            }
        }
    }
}

/// Sales surface a variant may be offered on. Availability is decided per
/// variant by the catalog, never inferred by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesChannel {
    DirectStore,
    Marketplace,
    ChatAgent,
}

impl SalesChannel {
    pub fn label(self) -> &'static str {
        match self {
            Self::DirectStore => "loja",
            Self::Marketplace => "marketplace",
            Self::ChatAgent => "atendimento",
        }
    }
}

impl std::str::FromStr for SalesChannel {
    type Err = PriceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "direct_store" | "direct" | "loja" => Ok(Self::DirectStore),
            "marketplace" => Ok(Self::Marketplace),
            "chat_agent" | "chat" => Ok(Self::ChatAgent),
            other => Err(PriceError::InvalidInput { reason: format!("unknown channel `{other}`") }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Pix,
    CreditCard,
    Boleto,
}

impl std::str::FromStr for PaymentMethod {
    type Err = PriceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pix" => Ok(Self::Pix),
            "credit_card" | "card" | "cartao" => Ok(Self::CreditCard),
            "boleto" => Ok(Self::Boleto),
            other => Err(PriceError::InvalidInput {
                reason: format!("unknown payment method `{other}`"),
            }),
        }
    }
}

/// Width and height in millimetres. Construction rejects zero axes, so a
/// held `Dimension` is always strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Dimension {
    width_mm: u32,
    height_mm: u32,
}

impl Dimension {
    pub fn new(width_mm: u32, height_mm: u32) -> Result<Self, PriceError> {
        if width_mm == 0 || height_mm == 0 {
            return Err(PriceError::InvalidInput {
                reason: format!("dimensions must be positive, got {width_mm}x{height_mm}"),
            });
        }

        Ok(Self { width_mm, height_mm })
    }

    pub fn width_mm(self) -> u32 {
        self.width_mm
    }

    pub fn height_mm(self) -> u32 {
        self.height_mm
    }

    pub fn area_mm2(self) -> u64 {
        u64::from(self.width_mm) * u64::from(self.height_mm)
    }

    /// True when this size covers `other` in both axes.
    pub fn covers(self, other: Dimension) -> bool {
        self.width_mm >= other.width_mm && self.height_mm >= other.height_mm
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}mm", self.width_mm, self.height_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::{Dimension, ProductColor, ProductType, SalesChannel};
    use crate::errors::PriceError;

    #[test]
    fn dimension_rejects_zero_axes() {
        assert!(matches!(Dimension::new(0, 1000), Err(PriceError::InvalidInput { .. })));
        assert!(matches!(Dimension::new(1200, 0), Err(PriceError::InvalidInput { .. })));
        let dimension = Dimension::new(1200, 1000).expect("positive axes");
        assert_eq!(dimension.area_mm2(), 1_200_000);
        assert_eq!(dimension.to_string(), "1200x1000mm");
    }

    #[test]
    fn dimension_covers_requires_both_axes() {
        let requested = Dimension::new(1200, 1000).expect("requested");
        assert!(Dimension::new(1200, 1000).expect("equal").covers(requested));
        assert!(Dimension::new(1500, 1200).expect("larger").covers(requested));
        assert!(!Dimension::new(1500, 900).expect("short height").covers(requested));
    }

    #[test]
    fn enum_parsing_accepts_catalog_aliases() {
        assert_eq!("loja".parse::<SalesChannel>().expect("alias"), SalesChannel::DirectStore);
        assert_eq!("branco".parse::<ProductColor>().expect("alias"), ProductColor::White);
        assert!("garagem".parse::<ProductType>().is_err());
    }

    #[test]
    fn every_product_type_is_listed_once() {
        assert_eq!(ProductType::ALL.len(), 22);
        let mut seen = std::collections::HashSet::new();
        for product_type in ProductType::ALL {
            assert!(seen.insert(product_type), "duplicate in ALL: {product_type:?}");
        }
    }
}
