//! Embedded price catalog rows.
//!
//! @generated from the 2026-03 product spreadsheet export (planilha de
//! precos, linha suprema). Regenerate with the offline exporter; do not
//! edit rows by hand.

use crate::catalog::CatalogRow;
use crate::domain::product::{
    ProductColor as C, ProductOrientation as O, ProductType as T, SalesChannel as S,
};

/// Spreadsheet export tag this dataset was generated from.
pub const DATASET_VERSION: &str = "2026-03";

const ALL_CHANNELS: &[S] = &[S::DirectStore, S::Marketplace, S::ChatAgent];
const STORE_CHAT: &[S] = &[S::DirectStore, S::ChatAgent];
const STORE_ONLY: &[S] = &[S::DirectStore];

#[rustfmt::skip]
pub(crate) const ROWS: &[CatalogRow] = &[
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Left, width_mm: 1000, height_mm: 1000, price_cents: 77000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Left, width_mm: 1000, height_mm: 1200, price_cents: 90000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Left, width_mm: 1000, height_mm: 1400, price_cents: 103000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Left, width_mm: 1200, height_mm: 1000, price_cents: 90000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Left, width_mm: 1200, height_mm: 1200, price_cents: 105600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Left, width_mm: 1200, height_mm: 1400, price_cents: 121200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Left, width_mm: 1500, height_mm: 1000, price_cents: 109500, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Left, width_mm: 1500, height_mm: 1200, price_cents: 129000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Left, width_mm: 1500, height_mm: 1400, price_cents: 148500, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Left, width_mm: 2000, height_mm: 1000, price_cents: 142000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Left, width_mm: 2000, height_mm: 1200, price_cents: 168000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Left, width_mm: 2000, height_mm: 1400, price_cents: 194000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Right, width_mm: 1000, height_mm: 1000, price_cents: 77000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Right, width_mm: 1000, height_mm: 1200, price_cents: 90000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Right, width_mm: 1000, height_mm: 1400, price_cents: 103000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Right, width_mm: 1200, height_mm: 1000, price_cents: 90000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Right, width_mm: 1200, height_mm: 1200, price_cents: 105600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Right, width_mm: 1200, height_mm: 1400, price_cents: 121200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Right, width_mm: 1500, height_mm: 1000, price_cents: 109500, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Right, width_mm: 1500, height_mm: 1200, price_cents: 129000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Right, width_mm: 1500, height_mm: 1400, price_cents: 148500, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Right, width_mm: 2000, height_mm: 1000, price_cents: 142000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Right, width_mm: 2000, height_mm: 1200, price_cents: 168000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::White, orientation: O::Right, width_mm: 2000, height_mm: 1400, price_cents: 194000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 1000, height_mm: 1000, price_cents: 81620, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 1000, height_mm: 1200, price_cents: 95400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 1000, height_mm: 1400, price_cents: 109180, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 1200, height_mm: 1000, price_cents: 95400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 1200, height_mm: 1200, price_cents: 111936, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 1200, height_mm: 1400, price_cents: 128472, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 1500, height_mm: 1000, price_cents: 116070, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 1500, height_mm: 1200, price_cents: 136740, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 1500, height_mm: 1400, price_cents: 157410, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 2000, height_mm: 1000, price_cents: 150520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 2000, height_mm: 1200, price_cents: 178080, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 2000, height_mm: 1400, price_cents: 205640, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 1000, height_mm: 1000, price_cents: 81620, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 1000, height_mm: 1200, price_cents: 95400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 1000, height_mm: 1400, price_cents: 109180, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 1200, height_mm: 1000, price_cents: 95400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 1200, height_mm: 1200, price_cents: 111936, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 1200, height_mm: 1400, price_cents: 128472, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 1500, height_mm: 1000, price_cents: 116070, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 1500, height_mm: 1200, price_cents: 136740, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 1500, height_mm: 1400, price_cents: 157410, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 2000, height_mm: 1000, price_cents: 150520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 2000, height_mm: 1200, price_cents: 178080, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 2000, height_mm: 1400, price_cents: 205640, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 1000, height_mm: 1000, price_cents: 84700, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 1000, height_mm: 1200, price_cents: 99000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 1000, height_mm: 1400, price_cents: 113300, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 1200, height_mm: 1000, price_cents: 99000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 1200, height_mm: 1200, price_cents: 116160, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 1200, height_mm: 1400, price_cents: 133320, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 1500, height_mm: 1000, price_cents: 120450, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 1500, height_mm: 1200, price_cents: 141900, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 1500, height_mm: 1400, price_cents: 163350, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 2000, height_mm: 1000, price_cents: 156200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 2000, height_mm: 1200, price_cents: 184800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 2000, height_mm: 1400, price_cents: 213400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 1000, height_mm: 1000, price_cents: 84700, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 1000, height_mm: 1200, price_cents: 99000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 1000, height_mm: 1400, price_cents: 113300, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 1200, height_mm: 1000, price_cents: 99000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 1200, height_mm: 1200, price_cents: 116160, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 1200, height_mm: 1400, price_cents: 133320, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 1500, height_mm: 1000, price_cents: 120450, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 1500, height_mm: 1200, price_cents: 141900, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 1500, height_mm: 1400, price_cents: 163350, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 2000, height_mm: 1000, price_cents: 156200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 2000, height_mm: 1200, price_cents: 184800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 2000, height_mm: 1400, price_cents: 213400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1000, height_mm: 1000, price_cents: 90860, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1000, height_mm: 1200, price_cents: 106200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1000, height_mm: 1400, price_cents: 121540, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1200, height_mm: 1000, price_cents: 106200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1200, height_mm: 1200, price_cents: 124608, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1200, height_mm: 1400, price_cents: 143016, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1500, height_mm: 1000, price_cents: 129210, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1500, height_mm: 1200, price_cents: 152220, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1500, height_mm: 1400, price_cents: 175230, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 2000, height_mm: 1000, price_cents: 167560, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 2000, height_mm: 1200, price_cents: 198240, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 2000, height_mm: 1400, price_cents: 228920, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1000, height_mm: 1000, price_cents: 90860, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1000, height_mm: 1200, price_cents: 106200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1000, height_mm: 1400, price_cents: 121540, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1200, height_mm: 1000, price_cents: 106200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1200, height_mm: 1200, price_cents: 124608, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1200, height_mm: 1400, price_cents: 143016, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1500, height_mm: 1000, price_cents: 129210, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1500, height_mm: 1200, price_cents: 152220, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1500, height_mm: 1400, price_cents: 175230, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 2000, height_mm: 1000, price_cents: 167560, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 2000, height_mm: 1200, price_cents: 198240, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 2000, height_mm: 1400, price_cents: 228920, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 119000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 140000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 1400, price_cents: 161000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 154000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 182000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 1400, price_cents: 210000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 2500, height_mm: 1000, price_cents: 189000, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 2500, height_mm: 1200, price_cents: 224000, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 2500, height_mm: 1400, price_cents: 259000, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 3000, height_mm: 1000, price_cents: 224000, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 3000, height_mm: 1200, price_cents: 266000, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 3000, height_mm: 1400, price_cents: 308000, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 126140, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 148400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 1400, price_cents: 170660, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 163240, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 192920, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 1400, price_cents: 222600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2500, height_mm: 1000, price_cents: 200340, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2500, height_mm: 1200, price_cents: 237440, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2500, height_mm: 1400, price_cents: 274540, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 3000, height_mm: 1000, price_cents: 237440, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 3000, height_mm: 1200, price_cents: 281960, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 3000, height_mm: 1400, price_cents: 326480, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 130900, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 154000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 1400, price_cents: 177100, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 169400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 200200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 1400, price_cents: 231000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2500, height_mm: 1000, price_cents: 207900, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2500, height_mm: 1200, price_cents: 246400, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2500, height_mm: 1400, price_cents: 284900, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 3000, height_mm: 1000, price_cents: 246400, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 3000, height_mm: 1200, price_cents: 292600, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 3000, height_mm: 1400, price_cents: 338800, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 140420, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 165200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 1400, price_cents: 189980, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 181720, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 214760, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 1400, price_cents: 247800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2500, height_mm: 1000, price_cents: 223020, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2500, height_mm: 1200, price_cents: 264320, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2500, height_mm: 1400, price_cents: 305620, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 3000, height_mm: 1000, price_cents: 264320, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 3000, height_mm: 1200, price_cents: 313880, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 3000, height_mm: 1400, price_cents: 363440, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 160000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 188800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 1400, price_cents: 217600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 2500, height_mm: 1000, price_cents: 196000, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 2500, height_mm: 1200, price_cents: 232000, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 2500, height_mm: 1400, price_cents: 268000, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 3000, height_mm: 1000, price_cents: 232000, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 3000, height_mm: 1200, price_cents: 275200, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::White, orientation: O::None, width_mm: 3000, height_mm: 1400, price_cents: 318400, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 169600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 200128, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 1400, price_cents: 230656, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2500, height_mm: 1000, price_cents: 207760, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2500, height_mm: 1200, price_cents: 245920, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2500, height_mm: 1400, price_cents: 284080, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 3000, height_mm: 1000, price_cents: 245920, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 3000, height_mm: 1200, price_cents: 291712, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Black, orientation: O::None, width_mm: 3000, height_mm: 1400, price_cents: 337504, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 176000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 207680, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 1400, price_cents: 239360, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2500, height_mm: 1000, price_cents: 215600, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2500, height_mm: 1200, price_cents: 255200, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2500, height_mm: 1400, price_cents: 294800, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 3000, height_mm: 1000, price_cents: 255200, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 3000, height_mm: 1200, price_cents: 302720, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 3000, height_mm: 1400, price_cents: 350240, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 188800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 222784, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 1400, price_cents: 256768, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2500, height_mm: 1000, price_cents: 231280, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2500, height_mm: 1200, price_cents: 273760, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2500, height_mm: 1400, price_cents: 316240, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 3000, height_mm: 1000, price_cents: 273760, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 3000, height_mm: 1200, price_cents: 324736, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 3000, height_mm: 1400, price_cents: 375712, channels: STORE_CHAT },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Left, width_mm: 1000, height_mm: 1000, price_cents: 92000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Left, width_mm: 1000, height_mm: 1200, price_cents: 107600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Left, width_mm: 1200, height_mm: 1000, price_cents: 107600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Left, width_mm: 1200, height_mm: 1200, price_cents: 126320, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Left, width_mm: 1500, height_mm: 1000, price_cents: 131000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Left, width_mm: 1500, height_mm: 1200, price_cents: 154400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Left, width_mm: 2000, height_mm: 1000, price_cents: 170000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Left, width_mm: 2000, height_mm: 1200, price_cents: 201200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Right, width_mm: 1000, height_mm: 1000, price_cents: 92000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Right, width_mm: 1000, height_mm: 1200, price_cents: 107600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Right, width_mm: 1200, height_mm: 1000, price_cents: 107600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Right, width_mm: 1200, height_mm: 1200, price_cents: 126320, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Right, width_mm: 1500, height_mm: 1000, price_cents: 131000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Right, width_mm: 1500, height_mm: 1200, price_cents: 154400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Right, width_mm: 2000, height_mm: 1000, price_cents: 170000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::White, orientation: O::Right, width_mm: 2000, height_mm: 1200, price_cents: 201200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 1000, height_mm: 1000, price_cents: 97520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 1000, height_mm: 1200, price_cents: 114056, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 1200, height_mm: 1000, price_cents: 114056, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 1200, height_mm: 1200, price_cents: 133899, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 1500, height_mm: 1000, price_cents: 138860, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 1500, height_mm: 1200, price_cents: 163664, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 2000, height_mm: 1000, price_cents: 180200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Left, width_mm: 2000, height_mm: 1200, price_cents: 213272, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 1000, height_mm: 1000, price_cents: 97520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 1000, height_mm: 1200, price_cents: 114056, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 1200, height_mm: 1000, price_cents: 114056, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 1200, height_mm: 1200, price_cents: 133899, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 1500, height_mm: 1000, price_cents: 138860, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 1500, height_mm: 1200, price_cents: 163664, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 2000, height_mm: 1000, price_cents: 180200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Black, orientation: O::Right, width_mm: 2000, height_mm: 1200, price_cents: 213272, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 1000, height_mm: 1000, price_cents: 101200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 1000, height_mm: 1200, price_cents: 118360, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 1200, height_mm: 1000, price_cents: 118360, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 1200, height_mm: 1200, price_cents: 138952, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 1500, height_mm: 1000, price_cents: 144100, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 1500, height_mm: 1200, price_cents: 169840, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 2000, height_mm: 1000, price_cents: 187000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Left, width_mm: 2000, height_mm: 1200, price_cents: 221320, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 1000, height_mm: 1000, price_cents: 101200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 1000, height_mm: 1200, price_cents: 118360, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 1200, height_mm: 1000, price_cents: 118360, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 1200, height_mm: 1200, price_cents: 138952, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 1500, height_mm: 1000, price_cents: 144100, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 1500, height_mm: 1200, price_cents: 169840, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 2000, height_mm: 1000, price_cents: 187000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::Bronze, orientation: O::Right, width_mm: 2000, height_mm: 1200, price_cents: 221320, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1000, height_mm: 1000, price_cents: 108560, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1000, height_mm: 1200, price_cents: 126968, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1200, height_mm: 1000, price_cents: 126968, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1200, height_mm: 1200, price_cents: 149058, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1500, height_mm: 1000, price_cents: 154580, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1500, height_mm: 1200, price_cents: 182192, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 2000, height_mm: 1000, price_cents: 200600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 2000, height_mm: 1200, price_cents: 237416, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1000, height_mm: 1000, price_cents: 108560, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1000, height_mm: 1200, price_cents: 126968, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1200, height_mm: 1000, price_cents: 126968, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1200, height_mm: 1200, price_cents: 149058, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1500, height_mm: 1000, price_cents: 154580, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1500, height_mm: 1200, price_cents: 182192, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 2000, height_mm: 1000, price_cents: 200600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ScreenedSlidingWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 2000, height_mm: 1200, price_cents: 237416, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 148000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 174400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 1400, price_cents: 200800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 192000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 227200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 1400, price_cents: 262400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::White, orientation: O::None, width_mm: 2500, height_mm: 1000, price_cents: 236000, channels: STORE_CHAT },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::White, orientation: O::None, width_mm: 2500, height_mm: 1200, price_cents: 280000, channels: STORE_CHAT },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::White, orientation: O::None, width_mm: 2500, height_mm: 1400, price_cents: 324000, channels: STORE_CHAT },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 156880, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 184864, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 1400, price_cents: 212848, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 203520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 240832, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 1400, price_cents: 278144, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2500, height_mm: 1000, price_cents: 250160, channels: STORE_CHAT },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2500, height_mm: 1200, price_cents: 296800, channels: STORE_CHAT },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Black, orientation: O::None, width_mm: 2500, height_mm: 1400, price_cents: 343440, channels: STORE_CHAT },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 162800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 191840, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 1400, price_cents: 220880, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 211200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 249920, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 1400, price_cents: 288640, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2500, height_mm: 1000, price_cents: 259600, channels: STORE_CHAT },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2500, height_mm: 1200, price_cents: 308000, channels: STORE_CHAT },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::Bronze, orientation: O::None, width_mm: 2500, height_mm: 1400, price_cents: 356400, channels: STORE_CHAT },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 174640, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 205792, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 1400, price_cents: 236944, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 226560, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 268096, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 1400, price_cents: 309632, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2500, height_mm: 1000, price_cents: 278480, channels: STORE_CHAT },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2500, height_mm: 1200, price_cents: 330400, channels: STORE_CHAT },
    CatalogRow { product_type: T::LouveredSlidingWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2500, height_mm: 1400, price_cents: 382320, channels: STORE_CHAT },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Left, width_mm: 600, height_mm: 1000, price_cents: 60200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Left, width_mm: 600, height_mm: 1200, price_cents: 70040, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Left, width_mm: 800, height_mm: 1000, price_cents: 76600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Left, width_mm: 800, height_mm: 1200, price_cents: 89720, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Left, width_mm: 1000, height_mm: 1000, price_cents: 93000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Left, width_mm: 1000, height_mm: 1200, price_cents: 109400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Left, width_mm: 1200, height_mm: 1000, price_cents: 109400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Left, width_mm: 1200, height_mm: 1200, price_cents: 129080, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Right, width_mm: 600, height_mm: 1000, price_cents: 60200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Right, width_mm: 600, height_mm: 1200, price_cents: 70040, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Right, width_mm: 800, height_mm: 1000, price_cents: 76600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Right, width_mm: 800, height_mm: 1200, price_cents: 89720, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Right, width_mm: 1000, height_mm: 1000, price_cents: 93000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Right, width_mm: 1000, height_mm: 1200, price_cents: 109400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Right, width_mm: 1200, height_mm: 1000, price_cents: 109400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::White, orientation: O::Right, width_mm: 1200, height_mm: 1200, price_cents: 129080, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Left, width_mm: 600, height_mm: 1000, price_cents: 63812, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Left, width_mm: 600, height_mm: 1200, price_cents: 74242, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Left, width_mm: 800, height_mm: 1000, price_cents: 81196, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Left, width_mm: 800, height_mm: 1200, price_cents: 95103, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Left, width_mm: 1000, height_mm: 1000, price_cents: 98580, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Left, width_mm: 1000, height_mm: 1200, price_cents: 115964, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Left, width_mm: 1200, height_mm: 1000, price_cents: 115964, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Left, width_mm: 1200, height_mm: 1200, price_cents: 136825, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Right, width_mm: 600, height_mm: 1000, price_cents: 63812, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Right, width_mm: 600, height_mm: 1200, price_cents: 74242, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Right, width_mm: 800, height_mm: 1000, price_cents: 81196, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Right, width_mm: 800, height_mm: 1200, price_cents: 95103, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Right, width_mm: 1000, height_mm: 1000, price_cents: 98580, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Right, width_mm: 1000, height_mm: 1200, price_cents: 115964, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Right, width_mm: 1200, height_mm: 1000, price_cents: 115964, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Black, orientation: O::Right, width_mm: 1200, height_mm: 1200, price_cents: 136825, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Left, width_mm: 600, height_mm: 1000, price_cents: 66220, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Left, width_mm: 600, height_mm: 1200, price_cents: 77044, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Left, width_mm: 800, height_mm: 1000, price_cents: 84260, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Left, width_mm: 800, height_mm: 1200, price_cents: 98692, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Left, width_mm: 1000, height_mm: 1000, price_cents: 102300, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Left, width_mm: 1000, height_mm: 1200, price_cents: 120340, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Left, width_mm: 1200, height_mm: 1000, price_cents: 120340, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Left, width_mm: 1200, height_mm: 1200, price_cents: 141988, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Right, width_mm: 600, height_mm: 1000, price_cents: 66220, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Right, width_mm: 600, height_mm: 1200, price_cents: 77044, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Right, width_mm: 800, height_mm: 1000, price_cents: 84260, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Right, width_mm: 800, height_mm: 1200, price_cents: 98692, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Right, width_mm: 1000, height_mm: 1000, price_cents: 102300, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Right, width_mm: 1000, height_mm: 1200, price_cents: 120340, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Right, width_mm: 1200, height_mm: 1000, price_cents: 120340, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::Bronze, orientation: O::Right, width_mm: 1200, height_mm: 1200, price_cents: 141988, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 600, height_mm: 1000, price_cents: 71036, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 600, height_mm: 1200, price_cents: 82647, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 800, height_mm: 1000, price_cents: 90388, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 800, height_mm: 1200, price_cents: 105870, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1000, height_mm: 1000, price_cents: 109740, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1000, height_mm: 1200, price_cents: 129092, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1200, height_mm: 1000, price_cents: 129092, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1200, height_mm: 1200, price_cents: 152314, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 600, height_mm: 1000, price_cents: 71036, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 600, height_mm: 1200, price_cents: 82647, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 800, height_mm: 1000, price_cents: 90388, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 800, height_mm: 1200, price_cents: 105870, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1000, height_mm: 1000, price_cents: 109740, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1000, height_mm: 1200, price_cents: 129092, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1200, height_mm: 1000, price_cents: 129092, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::SingleCasementWindow, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1200, height_mm: 1200, price_cents: 152314, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 1000, price_cents: 97000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 1200, price_cents: 113800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 1400, price_cents: 130600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 113800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 1200, price_cents: 133960, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 1400, price_cents: 154120, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::White, orientation: O::None, width_mm: 1400, height_mm: 1000, price_cents: 130600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::White, orientation: O::None, width_mm: 1400, height_mm: 1200, price_cents: 154120, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::White, orientation: O::None, width_mm: 1400, height_mm: 1400, price_cents: 177640, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 1000, price_cents: 102820, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 1200, price_cents: 120628, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 1400, price_cents: 138436, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 120628, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 1200, price_cents: 141998, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 1400, price_cents: 163367, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Black, orientation: O::None, width_mm: 1400, height_mm: 1000, price_cents: 138436, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Black, orientation: O::None, width_mm: 1400, height_mm: 1200, price_cents: 163367, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Black, orientation: O::None, width_mm: 1400, height_mm: 1400, price_cents: 188298, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 1000, price_cents: 106700, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 1200, price_cents: 125180, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 1400, price_cents: 143660, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 125180, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 1200, price_cents: 147356, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 1400, price_cents: 169532, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Bronze, orientation: O::None, width_mm: 1400, height_mm: 1000, price_cents: 143660, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Bronze, orientation: O::None, width_mm: 1400, height_mm: 1200, price_cents: 169532, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::Bronze, orientation: O::None, width_mm: 1400, height_mm: 1400, price_cents: 195404, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 1000, price_cents: 114460, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 1200, price_cents: 134284, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 1400, price_cents: 154108, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 134284, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 1200, price_cents: 158073, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 1400, price_cents: 181862, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1400, height_mm: 1000, price_cents: 154108, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1400, height_mm: 1200, price_cents: 181862, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafCasementWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1400, height_mm: 1400, price_cents: 209615, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::White, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 42400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::White, orientation: O::None, width_mm: 600, height_mm: 800, price_cents: 53200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::White, orientation: O::None, width_mm: 600, height_mm: 1000, price_cents: 64000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::White, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 53200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::White, orientation: O::None, width_mm: 800, height_mm: 800, price_cents: 67600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::White, orientation: O::None, width_mm: 800, height_mm: 1000, price_cents: 82000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 600, price_cents: 64000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 800, price_cents: 82000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 1000, price_cents: 100000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 600, price_cents: 74800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 800, price_cents: 96400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 118000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 44944, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 800, price_cents: 56392, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 1000, price_cents: 67840, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 56392, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 800, price_cents: 71656, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 1000, price_cents: 86920, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 600, price_cents: 67840, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 800, price_cents: 86920, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 1000, price_cents: 106000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 600, price_cents: 79288, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 800, price_cents: 102184, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 125080, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 46640, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 800, price_cents: 58520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 1000, price_cents: 70400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 58520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 800, price_cents: 74360, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 1000, price_cents: 90200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 600, price_cents: 70400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 800, price_cents: 90200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 1000, price_cents: 110000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 600, price_cents: 82280, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 800, price_cents: 106040, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 129800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 50032, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 800, price_cents: 62776, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 1000, price_cents: 75520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 62776, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 800, price_cents: 79768, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 1000, price_cents: 96760, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 600, price_cents: 75520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 800, price_cents: 96760, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 1000, price_cents: 118000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 600, price_cents: 88264, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 800, price_cents: 113752, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::MaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 139240, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 118600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 1200, price_cents: 139720, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 145000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 171400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::White, orientation: O::None, width_mm: 1800, height_mm: 1000, price_cents: 171400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::White, orientation: O::None, width_mm: 1800, height_mm: 1200, price_cents: 203080, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 125716, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 1200, price_cents: 148103, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 153700, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 181684, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::Black, orientation: O::None, width_mm: 1800, height_mm: 1000, price_cents: 181684, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::Black, orientation: O::None, width_mm: 1800, height_mm: 1200, price_cents: 215265, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 130460, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 1200, price_cents: 153692, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 159500, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 188540, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 1800, height_mm: 1000, price_cents: 188540, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::Bronze, orientation: O::None, width_mm: 1800, height_mm: 1200, price_cents: 223388, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 139948, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 1200, price_cents: 164870, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 171100, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 202252, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1800, height_mm: 1000, price_cents: 202252, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::DoubleMaximAirWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1800, height_mm: 1200, price_cents: 239634, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::White, orientation: O::None, width_mm: 600, height_mm: 400, price_cents: 26000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::White, orientation: O::None, width_mm: 600, height_mm: 500, price_cents: 30500, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::White, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 35000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::White, orientation: O::None, width_mm: 800, height_mm: 400, price_cents: 32000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::White, orientation: O::None, width_mm: 800, height_mm: 500, price_cents: 38000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::White, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 44000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 400, price_cents: 38000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 500, price_cents: 45500, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 600, price_cents: 53000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 400, price_cents: 44000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 500, price_cents: 53000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 600, price_cents: 62000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 400, price_cents: 27560, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 500, price_cents: 32330, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 37100, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 400, price_cents: 33920, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 500, price_cents: 40280, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 46640, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 400, price_cents: 40280, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 500, price_cents: 48230, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 600, price_cents: 56180, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 400, price_cents: 46640, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 500, price_cents: 56180, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 600, price_cents: 65720, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 400, price_cents: 28600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 500, price_cents: 33550, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 38500, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 400, price_cents: 35200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 500, price_cents: 41800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 48400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 400, price_cents: 41800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 500, price_cents: 50050, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 600, price_cents: 58300, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 400, price_cents: 48400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 500, price_cents: 58300, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 600, price_cents: 68200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 400, price_cents: 30680, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 500, price_cents: 35990, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 41300, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 400, price_cents: 37760, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 500, price_cents: 44840, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 51920, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 400, price_cents: 44840, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 500, price_cents: 53690, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 600, price_cents: 62540, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 400, price_cents: 51920, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 500, price_cents: 62540, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 600, price_cents: 73160, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::White, orientation: O::None, width_mm: 400, height_mm: 400, price_cents: 17520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::White, orientation: O::None, width_mm: 400, height_mm: 500, price_cents: 20400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::White, orientation: O::None, width_mm: 400, height_mm: 600, price_cents: 23280, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::White, orientation: O::None, width_mm: 500, height_mm: 400, price_cents: 20400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::White, orientation: O::None, width_mm: 500, height_mm: 500, price_cents: 24000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::White, orientation: O::None, width_mm: 500, height_mm: 600, price_cents: 27600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::White, orientation: O::None, width_mm: 600, height_mm: 400, price_cents: 23280, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::White, orientation: O::None, width_mm: 600, height_mm: 500, price_cents: 27600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::White, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 31920, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::White, orientation: O::None, width_mm: 800, height_mm: 400, price_cents: 29040, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::White, orientation: O::None, width_mm: 800, height_mm: 500, price_cents: 34800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::White, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 40560, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Black, orientation: O::None, width_mm: 400, height_mm: 400, price_cents: 18571, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Black, orientation: O::None, width_mm: 400, height_mm: 500, price_cents: 21624, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Black, orientation: O::None, width_mm: 400, height_mm: 600, price_cents: 24677, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Black, orientation: O::None, width_mm: 500, height_mm: 400, price_cents: 21624, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Black, orientation: O::None, width_mm: 500, height_mm: 500, price_cents: 25440, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Black, orientation: O::None, width_mm: 500, height_mm: 600, price_cents: 29256, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 400, price_cents: 24677, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 500, price_cents: 29256, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 33835, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 400, price_cents: 30782, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 500, price_cents: 36888, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 42994, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Bronze, orientation: O::None, width_mm: 400, height_mm: 400, price_cents: 19272, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Bronze, orientation: O::None, width_mm: 400, height_mm: 500, price_cents: 22440, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Bronze, orientation: O::None, width_mm: 400, height_mm: 600, price_cents: 25608, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Bronze, orientation: O::None, width_mm: 500, height_mm: 400, price_cents: 22440, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Bronze, orientation: O::None, width_mm: 500, height_mm: 500, price_cents: 26400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Bronze, orientation: O::None, width_mm: 500, height_mm: 600, price_cents: 30360, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 400, price_cents: 25608, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 500, price_cents: 30360, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 35112, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 400, price_cents: 31944, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 500, price_cents: 38280, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 44616, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 400, height_mm: 400, price_cents: 20674, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 400, height_mm: 500, price_cents: 24072, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 400, height_mm: 600, price_cents: 27470, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 500, height_mm: 400, price_cents: 24072, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 500, height_mm: 500, price_cents: 28320, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 500, height_mm: 600, price_cents: 32568, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 400, price_cents: 27470, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 500, price_cents: 32568, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 37666, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 400, price_cents: 34267, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 500, price_cents: 41064, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BathroomTiltWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 47861, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 27720, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 600, height_mm: 800, price_cents: 33960, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 600, height_mm: 1000, price_cents: 40200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 600, height_mm: 1200, price_cents: 46440, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 33960, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 800, height_mm: 800, price_cents: 42280, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 800, height_mm: 1000, price_cents: 50600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 800, height_mm: 1200, price_cents: 58920, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 600, price_cents: 40200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 800, price_cents: 50600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 1000, price_cents: 61000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 1200, price_cents: 71400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 600, price_cents: 46440, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 800, price_cents: 58920, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 71400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 1200, price_cents: 83880, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 600, price_cents: 55800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 800, price_cents: 71400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 87000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 102600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 600, price_cents: 71400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 800, price_cents: 92200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 113000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 133800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 29383, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 800, price_cents: 35998, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 1000, price_cents: 42612, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 1200, price_cents: 49226, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 35998, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 800, price_cents: 44817, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 1000, price_cents: 53636, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 1200, price_cents: 62455, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 600, price_cents: 42612, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 800, price_cents: 53636, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 1000, price_cents: 64660, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 1200, price_cents: 75684, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 600, price_cents: 49226, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 800, price_cents: 62455, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 75684, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 1200, price_cents: 88913, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 600, price_cents: 59148, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 800, price_cents: 75684, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 92220, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 108756, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 600, price_cents: 75684, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 800, price_cents: 97732, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 119780, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 141828, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 30492, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 800, price_cents: 37356, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 1000, price_cents: 44220, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 1200, price_cents: 51084, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 37356, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 800, price_cents: 46508, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 1000, price_cents: 55660, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 1200, price_cents: 64812, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 600, price_cents: 44220, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 800, price_cents: 55660, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 1000, price_cents: 67100, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 1200, price_cents: 78540, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 600, price_cents: 51084, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 800, price_cents: 64812, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 78540, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 1200, price_cents: 92268, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 600, price_cents: 61380, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 800, price_cents: 78540, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 95700, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 112860, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 600, price_cents: 78540, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 800, price_cents: 101420, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 124300, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 147180, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 600, price_cents: 32710, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 800, price_cents: 40073, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 1000, price_cents: 47436, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 1200, price_cents: 54799, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 600, price_cents: 40073, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 800, price_cents: 49890, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 1000, price_cents: 59708, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 1200, price_cents: 69526, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 600, price_cents: 47436, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 800, price_cents: 59708, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 1000, price_cents: 71980, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 1200, price_cents: 84252, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 600, price_cents: 54799, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 800, price_cents: 69526, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 1000, price_cents: 84252, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 1200, price_cents: 98978, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 600, price_cents: 65844, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 800, price_cents: 84252, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 1000, price_cents: 102660, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 1200, price_cents: 121068, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 600, price_cents: 84252, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 800, price_cents: 108796, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 1000, price_cents: 133340, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FixedWindow, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 1200, price_cents: 157884, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 600, height_mm: 300, price_cents: 16720, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 600, height_mm: 400, price_cents: 19960, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 600, height_mm: 500, price_cents: 23200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 800, height_mm: 300, price_cents: 19960, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 800, height_mm: 400, price_cents: 24280, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 800, height_mm: 500, price_cents: 28600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 300, price_cents: 23200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 400, price_cents: 28600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 1000, height_mm: 500, price_cents: 34000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 300, price_cents: 26440, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 400, price_cents: 32920, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 1200, height_mm: 500, price_cents: 39400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 300, price_cents: 31300, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 400, price_cents: 39400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 500, price_cents: 47500, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 300, price_cents: 39400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 400, price_cents: 50200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 500, price_cents: 61000, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 2500, height_mm: 300, price_cents: 47500, channels: STORE_CHAT },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 2500, height_mm: 400, price_cents: 61000, channels: STORE_CHAT },
    CatalogRow { product_type: T::Transom, color: C::White, orientation: O::None, width_mm: 2500, height_mm: 500, price_cents: 74500, channels: STORE_CHAT },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 300, price_cents: 17723, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 400, price_cents: 21158, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 600, height_mm: 500, price_cents: 24592, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 300, price_cents: 21158, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 400, price_cents: 25737, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 800, height_mm: 500, price_cents: 30316, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 300, price_cents: 24592, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 400, price_cents: 30316, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 1000, height_mm: 500, price_cents: 36040, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 300, price_cents: 28026, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 400, price_cents: 34895, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 1200, height_mm: 500, price_cents: 41764, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 300, price_cents: 33178, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 400, price_cents: 41764, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 500, price_cents: 50350, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 300, price_cents: 41764, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 400, price_cents: 53212, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 500, price_cents: 64660, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 2500, height_mm: 300, price_cents: 50350, channels: STORE_CHAT },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 2500, height_mm: 400, price_cents: 64660, channels: STORE_CHAT },
    CatalogRow { product_type: T::Transom, color: C::Black, orientation: O::None, width_mm: 2500, height_mm: 500, price_cents: 78970, channels: STORE_CHAT },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 300, price_cents: 18392, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 400, price_cents: 21956, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 600, height_mm: 500, price_cents: 25520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 300, price_cents: 21956, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 400, price_cents: 26708, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 800, height_mm: 500, price_cents: 31460, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 300, price_cents: 25520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 400, price_cents: 31460, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 1000, height_mm: 500, price_cents: 37400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 300, price_cents: 29084, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 400, price_cents: 36212, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 1200, height_mm: 500, price_cents: 43340, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 300, price_cents: 34430, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 400, price_cents: 43340, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 500, price_cents: 52250, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 300, price_cents: 43340, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 400, price_cents: 55220, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 500, price_cents: 67100, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 2500, height_mm: 300, price_cents: 52250, channels: STORE_CHAT },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 2500, height_mm: 400, price_cents: 67100, channels: STORE_CHAT },
    CatalogRow { product_type: T::Transom, color: C::Bronze, orientation: O::None, width_mm: 2500, height_mm: 500, price_cents: 81950, channels: STORE_CHAT },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 300, price_cents: 19730, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 400, price_cents: 23553, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 600, height_mm: 500, price_cents: 27376, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 300, price_cents: 23553, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 400, price_cents: 28650, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 800, height_mm: 500, price_cents: 33748, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 300, price_cents: 27376, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 400, price_cents: 33748, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 1000, height_mm: 500, price_cents: 40120, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 300, price_cents: 31199, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 400, price_cents: 38846, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 1200, height_mm: 500, price_cents: 46492, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 300, price_cents: 36934, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 400, price_cents: 46492, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 500, price_cents: 56050, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 300, price_cents: 46492, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 400, price_cents: 59236, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 500, price_cents: 71980, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 2500, height_mm: 300, price_cents: 56050, channels: STORE_CHAT },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 2500, height_mm: 400, price_cents: 71980, channels: STORE_CHAT },
    CatalogRow { product_type: T::Transom, color: C::NaturalAnodized, orientation: O::None, width_mm: 2500, height_mm: 500, price_cents: 87910, channels: STORE_CHAT },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Left, width_mm: 1200, height_mm: 2100, price_cents: 197360, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Left, width_mm: 1200, height_mm: 2400, price_cents: 221840, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Left, width_mm: 1500, height_mm: 2100, price_cents: 240200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Left, width_mm: 1500, height_mm: 2400, price_cents: 270800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Left, width_mm: 1800, height_mm: 2100, price_cents: 283040, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Left, width_mm: 1800, height_mm: 2400, price_cents: 319760, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Left, width_mm: 2000, height_mm: 2100, price_cents: 311600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Left, width_mm: 2000, height_mm: 2400, price_cents: 352400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Left, width_mm: 2400, height_mm: 2100, price_cents: 368720, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Left, width_mm: 2400, height_mm: 2400, price_cents: 417680, channels: STORE_CHAT },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Right, width_mm: 1200, height_mm: 2100, price_cents: 197360, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Right, width_mm: 1200, height_mm: 2400, price_cents: 221840, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Right, width_mm: 1500, height_mm: 2100, price_cents: 240200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Right, width_mm: 1500, height_mm: 2400, price_cents: 270800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Right, width_mm: 1800, height_mm: 2100, price_cents: 283040, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Right, width_mm: 1800, height_mm: 2400, price_cents: 319760, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Right, width_mm: 2000, height_mm: 2100, price_cents: 311600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Right, width_mm: 2000, height_mm: 2400, price_cents: 352400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Right, width_mm: 2400, height_mm: 2100, price_cents: 368720, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::White, orientation: O::Right, width_mm: 2400, height_mm: 2400, price_cents: 417680, channels: STORE_CHAT },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Left, width_mm: 1200, height_mm: 2100, price_cents: 209202, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Left, width_mm: 1200, height_mm: 2400, price_cents: 235150, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Left, width_mm: 1500, height_mm: 2100, price_cents: 254612, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Left, width_mm: 1500, height_mm: 2400, price_cents: 287048, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Left, width_mm: 1800, height_mm: 2100, price_cents: 300022, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Left, width_mm: 1800, height_mm: 2400, price_cents: 338946, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Left, width_mm: 2000, height_mm: 2100, price_cents: 330296, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Left, width_mm: 2000, height_mm: 2400, price_cents: 373544, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Left, width_mm: 2400, height_mm: 2100, price_cents: 390843, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Left, width_mm: 2400, height_mm: 2400, price_cents: 442741, channels: STORE_CHAT },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Right, width_mm: 1200, height_mm: 2100, price_cents: 209202, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Right, width_mm: 1200, height_mm: 2400, price_cents: 235150, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Right, width_mm: 1500, height_mm: 2100, price_cents: 254612, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Right, width_mm: 1500, height_mm: 2400, price_cents: 287048, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Right, width_mm: 1800, height_mm: 2100, price_cents: 300022, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Right, width_mm: 1800, height_mm: 2400, price_cents: 338946, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Right, width_mm: 2000, height_mm: 2100, price_cents: 330296, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Right, width_mm: 2000, height_mm: 2400, price_cents: 373544, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Right, width_mm: 2400, height_mm: 2100, price_cents: 390843, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Black, orientation: O::Right, width_mm: 2400, height_mm: 2400, price_cents: 442741, channels: STORE_CHAT },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Left, width_mm: 1200, height_mm: 2100, price_cents: 217096, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Left, width_mm: 1200, height_mm: 2400, price_cents: 244024, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Left, width_mm: 1500, height_mm: 2100, price_cents: 264220, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Left, width_mm: 1500, height_mm: 2400, price_cents: 297880, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Left, width_mm: 1800, height_mm: 2100, price_cents: 311344, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Left, width_mm: 1800, height_mm: 2400, price_cents: 351736, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Left, width_mm: 2000, height_mm: 2100, price_cents: 342760, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Left, width_mm: 2000, height_mm: 2400, price_cents: 387640, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Left, width_mm: 2400, height_mm: 2100, price_cents: 405592, channels: STORE_CHAT },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Left, width_mm: 2400, height_mm: 2400, price_cents: 459448, channels: STORE_CHAT },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Right, width_mm: 1200, height_mm: 2100, price_cents: 217096, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Right, width_mm: 1200, height_mm: 2400, price_cents: 244024, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Right, width_mm: 1500, height_mm: 2100, price_cents: 264220, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Right, width_mm: 1500, height_mm: 2400, price_cents: 297880, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Right, width_mm: 1800, height_mm: 2100, price_cents: 311344, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Right, width_mm: 1800, height_mm: 2400, price_cents: 351736, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Right, width_mm: 2000, height_mm: 2100, price_cents: 342760, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Right, width_mm: 2000, height_mm: 2400, price_cents: 387640, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Right, width_mm: 2400, height_mm: 2100, price_cents: 405592, channels: STORE_CHAT },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::Bronze, orientation: O::Right, width_mm: 2400, height_mm: 2400, price_cents: 459448, channels: STORE_CHAT },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1200, height_mm: 2100, price_cents: 232885, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1200, height_mm: 2400, price_cents: 261771, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1500, height_mm: 2100, price_cents: 283436, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1500, height_mm: 2400, price_cents: 319544, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1800, height_mm: 2100, price_cents: 333987, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1800, height_mm: 2400, price_cents: 377317, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 2000, height_mm: 2100, price_cents: 367688, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 2000, height_mm: 2400, price_cents: 415832, channels: STORE_CHAT },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 2400, height_mm: 2100, price_cents: 435090, channels: STORE_CHAT },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 2400, height_mm: 2400, price_cents: 492862, channels: STORE_CHAT },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1200, height_mm: 2100, price_cents: 232885, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1200, height_mm: 2400, price_cents: 261771, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1500, height_mm: 2100, price_cents: 283436, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1500, height_mm: 2400, price_cents: 319544, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1800, height_mm: 2100, price_cents: 333987, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1800, height_mm: 2400, price_cents: 377317, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 2000, height_mm: 2100, price_cents: 367688, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 2000, height_mm: 2400, price_cents: 415832, channels: STORE_CHAT },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 2400, height_mm: 2100, price_cents: 435090, channels: STORE_CHAT },
    CatalogRow { product_type: T::TwoLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 2400, height_mm: 2400, price_cents: 492862, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::White, orientation: O::None, width_mm: 1800, height_mm: 2100, price_cents: 294600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::White, orientation: O::None, width_mm: 1800, height_mm: 2400, price_cents: 332400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::White, orientation: O::None, width_mm: 2100, height_mm: 2100, price_cents: 338700, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::White, orientation: O::None, width_mm: 2100, height_mm: 2400, price_cents: 382800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::White, orientation: O::None, width_mm: 2400, height_mm: 2100, price_cents: 382800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::White, orientation: O::None, width_mm: 2400, height_mm: 2400, price_cents: 433200, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::Black, orientation: O::None, width_mm: 1800, height_mm: 2100, price_cents: 312276, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::Black, orientation: O::None, width_mm: 1800, height_mm: 2400, price_cents: 352344, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::Black, orientation: O::None, width_mm: 2100, height_mm: 2100, price_cents: 359022, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::Black, orientation: O::None, width_mm: 2100, height_mm: 2400, price_cents: 405768, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::Black, orientation: O::None, width_mm: 2400, height_mm: 2100, price_cents: 405768, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::Black, orientation: O::None, width_mm: 2400, height_mm: 2400, price_cents: 459192, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::Bronze, orientation: O::None, width_mm: 1800, height_mm: 2100, price_cents: 324060, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::Bronze, orientation: O::None, width_mm: 1800, height_mm: 2400, price_cents: 365640, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::Bronze, orientation: O::None, width_mm: 2100, height_mm: 2100, price_cents: 372570, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::Bronze, orientation: O::None, width_mm: 2100, height_mm: 2400, price_cents: 421080, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::Bronze, orientation: O::None, width_mm: 2400, height_mm: 2100, price_cents: 421080, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::Bronze, orientation: O::None, width_mm: 2400, height_mm: 2400, price_cents: 476520, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 1800, height_mm: 2100, price_cents: 347628, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 1800, height_mm: 2400, price_cents: 392232, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 2100, height_mm: 2100, price_cents: 399666, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 2100, height_mm: 2400, price_cents: 451704, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 2400, height_mm: 2100, price_cents: 451704, channels: STORE_CHAT },
    CatalogRow { product_type: T::ThreeLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 2400, height_mm: 2400, price_cents: 511176, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::White, orientation: O::None, width_mm: 2400, height_mm: 2100, price_cents: 396880, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::White, orientation: O::None, width_mm: 2400, height_mm: 2400, price_cents: 448720, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::White, orientation: O::None, width_mm: 2800, height_mm: 2100, price_cents: 457360, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::White, orientation: O::None, width_mm: 2800, height_mm: 2400, price_cents: 517840, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::White, orientation: O::None, width_mm: 3200, height_mm: 2100, price_cents: 517840, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::White, orientation: O::None, width_mm: 3200, height_mm: 2400, price_cents: 586960, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::Black, orientation: O::None, width_mm: 2400, height_mm: 2100, price_cents: 420693, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::Black, orientation: O::None, width_mm: 2400, height_mm: 2400, price_cents: 475643, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::Black, orientation: O::None, width_mm: 2800, height_mm: 2100, price_cents: 484802, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::Black, orientation: O::None, width_mm: 2800, height_mm: 2400, price_cents: 548910, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::Black, orientation: O::None, width_mm: 3200, height_mm: 2100, price_cents: 548910, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::Black, orientation: O::None, width_mm: 3200, height_mm: 2400, price_cents: 622178, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::Bronze, orientation: O::None, width_mm: 2400, height_mm: 2100, price_cents: 436568, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::Bronze, orientation: O::None, width_mm: 2400, height_mm: 2400, price_cents: 493592, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::Bronze, orientation: O::None, width_mm: 2800, height_mm: 2100, price_cents: 503096, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::Bronze, orientation: O::None, width_mm: 2800, height_mm: 2400, price_cents: 569624, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::Bronze, orientation: O::None, width_mm: 3200, height_mm: 2100, price_cents: 569624, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::Bronze, orientation: O::None, width_mm: 3200, height_mm: 2400, price_cents: 645656, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 2400, height_mm: 2100, price_cents: 468318, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 2400, height_mm: 2400, price_cents: 529490, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 2800, height_mm: 2100, price_cents: 539685, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 2800, height_mm: 2400, price_cents: 611051, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 3200, height_mm: 2100, price_cents: 611051, channels: STORE_CHAT },
    CatalogRow { product_type: T::FourLeafSlidingDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 3200, height_mm: 2400, price_cents: 692613, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 2100, price_cents: 265100, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::White, orientation: O::None, width_mm: 1500, height_mm: 2400, price_cents: 298400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::White, orientation: O::None, width_mm: 1800, height_mm: 2100, price_cents: 311720, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::White, orientation: O::None, width_mm: 1800, height_mm: 2400, price_cents: 351680, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 2100, price_cents: 342800, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::White, orientation: O::None, width_mm: 2000, height_mm: 2400, price_cents: 387200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::White, orientation: O::None, width_mm: 2400, height_mm: 2100, price_cents: 404960, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::White, orientation: O::None, width_mm: 2400, height_mm: 2400, price_cents: 458240, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::White, orientation: O::None, width_mm: 2800, height_mm: 2100, price_cents: 467120, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::White, orientation: O::None, width_mm: 2800, height_mm: 2400, price_cents: 529280, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 2100, price_cents: 281006, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::Black, orientation: O::None, width_mm: 1500, height_mm: 2400, price_cents: 316304, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::Black, orientation: O::None, width_mm: 1800, height_mm: 2100, price_cents: 330423, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::Black, orientation: O::None, width_mm: 1800, height_mm: 2400, price_cents: 372781, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 2100, price_cents: 363368, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::Black, orientation: O::None, width_mm: 2000, height_mm: 2400, price_cents: 410432, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::Black, orientation: O::None, width_mm: 2400, height_mm: 2100, price_cents: 429258, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::Black, orientation: O::None, width_mm: 2400, height_mm: 2400, price_cents: 485734, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::Black, orientation: O::None, width_mm: 2800, height_mm: 2100, price_cents: 495147, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::Black, orientation: O::None, width_mm: 2800, height_mm: 2400, price_cents: 561037, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 2100, price_cents: 291610, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::Bronze, orientation: O::None, width_mm: 1500, height_mm: 2400, price_cents: 328240, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::Bronze, orientation: O::None, width_mm: 1800, height_mm: 2100, price_cents: 342892, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::Bronze, orientation: O::None, width_mm: 1800, height_mm: 2400, price_cents: 386848, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 2100, price_cents: 377080, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::Bronze, orientation: O::None, width_mm: 2000, height_mm: 2400, price_cents: 425920, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::Bronze, orientation: O::None, width_mm: 2400, height_mm: 2100, price_cents: 445456, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::Bronze, orientation: O::None, width_mm: 2400, height_mm: 2400, price_cents: 504064, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::Bronze, orientation: O::None, width_mm: 2800, height_mm: 2100, price_cents: 513832, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::Bronze, orientation: O::None, width_mm: 2800, height_mm: 2400, price_cents: 582208, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 2100, price_cents: 312818, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 1500, height_mm: 2400, price_cents: 352112, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 1800, height_mm: 2100, price_cents: 367830, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::BalconyDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 1800, height_mm: 2400, price_cents: 414982, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 2100, price_cents: 404504, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 2000, height_mm: 2400, price_cents: 456896, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 2400, height_mm: 2100, price_cents: 477853, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 2400, height_mm: 2400, price_cents: 540723, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 2800, height_mm: 2100, price_cents: 551202, channels: STORE_CHAT },
    CatalogRow { product_type: T::BalconyDoor, color: C::NaturalAnodized, orientation: O::None, width_mm: 2800, height_mm: 2400, price_cents: 624550, channels: STORE_CHAT },
    CatalogRow { product_type: T::HingedDoor, color: C::White, orientation: O::Left, width_mm: 700, height_mm: 2100, price_cents: 149720, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::White, orientation: O::Left, width_mm: 700, height_mm: 2400, price_cents: 165680, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::White, orientation: O::Left, width_mm: 800, height_mm: 2100, price_cents: 165680, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::White, orientation: O::Left, width_mm: 800, height_mm: 2400, price_cents: 183920, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::White, orientation: O::Left, width_mm: 900, height_mm: 2100, price_cents: 181640, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::White, orientation: O::Left, width_mm: 900, height_mm: 2400, price_cents: 202160, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::White, orientation: O::Right, width_mm: 700, height_mm: 2100, price_cents: 149720, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::White, orientation: O::Right, width_mm: 700, height_mm: 2400, price_cents: 165680, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::White, orientation: O::Right, width_mm: 800, height_mm: 2100, price_cents: 165680, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::White, orientation: O::Right, width_mm: 800, height_mm: 2400, price_cents: 183920, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::White, orientation: O::Right, width_mm: 900, height_mm: 2100, price_cents: 181640, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::White, orientation: O::Right, width_mm: 900, height_mm: 2400, price_cents: 202160, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Black, orientation: O::Left, width_mm: 700, height_mm: 2100, price_cents: 158703, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Black, orientation: O::Left, width_mm: 700, height_mm: 2400, price_cents: 175621, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Black, orientation: O::Left, width_mm: 800, height_mm: 2100, price_cents: 175621, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Black, orientation: O::Left, width_mm: 800, height_mm: 2400, price_cents: 194955, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Black, orientation: O::Left, width_mm: 900, height_mm: 2100, price_cents: 192538, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Black, orientation: O::Left, width_mm: 900, height_mm: 2400, price_cents: 214290, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Black, orientation: O::Right, width_mm: 700, height_mm: 2100, price_cents: 158703, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Black, orientation: O::Right, width_mm: 700, height_mm: 2400, price_cents: 175621, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Black, orientation: O::Right, width_mm: 800, height_mm: 2100, price_cents: 175621, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Black, orientation: O::Right, width_mm: 800, height_mm: 2400, price_cents: 194955, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Black, orientation: O::Right, width_mm: 900, height_mm: 2100, price_cents: 192538, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Black, orientation: O::Right, width_mm: 900, height_mm: 2400, price_cents: 214290, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Bronze, orientation: O::Left, width_mm: 700, height_mm: 2100, price_cents: 164692, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Bronze, orientation: O::Left, width_mm: 700, height_mm: 2400, price_cents: 182248, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Bronze, orientation: O::Left, width_mm: 800, height_mm: 2100, price_cents: 182248, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Bronze, orientation: O::Left, width_mm: 800, height_mm: 2400, price_cents: 202312, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Bronze, orientation: O::Left, width_mm: 900, height_mm: 2100, price_cents: 199804, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Bronze, orientation: O::Left, width_mm: 900, height_mm: 2400, price_cents: 222376, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Bronze, orientation: O::Right, width_mm: 700, height_mm: 2100, price_cents: 164692, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Bronze, orientation: O::Right, width_mm: 700, height_mm: 2400, price_cents: 182248, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Bronze, orientation: O::Right, width_mm: 800, height_mm: 2100, price_cents: 182248, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Bronze, orientation: O::Right, width_mm: 800, height_mm: 2400, price_cents: 202312, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Bronze, orientation: O::Right, width_mm: 900, height_mm: 2100, price_cents: 199804, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::Bronze, orientation: O::Right, width_mm: 900, height_mm: 2400, price_cents: 222376, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 700, height_mm: 2100, price_cents: 176670, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 700, height_mm: 2400, price_cents: 195502, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 800, height_mm: 2100, price_cents: 195502, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 800, height_mm: 2400, price_cents: 217026, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 900, height_mm: 2100, price_cents: 214335, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 900, height_mm: 2400, price_cents: 238549, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 700, height_mm: 2100, price_cents: 176670, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 700, height_mm: 2400, price_cents: 195502, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 800, height_mm: 2100, price_cents: 195502, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 800, height_mm: 2400, price_cents: 217026, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 900, height_mm: 2100, price_cents: 214335, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::HingedDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 900, height_mm: 2400, price_cents: 238549, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::White, orientation: O::Left, width_mm: 800, height_mm: 2100, price_cents: 159600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::White, orientation: O::Left, width_mm: 800, height_mm: 2400, price_cents: 176400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::White, orientation: O::Left, width_mm: 900, height_mm: 2100, price_cents: 174300, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::White, orientation: O::Left, width_mm: 900, height_mm: 2400, price_cents: 193200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::White, orientation: O::Right, width_mm: 800, height_mm: 2100, price_cents: 159600, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::White, orientation: O::Right, width_mm: 800, height_mm: 2400, price_cents: 176400, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::White, orientation: O::Right, width_mm: 900, height_mm: 2100, price_cents: 174300, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::White, orientation: O::Right, width_mm: 900, height_mm: 2400, price_cents: 193200, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Black, orientation: O::Left, width_mm: 800, height_mm: 2100, price_cents: 169176, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Black, orientation: O::Left, width_mm: 800, height_mm: 2400, price_cents: 186984, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Black, orientation: O::Left, width_mm: 900, height_mm: 2100, price_cents: 184758, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Black, orientation: O::Left, width_mm: 900, height_mm: 2400, price_cents: 204792, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Black, orientation: O::Right, width_mm: 800, height_mm: 2100, price_cents: 169176, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Black, orientation: O::Right, width_mm: 800, height_mm: 2400, price_cents: 186984, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Black, orientation: O::Right, width_mm: 900, height_mm: 2100, price_cents: 184758, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Black, orientation: O::Right, width_mm: 900, height_mm: 2400, price_cents: 204792, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Bronze, orientation: O::Left, width_mm: 800, height_mm: 2100, price_cents: 175560, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Bronze, orientation: O::Left, width_mm: 800, height_mm: 2400, price_cents: 194040, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Bronze, orientation: O::Left, width_mm: 900, height_mm: 2100, price_cents: 191730, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Bronze, orientation: O::Left, width_mm: 900, height_mm: 2400, price_cents: 212520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Bronze, orientation: O::Right, width_mm: 800, height_mm: 2100, price_cents: 175560, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Bronze, orientation: O::Right, width_mm: 800, height_mm: 2400, price_cents: 194040, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Bronze, orientation: O::Right, width_mm: 900, height_mm: 2100, price_cents: 191730, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::Bronze, orientation: O::Right, width_mm: 900, height_mm: 2400, price_cents: 212520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 800, height_mm: 2100, price_cents: 188328, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 800, height_mm: 2400, price_cents: 208152, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 900, height_mm: 2100, price_cents: 205674, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 900, height_mm: 2400, price_cents: 227976, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 800, height_mm: 2100, price_cents: 188328, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 800, height_mm: 2400, price_cents: 208152, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 900, height_mm: 2100, price_cents: 205674, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PanelHingedDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 900, height_mm: 2400, price_cents: 227976, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::White, orientation: O::Left, width_mm: 700, height_mm: 2100, price_cents: 135960, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::White, orientation: O::Left, width_mm: 700, height_mm: 2400, price_cents: 150240, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::White, orientation: O::Left, width_mm: 800, height_mm: 2100, price_cents: 150240, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::White, orientation: O::Left, width_mm: 800, height_mm: 2400, price_cents: 166560, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::White, orientation: O::Left, width_mm: 900, height_mm: 2100, price_cents: 164520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::White, orientation: O::Left, width_mm: 900, height_mm: 2400, price_cents: 182880, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::White, orientation: O::Right, width_mm: 700, height_mm: 2100, price_cents: 135960, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::White, orientation: O::Right, width_mm: 700, height_mm: 2400, price_cents: 150240, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::White, orientation: O::Right, width_mm: 800, height_mm: 2100, price_cents: 150240, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::White, orientation: O::Right, width_mm: 800, height_mm: 2400, price_cents: 166560, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::White, orientation: O::Right, width_mm: 900, height_mm: 2100, price_cents: 164520, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::White, orientation: O::Right, width_mm: 900, height_mm: 2400, price_cents: 182880, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Black, orientation: O::Left, width_mm: 700, height_mm: 2100, price_cents: 144118, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Black, orientation: O::Left, width_mm: 700, height_mm: 2400, price_cents: 159254, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Black, orientation: O::Left, width_mm: 800, height_mm: 2100, price_cents: 159254, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Black, orientation: O::Left, width_mm: 800, height_mm: 2400, price_cents: 176554, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Black, orientation: O::Left, width_mm: 900, height_mm: 2100, price_cents: 174391, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Black, orientation: O::Left, width_mm: 900, height_mm: 2400, price_cents: 193853, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Black, orientation: O::Right, width_mm: 700, height_mm: 2100, price_cents: 144118, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Black, orientation: O::Right, width_mm: 700, height_mm: 2400, price_cents: 159254, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Black, orientation: O::Right, width_mm: 800, height_mm: 2100, price_cents: 159254, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Black, orientation: O::Right, width_mm: 800, height_mm: 2400, price_cents: 176554, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Black, orientation: O::Right, width_mm: 900, height_mm: 2100, price_cents: 174391, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Black, orientation: O::Right, width_mm: 900, height_mm: 2400, price_cents: 193853, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Bronze, orientation: O::Left, width_mm: 700, height_mm: 2100, price_cents: 149556, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Bronze, orientation: O::Left, width_mm: 700, height_mm: 2400, price_cents: 165264, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Bronze, orientation: O::Left, width_mm: 800, height_mm: 2100, price_cents: 165264, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Bronze, orientation: O::Left, width_mm: 800, height_mm: 2400, price_cents: 183216, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Bronze, orientation: O::Left, width_mm: 900, height_mm: 2100, price_cents: 180972, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Bronze, orientation: O::Left, width_mm: 900, height_mm: 2400, price_cents: 201168, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Bronze, orientation: O::Right, width_mm: 700, height_mm: 2100, price_cents: 149556, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Bronze, orientation: O::Right, width_mm: 700, height_mm: 2400, price_cents: 165264, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Bronze, orientation: O::Right, width_mm: 800, height_mm: 2100, price_cents: 165264, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Bronze, orientation: O::Right, width_mm: 800, height_mm: 2400, price_cents: 183216, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Bronze, orientation: O::Right, width_mm: 900, height_mm: 2100, price_cents: 180972, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::Bronze, orientation: O::Right, width_mm: 900, height_mm: 2400, price_cents: 201168, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 700, height_mm: 2100, price_cents: 160433, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 700, height_mm: 2400, price_cents: 177283, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 800, height_mm: 2100, price_cents: 177283, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 800, height_mm: 2400, price_cents: 196541, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 900, height_mm: 2100, price_cents: 194134, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 900, height_mm: 2400, price_cents: 215798, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 700, height_mm: 2100, price_cents: 160433, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 700, height_mm: 2400, price_cents: 177283, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 800, height_mm: 2100, price_cents: 177283, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 800, height_mm: 2400, price_cents: 196541, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 900, height_mm: 2100, price_cents: 194134, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::ServiceDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 900, height_mm: 2400, price_cents: 215798, channels: ALL_CHANNELS },
    CatalogRow { product_type: T::PivotDoor, color: C::White, orientation: O::Reversible, width_mm: 900, height_mm: 2100, price_cents: 206980, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::White, orientation: O::Reversible, width_mm: 900, height_mm: 2400, price_cents: 229120, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::White, orientation: O::Reversible, width_mm: 1000, height_mm: 2100, price_cents: 224200, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::White, orientation: O::Reversible, width_mm: 1000, height_mm: 2400, price_cents: 248800, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::White, orientation: O::Reversible, width_mm: 1200, height_mm: 2100, price_cents: 258640, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::White, orientation: O::Reversible, width_mm: 1200, height_mm: 2400, price_cents: 288160, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::Black, orientation: O::Reversible, width_mm: 900, height_mm: 2100, price_cents: 219399, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::Black, orientation: O::Reversible, width_mm: 900, height_mm: 2400, price_cents: 242867, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::Black, orientation: O::Reversible, width_mm: 1000, height_mm: 2100, price_cents: 237652, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::Black, orientation: O::Reversible, width_mm: 1000, height_mm: 2400, price_cents: 263728, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::Black, orientation: O::Reversible, width_mm: 1200, height_mm: 2100, price_cents: 274158, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::Black, orientation: O::Reversible, width_mm: 1200, height_mm: 2400, price_cents: 305450, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::Bronze, orientation: O::Reversible, width_mm: 900, height_mm: 2100, price_cents: 227678, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::Bronze, orientation: O::Reversible, width_mm: 900, height_mm: 2400, price_cents: 252032, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::Bronze, orientation: O::Reversible, width_mm: 1000, height_mm: 2100, price_cents: 246620, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::Bronze, orientation: O::Reversible, width_mm: 1000, height_mm: 2400, price_cents: 273680, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::Bronze, orientation: O::Reversible, width_mm: 1200, height_mm: 2100, price_cents: 284504, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::Bronze, orientation: O::Reversible, width_mm: 1200, height_mm: 2400, price_cents: 316976, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::NaturalAnodized, orientation: O::Reversible, width_mm: 900, height_mm: 2100, price_cents: 244236, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::NaturalAnodized, orientation: O::Reversible, width_mm: 900, height_mm: 2400, price_cents: 270362, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::NaturalAnodized, orientation: O::Reversible, width_mm: 1000, height_mm: 2100, price_cents: 264556, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::NaturalAnodized, orientation: O::Reversible, width_mm: 1000, height_mm: 2400, price_cents: 293584, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::NaturalAnodized, orientation: O::Reversible, width_mm: 1200, height_mm: 2100, price_cents: 305195, channels: STORE_ONLY },
    CatalogRow { product_type: T::PivotDoor, color: C::NaturalAnodized, orientation: O::Reversible, width_mm: 1200, height_mm: 2400, price_cents: 340029, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Left, width_mm: 1500, height_mm: 2100, price_cents: 329500, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Left, width_mm: 1500, height_mm: 2400, price_cents: 370000, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Left, width_mm: 1800, height_mm: 2100, price_cents: 386200, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Left, width_mm: 1800, height_mm: 2400, price_cents: 434800, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Left, width_mm: 2100, height_mm: 2100, price_cents: 442900, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Left, width_mm: 2100, height_mm: 2400, price_cents: 499600, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Left, width_mm: 2400, height_mm: 2100, price_cents: 499600, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Left, width_mm: 2400, height_mm: 2400, price_cents: 564400, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Right, width_mm: 1500, height_mm: 2100, price_cents: 329500, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Right, width_mm: 1500, height_mm: 2400, price_cents: 370000, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Right, width_mm: 1800, height_mm: 2100, price_cents: 386200, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Right, width_mm: 1800, height_mm: 2400, price_cents: 434800, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Right, width_mm: 2100, height_mm: 2100, price_cents: 442900, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Right, width_mm: 2100, height_mm: 2400, price_cents: 499600, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Right, width_mm: 2400, height_mm: 2100, price_cents: 499600, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::White, orientation: O::Right, width_mm: 2400, height_mm: 2400, price_cents: 564400, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Left, width_mm: 1500, height_mm: 2100, price_cents: 349270, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Left, width_mm: 1500, height_mm: 2400, price_cents: 392200, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Left, width_mm: 1800, height_mm: 2100, price_cents: 409372, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Left, width_mm: 1800, height_mm: 2400, price_cents: 460888, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Left, width_mm: 2100, height_mm: 2100, price_cents: 469474, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Left, width_mm: 2100, height_mm: 2400, price_cents: 529576, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Left, width_mm: 2400, height_mm: 2100, price_cents: 529576, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Left, width_mm: 2400, height_mm: 2400, price_cents: 598264, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Right, width_mm: 1500, height_mm: 2100, price_cents: 349270, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Right, width_mm: 1500, height_mm: 2400, price_cents: 392200, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Right, width_mm: 1800, height_mm: 2100, price_cents: 409372, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Right, width_mm: 1800, height_mm: 2400, price_cents: 460888, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Right, width_mm: 2100, height_mm: 2100, price_cents: 469474, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Right, width_mm: 2100, height_mm: 2400, price_cents: 529576, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Right, width_mm: 2400, height_mm: 2100, price_cents: 529576, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Black, orientation: O::Right, width_mm: 2400, height_mm: 2400, price_cents: 598264, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Left, width_mm: 1500, height_mm: 2100, price_cents: 362450, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Left, width_mm: 1500, height_mm: 2400, price_cents: 407000, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Left, width_mm: 1800, height_mm: 2100, price_cents: 424820, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Left, width_mm: 1800, height_mm: 2400, price_cents: 478280, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Left, width_mm: 2100, height_mm: 2100, price_cents: 487190, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Left, width_mm: 2100, height_mm: 2400, price_cents: 549560, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Left, width_mm: 2400, height_mm: 2100, price_cents: 549560, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Left, width_mm: 2400, height_mm: 2400, price_cents: 620840, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Right, width_mm: 1500, height_mm: 2100, price_cents: 362450, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Right, width_mm: 1500, height_mm: 2400, price_cents: 407000, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Right, width_mm: 1800, height_mm: 2100, price_cents: 424820, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Right, width_mm: 1800, height_mm: 2400, price_cents: 478280, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Right, width_mm: 2100, height_mm: 2100, price_cents: 487190, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Right, width_mm: 2100, height_mm: 2400, price_cents: 549560, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Right, width_mm: 2400, height_mm: 2100, price_cents: 549560, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::Bronze, orientation: O::Right, width_mm: 2400, height_mm: 2400, price_cents: 620840, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1500, height_mm: 2100, price_cents: 388810, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1500, height_mm: 2400, price_cents: 436600, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1800, height_mm: 2100, price_cents: 455716, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 1800, height_mm: 2400, price_cents: 513064, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 2100, height_mm: 2100, price_cents: 522622, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 2100, height_mm: 2400, price_cents: 589528, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 2400, height_mm: 2100, price_cents: 589528, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Left, width_mm: 2400, height_mm: 2400, price_cents: 665992, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1500, height_mm: 2100, price_cents: 388810, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1500, height_mm: 2400, price_cents: 436600, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1800, height_mm: 2100, price_cents: 455716, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 1800, height_mm: 2400, price_cents: 513064, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 2100, height_mm: 2100, price_cents: 522622, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 2100, height_mm: 2400, price_cents: 589528, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 2400, height_mm: 2100, price_cents: 589528, channels: STORE_ONLY },
    CatalogRow { product_type: T::FoldingDoor, color: C::NaturalAnodized, orientation: O::Right, width_mm: 2400, height_mm: 2400, price_cents: 665992, channels: STORE_ONLY },
];
