use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// The minimal venue shape handed back to clients. Everything else the
/// provider sends is dropped at projection time.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Venue {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub photo_url: String,
}

#[derive(Clone, Deserialize, Debug)]
pub struct GourmetSearchResponse {
    pub results: GourmetSearchResults,
}

#[derive(Clone, Deserialize, Debug)]
pub struct GourmetSearchResults {
    pub shop: Vec<GourmetShop>,
}

/// One shop entry of a HotPepper gourmet search response. Every field here
/// is required; a payload missing any of them fails deserialization as a
/// whole rather than producing a partial record set.
#[serde_as]
#[derive(Clone, Deserialize, Debug)]
pub struct GourmetShop {
    pub name: String,
    // Coordinates arrive as numbers in some response modes and as numeric
    // strings in others.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub lat: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub lng: f64,
    pub photo: ShopPhoto,
}

#[derive(Clone, Deserialize, Debug)]
pub struct ShopPhoto {
    pub pc: PcPhoto,
}

#[derive(Clone, Deserialize, Debug)]
pub struct PcPhoto {
    /// Medium size photo URL.
    pub m: String,
}

impl From<GourmetShop> for Venue {
    fn from(shop: GourmetShop) -> Self {
        Self {
            name: shop.name,
            lat: shop.lat,
            lng: shop.lng,
            photo_url: shop.photo.pc.m,
        }
    }
}
