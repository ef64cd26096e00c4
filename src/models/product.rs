use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Display status of a product in the admin screen.
///
/// Backend enum values map into a fixed closed set; anything the backend
/// sends outside that set passes through unchanged as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, strum::Display)]
pub enum ProductStatus {
    #[strum(serialize = "ACTIVE")]
    Active,
    #[strum(serialize = "INACTIVE")]
    Inactive,
    #[strum(serialize = "DRAFT")]
    Draft,
    #[strum(serialize = "OUT_OF_STOCK")]
    OutOfStock,
    #[strum(to_string = "{0}")]
    Other(String),
}

impl ProductStatus {
    /// Map a backend status string into the display set.
    ///
    /// The backend publishes lowercase statuses (`active`, `archived`,
    /// `draft`) on list responses and their uppercase spellings on some
    /// update responses. Already-canonical values map to themselves so the
    /// mapping is idempotent; unrecognized values are a defined fallback,
    /// not an error.
    pub fn from_backend(raw: &str) -> Self {
        match raw {
            "active" | "ACTIVE" => ProductStatus::Active,
            "archived" | "ARCHIVED" | "INACTIVE" => ProductStatus::Inactive,
            "draft" | "DRAFT" => ProductStatus::Draft,
            "OUT_OF_STOCK" => ProductStatus::OutOfStock,
            other => ProductStatus::Other(other.to_string()),
        }
    }
}

impl Serialize for ProductStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ProductStatus::from_backend(&raw))
    }
}

/// Canonical product view-model consumed by the admin UI.
///
/// Built by the mapper from heterogeneous backend representations; the
/// backend remains the source of truth and these instances are only valid
/// for the current page view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Category display name.
    pub category: String,
    pub category_id: String,
    /// Brand display name.
    pub brand: String,
    pub brand_id: String,
    pub price: f64,
    pub stock: u32,
    pub status: ProductStatus,
    pub sku: String,
    /// Primary display image URL, possibly empty.
    pub image: String,
    pub images: Vec<String>,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}
