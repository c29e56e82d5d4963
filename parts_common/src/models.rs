use serde::{Deserialize, Deserializer, Serialize};

/// Image shown for products and gallery entries without a picture
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.jpg";

pub type ProductId = u64;

/// Chassis generation a part fits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generation {
    E46,
    F80,
}

impl Generation {
    /// Returns the wire tag (e.g., "e46")
    pub fn as_str(&self) -> &'static str {
        match self {
            Generation::E46 => "e46",
            Generation::F80 => "f80",
        }
    }

    /// Returns the display label (e.g., "E46")
    pub fn label(&self) -> &'static str {
        match self {
            Generation::E46 => "E46",
            Generation::F80 => "F80",
        }
    }

    /// Parse a generation tag, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "e46" => Some(Generation::E46),
            "f80" => Some(Generation::F80),
            _ => None,
        }
    }

    /// Returns all known generations
    pub fn all() -> &'static [Generation] {
        &[Generation::E46, Generation::F80]
    }
}

/// Part category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Wheels,
    Suspension,
    Engine,
    Exhaust,
    Aero,
    Drivetrain,
    Maintenance,
}

impl Category {
    /// Returns the wire tag (e.g., "wheels")
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Wheels => "wheels",
            Category::Suspension => "suspension",
            Category::Engine => "engine",
            Category::Exhaust => "exhaust",
            Category::Aero => "aero",
            Category::Drivetrain => "drivetrain",
            Category::Maintenance => "maintenance",
        }
    }

    /// Returns the chip label (e.g., "Wheels")
    pub fn label(&self) -> &'static str {
        match self {
            Category::Wheels => "Wheels",
            Category::Suspension => "Suspension",
            Category::Engine => "Engine",
            Category::Exhaust => "Exhaust",
            Category::Aero => "Aero",
            Category::Drivetrain => "Drivetrain",
            Category::Maintenance => "Maintenance",
        }
    }

    /// Parse a category tag, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Returns all categories in chip order
    pub fn all() -> &'static [Category] {
        &[
            Category::Wheels,
            Category::Suspension,
            Category::Engine,
            Category::Exhaust,
            Category::Aero,
            Category::Drivetrain,
            Category::Maintenance,
        ]
    }
}

/// Catalog product as served by `GET /api/products`
///
/// Tags are kept as the raw strings the API sent so that records with an
/// unexpected generation or category still load and can be searched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brand: String,
    #[serde(rename = "gen", default, deserialize_with = "null_as_default")]
    pub generation: String,
    #[serde(rename = "cat", default, deserialize_with = "null_as_default")]
    pub category: String,
    /// Absent means "contact for price"
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(rename = "img", default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
}

impl Product {
    /// Parsed generation tag, if it is one of the known generations
    pub fn generation_tag(&self) -> Option<Generation> {
        Generation::parse(&self.generation)
    }

    /// Parsed category tag, if it is one of the known categories
    pub fn category_tag(&self) -> Option<Category> {
        Category::parse(&self.category)
    }

    pub fn image_or_placeholder(&self) -> &str {
        match self.image.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => PLACEHOLDER_IMAGE,
        }
    }
}

/// Community gallery entry as served by `GET /api/gallery`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GalleryEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub car: String,
    #[serde(rename = "imageUrl", default, deserialize_with = "null_as_default")]
    pub image_url: String,
}

impl GalleryEntry {
    pub fn image_or_placeholder(&self) -> &str {
        if self.image_url.trim().is_empty() {
            PLACEHOLDER_IMAGE
        } else {
            &self.image_url
        }
    }
}

/// Treats an explicit JSON `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
