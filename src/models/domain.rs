use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Budget ceiling used when the quiz supplies no parsable budget
pub const DEFAULT_BUDGET: f64 = 5000.0;

/// Substituted when the catalog carries no image for an item
pub const PLACEHOLDER_IMAGE_URL: &str = "https://cdn.attire.app/placeholders/item.png";

/// Why the shopper is building a look; gift-only data lives inside the
/// gift variant so it cannot exist on a personal profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Purpose {
    Personal,
    Gift {
        #[serde(rename = "recipientRelationship", default)]
        recipient_relationship: Option<String>,
    },
}

impl Default for Purpose {
    fn default() -> Self {
        Purpose::Personal
    }
}

impl Purpose {
    pub fn is_gift(&self) -> bool {
        matches!(self, Purpose::Gift { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unisex,
    Unset,
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Unset
    }
}

/// Sizes collected by the quiz, all optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sizes {
    #[serde(default)]
    pub top: Option<String>,
    #[serde(default)]
    pub bottom: Option<String>,
    #[serde(default)]
    pub shoe: Option<String>,
}

/// Preference profile produced by the quiz; read-only for every pipeline stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceProfile {
    #[serde(default)]
    pub purpose: Purpose,
    #[serde(default)]
    pub gender: Gender,
    pub style: String,
    pub occasion: String,
    /// Free-form: the quiz may send a number or a string like "5000"
    #[serde(default)]
    pub budget: Option<serde_json::Value>,
    #[serde(rename = "colorMood", default)]
    pub color_mood: Option<String>,
    #[serde(default)]
    pub sizes: Option<Sizes>,
}

impl PreferenceProfile {
    /// Parse the free-form budget into a positive ceiling, falling back to
    /// `default_budget` for anything missing, non-positive, or unparsable.
    pub fn budget_ceiling(&self, default_budget: f64) -> f64 {
        let parsed = match &self.budget {
            Some(serde_json::Value::Number(n)) => n.as_f64(),
            Some(serde_json::Value::String(s)) => {
                let cleaned: String = s
                    .trim()
                    .trim_start_matches(['$', '€', '£', '₹'])
                    .chars()
                    .filter(|c| *c != ',')
                    .collect();
                cleaned.parse::<f64>().ok()
            }
            _ => None,
        };

        match parsed {
            Some(b) if b > 0.0 => b,
            _ => default_budget,
        }
    }

    /// The color mood to score against, or None when the quiz left the
    /// choice to the engine ("any" / "surprise" / absent).
    pub fn chosen_color_mood(&self) -> Option<&str> {
        match self.color_mood.as_deref().map(str::trim) {
            Some("") | None => None,
            Some(m) if m.eq_ignore_ascii_case("any") || m.eq_ignore_ascii_case("surprise") => None,
            Some(m) => Some(m),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Apparel,
    Accessory,
    Footwear,
}

/// Product snapshot supplied fresh per recommendation call; never mutated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub category: Category,
    #[serde(default)]
    pub subcategory: Option<String>,
    pub price: f64,
    #[serde(rename = "stockQuantity", default = "default_stock_quantity")]
    pub stock_quantity: u32,
    #[serde(rename = "inStock", default = "default_true")]
    pub in_stock: bool,
    #[serde(default = "default_item_gender")]
    pub gender: Gender,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(rename = "styleTags", default)]
    pub style_tags: Vec<String>,
    #[serde(rename = "occasionTags", default)]
    pub occasion_tags: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "giftSuitable", default)]
    pub gift_suitable: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(rename = "productUrl", default)]
    pub product_url: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_stock_quantity() -> u32 {
    1
}

fn default_item_gender() -> Gender {
    Gender::Unisex
}

impl CatalogItem {
    /// Subcategory when tagged, otherwise the category name; used for
    /// diversity tracking within a look.
    pub fn piece_kind(&self) -> String {
        match self.subcategory.as_deref() {
            Some(s) if !s.trim().is_empty() => s.trim().to_lowercase(),
            _ => format!("{:?}", self.category).to_lowercase(),
        }
    }

    pub fn image_or_placeholder(&self) -> String {
        match self.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.to_string(),
            _ => PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }

    pub fn purchase_url(&self) -> String {
        match self.product_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.to_string(),
            _ => format!("https://shop.attire.app/products/{}", self.id),
        }
    }
}

/// One catalog item as it appears inside a look
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookItem {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub name: String,
    pub brand: String,
    pub category: Category,
    pub price: f64,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "productUrl")]
    pub product_url: String,
    #[serde(rename = "stylingNote")]
    pub styling_note: String,
}

/// A bundle of 2-4 items presented as a single purchasable outfit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Look {
    pub index: usize,
    pub name: String,
    pub description: String,
    pub items: Vec<LookItem>,
    #[serde(rename = "totalPrice")]
    pub total_price: f64,
    #[serde(rename = "styleTip")]
    pub style_tip: String,
}

/// Point values added to a candidate's score when a match condition fires
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub style_match: f64,
    pub occasion_match: f64,
    pub color_harmony: f64,
    pub color_novelty: f64,
    pub size_fit: f64,
    pub brand_novelty: f64,
    pub subcategory_novelty: f64,
    pub gift_suitable: f64,
    pub premium_brand: f64,
    pub featured: f64,
    pub sweet_spot: f64,
    pub premium_pick: f64,
    /// Upper bound of the random tie-break addend; zero disables jitter
    pub jitter: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            style_match: 30.0,
            occasion_match: 25.0,
            color_harmony: 15.0,
            color_novelty: 5.0,
            size_fit: 20.0,
            brand_novelty: 8.0,
            subcategory_novelty: 8.0,
            gift_suitable: 12.0,
            premium_brand: 6.0,
            featured: 10.0,
            sweet_spot: 10.0,
            premium_pick: 4.0,
            jitter: 2.0,
        }
    }
}

/// Immutable lookup tables and weights the scorer runs against
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub style_keywords: HashMap<String, Vec<String>>,
    pub occasion_keywords: HashMap<String, Vec<String>>,
    pub color_palettes: HashMap<String, Vec<String>>,
    /// Accepted when the quiz leaves the color mood to the engine
    pub broad_palette: Vec<String>,
    pub premium_brands: Vec<String>,
    pub weights: ScoringWeights,
}

impl ScoringConfig {
    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self {
            weights,
            ..Self::default()
        }
    }

    /// Palette for the profile's mood; unknown moods degrade to the broad
    /// palette rather than disabling color scoring.
    pub fn palette_for(&self, mood: Option<&str>) -> &[String] {
        mood.and_then(|m| self.color_palettes.get(&m.to_lowercase()))
            .map(Vec::as_slice)
            .unwrap_or(&self.broad_palette)
    }
}

fn keyword_table(rows: &[(&str, &[&str])]) -> HashMap<String, Vec<String>> {
    rows.iter()
        .map(|(key, words)| {
            (
                key.to_string(),
                words.iter().map(|w| w.to_string()).collect(),
            )
        })
        .collect()
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            style_keywords: keyword_table(&[
                ("casual", &["casual", "everyday", "relaxed", "weekend", "laid-back"]),
                ("formal", &["formal", "tailored", "office", "business", "dressy"]),
                ("streetwear", &["street", "urban", "oversized", "graphic", "skate"]),
                ("bohemian", &["boho", "flowy", "floral", "fringe", "artisan"]),
                ("sporty", &["athletic", "active", "sport", "performance", "gym"]),
                ("minimalist", &["minimal", "clean", "classic", "essential", "simple"]),
                ("vintage", &["retro", "vintage", "heritage", "throwback", "classic"]),
            ]),
            occasion_keywords: keyword_table(&[
                ("work", &["office", "work", "business", "professional", "commute"]),
                ("party", &["party", "night", "evening", "festive", "glam"]),
                ("wedding", &["wedding", "ceremony", "reception", "festive", "ethnic"]),
                ("date", &["date", "dinner", "romantic", "evening"]),
                ("vacation", &["vacation", "travel", "beach", "resort", "summer"]),
                ("daily", &["daily", "everyday", "casual", "errand", "campus"]),
                ("festival", &["festival", "traditional", "celebration", "ethnic"]),
            ]),
            color_palettes: keyword_table(&[
                ("warm", &["red", "orange", "rust", "mustard", "burgundy", "coral", "brown", "tan"]),
                ("cool", &["blue", "navy", "teal", "mint", "lavender", "grey", "ice"]),
                ("neutral", &["black", "white", "beige", "cream", "grey", "taupe", "khaki"]),
                ("earthy", &["olive", "brown", "terracotta", "sand", "moss", "khaki"]),
                ("pastel", &["blush", "baby blue", "lilac", "mint", "peach", "cream"]),
                ("bold", &["red", "cobalt", "emerald", "fuchsia", "yellow", "royal blue"]),
                ("monochrome", &["black", "white", "charcoal", "grey"]),
            ]),
            broad_palette: [
                "black", "white", "navy", "beige", "grey", "blue", "brown", "olive", "cream",
                "tan",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            premium_brands: ["Aurelle", "Marchetti", "Lyndon & Co", "Veritas", "Okane"]
                .iter()
                .map(|b| b.to_string())
                .collect(),
            weights: ScoringWeights::default(),
        }
    }
}
