use rand::Rng;
use std::collections::HashSet;

use crate::models::{CatalogItem, Category, PreferenceProfile, ScoringConfig};

/// Sweet-spot band as a share of the remaining per-look budget
const SWEET_SPOT_LOW: f64 = 0.30;
const SWEET_SPOT_HIGH: f64 = 0.60;
/// Above this share of remaining budget a pick counts as a premium allowance
const PREMIUM_SHARE: f64 = 0.80;

/// Per-look context read by the novelty bonuses; updated only when an item
/// is actually selected.
#[derive(Debug, Clone)]
pub struct LookState {
    pub used_colors: HashSet<String>,
    pub used_brands: HashSet<String>,
    pub used_kinds: HashSet<String>,
    pub remaining_budget: f64,
}

impl LookState {
    pub fn new(budget: f64) -> Self {
        Self {
            used_colors: HashSet::new(),
            used_brands: HashSet::new(),
            used_kinds: HashSet::new(),
            remaining_budget: budget,
        }
    }

    /// Record a selected item so later candidates in the same look see its
    /// colors, brand, and piece kind.
    pub fn record(&mut self, item: &CatalogItem) {
        for color in &item.colors {
            self.used_colors.insert(color.to_lowercase());
        }
        if !item.brand.trim().is_empty() {
            self.used_brands.insert(item.brand.to_lowercase());
        }
        self.used_kinds.insert(item.piece_kind());
        self.remaining_budget = (self.remaining_budget - item.price).max(0.0);
    }
}

/// A candidate paired with its score and the reasons that fired, in order
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub item: &'a CatalogItem,
    pub score: f64,
    pub reasons: Vec<String>,
}

impl ScoredCandidate<'_> {
    /// The top reason doubles as the styling note on the assembled look
    pub fn styling_note(&self) -> String {
        self.reasons
            .first()
            .cloned()
            .unwrap_or_else(|| "A versatile piece that pulls the look together".to_string())
    }
}

/// Size class implied by an item's subcategory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Top,
    Bottom,
    Shoe,
}

const TOP_HINTS: &[&str] = &[
    "shirt", "tee", "top", "blouse", "sweater", "hoodie", "jacket", "coat", "kurta", "dress",
];
const BOTTOM_HINTS: &[&str] = &["pant", "jean", "trouser", "short", "skirt", "chino", "jogger"];
const SHOE_HINTS: &[&str] = &["shoe", "sneaker", "boot", "loafer", "sandal", "heel", "flat"];

/// Infer which profile size applies to an item, if any
pub fn infer_size_class(item: &CatalogItem) -> Option<SizeClass> {
    if item.category == Category::Footwear {
        return Some(SizeClass::Shoe);
    }

    let kind = item.piece_kind();
    if TOP_HINTS.iter().any(|hint| kind.contains(hint)) {
        Some(SizeClass::Top)
    } else if BOTTOM_HINTS.iter().any(|hint| kind.contains(hint)) {
        Some(SizeClass::Bottom)
    } else if SHOE_HINTS.iter().any(|hint| kind.contains(hint)) {
        Some(SizeClass::Shoe)
    } else {
        None
    }
}

/// True when any table keyword appears among the given tag lists; stops at
/// the first hit so a keyword never double-counts.
fn any_keyword_hit(keywords: &[String], tag_lists: &[&[String]]) -> bool {
    keywords.iter().any(|keyword| {
        let keyword = keyword.to_lowercase();
        tag_lists
            .iter()
            .any(|tags| tags.iter().any(|tag| tag.to_lowercase().contains(&keyword)))
    })
}

/// Substring-tolerant overlap between item colors and a palette, lowercased
fn palette_matches(colors: &[String], palette: &[String]) -> Vec<String> {
    colors
        .iter()
        .map(|c| c.to_lowercase())
        .filter(|color| {
            palette
                .iter()
                .any(|p| color.contains(p.as_str()) || p.contains(color.as_str()))
        })
        .collect()
}

/// Score one candidate against the profile and the look under construction
///
/// Additive: each rule that fires adds its weight and pushes a
/// human-readable reason. The final addend is bounded random jitter so
/// equal-scoring candidates don't tie deterministically.
pub fn score_item<'a>(
    item: &'a CatalogItem,
    profile: &PreferenceProfile,
    state: &LookState,
    config: &ScoringConfig,
    rng: &mut impl Rng,
) -> ScoredCandidate<'a> {
    let weights = &config.weights;
    let mut score = 0.0;
    let mut reasons = Vec::new();

    // Style match
    if let Some(keywords) = config.style_keywords.get(&profile.style.to_lowercase()) {
        if any_keyword_hit(keywords, &[&item.style_tags[..], &item.tags[..]]) {
            score += weights.style_match;
            reasons.push(format!("Matches your {} style", profile.style.to_lowercase()));
        }
    }

    // Occasion match
    if let Some(keywords) = config.occasion_keywords.get(&profile.occasion.to_lowercase()) {
        if any_keyword_hit(keywords, &[&item.occasion_tags[..], &item.tags[..]]) {
            score += weights.occasion_match;
            reasons.push(format!("Right for a {} occasion", profile.occasion.to_lowercase()));
        }
    }

    // Color harmony plus in-look novelty
    let palette = config.palette_for(profile.chosen_color_mood());
    let matched_colors = palette_matches(&item.colors, palette);
    if !matched_colors.is_empty() {
        score += weights.color_harmony;
        reasons.push("Works with your colour mood".to_string());

        if matched_colors
            .iter()
            .any(|color| !state.used_colors.contains(color))
        {
            score += weights.color_novelty;
            reasons.push("Adds a fresh colour to this look".to_string());
        }
    }

    // Size fit, when the quiz collected sizes and the subcategory implies one
    if let Some(sizes) = &profile.sizes {
        if let Some(class) = infer_size_class(item) {
            let wanted = match class {
                SizeClass::Top => sizes.top.as_deref(),
                SizeClass::Bottom => sizes.bottom.as_deref(),
                SizeClass::Shoe => sizes.shoe.as_deref(),
            };
            if let Some(size) = wanted {
                if item
                    .sizes
                    .iter()
                    .any(|have| have.eq_ignore_ascii_case(size.trim()))
                {
                    score += weights.size_fit;
                    reasons.push("Available in your size".to_string());
                }
            }
        }
    }

    // Brand novelty within this look
    if !item.brand.trim().is_empty() && !state.used_brands.contains(&item.brand.to_lowercase()) {
        score += weights.brand_novelty;
        reasons.push("A new label for this look".to_string());
    }

    // Subcategory novelty within this look
    if !state.used_kinds.contains(&item.piece_kind()) {
        score += weights.subcategory_novelty;
        reasons.push("Adds a different kind of piece".to_string());
    }

    // Gift suitability, only for gift flows
    if profile.purpose.is_gift() {
        if item.gift_suitable {
            score += weights.gift_suitable;
            reasons.push("Wraps well as a gift".to_string());
        }
        if config
            .premium_brands
            .iter()
            .any(|brand| brand.eq_ignore_ascii_case(item.brand.trim()))
        {
            score += weights.premium_brand;
            reasons.push("A premium label worth gifting".to_string());
        }
    }

    if item.featured {
        score += weights.featured;
        reasons.push("Featured this season".to_string());
    }

    // Price-to-budget ratio against the remaining per-look budget
    if state.remaining_budget > 0.0 {
        let ratio = item.price / state.remaining_budget;
        if (SWEET_SPOT_LOW..=SWEET_SPOT_HIGH).contains(&ratio) {
            score += weights.sweet_spot;
            reasons.push("Sits in the budget sweet spot".to_string());
        } else if ratio > PREMIUM_SHARE {
            score += weights.premium_pick;
            reasons.push("A premium pick within budget".to_string());
        }
    }

    // Tie-break jitter; the one nondeterministic addend
    if weights.jitter > 0.0 {
        score += rng.gen_range(0.0..weights.jitter);
    }

    ScoredCandidate {
        item,
        score,
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Purpose, ScoringWeights, Sizes};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn no_jitter_config() -> ScoringConfig {
        let mut weights = ScoringWeights::default();
        weights.jitter = 0.0;
        ScoringConfig::with_weights(weights)
    }

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn test_item(id: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: "Relaxed Oxford Shirt".to_string(),
            brand: "Northway".to_string(),
            category: Category::Apparel,
            subcategory: Some("Shirt".to_string()),
            price: 1500.0,
            stock_quantity: 5,
            in_stock: true,
            gender: Gender::Unisex,
            colors: vec!["Navy".to_string()],
            sizes: vec!["S".to_string(), "M".to_string()],
            style_tags: vec!["casual".to_string()],
            occasion_tags: vec!["office".to_string()],
            tags: vec![],
            gift_suitable: true,
            featured: false,
            image_url: None,
            product_url: None,
        }
    }

    fn test_profile() -> PreferenceProfile {
        PreferenceProfile {
            purpose: Purpose::Personal,
            gender: Gender::Unset,
            style: "casual".to_string(),
            occasion: "work".to_string(),
            budget: None,
            color_mood: Some("cool".to_string()),
            sizes: Some(Sizes {
                top: Some("M".to_string()),
                bottom: None,
                shoe: None,
            }),
        }
    }

    #[test]
    fn test_score_accumulates_reasons() {
        let config = no_jitter_config();
        let item = test_item("1");
        let profile = test_profile();
        let state = LookState::new(5000.0);

        let candidate = score_item(&item, &profile, &state, &config, &mut test_rng());

        // style + occasion + color + color novelty + size + brand novelty
        // + kind novelty + sweet spot (1500/5000 = 0.3)
        let weights = &config.weights;
        let expected = weights.style_match
            + weights.occasion_match
            + weights.color_harmony
            + weights.color_novelty
            + weights.size_fit
            + weights.brand_novelty
            + weights.subcategory_novelty
            + weights.sweet_spot;
        assert!((candidate.score - expected).abs() < 1e-9);
        assert_eq!(candidate.reasons.len(), 8);
        assert_eq!(candidate.styling_note(), "Matches your casual style");
    }

    #[test]
    fn test_style_match_fires_once() {
        let config = no_jitter_config();
        let mut item = test_item("1");
        // Two tags hitting the same table row must not double count
        item.style_tags = vec!["casual".to_string(), "everyday".to_string()];
        item.occasion_tags.clear();
        item.colors.clear();
        item.gift_suitable = false;
        let mut profile = test_profile();
        profile.sizes = None;

        let state = LookState::new(5000.0);
        let candidate = score_item(&item, &profile, &state, &config, &mut test_rng());

        let weights = &config.weights;
        let expected = weights.style_match
            + weights.brand_novelty
            + weights.subcategory_novelty
            + weights.sweet_spot;
        assert!((candidate.score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_novelty_bonuses_respect_look_state() {
        let config = no_jitter_config();
        let item = test_item("1");
        let profile = test_profile();

        let mut state = LookState::new(5000.0);
        let fresh = score_item(&item, &profile, &state, &config, &mut test_rng());

        // Selecting the item marks its color/brand/kind as used; a repeat
        // loses all three novelties. 1500 of the remaining 3500 is still in
        // the sweet-spot band, so that bonus fires both times.
        state.record(&item);
        let repeat = score_item(&item, &profile, &state, &config, &mut test_rng());

        let weights = &config.weights;
        let lost = weights.color_novelty + weights.brand_novelty + weights.subcategory_novelty;
        assert!((fresh.score - repeat.score - lost).abs() < 1e-9);
    }

    #[test]
    fn test_gift_bonuses_only_for_gift_purpose() {
        let config = no_jitter_config();
        let mut item = test_item("1");
        item.brand = "Aurelle".to_string();
        let state = LookState::new(5000.0);

        let personal = test_profile();
        let personal_score =
            score_item(&item, &personal, &state, &config, &mut test_rng()).score;

        let mut gift = test_profile();
        gift.purpose = Purpose::Gift {
            recipient_relationship: Some("partner".to_string()),
        };
        let gift_score = score_item(&item, &gift, &state, &config, &mut test_rng()).score;

        let weights = &config.weights;
        let expected_gain = weights.gift_suitable + weights.premium_brand;
        assert!((gift_score - personal_score - expected_gain).abs() < 1e-9);
    }

    #[test]
    fn test_premium_pick_band() {
        let config = no_jitter_config();
        let mut item = test_item("1");
        item.price = 4500.0; // 90% of budget
        item.style_tags.clear();
        item.occasion_tags.clear();
        item.colors.clear();
        let mut profile = test_profile();
        profile.sizes = None;

        let state = LookState::new(5000.0);
        let candidate = score_item(&item, &profile, &state, &config, &mut test_rng());

        assert!(candidate
            .reasons
            .iter()
            .any(|r| r == "A premium pick within budget"));
    }

    #[test]
    fn test_size_class_inference() {
        let mut item = test_item("1");
        assert_eq!(infer_size_class(&item), Some(SizeClass::Top));

        item.subcategory = Some("Slim Jeans".to_string());
        assert_eq!(infer_size_class(&item), Some(SizeClass::Bottom));

        item.category = Category::Footwear;
        assert_eq!(infer_size_class(&item), Some(SizeClass::Shoe));

        item.category = Category::Accessory;
        item.subcategory = Some("Belt".to_string());
        assert_eq!(infer_size_class(&item), None);
    }

    #[test]
    fn test_zero_jitter_is_deterministic() {
        let config = no_jitter_config();
        let item = test_item("1");
        let profile = test_profile();
        let state = LookState::new(5000.0);

        let a = score_item(&item, &profile, &state, &config, &mut test_rng()).score;
        let b = score_item(&item, &profile, &state, &config, &mut StdRng::seed_from_u64(99)).score;
        assert_eq!(a, b);
    }

    #[test]
    fn test_jitter_is_bounded() {
        let config = ScoringConfig::default();
        let mut item = test_item("1");
        item.style_tags.clear();
        item.occasion_tags.clear();
        item.colors.clear();
        item.brand = String::new();
        item.subcategory = None;
        item.gift_suitable = false;
        item.price = 10.0;
        let mut profile = test_profile();
        profile.sizes = None;

        // Only kind novelty plus jitter can fire here
        let mut state = LookState::new(5000.0);
        state.used_kinds.insert(item.piece_kind());

        let mut rng = test_rng();
        for _ in 0..50 {
            let candidate = score_item(&item, &profile, &state, &config, &mut rng);
            assert!(candidate.score >= 0.0);
            assert!(candidate.score < config.weights.jitter);
        }
    }
}
