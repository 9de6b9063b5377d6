use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use crate::core::fallback::build_fallback_looks;
use crate::core::namer;
use crate::core::prefilter::{partition_by_category, prefilter_catalog, CategoryPools};
use crate::core::scoring::{score_item, LookState, ScoredCandidate};
use crate::models::{
    CatalogItem, Category, Look, LookItem, PreferenceProfile, ScoringConfig, DEFAULT_BUDGET,
};

/// Look slots attempted per call
pub const LOOKS_PER_CALL: usize = 5;
/// Share of the remaining per-look budget an apparel pick may consume;
/// reserves room for an accessory and footwear
const APPAREL_BUDGET_SHARE: f64 = 0.70;
/// Share of the remaining per-look budget an accessory pick may consume
const ACCESSORY_BUDGET_SHARE: f64 = 0.50;
/// Top-ranked candidates the premium/value bias chooses between
const BIAS_WINDOW: usize = 3;

/// Result of a regeneration call
///
/// `excluded` is the updated exclusion set for the caller to thread into the
/// next call; the engine never mutates the caller's copy. `pool_reset`
/// reports that exclusion exhausted the catalog and the retry ran against a
/// fresh pool.
#[derive(Debug, Clone)]
pub struct RegenerationResult {
    pub looks: Vec<Look>,
    pub excluded: HashSet<String>,
    pub pool_reset: bool,
}

/// Main orchestrator - implements the look assembly pipeline
///
/// # Pipeline Stages
/// 1. Catalog prefilter (stock, gender, budget ceiling, exclusions)
/// 2. Category partition into apparel / accessories / footwear pools
/// 3. Relevance scoring and ranking per pool
/// 4. Greedy per-slot selection under the per-look budget
/// 5. Naming, then fallback round-robin if no slot produced a look
#[derive(Debug, Clone)]
pub struct LookAssembler {
    config: ScoringConfig,
    looks_per_call: usize,
    default_budget: f64,
    jitter_seed: Option<u64>,
}

impl LookAssembler {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            looks_per_call: LOOKS_PER_CALL,
            default_budget: DEFAULT_BUDGET,
            jitter_seed: None,
        }
    }

    pub fn with_default_config() -> Self {
        Self::new(ScoringConfig::default())
    }

    pub fn looks_per_call(mut self, count: usize) -> Self {
        if count > 0 {
            self.looks_per_call = count;
        }
        self
    }

    pub fn default_budget(mut self, budget: f64) -> Self {
        if budget > 0.0 {
            self.default_budget = budget;
        }
        self
    }

    /// Fix the jitter seed to make ranking reproducible
    pub fn jitter_seed(mut self, seed: u64) -> Self {
        self.jitter_seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.jitter_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Generate ranked, budget-respecting, diverse looks
    ///
    /// Never errors: an empty catalog, a fully-excluded pool, or an
    /// unparsable budget all degrade instead. An empty result is valid.
    pub fn generate_looks(
        &self,
        profile: &PreferenceProfile,
        catalog: &[CatalogItem],
        exclude: &HashSet<String>,
    ) -> Vec<Look> {
        let budget = profile.budget_ceiling(self.default_budget);
        let eligible = prefilter_catalog(catalog, profile, exclude, budget);

        tracing::debug!(
            "{} of {} catalog items eligible (budget ceiling {})",
            eligible.len(),
            catalog.len(),
            budget
        );

        let pools = partition_by_category(eligible);
        let mut rng = self.rng();
        let mut used_ids: HashSet<String> = HashSet::new();
        let mut looks = Vec::new();

        for index in 0..self.looks_per_call {
            if let Some(look) =
                self.assemble_look(index, budget, profile, &pools, &mut used_ids, &mut rng)
            {
                looks.push(look);
            }
        }

        if looks.is_empty() && !pools.is_empty() {
            tracing::debug!("scored pipeline yielded no looks, running fallback round-robin");
            looks = build_fallback_looks(&pools, profile, self.looks_per_call);
        }

        looks
    }

    /// Re-run the pipeline with everything already shown excluded
    ///
    /// If exclusion leaves too little catalog to build any look, the
    /// exclusion set is cleared and the pipeline retried once against the
    /// fresh pool; the reset is reported, never silent.
    pub fn regenerate_looks(
        &self,
        profile: &PreferenceProfile,
        catalog: &[CatalogItem],
        previously_shown: &[String],
    ) -> RegenerationResult {
        let mut excluded: HashSet<String> = previously_shown.iter().cloned().collect();
        let mut pool_reset = false;

        let mut looks = self.generate_looks(profile, catalog, &excluded);
        if looks.is_empty() && !excluded.is_empty() {
            tracing::info!(
                "exclusion of {} ids exhausted the catalog, retrying with a fresh pool",
                excluded.len()
            );
            pool_reset = true;
            excluded.clear();
            looks = self.generate_looks(profile, catalog, &excluded);
        }

        for look in &looks {
            for item in &look.items {
                excluded.insert(item.product_id.clone());
            }
        }

        RegenerationResult {
            looks,
            excluded,
            pool_reset,
        }
    }

    /// Greedily fill one look slot; None when fewer than two items or two
    /// categories could be assembled (no placeholder looks).
    fn assemble_look(
        &self,
        index: usize,
        budget: f64,
        profile: &PreferenceProfile,
        pools: &CategoryPools,
        used_ids: &mut HashSet<String>,
        rng: &mut StdRng,
    ) -> Option<Look> {
        let mut state = LookState::new(budget);
        let mut look_used = used_ids.clone();
        let mut items: Vec<LookItem> = Vec::new();

        // Alternate the premium/value bias per pick, flipping the starting
        // direction each look so consecutive looks differ in texture
        let mut premium_pick = index % 2 == 0;

        for _ in 0..2 {
            let limit = state.remaining_budget * APPAREL_BUDGET_SHARE;
            let ranked = self.rank_pool(&pools.apparel, profile, &state, &look_used, limit, rng);
            let Some(choice) = choose_with_bias(&ranked, premium_pick) else {
                break;
            };
            premium_pick = !premium_pick;
            select(choice, &mut items, &mut state, &mut look_used);
        }

        let limit = state.remaining_budget * ACCESSORY_BUDGET_SHARE;
        if let Some(choice) = self
            .rank_pool(&pools.accessories, profile, &state, &look_used, limit, rng)
            .first()
        {
            select(choice, &mut items, &mut state, &mut look_used);
        }

        let limit = state.remaining_budget;
        if let Some(choice) = self
            .rank_pool(&pools.footwear, profile, &state, &look_used, limit, rng)
            .first()
        {
            select(choice, &mut items, &mut state, &mut look_used);
        }

        let categories: HashSet<Category> = items.iter().map(|item| item.category).collect();
        if items.len() < 2 || categories.len() < 2 {
            return None;
        }

        used_ids.extend(items.iter().map(|item| item.product_id.clone()));

        let (name, description) = namer::name_look(index, &profile.purpose, &profile.occasion);
        let style_tip = namer::style_tip(index, &profile.purpose, &profile.occasion);
        let total_price = items.iter().map(|item| item.price).sum();

        Some(Look {
            index,
            name,
            description,
            items,
            total_price,
            style_tip,
        })
    }

    /// Score the eligible slice of a pool and rank it best-first
    fn rank_pool<'a>(
        &self,
        pool: &'a [CatalogItem],
        profile: &PreferenceProfile,
        state: &LookState,
        used: &HashSet<String>,
        price_limit: f64,
        rng: &mut StdRng,
    ) -> Vec<ScoredCandidate<'a>> {
        let mut ranked: Vec<ScoredCandidate<'a>> = pool
            .iter()
            // The price gate is inclusive at the limit
            .filter(|item| !used.contains(&item.id) && item.price <= price_limit)
            .map(|item| score_item(item, profile, state, &self.config, rng))
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    a.item
                        .price
                        .partial_cmp(&b.item.price)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
        });

        ranked
    }
}

impl Default for LookAssembler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

/// Among the top-ranked candidates, lean expensive (premium) or cheap
/// (value); ranking already sorted best-first.
fn choose_with_bias<'c, 'a>(
    ranked: &'c [ScoredCandidate<'a>],
    premium: bool,
) -> Option<&'c ScoredCandidate<'a>> {
    let window = &ranked[..ranked.len().min(BIAS_WINDOW)];
    if premium {
        window.iter().max_by(|a, b| {
            a.item
                .price
                .partial_cmp(&b.item.price)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    } else {
        window.iter().min_by(|a, b| {
            a.item
                .price
                .partial_cmp(&b.item.price)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

fn select(
    choice: &ScoredCandidate<'_>,
    items: &mut Vec<LookItem>,
    state: &mut LookState,
    look_used: &mut HashSet<String>,
) {
    let item = choice.item;
    items.push(LookItem {
        product_id: item.id.clone(),
        name: item.name.clone(),
        brand: item.brand.clone(),
        category: item.category,
        price: item.price,
        image_url: item.image_or_placeholder(),
        product_url: item.purchase_url(),
        styling_note: choice.styling_note(),
    });
    state.record(item);
    look_used.insert(item.id.clone());
}
