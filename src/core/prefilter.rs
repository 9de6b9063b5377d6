use std::collections::HashSet;

use crate::models::{CatalogItem, Category, Gender, PreferenceProfile};

/// The three disjoint pools the assembler draws from
#[derive(Debug, Clone, Default)]
pub struct CategoryPools {
    pub apparel: Vec<CatalogItem>,
    pub accessories: Vec<CatalogItem>,
    pub footwear: Vec<CatalogItem>,
}

impl CategoryPools {
    pub fn is_empty(&self) -> bool {
        self.apparel.is_empty() && self.accessories.is_empty() && self.footwear.is_empty()
    }

    pub fn total(&self) -> usize {
        self.apparel.len() + self.accessories.len() + self.footwear.len()
    }
}

/// Check a single item against the hard eligibility gates
///
/// This is Stage 1 of the pipeline; an empty result is valid and propagates
/// to the fallback generator.
#[inline]
pub fn is_eligible(
    item: &CatalogItem,
    profile: &PreferenceProfile,
    exclude: &HashSet<String>,
    budget_ceiling: f64,
) -> bool {
    // Items without a stable id can never be purchased
    if item.id.trim().is_empty() {
        return false;
    }

    if !item.in_stock || item.stock_quantity == 0 {
        return false;
    }

    if exclude.contains(&item.id) {
        return false;
    }

    // Unisex items fit everyone; otherwise the tags must agree unless the
    // quiz never asked
    if item.gender != Gender::Unisex
        && profile.gender != Gender::Unset
        && item.gender != profile.gender
    {
        return false;
    }

    if item.price > budget_ceiling {
        return false;
    }

    true
}

/// Narrow the full catalog to items the assembler may consider
pub fn prefilter_catalog(
    catalog: &[CatalogItem],
    profile: &PreferenceProfile,
    exclude: &HashSet<String>,
    budget_ceiling: f64,
) -> Vec<CatalogItem> {
    catalog
        .iter()
        .filter(|item| is_eligible(item, profile, exclude, budget_ceiling))
        .cloned()
        .collect()
}

/// Pure split of the prefiltered set into the three category pools
pub fn partition_by_category(items: Vec<CatalogItem>) -> CategoryPools {
    let mut pools = CategoryPools::default();

    for item in items {
        match item.category {
            Category::Apparel => pools.apparel.push(item),
            Category::Accessory => pools.accessories.push(item),
            Category::Footwear => pools.footwear.push(item),
        }
    }

    pools
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Purpose;

    fn test_item(id: &str, category: Category, price: f64) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            brand: "Northway".to_string(),
            category,
            subcategory: None,
            price,
            stock_quantity: 3,
            in_stock: true,
            gender: Gender::Unisex,
            colors: vec!["navy".to_string()],
            sizes: vec!["M".to_string()],
            style_tags: vec![],
            occasion_tags: vec![],
            tags: vec![],
            gift_suitable: false,
            featured: false,
            image_url: None,
            product_url: None,
        }
    }

    fn test_profile(gender: Gender) -> PreferenceProfile {
        PreferenceProfile {
            purpose: Purpose::Personal,
            gender,
            style: "casual".to_string(),
            occasion: "daily".to_string(),
            budget: None,
            color_mood: None,
            sizes: None,
        }
    }

    #[test]
    fn test_eligible_item_passes() {
        let item = test_item("1", Category::Apparel, 900.0);
        let profile = test_profile(Gender::Unset);

        assert!(is_eligible(&item, &profile, &HashSet::new(), 5000.0));
    }

    #[test]
    fn test_missing_id_is_silently_ineligible() {
        let mut item = test_item("", Category::Apparel, 900.0);
        let profile = test_profile(Gender::Unset);
        assert!(!is_eligible(&item, &profile, &HashSet::new(), 5000.0));

        item.id = "  ".to_string();
        assert!(!is_eligible(&item, &profile, &HashSet::new(), 5000.0));
    }

    #[test]
    fn test_out_of_stock_filtered() {
        let mut item = test_item("1", Category::Apparel, 900.0);
        item.in_stock = false;
        let profile = test_profile(Gender::Unset);
        assert!(!is_eligible(&item, &profile, &HashSet::new(), 5000.0));

        let mut item = test_item("2", Category::Apparel, 900.0);
        item.stock_quantity = 0;
        assert!(!is_eligible(&item, &profile, &HashSet::new(), 5000.0));
    }

    #[test]
    fn test_excluded_id_filtered() {
        let item = test_item("seen-1", Category::Apparel, 900.0);
        let profile = test_profile(Gender::Unset);
        let exclude: HashSet<String> = ["seen-1".to_string()].into_iter().collect();

        assert!(!is_eligible(&item, &profile, &exclude, 5000.0));
    }

    #[test]
    fn test_gender_gate() {
        let mut item = test_item("1", Category::Apparel, 900.0);
        item.gender = Gender::Male;

        // Mismatched profile gender filters the item out
        assert!(!is_eligible(&item, &test_profile(Gender::Female), &HashSet::new(), 5000.0));
        // Matching or unset profile gender keeps it
        assert!(is_eligible(&item, &test_profile(Gender::Male), &HashSet::new(), 5000.0));
        assert!(is_eligible(&item, &test_profile(Gender::Unset), &HashSet::new(), 5000.0));

        // Unisex items fit everyone
        item.gender = Gender::Unisex;
        assert!(is_eligible(&item, &test_profile(Gender::Female), &HashSet::new(), 5000.0));
    }

    #[test]
    fn test_budget_ceiling_is_inclusive() {
        let at_ceiling = test_item("1", Category::Apparel, 5000.0);
        let above = test_item("2", Category::Apparel, 5000.01);
        let profile = test_profile(Gender::Unset);

        assert!(is_eligible(&at_ceiling, &profile, &HashSet::new(), 5000.0));
        assert!(!is_eligible(&above, &profile, &HashSet::new(), 5000.0));
    }

    #[test]
    fn test_partition_splits_disjointly() {
        let items = vec![
            test_item("a1", Category::Apparel, 900.0),
            test_item("f1", Category::Footwear, 1200.0),
            test_item("x1", Category::Accessory, 300.0),
            test_item("a2", Category::Apparel, 1500.0),
        ];

        let pools = partition_by_category(items);

        assert_eq!(pools.apparel.len(), 2);
        assert_eq!(pools.accessories.len(), 1);
        assert_eq!(pools.footwear.len(), 1);
        assert_eq!(pools.total(), 4);
        assert!(!pools.is_empty());
    }

    #[test]
    fn test_empty_catalog_prefilters_to_empty() {
        let profile = test_profile(Gender::Unset);
        let filtered = prefilter_catalog(&[], &profile, &HashSet::new(), 5000.0);
        assert!(filtered.is_empty());
    }
}
