use crate::core::namer;
use crate::core::prefilter::CategoryPools;
use crate::models::{CatalogItem, Category, Look, LookItem, PreferenceProfile};

/// Hard cap on round-robin slots
const MAX_FALLBACK_LOOKS: usize = 5;

/// Generic styling notes used when no scoring reasons exist
fn generic_note(category: Category) -> &'static str {
    match category {
        Category::Apparel => "An easy anchor to build the rest of the look around",
        Category::Accessory => "Finishes the outfit without trying too hard",
        Category::Footwear => "Grounds the look for a full day on your feet",
    }
}

fn to_look_item(item: &CatalogItem) -> LookItem {
    LookItem {
        product_id: item.id.clone(),
        name: item.name.clone(),
        brand: item.brand.clone(),
        category: item.category,
        price: item.price,
        image_url: item.image_or_placeholder(),
        product_url: item.purchase_url(),
        styling_note: generic_note(item.category).to_string(),
    }
}

/// Unscored round-robin assembly, invoked only when the scored pipeline
/// yields zero looks. Takes up to two apparel items, one accessory, and one
/// footwear item per slot until the pools run dry.
///
/// Non-empty whenever the prefiltered catalog is non-empty; the two-item,
/// two-category floor is honored whenever the pools permit it.
pub fn build_fallback_looks(
    pools: &CategoryPools,
    profile: &PreferenceProfile,
    max_looks: usize,
) -> Vec<Look> {
    let slots = max_looks.min(MAX_FALLBACK_LOOKS);
    let mut apparel = pools.apparel.iter();
    let mut accessories = pools.accessories.iter();
    let mut footwear = pools.footwear.iter();

    let mut looks = Vec::new();
    for index in 0..slots {
        let mut items: Vec<LookItem> = apparel.by_ref().take(2).map(to_look_item).collect();
        if let Some(item) = accessories.next() {
            items.push(to_look_item(item));
        }
        if let Some(item) = footwear.next() {
            items.push(to_look_item(item));
        }

        if items.is_empty() {
            break;
        }

        let (name, description) = namer::name_look(index, &profile.purpose, &profile.occasion);
        let style_tip = namer::style_tip(index, &profile.purpose, &profile.occasion);
        let total_price = items.iter().map(|item| item.price).sum();

        looks.push(Look {
            index,
            name,
            description,
            items,
            total_price,
            style_tip,
        });
    }

    looks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prefilter::partition_by_category;
    use crate::models::{Gender, Purpose};

    fn test_item(id: &str, category: Category, price: f64) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            brand: "Northway".to_string(),
            category,
            subcategory: None,
            price,
            stock_quantity: 1,
            in_stock: true,
            gender: Gender::Unisex,
            colors: vec![],
            sizes: vec![],
            style_tags: vec![],
            occasion_tags: vec![],
            tags: vec![],
            gift_suitable: false,
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
            occasion: "daily".to_string(),
            budget: None,
            color_mood: None,
            sizes: None,
        }
    }

    #[test]
    fn test_round_robin_composition() {
        let pools = partition_by_category(vec![
            test_item("a1", Category::Apparel, 800.0),
            test_item("a2", Category::Apparel, 900.0),
            test_item("a3", Category::Apparel, 1000.0),
            test_item("x1", Category::Accessory, 300.0),
            test_item("f1", Category::Footwear, 1200.0),
        ]);

        let looks = build_fallback_looks(&pools, &test_profile(), 5);

        assert_eq!(looks.len(), 2);
        // First slot: two apparel, the accessory, the footwear
        assert_eq!(looks[0].items.len(), 4);
        // Second slot: the leftover apparel item only
        assert_eq!(looks[1].items.len(), 1);
        assert_eq!(looks[1].items[0].product_id, "a3");
    }

    #[test]
    fn test_total_price_matches_items() {
        let pools = partition_by_category(vec![
            test_item("a1", Category::Apparel, 800.0),
            test_item("x1", Category::Accessory, 300.0),
        ]);

        let looks = build_fallback_looks(&pools, &test_profile(), 5);

        assert_eq!(looks.len(), 1);
        let sum: f64 = looks[0].items.iter().map(|i| i.price).sum();
        assert_eq!(looks[0].total_price, sum);
        assert_eq!(looks[0].total_price, 1100.0);
    }

    #[test]
    fn test_empty_pools_yield_no_looks() {
        let looks = build_fallback_looks(&CategoryPools::default(), &test_profile(), 5);
        assert!(looks.is_empty());
    }

    #[test]
    fn test_no_duplicate_items_across_slots() {
        let items: Vec<CatalogItem> = (0..12)
            .map(|i| test_item(&format!("a{}", i), Category::Apparel, 500.0))
            .collect();
        let pools = partition_by_category(items);

        let looks = build_fallback_looks(&pools, &test_profile(), 5);

        let mut seen = std::collections::HashSet::new();
        for look in &looks {
            for item in &look.items {
                assert!(seen.insert(item.product_id.clone()));
            }
        }
        assert_eq!(looks.len(), 5);
    }

    #[test]
    fn test_slot_cap() {
        let items: Vec<CatalogItem> = (0..30)
            .map(|i| test_item(&format!("a{}", i), Category::Apparel, 500.0))
            .collect();
        let pools = partition_by_category(items);

        let looks = build_fallback_looks(&pools, &test_profile(), 50);
        assert_eq!(looks.len(), MAX_FALLBACK_LOOKS);
    }
}
