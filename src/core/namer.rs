use crate::models::Purpose;

/// Name/description templates for personal looks, cycled by look index
const PERSONAL_NAMES: &[(&str, &str)] = &[
    (
        "Effortless Signature",
        "Everyday pieces pulled together with zero fuss.",
    ),
    (
        "Polished Rotation",
        "A sharper take on the things you already reach for.",
    ),
    (
        "Weekend Standard",
        "Relaxed layers that still look considered.",
    ),
    (
        "Quiet Statement",
        "Simple shapes with one detail that does the talking.",
    ),
    (
        "Fresh Staples",
        "New basics to fold into the week ahead.",
    ),
];

/// Templates for gift looks
const GIFT_NAMES: &[(&str, &str)] = &[
    (
        "The Thoughtful Bundle",
        "A complete outfit they can wear straight out of the box.",
    ),
    (
        "Wrapped and Ready",
        "Pieces that pair well together and even better with a bow.",
    ),
    (
        "The Safe Bet",
        "Crowd-pleasing staples in forgiving fits.",
    ),
    (
        "A Little Upgrade",
        "The nicer version of something they already own.",
    ),
    (
        "The Finishing Touch",
        "Accents that round out a wardrobe without guessing sizes.",
    ),
];

/// Occasion-specific overrides, applied to the first look only
const OCCASION_NAMES: &[(&str, &str, &str)] = &[
    (
        "work",
        "Boardroom Ready",
        "Clean lines that hold up from the commute to the last call.",
    ),
    (
        "party",
        "After Hours",
        "Built for low light and a louder playlist.",
    ),
    (
        "wedding",
        "Celebration Suite",
        "Dressed up enough for the photos, comfortable enough for the dance floor.",
    ),
    (
        "date",
        "Dinner Plans",
        "Put together without looking like you tried too hard.",
    ),
    (
        "vacation",
        "Out of Office",
        "Light layers that pack flat and photograph well.",
    ),
];

const PERSONAL_TIPS: &[&str] = &[
    "Roll the sleeves and leave the top button open to keep it relaxed.",
    "Tuck the front hem only; it sharpens the line without dressing it up.",
    "Keep metals matching across belt, watch, and shoes.",
    "Add one contrast piece at most; let the rest stay quiet.",
    "Steam, don't iron, the softer fabrics before wearing.",
];

const GIFT_TIPS: &[&str] = &[
    "Leave the tags on and include a gift receipt for easy exchanges.",
    "Neutral colours are the safest bet when you're unsure of taste.",
    "If sizes worry you, the accessories carry this look on their own.",
    "Pair the card to the occasion; the outfit already says the rest.",
    "One size up is an easier fix than one size down.",
];

/// One tip per occasion, used for the first look when the occasion matches
const OCCASION_TIPS: &[(&str, &str)] = &[
    ("work", "Swap the footwear for something darker on client days."),
    ("party", "Swap in bolder footwear after dark; keep the rest as is."),
    ("wedding", "Steam everything the night before; photos find every crease."),
    ("date", "Wear it once before the day so nothing feels stiff."),
    ("vacation", "Everything here layers; pack it rolled, not folded."),
];

/// Deterministic name/description for a look slot
///
/// The first look gets an occasion-specific title when one exists;
/// otherwise names cycle through the personal or gift template list.
pub fn name_look(index: usize, purpose: &Purpose, occasion: &str) -> (String, String) {
    if index == 0 {
        let occasion = occasion.to_lowercase();
        if let Some((_, name, description)) = OCCASION_NAMES
            .iter()
            .find(|(key, _, _)| *key == occasion)
        {
            return (name.to_string(), description.to_string());
        }
    }

    let templates = if purpose.is_gift() {
        GIFT_NAMES
    } else {
        PERSONAL_NAMES
    };
    let (name, description) = templates[index % templates.len()];
    (name.to_string(), description.to_string())
}

/// Deterministic styling tip for a look slot
pub fn style_tip(index: usize, purpose: &Purpose, occasion: &str) -> String {
    if index == 0 {
        let occasion = occasion.to_lowercase();
        if let Some((_, tip)) = OCCASION_TIPS.iter().find(|(key, _)| *key == occasion) {
            return tip.to_string();
        }
    }

    let tips = if purpose.is_gift() {
        GIFT_TIPS
    } else {
        PERSONAL_TIPS
    };
    tips[index % tips.len()].to_string()
}
