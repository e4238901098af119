use pantry_shared::Cuisine;
use rand::Rng;
use strum::VariantArray;

use crate::pick;

const ASIAN_KEYWORDS: &[&str] = &["soy sauce", "ginger", "garlic", "rice", "sesame", "chili"];
const ITALIAN_KEYWORDS: &[&str] = &["tomato", "basil", "cheese", "pasta", "olive oil"];
const MEXICAN_KEYWORDS: &[&str] = &["avocado", "lime", "cilantro", "pepper", "onion"];

/// Keyword based style guess. Asian wins over Italian, Italian over Mexican.
pub fn infer_cuisine<S: AsRef<str>>(ingredients: &[S]) -> Option<Cuisine> {
    let lowered = ingredients
        .iter()
        .map(|i| i.as_ref().to_lowercase())
        .collect::<Vec<_>>();

    let mentions = |keywords: &[&str]| {
        lowered
            .iter()
            .any(|i| keywords.iter().any(|k| i.contains(k)))
    };

    if mentions(ASIAN_KEYWORDS) {
        Some(Cuisine::Asian)
    } else if mentions(ITALIAN_KEYWORDS) {
        Some(Cuisine::Italian)
    } else if mentions(MEXICAN_KEYWORDS) {
        Some(Cuisine::Mexican)
    } else {
        None
    }
}

/// Inferred cuisine, or a uniform pick over every cuisine when nothing hints at one.
pub fn choose_cuisine<S: AsRef<str>, R: Rng>(rng: &mut R, ingredients: &[S]) -> Cuisine {
    match infer_cuisine(ingredients) {
        Some(cuisine) => cuisine,
        None => *pick(rng, Cuisine::VARIANTS),
    }
}

const GENERIC_BUNDLE: &[&str] = &[
    "2 tbsp olive oil",
    "2 cloves garlic",
    "Salt and pepper",
    "1 tsp mixed herbs",
    "1 tbsp lemon juice",
];

/// Pantry staples appended after the user's ingredients.
pub fn complementary_ingredients(cuisine: Cuisine) -> &'static [&'static str] {
    match cuisine {
        Cuisine::Asian => &[
            "2 tbsp soy sauce",
            "1 tbsp sesame oil",
            "2 cloves garlic, minced",
            "1 inch ginger, grated",
            "1 tsp rice vinegar",
        ],
        Cuisine::Italian => &[
            "3 tbsp olive oil",
            "2 cloves garlic, minced",
            "1/4 cup parmesan cheese",
            "Fresh basil leaves",
            "Salt and pepper to taste",
        ],
        Cuisine::Mexican => &[
            "1 lime, juiced",
            "1/4 cup cilantro, chopped",
            "1 tsp cumin",
            "1/2 tsp paprika",
            "1 jalapeño, diced",
        ],
        Cuisine::Mediterranean => &[
            "3 tbsp olive oil",
            "1 lemon, juiced",
            "2 cloves garlic",
            "Fresh herbs (oregano, thyme)",
            "1/4 cup feta cheese",
        ],
        Cuisine::Indian => &[
            "1 tsp turmeric",
            "1 tsp cumin",
            "1 tsp coriander",
            "2 cloves garlic",
            "1 inch ginger",
        ],
        Cuisine::American | Cuisine::French => GENERIC_BUNDLE,
    }
}

const GENERAL_TIPS: &[&str] = &[
    "Prep all ingredients before you start cooking for smoother execution.",
    "Don't overcrowd the pan - cook in batches if necessary.",
    "Taste as you go and adjust seasonings to your preference.",
];

/// General tips followed by the cuisine's own, if it has any.
pub fn cooking_tips(cuisine: Cuisine) -> Vec<String> {
    let specific: &[&str] = match cuisine {
        Cuisine::Asian => &[
            "High heat is key for good stir-frying",
            "Add sauces at the end to prevent burning",
        ],
        Cuisine::Italian => &[
            "Use good quality olive oil for best flavor",
            "Fresh herbs should be added at the end",
        ],
        Cuisine::Mexican => &[
            "Toast spices briefly to enhance their flavor",
            "Fresh lime juice brightens the entire dish",
        ],
        Cuisine::Mediterranean => &[
            "Let ingredients shine with simple seasonings",
            "Room temperature ingredients blend better",
        ],
        Cuisine::American | Cuisine::Indian | Cuisine::French => &[],
    };

    GENERAL_TIPS
        .iter()
        .chain(specific)
        .map(|t| t.to_string())
        .collect()
}
