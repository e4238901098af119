use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
pub enum CookingMethod {
    #[strum(serialize = "Stir-fry")]
    StirFry,
    Roasted,
    Grilled,
    Braised,
    #[strum(serialize = "Sautéed")]
    Sauteed,
    Baked,
}

pub const DISH_TYPES: &[&str] = &[
    "Bowl",
    "Pasta",
    "Curry",
    "Salad",
    "Soup",
    "Skillet",
    "Casserole",
];

pub const UNITS: &[&str] = &["cups", "tbsp", "tsp", "oz", "lbs", "pieces", "cloves"];

const PREAMBLE: &[&str] = &[
    "Prepare all ingredients by washing, chopping, and measuring as needed.",
    "Heat oil in a large pan or wok over medium-high heat.",
];

const CLOSING: &[&str] = &[
    "Taste and adjust seasoning as needed.",
    "Garnish with fresh herbs if desired.",
    "Serve immediately while hot.",
];

/// Preamble, the method's own steps, then the closing steps.
///
/// `main` is the first ingredient, `all` the whole list already joined for display.
/// Only stir-fry and roasting have dedicated steps; every other method cooks like a sauté.
pub fn instructions(method: CookingMethod, main: &str, all: &str) -> Vec<String> {
    let steps = match method {
        CookingMethod::StirFry => vec![
            "Add aromatics (garlic, ginger) and cook for 30 seconds until fragrant.".to_owned(),
            format!("Add {main} and stir-fry for 3-4 minutes until tender."),
            "Add remaining vegetables and continue stir-frying for 2-3 minutes.".to_owned(),
            "Season with sauces and spices, toss to combine.".to_owned(),
            "Cook for another 1-2 minutes until everything is heated through.".to_owned(),
        ],
        CookingMethod::Roasted => vec![
            "Preheat oven to 425°F (220°C).".to_owned(),
            format!("Toss {all} with oil and seasonings."),
            "Spread evenly on a baking sheet.".to_owned(),
            "Roast for 20-25 minutes, stirring halfway through.".to_owned(),
            "Cook until vegetables are tender and lightly caramelized.".to_owned(),
        ],
        CookingMethod::Sauteed
        | CookingMethod::Grilled
        | CookingMethod::Braised
        | CookingMethod::Baked => vec![
            "Add onions and cook until translucent, about 3 minutes.".to_owned(),
            format!("Add {main} and cook for 5-6 minutes."),
            "Add remaining ingredients and seasonings.".to_owned(),
            "Cook, stirring occasionally, until everything is tender.".to_owned(),
            "Adjust seasoning and serve hot.".to_owned(),
        ],
    };

    PREAMBLE
        .iter()
        .map(|s| s.to_string())
        .chain(steps)
        .chain(CLOSING.iter().map(|s| s.to_string()))
        .collect()
}
