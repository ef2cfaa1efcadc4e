// ABOUTME: Compiled-in food table ordered by introduction priority
// ABOUTME: Ferments first, then egg yolk, liver, broth, fish, fats, vegetables, fruits, dairy, legumes, herbs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

use weaning_core::models::{Food, FoodCategory};

/// Every food in the catalog, in presentation order
///
/// The age filter preserves this order, so entries are grouped the way the
/// guide introduces them rather than sorted by age.
pub const FOODS: &[Food] = &[
    // Fermented foods: gut maturity first
    Food {
        id: "yogurt",
        name: "Full-Fat Yogurt",
        italian_name: "Yogurt intero",
        category: FoodCategory::Fermented,
        age_start: 7,
        nutrients: &["Probiotics", "Calcium", "Protein", "B12"],
        dsi_rationale: Some("Gut ecology must support safe iron absorption. Ferments establish beneficial bacteria before nutrient-dense foods."),
        preparation: Some("Start with ¼ tsp, build to 1 tbsp over 2 weeks"),
        safety_notes: &[],
        sourcing_italy: Some("Yogurt intero from any supermercato; seek out bianco naturale (plain)"),
    },
    Food {
        id: "kefir",
        name: "Kefir",
        italian_name: "Kefir",
        category: FoodCategory::Fermented,
        age_start: 7,
        nutrients: &["Probiotics", "Calcium", "B vitamins", "Protein"],
        dsi_rationale: Some("Broader probiotic spectrum than yogurt. Prepares gut for nutrient-dense foods."),
        preparation: Some("Start with ¼ tsp, build to 1 tbsp over 2 weeks"),
        safety_notes: &[],
        sourcing_italy: Some("Increasingly available in supermercati; check health food stores"),
    },
    // Egg yolk: myelination priority
    Food {
        id: "egg-yolk",
        name: "Egg Yolk",
        italian_name: "Tuorlo d'uovo",
        category: FoodCategory::Protein,
        age_start: 7,
        nutrients: &["Choline", "Cholesterol", "DHA", "Vitamin D", "B12"],
        dsi_rationale: Some("Cholesterol is rate-limiting for myelination. The infant brain is building myelin sheaths that will last a lifetime."),
        preparation: Some("Soft-cooked 4-minute method (jammy center). Start ½ tsp, build to full yolk."),
        safety_notes: &[
            "Contains vitamin A - factor into daily total",
            "Egg whites often delayed to 12+ months",
        ],
        sourcing_italy: Some("Uova da galline allevate a terra (free-range) minimum; seek pastured from local farms"),
    },
    // Liver: most nutrient-dense food
    Food {
        id: "chicken-liver",
        name: "Chicken Liver",
        italian_name: "Fegatini di pollo",
        category: FoodCategory::Protein,
        age_start: 8,
        nutrients: &["Vitamin A", "Iron (heme)", "B12", "Folate", "Copper"],
        dsi_rationale: Some("Heme iron absorption 15-35% vs fortified cereal 2-5%. Provides bioavailable micronutrients for tissue construction."),
        preparation: Some("Frozen grated over food, or pâté in ice cube portions. ½-1 tsp serving, 2-3× per week."),
        safety_notes: &[
            "Cap at 1-2 tsp, 2-3× per week",
            "NEVER combine with cod liver oil (vitamin A stacking)",
            "Introduce AFTER 2 weeks of ferments (gut readiness)",
        ],
        sourcing_italy: Some("Fegato di pollo from macelleria; ask for pollo ruspante (free-range)"),
    },
    Food {
        id: "bone-broth",
        name: "Bone Broth",
        italian_name: "Brodo di ossa",
        category: FoodCategory::Protein,
        age_start: 7,
        nutrients: &["Glycine", "Collagen", "Gelatin", "Minerals"],
        dsi_rationale: Some("Glycine is conditionally essential during growth. Gelatin supports gut lining integrity."),
        preparation: Some("Weekly batch. Should gel when cold. No salt. 2-3 oz/day maximum."),
        safety_notes: &["No salt before 12 months - immature renal filtration"],
        sourcing_italy: Some("Beef bones (ossa per brodo) from macelleria; chicken carcasses from butcher"),
    },
    // Fish: preformed DHA
    Food {
        id: "wild-salmon",
        name: "Wild Salmon",
        italian_name: "Salmone selvaggio",
        category: FoodCategory::Protein,
        age_start: 8,
        nutrients: &["DHA", "EPA", "Protein", "Vitamin D", "Selenium"],
        dsi_rationale: Some("Preformed DHA is structural component of brain gray matter. Conversion from plant omega-3 is <5%."),
        preparation: Some("Poached or baked, mashed with bone broth. Soft flakes."),
        safety_notes: &[],
        sourcing_italy: Some("Salmone selvaggio at fish counter (not allevamento/farmed)"),
    },
    Food {
        id: "sardines",
        name: "Sardines",
        italian_name: "Sardine",
        category: FoodCategory::Protein,
        age_start: 9,
        nutrients: &["DHA", "Calcium (with bones)", "Vitamin D", "Selenium"],
        dsi_rationale: Some("Small fish = lower mercury accumulation. Bones provide calcium."),
        preparation: Some("Canned in olive oil, mashed. Remove large bones for younger babies."),
        safety_notes: &[],
        sourcing_italy: Some("Sardine in scatola widely available; choose in olio d'oliva"),
    },
    // Fats
    Food {
        id: "avocado",
        name: "Avocado",
        italian_name: "Avocado",
        category: FoodCategory::Fat,
        age_start: 7,
        nutrients: &["Vitamin E", "Folate", "Potassium", "Monounsaturated fats"],
        dsi_rationale: None,
        preparation: Some("Ripe, mashed. Can mix with egg yolk."),
        safety_notes: &[],
        sourcing_italy: None,
    },
    Food {
        id: "butter",
        name: "Grass-Fed Butter",
        italian_name: "Burro da pascolo",
        category: FoodCategory::Fat,
        age_start: 7,
        nutrients: &["Vitamin A", "Vitamin K2", "Butyrate", "CLA"],
        dsi_rationale: Some("Fat-soluble vitamins in bioavailable form. K2 important for calcium metabolism."),
        preparation: Some("Add to vegetables, egg yolk, or grains."),
        safety_notes: &[],
        sourcing_italy: Some("Burro da pascolo or burro alpino from specialty shops"),
    },
    Food {
        id: "cod-liver-oil",
        name: "Cod Liver Oil",
        italian_name: "Olio di fegato di merluzzo",
        category: FoodCategory::Fat,
        age_start: 7,
        nutrients: &["Vitamin A", "Vitamin D", "DHA", "EPA"],
        dsi_rationale: Some("Concentrated fat-soluble vitamins. Supports membrane construction."),
        preparation: Some("¼ tsp daily maximum"),
        safety_notes: &[
            "SKIP on liver days (vitamin A stacking: combined can reach 7,000-9,000 IU vs limit 2,000-3,000 IU)",
            "Fat-soluble vitamins accumulate",
        ],
        sourcing_italy: Some("Olio di fegato di merluzzo at farmacia or health food stores"),
    },
    // Vegetables
    Food {
        id: "zucchini",
        name: "Zucchini",
        italian_name: "Zucchina",
        category: FoodCategory::Vegetable,
        age_start: 7,
        nutrients: &["Vitamin C", "Potassium", "Fiber"],
        dsi_rationale: None,
        preparation: Some("Steamed until very soft, mashed with butter or bone broth."),
        safety_notes: &[],
        sourcing_italy: Some("Seasonal from ortofrutta; excellent in summer"),
    },
    Food {
        id: "carrots",
        name: "Carrots",
        italian_name: "Carote",
        category: FoodCategory::Vegetable,
        age_start: 7,
        nutrients: &["Beta-carotene", "Fiber", "Vitamin K"],
        dsi_rationale: None,
        preparation: Some("Steamed until very soft, mashed with fat for absorption."),
        safety_notes: &["High in beta-carotene - skin can turn orange (harmless)"],
        sourcing_italy: None,
    },
    Food {
        id: "sweet-potato",
        name: "Sweet Potato",
        italian_name: "Patata dolce",
        category: FoodCategory::Vegetable,
        age_start: 7,
        nutrients: &["Beta-carotene", "Vitamin C", "Fiber", "Potassium"],
        dsi_rationale: None,
        preparation: Some("Baked or steamed, mashed with butter."),
        safety_notes: &[],
        sourcing_italy: None,
    },
    // Fruits
    Food {
        id: "pear",
        name: "Pear",
        italian_name: "Pera",
        category: FoodCategory::Fruit,
        age_start: 7,
        nutrients: &["Fiber", "Vitamin C", "Copper"],
        dsi_rationale: None,
        preparation: Some("Very ripe, mashed. Steamed if needed for softer texture."),
        safety_notes: &[],
        sourcing_italy: None,
    },
    Food {
        id: "banana",
        name: "Banana",
        italian_name: "Banana",
        category: FoodCategory::Fruit,
        age_start: 7,
        nutrients: &["Potassium", "Vitamin B6", "Fiber"],
        dsi_rationale: None,
        preparation: Some("Ripe with brown spots, mashed."),
        safety_notes: &[],
        sourcing_italy: None,
    },
    // Dairy
    Food {
        id: "pecorino",
        name: "Pecorino",
        italian_name: "Pecorino",
        category: FoodCategory::Dairy,
        age_start: 10,
        nutrients: &["Calcium", "Protein", "Vitamin A", "CLA"],
        dsi_rationale: None,
        preparation: Some("Finely grated over vegetables or grains."),
        safety_notes: &["High sodium - use sparingly before 12 months"],
        sourcing_italy: Some("Pecorino romano or toscano; aged versions are easier to digest"),
    },
    // Legumes
    Food {
        id: "lentils",
        name: "Lentils",
        italian_name: "Lenticchie",
        category: FoodCategory::Legume,
        age_start: 9,
        nutrients: &["Iron", "Protein", "Folate", "Fiber"],
        dsi_rationale: Some("Plant iron source - pair with vitamin C for absorption. Not a replacement for heme iron."),
        preparation: Some("Red lentils cook softest. Well-cooked and mashed."),
        safety_notes: &[],
        sourcing_italy: Some("Lenticchie di Castelluccio are prized Italian variety"),
    },
    // Herbs
    Food {
        id: "basil",
        name: "Basil",
        italian_name: "Basilico",
        category: FoodCategory::Herb,
        age_start: 8,
        nutrients: &["Vitamin K", "Iron", "Antioxidants"],
        dsi_rationale: None,
        preparation: Some("Fresh, finely chopped. Introduce flavors early."),
        safety_notes: &[],
        sourcing_italy: Some("Fresh basilico genovese from any market"),
    },
];
