// ABOUTME: Compiled-in recipe table grouped by the age at which each recipe is introduced
// ABOUTME: Foundation preparations first, then 7-8, 9-10, 11-12, and 13-14 month recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

use weaning_core::models::{PillarId, Recipe};

/// Every recipe in the catalog, in presentation order
pub const RECIPES: &[Recipe] = &[
    // Foundation preparations
    Recipe {
        id: "bone-broth",
        title: "Weekly Bone Broth",
        description: "The foundation of nourishing baby food. Gelatin-rich broth that gels when cold, providing glycine and collagen for gut and tissue development.",
        age_range: "7+",
        prep_time: "24-48 hours (mostly passive)",
        tags: &["foundation", "glycine", "collagen", "gut healing", "batch cooking"],
        ingredients: &[
            "2-3 lbs beef bones or chicken carcasses",
            "2 tbsp apple cider vinegar",
            "Filtered water to cover",
            "Optional: 1 onion, 2 carrots, celery (no salt!)",
        ],
        instructions: &[
            "Place bones in large pot or slow cooker",
            "Add apple cider vinegar (helps extract minerals)",
            "Cover with filtered water by 2 inches",
            "Bring to boil, then reduce to lowest simmer",
            "Cook 24-48 hours (chicken) or up to 72 hours (beef)",
            "Strain through fine mesh. Should gel when cold.",
            "Store in glass jars. Use within 5 days or freeze.",
        ],
        dsi_rationale: Some("Glycine is conditionally essential during growth. Gelatin supports gut lining integrity. Minerals extracted in bioavailable form."),
        safety_notes: &["NO SALT before 12 months", "Max 2-3 oz/day for baby"],
        pillar: PillarId::Glycine,
    },
    Recipe {
        id: "soft-egg-yolk",
        title: "Soft-Cooked Egg Yolk (4-Minute Method)",
        description: "The priority first food. Jammy, cholesterol-rich yolk that provides building blocks for myelination.",
        age_range: "7-8",
        prep_time: "5 minutes",
        tags: &["egg yolk", "cholesterol", "brain food", "first foods", "quick"],
        ingredients: &["1 pasture-raised egg", "½ tsp grass-fed butter (optional)"],
        instructions: &[
            "Bring small pot of water to gentle boil",
            "Lower egg carefully with spoon",
            "Set timer for exactly 4 minutes",
            "Transfer to ice water immediately",
            "Peel carefully, separate yolk from white",
            "Mash yolk with butter if desired",
            "Start with ½ tsp, build to full yolk over 2 weeks",
        ],
        dsi_rationale: Some("Cholesterol is rate-limiting for myelination. The infant brain is building myelin sheaths that will last a lifetime. Egg yolk is nature's perfect delivery system."),
        safety_notes: &[
            "Egg whites often delayed to 12+ months",
            "Contains vitamin A - factor into daily total",
        ],
        pillar: PillarId::Cholesterol,
    },
    Recipe {
        id: "liver-pate",
        title: "Mild Liver Pâté",
        description: "The most nutrient-dense food on earth, made mild and palatable. Freeze in ice cube portions for easy serving.",
        age_range: "8+",
        prep_time: "20 minutes + freezing",
        tags: &["liver", "iron", "vitamin A", "B12", "batch cooking"],
        ingredients: &[
            "½ lb chicken livers (free-range)",
            "3 tbsp grass-fed butter",
            "1 small shallot, minced",
            "¼ cup bone broth",
            "Pinch of thyme (optional)",
        ],
        instructions: &[
            "Rinse livers, trim any connective tissue",
            "Melt 1 tbsp butter, sauté shallot until soft",
            "Add livers, cook 3-4 minutes per side until just cooked through",
            "Transfer to blender with remaining butter and broth",
            "Blend until completely smooth",
            "Pour into ice cube tray, freeze",
            "Pop out cubes, store in freezer bag",
            "Serve ½-1 tsp, 2-3× per week",
        ],
        dsi_rationale: Some("Heme iron absorption 15-35% vs fortified cereal 2-5%. Provides vitamin A, B12, folate, copper in bioavailable forms for tissue construction."),
        safety_notes: &[
            "NEVER on same day as cod liver oil (vitamin A stacking)",
            "Cap at 1-2 tsp, 2-3× per week",
            "Start AFTER 2 weeks of fermented foods",
        ],
        pillar: PillarId::Micronutrients,
    },
    // 7-8 months
    Recipe {
        id: "first-yogurt",
        title: "First Fermented Food",
        description: "The crucial first step: establishing gut ecology before nutrient-dense foods. Plain, full-fat yogurt or kefir.",
        age_range: "7",
        prep_time: "1 minute",
        tags: &["fermented", "probiotics", "first foods", "gut health"],
        ingredients: &[
            "Full-fat plain yogurt OR kefir",
            "Optional: tiny pinch of cinnamon after week 1",
        ],
        instructions: &[
            "Day 1-3: Offer ¼ tsp on clean spoon",
            "Day 4-7: Increase to ½ tsp",
            "Week 2: Build to 1 tbsp",
            "Observe for any digestive changes",
            "Continue daily throughout weaning journey",
        ],
        dsi_rationale: Some("The iron paradox: breast milk is intentionally low in iron (lactoferrin starves pathogens). Introducing high-dose heme iron before gut flora are established can feed pathogenic bacteria. Ferments-first approach."),
        safety_notes: &["Must precede liver and other nutrient-dense foods by 2 weeks"],
        pillar: PillarId::Gut,
    },
    Recipe {
        id: "yolk-avocado-mash",
        title: "Yolk & Avocado Mash",
        description: "Combining two perfect first foods: cholesterol-rich yolk and vitamin E from avocado.",
        age_range: "7-8",
        prep_time: "7 minutes",
        tags: &["egg yolk", "avocado", "brain food", "quick", "no cook"],
        ingredients: &[
            "1 soft-cooked egg yolk (4-minute method)",
            "2 tbsp ripe avocado",
            "1 tsp bone broth (optional, for texture)",
        ],
        instructions: &[
            "Prepare egg yolk using 4-minute method",
            "Mash avocado until smooth",
            "Combine yolk and avocado",
            "Add broth if too thick",
            "Serve immediately",
        ],
        dsi_rationale: Some("Cholesterol + healthy fats + choline = optimal membrane construction materials."),
        safety_notes: &[],
        pillar: PillarId::Cholesterol,
    },
    // 9-10 months
    Recipe {
        id: "salmon-broth-mash",
        title: "Wild Salmon with Broth",
        description: "Preformed DHA for brain development. Wild-caught salmon poached in bone broth.",
        age_range: "9+",
        prep_time: "15 minutes",
        tags: &["fish", "DHA", "omega-3", "brain food"],
        ingredients: &[
            "2 oz wild salmon fillet (boneless)",
            "½ cup bone broth",
            "1 tsp butter",
            "Steamed vegetables (optional)",
        ],
        instructions: &[
            "Bring broth to gentle simmer",
            "Add salmon, poach 8-10 minutes until flaky",
            "Remove skin if present",
            "Mash thoroughly with fork",
            "Mix with butter and vegetables if desired",
            "Ensure no bones remain",
        ],
        dsi_rationale: Some("Preformed DHA is structural component of brain gray matter. Conversion from plant omega-3 (ALA) is <5%. Fish provides the real thing."),
        safety_notes: &["Use wild-caught to minimize mercury", "Check carefully for bones"],
        pillar: PillarId::Dha,
    },
    Recipe {
        id: "liver-bites",
        title: "Liver Bites (Finger Food)",
        description: "Soft, iron-rich finger foods for self-feeding practice.",
        age_range: "9-10",
        prep_time: "25 minutes",
        tags: &["liver", "finger food", "iron", "self-feeding"],
        ingredients: &[
            "4 oz chicken liver, finely minced",
            "1 egg yolk",
            "2 tbsp coconut flour",
            "1 tbsp butter for cooking",
        ],
        instructions: &[
            "Blend liver until very smooth",
            "Mix with egg yolk and coconut flour",
            "Form into small, flat ovals",
            "Cook in butter over medium heat, 3-4 min per side",
            "Cool completely before serving",
            "Should squish easily between fingers",
        ],
        dsi_rationale: None,
        safety_notes: &["Same liver day rules apply: no CLO", "Cap at 2-3 per serving"],
        pillar: PillarId::Micronutrients,
    },
    // 11-12 months
    Recipe {
        id: "hidden-liver-meatballs",
        title: "Mini Meatballs (Hidden Liver)",
        description: "For the liver-resistant baby. Beef meatballs with 20% liver hidden inside.",
        age_range: "11-12",
        prep_time: "30 minutes",
        tags: &["meatballs", "hidden liver", "finger food", "family food"],
        ingredients: &[
            "8 oz ground beef",
            "2 oz chicken liver, finely minced",
            "1 egg yolk",
            "2 tbsp grated zucchini",
            "Pinch of dried herbs",
        ],
        instructions: &[
            "Blend liver until completely smooth (key to hiding it)",
            "Combine all ingredients in bowl",
            "Mix thoroughly - liver should be invisible",
            "Form into marble-sized balls",
            "Bake at 375°F for 15 minutes or pan-fry in butter",
            "Cool and serve 2-3 per meal",
            "Freeze extras in single layer",
        ],
        dsi_rationale: Some("Same nutrient density, better acceptance. The \"hiding liver\" technique maintains micronutrient intake when babies develop texture preferences."),
        safety_notes: &[],
        pillar: PillarId::Micronutrients,
    },
    Recipe {
        id: "bone-marrow-spread",
        title: "Roasted Bone Marrow",
        description: "Traditional nutrient powerhouse. Rich in fat-soluble vitamins and stem cell factors.",
        age_range: "11+",
        prep_time: "25 minutes",
        tags: &["bone marrow", "traditional", "fats", "minerals"],
        ingredients: &[
            "2 beef marrow bones (cut lengthwise by butcher)",
            "Pinch of herbs (optional)",
        ],
        instructions: &[
            "Soak bones in salted water 12-24 hours (draws out blood)",
            "Rinse and pat dry",
            "Roast cut-side up at 450°F for 15-20 minutes",
            "Marrow should be soft and slightly bubbly",
            "Scoop out with small spoon",
            "Spread on soft bread or mix into vegetables",
            "Serve 1-2 tsp per meal",
        ],
        dsi_rationale: Some("Bone marrow contains factors not found in muscle meat: glycine, minerals, fat-soluble vitamins in their natural matrix."),
        safety_notes: &[],
        pillar: PillarId::Glycine,
    },
    // 13-14 months
    Recipe {
        id: "liver-bolognese",
        title: "Liver-Hidden Bolognese",
        description: "Family-friendly sauce where liver vanishes into the tomato. Everyone eats the same meal.",
        age_range: "13-14",
        prep_time: "45 minutes",
        tags: &["pasta", "hidden liver", "family food", "batch cooking", "Italian"],
        ingredients: &[
            "1 lb ground beef",
            "4 oz chicken liver, blended smooth",
            "1 can crushed tomatoes (no salt added)",
            "1 small onion, minced",
            "2 cloves garlic",
            "1 carrot, grated",
            "Fresh basil",
            "Olive oil",
        ],
        instructions: &[
            "Sauté onion and carrot in olive oil until soft",
            "Add garlic, cook 1 minute",
            "Add ground beef, break up and brown",
            "Stir in blended liver (it will disappear)",
            "Add tomatoes, simmer 30 minutes",
            "Season adult portions with salt AFTER removing baby portion",
            "Serve over small pasta shapes",
            "Freeze in portions",
        ],
        dsi_rationale: None,
        safety_notes: &["Remove baby portion before adding salt", "Same liver day rules: no CLO"],
        pillar: PillarId::Micronutrients,
    },
    Recipe {
        id: "sardine-mash",
        title: "Sardine & Vegetable Mash",
        description: "Calcium-rich small fish with low mercury load. Mashed with seasonal vegetables.",
        age_range: "13-14",
        prep_time: "10 minutes",
        tags: &["sardines", "DHA", "calcium", "quick", "no cook"],
        ingredients: &[
            "2 sardines (canned in olive oil)",
            "2 tbsp mashed sweet potato",
            "1 tsp lemon juice",
            "Fresh herbs (optional)",
        ],
        instructions: &[
            "Drain sardines, remove large bones (small ones are fine - calcium!)",
            "Mash thoroughly with fork",
            "Combine with sweet potato",
            "Add lemon juice and herbs",
            "Serve as is or spread on soft bread",
        ],
        dsi_rationale: Some("Small fish = lower mercury accumulation. Bones provide highly bioavailable calcium. Preformed DHA for ongoing brain development."),
        safety_notes: &[],
        pillar: PillarId::Dha,
    },
];
