// ABOUTME: Compiled-in guidance tables that frame the foods and recipes
// ABOUTME: Category metadata, five pillars, safety rules, weekly rotation, introduction plan, age stages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Weaning Guide Contributors

use weaning_core::models::{
    AgeStage, CategoryInfo, FoodCategory, IntroductionStep, Palette, Pillar, PillarId,
    RotationDay, SafetyRule, Severity,
};

/// Vegetable metadata; also the fallback for unknown category keys
pub const VEGETABLE_INFO: CategoryInfo = CategoryInfo {
    category: FoodCategory::Vegetable,
    icon: "🥕",
    label: "Vegetables",
    color: Palette::Sage,
};

/// Section metadata for each food category
pub const CATEGORY_INFO: &[CategoryInfo] = &[
    CategoryInfo {
        category: FoodCategory::Fermented,
        icon: "🥛",
        label: "Fermented",
        color: Palette::Sage,
    },
    CategoryInfo {
        category: FoodCategory::Protein,
        icon: "🥚",
        label: "Protein",
        color: Palette::Terracotta,
    },
    CategoryInfo {
        category: FoodCategory::Fat,
        icon: "🫒",
        label: "Fats",
        color: Palette::Cream,
    },
    VEGETABLE_INFO,
    CategoryInfo {
        category: FoodCategory::Fruit,
        icon: "🍐",
        label: "Fruits",
        color: Palette::Terracotta,
    },
    CategoryInfo {
        category: FoodCategory::Dairy,
        icon: "🧀",
        label: "Dairy",
        color: Palette::Cream,
    },
    CategoryInfo {
        category: FoodCategory::Legume,
        icon: "🫘",
        label: "Legumes",
        color: Palette::Sage,
    },
    CategoryInfo {
        category: FoodCategory::Grain,
        icon: "🌾",
        label: "Grains",
        color: Palette::Cream,
    },
    CategoryInfo {
        category: FoodCategory::Herb,
        icon: "🌿",
        label: "Herbs",
        color: Palette::Sage,
    },
];

/// The five pillars of the recipe guide, in framework order
pub const FIVE_PILLARS: &[Pillar] = &[
    Pillar {
        id: PillarId::Gut,
        number: 1,
        title: "Gut Maturity First",
        icon: "🦠",
        description: "Fermented foods before nutrient-dense foods. Breast milk is low in iron by design.",
        key_foods: &["Yogurt", "Kefir"],
        timing: "Weeks 1-2 of weaning",
        dsi_connection: "Gut ecology must support safe iron absorption. The \"iron paradox\" - lactoferrin in breast milk starves pathogens.",
    },
    Pillar {
        id: PillarId::Cholesterol,
        number: 2,
        title: "Cholesterol & Stable Fats",
        icon: "🧠",
        description: "Rate-limiting for myelination. Egg yolk is the priority first food.",
        key_foods: &["Egg yolk", "Butter", "Animal fats"],
        timing: "From week 2 onwards",
        dsi_connection: "The infant brain is building myelin sheaths that will last a lifetime. Cholesterol is the essential building block.",
    },
    Pillar {
        id: PillarId::Micronutrients,
        number: 3,
        title: "Bioavailable Micronutrients",
        icon: "⚡",
        description: "Heme iron 15-35% absorption vs fortified cereal 2-5%. Dose matters.",
        key_foods: &["Liver", "Egg yolk", "Fish"],
        timing: "From week 3-4, after gut preparation",
        dsi_connection: "Traditional first foods across cultures: liver, egg yolk, bone broth. These provide building blocks that preserve geometric fidelity during tissue construction.",
    },
    Pillar {
        id: PillarId::Glycine,
        number: 4,
        title: "Glycine & Collagen",
        icon: "🦴",
        description: "Conditionally essential during growth. Bone broth 2-3 oz/day max.",
        key_foods: &["Bone broth", "Bone marrow", "Skin-on meats"],
        timing: "Throughout weaning",
        dsi_connection: "Glycine is needed for collagen synthesis, detoxification, and neurotransmitter balance. Babies can't make enough on their own.",
    },
    Pillar {
        id: PillarId::Dha,
        number: 5,
        title: "Preformed DHA",
        icon: "🐟",
        description: "Structural component of brain gray matter. Conversion from plant omega-3 <5%.",
        key_foods: &["Wild salmon", "Sardines", "Cod liver oil", "Fish eggs"],
        timing: "From month 8 onwards",
        dsi_connection: "The brain is literally made of DHA. Plant sources (flax, chia) convert at <5%. Fatty fish provides the real thing.",
    },
];

/// Safety rules, most severe first
pub const SAFETY_RULES: &[SafetyRule] = &[
    SafetyRule {
        rule: "Liver days = NO cod liver oil",
        rationale: "Vitamin A stacking: combined sources can reach 7,000-9,000 IU vs limit 2,000-3,000 IU",
        severity: Severity::Critical,
    },
    SafetyRule {
        rule: "No salt before 12 months",
        rationale: "Immature renal filtration capacity",
        severity: Severity::Critical,
    },
    SafetyRule {
        rule: "Ferments BEFORE liver",
        rationale: "Gut ecology must support safe iron absorption",
        severity: Severity::Important,
    },
    SafetyRule {
        rule: "Liver capped at 1-2 tsp, 2-3×/week",
        rationale: "More liver ≠ better iron; pathogen-feeding risk",
        severity: Severity::Important,
    },
    SafetyRule {
        rule: "CLO ¼ tsp daily, skip liver days",
        rationale: "Fat-soluble vitamin accumulation",
        severity: Severity::Important,
    },
    SafetyRule {
        rule: "Wild-caught fish only",
        rationale: "Farmed fish higher in inflammatory omega-6, lower in DHA",
        severity: Severity::Recommendation,
    },
];

/// Weekly rotation template for 13-14 months
pub const WEEKLY_ROTATION: &[RotationDay] = &[
    RotationDay {
        day: "Monday",
        liver: true,
        clo: false,
        main_protein: "Beef + liver (bolognese)",
    },
    RotationDay {
        day: "Tuesday",
        liver: false,
        clo: true,
        main_protein: "Salmon",
    },
    RotationDay {
        day: "Wednesday",
        liver: true,
        clo: false,
        main_protein: "Lamb + liver (meatballs)",
    },
    RotationDay {
        day: "Thursday",
        liver: false,
        clo: true,
        main_protein: "Eggs + cheese",
    },
    RotationDay {
        day: "Friday",
        liver: true,
        clo: false,
        main_protein: "Shepherd's pie (hidden liver)",
    },
    RotationDay {
        day: "Saturday",
        liver: false,
        clo: true,
        main_protein: "Sardines",
    },
    RotationDay {
        day: "Sunday",
        liver: false,
        clo: true,
        main_protein: "Chicken",
    },
];

/// Plan for the first weeks of weaning
pub const INTRODUCTION_SEQUENCE: &[IntroductionStep] = &[
    IntroductionStep {
        weeks: "1-2",
        age: 7,
        focus: "Gut Maturity",
        foods: &["Fermented foods (yogurt/kefir)"],
        amounts: "¼ tsp → 1 tbsp",
        rationale: "Establish beneficial gut bacteria before introducing nutrient-dense foods",
    },
    IntroductionStep {
        weeks: "2-3",
        age: 7,
        focus: "Myelination Priority",
        foods: &["Egg yolk"],
        amounts: "½ tsp → 1 full yolk",
        rationale: "Cholesterol is rate-limiting for myelin construction",
    },
    IntroductionStep {
        weeks: "3-4",
        age: 8,
        focus: "Bioavailable Iron",
        foods: &["Liver (frozen grated)"],
        amounts: "½ tsp, 2-3×/week",
        rationale: "Heme iron after gut is prepared",
    },
    IntroductionStep {
        weeks: "4+",
        age: 8,
        focus: "Preformed DHA",
        foods: &["Fish (wild salmon)"],
        amounts: "Mashed with broth",
        rationale: "Structural component of brain gray matter",
    },
];

/// What eating looks like at each month of the slider
pub const AGE_STAGES: &[AgeStage] = &[
    AgeStage {
        months: 7,
        label: "7 months",
        description: "First tastes - single ingredients, smooth purées",
    },
    AgeStage {
        months: 8,
        label: "8 months",
        description: "Building variety - soft mashes, new flavors",
    },
    AgeStage {
        months: 9,
        label: "9 months",
        description: "Texture time - lumpy foods, soft finger foods",
    },
    AgeStage {
        months: 10,
        label: "10 months",
        description: "Self-feeding begins - more finger foods",
    },
    AgeStage {
        months: 11,
        label: "11 months",
        description: "Family foods adapted - small soft pieces",
    },
    AgeStage {
        months: 12,
        label: "12 months",
        description: "One year! - most family foods, cow's milk OK",
    },
    AgeStage {
        months: 13,
        label: "13 months",
        description: "Confident eater - varied textures, utensil practice",
    },
    AgeStage {
        months: 14,
        label: "14 months",
        description: "Little gourmand - almost everything!",
    },
];
