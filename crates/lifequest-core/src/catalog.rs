//! Seeded default catalogs
//!
//! Everything a fresh state starts with: the modifier catalog, the
//! achievement set, the starter quests, the shop, and the 30-slot
//! daily reward schedule.

use crate::achievement::{
    ALL_STATS_70, FIRST_DAY, IRON_WEEK, LEVEL_10, LEVEL_25, LEVEL_5, MONTH_STREAK, QUEST_10,
    STUDY_100H, STUDY_10H, STUDY_50H, WEEK_STREAK,
};
use crate::{
    Achievement, Buff, DailyReward, Debuff, ItemCategory, ItemEffect, QuestDraft, QuestKind,
    Rarity, ShopItem, StatDelta, CYCLE_LENGTH,
};
use chrono::NaiveDate;

/// Buff slug referenced by the study operation
pub const DEEP_FOCUS: &str = "deep_focus";
/// Debuff slug referenced by the day-rollover engine
pub const MISSED_DAY: &str = "missed_day";
/// Item granted by every seventh reward slot
pub const FOCUS_POTION: &str = "focus_potion";

/// The default buff catalog
pub fn default_buffs() -> Vec<Buff> {
    let buff = |id: &str, name: &str, icon: &str, effect: &str, multiplier: f64| Buff {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        effect: effect.to_string(),
        active: false,
        multiplier,
    };
    vec![
        buff(
            "streak",
            "Day streak",
            "🔥",
            "+10% XP for every 7 days of streak",
            1.1,
        ),
        buff(
            DEEP_FOCUS,
            "Deep focus",
            "🎯",
            "+25% XP for sessions over 2 hours",
            1.25,
        ),
        buff(
            "active_life",
            "Active lifestyle",
            "💪",
            "+15% XP while training regularly",
            1.15,
        ),
        buff(
            "early_bird",
            "Early bird",
            "🌅",
            "+20% XP before 10:00",
            1.2,
        ),
    ]
}

/// The default debuff catalog
pub fn default_debuffs() -> Vec<Debuff> {
    let debuff = |id: &str, name: &str, icon: &str, effect: &str, penalty: f64| Debuff {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        effect: effect.to_string(),
        active: false,
        penalty,
    };
    vec![
        debuff("procrastination", "Procrastination", "😴", "-20% XP", 0.8),
        debuff("overload", "Overload", "🤯", "-30% XP", 0.7),
        debuff(MISSED_DAY, "Missed day", "❌", "Streak reset", 0.0),
        debuff("burnout", "Burnout", "🔻", "-25% XP", 0.75),
    ]
}

/// The default achievement catalog
pub fn default_achievements() -> Vec<Achievement> {
    let achievement = |id: &str, title: &str, description: &str, icon: &str, xp: u32| Achievement {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        unlocked: false,
        unlocked_at: None,
        xp_reward: xp,
    };
    vec![
        achievement(FIRST_DAY, "First step", "Begin the journey", "🎮", 50),
        achievement(WEEK_STREAK, "Week of discipline", "7-day streak", "📅", 200),
        achievement(
            MONTH_STREAK,
            "Month of willpower",
            "30-day streak",
            "🏆",
            1000,
        ),
        achievement(STUDY_10H, "Apprentice", "Study for 10 hours", "📚", 100),
        achievement(STUDY_50H, "Student", "Study for 50 hours", "🎓", 500),
        achievement(
            STUDY_100H,
            "Master of knowledge",
            "Study for 100 hours",
            "🧠",
            1500,
        ),
        achievement(LEVEL_5, "Novice+", "Reach level 5", "⬆️", 150),
        achievement(LEVEL_10, "Seasoned", "Reach level 10", "🌟", 400),
        achievement(LEVEL_25, "Veteran", "Reach level 25", "👑", 2000),
        achievement(QUEST_10, "Quest hunter", "Complete 10 quests", "⚔️", 300),
        achievement(
            IRON_WEEK,
            "Iron will",
            "A week in iron mode",
            "🛡️",
            500,
        ),
        achievement(ALL_STATS_70, "Balance", "All meters above 70", "⚖️", 800),
    ]
}

/// Starter quests seeded into a fresh state
pub fn default_quests(today: NaiveDate) -> Vec<QuestDraft> {
    let quest = |title: &str,
                 description: &str,
                 kind: QuestKind,
                 xp_reward: u32,
                 stat_effects: StatDelta,
                 deadline: Option<NaiveDate>| QuestDraft {
        title: title.to_string(),
        description: description.to_string(),
        kind,
        xp_reward,
        stat_effects,
        deadline,
    };
    vec![
        quest(
            "Study for an hour",
            "Log one hour of study",
            QuestKind::Daily,
            100,
            StatDelta {
                study: 10,
                focus: 5,
                ..Default::default()
            },
            Some(today),
        ),
        quest(
            "Deep focus",
            "One session of 2+ hours at quality 4+",
            QuestKind::Daily,
            150,
            StatDelta {
                focus: 15,
                study: 10,
                ..Default::default()
            },
            Some(today),
        ),
        quest(
            "Workout of the day",
            "Log a workout of 30+ minutes",
            QuestKind::Daily,
            120,
            StatDelta {
                sport: 15,
                energy: 10,
                ..Default::default()
            },
            Some(today),
        ),
        quest(
            "Morning routine",
            "Finish your routine before 9:00",
            QuestKind::Daily,
            80,
            StatDelta {
                discipline: 5,
                motivation: 10,
                ..Default::default()
            },
            Some(today),
        ),
        quest(
            "Mock exam triple",
            "Record practice tests in all three subjects",
            QuestKind::Weekly,
            300,
            StatDelta {
                study: 20,
                focus: 15,
                ..Default::default()
            },
            None,
        ),
        quest(
            "Consistency",
            "Study seven days in a row",
            QuestKind::Longterm,
            500,
            StatDelta {
                discipline: 25,
                motivation: 20,
                ..Default::default()
            },
            None,
        ),
        quest(
            "Level up",
            "Reach a new level",
            QuestKind::Longterm,
            200,
            StatDelta {
                motivation: 15,
                ..Default::default()
            },
            None,
        ),
    ]
}

/// The static shop catalog
pub fn shop_catalog() -> Vec<ShopItem> {
    let item = |id: &str,
                name: &str,
                description: &str,
                icon: &str,
                price: u32,
                rarity: Rarity,
                effect: &str,
                category: ItemCategory,
                item_effect: Option<ItemEffect>| ShopItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        price,
        rarity,
        effect: effect.to_string(),
        category,
        item_effect,
    };
    vec![
        item(
            FOCUS_POTION,
            "Focus potion",
            "Temporarily sharpens concentration by 25%",
            "🧪",
            100,
            Rarity::Common,
            "+25% focus for a day",
            ItemCategory::Consumable,
            Some(ItemEffect {
                stat_boost: StatDelta {
                    focus: 25,
                    ..Default::default()
                },
                duration_days: 1,
                multiplier: Some(1.25),
            }),
        ),
        item(
            "energy_drink",
            "Energy drink",
            "Restores 20 points of energy",
            "⚡",
            80,
            Rarity::Common,
            "+20 energy",
            ItemCategory::Consumable,
            Some(ItemEffect {
                stat_boost: StatDelta {
                    energy: 20,
                    ..Default::default()
                },
                duration_days: 0,
                multiplier: None,
            }),
        ),
        item(
            "discipline_book",
            "Book of discipline",
            "Raises discipline by 15 points",
            "📖",
            150,
            Rarity::Rare,
            "+15 discipline",
            ItemCategory::Consumable,
            Some(ItemEffect {
                stat_boost: StatDelta {
                    discipline: 15,
                    ..Default::default()
                },
                duration_days: 0,
                multiplier: None,
            }),
        ),
        item(
            "meditation_scroll",
            "Meditation scroll",
            "Improves emotional stability by 20 points",
            "🧘",
            120,
            Rarity::Rare,
            "+20 emotional stability",
            ItemCategory::Consumable,
            Some(ItemEffect {
                stat_boost: StatDelta {
                    emotional_stability: 20,
                    ..Default::default()
                },
                duration_days: 0,
                multiplier: None,
            }),
        ),
        item(
            "scholar_crown",
            "Scholar's crown",
            "Legendary gear. +20% XP from study",
            "👑",
            500,
            Rarity::Legendary,
            "+20% study XP",
            ItemCategory::Gear,
            Some(ItemEffect {
                stat_boost: StatDelta {
                    study: 10,
                    ..Default::default()
                },
                duration_days: 999,
                multiplier: Some(1.2),
            }),
        ),
        item(
            "time_crystal",
            "Time crystal",
            "Epic gear. +15% to all XP for 3 days",
            "💎",
            300,
            Rarity::Epic,
            "+15% XP for 3 days",
            ItemCategory::Gear,
            Some(ItemEffect {
                stat_boost: StatDelta {
                    time_management: 10,
                    ..Default::default()
                },
                duration_days: 3,
                multiplier: Some(1.15),
            }),
        ),
        item(
            "willpower_amulet",
            "Amulet of will",
            "Epic gear. Raises motivation by 25 points",
            "🔮",
            250,
            Rarity::Epic,
            "+25 motivation",
            ItemCategory::Gear,
            Some(ItemEffect {
                stat_boost: StatDelta {
                    motivation: 25,
                    ..Default::default()
                },
                duration_days: 0,
                multiplier: None,
            }),
        ),
        item(
            "gold_star",
            "Gold star",
            "Rare gear. Slightly improves every meter",
            "⭐",
            180,
            Rarity::Rare,
            "+5 to all meters",
            ItemCategory::Gear,
            Some(ItemEffect {
                stat_boost: StatDelta {
                    focus: 5,
                    discipline: 5,
                    energy: 5,
                    motivation: 5,
                    time_management: 5,
                    study: 5,
                    emotional_stability: 5,
                    ..Default::default()
                },
                duration_days: 0,
                multiplier: None,
            }),
        ),
        item(
            "phoenix_feather",
            "Phoenix feather",
            "Legendary cosmetic. Pure style",
            "🔥",
            400,
            Rarity::Legendary,
            "Cosmetic only",
            ItemCategory::Cosmetic,
            None,
        ),
        item(
            "scholar_badge",
            "Scholar's badge",
            "Rare cosmetic. Shows your learnedness",
            "🎖️",
            200,
            Rarity::Rare,
            "Cosmetic only",
            ItemCategory::Cosmetic,
            None,
        ),
    ]
}

/// Look up a shop item by id
pub fn find_shop_item(id: &str) -> Option<ShopItem> {
    shop_catalog().into_iter().find(|item| item.id == id)
}

/// The 30-slot reward schedule. Rewards grow strictly with the slot
/// number, and every seventh slot also grants a focus potion.
pub fn reward_schedule() -> Vec<DailyReward> {
    (1..=CYCLE_LENGTH)
        .map(|day| DailyReward {
            day_number: day,
            gold_reward: 50 + (day - 1) * 10,
            xp_reward: 100 + (day - 1) * 25,
            item_reward: (day % 7 == 0).then(|| FOCUS_POTION.to_string()),
            claimed_at: None,
        })
        .collect()
}
