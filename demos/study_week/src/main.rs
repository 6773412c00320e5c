//! Study Week Demo
//!
//! Drives one tracked day through the engine the way an app shell
//! would: load the snapshot, run the day rollover, apply mutations,
//! forward emitted events to the "notification" side, run the
//! achievement pass after each commit, and persist after every change.

use chrono::Local;
use lifequest_core::{
    level, DayQuality, Engine, Event, ExamDraft, GoalDraft, GoalKind, Stats, StudyDraft, StudyKind,
    UpdateResult,
};
use lifequest_store::Store;

fn show_events(result: &UpdateResult) {
    for event in &result.events {
        match event {
            Event::Greeting => println!("  [toast] Welcome back!"),
            Event::LevelUp { level } => println!("  [toast] Level up! Now level {}", level),
            Event::AchievementUnlocked { title } => {
                println!("  [toast] Achievement unlocked: {}", title)
            }
            Event::DailyRewardClaimed { xp_reward } => {
                println!("  [toast] Daily reward claimed (+{} XP)", xp_reward)
            }
            Event::QuestCompleted { title, xp_reward } => {
                println!("  [toast] Quest complete: {} (+{} XP)", title, xp_reward)
            }
            Event::GoalCompleted { title, xp_reward } => {
                println!("  [toast] Goal complete: {} (+{} XP)", title, xp_reward)
            }
            Event::DayEnded { day_number, quality } => {
                let tone = match quality {
                    DayQuality::Poor => "rough one, tomorrow is a new day",
                    DayQuality::Good => "a good day",
                    DayQuality::Excellent => "an excellent day",
                };
                println!("  [toast] Day {} wrapped up: {}", day_number, tone)
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Lifequest Study Week Demo ===\n");

    let today = Local::now().date_naive();
    let store = Store::in_memory().unwrap();
    let mut engine = Engine::new(store.load_or_default(today));

    // Session start: day rollover plus the first achievement pass
    let result = engine.start_session(today);
    show_events(&result);
    let result = engine.unlock_achievements(today);
    show_events(&result);
    store.save(engine.state()).unwrap();

    println!(
        "\nDay {}, streak {}, level {} ({} XP), {} gold\n",
        engine.state().current_day,
        engine.state().streak,
        engine.state().level,
        engine.state().xp,
        engine.state().gold,
    );

    // Claim today's login reward
    if engine.can_claim_reward(today) {
        let reward = engine.today_reward().unwrap().clone();
        println!(
            "Claiming day-{} reward: {} gold, {} XP",
            reward.day_number, reward.gold_reward, reward.xp_reward
        );
        let result = engine.claim_daily_reward(today).unwrap();
        show_events(&result);
        let result = engine.unlock_achievements(today);
        show_events(&result);
        store.save(engine.state()).unwrap();
    }

    // A long, focused study session
    println!("\nLogging a 2h15m practice session...");
    let result = engine
        .log_study(
            StudyDraft {
                subject: "Mathematics".to_string(),
                kind: StudyKind::Practice,
                hours: 2,
                minutes: 15,
                comment: Some("integrals finally clicked".to_string()),
                quality: 4,
                focus: 5,
                efficiency: 4,
            },
            today,
        )
        .unwrap();
    println!("  earned {} XP", result.xp_awarded);
    show_events(&result);
    let result = engine.unlock_achievements(today);
    show_events(&result);
    store.save(engine.state()).unwrap();

    // Knock out a starter quest
    if let Some(quest) = engine.state().quests.first().cloned() {
        println!("\nCompleting quest: {}", quest.title);
        let result = engine.complete_quest(quest.id).unwrap();
        show_events(&result);
        let result = engine.unlock_achievements(today);
        show_events(&result);
        store.save(engine.state()).unwrap();
    }

    // Set up and finish a daily goal
    let goal_id = engine.add_goal(
        GoalDraft {
            title: "Two focused hours".to_string(),
            kind: GoalKind::Daily,
            planned_hours: 2.0,
            deadline: today,
        },
        today,
    );
    engine.set_goal_hours(goal_id, 2.25).unwrap();
    let result = engine.complete_goal(goal_id).unwrap();
    show_events(&result);
    store.save(engine.state()).unwrap();

    // Record a practice test
    println!("\nRecording a mock exam: 82/100");
    let result = engine
        .record_exam(ExamDraft {
            subject: "Mathematics".to_string(),
            date: today,
            score: 82,
            max_score: 100,
            test_name: "mock exam 1".to_string(),
            notes: None,
        })
        .unwrap();
    println!("  earned {} XP", result.xp_awarded);
    show_events(&result);
    store.save(engine.state()).unwrap();

    // Spend some of the starting gold
    println!("\nShopping with {} gold...", engine.state().gold);
    engine.buy_item("energy_drink", today).unwrap();
    engine.use_item("energy_drink").unwrap();
    println!(
        "  used an energy drink, energy now {}",
        engine.state().stats.energy
    );
    store.save(engine.state()).unwrap();

    // Wrap the day up with a self-assessment
    println!("\nEnding the day...");
    let mut assessment = Stats::uniform(70);
    assessment.focus = 85;
    assessment.study = 80;
    let result = engine
        .end_day("Long but productive.", assessment, Some(71.2), today)
        .unwrap();
    show_events(&result);
    let result = engine.unlock_achievements(today);
    show_events(&result);
    store.save(engine.state()).unwrap();

    let state = engine.state();
    println!("\n=== End of day {} ===", state.current_day);
    println!(
        "Level {} with {}/{} XP into the band",
        state.level,
        state.xp - level::xp_for_level(state.level),
        level::xp_for_next_level(state.level) - level::xp_for_level(state.level),
    );
    println!("Gold: {}", state.gold);
    println!(
        "Meters: focus {}, discipline {}, energy {}, study {}",
        state.stats.focus, state.stats.discipline, state.stats.energy, state.stats.study,
    );
    println!(
        "Study this week: {} minutes across {} entries",
        state.study_minutes_within(7, today),
        state.study_entries.len(),
    );
    println!(
        "Archived {} day record(s), {} exam result(s), mock-exam average {:?}",
        state.day_records.len(),
        state.exam_results.len(),
        state.subject_average("Mathematics"),
    );
}
