//! The command surface over the game state
//!
//! `Engine` owns one `GameState` and exposes every mutation as a
//! synchronous, atomic operation: guards run before anything is
//! touched, so an `Err` means the state is exactly as it was. Each
//! operation returns an `UpdateResult` carrying the XP it actually
//! committed and the events it emitted; the orchestrating layer
//! forwards those to the notification side and persists the state
//! after every commit.
//!
//! Achievement evaluation is a separate explicit pass
//! (`unlock_achievements`) the orchestrator runs after each mutation
//! commits. It is idempotent, so calling it redundantly is harmless.

use crate::{
    catalog, exam, level, modifier, reward, sport, study, BodyMetrics, Buff, DailyReward,
    DayQuality, DayRecord, Error, Event, ExamDraft, ExamResult, GameState, Goal, GoalDraft, Id,
    InventoryItem, Quest, QuestDraft, Result, SeasonRecord, SportDraft, SportEntry, StatDelta,
    Stats, StudyDraft, StudyEntry,
};
use chrono::NaiveDate;

/// Result of one committed mutation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateResult {
    /// XP added to the state by this operation, after modifier
    /// resolution
    pub xp_awarded: i64,
    /// Events emitted during this mutation
    pub events: Vec<Event>,
}

impl UpdateResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold another result into this one
    pub fn merge(&mut self, other: UpdateResult) {
        self.xp_awarded += other.xp_awarded;
        self.events.extend(other.events);
    }
}

/// The engine owning the authoritative state
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
}

impl Engine {
    /// Wrap an existing state
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Read access to the current state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consume the engine and return the state
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Award XP through the modifier pipeline.
    ///
    /// xp and level move together here; no observer ever sees them
    /// mismatched.
    fn award_xp(&mut self, base: f64, out: &mut UpdateResult) {
        let resolved = modifier::resolve_xp(base, &self.state.buffs, &self.state.debuffs);
        let level_before = self.state.level;
        self.state.xp = self.state.xp.saturating_add_signed(resolved);
        self.state.level = level::level_for_xp(self.state.xp);
        out.xp_awarded += resolved;
        if self.state.level > level_before {
            out.events.push(Event::LevelUp {
                level: self.state.level,
            });
        }
    }

    // === Session start / day rollover ===

    /// Run the once-per-load day rollover against the real calendar
    /// date. Idempotent for a given (stored date, today) pair: a second
    /// call with the same dates changes nothing. A `today` before the
    /// stored date (clock moved backward) is ignored.
    pub fn start_session(&mut self, today: NaiveDate) -> UpdateResult {
        let mut out = UpdateResult::new();
        out.events.push(Event::Greeting);

        let last = self.state.last_active_date;
        if last == today {
            return out;
        }
        let days = today.signed_duration_since(last).num_days();
        if days <= 0 {
            return out;
        }

        if days == 1 {
            self.state.streak += 1;
        } else {
            self.state.streak = 0;
            let penalty = (15 * (days - 1)).min(30) as i32;
            self.state.stats.apply(&StatDelta {
                discipline: -penalty,
                ..Default::default()
            });
        }
        if let Some(missed) = self.state.debuff_mut(catalog::MISSED_DAY) {
            missed.active = days > 1;
        }
        self.state.current_day = self
            .state
            .current_day
            .saturating_add(u32::try_from(days).unwrap_or(u32::MAX));
        self.state.last_active_date = today;
        out
    }

    // === Study ===

    /// Log a study session: an immutable entry, an XP award, and the
    /// session's meter effects, in one transition.
    pub fn log_study(&mut self, draft: StudyDraft, today: NaiveDate) -> Result<UpdateResult> {
        let minutes = draft.hours * 60 + draft.minutes;
        if minutes == 0 {
            return Err(Error::StudySessionEmpty);
        }
        let quality = draft.quality.clamp(1, 5);
        let focus = draft.focus.clamp(1, 5);
        let efficiency = draft.efficiency.clamp(1, 5);
        let xp_earned = study::session_xp(minutes, quality, draft.kind);

        let id = self.state.allocate_id();
        self.state.study_entries.push(StudyEntry {
            id,
            date: today,
            subject: draft.subject,
            kind: draft.kind,
            hours: draft.hours,
            minutes: draft.minutes,
            comment: draft.comment,
            quality,
            focus,
            efficiency,
            xp_earned,
        });

        let mut out = UpdateResult::new();
        self.award_xp(xp_earned as f64, &mut out);

        let study_boost = ((minutes as f64 / 30.0).round() as i32).min(5);
        let focus_boost = (focus as i32 - 3) * 2;
        let discipline_shift = if quality > 3 {
            (quality as f64 / 2.0).round() as i32
        } else {
            -((4 - quality as i32) * 2)
        };
        let stability_shift = match efficiency {
            e if e > 3 => 2,
            e if e < 3 => -2,
            _ => 0,
        };
        self.state.stats.apply(&StatDelta {
            study: study_boost,
            focus: focus_boost,
            discipline: discipline_shift,
            emotional_stability: stability_shift,
            ..Default::default()
        });

        // Two focused hours switch on the deep-focus buff
        if minutes >= 120 && focus >= 4 {
            if let Some(buff) = self.state.buff_mut(catalog::DEEP_FOCUS) {
                buff.active = true;
            }
        }
        Ok(out)
    }

    // === Goals ===

    /// Create a goal with zeroed progress
    pub fn add_goal(&mut self, draft: GoalDraft, today: NaiveDate) -> Id {
        let id = self.state.allocate_id();
        self.state.goals.push(Goal {
            id,
            title: draft.title,
            kind: draft.kind,
            planned_hours: draft.planned_hours,
            actual_hours: 0.0,
            completed: false,
            created_at: today,
            deadline: draft.deadline,
        });
        id
    }

    /// Update the hours accrued against a goal
    pub fn set_goal_hours(&mut self, id: Id, actual_hours: f64) -> Result<()> {
        let goal = self.state.goal_mut(id).ok_or(Error::GoalNotFound(id))?;
        goal.actual_hours = actual_hours;
        Ok(())
    }

    /// Complete a goal. The reward is granted only on the first
    /// false-to-true transition; re-completing is a rewardless no-op.
    pub fn complete_goal(&mut self, id: Id) -> Result<UpdateResult> {
        let goal = self.state.goal_mut(id).ok_or(Error::GoalNotFound(id))?;
        if goal.completed {
            return Ok(UpdateResult::new());
        }
        goal.completed = true;
        let title = goal.title.clone();
        let xp_reward = goal.kind.xp_reward();

        let mut out = UpdateResult::new();
        out.events.push(Event::GoalCompleted {
            title,
            xp_reward,
        });
        self.award_xp(xp_reward as f64, &mut out);
        self.state.stats.apply(&StatDelta {
            motivation: 3,
            discipline: 2,
            ..Default::default()
        });
        Ok(out)
    }

    // === Quests ===

    /// Create a quest with an explicit reward and stat-effect map
    pub fn add_quest(&mut self, draft: QuestDraft, today: NaiveDate) -> Id {
        let id = self.state.allocate_id();
        self.state.quests.push(Quest {
            id,
            title: draft.title,
            description: draft.description,
            kind: draft.kind,
            xp_reward: draft.xp_reward,
            stat_effects: draft.stat_effects,
            completed: false,
            created_at: today,
            deadline: draft.deadline,
        });
        id
    }

    /// Complete a quest, guarded by its `completed` flag: the reward
    /// and stat effects apply once, ever.
    pub fn complete_quest(&mut self, id: Id) -> Result<UpdateResult> {
        let quest = self.state.quest_mut(id).ok_or(Error::QuestNotFound(id))?;
        if quest.completed {
            return Ok(UpdateResult::new());
        }
        quest.completed = true;
        let title = quest.title.clone();
        let xp_reward = quest.xp_reward;
        let effects = quest.stat_effects;

        let mut out = UpdateResult::new();
        out.events.push(Event::QuestCompleted {
            title,
            xp_reward,
        });
        self.award_xp(xp_reward as f64, &mut out);
        self.state.stats.apply(&effects);
        Ok(out)
    }

    /// Remove a quest regardless of its completion state
    pub fn delete_quest(&mut self, id: Id) -> Result<()> {
        let position = self
            .state
            .quests
            .iter()
            .position(|q| q.id == id)
            .ok_or(Error::QuestNotFound(id))?;
        self.state.quests.remove(position);
        Ok(())
    }

    // === Modifiers ===

    /// Flip a buff's active flag, returning the new value
    pub fn toggle_buff(&mut self, id: &str) -> Result<bool> {
        let buff = self
            .state
            .buff_mut(id)
            .ok_or_else(|| Error::BuffNotFound(id.to_string()))?;
        buff.active = !buff.active;
        Ok(buff.active)
    }

    /// Flip a debuff's active flag, returning the new value
    pub fn toggle_debuff(&mut self, id: &str) -> Result<bool> {
        let debuff = self
            .state
            .debuff_mut(id)
            .ok_or_else(|| Error::DebuffNotFound(id.to_string()))?;
        debuff.active = !debuff.active;
        Ok(debuff.active)
    }

    /// Flip iron mode, returning the new value
    pub fn toggle_iron_mode(&mut self) -> bool {
        self.state.iron_mode = !self.state.iron_mode;
        self.state.iron_mode
    }

    // === Shop & inventory ===

    /// Buy one unit of a shop item, stacking it into the inventory
    pub fn buy_item(&mut self, item_id: &str, today: NaiveDate) -> Result<()> {
        let item = catalog::find_shop_item(item_id)
            .ok_or_else(|| Error::UnknownItem(item_id.to_string()))?;
        if self.state.gold < item.price {
            return Err(Error::NotEnoughGold {
                price: item.price,
                gold: self.state.gold,
            });
        }
        self.state.gold -= item.price;
        self.grant_item(item_id, today);
        Ok(())
    }

    /// Consume one unit of an owned item: flat meter boosts apply
    /// immediately, and a nontrivial multiplier spawns a fresh ad-hoc
    /// buff rather than touching the catalog. Zero-quantity rows are
    /// pruned.
    pub fn use_item(&mut self, item_id: &str) -> Result<()> {
        let item = catalog::find_shop_item(item_id)
            .ok_or_else(|| Error::UnknownItem(item_id.to_string()))?;
        if !self.state.inventory.contains_key(item_id) {
            return Err(Error::ItemNotOwned(item_id.to_string()));
        }
        let effect = item
            .item_effect
            .as_ref()
            .ok_or_else(|| Error::ItemWithoutEffect(item_id.to_string()))?;

        self.state.stats.apply(&effect.stat_boost);
        if let Some(multiplier) = effect.multiplier {
            if (multiplier - 1.0).abs() > f64::EPSILON {
                let serial = self.state.allocate_id();
                self.state.buffs.push(Buff {
                    id: format!("item_{}_{}", item.id, serial.raw()),
                    name: item.name.clone(),
                    icon: item.icon.clone(),
                    effect: item.effect.clone(),
                    active: true,
                    multiplier,
                });
            }
        }
        if let Some(row) = self.state.inventory.get_mut(item_id) {
            row.quantity -= 1;
            if row.quantity == 0 {
                self.state.inventory.shift_remove(item_id);
            }
        }
        Ok(())
    }

    fn grant_item(&mut self, item_id: &str, today: NaiveDate) {
        self.state
            .inventory
            .entry(item_id.to_string())
            .and_modify(|row| row.quantity += 1)
            .or_insert(InventoryItem {
                quantity: 1,
                acquired_at: today,
            });
    }

    // === Daily rewards ===

    /// The schedule slot matching the current day's cycle position
    pub fn today_reward(&self) -> Option<&DailyReward> {
        let cycle = reward::day_in_cycle(self.state.current_day);
        self.state
            .daily_rewards
            .iter()
            .find(|r| r.day_number == cycle)
    }

    /// Whether today's reward is still unclaimed
    pub fn can_claim_reward(&self, today: NaiveDate) -> bool {
        self.state.last_reward_claim_date != Some(today)
    }

    /// Claim today's reward slot: gold, XP through the modifier
    /// pipeline, and the slot's item if it grants one. At most one
    /// claim per calendar day.
    pub fn claim_daily_reward(&mut self, today: NaiveDate) -> Result<UpdateResult> {
        if !self.can_claim_reward(today) {
            return Err(Error::RewardAlreadyClaimed);
        }
        let cycle = reward::day_in_cycle(self.state.current_day);
        let slot = self
            .state
            .daily_rewards
            .iter_mut()
            .find(|r| r.day_number == cycle)
            .ok_or(Error::RewardSlotMissing(cycle))?;
        slot.claimed_at = Some(today);
        let gold = slot.gold_reward;
        let xp_reward = slot.xp_reward;
        let item = slot.item_reward.clone();

        self.state.gold += gold;
        self.state.last_reward_claim_date = Some(today);

        let mut out = UpdateResult::new();
        out.events.push(Event::DailyRewardClaimed { xp_reward });
        self.award_xp(xp_reward as f64, &mut out);
        if let Some(item_id) = item {
            self.grant_item(&item_id, today);
        }
        Ok(out)
    }

    // === Exams ===

    /// Record a practice test and award XP proportional to the score
    pub fn record_exam(&mut self, draft: ExamDraft) -> Result<UpdateResult> {
        if draft.max_score == 0 {
            return Err(Error::ExamScaleInvalid);
        }
        let xp = exam::exam_xp(draft.score, draft.max_score);
        let id = self.state.allocate_id();
        self.state.exam_results.push(ExamResult {
            id,
            subject: draft.subject,
            date: draft.date,
            score: draft.score,
            max_score: draft.max_score,
            test_name: draft.test_name,
            notes: draft.notes,
        });
        let mut out = UpdateResult::new();
        self.award_xp(xp as f64, &mut out);
        Ok(out)
    }

    // === Sport ===

    /// Append a workout entry
    pub fn log_workout(&mut self, draft: SportDraft, today: NaiveDate) -> Result<Id> {
        if draft.duration_minutes == 0 {
            return Err(Error::WorkoutEmpty);
        }
        let intensity = draft.intensity.clamp(1, 5);
        let id = self.state.allocate_id();
        self.state.sport_entries.push(SportEntry {
            id,
            date: today,
            activity: draft.activity,
            duration_minutes: draft.duration_minutes,
            intensity,
            reps: draft.reps,
            distance_km: draft.distance_km,
            notes: draft.notes,
        });
        Ok(id)
    }

    // === End of day ===

    /// Whether the end-of-day summary has not run yet today
    pub fn can_complete_day(&self, today: NaiveDate) -> bool {
        self.state.last_day_completed_date != Some(today)
    }

    /// Summarize the day: average the submitted self-assessment into
    /// the live meters, archive an immutable record, and optionally log
    /// a weight measurement. At most once per calendar day.
    pub fn end_day(
        &mut self,
        impressions: &str,
        daily_state: Stats,
        weight: Option<f64>,
        today: NaiveDate,
    ) -> Result<UpdateResult> {
        if !self.can_complete_day(today) {
            return Err(Error::DayAlreadyCompleted);
        }
        if impressions.trim().is_empty() {
            return Err(Error::ImpressionsEmpty);
        }

        let previous_stats = self
            .state
            .day_records
            .last()
            .map(|r| r.stats_summary)
            .unwrap_or_default();
        let averaged = self.state.stats.midpoint(&daily_state);
        let study_minutes = self.state.study_minutes_on(today);
        let day_number = self.state.current_day;
        let completed_quests = self.state.completed_daily_quests() as u32;
        let completed_goals = self.state.completed_daily_goals() as u32;

        let id = self.state.allocate_id();
        self.state.day_records.push(DayRecord {
            id,
            date: today,
            day_number,
            stats_summary: averaged,
            previous_stats,
            daily_state,
            impressions: impressions.to_string(),
            weight,
            total_study_hours: (study_minutes as f64 / 60.0 * 10.0).round() / 10.0,
            completed_quests,
            completed_goals,
        });
        // Tomorrow starts from today's average
        self.state.stats = averaged;
        self.state.last_day_completed_date = Some(today);

        if let Some(weight_kg) = weight {
            let height_cm = self
                .state
                .body_metrics
                .first()
                .map(|b| b.height_cm)
                .unwrap_or(sport::DEFAULT_HEIGHT_CM);
            let id = self.state.allocate_id();
            self.state.body_metrics.push(BodyMetrics {
                id,
                date: today,
                weight_kg,
                height_cm,
            });
        }

        let mut out = UpdateResult::new();
        out.events.push(Event::DayEnded {
            day_number,
            quality: DayQuality::classify(daily_state.mean()),
        });
        Ok(out)
    }

    // === Seasons ===

    /// Archive the running season and reset to fresh defaults. The
    /// achievement catalog carries over unlocked-as-is and the season
    /// history keeps growing; everything else starts over.
    pub fn start_new_season(&mut self, today: NaiveDate) {
        let record = SeasonRecord {
            id: self.state.allocate_id(),
            start_date: self.state.season_start_date,
            end_date: today,
            total_days: self.state.current_day,
            max_streak: self.state.streak,
            total_xp: self.state.xp,
            final_level: self.state.level,
            total_study_hours: (self.state.total_study_hours() * 10.0).round() / 10.0,
        };
        let achievements = std::mem::take(&mut self.state.achievements);
        let mut history = std::mem::take(&mut self.state.season_history);
        history.push(record);
        let next_id = self.state.next_id;

        let mut fresh = GameState::new(today);
        fresh.next_id = fresh.next_id.max(next_id);
        fresh.achievements = achievements;
        fresh.season_history = history;
        self.state = fresh;
    }

    /// Manually reset the streak to zero
    pub fn break_streak(&mut self) {
        self.state.streak = 0;
    }

    // === Achievements ===

    /// Evaluate every still-locked achievement against the live state.
    /// Predicates that hold latch the achievement permanently; the
    /// summed reward goes through the modifier pipeline exactly once
    /// per pass. Safe to call after every mutation.
    pub fn unlock_achievements(&mut self, today: NaiveDate) -> UpdateResult {
        let to_unlock: Vec<usize> = self
            .state
            .achievements
            .iter()
            .enumerate()
            .filter(|(_, a)| !a.unlocked && crate::achievement::predicate_holds(&a.id, &self.state))
            .map(|(i, _)| i)
            .collect();

        let mut out = UpdateResult::new();
        let mut reward_total = 0u32;
        for index in to_unlock {
            let achievement = &mut self.state.achievements[index];
            achievement.unlocked = true;
            achievement.unlocked_at = Some(today);
            reward_total += achievement.xp_reward;
            out.events.push(Event::AchievementUnlocked {
                title: achievement.title.clone(),
            });
        }
        if reward_total > 0 {
            self.award_xp(reward_total as f64, &mut out);
        }
        out
    }

    // === Save management ===

    /// Serialize the full state, pretty-printed
    pub fn export_save(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.state).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Replace the entire state with a parsed blob. All-or-nothing: on
    /// a parse failure the current state is untouched. The accepted
    /// blob is normalized like a load so xp and level stay paired.
    pub fn import_save(&mut self, blob: &str, today: NaiveDate) -> Result<()> {
        let imported = GameState::from_blob(blob, today)?;
        self.state = imported;
        Ok(())
    }

    /// Discard everything and return to first-run defaults
    pub fn reset(&mut self, today: NaiveDate) {
        self.state = GameState::new(today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{achievement, GoalKind, QuestKind, SportActivity, StudyKind};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fresh(today: NaiveDate) -> Engine {
        Engine::new(GameState::new(today))
    }

    fn study_draft(hours: u32, minutes: u32, quality: u8, focus: u8, efficiency: u8) -> StudyDraft {
        StudyDraft {
            subject: "Mathematics".to_string(),
            kind: StudyKind::Theory,
            hours,
            minutes,
            comment: None,
            quality,
            focus,
            efficiency,
        }
    }

    #[test]
    fn test_first_session_study_award() {
        // Fresh state, 90-minute theory session at top quality:
        // round(90 * 2 * (5/3)) = 300 XP, crossing into level 2
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        let out = engine.log_study(study_draft(1, 30, 5, 5, 5), today).unwrap();

        assert_eq!(out.xp_awarded, 300);
        assert_eq!(engine.state().xp, 300);
        assert_eq!(engine.state().level, 2);
        assert!(out.events.contains(&Event::LevelUp { level: 2 }));
        let entry = engine.state().study_entries.last().unwrap();
        assert_eq!(entry.xp_earned, 300);
        assert_eq!(entry.date, today);
    }

    #[test]
    fn test_study_requires_duration() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        let before = engine.state().clone();
        assert!(engine.log_study(study_draft(0, 0, 3, 3, 3), today).is_err());
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_study_meter_effects() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.log_study(study_draft(1, 30, 5, 5, 5), today).unwrap();

        let stats = engine.state().stats;
        assert_eq!(stats.study, 53); // +min(5, round(90/30))
        assert_eq!(stats.focus, 54); // +(5-3)*2
        assert_eq!(stats.discipline, 53); // +round(5/2)
        assert_eq!(stats.emotional_stability, 52); // efficiency > 3
    }

    #[test]
    fn test_low_quality_study_penalizes_discipline() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.log_study(study_draft(0, 30, 1, 3, 1), today).unwrap();

        let stats = engine.state().stats;
        assert_eq!(stats.discipline, 44); // -(4-1)*2
        assert_eq!(stats.emotional_stability, 48); // efficiency < 3
        assert_eq!(stats.focus, 50);
    }

    #[test]
    fn test_deep_focus_buff_activation() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.log_study(study_draft(1, 30, 4, 5, 3), today).unwrap();
        assert!(!engine.state().buff(catalog::DEEP_FOCUS).unwrap().active);

        engine.log_study(study_draft(2, 0, 4, 4, 3), today).unwrap();
        assert!(engine.state().buff(catalog::DEEP_FOCUS).unwrap().active);
    }

    #[test]
    fn test_active_modifiers_scale_awards() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.toggle_buff(catalog::DEEP_FOCUS).unwrap(); // x1.25
        engine.toggle_debuff("procrastination").unwrap(); // x0.8

        let out = engine.log_study(study_draft(0, 30, 3, 3, 3), today).unwrap();
        // base 60, 60 * 1.25 * 0.8 = 60
        assert_eq!(out.xp_awarded, 60);
    }

    #[test]
    fn test_rollover_consecutive_day() {
        let mut engine = fresh(day(2026, 1, 5));
        let out = engine.start_session(day(2026, 1, 6));

        assert!(out.events.contains(&Event::Greeting));
        assert_eq!(engine.state().streak, 2);
        assert_eq!(engine.state().current_day, 2);
        assert_eq!(engine.state().last_active_date, day(2026, 1, 6));
        assert!(!engine.state().debuff(catalog::MISSED_DAY).unwrap().active);
    }

    #[test]
    fn test_rollover_gap_resets_streak_and_penalizes() {
        // Three elapsed days: streak resets, discipline drops by
        // min(15 * 2, 30) = 30, the day counter advances by 3
        let mut engine = fresh(day(2026, 1, 5));
        engine.start_session(day(2026, 1, 8));

        assert_eq!(engine.state().streak, 0);
        assert_eq!(engine.state().stats.discipline, 20);
        assert_eq!(engine.state().current_day, 4);
        assert!(engine.state().debuff(catalog::MISSED_DAY).unwrap().active);
    }

    #[test]
    fn test_rollover_is_idempotent() {
        let mut engine = fresh(day(2026, 1, 5));
        engine.start_session(day(2026, 1, 8));
        let after_first = engine.state().clone();
        engine.start_session(day(2026, 1, 8));
        assert_eq!(engine.state(), &after_first);
    }

    #[test]
    fn test_rollover_ignores_backward_clock() {
        let mut engine = fresh(day(2026, 1, 5));
        let before = engine.state().clone();
        engine.start_session(day(2026, 1, 2));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_consecutive_day_clears_missed_debuff() {
        let mut engine = fresh(day(2026, 1, 5));
        engine.start_session(day(2026, 1, 8));
        assert!(engine.state().debuff(catalog::MISSED_DAY).unwrap().active);
        engine.start_session(day(2026, 1, 9));
        assert!(!engine.state().debuff(catalog::MISSED_DAY).unwrap().active);
    }

    #[test]
    fn test_goal_completion_rewards_once() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        let id = engine.add_goal(
            GoalDraft {
                title: "Finish the algebra block".to_string(),
                kind: GoalKind::Weekly,
                planned_hours: 10.0,
                deadline: day(2026, 1, 12),
            },
            today,
        );

        let out = engine.complete_goal(id).unwrap();
        assert_eq!(out.xp_awarded, 200);
        assert_eq!(engine.state().stats.motivation, 53);
        assert_eq!(engine.state().stats.discipline, 52);
        assert!(matches!(
            out.events.first(),
            Some(Event::GoalCompleted { xp_reward: 200, .. })
        ));

        // Re-completing is a rewardless no-op
        let again = engine.complete_goal(id).unwrap();
        assert_eq!(again, UpdateResult::new());
        assert_eq!(engine.state().xp, 200);
    }

    #[test]
    fn test_goal_hours_accrue() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        let id = engine.add_goal(
            GoalDraft {
                title: "Read the textbook".to_string(),
                kind: GoalKind::Daily,
                planned_hours: 2.0,
                deadline: today,
            },
            today,
        );
        engine.set_goal_hours(id, 1.5).unwrap();
        let goal = engine.state().goals.iter().find(|g| g.id == id).unwrap();
        assert_eq!(goal.actual_hours, 1.5);
        assert!(engine.set_goal_hours(Id::new(9999), 1.0).is_err());
    }

    #[test]
    fn test_quest_completion_and_delete() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        let id = engine.add_quest(
            QuestDraft {
                title: "Flashcard sprint".to_string(),
                description: "Run the whole deck".to_string(),
                kind: QuestKind::Daily,
                xp_reward: 150,
                stat_effects: StatDelta {
                    energy: 10,
                    ..Default::default()
                },
                deadline: None,
            },
            today,
        );

        let out = engine.complete_quest(id).unwrap();
        assert_eq!(out.xp_awarded, 150);
        assert_eq!(engine.state().stats.energy, 60);
        assert!(matches!(
            out.events.first(),
            Some(Event::QuestCompleted { xp_reward: 150, .. })
        ));

        let again = engine.complete_quest(id).unwrap();
        assert_eq!(again, UpdateResult::new());
        assert_eq!(engine.state().xp, 150);

        engine.delete_quest(id).unwrap();
        assert!(engine.state().quests.iter().all(|q| q.id != id));
        assert!(engine.delete_quest(id).is_err());
    }

    #[test]
    fn test_buy_item_insufficient_gold() {
        // Buying beyond the balance changes nothing and reports failure
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.state.gold = 50;
        let before = engine.state().clone();

        let result = engine.buy_item(catalog::FOCUS_POTION, today);
        assert!(matches!(
            result,
            Err(Error::NotEnoughGold { price: 100, gold: 50 })
        ));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_buy_item_stacks() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.buy_item(catalog::FOCUS_POTION, today).unwrap();
        engine.buy_item(catalog::FOCUS_POTION, today).unwrap();

        assert_eq!(engine.state().gold, 300);
        let row = engine.state().inventory.get(catalog::FOCUS_POTION).unwrap();
        assert_eq!(row.quantity, 2);
    }

    #[test]
    fn test_unknown_item_is_rejected() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        assert!(engine.buy_item("midas_touch", today).is_err());
        assert!(engine.use_item("midas_touch").is_err());
    }

    #[test]
    fn test_use_item_applies_boost_and_prunes() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.buy_item("energy_drink", today).unwrap();
        engine.use_item("energy_drink").unwrap();

        assert_eq!(engine.state().stats.energy, 70);
        assert!(!engine.state().inventory.contains_key("energy_drink"));
        // No multiplier, so no ad-hoc buff was spawned
        assert_eq!(engine.state().buffs.len(), 4);
    }

    #[test]
    fn test_use_item_with_multiplier_spawns_buff() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.buy_item(catalog::FOCUS_POTION, today).unwrap();
        engine.use_item(catalog::FOCUS_POTION).unwrap();

        assert_eq!(engine.state().stats.focus, 75);
        let spawned = engine.state().buffs.last().unwrap();
        assert!(spawned.id.starts_with("item_focus_potion_"));
        assert!(spawned.active);
        assert_eq!(spawned.multiplier, 1.25);
        assert!(engine.use_item(catalog::FOCUS_POTION).is_err());
    }

    #[test]
    fn test_cosmetic_item_has_no_use() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.buy_item("phoenix_feather", today).unwrap();
        assert!(matches!(
            engine.use_item("phoenix_feather"),
            Err(Error::ItemWithoutEffect(_))
        ));
        // The failed use consumed nothing
        assert_eq!(
            engine.state().inventory.get("phoenix_feather").unwrap().quantity,
            1
        );
    }

    #[test]
    fn test_claim_day_seven_reward() {
        // Day 7 maps to cycle slot 7: 110 gold, 250 XP, and the potion
        let today = day(2026, 1, 11);
        let mut engine = fresh(today);
        engine.state.current_day = 7;

        assert!(engine.can_claim_reward(today));
        let out = engine.claim_daily_reward(today).unwrap();

        assert_eq!(engine.state().gold, 610);
        assert_eq!(out.xp_awarded, 250);
        assert!(out
            .events
            .contains(&Event::DailyRewardClaimed { xp_reward: 250 }));
        assert_eq!(
            engine.state().inventory.get(catalog::FOCUS_POTION).unwrap().quantity,
            1
        );
        let slot = engine
            .state()
            .daily_rewards
            .iter()
            .find(|r| r.day_number == 7)
            .unwrap();
        assert_eq!(slot.claimed_at, Some(today));

        assert!(!engine.can_claim_reward(today));
        assert!(matches!(
            engine.claim_daily_reward(today),
            Err(Error::RewardAlreadyClaimed)
        ));
    }

    #[test]
    fn test_reward_cycle_wraps_after_thirty_days() {
        let today = day(2026, 2, 1);
        let mut engine = fresh(today);
        engine.state.current_day = 31;
        assert_eq!(engine.today_reward().unwrap().day_number, 1);
        engine.state.current_day = 60;
        assert_eq!(engine.today_reward().unwrap().day_number, 30);
    }

    #[test]
    fn test_record_exam_awards_percentage() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        let out = engine
            .record_exam(ExamDraft {
                subject: "Informatics".to_string(),
                date: today,
                score: 80,
                max_score: 100,
                test_name: "mock exam 1".to_string(),
                notes: None,
            })
            .unwrap();
        assert_eq!(out.xp_awarded, 80);
        assert_eq!(engine.state().exam_results.len(), 1);
    }

    #[test]
    fn test_exam_rejects_zero_scale() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        let result = engine.record_exam(ExamDraft {
            subject: "Informatics".to_string(),
            date: today,
            score: 0,
            max_score: 0,
            test_name: "broken".to_string(),
            notes: None,
        });
        assert!(matches!(result, Err(Error::ExamScaleInvalid)));
        assert!(engine.state().exam_results.is_empty());
    }

    #[test]
    fn test_log_workout() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine
            .log_workout(
                SportDraft {
                    activity: SportActivity::Running,
                    duration_minutes: 40,
                    intensity: 4,
                    reps: None,
                    distance_km: Some(6.5),
                    notes: None,
                },
                today,
            )
            .unwrap();
        assert_eq!(engine.state().sport_entries.len(), 1);

        let empty = engine.log_workout(
            SportDraft {
                activity: SportActivity::Gym,
                duration_minutes: 0,
                intensity: 3,
                reps: None,
                distance_km: None,
                notes: None,
            },
            today,
        );
        assert!(matches!(empty, Err(Error::WorkoutEmpty)));
    }

    #[test]
    fn test_end_day_averages_meters() {
        // focus 50 live + focus 80 submitted -> 65 committed
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        let mut daily_state = Stats::default();
        daily_state.focus = 80;

        let out = engine
            .end_day("Solid day overall", daily_state, None, today)
            .unwrap();
        assert_eq!(engine.state().stats.focus, 65);

        let record = engine.state().day_records.last().unwrap();
        assert_eq!(record.stats_summary.focus, 65);
        assert_eq!(record.previous_stats, Stats::default());
        assert_eq!(record.daily_state.focus, 80);
        assert!(matches!(
            out.events.first(),
            Some(Event::DayEnded { day_number: 1, .. })
        ));

        // A second summary on the same date is rejected outright
        let again = engine.end_day("again", daily_state, None, today);
        assert!(matches!(again, Err(Error::DayAlreadyCompleted)));
        assert_eq!(engine.state().day_records.len(), 1);
    }

    #[test]
    fn test_end_day_requires_impressions() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        let result = engine.end_day("   ", Stats::default(), None, today);
        assert!(matches!(result, Err(Error::ImpressionsEmpty)));
        assert!(engine.state().day_records.is_empty());
        assert!(engine.can_complete_day(today));
    }

    #[test]
    fn test_end_day_quality_classification() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        let out = engine
            .end_day("great", Stats::uniform(80), None, today)
            .unwrap();
        assert!(matches!(
            out.events.first(),
            Some(Event::DayEnded {
                quality: DayQuality::Excellent,
                ..
            })
        ));

        let mut engine = fresh(today);
        let out = engine
            .end_day("rough", Stats::uniform(30), None, today)
            .unwrap();
        assert!(matches!(
            out.events.first(),
            Some(Event::DayEnded {
                quality: DayQuality::Poor,
                ..
            })
        ));
    }

    #[test]
    fn test_end_day_chains_previous_stats() {
        let mut engine = fresh(day(2026, 1, 5));
        engine
            .end_day("day one", Stats::uniform(70), None, day(2026, 1, 5))
            .unwrap();
        let first_summary = engine.state().day_records[0].stats_summary;

        engine.start_session(day(2026, 1, 6));
        engine
            .end_day("day two", Stats::uniform(40), None, day(2026, 1, 6))
            .unwrap();
        let second = engine.state().day_records.last().unwrap();
        assert_eq!(second.previous_stats, first_summary);
    }

    #[test]
    fn test_end_day_records_weight_and_carries_height() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine
            .end_day("weigh-in", Stats::default(), Some(71.5), today)
            .unwrap();

        let metrics = engine.state().body_metrics.last().unwrap();
        assert_eq!(metrics.weight_kg, 71.5);
        assert_eq!(metrics.height_cm, sport::DEFAULT_HEIGHT_CM);

        engine.start_session(day(2026, 1, 6));
        engine
            .end_day("again", Stats::default(), Some(71.0), day(2026, 1, 6))
            .unwrap();
        assert_eq!(engine.state().body_metrics.len(), 2);
        assert_eq!(
            engine.state().body_metrics.last().unwrap().height_cm,
            sport::DEFAULT_HEIGHT_CM
        );
    }

    #[test]
    fn test_end_day_captures_study_time() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.log_study(study_draft(1, 30, 3, 3, 3), today).unwrap();
        engine
            .end_day("studied", Stats::default(), None, today)
            .unwrap();
        let record = engine.state().day_records.last().unwrap();
        assert_eq!(record.total_study_hours, 1.5);
    }

    #[test]
    fn test_achievements_unlock_exactly_once() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);

        let out = engine.unlock_achievements(today);
        // Day one always satisfies the first-step predicate
        assert_eq!(out.xp_awarded, 50);
        assert!(out
            .events
            .iter()
            .any(|e| matches!(e, Event::AchievementUnlocked { .. })));
        let first = engine
            .state()
            .achievements
            .iter()
            .find(|a| a.id == achievement::FIRST_DAY)
            .unwrap();
        assert!(first.unlocked);
        assert_eq!(first.unlocked_at, Some(today));

        let again = engine.unlock_achievements(today);
        assert_eq!(again, UpdateResult::new());
        assert_eq!(engine.state().xp, 50);
    }

    #[test]
    fn test_achievement_rewards_resolve_once_per_pass() {
        // first_day (50) and level_5 (150) unlock together under a
        // x1.25 buff: round(200 * 1.25) = 250, not round-per-reward 251
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.state.xp = 1600;
        engine.state.level = 5;
        engine.toggle_buff(catalog::DEEP_FOCUS).unwrap();

        let out = engine.unlock_achievements(today);
        assert_eq!(out.xp_awarded, 250);
        assert_eq!(engine.state().xp, 1850);
    }

    #[test]
    fn test_streak_achievements() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.state.streak = 7;
        engine.unlock_achievements(today);
        assert!(engine
            .state()
            .achievements
            .iter()
            .find(|a| a.id == achievement::WEEK_STREAK)
            .unwrap()
            .unlocked);
    }

    #[test]
    fn test_iron_week_needs_both_conditions() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.state.streak = 7;
        engine.unlock_achievements(today);
        let locked = |e: &Engine| {
            !e.state()
                .achievements
                .iter()
                .find(|a| a.id == achievement::IRON_WEEK)
                .unwrap()
                .unlocked
        };
        assert!(locked(&engine));

        engine.toggle_iron_mode();
        engine.unlock_achievements(today);
        assert!(!locked(&engine));
    }

    #[test]
    fn test_unlocked_achievements_never_relock() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.state.streak = 7;
        engine.unlock_achievements(today);
        engine.break_streak();
        engine.unlock_achievements(today);
        let week = engine
            .state()
            .achievements
            .iter()
            .find(|a| a.id == achievement::WEEK_STREAK)
            .unwrap();
        assert!(week.unlocked);
    }

    #[test]
    fn test_season_reset_preserves_achievements_and_history() {
        let start = day(2026, 1, 5);
        let mut engine = fresh(start);
        engine.log_study(study_draft(2, 0, 4, 4, 4), start).unwrap();
        engine.unlock_achievements(start);
        engine.state.current_day = 12;
        engine.state.streak = 5;
        let xp_before = engine.state().xp;

        let end = day(2026, 1, 16);
        engine.start_new_season(end);

        assert_eq!(engine.state().xp, 0);
        assert_eq!(engine.state().level, 1);
        assert_eq!(engine.state().current_day, 1);
        assert_eq!(engine.state().gold, 500);
        assert!(engine.state().study_entries.is_empty());
        assert_eq!(engine.state().season_start_date, end);

        // Achievements carry over unlocked-as-is
        assert!(engine
            .state()
            .achievements
            .iter()
            .any(|a| a.unlocked));

        let record = engine.state().season_history.last().unwrap();
        assert_eq!(record.start_date, start);
        assert_eq!(record.end_date, end);
        assert_eq!(record.total_days, 12);
        assert_eq!(record.max_streak, 5);
        assert_eq!(record.total_xp, xp_before);
        assert_eq!(record.total_study_hours, 2.0);
    }

    #[test]
    fn test_break_streak() {
        let mut engine = fresh(day(2026, 1, 5));
        engine.state.streak = 9;
        engine.break_streak();
        assert_eq!(engine.state().streak, 0);
    }

    #[test]
    fn test_export_import_round_trip() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.log_study(study_draft(1, 0, 4, 4, 4), today).unwrap();
        engine.buy_item("energy_drink", today).unwrap();

        let blob = engine.export_save().unwrap();
        let mut other = fresh(today);
        other.import_save(&blob, today).unwrap();
        assert_eq!(other.state(), engine.state());
    }

    #[test]
    fn test_import_failure_leaves_state_untouched() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.log_study(study_draft(1, 0, 4, 4, 4), today).unwrap();
        let before = engine.state().clone();

        assert!(engine.import_save("{{{ definitely not json", today).is_err());
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_import_recomputes_level() {
        let today = day(2026, 1, 5);
        let mut donor = fresh(today);
        donor.state.xp = 2500;
        donor.state.level = 1;
        let blob = serde_json::to_string(donor.state()).unwrap();

        let mut engine = fresh(today);
        engine.import_save(&blob, today).unwrap();
        assert_eq!(engine.state().level, 6);
    }

    #[test]
    fn test_reset_returns_to_defaults() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        engine.log_study(study_draft(1, 0, 4, 4, 4), today).unwrap();
        engine.reset(today);
        assert_eq!(engine.state(), &GameState::new(today));
    }

    #[test]
    fn test_toggle_unknown_modifier_fails() {
        let mut engine = fresh(day(2026, 1, 5));
        assert!(engine.toggle_buff("no_such_buff").is_err());
        assert!(engine.toggle_debuff("no_such_debuff").is_err());
        assert!(engine.toggle_buff("streak").unwrap());
        assert!(!engine.toggle_buff("streak").unwrap());
    }

    #[test]
    fn test_negative_award_never_underflows() {
        let today = day(2026, 1, 5);
        let mut engine = fresh(today);
        let mut out = UpdateResult::new();
        engine.award_xp(-500.0, &mut out);
        assert_eq!(engine.state().xp, 0);
        assert_eq!(engine.state().level, 1);
    }
}
