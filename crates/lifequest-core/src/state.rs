//! The root game-state aggregate
//!
//! `GameState` exclusively owns every entity; nothing lives outside it.
//! It is created once with seeded defaults, restored from a snapshot on
//! every later session, and only ever mutated through the `Engine`
//! command surface. Restoring runs an explicit normalize step that
//! recomputes derived fields and back-fills anything a snapshot from an
//! older shape is missing.

use crate::{
    catalog, level, Achievement, BodyMetrics, Buff, DailyReward, DayRecord, Debuff, Error,
    ExamResult, Goal, Id, InventoryItem, Quest, QuestKind, Result, SeasonRecord, SportEntry, Stats,
    StudyEntry,
};
use chrono::{Duration, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Absolute day counter since the season started, 1-based
    pub current_day: u32,
    /// Consecutive calendar days with recorded activity
    pub streak: u32,
    pub season_start_date: NaiveDate,
    pub last_active_date: NaiveDate,
    pub xp: u64,
    /// Always derived from `xp`; recomputed on load, never trusted
    pub level: u32,
    pub iron_mode: bool,
    #[serde(default)]
    pub gold: u32,
    pub stats: Stats,
    pub study_entries: Vec<StudyEntry>,
    pub goals: Vec<Goal>,
    pub quests: Vec<Quest>,
    pub buffs: Vec<Buff>,
    pub debuffs: Vec<Debuff>,
    pub achievements: Vec<Achievement>,
    pub season_history: Vec<SeasonRecord>,
    /// Owned item stacks keyed by shop item id
    #[serde(default)]
    pub inventory: IndexMap<String, InventoryItem>,
    #[serde(default)]
    pub daily_rewards: Vec<DailyReward>,
    #[serde(default)]
    pub last_reward_claim_date: Option<NaiveDate>,
    #[serde(default)]
    pub last_day_completed_date: Option<NaiveDate>,
    #[serde(default)]
    pub exam_results: Vec<ExamResult>,
    #[serde(default)]
    pub day_records: Vec<DayRecord>,
    #[serde(default)]
    pub sport_entries: Vec<SportEntry>,
    #[serde(default)]
    pub body_metrics: Vec<BodyMetrics>,
    /// Next instance id to allocate
    #[serde(default)]
    pub next_id: u64,
}

impl GameState {
    /// A fresh first-run state with seeded defaults
    pub fn new(today: NaiveDate) -> Self {
        let mut state = Self {
            current_day: 1,
            streak: 1,
            season_start_date: today,
            last_active_date: today,
            xp: 0,
            level: 1,
            iron_mode: false,
            gold: 500,
            stats: Stats::default(),
            study_entries: Vec::new(),
            goals: Vec::new(),
            quests: Vec::new(),
            buffs: catalog::default_buffs(),
            debuffs: catalog::default_debuffs(),
            achievements: catalog::default_achievements(),
            season_history: Vec::new(),
            inventory: IndexMap::new(),
            daily_rewards: catalog::reward_schedule(),
            last_reward_claim_date: None,
            last_day_completed_date: None,
            exam_results: Vec::new(),
            day_records: Vec::new(),
            sport_entries: Vec::new(),
            body_metrics: Vec::new(),
            next_id: 1,
        };
        state.seed_default_quests(today);
        state
    }

    /// Parse a snapshot blob and normalize it. All-or-nothing: a blob
    /// that does not parse leaves nothing behind.
    pub fn from_blob(blob: &str, today: NaiveDate) -> Result<Self> {
        let mut state: GameState =
            serde_json::from_str(blob).map_err(|e| Error::MalformedSave(e.to_string()))?;
        state.normalize(today);
        Ok(state)
    }

    /// Normalize a loaded or imported state: recompute the level from
    /// XP, clamp every meter, refill collections an older snapshot
    /// lacks, and repair the id counter past any stored id.
    pub fn normalize(&mut self, today: NaiveDate) {
        self.level = level::level_for_xp(self.xp);
        self.stats.clamp_all();
        if self.daily_rewards.is_empty() {
            self.daily_rewards = catalog::reward_schedule();
        }
        if self.quests.is_empty() {
            self.seed_default_quests(today);
        }
        let max_used = self
            .study_entries
            .iter()
            .map(|e| e.id.raw())
            .chain(self.goals.iter().map(|g| g.id.raw()))
            .chain(self.quests.iter().map(|q| q.id.raw()))
            .chain(self.season_history.iter().map(|s| s.id.raw()))
            .chain(self.exam_results.iter().map(|e| e.id.raw()))
            .chain(self.day_records.iter().map(|d| d.id.raw()))
            .chain(self.sport_entries.iter().map(|s| s.id.raw()))
            .chain(self.body_metrics.iter().map(|b| b.id.raw()))
            .max()
            .unwrap_or(0);
        self.next_id = self.next_id.max(max_used + 1);
    }

    /// Allocate the next instance id
    pub(crate) fn allocate_id(&mut self) -> Id {
        let id = Id::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn seed_default_quests(&mut self, today: NaiveDate) {
        for draft in catalog::default_quests(today) {
            let id = self.allocate_id();
            self.quests.push(Quest {
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
        }
    }

    // === Derived queries ===

    /// Total logged study time in fractional hours
    pub fn total_study_hours(&self) -> f64 {
        self.study_entries.iter().map(|e| e.total_hours()).sum()
    }

    /// Study minutes logged on one calendar day
    pub fn study_minutes_on(&self, date: NaiveDate) -> u32 {
        self.study_entries
            .iter()
            .filter(|e| e.date == date)
            .map(|e| e.total_minutes())
            .sum()
    }

    /// Study minutes logged within the trailing `days` days
    pub fn study_minutes_within(&self, days: i64, today: NaiveDate) -> u32 {
        let cutoff = today - Duration::days(days);
        self.study_entries
            .iter()
            .filter(|e| e.date >= cutoff)
            .map(|e| e.total_minutes())
            .sum()
    }

    /// Number of quests completed so far
    pub fn completed_quest_count(&self) -> usize {
        self.quests.iter().filter(|q| q.completed).count()
    }

    /// Number of completed daily quests
    pub fn completed_daily_quests(&self) -> usize {
        self.quests
            .iter()
            .filter(|q| q.kind == QuestKind::Daily && q.completed)
            .count()
    }

    /// Number of completed daily goals
    pub fn completed_daily_goals(&self) -> usize {
        self.goals
            .iter()
            .filter(|g| g.kind == crate::GoalKind::Daily && g.completed)
            .count()
    }

    /// Per-channel average of the archived summaries from the trailing
    /// week, or defaults when no day has been archived yet
    pub fn weekly_stats_average(&self, today: NaiveDate) -> Stats {
        let cutoff = today - Duration::days(7);
        let records: Vec<&DayRecord> = self
            .day_records
            .iter()
            .filter(|r| r.date >= cutoff && r.date <= today)
            .collect();
        if records.is_empty() {
            return Stats::default();
        }
        let mut sums = [0i64; 8];
        for record in &records {
            for (i, v) in record.stats_summary.channels().into_iter().enumerate() {
                sums[i] += v as i64;
            }
        }
        let n = records.len() as f64;
        let mut out = [0i32; 8];
        for i in 0..8 {
            out[i] = (sums[i] as f64 / n).round() as i32;
        }
        Stats::from_channels(out)
    }

    /// All recorded practice tests for one subject, in recording order
    pub fn subject_results<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = &'a ExamResult> {
        self.exam_results
            .iter()
            .filter(move |r| r.subject == subject)
    }

    /// Rounded average score for one subject, if any test was recorded
    pub fn subject_average(&self, subject: &str) -> Option<u32> {
        let scores: Vec<u32> = self.subject_results(subject).map(|r| r.score).collect();
        if scores.is_empty() {
            return None;
        }
        let sum: u32 = scores.iter().sum();
        Some((sum as f64 / scores.len() as f64).round() as u32)
    }

    // === Lookups ===

    /// Get a buff by catalog id
    pub fn buff(&self, id: &str) -> Option<&Buff> {
        self.buffs.iter().find(|b| b.id == id)
    }

    /// Get a debuff by catalog id
    pub fn debuff(&self, id: &str) -> Option<&Debuff> {
        self.debuffs.iter().find(|d| d.id == id)
    }

    pub(crate) fn buff_mut(&mut self, id: &str) -> Option<&mut Buff> {
        self.buffs.iter_mut().find(|b| b.id == id)
    }

    pub(crate) fn debuff_mut(&mut self, id: &str) -> Option<&mut Debuff> {
        self.debuffs.iter_mut().find(|d| d.id == id)
    }

    pub(crate) fn goal_mut(&mut self, id: Id) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|g| g.id == id)
    }

    pub(crate) fn quest_mut(&mut self, id: Id) -> Option<&mut Quest> {
        self.quests.iter_mut().find(|q| q.id == id)
    }
}
