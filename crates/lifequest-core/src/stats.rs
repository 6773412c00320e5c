//! The eight character meters
//!
//! Every meter lives in `[0, 100]` and is clamped back into that range
//! after any mutation. Partial signed changes are expressed as a
//! `StatDelta` so quest effects and item boosts can touch only the
//! channels they care about.

use serde::{Deserialize, Serialize};

/// Lower bound of every meter
pub const STAT_MIN: i32 = 0;
/// Upper bound of every meter
pub const STAT_MAX: i32 = 100;

/// The eight named meters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub focus: i32,
    pub discipline: i32,
    pub energy: i32,
    pub motivation: i32,
    pub time_management: i32,
    pub study: i32,
    pub emotional_stability: i32,
    pub sport: i32,
}

impl Stats {
    /// All meters set to the same value, clamped
    pub fn uniform(value: i32) -> Self {
        let v = clamp_channel(value);
        Self {
            focus: v,
            discipline: v,
            energy: v,
            motivation: v,
            time_management: v,
            study: v,
            emotional_stability: v,
            sport: v,
        }
    }

    /// Channel values in declaration order:
    /// focus, discipline, energy, motivation, time_management, study,
    /// emotional_stability, sport
    pub fn channels(&self) -> [i32; 8] {
        [
            self.focus,
            self.discipline,
            self.energy,
            self.motivation,
            self.time_management,
            self.study,
            self.emotional_stability,
            self.sport,
        ]
    }

    /// Build from channel values in declaration order
    pub fn from_channels(values: [i32; 8]) -> Self {
        Self {
            focus: values[0],
            discipline: values[1],
            energy: values[2],
            motivation: values[3],
            time_management: values[4],
            study: values[5],
            emotional_stability: values[6],
            sport: values[7],
        }
    }

    /// Apply a partial delta, clamping every touched channel to [0, 100]
    pub fn apply(&mut self, delta: &StatDelta) {
        self.focus = clamp_channel(self.focus + delta.focus);
        self.discipline = clamp_channel(self.discipline + delta.discipline);
        self.energy = clamp_channel(self.energy + delta.energy);
        self.motivation = clamp_channel(self.motivation + delta.motivation);
        self.time_management = clamp_channel(self.time_management + delta.time_management);
        self.study = clamp_channel(self.study + delta.study);
        self.emotional_stability =
            clamp_channel(self.emotional_stability + delta.emotional_stability);
        self.sport = clamp_channel(self.sport + delta.sport);
    }

    /// Per-channel average with another snapshot, rounded to nearest
    pub fn midpoint(&self, other: &Stats) -> Stats {
        let a = self.channels();
        let b = other.channels();
        let mut out = [0i32; 8];
        for i in 0..8 {
            out[i] = ((a[i] + b[i]) as f64 / 2.0).round() as i32;
        }
        Stats::from_channels(out)
    }

    /// Mean of all eight channels
    pub fn mean(&self) -> f64 {
        self.channels().iter().sum::<i32>() as f64 / 8.0
    }

    /// Clamp every channel back into [0, 100]
    pub fn clamp_all(&mut self) {
        *self = Stats::from_channels(self.channels().map(clamp_channel));
    }
}

impl Default for Stats {
    /// Fresh states start every meter at 50
    fn default() -> Self {
        Self::uniform(50)
    }
}

/// A partial, signed change to the meters. Untouched channels stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StatDelta {
    pub focus: i32,
    pub discipline: i32,
    pub energy: i32,
    pub motivation: i32,
    pub time_management: i32,
    pub study: i32,
    pub emotional_stability: i32,
    pub sport: i32,
}

fn clamp_channel(value: i32) -> i32 {
    value.clamp(STAT_MIN, STAT_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats() {
        let stats = Stats::default();
        assert!(stats.channels().iter().all(|&v| v == 50));
    }

    #[test]
    fn test_apply_clamps_both_ends() {
        let mut stats = Stats::default();
        stats.apply(&StatDelta {
            focus: 1000,
            discipline: -1000,
            ..Default::default()
        });
        assert_eq!(stats.focus, 100);
        assert_eq!(stats.discipline, 0);
        assert_eq!(stats.energy, 50);
    }

    #[test]
    fn test_apply_never_escapes_range() {
        let deltas = [-250, -100, -1, 0, 1, 99, 250];
        for &d in &deltas {
            let mut stats = Stats::uniform(50);
            stats.apply(&StatDelta {
                focus: d,
                discipline: d,
                energy: d,
                motivation: d,
                time_management: d,
                study: d,
                emotional_stability: d,
                sport: d,
            });
            assert!(stats
                .channels()
                .iter()
                .all(|&v| (STAT_MIN..=STAT_MAX).contains(&v)));
        }
    }

    #[test]
    fn test_midpoint_rounds_to_nearest() {
        let mut a = Stats::uniform(50);
        a.focus = 50;
        let mut b = Stats::uniform(50);
        b.focus = 80;
        assert_eq!(a.midpoint(&b).focus, 65);

        // Half-way values round up
        b.focus = 51;
        assert_eq!(a.midpoint(&b).focus, 51);
    }

    #[test]
    fn test_mean() {
        assert_eq!(Stats::uniform(40).mean(), 40.0);
        let mut stats = Stats::uniform(40);
        stats.sport = 48;
        assert_eq!(stats.mean(), 41.0);
    }

    #[test]
    fn test_partial_delta_deserializes() {
        let delta: StatDelta = serde_json::from_str(r#"{"study": 10, "focus": 5}"#).unwrap();
        assert_eq!(delta.study, 10);
        assert_eq!(delta.focus, 5);
        assert_eq!(delta.energy, 0);
    }
}
