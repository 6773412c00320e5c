//! Leveling math
//!
//! A fixed quadratic curve maps accumulated XP to a level tier:
//! `level = floor(sqrt(xp / 100)) + 1`. The inverse pair gives the XP
//! band a level occupies. All three functions are pure and total; the
//! stored `level` field is always recomputed from `xp` through here and
//! never trusted from a snapshot.

/// Level reached with the given amount of XP
pub fn level_for_xp(xp: u64) -> u32 {
    (xp as f64 / 100.0).sqrt().floor() as u32 + 1
}

/// XP required to have reached `level`
pub fn xp_for_level(level: u32) -> u64 {
    let l = level.saturating_sub(1) as u64;
    l * l * 100
}

/// XP required to reach `level + 1`
pub fn xp_for_next_level(level: u32) -> u64 {
    let l = level as u64;
    l * l * 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_level_one() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(xp_for_level(1), 0);
        assert_eq!(xp_for_next_level(1), 100);
    }

    #[test]
    fn test_level_band_round_trip() {
        for level in 1..=120u32 {
            assert_eq!(level_for_xp(xp_for_level(level)), level);
            assert_eq!(level_for_xp(xp_for_next_level(level) - 1), level);
        }
    }

    #[test]
    fn test_bands_have_no_gaps() {
        for level in 1..=120u32 {
            assert_eq!(xp_for_next_level(level), xp_for_level(level + 1));
        }
    }

    #[test]
    fn test_level_is_monotonic() {
        let mut previous = 0;
        for xp in (0..50_000u64).step_by(7) {
            let level = level_for_xp(xp);
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn test_curve_samples() {
        assert_eq!(level_for_xp(300), 2);
        assert_eq!(level_for_xp(99), 1);
        assert_eq!(level_for_xp(100), 2);
        assert_eq!(level_for_xp(400), 3);
        assert_eq!(level_for_xp(2500), 6);
    }
}
