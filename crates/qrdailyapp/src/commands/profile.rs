use super::history::get_history;
use super::notifications::get_notifications_enabled;
use super::streak::{can_solve_today, get_solved_puzzles, get_state};
use crate::clock::Clock;
use crate::model::PuzzleCategory;
use crate::store::DataStore;
use chrono::{DateTime, FixedOffset};
use std::collections::BTreeMap;
use std::fmt;

/// Title shown next to the streak on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StreakBadge {
    Beginner,
    GettingStarted,
    WeekWarrior,
    OnFire,
    Legend,
}

impl StreakBadge {
    pub fn from_streak(streak: u32) -> Self {
        match streak {
            30.. => StreakBadge::Legend,
            14.. => StreakBadge::OnFire,
            7.. => StreakBadge::WeekWarrior,
            3.. => StreakBadge::GettingStarted,
            _ => StreakBadge::Beginner,
        }
    }
}

impl fmt::Display for StreakBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StreakBadge::Beginner => "Beginner",
            StreakBadge::GettingStarted => "Getting Started",
            StreakBadge::WeekWarrior => "Week Warrior",
            StreakBadge::OnFire => "On Fire",
            StreakBadge::Legend => "Legend",
        };
        f.pad(label)
    }
}

/// Everything the profile screen shows, gathered in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub streak: u32,
    pub badge: StreakBadge,
    pub last_solved_at: Option<DateTime<FixedOffset>>,
    pub can_solve_today: bool,
    pub total_solved: usize,
    /// Longest streak value recorded in the archive.
    pub best_streak: u32,
    pub solved_by_category: BTreeMap<PuzzleCategory, usize>,
    pub scans: usize,
    pub notifications_enabled: bool,
}

pub fn run<S: DataStore, C: Clock>(store: &S, clock: &C) -> ProfileSummary {
    let state = get_state(store);
    let solved = get_solved_puzzles(store);

    let mut solved_by_category = BTreeMap::new();
    for entry in &solved {
        *solved_by_category.entry(entry.puzzle.category).or_insert(0) += 1;
    }
    let best_streak = solved
        .iter()
        .map(|e| e.streak)
        .max()
        .unwrap_or(0)
        .max(state.streak);

    ProfileSummary {
        streak: state.streak,
        badge: StreakBadge::from_streak(state.streak),
        last_solved_at: state.last_solved_at,
        can_solve_today: can_solve_today(store, clock),
        total_solved: solved.len(),
        best_streak,
        solved_by_category,
        scans: get_history(store).len(),
        notifications_enabled: get_notifications_enabled(store),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::commands::history::add_to_history;
    use crate::commands::notifications::set_notifications_enabled;
    use crate::commands::streak::mark_puzzle_solved;
    use crate::model::{NewScan, Puzzle};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_profile() {
        let store = InMemoryStore::new();
        let clock = FixedClock::at("2024-03-10T09:00:00+00:00").unwrap();
        let summary = run(&store, &clock);

        assert_eq!(summary.streak, 0);
        assert_eq!(summary.badge, StreakBadge::Beginner);
        assert_eq!(summary.last_solved_at, None);
        assert!(summary.can_solve_today);
        assert_eq!(summary.total_solved, 0);
        assert_eq!(summary.best_streak, 0);
        assert!(summary.solved_by_category.is_empty());
        assert_eq!(summary.scans, 0);
        assert!(!summary.notifications_enabled);
    }

    #[test]
    fn aggregates_solves_and_scans() {
        let mut store = InMemoryStore::new();
        let clock = FixedClock::at("2024-03-10T09:00:00+00:00").unwrap();
        let logic = Puzzle::new("l", "h", "a", "e", PuzzleCategory::Logic);
        let math = Puzzle::new("m", "h", "a", "e", PuzzleCategory::Math);

        mark_puzzle_solved(&mut store, &clock, &logic);
        clock.advance_days(1);
        mark_puzzle_solved(&mut store, &clock, &math);
        clock.advance_days(1);
        mark_puzzle_solved(&mut store, &clock, &logic);
        clock.advance_days(2);
        mark_puzzle_solved(&mut store, &clock, &math);

        add_to_history(&mut store, &clock, NewScan::new("qr", "x", "text"));
        set_notifications_enabled(&mut store, true);

        let summary = run(&store, &clock);
        assert_eq!(summary.streak, 1);
        assert_eq!(summary.best_streak, 3);
        assert_eq!(summary.total_solved, 4);
        assert_eq!(summary.solved_by_category[&PuzzleCategory::Logic], 2);
        assert_eq!(summary.solved_by_category[&PuzzleCategory::Math], 2);
        assert!(!summary.can_solve_today);
        assert_eq!(summary.scans, 1);
        assert!(summary.notifications_enabled);
    }

    #[test]
    fn badge_tiers() {
        let cases = [
            (0, StreakBadge::Beginner),
            (2, StreakBadge::Beginner),
            (3, StreakBadge::GettingStarted),
            (6, StreakBadge::GettingStarted),
            (7, StreakBadge::WeekWarrior),
            (13, StreakBadge::WeekWarrior),
            (14, StreakBadge::OnFire),
            (29, StreakBadge::OnFire),
            (30, StreakBadge::Legend),
            (365, StreakBadge::Legend),
        ];
        for (streak, badge) in cases {
            assert_eq!(StreakBadge::from_streak(streak), badge, "streak {}", streak);
        }
    }

    #[test]
    fn badge_follows_current_streak() {
        let last = DateTime::parse_from_rfc3339("2024-03-09T20:00:00+00:00").unwrap();
        let fixture = StoreFixture::new().with_streak(7, last);
        let clock = FixedClock::at("2024-03-10T09:00:00+00:00").unwrap();

        let summary = run(&fixture.store, &clock);
        assert_eq!(summary.badge, StreakBadge::WeekWarrior);
        assert_eq!(summary.badge.to_string(), "Week Warrior");
    }
}
