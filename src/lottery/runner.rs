//! Lottery execution.

use super::config::LotteryConfig;
use super::types::{AttemptRecord, LockedAssignment, LotteryResult, LotteryStats};
use crate::allocation::{Assignment, GroupAllocator, Tier};
use crate::geometry::{GeometryScorer, ScoredSeat, Seat};
use crate::random::{RandomSource, RngSource};
use crate::rating::rate_assignments;
use crate::tiering::{classify, Application, HybridSelector, TierPlan};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace, warn};

/// Executes a lottery run.
///
/// A run is a single greedy pass: locked seats are excluded, the remaining
/// seats are scored, and applicants are attempted tier by tier. Granted
/// seats leave the pool immediately and are never revisited.
pub struct LotteryRunner;

impl LotteryRunner {
    /// Runs a lottery with randomness seeded from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_seatlottery::geometry::Seat;
    /// use u_seatlottery::lottery::{LotteryConfig, LotteryRunner};
    /// use u_seatlottery::tiering::Application;
    ///
    /// let seats: Vec<Seat> = (0..4)
    ///     .map(|c| Seat::new(format!("A{c}"), c as f64, 1.0).with_grid("A", 1, c))
    ///     .collect();
    /// let apps = vec![Application::new("pair", 2, 5.0), Application::new("solo", 1, 5.0)];
    ///
    /// let result = LotteryRunner::run(&seats, &apps, &LotteryConfig::default().with_seed(1));
    /// assert_eq!(result.assignments.len(), 2);
    /// assert_eq!(result.stats.total_people_seated, 3);
    /// ```
    pub fn run(
        seats: &[Seat],
        applications: &[Application],
        config: &LotteryConfig,
    ) -> LotteryResult {
        Self::run_with_locks(seats, applications, &[], config)
    }

    /// Runs a lottery honouring pre-locked assignments.
    ///
    /// A lock is honoured only if it names a known application not locked
    /// before and holds exactly `party_size` (at least one) distinct seats.
    /// Each seat must be an enabled input seat not held by an earlier
    /// honoured lock. Any other lock is ignored with a warning: its seats
    /// stay in the pool and its applicant is tiered like everyone else.
    pub fn run_with_locks(
        seats: &[Seat],
        applications: &[Application],
        locked: &[LockedAssignment],
        config: &LotteryConfig,
    ) -> LotteryResult {
        let mut source = RngSource::from_seed(config.seed);
        Self::run_with_source(seats, applications, locked, config, &mut source)
    }

    /// Runs a lottery with an explicit random source.
    ///
    /// `config.seed` is ignored. Applications sharing an id are treated as
    /// one: the first occurrence wins.
    pub fn run_with_source(
        seats: &[Seat],
        applications: &[Application],
        locked: &[LockedAssignment],
        config: &LotteryConfig,
        source: &mut dyn RandomSource,
    ) -> LotteryResult {
        debug!(
            seats = seats.len(),
            applications = applications.len(),
            locked = locked.len(),
            skill_weight = config.skill_weight,
            "lottery run started"
        );

        let distinct = first_by_id(applications);
        let honoured = honoured_locks(seats, &distinct, locked);

        let excluded: HashSet<&str> = honoured
            .iter()
            .flat_map(|l| l.seat_ids.iter().map(String::as_str))
            .collect();
        let scorer = GeometryScorer::for_available(seats, config.stage, &excluded);
        let available = scorer.score_available(seats, &excluded);

        let mut assignments = locked_assignments(seats, &honoured, &scorer);
        let locked_ids: HashSet<&str> = honoured
            .iter()
            .map(|l| l.application_id.as_str())
            .collect();
        let pending: Vec<&Application> = distinct
            .iter()
            .copied()
            .filter(|a| !locked_ids.contains(a.id.as_str()))
            .collect();

        let mut unassigned = Vec::new();
        let mut attempts = Vec::new();
        let mut rescue_overflow = 0;

        if available.is_empty() || pending.is_empty() {
            debug!(
                available = available.len(),
                pending = pending.len(),
                "nothing to allocate"
            );
            for app in &pending {
                if classify(app) == Tier::Rescue {
                    rescue_overflow += 1;
                }
                unassigned.push(app.id.clone());
            }
        } else {
            let selector = HybridSelector::new(config.skill_weight);
            let plan = TierPlan::partition(pending).ordered(&selector, source);
            let allocator = GroupAllocator::new(config.solo_bonus_ratio);
            let score_of: HashMap<&str, f64> =
                available.iter().map(|s| (s.id(), s.score)).collect();

            let mut assigned: HashSet<String> = HashSet::new();
            let mut solo: HashSet<String> = HashSet::new();

            for (tier, app) in plan.iter() {
                let granted =
                    allocator.allocate(app.party_size, &available, &assigned, Some(&solo));
                let seated = granted.is_some();
                trace!(
                    application_id = %app.id,
                    tier = tier.level(),
                    party_size = app.party_size,
                    seated,
                    "allocation attempt"
                );
                attempts.push(AttemptRecord {
                    application_id: app.id.clone(),
                    tier,
                    seated,
                });

                match granted {
                    Some(seat_ids) => {
                        let average = mean(
                            seat_ids
                                .iter()
                                .filter_map(|id| score_of.get(id.as_str()).copied()),
                        );
                        if seat_ids.len() == 1 {
                            solo.extend(seat_ids.iter().cloned());
                        }
                        assigned.extend(seat_ids.iter().cloned());
                        assignments.push(Assignment::new(app.id.clone(), seat_ids, average, tier));
                    }
                    None => {
                        if tier == Tier::Rescue {
                            rescue_overflow += 1;
                        }
                        unassigned.push(app.id.clone());
                    }
                }
            }
        }

        rate_assignments(&mut assignments);

        let stats = build_stats(
            seats.len(),
            &available,
            distinct.len(),
            &assignments,
            unassigned.len(),
            rescue_overflow,
        );
        debug!(
            seated = assignments.len(),
            unassigned = stats.unassigned_count,
            rescue_overflow = stats.tier2_overflow_count,
            "lottery run finished"
        );

        LotteryResult {
            assignments,
            unassigned,
            stats,
            attempts,
        }
    }
}

/// First application for each id, in input order.
fn first_by_id(applications: &[Application]) -> Vec<&Application> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(applications.len());
    applications
        .iter()
        .filter(|&a| {
            let fresh = seen.insert(a.id.as_str());
            if !fresh {
                warn!(application_id = %a.id, "duplicate application ignored");
            }
            fresh
        })
        .collect()
}

/// Locks that can be honoured, in input order.
fn honoured_locks<'a>(
    seats: &[Seat],
    applications: &[&Application],
    locked: &'a [LockedAssignment],
) -> Vec<&'a LockedAssignment> {
    if locked.is_empty() {
        return Vec::new();
    }
    let mut seat_by_id: HashMap<&str, &Seat> = HashMap::with_capacity(seats.len());
    for seat in seats {
        seat_by_id.entry(seat.id.as_str()).or_insert(seat);
    }
    let party_of: HashMap<&str, usize> = applications
        .iter()
        .map(|a| (a.id.as_str(), a.party_size))
        .collect();

    let mut locked_apps: HashSet<&str> = HashSet::new();
    let mut held: HashSet<&str> = HashSet::new();
    let mut out = Vec::with_capacity(locked.len());
    for lock in locked {
        let id = lock.application_id.as_str();
        let Some(&party_size) = party_of.get(id) else {
            warn!(application_id = %id, "locked assignment for unknown application");
            continue;
        };
        if locked_apps.contains(id) {
            warn!(application_id = %id, "duplicate locked assignment ignored");
            continue;
        }
        if party_size == 0 || lock.seat_ids.len() != party_size {
            warn!(
                application_id = %id,
                party_size,
                locked_seats = lock.seat_ids.len(),
                "locked assignment does not match party size"
            );
            continue;
        }

        let mut claimed: HashSet<&str> = HashSet::with_capacity(party_size);
        let usable = lock.seat_ids.iter().all(|seat_id| {
            let seat_id = seat_id.as_str();
            let ok = seat_by_id.get(seat_id).is_some_and(|s| !s.is_disabled)
                && !held.contains(seat_id)
                && claimed.insert(seat_id);
            if !ok {
                warn!(application_id = %id, seat_id, "locked seat unusable");
            }
            ok
        });
        if !usable {
            continue;
        }

        locked_apps.insert(id);
        held.extend(claimed);
        out.push(lock);
    }
    out
}

/// Tier-0 assignments for honoured locks.
fn locked_assignments(
    seats: &[Seat],
    honoured: &[&LockedAssignment],
    scorer: &GeometryScorer,
) -> Vec<Assignment> {
    if honoured.is_empty() {
        return Vec::new();
    }
    let mut seat_by_id: HashMap<&str, &Seat> = HashMap::with_capacity(seats.len());
    for seat in seats {
        seat_by_id.entry(seat.id.as_str()).or_insert(seat);
    }

    honoured
        .iter()
        .map(|lock| {
            let average = mean(
                lock.seat_ids
                    .iter()
                    .filter_map(|id| seat_by_id.get(id.as_str()))
                    .map(|seat| scorer.score(seat).score),
            );
            Assignment::new(
                lock.application_id.clone(),
                lock.seat_ids.clone(),
                average,
                Tier::Locked,
            )
        })
        .collect()
}

fn build_stats(
    total_seats: usize,
    available: &[ScoredSeat],
    total_applications: usize,
    assignments: &[Assignment],
    unassigned_count: usize,
    tier2_overflow_count: usize,
) -> LotteryStats {
    let mut tier_counts = [0usize; 4];
    for a in assignments {
        tier_counts[a.tier.level() as usize] += 1;
    }
    LotteryStats {
        total_applications,
        total_seats,
        available_seats: available.len(),
        tier_counts,
        total_people_seated: assignments.iter().map(Assignment::party_size).sum(),
        average_score: mean(assignments.iter().map(|a| a.average_score)),
        tier2_overflow_count,
        unassigned_count,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}
