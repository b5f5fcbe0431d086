//! Pre-run input inspection.

use super::types::LockedAssignment;
use crate::error::InputIssue;
use crate::geometry::Seat;
use crate::tiering::Application;
use std::collections::{HashMap, HashSet};

/// Reports anomalies in lottery inputs.
///
/// The runner tolerates all of these: duplicate application ids keep the
/// first occurrence, zero-seat applications are never seated, and a lock
/// flagged here is ignored, leaving its applicant to normal tiering. Issues
/// are listed in input order: seats, then applications, then locks.
///
/// # Examples
///
/// ```
/// use u_seatlottery::error::InputIssue;
/// use u_seatlottery::geometry::Seat;
/// use u_seatlottery::lottery::inspect_inputs;
/// use u_seatlottery::tiering::Application;
///
/// let seats = vec![Seat::new("s1", 0.0, 0.0), Seat::new("s1", 1.0, 0.0)];
/// let apps = vec![Application::new("a", 0, 5.0)];
///
/// let issues = inspect_inputs(&seats, &apps, &[]);
/// assert_eq!(
///     issues,
///     vec![
///         InputIssue::DuplicateSeatId("s1".into()),
///         InputIssue::ZeroPartySize("a".into()),
///     ]
/// );
/// ```
pub fn inspect_inputs(
    seats: &[Seat],
    applications: &[Application],
    locked: &[LockedAssignment],
) -> Vec<InputIssue> {
    let mut issues = Vec::new();

    let mut seat_by_id: HashMap<&str, &Seat> = HashMap::with_capacity(seats.len());
    for seat in seats {
        if seat_by_id.contains_key(seat.id.as_str()) {
            issues.push(InputIssue::DuplicateSeatId(seat.id.clone()));
        } else {
            seat_by_id.insert(seat.id.as_str(), seat);
        }
    }

    let mut party_of: HashMap<&str, usize> = HashMap::with_capacity(applications.len());
    for app in applications {
        if party_of.contains_key(app.id.as_str()) {
            issues.push(InputIssue::DuplicateApplicationId(app.id.clone()));
        } else {
            party_of.insert(app.id.as_str(), app.party_size);
        }
        if app.party_size == 0 {
            issues.push(InputIssue::ZeroPartySize(app.id.clone()));
        }
    }

    let mut locked_seats: HashSet<&str> = HashSet::new();
    for lock in locked {
        match party_of.get(lock.application_id.as_str()) {
            None => issues.push(InputIssue::UnknownLockedApplication(
                lock.application_id.clone(),
            )),
            Some(&party_size) if party_size != lock.seat_ids.len() => {
                issues.push(InputIssue::LockedPartySizeMismatch {
                    application_id: lock.application_id.clone(),
                    party_size,
                    locked: lock.seat_ids.len(),
                });
            }
            Some(_) => {}
        }
        for seat_id in &lock.seat_ids {
            match seat_by_id.get(seat_id.as_str()) {
                None => issues.push(InputIssue::UnknownLockedSeat {
                    application_id: lock.application_id.clone(),
                    seat_id: seat_id.clone(),
                }),
                Some(seat) if seat.is_disabled => issues.push(InputIssue::LockedSeatDisabled {
                    application_id: lock.application_id.clone(),
                    seat_id: seat_id.clone(),
                }),
                Some(_) => {}
            }
            if !locked_seats.insert(seat_id.as_str()) {
                issues.push(InputIssue::SeatLockedTwice(seat_id.clone()));
            }
        }
    }

    issues
}
