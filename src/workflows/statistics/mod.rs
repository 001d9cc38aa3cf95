//! Derived counts over the club and registration working sets. Always a full
//! recompute on read; at admin-tool scale there is nothing worth caching.

pub mod router;

use serde::Serialize;

use crate::workflows::clubs::Club;
use crate::workflows::registration::{Member, MemberStatus};

pub use router::statistics_router;

/// Label shown for members whose club no longer exists.
pub const UNKNOWN_CLUB: &str = "unknown club";

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationTotals {
    pub total_clubs: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClubBreakdown {
    pub club_id: String,
    pub club_name: String,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn totals(clubs: &[Club], members: &[Member]) -> RegistrationTotals {
    let mut totals = RegistrationTotals {
        total_clubs: clubs.len(),
        ..RegistrationTotals::default()
    };
    for member in members {
        match member.status {
            MemberStatus::Pending => totals.pending += 1,
            MemberStatus::Approved => totals.approved += 1,
            MemberStatus::Rejected => totals.rejected += 1,
        }
    }
    totals
}

/// Per-club breakdown, one row per club in directory order. Orphaned members
/// count toward [`totals`] but appear in no club row.
pub fn per_club(clubs: &[Club], members: &[Member]) -> Vec<ClubBreakdown> {
    clubs
        .iter()
        .map(|club| {
            let mut row = ClubBreakdown {
                club_id: club.id.clone(),
                club_name: club.name.clone(),
                pending: 0,
                approved: 0,
                rejected: 0,
            };
            for member in members.iter().filter(|member| member.club == club.id) {
                match member.status {
                    MemberStatus::Pending => row.pending += 1,
                    MemberStatus::Approved => row.approved += 1,
                    MemberStatus::Rejected => row.rejected += 1,
                }
            }
            row
        })
        .collect()
}

/// Name-lookup fallback for members referencing a deleted club.
pub fn club_name(clubs: &[Club], club_id: &str) -> String {
    clubs
        .iter()
        .find(|club| club.id == club_id)
        .map(|club| club.name.clone())
        .unwrap_or_else(|| UNKNOWN_CLUB.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::registration::MemberDraft;

    fn club(id: &str, name: &str) -> Club {
        Club {
            id: id.to_string(),
            avatar: String::new(),
            name: name.to_string(),
            description: String::new(),
            chu_nhiem: String::new(),
            active: true,
        }
    }

    fn member(id: &str, club: &str, status: MemberStatus) -> Member {
        let mut record = MemberDraft {
            name: format!("member {id}"),
            email: String::new(),
            phone: String::new(),
            gender: "other".to_string(),
            address: String::new(),
            skills: String::new(),
            club: club.to_string(),
            reason: String::new(),
        }
        .into_pending();
        record.id = id.to_string();
        record.status = status;
        record
    }

    #[test]
    fn per_club_breakdown_counts_each_status() {
        let clubs = vec![club("K", "Karate")];
        let members = vec![
            member("m1", "K", MemberStatus::Pending),
            member("m2", "K", MemberStatus::Approved),
            member("m3", "K", MemberStatus::Approved),
        ];

        let rows = per_club(&clubs, &members);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].pending, 1);
        assert_eq!(rows[0].approved, 2);
        assert_eq!(rows[0].rejected, 0);
    }

    #[test]
    fn orphans_count_in_totals_but_no_club_row() {
        let clubs = vec![club("K", "Karate")];
        let members = vec![
            member("m1", "K", MemberStatus::Approved),
            member("m2", "gone", MemberStatus::Rejected),
        ];

        let overall = totals(&clubs, &members);
        assert_eq!(overall.total_clubs, 1);
        assert_eq!(overall.approved, 1);
        assert_eq!(overall.rejected, 1);

        let rows = per_club(&clubs, &members);
        assert_eq!(rows[0].rejected, 0);
        assert_eq!(club_name(&clubs, "gone"), UNKNOWN_CLUB);
    }
}
