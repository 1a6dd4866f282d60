use formation::draft::{self, Ranked, TeamDraft};
use formation::observer::{FormationEvent, FormationObserver};

use model::{Participant, RatingType};

use std::cmp::Ordering;

/// Two participants that could be a team, by their position in the input
#[derive(Debug, Clone, PartialEq)]
pub struct CandidatePair
{
    pub first: usize,
    pub second: usize,
    pub rating: u64,
    /// Distance of `rating` from the ideal pair rating
    pub deviation: f64,
}

/// Every unordered pair `(i, j)` with `i < j`, sorted by closeness to `target`.
///
/// The sort is stable so pairs that deviate equally keep enumeration order.
pub fn candidate_pairs(ranked: &[Ranked], target: f64) -> Vec<CandidatePair>
{
    let count = ranked.len();
    let mut candidates = Vec::with_capacity(count * count.saturating_sub(1) / 2);

    for first in 0..count
    {
        for second in (first + 1)..count
        {
            let rating = ranked[first].rating as u64 + ranked[second].rating as u64;

            candidates.push(CandidatePair {
                first,
                second,
                rating,
                deviation: (rating as f64 - target).abs(),
            });
        }
    }

    candidates.sort_by(|a, b| a.deviation.partial_cmp(&b.deviation).unwrap_or(Ordering::Equal));

    candidates
}

/// Builds teams of two whose summed rating is as close as possible to twice the global average.
///
/// Greedy: candidates are walked from the smallest deviation up and kept whenever neither
/// member is taken yet, until `n / 2` pairs exist. With an odd pool one participant is left over.
pub fn form_pairs<'a, O>(participants: &'a [Participant], rating_type: RatingType, global_average: f64, observer: &mut O) -> Vec<TeamDraft<'a>>
    where O: FormationObserver + ?Sized
{
    let ranked = draft::rank(participants, rating_type);
    let wanted = ranked.len() / 2;
    let target = global_average * 2.0;

    let mut used = vec!(false; ranked.len());
    let mut teams = Vec::with_capacity(wanted);

    for candidate in candidate_pairs(&ranked, target)
    {
        if teams.len() >= wanted
        {
            break;
        }

        if used[candidate.first] || used[candidate.second]
        {
            continue;
        }

        used[candidate.first] = true;
        used[candidate.second] = true;

        let first = ranked[candidate.first];
        let second = ranked[candidate.second];

        observer.on_event(&FormationEvent::PairCommitted {
            first_id: first.participant.id,
            second_id: second.participant.id,
            pair_rating: candidate.rating,
            deviation: candidate.deviation,
        });

        teams.push(TeamDraft::with_members(vec!(first, second)));
    }

    teams
}
