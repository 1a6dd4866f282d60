use formation::draft::{self, TeamDraft};
use formation::observer::{FormationEvent, FormationObserver};

use model::{Participant, RatingType};

/// Order in which teams pick during `round` (0-based): forward on even rounds, reversed on odd ones
pub fn round_order(round: usize, team_count: usize) -> Vec<usize>
{
    if round % 2 == 0
    {
        (0..team_count).collect()
    } else
    {
        (0..team_count).rev().collect()
    }
}

/// Spreads participants over `n / team_size` teams with a serpentine draft.
///
/// Participants are taken strongest first (ties keep input order) and only the best
/// `full_teams * team_size` are drafted, the rest are left out.
pub fn form_snake_teams<'a, O>(participants: &'a [Participant], team_size: usize, rating_type: RatingType, observer: &mut O) -> Vec<TeamDraft<'a>>
    where O: FormationObserver + ?Sized
{
    if team_size == 0
    {
        return Vec::new();
    }

    let full_teams = participants.len() / team_size;
    if full_teams == 0
    {
        return Vec::new();
    }

    let mut ranked = draft::rank(participants, rating_type);
    ranked.sort_by(|a, b| b.rating.cmp(&a.rating));
    ranked.truncate(full_teams * team_size);

    let mut teams: Vec<TeamDraft<'a>> = (0..full_teams).map(|_| TeamDraft::new()).collect();
    let mut pool = ranked.into_iter();

    for round in 0..team_size
    {
        observer.on_event(&FormationEvent::SnakeRound {
            round,
            reverse: round % 2 == 1,
        });

        for team in round_order(round, full_teams)
        {
            match pool.next()
            {
                Some(member) => teams[team].push(member),
                None => break,
            }
        }
    }

    teams
}
