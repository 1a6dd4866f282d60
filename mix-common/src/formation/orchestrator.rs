use ::errors::*;

use formation::balance::{self, BalanceSettings};
use formation::captain;
use formation::draft::TeamDraft;
use formation::observer::{FormationEvent, FormationObserver, NullObserver};
use formation::pairs;
use formation::snake;

use model::{Algorithm, CaptainStats, FormationResult, FormationSummary, Participant, RatingType, Team, TeamAverages, TeamMember};
use rating;

use std::collections::HashSet;

/// Smallest number of teams a bracket can be built from
pub const MIN_TEAMS: usize = 2;

/// Checks that `participant_count` people make at least `MIN_TEAMS` full teams of `team_size`
pub fn check_participants(participant_count: usize, team_size: usize) -> Result<usize>
{
    if team_size < 2
    {
        bail!(ErrorKind::InvalidTeamSize(team_size));
    }

    let full_teams = participant_count / team_size;
    if full_teams == 0
    {
        bail!(ErrorKind::InsufficientParticipants(team_size - participant_count));
    }

    if full_teams < MIN_TEAMS
    {
        bail!(ErrorKind::InsufficientTeamsForBracket(team_size * MIN_TEAMS, participant_count));
    }

    Ok(full_teams)
}

/// Forms balanced teams with the default balance settings
pub fn form_teams(participants: &[Participant], team_size: usize, rating_type: RatingType) -> Result<FormationResult>
{
    form_teams_with(participants, team_size, rating_type, &BalanceSettings::default(), &mut NullObserver)
}

/// Splits `participants` into teams of exactly `team_size`.
///
/// Teams of two are paired greedily around twice the global average, larger teams are snake
/// drafted. Both are then run through the balancer and get a captain each. Participants that
/// do not fit in a full team are left out and listed in the summary.
pub fn form_teams_with<O>(participants: &[Participant], team_size: usize, rating_type: RatingType, settings: &BalanceSettings, observer: &mut O) -> Result<FormationResult>
    where O: FormationObserver + ?Sized
{
    check_participants(participants.len(), team_size)?;

    let global_average = rating::average(participants, rating_type);
    let algorithm = Algorithm::for_team_size(team_size);

    observer.on_event(&FormationEvent::Started {
        participants: participants.len(),
        team_size,
        rating_type,
        global_average,
    });

    let mut drafts = match algorithm
    {
        Algorithm::OptimalPairs => pairs::form_pairs(participants, rating_type, global_average, observer),
        Algorithm::SmartSnake => snake::form_snake_teams(participants, team_size, rating_type, observer),
    };

    let excluded_ids = excluded(participants, &drafts);
    if !excluded_ids.is_empty()
    {
        observer.on_event(&FormationEvent::Excluded {
            participant_ids: excluded_ids.clone(),
        });
    }

    let outcome = balance::optimize(&mut drafts, global_average, settings, observer);

    let mut teams = Vec::with_capacity(drafts.len());
    for (index, draft) in drafts.iter().enumerate()
    {
        teams.push(finalize(index, draft, rating_type, observer)?);
    }

    let placed: usize = teams.iter().map(|team| team.members.len()).sum();
    let captains = CaptainStats::from_teams(&teams);

    Ok(FormationResult {
        teams,
        summary: FormationSummary {
            total_participants: participants.len(),
            placed_participants: placed,
            excluded_participants: excluded_ids.len(),
            excluded_ids,
            team_size,
            rating_type,
            algorithm,
            balance_percent: outcome.balance_percent,
            balance_iterations: outcome.iterations,
            balance_swaps: outcome.swaps,
            captains,
        },
    })
}

fn excluded(participants: &[Participant], drafts: &[TeamDraft]) -> Vec<u64>
{
    let placed: HashSet<u64> = drafts.iter()
        .flat_map(|draft| draft.members().iter().map(|member| member.participant.id))
        .collect();

    participants.iter()
        .map(|participant| participant.id)
        .filter(|id| !placed.contains(id))
        .collect()
}

/// Team name from the captain, `Team <n>` when the captain has no usable name
pub fn team_name(captain_name: &str, ordinal: usize) -> String
{
    let captain_name = captain_name.trim();
    if captain_name.is_empty()
    {
        format!("Team {}", ordinal)
    } else
    {
        format!("{} team", captain_name)
    }
}

fn average_of(members: &[&Participant], rating_type: RatingType) -> f64
{
    if members.is_empty()
    {
        return 0.0;
    }

    let total: u64 = members.iter()
        .map(|member| rating::normalize(member, rating_type) as u64)
        .sum();

    total as f64 / members.len() as f64
}

fn finalize<O>(index: usize, draft: &TeamDraft, rating_type: RatingType, observer: &mut O) -> Result<Team>
    where O: FormationObserver + ?Sized
{
    let participants = draft.participants();
    let choice = captain::select_captain(&participants, rating_type)
        .ok_or(ErrorKind::EmptyTeamCaptainSelection)?;

    observer.on_event(&FormationEvent::CaptainSelected {
        team: index,
        captain_id: choice.captain.id,
        rating: choice.rating,
        source: choice.source,
    });

    let members = draft.members().iter()
        .enumerate()
        .map(|(position, member)| TeamMember::new(
            member.participant.id,
            member.participant.name.clone(),
            member.rating,
            position == choice.index,
        ))
        .collect();

    Ok(Team {
        name: team_name(&choice.captain.name, index + 1),
        members,
        average_rating: draft.average(),
        averages: TeamAverages::new(
            average_of(&participants, RatingType::Faceit),
            average_of(&participants, RatingType::Premier),
        ),
        captain_id: choice.captain.id,
        captain_rating: choice.rating,
        captain_used_manual_rating: choice.used_manual_rating(),
    })
}
