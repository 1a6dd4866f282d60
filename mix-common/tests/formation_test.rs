extern crate mix_common;

use mix_common::errors::ErrorKind;
use mix_common::formation::{self, BalanceSettings, FormationEvent};
use mix_common::model::{Algorithm, Participant, RatingType};
use mix_common::rating;

use std::collections::HashSet;

fn pool(ratings: &[i32]) -> Vec<Participant>
{
    ratings.iter()
        .enumerate()
        .map(|(index, &faceit)| Participant::new(index as u64 + 1, format!("player{}", index + 1))
            .with_profile(RatingType::Faceit, faceit))
        .collect()
}

/// Spread out but repeatable ratings
fn varied_pool(count: u64) -> Vec<Participant>
{
    (1..count + 1)
        .map(|id| Participant::new(id, format!("player{}", id))
            .with_profile(RatingType::Faceit, (800 + (id * 7919) % 2200) as i32)
            .with_profile(RatingType::Premier, (1 + (id * 31) % 20) as i32))
        .collect()
}

#[test]
fn test_four_players_in_pairs()
{
    let participants = pool(&[2000, 1000, 1500, 1200]);

    let result = formation::form_teams(&participants, 2, RatingType::Faceit).unwrap();

    assert_eq!(result.teams.len(), 2);

    let first = &result.teams[0];
    assert_eq!(first.name, "player1 team");
    assert_eq!(first.average_rating, 1500.0);
    assert_eq!(first.captain_id, 1);
    assert_eq!(first.captain_rating, 2000);

    let second = &result.teams[1];
    assert_eq!(second.name, "player3 team");
    assert_eq!(second.average_rating, 1350.0);
    assert_eq!(second.captain_id, 3);
    assert_eq!(second.captain_rating, 1500);

    let summary = &result.summary;
    assert_eq!(summary.algorithm, Algorithm::OptimalPairs);
    assert_eq!(summary.placed_participants, 4);
    assert_eq!(summary.excluded_participants, 0);
    assert!((summary.balance_percent - 10.526).abs() < 0.001);
    assert_eq!(summary.balance_iterations, 0);
    assert_eq!(summary.captains.count, 2);
    assert_eq!(summary.captains.min_rating, 1500);
    assert_eq!(summary.captains.max_rating, 2000);
    assert_eq!(summary.captains.avg_rating, 1750.0);
}

#[test]
fn test_identical_ratings_in_fives()
{
    let participants = pool(&[1000; 10]);

    let result = formation::form_teams(&participants, 5, RatingType::Faceit).unwrap();

    assert_eq!(result.teams.len(), 2);
    assert_eq!(result.summary.algorithm, Algorithm::SmartSnake);
    assert_eq!(result.summary.balance_percent, 0.0);

    for team in result.teams.iter()
    {
        assert_eq!(team.members.len(), 5);
        assert_eq!(team.captain_id, team.members[0].participant_id);
        assert!(team.members[0].is_captain);
    }
    assert_eq!(result.teams[0].captain_id, 1);
    assert_eq!(result.teams[1].captain_id, 2);
}

#[test]
fn test_seven_players_cannot_make_a_bracket()
{
    let participants = pool(&[1000, 1100, 1200, 1300, 1400, 1500, 1600]);

    let error = formation::form_teams(&participants, 5, RatingType::Faceit).unwrap_err();

    match *error.kind()
    {
        ErrorKind::InsufficientTeamsForBracket(required, actual) =>
        {
            assert_eq!(required, 10);
            assert_eq!(actual, 7);
        },
        ref other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn test_fewer_than_one_team()
{
    let participants = pool(&[1000, 1100, 1200]);

    let error = formation::form_teams(&participants, 5, RatingType::Faceit).unwrap_err();

    match *error.kind()
    {
        ErrorKind::InsufficientParticipants(shortfall) => assert_eq!(shortfall, 2),
        ref other => panic!("Unexpected error: {:?}", other),
    }
}

#[test]
fn test_team_size_below_two()
{
    let participants = pool(&[1000, 1100, 1200]);

    for &size in [0, 1].iter()
    {
        match *formation::form_teams(&participants, size, RatingType::Faceit).unwrap_err().kind()
        {
            ErrorKind::InvalidTeamSize(reported) => assert_eq!(reported, size),
            ref other => panic!("Unexpected error: {:?}", other),
        }
    }
}

#[test]
fn test_bracket_boundaries()
{
    for size in 2..6
    {
        for count in 0..(size * 2)
        {
            let participants = varied_pool(count as u64);
            let error = formation::form_teams(&participants, size, RatingType::Faceit).unwrap_err();

            match *error.kind()
            {
                ErrorKind::InsufficientParticipants(shortfall) =>
                {
                    assert!(count < size);
                    assert_eq!(shortfall, size - count);
                },
                ErrorKind::InsufficientTeamsForBracket(required, actual) =>
                {
                    assert!(count >= size);
                    assert_eq!(required, size * 2);
                    assert_eq!(actual, count);
                },
                ref other => panic!("Unexpected error: {:?}", other),
            }
        }

        assert!(formation::form_teams(&varied_pool((size * 2) as u64), size, RatingType::Faceit).is_ok());
    }
}

#[test]
fn test_every_pool_is_split_into_full_teams()
{
    for &size in [2, 3, 5].iter()
    {
        for count in (size * 2)..(size * 6 + 3)
        {
            let participants = varied_pool(count as u64);
            let result = formation::form_teams(&participants, size, RatingType::Faceit).unwrap();

            assert_eq!(result.teams.len(), count / size);
            assert_eq!(result.summary.placed_participants, (count / size) * size);
            assert_eq!(result.summary.excluded_participants, count - (count / size) * size);
            assert_eq!(result.summary.excluded_ids.len(), result.summary.excluded_participants);

            let mut seen = HashSet::new();
            for team in result.teams.iter()
            {
                assert_eq!(team.members.len(), size);
                for member in team.members.iter()
                {
                    assert!(seen.insert(member.participant_id), "{} placed twice", member.participant_id);
                }
            }
            for id in result.summary.excluded_ids.iter()
            {
                assert!(!seen.contains(id));
            }
            assert_eq!(seen.len() + result.summary.excluded_ids.len(), count);
        }
    }
}

#[test]
fn test_captain_is_best_member()
{
    let participants = varied_pool(23);
    let result = formation::form_teams(&participants, 4, RatingType::Faceit).unwrap();

    for team in result.teams.iter()
    {
        let captains: Vec<_> = team.members.iter().filter(|member| member.is_captain).collect();
        assert_eq!(captains.len(), 1);

        let best = team.members.iter().map(|member| member.rating).max().unwrap();
        let first_best = team.members.iter().find(|member| member.rating == best).unwrap();

        assert_eq!(captains[0].participant_id, first_best.participant_id);
        assert_eq!(team.captain_id, first_best.participant_id);
        assert_eq!(team.captain_rating, best);
        assert_eq!(team.captain().unwrap().participant_id, team.captain_id);
    }
}

#[test]
fn test_reports_both_rating_types()
{
    let participants = varied_pool(12);
    let result = formation::form_teams(&participants, 3, RatingType::Premier).unwrap();

    for team in result.teams.iter()
    {
        let members: Vec<&Participant> = team.members.iter()
            .map(|member| participants.iter().find(|participant| participant.id == member.participant_id).unwrap())
            .collect();

        let faceit: u32 = members.iter().map(|member| rating::normalize(member, RatingType::Faceit)).sum();
        let premier: u32 = members.iter().map(|member| rating::normalize(member, RatingType::Premier)).sum();

        assert_eq!(team.averages.faceit, faceit as f64 / 3.0);
        assert_eq!(team.averages.premier, premier as f64 / 3.0);
        assert_eq!(team.average_rating, team.averages.premier);
    }
}

#[test]
fn test_global_average_includes_excluded()
{
    let participants = pool(&[1000, 1000, 1000, 1000, 3000]);
    let mut events: Vec<FormationEvent> = Vec::new();

    let result = formation::form_teams_with(&participants, 2, RatingType::Faceit, &BalanceSettings::default(), &mut events).unwrap();

    assert_eq!(result.summary.excluded_ids, vec!(5));
    assert_eq!(events[0], FormationEvent::Started {
        participants: 5,
        team_size: 2,
        rating_type: RatingType::Faceit,
        global_average: 1400.0,
    });
    assert!(events.contains(&FormationEvent::Excluded { participant_ids: vec!(5) }));
}

#[test]
fn test_manual_captains_are_counted()
{
    let mut participants = pool(&[1500, 1400, 1300, 1200]);
    participants[0] = participants[0].clone().with_manual(RatingType::Faceit, 2400);

    let result = formation::form_teams(&participants, 2, RatingType::Faceit).unwrap();

    assert_eq!(result.summary.captains.manual_count, 1);
    let manual: Vec<_> = result.teams.iter().filter(|team| team.captain_used_manual_rating).collect();
    assert_eq!(manual.len(), 1);
    assert_eq!(manual[0].captain_id, 1);
    assert_eq!(manual[0].captain_rating, 2400);
}

#[test]
fn test_blank_captain_name_falls_back_to_ordinal()
{
    let participants = vec!(
        Participant::new(1, "  ".to_string()).with_profile(RatingType::Faceit, 2000),
        Participant::new(2, "b".to_string()).with_profile(RatingType::Faceit, 1000),
        Participant::new(3, "c".to_string()).with_profile(RatingType::Faceit, 1500),
        Participant::new(4, "d".to_string()).with_profile(RatingType::Faceit, 1500),
    );

    let result = formation::form_teams(&participants, 2, RatingType::Faceit).unwrap();

    let names: Vec<&str> = result.teams.iter().map(|team| team.name.as_str()).collect();
    assert_eq!(names, vec!("Team 1", "c team"));
}

#[test]
fn test_missing_ratings_never_fail()
{
    let participants: Vec<Participant> = (1..9)
        .map(|id| Participant::new(id, format!("player{}", id)))
        .collect();

    let result = formation::form_teams(&participants, 4, RatingType::Premier).unwrap();

    assert_eq!(result.summary.balance_percent, 0.0);
    for team in result.teams.iter()
    {
        assert_eq!(team.average_rating, 5.0);
        assert_eq!(team.averages.faceit, 1000.0);
    }
}
