extern crate mix_common;

use mix_common::formation::draft::TeamDraft;
use mix_common::formation::snake::{form_snake_teams, round_order};
use mix_common::formation::{FormationEvent, NullObserver};
use mix_common::model::{Participant, RatingType};

fn pool(ratings: &[i32]) -> Vec<Participant>
{
    ratings.iter()
        .enumerate()
        .map(|(index, &faceit)| Participant::new(index as u64 + 1, format!("player{}", index + 1))
            .with_profile(RatingType::Faceit, faceit))
        .collect()
}

fn ratings(team: &TeamDraft) -> Vec<u32>
{
    team.members().iter().map(|member| member.rating).collect()
}

fn ids(team: &TeamDraft) -> Vec<u64>
{
    team.members().iter().map(|member| member.participant.id).collect()
}

#[test]
fn test_round_order_alternates()
{
    assert_eq!(round_order(0, 3), vec!(0, 1, 2));
    assert_eq!(round_order(1, 3), vec!(2, 1, 0));
    assert_eq!(round_order(2, 3), vec!(0, 1, 2));
}

#[test]
fn test_serpentine_distribution()
{
    let participants = pool(&[100, 200, 300, 400, 500, 600]);

    let teams = form_snake_teams(&participants, 3, RatingType::Faceit, &mut NullObserver);

    assert_eq!(teams.len(), 2);
    assert_eq!(ratings(&teams[0]), vec!(600, 300, 200));
    assert_eq!(ratings(&teams[1]), vec!(500, 400, 100));
}

#[test]
fn test_weakest_remainder_is_left_out()
{
    let participants = pool(&[1500, 900, 2000, 1800, 1100, 1300, 1700]);

    let teams = form_snake_teams(&participants, 3, RatingType::Faceit, &mut NullObserver);

    assert_eq!(teams.len(), 2);
    for team in teams.iter()
    {
        assert_eq!(team.len(), 3);
        assert!(!ids(team).contains(&2));
    }
}

#[test]
fn test_equal_ratings_keep_input_order()
{
    let participants = pool(&[1000; 10]);

    let teams = form_snake_teams(&participants, 5, RatingType::Faceit, &mut NullObserver);

    assert_eq!(ids(&teams[0]), vec!(1, 4, 5, 8, 9));
    assert_eq!(ids(&teams[1]), vec!(2, 3, 6, 7, 10));
}

#[test]
fn test_one_round_per_slot()
{
    let participants = pool(&[1000, 1100, 1200, 1300, 1400, 1500, 1600, 1700, 1800, 1900]);
    let mut events: Vec<FormationEvent> = Vec::new();

    let teams = form_snake_teams(&participants, 5, RatingType::Faceit, &mut events);

    assert_eq!(teams.len(), 2);
    assert_eq!(events, vec!(
        FormationEvent::SnakeRound { round: 0, reverse: false },
        FormationEvent::SnakeRound { round: 1, reverse: true },
        FormationEvent::SnakeRound { round: 2, reverse: false },
        FormationEvent::SnakeRound { round: 3, reverse: true },
        FormationEvent::SnakeRound { round: 4, reverse: false },
    ));
}

#[test]
fn test_too_few_for_a_team()
{
    let participants = pool(&[1000, 1100]);

    assert!(form_snake_teams(&participants, 3, RatingType::Faceit, &mut NullObserver).is_empty());
}
