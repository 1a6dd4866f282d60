extern crate mix_common;

use mix_common::formation::captain::select_captain;
use mix_common::model::{Participant, RatingType};
use mix_common::rating::RatingSource;

fn player(id: u64, faceit: i32) -> Participant
{
    Participant::new(id, format!("player{}", id)).with_profile(RatingType::Faceit, faceit)
}

#[test]
fn test_empty_team_has_no_captain()
{
    assert!(select_captain(&[], RatingType::Faceit).is_none());
}

#[test]
fn test_highest_rating_is_captain()
{
    let members = vec!(player(1, 1200), player(2, 2100), player(3, 1900));
    let refs: Vec<&Participant> = members.iter().collect();

    let choice = select_captain(&refs, RatingType::Faceit).unwrap();

    assert_eq!(choice.captain.id, 2);
    assert_eq!(choice.index, 1);
    assert_eq!(choice.rating, 2100);
    assert_eq!(choice.source, RatingSource::Profile);
    assert!(!choice.used_manual_rating());
}

#[test]
fn test_ties_go_to_first_listed()
{
    let members = vec!(player(5, 1500), player(3, 1800), player(9, 1800), player(1, 1800));
    let refs: Vec<&Participant> = members.iter().collect();

    let choice = select_captain(&refs, RatingType::Faceit).unwrap();

    assert_eq!(choice.captain.id, 3);
}

#[test]
fn test_manual_rating_can_win_captaincy()
{
    let members = vec!(
        player(1, 2000),
        Participant::new(2, "manual".to_string())
            .with_profile(RatingType::Faceit, 1500)
            .with_manual(RatingType::Faceit, "2200"),
    );
    let refs: Vec<&Participant> = members.iter().collect();

    let choice = select_captain(&refs, RatingType::Faceit).unwrap();

    assert_eq!(choice.captain.id, 2);
    assert_eq!(choice.rating, 2200);
    assert!(choice.used_manual_rating());
}

#[test]
fn test_captain_follows_rating_type()
{
    let members = vec!(
        player(1, 2500).with_profile(RatingType::Premier, 10),
        player(2, 1500).with_profile(RatingType::Premier, 19),
    );
    let refs: Vec<&Participant> = members.iter().collect();

    assert_eq!(select_captain(&refs, RatingType::Faceit).unwrap().captain.id, 1);
    assert_eq!(select_captain(&refs, RatingType::Premier).unwrap().captain.id, 2);
}
