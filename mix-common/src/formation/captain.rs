use model::{Participant, RatingType};
use rating::{self, RatingSource};

#[derive(Debug, Clone, PartialEq)]
pub struct CaptainChoice<'a>
{
    pub captain: &'a Participant,
    /// Position of the captain in the member list
    pub index: usize,
    pub rating: u32,
    pub source: RatingSource,
}

impl<'a> CaptainChoice<'a>
{
    pub fn used_manual_rating(&self) -> bool
    {
        self.source == RatingSource::Manual
    }
}

/// Picks the highest rated member as captain, the first one listed on ties.
///
/// Returns `None` for a team without members.
pub fn select_captain<'a>(members: &[&'a Participant], rating_type: RatingType) -> Option<CaptainChoice<'a>>
{
    let mut choice: Option<CaptainChoice<'a>> = None;

    for (index, &member) in members.iter().enumerate()
    {
        let resolved = rating::resolve(member, rating_type);

        let replace = match choice
        {
            None => true,
            Some(ref current) => resolved.value > current.rating,
        };

        if replace
        {
            choice = Some(CaptainChoice {
                captain: member,
                index,
                rating: resolved.value,
                source: resolved.source,
            });
        }
    }

    choice
}
