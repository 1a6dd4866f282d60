use model::{Participant, RatingType};
use rating;

/// A participant next to their effective rating for the run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a>
{
    pub participant: &'a Participant,
    pub rating: u32,
}

impl<'a> Ranked<'a>
{
    pub fn new(participant: &'a Participant, rating_type: RatingType) -> Ranked<'a>
    {
        Ranked {
            participant,
            rating: rating::normalize(participant, rating_type),
        }
    }
}

/// Ranks every participant, keeping input order
pub fn rank(participants: &[Participant], rating_type: RatingType) -> Vec<Ranked>
{
    participants.iter()
        .map(|participant| Ranked::new(participant, rating_type))
        .collect()
}

/// A team that is still being built or balanced
#[derive(Debug, Clone, PartialEq)]
pub struct TeamDraft<'a>
{
    members: Vec<Ranked<'a>>,
    total: u64,
}

impl<'a> TeamDraft<'a>
{
    pub fn new() -> TeamDraft<'a>
    {
        TeamDraft {
            members: Vec::new(),
            total: 0,
        }
    }

    pub fn with_members(members: Vec<Ranked<'a>>) -> TeamDraft<'a>
    {
        let total = members.iter().map(|member| member.rating as u64).sum();

        TeamDraft {
            members,
            total,
        }
    }

    pub fn push(&mut self, member: Ranked<'a>)
    {
        self.total += member.rating as u64;
        self.members.push(member);
    }

    /// Puts `member` in the slot at `index` and hands back whoever was there
    pub fn replace(&mut self, index: usize, member: Ranked<'a>) -> Ranked<'a>
    {
        let previous = ::std::mem::replace(&mut self.members[index], member);
        self.total = self.total - previous.rating as u64 + member.rating as u64;

        previous
    }

    pub fn members(&self) -> &[Ranked<'a>]
    {
        &self.members
    }

    pub fn len(&self) -> usize
    {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.members.is_empty()
    }

    pub fn total(&self) -> u64
    {
        self.total
    }

    pub fn average(&self) -> f64
    {
        if self.members.is_empty()
        {
            0.0
        } else
        {
            self.total as f64 / self.members.len() as f64
        }
    }

    /// Index of the lowest rated member, first one on ties
    pub fn weakest(&self) -> Option<usize>
    {
        let mut weakest: Option<usize> = None;
        for (index, member) in self.members.iter().enumerate()
        {
            match weakest
            {
                Some(current) if self.members[current].rating <= member.rating => {},
                _ => weakest = Some(index),
            }
        }

        weakest
    }

    /// Index of the highest rated member, first one on ties
    pub fn strongest(&self) -> Option<usize>
    {
        let mut strongest: Option<usize> = None;
        for (index, member) in self.members.iter().enumerate()
        {
            match strongest
            {
                Some(current) if self.members[current].rating >= member.rating => {},
                _ => strongest = Some(index),
            }
        }

        strongest
    }

    pub fn participants(&self) -> Vec<&'a Participant>
    {
        self.members.iter().map(|member| member.participant).collect()
    }
}
