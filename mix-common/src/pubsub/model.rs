use model::{FormationResult, Participant, RatingType};

use std::collections::VecDeque;

/// Envelope for everything on the bus.
///
/// `destinations` is the chain of topics the reply travels along, the handler pops the first one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct Message<T>
{
    pub data: T,
    pub destinations: VecDeque<String>,
    pub debug: bool,
}

/// A snapshot of a tournament's registrations to be split into teams
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct FormationRequest
{
    pub tournament_id: u64,
    pub team_size: usize,
    pub rating_type: RatingType,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum FormationOutcome
{
    Formed(FormationResult),
    /// The request can never succeed as is, resending it is pointless
    Rejected {
        reason: String,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct FormationReply
{
    pub tournament_id: u64,
    pub outcome: FormationOutcome,
}

impl FormationReply
{
    pub fn is_formed(&self) -> bool
    {
        match self.outcome
        {
            FormationOutcome::Formed(_) => true,
            FormationOutcome::Rejected { .. } => false,
        }
    }
}
