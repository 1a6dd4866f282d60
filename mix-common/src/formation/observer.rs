use model::RatingType;
use rating::RatingSource;

/// Something noteworthy that happened while teams were being formed.
///
/// Team indices refer to the order teams are returned in.
#[derive(Debug, Clone, PartialEq)]
pub enum FormationEvent
{
    Started {
        participants: usize,
        team_size: usize,
        rating_type: RatingType,
        global_average: f64,
    },
    Excluded {
        participant_ids: Vec<u64>,
    },
    PairCommitted {
        first_id: u64,
        second_id: u64,
        pair_rating: u64,
        deviation: f64,
    },
    SnakeRound {
        round: usize,
        reverse: bool,
    },
    BalanceMeasured {
        iteration: usize,
        balance_percent: f64,
    },
    SwapCommitted {
        strong_team: usize,
        weak_team: usize,
        outgoing_id: u64,
        incoming_id: u64,
        balance_before: f64,
        balance_after: f64,
    },
    SwapRejected {
        strong_team: usize,
        weak_team: usize,
        outgoing_id: u64,
        incoming_id: u64,
        balance_before: f64,
        balance_after: f64,
    },
    BalanceFinished {
        iterations: usize,
        swaps: usize,
        balance_percent: f64,
        reached_target: bool,
    },
    CaptainSelected {
        team: usize,
        captain_id: u64,
        rating: u32,
        source: RatingSource,
    },
}

/// Receives events from the formation engine. None of them affect the outcome.
pub trait FormationObserver
{
    fn on_event(&mut self, event: &FormationEvent);
}

/// Drops every event
pub struct NullObserver;

impl FormationObserver for NullObserver
{
    fn on_event(&mut self, _event: &FormationEvent) {}
}

/// Forwards events to the `log` facade
pub struct LogObserver;

impl FormationObserver for LogObserver
{
    fn on_event(&mut self, event: &FormationEvent)
    {
        match *event
        {
            FormationEvent::Started { participants, team_size, rating_type, global_average } =>
                debug!("Forming teams of {} from {} participants by {} (average: {:.2})", team_size, participants, rating_type, global_average),
            FormationEvent::Excluded { ref participant_ids } =>
                debug!("Excluded {} participants: {:?}", participant_ids.len(), participant_ids),
            FormationEvent::PairCommitted { first_id, second_id, pair_rating, deviation } =>
                trace!("Paired {} with {}, rating: {}, deviation: {:.2}", first_id, second_id, pair_rating, deviation),
            FormationEvent::SnakeRound { round, reverse } =>
                trace!("Snake round: {}, reverse: {}", round, reverse),
            FormationEvent::BalanceMeasured { iteration, balance_percent } =>
                trace!("Iteration: {}, balance: {:.2}%", iteration, balance_percent),
            FormationEvent::SwapCommitted { strong_team, weak_team, outgoing_id, incoming_id, balance_before, balance_after } =>
                debug!("Swapped {} (team {}) with {} (team {}), balance: {:.2}% -> {:.2}%", outgoing_id, strong_team, incoming_id, weak_team, balance_before, balance_after),
            FormationEvent::SwapRejected { strong_team, weak_team, outgoing_id, incoming_id, balance_before, balance_after } =>
                trace!("Kept {} (team {}) and {} (team {}), swap would give {:.2}% from {:.2}%", outgoing_id, strong_team, incoming_id, weak_team, balance_after, balance_before),
            FormationEvent::BalanceFinished { iterations, swaps, balance_percent, reached_target } =>
            {
                if reached_target
                {
                    debug!("Balanced to {:.2}% after {} iterations ({} swaps)", balance_percent, iterations, swaps);
                } else
                {
                    debug!("Balance stuck at {:.2}% after {} iterations ({} swaps)", balance_percent, iterations, swaps);
                }
            },
            FormationEvent::CaptainSelected { team, captain_id, rating, source } =>
                debug!("Captain of team {} is {} with {} from {:?}", team, captain_id, rating, source),
        }
    }
}

/// Records events, mostly for tests
impl FormationObserver for Vec<FormationEvent>
{
    fn on_event(&mut self, event: &FormationEvent)
    {
        self.push(event.clone());
    }
}
