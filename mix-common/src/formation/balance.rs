use formation::draft::TeamDraft;
use formation::observer::{FormationEvent, FormationObserver};

pub const DEFAULT_MAX_ITERATIONS: usize = 50;
pub const DEFAULT_TARGET_PERCENT: f64 = 20.0;

/// Limits of the swap balancer
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct BalanceSettings
{
    pub max_iterations: usize,
    /// Balancing stops once the spread of team averages is at most this share of the global average
    pub target_percent: f64,
}

impl Default for BalanceSettings
{
    fn default() -> BalanceSettings
    {
        BalanceSettings::new(DEFAULT_MAX_ITERATIONS, DEFAULT_TARGET_PERCENT)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BalanceOutcome
{
    pub balance_percent: f64,
    pub iterations: usize,
    pub swaps: usize,
}

/// A possible exchange of one member from the strong team with one from the weak team
#[derive(Debug, Clone, PartialEq)]
pub struct Swap
{
    pub strong_team: usize,
    pub strong_member: usize,
    pub weak_team: usize,
    pub weak_member: usize,
}

/// `(max average - min average) / global average * 100`
pub fn balance_percent(teams: &[TeamDraft], global_average: f64) -> f64
{
    spread(teams.iter().map(|team| team.average()), global_average)
}

fn spread<I>(averages: I, global_average: f64) -> f64
    where I: Iterator<Item = f64>
{
    if global_average <= 0.0
    {
        return 0.0;
    }

    let mut bounds: Option<(f64, f64)> = None;
    for average in averages
    {
        bounds = match bounds
        {
            None => Some((average, average)),
            Some((min, max)) => Some((min.min(average), max.max(average))),
        };
    }

    match bounds
    {
        None => 0.0,
        Some((min, max)) => (max - min) / global_average * 100.0,
    }
}

/// Indices of the team with the highest and the lowest average, first one on ties
pub fn extremes(teams: &[TeamDraft]) -> Option<(usize, usize)>
{
    let mut strong: Option<usize> = None;
    let mut weak: Option<usize> = None;

    for (index, team) in teams.iter().enumerate()
    {
        let average = team.average();

        match strong
        {
            Some(current) if teams[current].average() >= average => {},
            _ => strong = Some(index),
        }

        match weak
        {
            Some(current) if teams[current].average() <= average => {},
            _ => weak = Some(index),
        }
    }

    match (strong, weak)
    {
        (Some(strong), Some(weak)) => Some((strong, weak)),
        _ => None,
    }
}

/// The balance that `swap` would leave behind, without touching `teams`
pub fn simulate_swap(teams: &[TeamDraft], swap: &Swap, global_average: f64) -> f64
{
    let outgoing = teams[swap.strong_team].members()[swap.strong_member].rating as f64;
    let incoming = teams[swap.weak_team].members()[swap.weak_member].rating as f64;

    let averages = teams.iter().enumerate().map(|(index, team)|
    {
        let delta = if index == swap.strong_team
        {
            incoming - outgoing
        } else if index == swap.weak_team
        {
            outgoing - incoming
        } else
        {
            0.0
        };

        (team.total() as f64 + delta) / team.len() as f64
    });

    spread(averages, global_average)
}

/// Exchanges the two members of `swap` between their teams
pub fn apply_swap(teams: &mut [TeamDraft], swap: &Swap)
{
    let incoming = teams[swap.weak_team].members()[swap.weak_member];
    let outgoing = teams[swap.strong_team].replace(swap.strong_member, incoming);
    teams[swap.weak_team].replace(swap.weak_member, outgoing);
}

/// Applies `swap` only if it strictly lowers the balance, returning the new balance when it did
pub fn try_swap<O>(teams: &mut [TeamDraft], swap: &Swap, global_average: f64, observer: &mut O) -> Option<f64>
    where O: FormationObserver + ?Sized
{
    let before = balance_percent(teams, global_average);
    let after = simulate_swap(teams, swap, global_average);

    let outgoing_id = teams[swap.strong_team].members()[swap.strong_member].participant.id;
    let incoming_id = teams[swap.weak_team].members()[swap.weak_member].participant.id;

    if after < before
    {
        apply_swap(teams, swap);

        observer.on_event(&FormationEvent::SwapCommitted {
            strong_team: swap.strong_team,
            weak_team: swap.weak_team,
            outgoing_id,
            incoming_id,
            balance_before: before,
            balance_after: after,
        });

        Some(after)
    } else
    {
        observer.on_event(&FormationEvent::SwapRejected {
            strong_team: swap.strong_team,
            weak_team: swap.weak_team,
            outgoing_id,
            incoming_id,
            balance_before: before,
            balance_after: after,
        });

        None
    }
}

/// The swap considered for an iteration: the weakest member of the strongest team against the
/// strongest member of the weakest team, only when the latter is rated higher
pub fn candidate_swap(teams: &[TeamDraft]) -> Option<Swap>
{
    let (strong_team, weak_team) = extremes(teams)?;
    if strong_team == weak_team
    {
        return None;
    }

    let strong_member = teams[strong_team].weakest()?;
    let weak_member = teams[weak_team].strongest()?;

    if teams[weak_team].members()[weak_member].rating > teams[strong_team].members()[strong_member].rating
    {
        Some(Swap {
            strong_team,
            strong_member,
            weak_team,
            weak_member,
        })
    } else
    {
        None
    }
}

/// Hill climbs towards `settings.target_percent` with at most one swap per iteration.
///
/// Balance never gets worse, but it is not guaranteed to reach the target either:
/// callers have to look at `BalanceOutcome::balance_percent`.
pub fn optimize<O>(teams: &mut [TeamDraft], global_average: f64, settings: &BalanceSettings, observer: &mut O) -> BalanceOutcome
    where O: FormationObserver + ?Sized
{
    let mut iterations = 0;
    let mut swaps = 0;

    while iterations < settings.max_iterations
    {
        let current = balance_percent(teams, global_average);
        observer.on_event(&FormationEvent::BalanceMeasured {
            iteration: iterations,
            balance_percent: current,
        });

        if current <= settings.target_percent
        {
            break;
        }

        iterations += 1;

        if let Some(swap) = candidate_swap(teams)
        {
            if try_swap(teams, &swap, global_average, observer).is_some()
            {
                swaps += 1;
            }
        }
    }

    let balance_percent = balance_percent(teams, global_average);
    let outcome = BalanceOutcome {
        balance_percent,
        iterations,
        swaps,
    };

    observer.on_event(&FormationEvent::BalanceFinished {
        iterations,
        swaps,
        balance_percent,
        reached_target: balance_percent <= settings.target_percent,
    });

    outcome
}
