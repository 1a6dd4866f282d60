use ::errors::*;

use std::fmt;
use std::str::FromStr;

/// Which rating ladder drives a formation run.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RatingType
{
    Faceit,
    Premier,
}

impl RatingType
{
    /// Rating used when a participant has no usable value of this type
    pub fn default_rating(&self) -> u32
    {
        match *self
        {
            RatingType::Faceit => 1000,
            RatingType::Premier => 5,
        }
    }

    pub fn as_str(&self) -> &'static str
    {
        match *self
        {
            RatingType::Faceit => "faceit",
            RatingType::Premier => "premier",
        }
    }
}

impl fmt::Display for RatingType
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingType
{
    type Err = Error;

    fn from_str(raw: &str) -> Result<RatingType>
    {
        match raw.trim().to_lowercase().as_str()
        {
            "faceit" => Ok(RatingType::Faceit),
            "premier" => Ok(RatingType::Premier),
            _ => bail!(ErrorKind::UnknownRatingType(raw.to_string())),
        }
    }
}

/// A rating exactly as it was stored, either numeric or text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum RatingValue
{
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl RatingValue
{
    /// The value as a rating if it is usable: its leading integer must be strictly positive.
    /// Fractions are truncated and out of range values count as absent.
    pub fn positive(&self) -> Option<u32>
    {
        let value = match *self
        {
            RatingValue::Integer(value) => value,
            RatingValue::Decimal(value) if value.is_finite() => value.trunc() as i64,
            RatingValue::Decimal(_) => return None,
            RatingValue::Text(ref raw) => leading_integer(raw)?,
        };

        if value > 0 && value <= u32::max_value() as i64
        {
            Some(value as u32)
        } else
        {
            None
        }
    }
}

/* "1850", " 1850 elo" and "+12" are all fine, "elo 1850" is not */
fn leading_integer(raw: &str) -> Option<i64>
{
    let trimmed = raw.trim_start();
    let unsigned = trimmed.trim_start_matches(|c: char| c == '+' || c == '-');
    if trimmed.len() - unsigned.len() > 1
    {
        return None;
    }

    let digits = unsigned.len() - unsigned.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0
    {
        return None;
    }

    let end = trimmed.len() - unsigned.len() + digits;
    trimmed[..end].parse::<i64>().ok()
}

impl From<i32> for RatingValue
{
    fn from(value: i32) -> RatingValue
    {
        RatingValue::Integer(value as i64)
    }
}

impl From<i64> for RatingValue
{
    fn from(value: i64) -> RatingValue
    {
        RatingValue::Integer(value)
    }
}

impl From<u32> for RatingValue
{
    fn from(value: u32) -> RatingValue
    {
        RatingValue::Integer(value as i64)
    }
}

impl From<f64> for RatingValue
{
    fn from(value: f64) -> RatingValue
    {
        RatingValue::Decimal(value)
    }
}

impl<'a> From<&'a str> for RatingValue
{
    fn from(value: &'a str) -> RatingValue
    {
        RatingValue::Text(value.to_string())
    }
}

impl From<String> for RatingValue
{
    fn from(value: String) -> RatingValue
    {
        RatingValue::Text(value)
    }
}

/// One rating per rating type from a single source
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct RatingSources
{
    #[serde(default)]
    pub faceit: Option<RatingValue>,
    #[serde(default)]
    pub premier: Option<RatingValue>,
}

impl RatingSources
{
    pub fn get(&self, rating_type: RatingType) -> Option<&RatingValue>
    {
        match rating_type
        {
            RatingType::Faceit => self.faceit.as_ref(),
            RatingType::Premier => self.premier.as_ref(),
        }
    }

    pub fn set(&mut self, rating_type: RatingType, value: RatingValue)
    {
        match rating_type
        {
            RatingType::Faceit => self.faceit = Some(value),
            RatingType::Premier => self.premier = Some(value),
        }
    }
}

/// Columns from the older registration schema. Only read as a last resort.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct LegacyRatings
{
    #[serde(default)]
    pub faceit_rating: Option<RatingValue>,
    #[serde(default)]
    pub user_faceit_rating: Option<RatingValue>,
    #[serde(default)]
    pub premier_rank: Option<RatingValue>,
    #[serde(default)]
    pub premier_rating: Option<RatingValue>,
    #[serde(default)]
    pub user_premier_rating: Option<RatingValue>,
}

/// A registered player as loaded for a single formation run.
///
/// `manual` holds ratings typed in against the tournament registration, `profile` the ones
/// from the player's account.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct Participant
{
    pub id: u64,
    pub name: String,
    #[serde(default)]
    #[new(default)]
    pub manual: RatingSources,
    #[serde(default)]
    #[new(default)]
    pub profile: RatingSources,
    #[serde(default)]
    #[new(default)]
    pub legacy: LegacyRatings,
}

impl Participant
{
    pub fn with_manual<V>(mut self, rating_type: RatingType, value: V) -> Participant
        where V: Into<RatingValue>
    {
        self.manual.set(rating_type, value.into());
        self
    }

    pub fn with_profile<V>(mut self, rating_type: RatingType, value: V) -> Participant
        where V: Into<RatingValue>
    {
        self.profile.set(rating_type, value.into());
        self
    }

    pub fn with_legacy(mut self, legacy: LegacyRatings) -> Participant
    {
        self.legacy = legacy;
        self
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm
{
    /// Greedy closest-to-target pairing, used for teams of two
    OptimalPairs,
    /// Serpentine draft followed by swap balancing, used for teams of three or more
    SmartSnake,
}

impl Algorithm
{
    pub fn for_team_size(team_size: usize) -> Algorithm
    {
        if team_size == 2
        {
            Algorithm::OptimalPairs
        } else
        {
            Algorithm::SmartSnake
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct TeamMember
{
    pub participant_id: u64,
    pub name: String,
    /// Effective rating under the rating type of the run
    pub rating: u32,
    pub is_captain: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct TeamAverages
{
    pub faceit: f64,
    pub premier: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Team
{
    pub name: String,
    pub members: Vec<TeamMember>,
    /// Average under the rating type of the run
    pub average_rating: f64,
    pub averages: TeamAverages,
    pub captain_id: u64,
    pub captain_rating: u32,
    pub captain_used_manual_rating: bool,
}

impl Team
{
    pub fn captain(&self) -> Option<&TeamMember>
    {
        self.members.iter().find(|member| member.is_captain)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct CaptainStats
{
    pub count: usize,
    pub manual_count: usize,
    pub min_rating: u32,
    pub avg_rating: f64,
    pub max_rating: u32,
}

impl CaptainStats
{
    pub fn from_teams(teams: &[Team]) -> CaptainStats
    {
        if teams.is_empty()
        {
            return CaptainStats::default();
        }

        let ratings: Vec<u32> = teams.iter().map(|team| team.captain_rating).collect();
        let total: u64 = ratings.iter().map(|&rating| rating as u64).sum();

        CaptainStats {
            count: teams.len(),
            manual_count: teams.iter().filter(|team| team.captain_used_manual_rating).count(),
            min_rating: ratings.iter().cloned().min().unwrap_or(0),
            avg_rating: total as f64 / teams.len() as f64,
            max_rating: ratings.iter().cloned().max().unwrap_or(0),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FormationSummary
{
    pub total_participants: usize,
    pub placed_participants: usize,
    pub excluded_participants: usize,
    pub excluded_ids: Vec<u64>,
    pub team_size: usize,
    pub rating_type: RatingType,
    pub algorithm: Algorithm,
    pub balance_percent: f64,
    pub balance_iterations: usize,
    pub balance_swaps: usize,
    pub captains: CaptainStats,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FormationResult
{
    pub teams: Vec<Team>,
    pub summary: FormationSummary,
}
