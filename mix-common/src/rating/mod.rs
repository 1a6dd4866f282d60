use model::{Participant, RatingType, RatingValue};

/// Old registration columns that are still consulted when nothing newer is set.
///
/// It is unclear whether live data still populates any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyField
{
    FaceitRating,
    UserFaceitRating,
    PremierRank,
    PremierRating,
    UserPremierRating,
}

impl LegacyField
{
    pub fn column(&self) -> &'static str
    {
        match *self
        {
            LegacyField::FaceitRating => "faceit_rating",
            LegacyField::UserFaceitRating => "user_faceit_rating",
            LegacyField::PremierRank => "premier_rank",
            LegacyField::PremierRating => "premier_rating",
            LegacyField::UserPremierRating => "user_premier_rating",
        }
    }
}

/// Where an effective rating came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingSource
{
    /// Entered against the tournament registration
    Manual,
    Profile,
    Legacy(LegacyField),
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ResolvedRating
{
    pub value: u32,
    pub source: RatingSource,
}

impl ResolvedRating
{
    pub fn is_manual(&self) -> bool
    {
        self.source == RatingSource::Manual
    }
}

/// The sources for `rating_type`, highest priority first
fn sources(participant: &Participant, rating_type: RatingType) -> Vec<(RatingSource, Option<&RatingValue>)>
{
    let legacy = &participant.legacy;

    let mut chain = vec!(
        (RatingSource::Manual, participant.manual.get(rating_type)),
        (RatingSource::Profile, participant.profile.get(rating_type)),
    );

    match rating_type
    {
        RatingType::Faceit =>
        {
            chain.push((RatingSource::Legacy(LegacyField::FaceitRating), legacy.faceit_rating.as_ref()));
            chain.push((RatingSource::Legacy(LegacyField::UserFaceitRating), legacy.user_faceit_rating.as_ref()));
        },
        RatingType::Premier =>
        {
            chain.push((RatingSource::Legacy(LegacyField::PremierRank), legacy.premier_rank.as_ref()));
            chain.push((RatingSource::Legacy(LegacyField::PremierRating), legacy.premier_rating.as_ref()));
            chain.push((RatingSource::Legacy(LegacyField::UserPremierRating), legacy.user_premier_rating.as_ref()));
        },
    }

    chain
}

/// Resolves the effective rating of a participant.
///
/// The first source holding a strictly positive integer wins. When none does the
/// rating type's default is used, so this never fails.
pub fn resolve(participant: &Participant, rating_type: RatingType) -> ResolvedRating
{
    sources(participant, rating_type)
        .into_iter()
        .filter_map(|(source, value)| value
            .and_then(RatingValue::positive)
            .map(|value| ResolvedRating::new(value, source)))
        .next()
        .unwrap_or_else(|| ResolvedRating::new(rating_type.default_rating(), RatingSource::Default))
}

/// Effective rating of a participant, see `resolve`
pub fn normalize(participant: &Participant, rating_type: RatingType) -> u32
{
    resolve(participant, rating_type).value
}

/// Mean effective rating of a pool, 0 for an empty pool
pub fn average(participants: &[Participant], rating_type: RatingType) -> f64
{
    if participants.is_empty()
    {
        return 0.0;
    }

    let total: u64 = participants.iter()
        .map(|participant| normalize(participant, rating_type) as u64)
        .sum();

    total as f64 / participants.len() as f64
}
