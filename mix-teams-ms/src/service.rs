use mix_common::errors::Result;

use mix_common::formation::{self, BalanceSettings, LogObserver};

use mix_common::pubsub::PubSubConsumer;
use mix_common::pubsub::PubSubProducer;
use mix_common::pubsub::model::{FormationOutcome, FormationReply, FormationRequest, Message};

/// Forms the teams for one request. Failures become a rejection instead of an error since
/// every one of them is a problem with the request itself.
pub fn handle_request(request: &FormationRequest, settings: &BalanceSettings) -> FormationReply
{
    let formed = formation::form_teams_with(&request.participants, request.team_size, request.rating_type, settings, &mut LogObserver);

    match formed
    {
        Ok(result) =>
        {
            info!("Formed {} teams for tournament: {}, balance: {:.2}%, excluded: {}",
                result.teams.len(), request.tournament_id, result.summary.balance_percent, result.summary.excluded_participants);

            FormationReply::new(request.tournament_id, FormationOutcome::Formed(result))
        },
        Err(error) =>
        {
            warn!("Rejected formation for tournament: {} because {}", request.tournament_id, error);

            FormationReply::new(request.tournament_id, FormationOutcome::Rejected {
                reason: format!("{}", error),
            })
        },
    }
}

/// Answers a request message, returning the topic and the reply to send there.
/// `None` when the message has nowhere to go.
pub fn respond(mut message: Message<FormationRequest>, settings: &BalanceSettings) -> Option<(String, Message<FormationReply>)>
{
    let topic = message.destinations.pop_front()?;
    let reply = handle_request(&message.data, settings);

    Some((topic, Message::new(reply, message.destinations, message.debug)))
}

pub fn run_service(consumer: &mut PubSubConsumer, producer: &mut PubSubProducer, settings: &BalanceSettings) -> Result<()>
{
    let messages: Vec<(u64, Message<FormationRequest>)> = consumer.listen()?;

    for (key, message) in messages.into_iter()
    {
        match respond(message, settings)
        {
            None => warn!("Received formation request without destinations for key: {}", key),
            Some((topic, response)) =>
            {
                producer.send_to_topic(&topic, key, &response)?;

                trace!("Sent formation reply for key: {} to topic: {}", key, topic);
            }
        }
    }

    Ok(())
}
