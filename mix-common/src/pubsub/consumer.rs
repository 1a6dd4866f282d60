use ::errors::*;

use kafka::consumer::{Consumer, FetchOffset, GroupOffsetStorage};

use serde::de::DeserializeOwned;

use pubsub::{decode_key, decode_value};

use std::fmt::Debug;

pub struct PubSubConsumer
{
    consumer: Consumer,
}

impl PubSubConsumer
{
    /// Topic is the "Queue/Topic" to listen on
    /// Group is the consumer who is listening. If a member of the group commits a message then it counts as read for all members.
    pub fn new<S1, S2>(broker_uris: Vec<String>, topic: S1, group: S2) -> Result<PubSubConsumer>
        where S1: Into<String>, S2: Into<String>
    {
        let consumer: Consumer = Consumer::from_hosts(broker_uris)
                .with_topic(topic.into())
                .with_group(group.into())
                .with_fallback_offset(FetchOffset::Earliest)
                .with_offset_storage(GroupOffsetStorage::Kafka)
                .create()?;

        Ok(
            PubSubConsumer {
                consumer,
            }
        )
    }

    /// Polls once. Messages that fail to decode are logged and skipped but still committed,
    /// they would fail the same way on every retry.
    pub fn listen<D>(&mut self) -> Result<Vec<(u64, D)>>
        where D: DeserializeOwned+Debug
    {
        let mut data = Vec::new();

        let message_sets = self.consumer.poll()?;

        for message_set in message_sets.iter()
        {
            for message in message_set.messages()
            {
                let key = match decode_key(message.key)
                {
                    Err(error) =>
                    {
                        error!("Failed to decode key at offset: {} because {}", message.offset, error);
                        continue;
                    },
                    Ok(key) => key,
                };

                let value = match decode_value(message.value)
                {
                    Err(error) =>
                    {
                        error!("Failed to decode value for key: {} because {}", key, error);
                        continue;
                    },
                    Ok(value) => value,
                };

                debug!("Received key: {:?}, value: {:?}", key, value);

                data.push((key, value));
            }

            self.consumer.consume_messageset(message_set)?;
        }

        self.consumer.commit_consumed()?;

        Ok(data)
    }
}
