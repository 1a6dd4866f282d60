use ::errors::*;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use rmp_serde::{Deserializer, Serializer};

use serde::de::{Deserialize, DeserializeOwned};
use serde::Serialize;

use std::io::Cursor;
use std::thread;
use std::time::Duration;

pub mod producer;

pub use self::producer::PubSubProducer;



pub mod consumer;

pub use self::consumer::PubSubConsumer;



pub mod model;

pub use self::model::Message;
pub use self::model::FormationRequest;
pub use self::model::FormationReply;
pub use self::model::FormationOutcome;

pub const MIX_FORMATION_REQUESTS_TOPIC: &'static str = "mix-formation-requests";
pub const MIX_LOOPBACK_TOPIC: &'static str = "mix-loopback";

const LOOPBACK_KEY: u64 = 1337;
const LOOPBACK_ATTEMPTS: u32 = 10;

/// Keys go over the wire as big-endian u64
pub fn encode_key(key: u64) -> Result<Vec<u8>>
{
    let mut bytes = Vec::with_capacity(8);
    bytes.write_u64::<BigEndian>(key)?;

    Ok(bytes)
}

pub fn decode_key(bytes: &[u8]) -> Result<u64>
{
    Ok(Cursor::new(bytes).read_u64::<BigEndian>()?)
}

/// Values go over the wire as MessagePack
pub fn encode_value<D>(value: &D) -> Result<Vec<u8>>
    where D: Serialize
{
    let mut serialized = Vec::new();
    value.serialize(&mut Serializer::new(&mut serialized))?;

    Ok(serialized)
}

pub fn decode_value<D>(bytes: &[u8]) -> Result<D>
    where D: DeserializeOwned
{
    let mut deserializer = Deserializer::new(bytes);

    Ok(Deserialize::deserialize(&mut deserializer)?)
}

/// Sends a message to the loopback topic and waits for it to come back, so the caller knows
/// Kafka is up before it starts serving.
pub fn perform_loopback_test(broker_uris: &Vec<String>, group: &str) -> Result<()>
{
    let mut producer = PubSubProducer::new(broker_uris.clone())?;
    let mut consumer = PubSubConsumer::new(broker_uris.clone(), MIX_LOOPBACK_TOPIC, group)?;

    producer.send_to_topic(MIX_LOOPBACK_TOPIC, LOOPBACK_KEY, group)?;

    for attempt in 0..LOOPBACK_ATTEMPTS
    {
        let messages: Vec<(u64, String)> = consumer.listen()?;
        if messages.iter().any(|&(key, _)| key == LOOPBACK_KEY)
        {
            info!("Kafka loopback succeeded after {} polls", attempt + 1);
            return Ok(());
        }

        thread::sleep(Duration::from_millis(500));
    }

    bail!("Loopback message never came back after {} polls", LOOPBACK_ATTEMPTS);
}

/// Blocks until `perform_loopback_test` passes
pub fn delay_until_kafka_ready(broker_uris: &Vec<String>, group: &str)
{
    loop
    {
        match perform_loopback_test(broker_uris, group)
        {
            Ok(_) => return,
            Err(error) =>
            {
                warn!("Kafka is not ready yet because {}", error);
                thread::sleep(Duration::from_secs(5));
            },
        }
    }
}
