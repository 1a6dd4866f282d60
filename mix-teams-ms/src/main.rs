#[macro_use]
extern crate log;
extern crate env_logger;

use env_logger::{Builder, Target};

extern crate mix_common;
extern crate mix_teams_ms;

use mix_common::pubsub::PubSubConsumer;
use mix_common::pubsub::PubSubProducer;
use mix_common::pubsub::MIX_FORMATION_REQUESTS_TOPIC;

use mix_teams_ms::config::ServiceConfig;
use mix_teams_ms::service;

use std::env;
use std::thread;

fn main() {
    /* Log */
    let mut builder = Builder::new();
    builder.target(Target::Stdout);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse(&filters);
    }
    builder.init();

    let config = ServiceConfig::from_env();
    info!("Starting with brokers: {:?}, group: {}, balance: {:?}", config.broker_uris, config.group, config.balance);

    /* Kafka */
    mix_common::pubsub::delay_until_kafka_ready(&config.broker_uris, &config.group);

    let mut producer = PubSubProducer::new(config.broker_uris.clone())
        .expect("Kafka producer could not be created");
    let mut consumer = PubSubConsumer::new(config.broker_uris.clone(), MIX_FORMATION_REQUESTS_TOPIC, config.group.clone())
        .expect("Kafka consumer could not be created");

    loop
    {
        match service::run_service(&mut consumer, &mut producer, &config.balance)
        {
            Ok(_) => thread::yield_now(),
            Err(error) => error!("Failed to handle formation request because {}", error),
        }
    }
}
