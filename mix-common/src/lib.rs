// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate derive_new;

#[macro_use]
extern crate log;

extern crate byteorder;
extern crate serde;
extern crate serde_json;
extern crate rmp_serde;

extern crate kafka;

pub mod model;
pub mod rating;
pub mod formation;
pub mod pubsub;

/*
    Common error_chain for all of lib to use so the ? operator passes things around real well.

    Add `use ::errors::*;` to the sub-modules to gain access to it.
*/
pub mod errors {
    // Create the Error, ErrorKind, ResultExt, and Result types
    error_chain!{
        foreign_links {
            Io(::std::io::Error);
            ParseInt(::std::num::ParseIntError);
            Json(::serde_json::Error);
            ToRmp(::rmp_serde::encode::Error);
            FromRmp(::rmp_serde::decode::Error);
            Kafka(::kafka::error::Error);
        }

        errors {
            InvalidTeamSize(size: usize) {
                description("invalid team size")
                display("Team size must be at least 2, got {}", size)
            }

            InsufficientParticipants(shortfall: usize) {
                description("not enough participants for a single team")
                display("Not enough participants to form a team, {} more needed", shortfall)
            }

            InsufficientTeamsForBracket(required: usize, actual: usize) {
                description("not enough participants for a bracket")
                display("At least {} participants are needed for two teams, only {} registered", required, actual)
            }

            EmptyTeamCaptainSelection {
                description("captain selection on an empty team")
                display("Tried to pick a captain for a team without members")
            }

            UnknownRatingType(raw: String) {
                description("unknown rating type")
                display("Unknown rating type: '{}', expected faceit or premier", raw)
            }
        }
    }
}
