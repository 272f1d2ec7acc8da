//! CD Player State Machine
//!
//! This example drives a small CD player model from the command line.
//!
//! Key concepts:
//! - Forward references (PLAY targets PLAYING before it is declared)
//! - Guarded transitions with first-match-wins fallbacks
//! - Integer side effects on a track counter
//! - Ignored events
//!
//! Run with: RUST_LOG=eventgraph=debug cargo run --example cd_player

use eventgraph::{Dispatch, GraphBuilder, Interpreter};
use tracing_subscriber::EnvFilter;

const NUMBER_TRACKS: i64 = 10;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== CD Player State Machine ===\n");

    #[rustfmt::skip]
    let built = GraphBuilder::new()
        .integer("track")
        .state("STOP").initial()
            .when("PLAY").to("PLAYING").set("track", 1).if_equals("track", 0)
            .when("PLAY").to("PLAYING")
        .state("PLAYING")
            .when("STOP").to("STOP")
            .when("PAUSE").to("PAUSED")
            .when("TRACK_END").to("STOP").if_equals("track", NUMBER_TRACKS)
            .when("TRACK_END").to("PLAYING").increment("track")
        .state("PAUSED")
            .when("STOP").to("STOP")
            .when("PLAY").to("PLAYING")
            .when("FORWARD").to("PAUSED").increment("track").if_less_than("track", NUMBER_TRACKS + 1)
            .when("BACK").to("PAUSED").decrement("track").if_greater_than("track", 1)
        .build();

    let mut graph = match built {
        Ok(graph) => graph,
        Err(errors) => {
            eprintln!("{errors}");
            std::process::exit(1);
        }
    };

    println!(
        "Built graph with {} states and {} variable(s)\n",
        graph.states().len(),
        graph.variable_count()
    );

    let mut player = match Interpreter::bind(&mut graph) {
        Ok(player) => player,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    let events = [
        "PLAY", "TRACK_END", "PLAY", "PAUSE", "FORWARD", "FORWARD", "BACK", "EJECT", "STOP",
    ];

    for event in events {
        let outcome = player.dispatch(event);
        let marker = match outcome {
            Dispatch::Transitioned { .. } => "->",
            Dispatch::Ignored => "  (ignored)",
        };
        println!(
            "{event:<10} {marker} {:<8} track = {}",
            player.current_state_name(),
            player.read_variable("track")
        );
    }

    println!("\nPath: {}", player.history().get_path().join(" -> "));

    println!("\n=== Example Complete ===");
}
