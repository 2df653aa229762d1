// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused)]
#![warn(clippy::all)]

use std::env;
use std::process;

use clap::{App, Arg};
use log::debug;

use banana_blockade::config::Config;
use banana_blockade::solution_formatter::SolutionFormatter;
use banana_blockade::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("banana-blockade")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Collects all bananas by pushing and pulling boxes")
        .arg(
            Arg::with_name("print-status")
                .short("s")
                .long("print-status")
                .help("print new best scores and depth progress while searching"),
        )
        .arg(
            Arg::with_name("moves-only")
                .short("m")
                .long("moves-only")
                .help("print only the moves, not every board on the way"),
        )
        .arg(Arg::with_name("file").required(true))
        .get_matches();

    let config = Config::new(
        matches.is_present("print-status"),
        matches.is_present("moves-only"),
    );
    debug!("{:?}", config);

    // required so clap already made sure it's there
    let path = matches.value_of("file").unwrap();

    let board = path.load_level().unwrap_or_else(|err| {
        match env::current_dir() {
            Ok(dir) => eprintln!("Can't load level {} in {}: {}", path, dir.display(), err),
            Err(_) => eprintln!("Can't load level {}: {}", path, err),
        }
        process::exit(1);
    });

    println!("Solving {}...", path);
    let solver_ok = board.solve(config);
    println!("{}", solver_ok.stats);

    match solver_ok.solution {
        Some((ref state, cost)) => {
            println!("Found solution:");
            if !config.moves_only {
                print!("{}", SolutionFormatter::new(state));
            }
            let moves = state.moves();
            println!("{}", moves);
            println!("Moves: {}", cost);
            println!("Pushes: {}", moves.push_cnt());
            println!("Pulls: {}", moves.pull_cnt());
        }
        None => println!("No solution"),
    }
}
