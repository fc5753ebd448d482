use std::error::Error;
use std::io::{self, Read};
use std::process;
use std::time::Duration;

use clap::{App, Arg, ArgMatches};
use log::debug;

use fifteen_solver::config::{Heuristic, Limits};
use fifteen_solver::{Board, LoadBoard, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("fifteen-solver")
        .author("martin-t")
        .version("0.1")
        .about("Finds the shortest sequence of slides that solves a sliding tile puzzle")
        .arg(
            Arg::with_name("heuristic")
                .long("heuristic")
                .takes_value(true)
                .possible_values(&["mismatch", "manhattan"])
                .default_value("manhattan")
                .help("estimate of the remaining moves used to order the search"),
        )
        .arg(
            Arg::with_name("max-nodes")
                .long("max-nodes")
                .takes_value(true)
                .help("give up after creating this many states"),
        )
        .arg(
            Arg::with_name("max-secs")
                .long("max-secs")
                .takes_value(true)
                .help("give up after searching this many seconds"),
        )
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .help("print search statistics after the solution"),
        )
        .arg(
            Arg::with_name("moves")
                .long("moves")
                .help("print the slides as a string of directions after the solution"),
        )
        .arg(Arg::with_name("file").help("puzzle to solve, reads stdin if missing"))
        .get_matches();

    if let Err(err) = run(&matches) {
        println!("{}", err);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches<'_>) -> Result<(), Box<dyn Error>> {
    let heuristic: Heuristic = matches.value_of("heuristic").unwrap_or_default().parse()?;
    let limits = parse_limits(matches)?;

    let board = match matches.value_of("file") {
        Some(path) => path
            .load_board()
            .map_err(|err| format!("Can't load puzzle {}: {}", path, err))?,
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            input
                .parse::<Board>()
                .map_err(|err| format!("Failed to parse: {}", err))?
        }
    };
    debug!("Loaded board:\n{}", board);

    let solution = board.solve(heuristic, limits)?;
    print!("{}", solution.format_path());

    if matches.is_present("moves") {
        if let Some(moves) = solution.moves() {
            println!("{}", moves);
            println!("Moves: {}", moves.move_cnt());
        }
    }
    if matches.is_present("stats") {
        print!("{}", solution.stats);
    }
    Ok(())
}

fn parse_limits(matches: &ArgMatches<'_>) -> Result<Limits, Box<dyn Error>> {
    let mut limits = Limits::unlimited();
    if let Some(max_nodes) = matches.value_of("max-nodes") {
        let max_nodes = max_nodes
            .parse()
            .map_err(|err| format!("Invalid --max-nodes {}: {}", max_nodes, err))?;
        limits = limits.with_max_nodes(max_nodes);
    }
    if let Some(max_secs) = matches.value_of("max-secs") {
        let max_secs = max_secs
            .parse()
            .map_err(|err| format!("Invalid --max-secs {}: {}", max_secs, err))?;
        limits = limits.with_max_time(Duration::from_secs(max_secs));
    }
    Ok(limits)
}
