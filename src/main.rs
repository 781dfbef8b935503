//! Presentation layer: argument parsing, interactive input loops and board
//! rendering. All 1-based to 0-based coordinate translation happens here;
//! the core only ever sees 0-based indices.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Result};
use armada::{
    default_attempts, init_logging, plan_fleet, Board, GameSession, Orientation, Outcome,
    SessionStatus, ShotHistory, ShotOutcome, TurnReport,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
enum Commands {
    /// Single-player game: sink a hidden fleet within an attempt budget.
    Solo {
        #[arg(long, default_value_t = 6)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Place the fleet by hand instead of randomly")]
        manual: bool,
        #[arg(long, help = "Override the default attempt budget")]
        attempts: Option<usize>,
    },
    /// Two players alternating shots at each other's boards.
    Duel {
        #[arg(long, default_value_t = 6)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Both players place their fleets by hand")]
        manual: bool,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Solo {
            size,
            seed,
            manual,
            attempts,
        } => {
            if size == 0 {
                return Err(anyhow!("board size must be positive"));
            }
            let mut rng = build_rng(seed);
            let board = setup_board(size, manual, "Set up the fleet.", &mut rng)?;
            let budget = attempts.unwrap_or_else(|| default_attempts(size));
            run_solo(GameSession::solo(board, budget), size)
        }
        Commands::Duel { size, seed, manual } => {
            if size == 0 {
                return Err(anyhow!("board size must be positive"));
            }
            let mut rng = build_rng(seed);
            let first = setup_board(size, manual, "Player 1: place your fleet.", &mut rng)?;
            let second = setup_board(size, manual, "Player 2: place your fleet.", &mut rng)?;
            run_duel(GameSession::duel(first, second), size)
        }
    }
}

fn build_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn setup_board<R: Rng>(n: usize, manual: bool, banner: &str, rng: &mut R) -> Result<Board> {
    if !manual {
        return Board::generate(n, rng).map_err(|e| anyhow!(e));
    }
    println!("{}", banner);
    let plan = plan_fleet(n, rng);
    let mut board = Board::new(n);
    let stdin = io::stdin();
    for (i, length) in plan.iter().copied().enumerate() {
        loop {
            print_board(&board, None, true);
            print!(
                "Ship {}/{} (length {}) as 'row col H|V', empty for random: ",
                i + 1,
                plan.len(),
                length
            );
            io::stdout().flush()?;
            let line = read_line(&stdin)?;
            let line = line.trim();
            if line.is_empty() {
                match board.random_placement(rng, length) {
                    Ok(ship) => {
                        board
                            .place(ship.origin(), ship.length(), ship.orientation())
                            .map_err(|e| anyhow!(e))?;
                        break;
                    }
                    Err(e) => println!("Error: {}", e),
                }
                continue;
            }
            match parse_placement(line, n) {
                Ok((origin, orientation)) => match board.place(origin, length, orientation) {
                    Ok(()) => break,
                    Err(e) => println!("Error: {}", e),
                },
                Err(e) => println!("Error: {}", e),
            }
        }
    }
    Ok(board)
}

fn run_solo(mut session: GameSession, n: usize) -> Result<()> {
    println!(
        "Sink the fleet: {} ships hidden, {} attempts.",
        session.unsunk_ships(0),
        session.attempts_left().unwrap_or(0)
    );
    let stdin = io::stdin();
    while session.status() == SessionStatus::Active {
        print_board(session.board(0), Some(session.shots_against(0)), false);
        let (row, col) = prompt_shot(&stdin, n)?;
        let report = session.fire(row, col).map_err(|e| anyhow!(e))?;
        describe(&report);
    }
    print_board(session.board(0), Some(session.shots_against(0)), true);
    match session.status() {
        SessionStatus::Over(Outcome::Win) => println!(
            "Victory! Fleet cleared with {} attempts to spare.",
            session.attempts_left().unwrap_or(0)
        ),
        SessionStatus::Over(Outcome::Loss) => println!(
            "Out of attempts. {} ships survived.",
            session.unsunk_ships(0)
        ),
        _ => {}
    }
    Ok(())
}

fn run_duel(mut session: GameSession, n: usize) -> Result<()> {
    let stdin = io::stdin();
    while session.status() == SessionStatus::Active {
        let shooter = session.turn().unwrap_or(0);
        let target = shooter ^ 1;
        println!("\nPlayer {}'s turn. Opponent's waters:", shooter + 1);
        print_board(session.board(target), Some(session.shots_against(target)), false);
        let (row, col) = prompt_shot(&stdin, n)?;
        let report = session.fire(row, col).map_err(|e| anyhow!(e))?;
        describe(&report);
    }
    if let SessionStatus::Over(Outcome::Winner(winner)) = session.status() {
        println!("\nPlayer {} wins!", winner + 1);
        let loser = winner ^ 1;
        print_board(session.board(loser), Some(session.shots_against(loser)), true);
    }
    Ok(())
}

fn describe(report: &TurnReport) {
    match report.outcome {
        ShotOutcome::Duplicate => println!("Already fired there."),
        ShotOutcome::Miss => println!("Miss."),
        ShotOutcome::Hit => println!("Hit!"),
        ShotOutcome::Sunk(_) => println!("Hit and sunk!"),
    }
    if let Some(left) = report.attempts_left {
        println!("{} attempts left, {} ships afloat.", left, report.unsunk);
    }
}

fn prompt_shot(stdin: &io::Stdin, n: usize) -> Result<(usize, usize)> {
    loop {
        print!("Shot as 'row col': ");
        io::stdout().flush()?;
        let line = read_line(stdin)?;
        match parse_coord(line.trim(), n) {
            Ok(coord) => return Ok(coord),
            Err(e) => println!("Error: {}", e),
        }
    }
}

fn read_line(stdin: &io::Stdin) -> Result<String> {
    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(line)
}

/// Parse a 1-based "row col" pair, translating to 0-based core coordinates.
fn parse_coord(line: &str, n: usize) -> Result<(usize, usize), String> {
    let mut parts = line.split_whitespace();
    let row: usize = parts
        .next()
        .ok_or_else(|| "missing row".to_string())?
        .parse()
        .map_err(|_| "row must be a number".to_string())?;
    let col: usize = parts
        .next()
        .ok_or_else(|| "missing column".to_string())?
        .parse()
        .map_err(|_| "column must be a number".to_string())?;
    if row == 0 || row > n || col == 0 || col > n {
        return Err(format!("coordinates must be within 1..={}", n));
    }
    Ok((row - 1, col - 1))
}

/// Parse a 1-based "row col H|V" placement line.
fn parse_placement(line: &str, n: usize) -> Result<((usize, usize), Orientation), String> {
    let mut parts = line.split_whitespace();
    let coord_part: String = parts.by_ref().take(2).collect::<Vec<_>>().join(" ");
    let origin = parse_coord(&coord_part, n)?;
    let orientation: Orientation = parts
        .next()
        .ok_or_else(|| "missing orientation".to_string())?
        .parse()
        .map_err(|e: armada::PlaceError| e.to_string())?;
    Ok((origin, orientation))
}

fn print_board(board: &Board, shots: Option<&ShotHistory>, reveal: bool) {
    let n = board.size();
    print!("   ");
    for c in 0..n {
        print!(" {:>2}", c + 1);
    }
    println!();
    for r in 0..n {
        print!("{:2} ", r + 1);
        for c in 0..n {
            let fired = shots.map(|s| s.contains(r, c)).unwrap_or(false);
            let ship = board.occupancy().get(r, c).unwrap_or(false);
            let glyph = if fired && ship {
                'X'
            } else if fired {
                'o'
            } else if reveal && ship {
                'S'
            } else {
                '.'
            };
            print!(" {:>2}", glyph);
        }
        println!();
    }
}
