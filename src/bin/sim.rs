//! Batch simulator: plays seeded random-shot solo games and prints
//! aggregate statistics. Useful for eyeballing how winnable the default
//! attempt budget is at a given board size.

use armada::{Board, GameSession, Outcome, SessionStatus};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <seed> <board-size> <games>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = args[2].parse()?;
    let games: u64 = args[3].parse()?;
    if size == 0 || games == 0 {
        eprintln!("board-size and games must be positive");
        std::process::exit(1);
    }

    armada::init_logging();

    let mut wins = 0usize;
    let mut losses = 0usize;
    let mut total_shots = 0usize;
    for game in 0..games {
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(game));
        let board = Board::generate(size, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
        let mut session = GameSession::solo_default(board);
        let mut shots = 0usize;
        while session.status() == SessionStatus::Active {
            let row = rng.random_range(0..size);
            let col = rng.random_range(0..size);
            session.fire(row, col).map_err(|e| anyhow::anyhow!(e))?;
            shots += 1;
        }
        total_shots += shots;
        match session.status() {
            SessionStatus::Over(Outcome::Win) => wins += 1,
            SessionStatus::Over(Outcome::Loss) => losses += 1,
            _ => {}
        }
    }

    println!(
        "games: {}  wins: {}  losses: {}  avg shots: {:.1}",
        games,
        wins,
        losses,
        total_shots as f64 / games as f64
    );
    Ok(())
}
