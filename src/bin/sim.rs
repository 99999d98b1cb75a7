use anyhow::bail;
use clap::Parser;
use flotilla::{Board, Outcome, TargetingEngine};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

/// Play computer-vs-computer games and print a JSON summary.
#[derive(Parser)]
#[command(name = "sim")]
struct Args {
    /// RNG seed for the first player
    #[arg(long, default_value_t = 1)]
    seed1: u64,
    /// RNG seed for the second player
    #[arg(long, default_value_t = 2)]
    seed2: u64,
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u64,
}

fn main() -> anyhow::Result<()> {
    flotilla::init_logging();
    let args = Args::parse();

    let mut rng1 = SmallRng::seed_from_u64(args.seed1);
    let mut rng2 = SmallRng::seed_from_u64(args.seed2);

    let mut wins = [0u64, 0u64];
    let mut total_shots = 0u64;
    for game in 0..args.games {
        let (winner, shots) = play_game(&mut rng1, &mut rng2)?;
        log::info!("game {}: winner player{} after {} shots", game, winner + 1, shots);
        wins[winner] += 1;
        total_shots += shots;
    }

    let summary = json!({
        "games": args.games,
        "player1_wins": wins[0],
        "player2_wins": wins[1],
        "total_shots": total_shots,
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

/// Run one game to completion; returns the winner index and shot count.
fn play_game(rng1: &mut SmallRng, rng2: &mut SmallRng) -> anyhow::Result<(usize, u64)> {
    let mut board1 = Board::new();
    let mut board2 = Board::new();
    let mut ai1 = TargetingEngine::new();
    let mut ai2 = TargetingEngine::new();

    ai1.place_ships(rng1, &mut board1)?;
    ai2.place_ships(rng2, &mut board2)?;
    board1.finalize();
    board2.finalize();

    // prime both heat maps before the first shot; a fresh engine has no
    // positive cell and would decline to fire
    ai1.set_shot_result(&board2, Outcome::Miss);
    ai2.set_shot_result(&board1, Outcome::Miss);

    let mut shots = 0u64;
    loop {
        let progressed_1 = run_turn(&mut ai1, &mut board2, &mut shots);
        if board2.all_sunk() {
            return Ok((0, shots));
        }
        let progressed_2 = run_turn(&mut ai2, &mut board1, &mut shots);
        if board1.all_sunk() {
            return Ok((1, shots));
        }
        if !progressed_1 && !progressed_2 {
            bail!("both engines declined to fire; game stalled");
        }
    }
}

/// One player's turn: keep firing until a miss or the engine has no
/// candidate. Returns whether any shot was taken.
fn run_turn(ai: &mut TargetingEngine, enemy: &mut Board, shots: &mut u64) -> bool {
    let mut fired = false;
    while let Some(cell) = ai.get_shot() {
        let outcome = enemy.process_shot(cell);
        *shots += 1;
        fired = true;
        log::debug!("shot at {} -> {:?}", cell, outcome);
        ai.set_shot_result(enemy, outcome);
        if outcome == Outcome::Miss || enemy.all_sunk() {
            break;
        }
    }
    fired
}
