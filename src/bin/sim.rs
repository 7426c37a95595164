use huntsman::{
    hunt_order, init_logging, parse_int_list, parse_layout, Game, GameReport, TargetBoard,
    TargetingAgent, CELL_COUNT, DEFAULT_LAYOUT,
};
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

#[derive(Parser)]
#[command(about = "Play many seeded games and print a JSON summary", long_about = None)]
struct Args {
    /// Number of games to play.
    games: u64,
    /// Base seed; game `i` uses `seed + i`.
    seed: u64,
    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Layout as code,length pairs; negative code = vertical"
    )]
    layout: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let Args { games, seed, layout } = Args::parse();
    let codes: Vec<i32> = match layout {
        Some(s) => parse_int_list(&s).ok_or_else(|| anyhow::anyhow!("invalid layout: {}", s))?,
        None => DEFAULT_LAYOUT.to_vec(),
    };
    let placements = parse_layout(&codes).map_err(|e| anyhow::anyhow!(e))?;
    // Validate once up front; each task builds its own board.
    TargetBoard::new(&placements).map_err(|e| anyhow::anyhow!(e))?;

    // Publish the shared hunt order before any session starts.
    let order = hunt_order();

    let mut tasks = tokio::task::JoinSet::new();
    for game_idx in 0..games {
        let placements = placements.clone();
        tasks.spawn(async move {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(game_idx));
            let board = TargetBoard::new(&placements).map_err(|e| anyhow::anyhow!(e))?;
            let mut game = Game::new(TargetingAgent::new(order), board);
            let report = game
                .play(&mut rng, CELL_COUNT)
                .map_err(|e| anyhow::anyhow!(e))?;
            Ok::<GameReport, anyhow::Error>(report)
        });
    }

    let mut reports = Vec::with_capacity(games as usize);
    while let Some(joined) = tasks.join_next().await {
        reports.push(joined??);
    }

    let turns: Vec<usize> = reports.iter().map(|r| r.turns).collect();
    let mean_turns = if turns.is_empty() {
        0.0
    } else {
        turns.iter().sum::<usize>() as f64 / turns.len() as f64
    };
    let result = json!({
        "games": reports.len(),
        "mean_turns": mean_turns,
        "min_turns": turns.iter().min(),
        "max_turns": turns.iter().max(),
        "all_won": reports.iter().all(|r| r.won),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
