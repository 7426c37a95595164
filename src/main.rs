use clap::{Parser, Subcommand};
use huntsman::{
    build_hunt_order, hunt_order, init_logging, parse_int_list, parse_layout, print_heatmap,
    print_hunt_order, print_target_view, Game, GameStatus, TargetBoard, TargetingAgent,
    CELL_COUNT, DEFAULT_LAYOUT, SHIP_SIZES,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Hunt/target guessing opponent for a 10x10 grid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the placement heatmap and the resulting hunt order.
    Heatmap {
        #[arg(long, help = "Comma-separated ship lengths (default 5,4,3,3,2)")]
        sizes: Option<String>,
    },
    /// Let the agent play one game against a fixed layout.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(
            long,
            allow_hyphen_values = true,
            help = "Layout as code,length pairs; negative code = vertical (e.g., -60,5,27,3)"
        )]
        layout: Option<String>,
        #[arg(long, help = "Only print the final result")]
        quiet: bool,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Heatmap { sizes } => {
            let sizes: Vec<usize> = match sizes {
                Some(s) => parse_int_list(&s)
                    .ok_or_else(|| anyhow::anyhow!("invalid ship sizes: {}", s))?,
                None => SHIP_SIZES.to_vec(),
            };
            let order = build_hunt_order(&sizes);
            print_heatmap(order.heat_map());
            print_hunt_order(&order);
        }
        Commands::Play {
            seed,
            layout,
            quiet,
        } => {
            let codes: Vec<i32> = match layout {
                Some(s) => {
                    parse_int_list(&s).ok_or_else(|| anyhow::anyhow!("invalid layout: {}", s))?
                }
                None => DEFAULT_LAYOUT.to_vec(),
            };
            let placements = parse_layout(&codes).map_err(|e| anyhow::anyhow!(e))?;
            let board = TargetBoard::new(&placements).map_err(|e| anyhow::anyhow!(e))?;

            let mut rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            let mut game = Game::new(TargetingAgent::new(hunt_order()), board);
            if quiet {
                game.play(&mut rng, CELL_COUNT)
                    .map_err(|e| anyhow::anyhow!(e))?;
            } else {
                while game.status() == GameStatus::InProgress && game.turns() < CELL_COUNT {
                    let turn = game.turn(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
                    println!(
                        "\nTurn {}: guessed {} -> {}",
                        game.turns(),
                        turn.square,
                        turn.outcome
                    );
                    print_target_view(game.board(), game.agent());
                }
            }
            let report = game.report();
            println!(
                "\n{} after {} turns ({} hits)",
                if report.won { "All ships sunk" } else { "Gave up" },
                report.turns,
                report.hits
            );
        }
    }
    Ok(())
}
