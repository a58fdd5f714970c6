#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use heatseeker::{
    init_logging, ui, AiOpponent, Attacker, GameEngine, GameReport, GameStatus, RandomAttacker,
    TargetBoard, TargetingConfig, DEFAULT_LEVEL, SHIPS,
};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum Strategy {
    Heatmap,
    Random,
}

#[derive(clap::Args, Clone, Copy, Debug)]
#[cfg(feature = "std")]
struct TuningArgs {
    /// Simulated fleet layouts per shot.
    #[arg(long, default_value_t = heatseeker::DEFAULT_SIMULATION_COUNT)]
    simulations: usize,
    /// Random placements tried per ship in each simulation.
    #[arg(long, default_value_t = heatseeker::DEFAULT_PLACEMENT_ATTEMPTS)]
    placement_attempts: usize,
}

#[cfg(feature = "std")]
impl From<TuningArgs> for TargetingConfig {
    fn from(args: TuningArgs) -> Self {
        TargetingConfig {
            simulation_count: args.simulations,
            placement_attempts: args.placement_attempts,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Let the AI sink one randomly placed fleet, printing every turn.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print the heatmap before every shot")]
        show_heatmap: bool,
        #[command(flatten)]
        tuning: TuningArgs,
    },
    /// Play many games and print shot statistics as JSON.
    Bench {
        #[arg(long, default_value_t = 20)]
        games: usize,
        #[arg(long, value_enum, default_value_t = Strategy::Heatmap)]
        strategy: Strategy,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[command(flatten)]
        tuning: TuningArgs,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    // bench output is meant for other programs; keep the logger quiet.
    init_logging(match cli.command {
        Commands::Play { .. } => DEFAULT_LEVEL,
        Commands::Bench { .. } => LevelFilter::Warn,
    });

    match cli.command {
        Commands::Play {
            seed,
            show_heatmap,
            tuning,
        } => play(seed, show_heatmap, tuning.into()),
        Commands::Bench {
            games,
            strategy,
            seed,
            tuning,
        } => bench(games, strategy, seed, tuning.into()),
    }
}

#[cfg(feature = "std")]
fn play(seed: Option<u64>, show_heatmap: bool, config: TargetingConfig) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = seeded_rng(seed);
    let mut board = TargetBoard::random(&mut rng, &SHIPS)?;
    let mut ai = AiOpponent::with_config(SmallRng::from_rng(&mut rng), &SHIPS, config);
    let mut preview_rng = SmallRng::from_rng(&mut rng);

    let mut turn = 0;
    loop {
        if show_heatmap {
            let heatmap = ai.heatmap(&mut preview_rng);
            println!("{}", ui::render_heatmap(&heatmap, ai.knowledge()));
        }
        let target = ai.choose_attack()?;
        let outcome = board.attack(target);
        ai.register_outcome(target, &outcome)?;
        turn += 1;
        println!("Turn {:3}: {} -> {:?}", turn, target, outcome);
        println!("{}", ui::render_knowledge(ai.knowledge()));
        if board.all_sunk() {
            break;
        }
    }
    println!("All ships sunk after {} shots.", turn);
    Ok(())
}

#[cfg(feature = "std")]
fn bench(
    games: usize,
    strategy: Strategy,
    seed: Option<u64>,
    config: TargetingConfig,
) -> anyhow::Result<()> {
    let mut rng = seeded_rng(seed);
    let mut reports: Vec<GameReport> = Vec::with_capacity(games);

    let mut attacker: Box<dyn Attacker> = match strategy {
        Strategy::Heatmap => Box::new(AiOpponent::with_config(
            SmallRng::from_rng(&mut rng),
            &SHIPS,
            config,
        )),
        Strategy::Random => Box::new(RandomAttacker::new(SmallRng::from_rng(&mut rng))),
    };

    for _ in 0..games {
        attacker.reset();
        let mut board = TargetBoard::random(&mut rng, &SHIPS)?;
        let mut engine = GameEngine::new(attacker.as_mut(), &mut board);
        let report = engine.play_out()?;
        anyhow::ensure!(engine.status() == GameStatus::Won, "game ended without a win");
        reports.push(report);
    }

    let shots: Vec<usize> = reports.iter().map(|r| r.shots).collect();
    let mean = if shots.is_empty() {
        0.0
    } else {
        shots.iter().sum::<usize>() as f64 / shots.len() as f64
    };
    let result = json!({
        "strategy": format!("{:?}", strategy),
        "games": games,
        "config": config,
        "mean_shots": mean,
        "min_shots": shots.iter().min(),
        "max_shots": shots.iter().max(),
        "reports": reports,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
