use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use detour::gen::{draw_obstacle_arc, ArcCfg, ReplayToken, VertexCount};
use detour::{plan, verify_clearance, Obstacle, PlannerCfg, Vector};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod input;
mod output;

#[derive(Parser)]
#[command(name = "detour-cli", version = detour::VERSION)]
#[command(about = "Route a polyline from A to B that does not cross a polygonal line L")]
struct Cmd {
    /// Log verbosity on stderr: -v info, -vv debug (RUST_LOG overrides)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Read L, A and B and print the avoiding path (default)
    Plan {
        /// Read from a file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
        /// Print JSON instead of the sentence
        #[arg(long)]
        json: bool,
        /// Do not print the input prompts
        #[arg(long)]
        quiet: bool,
    },
    /// Plan around a random arc-shaped L between (-2, 0) and (2, 0)
    Random {
        #[arg(long, default_value_t = 6)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match cmd.action.unwrap_or(Action::Plan {
        input: None,
        json: false,
        quiet: false,
    }) {
        Action::Plan { input, json, quiet } => run_plan(input, json, quiet),
        Action::Random {
            vertices,
            seed,
            index,
            json,
        } => run_random(vertices, seed, index, json),
    }
}

fn run_plan(input: Option<PathBuf>, json: bool, quiet: bool) -> Result<()> {
    let show_prompts = input.is_none() && !quiet && !json;
    let problem = input::load(input.as_deref(), show_prompts)?;
    let obstacle = Obstacle::new(problem.vertices).context("invalid polygonal line L")?;
    solve_and_print(&obstacle, problem.start, problem.finish, json)
}

fn run_random(vertices: usize, seed: u64, index: u64, json: bool) -> Result<()> {
    let cfg = ArcCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..ArcCfg::default()
    };
    let obstacle = draw_obstacle_arc(cfg, ReplayToken { seed, index })
        .context("drawing random polygonal line")?;
    tracing::info!(vertices = obstacle.vertices().len(), seed, index, "random obstacle");
    if !json {
        println!("L: {obstacle}");
    }
    solve_and_print(&obstacle, Vector::new(-2.0, 0.0), Vector::new(2.0, 0.0), json)
}

fn solve_and_print(obstacle: &Obstacle, start: Vector, finish: Vector, json: bool) -> Result<()> {
    let path = plan(obstacle, start, finish, PlannerCfg::default()).context("planning failed")?;
    let residual = verify_clearance(&path, obstacle);
    if let Some((segment, edge)) = residual {
        tracing::warn!(segment, edge, "path still crosses the obstacle");
    }
    if json {
        println!("{}", output::render_json(&path, residual)?);
    } else {
        println!("{}", output::render_text(&path));
    }
    Ok(())
}
