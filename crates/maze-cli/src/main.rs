//! maze: run grid pathfinding strategies on a text layout or a random map.
//!
//! ```text
//! maze --map level.txt --strategy astar --trace
//! maze --random 40x20 --seed 7 --all
//! ```

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, bail};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use maze_core::mapgen::{TerrainMix, random_terrain};
use maze_core::{Extent, GraphConfig, GridGraph, Layout, Point, Terrain, render};
use maze_paths::{Strategy, is_valid_path, path_cost};
use rand::SeedableRng;
use rand::rngs::StdRng;

const PATH_MARK: char = '*';
const TRACE_MARK: char = 'o';

#[derive(Parser, Debug)]
#[command(name = "maze")]
#[command(about = "Find paths across floor, swamp and obstacle grids", long_about = None)]
struct Cli {
    /// Layout file: `.` floor, `~` swamp, `#` obstacle, `S`/`D` endpoints
    #[arg(long, conflicts_with = "random")]
    map: Option<PathBuf>,

    /// Generate a random WIDTHxDEPTH map instead of loading one
    #[arg(long, value_parser = parse_extent)]
    random: Option<Extent>,

    /// Seed for --random (drawn at random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Obstacle density for --random
    #[arg(long, default_value_t = TerrainMix::default().obstacle)]
    obstacles: f64,

    /// Swamp density for --random
    #[arg(long, default_value_t = TerrainMix::default().swamp)]
    swamp: f64,

    /// Source cell as `x,z` (defaults to the layout's `S`, or the first corner)
    #[arg(long, value_parser = parse_point)]
    from: Option<Point>,

    /// Destination cell as `x,z` (defaults to the layout's `D`, or the last corner)
    #[arg(long, value_parser = parse_point)]
    to: Option<Point>,

    /// trivial, dfs, bfs, dijkstra, greedy or astar
    #[arg(long, short, default_value = "astar")]
    strategy: Strategy,

    /// Run every strategy and print a comparison instead of one map
    #[arg(long)]
    all: bool,

    /// JSON file with graph settings, e.g. `{"swamp_cost": 5.0}`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Cost of entering a swamp cell (overrides --config)
    #[arg(long)]
    swamp_cost: Option<f32>,

    /// Cell side length in spatial units (overrides --config)
    #[arg(long)]
    cell_size: Option<f32>,

    /// Also print every cell the search expanded
    #[arg(long)]
    trace: bool,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, z) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,z`, got `{s}`"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let z = z.trim().parse().map_err(|e| format!("bad z in `{s}`: {e}"))?;
    Ok(Point::new(x, z))
}

fn parse_extent(s: &str) -> Result<Extent, String> {
    let (w, d) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected `WIDTHxDEPTH`, got `{s}`"))?;
    let w: i32 = w.trim().parse().map_err(|e| format!("bad width in `{s}`: {e}"))?;
    let d: i32 = d.trim().parse().map_err(|e| format!("bad depth in `{s}`: {e}"))?;
    if w <= 0 || d <= 0 {
        return Err(format!("map must be at least 1x1, got `{s}`"));
    }
    Ok(Extent::new(w, d))
}

fn load_config(cli: &Cli) -> anyhow::Result<GraphConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => GraphConfig::default(),
    };
    if let Some(cost) = cli.swamp_cost {
        config = config.with_swamp_cost(cost);
    }
    if let Some(size) = cli.cell_size {
        config = config.with_cell_size(size);
    }
    Ok(config)
}

/// Build the graph and the default endpoints.
fn load_graph(cli: &Cli, config: GraphConfig) -> anyhow::Result<(GridGraph, Point, Point)> {
    if let Some(path) = &cli.map {
        let text = fs::read_to_string(path).with_context(|| format!("reading map {}", path.display()))?;
        let layout = Layout::parse(&text).with_context(|| format!("parsing map {}", path.display()))?;
        let graph = GridGraph::from_layout(&layout, config)?;
        let last = Point::new(graph.width() - 1, graph.depth() - 1);
        let from = layout.source().unwrap_or(Point::ZERO);
        let to = layout.destination().unwrap_or(last);
        return Ok((graph, from, to));
    }

    let Some(extent) = cli.random else {
        bail!("either --map or --random is required");
    };
    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("generating {extent} map with seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let mix = TerrainMix {
        obstacle: cli.obstacles,
        swamp: cli.swamp,
    };
    let mut terrain = random_terrain(extent, mix, &mut rng);
    // Keep the default corners open.
    if let Some(first) = terrain.first_mut() {
        *first = Terrain::Floor;
    }
    if let Some(last) = terrain.last_mut() {
        *last = Terrain::Floor;
    }
    let graph = GridGraph::new(extent.width, extent.depth, terrain, config)?;
    Ok((graph, Point::ZERO, Point::new(extent.width - 1, extent.depth - 1)))
}

fn run_one(graph: &GridGraph, strategy: Strategy, from: Point, to: Point, trace: bool) -> anyhow::Result<()> {
    let mut expanded = Vec::new();
    let path = strategy.find_path_traced(graph, from, to, |p| expanded.push(p))?;

    if trace {
        println!("expanded cells ({}):", expanded.len());
        println!("{}\n", render(graph, &expanded, TRACE_MARK));
    }
    println!("{}", render(graph, &path, PATH_MARK));

    if path.is_empty() {
        println!("{strategy}: no path from {from} to {to} ({} cells expanded)", expanded.len());
        return Ok(());
    }
    let walkable = is_valid_path(graph, &path, from, to);
    debug!("{strategy}: path walkable: {walkable}");
    println!(
        "{strategy}: {} cells, cost {:.1}, {} cells expanded{}",
        path.len(),
        path_cost(graph, &path),
        expanded.len(),
        if walkable { "" } else { " (ignores terrain)" }
    );
    Ok(())
}

fn run_all(graph: &GridGraph, from: Point, to: Point) -> anyhow::Result<()> {
    println!("{}\n", render(graph, &[from, to], PATH_MARK));
    println!("{:<10} {:>6} {:>8} {:>9}", "strategy", "cells", "cost", "expanded");
    for strategy in Strategy::ALL {
        let mut expanded = 0usize;
        let path = strategy.find_path_traced(graph, from, to, |_| expanded += 1)?;
        if path.is_empty() {
            println!("{:<10} {:>6} {:>8} {expanded:>9}", strategy.name(), "-", "-");
        } else {
            let cost = path_cost(graph, &path);
            println!(
                "{:<10} {:>6} {cost:>8.1} {expanded:>9}",
                strategy.name(),
                path.len()
            );
        }
    }
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;
    debug!("graph config: {config:?}");
    let (graph, default_from, default_to) = load_graph(&cli, config)?;
    let from = cli.from.unwrap_or(default_from);
    let to = cli.to.unwrap_or(default_to);
    info!("{}x{} grid, {from} -> {to}", graph.width(), graph.depth());

    if cli.all {
        run_all(&graph, from, to)
    } else {
        run_one(&graph, cli.strategy, from, to, cli.trace)
    }
}

fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
