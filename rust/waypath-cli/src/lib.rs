use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;

use waypath_core::{AStar, Connectivity, Location, Map2D, PathResult};

pub mod config;

use config::Config;

#[derive(Parser, Debug)]
#[command(name = "waypath", version, about = "Find the cheapest path across a text grid map with A*")]
pub struct Args {
    /// Map file: one row per line, `.` open, `#` wall, `1`-`9` extra cost, `S` start, `G` goal
    #[arg(long = "map", value_name = "PATH")]
    pub map: PathBuf,

    /// Start as `x,y`; defaults to the map's `S` marker
    #[arg(long = "start", value_name = "X,Y", value_parser = parse_location)]
    pub start: Option<Location>,

    /// Goal as `x,y`; defaults to the map's `G` marker
    #[arg(long = "goal", value_name = "X,Y", value_parser = parse_location)]
    pub goal: Option<Location>,

    /// JSON file with search options
    #[arg(long = "options", value_name = "PATH")]
    pub options: Option<PathBuf>,

    /// Stop after closing this many locations
    #[arg(long = "max-expansions", value_name = "N")]
    pub max_expansions: Option<u64>,

    /// Only move N/E/S/W
    #[arg(long = "four-way")]
    pub four_way: bool,

    /// Emit logs as JSON
    #[arg(long = "json-logs")]
    pub json_logs: bool,
}

pub fn parse_location(s: &str) -> std::result::Result<Location, String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected x,y but got '{}'", s))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in '{}': {}", s, e))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in '{}': {}", s, e))?;
    Ok(Location::new(x, y))
}

/// Layers defaults, environment, options file and flags, in that order.
pub fn resolve_config(args: &Args, base: Config) -> Result<Config> {
    let mut cfg = base;
    if let Some(path) = &args.options {
        cfg.load_options_file(path)?;
    }
    if let Some(n) = args.max_expansions {
        cfg.options.max_expansions = n;
    }
    if args.four_way {
        cfg.options.connectivity = Connectivity::Four;
    }
    cfg.log_json |= args.json_logs;
    Ok(cfg)
}

pub fn run(args: &Args, cfg: &Config) -> Result<PathResult> {
    let text = fs::read_to_string(&args.map).with_context(|| format!("reading map {}", args.map.display()))?;
    let map = text
        .parse::<Map2D>()
        .with_context(|| format!("parsing map {}", args.map.display()))?
        .with_connectivity(cfg.options.connectivity);

    let start = args.start.or(map.start()).ok_or_else(|| anyhow!("no start given and map has no 'S' marker"))?;
    let goal = args.goal.or(map.finish()).ok_or_else(|| anyhow!("no goal given and map has no 'G' marker"))?;
    info!(map = %args.map.display(), width = map.width(), height = map.height(), %start, %goal, "searching");

    let res = AStar::new(&map).find_path(start, goal, &cfg.options)?;
    info!(found = res.is_found(), expanded = res.expanded, cost = res.cost, reason = ?res.reason, "search finished");
    Ok(res)
}
