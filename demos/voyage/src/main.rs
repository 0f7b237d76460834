//! voyage: demo driver for the voyage routing engine.
//!
//! Runs the three route strategies and the stepwise simulator on a graph,
//! prints each outcome and writes the simulator's run log to
//! `output/voyage/` as CSV and JSON.
//!
//! ```text
//! voyage [GRAPH.json] [--config ENGINE.json] [--origin ID]
//!        [--health best|good|poor|dying|dead]
//!        [--energy PCT] [--reserve MASS] [--life BUDGET]
//! ```
//!
//! Without `GRAPH.json` the built-in eight-system graph is used.  Set
//! `RUST_LOG=debug` to see every stay and move.

mod network;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vg_core::{EngineConfig, HealthTier, Traveler};
use vg_graph::{TravelGraph, load_graph_json};
use vg_output::{CsvWriter, JsonWriter, RunLogObserver, write_run_log};
use vg_route::{BeamSearch, MovementGreedy, RouteStrategy, StayGreedy};
use vg_sim::SimBuilder;

use network::build_graph;

// ── Defaults ──────────────────────────────────────────────────────────────────

const DEFAULT_ORIGIN:  &str = "Sol";
const DEFAULT_ENERGY:  f64  = 80.0;
const DEFAULT_RESERVE: f64  = 6.0;
const DEFAULT_LIFE:    f64  = 25.0;
const OUTPUT_DIR:      &str = "output/voyage";

// ── Command line ──────────────────────────────────────────────────────────────

struct Args {
    graph:   Option<PathBuf>,
    config:  Option<PathBuf>,
    origin:  String,
    health:  HealthTier,
    energy:  f64,
    reserve: f64,
    life:    f64,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut args = Args {
            graph:   None,
            config:  None,
            origin:  DEFAULT_ORIGIN.to_owned(),
            health:  HealthTier::default(),
            energy:  DEFAULT_ENERGY,
            reserve: DEFAULT_RESERVE,
            life:    DEFAULT_LIFE,
        };
        let mut it = std::env::args().skip(1);
        while let Some(arg) = it.next() {
            let mut value = || it.next().with_context(|| format!("{arg} needs a value"));
            match arg.as_str() {
                "--config"  => args.config = Some(PathBuf::from(value()?)),
                "--origin"  => args.origin = value()?,
                "--health"  => args.health = value()?.parse()?,
                "--energy"  => args.energy = number(&arg, &value()?)?,
                "--reserve" => args.reserve = number(&arg, &value()?)?,
                "--life"    => args.life = number(&arg, &value()?)?,
                flag if flag.starts_with("--") => bail!("unknown option {flag}"),
                path => {
                    if args.graph.is_some() {
                        bail!("more than one graph file given");
                    }
                    args.graph = Some(PathBuf::from(path));
                }
            }
        }
        Ok(args)
    }
}

fn number(flag: &str, text: &str) -> Result<f64> {
    text.parse().with_context(|| format!("{flag}: '{text}' is not a number"))
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    let config: EngineConfig = match path {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {}", p.display()))?
        }
        None => EngineConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn load_graph(path: Option<&Path>) -> Result<TravelGraph> {
    Ok(match path {
        Some(p) => load_graph_json(p).with_context(|| format!("loading graph {}", p.display()))?,
        None => build_graph()?,
    })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse()?;
    let config = load_config(args.config.as_deref())?;
    let graph = load_graph(args.graph.as_deref())?;
    let traveler = Traveler::new(args.health, args.energy, args.reserve, args.life);

    info!(
        locations = graph.location_count(),
        connections = graph.connection_count(),
        unresolved = graph.unresolved_distances().count(),
        "graph ready"
    );
    info!(
        origin = %args.origin,
        health = %traveler.health,
        energy = traveler.resources.energy_pct,
        reserve = traveler.resources.reserve_mass,
        life = traveler.resources.life_budget,
        max_steps = config.max_steps,
        beam_width = config.beam_width,
        "traveler ready"
    );
    println!();

    // 1. Route strategies.
    let strategies: [&dyn RouteStrategy; 3] = [
        &MovementGreedy::from_config(&config),
        &StayGreedy::from_config(&config),
        &BeamSearch::from_config(&config),
    ];
    println!("{:<12} {:>7} {:>9} {:>8} {:>8}  {:<20} path", "strategy", "visited", "distance", "energy", "life", "stop");
    println!("{}", "-".repeat(96));
    for s in strategies {
        let t0 = Instant::now();
        let r = s.compute(&graph, &args.origin, traveler);
        println!(
            "{:<12} {:>7} {:>9.2} {:>8.2} {:>8.2}  {:<20} {}   ({:.1} µs)",
            r.strategy,
            r.visited_count(),
            r.total_distance,
            r.remaining.energy_pct,
            r.remaining.life_budget,
            r.reason.to_string(),
            r.labels(&graph).join(" → "),
            t0.elapsed().as_secs_f64() * 1e6,
        );
    }
    println!();

    // 2. Stepwise simulation with CSV streaming.
    let out = Path::new(OUTPUT_DIR);
    let mut obs = RunLogObserver::new(CsvWriter::new(out)?, &graph);
    let log = SimBuilder::new(&graph, args.origin.as_str(), traveler)
        .config(config)
        .build()?
        .run(&mut obs);
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    // 3. Same run as JSON, written after the fact.
    let mut json = JsonWriter::new(out)?;
    write_run_log(&log, &graph, &mut json)?;

    println!("{:<5} {:<10} {:<10} {:>8} {:>8} {:>8} {:>8}", "step", "from", "to", "dist", "eaten", "energy", "life");
    println!("{}", "-".repeat(64));
    for s in &log.steps {
        println!(
            "{:<5} {:<10} {:<10} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
            s.index,
            graph.label(s.from).unwrap_or("?"),
            s.to.and_then(|n| graph.label(n)).unwrap_or("(stuck)"),
            s.distance,
            s.eaten,
            s.after.energy_pct,
            s.after.life_budget,
        );
    }
    println!();
    println!(
        "Simulation: {} after {} steps, {:.2} travelled, {:.2} reserve eaten{}",
        log.stop_reason,
        log.steps.len(),
        log.total_distance(),
        log.reserve_consumed(),
        if log.died { " (died)" } else { "" },
    );
    println!("Reports written to {OUTPUT_DIR}/ (steps.csv, summary.csv, run.json)");

    Ok(())
}
