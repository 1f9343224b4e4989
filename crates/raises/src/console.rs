//! Colorful console output for solver events.
//!
//! Provides a `tracing` layer that formats the solver's structured events
//! with colors. Output goes to stderr so it never mixes with results printed
//! on stdout.

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const SOLVER_TARGET: &str = "raises_solver";

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// is honored; solver events at INFO and above are shown by default.
pub fn init() {
    INIT.get_or_init(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = format!("{}=info", SOLVER_TARGET).parse() {
            filter = filter.add_directive(directive);
        }

        // Another subscriber may already be installed by the host program.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SolverConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats solver events with colors.
pub struct SolverConsoleLayer;

impl<S: Subscriber> Layer<S> for SolverConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with(SOLVER_TARGET) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_solver_event(*metadata.level(), &visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    mode: Option<String>,
    termination: Option<String>,
    error: Option<String>,
    dice: Option<u64>,
    threads: Option<u64>,
    time_limit_ms: Option<u64>,
    reserved: Option<u64>,
    remaining: Option<u64>,
    shards: Option<u64>,
    score: Option<u64>,
    nodes: Option<u64>,
    explored: Option<u64>,
    pruned: Option<u64>,
    elapsed_ms: Option<u64>,
    timed_out: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let value = Some(value.to_string());
        match field.name() {
            "event" => self.event = value,
            "mode" => self.mode = value,
            "termination" => self.termination = value,
            "error" => self.error = value,
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let value = Some(value);
        match field.name() {
            "dice" => self.dice = value,
            "threads" => self.threads = value,
            "time_limit_ms" => self.time_limit_ms = value,
            "reserved" => self.reserved = value,
            "remaining" => self.remaining = value,
            "shards" => self.shards = value,
            "score" => self.score = value,
            "nodes" => self.nodes = value,
            "explored" => self.explored = value,
            "pruned" => self.pruned = value,
            "elapsed_ms" => self.elapsed_ms = value,
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "timed_out" => self.timed_out = Some(value),
            _ => {}
        }
    }
}

fn format_solver_event(level: Level, v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("solve_start") => format_solve_start(level, v),
        Some("reduction") => format_reduction(level, v),
        Some("construction") => format_construction(level, v),
        Some("new_best") => format_new_best(v),
        Some("shards") => format_line(
            level,
            "[Search]",
            format!(
                "split into {} shards on {} threads",
                v.shards.unwrap_or(0).bright_yellow(),
                v.threads.unwrap_or(1).bright_yellow()
            ),
        ),
        Some("shards_fallback") => format_line(
            level,
            "[Search]",
            format!(
                "thread pool unavailable ({}), searching on one thread",
                v.error.as_deref().unwrap_or("unknown").bright_red()
            ),
        ),
        Some("nodes") => format_line(
            level,
            "[Search]",
            format!(
                "{} nodes explored, {} pruned",
                v.explored.unwrap_or(0).white(),
                v.pruned.unwrap_or(0).white()
            ),
        ),
        Some("solve_end") => format_solve_end(level, v),
        _ => String::new(),
    }
}

fn format_line(level: Level, tag: &str, body: String) -> String {
    format!(
        "{} {} {} {}",
        timestamp().bright_black(),
        format_level(level),
        tag.bright_cyan(),
        body
    )
}

fn format_level(level: Level) -> String {
    let label = format!("{:>5}", level.as_str());
    if level == Level::ERROR {
        label.bright_red().to_string()
    } else if level == Level::WARN {
        label.yellow().to_string()
    } else if level == Level::INFO {
        label.bright_green().to_string()
    } else if level == Level::DEBUG {
        label.bright_blue().to_string()
    } else {
        label.bright_black().to_string()
    }
}

fn format_solve_start(level: Level, v: &EventVisitor) -> String {
    format_line(
        level,
        "[Solver]",
        format!(
            "solving {} dice ({}), budget ({}), threads ({})",
            v.dice.unwrap_or(0).bright_yellow(),
            v.mode.as_deref().unwrap_or("unknown").white().bold(),
            format_duration_ms(v.time_limit_ms.unwrap_or(0)).yellow(),
            v.threads.unwrap_or(1).bright_yellow()
        ),
    )
}

fn format_reduction(level: Level, v: &EventVisitor) -> String {
    format_line(
        level,
        "[Reduction]",
        format!(
            "reserved {} guaranteed groups, {} dice left to search",
            v.reserved.unwrap_or(0).bright_green(),
            v.remaining.unwrap_or(0).bright_yellow()
        ),
    )
}

fn format_construction(level: Level, v: &EventVisitor) -> String {
    format_line(
        level,
        "[Construction]",
        format!(
            "greedy fill scored {} over {} dice",
            v.score.unwrap_or(0).bright_green(),
            v.dice.unwrap_or(0).bright_yellow()
        ),
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    format!(
        "    {} {:>10} nodes | {:>8} | {} raises",
        "->".bright_blue(),
        v.nodes.unwrap_or(0).white(),
        format_duration_ms(v.elapsed_ms.unwrap_or(0)),
        v.score.unwrap_or(0).bright_green().bold()
    )
}

fn format_solve_end(level: Level, v: &EventVisitor) -> String {
    let status = if v.timed_out.unwrap_or(false) {
        "best found".yellow().bold().to_string()
    } else {
        "optimal".bright_green().bold().to_string()
    };

    let mut body = format!(
        "solving ended: {} raises ({}), time spent ({})",
        v.score.unwrap_or(0).bright_green().bold(),
        status,
        format_duration_ms(v.elapsed_ms.unwrap_or(0)).yellow()
    );
    if let Some(nodes) = v.nodes {
        body.push_str(&format!(", nodes ({})", nodes.white()));
    }
    if let Some(termination) = v.termination.as_deref() {
        body.push_str(&format!(", stopped by ({})", termination.bright_magenta()));
    }
    format_line(level, "[Solver]", body)
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
