//! Colorful console output for casting solver events.
//!
//! Provides a custom `tracing` layer that formats solver events with colors.
//! Everything is written to stderr so stdout stays free for the report.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solving/phase start/end)
//! - **DEBUG**: Diva seeding outcome and repair progress (1/sec)
//! - **TRACE**: Individual merges

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SOLVE_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Target prefix of the events this layer renders.
const SOLVER_TARGET: &str = "casting_solver";

/// Initializes the solver console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Solver events at INFO and above are shown unless `RUST_LOG` says
/// otherwise.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::builder()
            .with_default_directive(
                "casting_solver=info"
                    .parse()
                    .expect("static directive is valid"),
            )
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(CastingConsoleLayer)
            .try_init();
    });
}

// Marks the start of solving for elapsed time tracking.
fn mark_solve_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SOLVE_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since solve start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SOLVE_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let version_line = format!("casting v{VERSION} - diva-aware role assignment");

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", version_line.bright_cyan().bold());
    let _ = stderr.flush();
}

/// A tracing layer that formats casting solver events with colors.
pub struct CastingConsoleLayer;

impl<S: Subscriber> Layer<S> for CastingConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from solver modules
        if !metadata.target().starts_with(SOLVER_TARGET) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    phase: Option<String>,
    steps: Option<u64>,
    speed: Option<u64>,
    moves_speed: Option<u64>,
    accepted: Option<u64>,
    acceptance_rate: Option<f64>,
    attempts: Option<u64>,
    step: Option<u64>,
    duration_ms: Option<u64>,
    role_count: Option<u64>,
    scene_count: Option<u64>,
    actor_count: Option<u64>,
    actors_used: Option<u64>,
    overflow_count: Option<u64>,
    real_actors: Option<u64>,
    overflow_actors: Option<u64>,
    constructed_actors: Option<u64>,
    merges: Option<u64>,
    first_role: Option<u64>,
    second_role: Option<u64>,
    actor: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "phase" => self.phase = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let slot = match field.name() {
            "steps" => &mut self.steps,
            "speed" => &mut self.speed,
            "moves_speed" => &mut self.moves_speed,
            "accepted" => &mut self.accepted,
            "attempts" => &mut self.attempts,
            "step" => &mut self.step,
            "duration_ms" => &mut self.duration_ms,
            "role_count" => &mut self.role_count,
            "scene_count" => &mut self.scene_count,
            "actor_count" => &mut self.actor_count,
            "actors_used" => &mut self.actors_used,
            "overflow_count" => &mut self.overflow_count,
            "real_actors" => &mut self.real_actors,
            "overflow_actors" => &mut self.overflow_actors,
            "constructed_actors" => &mut self.constructed_actors,
            "merges" => &mut self.merges,
            "first_role" => &mut self.first_role,
            "second_role" => &mut self.second_role,
            "actor" => &mut self.actor,
            _ => return,
        };
        *slot = Some(value);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if field.name() == "acceptance_rate" {
            self.acceptance_rate = Some(value);
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "phase" => self.phase = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "phase_start" => format_phase_start(v),
        "phase_end" => format_phase_end(v),
        "diva_pair" => format_diva_pair(v),
        "diva_unseeded" => format_diva_unseeded(),
        "progress" => format_progress(v),
        "step" => format_step(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    mark_solve_start();
    let roles = v.role_count.unwrap_or(0);
    let scenes = v.scene_count.unwrap_or(0);
    let actors = v.actor_count.unwrap_or(0);

    format!(
        "{} {} Casting │ {} roles │ {} scenes │ {} actors │ scale {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        count(roles).bright_yellow(),
        count(scenes).bright_yellow(),
        count(actors).bright_yellow(),
        calculate_problem_scale(roles as usize, actors as usize).bright_magenta()
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let used = v.actors_used.unwrap_or(0);
    let real = v.real_actors.unwrap_or(0);
    let overflow = v.overflow_actors.unwrap_or(0);
    let constructed = v.constructed_actors.unwrap_or(used);
    let merges = v.merges.unwrap_or(0);

    let overflow_text = if overflow == 0 {
        count(overflow).bright_green().to_string()
    } else {
        count(overflow).bright_red().to_string()
    };

    let mut output = format!(
        "{} {} Casting complete │ {} actors │ {} real │ {} overflow",
        format_elapsed(),
        "■".bright_cyan().bold(),
        count(used).bright_white().bold(),
        count(real).white(),
        overflow_text
    );

    if constructed > used {
        output.push_str(&format!(
            " │ {} saved by {} merges",
            count(constructed - used).bright_green(),
            count(merges).white()
        ));
    }

    output
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");

    format!(
        "{} {} {} started",
        format_elapsed(),
        "▶".bright_blue(),
        phase.white().bold()
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    let steps = v.steps.unwrap_or(0);
    let moves_speed = v.moves_speed.unwrap_or(v.speed.unwrap_or(0));
    let duration = v.duration_ms.unwrap_or(0);

    let mut output = format!(
        "{} {} {} ended │ {} │ {} steps │ {} moves/s",
        format_elapsed(),
        "◀".bright_blue(),
        phase.white().bold(),
        format_duration_ms(duration).yellow(),
        count(steps).white(),
        count(moves_speed).bright_magenta().bold(),
    );

    if let Some(accepted) = v.accepted {
        output.push_str(&format!(" │ {} accepted", count(accepted).bright_yellow()));
        if let Some(rate) = v.acceptance_rate {
            output.push_str(&format!(" ({:.1}%)", rate * 100.0));
        }
    }

    if let Some(used) = v.actors_used {
        output.push_str(&format!(" │ {} actors", count(used).bright_white()));
    }

    if let Some(overflow) = v.overflow_count.filter(|&n| n > 0) {
        output.push_str(&format!(" │ {} overflow", count(overflow).bright_red()));
    }

    output
}

fn format_diva_pair(v: &EventVisitor) -> String {
    format!(
        "{} {} Divas seeded │ role {} │ role {}",
        format_elapsed(),
        "★".bright_yellow(),
        v.first_role.unwrap_or(0).bright_white(),
        v.second_role.unwrap_or(0).bright_white()
    )
}

fn format_diva_unseeded() -> String {
    format!(
        "{} {} No compatible diva pair",
        format_elapsed(),
        "☆".yellow()
    )
}

fn format_progress(v: &EventVisitor) -> String {
    let steps = v.steps.unwrap_or(0);
    let attempts = v.attempts.unwrap_or(0);
    let speed = v.speed.unwrap_or(0);
    let used = v.actors_used.unwrap_or(0);

    format!(
        "{} {} {:>10} merges │ {:>12} attempts │ {:>12}/s │ {} actors",
        format_elapsed(),
        "⚡".bright_cyan(),
        count(steps).white(),
        count(attempts).white(),
        count(speed).bright_magenta().bold(),
        count(used).bright_white()
    )
}

fn format_step(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} Step {:>10} │ roles {} + {} → actor {} │ {} actors",
        format_elapsed(),
        "✓".bright_green(),
        count(v.step.unwrap_or(0)).bright_black(),
        v.first_role.unwrap_or(0),
        v.second_role.unwrap_or(0),
        v.actor.unwrap_or(0),
        count(v.actors_used.unwrap_or(0)).bright_black()
    )
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

// Size of the raw search space: every role could take any actor.
fn calculate_problem_scale(role_count: usize, actor_count: usize) -> String {
    if role_count == 0 || actor_count == 0 {
        return "0".to_string();
    }

    let log_scale = (role_count as f64) * (actor_count as f64).log10();
    let exponent = log_scale.floor() as i32;
    let mantissa = 10f64.powf(log_scale - exponent as f64);

    format!("{:.3} x 10^{}", mantissa, exponent)
}
