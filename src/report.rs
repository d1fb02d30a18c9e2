//! Plain-text rendering of search progress and schedules.

use crate::ga::{GenerationStats, RunResult};
use crate::schedule::Schedule;

const RULE_WIDTH: usize = 120;
const HEADER: &str = "Date\t\t|\tTeam1\t\t\t|\tTeam2\t\t\t|\tLocation";

/// One-line summary of a generation's best and worst schedule.
pub fn generation_summary(stats: &GenerationStats) -> String {
    format!(
        "generation {}: best fitness = {:.5} ({} violations), worst fitness = {:.5} ({} violations)",
        stats.generation,
        stats.best_fitness,
        stats.best_violations,
        stats.worst_fitness,
        stats.worst_violations,
    )
}

/// Renders a schedule as a table: header, rule, one row per match.
pub fn schedule_table(schedule: &Schedule) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');
    out.push_str(&"*".repeat(RULE_WIDTH));
    out.push('\n');
    for m in schedule.matches() {
        out.push_str(&m.to_string());
        out.push('\n');
    }
    out
}

/// Final summary of a run, followed by the violation breakdown and the
/// best schedule's table.
pub fn run_summary(result: &RunResult) -> String {
    let status = if result.converged {
        "converged"
    } else if result.cancelled {
        "cancelled"
    } else {
        "generation limit reached"
    };
    let v = &result.violations;

    let mut out = format!(
        "{status} after {} generations: fitness = {:.5}, violations = {}\n",
        result.generations,
        result.best_fitness,
        v.total()
    );
    out.push_str(&format!(
        "  weather {}, same day {}, consecutive day {}, duplicate {}, appearances {}, venue hosting {}, home balance {}",
        v.weather,
        v.same_day,
        v.consecutive_day,
        v.duplicate_fixture,
        v.appearances,
        v.venue_hosting,
        v.home_balance,
    ));
    out.push_str("\n\n");
    out.push_str(&schedule_table(&result.best));
    out
}
