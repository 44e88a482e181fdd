//! Output formatting for solver runs

use crate::runner::RunReport;
use chrono::TimeDelta;

/// Output formatter for run reports
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Format and print a run report
    pub fn print_report(&self, problem: u32, variant: &str, report: &RunReport) {
        if self.quiet {
            self.print_quiet(report);
        } else {
            self.print_full(problem, variant, report);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, report: &RunReport) {
        if let Some(first) = report.runs.first() {
            println!("{}", first.answer);
        }
        if !report.stable {
            eprintln!("Warning: answer was not stable across runs");
        }
    }

    /// Print full output with timing information
    fn print_full(&self, problem: u32, variant: &str, report: &RunReport) {
        let Some(first) = report.runs.first() else {
            return;
        };

        println!("Problem {} / {}: {}", problem, variant, first.answer);

        let count = report.runs.len();
        if count == 1 {
            println!("Solved in {}", format_duration(first.duration()));
        } else {
            let total = report.total_time();
            let average = total / count as i32;
            let fastest = report
                .runs
                .iter()
                .map(|run| run.duration())
                .min()
                .unwrap_or(TimeDelta::zero());
            println!(
                "Runs: {}, total: {}, avg: {}, fastest: {}",
                count,
                format_duration(total),
                format_duration(average),
                format_duration(fastest)
            );
        }

        if !report.stable {
            eprintln!("Warning: answer was not stable across runs");
        }
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_scale_their_unit() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-1500)), "-1.50ms");
    }
}
