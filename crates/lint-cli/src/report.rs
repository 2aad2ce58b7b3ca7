//! Console progress output

use colored::Colorize;
use lint_core::{Error, ProjectFile, Reporter, SetupReport};

/// Prints pipeline progress to the terminal.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn installing(&self, dependencies: &[String]) {
        println!("Installing packages:\n{}", dependencies.join("\n").cyan());
        println!();
    }

    fn creating(&self, file: ProjectFile) {
        println!();
        println!("Creating {}", file.as_str().cyan());
        println!();
    }

    fn copy_failed(&self, file: ProjectFile, error: &Error) {
        eprintln!("{} {}: {}", "warning".yellow().bold(), file, error.to_string().red());
    }
}

/// Print the closing line for a finished run.
pub fn print_summary(report: &SetupReport) {
    println!("{}", summary_line(report));
}

fn summary_line(report: &SetupReport) -> String {
    let counts = format!(
        "{} package(s) installed, {} file(s) written",
        report.installed.len(),
        report.written.len()
    );
    if report.is_clean() {
        format!("{} {}", "Success!".green(), counts)
    } else {
        format!(
            "{} with {} template(s) not copied; {}",
            "Finished".yellow(),
            report.copy_failures.len(),
            counts
        )
    }
}
