//! Interactive console front end for the payroll ledger.
//!
//! This module prompts for employees and their work days, then prints the
//! payroll report. All I/O goes through a [`Prompter`] so sessions can be
//! driven from stdin/stdout or from in-memory buffers.
//!
//! # Example
//!
//! ```
//! use payroll_ledger::config::PayrollConfig;
//! use payroll_ledger::console::run_session;
//! use rust_decimal::Decimal;
//!
//! let input = "1\nBob\nsalaried\n500000\n0\nq\n";
//! let mut output = Vec::new();
//! let report = run_session(input.as_bytes(), &mut output, &PayrollConfig::default()).unwrap();
//!
//! assert_eq!(report.lines[0].total_pay, Decimal::new(500_000, 0));
//! ```

mod input;
mod prompt;
mod report;
mod session;

use std::io::{BufRead, Write};

use tracing::info;

use crate::calculation::generate_report;
use crate::config::PayrollConfig;
use crate::error::PayrollResult;
use crate::models::PayrollReport;

pub use input::{
    MenuChoice, parse_amount, parse_count, parse_date, parse_hours, parse_integer,
    parse_menu_choice,
};
pub use prompt::Prompter;
pub use report::{write_banner, write_report, write_work_days};
pub use session::DataEntry;

/// Runs a full session: banner, data entry, then the payroll report.
///
/// Returns the report that was printed.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: W,
    config: &PayrollConfig,
) -> PayrollResult<PayrollReport> {
    let mut prompter = Prompter::new(input, output);

    write_banner(prompter.output(), " EMPLOYEE PAYROLL SYSTEM ")?;
    prompter.say("")?;

    let roster = DataEntry::new(&mut prompter, config).collect_roster()?;
    let report = generate_report(&roster, config);

    info!(
        report_id = %report.report_id,
        employees = report.lines.len(),
        "Payroll report generated"
    );

    write_report(prompter.output(), &report)?;
    prompter.output().flush()?;

    Ok(report)
}
