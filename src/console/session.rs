//! Interactive data-entry session.
//!
//! Collects a roster of employees: for each one the name, pay type, rate or
//! salary, an initial batch of work days and then an add/remove editing
//! loop. The roster is returned in entry order.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeType, WorkDate};

use super::input::{
    MenuChoice, parse_amount, parse_count, parse_date, parse_hours, parse_integer,
    parse_menu_choice,
};
use super::prompt::Prompter;
use super::report::write_work_days;

/// Runs the data-entry part of a session and returns the roster.
pub struct DataEntry<'a, R, W> {
    prompter: &'a mut Prompter<R, W>,
    config: &'a PayrollConfig,
}

impl<'a, R: BufRead, W: Write> DataEntry<'a, R, W> {
    /// Creates a data-entry session over a prompter.
    pub fn new(prompter: &'a mut Prompter<R, W>, config: &'a PayrollConfig) -> Self {
        Self { prompter, config }
    }

    /// Asks for the number of employees and enters each one.
    pub fn collect_roster(&mut self) -> PayrollResult<Vec<Employee>> {
        let count = self
            .prompter
            .ask_with("Enter number of employees: ", |line| {
                parse_count(line, "number of employees")
            })?;

        let mut roster = Vec::new();
        for position in 1..=count {
            let mut employee = self.enter_employee(position)?;
            self.enter_initial_work_days(&mut employee)?;
            self.edit_work_days(&mut employee)?;

            info!(
                position,
                name = %employee.name(),
                employee_type = %employee.employee_type(),
                work_days = employee.work_days().len(),
                "Employee entered"
            );
            roster.push(employee);
        }

        Ok(roster)
    }

    /// Enters one employee's name, type and rate or salary.
    ///
    /// An unknown type skips the answers given so far and asks for the same
    /// employee again.
    fn enter_employee(&mut self, position: usize) -> PayrollResult<Employee> {
        loop {
            self.prompter.say("")?;
            self.prompter
                .say(&format!("--- EMPLOYEE #{} DATA ENTRY ---", position))?;

            let name = self.prompter.ask_line("Enter name of employee: ")?;
            let type_label = self.prompter.ask_line("Enter type (hourly/salaried): ")?;

            let employee_type = match type_label.parse::<EmployeeType>() {
                Ok(employee_type) => employee_type,
                Err(PayrollError::UnknownEmployeeType { label }) => {
                    debug!(label = %label, "Unknown employee type entered");
                    self.prompter.say("Invalid type. Skipping employee.")?;
                    continue;
                }
                Err(other) => return Err(other),
            };

            let currency = &self.config.currency;
            let amount = match employee_type {
                EmployeeType::Hourly => self.prompter.ask_with(
                    &format!("Enter hourly rate ({}): ", currency),
                    |line| parse_amount(line, "hourly rate"),
                )?,
                EmployeeType::Salaried => self.prompter.ask_with(
                    &format!("Enter monthly salary ({}): ", currency),
                    |line| parse_amount(line, "monthly salary"),
                )?,
            };

            return Ok(Employee::new(name, employee_type, amount));
        }
    }

    fn enter_initial_work_days(&mut self, employee: &mut Employee) -> PayrollResult<()> {
        let count = self.prompter.ask_with(
            &format!("Enter number of workdays for {}: ", employee.name()),
            |line| parse_count(line, "number of workdays"),
        )?;

        self.prompter.say("")?;
        self.prompter.say("-- WORKDAY ENTRIES --")?;
        for day in 1..=count {
            let date = self.prompter.ask_with(
                &format!("  WorkDay {} - Enter date (dd mm yyyy): ", day),
                parse_date,
            )?;
            let hours = self
                .prompter
                .ask_with("  Enter hours worked: ", parse_hours)?;
            record_work_day(employee, date, hours);
        }
        Ok(())
    }

    fn edit_work_days(&mut self, employee: &mut Employee) -> PayrollResult<()> {
        loop {
            self.prompter.say("")?;
            self.prompter
                .say(&format!("Current workdays for {}:", employee.name()))?;
            write_work_days(self.prompter.output(), employee)?;

            self.prompter.say("")?;
            self.prompter
                .say(&format!("Options for {}:", employee.name()))?;
            self.prompter.say("  a - Add a workday")?;
            self.prompter.say("  r - Remove a workday")?;
            self.prompter.say("  q - Quit editing workdays")?;
            let answer = self.prompter.ask_line("Enter choice (a/r/q): ")?;

            match parse_menu_choice(&answer) {
                Some(MenuChoice::Add) => self.add_work_day(employee)?,
                Some(MenuChoice::Remove) => self.remove_work_day(employee)?,
                Some(MenuChoice::Quit) => return Ok(()),
                None => self
                    .prompter
                    .say("Invalid choice. Please enter a, r, or q.")?,
            }
        }
    }

    fn add_work_day(&mut self, employee: &mut Employee) -> PayrollResult<()> {
        let date: WorkDate = self
            .prompter
            .ask_with("Enter date to add (dd mm yyyy): ", parse_date)?;
        let hours = self.prompter.ask_with("Enter hours worked: ", parse_hours)?;

        record_work_day(employee, date, hours);
        self.prompter.say("Workday added.")
    }

    fn remove_work_day(&mut self, employee: &mut Employee) -> PayrollResult<()> {
        if employee.work_days().is_empty() {
            return self.prompter.say("No workdays to remove.");
        }

        let index = self
            .prompter
            .ask_with("Enter index of workday to remove: ", |line| {
                parse_integer(line, "index")
            })?;

        let removed = usize::try_from(index)
            .ok()
            .and_then(|i| employee.remove_work_day(i));

        match removed {
            Some(entry) => {
                debug!(name = %employee.name(), index, date = %entry.date, "Work day removed");
                self.prompter.say("Workday removed.")
            }
            None => self.prompter.say("Invalid index."),
        }
    }
}

/// Appends a work day, noting dates that are not on the calendar.
fn record_work_day(employee: &mut Employee, date: WorkDate, hours: i32) {
    if date.calendar_date().is_none() {
        debug!(name = %employee.name(), date = %date, "Work day date is not a calendar date");
    }
    employee.add_work_day(date, hours);
    debug!(name = %employee.name(), date = %date, hours, "Work day added");
}
