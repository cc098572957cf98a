//! Schedule command implementation.

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use cfhedge_core::calendars::{BusinessDayConvention, CalendarId};
use cfhedge_core::types::{Currency, Date, Tenor};
use cfhedge_swaps::schedule::{DateGenerationRule, Schedule};

use crate::commands::{parse_date, Context};
use crate::output::{print_header, print_output};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Effective date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub effective: Date,

    /// Termination date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub termination: Date,

    /// Payment tenor, e.g. 3M
    #[arg(short, long, default_value = "3M")]
    pub tenor: Tenor,

    /// Currency whose calendar adjusts the dates
    #[arg(long, conflicts_with = "calendar")]
    pub currency: Option<Currency>,

    /// Calendar code: TARGET, UK, US or WEEKEND
    #[arg(long)]
    pub calendar: Option<CalendarId>,

    /// Business-day convention
    #[arg(long, value_enum, default_value = "modified-following")]
    pub convention: ConventionChoice,

    /// Date generation rule
    #[arg(long, value_enum, default_value = "backward")]
    pub rule: RuleChoice,
}

/// Business-day convention choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConventionChoice {
    /// No adjustment
    Unadjusted,
    /// Following business day
    Following,
    /// Following unless it crosses a month end
    ModifiedFollowing,
    /// Preceding business day
    Preceding,
    /// Preceding unless it crosses a month start
    ModifiedPreceding,
}

impl From<ConventionChoice> for BusinessDayConvention {
    fn from(choice: ConventionChoice) -> Self {
        match choice {
            ConventionChoice::Unadjusted => BusinessDayConvention::Unadjusted,
            ConventionChoice::Following => BusinessDayConvention::Following,
            ConventionChoice::ModifiedFollowing => BusinessDayConvention::ModifiedFollowing,
            ConventionChoice::Preceding => BusinessDayConvention::Preceding,
            ConventionChoice::ModifiedPreceding => BusinessDayConvention::ModifiedPreceding,
        }
    }
}

/// Date generation rule choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RuleChoice {
    /// Roll back from the termination date
    Backward,
    /// Roll forward from the effective date
    Forward,
}

impl From<RuleChoice> for DateGenerationRule {
    fn from(choice: RuleChoice) -> Self {
        match choice {
            RuleChoice::Backward => DateGenerationRule::Backward,
            RuleChoice::Forward => DateGenerationRule::Forward,
        }
    }
}

#[derive(Debug, Clone, Serialize, Tabled)]
struct PeriodRow {
    #[tabled(rename = "#")]
    period: usize,
    #[tabled(rename = "Start")]
    start: Date,
    #[tabled(rename = "End")]
    end: Date,
    #[tabled(rename = "Days")]
    days: i64,
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, ctx: &Context) -> Result<()> {
    let calendar = match (args.calendar, args.currency) {
        (Some(calendar), _) => calendar,
        (None, Some(currency)) => currency.calendar_id(),
        (None, None) => CalendarId::WeekendsOnly,
    };
    let convention = BusinessDayConvention::from(args.convention);

    let schedule = Schedule::builder(args.effective, args.termination, args.tenor)
        .calendar(calendar)
        .convention(convention)
        .termination_convention(convention)
        .rule(args.rule.into())
        .build()?;

    let rows: Vec<PeriodRow> = schedule
        .periods()
        .enumerate()
        .map(|(i, period)| PeriodRow {
            period: i + 1,
            start: period.start,
            end: period.end,
            days: period.end - period.start,
        })
        .collect();

    print_header(
        &format!("{} schedule, {} periods, {}", args.tenor, rows.len(), calendar.code()),
        ctx.format,
    );
    print_output(&rows, ctx.format)
}
