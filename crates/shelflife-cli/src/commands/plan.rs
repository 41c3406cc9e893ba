//! Plan command - expiry status and reminder schedule for a date.

use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::Args;
use serde::Serialize;

use shelflife_core::models::config::validate_reminder_days;
use shelflife_core::reminders::{reminder_message, REMINDER_TITLE};
use shelflife_core::status::describe_expiry;
use shelflife_core::{
    days_until_expiry, format_for_display, is_auto_deleted, next_recurrence, plan_reminders,
    ItemStatus, PlannedReminder, ReminderTime,
};

use super::extract::OutputFormat;
use super::{load_config, parse_date_arg};

/// Arguments for the plan command.
#[derive(Args)]
pub struct PlanArgs {
    /// Expiration date (YYYY-MM-DD)
    #[arg(value_parser = parse_date_arg)]
    date: NaiveDate,

    /// Item name used in reminder messages
    #[arg(short, long, default_value = "Item")]
    name: String,

    /// Days before expiry to remind on (default: from config)
    #[arg(short, long, value_delimiter = ',')]
    days: Option<Vec<u32>>,

    /// Time of day for reminders, HH:MM (default: from config)
    #[arg(long)]
    at: Option<ReminderTime>,

    /// Item recurs every N days; an expired date rolls forward to the next period
    #[arg(long, value_name = "N")]
    every: Option<u32>,

    /// Plan as of the start of this date instead of now (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    today: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct Plan {
    name: String,
    date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    recurs_every: Option<u32>,
    days_until: i64,
    status: ItemStatus,
    auto_delete: bool,
    sound: bool,
    reminders: Vec<PlannedMessage>,
}

#[derive(Debug, Serialize)]
struct PlannedMessage {
    #[serde(flatten)]
    reminder: PlannedReminder,
    title: &'static str,
    body: String,
}

pub async fn run(args: PlanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let now: NaiveDateTime = args
        .today
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .unwrap_or_else(|| Local::now().naive_local());
    let today = now.date();

    let days_before = match args.days {
        Some(days) => {
            validate_reminder_days(&days)?;
            days
        }
        None => config.reminders.days_before.clone(),
    };
    let time = args.at.unwrap_or(config.reminders.time);

    let auto_delete = is_auto_deleted(args.date, today, config.status.auto_delete_expired_days);
    let date = match args.every {
        Some(every) => next_recurrence(args.date, every, today),
        None => args.date,
    };

    let days_until = days_until_expiry(date, today);
    let reminders = plan_reminders(date, &days_before, time, now)?
        .into_iter()
        .map(|reminder| PlannedMessage {
            body: reminder_message(&args.name, reminder.days_before),
            title: REMINDER_TITLE,
            reminder,
        })
        .collect();

    let plan = Plan {
        name: args.name,
        date,
        recurs_every: args.every.filter(|&every| every > 0),
        days_until,
        status: ItemStatus::from_days(days_until, config.status.soon_within_days),
        auto_delete,
        sound: config.reminders.sound,
        reminders,
    };

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string(&plan)?,
        OutputFormat::Csv => format_csv(&plan)?,
        OutputFormat::Text => format_text(&plan),
    };
    println!("{}", output.trim_end());

    Ok(())
}

fn format_csv(plan: &Plan) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["days_before", "fire_at", "seconds_until", "body"])?;
    for planned in &plan.reminders {
        wtr.write_record([
            planned.reminder.days_before.to_string(),
            planned.reminder.fire_at.format("%Y-%m-%d %H:%M").to_string(),
            planned.reminder.seconds_until.to_string(),
            planned.body.clone(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(plan: &Plan) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}: {}\n", plan.name, format_for_display(plan.date)));
    output.push_str(&format!(
        "Status: {} ({})\n",
        plan.status.badge(plan.days_until),
        describe_expiry(plan.days_until)
    ));
    if let Some(every) = plan.recurs_every {
        output.push_str(&format!("Recurs every {}\n", plural_days(every)));
    }
    if plan.auto_delete {
        output.push_str("Past the auto-delete cutoff\n");
    }

    if plan.reminders.is_empty() {
        output.push_str("No upcoming reminders\n");
    } else {
        output.push_str("Reminders:\n");
        for planned in &plan.reminders {
            output.push_str(&format!(
                "  {}  {}\n",
                planned.reminder.fire_at.format("%Y-%m-%d %H:%M"),
                planned.body
            ));
        }
    }

    output
}

fn plural_days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", n)
    }
}
