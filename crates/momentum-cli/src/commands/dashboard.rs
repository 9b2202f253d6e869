//! Handler for the `dashboard` command.

use crate::app::AppContext;
use crate::cli::DashboardArgs;
use crate::output::dashboard_json;
use crate::ui::{blank_line, header, meter, print, OutputMode};

pub fn handle_dashboard(ctx: &AppContext, args: &DashboardArgs) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let habit = ledger.habit_progress()?;
    let tasks = ledger.task_progress()?;

    let ui_ctx = ctx.ui_context(args.json)?;
    if ui_ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&dashboard_json(&habit, &tasks))?
        );
        return Ok(());
    }

    if ctx.quiet() {
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(&ui_ctx, &header(&ui_ctx, "dashboard", None));
            blank_line(&ui_ctx);
            print(
                &ui_ctx,
                &meter(
                    &ui_ctx,
                    "Habit Days Tracked",
                    u64::from(habit.progress),
                    u64::from(habit.max),
                    habit.percent,
                ),
            );
            print(
                &ui_ctx,
                &meter(
                    &ui_ctx,
                    "Tasks Completed",
                    tasks.completed as u64,
                    tasks.total as u64,
                    tasks.percent,
                ),
            );
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("habit_progress={}/{}", habit.progress, habit.max);
            println!("habit_percent={}", habit.percent);
            println!("tasks_completed={}/{}", tasks.completed, tasks.total);
            println!("tasks_percent={}", tasks.percent);
        }
    }

    Ok(())
}
