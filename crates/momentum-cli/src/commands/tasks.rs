//! Handlers for the `task` command group.

use momentum_core::MomentumError;

use crate::app::AppContext;
use crate::cli::{TaskAddArgs, TaskArgs, TaskListArgs, TaskSubcommand, TaskUpdateArgs};
use crate::errors::CliError;
use crate::output::{task_json, tasks_json};
use crate::ui::theme::{styled, styles};
use crate::ui::{
    badge, blank_line, header, hint, kv, print, simple_table, Badge, Column, OutputMode,
};

pub fn handle_task(ctx: &AppContext, args: &TaskArgs) -> anyhow::Result<()> {
    match &args.command {
        TaskSubcommand::Add(add_args) => handle_add(ctx, add_args),
        TaskSubcommand::List(list_args) => handle_list(ctx, list_args),
        TaskSubcommand::Done(update_args) => handle_update(ctx, update_args, true),
        TaskSubcommand::Undo(update_args) => handle_update(ctx, update_args, false),
        TaskSubcommand::Remove(update_args) => handle_remove(ctx, update_args),
    }
}

fn handle_add(ctx: &AppContext, args: &TaskAddArgs) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;
    let task = match ledger.add_task(&args.name) {
        Ok(task) => task,
        Err(MomentumError::Validation(_)) => CliError::invalid_input("Please enter a task.").exit(),
        Err(err) => return Err(err.into()),
    };

    if ctx.quiet() {
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false)?;
    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Task Added!"));
            print(&ui_ctx, &kv(&ui_ctx, "Task", &task.name));
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("task={}", task.name);
        }
    }

    Ok(())
}

fn handle_list(ctx: &AppContext, args: &TaskListArgs) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let tasks = ledger.list_tasks()?;

    let ui_ctx = ctx.ui_context(args.json)?;
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&tasks_json(&tasks))?);
        return Ok(());
    }

    if ctx.quiet() {
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            let done = tasks.iter().filter(|task| task.is_completed).count();
            let summary = format!("{} of {} done", done, tasks.len());
            print(&ui_ctx, &header(&ui_ctx, "tasks", Some(&summary)));
            blank_line(&ui_ctx);

            if tasks.is_empty() {
                print(&ui_ctx, "No tasks yet.");
                print(&ui_ctx, &hint(&ui_ctx, "momentum task add <NAME>"));
                return Ok(());
            }

            let columns = [Column::new("Status"), Column::new("Task")];
            let rows: Vec<Vec<String>> = tasks
                .iter()
                .map(|task| {
                    let marker = if task.is_completed {
                        if ui_ctx.unicode {
                            "[\u{2713}]"
                        } else {
                            "[x]"
                        }
                    } else {
                        "[ ]"
                    };
                    let marker = if task.is_completed {
                        styled(marker, styles::success(), ui_ctx.color)
                    } else {
                        marker.to_string()
                    };
                    vec![marker, task.name.clone()]
                })
                .collect();
            print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
        }
        OutputMode::Plain | OutputMode::Json => {
            for task in &tasks {
                println!("task={} done={}", task.name, task.is_completed);
            }
        }
    }

    Ok(())
}

fn handle_update(ctx: &AppContext, args: &TaskUpdateArgs, completed: bool) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;
    let updated = ledger.set_task_completion(&args.name, completed)?;

    let ui_ctx = ctx.ui_context(args.json)?;
    let Some(task) = updated else {
        return report_unchanged(ctx, &ui_ctx);
    };

    if ui_ctx.mode.is_json() {
        let status = if completed { "completed" } else { "unmarked" };
        let payload = serde_json::json!({
            "status": status,
            "task": task_json(&task),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if ctx.quiet() {
        return Ok(());
    }

    let message = if completed {
        "Task Completed!"
    } else {
        "Task Unmarked."
    };
    if ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, message));
        print(&ui_ctx, &kv(&ui_ctx, "Task", &task.name));
    } else {
        let status = if completed { "completed" } else { "unmarked" };
        println!("status={}", status);
        println!("task={}", task.name);
    }

    Ok(())
}

fn handle_remove(ctx: &AppContext, args: &TaskUpdateArgs) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;
    let removed = ledger.delete_task(&args.name)?;

    let ui_ctx = ctx.ui_context(args.json)?;
    if removed == 0 {
        return report_unchanged(ctx, &ui_ctx);
    }

    if ui_ctx.mode.is_json() {
        let payload = serde_json::json!({
            "status": "removed",
            "removed": removed,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if ctx.quiet() {
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Task removed."));
        if removed > 1 {
            print(&ui_ctx, &kv(&ui_ctx, "Removed", &removed.to_string()));
        }
    } else {
        println!("status=removed");
        println!("removed={}", removed);
    }

    Ok(())
}

/// A name that matched nothing leaves the list untouched; say so and
/// exit cleanly.
fn report_unchanged(ctx: &AppContext, ui_ctx: &crate::ui::UiContext) -> anyhow::Result<()> {
    if ui_ctx.mode.is_json() {
        let payload = serde_json::json!({ "status": "unchanged" });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if ctx.quiet() {
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() {
        print(ui_ctx, &badge(ui_ctx, Badge::Info, "No matching task."));
        print(ui_ctx, &hint(ui_ctx, "momentum task list"));
    } else {
        println!("status=unchanged");
    }

    Ok(())
}
