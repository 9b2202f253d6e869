//! Handlers for the `habit` command group.

use dialoguer::Confirm;

use momentum_core::ledger::MarkOutcome;
use momentum_core::{milestone_message, MomentumError, MAX_PROGRESS};

use crate::app::AppContext;
use crate::cli::{
    HabitAddArgs, HabitArgs, HabitClearArgs, HabitDoneArgs, HabitListArgs, HabitResetArgs,
    HabitSubcommand,
};
use crate::clock;
use crate::errors::CliError;
use crate::output::habits_json;
use crate::ui::theme::{styled, styles, BULLET};
use crate::ui::{badge, blank_line, header, hint, kv, print, Badge, OutputMode};

pub fn handle_habit(ctx: &AppContext, args: &HabitArgs) -> anyhow::Result<()> {
    match &args.command {
        HabitSubcommand::Add(add_args) => handle_add(ctx, add_args),
        HabitSubcommand::List(list_args) => handle_list(ctx, list_args),
        HabitSubcommand::Done(done_args) => handle_done(ctx, done_args),
        HabitSubcommand::Reset(reset_args) => handle_reset(ctx, reset_args),
        HabitSubcommand::Clear(clear_args) => handle_clear(ctx, clear_args),
    }
}

fn handle_add(ctx: &AppContext, args: &HabitAddArgs) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;
    let habit = match ledger.add_habit(&args.name) {
        Ok(habit) => habit,
        Err(MomentumError::Validation(_)) => {
            CliError::invalid_input("Please enter a habit.").exit()
        }
        Err(err) => return Err(err.into()),
    };

    if ctx.quiet() {
        return Ok(());
    }

    let ui_ctx = ctx.ui_context(false)?;
    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Habit Committed!"));
            print(&ui_ctx, &kv(&ui_ctx, "Habit", &habit.name));
            blank_line(&ui_ctx);
            print(
                &ui_ctx,
                &hint(
                    &ui_ctx,
                    "momentum habit list  \u{00B7}  momentum habit done",
                ),
            );
        }
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            println!("habit={}", habit.name);
        }
    }

    Ok(())
}

fn handle_list(ctx: &AppContext, args: &HabitListArgs) -> anyhow::Result<()> {
    let ledger = ctx.open_ledger()?;
    let habits = ledger.list_habits()?;
    let counters = ledger.counters()?;

    let ui_ctx = ctx.ui_context(args.json)?;
    if ui_ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&habits_json(&habits, counters))?
        );
        return Ok(());
    }

    if ctx.quiet() {
        return Ok(());
    }

    match ui_ctx.mode {
        OutputMode::Pretty => {
            print(&ui_ctx, &header(&ui_ctx, "habits", None));
            print(
                &ui_ctx,
                &styled(
                    &clock::banner(chrono::Local::now()),
                    styles::dim(),
                    ui_ctx.color,
                ),
            );
            blank_line(&ui_ctx);

            if habits.is_empty() {
                print(&ui_ctx, "No habits yet.");
                print(&ui_ctx, &hint(&ui_ctx, "momentum habit add <NAME>"));
            } else {
                // Newest at the top, the way entries stack on screen.
                for habit in habits.iter().rev() {
                    println!("{} {}", BULLET.get(ui_ctx.unicode), habit.name);
                }
            }

            blank_line(&ui_ctx);
            print(
                &ui_ctx,
                &kv(
                    &ui_ctx,
                    "Days of Consistency",
                    &format!("{} / {}", counters.progress, MAX_PROGRESS),
                ),
            );
            print(
                &ui_ctx,
                &kv(
                    &ui_ctx,
                    "Current Momentum",
                    &format!("{} Days", counters.streak),
                ),
            );
        }
        OutputMode::Plain | OutputMode::Json => {
            for habit in &habits {
                println!("habit={}", habit.name);
            }
            println!("progress={}", counters.progress);
            println!("streak={}", counters.streak);
        }
    }

    Ok(())
}

fn handle_done(ctx: &AppContext, args: &HabitDoneArgs) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;
    let outcome = ledger.mark_habit_done()?;
    let ui_ctx = ctx.ui_context(args.json)?;

    match outcome {
        MarkOutcome::NoHabits => CliError::nothing_to_do(
            "No habits to mark as done!",
            "Run `momentum habit add <NAME>` to commit to one first.",
        )
        .exit(),
        MarkOutcome::GoalComplete => {
            if ui_ctx.mode.is_json() {
                let payload = serde_json::json!({ "status": "goal_complete" });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else if !ctx.quiet() {
                if ui_ctx.mode.is_pretty() {
                    print(
                        &ui_ctx,
                        &badge(
                            &ui_ctx,
                            Badge::Info,
                            "Monthly goal complete! Consider a Fresh Start.",
                        ),
                    );
                    print(&ui_ctx, &hint(&ui_ctx, "momentum habit reset"));
                } else {
                    println!("status=goal_complete");
                }
            }
        }
        MarkOutcome::Advanced { progress, streak } => {
            let milestone = milestone_message(streak);

            if ui_ctx.mode.is_json() {
                let payload = serde_json::json!({
                    "status": "advanced",
                    "progress": progress,
                    "streak": streak,
                    "milestone": milestone,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else if !ctx.quiet() {
                if ui_ctx.mode.is_pretty() {
                    print(
                        &ui_ctx,
                        &badge(&ui_ctx, Badge::Ok, "Habit Achieved! Keep the momentum!"),
                    );
                    print(
                        &ui_ctx,
                        &kv(
                            &ui_ctx,
                            "Days of Consistency",
                            &format!("{} / {}", progress, MAX_PROGRESS),
                        ),
                    );
                    print(
                        &ui_ctx,
                        &kv(&ui_ctx, "Current Momentum", &format!("{} Days", streak)),
                    );
                    if let Some(message) = milestone {
                        blank_line(&ui_ctx);
                        print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Milestone Unlocked!"));
                        print(&ui_ctx, message);
                    }
                } else {
                    println!("status=advanced");
                    println!("progress={}", progress);
                    println!("streak={}", streak);
                    if let Some(message) = milestone {
                        println!("milestone={}", message);
                    }
                }
            }
        }
    }

    Ok(())
}

fn handle_reset(ctx: &AppContext, args: &HabitResetArgs) -> anyhow::Result<()> {
    let mut ledger = ctx.open_ledger()?;
    ledger.reset_progress()?;

    let ui_ctx = ctx.ui_context(args.json)?;
    if ui_ctx.mode.is_json() {
        let payload = serde_json::json!({ "status": "reset" });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if ctx.quiet() {
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() {
        print(
            &ui_ctx,
            &badge(
                &ui_ctx,
                Badge::Ok,
                "New Month, Fresh Start! Progress Reset.",
            ),
        );
    } else {
        println!("status=reset");
    }

    Ok(())
}

fn handle_clear(ctx: &AppContext, args: &HabitClearArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json)?;

    if !args.yes {
        if !ui_ctx.is_interactive() {
            return Err(anyhow::anyhow!(
                "Refusing to delete all habits without confirmation; pass --yes to proceed"
            ));
        }
        let confirmed = Confirm::new()
            .with_prompt("Delete all habits and reset progress?")
            .default(false)
            .interact()
            .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))?;
        if !confirmed {
            if !ctx.quiet() && !ui_ctx.mode.is_json() {
                print(&ui_ctx, &badge(&ui_ctx, Badge::Warn, "Aborted."));
            }
            return Ok(());
        }
    }

    let mut ledger = ctx.open_ledger()?;
    ledger.delete_all_habits()?;

    if ui_ctx.mode.is_json() {
        let payload = serde_json::json!({ "status": "cleared" });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if ctx.quiet() {
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "All Habits Cleared!"));
    } else {
        println!("status=cleared");
    }

    Ok(())
}
