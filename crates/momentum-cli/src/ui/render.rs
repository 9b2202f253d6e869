//! Output builders shared by every command.

use comfy_table::{Attribute, Cell, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};

/// Key form used on plain-mode lines: lowercased, spaces to underscores.
fn plain_key(key: &str) -> String {
    key.to_lowercase().replace(' ', "_")
}

/// One-line banner naming the command.
///
/// Pretty mode: "Momentum · command (context)"
/// Plain mode: "momentum command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Json => String::new(),
        OutputMode::Plain => format!("momentum {}", command),
        OutputMode::Pretty => {
            let name = styled("Momentum", styles::bold(), ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", name, command, c),
                None => format!("{} \u{00B7} {}", name, command),
            }
        }
    }
}

/// Badge tag plus an optional message after it.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let tag = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        tag
    } else {
        format!("{} {}", tag, message)
    }
}

/// A labelled value.
///
/// Pretty mode: "Key: value" with the key dimmed
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", label, value)
    } else {
        format!("{}={}", plain_key(key), value)
    }
}

/// Suggestion line pointing at the next command to run.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Static progress meter.
///
/// Pretty mode: "Label: [========            ] 12 / 30 (40%)"
/// Plain mode: "label=12/30"
pub fn meter(ctx: &UiContext, label: &str, value: u64, max: u64, percent: u32) -> String {
    if !ctx.mode.is_pretty() {
        return format!("{}={}/{}", plain_key(label), value, max);
    }

    // Narrow terminals get a narrower bar.
    let slots: u64 = if ctx.width < 60 { 10 } else { 20 };
    let filled = match max {
        0 => 0,
        m => (slots * value / m).min(slots),
    } as usize;
    let gap = slots as usize - filled;

    let label_text = styled(&format!("{}:", label), styles::dim(), ctx.color);
    format!(
        "{} [{}{}] {} / {} ({}%)",
        label_text,
        "=".repeat(filled),
        " ".repeat(gap),
        value,
        max,
        percent
    )
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Borderless table for short lists like the day's tasks.
///
/// Plain mode drops the header and joins cells with single spaces.
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    table.load_preset(comfy_table::presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    // Dim the header through comfy-table itself so its width math sees
    // the bare text.
    table.set_header(
        columns
            .iter()
            .map(|c| {
                let cell = Cell::new(c.header);
                if ctx.color {
                    cell.add_attribute(Attribute::Dim)
                } else {
                    cell
                }
            })
            .collect::<Vec<_>>(),
    );

    for idx in 0..columns.len() {
        if let Some(col) = table.column_mut(idx) {
            col.set_padding((0, 2));
        }
    }

    for row in rows {
        table.add_row(row);
    }

    table.to_string()
}

/// Write a line to stdout unless the run is in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Spacer between pretty-mode blocks; other modes stay compact.
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}
