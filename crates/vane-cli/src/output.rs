use serde::Serialize;
use vane_core::types::Application;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

const APP_HEADERS: [&str; 5] = ["NAME", "PROJECT", "HEALTH", "SYNC", "REVISION"];

/// Fixed-width table of tracked applications.
pub fn print_apps(apps: &[Application]) {
    let rows: Vec<[String; 5]> = apps
        .iter()
        .map(|app| {
            [
                app.name.clone(),
                app.project.clone(),
                app.health.to_string(),
                app.sync.to_string(),
                app.revision().unwrap_or("-").to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 5] = APP_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let render_row = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:width$}"))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", render_row(&APP_HEADERS));
    let rules: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", rules.join("  "));
    for row in &rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        println!("{}", render_row(&cells));
    }
}
