use std::path::{Path, PathBuf};

use amaisosu_backup::{
    BackupReport, PlannedMove, AUXILIARY_LOADER_DIR, AUXILIARY_LOADER_FILE, KNOWN_DIRECTORIES,
    KNOWN_FILES,
};
use anstyle::{AnsiColor, Effects, Style};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum OutputStyle {
    Plain,
    Rich,
}

pub(crate) fn resolve_output_style(stdout_is_tty: bool) -> OutputStyle {
    if stdout_is_tty {
        OutputStyle::Rich
    } else {
        OutputStyle::Plain
    }
}

pub(crate) fn render_status_line(style: OutputStyle, status: &str, message: &str) -> String {
    match style {
        OutputStyle::Plain => message.to_string(),
        OutputStyle::Rich => format!("{} {message}", status_badge(status)),
    }
}

fn status_badge(status: &str) -> &'static str {
    match status {
        "ok" => "[OK]",
        "warn" => "[WARN]",
        "err" => "[ERR]",
        _ => "[..]",
    }
}

fn render_section_header(style: OutputStyle, title: &str) -> Option<String> {
    match style {
        OutputStyle::Plain => None,
        OutputStyle::Rich => Some(colorize(section_style(), &format!("== {title} =="))),
    }
}

fn section_style() -> Style {
    Style::new()
        .fg_color(Some(AnsiColor::BrightBlue.into()))
        .effects(Effects::BOLD)
}

fn colorize(style: Style, text: &str) -> String {
    format!("{}{}{}", style.render(), text, style.render_reset())
}

pub(crate) fn format_backup_report_lines(
    report: &BackupReport,
    style: OutputStyle,
) -> Vec<String> {
    if !report.kept {
        return vec![render_status_line(
            style,
            "ok",
            "nothing to back up; installation is clean",
        )];
    }

    let mut lines = Vec::new();
    if let Some(header) = render_section_header(style, "backup") {
        lines.push(header);
    }
    for entry in &report.moved {
        lines.push(render_status_line(
            style,
            "..",
            &format!(
                "moved {} {} -> {}",
                entry.kind.as_str(),
                entry.source.display(),
                entry.target.display()
            ),
        ));
    }
    lines.push(render_status_line(
        style,
        "ok",
        &format!(
            "backed up {} entr{} to {}",
            report.moved.len(),
            if report.moved.len() == 1 { "y" } else { "ies" },
            report.backup_dir.display()
        ),
    ));
    lines
}

pub(crate) fn format_plan_lines(
    root: &Path,
    plan: &[PlannedMove],
    style: OutputStyle,
) -> Vec<String> {
    if plan.is_empty() {
        return vec![render_status_line(
            style,
            "ok",
            &format!("nothing to back up in {}", root.display()),
        )];
    }

    let mut lines = Vec::new();
    if let Some(header) = render_section_header(style, "dry run") {
        lines.push(header);
    }
    for step in plan {
        lines.push(render_status_line(
            style,
            "..",
            &format!(
                "would move {} {} -> <backup>/{}",
                step.kind.as_str(),
                step.source.display(),
                step.target.display()
            ),
        ));
    }
    lines
}

pub(crate) fn format_backup_list_lines(dirs: &[PathBuf]) -> Vec<String> {
    if dirs.is_empty() {
        return vec!["No backups found".to_string()];
    }
    dirs.iter().map(|dir| dir.display().to_string()).collect()
}

pub(crate) fn format_manifest_lines() -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("files:".to_string());
    lines.extend(KNOWN_FILES.iter().map(|name| format!("  {name}")));
    lines.push("directories:".to_string());
    lines.extend(KNOWN_DIRECTORIES.iter().map(|name| format!("  {name}/")));
    lines.push("auxiliary:".to_string());
    lines.push(format!(
        "  {AUXILIARY_LOADER_DIR}/{AUXILIARY_LOADER_FILE} -> {AUXILIARY_LOADER_FILE}"
    ));
    lines
}
