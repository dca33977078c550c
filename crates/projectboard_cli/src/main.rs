//! Line-oriented board driver.
//!
//! # Responsibility
//! - Feed stdin commands into the board as form submits and drag gestures.
//! - Print the rendered columns so the core can be exercised without a UI.

use log::info;
use projectboard_core::{
    init_logging, AppContext, BoardConfig, DropOutcome, ProjectId, ProjectStatus,
    TransitionOutcome,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

const HELP: &str = "commands:
  add <title> | <description> | <people>
  move <project-id> <active|finished>
  list
  dump
  help
  quit";

fn main() -> ExitCode {
    let config = match BoardConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(log) = &config.log {
        if let Err(err) = init_logging(log) {
            eprintln!("logging disabled: {err}");
        }
    }

    let app = AppContext::new(&config);
    let stdin = io::stdin();
    let status = match run_loop(&app, stdin.lock(), io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("io error: {err}");
            ExitCode::FAILURE
        }
    };

    info!(
        "event=board_exit module=cli status=ok projects={}",
        app.store().len()
    );
    status
}

/// Runs commands from `input` until `quit`, end of input or an I/O error.
fn run_loop(app: &AppContext, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    for line in input.lines() {
        match run_command(app, line?.trim()) {
            Flow::Continue(output) if output.is_empty() => {}
            Flow::Continue(output) => writeln!(out, "{output}")?,
            Flow::Quit => break,
        }
    }
    Ok(())
}

enum Flow {
    Continue(String),
    Quit,
}

fn run_command(app: &AppContext, line: &str) -> Flow {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let output = match command {
        "" => String::new(),
        "add" => add(app, rest),
        "move" => move_project(app, rest),
        "list" => render_board(app),
        "dump" => dump(app),
        "help" => help_text(),
        "quit" | "exit" => return Flow::Quit,
        other => format!("unknown command `{other}`\n{}", help_text()),
    };
    Flow::Continue(output)
}

fn help_text() -> String {
    format!("projectboard {}\n{HELP}", projectboard_core::core_version())
}

fn add(app: &AppContext, rest: &str) -> String {
    let mut parts = rest.splitn(3, '|').map(str::trim);
    let input = app.input();
    input.set_title(parts.next().unwrap_or_default());
    input.set_description(parts.next().unwrap_or_default());
    input.set_people(parts.next().unwrap_or_default());

    match input.submit_handler() {
        Ok(id) => format!("created {id}"),
        Err(err) => err.to_string(),
    }
}

fn move_project(app: &AppContext, rest: &str) -> String {
    let mut parts = rest.split_whitespace();
    let (Some(raw_id), Some(raw_status)) = (parts.next(), parts.next()) else {
        return "usage: move <project-id> <active|finished>".to_string();
    };
    let target = match ProjectStatus::parse(raw_status) {
        Ok(status) => status,
        Err(err) => return err.to_string(),
    };
    let Ok(id) = ProjectId::parse_str(raw_id) else {
        return format!("not a project id: {raw_id}");
    };

    match app.drag_project(id, target) {
        DropOutcome::Transitioned {
            outcome: TransitionOutcome::Moved { from, to },
            ..
        } => format!("moved {id} {from} -> {to}"),
        DropOutcome::Transitioned {
            outcome: TransitionOutcome::Unchanged,
            ..
        } => format!("{id} is already {target}"),
        DropOutcome::Transitioned {
            outcome: TransitionOutcome::NotFound,
            ..
        }
        | DropOutcome::Declined
        | DropOutcome::NoPayload
        | DropOutcome::InvalidPayload => format!("no project {id}"),
    }
}

fn render_board(app: &AppContext) -> String {
    let mut out = String::new();
    for kind in [ProjectStatus::Active, ProjectStatus::Finished] {
        let list = app.list(kind);
        out.push_str(&format!("== {} ==\n", list.heading()));
        for (project, item) in list.assigned_projects().iter().zip(list.rendered_items()) {
            out.push_str(&format!(
                "  [{}] {} ({})\n      {}\n",
                project.id(),
                item.title,
                item.persons,
                item.description
            ));
        }
    }
    out.trim_end().to_string()
}

fn dump(app: &AppContext) -> String {
    serde_json::to_string_pretty(&app.store().snapshot())
        .unwrap_or_else(|err| format!("dump failed: {err}"))
}
