// vscode-projects - find and open VS Code projects from a launcher
//
// This is the main entry point. Parses CLI args and dispatches to handlers.
// Results go to stdout, logs go to stderr.

use anyhow::{Context, Result};
use std::env;
use tracing_subscriber::EnvFilter;
use vscode_projects_lib::host::{self, ResultItem, PLUGIN_INFO};
use vscode_projects_lib::ProjectsPlugin;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let command = &args[1];

    match command.as_str() {
        "query" => handle_query(&args[2..]),
        "open" => handle_open(&args[2..]),
        "info" => handle_info(),
        "version" | "-v" | "--version" => {
            println!("vscode-projects v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "-h" | "--help" => {
            print_usage();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            Ok(())
        }
    }
}

fn handle_query(args: &[String]) -> Result<()> {
    let json = args.iter().any(|arg| arg == "--json");
    let query = args
        .iter()
        .filter(|arg| arg.as_str() != "--json")
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    let plugin = ProjectsPlugin::from_env()?;
    let mut rows: Vec<ResultItem> = Vec::new();
    plugin.handle_query(&query, &mut rows);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No projects found.");
    } else {
        for (i, row) in rows.iter().enumerate() {
            if row.subtext.is_empty() {
                println!("{:3}. {}", i + 1, row.text);
            } else {
                println!("{:3}. {:<30} {}", i + 1, row.text, row.subtext);
            }
        }
    }

    Ok(())
}

fn handle_open(args: &[String]) -> Result<()> {
    let Some(path) = args.first() else {
        eprintln!("Error: No path provided");
        return Ok(());
    };

    let plugin = ProjectsPlugin::from_env()?;
    let target = plugin.open_target(path)?;
    host::open(&target).with_context(|| format!("Failed to open {}", path))?;

    Ok(())
}

fn handle_info() -> Result<()> {
    let plugin = ProjectsPlugin::from_env()?;

    println!("{}", PLUGIN_INFO.name);
    println!("  {}", PLUGIN_INFO.description);
    println!("  Trigger:  '{}'", PLUGIN_INFO.trigger);
    println!("  Synopsis: {}", PLUGIN_INFO.synopsis);
    println!("  Requires: {}", PLUGIN_INFO.binary);

    let status = if plugin.is_installed() { "found" } else { "not found" };
    println!("  Editor:   {} ({})", plugin.editor_name(), status);

    Ok(())
}

fn print_usage() {
    println!(
        r#"vscode-projects v{} - Search and open VS Code projects

USAGE:
    vscode-projects <COMMAND> [OPTIONS]

COMMANDS:
    query <text> [--json]  Search Project Manager entries (2+ characters)
    query r [--json]       List recently opened folders
    open <path>            Open a project path
    info                   Show plugin metadata
    version                Show version
    help                   Show this help

ENVIRONMENT:
    VSCODE_PROJECTS_INCLUDE_RECENT   Set to 0 to hide recent folders
    VSCODE_PROJECTS_EDITOR           Editor executable (default: code)
    VSCODE_PROJECTS_OPEN_WITH_EDITOR Set to 1 to open with the editor instead of file://
    RUST_LOG                         Log filter, e.g. vscode_projects_lib=debug
"#,
        env!("CARGO_PKG_VERSION")
    );
}
