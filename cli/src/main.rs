mod listing;
mod logging;
mod tui;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tasklist_core::{
    resolve_data_dir, Config, Controller, FileTaskRepository, FilterMode, Intent, Notice, Task,
    TaskId, TaskStore,
};
use tracing::info;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "A small task list that remembers", long_about = None)]
struct Cli {
    /// Directory holding tasks and config.toml (default: ~/.tasklist)
    #[arg(long, global = true, env = "TASKLIST_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Add a new task (usage: add Buy milk)
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Replace the text of a task
    Edit {
        id: TaskId,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Mark a task completed, or pending again
    Toggle { id: TaskId },
    /// Delete a task
    Delete { id: TaskId },
    /// List tasks
    List {
        /// all, completed or pending (anything else lists all)
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Open the Terminal User Interface
    Tui,
}

type FileController = Controller<FileTaskRepository>;

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir)?;
    let config = Config::load(&data_dir)?;
    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    let _log_guard = logging::init(&config.log_level, &data_dir, interactive)?;
    info!(data_dir = %data_dir.display(), "starting");

    let repo = FileTaskRepository::new(&data_dir, &config.tasks_file)?;
    let mut controller = Controller::new(TaskStore::open(repo), config.default_filter);

    match cli.command {
        Some(Commands::Add { text }) => {
            if let Some(task) = apply(&mut controller, Intent::Add(text.join(" ")))? {
                println!("Task added: {} (ID: {})", task.text, task.id);
            }
        }
        Some(Commands::Edit { id, text }) => {
            if let Some(task) = apply(&mut controller, Intent::Update(id, text.join(" ")))? {
                println!("Task updated: {} (ID: {})", task.text, task.id);
            }
        }
        Some(Commands::Toggle { id }) => {
            if let Some(task) = apply(&mut controller, Intent::Toggle(id))? {
                let state = if task.completed { "completed" } else { "pending" };
                println!("Task {} marked {}", task.id, state);
            }
        }
        Some(Commands::Delete { id }) => {
            apply(&mut controller, Intent::Delete(id))?;
            println!("Task {} deleted", id);
        }
        Some(Commands::List { filter }) => {
            if let Some(filter) = filter {
                apply(&mut controller, Intent::SetFilter(FilterMode::parse_lenient(&filter)))?;
            }
            println!("{}", listing::render(&controller.visible()));
        }
        Some(Commands::Tui) | None => {
            tui::run(controller)?;
        }
    }
    Ok(())
}

fn apply(controller: &mut FileController, intent: Intent) -> Result<Option<Task>> {
    let task = controller.dispatch(intent)?;
    if let Some(Notice::Warning(msg)) = controller.notice() {
        eprintln!("Warning: {msg}");
    }
    Ok(task)
}
