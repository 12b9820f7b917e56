//! Command implementations for the CLI interface.
//!
//! Each handler takes the loaded collection, mutates it, persists through the
//! store, and prints a success line. Handlers return `Result` instead of
//! exiting; exit-code mapping lives in `main`.

use chrono::Utc;
use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::error::{Error, Result};
use crate::fields::Status;
use crate::store::{self, Store};
use crate::task::Task;

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task.
    Add {
        /// Task description.
        description: String,
    },

    /// Replace the description of an existing task.
    Update {
        /// Task ID.
        id: u64,
        /// New description.
        description: String,
    },

    /// Delete a task by ID.
    Delete {
        /// Task ID.
        id: u64,
    },

    /// Mark a task as in progress.
    MarkInProgress {
        /// Task ID.
        id: u64,
    },

    /// Mark a task as done.
    MarkDone {
        /// Task ID.
        id: u64,
    },

    /// List tasks, optionally filtered by status.
    List {
        /// Status filter: todo | in-progress | done.
        #[arg(value_enum)]
        status: Option<Status>,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Add a new task and print its assigned ID.
pub fn cmd_add(store: &Store, tasks: &mut Vec<Task>, description: String) -> Result<()> {
    // Keeps listing order ascending by id even if the file was edited by hand.
    tasks.sort_unstable_by_key(|t| t.id);
    let id = store::next_id(tasks);
    tasks.push(Task::new(id, description));
    store.save(tasks)?;
    println!("Task added successfully (ID: {id})");
    Ok(())
}

/// Replace a task's description.
pub fn cmd_update(store: &Store, tasks: &mut [Task], id: u64, description: String) -> Result<()> {
    let task = store::get_mut(tasks, id).ok_or(Error::NotFound(id))?;
    task.description = description;
    task.updated_at = Utc::now();
    store.save(tasks)?;
    println!("Task with ID {id} updated successfully!");
    Ok(())
}

/// Remove a task from the collection.
pub fn cmd_delete(store: &Store, tasks: &mut Vec<Task>, id: u64) -> Result<()> {
    let idx = tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or(Error::NotFound(id))?;
    tasks.remove(idx);
    store.save(tasks)?;
    println!("Task with ID {id} deleted successfully!");
    Ok(())
}

/// Move a task to in-progress. Rejected if it already is.
pub fn cmd_mark_in_progress(store: &Store, tasks: &mut [Task], id: u64) -> Result<()> {
    let task = store::get_mut(tasks, id).ok_or(Error::NotFound(id))?;
    if task.status == Status::InProgress {
        return Err(Error::State {
            id,
            state: "in progress",
        });
    }
    task.status = Status::InProgress;
    task.updated_at = Utc::now();
    store.save(tasks)?;
    println!("Task with ID {id} marked in progress successfully!");
    Ok(())
}

/// Move a task to done. Rejected if it already is.
pub fn cmd_mark_done(store: &Store, tasks: &mut [Task], id: u64) -> Result<()> {
    let task = store::get_mut(tasks, id).ok_or(Error::NotFound(id))?;
    if task.status == Status::Done {
        return Err(Error::State { id, state: "done" });
    }
    task.status = Status::Done;
    task.updated_at = Utc::now();
    store.save(tasks)?;
    println!("Task with ID {id} marked done successfully!");
    Ok(())
}

/// Print tasks in collection order, optionally filtered by status.
pub fn cmd_list(tasks: &[Task], status: Option<Status>) {
    for t in tasks {
        if status.map_or(true, |s| t.status == s) {
            store::print_task(t);
        }
    }
}

pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
