use tabled::settings::Style;
use tabled::{Table, Tabled};
use tasklist_core::Task;

pub const EMPTY_STATE: &str = "No tasks found";

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Done")]
    done: &'static str,
    #[tabled(rename = "Task")]
    text: String,
}

pub fn render(tasks: &[&Task]) -> String {
    if tasks.is_empty() {
        return EMPTY_STATE.to_string();
    }

    let rows = tasks.iter().map(|task| TaskRow {
        id: task.id.to_string(),
        done: if task.completed { "x" } else { "" },
        text: task.text.clone(),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}
