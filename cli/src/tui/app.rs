use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ListState;
use tasklist_core::{Controller, FilterMode, Intent, TaskId, TaskRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Adding,
    Editing(TaskId),
}

pub struct App<R: TaskRepository> {
    pub controller: Controller<R>,
    pub state: ListState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
}

impl<R: TaskRepository> App<R> {
    pub fn new(controller: Controller<R>) -> Self {
        let mut state = ListState::default();
        if !controller.visible().is_empty() {
            state.select(Some(0));
        }
        App {
            controller,
            state,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
        }
    }

    /// Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.input_mode {
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => return true,
                KeyCode::Down | KeyCode::Char('j') => self.next(),
                KeyCode::Up | KeyCode::Char('k') => self.previous(),
                KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(),
                KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
                KeyCode::Char('a') => self.enter_add_mode(),
                KeyCode::Char('e') => self.enter_edit_mode(),
                KeyCode::Char('f') => self.set_filter(self.controller.filter().next()),
                KeyCode::Char('1') => self.set_filter(FilterMode::All),
                KeyCode::Char('2') => self.set_filter(FilterMode::Completed),
                KeyCode::Char('3') => self.set_filter(FilterMode::Pending),
                _ => {}
            },
            InputMode::Adding | InputMode::Editing(_) => match key.code {
                KeyCode::Enter => self.submit_input(),
                KeyCode::Esc => self.exit_input_mode(),
                KeyCode::Char(c) => self.input_char(c),
                KeyCode::Backspace => self.delete_char(),
                KeyCode::Left => self.move_cursor_left(),
                KeyCode::Right => self.move_cursor_right(),
                _ => {}
            },
        }
        false
    }

    pub fn visible_len(&self) -> usize {
        self.controller.visible().len()
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        let i = self.state.selected()?;
        self.controller.visible().get(i).map(|t| t.id)
    }

    pub fn next(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            let _ = self.controller.dispatch(Intent::Toggle(id));
            self.clamp_selection();
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            let _ = self.controller.dispatch(Intent::Delete(id));
            self.clamp_selection();
        }
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        let _ = self.controller.dispatch(Intent::SetFilter(mode));
        let selected = if self.visible_len() == 0 { None } else { Some(0) };
        self.state.select(selected);
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Opens the editor prefilled with the selected task's text.
    pub fn enter_edit_mode(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(task) = self.controller.store().get(id) else {
            return;
        };
        self.input = task.text.clone();
        self.cursor_position = self.input.chars().count();
        self.input_mode = InputMode::Editing(id);
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.byte_index(self.cursor_position);
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index = self.byte_index(self.cursor_position - 1);
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Rejected input keeps the editor open so it can be corrected.
    pub fn submit_input(&mut self) {
        let text = self.input.clone();
        let result = match self.input_mode {
            InputMode::Adding => self.controller.dispatch(Intent::Add(text)),
            InputMode::Editing(id) => self.controller.dispatch(Intent::Update(id, text)),
            InputMode::Normal => return,
        };

        if let Ok(task) = result {
            self.exit_input_mode();
            let pos = task.and_then(|t| self.controller.visible().iter().position(|v| v.id == t.id));
            match pos {
                Some(pos) => self.state.select(Some(pos)),
                None => self.clamp_selection(),
            }
        }
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.input.chars().take(char_pos).map(char::len_utf8).sum()
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        let selected = match self.state.selected() {
            _ if len == 0 => None,
            Some(i) if i >= len => Some(len - 1),
            Some(i) => Some(i),
            None => Some(0),
        };
        self.state.select(selected);
    }
}
