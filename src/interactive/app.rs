use crossterm::event::KeyCode;
use std::sync::Arc;
use std::time::Instant;

use crate::cli_context::CliContext;
use crate::client::ApiClient;
use crate::config::load_config;
use crate::error::TaskHubResult;
use crate::models::{Group, Task, TaskCreate, TaskStatus, TaskUpdate, User};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Normal,
    Search,
    Detail,
    Create,
    Edit,
    JoinGroup,
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pane {
    Groups,
    Tasks,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationKind {
    Success,
    Error,
    Loading,
    Info,
}

pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub dismissed: bool,
}

/// Mutations requested by key handlers, executed by the run loop where
/// awaiting is possible.
#[derive(Debug, Clone)]
pub enum PendingAction {
    Refresh,
    CreateTask(TaskCreate),
    UpdateTask(String, TaskUpdate),
    DeleteTask(String),
    CycleStatus(String, TaskStatus),
    CreateInvite(String),
    AcceptInvite(String),
}

/// Fields of the create/edit popup form, cycled with Tab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    Title,
    Description,
    Deadline,
    Status,
}

impl FormField {
    pub const ORDER: [FormField; 4] = [
        FormField::Title,
        FormField::Description,
        FormField::Deadline,
        FormField::Status,
    ];
}

#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub status: TaskStatus,
    pub active_field: usize,
}

impl TaskForm {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            deadline: task.deadline_date().unwrap_or_default().to_string(),
            status: task.status,
            active_field: 0,
        }
    }

    pub fn active(&self) -> FormField {
        FormField::ORDER[self.active_field % FormField::ORDER.len()]
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.active() {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Deadline => Some(&mut self.deadline),
            FormField::Status => None,
        }
    }
}

pub struct InteractiveApp {
    pub client: Arc<ApiClient>,
    pub user: Option<User>,
    pub mode: AppMode,
    pub pane: Pane,
    pub groups: Vec<Group>,
    pub tasks: Vec<Task>,
    pub filtered_tasks: Vec<Task>,
    /// 0 selects "All tasks", i+1 selects groups[i].
    pub selected_group: usize,
    pub selected_task: usize,
    pub search_query: String,
    pub join_input: String,
    pub form: TaskForm,
    pub editing_task_id: Option<String>,
    pub notifications: Vec<Notification>,
    pub pending: Option<PendingAction>,
    pub should_quit: bool,
    pub loading: bool,
}

impl InteractiveApp {
    pub fn new() -> TaskHubResult<Self> {
        let mut context = CliContext::load()?;
        let client = context.authenticated_client()?;
        let user = load_config().user;

        Ok(Self {
            client,
            user,
            mode: AppMode::Normal,
            pane: Pane::Tasks,
            groups: Vec::new(),
            tasks: Vec::new(),
            filtered_tasks: Vec::new(),
            selected_group: 0,
            selected_task: 0,
            search_query: String::new(),
            join_input: String::new(),
            form: TaskForm::default(),
            editing_task_id: None,
            notifications: Vec::new(),
            pending: Some(PendingAction::Refresh),
            should_quit: false,
            loading: false,
        })
    }

    /// Re-fetch both collections, the post-mutation resynchronization step.
    pub async fn refresh(&mut self) {
        self.loading = true;
        match self.client.get_groups().await {
            Ok(groups) => self.groups = groups,
            Err(e) => self.notify(NotificationKind::Error, format!("Failed to load groups: {}", e)),
        }
        match self.client.get_tasks().await {
            Ok(tasks) => self.tasks = tasks,
            Err(e) => self.notify(NotificationKind::Error, format!("Failed to load tasks: {}", e)),
        }
        self.loading = false;
        if self.selected_group > self.groups.len() {
            self.selected_group = 0;
        }
        self.apply_filters();
    }

    pub fn apply_filters(&mut self) {
        self.filtered_tasks = self.tasks.clone();

        let group_filter = self.current_group().map(|g| g.id.clone());
        if let Some(group_id) = group_filter {
            self.filtered_tasks
                .retain(|t| t.group_id.as_deref() == Some(group_id.as_str()));
        }

        if !self.search_query.is_empty() {
            let query = self.search_query.to_lowercase();
            self.filtered_tasks.retain(|task| {
                task.title.to_lowercase().contains(&query)
                    || task
                        .description
                        .as_deref()
                        .map(|d| d.to_lowercase().contains(&query))
                        .unwrap_or(false)
            });
        }

        // Reset selection if needed
        if self.selected_task >= self.filtered_tasks.len() && !self.filtered_tasks.is_empty() {
            self.selected_task = self.filtered_tasks.len() - 1;
        }
    }

    pub fn current_group(&self) -> Option<&Group> {
        if self.selected_group == 0 {
            None
        } else {
            self.groups.get(self.selected_group - 1)
        }
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.filtered_tasks.get(self.selected_task)
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notifications.push(Notification {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            dismissed: false,
        });
    }

    /// Expire success/info banners after five seconds.
    pub fn tick(&mut self) {
        self.notifications.retain(|n| {
            !n.dismissed
                && match n.kind {
                    NotificationKind::Success | NotificationKind::Info => {
                        n.created_at.elapsed().as_secs() < 5
                    }
                    NotificationKind::Error => n.created_at.elapsed().as_secs() < 8,
                    NotificationKind::Loading => true,
                }
        });
    }

    pub fn take_pending(&mut self) -> Option<PendingAction> {
        self.pending.take()
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match self.mode {
            AppMode::Normal => self.handle_normal_mode_key(key),
            AppMode::Search => self.handle_search_mode_key(key),
            AppMode::Detail => self.handle_detail_mode_key(key),
            AppMode::Create | AppMode::Edit => self.handle_form_mode_key(key),
            AppMode::JoinGroup => self.handle_join_mode_key(key),
            AppMode::ConfirmDelete => self.handle_confirm_mode_key(key),
        }
    }

    fn handle_normal_mode_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.move_selection_down(),
            KeyCode::Char('k') | KeyCode::Up => self.move_selection_up(),
            KeyCode::Tab => self.toggle_pane(),
            KeyCode::Char('/') => {
                self.mode = AppMode::Search;
            }
            KeyCode::Char('r') => self.pending = Some(PendingAction::Refresh),
            KeyCode::Char('n') => {
                self.form = TaskForm::default();
                self.editing_task_id = None;
                self.mode = AppMode::Create;
            }
            KeyCode::Char('e') => {
                if let Some(task) = self.get_selected_task().cloned() {
                    self.form = TaskForm::from_task(&task);
                    self.editing_task_id = Some(task.id);
                    self.mode = AppMode::Edit;
                }
            }
            KeyCode::Char('s') => {
                let cycle = self
                    .get_selected_task()
                    .map(|t| (t.id.clone(), t.status.next()));
                if let Some((task_id, next)) = cycle {
                    self.pending = Some(PendingAction::CycleStatus(task_id, next));
                }
            }
            KeyCode::Char('d') => {
                if self.get_selected_task().is_some() {
                    self.mode = AppMode::ConfirmDelete;
                }
            }
            KeyCode::Char('i') => {
                let group_id = self.current_group().map(|g| g.id.clone());
                if let Some(group_id) = group_id {
                    self.pending = Some(PendingAction::CreateInvite(group_id));
                } else {
                    self.notify(
                        NotificationKind::Info,
                        "Select a group first to create an invite",
                    );
                }
            }
            KeyCode::Char('a') => {
                self.join_input.clear();
                self.mode = AppMode::JoinGroup;
            }
            KeyCode::Enter => {
                if self.pane == Pane::Tasks && !self.filtered_tasks.is_empty() {
                    self.mode = AppMode::Detail;
                }
            }
            KeyCode::Esc => {
                for notification in &mut self.notifications {
                    notification.dismissed = true;
                }
            }
            _ => {}
        }
    }

    fn handle_search_mode_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.mode = AppMode::Normal;
                self.search_query.clear();
                self.apply_filters();
            }
            KeyCode::Enter => {
                self.mode = AppMode::Normal;
                self.apply_filters();
            }
            KeyCode::Char(c) => {
                self.search_query.push(c);
                self.apply_filters();
            }
            KeyCode::Backspace => {
                self.search_query.pop();
                self.apply_filters();
            }
            _ => {}
        }
    }

    fn handle_detail_mode_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.mode = AppMode::Normal;
            }
            _ => {}
        }
    }

    fn handle_form_mode_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.mode = AppMode::Normal;
                self.editing_task_id = None;
            }
            KeyCode::Tab => {
                self.form.active_field = (self.form.active_field + 1) % FormField::ORDER.len();
            }
            KeyCode::BackTab => {
                self.form.active_field =
                    (self.form.active_field + FormField::ORDER.len() - 1) % FormField::ORDER.len();
            }
            KeyCode::Enter => self.submit_form(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                if self.form.active() == FormField::Status =>
            {
                self.form.status = self.form.status.next();
            }
            KeyCode::Char(c) => {
                if let Some(text) = self.form.active_text_mut() {
                    text.push(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(text) = self.form.active_text_mut() {
                    text.pop();
                }
            }
            _ => {}
        }
    }

    fn submit_form(&mut self) {
        if self.form.title.trim().is_empty() {
            self.notify(NotificationKind::Error, "Title is required");
            return;
        }

        let description = Some(self.form.description.trim().to_string())
            .filter(|d| !d.is_empty());
        let deadline = Some(self.form.deadline.trim().to_string()).filter(|d| !d.is_empty());

        match self.editing_task_id.take() {
            Some(task_id) => {
                let update = TaskUpdate {
                    title: Some(self.form.title.trim().to_string()),
                    description,
                    status: Some(self.form.status),
                    deadline,
                    group_id: None,
                };
                self.pending = Some(PendingAction::UpdateTask(task_id, update));
            }
            None => {
                // New tasks land in the group currently selected in the pane
                let create = TaskCreate {
                    title: self.form.title.trim().to_string(),
                    description,
                    status: self.form.status,
                    deadline,
                    group_id: self.current_group().map(|g| g.id.clone()),
                };
                self.pending = Some(PendingAction::CreateTask(create));
            }
        }
        self.mode = AppMode::Normal;
    }

    fn handle_join_mode_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.mode = AppMode::Normal;
                self.join_input.clear();
            }
            KeyCode::Enter => {
                let code = self.join_input.trim().to_string();
                if code.is_empty() {
                    self.notify(NotificationKind::Error, "Please enter an invite code");
                } else {
                    self.pending = Some(PendingAction::AcceptInvite(code));
                }
                self.mode = AppMode::Normal;
                self.join_input.clear();
            }
            KeyCode::Char(c) => self.join_input.push(c),
            KeyCode::Backspace => {
                self.join_input.pop();
            }
            _ => {}
        }
    }

    fn handle_confirm_mode_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                let task_id = self.get_selected_task().map(|t| t.id.clone());
                if let Some(task_id) = task_id {
                    self.pending = Some(PendingAction::DeleteTask(task_id));
                }
                self.mode = AppMode::Normal;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = AppMode::Normal;
            }
            _ => {}
        }
    }

    fn toggle_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Groups => Pane::Tasks,
            Pane::Tasks => Pane::Groups,
        };
    }

    fn move_selection_down(&mut self) {
        match self.pane {
            Pane::Tasks => {
                if !self.filtered_tasks.is_empty() {
                    self.selected_task = (self.selected_task + 1) % self.filtered_tasks.len();
                }
            }
            Pane::Groups => {
                let count = self.groups.len() + 1;
                self.selected_group = (self.selected_group + 1) % count;
                self.selected_task = 0;
                self.apply_filters();
            }
        }
    }

    fn move_selection_up(&mut self) {
        match self.pane {
            Pane::Tasks => {
                if !self.filtered_tasks.is_empty() {
                    if self.selected_task == 0 {
                        self.selected_task = self.filtered_tasks.len() - 1;
                    } else {
                        self.selected_task -= 1;
                    }
                }
            }
            Pane::Groups => {
                let count = self.groups.len() + 1;
                self.selected_group = (self.selected_group + count - 1) % count;
                self.selected_task = 0;
                self.apply_filters();
            }
        }
    }
}
