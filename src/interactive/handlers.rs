use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use super::app::{InteractiveApp, NotificationKind, PendingAction};
use super::event::{Event, EventHandler};
use crate::config::get_token;
use crate::logging::{init_logging, log_debug, log_error, log_info, log_panic_info};

pub async fn run_dashboard() -> Result<(), Box<dyn std::error::Error>> {
    let _ = init_logging();
    log_info("Starting dashboard");

    // Check session first
    get_token()?;
    log_debug("Session token found");

    // Panics land in the log file; stderr is unusable under the TUI
    std::panic::set_hook(Box::new(|info| {
        log_panic_info(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log_debug("Terminal initialized");

    let mut app = match InteractiveApp::new() {
        Ok(app) => app,
        Err(e) => {
            log_error(&format!("Failed to create dashboard app: {}", e));
            restore_terminal(&mut terminal)?;
            return Err(Box::new(e));
        }
    };
    let events = EventHandler::new(100);

    // Main loop
    loop {
        if let Err(e) = terminal.draw(|f| super::ui::draw(f, &app)) {
            log_error(&format!("Error drawing UI: {}", e));
            restore_terminal(&mut terminal)?;
            return Err(Box::new(e));
        }

        match events.recv()? {
            Event::Key(key_event) => {
                log_debug(&format!(
                    "Key pressed: {:?}, Mode: {:?}",
                    key_event.code, app.mode
                ));
                app.handle_key(key_event.code);
            }
            Event::Tick => {
                app.tick();
            }
        }

        // Key handlers queue mutations; run them here where awaiting works
        if let Some(action) = app.take_pending() {
            execute_action(&mut app, action).await;
        }

        if app.should_quit {
            break;
        }
    }

    log_info("Exiting dashboard");
    restore_terminal(&mut terminal)?;

    Ok(())
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// One request per user action; on success the mirrors are re-fetched, on
/// failure an error banner is posted and local state stays as it was.
async fn execute_action(app: &mut InteractiveApp, action: PendingAction) {
    match action {
        PendingAction::Refresh => {
            app.refresh().await;
        }
        PendingAction::CreateTask(create) => {
            match app.client.create_task(&create).await {
                Ok(task) => {
                    app.notify(NotificationKind::Success, format!("Created '{}'", task.title));
                    app.refresh().await;
                }
                Err(e) => {
                    log_error(&format!("Create task failed: {}", e));
                    app.notify(NotificationKind::Error, format!("Create failed: {}", e));
                }
            }
        }
        PendingAction::UpdateTask(task_id, update) => {
            match app.client.update_task(&task_id, &update).await {
                Ok(task) => {
                    app.notify(NotificationKind::Success, format!("Updated '{}'", task.title));
                    app.refresh().await;
                }
                Err(e) => {
                    log_error(&format!("Update task failed: {}", e));
                    app.notify(NotificationKind::Error, format!("Update failed: {}", e));
                }
            }
        }
        PendingAction::CycleStatus(task_id, status) => {
            let update = crate::models::TaskUpdate {
                status: Some(status),
                ..Default::default()
            };
            match app.client.update_task(&task_id, &update).await {
                Ok(task) => {
                    app.notify(
                        NotificationKind::Success,
                        format!("'{}' is now {}", task.title, task.status.label()),
                    );
                    app.refresh().await;
                }
                Err(e) => {
                    log_error(&format!("Status change failed: {}", e));
                    app.notify(NotificationKind::Error, format!("Status change failed: {}", e));
                }
            }
        }
        PendingAction::DeleteTask(task_id) => match app.client.delete_task(&task_id).await {
            Ok(()) => {
                app.notify(NotificationKind::Success, "Task deleted");
                app.refresh().await;
            }
            Err(e) => {
                log_error(&format!("Delete task failed: {}", e));
                app.notify(NotificationKind::Error, format!("Delete failed: {}", e));
            }
        },
        PendingAction::CreateInvite(group_id) => match app.client.create_invite(&group_id).await {
            Ok(invite) => {
                app.notify(
                    NotificationKind::Info,
                    format!("Invite code: {} (share it)", invite.token),
                );
            }
            Err(e) => {
                log_error(&format!("Create invite failed: {}", e));
                app.notify(NotificationKind::Error, format!("Invite failed: {}", e));
            }
        },
        PendingAction::AcceptInvite(code) => {
            let token = match crate::commands::invites::extract_invite_token(&code) {
                Ok(token) => token,
                Err(e) => {
                    app.notify(NotificationKind::Error, e.to_string());
                    return;
                }
            };
            match app.client.accept_invite(&token).await {
                Ok(accepted) if accepted.success => {
                    app.notify(NotificationKind::Success, "You joined the group!");
                    app.refresh().await;
                }
                Ok(accepted) => {
                    let message = accepted
                        .error
                        .unwrap_or_else(|| "Invitation was rejected".to_string());
                    app.notify(NotificationKind::Error, message);
                }
                Err(e) => {
                    log_error(&format!("Accept invite failed: {}", e));
                    app.notify(NotificationKind::Error, format!("Join failed: {}", e));
                }
            }
        }
    }
}
