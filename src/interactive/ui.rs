use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::app::{AppMode, FormField, InteractiveApp, Pane};
use super::layout::centered_popup;
use crate::models::TaskStatus;

fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Todo => Color::Blue,
        TaskStatus::InProgress => Color::Yellow,
        TaskStatus::Done => Color::Green,
    }
}

fn status_icon(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "○",
        TaskStatus::InProgress => "◐",
        TaskStatus::Done => "✓",
    }
}

pub fn draw(frame: &mut Frame, app: &InteractiveApp) {
    let area = frame.size();

    let show_notifications = app.notifications.iter().any(|n| !n.dismissed);
    let notification_height = if show_notifications { 5 } else { 0 };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(notification_height),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(frame, rows[0], app);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[1]);

    draw_groups_panel(frame, panels[0], app);
    draw_tasks_panel(frame, panels[1], app);

    if show_notifications {
        super::notifications::draw(frame, rows[2], app);
    }

    draw_footer(frame, rows[3], app);

    match app.mode {
        AppMode::Create | AppMode::Edit => draw_task_form(frame, area, app),
        AppMode::JoinGroup => draw_join_popup(frame, area, app),
        AppMode::ConfirmDelete => draw_confirm_popup(frame, area),
        AppMode::Detail => draw_detail_popup(frame, area, app),
        _ => {}
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" TaskHub ")
        .border_style(Style::default().fg(Color::Blue));

    let user = app
        .user
        .as_ref()
        .map(|u| u.name.as_str())
        .unwrap_or("unknown");

    let mut spans = vec![
        Span::styled(user, Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(format!(
            "  {} group(s), {} task(s)",
            app.groups.len(),
            app.tasks.len()
        )),
    ];

    if app.loading {
        spans.push(Span::styled(
            "  loading…",
            Style::default().fg(Color::Yellow),
        ));
    }

    if app.mode == AppMode::Search || !app.search_query.is_empty() {
        spans.push(Span::styled(
            format!("  /{}", app.search_query),
            Style::default().fg(Color::Magenta),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_groups_panel(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let focused = app.pane == Pane::Groups;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let viewer_id = app.user.as_ref().map(|u| u.id.as_str());

    let mut items: Vec<ListItem> = vec![ListItem::new(Line::from(Span::styled(
        "All tasks",
        Style::default().add_modifier(Modifier::ITALIC),
    )))];
    items.extend(app.groups.iter().map(|group| {
        let owner_marker = match viewer_id {
            Some(id) if group.is_owned_by(id) => "★ ",
            _ => "  ",
        };
        ListItem::new(Line::from(vec![
            Span::styled(owner_marker, Style::default().fg(Color::Cyan)),
            Span::styled(group.name.clone(), Style::default().fg(Color::Magenta)),
        ]))
    }));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Groups ")
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default().with_selected(Some(app.selected_group));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_tasks_panel(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let focused = app.pane == Pane::Tasks;
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = match app.current_group() {
        Some(group) => format!(" Tasks — {} ", group.name),
        None => " Tasks ".to_string(),
    };

    let width = area.width as usize;
    let items: Vec<ListItem> = app
        .filtered_tasks
        .iter()
        .map(|task| {
            let mut spans = vec![
                Span::styled(
                    format!("{} ", status_icon(task.status)),
                    Style::default().fg(status_color(task.status)),
                ),
                Span::raw(truncate(&task.title, width.saturating_sub(30))),
            ];
            if let Some(deadline) = task.deadline_date() {
                spans.push(Span::styled(
                    format!("  due {}", deadline),
                    Style::default().fg(Color::Red),
                ));
            }
            if app.selected_group == 0 {
                if let Some(group_id) = task.group_id.as_deref() {
                    let name = app
                        .groups
                        .iter()
                        .find(|g| g.id == group_id)
                        .map(|g| g.name.as_str())
                        .unwrap_or(group_id);
                    spans.push(Span::styled(
                        format!("  [{}]", name),
                        Style::default().fg(Color::Magenta),
                    ));
                }
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let selected = if app.filtered_tasks.is_empty() {
        None
    } else {
        Some(app.selected_task)
    };
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let hints = match app.mode {
        AppMode::Normal => {
            "q:quit  j/k:move  Tab:pane  n:new  e:edit  s:status  d:delete  i:invite  a:join  /:search  r:refresh"
        }
        AppMode::Search => "type to filter  Enter:keep  Esc:clear",
        AppMode::Detail => "Esc:back",
        AppMode::Create | AppMode::Edit => "Tab:next field  Enter:save  Esc:cancel",
        AppMode::JoinGroup => "paste invite code  Enter:join  Esc:cancel",
        AppMode::ConfirmDelete => "y:confirm  n:cancel",
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(paragraph, area);
}

/// Create/edit form popup with field cycling.
fn draw_task_form(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let width: u16 = 60;
    let height: u16 = 9;
    let popup_area = centered_popup(width, height, area);

    frame.render_widget(Clear, popup_area);

    let (title, border) = if app.mode == AppMode::Edit {
        (" Edit Task ", Color::Yellow)
    } else {
        (" New Task ", Color::Green)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let form = &app.form;
    let max_value_width = (inner.width as usize).saturating_sub(14);

    let fields: Vec<(&str, String)> = vec![
        ("Title", {
            if form.title.is_empty() {
                "<enter title>".to_string()
            } else {
                truncate(&form.title, max_value_width)
            }
        }),
        ("Description", truncate(&form.description, max_value_width)),
        ("Deadline", {
            if form.deadline.is_empty() {
                "YYYY-MM-DD (optional)".to_string()
            } else {
                form.deadline.clone()
            }
        }),
        ("Status", form.status.label().to_string()),
    ];

    for (i, (label, value)) in fields.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height.saturating_sub(1) {
            break;
        }

        let is_active = FormField::ORDER[i] == form.active();

        let label_style = if is_active {
            Style::default().fg(border).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let value_style = if is_active {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let indicator = if is_active { "▶ " } else { "  " };

        let line = Line::from(vec![
            Span::styled(indicator, label_style),
            Span::styled(format!("{:<12}", label), label_style),
            Span::styled(value.clone(), value_style),
        ]);

        let row_area = Rect::new(inner.x, y, inner.width, 1);
        frame.render_widget(Paragraph::new(line), row_area);
    }

    // Hints at the bottom
    let hints_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let hints = if FormField::ORDER[form.active_field % FormField::ORDER.len()] == FormField::Status
    {
        "Space: Cycle status  Tab: Next field  Enter: Save  Esc: Cancel"
    } else {
        "Tab: Next field  Enter: Save  Esc: Cancel"
    };
    let hints_widget = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(hints_widget, hints_area);
}

fn draw_join_popup(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let popup_area = centered_popup(50, 5, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Join Group ")
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let input = if app.join_input.is_empty() {
        Span::styled(
            "<paste invite code or link>",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(app.join_input.clone(), Style::default().fg(Color::White))
    };

    frame.render_widget(
        Paragraph::new(Line::from(input)),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Enter: Join  Esc: Cancel",
            Style::default().fg(Color::DarkGray),
        ))),
        Rect::new(
            inner.x,
            inner.y + inner.height.saturating_sub(1),
            inner.width,
            1,
        ),
    );
}

/// Small confirmation dialog.
fn draw_confirm_popup(frame: &mut Frame, area: Rect) {
    let popup_area = centered_popup(40, 5, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Confirm ")
        .border_style(Style::default().fg(Color::Red));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Delete this task?",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    let options = Line::from(vec![
        Span::styled("[", Style::default().fg(Color::DarkGray)),
        Span::styled("Y", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::styled("]es  ", Style::default().fg(Color::DarkGray)),
        Span::styled("[", Style::default().fg(Color::DarkGray)),
        Span::styled("N", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::styled("]o", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(
        Paragraph::new(options),
        Rect::new(
            inner.x,
            inner.y + inner.height.saturating_sub(1),
            inner.width,
            1,
        ),
    );
}

fn draw_detail_popup(frame: &mut Frame, area: Rect, app: &InteractiveApp) {
    let Some(task) = app.get_selected_task() else {
        return;
    };

    let popup_area = centered_popup(64, 14, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", truncate(&task.title, 58)))
        .border_style(Style::default().fg(status_color(task.status)));

    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let group_name = task.group_id.as_deref().map(|group_id| {
        app.groups
            .iter()
            .find(|g| g.id == group_id)
            .map(|g| g.name.clone())
            .unwrap_or_else(|| group_id.to_string())
    });

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Status:   ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{} {}", status_icon(task.status), task.status.label()),
                Style::default().fg(status_color(task.status)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Group:    ", Style::default().fg(Color::Gray)),
            match group_name {
                Some(name) => Span::styled(name, Style::default().fg(Color::Magenta)),
                None => Span::styled("personal", Style::default().fg(Color::DarkGray)),
            },
        ]),
    ];

    if let Some(deadline) = task.deadline_date() {
        lines.push(Line::from(vec![
            Span::styled("Deadline: ", Style::default().fg(Color::Gray)),
            Span::styled(deadline.to_string(), Style::default().fg(Color::Red)),
        ]));
    }

    if let Some(description) = task.description.as_deref() {
        if !description.trim().is_empty() {
            lines.push(Line::from(""));
            for line in description.lines() {
                lines.push(Line::from(line.to_string()));
            }
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn truncate(s: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
