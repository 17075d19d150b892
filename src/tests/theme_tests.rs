use crate::formatting::theme::helpers::{status_color, status_color_str};
use crate::formatting::theme::{theme_color, ColorTheme, SemanticColor, ThemedColorize};
use crate::models::TaskStatus;
use colored::Color;

#[test]
fn test_default_theme() {
    let theme = ColorTheme::default();

    // Test status colors
    assert_eq!(theme.get(SemanticColor::StatusTodo), Color::Blue);
    assert_eq!(theme.get(SemanticColor::StatusInProgress), Color::Yellow);
    assert_eq!(theme.get(SemanticColor::StatusDone), Color::Green);

    // Test entity colors
    assert_eq!(theme.get(SemanticColor::Group), Color::Magenta);
    assert_eq!(theme.get(SemanticColor::Owner), Color::Cyan);
}

#[test]
fn test_status_color_helper() {
    assert_eq!(status_color(TaskStatus::Todo), SemanticColor::StatusTodo);
    assert_eq!(
        status_color(TaskStatus::InProgress),
        SemanticColor::StatusInProgress
    );
    assert_eq!(status_color(TaskStatus::Done), SemanticColor::StatusDone);
}

#[test]
fn test_status_color_str_helper() {
    assert_eq!(status_color_str("todo"), SemanticColor::StatusTodo);
    assert_eq!(status_color_str("inprogress"), SemanticColor::StatusInProgress);
    assert_eq!(status_color_str("in progress"), SemanticColor::StatusInProgress);
    assert_eq!(status_color_str("done"), SemanticColor::StatusDone);
    assert_eq!(status_color_str("unknown"), SemanticColor::Primary);
}

#[test]
fn test_themed_colorize() {
    let text = "Error message";
    let colored = text.with_theme(SemanticColor::Error);

    // The colored string should contain the text
    assert!(format!("{}", colored).contains("Error message"));
}

#[test]
fn test_theme_color_function() {
    let color = theme_color(SemanticColor::Success);
    assert_eq!(color, Color::Green);

    let color = theme_color(SemanticColor::Warning);
    assert_eq!(color, Color::Yellow);
}
