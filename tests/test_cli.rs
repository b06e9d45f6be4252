use clap::Parser;
use mdnotes::cli::args::{Args, Command, SidebarAction, ThemeAction};
use std::path::PathBuf;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["mdnotes", "some-id"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_new_command_with_title_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["mdnotes", "new", "-t", "Groceries", "--content", "- milk"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::New { title, content } => {
            assert_eq!(title.as_deref(), Some("Groceries"));
            assert_eq!(content.as_deref(), Some("- milk"));
        }
        _ => panic!("Expected New command"),
    }
    assert_eq!(parsed.data_dir, None);
    assert_eq!(parsed.config, None);
}

#[test]
fn given_list_command_with_search_and_json_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["mdnotes", "list", "milk", "--json"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { search, json } => {
            assert_eq!(search.as_deref(), Some("milk"));
            assert!(json);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_edit_command_without_fields_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["mdnotes", "edit", "abc"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Edit {
            note_id,
            title,
            content,
        } => {
            assert_eq!(note_id, "abc");
            assert_eq!(title, None);
            assert_eq!(content, None);
        }
        _ => panic!("Expected Edit command"),
    }
}

#[test]
fn given_data_dir_flag_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec!["mdnotes", "delete", "-d", "/tmp/notes", "abc"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { note_id } => assert_eq!(note_id, "abc"),
        _ => panic!("Expected Delete command"),
    }
    assert_eq!(parsed.data_dir, Some(PathBuf::from("/tmp/notes")));
}

#[test]
fn given_config_flag_when_parsing_then_sets_config_path() {
    // Arrange
    let args = vec!["mdnotes", "-c", "/etc/mdnotes.toml", "render", "abc"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(matches!(parsed.command, Command::Render { ref note_id } if note_id == "abc"));
    assert_eq!(parsed.config, Some(PathBuf::from("/etc/mdnotes.toml")));
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    // Arrange
    let args = vec!["mdnotes", "-vv", "view", "abc"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_theme_without_action_when_parsing_then_action_is_none() {
    let parsed = Args::try_parse_from(["mdnotes", "theme"]).unwrap();

    assert!(matches!(parsed.command, Command::Theme { action: None }));
}

#[test]
fn given_theme_toggle_when_parsing_then_action_is_toggle() {
    let parsed = Args::try_parse_from(["mdnotes", "theme", "toggle"]).unwrap();

    assert!(matches!(
        parsed.command,
        Command::Theme {
            action: Some(ThemeAction::Toggle)
        }
    ));
}

#[test]
fn given_sidebar_expand_when_parsing_then_action_is_expand() {
    let parsed = Args::try_parse_from(["mdnotes", "sidebar", "expand"]).unwrap();

    assert!(matches!(
        parsed.command,
        Command::Sidebar {
            action: Some(SidebarAction::Expand)
        }
    ));
}

#[test]
fn given_unknown_theme_when_parsing_then_fails() {
    let result = Args::try_parse_from(["mdnotes", "theme", "sepia"]);

    assert!(result.is_err());
}

#[test]
fn given_init_with_force_when_parsing_then_force_is_set() {
    // Arrange
    let args = vec!["mdnotes", "-c", "/tmp/mdnotes.toml", "init", "--force"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert!(matches!(parsed.command, Command::Init { force: true }));
    assert_eq!(parsed.config, Some(PathBuf::from("/tmp/mdnotes.toml")));
}
