//! Integration tests for the LauncherFileBuilder public interface.
//!
//! These write real entries into temporary directories and read them back.

use std::fs;
use std::path::Path;

use deskgen_core::platform::is_executable;
use deskgen_core::{
    FailureReason, FieldTarget, LauncherFileBuilder, LauncherForm, LauncherSpec,
    PickerSelection, WriteOutcome,
};
use tempfile::TempDir;

fn retro_game_spec() -> LauncherSpec {
    LauncherSpec::builder()
        .name("Retro Game")
        .exec_command("/usr/bin/retro")
        .icon("retro-icon")
        .comment("")
        .terminal(true)
        .build()
}

fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_round_trip_retro_game() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let builder = LauncherFileBuilder::new(temp_dir.path());

    let outcome = builder.generate(&retro_game_spec());

    let final_path = outcome.final_path().expect("generation should succeed");
    assert_eq!(final_path, temp_dir.path().join("retro_game.desktop"));

    let content = fs::read_to_string(final_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "[Desktop Entry]",
            "Type=Application",
            "Name=Retro Game",
            "Comment=Retro Game",
            "Exec=/usr/bin/retro",
            "Icon=retro-icon",
            "Terminal=true",
            "Categories=Utility;",
            "StartupNotify=true",
        ]
    );
    assert!(content.ends_with("StartupNotify=true\n"));
}

#[test]
fn test_written_entry_is_executable() {
    let temp_dir = TempDir::new().unwrap();
    let builder = LauncherFileBuilder::new(temp_dir.path());

    let outcome = builder.generate(&retro_game_spec());
    let final_path = outcome.final_path().unwrap();

    assert!(is_executable(final_path));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(final_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}

#[test]
fn test_second_generate_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let builder = LauncherFileBuilder::new(temp_dir.path());

    let first = LauncherSpec::builder()
        .name("Game")
        .exec_command("/usr/bin/game-v1")
        .build();
    let second = LauncherSpec::builder()
        .name("Game")
        .exec_command("/usr/bin/game-v2")
        .build();

    assert!(builder.generate(&first).is_success());
    let outcome = builder.generate(&second);
    assert!(outcome.is_success());

    let content = fs::read_to_string(temp_dir.path().join("game.desktop")).unwrap();
    assert!(content.contains("Exec=/usr/bin/game-v2\n"));
    assert!(!content.contains("game-v1"));
    assert_eq!(dir_entries(temp_dir.path()), vec!["game.desktop"]);
}

#[test]
fn test_validation_leaves_directory_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("existing.desktop"), "[Desktop Entry]\n").unwrap();
    let before = dir_entries(temp_dir.path());
    let builder = LauncherFileBuilder::new(temp_dir.path());

    let no_name = LauncherSpec::builder().exec_command("/usr/bin/app").build();
    let no_exec = LauncherSpec::builder().name("App").build();

    for spec in [no_name, no_exec] {
        let outcome = builder.generate(&spec);
        assert!(matches!(
            outcome,
            WriteOutcome::Failure {
                reason: FailureReason::Validation { .. }
            }
        ));
    }

    assert_eq!(dir_entries(temp_dir.path()), before);
}

#[test]
fn test_unnamed_punctuation_uses_fallback() {
    let temp_dir = TempDir::new().unwrap();
    let builder = LauncherFileBuilder::new(temp_dir.path());
    let spec = LauncherSpec::builder()
        .name("!!!")
        .exec_command("/usr/bin/bang")
        .build();

    let outcome = builder.generate(&spec);

    assert_eq!(
        outcome.final_path(),
        Some(temp_dir.path().join("custom-app.desktop").as_path())
    );
    let content = fs::read_to_string(temp_dir.path().join("custom-app.desktop")).unwrap();
    assert!(content.contains("Name=!!!\n"));
}

#[test]
fn test_form_to_entry_then_reset() {
    let temp_dir = TempDir::new().unwrap();
    let builder = LauncherFileBuilder::new(temp_dir.path());

    let mut form = LauncherForm {
        name: " Image Viewer ".into(),
        ..Default::default()
    };
    form.apply_selection(
        FieldTarget::Executable,
        PickerSelection::Files(vec!["/opt/viewer/bin/viewer".into()]),
    )
    .unwrap();
    form.apply_selection(
        FieldTarget::Icon,
        PickerSelection::Files(vec!["/opt/viewer/viewer.png".into()]),
    )
    .unwrap();

    let outcome = builder.generate(&form.to_spec());
    assert!(outcome.is_success());
    form.reset();
    assert_eq!(form, LauncherForm::default());

    let content = fs::read_to_string(temp_dir.path().join("image_viewer.desktop")).unwrap();
    assert!(content.contains("Name=Image Viewer\n"));
    assert!(content.contains("Exec=/opt/viewer/bin/viewer\n"));
    assert!(content.contains("Icon=/opt/viewer/viewer.png\n"));
    assert!(content.contains("Terminal=false\n"));
}
