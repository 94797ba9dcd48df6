//! Tests for the migration driver: file handling, reporting, idempotence.
#![allow(clippy::unwrap_used)]

use specmig::migrate::{run_migration, MigrationOptions, MigrationPlan, MigrationStatus};
use specmig::test_utils::{legacy_spec, legacy_spec_multi_import, migrated_spec};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_fixture(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_fresh_file_is_updated_in_place() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "test/e2e/courses.e2e.spec.ts", &legacy_spec(false));

    let plan = MigrationPlan::new(
        dir.path(),
        vec!["test/e2e/courses.e2e.spec.ts".to_owned()],
    );
    let mut buffer = Vec::new();
    let outcomes = run_migration(&plan, &MigrationOptions::default(), &mut buffer).unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].status, MigrationStatus::Updated);

    let rewritten = fs::read_to_string(dir.path().join("test/e2e/courses.e2e.spec.ts")).unwrap();
    assert!(rewritten.contains("E2ETestModule.create([AppModule])"));
    assert!(!rewritten.contains("Test.createTestingModule"));

    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("Updated:"));
    assert!(output.contains("All files processed:"));
}

#[test]
fn test_missing_file_is_reported_and_run_continues() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "test/e2e/videos.e2e.spec.ts", &legacy_spec(false));

    let plan = MigrationPlan::new(
        dir.path(),
        vec![
            "test/e2e/ghost.e2e.spec.ts".to_owned(),
            "test/e2e/videos.e2e.spec.ts".to_owned(),
        ],
    );
    let mut buffer = Vec::new();
    let outcomes = run_migration(&plan, &MigrationOptions::default(), &mut buffer).unwrap();

    assert_eq!(outcomes[0].status, MigrationStatus::NotFound);
    assert_eq!(outcomes[1].status, MigrationStatus::Updated);

    // The missing path must not be created.
    assert!(!dir.path().join("test/e2e/ghost.e2e.spec.ts").exists());

    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("Not found:"));
}

#[test]
fn test_already_migrated_file_left_byte_identical() {
    let dir = tempdir().unwrap();
    let original = migrated_spec();
    write_fixture(dir.path(), "test/e2e/tracks.e2e.spec.ts", &original);

    let plan = MigrationPlan::new(
        dir.path(),
        vec!["test/e2e/tracks.e2e.spec.ts".to_owned()],
    );
    let mut buffer = Vec::new();
    let outcomes = run_migration(&plan, &MigrationOptions::default(), &mut buffer).unwrap();

    assert_eq!(outcomes[0].status, MigrationStatus::AlreadyMigrated);
    assert!(outcomes[0].rules.is_empty());

    let content = fs::read_to_string(dir.path().join("test/e2e/tracks.e2e.spec.ts")).unwrap();
    assert_eq!(content, original);

    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("Already updated:"));
}

#[test]
fn test_second_run_is_a_noop() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "test/e2e/lessons.e2e.spec.ts", &legacy_spec(true));

    let plan = MigrationPlan::new(
        dir.path(),
        vec!["test/e2e/lessons.e2e.spec.ts".to_owned()],
    );

    let outcomes = run_migration(&plan, &MigrationOptions::default(), std::io::sink()).unwrap();
    assert_eq!(outcomes[0].status, MigrationStatus::Updated);
    let after_first = fs::read_to_string(dir.path().join("test/e2e/lessons.e2e.spec.ts")).unwrap();

    let outcomes = run_migration(&plan, &MigrationOptions::default(), std::io::sink()).unwrap();
    assert_eq!(outcomes[0].status, MigrationStatus::AlreadyMigrated);
    let after_second = fs::read_to_string(dir.path().join("test/e2e/lessons.e2e.spec.ts")).unwrap();

    assert_eq!(after_first, after_second);
}

#[test]
fn test_deep_suite_file_gets_deeper_helper_path() {
    let dir = tempdir().unwrap();
    let relative = "test/e2e/assessment/get-questions-detailed.e2e.spec.ts";
    write_fixture(dir.path(), relative, &legacy_spec(false));

    let plan = MigrationPlan::new(dir.path(), vec![relative.to_owned()]);
    run_migration(&plan, &MigrationOptions::default(), std::io::sink()).unwrap();

    let rewritten = fs::read_to_string(dir.path().join(relative)).unwrap();
    assert!(rewritten.contains("from '../../test-helpers/e2e-test-module';"));
}

#[test]
fn test_multi_import_file_keeps_remaining_symbols() {
    let dir = tempdir().unwrap();
    write_fixture(
        dir.path(),
        "test/e2e/students.e2e.spec.ts",
        &legacy_spec_multi_import(),
    );

    let plan = MigrationPlan::new(
        dir.path(),
        vec!["test/e2e/students.e2e.spec.ts".to_owned()],
    );
    run_migration(&plan, &MigrationOptions::default(), std::io::sink()).unwrap();

    let rewritten = fs::read_to_string(dir.path().join("test/e2e/students.e2e.spec.ts")).unwrap();
    assert!(rewritten.contains("import { INestApplication } from '@nestjs/testing';"));
    assert!(!rewritten.contains("import { Test,"));
}

#[test]
fn test_verbose_reports_zero_match_rules() {
    let dir = tempdir().unwrap();
    // A file with the marker absent but also none of the legacy patterns:
    // it gets "updated" (written back unchanged) and every rule warns.
    write_fixture(
        dir.path(),
        "test/e2e/document.e2e.spec.ts",
        "describe('docs', () => {});\n",
    );

    let plan = MigrationPlan::new(
        dir.path(),
        vec!["test/e2e/document.e2e.spec.ts".to_owned()],
    );
    let options = MigrationOptions {
        verbose: true,
        json: false,
    };
    let mut buffer = Vec::new();
    let outcomes = run_migration(&plan, &options, &mut buffer).unwrap();

    assert_eq!(outcomes[0].status, MigrationStatus::Updated);
    assert!(outcomes[0].rules.iter().all(|r| r.replacements == 0));

    let output = String::from_utf8(buffer).unwrap();
    assert!(output.contains("matched nothing"));
}

#[test]
fn test_json_output_is_parseable() {
    let dir = tempdir().unwrap();
    write_fixture(dir.path(), "test/e2e/modules.e2e.spec.ts", &legacy_spec(false));

    let plan = MigrationPlan::new(
        dir.path(),
        vec![
            "test/e2e/modules.e2e.spec.ts".to_owned(),
            "test/e2e/ghost.e2e.spec.ts".to_owned(),
        ],
    );
    let options = MigrationOptions {
        verbose: false,
        json: true,
    };
    let mut buffer = Vec::new();
    run_migration(&plan, &options, &mut buffer).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["status"], "updated");
    assert_eq!(entries[1]["status"], "not_found");
}

#[test]
fn test_default_suite_lists_eight_files_in_order() {
    let plan = MigrationPlan::default_suite(".");
    assert_eq!(plan.files().len(), 8);
    assert_eq!(plan.files()[0], "test/e2e/courses.e2e.spec.ts");
    assert_eq!(
        plan.files()[7],
        "test/e2e/assessment/get-questions-detailed.e2e.spec.ts"
    );
}
