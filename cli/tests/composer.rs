//! # Dockhand Composer Shorthand Integration Tests
//!
//! File: cli/tests/composer.rs
//!
//! Runs shorthand commands with `--dry-run` and checks the printed
//! `docker exec` invocation. The memory variants use a fake Docker CLI for
//! the in-container path lookups.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_plain_composer_forwards_args() {
    let project = TestProject::with_settings("main_container = \"shop-php-1\"\n");
    project
        .cmd()
        .args(["--dry-run", "composer", "update"])
        .assert()
        .success()
        .stdout("docker exec -it shop-php-1 composer update\n");
}

#[test]
fn test_shorthand_subcommand_and_alias() {
    let project = TestProject::with_settings("main_container = \"shop-php-1\"\n");
    project
        .cmd()
        .args(["--dry-run", "c:require", "monolog/monolog", "--dev"])
        .assert()
        .success()
        .stdout("docker exec -it shop-php-1 composer require monolog/monolog --dev\n");
}

#[cfg(unix)]
#[test]
fn test_memory_shorthand_uses_resolved_paths() {
    let project = TestProject::with_settings("main_container = \"shop-php-1\"\n");
    project.install_fake_docker(&[]);
    project
        .cmd()
        .args(["--dry-run", "composer:update:memory", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "exec -i shop-php-1 /usr/local/bin/php -d 'memory_limit=-1' /usr/local/bin/composer update --help",
        ));
}

#[cfg(unix)]
#[test]
fn test_memory_trigger_argument() {
    let project = TestProject::with_settings("main_container = \"shop-php-1\"\n");
    project.install_fake_docker(&[]);
    project
        .cmd()
        .args(["--dry-run", "composer", "m", "install"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "exec -i shop-php-1 /usr/local/bin/php -d 'memory_limit=-1' /usr/local/bin/composer install",
        ))
        .stdout(predicate::str::contains(" m ").not());
}

#[cfg(unix)]
#[test]
fn test_memory_lookup_failure_is_reported() {
    let project = TestProject::with_settings("main_container = \"shop-php-1\"\n");
    project.install_fake_docker(&["php"]);
    project
        .cmd()
        .args(["--dry-run", "composer:update:memory"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Could not locate 'php' in container 'shop-php-1': php: not found",
        ));
}

#[test]
fn test_missing_container_without_terminal_fails() {
    let project = TestProject::new();
    project
        .cmd()
        .args(["--dry-run", "composer:update"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-interactive mode"));
    assert!(!project.settings_path().exists());
}
