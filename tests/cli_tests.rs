//! End-to-end tests for the gutendex-cli binary, driven through piped stdin.

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Binary with the environment cleared of config overrides.
fn cli() -> Command {
    let mut cmd = Command::cargo_bin("gutendex-cli").unwrap();
    cmd.env_remove("GUTENDEX_API_URL").env_remove("GUTENDEX_LOG");
    cmd
}

#[test]
fn test_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--base-url"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--plain"));
}

#[test]
fn test_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gutendex-cli"));
}

#[test]
fn test_exit_option() {
    cli()
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Buscar libro por título"))
        .stdout(predicate::str::contains("Saliendo de la aplicación..."));
}

#[test]
fn test_invalid_input_keeps_running() {
    cli()
        .write_stdin("hola\n42\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Por favor, introduzca un número válido."))
        .stdout(predicate::str::contains("Opción no válida. Intente nuevamente."))
        .stdout(predicate::str::contains("Saliendo de la aplicación..."));
}

#[test]
fn test_blank_title_is_rejected() {
    cli()
        .args(["--base-url", "http://127.0.0.1:9/books"])
        .write_stdin("1\n\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("El título no puede estar vacío."))
        .stdout(predicate::str::contains("Error al realizar").not());
}

#[test]
fn test_eof_exits_cleanly() {
    cli().write_stdin("").assert().success();
}

#[test]
fn test_search_against_local_server() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/books")
        .match_query(Matcher::UrlEncoded("search".into(), "dracula".into()))
        .with_status(200)
        .with_body(r#"{"results":[{"title":"Dracula","authors":[{"name":"Bram Stoker"}]}]}"#)
        .create();

    cli()
        .args(["--base-url", &format!("{}/books", server.url())])
        .write_stdin("1\ndracula\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Dracula"));
    mock.assert();
}

#[test]
fn test_base_url_from_config_file() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/books")
        .with_status(404)
        .create();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, format!("base_url = \"{}/books\"\n", server.url())).unwrap();

    cli()
        .arg("--config")
        .arg(&path)
        .write_stdin("2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error en la solicitud. Código de estado: 404",
        ));
    mock.assert();
}

#[test]
fn test_env_overrides_base_url() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/books")
        .with_status(200)
        .with_body(r#"{"results":[]}"#)
        .create();

    cli()
        .env("GUTENDEX_API_URL", format!("{}/books", server.url()))
        .write_stdin("2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No se encontraron libros."));
    mock.assert();
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    cli()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .write_stdin("6\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}
