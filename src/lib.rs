// Library root
// -----------
// This crate exposes the building blocks of the Gutendex CLI. The binary
// (`main.rs`) wires them together and runs the interactive menu.
//
// Module responsibilities:
// - `config`: defaults, optional TOML file and environment overrides.
// - `error`: typed errors for requests, parsing and user input.
// - `models`: Gutendex response shapes and title/author extraction.
// - `query`: builds the query string for each kind of lookup.
// - `api`: blocking HTTP client that talks to the catalog endpoint.
// - `ui`: the menu loop, prompters and console rendering.
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod ui;
