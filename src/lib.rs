// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires these modules into a single linear run.
//
// Module responsibilities:
// - `config`: Command line flags, env fallbacks and API key lookup.
// - `api`: Blocking HTTP client for the RAWG catalog (genres, games) and
//   the response shapes it decodes.
// - `ui`: Genre menu printing and the interactive selection prompt.
// - `render`: Genre filtering and the HTML page written to disk.
//
// Keeping the UI apart from `api` and `render` means the filtering and
// HTML output can be tested without a terminal or a network.
pub mod api;
pub mod config;
pub mod render;
pub mod ui;
