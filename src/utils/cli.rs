//! Command-line argument parsing and help for coolmenu.
//!
//! When invoked with no args (coolmenu), the menu opens and the chosen command replaces
//! the coolmenu process.

use crate::config::Config;

/// Options for a menu session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Print the chosen name instead of launching it.
    pub print: bool,
    /// Rescan PATH before opening instead of using the cache.
    pub refresh: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(RunOptions),
    Exit,
}

pub fn handle_args() -> CliAction {
    parse_args(std::env::args().skip(1))
}

/// Parses the arguments after the program name.
pub fn parse_args<I, S>(args: I) -> CliAction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = RunOptions::default();

    for arg in args {
        match arg.as_ref() {
            "--print" | "-p" => options.print = true,
            "--refresh" | "-r" => options.refresh = true,
            "--version" | "-v" => {
                print_version();
                return CliAction::Exit;
            }
            "-h" | "--help" => {
                print_help();
                return CliAction::Exit;
            }
            "--config-help" => {
                print_config_help();
                return CliAction::Exit;
            }
            "--keybinds" | "--keybind" | "--keys" => {
                print_keybinds();
                return CliAction::Exit;
            }
            "--init" => {
                let path = Config::default_path();
                match Config::generate_default(&path) {
                    Ok(()) => println!("Default config generated at {:?}", path),
                    Err(e) => eprintln!("Error: {}", e),
                }
                return CliAction::Exit;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Try --help for available options");
                return CliAction::Exit;
            }
        }
    }
    CliAction::Run(options)
}

fn print_version() {
    println!("coolmenu {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"coolmenu - type to filter the executables on your PATH and launch one

USAGE:
  coolmenu [OPTIONS]

OPTIONS:
  -p, --print             Print the chosen command instead of launching it
  -r, --refresh           Rescan PATH instead of using the cached list
      --init              Generate the default configuration file
      --config-help       Display all the configuration options
      --keybinds          Display the default keybinds
  -h, --help              Print help information
  -v, --version           Display the installed version of coolmenu

ENVIRONMENT:
  COOLMENU_CONFIG         Override the default config path
  COOLMENU_CACHE          Override the candidate cache path
  COOLMENU_LOG_DIR        Write a debug log into this directory
  COOLMENU_LOG            Log filter (e.g. "coolmenu=trace")
"#
    );
}

const KEYBINDS_TEXT: &str = r##"
=========================
 Key Bindings
=========================
[keys]
  up                        ["up", "<c-k>"]
  down                      ["down", "<c-j>"]
  page_up                   ["pageup"]
  page_down                 ["pagedown"]
  first                     ["home"]
  last                      ["end"]
  confirm                   ["enter"]
  cancel                    ["esc", "<c-c>"]
  clear                     ["<c-u>"]
  backspace                 ["backspace", "<c-h>"]

  Any other printable key is typed into the search.

  Syntax Reference:
    Modifiers: <c-x> (Ctrl), <m-x>/<a-x> (Alt/Meta), <s-x> (Shift)
    Standard:  ctrl+x, alt+x, shift+x, meta+x
    Special:   "space", "back", "enter", "esc", "tab", "home", "end", "pageup", "pagedown"
"##;

fn print_keybinds() {
    println!("{}", KEYBINDS_TEXT);
}

fn print_config_help() {
    let help_text = r##"
coolmenu - Configuration Guide (coolmenu.toml)

=========================
 General Settings
=========================
[general]
  matcher                    "substring", "fuzzy" or "skim" [default: "substring"]
  rank_by_score              Sort matches by score instead of name [default: false]
  use_cache                  Keep the PATH listing in a cache file [default: true]
  refresh_on_start           Rescan PATH in the background when the cache was used [default: true]

=========================
 Display Settings
=========================
[display]
  border_shape               "square", "rounded", "double" or "thick"
  title                      Title shown on the top border
  prompt                     Text in front of the query [default: " Search: "]
  show_footer                Show the help footer
  show_count                 Show the [selected / total] indicator
  highlight_matches          Highlight the matched characters

=========================
 Theme Configuration
=========================
[theme]
  selection_icon             Marker in front of the selected row [default: "> "]
  selection_reverse          Draw the selected row in reverse video [default: true]

Each sub-table supports fg/bg colors ("Red", "Blue", hex "#RRGGBB", or "default"):

[theme.border]               Border and divider
[theme.input]                Query line
[theme.footer]               Footer help text
[theme.entry]                Unselected rows
[theme.selection]            Selected row
[theme.highlight]            Matched characters
"##;

    println!("{}{}", help_text, KEYBINDS_TEXT);
}
