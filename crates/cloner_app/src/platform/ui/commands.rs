use cloner_core::{DisplayMode, Msg};

pub const HELP_TEXT: &str = "\
Type a website URL and press Enter to clone it.
  :preview   show the rendered clone
  :code      show the generated HTML
  :download  save the clone as cloned-website.html
  :help      show this help
  :quit      exit";

/// One line of terminal input, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    Msgs(Vec<Msg>),
    Help,
    Quit,
    /// Standard input closed.
    Eof,
    Unknown(String),
}

pub fn parse_line(line: &str) -> UserInput {
    let trimmed = line.trim();
    match trimmed {
        ":preview" | ":p" => UserInput::Msgs(vec![Msg::ModeSelected(DisplayMode::Preview)]),
        ":code" | ":c" => UserInput::Msgs(vec![Msg::ModeSelected(DisplayMode::Code)]),
        ":download" | ":d" => UserInput::Msgs(vec![Msg::DownloadClicked]),
        ":help" | ":h" | ":?" => UserInput::Help,
        ":quit" | ":q" => UserInput::Quit,
        command if command.starts_with(':') => UserInput::Unknown(command.to_string()),
        // The line is the whole form: edit the field, then submit it.
        _ => UserInput::Msgs(vec![Msg::InputChanged(line.to_string()), Msg::UrlSubmitted]),
    }
}
