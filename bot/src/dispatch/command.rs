//! # Inbound Command Parsing
//!
//! File: bot/src/dispatch/command.rs
//! Author: Christi Mahu
//!
//! Classifies the text of an inbound message. Parsing never fails: anything
//! that is not one of the known commands is free text, which the dispatcher
//! treats as an implicit search.
//!

/// What an inbound message asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start`
    Start,
    /// `/help`
    Help,
    /// `/search <query>`; the query is trimmed and may be empty.
    Search(String),
    /// `/details <imdb id>`; the id is trimmed and may be empty.
    Details(String),
    /// Anything else, trimmed. Includes unknown slash commands.
    Text(String),
}

impl Command {
    /// Parses a message body.
    ///
    /// The command token may carry a bot mention (`/search@MovieBot`), which
    /// is ignored. Arguments are whatever follows the token.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        let Some(body) = text.strip_prefix('/') else {
            return Command::Text(text.to_string());
        };

        let (token, rest) = match body.find(char::is_whitespace) {
            Some(idx) => (&body[..idx], body[idx..].trim()),
            None => (body, ""),
        };
        let name = token.split('@').next().unwrap_or(token);

        match name {
            "start" => Command::Start,
            "help" => Command::Help,
            "search" => Command::Search(rest.to_string()),
            "details" => Command::Details(rest.to_string()),
            _ => Command::Text(text.to_string()),
        }
    }
}
