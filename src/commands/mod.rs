//! Commands Module
//!
//! Parsing of REPL input lines and the session that executes them.

mod session;

pub use session::{Flow, Session};

use crate::error::{PokedexError, Result};

/// Name, argument hint and description of every command, in `help` order.
pub const COMMANDS: &[(&str, &str, &str)] = &[
    ("help", "", "Displays a help message"),
    ("map", "", "Displays the names of the next 20 location areas"),
    ("mapb", "", "Displays the previous 20 location areas"),
    ("explore", "<area_name>", "Lists the pokemon found in a location area"),
    ("catch", "<pokemon_name>", "Throws a Pokeball at a pokemon"),
    ("inspect", "<pokemon_name>", "Shows details of a pokemon you have caught"),
    ("pokedex", "", "Lists every pokemon you have caught"),
    ("exit", "", "Exits the Pokedex"),
];

/// Splits `text` on whitespace and lowercases each word.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

// == Command ==
/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
}

impl Command {
    /// Parses one input line.
    ///
    /// Returns `Ok(None)` for a blank line. Extra words after the expected
    /// argument are ignored.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };
        let arg = |usage: &str| {
            args.first()
                .cloned()
                .ok_or_else(|| PokedexError::usage(format!("usage: {}", usage)))
        };

        let command = match name.as_str() {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(arg("explore <area_name>")?),
            "catch" => Command::Catch(arg("catch <pokemon_name>")?),
            "inspect" => Command::Inspect(arg("inspect <pokemon_name>")?),
            "pokedex" => Command::Pokedex,
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input() {
        assert_eq!(clean_input("  hello  world  "), vec!["hello", "world"]);
        assert_eq!(
            clean_input("Charmander Bulbasaur PIKACHU"),
            vec!["charmander", "bulbasaur", "pikachu"]
        );
        assert!(clean_input("   \t ").is_empty());
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(Command::parse("help").unwrap(), Some(Command::Help));
        assert_eq!(Command::parse("MAP").unwrap(), Some(Command::Map));
        assert_eq!(Command::parse("mapb").unwrap(), Some(Command::MapBack));
        assert_eq!(Command::parse("pokedex").unwrap(), Some(Command::Pokedex));
        assert_eq!(Command::parse(" exit ").unwrap(), Some(Command::Exit));
    }

    #[test]
    fn test_parse_commands_with_argument() {
        assert_eq!(
            Command::parse("explore Pastoria-City-Area").unwrap(),
            Some(Command::Explore("pastoria-city-area".to_string()))
        );
        assert_eq!(
            Command::parse("catch pikachu extra words").unwrap(),
            Some(Command::Catch("pikachu".to_string()))
        );
        assert_eq!(
            Command::parse("inspect pidgey").unwrap(),
            Some(Command::Inspect("pidgey".to_string()))
        );
    }

    #[test]
    fn test_parse_missing_argument() {
        let err = Command::parse("catch").unwrap_err();
        assert!(matches!(err, PokedexError::Usage(_)));
        assert_eq!(err.to_string(), "usage: catch <pokemon_name>");
    }

    #[test]
    fn test_parse_blank_and_unknown() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert!(matches!(
            Command::parse("fly pallet-town"),
            Err(PokedexError::UnknownCommand(name)) if name == "fly"
        ));
    }

    #[test]
    fn test_every_command_is_listed() {
        for (name, _, _) in COMMANDS {
            let line = format!("{} something", name);
            assert!(Command::parse(&line).unwrap().is_some(), "{} should parse", name);
        }
    }
}
