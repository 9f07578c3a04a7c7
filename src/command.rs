use crate::feed::{FilterCriteria, PriceRange};
use crate::models::PropertyType;
use crate::screens::ContactField;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  list                         show the home feed
  search <text>                search title, city or price (empty clears)
  filter [price=..] [type=..] [beds=..]
                               price: any | min-max | min+ ; type: any | Apartment | Villa | House | Loft ; beds: any | 1-5
  options                      show the filter choices
  clear                        reset search and filters
  open <id>                    open a listing
  fav <id> / unfav <id>        toggle / remove a favorite
  favorites                    show favorites
  map                          show the map for the current screen
  contact                      open the contact form
  set name|email|message <text>
  submit                       send the contact form
  contact-agent                contact the agent of the open listing
  export <path>                write the current feed as JSON
  back                         go back
  help                         this text
  quit                         exit";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),

    #[error("'{command}' needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("invalid filter '{0}': expected key=value with key price, type or beds")]
    BadFilter(String),

    #[error("{0}")]
    BadValue(String),
}

/// One line of user input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Search(String),
    Filter(FilterCriteria),
    Options,
    Clear,
    Open(String),
    Favorite(String),
    Unfavorite(String),
    Favorites,
    Map,
    Contact,
    Set(ContactField, String),
    Submit,
    ContactAgent,
    Export(PathBuf),
    Back,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_lowercase().as_str() {
            "list" | "home" => Command::List,
            "search" => Command::Search(rest.to_string()),
            "filter" => Command::Filter(parse_filter(rest)?),
            "options" => Command::Options,
            "clear" => Command::Clear,
            "open" => Command::Open(required(rest, "open", "a property id")?),
            "fav" => Command::Favorite(required(rest, "fav", "a property id")?),
            "unfav" => Command::Unfavorite(required(rest, "unfav", "a property id")?),
            "favorites" => Command::Favorites,
            "map" => Command::Map,
            "contact" => Command::Contact,
            "set" => {
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "set",
                        what: "a field name",
                    });
                }
                let field = field
                    .parse::<ContactField>()
                    .map_err(CommandError::BadValue)?;
                Command::Set(field, value.trim().to_string())
            }
            "submit" => Command::Submit,
            "contact-agent" => Command::ContactAgent,
            "export" => Command::Export(PathBuf::from(required(rest, "export", "a path")?)),
            "back" => Command::Back,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn required(rest: &str, command: &'static str, what: &'static str) -> Result<String, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, what })
    } else {
        Ok(rest.to_string())
    }
}

/// `price=.. type=.. beds=..`; omitted keys and `any` mean no constraint
fn parse_filter(args: &str) -> Result<FilterCriteria, CommandError> {
    let mut criteria = FilterCriteria::default();

    for pair in args.split_whitespace() {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| CommandError::BadFilter(pair.to_string()))?;
        let any = value.eq_ignore_ascii_case("any");

        match key.to_lowercase().as_str() {
            "price" => {
                criteria.price_range = if any {
                    None
                } else {
                    Some(value.parse::<PriceRange>().map_err(CommandError::BadValue)?)
                };
            }
            "type" => {
                criteria.property_type = if any {
                    None
                } else {
                    Some(value.parse::<PropertyType>().map_err(CommandError::BadValue)?)
                };
            }
            "beds" | "bedrooms" => {
                criteria.bedrooms = if any {
                    None
                } else {
                    Some(value.parse().map_err(|_| {
                        CommandError::BadValue(format!("invalid bedroom count '{}'", value))
                    })?)
                };
            }
            _ => return Err(CommandError::BadFilter(pair.to_string())),
        }
    }

    Ok(criteria)
}
