use crate::error::CommandError;
use crate::panel::Interaction;
use storefront_core::ValidationError;
use storefront_core::types::{Brand, Category, PriceRange, Rating, SortField};

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Type(String),
    Search,
    Category(Category),
    Brand(Brand),
    Rating(Rating),
    Price(PriceRange),
    ClearPrice,
    Sort(SortField),
    Clear,
    OpenFilters,
    CloseFilters,
    Click(Interaction),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  type <text>          update the search box (suggestions are debounced)
  search               fetch products for the current text and filters
  category <name>      toggle a category filter
  brand <name>         toggle a brand filter
  rating <1-5>         toggle a minimum rating filter
  price <min> [max]    replace the price range (omit max for open-ended)
  price clear          remove the price range
  sort <field>         createdAt | price | rating | name | sales
  clear                reset all filters
  filters open|close   show or hide the filter panel
  click inside|outside simulate a pointer interaction
  show                 print the current state
  quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        let command = match word {
            "type" => Command::Type(rest.to_string()),
            "search" => Command::Search,
            "category" => Command::Category(
                Category::try_new(required(rest, "category")?.to_string())
                    .map_err(ValidationError::from)?,
            ),
            "brand" => Command::Brand(
                Brand::try_new(required(rest, "brand")?.to_string())
                    .map_err(ValidationError::from)?,
            ),
            "rating" => {
                let stars = number::<u8>(required(rest, "rating")?)?;
                Command::Rating(Rating::try_new(stars).map_err(ValidationError::from)?)
            }
            "price" if rest == "clear" => Command::ClearPrice,
            "price" => {
                let mut bounds = required(rest, "min price")?.split_whitespace();
                let min = bounds.next().map(number::<f64>).transpose()?;
                let max = bounds.next().map(number::<f64>).transpose()?;
                let range = match (min, max) {
                    (Some(min), Some(max)) => PriceRange::between(min, max)?,
                    (Some(min), None) => PriceRange::at_least(min)?,
                    _ => return Err(CommandError::MissingArgument("min price")),
                };
                Command::Price(range)
            }
            "sort" => Command::Sort(required(rest, "sort field")?.parse()?),
            "clear" => Command::Clear,
            "filters" => match rest {
                "open" => Command::OpenFilters,
                "close" => Command::CloseFilters,
                _ => return Err(CommandError::MissingArgument("open|close")),
            },
            "click" => match rest {
                "inside" => Command::Click(Interaction::Inside),
                "outside" => Command::Click(Interaction::Outside),
                _ => return Err(CommandError::MissingArgument("inside|outside")),
            },
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

fn required<'a>(rest: &'a str, what: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(what))
    } else {
        Ok(rest)
    }
}

fn number<T: std::str::FromStr>(raw: &str) -> Result<T, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::NotANumber(raw.to_string()))
}
