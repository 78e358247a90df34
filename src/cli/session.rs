use crate::state::Event;

pub const HELP: &str = "\
commands:
  group <name> | group -        choose a group (- clears)
  category <name> | category -  choose a category (- clears)
  submit                        apply the chosen filters
  clear                         drop all filters
  page <n> | next | prev        navigate
  size <n>                      emojis per page
  groups | categories           list available values
  show                          render the current page
  help                          this text
  quit                          leave
";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Apply(Event),
    ListGroups,
    ListCategories,
    Show,
    Help,
    Quit,
}

fn choice(rest: &str) -> Option<String> {
    let value = rest.trim();
    if value.is_empty() || value == "-" {
        None
    } else {
        Some(value.to_string())
    }
}

fn number(keyword: &str, rest: &str) -> Result<usize, String> {
    rest.trim()
        .parse::<usize>()
        .map_err(|_| format!("{keyword}: expected a number, got '{}'", rest.trim()))
}

/// Parses one input line; blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r),
        None => (line, ""),
    };
    let command = match keyword.to_ascii_lowercase().as_str() {
        "group" | "g" => Command::Apply(Event::SelectGroup(choice(rest))),
        "category" | "cat" | "k" => Command::Apply(Event::SelectCategory(choice(rest))),
        "submit" | "apply" => Command::Apply(Event::Submit),
        "clear" | "reset" => Command::Apply(Event::ClearFilters),
        "page" | "p" => Command::Apply(Event::GoToPage(number("page", rest)?)),
        "next" | "n" => Command::Apply(Event::NextPage),
        "prev" | "previous" => Command::Apply(Event::PreviousPage),
        "size" => {
            let size = number("size", rest)?;
            if size == 0 {
                return Err("size: expected a positive number".to_string());
            }
            Command::Apply(Event::SetPageSize(size))
        }
        "groups" => Command::ListGroups,
        "categories" => Command::ListCategories,
        "show" | "ls" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command '{other}', try 'help'")),
    };
    Ok(Some(command))
}
