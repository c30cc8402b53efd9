use pavilion_core::{CareersField, ContactField, JobType, Msg, Route, Theme};

/// What one input line asks the shell to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  go <home|about|services|projects|partners|team|careers|blogs|contact>
  reload                      retry the project listing
  select <id>                 open a project's detail overlay
  close                       close the detail overlay
  set contact <name|email|organization|message> <value>
  set careers <name|email|phone|linkedin> <value>
  jobtype <internship|fulltime>
  submit <contact|careers>
  theme <light|dark>          external theme signal
  scroll <pixels>             external scroll signal
  help, quit";

/// Maps one input line onto a command. Errors are usage strings.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Command::Dispatch(Msg::NoOp));
    }
    let (head, rest) = split_word(trimmed);
    match head {
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "go" => parse_route(rest).map(|route| Command::Dispatch(Msg::RouteChanged(route))),
        "reload" => Ok(Command::Dispatch(Msg::ReloadRequested)),
        "select" => rest
            .parse()
            .map(|id| Command::Dispatch(Msg::ProjectSelected { id }))
            .map_err(|_| "usage: select <id>".to_string()),
        "close" => Ok(Command::Dispatch(Msg::SelectionCleared)),
        "theme" => match rest {
            "light" => Ok(Command::Dispatch(Msg::ThemeChanged(Theme::Light))),
            "dark" => Ok(Command::Dispatch(Msg::ThemeChanged(Theme::Dark))),
            _ => Err("usage: theme <light|dark>".to_string()),
        },
        "scroll" => rest
            .parse()
            .map(|offset| Command::Dispatch(Msg::ScrollChanged { offset }))
            .map_err(|_| "usage: scroll <pixels>".to_string()),
        "jobtype" => match rest {
            "internship" => Ok(Command::Dispatch(Msg::CareersJobTypeChanged(
                JobType::Internship,
            ))),
            "fulltime" | "full-time" => Ok(Command::Dispatch(Msg::CareersJobTypeChanged(
                JobType::FullTime,
            ))),
            _ => Err("usage: jobtype <internship|fulltime>".to_string()),
        },
        "submit" => match rest {
            "contact" => Ok(Command::Dispatch(Msg::ContactSubmitted)),
            "careers" => Ok(Command::Dispatch(Msg::CareersSubmitted)),
            _ => Err("usage: submit <contact|careers>".to_string()),
        },
        "set" => parse_set(rest),
        _ => Err(format!("unknown command: {head} (try `help`)")),
    }
}

fn parse_set(rest: &str) -> Result<Command, String> {
    let (form, rest) = split_word(rest);
    let (field, value) = split_word(rest);
    match form {
        "contact" => {
            let field = match field {
                "name" => ContactField::Name,
                "email" => ContactField::Email,
                "organization" => ContactField::Organization,
                "message" => ContactField::Message,
                _ => {
                    return Err(
                        "usage: set contact <name|email|organization|message> <value>".to_string(),
                    )
                }
            };
            Ok(Command::Dispatch(Msg::ContactEdited {
                field,
                value: value.to_string(),
            }))
        }
        "careers" => {
            let field = match field {
                "name" => CareersField::Name,
                "email" => CareersField::Email,
                "phone" => CareersField::Phone,
                "linkedin" => CareersField::Linkedin,
                _ => {
                    return Err(
                        "usage: set careers <name|email|phone|linkedin> <value>".to_string()
                    )
                }
            };
            Ok(Command::Dispatch(Msg::CareersEdited {
                field,
                value: value.to_string(),
            }))
        }
        _ => Err("usage: set <contact|careers> <field> <value>".to_string()),
    }
}

fn parse_route(word: &str) -> Result<Route, String> {
    match word {
        "home" => Ok(Route::Home),
        "about" => Ok(Route::About),
        "services" => Ok(Route::Services),
        "projects" => Ok(Route::Projects),
        "partners" => Ok(Route::Partners),
        "team" => Ok(Route::Team),
        "careers" => Ok(Route::Careers),
        "blogs" => Ok(Route::Blogs),
        "contact" => Ok(Route::Contact),
        _ => Err(format!("unknown page: {word}")),
    }
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}
