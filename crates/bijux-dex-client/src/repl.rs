// SPDX-License-Identifier: Apache-2.0

use crate::controller::Action;

pub const HELP: &str = "\
commands:
  next | n            next page
  prev | p            previous page
  size N              page size (10, 20, 50, 100)
  type [NAME]         filter by type; no name clears the filter
  search NAME         show one record by name
  open NAME|ID        open a card from the current grid
  back                return to the list
  retry               re-issue the failed request
  help                this text
  quit | q            leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Act(Action),
    Retry,
    Help,
    Quit,
}

/// Parses one interactive line. Arguments keep their inner spacing.
pub fn parse_command(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim();
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(w, r)| (w, r.trim()));
    match word.to_ascii_lowercase().as_str() {
        "next" | "n" => Ok(ReplCommand::Act(Action::NextPage)),
        "prev" | "p" => Ok(ReplCommand::Act(Action::PreviousPage)),
        "size" => rest
            .parse::<u32>()
            .map(|n| ReplCommand::Act(Action::ChangePageSize(n)))
            .map_err(|_| format!("size expects a number, got `{rest}`")),
        "type" => Ok(ReplCommand::Act(Action::ApplyTypeFilter(rest.to_string()))),
        "search" | "s" => Ok(ReplCommand::Act(Action::Search(rest.to_string()))),
        "open" | "o" => {
            if rest.is_empty() {
                Err("open expects a card name or id".to_string())
            } else {
                Ok(ReplCommand::Act(Action::SelectCard(rest.to_string())))
            }
        }
        "back" | "list" => Ok(ReplCommand::Act(Action::ReturnToList)),
        "retry" | "r" => Ok(ReplCommand::Retry),
        "help" | "h" | "?" => Ok(ReplCommand::Help),
        "quit" | "q" | "exit" => Ok(ReplCommand::Quit),
        "" => Ok(ReplCommand::Help),
        other => Err(format!("unknown command `{other}`; type `help`")),
    }
}
