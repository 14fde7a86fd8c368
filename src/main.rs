//! Dealprep terminal front end.
//!
//! A line-oriented command loop over one workbook session. List entities
//! are addressed by their 1-based position as printed by the matching
//! `list` output; the front end resolves positions to ids before calling
//! the service. This layer also owns the "keep at least one BATNA option"
//! guard - the core itself allows an empty list.

use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use dealprep::application::WorkbookService;
use dealprep::config::AppConfig;
use dealprep::domain::foundation::{Money, Probability};
use dealprep::domain::workbook::{
    BatnaUpdate, IssueUpdate, ProfileUpdate, ScenarioUpdate, ScriptUpdate,
};
use dealprep::render::{
    format_currency, render_advice_board, BattleCardRenderer, SummaryRenderer,
};

const HELP: &str = "\
Commands:
  card                                  print the battle card
  summary                               print the position summary
  batna add | list | rm <n>             manage BATNA options
  batna set <n> desc|value|prob <v>     edit a BATNA option
  reserve <amount>                      set your walk-away number
  their-reserve <amount>                set their estimated walk-away
  anchor <amount>|clear                 override or clear the opening anchor
  issue add | rm <n>                    manage negotiable issues
  issue set <n> name|points <v>         edit an issue
  profile positions|interests|constraints <text>
  ev best-value|best-prob|worst-value|worst-prob <v>
  script add | rm <n>                   manage if/then scripts
  script set <n> if|then <text>         edit a script
  advice [post <author> | <text>] [like <n>]
  export                                dump the session state as JSON
  help, quit";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log.filter))
        .with_writer(io::stderr)
        .init();

    info!("starting dealprep session");

    let mut service = WorkbookService::new();
    let card = BattleCardRenderer::new(config.display.currency_symbol.clone());
    let summary = SummaryRenderer::new(config.display.currency_symbol.clone());
    let symbol = config.display.currency_symbol;

    println!("dealprep - negotiation preparation workbook");
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        dispatch(line, &mut service, &card, &summary, &symbol);
    }

    info!("session ended");
    Ok(())
}

fn dispatch(
    line: &str,
    service: &mut WorkbookService,
    card: &BattleCardRenderer,
    summary: &SummaryRenderer,
    symbol: &str,
) {
    let (command, rest) = split_word(line);

    match command {
        "help" => println!("{}", HELP),
        "card" => print!("{}", card.render(service.state())),
        "summary" => print!("{}", summary.render(service.state())),
        "export" => match service.export_state_json() {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("export failed: {}", err),
        },
        "batna" => batna_command(rest, service, symbol),
        "reserve" => {
            service.set_reservation_price(Money::parse_or_zero(rest));
        }
        "their-reserve" => {
            service.set_estimated_counterpart_reservation(Money::parse_or_zero(rest));
        }
        "anchor" => {
            if rest == "clear" {
                service.set_opening_anchor(None);
            } else {
                service.set_opening_anchor(Some(Money::parse_or_zero(rest)));
            }
        }
        "issue" => issue_command(rest, service),
        "profile" => profile_command(rest, service),
        "ev" => ev_command(rest, service),
        "script" => script_command(rest, service),
        "advice" => advice_command(rest, service),
        _ => println!("Unknown command '{}'. Type 'help'.", command),
    }
}

fn batna_command(rest: &str, service: &mut WorkbookService, symbol: &str) {
    let (action, rest) = split_word(rest);
    match action {
        "add" => {
            service.add_batna_option();
        }
        "list" | "" => {
            for (index, option) in service.state().batna_options().iter().enumerate() {
                let name = if option.description.is_empty() {
                    "(no description)"
                } else {
                    &option.description
                };
                println!(
                    "  {}. {} — {} at {} (weighted {})",
                    index + 1,
                    name,
                    format_currency(symbol, option.value),
                    option.probability,
                    format_currency(symbol, option.weighted_value())
                );
            }
            println!(
                "  Weighted BATNA: {}",
                format_currency(symbol, service.weighted_batna())
            );
        }
        "rm" => {
            if service.state().batna_options().len() <= 1 {
                println!("Keep at least one alternative on the card.");
                return;
            }
            if let Some(id) = nth_batna(service, rest) {
                service.remove_batna_option(id);
            }
        }
        "set" => {
            let (index, rest) = split_word(rest);
            let (field, value) = split_word(rest);
            let Some(id) = nth_batna(service, index) else {
                println!("No such option.");
                return;
            };
            let update = match field {
                "desc" => BatnaUpdate::Description(value.to_string()),
                "value" => BatnaUpdate::Value(Money::parse_or_zero(value)),
                "prob" => BatnaUpdate::Probability(Probability::parse_or_zero(value)),
                _ => {
                    println!("Fields: desc, value, prob.");
                    return;
                }
            };
            service.update_batna_option(id, update);
        }
        _ => println!("Usage: batna add|list|set|rm"),
    }
}

fn issue_command(rest: &str, service: &mut WorkbookService) {
    let (action, rest) = split_word(rest);
    match action {
        "add" => {
            service.add_issue();
        }
        "rm" => {
            if let Some(id) = nth_issue(service, rest) {
                service.remove_issue(id);
            }
        }
        "set" => {
            let (index, rest) = split_word(rest);
            let (field, value) = split_word(rest);
            let Some(id) = nth_issue(service, index) else {
                println!("No such issue.");
                return;
            };
            let update = match field {
                "name" => IssueUpdate::Name(value.to_string()),
                "points" => IssueUpdate::Points(value.trim().parse().unwrap_or(0)),
                _ => {
                    println!("Fields: name, points.");
                    return;
                }
            };
            service.update_issue(id, update);
        }
        "" | "list" => {
            for (index, issue) in service.state().issues().iter().enumerate() {
                let name = if issue.name.is_empty() {
                    "(unnamed)"
                } else {
                    &issue.name
                };
                println!(
                    "  {}. {} — {}pts [{}]",
                    index + 1,
                    name,
                    issue.points,
                    issue.priority
                );
            }
        }
        _ => println!("Usage: issue add|list|set|rm"),
    }
}

fn profile_command(rest: &str, service: &mut WorkbookService) {
    let (field, text) = split_word(rest);
    let update = match field {
        "positions" => ProfileUpdate::Positions(text.to_string()),
        "interests" => ProfileUpdate::Interests(text.to_string()),
        "constraints" => ProfileUpdate::Constraints(text.to_string()),
        _ => {
            println!("Fields: positions, interests, constraints.");
            return;
        }
    };
    service.update_counterpart_profile(update);
}

fn ev_command(rest: &str, service: &mut WorkbookService) {
    let (field, value) = split_word(rest);
    let update = match field {
        "best-value" => ScenarioUpdate::BestCaseValue(Money::parse_or_zero(value)),
        "best-prob" => ScenarioUpdate::BestCaseProbability(Probability::parse_or_zero(value)),
        "worst-value" => ScenarioUpdate::WorstCaseValue(Money::parse_or_zero(value)),
        "worst-prob" => ScenarioUpdate::WorstCaseProbability(Probability::parse_or_zero(value)),
        _ => {
            println!("Fields: best-value, best-prob, worst-value, worst-prob.");
            return;
        }
    };
    service.update_ev_scenario(update);
}

fn script_command(rest: &str, service: &mut WorkbookService) {
    let (action, rest) = split_word(rest);
    match action {
        "add" => {
            service.add_if_then_script();
        }
        "rm" => {
            if let Some(id) = nth_script(service, rest) {
                service.remove_if_then_script(id);
            }
        }
        "set" => {
            let (index, rest) = split_word(rest);
            let (field, text) = split_word(rest);
            let Some(id) = nth_script(service, index) else {
                println!("No such script.");
                return;
            };
            let update = match field {
                "if" => ScriptUpdate::Trigger(text.to_string()),
                "then" => ScriptUpdate::Response(text.to_string()),
                _ => {
                    println!("Fields: if, then.");
                    return;
                }
            };
            service.update_if_then_script(id, update);
        }
        "" | "list" => {
            for (index, script) in service.state().if_then_scripts().iter().enumerate() {
                println!(
                    "  {}. If \"{}\" then \"{}\"",
                    index + 1,
                    script.trigger,
                    script.response
                );
            }
        }
        _ => println!("Usage: script add|list|set|rm"),
    }
}

fn advice_command(rest: &str, service: &mut WorkbookService) {
    let (action, rest) = split_word(rest);
    match action {
        "" | "list" => print!("{}", render_advice_board(service.advice())),
        "post" => {
            let Some((author, text)) = rest.split_once('|') else {
                println!("Usage: advice post <author> | <text>");
                return;
            };
            if service.submit_advice(author, text).is_none() {
                println!("Both an author and some advice are required.");
            }
        }
        "like" => {
            let index: usize = rest.trim().parse().unwrap_or(0);
            if let Some(entry) = index
                .checked_sub(1)
                .and_then(|i| service.advice().entries().get(i))
            {
                let id = entry.id;
                service.like_advice(id);
            }
        }
        _ => println!("Usage: advice [list|post|like]"),
    }
}

fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (input, ""),
    }
}

fn parse_index(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()?.checked_sub(1)
}

fn nth_batna(
    service: &WorkbookService,
    index: &str,
) -> Option<dealprep::domain::foundation::OptionId> {
    service
        .state()
        .batna_options()
        .get(parse_index(index)?)
        .map(|o| o.id)
}

fn nth_issue(
    service: &WorkbookService,
    index: &str,
) -> Option<dealprep::domain::foundation::IssueId> {
    service.state().issues().get(parse_index(index)?).map(|i| i.id)
}

fn nth_script(
    service: &WorkbookService,
    index: &str,
) -> Option<dealprep::domain::foundation::ScriptId> {
    service
        .state()
        .if_then_scripts()
        .get(parse_index(index)?)
        .map(|s| s.id)
}
