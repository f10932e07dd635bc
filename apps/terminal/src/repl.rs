//! # Prompt Loop
//!
//! Reads a line, parses it into a [`Command`], runs it against the
//! [`AppState`] and prints the answer. One line is handled completely
//! before the next is read.
//!
//! ## Commands
//! ```text
//! prev | next | today        move between months
//! pick 2024-03-05 | pick 5   pick a day (check-in, then check-out)
//! clear                      drop the picked days
//! name <text>                guest name (required)
//! phone <text>               guest phone (required)
//! email <text>               guest email
//! requests <text>            special requests
//! submit                     book the picked days
//! bookings                   list stored bookings
//! config                     show resolved configuration
//! show                       redraw calendar and form
//! help | quit
//! ```

use chrono::{DateTime, Datelike, Utc};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info};

use lodge_core::validation::parse_calendar_date;
use lodge_core::{CalendarDate, FormField};

use crate::commands::{booking, calendar, config};
use crate::error::ApiError;
use crate::state::AppState;
use crate::view;

/// Prompt shown before each line.
pub const PROMPT: &str = "lodge> ";

/// Text printed by `help`.
pub const HELP: &str = "\
Commands:
  prev | next | today        move between months
  pick YYYY-MM-DD | pick D   pick a day (check-in, then check-out)
  clear                      drop the picked days
  name <text>                guest name (required)
  phone <text>               guest phone (required)
  email <text>               guest email
  requests <text>            special requests
  submit                     book the picked days
  bookings                   list stored bookings
  config                     show resolved configuration
  show                       redraw calendar and form
  help                       this text
  quit                       leave
";

/// A day typed after `pick`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    /// A full date.
    Date(CalendarDate),
    /// A day of the displayed month.
    Day(u32),
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Prev,
    Next,
    Today,
    Pick(PickTarget),
    Clear,
    Field(FormField, String),
    Submit,
    Bookings,
    Config,
    Help,
    Quit,
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

/// Parses one input line.
///
/// Field commands take the rest of the line verbatim, so `name` alone
/// empties the field.
pub fn parse_command(line: &str) -> Result<Command, ApiError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "" | "show" => Command::Show,
        "prev" | "p" | "<" => Command::Prev,
        "next" | "n" | ">" => Command::Next,
        "today" | "t" => Command::Today,
        "pick" => Command::Pick(parse_pick(rest)?),
        "clear" => Command::Clear,
        "name" => Command::Field(FormField::GuestName, rest.to_string()),
        "phone" => Command::Field(FormField::GuestPhone, rest.to_string()),
        "email" => Command::Field(FormField::GuestEmail, rest.to_string()),
        "requests" => Command::Field(FormField::SpecialRequests, rest.to_string()),
        "submit" => Command::Submit,
        "bookings" | "list" => Command::Bookings,
        "config" => Command::Config,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(ApiError::invalid_command(format!(
                "unknown command '{}' (try 'help')",
                other
            )))
        }
    };

    Ok(command)
}

fn parse_pick(arg: &str) -> Result<PickTarget, ApiError> {
    if arg.is_empty() {
        return Err(ApiError::invalid_command("pick needs a date or a day number"));
    }

    if arg.chars().all(|c| c.is_ascii_digit()) {
        return arg
            .parse()
            .map(PickTarget::Day)
            .map_err(|_| ApiError::invalid_command(format!("'{}' is not a day", arg)));
    }

    Ok(PickTarget::Date(parse_calendar_date("date", arg)?))
}

/// Resolves a pick against the displayed month.
fn resolve_pick(state: &AppState, target: PickTarget) -> Result<CalendarDate, ApiError> {
    match target {
        PickTarget::Date(date) => Ok(date),
        PickTarget::Day(day) => {
            let month = state.calendar.displayed;
            month.first_day().with_day(day).ok_or_else(|| {
                ApiError::not_selectable(format!("{} has no day {}", month.title(), day))
            })
        }
    }
}

fn calendar_and_form(state: &AppState) -> String {
    let view = state.calendar.view();
    let mut out = view::render_calendar(&view, &state.config);
    out.push('\n');
    out.push_str(&view::render_form(&view, &state.calendar.form));
    out
}

/// Runs one command.
///
/// ## Arguments
/// * `now` - the clock reading used if the command submits
pub async fn execute(
    state: &mut AppState,
    command: Command,
    now: DateTime<Utc>,
) -> Result<Reply, ApiError> {
    debug!(command = ?command, "Executing command");

    let text = match command {
        Command::Show => calendar_and_form(state),
        Command::Prev => {
            let view = calendar::prev_month(&mut state.calendar);
            view::render_calendar(&view, &state.config)
        }
        Command::Next => {
            let view = calendar::next_month(&mut state.calendar);
            view::render_calendar(&view, &state.config)
        }
        Command::Today => {
            let view = calendar::go_today(&mut state.calendar);
            view::render_calendar(&view, &state.config)
        }
        Command::Pick(target) => {
            let date = resolve_pick(state, target)?;
            calendar::select_date(&mut state.calendar, date)?;
            calendar_and_form(state)
        }
        Command::Clear => {
            calendar::clear_selection(&mut state.calendar);
            calendar_and_form(state)
        }
        Command::Field(field, value) => {
            booking::set_field(&mut state.calendar, field, value);
            view::render_form(&state.calendar.view(), &state.calendar.form)
        }
        Command::Submit => {
            let confirmation = booking::submit_booking(&state.db, &mut state.calendar, now).await?;
            let mut out = view::render_confirmation(&confirmation, &state.config);
            out.push('\n');
            out.push_str(&view::render_calendar(&state.calendar.view(), &state.config));
            out
        }
        Command::Bookings => {
            let bookings = booking::list_bookings(&state.db, &mut state.calendar).await;
            view::render_bookings(&bookings)
        }
        Command::Config => {
            let config = config::get_config(&state.config);
            serde_json::to_string_pretty(&config)
                .map_err(|e| ApiError::internal(e.to_string()))?
        }
        Command::Help => HELP.to_string(),
        Command::Quit => return Ok(Reply::Quit),
    };

    Ok(Reply::Output(text))
}

/// Runs the interactive prompt until `quit`, Ctrl-C or Ctrl-D.
pub async fn run_repl(mut state: AppState) -> Result<(), ReadlineError> {
    let mut editor = DefaultEditor::new()?;

    println!("{}", calendar_and_form(&state));
    println!("Type 'help' for commands.");

    loop {
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        };

        if !line.trim().is_empty() {
            if let Err(e) = editor.add_history_entry(line.as_str()) {
                debug!(error = %e, "Could not record history entry");
            }
        }

        let outcome = match parse_command(&line) {
            Ok(command) => execute(&mut state, command, Utc::now()).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(Reply::Output(text)) => println!("{}", text),
            Ok(Reply::Quit) => break,
            Err(e) => {
                debug!(code = ?e.code, "Command refused");
                println!("! {}", e.message);
            }
        }
    }

    info!("Prompt closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::{ConfigState, DbState};
    use chrono::TimeZone;
    use lodge_core::{Booking, Selection};
    use lodge_db::{Database, DbConfig};

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_710_000_123_456).unwrap()
    }

    async fn state_with(bookings: &[Booking]) -> AppState {
        let db = DbState::new(Database::new(DbConfig::in_memory()).await.unwrap());
        db.bookings().save(bookings).await;
        AppState::load(db, ConfigState::default(), date("2024-03-01")).await
    }

    async fn run(state: &mut AppState, line: &str) -> Result<Reply, ApiError> {
        execute(state, parse_command(line)?, now()).await
    }

    fn existing() -> Booking {
        Booking {
            booking_number: "BK00000001".to_string(),
            start: date("2024-03-10"),
            end: date("2024-03-12"),
            guest_name: "Han".to_string(),
            guest_phone: "010".to_string(),
            guest_email: None,
            special_requests: None,
        }
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse_command("next").unwrap(), Command::Next);
        assert_eq!(parse_command("  PREV ").unwrap(), Command::Prev);
        assert_eq!(parse_command("t").unwrap(), Command::Today);
        assert_eq!(parse_command("").unwrap(), Command::Show);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_pick() {
        assert_eq!(
            parse_command("pick 2024-03-05").unwrap(),
            Command::Pick(PickTarget::Date(date("2024-03-05")))
        );
        assert_eq!(parse_command("pick 9").unwrap(), Command::Pick(PickTarget::Day(9)));

        let missing = parse_command("pick").unwrap_err();
        assert_eq!(missing.code, ErrorCode::InvalidCommand);

        let garbage = parse_command("pick tomorrow").unwrap_err();
        assert_eq!(garbage.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_parse_fields_keep_rest_of_line() {
        assert_eq!(
            parse_command("name  Kim Min-jun ").unwrap(),
            Command::Field(FormField::GuestName, "Kim Min-jun".to_string())
        );
        assert_eq!(
            parse_command("requests late arrival, 2 towels").unwrap(),
            Command::Field(FormField::SpecialRequests, "late arrival, 2 towels".to_string())
        );
        assert_eq!(
            parse_command("email").unwrap(),
            Command::Field(FormField::GuestEmail, String::new())
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = parse_command("fly away").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCommand);
        assert!(err.message.contains("'fly'"));
    }

    #[tokio::test]
    async fn test_booked_pick_then_free_range_then_conflict() {
        let mut state = state_with(&[existing()]).await;

        let err = run(&mut state, "pick 2024-03-11").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DateBooked);
        assert_eq!(state.calendar.selection, Selection::Empty);

        run(&mut state, "pick 5").await.unwrap();
        run(&mut state, "pick 9").await.unwrap();
        assert_eq!(state.calendar.selection.nights(), Some(4));

        run(&mut state, "pick 5").await.unwrap();
        let err = run(&mut state, "pick 15").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RangeConflict);
        assert_eq!(state.calendar.selection, Selection::Empty);
        assert_eq!(state.db.bookings().load().await.len(), 1);
    }

    #[tokio::test]
    async fn test_full_booking_session() {
        let mut state = state_with(&[]).await;

        for line in ["pick 5", "pick 9", "name A", "phone 123"] {
            run(&mut state, line).await.unwrap();
        }

        let reply = run(&mut state, "submit").await.unwrap();
        let Reply::Output(text) = reply else {
            panic!("expected output");
        };
        assert!(text.contains("BK00123456"));

        let stored = state.db.bookings().load().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].start, date("2024-03-05"));
        assert_eq!(stored[0].end, date("2024-03-09"));
        assert_eq!(state.calendar.selection, Selection::Empty);

        let Reply::Output(listing) = run(&mut state, "bookings").await.unwrap() else {
            panic!("expected output");
        };
        assert!(listing.contains("BK00123456"));
    }

    #[tokio::test]
    async fn test_submit_with_blank_name_stores_nothing() {
        let mut state = state_with(&[]).await;

        for line in ["pick 5", "pick 9", "phone 123"] {
            run(&mut state, line).await.unwrap();
        }

        let err = run(&mut state, "submit").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(state.db.bookings().load().await.is_empty());
    }

    #[tokio::test]
    async fn test_pick_day_out_of_month() {
        let mut state = state_with(&[]).await;
        run(&mut state, "next").await.unwrap();

        let err = run(&mut state, "pick 31").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotSelectable);
        assert!(err.message.contains("2024년 4월"));
    }

    #[tokio::test]
    async fn test_config_command() {
        let mut state = state_with(&[]).await;
        let Reply::Output(text) = run(&mut state, "config").await.unwrap() else {
            panic!("expected output");
        };
        assert!(text.contains("\"storageKey\": \"bookings\""));
    }

    #[tokio::test]
    async fn test_quit() {
        let mut state = state_with(&[]).await;
        assert_eq!(run(&mut state, "quit").await.unwrap(), Reply::Quit);
    }
}
