//! Command parser for the : command system

use crate::domain::Tab;

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Navigation commands
    Go(Tab),
    Tab(String),

    // Data commands
    Export,
    Reload,

    // Console
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim().to_string());

    match cmd.to_lowercase().as_str() {
        // Navigation
        "dashboard" | "dash" | "home" => Command::Go(Tab::Dashboard),
        "flights" | "fl" => Command::Go(Tab::Flights),
        "airports" | "apt" => Command::Go(Tab::Airports),
        "weather" | "wx" => Command::Go(Tab::Weather),
        "alerts" | "al" => Command::Go(Tab::Alerts),
        "tab" => match args.filter(|name| !name.is_empty()) {
            Some(name) => Command::Tab(name),
            None => Command::Unknown(input.to_string()),
        },

        // Data
        "export" | "exp" => Command::Export,
        "reload" => Command::Reload,

        // Console
        "help" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,

        _ => Command::Unknown(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(parse_command("flights"), Command::Go(Tab::Flights));
        assert_eq!(parse_command("wx"), Command::Go(Tab::Weather));
        assert_eq!(parse_command("  HOME "), Command::Go(Tab::Dashboard));
        assert_eq!(
            parse_command("tab airports"),
            Command::Tab("airports".to_string())
        );
    }

    #[test]
    fn test_parse_data_commands() {
        assert_eq!(parse_command("export"), Command::Export);
        assert_eq!(parse_command("exp"), Command::Export);
        assert_eq!(parse_command("reload"), Command::Reload);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            parse_command("radar"),
            Command::Unknown("radar".to_string())
        );
        assert_eq!(parse_command("tab"), Command::Unknown("tab".to_string()));
    }
}
