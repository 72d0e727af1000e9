use std::io::{self, Write};

#[derive(Debug, PartialEq, Eq)]
pub enum CommandType {
    Hello,
    Add(Vec<String>), // name, phone (10 digits)
    AddBirthday(Vec<String>), // name, date as DD.MM.YYYY
    All,
    Birthdays,
    Exit,
    Unknown
}

// Blocks until the user types something. Empty lines are ignored silently.
pub fn wait_for_command() -> CommandType {
    loop {
        print!("Enter a command: ");
        io::stdout().flush().expect("Failed to flush stdout");
        let mut input = String::new();
        let bytes_read = io::stdin().read_line(&mut input).expect("Failed to read line");
        if bytes_read == 0 {
            // stdin is closed, nothing more will ever arrive
            return CommandType::Exit;
        }
        if let Some(cmd) = parse_input(&input) {
            return cmd;
        }
    }
}

// First token picks the command (case-insensitive), the rest are positional
// arguments. None for a blank line.
pub fn parse_input(input: &str) -> Option<CommandType> {
    let mut parts = input.split_whitespace();
    let cmd = parts.next()?.to_lowercase();
    let args: Vec<String> = parts.map(|s| s.to_string()).collect();

    let command = match cmd.as_str() {
        "close" | "exit" => CommandType::Exit,
        "hello" => CommandType::Hello,
        "add" => CommandType::Add(args),
        "add-birthday" => CommandType::AddBirthday(args),
        "all" => CommandType::All,
        "birthdays" => CommandType::Birthdays,
        _ => CommandType::Unknown
    };
    Some(command)
}

#[test]
fn test_parse_input() {
    assert!(parse_input("") == None);
    assert!(parse_input("   \t  \n") == None);
    assert!(parse_input("hello\n") == Some(CommandType::Hello));
    assert!(parse_input("HeLLo") == Some(CommandType::Hello));
    assert!(parse_input("close") == Some(CommandType::Exit));
    assert!(parse_input("EXIT") == Some(CommandType::Exit));
    assert!(parse_input("all") == Some(CommandType::All));
    assert!(parse_input("birthdays") == Some(CommandType::Birthdays));
    assert!(parse_input("whatever 123") == Some(CommandType::Unknown));
    {
        // arguments keep their case, only the command is lowercased
        let expected = CommandType::Add(vec!["Oleg".to_string(), "1234567890".to_string()]);
        assert!(parse_input("ADD Oleg 1234567890") == Some(expected));
    }
    {
        // argument count is not the parser's business
        let expected = CommandType::AddBirthday(vec!["Oleg".to_string()]);
        assert!(parse_input("add-birthday Oleg") == Some(expected));
    }
}
