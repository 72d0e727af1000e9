mod address_book;
mod cli;

use crate::address_book::{AddressBook, BookError};
use crate::cli::CommandType;

fn error_text(error: BookError) -> String {
    let text = error.to_string();
    if text.is_empty() {
        return "Ошибка ввода данных.".to_string();
    }
    text
}

fn main() {
    let mut book = AddressBook::new();
    println!("Welcome to the assistant bot!");

    loop {
        match cli::wait_for_command() {
            CommandType::Exit => {
                println!("Good bye!");
                break;
            }
            CommandType::Hello => { println!("How can I help you?"); }
            CommandType::Unknown => { println!("Неизвестная команда."); }
            cmd => {
                match book.handle_command(cmd) {
                    Ok(output) => {
                        // "all" on an empty book has nothing to say
                        if !output.is_empty() {
                            println!("{}", output);
                        }
                    }
                    Err(e) => { println!("{}", error_text(e)); }
                }
            }
        }
    }
}
