mod error;
mod fields;
mod record;

pub use crate::address_book::error::BookError;
pub use crate::address_book::record::Record;

use crate::cli::CommandType;

use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use itertools::Itertools;

use std::collections::HashMap;

const UPCOMING_WINDOW_DAYS: i64 = 7;
const CONGRATULATION_FORMAT: &str = "%d.%m.%Y";

pub struct Greeting {
    pub name: String,
    pub congratulation_date: String
}

pub struct AddressBook {
    records: HashMap<String, Record>
}

// Feb 29 in a year without one is celebrated on Mar 1.
fn birthday_occurrence(birthday: NaiveDate, year: i32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()) {
        Some(date) => date,
        None => NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year")
    }
}

fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date
    }
}

fn two_args(args: &[String]) -> Result<(&str, &str), BookError> {
    match args {
        [first, second] => Ok((first, second)),
        _ => Err(BookError::WrongArgCount { expected: 2, got: args.len() })
    }
}

impl AddressBook {
    pub fn new() -> AddressBook {
        AddressBook { records: HashMap::new() }
    }

    pub fn handle_command(&mut self, cmd: CommandType) -> Result<String, BookError> {
        match cmd {
            CommandType::Add(args) => self.add_contact(&args),
            CommandType::AddBirthday(args) => self.add_contact_birthday(&args),
            CommandType::All => Ok(self.list_contacts()),
            CommandType::Birthdays => Ok(self.birthdays_report()),
            _ => Err(BookError::UnsupportedCommand)
        }
    }

    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.get_name().to_string(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    pub fn delete(&mut self, name: &str) -> Result<(), BookError> {
        match self.records.remove(name) {
            Some(_) => Ok(()),
            None => Err(BookError::ContactMissing(name.to_string()))
        }
    }

    pub fn upcoming_birthdays(&self) -> Vec<Greeting> {
        self.upcoming_birthdays_on(Local::now().date_naive())
    }

    fn upcoming_birthdays_on(&self, today: NaiveDate) -> Vec<Greeting> {
        let mut upcoming = Vec::new();
        for record in self.records.values() {
            let birthday = match record.get_birthday() {
                Some(b) => b.date(),
                None => { continue; }
            };
            let mut occurrence = birthday_occurrence(birthday, today.year());
            if occurrence < today {
                occurrence = birthday_occurrence(birthday, today.year() + 1);
            }
            let days_until = (occurrence - today).num_days();
            if days_until <= UPCOMING_WINDOW_DAYS {
                let congrat_date = shift_off_weekend(occurrence);
                upcoming.push(Greeting {
                    name: record.get_name().to_string(),
                    congratulation_date: congrat_date.format(CONGRATULATION_FORMAT).to_string()
                });
            }
        }
        upcoming
    }

    fn add_contact(&mut self, args: &[String]) -> Result<String, BookError> {
        let (name, number) = two_args(args)?;
        match self.find_mut(name) {
            Some(record) => {
                record.add_phone(number)?;
                Ok("Контакт обновлен.".to_string())
            }
            None => {
                // phone is validated before the record lands in the book,
                // a failed add never leaves a phoneless contact behind
                let mut record = Record::new(name)?;
                record.add_phone(number)?;
                self.add_record(record);
                Ok("Контакт добавлен.".to_string())
            }
        }
    }

    fn add_contact_birthday(&mut self, args: &[String]) -> Result<String, BookError> {
        let (name, b_day_str) = two_args(args)?;
        match self.find_mut(name) {
            Some(record) => {
                record.add_birthday(b_day_str)?;
                Ok("Дата рождения добавлена.".to_string())
            }
            None => Err(BookError::ContactMissing(name.to_string()))
        }
    }

    fn list_contacts(&self) -> String {
        self.records.values().map(|r| r.to_string()).join("\n")
    }

    fn birthdays_report(&self) -> String {
        let upcoming = self.upcoming_birthdays();
        if upcoming.is_empty() {
            return "На этой неделе дней рождения нет.".to_string();
        }
        upcoming.iter()
            .map(|g| format!("{}: поздравляем {}", g.name, g.congratulation_date))
            .join("\n")
    }
}

#[cfg(test)]
fn record_with_birthday(name: &str, b_day_str: &str) -> Record {
    let mut record = Record::new(name).expect("Failed to create record");
    record.add_birthday(b_day_str).expect("Failed to add birthday");
    record
}

#[test]
fn test_find_and_delete() {
    let mut book = AddressBook::new();
    let mut record = Record::new("Oleg").expect("Failed to create record");
    record.add_phone("1234567890").expect("Failed to add phone");
    book.add_record(record);

    assert!(book.find("Oleg").is_some());
    assert!(book.find("oleg").is_none());
    assert!(book.find("Olga").is_none());

    {
        let result = book.delete("Olga");
        assert!(result == Err(BookError::ContactMissing("Olga".to_string())));
        assert!(result.unwrap_err().to_string() == "Контакт Olga не найден.");
    }
    book.delete("Oleg").expect("Failed to delete contact");
    assert!(book.find("Oleg").is_none());
}

#[test]
fn test_add_record_overwrites_same_name() {
    let mut book = AddressBook::new();
    let mut record = Record::new("Oleg").expect("Failed to create record");
    record.add_phone("1111111111").expect("Failed to add phone");
    book.add_record(record);
    book.add_record(Record::new("Oleg").expect("Failed to create record"));

    let stored = book.find("Oleg").expect("Contact is gone");
    assert!(stored.phone_count() == 0);
}

#[test]
fn test_add_contact_command() {
    let mut book = AddressBook::new();
    {
        let args = vec!["Oleg".to_string(), "1234567890".to_string()];
        let result = book.handle_command(CommandType::Add(args));
        assert!(result == Ok("Контакт добавлен.".to_string()));
        assert!(book.find("Oleg").expect("Contact is gone").phone_count() == 1);
    }
    {
        let args = vec!["Oleg".to_string(), "0987654321".to_string()];
        let result = book.handle_command(CommandType::Add(args));
        assert!(result == Ok("Контакт обновлен.".to_string()));
        assert!(book.find("Oleg").expect("Contact is gone").phone_count() == 2);
    }
    {
        // a bad phone on a new name must not create the contact
        let args = vec!["Olga".to_string(), "123".to_string()];
        let result = book.handle_command(CommandType::Add(args));
        assert!(result == Err(BookError::BadPhone));
        assert!(book.find("Olga").is_none());
    }
    {
        let args = vec!["Oleg".to_string()];
        let result = book.handle_command(CommandType::Add(args));
        assert!(result == Err(BookError::WrongArgCount { expected: 2, got: 1 }));
    }
}

#[test]
fn test_add_birthday_command() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Oleg").expect("Failed to create record"));
    {
        let args = vec!["Oleg".to_string(), "18.05.1990".to_string()];
        let result = book.handle_command(CommandType::AddBirthday(args));
        assert!(result == Ok("Дата рождения добавлена.".to_string()));
    }
    {
        let args = vec!["Oleg".to_string(), "18-05-1990".to_string()];
        let result = book.handle_command(CommandType::AddBirthday(args));
        assert!(result == Err(BookError::BadBirthday));
    }
    {
        let args = vec!["Olga".to_string(), "18.05.1990".to_string()];
        let result = book.handle_command(CommandType::AddBirthday(args));
        assert!(result == Err(BookError::ContactMissing("Olga".to_string())));
    }
    {
        let args = vec!["Oleg".to_string(), "18.05.1990".to_string(), "extra".to_string()];
        let result = book.handle_command(CommandType::AddBirthday(args));
        assert!(result == Err(BookError::WrongArgCount { expected: 2, got: 3 }));
    }
}

#[test]
fn test_upcoming_birthdays_window() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Saturday", "18.05.1990"));
    book.add_record(record_with_birthday("Sunday", "19.05.1991"));
    book.add_record(record_with_birthday("Today", "15.05.1992"));
    book.add_record(record_with_birthday("Midweek", "22.05.1993"));
    book.add_record(record_with_birthday("TooFar", "23.05.1994"));
    book.add_record(record_with_birthday("Passed", "14.05.1995"));
    book.add_record(Record::new("NoBirthday").expect("Failed to create record"));

    // 2024-05-15 is a Wednesday
    let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
    let upcoming = book.upcoming_birthdays_on(today);
    assert!(upcoming.len() == 4);

    let congrat_for = |name: &str| -> String {
        upcoming.iter().find(|g| g.name == name).expect("Contact missing from upcoming list").congratulation_date.clone()
    };
    assert!(congrat_for("Saturday") == "20.05.2024");
    assert!(congrat_for("Sunday") == "20.05.2024");
    assert!(congrat_for("Today") == "15.05.2024");
    assert!(congrat_for("Midweek") == "22.05.2024");
}

#[test]
fn test_upcoming_birthdays_year_rollover() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("NewYear", "03.01.1995"));

    // 2024-12-30 is a Monday, the next occurrence is already in 2025
    let today = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
    let upcoming = book.upcoming_birthdays_on(today);
    assert!(upcoming.len() == 1);
    assert!(upcoming[0].name == "NewYear");
    assert!(upcoming[0].congratulation_date == "03.01.2025");

    // in midsummer the same birthday is far away
    let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    assert!(book.upcoming_birthdays_on(today).is_empty());
}

#[test]
fn test_upcoming_birthdays_leap_day() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Leapling", "29.02.2000"));

    // 2025 has no Feb 29, the occurrence moves to Mar 1 which is a Saturday
    let today = NaiveDate::from_ymd_opt(2025, 2, 25).unwrap();
    let upcoming = book.upcoming_birthdays_on(today);
    assert!(upcoming.len() == 1);
    assert!(upcoming[0].congratulation_date == "03.03.2025");

    // 2024 has the real date, 2024-02-29 is a Thursday
    let today = NaiveDate::from_ymd_opt(2024, 2, 26).unwrap();
    let upcoming = book.upcoming_birthdays_on(today);
    assert!(upcoming.len() == 1);
    assert!(upcoming[0].congratulation_date == "29.02.2024");
}

#[test]
fn test_birthdays_report() {
    let mut book = AddressBook::new();
    assert!(book.handle_command(CommandType::Birthdays) == Ok("На этой неделе дней рождения нет.".to_string()));
}

#[test]
fn test_list_contacts() {
    let mut book = AddressBook::new();
    assert!(book.handle_command(CommandType::All) == Ok(String::new()));

    let mut record = Record::new("Oleg").expect("Failed to create record");
    record.add_phone("1234567890").expect("Failed to add phone");
    book.add_record(record);
    let listing = book.handle_command(CommandType::All).expect("Listing failed");
    assert!(listing == "Контакт: Oleg, телефоны: 1234567890");
}

#[test]
fn test_exit_does_not_reach_the_book() {
    let mut book = AddressBook::new();
    assert!(book.handle_command(CommandType::Exit) == Err(BookError::UnsupportedCommand));
}
