use crate::address_book::error::BookError;

use chrono::NaiveDate;

use std::fmt;

const PHONE_LEN: usize = 10;
const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

#[derive(Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self, BookError> {
        if value.is_empty() {
            return Err(BookError::EmptyName);
        }
        Ok(Name(value.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> Result<Self, BookError> {
        if value.len() == PHONE_LEN && value.chars().all(|c| c.is_ascii_digit()) {
            Ok(Phone(value.to_string()))
        }
        else {
            Err(BookError::BadPhone)
        }
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Birthday {
    value: String,
    date: NaiveDate
}

impl Birthday {
    pub fn new(value: &str) -> Result<Self, BookError> {
        match NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Birthday { value: value.to_string(), date: date }),
            Err(_) => Err(BookError::BadBirthday)
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[test]
fn test_name_validation() {
    assert!(Name::new("").is_err());
    {
        let name = Name::new("Oleg").expect("Valid name rejected");
        assert!(name.value() == "Oleg");
    }
}

#[test]
fn test_phone_validation() {
    {
        let phone = Phone::new("0123456789").expect("Valid phone rejected");
        assert!(phone.value() == "0123456789");
        assert!(phone.to_string() == "0123456789");
    }
    assert!(Phone::new("123456789").is_err());
    assert!(Phone::new("12345678901").is_err());
    assert!(Phone::new("12345о7890").is_err());
    assert!(Phone::new("12345 7890").is_err());
    assert!(Phone::new("").is_err());
    assert!(Phone::new("Phone::new").is_err());
}

#[test]
fn test_birthday_validation() {
    {
        let birthday = Birthday::new("29.02.2024").expect("Valid date rejected");
        assert!(birthday.to_string() == "29.02.2024");
        assert!(birthday.date() == NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }
    assert!(Birthday::new("29.02.2023").is_err());
    assert!(Birthday::new("32.01.2000").is_err());
    assert!(Birthday::new("01.13.2000").is_err());
    assert!(Birthday::new("2000-01-01").is_err());
    assert!(Birthday::new("01/01/2000").is_err());
    assert!(Birthday::new("").is_err());
}
