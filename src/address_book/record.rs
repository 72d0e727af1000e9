use crate::address_book::error::BookError;
use crate::address_book::fields::{Birthday, Name, Phone};

use itertools::Itertools;

use std::fmt;

pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>
}

impl Record {
    pub fn new(name: &str) -> Result<Self, BookError> {
        Ok(Record { name: Name::new(name)?, phones: Vec::new(), birthday: None })
    }

    pub fn get_name(&self) -> &str {
        self.name.value()
    }

    pub fn get_birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, number: &str) -> Result<(), BookError> {
        self.phones.push(Phone::new(number)?);
        Ok(())
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == number)
    }

    pub fn remove_phone(&mut self, number: &str) -> Result<(), BookError> {
        match self.phones.iter().position(|p| p.value() == number) {
            Some(idx) => {
                self.phones.remove(idx);
                Ok(())
            }
            None => Err(BookError::PhoneMissing(number.to_string()))
        }
    }

    // New number is validated before the old one is removed, so a malformed
    // new number leaves the list untouched. The not-found error comes from
    // the removal itself. The new phone is appended, not put in the old slot.
    pub fn edit_phone(&mut self, old_number: &str, new_number: &str) -> Result<(), BookError> {
        let new_phone = Phone::new(new_number)?;
        self.remove_phone(old_number)?;
        self.phones.push(new_phone);
        Ok(())
    }

    pub fn add_birthday(&mut self, b_day_str: &str) -> Result<(), BookError> {
        self.birthday = Some(Birthday::new(b_day_str)?);
        Ok(())
    }

    #[cfg(test)]
    pub(super) fn phone_count(&self) -> usize {
        self.phones.len()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones_str = self.phones.iter().map(|p| p.value()).join("; ");
        write!(f, "Контакт: {}, телефоны: {}", self.name, phones_str)?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", день рождения: {}", birthday)?;
        }
        Ok(())
    }
}

#[test]
fn test_phone_operations() {
    let mut record = Record::new("Oleg").expect("Failed to create record");

    record.add_phone("1111111111").expect("Failed to add phone");
    record.add_phone("2222222222").expect("Failed to add phone");
    record.add_phone("1111111111").expect("Duplicates are allowed");
    assert!(record.phone_count() == 3);
    assert!(record.add_phone("333").is_err());
    assert!(record.phone_count() == 3);

    assert!(record.find_phone("2222222222").is_some());
    assert!(record.find_phone("3333333333").is_none());

    {
        let result = record.remove_phone("4444444444");
        assert!(result == Err(BookError::PhoneMissing("4444444444".to_string())));
        assert!(result.unwrap_err().to_string().contains("4444444444"));
    }
    record.remove_phone("1111111111").expect("Failed to remove phone");
    assert!(record.phone_count() == 2);
    assert!(record.find_phone("1111111111").is_some());
}

#[test]
fn test_edit_phone() {
    let mut record = Record::new("Oleg").expect("Failed to create record");
    record.add_phone("1111111111").expect("Failed to add phone");
    record.add_phone("2222222222").expect("Failed to add phone");

    record.edit_phone("1111111111", "3333333333").expect("Failed to edit phone");
    assert!(record.find_phone("1111111111").is_none());
    // edited number goes to the end of the list
    assert!(record.to_string() == "Контакт: Oleg, телефоны: 2222222222; 3333333333");

    {
        let result = record.edit_phone("9999999999", "4444444444");
        assert!(result == Err(BookError::PhoneMissing("9999999999".to_string())));
    }
    {
        // malformed new number is rejected before anything is removed
        let result = record.edit_phone("2222222222", "123");
        assert!(result == Err(BookError::BadPhone));
        assert!(record.find_phone("2222222222").is_some());
    }
}

#[test]
fn test_record_display() {
    let mut record = Record::new("Oleg").expect("Failed to create record");
    assert!(record.to_string() == "Контакт: Oleg, телефоны: ");

    record.add_phone("1234567890").expect("Failed to add phone");
    record.add_phone("0987654321").expect("Failed to add phone");
    assert!(record.to_string() == "Контакт: Oleg, телефоны: 1234567890; 0987654321");

    record.add_birthday("01.01.2000").expect("Failed to add birthday");
    assert!(record.to_string() == "Контакт: Oleg, телефоны: 1234567890; 0987654321, день рождения: 01.01.2000");

    record.add_birthday("02.02.2002").expect("Failed to overwrite birthday");
    assert!(record.to_string() == "Контакт: Oleg, телефоны: 1234567890; 0987654321, день рождения: 02.02.2002");
}
