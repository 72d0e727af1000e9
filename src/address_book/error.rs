#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BookError {
    #[error("Имя не может быть пустым.")]
    EmptyName,
    #[error("Номер должен содержать 10 цифр.")]
    BadPhone,
    #[error("Формат даты: DD.MM.YYYY")]
    BadBirthday,
    #[error("Номер {0} не найден.")]
    PhoneMissing(String),
    #[error("Контакт {0} не найден.")]
    ContactMissing(String),
    #[error("Ожидалось аргументов: {expected}, получено: {got}.")]
    WrongArgCount { expected: usize, got: usize },
    #[error("Команда не поддерживается адресной книгой.")]
    UnsupportedCommand,
}
