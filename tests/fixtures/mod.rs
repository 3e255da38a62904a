//! Shared sample data for integration tests.

use chrono::NaiveDate;
use contact_book::{ContactRecord, ContactStore, NewContact};

/// Fixed "today" so birth-date checks do not depend on the wall clock.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// A store using [`fixed_today`].
#[allow(dead_code)]
pub fn test_store() -> ContactStore {
    ContactStore::new().with_clock(fixed_today)
}

/// Valid form input.
#[allow(dead_code)]
pub fn sample_input(first: &str, last: &str, email: &str) -> NewContact {
    NewContact {
        first_name: first.to_string(),
        last_name: last.to_string(),
        middle_name: "Petrovich".to_string(),
        address: "Nevsky 28".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1988, 11, 23).unwrap(),
        email: email.to_string(),
        phones: "+7 (812) 555-01-01, 8 800 100 20 30".to_string(),
    }
}

/// A valid record with already-normalized phone numbers and no embedded commas.
#[allow(dead_code)]
pub fn sample_record(first: &str, last: &str, email: &str) -> ContactRecord {
    ContactRecord {
        address: "Nevsky 28".to_string(),
        birth_date: NaiveDate::from_ymd_opt(1988, 11, 23),
        email: email.to_string(),
        phone_numbers: vec!["+78125550101".to_string(), "88001002030".to_string()],
        ..ContactRecord::new(first, last, "Petrovich")
    }
}

/// Three-line contact file where every record is valid.
#[allow(dead_code)]
pub const CLEAN_FILE: &str = "\
Ivan,Petrov,Sergeevich,Lenina 1,01.02.1980,ivan@example.com,+74951234567
Olga,Smirnova,Ivanovna,Pushkina 10,15.07.1992,olga@mail.ru,88001234567;+79161112233
Anna,Kuznetsova,Olegovna,Arbat 3,30.12.1975,anna.k@example.org,4951112233
";
