use phonebook_cleaner::{
    calllog::Discard,
    data::{
        phonebook::{load_from_reader, normalize, normalize_record},
        record::{Contact, RawRecord},
    },
    PhonebookError,
};

#[test]
fn ivanov_row_gets_canonical_phone() {
    let record = RawRecord::new(
        1,
        ["Ivanov", "Ivan", "", "Acme", "Dev", "+7 999 123 45 67", "i@x.com"],
    );
    let contact = normalize_record(&record, &Discard).unwrap();
    assert_eq!(
        contact,
        Contact {
            lastname: "Ivanov".into(),
            firstname: "Ivan".into(),
            surname: "".into(),
            organization: "Acme".into(),
            position: "Dev".into(),
            phone: "+7(999)123-45-67".into(),
            email: "i@x.com".into(),
        }
    );
}

#[test]
fn header_and_blank_rows_are_skipped() {
    let text = "lastname,firstname,surname,organization,position,phone,email\n\
                ,,,,,,\n\
                Ivanov Ivan,,,Acme,,8 999 123 45 67,\n";
    let rows = load_from_reader(text.as_bytes()).unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows[0].is_header());
    assert!(rows[1].is_blank());

    let contacts = normalize(&rows, &Discard).unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].firstname, "Ivan");
    assert_eq!(contacts[0].phone, "+7(999)123-45-67");
}

#[test]
fn extra_columns_are_ignored() {
    let record = RawRecord::new(4, ["A", "B", "C", "Org", "Pos", "", "e@x", "extra"]);
    let contact = normalize_record(&record, &Discard).unwrap();
    assert_eq!(contact.email, "e@x");
}

#[test]
fn short_row_reports_its_line() {
    let text = "Ivanov,Ivan,,Acme,Dev,+7 999 123 45 67,i@x.com\nPetrov,Petr,\n";
    let rows = load_from_reader(text.as_bytes()).unwrap();
    let err = normalize(&rows, &Discard).unwrap_err();
    match err {
        PhonebookError::MalformedRecord {
            record,
            expected,
            found,
        } => {
            assert_eq!(record, 2);
            assert_eq!(expected, 7);
            assert_eq!(found, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn crlf_input_reports_record_numbers() {
    let text = "lastname,firstname,surname,organization,position,phone,email\r\n\
                \"Ivanov\r\nIvan\",,,Acme,Dev,+7 999 123 45 67,i@x.com\r\n\
                \r\n\
                Petrov,Petr,\r\n";
    let rows = load_from_reader(text.as_bytes()).unwrap();
    let numbers: Vec<_> = rows.iter().map(|row| row.number).collect();
    assert_eq!(numbers, [1, 2, 3]);

    let err = normalize(&rows, &Discard).unwrap_err();
    assert_eq!(
        err.to_string(),
        "record 3: expected at least 7 fields, found 3"
    );
}
