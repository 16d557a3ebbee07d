use crate::record::Record;

/// Contacts shown on the roster page when no other source is given.
pub const SAMPLE_CONTACTS: [[(&str, &str); 5]; 3] = [
    [
        ("name", "John Wargo"),
        ("phone", "704.444.5566"),
        ("city", "Charlotte"),
        ("state", "North Carolina"),
        ("zip", "28222"),
    ],
    [
        ("name", "William Calhoun"),
        ("phone", "704.444.6655"),
        ("city", "Akron"),
        ("state", "Ohio"),
        ("zip", "44313"),
    ],
    [
        ("name", "Michael Palin"),
        ("phone", "432.889.5213"),
        ("city", "Washington"),
        ("state", "DC"),
        ("zip", "00102"),
    ],
];

pub fn sample_contacts() -> Vec<Record> {
    SAMPLE_CONTACTS
        .iter()
        .map(|fields| fields.iter().copied().collect())
        .collect()
}
