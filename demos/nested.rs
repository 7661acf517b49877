//! Composite keys for nested structs, maps and sequences.
//!
//! Run with: cargo run --example nested

use serde::Serialize;
use serde_form::{key, to_values, Options};
use std::collections::BTreeMap;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Address {
    street: String,
    city: String,
}

#[derive(Debug, Serialize)]
enum Contact {
    Email(String),
    Phone { country: u16, number: String },
}

#[derive(Debug, Serialize)]
struct Customer {
    name: String,
    addresses: Vec<Address>,
    contacts: Vec<Contact>,
    labels: BTreeMap<String, String>,
    avatar: Vec<u8>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut labels = BTreeMap::new();
    labels.insert("tier".to_string(), "gold".to_string());
    labels.insert("region.eu".to_string(), "yes".to_string());

    let customer = Customer {
        name: "Ada".to_string(),
        addresses: vec![
            Address {
                street: "12 Analytical Row".to_string(),
                city: "London".to_string(),
            },
            Address {
                street: "1 Engine Way".to_string(),
                city: "Cambridge".to_string(),
            },
        ],
        contacts: vec![
            Contact::Email("ada@example.com".to_string()),
            Contact::Phone {
                country: 44,
                number: "20 7946 0000".to_string(),
            },
        ],
        labels,
        avatar: b"PNG".to_vec(),
    };

    let values = to_values(&customer)?;
    println!("Flattened pairs:");
    for (k, all) in &values {
        // Split each key back into its original path.
        let path = key::split(k, '.', '\\');
        let text: Vec<_> = all.iter().map(|v| String::from_utf8_lossy(v)).collect();
        println!("  {:<32} {:<24} {:?}", k, text.join(","), path);
    }

    assert_eq!(values.get("addresses.1.city"), Some("Cambridge"));
    assert_eq!(values.get("contacts.1.Phone.country"), Some("44"));
    assert_eq!(values.get("labels.region\\.eu"), Some("yes"));
    assert_eq!(values.get("avatar"), Some("PNG"));

    println!("\nEncoded:\n{}", values.encode());

    let options = Options::default();
    let node = serde_form::to_node(&customer, &options)?;
    println!("\nTop-level keys: {:?}", node.as_map().map(|m| m.keys().collect::<Vec<_>>()));

    Ok(())
}
