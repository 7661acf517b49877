//! Encoding a flat struct as a form body.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_form::{to_string, to_values};
use std::error::Error;

#[derive(Debug, Serialize)]
struct Signup {
    name: String,
    email: String,
    age: u32,
    #[serde(rename = "newsletter,omitempty")]
    newsletter: bool,
    #[serde(rename = "-")]
    password_hash: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let signup = Signup {
        name: "Alice Johnson".to_string(),
        email: "alice@example.com".to_string(),
        age: 0,
        newsletter: false,
        password_hash: "$2b$12$...".to_string(),
    };

    // Zero values render empty, omitempty fields vanish, "-" fields never appear.
    let body = to_string(&signup)?;
    println!("Form body:\n{}\n", body);
    assert_eq!(body, "age=&email=alice%40example.com&name=Alice+Johnson");

    let values = to_values(&signup)?;
    for (key, all) in &values {
        let text: Vec<_> = all.iter().map(|v| String::from_utf8_lossy(v)).collect();
        println!("{:<8} {:?}", key, text);
    }

    Ok(())
}
