//! Choosing delimiters, escapes and zero handling with Options.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use serde_form::{to_string_with_options, Options};
use std::collections::BTreeMap;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Filter {
    field: String,
    min: i64,
    max: i64,
}

#[derive(Debug, Serialize)]
struct Query {
    filters: Vec<Filter>,
    tags: BTreeMap<String, bool>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut tags = BTreeMap::new();
    tags.insert("a.b".to_string(), true);
    tags.insert("c/d".to_string(), false);

    let query = Query {
        filters: vec![Filter {
            field: "price".to_string(),
            min: 0,
            max: 100,
        }],
        tags,
    };

    println!("Default ('.' delimiter, '\\' escape, zeros elided):");
    println!("{}\n", serde_form::to_string(&query)?);

    println!("Slash delimiter, '!' escape:");
    let slash = Options::new().with_delimiter('/').with_escape('!');
    println!("{}\n", to_string_with_options(&query, &slash)?);

    println!("Keep zero values:");
    let zeros = Options::new().with_zeros(true);
    println!("{}\n", to_string_with_options(&query, &zeros)?);

    // Options can also come from configuration files.
    let from_config: Options = serde_json::from_str(r#"{"delimiter": "_", "zeros": true}"#)?;
    from_config.validate()?;
    println!("From JSON config:");
    println!("{}\n", to_string_with_options(&query, &from_config)?);

    println!("Invalid options are rejected before encoding:");
    let broken = Options::new().with_escape('\0');
    match to_string_with_options(&query, &broken) {
        Ok(_) => unreachable!("a NUL escape is never valid"),
        Err(e) => println!("error: {}", e),
    }

    Ok(())
}
