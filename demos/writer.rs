//! Streaming form bodies into a writer with Encoder.
//!
//! Run with: cargo run --example writer

use chrono::{TimeZone, Utc};
use serde::Serialize;
use serde_form::time::Time;
use serde_form::Encoder;
use std::error::Error;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
struct Heartbeat {
    host: String,
    seq: u64,
    at: Time<chrono::DateTime<Utc>>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let beats = (0..3).map(|seq| Heartbeat {
        host: "db-1".to_string(),
        seq,
        at: Time(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, seq as u32).unwrap()),
    });

    let stdout = io::stdout();
    let mut encoder = Encoder::new(stdout.lock()).keep_zeros(true);

    for beat in beats {
        encoder.encode(&beat)?;
        encoder.get_mut().write_all(b"\n")?;
    }

    println!("\nencoded with {:?}", encoder.options());
    Ok(())
}
