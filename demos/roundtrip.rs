//! Escaping text and decoding it back.
//!
//! Run with: cargo run --example roundtrip

use escapist::{escape, unescape, unescape_to_string, Error, Specials};
use std::error::Error as StdError;

fn main() -> Result<(), Box<dyn StdError>> {
    let quotes = Specials::from("'\"");
    let original = r#"She said "it's fine" and left."#;

    // Escape the quotes
    let escaped = escape(original, &quotes);
    println!("Original: {}", original);
    println!("Escaped:  {}\n", escaped);

    // Decode it again
    let decoded = unescape_to_string(&escaped)?;
    println!("Decoded:  {}", decoded);
    assert_eq!(decoded, original);

    // Already escaped quotes are left alone
    println!("Escaped twice: {}\n", escape(&escaped, &quotes));

    // Every kind of sequence
    let sequences = r"tab:\t nul:\0 latin:\xe9 short:\u00fc full:\u{1F980} pair:\ud83d\udca9 other:\q";
    println!("Sequences: {}", sequences);
    println!("Decoded:   {:?}\n", unescape_to_string(sequences)?);

    // Unpaired surrogates survive unescape but not conversion to String
    let lone = unescape(r"x\ud83d")?;
    println!("Code points: {:?}", lone);
    println!("Lossy:       {}", lone.to_string_lossy());
    if let Err(err) = lone.into_string() {
        println!("As String:   {}\n", err);
    }

    // Malformed sequences report where they start
    match unescape("first line\nsecond \\x4") {
        Err(Error::InvalidHexEscape { line, col, sequence }) => {
            println!("Bad hex escape {:?} at {}:{}", sequence, line, col);
        }
        other => println!("Unexpected: {:?}", other),
    }

    Ok(())
}
