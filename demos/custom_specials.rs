//! Choosing which code points get escaped.
//!
//! Run with: cargo run --example custom_specials

use escapist::{escape, strip_leading, Escape, Specials};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let text = r"cost: $5 \ path: C:\tmp ${name}";

    // Only dollar signs
    let dollars = Specials::from("$");
    println!("Dollars only:    {}", escape(text, &dollars));

    // Dollar signs and the marker itself
    let with_marker = Specials::new().with('$').with('\\');
    println!("Dollars and \\:   {}", escape(text, &with_marker));

    // Specials load from configuration as a JSON array
    let config = r#"["{", "}"]"#;
    let braces: Specials = serde_json::from_str(config)?;
    println!("From {}: {}", config, escape(text, &braces));
    println!("Back to JSON:    {}\n", serde_json::to_string(&braces)?);

    // Lazy escaping over any char iterator
    let shouted: String = Escape::new(text.chars().map(|c| c.to_ascii_uppercase()), &dollars).collect();
    println!("Lazy, uppercased: {}\n", shouted);

    // Indented templates
    let template = strip_leading(
        "name: Ada
         langs:
           - rust",
    );
    println!("{}", escape(&template, &Specials::from(":")));

    Ok(())
}
