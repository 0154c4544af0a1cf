use resxcat::{formats::ResxFormat, traits::Parser};

use crate::validation::validate_file_path;

/// Read one `.resx` document and print all its entries.
pub fn run_view_command(input: &str, full: bool) -> Result<(), String> {
    validate_file_path(input)?;

    let format =
        ResxFormat::read_from(input).map_err(|e| format!("Failed to read {}: {}", input, e))?;

    if format.entries.is_empty() {
        println!("No entries found in {}", input);
        return Ok(());
    }

    println!("Entries: {}", format.entries.len());

    for (i, entry) in format.entries.iter().enumerate() {
        println!("\n  Entry {}: {}", i + 1, entry.name);

        if let Some(comment) = &entry.comment {
            println!("    Comment: {}", comment);
        }

        match &entry.value {
            Some(value) => {
                if full || value.chars().count() <= 50 {
                    println!("    Value: {}", value);
                } else {
                    let truncated: String = value.chars().take(50).collect();
                    println!("    Value: {}...", truncated);
                }
            }
            None => println!("    Value: <absent>"),
        }
    }

    Ok(())
}
