use crate::prelude::{println, *};
use colored::Colorize;
use fizzbuzz_core::process::{process_input, Conversion};
use fizzbuzz_core::validate::{BATCH_SIZE, MAX_VALUE, MIN_VALUE};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, clap::Parser)]
#[command(name = "convert")]
#[command(about = "Convert a batch of five numbers given as an argument or read from stdin")]
pub struct App {
    /// Comma-separated numbers to convert (prompted on stdin when omitted)
    #[arg(value_name = "NUMBERS")]
    pub numbers: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let input = match app.numbers {
        Some(numbers) => numbers,
        None => prompt_for_numbers().await?,
    };

    if global.verbose {
        println!("Converting batch: {input}");
        println!();
    }

    let conversions = process_input(&input)?;

    if app.json {
        output_json(&conversions)?;
    } else {
        output_formatted(&conversions)?;
    }

    Ok(())
}

async fn prompt_for_numbers() -> Result<String> {
    println!(
        "Please enter {BATCH_SIZE} numbers separated by commas between {MIN_VALUE}-{MAX_VALUE} (e.g., 3,15,7,20,5):"
    );

    let mut reader = BufReader::new(tokio::io::stdin());
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .await
        .context("Failed to read the number batch from stdin")?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Convert a batch result to JSON, using the same shape as the HTTP API
fn format_conversions_json(conversions: &[Conversion]) -> Result<String> {
    serde_json::to_string_pretty(&serde_json::json!({ "results": conversions }))
        .map_err(|e| eyre!("JSON serialization failed: {}", e))
}

/// Convert a batch result to formatted text with colors
fn format_conversions_text(conversions: &[Conversion]) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "FizzBuzz Results:".bright_cyan().bold()));

    for conversion in conversions {
        result.push_str(&format!(
            "{} {} {}\n",
            conversion.number.to_string().bright_white(),
            "->".green(),
            colorize_result(&conversion.result)
        ));
    }

    result
}

fn colorize_result(result: &str) -> colored::ColoredString {
    match result {
        "FizzBuzz" => result.bright_magenta().bold(),
        "Fizz" => result.bright_yellow(),
        "Buzz" => result.bright_blue(),
        _ => result.normal(),
    }
}

fn output_json(conversions: &[Conversion]) -> Result<()> {
    let json = format_conversions_json(conversions)?;
    println!("{}", json);
    Ok(())
}

fn output_formatted(conversions: &[Conversion]) -> Result<()> {
    let formatted = format_conversions_text(conversions);
    print!("{}", formatted);
    Ok(())
}
