use crate::prelude::{println, *};
use fizzbuzz_core::convert::convert;

#[derive(Debug, clap::Parser)]
#[command(name = "run")]
#[command(about = "Print the FizzBuzz sequence for a range of numbers")]
pub struct App {
    /// First number of the sequence
    #[arg(long, default_value = "1")]
    pub from: i32,

    /// Last number of the sequence (inclusive)
    #[arg(long, default_value = "100")]
    pub to: i32,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if app.from > app.to {
        return Err(eyre!(
            "Invalid range: {} is greater than {}",
            app.from,
            app.to
        ));
    }

    if global.verbose {
        println!("Converting numbers {} through {}...", app.from, app.to);
        println!();
    }

    print!("{}", format_sequence(app.from, app.to));

    Ok(())
}

fn format_sequence(from: i32, to: i32) -> String {
    let mut result = String::new();

    for number in from..=to {
        result.push_str(&convert(number));
        result.push('\n');
    }

    result
}
