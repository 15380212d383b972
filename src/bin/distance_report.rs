use std::env;
use std::process;

use editdist::{distance_report, Error};

fn run(args: &[String]) -> editdist::Result<()> {
    let pairs: Vec<(&str, &str)> = if args.is_empty() {
        // Default demo pairs
        vec![
            ("Steve", "Steven"),
            ("colour", "color"),
            ("whilst", "color"),
            ("book", "back"),
            ("hello", "helo"),
            ("", "abc"),
            ("abc", ""),
        ]
    } else {
        if args.len() % 2 != 0 {
            return Err(Error::invalid_input(
                "expected an even number of arguments (pairs of strings)",
            ));
        }
        args.chunks(2).map(|c| (c[0].as_str(), c[1].as_str())).collect()
    };

    println!("Damerau-Levenshtein Distance Examples:");
    println!("{}", "-".repeat(50));
    for line in distance_report(&pairs) {
        println!("{}", line);
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("error: {}", e);
        process::exit(2);
    }
}
