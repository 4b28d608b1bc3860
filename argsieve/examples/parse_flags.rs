//! Example demonstrating flag and keyword parsing
//!
//! Run with your own arguments to see how they are classified:
//!
//! ```text
//! RUST_LOG=trace cargo run -p argsieve --example parse_flags -- -vo out.txt input.txt
//! ```

use argsieve::{Flag, ParseResult, Parser, ParserConfig};
use tracing_subscriber::{EnvFilter, fmt};

fn print_result(parser: &Parser, result: &ParseResult) {
    println!("  Keywords: {:?}", result.keywords);

    println!("  Flags:");
    for (handle, parameter) in &result.flags {
        if let Some(flag) = parser.registry().get(*handle) {
            if flag.takes_parameter {
                println!("    --{} (-{}) = \"{}\"", flag.token, flag.code, parameter);
            } else {
                println!("    --{} (-{})", flag.token, flag.code);
            }
        }
    }

    if result.is_clean() {
        println!("  No errors");
    } else {
        println!("  Errors:");
        for message in result.error_messages() {
            println!("    {message}");
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    println!("=== Flag and Keyword Parser Example ===\n");

    let mut parser = Parser::with_config(ParserConfig::keyword_range(1, 2));
    let verbose = parser.add_flag(Flag::new("verbose", 'v'))?;
    parser.add_flag(Flag::new("help", 'h'))?;
    parser.add_flag(Flag::with_parameter("output", 'o'))?;
    parser.add_flag(Flag::with_parameter("level", 'l'))?;

    // Example 1: well-formed input
    println!("Example 1: well-formed input");
    println!("----------------------------");
    let result = parser.parse(&["-vo", "out.txt", "input.txt", "--level", "3"])?;
    print_result(&parser, &result);
    println!("  Verbose: {}", result.is_set(verbose));

    // Example 2: everything that can go wrong short of a fatal error
    println!("\nExample 2: flawed input");
    println!("-----------------------");
    let result = parser.parse(&["-help", "-", "--colour", "a", "b", "c", "-o"])?;
    print_result(&parser, &result);

    // Example 3: fatal errors are returned, not collected
    println!("\nExample 3: fatal error");
    println!("----------------------");
    match parser.parse(&["input.txt", ""]) {
        Ok(_) => println!("  unexpectedly parsed"),
        Err(err) => println!("  Error: {err}"),
    }

    // Example 4: the arguments this program was started with
    println!("\nExample 4: process arguments");
    println!("----------------------------");
    match parser.parse_env() {
        Ok(result) => print_result(&parser, &result),
        Err(err) => println!("  Error: {err}"),
    }

    Ok(())
}
