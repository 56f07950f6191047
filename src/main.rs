use std::fs;

use clap::Parser;

/// mk is a small, dynamically typed scripting language with first-class
/// functions, lexical closures, arrays, and hash maps.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells mk to read the program from a file instead of an inline script.
    #[arg(short, long)]
    file: bool,

    /// The inline script to run, or a path to one when --file is given.
    /// Omit it to start the interactive prompt.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        if let Err(e) = mk::repl::start() {
            eprintln!("{e}");
            std::process::exit(1);
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    match mk::interpret(&script) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
