//! Grinds number literals given on the command line and reports the outcome.

use std::process::ExitCode;

use clap::{Arg, ArgAction, Command, value_parser};
use jsonnum::{LexerOptions, grind_partitioned, grind_with};

fn cli() -> Command {
    Command::new("jsonnum-grind")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Checks that JSON number lexing is independent of how input is split")
        .arg(
            Arg::new("INPUT")
                .help("Number literals to grind")
                .action(ArgAction::Append)
                .default_value("100.0"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("Reject a leading '+' and require integer digits")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("parts")
                .long("parts")
                .help("Also feed each input in this many near-equal chunks")
                .value_parser(value_parser!(u64).range(1..)),
        )
}

fn main() -> ExitCode {
    env_logger::init();

    let matches = cli().get_matches();
    let options = if matches.get_flag("strict") {
        LexerOptions::strict()
    } else {
        LexerOptions::default()
    };
    let parts = matches
        .get_one::<u64>("parts")
        .map(|&p| usize::try_from(p).unwrap_or(usize::MAX));

    let mut rejected = false;
    for input in matches.get_many::<String>("INPUT").into_iter().flatten() {
        let result = match parts {
            Some(parts) => {
                grind_with(input, options).and_then(|_| grind_partitioned(input, parts, options))
            }
            None => grind_with(input, options),
        };
        match result {
            Ok(outcome) => {
                println!("{input}->{outcome}");
                rejected |= !outcome.is_ok();
            }
            Err(failure) => {
                eprintln!("{}", failure.explain());
                return ExitCode::from(127);
            }
        }
    }

    if rejected {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
