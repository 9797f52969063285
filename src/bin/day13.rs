use clap::Parser;

use packet_order::config::Cli;
use packet_order::logger::init_cli_logger;
use packet_order::parser::read_input;
use packet_order::solve;

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "starting");

    let input = read_input(cli.input.as_deref())?;
    let answers = solve(&input).inspect_err(|e| tracing::error!("{}", e))?;
    tracing::info!(
        part_one = answers.part_one,
        part_two = answers.part_two,
        "solved"
    );

    println!("Part one: {}", answers.part_one);
    println!("Part two: {}", answers.part_two);

    Ok(())
}
