use std::io;
use std::process::ExitCode;

use log::debug;
use recipe_cost::{solve_with_config, CostError, ParserConfig};

fn run() -> Result<u64, CostError> {
    let config = ParserConfig::load()?;
    debug!("{:?}", config);

    let input = io::read_to_string(io::stdin())?;
    solve_with_config(&input, &config)
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(cost) => {
            println!("{}", cost);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("{:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
