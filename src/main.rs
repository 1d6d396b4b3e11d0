use std::env::args_os;
use std::process::ExitCode;

use ppm_flood_fill::{flood_fill_ppm_file, CLIParser, Error};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = match cli_parser.parse(args_os()) {
        Ok(arguments) => arguments,
        Err(e) => {
            log::warn!("{}", e);
            println!("{}", CLIParser::usage());
            return ExitCode::SUCCESS;
        }
    };
    match flood_fill_ppm_file(&arguments) {
        Ok(_) => ExitCode::SUCCESS,
        Err(Error::UnableToOpenImageFile(path, e)) => {
            log::warn!("{}", e);
            println!("Unable to open: {}", path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Flood fill failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
