use crate::color::RGBColor;
use crate::error::Error;
use crate::Arguments;
use clap::{
    crate_authors, crate_description, crate_name, crate_version, error::ErrorKind,
    value_parser, Arg, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

const USAGE_ARGUMENTS: &str =
    "image.ppm starting_row starting_column new_red_value new_green_value new_blue_value";

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    /// Parses the command line. Help and version requests print and exit
    /// the process, every other problem is returned to the caller.
    pub fn parse<I, T>(&mut self, itr: I) -> crate::Result<Arguments>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .map_err(|e| match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
                _ => Error::InvalidArguments(Self::first_line(&e.to_string())),
            })?;
        Ok(Self::extract_arguments(&matches))
    }

    pub fn usage() -> String {
        format!("{} {}", crate_name!(), USAGE_ARGUMENTS)
    }

    fn first_line(message: &str) -> String {
        message.lines().next().unwrap_or_default().to_owned()
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_image_file_argument(command);
        let command = Self::register_seed_arguments(command);
        Self::register_target_color_arguments(command)
    }

    fn register_image_file_argument(command: Command) -> Command {
        command.arg(Self::create_image_file_argument())
    }

    fn register_seed_arguments(command: Command) -> Command {
        command
            .arg(Self::create_seed_argument("row", "Row of the seed pixel"))
            .arg(Self::create_seed_argument("col", "Column of the seed pixel"))
    }

    fn register_target_color_arguments(command: Command) -> Command {
        command
            .arg(Self::create_color_component_argument("red", "New red value"))
            .arg(Self::create_color_component_argument("green", "New green value"))
            .arg(Self::create_color_component_argument("blue", "New blue value"))
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
            .override_usage(Self::usage())
    }

    fn create_image_file_argument() -> Arg {
        Arg::new("image_file")
            .help("Path to the PPM image, which is overwritten with the result")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_seed_argument(id: &'static str, help: &'static str) -> Arg {
        Arg::new(id)
            .help(help)
            .value_parser(value_parser!(i64))
            .allow_negative_numbers(true)
            .required(true)
    }

    fn create_color_component_argument(id: &'static str, help: &'static str) -> Arg {
        Arg::new(id)
            .help(help)
            .value_parser(value_parser!(u8))
            .allow_negative_numbers(true)
            .required(true)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            image_file: Self::extract_image_file_argument(matches),
            seed_row: Self::extract_seed_argument(matches, "row"),
            seed_col: Self::extract_seed_argument(matches, "col"),
            target_color: Self::extract_target_color_arguments(matches),
        }
    }

    fn extract_image_file_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("image_file")
            .expect("Required argument image_file not provided")
            .clone()
    }

    fn extract_seed_argument(matches: &ArgMatches, id: &str) -> i64 {
        *matches
            .get_one::<i64>(id)
            .expect("Required seed coordinate not provided")
    }

    fn extract_target_color_arguments(matches: &ArgMatches) -> RGBColor {
        let component = |id: &str| {
            *matches
                .get_one::<u8>(id)
                .expect("Required color component not provided")
        };
        RGBColor::new(component("red"), component("green"), component("blue"))
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
