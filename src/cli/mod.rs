/// Command-line surface
use crate::domain::OperationOutcome;
use crate::services::ExplorerService;
use chrono::NaiveDate;
use clap::{ArgGroup, Parser};

/// A NASA API explorer that can get near Earth object data, Mars rover
/// pictures, and the Astronomy Picture of the Day.
///
/// Sign up for an API key at https://api.nasa.gov and export it as API_KEY
/// (or use API_KEY=DEMO_KEY).
#[derive(Debug, Parser)]
#[command(
    name = "nasa-explorer",
    version,
    group(ArgGroup::new("operation").args(["asteroids", "apod", "mars"]))
)]
pub struct Cli {
    /// Write near Earth object data between two dates to near_earth_object_data.csv
    #[arg(short = 'a', long, num_args = 2, value_names = ["START_DATE", "END_DATE"])]
    pub asteroids: Option<Vec<String>>,

    /// Save the Astronomy Picture of the Day for DATE as FILE_NAME (no extension)
    #[arg(short = 'p', long, num_args = 2, value_names = ["DATE", "FILE_NAME"])]
    pub apod: Option<Vec<String>>,

    /// Write the Mars rover image urls for DATE to FILE_NAME (.txt) and save the first image
    #[arg(short = 'm', long, num_args = 2, value_names = ["FILE_NAME", "DATE"])]
    pub mars: Option<Vec<String>>,

    /// Log debug output
    #[arg(short, long)]
    pub verbose: bool,
}

/// The operation selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Asteroids { start_date: String, end_date: String },
    PictureOfDay { date: String, file_name: String },
    MarsRover { file_name: String, date: String },
}

impl Cli {
    /// `None` when no operation flag was given
    pub fn request(&self) -> Option<Request> {
        if let Some([start_date, end_date]) = self.asteroids.as_deref() {
            return Some(Request::Asteroids {
                start_date: start_date.clone(),
                end_date: end_date.clone(),
            });
        }
        if let Some([date, file_name]) = self.apod.as_deref() {
            return Some(Request::PictureOfDay {
                date: date.clone(),
                file_name: file_name.clone(),
            });
        }
        if let Some([file_name, date]) = self.mars.as_deref() {
            return Some(Request::MarsRover {
                file_name: file_name.clone(),
                date: date.clone(),
            });
        }
        None
    }
}

/// Run one request against the service
pub async fn dispatch(
    request: &Request,
    service: &ExplorerService,
    today: NaiveDate,
) -> OperationOutcome {
    match request {
        Request::Asteroids {
            start_date,
            end_date,
        } => service.explore_asteroids(start_date, end_date).await,
        Request::PictureOfDay { date, file_name } => service.explore_apod(date, file_name).await,
        Request::MarsRover { file_name, date } => {
            service
                .explore_mars_rover_photos(file_name, date, today)
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_asteroids() {
        let cli = Cli::try_parse_from(["nasa-explorer", "--asteroids", "2022-12-20", "2022-12-26"])
            .unwrap();
        assert_eq!(
            cli.request(),
            Some(Request::Asteroids {
                start_date: "2022-12-20".to_string(),
                end_date: "2022-12-26".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_short_flags_keep_argument_order() {
        let cli = Cli::try_parse_from(["nasa-explorer", "-p", "2022-12-29", "apod"]).unwrap();
        assert_eq!(
            cli.request(),
            Some(Request::PictureOfDay {
                date: "2022-12-29".to_string(),
                file_name: "apod".to_string(),
            })
        );

        let cli = Cli::try_parse_from(["nasa-explorer", "-m", "images.txt", "2022-12-23"]).unwrap();
        assert_eq!(
            cli.request(),
            Some(Request::MarsRover {
                file_name: "images.txt".to_string(),
                date: "2022-12-23".to_string(),
            })
        );
    }

    #[test]
    fn test_no_flags_means_no_request() {
        let cli = Cli::try_parse_from(["nasa-explorer"]).unwrap();
        assert_eq!(cli.request(), None);
    }

    #[test]
    fn test_operations_are_mutually_exclusive() {
        let result = Cli::try_parse_from([
            "nasa-explorer",
            "-a",
            "2022-12-20",
            "2022-12-26",
            "-p",
            "2022-12-29",
            "apod",
        ]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn test_operation_needs_two_values() {
        let result = Cli::try_parse_from(["nasa-explorer", "--apod", "2022-12-29"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = Cli::try_parse_from(["nasa-explorer", "--comets", "2022-12-29"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::UnknownArgument
        );
    }
}
