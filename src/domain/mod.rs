/// Domain models for the application
use crate::errors::ValidationError;
use crate::extract::UpstreamCause;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Inclusive date range, start never after end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::EndBeforeStart);
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// One CSV row of the near-Earth object export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearEarthObjectRecord {
    pub date: String,
    pub name: String,
    pub estimated_diameter_min_meters: f64,
    pub estimated_diameter_max_meters: f64,
    pub estimated_diameter_min_feet: f64,
    pub estimated_diameter_max_feet: f64,
}

/// Astronomy Picture of the Day image location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureOfDay {
    pub image_url: String,
    pub file_extension: String,
}

/// Rover image URLs in response order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoverPhotoSet {
    pub urls: Vec<String>,
}

impl RoverPhotoSet {
    /// The image saved alongside the URL list
    pub fn primary(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Asteroids,
    PictureOfDay,
    MarsRover,
}

impl Operation {
    /// Extra guidance appended to the invalid date/API key message
    pub fn upstream_hint(&self) -> &'static str {
        match self {
            Operation::Asteroids => {
                "Check if API key is valid and end date is within 7 days of the start date."
            }
            Operation::PictureOfDay => {
                "Check if API key is valid and date is not after today."
            }
            Operation::MarsRover => "Check if API key is valid.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Asteroids => write!(f, "asteroids"),
            Operation::PictureOfDay => write!(f, "apod"),
            Operation::MarsRover => write!(f, "mars"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    InvalidInput(ValidationError),
    UpstreamShape(UpstreamCause),
    Transport,
    Persistence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Saved,
    NoPhotosFound,
    Failed(Failure),
}

/// Result of one operation, returned instead of raising
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationOutcome {
    pub outcome: Outcome,
    pub http_status_code: Option<u16>,
    pub message: String,
}

impl OperationOutcome {
    pub fn saved(status: u16, message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Saved,
            http_status_code: Some(status),
            message: message.into(),
        }
    }

    pub fn no_photos(status: u16, message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::NoPhotosFound,
            http_status_code: Some(status),
            message: message.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.outcome == Outcome::Saved
    }

    pub fn failed(&self) -> bool {
        matches!(self.outcome, Outcome::Failed(_))
    }
}
