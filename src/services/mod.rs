/// Business logic services layer
use crate::clients::{FetchedJson, NasaClient};
use crate::domain::{Operation, OperationOutcome};
use crate::errors::ExploreError;
use crate::extract::{classify, extract, upstream_message, NEO_FEED_PATH, ROVER_PHOTOS_PATH};
use crate::projection::{project_apod, project_neo_feed, project_rover_photos};
use crate::repo::OutputRepo;
use crate::utils::file_extension;
use crate::validation::{
    ensure_not_future, parse_date, parse_date_fields, parse_range, validate_file_name,
};
use chrono::NaiveDate;
use tracing::{info, warn};

pub const NEO_CSV_FILE: &str = "near_earth_object_data.csv";
pub const URL_LIST_EXTENSION: &str = ".txt";
pub const ROVER_IMAGE_STEM: &str = "mars";

/// Runs the three explorer operations end to end
pub struct ExplorerService {
    client: NasaClient,
    repo: OutputRepo,
}

impl ExplorerService {
    pub fn new(client: NasaClient, repo: OutputRepo) -> Self {
        Self { client, repo }
    }

    /// Write the NeoWs feed between two dates to `near_earth_object_data.csv`
    pub async fn explore_asteroids(&self, start_date: &str, end_date: &str) -> OperationOutcome {
        let result = self.asteroids(start_date, end_date).await;
        finish(Operation::Asteroids, result)
    }

    /// Save the picture of the day as `<file_name><ext>`
    pub async fn explore_apod(&self, date: &str, file_name: &str) -> OperationOutcome {
        let result = self.apod(date, file_name).await;
        finish(Operation::PictureOfDay, result)
    }

    /// Write rover image URLs to `file_name` and save the first image as `mars<ext>`
    pub async fn explore_mars_rover_photos(
        &self,
        file_name: &str,
        date: &str,
        today: NaiveDate,
    ) -> OperationOutcome {
        let result = self.mars_rover_photos(file_name, date, today).await;
        finish(Operation::MarsRover, result)
    }

    async fn asteroids(
        &self,
        start_date: &str,
        end_date: &str,
    ) -> Result<OperationOutcome, ExploreError> {
        let range = parse_range(start_date, end_date)?;

        info!("Getting API response...");
        let fetched = self.client.fetch_neo_feed(&range).await?;

        let records = extract(&fetched.body, NEO_FEED_PATH)
            .and_then(project_neo_feed)
            .ok_or_else(|| missing(Operation::Asteroids, &fetched))?;

        info!("Writing data to csv file...");
        let path = self.repo.write_neo_csv(NEO_CSV_FILE, &records)?;

        Ok(OperationOutcome::saved(
            fetched.status,
            format!("Finished writing data to {}.", path.display()),
        ))
    }

    async fn apod(&self, date: &str, file_name: &str) -> Result<OperationOutcome, ExploreError> {
        let date = parse_date(date)?;
        validate_file_name(file_name, None)?;

        info!("Getting API response...");
        let fetched = self.client.fetch_apod(date).await?;

        let picture =
            project_apod(&fetched.body).ok_or_else(|| missing(Operation::PictureOfDay, &fetched))?;

        info!("Saving image...");
        let image = self.client.download(&picture.image_url, None).await?;
        let target = format!("{}{}", file_name, picture.file_extension);
        let path = self.repo.write_image(&target, &image)?;

        Ok(OperationOutcome::saved(
            fetched.status,
            format!("Saved image as {}.", path.display()),
        ))
    }

    async fn mars_rover_photos(
        &self,
        file_name: &str,
        date: &str,
        today: NaiveDate,
    ) -> Result<OperationOutcome, ExploreError> {
        let fields = parse_date_fields(date)?;
        validate_file_name(file_name, Some(URL_LIST_EXTENSION))?;
        let date = ensure_not_future(fields.to_date()?, today)?;

        info!("Getting API response...");
        let fetched = self.client.fetch_rover_photos(date).await?;

        let photos = extract(&fetched.body, ROVER_PHOTOS_PATH)
            .and_then(project_rover_photos)
            .ok_or_else(|| missing(Operation::MarsRover, &fetched))?;

        info!("Saving urls to {}...", file_name);
        let list_path = self.repo.write_url_list(file_name, &photos.urls)?;
        info!("Saved {} urls to {}.", photos.urls.len(), list_path.display());

        let Some(primary) = photos.primary() else {
            return Ok(OperationOutcome::no_photos(
                fetched.status,
                format!("No photos found for {}; {} is empty.", date, list_path.display()),
            ));
        };

        info!("Saving first image...");
        let image = self
            .client
            .download(primary, Some(self.client.rover_timeout()))
            .await?;
        let target = format!("{}{}", ROVER_IMAGE_STEM, file_extension(primary).to_lowercase());
        let path = self.repo.write_image(&target, &image)?;

        Ok(OperationOutcome::saved(
            fetched.status,
            format!("Image saved as {}.", path.display()),
        ))
    }
}

fn missing(operation: Operation, fetched: &FetchedJson) -> ExploreError {
    let cause = classify(fetched.status, &fetched.body);
    warn!(
        %operation,
        status = fetched.status,
        %cause,
        upstream = upstream_message(&fetched.body).unwrap_or("-"),
        "expected data missing from API response"
    );
    ExploreError::UpstreamShape {
        operation,
        status: fetched.status,
        cause,
    }
}

fn finish(
    operation: Operation,
    result: Result<OperationOutcome, ExploreError>,
) -> OperationOutcome {
    match result {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(%operation, reason = e.reason(), "operation failed: {}", e);
            OperationOutcome::from(e)
        }
    }
}
