/// Flatten upstream records into output rows
use crate::domain::{NearEarthObjectRecord, PictureOfDay, RoverPhotoSet};
use crate::extract::{
    extract_f64, extract_str, APOD_HD_URL_PATH, APOD_MEDIA_TYPE_PATH, APOD_URL_PATH,
};
use crate::utils::{file_extension, round_hundredths};
use serde_json::Value;

/// One row per object per date, in the order the feed lists them.
///
/// `feed` is the value under `near_earth_objects`: a map of date to object
/// list. Returns `None` if the feed or any object does not have that shape.
pub fn project_neo_feed(feed: &Value) -> Option<Vec<NearEarthObjectRecord>> {
    let mut records = Vec::new();

    for (date, objects) in feed.as_object()? {
        for object in objects.as_array()? {
            records.push(project_neo(date, object)?);
        }
    }

    Some(records)
}

fn project_neo(date: &str, object: &Value) -> Option<NearEarthObjectRecord> {
    let diameter = |unit: &str, bound: &str| {
        extract_f64(object, &["estimated_diameter", unit, bound]).map(round_hundredths)
    };

    Some(NearEarthObjectRecord {
        date: date.to_string(),
        name: extract_str(object, &["name"])?.to_string(),
        estimated_diameter_min_meters: diameter("meters", "estimated_diameter_min")?,
        estimated_diameter_max_meters: diameter("meters", "estimated_diameter_max")?,
        estimated_diameter_min_feet: diameter("feet", "estimated_diameter_min")?,
        estimated_diameter_max_feet: diameter("feet", "estimated_diameter_max")?,
    })
}

/// Image location from an APOD response, preferring `hdurl` over `url`.
///
/// `url` is only used for image days; on video days it points at a player page.
pub fn project_apod(body: &Value) -> Option<PictureOfDay> {
    let is_image = extract_str(body, APOD_MEDIA_TYPE_PATH) == Some("image");
    let image_url = extract_str(body, APOD_HD_URL_PATH)
        .or_else(|| extract_str(body, APOD_URL_PATH).filter(|_| is_image))
        .filter(|url| !url.is_empty())?;

    Some(PictureOfDay {
        image_url: image_url.to_string(),
        file_extension: file_extension(image_url),
    })
}

/// `img_src` of every entry of the `photos` list, response order kept
pub fn project_rover_photos(photos: &Value) -> Option<RoverPhotoSet> {
    let urls = photos
        .as_array()?
        .iter()
        .map(|photo| extract_str(photo, &["img_src"]).map(str::to_string))
        .collect::<Option<Vec<_>>>()?;

    Some(RoverPhotoSet { urls })
}
