//! Joins court statistics onto boundary features.
//!
//! Each output feature keeps only its source geometry and gets a fresh
//! property set describing the matched court. Features that match no court are
//! dropped.

use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};
use particourts_court_models::{CircuitCourt, Court, DistrictCourt};
use serde::Serialize;

use crate::{
    GeoError,
    boundary::{empty_collection_like, feature_fid, feature_name},
};

/// Name of the enriched district boundary collection.
pub const DISTRICT_COLLECTION_NAME: &str = "dcourts";

/// Name of the enriched circuit boundary collection.
pub const CIRCUIT_COLLECTION_NAME: &str = "ccourts";

/// Statistics shared by both kinds of enriched feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct StatsProperties {
    /// Chief judge's name, empty when unknown.
    pub chief_judge: String,
    /// Judges currently in active service.
    pub active_judges: i32,
    /// Active judges eligible to take senior status.
    pub senior_eligible_judges: i32,
    /// Authorized seats minus active judges. May be negative.
    pub vacancies: i32,
    /// Active judges appointed by a Democratic president.
    #[serde(rename = "DEMJUDGES")]
    pub dem_judges: i32,
    /// Active judges appointed by a Republican president.
    #[serde(rename = "GOPJUDGES")]
    pub gop_judges: i32,
    /// Court lean: `1` Democratic, `-1` Republican, `0` even.
    pub partisanship: i32,
    /// Senior-eligible judges appointed by a Democratic president.
    #[serde(rename = "DEMRETIRING")]
    pub dem_retiring: i32,
    /// Senior-eligible judges appointed by a Republican president.
    #[serde(rename = "GOPRETIRING")]
    pub gop_retiring: i32,
}

impl StatsProperties {
    /// Snapshots `court`'s aggregated statistics, vacancies, and lean.
    #[must_use]
    pub fn from_court<C: Court + ?Sized>(court: &C) -> Self {
        let stats = court.stats();

        Self {
            chief_judge: stats.chief_judge.clone(),
            active_judges: stats.active_judges,
            senior_eligible_judges: stats.senior_eligible_judges,
            vacancies: court.vacancies(),
            dem_judges: stats.dem_judges,
            gop_judges: stats.gop_judges,
            partisanship: court.lean().value(),
            dem_retiring: stats.dem_retiring,
            gop_retiring: stats.gop_retiring,
        }
    }
}

/// Properties of an enriched district boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct DistrictProperties {
    /// Boundary feature id, equal to the court id.
    #[serde(rename = "FID")]
    pub fid: i64,
    /// Court name.
    pub name: String,
    /// Court statistics, flattened into the property set.
    #[serde(flatten)]
    pub stats: StatsProperties,
}

/// Properties of an enriched circuit boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct CircuitProperties {
    /// Circuit name as it appears on the boundary.
    pub name: String,
    /// Supreme Court justice assigned to the circuit.
    pub supervising_justice: String,
    /// Court statistics, flattened into the property set.
    #[serde(flatten)]
    pub stats: StatsProperties,
}

fn to_object<T: Serialize>(properties: &T) -> Result<JsonObject, GeoError> {
    match serde_json::to_value(properties)? {
        JsonValue::Object(object) => Ok(object),
        other => Err(GeoError::Json(serde::ser::Error::custom(format!(
            "feature properties serialized to {other} instead of an object"
        )))),
    }
}

/// Runs `join` over every source feature, keeping those it returns
/// properties for.
fn enrich<F>(
    source: &FeatureCollection,
    name: &str,
    mut join: F,
) -> Result<FeatureCollection, GeoError>
where
    F: FnMut(&Feature) -> Result<Option<JsonObject>, GeoError>,
{
    let mut output = empty_collection_like(source, name);

    for feature in &source.features {
        if let Some(properties) = join(feature)? {
            output.features.push(Feature {
                bbox: None,
                geometry: feature.geometry.clone(),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            });
        }
    }

    log::info!(
        "{name}: enriched {} of {} boundary features",
        output.features.len(),
        source.features.len()
    );

    Ok(output)
}

/// Joins district courts onto district boundaries by `FID` = court id.
///
/// Features without a usable `FID`, or whose `FID` matches no court, are
/// dropped. When several courts share an id the first one wins. The output
/// `NAME` is the feature's own, falling back to the court name.
///
/// # Errors
///
/// Returns [`GeoError::Json`] if the properties fail to serialize.
pub fn enrich_districts(
    boundaries: &FeatureCollection,
    courts: &[DistrictCourt],
) -> Result<FeatureCollection, GeoError> {
    enrich(boundaries, DISTRICT_COLLECTION_NAME, |feature| {
        let fid = match feature_fid(feature) {
            Ok(Some(fid)) => fid,
            Ok(None) => {
                log::warn!(
                    "Skipping district boundary {:?} with no FID",
                    feature_name(feature)
                );
                return Ok(None);
            }
            Err(e) => {
                log::warn!("Skipping district boundary: {e}");
                return Ok(None);
            }
        };

        let Some(court) = courts.iter().find(|court| court.id == Some(fid)) else {
            log::debug!("No district court with id {fid}");
            return Ok(None);
        };

        let properties = DistrictProperties {
            fid,
            name: feature_name(feature).unwrap_or(&court.name).to_string(),
            stats: StatsProperties::from_court(court),
        };

        to_object(&properties).map(Some)
    })
}

/// Joins circuit courts onto circuit boundaries by `NAME`, compared
/// case-insensitively against each circuit's display name.
///
/// # Errors
///
/// * [`GeoError::Court`] if a circuit id is outside the ordinal table
/// * [`GeoError::Json`] if the properties fail to serialize
pub fn enrich_circuits(
    boundaries: &FeatureCollection,
    courts: &[CircuitCourt],
) -> Result<FeatureCollection, GeoError> {
    let named = courts
        .iter()
        .map(|court| court.display_name().map(|name| (name, court)))
        .collect::<Result<Vec<_>, _>>()?;

    enrich(boundaries, CIRCUIT_COLLECTION_NAME, |feature| {
        let Some(name) = feature_name(feature) else {
            return Ok(None);
        };

        let Some((_, court)) = named
            .iter()
            .find(|(display_name, _)| display_name.eq_ignore_ascii_case(name))
        else {
            log::debug!("No circuit court named {name:?}");
            return Ok(None);
        };

        let properties = CircuitProperties {
            name: name.to_string(),
            supervising_justice: court.supervising_justice.clone(),
            stats: StatsProperties::from_court(*court),
        };

        to_object(&properties).map(Some)
    })
}

#[cfg(test)]
mod tests {
    use particourts_court_models::CourtStats;
    use serde_json::json;

    use super::*;
    use crate::boundary::{collection_name, parse_boundaries};

    fn collection(features: &JsonValue) -> FeatureCollection {
        parse_boundaries(
            &json!({
                "type": "FeatureCollection",
                "name": "source",
                "crs": { "type": "name", "properties": { "name": "EPSG:4326" } },
                "features": features
            })
            .to_string(),
        )
        .unwrap()
    }

    fn polygon() -> JsonValue {
        json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
        })
    }

    fn district(id: i64, name: &str) -> DistrictCourt {
        let mut court = DistrictCourt::new(name, "", "5th", 4, "").unwrap();
        court.id = Some(id);
        court.stats = CourtStats {
            active_judges: 3,
            chief_judge: "Jane Roe".to_string(),
            senior_eligible_judges: 1,
            dem_judges: 2,
            gop_judges: 1,
            dem_retiring: 0,
            gop_retiring: 1,
        };
        court
    }

    #[test]
    fn district_join_by_fid() {
        let boundaries = collection(&json!([
            { "type": "Feature", "geometry": polygon(),
              "properties": { "FID": 5, "NAME": "Eastern District of Louisiana", "Shape_Area": 1.5 } },
            { "type": "Feature", "geometry": polygon(),
              "properties": { "FID": 99, "NAME": "Nowhere" } }
        ]));
        let courts = vec![district(5, "Eastern District of Louisiana")];

        let output = enrich_districts(&boundaries, &courts).unwrap();

        assert_eq!(collection_name(&output), Some(DISTRICT_COLLECTION_NAME));
        assert!(output.foreign_members.as_ref().unwrap().contains_key("crs"));
        assert_eq!(output.features.len(), 1);

        let feature = &output.features[0];
        assert!(feature.geometry.is_some());

        let properties = feature.properties.as_ref().unwrap();
        assert_eq!(properties["FID"], 5);
        assert_eq!(properties["NAME"], "Eastern District of Louisiana");
        assert_eq!(properties["CHIEF_JUDGE"], "Jane Roe");
        assert_eq!(properties["ACTIVE_JUDGES"], 3);
        assert_eq!(properties["SENIOR_ELIGIBLE_JUDGES"], 1);
        assert_eq!(properties["VACANCIES"], 1);
        assert_eq!(properties["DEMJUDGES"], 2);
        assert_eq!(properties["GOPJUDGES"], 1);
        assert_eq!(properties["PARTISANSHIP"], 1);
        assert_eq!(properties["DEMRETIRING"], 0);
        assert_eq!(properties["GOPRETIRING"], 1);
        assert!(!properties.contains_key("Shape_Area"));
    }

    #[test]
    fn district_features_without_fid_are_skipped() {
        let boundaries = collection(&json!([
            { "type": "Feature", "geometry": null, "properties": { "NAME": "No FID" } },
            { "type": "Feature", "geometry": null, "properties": { "FID": "bad" } },
            { "type": "Feature", "geometry": null, "properties": { "FID": "5" } }
        ]));
        let courts = vec![district(5, "Eastern District of Louisiana")];

        let output = enrich_districts(&boundaries, &courts).unwrap();
        assert_eq!(output.features.len(), 1);
        assert_eq!(
            output.features[0].properties.as_ref().unwrap()["NAME"],
            "Eastern District of Louisiana"
        );
    }

    #[test]
    fn first_district_with_matching_id_wins() {
        let boundaries = collection(&json!([
            { "type": "Feature", "geometry": null, "properties": { "FID": 5, "NAME": "X" } }
        ]));
        let mut second = district(5, "Second");
        second.stats.chief_judge = "Someone Else".to_string();
        let courts = vec![district(5, "First"), second];

        let output = enrich_districts(&boundaries, &courts).unwrap();
        assert_eq!(
            output.features[0].properties.as_ref().unwrap()["CHIEF_JUDGE"],
            "Jane Roe"
        );
    }

    #[test]
    fn enriched_features_drop_source_id_and_bbox() {
        let boundaries = collection(&json!([
            { "type": "Feature", "id": 5, "bbox": [0.0, 0.0, 1.0, 1.0], "geometry": polygon(),
              "properties": { "FID": 5, "NAME": "Eastern District of Louisiana" } }
        ]));
        assert!(boundaries.features[0].id.is_some());
        assert!(boundaries.features[0].bbox.is_some());

        let output =
            enrich_districts(&boundaries, &[district(5, "Eastern District of Louisiana")]).unwrap();

        assert_eq!(output.features.len(), 1);
        let feature = &output.features[0];
        assert!(feature.id.is_none());
        assert!(feature.bbox.is_none());
        assert!(feature.geometry.is_some());

        let value = serde_json::to_value(feature).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("bbox").is_none());
    }

    #[test]
    fn circuit_join_ignores_case() {
        let boundaries = collection(&json!([
            { "type": "Feature", "geometry": polygon(), "properties": { "NAME": "NINTH CIRCUIT" } },
            { "type": "Feature", "geometry": polygon(), "properties": { "NAME": "Federal Circuit" } },
            { "type": "Feature", "geometry": polygon(), "properties": {} }
        ]));
        let mut ninth = CircuitCourt::new(9, "Ninth Circuit", "Kagan", 29);
        ninth.stats.active_judges = 27;
        ninth.stats.dem_judges = 16;
        ninth.stats.gop_judges = 11;

        let output = enrich_circuits(&boundaries, &[ninth]).unwrap();

        assert_eq!(collection_name(&output), Some(CIRCUIT_COLLECTION_NAME));
        assert_eq!(output.features.len(), 1);

        let properties = output.features[0].properties.as_ref().unwrap();
        assert_eq!(properties["NAME"], "NINTH CIRCUIT");
        assert_eq!(properties["SUPERVISING_JUSTICE"], "Kagan");
        assert_eq!(properties["VACANCIES"], 2);
        assert_eq!(properties["PARTISANSHIP"], 1);
        assert!(!properties.contains_key("FID"));
    }

    #[test]
    fn circuit_outside_ordinal_table_fails() {
        let boundaries = collection(&json!([]));
        let stray = CircuitCourt::new(12, "Federal Circuit", "Roberts", 12);
        assert!(matches!(
            enrich_circuits(&boundaries, &[stray]),
            Err(GeoError::Court(_))
        ));
    }

    #[test]
    fn even_court_has_zero_partisanship() {
        let mut court = district(1, "District of Maine");
        court.stats.dem_judges = 1;
        court.stats.gop_judges = 1;
        let properties = StatsProperties::from_court(&court);
        assert_eq!(properties.partisanship, 0);
    }
}
