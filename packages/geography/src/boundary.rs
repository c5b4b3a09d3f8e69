//! Accessors for court boundary feature collections.
//!
//! Boundary files are plain `GeoJSON` `FeatureCollection`s whose features
//! carry a `NAME` property and, for district courts, a numeric `FID`. The
//! collection-level `name` and `crs` members are not standard `GeoJSON`
//! members and travel in `foreign_members`.

use geojson::{Feature, FeatureCollection, GeoJson, JsonObject, JsonValue};

use crate::GeoError;

/// Property holding the boundary's court name.
pub const NAME_PROPERTY: &str = "NAME";

/// Property holding a district boundary's numeric id.
pub const FID_PROPERTY: &str = "FID";

/// Parses a boundary file's contents into a feature collection.
///
/// # Errors
///
/// Returns [`GeoError::GeoJson`] if the text is not valid `GeoJSON` or is
/// not a `FeatureCollection`.
pub fn parse_boundaries(contents: &str) -> Result<FeatureCollection, GeoError> {
    let geojson: GeoJson = contents.parse()?;
    Ok(FeatureCollection::try_from(geojson)?)
}

/// The feature's `NAME` property, if it is a string.
#[must_use]
pub fn feature_name(feature: &Feature) -> Option<&str> {
    feature.property(NAME_PROPERTY).and_then(JsonValue::as_str)
}

/// The feature's `FID` property as an integer.
///
/// Accepts JSON integers and numeric strings. Returns `Ok(None)` when the
/// feature has no `FID`.
///
/// # Errors
///
/// Returns [`GeoError::InvalidFid`] if `FID` is present but not an integer.
pub fn feature_fid(feature: &Feature) -> Result<Option<i64>, GeoError> {
    let Some(value) = feature.property(FID_PROPERTY) else {
        return Ok(None);
    };

    let fid = match value {
        JsonValue::Null => return Ok(None),
        JsonValue::Number(number) => number.as_i64(),
        JsonValue::String(text) => text.trim().parse().ok(),
        _ => None,
    };

    fid.map(Some).ok_or_else(|| GeoError::InvalidFid {
        name: feature_name(feature).map(str::to_string),
        value: value.to_string(),
    })
}

/// Starts an empty output collection named `name`, carrying over the
/// source collection's `crs`.
#[must_use]
pub fn empty_collection_like(source: &FeatureCollection, name: &str) -> FeatureCollection {
    let mut members = JsonObject::new();
    members.insert("name".to_string(), JsonValue::from(name));

    if let Some(crs) = source
        .foreign_members
        .as_ref()
        .and_then(|members| members.get("crs"))
    {
        members.insert("crs".to_string(), crs.clone());
    }

    FeatureCollection {
        bbox: None,
        features: Vec::new(),
        foreign_members: Some(members),
    }
}

/// The collection-level `name` member, if present.
#[must_use]
pub fn collection_name(collection: &FeatureCollection) -> Option<&str> {
    collection
        .foreign_members
        .as_ref()
        .and_then(|members| members.get("name"))
        .and_then(JsonValue::as_str)
}
