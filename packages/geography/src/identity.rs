//! Assigns district court ids from the district boundary file.
//!
//! A district court's id is the `FID` of the boundary feature whose `NAME`
//! is exactly the court's name.

use geojson::FeatureCollection;
use particourts_court_models::DistrictCourt;

use crate::{
    GeoError,
    boundary::{feature_fid, feature_name},
};

/// Finds the boundary feature named exactly like `court` and adopts its
/// `FID` as the court's id.
///
/// Features without an `FID` are passed over. The first match in file
/// order wins.
///
/// # Errors
///
/// * [`GeoError::UnresolvedDistrict`] if no feature carries the court's
///   name and an `FID`
/// * [`GeoError::InvalidFid`] if the matching feature's `FID` is not an
///   integer
pub fn resolve_district_id(
    court: &mut DistrictCourt,
    boundaries: &FeatureCollection,
) -> Result<i64, GeoError> {
    for feature in &boundaries.features {
        if feature_name(feature) != Some(court.name.as_str()) {
            continue;
        }

        if let Some(fid) = feature_fid(feature)? {
            log::trace!("{} -> FID {fid}", court.name);
            court.id = Some(fid);
            return Ok(fid);
        }
    }

    Err(GeoError::UnresolvedDistrict {
        name: court.name.clone(),
    })
}

/// Resolves the id of every court that does not have one yet.
///
/// Returns how many ids were assigned.
///
/// # Errors
///
/// Stops at the first court that cannot be resolved; see
/// [`resolve_district_id`].
pub fn resolve_missing_ids(
    courts: &mut [DistrictCourt],
    boundaries: &FeatureCollection,
) -> Result<usize, GeoError> {
    let mut assigned = 0;

    for court in courts.iter_mut().filter(|court| court.id.is_none()) {
        resolve_district_id(court, boundaries)?;
        assigned += 1;
    }

    if assigned > 0 {
        log::info!("Assigned ids to {assigned} district courts");
    }

    Ok(assigned)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::boundary::parse_boundaries;

    fn boundaries() -> FeatureCollection {
        parse_boundaries(
            &json!({
                "type": "FeatureCollection",
                "features": [
                    { "type": "Feature", "geometry": null,
                      "properties": { "NAME": "Eastern District of Texas" } },
                    { "type": "Feature", "geometry": null,
                      "properties": { "NAME": "Eastern District of Texas", "FID": 71 } },
                    { "type": "Feature", "geometry": null,
                      "properties": { "NAME": "District of Colorado", "FID": "11" } },
                    { "type": "Feature", "geometry": null,
                      "properties": { "NAME": "District of Colorado", "FID": 99 } }
                ]
            })
            .to_string(),
        )
        .unwrap()
    }

    fn court(name: &str) -> DistrictCourt {
        DistrictCourt::new(name, "", "10th", 7, "").unwrap()
    }

    #[test]
    fn adopts_fid_of_first_named_feature() {
        let mut colorado = court("District of Colorado");
        assert_eq!(resolve_district_id(&mut colorado, &boundaries()).unwrap(), 11);
        assert_eq!(colorado.id, Some(11));
    }

    #[test]
    fn skips_features_without_fid() {
        let mut texas = court("Eastern District of Texas");
        assert_eq!(resolve_district_id(&mut texas, &boundaries()).unwrap(), 71);
    }

    #[test]
    fn name_match_is_exact() {
        let mut lowercase = court("district of colorado");
        let err = resolve_district_id(&mut lowercase, &boundaries()).unwrap_err();
        assert_eq!(err.to_string(), "Couldn't generate ID of district of colorado");
        assert_eq!(lowercase.id, None);
    }

    #[test]
    fn resolves_only_missing_ids() {
        let mut courts = vec![court("District of Colorado"), court("Eastern District of Texas")];
        courts[1].id = Some(3);

        assert_eq!(resolve_missing_ids(&mut courts, &boundaries()).unwrap(), 1);
        assert_eq!(courts[0].id, Some(11));
        assert_eq!(courts[1].id, Some(3));
    }

    #[test]
    fn unresolvable_court_fails_the_batch() {
        let mut courts = vec![court("District of Nowhere")];
        assert!(matches!(
            resolve_missing_ids(&mut courts, &boundaries()),
            Err(GeoError::UnresolvedDistrict { .. })
        ));
    }
}
