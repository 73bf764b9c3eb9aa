//! Sighting Endpoints

use crate::api::client;
use crate::state::global::Sighting;

#[derive(Debug, serde::Deserialize)]
struct SightingListResponse {
    sightings: Vec<Sighting>,
}

#[derive(Debug, serde::Deserialize)]
struct SightingResponse {
    sighting: Sighting,
}

/// Fetch sightings within the trailing `hours` window, optionally filtered
/// by Pokémon type
pub async fn list(hours: Option<u32>, pokemon_type: Option<&str>) -> Result<Vec<Sighting>, String> {
    let path = format!("/sightings?{}", list_query(hours, pokemon_type));

    client::fetch_json::<SightingListResponse>(client::get(&path), "Failed to load sightings")
        .await
        .map(|r| r.sightings)
}

fn list_query(hours: Option<u32>, pokemon_type: Option<&str>) -> String {
    let mut query = format!("hours={}", hours.unwrap_or(24));
    if let Some(t) = pokemon_type.filter(|t| !t.is_empty()) {
        query.push_str("&type=");
        query.push_str(t);
    }
    query
}

/// Report a new sighting at the given coordinates
pub async fn create(
    pokemon_name: &str,
    pokemon_type: Option<&str>,
    latitude: f64,
    longitude: f64,
) -> Result<Sighting, String> {
    #[derive(serde::Serialize)]
    struct CreateSightingRequest {
        pokemon_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pokemon_type: Option<String>,
        latitude: f64,
        longitude: f64,
    }

    client::fetch_json_with::<_, SightingResponse>(
        client::post("/sightings"),
        &CreateSightingRequest {
            pokemon_name: pokemon_name.to_string(),
            pokemon_type: pokemon_type
                .filter(|t| !t.is_empty())
                .map(|t| t.to_string()),
            latitude,
            longitude,
        },
        "Failed to report sighting",
    )
    .await
    .map(|r| r.sighting)
}

pub async fn get(id: i64) -> Result<Sighting, String> {
    client::fetch_json::<SightingResponse>(
        client::get(&format!("/sightings/{}", id)),
        "Failed to load sighting",
    )
    .await
    .map(|r| r.sighting)
}

/// Owner-only removal
pub async fn delete(id: i64) -> Result<(), String> {
    client::execute(
        client::delete(&format!("/sightings/{}", id)),
        "Failed to delete sighting",
    )
    .await
}

/// Admin: mark a sighting as verified
pub async fn verify(id: i64) -> Result<(), String> {
    client::execute(
        client::post(&format!("/sightings/{}/verify", id)),
        "Failed to verify sighting",
    )
    .await
}

/// Admin: hide a sighting from the public window
pub async fn deactivate(id: i64) -> Result<(), String> {
    client::execute(
        client::post(&format!("/sightings/{}/deactivate", id)),
        "Failed to deactivate sighting",
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_defaults_to_24_hours() {
        assert_eq!(list_query(None, None), "hours=24");
    }

    #[test]
    fn test_list_query_with_type_filter() {
        assert_eq!(list_query(Some(12), Some("Electric")), "hours=12&type=Electric");
    }

    #[test]
    fn test_list_query_ignores_empty_type() {
        assert_eq!(list_query(Some(24), Some("")), "hours=24");
    }
}
