//! Reshapes raw upstream bodies into [`ResultEnvelope`]s.
//!
//! Every function here is total: whatever bytes come back from the upstream,
//! an envelope is produced. Missing or mistyped scalar fields fall back to a
//! default, malformed list entries are dropped.

use serde_json::Value;

use crate::models::{remote_api::ApiPokemonList, Page, PokemonInfo, PokemonList, ResultEnvelope};

pub const MAX_MOVES: usize = 10;
/// Status reported when a successful listing response can't be decoded.
pub const MALFORMED_LISTING_STATUS: u16 = 502;

const RESOURCE_LABEL: &str = "Pokémon";
const UNKNOWN: &str = "Unknown";
const NO_ERROR_DETAILS: &str = "No error details provided.";

pub fn normalize_record(
    raw: &[u8],
    status_code: u16,
    is_success: bool,
) -> ResultEnvelope<PokemonInfo> {
    if !is_success {
        let body = String::from_utf8_lossy(raw);
        let error = if body.is_empty() {
            NO_ERROR_DETAILS.into()
        } else {
            body.into_owned()
        };
        return ResultEnvelope::failure(error, status_code);
    }

    // A body that isn't JSON has no fields, so everything gets defaulted
    let doc = serde_json::from_slice::<Value>(raw).unwrap_or(Value::Null);

    let pokemon = PokemonInfo {
        name: str_field(&doc, "name").unwrap_or(UNKNOWN).to_owned(),
        base_experience: int_field(&doc, "base_experience").unwrap_or_default(),
        height: int_field(&doc, "height").unwrap_or_default(),
        weight: int_field(&doc, "weight").unwrap_or_default(),
        abilities: nested_names(&doc, "abilities", "ability", None),
        moves: nested_names(&doc, "moves", "move", Some(MAX_MOVES)),
        held_items: nested_names(&doc, "held_items", "item", None),
        species: doc
            .get("species")
            .and_then(|species| str_field(species, "name"))
            .unwrap_or(UNKNOWN)
            .to_owned(),
        types: nested_names(&doc, "types", "type", None),
    };

    ResultEnvelope::success(pokemon, status_code)
}

pub fn normalize_listing(
    raw: &[u8],
    status_code: u16,
    is_success: bool,
    page: Page,
) -> ResultEnvelope<PokemonList> {
    if !is_success {
        return ResultEnvelope::failure(listing_error(raw, status_code), status_code);
    }

    match serde_json::from_slice::<ApiPokemonList>(raw) {
        Ok(list) => ResultEnvelope::success(PokemonList::new(list.into_names(), page), status_code),
        Err(e) => {
            tracing::warn!(error = %e, "Upstream listing did not match the expected shape");
            ResultEnvelope::failure(
                format!("Malformed upstream listing: {e}"),
                MALFORMED_LISTING_STATUS,
            )
        }
    }
}

fn listing_error(raw: &[u8], status_code: u16) -> String {
    match status_code {
        400 => "Invalid request parameters.".into(),
        404 => format!("{RESOURCE_LABEL} list not found."),
        500 => "Internal Server Error at upstream.".into(),
        _ => format!("Unexpected error: {}", String::from_utf8_lossy(raw)),
    }
}

fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key)?.as_str()
}

fn int_field(value: &Value, key: &str) -> Option<i64> {
    value.get(key)?.as_i64()
}

/// `{"<inner>": {"name": "..."}}` -> `"..."`
fn nested_name<'a>(element: &'a Value, inner: &str) -> Option<&'a str> {
    str_field(element.get(inner)?, "name")
}

/// Collects `doc[key][*][inner].name`, skipping elements without that shape.
///
/// `limit` is applied to the raw elements before skipping, so the result may
/// hold fewer than `limit` names.
fn nested_names(doc: &Value, key: &str, inner: &str, limit: Option<usize>) -> Vec<String> {
    let Some(elements) = doc.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };

    elements
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .filter_map(|element| nested_name(element, inner))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn record(doc: Value) -> PokemonInfo {
        let raw = serde_json::to_vec(&doc).unwrap();
        normalize_record(&raw, 200, true).result.unwrap()
    }

    fn moves(names: &[&str]) -> Value {
        names
            .iter()
            .map(|name| json!({ "move": { "name": name } }))
            .collect()
    }

    #[test]
    fn partial_document_gets_defaults() {
        let raw = br#"{"name":"pikachu","height":4,"weight":60,"types":[{"type":{"name":"electric"}}]}"#;

        let envelope = normalize_record(raw, 200, true);

        assert_eq!(envelope.status_code, 200);
        assert_eq!(
            envelope.result,
            Ok(PokemonInfo {
                name: "pikachu".into(),
                base_experience: 0,
                height: 4,
                weight: 60,
                abilities: vec![],
                moves: vec![],
                held_items: vec![],
                species: "Unknown".into(),
                types: vec!["electric".into()],
            })
        );
    }

    #[test]
    fn full_document_is_flattened() {
        let pokemon = record(json!({
            "name": "charizard",
            "base_experience": 267,
            "height": 17,
            "weight": 905,
            "abilities": [
                { "ability": { "name": "blaze", "url": "" }, "is_hidden": false },
                { "ability": { "name": "solar-power" }, "is_hidden": true }
            ],
            "moves": moves(&["mega-punch", "fire-punch"]),
            "held_items": [{ "item": { "name": "charcoal" } }],
            "species": { "name": "charizard", "url": "" },
            "types": [{ "type": { "name": "fire" } }, { "type": { "name": "flying" } }]
        }));

        assert_eq!(pokemon.base_experience, 267);
        assert_eq!(pokemon.abilities, ["blaze", "solar-power"]);
        assert_eq!(pokemon.moves, ["mega-punch", "fire-punch"]);
        assert_eq!(pokemon.held_items, ["charcoal"]);
        assert_eq!(pokemon.species, "charizard");
        assert_eq!(pokemon.types, ["fire", "flying"]);
    }

    #[test]
    fn missing_name_only_affects_name() {
        let with_name = record(json!({ "name": "eevee", "height": 3, "weight": 65 }));
        let without_name = record(json!({ "height": 3, "weight": 65 }));

        assert_eq!(without_name.name, "Unknown");
        assert_eq!(
            PokemonInfo {
                name: "eevee".into(),
                ..without_name
            },
            with_name
        );
    }

    #[test]
    fn mistyped_fields_fall_back_to_defaults() {
        let pokemon = record(json!({
            "name": 25,
            "height": "tall",
            "weight": 6.5,
            "base_experience": null,
            "abilities": { "ability": { "name": "static" } },
            "species": "pikachu",
            "types": "electric"
        }));

        assert_eq!(pokemon.name, "Unknown");
        assert_eq!(pokemon.height, 0);
        assert_eq!(pokemon.weight, 0);
        assert_eq!(pokemon.base_experience, 0);
        assert!(pokemon.abilities.is_empty());
        assert_eq!(pokemon.species, "Unknown");
        assert!(pokemon.types.is_empty());
    }

    #[test]
    fn malformed_list_entries_are_skipped() {
        let pokemon = record(json!({
            "abilities": [
                { "ability": { "name": "overgrow" } },
                { "ability": {} },
                { "ability": { "name": null } },
                "chlorophyll",
                { "name": "chlorophyll" },
                { "ability": { "name": "leaf-guard" } }
            ]
        }));

        assert_eq!(pokemon.abilities, ["overgrow", "leaf-guard"]);
    }

    #[test]
    fn moves_are_capped_to_the_first_ten() {
        let names = (0..15).map(|i| format!("move-{i}")).collect::<Vec<_>>();
        let names = names.iter().map(String::as_str).collect::<Vec<_>>();

        let pokemon = record(json!({ "moves": moves(&names) }));

        assert_eq!(pokemon.moves, names[..MAX_MOVES]);
    }

    #[test]
    fn moves_are_truncated_before_malformed_ones_are_skipped() {
        let names = (0..12).map(|i| format!("move-{i}")).collect::<Vec<_>>();
        let names = names.iter().map(String::as_str).collect::<Vec<_>>();
        let mut raw_moves = moves(&names);
        raw_moves[2] = json!({ "move": { "url": "https://pokeapi.co/api/v2/move/3/" } });

        let pokemon = record(json!({ "moves": raw_moves }));

        assert_eq!(pokemon.moves.len(), 9);
        assert!(!pokemon.moves.contains(&"move-2".to_string()));
        assert!(!pokemon.moves.contains(&"move-10".to_string()));
        assert_eq!(pokemon.moves[2], "move-3");
    }

    #[rstest]
    #[case::not_json(b"<html>ok</html>".as_slice())]
    #[case::empty(b"".as_slice())]
    #[case::array(b"[1, 2, 3]".as_slice())]
    fn unusable_success_body_yields_default_record(#[case] raw: &[u8]) {
        let envelope = normalize_record(raw, 200, true);

        assert_eq!(
            envelope.result,
            Ok(PokemonInfo {
                name: "Unknown".into(),
                base_experience: 0,
                height: 0,
                weight: 0,
                abilities: vec![],
                moves: vec![],
                held_items: vec![],
                species: "Unknown".into(),
                types: vec![],
            })
        );
    }

    #[test]
    fn failed_lookup_carries_upstream_body() {
        let envelope = normalize_record(b"Not Found", 404, false);

        assert_eq!(envelope, ResultEnvelope::failure("Not Found", 404));
    }

    #[test]
    fn failed_lookup_without_body_has_placeholder() {
        let envelope = normalize_record(b"", 503, false);

        assert_eq!(envelope, ResultEnvelope::failure("No error details provided.", 503));
    }

    #[test]
    fn normalizing_twice_is_identical() {
        let raw = br#"{"name":"ditto","moves":[{"move":{"name":"transform"}},{"move":7}],"species":{"name":"ditto"}}"#;

        let first = serde_json::to_vec(&normalize_record(raw, 200, true)).unwrap();
        let second = serde_json::to_vec(&normalize_record(raw, 200, true)).unwrap();

        assert_eq!(first, second);
    }

    #[rstest]
    #[case(400, "Invalid request parameters.")]
    #[case(404, "Pokémon list not found.")]
    #[case(500, "Internal Server Error at upstream.")]
    #[case(503, "Unexpected error: Not Found")]
    #[case(418, "Unexpected error: Not Found")]
    fn failed_listing_maps_status_to_message(#[case] status: u16, #[case] message: &str) {
        let envelope = normalize_listing(b"Not Found", status, false, Page::default());

        assert!(!envelope.is_success());
        assert_eq!(envelope.status_code, status);
        assert_eq!(envelope.result.unwrap_err().error, message);
    }

    #[test]
    fn listing_keeps_upstream_order_and_page() {
        let raw = serde_json::to_vec(&json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=23&limit=3",
            "previous": null,
            "results": [
                { "name": "venusaur", "url": "" },
                { "name": "charmander", "url": "" },
                { "name": "charmeleon", "url": "" }
            ]
        }))
        .unwrap();
        let page = Page {
            limit: 3,
            offset: 2,
        };

        let envelope = normalize_listing(&raw, 200, true, page);

        assert_eq!(
            envelope,
            ResultEnvelope::success(
                PokemonList {
                    listing: vec!["venusaur".into(), "charmander".into(), "charmeleon".into()],
                    limit: 3,
                    offset: 2,
                },
                200
            )
        );
    }

    #[test]
    fn listing_serializes_with_envelope() {
        let raw = br#"{"results":[{"name":"bulbasaur"}]}"#;

        let envelope = normalize_listing(raw, 200, true, Page::default());

        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({
                "success": true,
                "result": { "listing": ["bulbasaur"], "limit": 10, "offset": 0 },
                "statusCode": 200
            })
        );
    }

    #[rstest]
    #[case::missing_results(br#"{"count":0}"#.as_slice())]
    #[case::entry_without_name(br#"{"results":[{"name":"mew"},{"url":""}]}"#.as_slice())]
    #[case::not_json(b"<html></html>".as_slice())]
    fn malformed_listing_is_a_failure(#[case] raw: &[u8]) {
        let envelope = normalize_listing(raw, 200, true, Page::default());

        assert_eq!(envelope.status_code, MALFORMED_LISTING_STATUS);
        assert!(envelope
            .result
            .unwrap_err()
            .error
            .starts_with("Malformed upstream listing: "));
    }
}
