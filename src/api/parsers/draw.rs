use log::debug;
use serde_json::Value;

use crate::api::models::{DrawEvent, DrawResponse};
use crate::errors::PayloadError;

/// Parse the draw endpoint payload and pick its singles event
///
/// `drawInfo` entries that are encoded JSON and fail to decode are skipped.
/// `Ok(None)` means the payload held no events at all.
pub fn parse_draw_response(raw: Value) -> Result<Option<DrawEvent>, PayloadError> {
    let response: DrawResponse =
        serde_json::from_value(raw).map_err(|e| PayloadError::shape("draw", e))?;

    let mut events = Vec::new();
    for entry in response.draw_info {
        let info = match entry.try_decode() {
            Ok(info) => info,
            Err(e) => {
                debug!("Skipping {}", PayloadError::embedded("drawInfo", e));
                continue;
            }
        };
        if let Some(block) = info.draws.and_then(|d| d.events) {
            events.extend(block.event);
        }
    }

    Ok(pick_singles_event(events))
}

/// First singles event, else the first event of any kind
pub fn pick_singles_event(events: Vec<DrawEvent>) -> Option<DrawEvent> {
    let singles_idx = events.iter().position(is_singles_event);
    let idx = singles_idx.unwrap_or(0);
    events.into_iter().nth(idx)
}

fn is_singles_event(event: &DrawEvent) -> bool {
    let title = event.draw_type_title.as_deref().unwrap_or("").to_lowercase();
    let code = event.event_type_code.as_deref().unwrap_or("").to_uppercase();
    title.contains("singles") || code.ends_with('S')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(code: &str, title: &str, size: u32) -> Value {
        json!({"EventTypeCode": code, "DrawTypeTitle": title, "DrawSize": size})
    }

    #[test]
    fn test_picks_singles_over_doubles() {
        let raw = json!({
            "drawInfo": [{
                "Draws": {"Events": {"Event": [
                    event("LD", "Doubles Main Draw", 16),
                    event("LS", "Main Draw", 32),
                ]}}
            }]
        });

        let picked = parse_draw_response(raw).unwrap().unwrap();
        assert_eq!(picked.draw_size, Some(32));
    }

    #[test]
    fn test_falls_back_to_first_event() {
        let raw = json!({
            "drawInfo": [{"Draws": {"Events": {"Event": [
                event("LD", "Doubles", 16),
                event("QD", "Qualifying Doubles", 8),
            ]}}}]
        });

        let picked = parse_draw_response(raw).unwrap().unwrap();
        assert_eq!(picked.draw_size, Some(16));
    }

    #[test]
    fn test_encoded_draw_info_entries() {
        let encoded = json!({"Draws": {"Events": {"Event": event("LS", "Singles", 28)}}}).to_string();
        let raw = json!({"drawInfo": ["{broken", encoded]});

        let picked = parse_draw_response(raw).unwrap().unwrap();
        assert_eq!(picked.draw_size, Some(28));
    }

    #[test]
    fn test_empty_payload_has_no_event() {
        assert!(parse_draw_response(json!({"drawInfo": []})).unwrap().is_none());
        assert!(parse_draw_response(json!({})).unwrap().is_none());
    }

    #[test]
    fn test_wrong_structure_is_an_error() {
        let err = parse_draw_response(json!({"drawInfo": 42})).unwrap_err();
        assert!(err.to_string().starts_with("malformed draw payload"));
    }
}
