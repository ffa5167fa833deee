use serde_json::{json, Map, Value};

use crate::entity::{Area, City};

/// Convert a City into the public wire format. Areas keep the order the
/// data layer returned and expose only their name.
pub fn city_to_api_value(city: &City) -> Value {
    let mut obj = Map::new();
    obj.insert("id".into(), json!(city.id));
    obj.insert("name".into(), json!(city.name));
    obj.insert(
        "areas".into(),
        Value::Array(city.areas.iter().map(area_to_api_value).collect()),
    );
    Value::Object(obj)
}

pub fn cities_to_api_values(cities: &[City]) -> Vec<Value> {
    cities.iter().map(city_to_api_value).collect()
}

fn area_to_api_value(area: &Area) -> Value {
    json!({ "name": area.name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_keep_order_and_expose_name_only() {
        let city = City {
            id: 1,
            name: "Cairo".into(),
            areas: vec![
                Area { name: "Maadi".into() },
                Area { name: "Zamalek".into() },
                Area { name: "Nasr City".into() },
            ],
        };

        let value = city_to_api_value(&city);
        let areas = value["areas"].as_array().unwrap();
        assert_eq!(areas.len(), 3);
        assert_eq!(areas[0], json!({ "name": "Maadi" }));
        assert_eq!(areas[1], json!({ "name": "Zamalek" }));
        assert_eq!(areas[2], json!({ "name": "Nasr City" }));
        for area in areas {
            assert!(area.get("id").is_none(), "area id must not leak: {}", area);
        }
    }

    #[test]
    fn empty_areas_shape_as_empty_array() {
        let city = City { id: 2, name: "Giza".into(), areas: vec![] };
        assert_eq!(city_to_api_value(&city)["areas"], json!([]));
    }
}
