//! Integration tests for pronos-core
//!
//! These tests exercise the full import → forecast workflow.

use chrono::NaiveDate;
use pronos_core::{
    engine::{forecast, forecast_observations, HORIZON_DAYS},
    error::Error,
    import::{parse_csv, parse_json},
};

/// A month of gently rising daily sales in CSV form
fn rising_sales_csv() -> String {
    let start = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
    let mut csv = String::from("fecha,ventas\n");
    for day in 0..30 {
        let fecha = start + chrono::Duration::days(day);
        csv.push_str(&format!("{},{}\n", fecha, 100.0 + 2.5 * day as f64));
    }
    csv
}

#[test]
fn test_csv_to_forecast_workflow() {
    let observations = parse_csv(rising_sales_csv().as_bytes()).expect("Failed to parse CSV");
    assert_eq!(observations.len(), 30);

    let forecast = forecast_observations(&observations).expect("Failed to forecast");
    assert_eq!(forecast.predicciones.len(), HORIZON_DAYS);

    // Last observation is 2025-09-30; horizon starts October 1st
    assert_eq!(
        forecast.predicciones[0].fecha,
        NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()
    );
    assert_eq!(
        forecast.predicciones[6].fecha,
        NaiveDate::from_ymd_opt(2025, 10, 7).unwrap()
    );

    // Perfectly linear input extrapolates exactly: day 30 → 175.0
    assert!((forecast.predicciones[0].ventas - 175.0).abs() < 1e-6);
    assert!((forecast.predicciones[6].ventas - 190.0).abs() < 1e-6);
}

#[test]
fn test_json_to_forecast_workflow() {
    let data = r#"[
        {"fecha": "2025-01-01", "ventas": 10},
        {"fecha": "2025-01-02", "ventas": 20}
    ]"#;

    let payload = parse_json(data.as_bytes()).expect("Failed to read JSON");
    let forecast = forecast(&payload).expect("Failed to forecast");

    let values: Vec<f64> = forecast.predicciones.iter().map(|p| p.ventas).collect();
    assert_eq!(values, vec![30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0]);
}

#[test]
fn test_forecast_serializes_wire_shape() {
    let data = r#"[
        {"fecha": "2025-01-01", "ventas": 100},
        {"fecha": "2025-01-02", "ventas": 100}
    ]"#;

    let payload = parse_json(data.as_bytes()).unwrap();
    let forecast = forecast(&payload).unwrap();

    let json = serde_json::to_value(&forecast).unwrap();
    let predicciones = json["predicciones"].as_array().unwrap();
    assert_eq!(predicciones.len(), 7);
    assert_eq!(predicciones[0]["fecha"], "2025-01-03");
    assert_eq!(predicciones[0]["ventas"], 100.0);
}

#[test]
fn test_validation_short_circuits_in_order() {
    // Non-array beats everything
    let payload = parse_json(r#"{"fecha": "2025-01-01"}"#.as_bytes()).unwrap();
    assert!(matches!(forecast(&payload), Err(Error::InvalidInput)));

    // Too few elements beats missing fields
    let payload = parse_json(r#"[{"nope": 1}]"#.as_bytes()).unwrap();
    assert!(matches!(forecast(&payload), Err(Error::InsufficientData)));

    // Missing fields beats unparseable date
    let payload = parse_json(
        r#"[{"fecha": "not-a-date", "ventas": 1}, {"ventas": 2}]"#.as_bytes(),
    )
    .unwrap();
    assert!(matches!(forecast(&payload), Err(Error::MissingFields)));
}
