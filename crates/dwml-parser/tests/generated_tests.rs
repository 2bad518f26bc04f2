//! Extraction over generated documents.

use dwml_parser::{Document, ForecastExtractor, TimeAligner};
use ndfd_common::ParameterValue;
use test_utils::{generate_glance_document, DwmlBuilder};

#[test]
fn test_every_location_gets_its_own_values() {
    let xml = generate_glance_document(5, 8);
    let forecast = ForecastExtractor::default()
        .extract(&xml, &["sky"])
        .unwrap();
    assert_eq!(forecast.len(), 5);

    for i in 0..5 {
        let sky = forecast.series(&format!("point{}", i + 1), "sky").unwrap();
        let values: Vec<i64> = sky.iter().filter_map(|tv| tv.value.as_i64()).collect();
        let expected: Vec<i64> = (0..8).map(|s| (i * 1000 + s) as i64).collect();
        assert_eq!(values, expected);
    }
}

#[test]
fn test_expanded_length_is_sum_of_slot_samples() {
    for slots in [4, 12, 40] {
        let xml = generate_glance_document(2, slots);
        let forecast = ForecastExtractor::default()
            .extract(&xml, &["maxt"])
            .unwrap();
        let maxt = forecast.series("point1", "maxt").unwrap();
        // Each 12-hour range yields five samples
        assert_eq!(maxt.len(), (slots / 4) * 5);
        assert!(maxt.windows(2).all(|w| w[0].time <= w[1].time));
    }
}

#[test]
fn test_overlapping_layout_ties_keep_document_order() {
    let xml = DwmlBuilder::new()
        .location("point1", 35.0, -97.0)
        .ranged_layout(
            "k-overlap",
            &[
                ("2008-06-02T08:00:00-05:00", "2008-06-02T14:00:00-05:00"),
                ("2008-06-02T11:00:00-05:00", "2008-06-02T14:00:00-05:00"),
            ],
        )
        .scalar_parameter("point1", "temperature", "Temperature", "k-overlap", &["first", "second"])
        .build();

    let forecast = ForecastExtractor::default().extract(&xml, &["temp"]).unwrap();
    let temp = forecast.series("point1", "temp").unwrap();
    let values: Vec<&str> = temp.iter().filter_map(|tv| tv.value.as_str()).collect();
    assert_eq!(values, vec!["first", "first", "second", "first", "second"]);
}

#[test]
fn test_layout_shared_by_locations_is_not_consumed() {
    let xml = generate_glance_document(3, 4);
    let doc = Document::parse(&xml).unwrap();
    let defs = dwml_parser::parameters::resolve(&["maxt"]).unwrap();

    let forecast = ForecastExtractor::default()
        .extract_resolved(&doc, &defs)
        .unwrap();
    let lens: Vec<usize> = forecast
        .iter()
        .map(|loc| loc.series("maxt").map_or(0, Vec::len))
        .collect();
    assert_eq!(lens, vec![5, 5, 5]);
}

#[test]
fn test_aligner_length_matches_extraction() {
    let xml = generate_glance_document(1, 16);
    let doc = Document::parse(&xml).unwrap();
    let layouts = dwml_parser::extract_time_layouts(&doc).unwrap();
    let expected = TimeAligner::default().expanded_len(&layouts["k-p12h-gen"]);

    let forecast = ForecastExtractor::default().extract(&xml, &["maxt"]).unwrap();
    let maxt = forecast.series("point1", "maxt").unwrap();
    assert_eq!(maxt.len(), expected);
    assert_eq!(maxt[0].value, ParameterValue::Integer(60));
}
