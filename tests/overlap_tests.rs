// tests/overlap_tests.rs
use seemode_core::{BBox, DetectionRecord, DetectionsByClass, iosa};
use seemode_overlap::{OverlapConfig, OverlapError, OverlapResolver, resolve_overlaps};

fn det(x1: f64, y1: f64, x2: f64, y2: f64, confidence: f64, class: &str) -> DetectionRecord {
    DetectionRecord::new(BBox::new(x1, y1, x2, y2), confidence).with_class(class)
}

fn single_class(records: Vec<DetectionRecord>) -> DetectionsByClass {
    let mut detections = DetectionsByClass::new();
    detections.insert("object".to_string(), records);
    detections
}

fn scattered_detections() -> Vec<DetectionRecord> {
    vec![
        det(0.0, 0.0, 10.0, 10.0, 0.5, "low"),
        det(3.0, 0.0, 13.0, 10.0, 0.6, "low"),
        det(6.0, 0.0, 16.0, 10.0, 0.4, "high"),
        det(9.0, 0.0, 19.0, 10.0, 0.7, "low"),
        det(40.0, 40.0, 60.0, 60.0, 0.9, "high"),
        det(45.0, 45.0, 50.0, 50.0, 0.3, "low"),
        det(55.0, 38.0, 75.0, 58.0, 0.8, "low"),
    ]
}

#[test]
fn test_single_element_invariance() {
    let record = det(1.0, 2.0, 30.0, 40.0, 0.42, "low");

    for mode in ["max", "merge"] {
        let resolved = resolve_overlaps(&single_class(vec![record.clone()]), mode, 0.5).unwrap();
        assert_eq!(resolved["object"], vec![record.clone()]);
    }
}

#[test]
fn test_empty_class() {
    for mode in ["max", "merge"] {
        let resolved = resolve_overlaps(&single_class(Vec::new()), mode, 0.5).unwrap();
        assert!(resolved["object"].is_empty());
    }
}

#[test]
fn test_idempotence() {
    for config in [OverlapConfig::max(0.5), OverlapConfig::merge(0.5)] {
        let resolver = OverlapResolver::new(config).unwrap();
        let once = resolver.resolve(&single_class(scattered_detections()));
        let (twice, stats) = resolver.resolve_with_stats(&once);

        assert_eq!(twice, once);
        assert_eq!(stats.total_merges(), 0);
    }
}

#[test]
fn test_fixed_point_has_no_overlapping_pair() {
    let threshold = 0.3;
    for config in [OverlapConfig::max(threshold), OverlapConfig::merge(threshold)] {
        let resolved = OverlapResolver::new(config)
            .unwrap()
            .resolve(&single_class(scattered_detections()));
        let survivors = &resolved["object"];

        for (i, a) in survivors.iter().enumerate() {
            for b in &survivors[i + 1..] {
                assert!(iosa(&a.bbox, &b.bbox) <= threshold);
            }
        }
    }
}

#[test]
fn test_threshold_monotonicity() {
    let thresholds = [0.05, 0.1, 0.2, 0.3, 0.5, 0.7, 0.9, 1.0];

    for make in [OverlapConfig::max, OverlapConfig::merge] {
        let merges: Vec<usize> = thresholds
            .iter()
            .map(|&t| {
                OverlapResolver::new(make(t))
                    .unwrap()
                    .resolve_with_stats(&single_class(scattered_detections()))
                    .1
                    .total_merges()
            })
            .collect();

        assert!(merges.windows(2).all(|w| w[1] <= w[0]), "{:?}", merges);
    }
}

#[test]
fn test_max_tie_break_prefers_high() {
    // B covers 90% of A
    let a = det(0.0, 0.0, 10.0, 10.0, 0.8, "high");
    let b = det(1.0, 0.0, 11.0, 10.0, 0.8, "low");
    assert!((iosa(&a.bbox, &b.bbox) - 0.9).abs() < 1e-6);

    let resolved = resolve_overlaps(&single_class(vec![a.clone(), b.clone()]), "max", 0.5).unwrap();
    assert_eq!(resolved["object"], vec![a.clone()]);

    // Without the sentinel on the first record the second one wins
    let resolved = resolve_overlaps(&single_class(vec![b.clone(), a.clone()]), "max", 0.5).unwrap();
    assert_eq!(resolved["object"], vec![a]);
}

#[test]
fn test_merge_keeps_larger_box_with_its_attributes() {
    let big = det(0.0, 0.0, 10.0, 10.0, 0.2, "low");
    let small = det(0.0, 0.0, 10.0, 5.0, 0.95, "high");

    for records in [vec![big.clone(), small.clone()], vec![small.clone(), big.clone()]] {
        let resolved = resolve_overlaps(&single_class(records), "merge", 0.5).unwrap();
        assert_eq!(resolved["object"], vec![big.clone()]);
    }
}

#[test]
fn test_invalid_mode_produces_no_output() {
    let mut detections = single_class(scattered_detections());
    detections.insert("other".to_string(), vec![det(0.0, 0.0, 1.0, 1.0, 0.5, "low")]);

    let err = resolve_overlaps(&detections, "avg", 0.5).unwrap_err();
    assert!(matches!(err, OverlapError::InvalidMode { ref mode } if mode == "avg"));
}

#[test]
fn test_non_overlap_passthrough() {
    let a = det(0.0, 0.0, 10.0, 10.0, 0.9, "high");
    let b = det(6.0, 0.0, 16.0, 10.0, 0.3, "low");

    for mode in ["max", "merge"] {
        let resolved =
            resolve_overlaps(&single_class(vec![a.clone(), b.clone()]), mode, 0.5).unwrap();
        assert_eq!(resolved["object"], vec![a.clone(), b.clone()]);
    }
}

#[test]
fn test_zero_area_robustness() {
    let line = det(5.0, 0.0, 5.0, 10.0, 0.9, "high");
    let square = det(0.0, 0.0, 10.0, 10.0, 0.5, "low");
    assert!(iosa(&line.bbox, &square.bbox).is_finite());

    for mode in ["max", "merge"] {
        let resolved =
            resolve_overlaps(&single_class(vec![line.clone(), square.clone()]), mode, 0.5).unwrap();
        assert_eq!(resolved["object"].len(), 2);
    }
}

#[test]
fn test_classes_resolved_independently() {
    let mut detections = DetectionsByClass::new();
    detections.insert("car".to_string(), vec![det(0.0, 0.0, 10.0, 10.0, 0.9, "high")]);
    detections.insert("truck".to_string(), vec![det(1.0, 1.0, 9.0, 9.0, 0.5, "low")]);

    let resolved = resolve_overlaps(&detections, "max", 0.5).unwrap();
    assert_eq!(resolved, detections);
}

#[test]
fn test_class_order_follows_input() {
    let detections = seemode_core::detections::parse_detections(
        r#"{
            "zebra": [{"bbox": [0, 0, 10, 10, 0.9], "confidence_class": "high"}],
            "apple": [{"bbox": [0, 0, 10, 10, 0.4], "confidence_class": null}],
            "mango": []
        }"#,
    )
    .unwrap();

    let resolver = OverlapResolver::new(OverlapConfig::max(0.5)).unwrap();
    let (resolved, stats) = resolver.resolve_with_stats(&detections);

    let order: Vec<&str> = resolved.keys().map(String::as_str).collect();
    assert_eq!(order, ["zebra", "apple", "mango"]);
    let order: Vec<&str> = stats.classes.keys().map(String::as_str).collect();
    assert_eq!(order, ["zebra", "apple", "mango"]);

    let json = serde_json::to_string(&resolved).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"zebra":[{"bbox":[0.0,0.0,10.0,10.0,0.9],"confidence_class":"high"}],"#,
            r#""apple":[{"bbox":[0.0,0.0,10.0,10.0,0.4],"confidence_class":null}],"#,
            r#""mango":[]}"#
        )
    );
}
