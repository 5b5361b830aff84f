use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use burndown_rs::core::{HoursScale, TimeScale};
use burndown_rs::data::{normalize_dataset, BurndownPayload};
use burndown_rs::interaction::{TooltipController, TooltipMarker};

const DATE_FORMAT: &str = "%Y-%b-%d";

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid base date")
}

fn domain_from_offsets(offsets: &std::collections::BTreeSet<i64>) -> Vec<NaiveDate> {
    offsets
        .iter()
        .map(|offset| base_date() + Duration::days(*offset))
        .collect()
}

proptest! {
    #[test]
    fn time_scale_is_strictly_monotonic(
        offsets in prop::collection::btree_set(0i64..365, 2..30),
        query_a in -50i64..450,
        query_b in -50i64..450,
    ) {
        prop_assume!(query_a != query_b);
        let domain = domain_from_offsets(&offsets);
        let scale = TimeScale::from_domain(&domain, 890.0).expect("scale should build");
        let (early, late) = if query_a < query_b {
            (query_a, query_b)
        } else {
            (query_b, query_a)
        };
        let early_px = scale.date_to_pixel(base_date() + Duration::days(early));
        let late_px = scale.date_to_pixel(base_date() + Duration::days(late));
        prop_assert!(early_px < late_px);
    }

    #[test]
    fn time_scale_pins_domain_endpoints(
        offsets in prop::collection::btree_set(0i64..365, 2..30),
        width in 100.0..2000.0f64,
    ) {
        let domain = domain_from_offsets(&offsets);
        let scale = TimeScale::from_domain(&domain, width).expect("scale should build");
        prop_assert_eq!(scale.date_to_pixel(domain[0]), 0.0);
        prop_assert_eq!(scale.date_to_pixel(domain[domain.len() - 1]), width);
    }

    #[test]
    fn dates_inside_the_domain_stay_inside_the_axis(
        offsets in prop::collection::btree_set(0i64..365, 2..30),
        fraction in 0.0..=1.0f64,
        width in 100.0..2000.0f64,
    ) {
        let domain = domain_from_offsets(&offsets);
        let scale = TimeScale::from_domain(&domain, width).expect("scale should build");
        let first = *offsets.iter().next().expect("non-empty set");
        let last = *offsets.iter().next_back().expect("non-empty set");
        let query = first + ((last - first) as f64 * fraction) as i64;
        let pixel = scale.date_to_pixel(base_date() + Duration::days(query));
        prop_assert!((0.0..=width).contains(&pixel));
    }

    #[test]
    fn hours_inside_the_domain_stay_inside_the_axis(
        fraction in 0.0..=1.0f64,
        y_max in 1.0..1000.0f64,
        inner_height in 100.0..900.0f64,
    ) {
        let scale = HoursScale::new(y_max, inner_height).expect("scale should build");
        let pixel = scale.hours_to_pixel(fraction * y_max);
        prop_assert!((0.0..=inner_height).contains(&pixel));
    }

    #[test]
    fn more_hours_always_means_a_higher_point(
        hours in 0.0..500.0f64,
        gap in 1.0..100.0f64,
        inner_height in 100.0..900.0f64,
    ) {
        let scale = HoursScale::new(1000.0, inner_height).expect("scale should build");
        prop_assert!(scale.hours_to_pixel(hours + gap) < scale.hours_to_pixel(hours));
    }

    #[test]
    fn normalized_domains_are_strictly_increasing(
        offsets in prop::collection::vec(0i64..200, 2..40),
    ) {
        let time_domain: Vec<String> = offsets
            .iter()
            .map(|offset| {
                (base_date() + Duration::days(*offset))
                    .format(DATE_FORMAT)
                    .to_string()
            })
            .collect();
        let payload = BurndownPayload {
            start: "2024-Jan-01".to_owned(),
            end: "2024-Jul-19".to_owned(),
            planned_hours: 40.0,
            time_domain,
            burndowns: Vec::new(),
        };
        let dataset = normalize_dataset(&payload, DATE_FORMAT).expect("payload should normalize");
        prop_assert!(dataset
            .time_domain
            .windows(2)
            .all(|pair| pair[0] < pair[1]));

        let again = normalize_dataset(&payload, DATE_FORMAT).expect("payload should normalize");
        prop_assert_eq!(dataset.time_domain, again.time_domain);
    }

    #[test]
    fn tooltip_boxes_never_escape_the_plotting_area(
        max_x in 300.0..1200.0f64,
        max_y in 200.0..800.0f64,
        marker_fraction_x in 0.0..=1.0f64,
        marker_fraction_y in 0.0..=1.0f64,
    ) {
        let marker_x = marker_fraction_x * max_x;
        let marker_y = marker_fraction_y * max_y;
        let marker = TooltipMarker::new(marker_x, marker_y, base_date(), 10.0);
        let mut controller = TooltipController::new(vec![marker], max_x, max_y);
        let overlay = controller.pointer_enter(0).expect("marker exists");
        prop_assert!(overlay.x >= 0.0);
        prop_assert!(overlay.y >= 0.0);
        prop_assert!(overlay.x + overlay.width <= max_x);
        prop_assert!(overlay.y + overlay.height <= max_y);
    }
}
