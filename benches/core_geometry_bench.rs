use std::hint::black_box;

use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};

use burndown_rs::core::{AxisMapping, TimeScale, TrendPoint};
use burndown_rs::data::{BurndownPayload, BurndownRecordPayload};
use burndown_rs::render::NullRenderer;
use burndown_rs::{render, ChartConfig};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid base date")
}

fn sprint_domain(days: i64) -> Vec<NaiveDate> {
    (0..days).map(|day| base_date() + Duration::days(day)).collect()
}

fn sprint_payload(days: i64) -> BurndownPayload {
    let domain = sprint_domain(days);
    let format = "%Y-%b-%d";
    let planned = 8.0 * days as f64;
    BurndownPayload {
        start: domain[0].format(format).to_string(),
        end: domain[domain.len() - 1].format(format).to_string(),
        planned_hours: planned,
        time_domain: domain.iter().map(|d| d.format(format).to_string()).collect(),
        burndowns: domain
            .iter()
            .enumerate()
            .map(|(index, date)| {
                let hours = if index % 5 == 4 {
                    -1.0
                } else {
                    planned - 8.0 * index as f64
                };
                BurndownRecordPayload::new(date.format(format).to_string(), hours)
            })
            .collect(),
    }
}

fn bench_date_to_pixel(c: &mut Criterion) {
    let domain = sprint_domain(30);
    let scale = TimeScale::from_domain(&domain, 890.0).expect("scale should build");
    let queries: Vec<NaiveDate> = (0..120)
        .map(|day| base_date() + Duration::days(day % 40 - 5))
        .collect();
    c.bench_function("time_scale/date_to_pixel", |b| {
        b.iter(|| {
            for query in &queries {
                black_box(scale.date_to_pixel(black_box(*query)));
            }
        })
    });
}

fn bench_axis_mapping_build(c: &mut Criterion) {
    let domain = sprint_domain(30);
    let actual: Vec<TrendPoint> = domain
        .iter()
        .enumerate()
        .map(|(index, date)| TrendPoint::new(*date, 240.0 - 8.0 * index as f64))
        .collect();
    c.bench_function("axis_mapping/build", |b| {
        b.iter(|| {
            black_box(
                AxisMapping::build(black_box(&domain), black_box(&actual), 890.0, 450.0)
                    .expect("mapping should build"),
            )
        })
    });
}

fn bench_full_render_pass(c: &mut Criterion) {
    let payload = sprint_payload(30);
    let config = ChartConfig::default().with_grid(true).with_comments(true);
    c.bench_function("pipeline/render_30_days", |b| {
        b.iter(|| {
            let mut renderer = NullRenderer::new();
            black_box(
                render(black_box(&payload), &config, &mut renderer)
                    .expect("chart should render"),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_date_to_pixel,
    bench_axis_mapping_build,
    bench_full_render_pass
);
criterion_main!(benches);
