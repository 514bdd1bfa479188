use chrono::{Duration, FixedOffset, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wxdash::{bucket_by_day, chunk_by_month, downsample_default, HourRecord, HourlyTable, DEFAULT_CHUNK_THRESHOLD};

// Three years of hourly readings, the largest range the past view is used with.
fn synthetic_series() -> Vec<HourRecord> {
    let start = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    (0..24 * 365 * 3)
        .map(|h| {
            let mut record = HourRecord::at(start + Duration::hours(h));
            record.temp_c = Some(15.0 + 10.0 * ((h % 24) as f64 / 24.0));
            record.total_rain_mm = Some((h % 7) as f64 * 0.2);
            record
        })
        .collect()
}

fn bench_series(c: &mut Criterion) {
    let records = synthetic_series();
    let tz = FixedOffset::east_opt(10 * 3600).unwrap();

    c.bench_function("bucket_by_day", |b| b.iter(|| bucket_by_day(black_box(&records), &tz)));

    let buckets = bucket_by_day(&records, &tz);
    c.bench_function("chunk_by_month", |b| {
        b.iter(|| chunk_by_month(black_box(&buckets), DEFAULT_CHUNK_THRESHOLD))
    });

    c.bench_function("downsample", |b| b.iter(|| downsample_default(black_box(&records))));

    c.bench_function("hourly_table_charts", |b| {
        b.iter(|| {
            let table = HourlyTable::builder().records(black_box(&records)).timezone(tz).build();
            table
                .chunks()
                .iter()
                .map(|chunk| table.chart_points(chunk).len())
                .sum::<usize>()
        })
    });
}

criterion_group!(benches, bench_series);
criterion_main!(benches);
