//! Performance benchmarks for the payroll ledger.
//!
//! Covers the hot paths of a payroll run:
//! - Hourly pay over ledgers of increasing size
//! - Ledger edits (append and front removal)
//! - Report generation for a roster
//! - The HTTP report endpoint end to end
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payroll_ledger::api::{AppState, create_router};
use payroll_ledger::calculation::{PayRules, calculate_hourly_pay, generate_report};
use payroll_ledger::config::{ConfigLoader, PayrollConfig};
use payroll_ledger::models::{Employee, WorkDate, WorkDayEntry, WorkDayLedger};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Builds a ledger of `days` entries alternating between 6 and 10 hours.
fn create_ledger(days: usize) -> WorkDayLedger {
    (0..days)
        .map(|i| {
            let day = (i % 28) as i32 + 1;
            let hours = if i % 2 == 0 { 6 } else { 10 };
            WorkDayEntry::new(WorkDate::new(day, 1, 2026), hours)
        })
        .collect()
}

/// Builds a roster alternating hourly and salaried employees, each with 22 days.
fn create_roster(size: usize) -> Vec<Employee> {
    (0..size)
        .map(|i| {
            let mut employee = if i % 2 == 0 {
                Employee::hourly(format!("emp_{:04}", i), Decimal::new(2000, 0))
            } else {
                Employee::salaried(format!("emp_{:04}", i), Decimal::new(500_000, 0))
            };
            for entry in create_ledger(22).iter() {
                employee.add_work_day(entry.date, entry.hours);
            }
            employee
        })
        .collect()
}

fn bench_hourly_pay(c: &mut Criterion) {
    let mut group = c.benchmark_group("hourly_pay");
    let rules = PayRules::default();
    let rate = Decimal::new(2000, 0);

    for days in [1usize, 22, 365] {
        let ledger = create_ledger(days);
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &ledger, |b, ledger| {
            b.iter(|| calculate_hourly_pay(black_box(ledger), black_box(rate), &rules))
        });
    }

    group.finish();
}

fn bench_ledger_edits(c: &mut Criterion) {
    c.bench_function("ledger_append_then_drain_100", |b| {
        b.iter(|| {
            let mut ledger = WorkDayLedger::new();
            for i in 0..100 {
                ledger.append(WorkDayEntry::new(WorkDate::new(1, 1, 2026), black_box(i % 12)));
            }
            while ledger.remove_at(0).is_some() {}
            ledger
        })
    });
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_report");
    let config = PayrollConfig::default();

    for size in [10usize, 100, 1000] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| generate_report(black_box(roster), &config))
        });
    }

    group.finish();
}

fn bench_api(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let router = create_router(AppState::new(ConfigLoader::default()));

    let employees: Vec<serde_json::Value> = (0..50)
        .map(|i| {
            let work_days: Vec<serde_json::Value> = (1..=22)
                .map(|d| {
                    serde_json::json!({
                        "date": { "day": d, "month": 1, "year": 2026 },
                        "hours": 8 + (d % 3)
                    })
                })
                .collect();
            serde_json::json!({
                "name": format!("emp_{:03}", i),
                "employee_type": if i % 2 == 0 { "hourly" } else { "salaried" },
                "rate": if i % 2 == 0 { "2000" } else { "500000" },
                "work_days": work_days
            })
        })
        .collect();
    let body = serde_json::json!({ "employees": employees }).to_string();

    c.bench_function("api_report_50_employees", |b| {
        b.to_async(&runtime).iter(|| {
            let router = router.clone();
            let body = body.clone();
            async move {
                router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/payroll/report")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap()
            }
        })
    });
}

criterion_group!(benches, bench_hourly_pay, bench_ledger_edits, bench_report, bench_api);
criterion_main!(benches);
