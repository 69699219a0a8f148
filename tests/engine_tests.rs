use chrono::{NaiveDate, NaiveDateTime};
use rdowntime::core::batch::{analyze_many, build_queries};
use rdowntime::core::calculator::shift::ShiftPolicy;
use rdowntime::core::logic::Core;
use rdowntime::models::day_report::{DayOutcome, DayReport};
use rdowntime::models::event::MachineEvent;
use rdowntime::models::interval::Interval;
use rdowntime::models::query::DayQuery;

const MONDAY: (i32, u32, u32) = (2025, 3, 3);
const FRIDAY: (i32, u32, u32) = (2025, 3, 7);

fn day((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(date: (i32, u32, u32), h: u32, m: u32, s: u32) -> NaiveDateTime {
    day(date).and_hms_opt(h, m, s).unwrap()
}

fn ev(date: (i32, u32, u32), h: u32, m: u32, s: u32) -> MachineEvent {
    MachineEvent::new("M1", at(date, h, m, s), None)
}

/// One event every `step` minutes over [from, to) on `date`.
fn dense(date: (i32, u32, u32), from: u32, to: u32, step: u32) -> Vec<MachineEvent> {
    (from..to)
        .step_by(step as usize)
        .map(|m| ev(date, m / 60, m % 60, 0))
        .collect()
}

fn run(events: &[MachineEvent], date: (i32, u32, u32), threshold: i64) -> DayReport {
    let q = DayQuery::new("M1", day(date), threshold).unwrap();
    Core::analyze_day(events, &q, &ShiftPolicy::default())
        .into_report()
        .expect("computed report")
}

fn assert_well_formed(r: &DayReport) {
    let window = r.shift.as_interval();

    for w in r.intervals.windows(2) {
        assert!(w[0].end <= w[1].start, "overlap or disorder: {:?}", w);
    }
    for iv in &r.intervals {
        assert!(iv.start >= window.start && iv.end <= window.end);
        assert!(iv.duration_minutes() >= r.threshold as f64);
        for p in &r.pauses {
            assert!(!iv.overlaps(&p.as_interval()), "{:?} hits {:?}", iv, p);
        }
    }

    let ind = &r.indicators;
    assert_eq!(ind.scheduled_unavailable + ind.net, ind.total_available);
    assert!(ind.unplanned_lost >= 0.0);
    assert!(ind.unplanned_lost <= ind.net + 1e-9);
    assert!((0.0..=100.0).contains(&ind.loss_percentage));
}

#[test]
fn idle_monday_loses_every_net_minute() {
    let events = vec![ev(MONDAY, 5, 30, 0)];
    let r = run(&events, MONDAY, 3);

    assert_eq!(r.indicators.total_available, 600.0);
    assert_eq!(r.indicators.scheduled_unavailable, 80.0);
    assert_eq!(r.indicators.net, 520.0);
    assert_eq!(r.indicators.unplanned_lost, 520.0);
    assert_eq!(r.indicators.loss_percentage, 100.0);
    assert_eq!(
        r.intervals,
        vec![
            Interval::new(at(MONDAY, 6, 0, 0), at(MONDAY, 8, 0, 0)),
            Interval::new(at(MONDAY, 8, 20, 0), at(MONDAY, 12, 0, 0)),
            Interval::new(at(MONDAY, 12, 40, 0), at(MONDAY, 15, 40, 0)),
        ]
    );
    assert_well_formed(&r);
}

#[test]
fn gap_across_lunch_is_split_into_two_independent_pieces() {
    let events = vec![ev(MONDAY, 11, 0, 0), ev(MONDAY, 13, 0, 0)];
    let r = run(&events, MONDAY, 3);

    assert!(r.intervals.contains(&Interval::new(at(MONDAY, 11, 0, 0), at(MONDAY, 12, 0, 0))));
    assert!(r.intervals.contains(&Interval::new(at(MONDAY, 12, 40, 0), at(MONDAY, 13, 0, 0))));
    // touching pieces stay separate
    assert!(r.intervals.contains(&Interval::new(at(MONDAY, 13, 0, 0), at(MONDAY, 15, 40, 0))));
    assert_eq!(r.intervals.len(), 5);
    assert_well_formed(&r);
}

#[test]
fn lunch_remainder_below_threshold_is_dropped() {
    let mut events = dense(MONDAY, 6 * 60, 16 * 60, 2);
    events.retain(|e| {
        let t = e.time();
        !(t > at(MONDAY, 11, 50, 0).time() && t < at(MONDAY, 12, 42, 0).time())
    });
    // silence 11:50 -> 12:42, lunch leaves 10 min before and 2 min after
    let r = run(&events, MONDAY, 3);

    assert_eq!(
        r.intervals,
        vec![Interval::new(at(MONDAY, 11, 50, 0), at(MONDAY, 12, 0, 0))]
    );
    assert_eq!(r.indicators.unplanned_lost, 10.0);
}

#[test]
fn remainder_of_exactly_threshold_survives_pause_subtraction() {
    let mut events = dense(MONDAY, 6 * 60, 16 * 60, 2);
    events.retain(|e| {
        let t = e.time();
        !(t > at(MONDAY, 11, 50, 0).time() && t < at(MONDAY, 12, 44, 0).time())
    });
    events.push(ev(MONDAY, 12, 43, 0));
    // silence 11:50 -> 12:43, lunch leaves exactly 3 min after
    let r = run(&events, MONDAY, 3);

    assert_eq!(
        r.intervals,
        vec![
            Interval::new(at(MONDAY, 11, 50, 0), at(MONDAY, 12, 0, 0)),
            Interval::new(at(MONDAY, 12, 40, 0), at(MONDAY, 12, 43, 0)),
        ]
    );
    assert_well_formed(&r);
}

#[test]
fn friday_shift_is_shorter() {
    let events = vec![ev(FRIDAY, 5, 30, 0)];
    let r = run(&events, FRIDAY, 3);

    assert_eq!(r.indicators.total_available, 540.0);
    assert_eq!(r.indicators.net, 460.0);
    assert_eq!(r.indicators.loss_percentage, 100.0);

    let cleanup = r.pauses.last().unwrap();
    assert_eq!(cleanup.start, at(FRIDAY, 14, 40, 0));
    assert_eq!(cleanup.end, at(FRIDAY, 15, 0, 0));
    assert_well_formed(&r);
}

#[test]
fn gaps_below_threshold_never_become_dead_time() {
    let mut events = dense(MONDAY, 6 * 60, 16 * 60, 2);
    events.push(ev(MONDAY, 10, 1, 30));
    let r = run(&events, MONDAY, 3);

    assert!(r.intervals.is_empty());
    assert_eq!(r.indicators.unplanned_lost, 0.0);
    assert_eq!(r.indicators.loss_percentage, 0.0);
}

#[test]
fn threshold_is_inclusive() {
    let mut events = dense(MONDAY, 6 * 60, 16 * 60, 2);
    // 10:00 -> 10:03 becomes the only three-minute silence
    events.retain(|e| e.time() != at(MONDAY, 10, 2, 0).time());
    events.push(ev(MONDAY, 10, 3, 0));
    events.push(ev(MONDAY, 10, 5, 0));

    let r3 = run(&events, MONDAY, 3);
    assert_eq!(
        r3.intervals,
        vec![Interval::new(at(MONDAY, 10, 0, 0), at(MONDAY, 10, 3, 0))]
    );

    let r4 = run(&events, MONDAY, 4);
    assert!(r4.intervals.is_empty());
}

#[test]
fn same_minute_duplicates_collapse_to_the_earliest() {
    let events = vec![
        ev(MONDAY, 9, 0, 50),
        ev(MONDAY, 9, 0, 5),
        ev(MONDAY, 9, 30, 0),
    ];
    let r = run(&events, MONDAY, 3);

    assert!(r.intervals.contains(&Interval::new(at(MONDAY, 8, 20, 0), at(MONDAY, 9, 0, 5))));
    assert!(r.intervals.contains(&Interval::new(at(MONDAY, 9, 0, 5), at(MONDAY, 9, 30, 0))));
}

#[test]
fn no_events_is_not_the_same_as_no_dead_time() {
    let q = DayQuery::new("M1", day(MONDAY), 3).unwrap();
    let other_day = vec![ev(FRIDAY, 9, 0, 0)];

    let outcome = Core::analyze_day(&other_day, &q, &ShiftPolicy::default());
    assert!(outcome.is_no_data());
    assert_eq!(outcome, DayOutcome::NoData);
}

#[test]
fn analysis_is_idempotent() {
    let events = vec![ev(MONDAY, 7, 0, 0), ev(MONDAY, 11, 0, 0), ev(MONDAY, 14, 0, 0)];
    let a = run(&events, MONDAY, 5);
    let b = run(&events, MONDAY, 5);

    assert_eq!(a, b);
    assert_well_formed(&a);
}

#[test]
fn batch_keeps_query_order_and_matches_single_runs() {
    let mut events = vec![ev(MONDAY, 10, 0, 0), ev(FRIDAY, 10, 0, 0)];
    events.push(MachineEvent::new("M2", at(MONDAY, 12, 0, 0), None));

    let machines = vec!["M1".to_string(), "M2".to_string()];
    let dates = vec![day(MONDAY), day(FRIDAY)];
    let queries = build_queries(&machines, &dates, 3).unwrap();
    let policy = ShiftPolicy::default();

    let results = analyze_many(&events, &queries, &policy);

    assert_eq!(results.len(), 4);
    for (q, outcome) in &results {
        assert_eq!(outcome, &Core::analyze_day(&events, q, &policy));
    }
    assert!(results[3].1.is_no_data()); // M2 on Friday
}
