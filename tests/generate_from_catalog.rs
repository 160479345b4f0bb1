use std::collections::HashSet;

use timeplanner::catalog::Catalog;
use timeplanner::generator::{
    generate_timetables, GeneratorConfig, ScheduleGenerator, ScheduleStats, StopReason,
};
use timeplanner::models::{GeneratedSchedule, PickOutcome, Timetable, Weekday, Wishlist};
use timeplanner::persistence::{AssistantState, SavedTimetable};
use timeplanner::validation::validate_wishlist;

const TERM: &str = "1261";

const CATALOG: &str = r#"[
    {
        "subject": "CS", "catalog": "136", "title": "Elementary Algorithm Design and Data Abstraction",
        "term": "1261", "units": "0.50",
        "sections": [
            {"class": "1001", "component": "LEC 001", "time_date": "10:00-11:20TTh", "location": "MC 2065"},
            {"class": "1002", "component": "LEC 002", "time_date": "02:30-03:50TTh", "location": "MC 2066"},
            {"class": "1101", "component": "TUT 101", "time_date": "10:30-11:20F", "location": "MC 4020"},
            {"class": "1102", "component": "TUT 102", "time_date": "02:30-03:20F", "location": "MC 4021"}
        ]
    },
    {
        "subject": "MATH", "catalog": "239", "title": "Introduction to Combinatorics",
        "term": "1261", "units": "0.50",
        "sections": [
            {"class": "2001", "component": "LEC 001", "time_date": "10:00-11:20TTh01/06-04/06", "location": "DC 1350"},
            {"class": "2002", "component": "LEC 002", "time_date": "09:30-10:20MWF", "location": "DC 1351"}
        ]
    },
    {
        "subject": "STAT", "catalog": "230", "title": "Probability",
        "term": "1261", "units": "0.50",
        "sections": [
            {"class": "3001", "component": "LEC 001", "time_date": "09:30-10:20MWF", "location": "M3 1006"},
            {"class": "3002", "component": "LEC 002", "time_date": "11:30-12:20MWF", "location": "M3 1006"}
        ]
    },
    {
        "subject": "ECON", "catalog": "101", "title": "Introduction to Microeconomics",
        "term": "1261", "units": "0.50",
        "sections": [
            {"class": "4081", "component": "LEC 081", "time_date": "", "location": ""}
        ]
    },
    {
        "subject": "CS", "catalog": "136", "title": "Elementary Algorithm Design and Data Abstraction",
        "term": "1259", "units": "0.50",
        "sections": [
            {"class": "9001", "component": "LEC 001", "time_date": "08:30-09:50MW", "location": "MC 2065"}
        ]
    }
]"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn wishlist_for(catalog: &Catalog, codes: &[&str]) -> Wishlist {
    let mut wishlist = Wishlist::new();
    for &code in codes {
        wishlist.insert(code, catalog.sections_for(code));
    }
    wishlist
}

fn class_numbers(schedule: &GeneratedSchedule) -> Vec<&str> {
    schedule
        .courses()
        .iter()
        .map(|c| c.section.class_number.as_str())
        .collect()
}

#[test]
fn test_full_wishlist_capped_at_five() {
    init_tracing();
    let catalog = Catalog::from_json(CATALOG, TERM).unwrap();
    let wishlist = wishlist_for(&catalog, &["CS 136", "MATH 239", "STAT 230"]);
    assert!(validate_wishlist(&wishlist).is_ok());

    let schedules = generate_timetables(&wishlist, true, 0, 5);
    assert_eq!(schedules.len(), 5);
    assert_eq!(class_numbers(&schedules[0]), vec!["1001", "1101", "2002", "3002"]);
    assert_eq!(class_numbers(&schedules[1]), vec!["1001", "1102", "2002", "3002"]);
    assert_eq!(class_numbers(&schedules[2]), vec!["1002", "1101", "2001", "3001"]);

    let signatures: HashSet<String> = schedules.iter().map(|s| s.signature()).collect();
    assert_eq!(signatures.len(), 5);
    for schedule in &schedules {
        assert!(schedule.is_conflict_free());
        assert_eq!(schedule.course_codes(), vec!["CS 136", "MATH 239", "STAT 230"]);
    }
}

#[test]
fn test_full_enumeration_without_cap() {
    init_tracing();
    let catalog = Catalog::from_json(CATALOG, TERM).unwrap();
    let wishlist = wishlist_for(&catalog, &["CS 136", "MATH 239", "STAT 230"]);

    let report = ScheduleGenerator::new(GeneratorConfig::new().with_max_results(50)).generate(&wishlist);
    assert_eq!(report.schedules.len(), 8);
    assert_eq!(report.stop_reason, StopReason::Exhausted);
    assert_eq!(report.combinations_explored, 1);

    let stats = ScheduleStats::calculate(&report.schedules[0]);
    assert_eq!(stats.days_on_campus, 5);
    assert_eq!(stats.tba_sections, 0);
    assert_eq!(stats.minutes_by_day[&Weekday::Fri], 50 + 50 + 50);
}

#[test]
fn test_subset_with_tba_course() {
    init_tracing();
    let catalog = Catalog::from_json(CATALOG, TERM).unwrap();
    let wishlist = catalog.group_by_code();
    assert_eq!(wishlist.codes(), vec!["CS 136", "MATH 239", "STAT 230", "ECON 101"]);

    let schedules = generate_timetables(&wishlist, false, 2, 5);
    assert_eq!(schedules.len(), 5);
    for schedule in &schedules {
        assert_eq!(schedule.course_codes().len(), 2);
        assert!(schedule.is_conflict_free());
    }

    let with_econ = generate_timetables(&wishlist_for(&catalog, &["STAT 230", "ECON 101"]), true, 0, 5);
    assert_eq!(with_econ.len(), 2);
    assert!(with_econ.iter().all(|s| s.contains_code("ECON 101")));
    assert_eq!(with_econ[0].courses()[1].section.location, "TBA");
}

#[test]
fn test_manual_picks_and_saved_state() {
    init_tracing();
    let catalog = Catalog::from_json(CATALOG, TERM).unwrap();
    let cs = catalog.sections_for("CS 136");
    let math = catalog.sections_for("MATH 239");

    let mut timetable = Timetable::new();
    assert_eq!(timetable.toggle(cs[0].clone()), PickOutcome::Added);
    assert_eq!(
        timetable.toggle(math[0].clone()),
        PickOutcome::Conflict {
            with: "CS 136".to_string()
        }
    );
    assert_eq!(timetable.toggle(math[1].clone()), PickOutcome::Added);

    let saved = SavedTimetable::from(&timetable);
    let json = serde_json::to_string(&saved).unwrap();
    let restored: SavedTimetable = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.into_timetable().unwrap(), timetable);

    let wishlist = wishlist_for(&catalog, &["MATH 239", "CS 136"]);
    let schedules = generate_timetables(&wishlist, true, 0, 5);
    let state = AssistantState::new(wishlist, schedules);
    let reloaded = AssistantState::from_json(&state.to_json().unwrap()).unwrap();
    assert_eq!(reloaded.wishlist.codes(), vec!["MATH 239", "CS 136"]);
    assert_eq!(reloaded, state);
}
