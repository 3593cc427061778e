//! Tests for snapshot aggregation into JourneyProgress.

use chrono::{DateTime, TimeZone, Utc};
use sal_engine::{
    Aggregator, Book, DomainSnapshots, EngineConfig, JournalEntry, JourneyProgress, LifeArena,
    MasteryLevel, Task, TaskStatus, VocabularyWord,
};
use uuid::Uuid;

fn ts(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, month, day, 9, 0, 0).unwrap()
}

fn entry(date: DateTime<Utc>, words: u32) -> JournalEntry {
    JournalEntry {
        id: Uuid::new_v4(),
        date,
        words,
        mood: None,
    }
}

fn task(status: TaskStatus, updated_at: DateTime<Utc>) -> Task {
    Task {
        id: Uuid::new_v4(),
        title: "Weekly review".to_string(),
        status,
        updated_at,
        completed_at: None,
    }
}

fn book(total: u32, done: u32, last_read: Option<DateTime<Utc>>) -> Book {
    Book {
        id: Uuid::new_v4(),
        title: "Atomic Habits".to_string(),
        sections_total: total,
        sections_completed: done,
        completed: false,
        last_read,
    }
}

fn word(mastery: MasteryLevel) -> VocabularyWord {
    VocabularyWord {
        id: Uuid::new_v4(),
        word: "liminal".to_string(),
        definition: String::new(),
        last_reviewed: None,
        review_count: 0,
        mastery_level: mastery,
        next_review: None,
    }
}

fn arena(score: u8) -> LifeArena {
    LifeArena {
        id: Uuid::new_v4(),
        name: "health".to_string(),
        score,
        updated_at: ts(3, 1),
    }
}

#[test]
fn test_empty_snapshots_yield_zero_progress() {
    let aggregator = Aggregator::new(EngineConfig::default());
    let progress = aggregator.aggregate(&DomainSnapshots::default(), ts(3, 10));
    assert_eq!(progress, JourneyProgress::default());
}

#[test]
fn test_overall_completion_is_weighted_blend() {
    let snapshots = DomainSnapshots {
        journal: (1..=5).map(|d| entry(ts(1, d), 100)).collect(),
        books: vec![book(10, 5, None)],
        tasks: vec![
            task(TaskStatus::Completed, ts(1, 1)),
            task(TaskStatus::Completed, ts(1, 2)),
            task(TaskStatus::Todo, ts(1, 3)),
            task(TaskStatus::Todo, ts(1, 4)),
        ],
        words: vec![
            word(MasteryLevel::Mastered),
            word(MasteryLevel::New),
            word(MasteryLevel::New),
            word(MasteryLevel::New),
        ],
        arenas: vec![arena(6)],
        ..Default::default()
    };

    let aggregator = Aggregator::new(EngineConfig::default());
    let progress = aggregator.aggregate(&snapshots, ts(3, 10));

    // 0.25*50 + 0.25*5 + 0.20*50 + 0.15*25 + 0.15*60 = 36.5
    assert!((progress.overall_completion - 0.365).abs() < 1e-9);
    assert_eq!(progress.books.completion_pct, 50.0);
    assert_eq!(progress.journal.completion_pct, 5.0);
    assert_eq!(progress.tasks.completion_pct, 50.0);
    assert_eq!(progress.vocabulary.completion_pct, 25.0);
    assert_eq!(progress.life_arenas.completion_pct, 60.0);
}

#[test]
fn test_overall_completion_stays_in_bounds() {
    // Custom weights that do not sum to 1 still normalize into [0,1].
    let mut config = EngineConfig::default();
    config.weights.books = 3.0;
    config.weights.journal = 2.0;

    let snapshots = DomainSnapshots {
        books: vec![book(4, 4, None)],
        arenas: vec![arena(10)],
        ..Default::default()
    };

    let aggregator = Aggregator::new(config);
    let progress = aggregator.aggregate(&snapshots, ts(3, 10));
    assert!(progress.overall_completion >= 0.0);
    assert!(progress.overall_completion <= 1.0);
}

#[test]
fn test_streak_spans_domains() {
    // Journal two days ago, reading yesterday, task today: one streak.
    let now = ts(3, 10);
    let snapshots = DomainSnapshots {
        journal: vec![entry(ts(3, 8), 200)],
        books: vec![book(10, 1, Some(ts(3, 9)))],
        tasks: vec![task(TaskStatus::Completed, ts(3, 10))],
        ..Default::default()
    };

    let aggregator = Aggregator::new(EngineConfig::default());
    let progress = aggregator.aggregate(&snapshots, now);

    assert_eq!(progress.days_active, 3);
    assert_eq!(progress.current_streak, 3);
    assert_eq!(progress.start_date, Some(ts(3, 8)));
    assert_eq!(progress.last_activity_date, Some(ts(3, 10)));
}

#[test]
fn test_vocabulary_reviews_do_not_feed_streaks() {
    let now = ts(3, 10);
    let mut reviewed = word(MasteryLevel::Learning);
    reviewed.last_reviewed = Some(ts(3, 10));
    let snapshots = DomainSnapshots {
        words: vec![reviewed],
        ..Default::default()
    };

    let aggregator = Aggregator::new(EngineConfig::default());
    let progress = aggregator.aggregate(&snapshots, now);
    assert_eq!(progress.days_active, 0);
    assert_eq!(progress.current_streak, 0);
    assert!(progress.last_activity_date.is_none());
}

#[test]
fn test_all_percentages_within_range() {
    let snapshots = DomainSnapshots {
        journal: (1..=28).map(|d| entry(ts(2, d), 5000)).collect(),
        books: vec![book(2, 9, None)],
        tasks: vec![task(TaskStatus::Completed, ts(2, 1))],
        words: vec![word(MasteryLevel::Mastered)],
        arenas: vec![arena(14)],
        ..Default::default()
    };

    let aggregator = Aggregator::new(EngineConfig::default());
    let progress = aggregator.aggregate(&snapshots, ts(3, 10));

    for pct in [
        progress.books.completion_pct,
        progress.journal.completion_pct,
        progress.tasks.completion_pct,
        progress.vocabulary.completion_pct,
        progress.life_arenas.completion_pct,
    ] {
        assert!((0.0..=100.0).contains(&pct));
    }
    assert!((0.0..=1.0).contains(&progress.overall_completion));
}
