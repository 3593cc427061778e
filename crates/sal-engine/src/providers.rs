//! Snapshot provider traits for the six domain collaborators.
//!
//! The engine never owns domain data; each domain service implements its
//! read-all trait and is injected as a trait object, so tests substitute
//! in-memory sources. Fetches fan out concurrently and join before
//! aggregation; a failed source degrades its domain to an empty snapshot.

use crate::arenas::LifeArena;
use crate::books::Book;
use crate::error::SnapshotError;
use crate::goals::GrowthGoal;
use crate::gravity::GravityItem;
use crate::journal::JournalEntry;
use crate::tasks::Task;
use crate::vocabulary::VocabularyWord;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Read-all snapshot of the journal domain.
#[async_trait]
pub trait JournalSource: Send + Sync {
    async fn journal_entries(&self) -> Result<Vec<JournalEntry>, SnapshotError>;
}

/// Read-all snapshot of the reading/modules domain.
#[async_trait]
pub trait ReadingSource: Send + Sync {
    async fn books(&self) -> Result<Vec<Book>, SnapshotError>;
}

/// Read-all snapshot of the task domain.
#[async_trait]
pub trait TaskSource: Send + Sync {
    async fn tasks(&self) -> Result<Vec<Task>, SnapshotError>;
}

/// Read-all snapshot of the vocabulary domain.
#[async_trait]
pub trait VocabularySource: Send + Sync {
    async fn words(&self) -> Result<Vec<VocabularyWord>, SnapshotError>;
}

/// Read-all snapshot of the life-arenas domain.
#[async_trait]
pub trait ArenaSource: Send + Sync {
    async fn arenas(&self) -> Result<Vec<LifeArena>, SnapshotError>;
}

/// Read-all snapshot of the gravity/goals domain.
///
/// Gravity items and growth goals live in one service, hence one source.
#[async_trait]
pub trait GravitySource: Send + Sync {
    async fn gravity_items(&self) -> Result<Vec<GravityItem>, SnapshotError>;
    async fn growth_goals(&self) -> Result<Vec<GrowthGoal>, SnapshotError>;
}

/// The joined snapshots of every domain, input to aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainSnapshots {
    pub journal: Vec<JournalEntry>,
    pub books: Vec<Book>,
    pub tasks: Vec<Task>,
    pub words: Vec<VocabularyWord>,
    pub arenas: Vec<LifeArena>,
    pub gravity_items: Vec<GravityItem>,
    pub goals: Vec<GrowthGoal>,
}

/// Injected handles to the six domain collaborators.
#[derive(Clone)]
pub struct SnapshotSources {
    pub journal: Arc<dyn JournalSource>,
    pub reading: Arc<dyn ReadingSource>,
    pub tasks: Arc<dyn TaskSource>,
    pub vocabulary: Arc<dyn VocabularySource>,
    pub arenas: Arc<dyn ArenaSource>,
    pub gravity: Arc<dyn GravitySource>,
}

impl SnapshotSources {
    pub fn new(
        journal: Arc<dyn JournalSource>,
        reading: Arc<dyn ReadingSource>,
        tasks: Arc<dyn TaskSource>,
        vocabulary: Arc<dyn VocabularySource>,
        arenas: Arc<dyn ArenaSource>,
        gravity: Arc<dyn GravitySource>,
    ) -> Self {
        Self {
            journal,
            reading,
            tasks,
            vocabulary,
            arenas,
            gravity,
        }
    }

    /// Fetch every domain concurrently and join.
    ///
    /// A failing source never aborts the whole fetch: its domain degrades
    /// to an empty snapshot and the failure is logged.
    pub async fn fetch_all(&self) -> DomainSnapshots {
        let (journal, books, tasks, words, arenas, gravity_items, goals) = tokio::join!(
            self.journal.journal_entries(),
            self.reading.books(),
            self.tasks.tasks(),
            self.vocabulary.words(),
            self.arenas.arenas(),
            self.gravity.gravity_items(),
            self.gravity.growth_goals(),
        );

        DomainSnapshots {
            journal: or_empty("journal", journal),
            books: or_empty("reading", books),
            tasks: or_empty("tasks", tasks),
            words: or_empty("vocabulary", words),
            arenas: or_empty("arenas", arenas),
            gravity_items: or_empty("gravity", gravity_items),
            goals: or_empty("goals", goals),
        }
    }
}

fn or_empty<T>(domain: &str, result: Result<Vec<T>, SnapshotError>) -> Vec<T> {
    match result {
        Ok(records) => records,
        Err(error) => {
            warn!(domain, %error, "snapshot fetch failed, degrading domain to empty");
            Vec::new()
        }
    }
}

/// In-memory source backed by owned record lists.
///
/// Serves all six domains; tests and simple embedders clone one `Arc` into
/// every slot of `SnapshotSources`.
#[derive(Debug, Clone, Default)]
pub struct StaticSources {
    pub journal: Vec<JournalEntry>,
    pub books: Vec<Book>,
    pub tasks: Vec<Task>,
    pub words: Vec<VocabularyWord>,
    pub arenas: Vec<LifeArena>,
    pub gravity_items: Vec<GravityItem>,
    pub goals: Vec<GrowthGoal>,
}

impl StaticSources {
    /// Wire this source into every domain slot.
    pub fn into_sources(self) -> SnapshotSources {
        let shared = Arc::new(self);
        SnapshotSources::new(
            shared.clone(),
            shared.clone(),
            shared.clone(),
            shared.clone(),
            shared.clone(),
            shared,
        )
    }
}

#[async_trait]
impl JournalSource for StaticSources {
    async fn journal_entries(&self) -> Result<Vec<JournalEntry>, SnapshotError> {
        Ok(self.journal.clone())
    }
}

#[async_trait]
impl ReadingSource for StaticSources {
    async fn books(&self) -> Result<Vec<Book>, SnapshotError> {
        Ok(self.books.clone())
    }
}

#[async_trait]
impl TaskSource for StaticSources {
    async fn tasks(&self) -> Result<Vec<Task>, SnapshotError> {
        Ok(self.tasks.clone())
    }
}

#[async_trait]
impl VocabularySource for StaticSources {
    async fn words(&self) -> Result<Vec<VocabularyWord>, SnapshotError> {
        Ok(self.words.clone())
    }
}

#[async_trait]
impl ArenaSource for StaticSources {
    async fn arenas(&self) -> Result<Vec<LifeArena>, SnapshotError> {
        Ok(self.arenas.clone())
    }
}

#[async_trait]
impl GravitySource for StaticSources {
    async fn gravity_items(&self) -> Result<Vec<GravityItem>, SnapshotError> {
        Ok(self.gravity_items.clone())
    }

    async fn growth_goals(&self) -> Result<Vec<GrowthGoal>, SnapshotError> {
        Ok(self.goals.clone())
    }
}
