use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::{SnippetStore, StoreError};
use crate::models::{NewSnippet, Snippet, SnippetPatch};

/// In-memory [`SnippetStore`]: a record map plus an insertion-ordered
/// `owner → ids` index. Nothing survives the process; used by the test
/// suites and usable as a scratch dev backend.
#[derive(Debug, Default)]
pub struct MemStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    snippets: HashMap<Uuid, Snippet>,
    by_owner: HashMap<String, Vec<Uuid>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnippetStore for MemStore {
    async fn insert(&self, new: NewSnippet) -> Result<Uuid, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let id = Uuid::new_v4();
        inner
            .by_owner
            .entry(new.owner_id.clone())
            .or_default()
            .push(id);
        inner.snippets.insert(
            id,
            Snippet {
                id,
                owner_id: new.owner_id,
                title: new.title,
                code: new.code,
                language: new.language,
                tags: new.tags,
                description: new.description,
                created_at: new.created_at,
                updated_at: new.updated_at,
            },
        );
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Snippet>, StoreError> {
        Ok(self.inner.lock().unwrap().snippets.get(&id).cloned())
    }

    async fn patch(
        &self,
        id: Uuid,
        fields: SnippetPatch,
        updated_at: i64,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let snippet = inner.snippets.get_mut(&id).ok_or(StoreError::Missing)?;
        if let Some(title) = fields.title {
            snippet.title = title;
        }
        if let Some(code) = fields.code {
            snippet.code = code;
        }
        if let Some(language) = fields.language {
            snippet.language = language;
        }
        if let Some(tags) = fields.tags {
            snippet.tags = tags;
        }
        if let Some(description) = fields.description {
            snippet.description = Some(description);
        }
        snippet.updated_at = updated_at;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let snippet = inner.snippets.remove(&id).ok_or(StoreError::Missing)?;
        if let Some(ids) = inner.by_owner.get_mut(&snippet.owner_id) {
            ids.retain(|entry| *entry != id);
        }
        Ok(())
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Snippet>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let Some(ids) = inner.by_owner.get(owner_id) else {
            return Ok(Vec::new());
        };
        // Walk the index newest insertion first, then stable-sort on the
        // creation stamp so records sharing a millisecond keep that order.
        let mut rows: Vec<Snippet> = ids
            .iter()
            .rev()
            .filter_map(|id| inner.snippets.get(id).cloned())
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}
