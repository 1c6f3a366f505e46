// src/infrastructure/repositories/memory/tables.rs
use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{MemoryStore, StoredEntity};
use crate::domain::entity::Entity;
use crate::domain::errors::DomainResult;
use crate::domain::post::{Post, PostId, PostRelation};
use crate::domain::revision::{Revision, RevisionId};
use crate::domain::specification::NoRelation;

#[async_trait]
impl StoredEntity for Post {
    fn table(store: &MemoryStore) -> &RwLock<HashMap<PostId, Post>> {
        &store.posts
    }

    fn key_clash(&self, other: &Self) -> Option<String> {
        (self.slug() == other.slug()).then(|| format!("slug '{}' already exists", self.slug()))
    }

    fn detached(&self) -> Self {
        let mut copy = self.clone();
        copy.base_mut().discard_events();
        copy.detach_relations();
        copy
    }

    async fn attach(store: &MemoryStore, rows: &mut [Post], includes: &[PostRelation]) {
        for relation in includes {
            match relation {
                PostRelation::Revisions => {
                    let ids: HashSet<PostId> = rows.iter().map(Post::id).collect();
                    let mut grouped: HashMap<PostId, Vec<Revision>> = HashMap::new();
                    {
                        let revisions = store.revisions.read().await;
                        for revision in revisions.values().filter(|r| ids.contains(&r.post_id())) {
                            grouped
                                .entry(revision.post_id())
                                .or_default()
                                .push(revision.clone());
                        }
                    }
                    for post in rows.iter_mut() {
                        let history = grouped.remove(&post.id()).unwrap_or_default();
                        post.attach_revisions(history);
                    }
                }
                PostRelation::Author => {
                    let users = store.users.read().await;
                    for post in rows.iter_mut() {
                        post.attach_author(users.get(&post.author_id()).cloned());
                    }
                }
            }
        }
    }
}

#[async_trait]
impl StoredEntity for Revision {
    fn table(store: &MemoryStore) -> &RwLock<HashMap<RevisionId, Revision>> {
        &store.revisions
    }

    fn key_clash(&self, other: &Self) -> Option<String> {
        (self.post_id() == other.post_id() && self.revision_number() == other.revision_number())
            .then(|| {
                format!(
                    "revision {} of post {} already exists",
                    self.revision_number(),
                    self.post_id()
                )
            })
    }

    fn ensure_mutable(&self) -> DomainResult<()> {
        Err(self.append_only_violation())
    }

    async fn attach(_store: &MemoryStore, _rows: &mut [Revision], includes: &[NoRelation]) {
        if let Some(relation) = includes.first() {
            match *relation {}
        }
    }
}
