//! User repository implementation.

use std::cmp::Ordering;

use dashmap::mapref::entry::Entry;
use tracing::debug;
use uuid::Uuid;

use pagehub_core::types::pagination::PageRequest;
use pagehub_entity::user::User;

use crate::error::StoreError;
use crate::store::{DocumentStore, USERS};

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: DocumentStore,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.store
            .collections()
            .users
            .get(&id)
            .map(|user| user.value().clone())
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let collections = self.store.collections();
        let id = *collections.user_emails.get(&email.to_lowercase())?;
        collections.users.get(&id).map(|user| user.value().clone())
    }

    /// Insert a new user; the email must not be taken.
    pub async fn create(&self, user: User) -> Result<User, StoreError> {
        let collections = self.store.collections();
        match collections.user_emails.entry(user.email.to_lowercase()) {
            Entry::Occupied(_) => {
                return Err(StoreError::Duplicate {
                    collection: USERS,
                    key: user.email.clone(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(user.id);
            }
        }
        collections.users.insert(user.id, user.clone());
        debug!(user_id = %user.id, "User inserted");
        Ok(user)
    }

    /// Replace an existing user document.
    ///
    /// Changing the email keeps it unique across users. The user entry stays
    /// locked while the email index is swapped; locks are always taken user
    /// first, then email.
    pub async fn update(&self, user: User) -> Result<User, StoreError> {
        let collections = self.store.collections();
        let mut stored = collections
            .users
            .get_mut(&user.id)
            .ok_or_else(|| StoreError::NotFound {
                collection: USERS,
                key: user.id.to_string(),
            })?;

        let old_email = stored.email.to_lowercase();
        let new_email = user.email.to_lowercase();
        if old_email != new_email {
            match collections.user_emails.entry(new_email) {
                Entry::Occupied(_) => {
                    return Err(StoreError::Duplicate {
                        collection: USERS,
                        key: user.email.clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(user.id);
                }
            }
            collections.user_emails.remove(&old_email);
        }

        *stored = user.clone();
        drop(stored);
        debug!(user_id = %user.id, "User updated");
        Ok(user)
    }

    /// Delete a user by id.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let collections = self.store.collections();
        let (_, user) = collections
            .users
            .remove(&id)
            .ok_or_else(|| StoreError::NotFound {
                collection: USERS,
                key: id.to_string(),
            })?;
        collections.user_emails.remove(&user.email.to_lowercase());
        debug!(user_id = %id, "User deleted");
        Ok(())
    }

    /// One page of users plus the total number of matches.
    ///
    /// Filters case-insensitively over names, email, and phone; sorts by
    /// `first_name`, `last_name`, `email`, or `created_at` (the fallback).
    pub async fn find_paginated(&self, page: &PageRequest) -> (Vec<User>, u64) {
        let needle = page.filter_search.as_deref().map(str::to_lowercase);
        let mut users: Vec<User> = self
            .store
            .collections()
            .users
            .iter()
            .filter(|entry| {
                needle
                    .as_deref()
                    .is_none_or(|needle| entry.value().matches_search(needle))
            })
            .map(|entry| entry.value().clone())
            .collect();

        let sort_by = page.sort_by.as_deref().unwrap_or("created_at");
        users.sort_by(|a, b| page.sort_order.apply(compare(sort_by, a, b)));

        let total = users.len() as u64;
        let users = users
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect();
        (users, total)
    }
}

fn compare(sort_by: &str, a: &User, b: &User) -> Ordering {
    let primary = match sort_by {
        "first_name" => a.first_name.cmp(&b.first_name),
        "last_name" => a.last_name.cmp(&b.last_name),
        "email" => a.email.cmp(&b.email),
        _ => a.created_at.cmp(&b.created_at),
    };
    primary.then_with(|| a.id.cmp(&b.id))
}
