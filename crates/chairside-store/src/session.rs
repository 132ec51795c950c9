//! Saved comparison sessions.
//!
//! A session pins the criteria profile and material selection behind one
//! comparison view so the dashboard can restore it later. Sessions live in
//! a [`TtlCache`] and age out like any other cached value.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use chairside_core::models::CriteriaProfile;

use crate::cache::TtlCache;

/// One saved comparison view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComparisonSession {
    /// Locally generated UUID
    pub session_id: String,
    /// When the session was saved
    pub created_at: DateTime<Utc>,
    /// The criteria the comparison was built against
    pub profile: CriteriaProfile,
    /// Materials pinned into the comparison
    pub material_ids: Vec<String>,
}

impl ComparisonSession {
    /// Create a session with a fresh id.
    pub fn new(
        profile: CriteriaProfile,
        material_ids: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            created_at,
            profile,
            material_ids,
        }
    }
}

/// TTL-backed store of comparison sessions keyed by session id.
pub struct SessionStore {
    cache: TtlCache<ComparisonSession>,
}

impl SessionStore {
    /// Create a store whose sessions expire `ttl` after their save time.
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: TtlCache::new(ttl),
        }
    }

    /// Save a session; returns its id for later lookup.
    pub fn save(&mut self, session: ComparisonSession) -> String {
        let id = session.session_id.clone();
        let created_at = session.created_at;
        self.cache.put(id.clone(), session, created_at);
        id
    }

    /// Fetch a live session.
    pub fn get(&self, session_id: &str, now: DateTime<Utc>) -> Option<&ComparisonSession> {
        self.cache.get(session_id, now)
    }

    /// Drop sessions older than the TTL.
    pub fn purge_expired(&mut self, now: DateTime<Utc>) {
        self.cache.purge_expired(now);
    }

    /// Number of stored sessions, expired ones included until purged.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_new_session_has_uuid() {
        let session = ComparisonSession::new(
            CriteriaProfile::new("crown"),
            vec!["zirconia".into()],
            at(9),
        );
        assert_eq!(session.session_id.len(), 36); // UUID format
        assert_eq!(session.material_ids, vec!["zirconia"]);
    }

    #[test]
    fn test_save_and_restore() {
        let mut store = SessionStore::new(Duration::hours(24));
        let session = ComparisonSession::new(
            CriteriaProfile::new("restoration"),
            vec!["amalgam".into(), "composite".into()],
            at(9),
        );
        let id = store.save(session.clone());

        let restored = store.get(&id, at(10)).unwrap();
        assert_eq!(restored, &session);
    }

    #[test]
    fn test_sessions_age_out() {
        let mut store = SessionStore::new(Duration::hours(1));
        let id = store.save(ComparisonSession::new(
            CriteriaProfile::new("crown"),
            vec![],
            at(9),
        ));

        assert!(store.get(&id, at(9)).is_some());
        assert!(store.get(&id, at(11)).is_none());

        store.purge_expired(at(11));
        assert!(store.is_empty());
    }
}
