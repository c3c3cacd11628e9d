use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Registered principal. Lives in process memory for the life of the server;
/// nothing survives a restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub role: Role,
}

/// In-memory user collection. Owned behind a mutex in `AppState`; callers
/// must hold the lock across any check-then-mutate sequence so uniqueness
/// checks stay atomic with the write that follows them.
#[derive(Debug)]
pub struct UserStore {
    users: Vec<User>,
    next_id: u64,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Exact, case-sensitive email match.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn find_by_id(&self, id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: u64) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == id)
    }

    /// True when `email` belongs to a user other than `id`.
    pub fn email_taken_by_other(&self, email: &str, id: u64) -> bool {
        self.users.iter().any(|u| u.email == email && u.id != id)
    }

    /// Append a new user with the next monotonic id. The counter is
    /// independent of the collection length, so ids are never reused after a
    /// deletion.
    pub fn insert(&mut self, email: String, password_hash: String, name: String, role: Role) -> User {
        let id = self.next_id;
        self.next_id += 1;
        let user = User {
            id,
            email,
            password_hash,
            name,
            role,
        };
        self.users.push(user.clone());
        user
    }

    /// One-time admin bootstrap with fixed id 1. Only valid on an empty
    /// store; the caller checks `is_empty` first under the same lock.
    pub fn insert_admin(&mut self, email: String, password_hash: String, name: String) -> User {
        debug_assert!(self.users.is_empty());
        self.next_id = self.next_id.max(2);
        let admin = User {
            id: 1,
            email,
            password_hash,
            name,
            role: Role::Admin,
        };
        self.users.push(admin.clone());
        admin
    }

    pub fn remove(&mut self, id: u64) -> Option<User> {
        let idx = self.users.iter().position(|u| u.id == id)?;
        Some(self.users.remove(idx))
    }
}
