use async_trait::async_trait;
use std::collections::HashSet;

/// Admin check consumed before staff-only operations (status updates,
/// internal notes). The actual authentication flow lives outside this
/// engine; callers hand in an already-authenticated caller id.
#[async_trait]
pub trait AdminAccess: Send + Sync {
    async fn is_admin(
        &self,
        caller_id: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}

/// Allow-list backed admin check
pub struct MockAdminAccess {
    admins: HashSet<String>,
}

impl MockAdminAccess {
    pub fn with_admins(ids: &[&str]) -> Self {
        Self {
            admins: ids.iter().map(|id| id.to_string()).collect(),
        }
    }
}

#[async_trait]
impl AdminAccess for MockAdminAccess {
    async fn is_admin(
        &self,
        caller_id: &str,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        tracing::debug!("Admin check for caller {}", caller_id);
        Ok(self.admins.contains(caller_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_allow_list_membership() {
        let access = MockAdminAccess::with_admins(&["staff-1", "staff-2"]);

        assert!(access.is_admin("staff-1").await.unwrap());
        assert!(!access.is_admin("customer-9").await.unwrap());
    }
}
