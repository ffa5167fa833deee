use std::collections::HashSet;

/// Capability snapshot for the authenticated user: role names plus granted
/// permission tokens, resolved by the auth layer before a request reaches
/// this crate. Policies below are pure predicates over it; mapping a denial
/// to HTTP 403 belongs to the web layer (`ApiError::forbidden`).
#[derive(Debug, Clone, Default)]
pub struct UserCapabilities {
    roles: HashSet<String>,
    permissions: HashSet<String>,
}

impl UserCapabilities {
    pub fn new<R, P>(roles: R, permissions: P) -> Self
    where
        R: IntoIterator,
        R::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn can(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }
}

/// Role administration: admins, or anyone explicitly granted `manage_roles`.
pub fn can_manage_roles(user: &UserCapabilities) -> bool {
    user.has_role("admin") || user.can("manage_roles")
}

/// Document upload: admins, or anyone granted `upload_documents`.
pub fn can_upload_documents(user: &UserCapabilities) -> bool {
    user.has_role("admin") || user.can("upload_documents")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_role_passes_both_policies() {
        let admin = UserCapabilities::new(["admin"], Vec::<String>::new());
        assert!(can_manage_roles(&admin));
        assert!(can_upload_documents(&admin));
    }

    #[test]
    fn explicit_permissions_pass_their_policy_only() {
        let uploader = UserCapabilities::new(Vec::<String>::new(), ["upload_documents"]);
        assert!(can_upload_documents(&uploader));
        assert!(!can_manage_roles(&uploader));
    }

    #[test]
    fn no_capabilities_means_denied() {
        let nobody = UserCapabilities::default();
        assert!(!can_manage_roles(&nobody));
        assert!(!can_upload_documents(&nobody));
    }
}
