//! Per-action authorization, centralized so every handler consults the same
//! rules instead of scattering role checks.

use crate::api::ApiError;
use crate::models::Cook;
use uuid::Uuid;

/// Everything a handler can ask permission for. Reaching this module at all
/// implies an authenticated actor — unauthenticated requests are redirected
/// to the login view by the session extractor before any handler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// List/detail of dishes, ingredients, dish types, and cooks
    ReadCatalog,
    /// Create/update/delete of dishes, ingredients, and dish types
    ManageCatalog,
    /// Register a new cook account
    CreateCook,
    /// Update, delete, or reset the password of the cook with this id
    ManageCook { target: Uuid },
    /// Submit a suggestion against a dish
    CreateSuggestion,
    /// Read one suggestion authored by the cook with this id
    ReadSuggestion { author: Uuid },
    /// Flip a suggestion from submitted to approved
    ApproveSuggestion,
    /// Toggle the actor's own favorite relation to a dish
    ToggleFavorite,
}

pub fn allowed(actor: &Cook, action: Action) -> bool {
    match action {
        Action::ReadCatalog
        | Action::CreateCook
        | Action::CreateSuggestion
        | Action::ToggleFavorite => true,
        Action::ManageCatalog | Action::ApproveSuggestion => actor.is_staff,
        Action::ManageCook { target } => actor.is_staff || actor.id == target,
        Action::ReadSuggestion { author } => actor.is_staff || actor.id == author,
    }
}

/// Denied actions are terminal for the request: 403, never retried.
pub fn require(actor: &Cook, action: Action) -> Result<(), ApiError> {
    if allowed(actor, action) {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}

/// Scope for the suggestion list: staff sees every suggestion, everyone
/// else only the ones they authored.
pub fn suggestion_author_scope(actor: &Cook) -> Option<Uuid> {
    if actor.is_staff {
        None
    } else {
        Some(actor.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn cook(is_staff: bool) -> Cook {
        Cook {
            id: Uuid::new_v4(),
            username: "cook".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password_hash: String::new(),
            is_staff,
            years_of_experience: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_any_cook_can_read_catalog_and_suggest() {
        let normal = cook(false);
        assert!(allowed(&normal, Action::ReadCatalog));
        assert!(allowed(&normal, Action::CreateCook));
        assert!(allowed(&normal, Action::CreateSuggestion));
        assert!(allowed(&normal, Action::ToggleFavorite));
    }

    #[test]
    fn test_only_staff_manages_catalog() {
        assert!(!allowed(&cook(false), Action::ManageCatalog));
        assert!(allowed(&cook(true), Action::ManageCatalog));
    }

    #[test]
    fn test_only_staff_approves_suggestions() {
        assert!(!allowed(&cook(false), Action::ApproveSuggestion));
        assert!(allowed(&cook(true), Action::ApproveSuggestion));
    }

    #[test]
    fn test_cook_records_managed_by_staff_or_self() {
        let normal = cook(false);
        let staff = cook(true);
        let other = cook(false);

        assert!(allowed(&normal, Action::ManageCook { target: normal.id }));
        assert!(!allowed(&normal, Action::ManageCook { target: other.id }));
        assert!(allowed(&staff, Action::ManageCook { target: other.id }));
    }

    #[test]
    fn test_suggestion_detail_visible_to_staff_or_author() {
        let author = cook(false);
        let stranger = cook(false);
        let staff = cook(true);

        assert!(allowed(&author, Action::ReadSuggestion { author: author.id }));
        assert!(!allowed(&stranger, Action::ReadSuggestion { author: author.id }));
        assert!(allowed(&staff, Action::ReadSuggestion { author: author.id }));
    }

    #[test]
    fn test_suggestion_list_scope() {
        let normal = cook(false);
        assert_eq!(suggestion_author_scope(&normal), Some(normal.id));
        assert_eq!(suggestion_author_scope(&cook(true)), None);
    }

    #[test]
    fn test_require_maps_denial_to_forbidden() {
        let normal = cook(false);
        assert!(matches!(
            require(&normal, Action::ManageCatalog),
            Err(ApiError::Forbidden)
        ));
        assert!(require(&normal, Action::ReadCatalog).is_ok());
    }
}
