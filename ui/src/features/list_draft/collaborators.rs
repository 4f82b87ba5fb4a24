use thiserror::Error;

use super::locale::{list_locale, Language};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("collaborator limit of {max} reached")]
    LimitReached { max: usize },
}

impl CollaboratorError {
    pub fn message(&self, language: Language) -> &'static str {
        match self {
            CollaboratorError::LimitReached { .. } => list_locale(language).add_collaborator_error,
        }
    }
}

/// Appends `user_id` unless it is already selected.
/// Fails once `max` collaborators are selected.
pub fn add_collaborator(
    ids: &[u64],
    user_id: u64,
    max: usize,
) -> Result<Vec<u64>, CollaboratorError> {
    if ids.contains(&user_id) {
        return Ok(ids.to_vec());
    }
    if ids.len() >= max {
        tracing::debug!("Rejecting collaborator {}: limit {} reached", user_id, max);
        return Err(CollaboratorError::LimitReached { max });
    }

    let mut next = ids.to_vec();
    next.push(user_id);
    Ok(next)
}

pub fn remove_collaborator(ids: &[u64], user_id: u64) -> Vec<u64> {
    ids.iter().copied().filter(|id| *id != user_id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::list_draft::validation::COLLABORATORS_MAX;

    #[test]
    fn test_add_appends_new_id() {
        assert_eq!(add_collaborator(&[3, 7], 9, COLLABORATORS_MAX), Ok(vec![3, 7, 9]));
    }

    #[test]
    fn test_add_is_idempotent() {
        assert_eq!(add_collaborator(&[3, 7], 7, COLLABORATORS_MAX), Ok(vec![3, 7]));
    }

    #[test]
    fn test_add_beyond_limit_is_rejected() {
        let full: Vec<u64> = (1..=COLLABORATORS_MAX as u64).collect();
        let error = add_collaborator(&full, 99, COLLABORATORS_MAX).unwrap_err();
        assert_eq!(error, CollaboratorError::LimitReached { max: 20 });
        assert_eq!(
            error.message(Language::En),
            "You can add up to 20 collaborators."
        );

        // Already-selected ids are still accepted at the limit
        assert_eq!(add_collaborator(&full, 20, COLLABORATORS_MAX), Ok(full.clone()));
    }

    #[test]
    fn test_remove_drops_matching_entry_only() {
        assert_eq!(remove_collaborator(&[3, 7, 9], 7), vec![3, 9]);
        assert_eq!(remove_collaborator(&[3, 9], 7), vec![3, 9]);
    }
}
