use serde::{Deserialize, Serialize};

/// Separator used to build the composite key of a membership row
///
/// ASCII unit separator: it cannot be typed into a validated name field.
pub const MEMBERSHIP_KEY_SEPARATOR: char = '\u{1f}';

/// One row of the Ad Hoc Team ↔ Individual Author relation
///
/// The team side owns the relation: memberships are only ever written as
/// "team has member", and the author's list of teams is derived from these
/// rows by query.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamMembership {
    /// Name of the Ad Hoc Team
    pub team_name: String,

    /// Name of the Individual Author who belongs to it
    pub member_name: String,
}

impl TeamMembership {
    /// Create a new membership row
    pub fn new(team_name: String, member_name: String) -> Self {
        Self {
            team_name,
            member_name,
        }
    }

    /// Composite identity used by the persistence port
    pub fn key(&self) -> String {
        Self::compose_key(&self.team_name, &self.member_name)
    }

    /// Build a composite key from its parts
    pub fn compose_key(team_name: &str, member_name: &str) -> String {
        format!("{}{}{}", team_name, MEMBERSHIP_KEY_SEPARATOR, member_name)
    }

    /// Split a composite key back into `(team_name, member_name)`
    pub fn split_key(key: &str) -> Option<(&str, &str)> {
        key.split_once(MEMBERSHIP_KEY_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        let membership = TeamMembership::new("The Collective".to_string(), "A. Writer".to_string());
        let key = membership.key();

        assert_eq!(
            TeamMembership::split_key(&key),
            Some(("The Collective", "A. Writer"))
        );
    }

    #[test]
    fn test_split_key_rejects_plain_name() {
        assert_eq!(TeamMembership::split_key("no separator"), None);
    }
}
