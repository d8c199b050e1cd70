//! Challenge invitee record type and status derivation.

use serde::{Deserialize, Serialize};

/// A friend invited to a challenge.
///
/// The three progress flags are cumulative in practice (a viewed invite was
/// sent, a joined challenge was viewed), and the derived status label reports
/// the furthest stage reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invitee {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub invite_sent: bool,
    #[serde(default)]
    pub invite_viewed: bool,
    #[serde(default)]
    pub challenge_joined: bool,
}

impl Invitee {
    /// Returns the display label for the invitee's furthest progress stage.
    ///
    /// - challenge joined: `"Challenge Joined"`
    /// - invite viewed: `"Message Viewed"`
    /// - invite sent: `"Message Sent"`
    /// - nothing yet: `""`
    ///
    /// # Examples
    ///
    /// ```
    /// use civiclists::Invitee;
    ///
    /// let invitee = Invitee {
    ///     id: 3,
    ///     name: "John".to_string(),
    ///     invite_sent: true,
    ///     invite_viewed: true,
    ///     challenge_joined: false,
    /// };
    /// assert_eq!(invitee.status_label(), "Message Viewed");
    /// ```
    #[must_use]
    pub fn status_label(&self) -> &'static str {
        if self.challenge_joined {
            "Challenge Joined"
        } else if self.invite_viewed {
            "Message Viewed"
        } else if self.invite_sent {
            "Message Sent"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invitee(sent: bool, viewed: bool, joined: bool) -> Invitee {
        Invitee {
            invite_sent: sent,
            invite_viewed: viewed,
            challenge_joined: joined,
            ..Invitee::default()
        }
    }

    #[test]
    fn status_label_reports_furthest_stage() {
        assert_eq!(invitee(false, false, false).status_label(), "");
        assert_eq!(invitee(true, false, false).status_label(), "Message Sent");
        assert_eq!(invitee(true, true, false).status_label(), "Message Viewed");
        assert_eq!(invitee(true, true, true).status_label(), "Challenge Joined");
    }

    #[test]
    fn joined_dominates_even_with_inconsistent_flags() {
        assert_eq!(invitee(false, false, true).status_label(), "Challenge Joined");
    }
}
