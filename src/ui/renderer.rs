//! View composition from subscriber state.
//!
//! Composition is pure: it reads subscriber state and produces view-model
//! structs, deciding between the search results and the filtered list and
//! forwarding the change stamp so memoized children can detect a fresh
//! derivation. An unmounted subscriber composes to `None` (render nothing).

use crate::app::{CampaignListSubscriber, InviteeListSubscriber};

use super::viewmodel::{
    CampaignListView, CardListProps, FirstCampaignControllerSlot, FirstInviteeControllerSlot,
    HeadingInfo, InviteeListView, InviteeRow,
};

/// Heading shown above every invitee roster.
const INVITEE_HEADING: &str = "Invited Friends";

/// Composes the campaign list view from subscriber state.
///
/// Returns `None` while the subscriber is unmounted. When the subscriber's
/// search text is non-empty the card list shows the search results, otherwise
/// the filtered list. The heading appears only when the parent supplied title
/// text and did not hide it.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use civiclists::{
///     CampaignListSubscriber, CampaignStore, ListEngine, ListProps,
///     compose_campaign_list,
/// };
///
/// let store = Rc::new(CampaignStore::new());
/// let mut subscriber = CampaignListSubscriber::new(
///     store,
///     ListEngine::new(),
///     ListProps::default(),
/// );
/// assert!(compose_campaign_list(&subscriber).is_none());
///
/// subscriber.mount().unwrap();
/// let view = compose_campaign_list(&subscriber).unwrap();
/// assert!(view.heading.is_none());
/// ```
#[must_use]
pub fn compose_campaign_list(subscriber: &CampaignListSubscriber) -> Option<CampaignListView> {
    if !subscriber.is_mounted() {
        return None;
    }

    let props = subscriber.props();
    let state = subscriber.state();
    let is_searching = !props.search_text.is_empty();

    let heading = if !props.hide_title && !props.title_text.is_empty() {
        Some(HeadingInfo {
            text: props.title_text.clone(),
        })
    } else {
        None
    };

    let items = if is_searching {
        state.search_results.clone()
    } else {
        state.filtered_list.clone()
    };

    Some(CampaignListView {
        heading,
        card_list: CardListProps {
            items,
            change_timestamp: state.last_change_timestamp,
            vertical_list: true,
        },
        first_campaign_controller: FirstCampaignControllerSlot,
    })
}

/// Composes the invitee list view from subscriber state.
///
/// Returns `None` while the subscriber is unmounted. `search_text` is
/// forwarded untouched to the first-invitee controller slot.
#[must_use]
pub fn compose_invitee_list(
    subscriber: &InviteeListSubscriber,
    search_text: &str,
) -> Option<InviteeListView> {
    if !subscriber.is_mounted() {
        return None;
    }

    let rows = subscriber
        .invitees()
        .iter()
        .map(|invitee| InviteeRow {
            id: invitee.id,
            name: invitee.name.clone(),
            status_label: invitee.status_label(),
        })
        .collect();

    Some(InviteeListView {
        heading: HeadingInfo {
            text: INVITEE_HEADING.to_string(),
        },
        rows,
        change_timestamp: subscriber.last_change_timestamp(),
        first_invitee_controller: FirstInviteeControllerSlot {
            challenge_id: subscriber.challenge_id().to_string(),
            search_text: search_text.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::app::ListProps;
    use crate::domain::{Campaign, Invitee};
    use crate::engine::ListEngine;
    use crate::stores::{CampaignSource, CampaignStore, InviteeSource, InviteeStore};

    fn mounted_subscriber(props: ListProps) -> CampaignListSubscriber {
        let store = Rc::new(CampaignStore::new());
        store.replace_promoted(vec![
            Campaign {
                title: "Jane for Council".to_string(),
                ..Campaign::default()
            },
            Campaign {
                title: "Other Campaign".to_string(),
                ..Campaign::default()
            },
        ]);
        let mut subscriber = CampaignListSubscriber::new(
            store as Rc<dyn CampaignSource>,
            ListEngine::with_today(20_240_101),
            props,
        );
        subscriber.mount().unwrap();
        subscriber
    }

    #[test]
    fn unmounted_subscriber_composes_to_none() {
        let store = Rc::new(CampaignStore::new());
        let subscriber = CampaignListSubscriber::new(
            store as Rc<dyn CampaignSource>,
            ListEngine::new(),
            ListProps::default(),
        );
        assert!(compose_campaign_list(&subscriber).is_none());
    }

    #[test]
    fn filtered_list_shown_when_not_searching() {
        let subscriber = mounted_subscriber(ListProps::default());
        let view = compose_campaign_list(&subscriber).unwrap();

        assert_eq!(view.card_list.items.len(), 2);
        assert!(view.card_list.vertical_list);
        assert_eq!(
            view.card_list.change_timestamp,
            subscriber.state().last_change_timestamp
        );
    }

    #[test]
    fn search_results_shown_while_searching() {
        let subscriber = mounted_subscriber(ListProps {
            search_text: "jane".to_string(),
            ..ListProps::default()
        });
        let view = compose_campaign_list(&subscriber).unwrap();

        assert_eq!(view.card_list.items.len(), 1);
        assert_eq!(view.card_list.items[0].title, "Jane for Council");
    }

    #[test]
    fn heading_follows_title_and_hide_flag() {
        let titled = mounted_subscriber(ListProps {
            title_text: "What's happening".to_string(),
            ..ListProps::default()
        });
        let view = compose_campaign_list(&titled).unwrap();
        assert_eq!(view.heading.unwrap().text, "What's happening");

        let hidden = mounted_subscriber(ListProps {
            title_text: "What's happening".to_string(),
            hide_title: true,
            ..ListProps::default()
        });
        assert!(compose_campaign_list(&hidden).unwrap().heading.is_none());

        let untitled = mounted_subscriber(ListProps::default());
        assert!(compose_campaign_list(&untitled).unwrap().heading.is_none());
    }

    #[test]
    fn invitee_view_carries_status_labels_and_controller_slot() {
        let store = Rc::new(InviteeStore::new());
        store.replace_roster(
            "chal-1",
            vec![
                Invitee {
                    id: 1,
                    name: "Jane".to_string(),
                    ..Invitee::default()
                },
                Invitee {
                    id: 4,
                    name: "Melina H.".to_string(),
                    invite_sent: true,
                    invite_viewed: true,
                    challenge_joined: true,
                },
            ],
        );
        let mut subscriber =
            InviteeListSubscriber::new(store as Rc<dyn InviteeSource>, "chal-1");
        subscriber.mount().unwrap();

        let view = compose_invitee_list(&subscriber, "melina").unwrap();
        assert_eq!(view.heading.text, "Invited Friends");
        assert_eq!(view.rows[0].status_label, "");
        assert_eq!(view.rows[1].status_label, "Challenge Joined");
        assert_eq!(view.first_invitee_controller.challenge_id, "chal-1");
        assert_eq!(view.first_invitee_controller.search_text, "melina");

        subscriber.unmount();
        assert!(compose_invitee_list(&subscriber, "").is_none());
    }
}
