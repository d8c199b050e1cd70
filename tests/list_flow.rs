//! End-to-end flow: payload ingestion → store notification → subscriber
//! derivation → view composition.

use std::rc::Rc;

use civiclists::{
    compose_campaign_list, compose_invitee_list, initialize, CampaignListSubscriber,
    CampaignStore, Config, FilterCriterion, FilterRule, InviteeListSubscriber, InviteeStore,
    ListProps,
};

fn fixed_engine() -> civiclists::ListEngine {
    initialize(&Config {
        today_override: Some(20_240_101),
        ..Config::default()
    })
}

const PROMOTED_PAYLOAD: &str = r#"[
    {
        "id": "camp-governor",
        "title": "Maria for Governor",
        "description": "Statewide campaign",
        "state_code": "TX",
        "supporters_count": 120,
        "order_in_list": 1,
        "final_election_date_as_integer": 20241105,
        "politicians": [{"name": "Maria Lopez", "state_code": "TX"}]
    },
    {
        "id": "camp-council",
        "title": "Jane for Council",
        "supporters_count": 40,
        "final_election_date_as_integer": 20240601
    },
    {
        "id": "camp-archive",
        "title": "Archived Measure",
        "supporters_count": 900,
        "final_election_date_as_integer": 20221108
    }
]"#;

#[test]
fn store_change_flows_through_to_composed_view() {
    let store = Rc::new(CampaignStore::new());
    let mut subscriber = CampaignListSubscriber::new(
        store.clone(),
        fixed_engine(),
        ListProps {
            list_mode_filters: vec![FilterCriterion::selected(FilterRule::UpcomingElectionsOnly)],
            list_mode_filters_timestamp: 1,
            title_text: "What's happening".to_string(),
            ..ListProps::default()
        },
    );
    subscriber.mount().unwrap();

    assert_eq!(store.ingest_promoted_payload(PROMOTED_PAYLOAD).unwrap(), 3);
    assert!(subscriber.handle_store_change());

    let view = compose_campaign_list(&subscriber).unwrap();
    assert_eq!(view.heading.unwrap().text, "What's happening");

    // The past campaign is filtered out; the order-hinted campaign leads.
    let titles: Vec<&str> = view
        .card_list
        .items
        .iter()
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(titles, ["Maria for Governor", "Jane for Council"]);

    // Normalization resolved the region name on the way through.
    assert_eq!(view.card_list.items[0].state_name, "Texas");
}

#[test]
fn search_prop_switches_the_composed_items() {
    let store = Rc::new(CampaignStore::new());
    let mut subscriber =
        CampaignListSubscriber::new(store.clone(), fixed_engine(), ListProps::default());
    subscriber.mount().unwrap();
    store.ingest_promoted_payload(PROMOTED_PAYLOAD).unwrap();
    subscriber.handle_store_change();

    let stamp_before = subscriber.state().last_change_timestamp;

    // Politician fallback: "lopez" appears in neither title nor description.
    assert!(subscriber.update_props(ListProps {
        search_text: "lopez".to_string(),
        ..ListProps::default()
    }));

    let view = compose_campaign_list(&subscriber).unwrap();
    assert_eq!(view.card_list.items.len(), 1);
    assert_eq!(view.card_list.items[0].id, "camp-governor");
    assert!(view.card_list.change_timestamp >= stamp_before);

    // Clearing the search goes back to the filtered list.
    assert!(subscriber.update_props(ListProps::default()));
    let view = compose_campaign_list(&subscriber).unwrap();
    assert_eq!(view.card_list.items.len(), 3);
}

#[test]
fn unmount_releases_the_store_registration() {
    let store = Rc::new(CampaignStore::new());
    let mut subscriber =
        CampaignListSubscriber::new(store.clone(), fixed_engine(), ListProps::default());
    subscriber.mount().unwrap();
    assert_eq!(store.listener_count(), 1);

    subscriber.unmount();
    assert_eq!(store.listener_count(), 0);
    assert!(compose_campaign_list(&subscriber).is_none());
}

#[test]
fn invitee_roster_flows_through_to_composed_view() {
    let store = Rc::new(InviteeStore::new());
    store
        .ingest_roster_payload(
            "chal-1",
            r#"[
                {"id": 1, "name": "Jane"},
                {"id": 3, "name": "John", "invite_sent": true, "invite_viewed": true},
                {"id": 4, "name": "Melina H.", "invite_sent": true, "invite_viewed": true, "challenge_joined": true}
            ]"#,
        )
        .unwrap();

    let mut subscriber = InviteeListSubscriber::new(store.clone(), "chal-1");
    subscriber.mount().unwrap();

    let view = compose_invitee_list(&subscriber, "").unwrap();
    assert_eq!(view.heading.text, "Invited Friends");
    let labels: Vec<&str> = view.rows.iter().map(|r| r.status_label).collect();
    assert_eq!(labels, ["", "Message Viewed", "Challenge Joined"]);

    subscriber.unmount();
    assert_eq!(store.listener_count(), 0);
}
