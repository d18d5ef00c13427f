use mergington_activities::{Activity, ActivityRegistry, RegistryError};
use proptest::prelude::*;

// Property-based tests for roster invariants.
// Every case builds a fresh registry, so cases never see each other's signups.

fn arbitrary_email() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9._]{0,12}@mergington\\.edu"
}

fn arbitrary_activity_name() -> impl Strategy<Value = String> {
    prop::sample::select(
        mergington_activities::default_activities()
            .into_iter()
            .map(|a| a.name)
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #[test]
    fn second_signup_is_rejected(
        activity in arbitrary_activity_name(),
        email in arbitrary_email(),
    ) {
        let registry = ActivityRegistry::new();
        prop_assume!(!registry.get(&activity).unwrap().has_participant(&email));

        registry.signup(&activity, &email).unwrap();
        let len = registry.get(&activity).unwrap().participants.len();

        let err = registry.signup(&activity, &email).unwrap_err();
        let is_already_registered = matches!(err, RegistryError::AlreadyRegistered { .. });
        prop_assert!(is_already_registered);
        prop_assert_eq!(registry.get(&activity).unwrap().participants.len(), len);
    }
}

proptest! {
    #[test]
    fn signup_then_unregister_restores_roster(
        activity in arbitrary_activity_name(),
        email in arbitrary_email(),
    ) {
        let registry = ActivityRegistry::new();
        let before = registry.get(&activity).unwrap().participants;
        prop_assume!(!before.contains(&email));

        registry.signup(&activity, &email).unwrap();
        registry.unregister(&activity, &email).unwrap();

        prop_assert_eq!(registry.get(&activity).unwrap().participants, before);
    }
}

proptest! {
    #[test]
    fn unknown_activity_is_not_found_for_any_email(
        name in "[A-Za-z ]{1,24}",
        email in ".{0,40}",
    ) {
        let registry = ActivityRegistry::new();
        prop_assume!(!registry.contains(&name));

        let signup_not_found = matches!(
            registry.signup(&name, &email),
            Err(RegistryError::ActivityNotFound { .. })
        );
        let unregister_not_found = matches!(
            registry.unregister(&name, &email),
            Err(RegistryError::ActivityNotFound { .. })
        );
        prop_assert!(signup_not_found);
        prop_assert!(unregister_not_found);
    }
}

proptest! {
    #[test]
    fn unregister_requires_membership(
        activity in arbitrary_activity_name(),
        email in arbitrary_email(),
    ) {
        let registry = ActivityRegistry::new();
        prop_assume!(!registry.get(&activity).unwrap().has_participant(&email));

        let before = registry.get(&activity).unwrap().participants;
        let not_registered = matches!(
            registry.unregister(&activity, &email),
            Err(RegistryError::NotRegistered { .. })
        );
        prop_assert!(not_registered);
        prop_assert_eq!(registry.get(&activity).unwrap().participants, before);
    }
}

proptest! {
    #[test]
    fn roster_never_exceeds_capacity(
        capacity in 1u32..8,
        emails in prop::collection::vec(arbitrary_email(), 0..20),
    ) {
        let registry = ActivityRegistry::from_activities(vec![
            Activity::new("Robotics", "Build robots", "Saturdays", capacity),
        ])
        .unwrap();

        for email in &emails {
            let _ = registry.signup("Robotics", email);
            let roster = registry.get("Robotics").unwrap().participants;
            prop_assert!(roster.len() <= capacity as usize);

            let mut deduped = roster.clone();
            deduped.sort();
            deduped.dedup();
            prop_assert_eq!(deduped.len(), roster.len());
        }
    }
}

#[test]
fn listing_is_complete() {
    let registry = ActivityRegistry::new();
    let value = serde_json::to_value(registry.list_activities()).unwrap();
    let map = value.as_object().unwrap();

    assert_eq!(map.len(), mergington_activities::default_activities().len());
    for details in map.values() {
        assert!(details.get("description").is_some());
        assert!(details.get("schedule").is_some());
        assert!(details.get("max_participants").is_some());
        assert!(details["participants"].is_array());
    }
}
