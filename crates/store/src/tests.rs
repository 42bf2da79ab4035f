//! Tests for the aggregate store.

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};

    use kin_core::{
        AppState, Group, Job, Member, MemberRole, RecurrenceType, WeeklyAvailability,
    };

    use crate::{StateStore, StoreError};

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn make_member(id: &str, role: MemberRole) -> Member {
        Member {
            id: id.to_string(),
            name: format!("Member {}", id),
            email: format!("{}@example.com", id),
            role,
            availability: WeeklyAvailability::default(),
            job_preferences: Default::default(),
        }
    }

    fn make_group(id: &str, members: Vec<Member>) -> Group {
        let now = ts("2026-01-01T00:00:00Z");
        Group {
            id: id.to_string(),
            name: format!("Group {}", id),
            members,
            created_at: now,
            updated_at: now,
        }
    }

    fn make_job(id: &str, group_id: &str, assigned_to: &str, recurrence: RecurrenceType) -> Job {
        let due = ts("2026-01-05T10:00:00Z");
        Job {
            id: id.to_string(),
            title: format!("Job {}", id),
            description: None,
            group_id: group_id.to_string(),
            assigned_to: assigned_to.to_string(),
            recurrence,
            start_date: due,
            next_due_date: due,
            last_completed_date: None,
            created_at: due,
            updated_at: due,
        }
    }

    fn make_store() -> (tempfile::TempDir, StateStore) {
        let tmp = tempfile::tempdir().unwrap();
        let store = StateStore::new(tmp.path().join("data")).unwrap();
        (tmp, store)
    }

    // -- load/save --------------------------------------------------------

    #[test]
    fn load_missing_file_returns_empty_aggregate() {
        let (_tmp, store) = make_store();
        let state = store.load();
        assert!(state.groups.is_empty());
        assert!(state.jobs.is_empty());
        assert!(state.completion_history.is_empty());
    }

    #[test]
    fn save_load_round_trip() {
        let (_tmp, store) = make_store();
        let mut state = AppState::default();
        state
            .groups
            .push(make_group("g1", vec![make_member("m1", MemberRole::Admin)]));
        state
            .jobs
            .push(make_job("j1", "g1", "m1", RecurrenceType::Weekly));
        store.save(&state).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.groups.len(), 1);
        assert_eq!(loaded.jobs.len(), 1);
        assert_eq!(loaded.groups[0].members[0].id, "m1");
    }

    #[test]
    fn load_corrupt_file_falls_back_to_empty() {
        let (_tmp, store) = make_store();
        std::fs::write(store.base_dir().join("state.json"), "{not json").unwrap();
        let state = store.load();
        assert!(state.groups.is_empty());
    }

    #[test]
    fn persisted_layout_is_camel_case() {
        let (_tmp, store) = make_store();
        store
            .add_job(make_job("j1", "g1", "m1", RecurrenceType::Daily))
            .unwrap();
        let json = std::fs::read_to_string(store.base_dir().join("state.json")).unwrap();
        assert!(json.contains("\"nextDueDate\""));
        assert!(json.contains("\"completionHistory\""));
    }

    // -- update transaction boundary ---------------------------------------

    #[test]
    fn failed_update_persists_nothing() {
        let (_tmp, store) = make_store();
        store
            .add_group(make_group("g1", vec![make_member("m1", MemberRole::Admin)]))
            .unwrap();

        let result = store.update(|state| {
            state.groups.clear();
            Err(StoreError::GroupNotFound("whatever".to_string()))
        });
        assert!(result.is_err());
        assert_eq!(store.load().groups.len(), 1);
    }

    // -- read views ---------------------------------------------------------

    #[test]
    fn views_filter_by_group_and_member() {
        let (_tmp, store) = make_store();
        store
            .add_job(make_job("j1", "g1", "m1", RecurrenceType::Daily))
            .unwrap();
        store
            .add_job(make_job("j2", "g1", "m2", RecurrenceType::Weekly))
            .unwrap();
        store
            .add_job(make_job("j3", "g2", "m1", RecurrenceType::Monthly))
            .unwrap();

        let by_group: Vec<String> = store
            .jobs_for_group("g1")
            .into_iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(by_group, vec!["j1", "j2"]);

        let by_member: Vec<String> = store
            .jobs_for_member("m1")
            .into_iter()
            .map(|j| j.id)
            .collect();
        assert_eq!(by_member, vec!["j1", "j3"]);
    }

    // -- insert-or-replace writes -------------------------------------------

    #[test]
    fn update_group_replaces_by_id() {
        let (_tmp, store) = make_store();
        store
            .add_group(make_group("g1", vec![make_member("m1", MemberRole::Admin)]))
            .unwrap();

        let mut edited = make_group("g1", vec![make_member("m1", MemberRole::Admin)]);
        edited.name = "Renamed".to_string();
        let state = store.update_group(edited).unwrap();
        assert_eq!(state.groups[0].name, "Renamed");
    }

    #[test]
    fn update_group_with_unknown_id_is_noop() {
        let (_tmp, store) = make_store();
        store
            .add_group(make_group("g1", vec![make_member("m1", MemberRole::Admin)]))
            .unwrap();

        let ghost = make_group("nonexistent", vec![make_member("m9", MemberRole::Admin)]);
        let state = store.update_group(ghost).unwrap();
        assert_eq!(state.groups.len(), 1);
        assert_eq!(state.groups[0].id, "g1");
    }

    #[test]
    fn update_job_with_unknown_id_is_noop() {
        let (_tmp, store) = make_store();
        let state = store
            .update_job(make_job("nonexistent", "g1", "m1", RecurrenceType::Daily))
            .unwrap();
        assert!(state.jobs.is_empty());
    }

    #[test]
    fn update_job_replaces_by_id() {
        let (_tmp, store) = make_store();
        store
            .add_job(make_job("j1", "g1", "m1", RecurrenceType::Daily))
            .unwrap();

        let mut edited = make_job("j1", "g1", "m2", RecurrenceType::Weekly);
        edited.title = "Edited title".to_string();
        let state = store.update_job(edited).unwrap();
        assert_eq!(state.jobs[0].title, "Edited title");
        assert_eq!(state.jobs[0].assigned_to, "m2");
    }

    // -- last-admin policy ----------------------------------------------------

    #[test]
    fn add_group_without_admin_is_rejected() {
        let (_tmp, store) = make_store();
        let result = store.add_group(make_group("g1", vec![make_member("m1", MemberRole::Member)]));
        assert!(matches!(result, Err(StoreError::LastAdmin { .. })));
        assert!(store.load().groups.is_empty());
    }

    #[test]
    fn demoting_last_admin_is_rejected_and_state_unchanged() {
        let (_tmp, store) = make_store();
        store
            .add_group(make_group("g1", vec![make_member("m1", MemberRole::Admin)]))
            .unwrap();

        let demoted = make_group("g1", vec![make_member("m1", MemberRole::Member)]);
        let result = store.update_group(demoted);
        assert!(matches!(result, Err(StoreError::LastAdmin { .. })));
        assert_eq!(store.load().groups[0].members[0].role, MemberRole::Admin);
    }

    #[test]
    fn demoting_one_of_two_admins_is_allowed() {
        let (_tmp, store) = make_store();
        store
            .add_group(make_group(
                "g1",
                vec![
                    make_member("m1", MemberRole::Admin),
                    make_member("m2", MemberRole::Admin),
                ],
            ))
            .unwrap();

        let edited = make_group(
            "g1",
            vec![
                make_member("m1", MemberRole::Admin),
                make_member("m2", MemberRole::Member),
            ],
        );
        let state = store.update_group(edited).unwrap();
        assert_eq!(state.groups[0].admin_count(), 1);
    }

    #[test]
    fn removing_last_admin_is_rejected() {
        let (_tmp, store) = make_store();
        store
            .add_group(make_group(
                "g1",
                vec![
                    make_member("m1", MemberRole::Admin),
                    make_member("m2", MemberRole::Member),
                ],
            ))
            .unwrap();

        let result = store.remove_member("g1", "m1");
        assert!(matches!(result, Err(StoreError::LastAdmin { .. })));
        assert_eq!(store.load().groups[0].members.len(), 2);
    }

    // -- referential integrity on removal ---------------------------------------

    #[test]
    fn removing_member_with_assigned_jobs_is_rejected() {
        let (_tmp, store) = make_store();
        store
            .add_group(make_group(
                "g1",
                vec![
                    make_member("m1", MemberRole::Admin),
                    make_member("m2", MemberRole::Member),
                ],
            ))
            .unwrap();
        store
            .add_job(make_job("j1", "g1", "m2", RecurrenceType::Weekly))
            .unwrap();

        let result = store.remove_member("g1", "m2");
        match result {
            Err(StoreError::MemberHasJobs {
                member_id,
                job_count,
            }) => {
                assert_eq!(member_id, "m2");
                assert_eq!(job_count, 1);
            }
            other => panic!("expected MemberHasJobs, got {:?}", other.map(|_| ())),
        }
        assert_eq!(store.load().groups[0].members.len(), 2);
    }

    #[test]
    fn removing_unassigned_member_succeeds() {
        let (_tmp, store) = make_store();
        store
            .add_group(make_group(
                "g1",
                vec![
                    make_member("m1", MemberRole::Admin),
                    make_member("m2", MemberRole::Member),
                ],
            ))
            .unwrap();

        let state = store.remove_member("g1", "m2").unwrap();
        assert_eq!(state.groups[0].members.len(), 1);
        assert_eq!(state.groups[0].members[0].id, "m1");
    }

    #[test]
    fn removing_member_from_unknown_group_errors() {
        let (_tmp, store) = make_store();
        let result = store.remove_member("nope", "m1");
        assert!(matches!(result, Err(StoreError::GroupNotFound(_))));
    }

    // -- completion workflow -------------------------------------------------

    #[test]
    fn complete_job_advances_due_date_and_records_history() {
        let (_tmp, store) = make_store();
        store
            .add_job(make_job("j1", "g1", "m1", RecurrenceType::Weekly))
            .unwrap();

        let at = ts("2026-01-05T11:00:00Z");
        let job = store.complete_job("j1", "m1", at).unwrap();

        assert_eq!(job.next_due_date, ts("2026-01-05T10:00:00Z") + Duration::days(7));
        assert_eq!(job.last_completed_date, Some(at));
        assert_eq!(job.updated_at, at);

        let state = store.load();
        assert_eq!(state.completion_history.len(), 1);
        let record = &state.completion_history[0];
        assert_eq!(record.job_id, "j1");
        assert_eq!(record.completed_by, "m1");
        assert_eq!(record.completed_at, at);
        assert!(!record.id.is_empty());
    }

    #[test]
    fn completing_twice_advances_twice() {
        let (_tmp, store) = make_store();
        store
            .add_job(make_job("j1", "g1", "m1", RecurrenceType::Daily))
            .unwrap();

        store.complete_job("j1", "m1", ts("2026-01-05T10:05:00Z")).unwrap();
        let job = store.complete_job("j1", "m1", ts("2026-01-06T10:05:00Z")).unwrap();

        assert_eq!(job.next_due_date, ts("2026-01-07T10:00:00Z"));
        assert_eq!(store.load().completion_history.len(), 2);
    }

    #[test]
    fn complete_unknown_job_errors() {
        let (_tmp, store) = make_store();
        let result = store.complete_job("ghost", "m1", Utc::now());
        assert!(matches!(result, Err(StoreError::JobNotFound(_))));
        assert!(store.load().completion_history.is_empty());
    }
}
