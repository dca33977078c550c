use projectboard_core::{ProjectRecord, ProjectStatus, ProjectStore, TransitionOutcome};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use uuid::Uuid;

fn recorded_store() -> (ProjectStore, Rc<RefCell<Vec<Vec<ProjectRecord>>>>) {
    let store = ProjectStore::new();
    let calls = Rc::new(RefCell::new(Vec::new()));
    {
        let calls = Rc::clone(&calls);
        store.subscribe(move |projects| calls.borrow_mut().push(projects));
    }
    (store, calls)
}

#[test]
fn create_project_stores_active_record_and_notifies() {
    let (store, calls) = recorded_store();

    let id = store.create_project("Build shed", "Weekend project", 3);

    let projects = store.snapshot();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id(), id);
    assert_eq!(projects[0].status(), ProjectStatus::Active);
    assert_eq!(projects[0].people(), 3);

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], projects);
}

#[test]
fn created_ids_are_pairwise_distinct() {
    let store = ProjectStore::new();
    let ids: Vec<_> = (0..500)
        .map(|n| store.create_project(format!("project {n}"), "description", 1))
        .collect();

    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
    assert!(ids.iter().all(|id| !id.is_nil()));
}

#[test]
fn transition_moves_only_the_target_project() {
    let store = ProjectStore::new();
    let first = store.create_project("first", "first project", 1);
    let second = store.create_project("second", "second project", 2);

    store.transition_project(first, ProjectStatus::Finished);

    let active: Vec<_> = store
        .projects_with_status(ProjectStatus::Active)
        .iter()
        .map(ProjectRecord::id)
        .collect();
    let finished: Vec<_> = store
        .projects_with_status(ProjectStatus::Finished)
        .iter()
        .map(ProjectRecord::id)
        .collect();
    assert_eq!(active, vec![second]);
    assert_eq!(finished, vec![first]);
}

#[test]
fn repeated_transition_notifies_once() {
    let (store, calls) = recorded_store();
    let id = store.create_project("shed", "weekend work", 2);
    calls.borrow_mut().clear();

    let first = store.transition_project(id, ProjectStatus::Finished);
    let second = store.transition_project(id, ProjectStatus::Finished);

    assert!(first.is_moved());
    assert_eq!(second, TransitionOutcome::Unchanged);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn transition_to_current_status_does_not_notify() {
    let (store, calls) = recorded_store();
    let id = store.create_project("shed", "weekend work", 2);

    let outcome = store.transition_project(id, ProjectStatus::Active);

    assert_eq!(outcome, TransitionOutcome::Unchanged);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn unknown_id_is_a_silent_miss() {
    let (store, calls) = recorded_store();
    store.create_project("shed", "weekend work", 2);
    let before = store.snapshot();

    let outcome = store.transition_project(Uuid::new_v4(), ProjectStatus::Finished);

    assert_eq!(outcome, TransitionOutcome::NotFound);
    assert_eq!(store.snapshot(), before);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn transitions_are_bidirectional() {
    let store = ProjectStore::new();
    let id = store.create_project("shed", "weekend work", 2);

    for status in [
        ProjectStatus::Finished,
        ProjectStatus::Active,
        ProjectStatus::Finished,
    ] {
        assert!(store.transition_project(id, status).is_moved());
        assert_eq!(store.get_project(id).map(|p| p.status()), Some(status));
    }
}

#[test]
fn mutating_a_snapshot_does_not_leak_into_store_or_later_subscribers() {
    let store = ProjectStore::new();
    store.subscribe(|mut projects| {
        projects.clear();
    });
    let seen = Rc::new(RefCell::new(Vec::new()));
    {
        let seen = Rc::clone(&seen);
        store.subscribe(move |projects| seen.borrow_mut().push(projects.len()));
    }

    store.create_project("a", "abcde", 1);
    store.create_project("b", "abcde", 1);

    assert_eq!(*seen.borrow(), vec![1, 2]);
    assert_eq!(store.len(), 2);
}

#[test]
fn every_record_lands_in_exactly_one_partition() {
    let store = ProjectStore::new();
    let ids: Vec<_> = (0..10)
        .map(|n| store.create_project(format!("p{n}"), "description", 1))
        .collect();
    for (n, id) in ids.iter().enumerate() {
        if n % 3 == 0 {
            store.transition_project(*id, ProjectStatus::Finished);
        }
        if n % 6 == 0 {
            store.transition_project(*id, ProjectStatus::Active);
        }
    }

    let active = store.projects_with_status(ProjectStatus::Active);
    let finished = store.projects_with_status(ProjectStatus::Finished);
    assert_eq!(active.len() + finished.len(), ids.len());
    for id in &ids {
        let in_active = active.iter().any(|p| p.id() == *id);
        let in_finished = finished.iter().any(|p| p.id() == *id);
        assert!(in_active ^ in_finished, "project {id} must be in one view");
        let status = store.get_project(*id).expect("project exists").status();
        assert_eq!(in_finished, status == ProjectStatus::Finished);
    }
}

#[test]
fn subscriber_may_mutate_store_during_notification() {
    let store = Rc::new(ProjectStore::new());
    {
        let weak = Rc::downgrade(&store);
        store.subscribe(move |projects| {
            let Some(store) = weak.upgrade() else { return };
            if let Some(first) = projects.first() {
                if first.status() == ProjectStatus::Active {
                    store.transition_project(first.id(), ProjectStatus::Finished);
                }
            }
        });
    }

    let id = store.create_project("auto", "auto finish", 1);

    assert_eq!(
        store.get_project(id).map(|p| p.status()),
        Some(ProjectStatus::Finished)
    );
}
