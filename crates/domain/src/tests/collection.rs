// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Collection, DomainError, Entity, EntityId, EntityKind, Group};

#[test]
fn test_insert_preserves_order() {
    let mut groups: Collection<Group> = Collection::new();
    let first: EntityId = groups.insert(Group::new(String::from("Home"))).unwrap();
    let second: EntityId = groups.insert(Group::new(String::from("Work"))).unwrap();

    let ids: Vec<EntityId> = groups.iter().map(Entity::id).collect();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(groups.len(), 2);
}

#[test]
fn test_insert_rejects_duplicate_id() {
    let mut groups: Collection<Group> = Collection::new();
    let group: Group = Group::new(String::from("Home"));
    let id: EntityId = groups.insert(group.clone()).unwrap();

    let result: Result<EntityId, DomainError> = groups.insert(group);
    assert_eq!(
        result,
        Err(DomainError::DuplicateId {
            kind: EntityKind::Group,
            id,
        })
    );
    assert_eq!(groups.len(), 1);
}

#[test]
fn test_find_and_remove() {
    let mut groups: Collection<Group> = Collection::new();
    let id: EntityId = groups.insert(Group::new(String::from("Home"))).unwrap();

    assert_eq!(groups.find(id).unwrap().name, "Home");

    let removed: Group = groups.remove(id).unwrap();
    assert_eq!(removed.name, "Home");
    assert!(groups.find(id).is_none());
    assert!(groups.remove(id).is_none());
    assert!(groups.is_empty());
}

#[test]
fn test_remove_where_returns_removed_in_order() {
    let mut groups: Collection<Group> = Collection::new();
    groups.insert(Group::new(String::from("a1"))).unwrap();
    groups.insert(Group::new(String::from("b1"))).unwrap();
    groups.insert(Group::new(String::from("a2"))).unwrap();

    let removed: Vec<Group> = groups.remove_where(|g| g.name.starts_with('a'));

    let removed_names: Vec<&str> = removed.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(removed_names, vec!["a1", "a2"]);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups.iter().next().unwrap().name, "b1");
}

#[test]
fn test_deserialize_rejects_duplicate_ids() {
    let group: Group = Group::new(String::from("Home"));
    let json: String = serde_json::to_string(&vec![group.clone(), group]).unwrap();

    let result: Result<Collection<Group>, serde_json::Error> = serde_json::from_str(&json);
    assert!(result.is_err());
}

#[test]
fn test_serializes_as_plain_array() {
    let mut groups: Collection<Group> = Collection::new();
    groups.insert(Group::new(String::from("Home"))).unwrap();

    let value: serde_json::Value = serde_json::to_value(&groups).unwrap();
    assert!(value.is_array());
    assert_eq!(value[0]["name"], "Home");
}

#[test]
fn test_require_mut_reports_missing_entity() {
    let mut groups: Collection<Group> = Collection::new();
    let id: EntityId = groups.insert(Group::new(String::from("Home"))).unwrap();

    groups.require_mut(id).unwrap().name = String::from("House");
    assert_eq!(groups.find(id).unwrap().name, "House");

    let missing: EntityId = EntityId::generate();
    assert_eq!(
        groups.require_mut(missing).unwrap_err(),
        DomainError::NotFound {
            kind: EntityKind::Group,
            id: missing,
        }
    );
}
