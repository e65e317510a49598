//! Property-based tests for tag operations.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use proptest::prelude::*;

use tagtree::domain::{
    create_tag, make_alias_of, move_tag, rename_tag, same_payload, ChildIndex, ChildrenFinder,
    ClassificationId, LocalizedValue, Path, SnapshotFinder, Tag, TagError, TagId, TagInsert,
    TagStatus,
};

fn locale() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["en", "it", "de", "fr", "es"]).prop_map(str::to_string)
}

/// Names with at least one locale
fn non_empty_name() -> impl Strategy<Value = LocalizedValue> {
    prop::collection::btree_map(locale(), "[A-Za-z ]{1,12}", 1..4)
        .prop_map(|entries| entries.into_iter().collect())
}

fn classification() -> impl Strategy<Value = ClassificationId> {
    "[a-z]{1,8}(-[0-9]{1,3})?".prop_map(ClassificationId::from)
}

fn tag_id() -> impl Strategy<Value = TagId> {
    any::<u128>().prop_map(|n| TagId::from_uuid(uuid::Uuid::from_u128(n)))
}

fn path() -> impl Strategy<Value = Path> {
    prop::collection::vec(tag_id(), 0..5).prop_map(Path::from)
}

fn status() -> impl Strategy<Value = TagStatus> {
    prop_oneof![
        Just(TagStatus::Ready),
        Just(TagStatus::Combined),
        Just(TagStatus::Merged),
        Just(TagStatus::Merging),
        Just(TagStatus::Locked),
    ]
}

fn any_tag() -> impl Strategy<Value = Tag> {
    (tag_id(), classification(), non_empty_name(), path(), status()).prop_map(
        |(id, classification_id, name, ancestors, status)| Tag {
            id,
            classification_id,
            name,
            ancestors,
            status,
        },
    )
}

proptest! {
    /// Valid requests always produce a ready tag with the requested content.
    #[test]
    fn create_preserves_request(
        classification_id in classification(),
        name in non_empty_name(),
        ancestors in path(),
    ) {
        let insert = TagInsert {
            classification_id: classification_id.clone(),
            name: name.clone(),
            parent: None,
            ancestors: ancestors.clone(),
        };

        let tag = create_tag(insert).unwrap();

        prop_assert_eq!(tag.status, TagStatus::Ready);
        prop_assert_eq!(&tag.classification_id, &classification_id);
        prop_assert_eq!(&tag.name, &name);
        prop_assert_eq!(tag.is_root(), ancestors.is_empty());
        prop_assert_eq!(tag.ancestors, ancestors);
    }

    /// A missing classification fails regardless of the name.
    #[test]
    fn create_without_classification_fails(
        name in prop::option::of(non_empty_name()),
        ancestors in path(),
    ) {
        let insert = TagInsert {
            classification_id: ClassificationId::default(),
            name: name.unwrap_or_default(),
            parent: None,
            ancestors,
        };

        prop_assert_eq!(create_tag(insert), Err(TagError::MissingClassification));
    }

    /// Root iff the path is empty; otherwise the parent is the last element.
    #[test]
    fn parent_is_last_ancestor(tag in any_tag()) {
        match tag.ancestors.as_slice().last() {
            None => {
                prop_assert!(tag.is_root());
                prop_assert_eq!(tag.parent(), Err(TagError::IsRoot(tag.id)));
            }
            Some(last) => {
                prop_assert!(!tag.is_root());
                prop_assert_eq!(tag.parent(), Ok(*last));
            }
        }
    }

    /// Rename touches nothing but the name.
    #[test]
    fn rename_changes_only_name(tag in any_tag(), name in non_empty_name()) {
        let renamed = rename_tag(&tag, name.clone()).unwrap();

        prop_assert_eq!(renamed.id, tag.id);
        prop_assert_eq!(&renamed.classification_id, &tag.classification_id);
        prop_assert_eq!(&renamed.ancestors, &tag.ancestors);
        prop_assert_eq!(renamed.status, tag.status);
        prop_assert_eq!(renamed.name, name);
    }

    /// Moves succeed exactly when the finder reports no children.
    #[test]
    fn move_succeeds_iff_leaf(
        tag in any_tag(),
        new_path in path(),
        others in prop::collection::vec(any_tag(), 0..6),
        with_child in any::<bool>(),
    ) {
        let mut snapshot = others;
        if with_child {
            snapshot.push(Tag { id: TagId::new(), ancestors: tag.child_path(), ..tag.clone() });
        }

        let finder = SnapshotFinder::new(&snapshot);
        let has_children = finder.has_children(&tag);
        let result = move_tag(&tag, new_path.clone(), &finder);

        if has_children {
            prop_assert!(
                matches!(result, Err(TagError::NotLeaf { id, .. }) if id == tag.id),
                "expected NotLeaf error for a tag with children"
            );
        } else {
            let moved = result.unwrap();
            prop_assert_eq!(moved.ancestors, new_path);
            prop_assert_eq!(moved.id, tag.id);
        }
        if with_child {
            prop_assert!(has_children);
        }
    }

    /// A successful alias keeps the source ID and the destination payload.
    #[test]
    fn alias_keeps_source_identity(source in any_tag(), destination in any_tag()) {
        let snapshot: Vec<Tag> = vec![];
        let alias = make_alias_of(&source, &destination, &SnapshotFinder::new(&snapshot)).unwrap();

        prop_assert_eq!(alias.id, source.id);
        prop_assert!(same_payload(&alias, &destination));
    }

    /// The linear scan and the index give the same answers.
    #[test]
    fn index_matches_scan(tags in prop::collection::vec(any_tag(), 0..8), extra in any_tag()) {
        // Hang some tags below the first one so there are real children
        let mut snapshot = tags;
        if let Some(first) = snapshot.first().cloned() {
            snapshot.push(Tag { id: TagId::new(), ancestors: first.child_path(), ..extra.clone() });
        }

        let scan = SnapshotFinder::new(&snapshot);
        let index = ChildIndex::from_tags(&snapshot);

        for tag in snapshot.iter().chain(std::iter::once(&extra)) {
            prop_assert_eq!(scan.has_children(tag), index.has_children(tag));
        }
    }
}
