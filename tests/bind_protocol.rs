use face_index::prelude::*;

/// Builds a host with `n` faces and returns them in enumeration order.
fn host_with_faces(n: usize) -> (InMemoryArrangement, Vec<FaceId>) {
    let mut arr = InMemoryArrangement::new();
    let outer = arr.faces().next().unwrap();
    for _ in 1..n {
        arr.split_face(outer, &mut ()).unwrap();
    }
    let faces = arr.faces().collect();
    (arr, faces)
}

#[test]
fn bind_split_merge_scenario() {
    // Host with three live faces a, b, c in enumeration order.
    let (mut arr, faces) = host_with_faces(3);
    let (a, b, c) = (faces[0], faces[1], faces[2]);

    let mut map = FaceIndexMap::bound_to(&arr);
    assert_eq!(map.index_of(a), 0);
    assert_eq!(map.index_of(b), 1);
    assert_eq!(map.index_of(c), 2);

    // Split a -> creates d at the end of the range.
    let d = arr.split_face(a, &mut map).unwrap();
    assert_eq!(map.index_of(d), 3);
    assert_eq!(map.len(), 4);

    // Merge b into c: b untracked, d relocated into b's old slot.
    arr.merge_faces(c, b, &mut map).unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(b), None);
    assert_eq!(map.index_of(d), 1);
    assert!(matches!(
        map.try_element_at(3),
        Err(FaceIndexError::IndexOutOfRange { index: 3, count: 3 })
    ));
    map.validate_invariants().unwrap();
}

#[test]
fn bijection_round_trips_after_edit_storm() {
    let (mut arr, faces) = host_with_faces(8);
    let mut map = FaceIndexMap::bound_to(&arr);

    arr.merge_faces(faces[0], faces[3], &mut map).unwrap();
    arr.merge_faces(faces[0], faces[6], &mut map).unwrap();
    let extra = arr.split_face(faces[1], &mut map).unwrap();
    arr.merge_faces(faces[1], faces[5], &mut map).unwrap();

    assert_eq!(map.len(), arr.face_count());
    for f in arr.faces() {
        assert_eq!(map.element_at(map.index_of(f)), f);
    }
    for i in 0..map.len() {
        assert_eq!(map.index_of(map.element_at(i)), i);
    }
    assert!(map.get(extra).is_some());
    map.validate_invariants().unwrap();
}

#[test]
fn full_reset_rebuilds_from_host() {
    let (mut arr, _) = host_with_faces(5);
    let mut map = FaceIndexMap::bound_to(&arr);
    assert_eq!(map.len(), 5);

    arr.clear(&mut map);
    assert_eq!(arr.face_count(), 1);
    assert_eq!(map.len(), 1);
    let outer = arr.faces().next().unwrap();
    assert_eq!(map.index_of(outer), 0);
}

#[test]
fn assign_rebuilds_from_new_contents() {
    let (src, src_faces) = host_with_faces(4);
    let (mut dst, _) = host_with_faces(2);
    let mut map = FaceIndexMap::bound_to(&dst);

    dst.assign(&src, &mut map);
    assert_eq!(map.len(), 4);
    for (i, f) in src_faces.iter().enumerate() {
        assert_eq!(map.index_of(*f), i);
    }
}

#[test]
fn two_maps_observe_one_host_independently() {
    let (mut arr, faces) = host_with_faces(3);
    let mut maps = (
        FaceIndexMap::bound_to(&arr),
        FaceIndexMap::bound_to(&arr),
    );

    let d = arr.split_face(faces[0], &mut maps).unwrap();
    assert_eq!(maps.0.index_of(d), 3);
    assert_eq!(maps.1.index_of(d), 3);

    // Detaching one map leaves the other's bookkeeping untouched.
    maps.0.unbind();
    assert!(!maps.0.is_bound());
    assert_eq!(maps.1.len(), 4);
    assert_eq!(maps.1.index_of(d), 3);
}

#[test]
fn tagged_events_match_direct_dispatch() {
    let (mut arr, faces) = host_with_faces(3);
    let mut direct = FaceIndexMap::bound_to(&arr);
    let mut tagged = FaceIndexMap::bound_to(&arr);

    let d = arr.split_face(faces[0], &mut direct).unwrap();
    tagged.notify(
        &arr,
        EditEvent::Split {
            existing: faces[0],
            created: d,
        },
    );
    assert_eq!(
        direct.elements().collect::<Vec<_>>(),
        tagged.elements().collect::<Vec<_>>()
    );

    arr.merge_faces(faces[2], faces[1], &mut direct).unwrap();
    tagged.notify(
        &arr,
        EditEvent::Merging {
            surviving: faces[2],
            absorbed: faces[1],
        },
    );
    assert_eq!(
        direct.elements().collect::<Vec<_>>(),
        tagged.elements().collect::<Vec<_>>()
    );

    tagged.notify(&arr, EditEvent::UnbindComplete);
    assert!(!tagged.is_bound());
    assert_eq!(tagged.len(), 0);

    // Rebinding follows host enumeration order, not the edit-derived order.
    tagged.notify(&arr, EditEvent::BindComplete);
    assert!(tagged.is_bound());
    assert_eq!(
        tagged.elements().collect::<Vec<_>>(),
        arr.faces().collect::<Vec<_>>()
    );
}

#[test]
fn rebind_replaces_prior_binding() {
    let (arr_a, _) = host_with_faces(3);
    let (arr_b, b_faces) = host_with_faces(6);

    let mut map = FaceIndexMap::bound_to(&arr_a);
    assert_eq!(map.len(), 3);

    map.bind(&arr_b);
    assert_eq!(map.len(), 6);
    for (i, f) in b_faces.iter().enumerate() {
        assert_eq!(map.index_of(*f), i);
    }
}

#[test]
fn density_holds_through_merges() {
    let (mut arr, faces) = host_with_faces(6);
    let mut map = FaceIndexMap::bound_to(&arr);

    arr.merge_faces(faces[5], faces[2], &mut map).unwrap();
    arr.merge_faces(faces[5], faces[0], &mut map).unwrap();

    // Indices are exactly {0, .., len-1}: collect and sort.
    let mut indices: Vec<_> = arr.faces().map(|f| map.index_of(f)).collect();
    indices.sort_unstable();
    assert_eq!(indices, (0..map.len()).collect::<Vec<_>>());
}
