use super::*;

#[test]
fn primitives_bypass_the_shards() {
    let types = TypeInterner::new();
    let int = types.intern(TypeData::Int);
    assert!(Type::ptr_eq(&int, &Type::int()));
    assert!(types.is_empty());
}

#[test]
fn equal_composites_share_a_handle() {
    let types = TypeInterner::new();
    let a = types.list(Type::int());
    let b = types.list(Type::int());
    assert!(Type::ptr_eq(&a, &b));
    assert_eq!(types.len(), 1);

    let c = types.list(Type::str());
    assert!(!Type::ptr_eq(&a, &c));
    assert_eq!(types.len(), 2);
}

#[test]
fn separate_interners_still_compare_structurally() {
    let left = TypeInterner::new();
    let right = TypeInterner::new();
    let a = left.maybe(Type::int());
    let b = right.maybe(Type::int());
    assert!(!Type::ptr_eq(&a, &b));
    assert_eq!(a, b);
}

#[test]
fn shared_interner_is_one_storage() {
    let shared = SharedTypeInterner::new();
    let clone = shared.clone();
    let a = shared.map(Type::str(), Type::int());
    let b = clone.map(Type::str(), Type::int());
    assert!(Type::ptr_eq(&a, &b));
    assert_eq!(shared.len(), 1);
}

#[test]
fn concurrent_interning_deduplicates() {
    let shared = SharedTypeInterner::new();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let types = shared.clone();
            std::thread::spawn(move || types.list(types.maybe(Type::bool())))
        })
        .collect();
    let results: Vec<Type> = handles
        .into_iter()
        .map(|h| h.join().unwrap_or_else(|_| panic!("interning thread panicked")))
        .collect();
    assert!(results.windows(2).all(|w| Type::ptr_eq(&w[0], &w[1])));
    assert_eq!(shared.len(), 2);
}
