use super::*;

enum Nested {
    Leaf(i64),
    Wrap(Box<Nested>),
}

fn build(depth: usize) -> Nested {
    let mut node = Nested::Leaf(7);
    for _ in 0..depth {
        node = Nested::Wrap(Box::new(node));
    }
    node
}

fn measure(node: &Nested) -> (usize, i64) {
    ensure_sufficient_stack(|| match node {
        Nested::Leaf(v) => (0, *v),
        Nested::Wrap(inner) => {
            let (depth, leaf) = measure(inner);
            (depth + 1, leaf)
        }
    })
}

fn unwrap_iteratively(mut node: Nested) {
    // Dropping a deep Box chain recursively would itself overflow.
    while let Nested::Wrap(inner) = node {
        node = *inner;
    }
}

#[test]
fn shallow_tree_is_measured_in_place() {
    let tree = build(16);
    assert_eq!(measure(&tree), (16, 7));
    unwrap_iteratively(tree);
}

#[test]
fn deep_tree_does_not_overflow() {
    let tree = build(200_000);
    assert_eq!(measure(&tree), (200_000, 7));
    unwrap_iteratively(tree);
}

#[test]
fn result_passes_through() {
    let ok: Result<u8, String> = ensure_sufficient_stack(|| Ok(3));
    assert_eq!(ok, Ok(3));
}
