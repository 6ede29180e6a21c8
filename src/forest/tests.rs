use proptest::prelude::*;

use super::*;
use crate::config::Linking;

fn forest_of(n: u32, linking: Linking) -> DisjointSetForest<u32> {
    let config = Config {
        linking,
        ..Config::default()
    };
    DisjointSetForest::from_elems(0..n, config)
}

fn reference_scenario(linking: Linking) -> DisjointSetForest<u32> {
    let mut uf = forest_of(8, linking);
    assert_eq!(uf.num_sets(), 8);
    for (x, y) in [(1, 2), (5, 2), (6, 7), (7, 2), (0, 4), (4, 3)] {
        uf.union(&x, &y).unwrap();
    }
    uf
}

#[test]
fn test_reference_scenario() {
    for linking in [Linking::Unconditional, Linking::BySize] {
        let mut uf = reference_scenario(linking);
        assert!(uf.connected(&1, &5).unwrap());
        assert!(uf.connected(&6, &2).unwrap());
        assert!(uf.connected(&0, &4).unwrap());
        assert!(!uf.connected(&1, &0).unwrap());
        assert_eq!(uf.size_of_set(&1).unwrap(), 5);
        assert_eq!(uf.size_of_set(&0).unwrap(), 3);
        assert_eq!(uf.num_sets(), 2);

        let parent = uf.parent.clone();
        let size = uf.size.clone();
        assert!(!uf.add(2));
        assert_eq!(uf.parent, parent);
        assert_eq!(uf.size, size);
        assert_eq!(uf.num_sets(), 2);
    }
}

#[test]
fn test_unconditional_attaches_first_under_second() {
    let mut uf = reference_scenario(Linking::Unconditional);
    // 1 -> 2, 5 -> 2, 6 -> 7, 7 -> 2, 0 -> 4, 4 -> 3
    assert_eq!(*uf.find(&1).unwrap(), 2);
    assert_eq!(*uf.find(&6).unwrap(), 2);
    assert_eq!(*uf.find(&0).unwrap(), 3);
    assert_eq!(uf.roots(), vec![&2, &3]);
}

#[test]
fn test_by_size_keeps_larger_root() {
    let mut uf = forest_of(4, Linking::BySize);
    uf.union(&0, &1).unwrap();
    uf.union(&0, &2).unwrap();
    let root = *uf.find(&0).unwrap();
    assert_eq!(root, 1);
    // {3} is smaller, so it goes under the existing root even as first argument
    uf.union(&3, &0).unwrap();
    assert_eq!(*uf.find(&3).unwrap(), 1);
    // and stays the root when named first with a larger set
    let mut uf = forest_of(4, Linking::BySize);
    uf.union(&0, &1).unwrap();
    uf.union(&1, &2).unwrap();
    uf.union(&2, &3).unwrap();
    assert_eq!(uf.roots().len(), 1);
    assert_eq!(*uf.find(&3).unwrap(), 1);
}

#[test]
fn test_add_twice() {
    let mut uf = DisjointSetForest::new();
    assert!(uf.add("a"));
    assert!(!uf.add("a"));
    assert_eq!(uf.len(), 1);
    assert_eq!(uf.num_sets(), 1);
    assert!(uf.connected(&"a", &"a").unwrap());
    assert_eq!(uf.size_of_set(&"a").unwrap(), 1);
}

#[test]
fn test_not_found() {
    let mut uf = DisjointSetForest::new();
    uf.add(String::from("x"));
    let y = String::from("y");
    let err = ForestError::NotFound {
        element: "\"y\"".to_string(),
    };
    assert_eq!(uf.find(&y), Err(err.clone()));
    assert_eq!(uf.root_of(&y), Err(err.clone()));
    assert_eq!(uf.union(&"x".to_string(), &y), Err(err.clone()));
    assert_eq!(uf.connected(&y, &"x".to_string()), Err(err.clone()));
    assert_eq!(uf.size_of_set(&y), Err(err.clone()));
    assert_eq!(uf.members(&y), Err(err));
    assert_eq!(uf.num_sets(), 1);
}

#[test]
fn test_union_same_set() {
    let mut uf = forest_of(3, Linking::Unconditional);
    assert!(uf.union(&0, &1).unwrap());
    assert!(!uf.union(&1, &0).unwrap());
    assert!(!uf.union(&2, &2).unwrap());
    assert_eq!(uf.num_sets(), 2);
    assert_eq!(uf.size_of_set(&0).unwrap(), 2);
}

#[test]
fn test_path_compression() {
    let mut uf = forest_of(100, Linking::Unconditional);
    for i in 0..99 {
        uf.union(&i, &(i + 1)).unwrap();
    }
    assert_eq!(uf.parent[0], 1);
    assert_eq!(*uf.find(&0).unwrap(), 99);
    for i in 0..100 {
        assert_eq!(uf.parent[i], 99);
    }
    assert_eq!(uf.size_of_set(&42).unwrap(), 100);
}

#[test]
fn test_deep_chain() {
    let n = 200_000;
    let mut uf = forest_of(n, Linking::Unconditional);
    for i in 0..n - 1 {
        uf.union(&i, &(i + 1)).unwrap();
    }
    assert_eq!(*uf.find(&0).unwrap(), n - 1);
    assert_eq!(uf.num_sets(), 1);
}

#[test]
fn test_root_of_does_not_compress() {
    let mut uf = forest_of(3, Linking::Unconditional);
    uf.union(&0, &1).unwrap();
    uf.union(&1, &2).unwrap();
    let parent = uf.parent.clone();
    assert_eq!(*uf.root_of(&0).unwrap(), 2);
    assert_eq!(uf.parent, parent);
}

#[test]
fn test_parents_and_sets() {
    let mut uf = DisjointSetForest::new();
    for x in ["a", "b", "c", "d"] {
        uf.add(x);
    }
    uf.union(&"a", &"c").unwrap();
    assert_eq!(
        uf.parents(),
        vec![(&"a", &"c"), (&"b", &"b"), (&"c", &"c"), (&"d", &"d")]
    );
    assert_eq!(uf.sets(), vec![vec![&"a", &"c"], vec![&"b"], vec![&"d"]]);
    assert_eq!(uf.members(&"c").unwrap(), vec![&"a", &"c"]);
}

#[derive(Debug, Clone)]
enum Op {
    Union(u32, u32),
    Find(u32),
}

fn op(n: u32) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..n, 0..n).prop_map(|(x, y)| Op::Union(x, y)),
        (0..n).prop_map(Op::Find),
    ]
}

fn linking() -> impl Strategy<Value = Linking> {
    prop_oneof![Just(Linking::Unconditional), Just(Linking::BySize)]
}

/// Naive component labelling used as an oracle.
fn relabel(labels: &mut [u32], x: u32, y: u32) {
    let (from, to) = (labels[x as usize], labels[y as usize]);
    for l in labels.iter_mut() {
        if *l == from {
            *l = to;
        }
    }
}

proptest! {
    #[test]
    fn prop_matches_oracle(ops in prop::collection::vec(op(16), 0..64), linking in linking()) {
        let mut uf = forest_of(16, linking);
        let mut labels: Vec<u32> = (0..16).collect();
        for op in ops {
            match op {
                Op::Union(x, y) => {
                    let before = uf.num_sets();
                    let distinct = labels[x as usize] != labels[y as usize];
                    prop_assert_eq!(uf.union(&x, &y).unwrap(), distinct);
                    prop_assert_eq!(uf.num_sets(), before - usize::from(distinct));
                    relabel(&mut labels, x, y);
                }
                Op::Find(x) => {
                    uf.find(&x).unwrap();
                }
            }
        }
        for x in 0..16u32 {
            for y in 0..16u32 {
                prop_assert_eq!(
                    uf.connected(&x, &y).unwrap(),
                    labels[x as usize] == labels[y as usize]
                );
            }
            let expected = labels.iter().filter(|l| **l == labels[x as usize]).count();
            prop_assert_eq!(uf.size_of_set(&x).unwrap(), expected);
        }
    }

    #[test]
    fn prop_size_conservation(unions in prop::collection::vec((0..32u32, 0..32u32), 0..64)) {
        let mut uf = forest_of(32, Linking::Unconditional);
        for (x, y) in unions {
            uf.union(&x, &y).unwrap();
        }
        let roots: Vec<u32> = uf.roots().into_iter().copied().collect();
        prop_assert_eq!(roots.len(), uf.num_sets());
        let total: usize = roots.iter().map(|r| uf.size_of_set(r).unwrap()).sum();
        prop_assert_eq!(total, uf.len());
    }

    #[test]
    fn prop_compression_keeps_roots(
        unions in prop::collection::vec((0..24u32, 0..24u32), 0..48),
        finds in prop::collection::vec(0..24u32, 0..24),
    ) {
        let mut uf = forest_of(24, Linking::Unconditional);
        for (x, y) in unions {
            uf.union(&x, &y).unwrap();
        }
        let before: Vec<u32> = (0..24).map(|x| *uf.root_of(&x).unwrap()).collect();
        for x in finds {
            uf.find(&x).unwrap();
        }
        let after: Vec<u32> = (0..24).map(|x| *uf.root_of(&x).unwrap()).collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_idempotent_add(xs in prop::collection::vec(0..8u32, 1..16)) {
        let mut uf = DisjointSetForest::new();
        for x in &xs {
            uf.add(*x);
            let snapshot = (uf.parent.clone(), uf.size.clone(), uf.num_sets());
            prop_assert!(!uf.add(*x));
            prop_assert_eq!((uf.parent.clone(), uf.size.clone(), uf.num_sets()), snapshot);
            prop_assert!(uf.connected(x, x).unwrap());
        }
    }
}
