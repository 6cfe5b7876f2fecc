use std::cell::Cell;
use std::rc::Rc;

use shaping_algs::invoke::Invoke;
use shaping_algs::{
    add, as_incrementable, hash, invoke, max, min, pair, partial, partial_at, IntSet, Pair,
};

fn test_func<'a>(a: usize, b: Option<&[&'a str]>) -> Option<&'a str> {
    b.map(|b| b[a])
}

struct A {
    called: Cell<bool>,
}

impl A {
    fn a(&self) {
        self.called.set(true);
    }
}

#[test]
fn test_pair() {
    let i = 1;
    let mut p = pair(1, i);
    p.second = 2;
    assert_eq!(i, 1);

    let q = p;
    let mut r = q;
    r.second = 4;
    assert_eq!(q.second, 2);
    assert_eq!(r.second, 4);

    let value = 0;
    let mut xp: Pair<Option<&i32>, i64> = pair(None::<&i32>, 0i32).convert();
    xp.assign_from(pair(Some(&value), 1u32));
    assert_eq!(xp, pair(Some(&0), 1));

    let narrowed: Pair<Option<&i32>, i32> = xp.try_convert().unwrap();
    assert_eq!(narrowed.second, 1);

    let mut target = 0;
    let raw: Pair<*mut i32, i64> = pair(&mut target as *mut i32, 0);
    let widened: Pair<*const i32, i32> = raw.cast_const().try_convert().unwrap();
    assert!(std::ptr::eq(widened.first, &target));
}

#[test]
fn test_invoke() {
    assert_eq!(invoke(test_func, (0, None)), None);

    let a = A {
        called: Cell::new(false),
    };
    invoke(A::a, (&a,));
    assert!(a.called.get());
}

#[test]
fn test_min_max() {
    assert_eq!(1, min(8, 1));
    assert_eq!(8, max(8, 1));

    let mut x = 1;
    let mut y = 2;
    min(x, 3);
    min(3, x);
    min(x, 4 + 3);
    let z = min(&mut x, &mut y);
    *z = 3;
    assert_eq!(x, 3);
}

#[test]
fn test_partial() {
    assert_eq!(3, partial(min::<i32>, 3).invoke((4,)));
    assert_eq!(3, partial_at::<1, _, _>(min::<i32>, 4).invoke((3,)));

    let m0 = partial_at::<2, _, _>(max::<i32>, 0);
    assert_eq!(m0.invoke((-2,)), 0);
    assert_eq!(m0.invoke((2,)), 2);

    assert_eq!(add(2).invoke((5,)), 7);
    assert_eq!(add(5).invoke((2,)), 7);
}

#[test]
fn test_incrementable() {
    let mut x = 1;
    assert_eq!(*as_incrementable(&mut x).increment(), 3);
    assert_eq!(x, 3);
}

#[test]
fn test_hash() {
    let set1 = IntSet::from([1]);
    let set2 = IntSet::from([2]);

    assert_ne!(hash(&set1), hash(&set2));
    assert_eq!(hash(&set1), hash(IntSet::from([1])));
    assert_ne!(hash(&set1), hash(IntSet::new()));
    assert_ne!(hash(&set1), hash(IntSet::from([2])));
    assert_eq!(hash(&set2), hash(IntSet::from([2])));

    // Ownership wrappers hash their pointee
    let expected = hash(&set1);
    assert_eq!(expected, hash(&&set1));
    let shared = Rc::new(set1);
    assert_eq!(expected, hash(Rc::clone(&shared)));
    assert_eq!(expected, hash(Box::new((*shared).clone())));
}
