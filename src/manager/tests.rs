use rustc_hash::FxHashSet;

use super::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Declares `x0, x0', x1, x1'` in that order (levels 0..3), matching the
/// interleaving `pre_image` requires.
fn interleaved_manager() -> (DDManager, Variable, Variable, Variable, Variable) {
    let mut man = DDManager::new();
    let x0 = man.declare("x0", false);
    let x0p = man.declare("x0", true);
    let x1 = man.declare("x1", false);
    let x1p = man.declare("x1", true);
    (man, x0, x0p, x1, x1p)
}

#[test]
fn terminal_algebra() {
    init();
    let mut man = DDManager::new();
    assert_eq!(man.and(man.one(), man.one()).unwrap(), man.one());
    assert_eq!(man.and(man.one(), man.zero()).unwrap(), man.zero());
    assert_eq!(man.or(man.zero(), man.zero()).unwrap(), man.zero());
    assert_eq!(man.or(man.one(), man.zero()).unwrap(), man.one());
    assert_eq!(man.not(man.one()).unwrap(), man.zero());
    assert_eq!(man.not(man.zero()).unwrap(), man.one());
}

#[test]
fn single_variable_identities() {
    init();
    let mut man = DDManager::new();
    let x0 = man.declare("x0", false);
    let a = man.variable_node(&x0);
    let not_a = man.not(a).unwrap();

    assert_eq!(man.not(not_a).unwrap(), a);
    assert_eq!(man.and(a, not_a).unwrap(), man.zero());
    assert_eq!(man.or(a, not_a).unwrap(), man.one());
    assert_eq!(man.ite(a, man.one(), man.zero()).unwrap(), a);
}

#[test]
fn sharing_is_structural() {
    init();
    let mut man = DDManager::new();
    let x0 = man.declare("x0", false);
    let x1 = man.declare("x1", false);
    let n0 = man.variable_node(&x0);
    let n1 = man.variable_node(&x1);

    let f = man.and(n0, n1).unwrap();
    let g = man.and(n1, n0).unwrap();
    assert_eq!(f, g);
}

#[test]
fn de_morgan_and_absorption() {
    init();
    let mut man = DDManager::new();
    let x0 = man.declare("x0", false);
    let x1 = man.declare("x1", false);
    let a = man.variable_node(&x0);
    let b = man.variable_node(&x1);

    let not_and = man.not(man.and(a, b).unwrap()).unwrap();
    let or_not = man.or(man.not(a).unwrap(), man.not(b).unwrap()).unwrap();
    assert_eq!(not_and, or_not);

    let not_or = man.not(man.or(a, b).unwrap()).unwrap();
    let and_not = man.and(man.not(a).unwrap(), man.not(b).unwrap()).unwrap();
    assert_eq!(not_or, and_not);

    assert_eq!(man.and(a, a).unwrap(), a);
    assert_eq!(man.or(a, a).unwrap(), a);
    let a_or_b = man.or(a, b).unwrap();
    assert_eq!(man.and(a, a_or_b).unwrap(), a);
}

#[test]
fn ite_laws() {
    init();
    let mut man = DDManager::new();
    let x0 = man.declare("x0", false);
    let x1 = man.declare("x1", false);
    let a = man.variable_node(&x0);
    let b = man.variable_node(&x1);

    assert_eq!(man.ite(man.one(), b, man.zero()).unwrap(), b);
    assert_eq!(man.ite(man.zero(), man.one(), b).unwrap(), b);
    assert_eq!(man.ite(a, b, b).unwrap(), b);
    assert_eq!(man.ite(a, man.one(), man.zero()).unwrap(), a);
}

/// States encoded by (x0, x1); transitions 00->01, 01->10, 10->11, 11->01.
/// Only state 00 reaches 10 in one step, so pre_image(T, S=10) == (!x0 & !x1).
#[test]
fn transition_system_pre_image() {
    init();
    let (mut man, x0, x0p, x1, x1p) = interleaved_manager();

    let n0 = man.variable_node(&x0);
    let n0p = man.variable_node(&x0p);
    let n1 = man.variable_node(&x1);
    let n1p = man.variable_node(&x1p);

    let not = |man: &mut DDManager, n: NodeId| man.not(n).unwrap();
    let and = |man: &mut DDManager, a: NodeId, b: NodeId| man.and(a, b).unwrap();
    let or = |man: &mut DDManager, a: NodeId, b: NodeId| man.or(a, b).unwrap();

    let state = |man: &mut DDManager, x0v: bool, x1v: bool| {
        let a = if x0v { n0 } else { not(man, n0) };
        let b = if x1v { n1 } else { not(man, n1) };
        and(man, a, b)
    };
    let state_prime = |man: &mut DDManager, x0v: bool, x1v: bool| {
        let a = if x0v { n0p } else { not(man, n0p) };
        let b = if x1v { n1p } else { not(man, n1p) };
        and(man, a, b)
    };

    let s00 = state(&mut man, false, false);
    let s01 = state(&mut man, false, true);
    let s10 = state(&mut man, true, false);
    let s11 = state(&mut man, true, true);

    let s01p = state_prime(&mut man, false, true);
    let s10p = state_prime(&mut man, true, false);
    let s11p = state_prime(&mut man, true, true);

    let t0 = and(&mut man, s00, s01p);
    let t1 = and(&mut man, s01, s10p);
    let t2 = and(&mut man, s10, s11p);
    let t3 = and(&mut man, s11, s01p);
    let t01 = or(&mut man, t0, t1);
    let t23 = or(&mut man, t2, t3);
    let delta = or(&mut man, t01, t23);

    // target S, written over the unprimed variables (x0 & !x1), i.e. state 10
    let s = state(&mut man, true, false);

    let pre = man.pre_image(delta, s).unwrap();
    let expected = state(&mut man, false, false);
    assert_eq!(pre, expected);
}

#[test]
fn pre_image_rejects_non_interleaved_ordering() {
    init();
    let mut man = DDManager::new();
    let x0 = man.declare("x0", false);
    let x1 = man.declare("x1", false);
    let n0 = man.variable_node(&x0);
    let n1 = man.variable_node(&x1);

    let err = man.pre_image(n0, n1).unwrap_err();
    assert!(matches!(err, EngineError::MalformedPreImage { .. }));
}

#[test]
fn gc_preserves_semantics() {
    init();
    let mut man = DDManager::new();
    let x0 = man.declare("x0", false);
    let x1 = man.declare("x1", false);
    let a = man.variable_node(&x0);
    let b = man.variable_node(&x1);

    let h = {
        let ab = man.and(a, b).unwrap();
        let not_a = man.not(a).unwrap();
        let not_b = man.not(b).unwrap();
        let not_a_not_b = man.and(not_a, not_b).unwrap();
        man.or(ab, not_a_not_b).unwrap()
    };

    man.clear(&[h]);

    let not_h = man.not(h).unwrap();
    assert_eq!(man.and(h, not_h).unwrap(), man.zero());
    assert_eq!(man.or(h, not_h).unwrap(), man.one());

    // Everything still stored must be reachable from h or from what notting
    // and combining it with itself just created.
    let mut reachable = FxHashSet::default();
    let mut stack = vec![h, not_h];
    while let Some(id) = stack.pop() {
        if !reachable.insert(id) || id.is_terminal() {
            continue;
        }
        let (hi, lo) = man.high_low(id).unwrap();
        stack.push(hi);
        stack.push(lo);
    }
    assert!(man.nodes.keys().all(|id| reachable.contains(id)));
}

#[test]
fn dot_dump_elides_zero_edges() {
    init();
    let mut man = DDManager::new();
    let x0 = man.declare("x0", false);
    let a = man.variable_node(&x0);
    man.clear(&[a]);

    let dot = man.to_dot();
    assert_eq!(dot.matches("[label=\"1\"]").count(), 1);
    assert_eq!(dot.matches("[label=\"0\"]").count(), 0);
}

#[test]
fn cache_is_sound_after_clear() {
    init();
    let mut man = DDManager::new();
    let x0 = man.declare("x0", false);
    let x1 = man.declare("x1", false);
    let a = man.variable_node(&x0);
    let b = man.variable_node(&x1);
    let f = man.and(a, b).unwrap();

    man.clear(&[f]);

    let recomputed = man.and(a, b).unwrap();
    assert_eq!(f, recomputed);
}

#[test]
fn make_rejects_ordering_violation() {
    init();
    let mut man = DDManager::new();
    let x0 = man.declare("x0", false);
    let x1 = man.declare("x1", false);
    let n1 = man.variable_node(&x1);

    // x1 sits below x0, so using x0 as the parent of a child at x1's level in
    // the wrong direction (child must be strictly deeper) is a caller bug.
    let err = man.make(&x1, man.one(), n1).unwrap_err();
    assert!(matches!(err, EngineError::OrderingViolation { .. }));
}
