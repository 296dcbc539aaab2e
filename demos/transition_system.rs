//! Builds a tiny two-bit transition system and computes the states that can
//! reach state `10` in a single step. Not part of the engine itself — a
//! driver showing how a caller wires variables, a transition relation and a
//! target set together.

use robdd_engine::DDManager;

fn main() {
    env_logger::init();

    let mut man = DDManager::new();
    let x0 = man.declare("x0", false);
    let x0p = man.declare("x0", true);
    let x1 = man.declare("x1", false);
    let x1p = man.declare("x1", true);

    let n0 = man.variable_node(&x0);
    let n0p = man.variable_node(&x0p);
    let n1 = man.variable_node(&x1);
    let n1p = man.variable_node(&x1p);

    let state = |man: &mut DDManager, x0v: bool, x1v: bool| {
        let a = if x0v { n0 } else { man.not(n0).unwrap() };
        let b = if x1v { n1 } else { man.not(n1).unwrap() };
        man.and(a, b).unwrap()
    };
    let state_prime = |man: &mut DDManager, x0v: bool, x1v: bool| {
        let a = if x0v { n0p } else { man.not(n0p).unwrap() };
        let b = if x1v { n1p } else { man.not(n1p).unwrap() };
        man.and(a, b).unwrap()
    };

    // Transitions: 00 -> 01, 01 -> 10, 10 -> 11, 11 -> 01.
    let s00 = state(&mut man, false, false);
    let s01 = state(&mut man, false, true);
    let s10 = state(&mut man, true, false);
    let s11 = state(&mut man, true, true);
    let s01p = state_prime(&mut man, false, true);
    let s10p = state_prime(&mut man, true, false);
    let s11p = state_prime(&mut man, true, true);

    let t0 = man.and(s00, s01p).unwrap();
    let t1 = man.and(s01, s10p).unwrap();
    let t2 = man.and(s10, s11p).unwrap();
    let t3 = man.and(s11, s01p).unwrap();
    let t01 = man.or(t0, t1).unwrap();
    let t23 = man.or(t2, t3).unwrap();
    let delta = man.or(t01, t23).unwrap();

    let target = state(&mut man, true, false); // state 10

    let pre = man.pre_image(delta, target).unwrap();

    man.clear(&[delta, pre]);
    println!("{}", man.to_dot());
    println!("pre_image(delta, 10) = {pre}");
}
