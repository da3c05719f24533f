//! Unit tests for the tail-call execution strategies.
//!
//! Tests cover:
//! - `linear` over thunk chains of various depths
//! - Factorial and mutual recursion through thunks
//! - `trampoline` zero-iteration and N-iteration behavior
//! - Independence of calls to one trampolined function

#![cfg(feature = "control")]

use lambdascript::control::{Bounce, Continuation, Thunk, linear, ltr, toc, trampoline};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// linear
// =============================================================================

fn chain(depth: u64, value: &'static str) -> Thunk<&'static str> {
    if depth == 0 {
        Thunk::done(value)
    } else {
        Thunk::more(move || chain(depth - 1, value))
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(10)]
#[case(10_000)]
fn linear_returns_terminal_value_of_chain(#[case] depth: u64) {
    assert_eq!(linear(|depth| chain(depth, "end"), depth), "end");
}

#[rstest]
fn linear_invokes_each_step_once() {
    fn counted(remaining: u32, steps: &'static std::thread::LocalKey<Cell<u32>>) -> Thunk<u32> {
        steps.with(|cell| cell.set(cell.get() + 1));
        if remaining == 0 {
            Thunk::done(steps.with(Cell::get))
        } else {
            Thunk::more(move || counted(remaining - 1, steps))
        }
    }

    thread_local! {
        static STEPS: Cell<u32> = const { Cell::new(0) };
    }

    assert_eq!(linear(|n| counted(n, &STEPS), 50), 51);
}

fn factorial_step(n: u64, accumulator: u64) -> Thunk<u64> {
    if n == 0 {
        Thunk::done(accumulator)
    } else {
        Thunk::more(move || factorial_step(n - 1, n * accumulator))
    }
}

#[rstest]
#[case(0, 1)]
#[case(1, 1)]
#[case(5, 120)]
#[case(10, 3_628_800)]
#[case(20, 2_432_902_008_176_640_000)]
fn linear_factorial(#[case] input: u64, #[case] expected: u64) {
    assert_eq!(linear(|n| factorial_step(n, 1), input), expected);
}

#[rstest]
fn linear_with_immediate_result() {
    let result = linear(|n: u64| if n == 0 { Thunk::done(1) } else { Thunk::done(n) }, 0);
    assert_eq!(result, 1);
}

#[rstest]
fn ltr_is_linear() {
    assert_eq!(ltr(|n| factorial_step(n, 1), 5), 120);
}

fn is_even(n: u64) -> Thunk<bool> {
    if n == 0 {
        Thunk::done(true)
    } else {
        Thunk::more(move || is_odd(n - 1))
    }
}

fn is_odd(n: u64) -> Thunk<bool> {
    if n == 0 {
        Thunk::done(false)
    } else {
        Thunk::more(move || is_even(n - 1))
    }
}

#[rstest]
fn linear_mutual_recursion_is_stack_safe() {
    assert!(linear(is_even, 1_000_000));
    assert!(linear(is_odd, 999_999));
}

// =============================================================================
// trampoline
// =============================================================================

#[rstest]
fn trampoline_zero_iteration_returns_first_value() {
    let requests = Cell::new(0);
    let rounds = Cell::new(0);
    let bound = trampoline(|next: &mut Continuation<u32>, &n: &u32| {
        rounds.set(rounds.get() + 1);
        if n == 0 {
            Bounce::Done("base")
        } else {
            requests.set(requests.get() + 1);
            next.again(n - 1)
        }
    });

    assert_eq!(bound(0), "base");
    assert_eq!(rounds.get(), 1);
    assert_eq!(requests.get(), 0);
}

#[rstest]
#[case(1)]
#[case(10)]
#[case(100_000)]
fn trampoline_requests_exactly_n_continuations(#[case] n: u32) {
    let requests = Cell::new(0);
    let bound = trampoline(|next: &mut Continuation<u32>, &remaining: &u32| {
        if remaining == 0 {
            Bounce::Done("finished")
        } else {
            requests.set(requests.get() + 1);
            next.with(remaining - 1);
            Bounce::Pending
        }
    });

    assert_eq!(bound(n), "finished");
    assert_eq!(requests.get(), n);
}

#[rstest]
fn trampoline_fibonacci() {
    let fibonacci = trampoline(|next, &(n, a, b): &(u32, u64, u64)| {
        if n == 0 {
            Bounce::Done(a)
        } else {
            next.again((n - 1, b, a + b))
        }
    });

    assert_eq!(fibonacci((0, 0, 1)), 0);
    assert_eq!(fibonacci((1, 0, 1)), 1);
    assert_eq!(fibonacci((6, 0, 1)), 8);
    assert_eq!(fibonacci((50, 0, 1)), 12_586_269_025);
}

#[rstest]
fn trampoline_calls_do_not_share_arguments() {
    let countdown = toc(|next, &n: &u64| {
        if n == 0 {
            Bounce::Done("zero")
        } else {
            next.again(n - 1)
        }
    });

    assert_eq!(countdown(3), "zero");
    assert_eq!(countdown(0), "zero");
    assert_eq!(countdown(5), "zero");
}

#[rstest]
fn trampoline_reentrant_call_keeps_its_own_state() {
    let inner = trampoline(|next, &n: &u64| {
        if n == 0 {
            Bounce::Done(0_u64)
        } else {
            next.again(n - 1)
        }
    });
    let outer = trampoline(|next, &(n, total): &(u64, u64)| {
        if n == 0 {
            Bounce::Done(total)
        } else {
            next.again((n - 1, total + inner(n) + 1))
        }
    });

    assert_eq!(outer((4, 0)), 4);
}

#[rstest]
fn bounce_is_pending() {
    assert!(Bounce::<()>::Pending.is_pending());
    assert!(!Bounce::Done(1).is_pending());
}
