// Traversal idioms over the same list, each computing the maximum element.
// The scans are deliberately near-identical: the experiment is whether the
// compiler produces the same machine code for all of them.
// Every variant is `#[inline(never)]` so each one is measured as written
// instead of being collapsed into or hoisted out of the harness loop.
//
// Accumulator semantics: start at `i32::MIN` and only ever raise it, so an
// empty fixture yields `i32::MIN` in every variant.

use crate::fixture::Fixture;

pub type ScanFn = fn(&Fixture) -> i32;

/// Every scan variant paired with the name it is reported under. Tests and
/// the bench harness iterate the same table.
pub const VARIANTS: &[(&str, ScanFn)] = &[
    ("iterator", max_iterator),
    ("for_each", max_for_each),
    ("for_each_fn", max_for_each_fn),
    ("indices", max_indices),
    ("range_inclusive", max_range_inclusive),
    ("range_local", max_range_local),
    ("range_exclusive", max_range_exclusive),
    ("range_reversed", max_range_reversed),
];

/// Explicit iterator object advanced by hand.
#[allow(clippy::while_let_on_iterator)]
#[inline(never)]
pub fn max_iterator(fixture: &Fixture) -> i32 {
    let mut max = i32::MIN;
    let mut it = fixture.values().iter();
    while let Some(&v) = it.next() {
        max = max.max(v);
    }
    max
}

/// Element-wise `for` over the slice.
#[inline(never)]
pub fn max_for_each(fixture: &Fixture) -> i32 {
    let mut max = i32::MIN;
    for &v in fixture.values() {
        max = max.max(v);
    }
    max
}

/// Scan driven through `Iterator::for_each` with a closure.
#[inline(never)]
pub fn max_for_each_fn(fixture: &Fixture) -> i32 {
    let mut max = i32::MIN;
    fixture.values().iter().for_each(|&v| max = max.max(v));
    max
}

/// Ascending index loop over the index range derived from the container.
#[allow(clippy::needless_range_loop)]
#[inline(never)]
pub fn max_indices(fixture: &Fixture) -> i32 {
    let mut max = i32::MIN;
    for i in 0..fixture.len() {
        max = max.max(fixture.values()[i]);
    }
    max
}

/// Ascending index loop with an inclusive bound on the last valid index.
#[inline(never)]
pub fn max_range_inclusive(fixture: &Fixture) -> i32 {
    let mut max = i32::MIN;
    let last = match fixture.len().checked_sub(1) {
        Some(last) => last,
        None => return max,
    };
    for i in 0..=last {
        max = max.max(fixture.values()[i]);
    }
    max
}

/// Same inclusive-bound loop, but the slice is copied to a local binding
/// first. Probes whether repeated access through the fixture reference
/// costs anything.
#[allow(clippy::needless_range_loop)]
#[inline(never)]
pub fn max_range_local(fixture: &Fixture) -> i32 {
    let mut max = i32::MIN;
    let values = fixture.values();
    let last = match values.len().checked_sub(1) {
        Some(last) => last,
        None => return max,
    };
    for i in 0..=last {
        max = max.max(values[i]);
    }
    max
}

/// Ascending index loop bounded exclusively by the stored requested size
/// rather than the container length.
#[inline(never)]
pub fn max_range_exclusive(fixture: &Fixture) -> i32 {
    let mut max = i32::MIN;
    for i in 0..fixture.size() {
        max = max.max(fixture.values()[i]);
    }
    max
}

/// Descending index loop from the last index down to zero.
#[inline(never)]
pub fn max_range_reversed(fixture: &Fixture) -> i32 {
    let mut max = i32::MIN;
    for i in (0..fixture.len()).rev() {
        max = max.max(fixture.values()[i]);
    }
    max
}
