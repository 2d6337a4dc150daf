use std::cell::Cell;

thread_local! {
    static DROPS: Cell<usize> = const { Cell::new(0) };
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// A value which counts every drop on the current thread. Default-constructed values count too,
/// which lets tests account for spare slots as well as the logical sequence.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CountedDrop(pub usize);

impl CountedDrop {
    /// Returns the number of drops seen on this thread since the last call, resetting it to 0.
    pub fn take_count() -> usize {
        DROPS.with(|drops| drops.replace(0))
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        DROPS.with(|drops| drops.set(drops.get() + 1));
    }
}

/// A value whose default constructor panics once the thread-local budget runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitedDefault(pub usize);

thread_local! {
    static DEFAULT_BUDGET: Cell<usize> = const { Cell::new(usize::MAX) };
}

impl LimitedDefault {
    pub fn set_budget(budget: usize) {
        DEFAULT_BUDGET.with(|b| b.set(budget));
    }
}

impl Default for LimitedDefault {
    fn default() -> Self {
        DEFAULT_BUDGET.with(|b| {
            let left = b.get();
            assert!(left > 0, "default budget exhausted");
            b.set(left - 1);
        });
        LimitedDefault(0)
    }
}
