//! Call-counting fixtures.
//!
//! # Example
//!
//! ```
//! use failable_core::{combine, ConstrainedValue, NoRule};
//! use failable_test::counting::CallCounter;
//!
//! let counter = CallCounter::new();
//! let a = ConstrainedValue::with_rule(2, NoRule::new());
//! let b = ConstrainedValue::with_rule(3, NoRule::new());
//!
//! let sum = combine(a, b, counter.wrap(|x: i32, y: i32| x + y));
//! assert_eq!(sum.get(), Some(&5));
//! assert_eq!(counter.count(), 1);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use failable_core::{ValidationResult, ValidationRule};

/// Shared counter incremented by each call it observes.
#[derive(Clone, Debug, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of calls recorded so far.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// Wraps a binary operation so that each invocation is recorded.
    pub fn wrap<A, B, O, F>(&self, op: F) -> impl FnOnce(A, B) -> O
    where
        F: FnOnce(A, B) -> O,
    {
        let counter = self.clone();
        move |a, b| {
            counter.record();
            op(a, b)
        }
    }
}

/// Rule that accepts every value and records each check.
pub struct CountingRule<T> {
    counter: CallCounter,
    _marker: PhantomData<fn() -> T>,
}

impl<T> CountingRule<T> {
    pub fn new(counter: CallCounter) -> Self {
        Self {
            counter,
            _marker: PhantomData,
        }
    }

    pub fn count(&self) -> usize {
        self.counter.count()
    }
}

impl<T> Default for CountingRule<T> {
    fn default() -> Self {
        Self::new(CallCounter::new())
    }
}

impl<T> Clone for CountingRule<T> {
    fn clone(&self) -> Self {
        Self::new(self.counter.clone())
    }
}

impl<T> fmt::Debug for CountingRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingRule")
            .field("calls", &self.count())
            .finish()
    }
}

impl<T: 'static> ValidationRule for CountingRule<T> {
    type Supported = T;

    fn validate(&self, _value: &T) -> ValidationResult {
        self.counter.record();
        Ok(())
    }
}
