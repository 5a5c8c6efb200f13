// calculator.rs

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::format::{format_record, Op};
use crate::history::History;

/// Calculator that records every operation it performs.
///
/// Each successful `add`/`multiply` appends exactly one record, so the log
/// length always equals the number of operations since construction.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self { history: History::new() }
    }

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        self.apply(Op::Add, a, b)
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        self.apply(Op::Multiply, a, b)
    }

    pub fn apply(&mut self, op: Op, a: f64, b: f64) -> f64 {
        let result = op.apply(a, b);
        self.history.push(format_record(op, a, b, result));
        debug!(op = op.name(), a, b, result, entries = self.history.len(), "recorded");
        result
    }

    /// Independent copy of the log at this point in time.
    pub fn get_history(&self) -> Vec<String> {
        self.history.snapshot()
    }

    /// Read-only view, for display without copying.
    pub fn entries(&self) -> &History {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

/// Cloneable handle serialising access to one [`Calculator`].
#[derive(Clone, Debug, Default)]
pub struct SharedCalculator {
    inner: Arc<Mutex<Calculator>>,
}

impl SharedCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Calculator> {
        // A panicking holder cannot leave the log half-written: push is the last step.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        self.lock().add(a, b)
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        self.lock().multiply(a, b)
    }

    pub fn get_history(&self) -> Vec<String> {
        self.lock().get_history()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl From<Calculator> for SharedCalculator {
    fn from(calc: Calculator) -> Self {
        Self { inner: Arc::new(Mutex::new(calc)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn fresh_calculator_is_empty() {
        let calc = Calculator::new();
        assert!(calc.is_empty());
        assert!(calc.get_history().is_empty());
    }

    #[test]
    fn add_records_exact_string() {
        let mut calc = Calculator::new();
        assert_eq!(calc.add(5.0, 3.0), 8.0);
        assert_eq!(calc.get_history(), vec!["5 + 3 = 8"]);
    }

    #[test]
    fn multiply_records_exact_string() {
        let mut calc = Calculator::new();
        assert_eq!(calc.multiply(4.0, 7.0), 28.0);
        assert_eq!(calc.get_history(), vec!["4 * 7 = 28"]);
    }

    #[test]
    fn nan_result_still_recorded() {
        let mut calc = Calculator::new();
        assert!(calc.multiply(0.0, f64::INFINITY).is_nan());
        assert_eq!(calc.get_history(), vec!["0 * inf = NaN"]);
    }

    #[test]
    fn shared_handle_counts_every_call() {
        let shared = SharedCalculator::new();
        let workers: Vec<_> = (0..4)
            .map(|i| {
                let calc = shared.clone();
                thread::spawn(move || {
                    for j in 0..25 {
                        if j % 2 == 0 {
                            calc.add(i as f64, j as f64);
                        } else {
                            calc.multiply(i as f64, j as f64);
                        }
                    }
                })
            })
            .collect();
        for w in workers {
            w.join().unwrap();
        }
        assert_eq!(shared.len(), 100);
        assert_eq!(shared.get_history().len(), 100);
    }

    #[test]
    fn shared_handle_survives_poisoned_lock() {
        let shared = SharedCalculator::from({
            let mut c = Calculator::new();
            c.add(1.0, 1.0);
            c
        });
        let poisoner = shared.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.lock().unwrap();
            panic!("poison");
        })
        .join();
        assert_eq!(shared.multiply(2.0, 3.0), 6.0);
        assert_eq!(shared.get_history(), vec!["1 + 1 = 2", "2 * 3 = 6"]);
    }
}
