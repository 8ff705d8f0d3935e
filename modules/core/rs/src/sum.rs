use crate::num::Float;

/// Compensated (Kahan-Babuska-Neumaier) running sum.
///
/// Depth tables for a full chromosome have hundreds of millions of rows; plain accumulation
/// drifts once the partial sum dwarfs the individual values, while the compensated sum stays
/// within a couple of ulps of the exact result.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct KahanSum<F: Float> {
    sum: F,
    compensation: F,
    count: usize,
}

impl<F: Float> KahanSum<F> {
    pub fn new() -> Self {
        Self {
            sum: F::zero(),
            compensation: F::zero(),
            count: 0,
        }
    }

    pub fn add(&mut self, value: F) {
        let total = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation = self.compensation + ((self.sum - total) + value);
        } else {
            self.compensation = self.compensation + ((value - total) + self.sum);
        }
        self.sum = total;
        self.count += 1;
    }

    /// Compensated total of all added values.
    pub fn sum(&self) -> F {
        self.sum + self.compensation
    }

    /// Arithmetic mean of the added values, `None` if nothing was added.
    pub fn mean(&self) -> Option<F> {
        if self.count == 0 {
            return None;
        }
        F::from(self.count).map(|n| self.sum() / n)
    }

    pub fn reset(&mut self) {
        self.sum = F::zero();
        self.compensation = F::zero();
        self.count = 0;
    }
}

impl<F: Float> Extend<F> for KahanSum<F> {
    fn extend<T: IntoIterator<Item = F>>(&mut self, iter: T) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<F: Float> FromIterator<F> for KahanSum<F> {
    fn from_iter<T: IntoIterator<Item = F>>(iter: T) -> Self {
        let mut sum = Self::new();
        sum.extend(iter);
        sum
    }
}
