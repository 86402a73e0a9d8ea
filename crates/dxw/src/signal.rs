//! Signal types with validation guarantees.

use std::ops::Index;

use crate::error::DxwError;

/// Reject empty slices and slices holding NaN or infinite samples.
fn validate(samples: &[f64]) -> Result<(), DxwError> {
    if samples.is_empty() {
        return Err(DxwError::EmptySignal);
    }
    if let Some(index) = samples.iter().position(|v| !v.is_finite()) {
        return Err(DxwError::NonFiniteValue { index });
    }
    Ok(())
}

/// Owned, validated 1-D signal. Guaranteed non-empty with all finite samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal(Vec<f64>);

impl Signal {
    /// Create a new signal, validating that it is non-empty and all samples are finite.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DxwError::EmptySignal`] | `samples` is empty |
    /// | [`DxwError::NonFiniteValue`] | Any sample is NaN or infinite |
    pub fn new(samples: Vec<f64>) -> Result<Self, DxwError> {
        validate(&samples)?;
        Ok(Self(samples))
    }

    /// Borrow this signal as a zero-copy view.
    #[must_use]
    pub fn as_view(&self) -> SignalView<'_> {
        SignalView::new_unchecked(&self.0)
    }

    /// Return the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed signal; kept for `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume and return the inner vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for Signal {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for Signal {
    type Error = DxwError;

    fn try_from(samples: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(samples)
    }
}

/// Borrowed, validated view into a signal.
#[derive(Debug, Clone, Copy)]
pub struct SignalView<'a>(&'a [f64]);

impl<'a> SignalView<'a> {
    /// Create a new view, validating that the slice is non-empty and all samples are finite.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`DxwError::EmptySignal`] | `slice` is empty |
    /// | [`DxwError::NonFiniteValue`] | Any sample is NaN or infinite |
    pub fn new(slice: &'a [f64]) -> Result<Self, DxwError> {
        validate(slice)?;
        Ok(Self(slice))
    }

    pub(crate) fn new_unchecked(slice: &'a [f64]) -> Self {
        Self(slice)
    }

    /// Return the underlying slice.
    #[must_use]
    pub fn as_slice(&self) -> &'a [f64] {
        self.0
    }

    /// Return the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a constructed view; kept for `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<usize> for SignalView<'_> {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl AsRef<[f64]> for SignalView<'_> {
    fn as_ref(&self) -> &[f64] {
        self.0
    }
}

impl<'a> TryFrom<&'a [f64]> for SignalView<'a> {
    type Error = DxwError;

    fn try_from(slice: &'a [f64]) -> Result<Self, Self::Error> {
        Self::new(slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_vec() {
        let result = Signal::new(vec![]);
        assert_eq!(result, Err(DxwError::EmptySignal));
    }

    #[test]
    fn rejects_nan() {
        let result = Signal::new(vec![1.0, f64::NAN, 3.0]);
        assert_eq!(result, Err(DxwError::NonFiniteValue { index: 1 }));
    }

    #[test]
    fn rejects_infinity() {
        let result = Signal::new(vec![1.0, 2.0, f64::INFINITY]);
        assert_eq!(result, Err(DxwError::NonFiniteValue { index: 2 }));
    }

    #[test]
    fn rejects_neg_infinity() {
        let result = Signal::new(vec![f64::NEG_INFINITY, 2.0]);
        assert_eq!(result, Err(DxwError::NonFiniteValue { index: 0 }));
    }

    #[test]
    fn view_rejects_empty() {
        let result = SignalView::new(&[]);
        assert!(matches!(result, Err(DxwError::EmptySignal)));
    }

    #[test]
    fn accepts_single_sample() {
        let s = Signal::new(vec![-4.5]).unwrap();
        assert_eq!(s.len(), 1);
        assert!(!s.is_empty());
    }

    #[test]
    fn accepts_valid_signal() {
        let s = Signal::new(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(s.len(), 3);
        assert_eq!(s.as_ref(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn view_rejects_nan() {
        let data = [1.0, f64::NAN];
        let result = SignalView::new(&data);
        assert!(matches!(result, Err(DxwError::NonFiniteValue { index: 1 })));
    }

    #[test]
    fn view_indexing() {
        let data = [10.0, 20.0, 30.0];
        let view = SignalView::new(&data).unwrap();
        assert_eq!(view[0], 10.0);
        assert_eq!(view[2], 30.0);
    }

    #[test]
    fn try_from_vec_and_slice() {
        let owned: Result<Signal, _> = vec![1.0, 2.0].try_into();
        assert!(owned.is_ok());
        let data = [1.0, 2.0];
        let view: Result<SignalView<'_>, _> = data.as_slice().try_into();
        assert!(view.is_ok());
    }

    #[test]
    fn as_view_shares_samples() {
        let s = Signal::new(vec![1.0, 2.0, 3.0]).unwrap();
        let view = s.as_view();
        assert_eq!(view.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(s.into_inner(), vec![1.0, 2.0, 3.0]);
    }
}
