use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// SmallVec-backed collection used for accumulating validation errors.
///
/// The inputs are checked by two independent rules, so two inline slots cover
/// every audit without a heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Applicative-style validation that accumulates many errors instead of failing fast.
///
/// `Validation<E, A>` either succeeds with a value of type `A` or fails with
/// one or more errors of type `E`. Unlike `Result`, combining two validations
/// with [`zip`](Validation::zip) keeps the errors of both sides.
///
/// # Examples
///
/// ```
/// use purchase_rail::validation::Validation;
///
/// let valid = Validation::<&str, i32>::valid(42);
/// assert!(valid.is_valid());
///
/// let invalid = Validation::<&str, i32>::invalid("error");
/// assert!(invalid.is_invalid());
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Validation<E, A> {
    Valid(A),
    Invalid(ErrorVec<E>),
}

impl<E, A> Validation<E, A> {
    /// Creates a valid value.
    #[must_use]
    #[inline]
    pub fn valid(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value from a single error.
    #[must_use]
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(smallvec![error])
    }

    /// Lifts an `Option`, using `error` when the value is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use purchase_rail::validation::Validation;
    ///
    /// assert!(Validation::from_option(Some(1), || "absent").is_valid());
    /// assert!(Validation::<_, i32>::from_option(None, || "absent").is_invalid());
    /// ```
    #[must_use]
    #[inline]
    pub fn from_option<F>(value: Option<A>, error: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match value {
            Some(value) => Self::Valid(value),
            None => Self::invalid(error()),
        }
    }

    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Maps the valid value using the provided function.
    ///
    /// If the validation is invalid, the errors are preserved unchanged.
    #[must_use]
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Valid(value) => Validation::Valid(f(value)),
            Self::Invalid(errors) => Validation::Invalid(errors),
        }
    }

    /// Combines two validations into a tuple, accumulating all errors.
    ///
    /// Errors of `self` come before errors of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use purchase_rail::validation::Validation;
    ///
    /// let both = Validation::<&str, i32>::valid(42).zip(Validation::valid(21));
    /// assert_eq!(both.into_value(), Some((42, 21)));
    ///
    /// let neither = Validation::<&str, i32>::invalid("a").zip(Validation::<&str, i32>::invalid("b"));
    /// assert_eq!(neither.into_errors().unwrap().as_slice(), &["a", "b"]);
    /// ```
    #[must_use]
    #[inline]
    pub fn zip<B>(self, other: Validation<E, B>) -> Validation<E, (A, B)> {
        match (self, other) {
            (Validation::Valid(a), Validation::Valid(b)) => Validation::Valid((a, b)),
            (Validation::Invalid(e), Validation::Valid(_)) => Validation::Invalid(e),
            (Validation::Valid(_), Validation::Invalid(e)) => Validation::Invalid(e),
            (Validation::Invalid(mut e1), Validation::Invalid(e2)) => {
                e1.extend(e2);
                Validation::Invalid(e1)
            }
        }
    }

    /// Converts into a fail-fast `Result`, keeping only the first error.
    ///
    /// Returns `None` for the (unconstructible through this API) case of an
    /// `Invalid` without errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use purchase_rail::validation::Validation;
    ///
    /// let v = Validation::<&str, i32>::invalid("first").zip(Validation::<&str, i32>::invalid("second"));
    /// assert_eq!(v.into_first_error(), Some(Err("first")));
    /// ```
    #[must_use]
    #[inline]
    pub fn into_first_error(self) -> Option<Result<A, E>> {
        match self {
            Self::Valid(value) => Some(Ok(value)),
            Self::Invalid(errors) => errors.into_iter().next().map(Err),
        }
    }

    /// Iterates over the accumulated errors; empty for a valid value.
    #[inline]
    pub fn iter_errors(&self) -> core::slice::Iter<'_, E> {
        match self {
            Self::Valid(_) => [].iter(),
            Self::Invalid(errors) => errors.iter(),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<ErrorVec<E>> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(errors) => Some(errors),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }
}
