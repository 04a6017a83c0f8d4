use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Tuple of optional slots built from a sequence by infallible conversion.
pub trait Unpack: Sized {
    fn unpack_from<S: AsRef<str>>(seq: &[S]) -> Self;
}

/// Tuple of optional slots built from a sequence with [`FromStr`].
pub trait Parse: Sized {
    fn parse_from<S: AsRef<str>>(seq: &[S]) -> Result<Self>;
}

/// Tuple of mutable slots overwritten in place.
pub trait Fill {
    /// Overwrites as many leading slots as the sequence has elements and
    /// returns how many were written.
    fn fill_from<S: AsRef<str>>(self, seq: &[S]) -> usize;
}

fn text<S: AsRef<str>>(s: &S) -> &str {
    s.as_ref()
}

fn parse_at<T, S>(seq: &[S], index: usize) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
    S: AsRef<str>,
{
    seq.get(index)
        .map(|s| {
            let value = text(s);
            value.parse::<T>().map_err(|e| Error::Parse {
                index,
                value: value.to_owned(),
                reason: e.to_string(),
            })
        })
        .transpose()
}

macro_rules! tuple_impls {
    ($( ($($idx:tt $T:ident),+) )+) => {$(
        impl<$($T),+> Unpack for ($(Option<$T>,)+)
        where
            $($T: for<'a> From<&'a str>),+
        {
            fn unpack_from<S: AsRef<str>>(seq: &[S]) -> Self {
                ($(seq.get($idx).map(|s| $T::from(text(s))),)+)
            }
        }

        impl<$($T),+> Parse for ($(Option<$T>,)+)
        where
            $($T: FromStr, <$T as FromStr>::Err: fmt::Display),+
        {
            fn parse_from<S: AsRef<str>>(seq: &[S]) -> Result<Self> {
                Ok(($(parse_at::<$T, S>(seq, $idx)?,)+))
            }
        }

        impl<'s, $($T),+> Fill for ($(&'s mut $T,)+)
        where
            $($T: for<'a> From<&'a str>),+
        {
            fn fill_from<S: AsRef<str>>(self, seq: &[S]) -> usize {
                let mut filled = 0;
                $(
                    if let Some(s) = seq.get($idx) {
                        *self.$idx = $T::from(text(s));
                        filled += 1;
                    }
                )+
                filled
            }
        }
    )+};
}

tuple_impls! {
    (0 A)
    (0 A, 1 B)
    (0 A, 1 B, 2 C)
    (0 A, 1 B, 2 C, 3 D)
    (0 A, 1 B, 2 C, 3 D, 4 E)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G)
    (0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H)
}

/// Unpacks the leading elements of `seq` into a tuple of options.
///
/// Slot `i` is `None` when the sequence has no element `i`.
///
/// ```
/// let (name, mode, extra): (Option<String>, Option<String>, Option<String>) =
///     sirikali_unpack::unpack(&["vault", "rw"]);
///
/// assert_eq!(name.as_deref(), Some("vault"));
/// assert_eq!(mode.as_deref(), Some("rw"));
/// assert_eq!(extra, None);
/// ```
pub fn unpack<U, S>(seq: &[S]) -> U
where
    U: Unpack,
    S: AsRef<str>,
{
    U::unpack_from(seq)
}

/// Like [`unpack`], converting each present element with [`FromStr`].
///
/// The first element that fails to parse stops the walk.
pub fn parse<U, S>(seq: &[S]) -> Result<U>
where
    U: Parse,
    S: AsRef<str>,
{
    U::parse_from(seq)
}

/// Overwrites the leading `slots` from `seq`, leaving slots past the end of
/// the sequence untouched.
pub fn fill<F, S>(seq: &[S], slots: F) -> usize
where
    F: Fill,
    S: AsRef<str>,
{
    slots.fill_from(seq)
}
