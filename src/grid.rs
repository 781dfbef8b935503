//! A runtime-sized square bit grid packed into unsigned words.
//!
//! The type is `no_std` friendly and generic over its word type `T`.
//! An n×n grid is stored as `ceil(n*n / bits(T))` words; board occupancy
//! and fired-shot masks are both represented this way.

use alloc::vec;
use alloc::vec::Vec;
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is out of bounds [0..n).
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "OutOfBounds: row={}, col={}", row, col)
            }
        }
    }
}

/// An n×n bit grid stored in words of unsigned integer type `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    n: usize,
    words: Vec<T>,
}

/// Word type used throughout the crate.
pub type Grid = BitGrid<u64>;

impl<T> BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits per storage word.
    const WORD_BITS: usize = mem::size_of::<T>() * 8;

    /// Create an empty n×n grid (all bits cleared).
    pub fn new(n: usize) -> Self {
        let words = (n * n + Self::WORD_BITS - 1) / Self::WORD_BITS;
        BitGrid {
            n,
            words: vec![T::zero(); words],
        }
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Returns the number of set bits (occupied cells).
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_zero())
    }

    /// Gets the bit at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let (word, bit) = self.locate(row, col)?;
        Ok(((self.words[word] >> bit) & T::one()) != T::zero())
    }

    /// Sets the bit at (row, col) to 1.
    pub fn set(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] = self.words[word] | (T::one() << bit);
        Ok(())
    }

    /// Clears the bit at (row, col) to 0.
    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let (word, bit) = self.locate(row, col)?;
        self.words[word] = self.words[word] & !(T::one() << bit);
        Ok(())
    }

    /// Returns true if any bit is set in both grids.
    ///
    /// Both grids must have the same side length.
    pub fn overlaps(&self, other: &Self) -> bool {
        debug_assert_eq!(self.n, other.n);
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| !(*a & *b).is_zero())
    }

    /// Sets every bit that is set in `other`.
    ///
    /// Both grids must have the same side length.
    pub fn union_with(&mut self, other: &Self) {
        debug_assert_eq!(self.n, other.n);
        for (a, b) in self.words.iter_mut().zip(other.words.iter()) {
            *a = *a | *b;
        }
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> Result<(usize, usize), GridError> {
        if row >= self.n || col >= self.n {
            return Err(GridError::OutOfBounds { row, col });
        }
        let idx = row * self.n + col;
        Ok((idx / Self::WORD_BITS, idx % Self::WORD_BITS))
    }

    /// Iterator over the set bits of the grid, in row-major order.
    #[inline]
    pub fn iter_set_bits(&self) -> SetBits<'_, T> {
        SetBits { grid: self, idx: 0 }
    }
}

impl<T> fmt::Debug for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "BitGrid<{}> ({}x{}):",
            any::type_name::<T>(),
            self.n,
            self.n
        )?;
        fmt::Display::fmt(self, f)
    }
}

impl<T> fmt::Display for BitGrid<T>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.n {
            for c in 0..self.n {
                let bit = if self.get(r, c).unwrap_or(false) {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            if r + 1 < self.n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Iterator over the set bits of a grid.
#[derive(Clone, Copy)]
pub struct SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    grid: &'a BitGrid<T>,
    idx: usize,
}

impl<'a, T> Iterator for SetBits<'a, T>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.grid.n;
        while self.idx < n * n {
            let idx = self.idx;
            self.idx += 1;
            let word = idx / BitGrid::<T>::WORD_BITS;
            let bit = idx % BitGrid::<T>::WORD_BITS;
            if ((self.grid.words[word] >> bit) & T::one()) != T::zero() {
                return Some((idx / n, idx % n));
            }
        }
        None
    }
}
